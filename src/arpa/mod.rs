pub mod error;
pub mod reverse;
