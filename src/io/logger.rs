use colored::{ColoredString, Colorize};
use std::fmt::Display;

#[derive(PartialEq, Eq)]
pub enum Status {
    Info,
    Success,
    Warning,
    Error,
}

impl Status {
    fn symbol(&self) -> ColoredString {
        match self {
            Self::Info => "~".cyan(),
            Self::Success => "+".green(),
            Self::Warning => "!".yellow(),
            Self::Error => "!".red(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub fn status(status: &Status, message: &impl Display) {
    let prefix = format!("[{status}] ");

    if *status == Status::Error {
        eprintln!("{prefix}{message}");
    } else {
        println!("{prefix}{message}");
    }
}

#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::io::logger::status(&$crate::io::logger::Status::Info, &$message.to_string());
    };
}

#[macro_export]
macro_rules! log_success {
    ($message:expr) => {
        $crate::io::logger::status(&$crate::io::logger::Status::Success, &$message.to_string());
    };
}

#[macro_export]
macro_rules! log_warn {
    ($message:expr) => {
        $crate::io::logger::status(&$crate::io::logger::Status::Warning, &$message.to_string());
    };
}

#[macro_export]
macro_rules! log_error {
    ($message:expr) => {
        $crate::io::logger::status(&$crate::io::logger::Status::Error, &$message.to_string());
    };
}
