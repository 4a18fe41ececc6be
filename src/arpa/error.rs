use thiserror::Error;

/// Reasons an `address[/prefix]` string cannot be turned into a reverse name
#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MalformedInputError {
    #[error("Empty address")]
    EmptyAddress,
    #[error("Multiple '::' compression markers")]
    MultipleCompressionMarkers,
    #[error("Empty group in address")]
    EmptyGroup,
    #[error("Invalid group '{0}'")]
    InvalidGroup(String),
    #[error("Address expands to {0} groups, expected 8")]
    GroupCount(usize),
    #[error("Invalid prefix length '{0}'")]
    InvalidPrefix(String),
    #[error("Prefix length {0} out of range for IPv6")]
    PrefixOutOfRange(u16),
    #[error("Prefix length {0} is not a multiple of 4")]
    PrefixNotNibbleAligned(u8),
}
