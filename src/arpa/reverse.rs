use std::fmt;
use std::str::FromStr;

use super::error::MalformedInputError;

/// Full address when no CIDR prefix is given
const DEFAULT_PREFIX_LENGTH: u8 = 128;

/// A validated, fully-expanded IPv6 address: exactly eight 16-bit groups.
///
/// Parsing accepts standard colon-separated notation with at most one `::`
/// compression marker and rejects anything else up front, so every value of
/// this type is already in canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedAddress {
    groups: [u16; 8],
}

impl ParsedAddress {
    /// Builds the `ip6.arpa` reverse name for the first `prefix_len` bits.
    ///
    /// A prefix length of 0 yields the zone root `ip6.arpa`.
    pub fn ptr_name(&self, prefix_len: u8) -> String {
        // Expanded hex representation without colons, 8 groups × 4 chars each
        let mut expanded = String::with_capacity(32);
        for group in self.groups {
            use std::fmt::Write;
            let _ = write!(expanded, "{group:04x}");
        }

        // One hex character per 4 bits of prefix
        let nibble_count = usize::from(prefix_len) / 4;
        let reversed = expanded[..nibble_count]
            .chars()
            .rev()
            .fold(String::new(), |mut acc, c| {
                acc.push(c);
                acc.push('.');
                acc
            });

        format!("{reversed}ip6.arpa")
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expanded = self
            .groups
            .iter()
            .map(|group| format!("{group:04x}"))
            .collect::<Vec<_>>()
            .join(":");
        write!(f, "{expanded}")
    }
}

impl FromStr for ParsedAddress {
    type Err = MalformedInputError;

    fn from_str(address: &str) -> Result<Self, Self::Err> {
        if address.is_empty() {
            return Err(MalformedInputError::EmptyAddress);
        }

        let mut groups = [0u16; 8];

        if let Some((head, tail)) = address.split_once("::") {
            if tail.contains("::") {
                return Err(MalformedInputError::MultipleCompressionMarkers);
            }

            let head_groups = parse_groups(head)?;
            let tail_groups = parse_groups(tail)?;

            // The marker must stand in for at least one zero group
            let present = head_groups.len() + tail_groups.len();
            if present >= 8 {
                return Err(MalformedInputError::GroupCount(present));
            }

            for (index, group) in head_groups.iter().enumerate() {
                groups[index] = *group;
            }
            for (index, group) in tail_groups.iter().enumerate() {
                groups[8 - tail_groups.len() + index] = *group;
            }
        } else {
            let parsed = parse_groups(address)?;
            if parsed.len() != 8 {
                return Err(MalformedInputError::GroupCount(parsed.len()));
            }
            groups.copy_from_slice(&parsed);
        }

        Ok(Self { groups })
    }
}

fn parse_groups(section: &str) -> Result<Vec<u16>, MalformedInputError> {
    if section.is_empty() {
        return Ok(Vec::new());
    }

    section.split(':').map(parse_group).collect()
}

fn parse_group(group: &str) -> Result<u16, MalformedInputError> {
    if group.is_empty() {
        return Err(MalformedInputError::EmptyGroup);
    }
    if group.len() > 4 || !group.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(MalformedInputError::InvalidGroup(group.to_string()));
    }

    u16::from_str_radix(group, 16).map_err(|_| MalformedInputError::InvalidGroup(group.to_string()))
}

fn parse_prefix(prefix: &str) -> Result<u8, MalformedInputError> {
    let prefix_len: u16 = prefix
        .parse()
        .map_err(|_| MalformedInputError::InvalidPrefix(prefix.to_string()))?;

    if prefix_len > 128 {
        return Err(MalformedInputError::PrefixOutOfRange(prefix_len));
    }

    let prefix_len = prefix_len as u8;
    if prefix_len % 4 != 0 {
        return Err(MalformedInputError::PrefixNotNibbleAligned(prefix_len));
    }

    Ok(prefix_len)
}

/// Splits `address[/prefix]` into a parsed address and a prefix length.
/// The prefix length defaults to 128 when absent.
pub fn parse_target(input: &str) -> Result<(ParsedAddress, u8), MalformedInputError> {
    let (address, prefix_len) = match input.split_once('/') {
        Some((address, prefix)) => (address, parse_prefix(prefix)?),
        None => (input, DEFAULT_PREFIX_LENGTH),
    };

    let address = address.parse()?;
    Ok((address, prefix_len))
}

/// Converts an `address[/prefix]` string into its `ip6.arpa` reverse name
pub fn reverse_name(input: &str) -> Result<String, MalformedInputError> {
    let (address, prefix_len) = parse_target(input)?;
    Ok(address.ptr_name(prefix_len))
}
