/// Shape checking for bracketed IP literals (RFC 3986 `IP-literal`).
///
/// Accepted forms, between `[` and `]`:
/// - `IPvFuture`: `v` 1*HEXDIG `.` 1*( unreserved / sub-delims / `:` )
/// - IPv6: 1*( HEXDIG / `:` ), optionally ending in a dotted quad of four
///   1-3 digit octets when the last group is decimal (`::ffff:192.0.2.1`)
///
/// Group counts and `::` placement are not checked; the literal is only
/// required to have the right shape. Nothing is decoded.
use crate::character_sets::{is_digit, is_hex, is_ip_future_byte};

/// Position inside an IP literal, after the opening `[`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpLiteral {
    /// Just after `[`
    Open,
    /// Hex groups and colons. `decimal_run` is the number of digits in the
    /// current group, or `None` once the group holds a non-decimal hex digit.
    Address { decimal_run: Option<u8> },
    /// Embedded IPv4: separators seen so far and digits in the current octet
    DottedQuad { dots: u8, digits: u8 },
    /// After `v`: whether at least one version digit was seen
    FutureVersion { has_digits: bool },
    /// After `v<hex>.`: whether at least one address byte was seen
    FutureAddress { has_bytes: bool },
}

/// Result of feeding one byte to an [`IpLiteral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue(IpLiteral),
    /// The byte was the closing `]` of a well-formed literal
    Close,
    Reject,
}

impl IpLiteral {
    pub fn step(self, b: u8) -> Step {
        match self {
            Self::Open => match b {
                b'v' | b'V' => Step::Continue(Self::FutureVersion { has_digits: false }),
                b']' => Step::Reject,
                _ => Self::Address {
                    decimal_run: Some(0),
                }
                .step(b),
            },
            Self::Address { decimal_run } => match b {
                b':' => Step::Continue(Self::Address {
                    decimal_run: Some(0),
                }),
                b']' => Step::Close,
                b'.' => match decimal_run {
                    Some(1..=3) => Step::Continue(Self::DottedQuad { dots: 1, digits: 0 }),
                    _ => Step::Reject,
                },
                _ if is_digit(b) => Step::Continue(Self::Address {
                    decimal_run: decimal_run.map(|n| n.saturating_add(1)),
                }),
                _ if is_hex(b) => Step::Continue(Self::Address { decimal_run: None }),
                _ => Step::Reject,
            },
            Self::DottedQuad { dots, digits } => match b {
                b'.' if digits > 0 && dots < 3 => Step::Continue(Self::DottedQuad {
                    dots: dots + 1,
                    digits: 0,
                }),
                b']' if digits > 0 && dots == 3 => Step::Close,
                _ if is_digit(b) && digits < 3 => Step::Continue(Self::DottedQuad {
                    dots,
                    digits: digits + 1,
                }),
                _ => Step::Reject,
            },
            Self::FutureVersion { has_digits } => match b {
                b'.' if has_digits => Step::Continue(Self::FutureAddress { has_bytes: false }),
                _ if is_hex(b) => Step::Continue(Self::FutureVersion { has_digits: true }),
                _ => Step::Reject,
            },
            Self::FutureAddress { has_bytes } => match b {
                b']' if has_bytes => Step::Close,
                _ if is_ip_future_byte(b) => {
                    Step::Continue(Self::FutureAddress { has_bytes: true })
                }
                _ => Step::Reject,
            },
        }
    }
}
