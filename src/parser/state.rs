use crate::ipv6::IpLiteral;

/// Scanner states
///
/// Several states exist only to defer a decision until a later byte settles
/// it: `SchemeOrHost` (is the leading word a scheme or a host?),
/// `SchemeColon` and `SchemeColonDigits` (is `word:123` a scheme followed by
/// an opaque host, or a bare `host:port`?).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Before the first byte
    Start,
    /// Leading run that could still be a scheme or a bare host
    SchemeOrHost,
    /// Right after `word:`
    SchemeColon,
    /// `word:` followed by digits only
    SchemeColonDigits,
    /// `scheme:/`, waiting to see whether a second `/` opens an authority
    SchemeColonSlash,
    /// Input started with `/`
    LeadingSlash,
    /// Where a host begins: after `//`, after `@`, or after a scheme colon
    HostStart,
    /// Inside a reg-name host
    Host,
    /// Inside a percent escape; `remaining` hex digits are still expected
    Percent { resume: Resume, remaining: u8 },
    /// After a host colon: a port, or a password if an `@` follows
    Port,
    /// Between `[` and `]`
    IpLiteral(IpLiteral),
    /// Right after the closing `]`
    IpLiteralClosed,
    /// Path state
    Path,
    /// Query state
    Query,
    /// Fragment state
    Fragment,
}

/// Where to go once a percent escape is complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    Host,
    Port,
}

impl Resume {
    pub const fn state(self) -> State {
        match self {
            Self::Host => State::Host,
            Self::Port => State::Port,
        }
    }
}

impl State {
    /// Percent escape that returns to `resume` after two hex digits
    pub const fn percent(resume: Resume) -> Self {
        Self::Percent {
            resume,
            remaining: 2,
        }
    }
}
