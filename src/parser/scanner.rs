use super::assembler::Assembler;
use super::state::{Resume, State};
use crate::character_sets::{
    is_alpha, is_digit, is_hex, is_host_byte, is_printable, is_scheme_byte, is_userinfo_byte,
};
use crate::error::{ParseError, Result};
use crate::helpers::{fragment_run, path_run, query_run};
use crate::ipv6::{IpLiteral, Step};
use crate::url_components::UrlComponents;

/// Bytes that end a host or port and start a path, query or fragment
#[inline]
const fn is_delimiter(b: u8) -> bool {
    matches!(b, b'/' | b'\\' | b'?' | b'#')
}

/// Enter the field that delimiter `b` at offset `p` opens.
fn enter_tail(asm: &mut Assembler, p: usize, b: u8) -> Option<State> {
    match b {
        b'/' | b'\\' => {
            asm.set_mark(p);
            Some(State::Path)
        }
        b'?' => {
            asm.set_mark(p + 1);
            Some(State::Query)
        }
        b'#' => {
            asm.set_mark(p + 1);
            Some(State::Fragment)
        }
        _ => None,
    }
}

/// Commit the host ending at `p`, then follow `:` into a port or a
/// delimiter into its field.
fn end_host(asm: &mut Assembler, p: usize, b: u8) -> Option<State> {
    asm.commit_host(p);
    if b == b':' {
        asm.set_port_mark(p + 1);
        Some(State::Port)
    } else {
        enter_tail(asm, p, b)
    }
}

fn end_port(asm: &mut Assembler, p: usize, b: u8) -> Option<State> {
    asm.commit_port(p);
    enter_tail(asm, p, b)
}

/// The leading word turned out to be a scheme: it ends at the colon just
/// before the port mark.
fn commit_scheme(asm: &mut Assembler) {
    asm.commit_protocol(asm.port_mark().saturating_sub(1));
}

/// Consume byte `b` at offset `p` in `state`. `None` is the error state.
///
/// Some arms hand the byte to another state instead of consuming it
/// themselves ("handled as"); this never goes more than a few levels deep.
fn step(asm: &mut Assembler, state: State, p: usize, b: u8) -> Option<State> {
    match state {
        State::Start => match b {
            _ if is_alpha(b) => Some(State::SchemeOrHost),
            b'/' => {
                asm.set_mark(p);
                Some(State::LeadingSlash)
            }
            _ => step(asm, State::HostStart, p, b),
        },

        State::SchemeOrHost => match b {
            _ if is_scheme_byte(b) => Some(State::SchemeOrHost),
            b':' => {
                // Until proven otherwise the word is a host
                asm.commit_host(p);
                asm.set_port_mark(p + 1);
                Some(State::SchemeColon)
            }
            // Other host bytes (`_`, `~`, `!`, ...) leave a bare host that can
            // no longer be a scheme
            _ => step(asm, State::Host, p, b),
        },

        State::SchemeColon => match b {
            _ if is_digit(b) => Some(State::SchemeColonDigits),
            b'/' => {
                commit_scheme(asm);
                asm.set_mark(p);
                Some(State::SchemeColonSlash)
            }
            b'\\' => {
                commit_scheme(asm);
                asm.set_mark(p);
                Some(State::Path)
            }
            _ => {
                commit_scheme(asm);
                asm.set_host_mark(p);
                step(asm, State::HostStart, p, b)
            }
        },

        State::SchemeColonDigits => match b {
            _ if is_digit(b) => Some(State::SchemeColonDigits),
            // `host:port` followed by a path, query or fragment
            _ if is_delimiter(b) => end_port(asm, p, b),
            _ => {
                // `scheme:` followed by a host that starts with digits
                commit_scheme(asm);
                asm.set_host_mark(asm.port_mark());
                step(asm, State::Host, p, b)
            }
        },

        State::SchemeColonSlash | State::LeadingSlash => match b {
            b'/' => {
                asm.set_host_mark(p + 1);
                Some(State::HostStart)
            }
            _ => step(asm, State::Path, p, b),
        },

        State::HostStart => match b {
            b'[' => Some(State::IpLiteral(IpLiteral::Open)),
            _ => step(asm, State::Host, p, b),
        },

        State::Host => match b {
            _ if is_host_byte(b) => Some(State::Host),
            b'%' => Some(State::percent(Resume::Host)),
            b'@' => {
                asm.set_host_mark(p + 1);
                Some(State::HostStart)
            }
            _ if b == b':' || is_delimiter(b) => end_host(asm, p, b),
            _ => None,
        },

        State::Percent { resume, remaining } => {
            if !is_hex(b) {
                None
            } else if remaining <= 1 {
                Some(resume.state())
            } else {
                Some(State::Percent {
                    resume,
                    remaining: remaining - 1,
                })
            }
        }

        State::Port => match b {
            _ if is_delimiter(b) => end_port(asm, p, b),
            // The "port" was a password
            b'@' => {
                asm.set_host_mark(p + 1);
                Some(State::HostStart)
            }
            b'%' => Some(State::percent(Resume::Port)),
            _ if is_userinfo_byte(b) => Some(State::Port),
            _ => None,
        },

        State::IpLiteral(literal) => match literal.step(b) {
            Step::Continue(next) => Some(State::IpLiteral(next)),
            Step::Close => Some(State::IpLiteralClosed),
            Step::Reject => None,
        },

        State::IpLiteralClosed => {
            if b == b':' || is_delimiter(b) {
                end_host(asm, p, b)
            } else {
                None
            }
        }

        State::Path => match b {
            b'?' => {
                asm.commit_path(p);
                asm.set_mark(p + 1);
                Some(State::Query)
            }
            b'#' => {
                asm.commit_path(p);
                asm.set_mark(p + 1);
                Some(State::Fragment)
            }
            _ if is_printable(b) => Some(State::Path),
            _ => None,
        },

        State::Query => match b {
            b'#' => {
                asm.commit_query(p);
                asm.set_mark(p + 1);
                Some(State::Fragment)
            }
            _ if is_printable(b) => Some(State::Query),
            _ => None,
        },

        State::Fragment => is_printable(b).then_some(State::Fragment),
    }
}

/// Run the commit that the next delimiter would have triggered.
///
/// Returns `false` when the input stopped mid-token (inside a percent escape
/// or an IP literal).
fn finish(asm: &mut Assembler, state: State, end: usize) -> bool {
    match state {
        State::Start => {}
        State::SchemeOrHost | State::HostStart | State::Host | State::IpLiteralClosed => {
            asm.commit_host(end);
        }
        State::SchemeColon => commit_scheme(asm),
        State::SchemeColonSlash | State::LeadingSlash | State::Path => asm.commit_path(end),
        State::SchemeColonDigits | State::Port => asm.commit_port(end),
        State::Query => asm.commit_query(end),
        State::Fragment => asm.commit_fragment(end),
        State::Percent { .. } | State::IpLiteral(_) => return false,
    }
    true
}

#[cold]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn reject(state: State, offset: usize) -> ParseError {
    #[cfg(feature = "tracing")]
    tracing::trace!(offset, ?state, "input rejected");
    ParseError
}

/// Scan `input` once, left to right, and return the offsets of every field.
///
/// # Errors
///
/// Returns [`ParseError`] if a byte has no transition from the current state
/// or if the input ends mid-token.
pub fn scan(input: &[u8]) -> Result<UrlComponents> {
    let mut asm = Assembler::new();
    let mut state = State::Start;
    let mut p = 0;

    while p < input.len() {
        // Past the authority most bytes need no decision; skip them in bulk
        // and only step on the byte that ends the run.
        p += match state {
            State::Path => path_run(&input[p..]),
            State::Query => query_run(&input[p..]),
            State::Fragment => fragment_run(&input[p..]),
            _ => 0,
        };
        let Some(&b) = input.get(p) else {
            break;
        };
        state = match step(&mut asm, state, p, b) {
            Some(next) => next,
            None => return Err(reject(state, p)),
        };
        p += 1;
    }

    if finish(&mut asm, state, input.len()) {
        Ok(asm.finish())
    } else {
        Err(reject(state, input.len()))
    }
}
