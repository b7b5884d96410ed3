/// Byte classes used by the scanner.
///
/// Every class is a bit in a single 256-entry table, so a class test is one
/// load and one mask. Bytes outside `0x20..=0x7E` belong to no class.
const ALPHA: u8 = 1 << 0;
const DIGIT: u8 = 1 << 1;
const HEX: u8 = 1 << 2;
const SCHEME: u8 = 1 << 3;
const HOST: u8 = 1 << 4;
const USERINFO: u8 = 1 << 5;
const IP_FUTURE: u8 = 1 << 6;
const PRINTABLE: u8 = 1 << 7;

/// RFC 3986 sub-delims
const SUB_DELIMS: &[u8] = b"!$&'()*+,;=";

/// Unreserved punctuation (letters and digits are added separately)
const UNRESERVED_MARKS: &[u8] = b"-._~";

/// Printable bytes that can never appear in a port or password
const USERINFO_EXCLUDED: &[u8] = b"<>@/?#%";

const fn set_range(table: &mut [u8; 256], from: u8, to: u8, class: u8) {
    let mut i = from as usize;
    while i <= to as usize {
        table[i] |= class;
        i += 1;
    }
}

const fn set_bytes(table: &mut [u8; 256], bytes: &[u8], class: u8) {
    let mut i = 0;
    while i < bytes.len() {
        table[bytes[i] as usize] |= class;
        i += 1;
    }
}

const fn clear_bytes(table: &mut [u8; 256], bytes: &[u8], class: u8) {
    let mut i = 0;
    while i < bytes.len() {
        table[bytes[i] as usize] &= !class;
        i += 1;
    }
}

const CHAR_CLASS_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    set_range(&mut table, 0x20, 0x7E, PRINTABLE);

    let letters = ALPHA | SCHEME | HOST | USERINFO | IP_FUTURE;
    set_range(&mut table, b'a', b'z', letters);
    set_range(&mut table, b'A', b'Z', letters);
    set_range(&mut table, b'0', b'9', DIGIT | HEX | SCHEME | HOST | USERINFO | IP_FUTURE);
    set_range(&mut table, b'a', b'f', HEX);
    set_range(&mut table, b'A', b'F', HEX);

    set_bytes(&mut table, b"+-.", SCHEME);
    set_bytes(&mut table, UNRESERVED_MARKS, HOST | IP_FUTURE);
    set_bytes(&mut table, SUB_DELIMS, HOST | IP_FUTURE);
    table[b':' as usize] |= IP_FUTURE;

    // After a host colon anything printable goes, except a handful of
    // bytes that always end or invalidate the run.
    set_range(&mut table, 0x20, 0x7E, USERINFO);
    clear_bytes(&mut table, USERINFO_EXCLUDED, USERINFO);

    table
};

#[inline]
const fn has(b: u8, class: u8) -> bool {
    CHAR_CLASS_TABLE[b as usize] & class != 0
}

/// `A-Z` or `a-z`
#[inline]
pub const fn is_alpha(b: u8) -> bool {
    has(b, ALPHA)
}

/// `0-9`
#[inline]
pub const fn is_digit(b: u8) -> bool {
    has(b, DIGIT)
}

/// `0-9`, `A-F`, `a-f`
#[inline]
pub const fn is_hex(b: u8) -> bool {
    has(b, HEX)
}

/// Bytes allowed after the first letter of a scheme: letters, digits, `+ - .`
///
/// A leading word may also hold the other host bytes, but then it can only
/// be a bare host.
#[inline]
pub const fn is_scheme_byte(b: u8) -> bool {
    has(b, SCHEME)
}

/// RFC 3986 reg-name bytes (unreserved and sub-delims). `%` is handled by the
/// scanner because it starts a two-digit escape.
#[inline]
pub const fn is_host_byte(b: u8) -> bool {
    has(b, HOST)
}

/// Bytes of the run after a host colon, which is a port or, when an `@`
/// follows, a password. Includes `:` and `\`.
#[inline]
pub const fn is_userinfo_byte(b: u8) -> bool {
    has(b, USERINFO)
}

/// Bytes allowed in the address part of an IPvFuture literal
#[inline]
pub const fn is_ip_future_byte(b: u8) -> bool {
    has(b, IP_FUTURE)
}

/// `0x20..=0x7E`, the only bytes accepted inside path, query and fragment
#[inline]
pub const fn is_printable(b: u8) -> bool {
    has(b, PRINTABLE)
}
