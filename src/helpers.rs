use crate::character_sets::is_printable;

/// Length of the leading printable run of `bytes`, ending no later than
/// `delimiter_pos`.
fn printable_prefix(bytes: &[u8], delimiter_pos: Option<usize>) -> usize {
    let end = delimiter_pos.unwrap_or(bytes.len());
    bytes[..end]
        .iter()
        .position(|&b| !is_printable(b))
        .unwrap_or(end)
}

/// Length of the run of path bytes at the start of `bytes`.
///
/// The run stops before the first `?` or `#` (found with SIMD-accelerated
/// memchr), or before the first non-printable byte, whichever comes first.
/// The byte after the run, if any, is left for the state machine.
pub fn path_run(bytes: &[u8]) -> usize {
    printable_prefix(bytes, memchr::memchr2(b'?', b'#', bytes))
}

/// Length of the run of query bytes at the start of `bytes` (stops before `#`).
pub fn query_run(bytes: &[u8]) -> usize {
    printable_prefix(bytes, memchr::memchr(b'#', bytes))
}

/// Length of the run of fragment bytes at the start of `bytes`.
pub fn fragment_run(bytes: &[u8]) -> usize {
    printable_prefix(bytes, None)
}
