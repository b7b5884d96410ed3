#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    assert_eq!(fasturl::can_parse(input), fasturl::parse(input).is_ok());
});
