#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(url) = fasturl::Url::parse_bytes(data) else {
        return;
    };

    // Only printable ASCII is ever accepted
    assert!(data.iter().all(|b| (0x20..=0x7e).contains(b)));

    let input = url.as_str();
    assert_eq!(input.as_bytes(), data);
    for (name, span) in url.components().iter() {
        assert!(span.start <= span.end && span.end <= input.len(), "{name}: {span:?}");
    }

    // Fields appear in input order and never overlap
    let c = url.components();
    let mut last = 0;
    for span in [c.host, c.port, c.path, c.query, c.fragment] {
        if !span.is_empty() {
            assert!(span.start >= last, "{input:?}");
            last = span.end;
        }
    }

    assert_eq!(fasturl::parse(input), Ok(url));
});
