#![no_main]

use libfuzzer_sys::fuzz_target;
use numeric::normalize;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let once = normalize(text);
    let twice = normalize(&once);
    assert_eq!(once, twice, "normalize must be idempotent");

    // Canonical candidates never retain grouping separators or full-width
    // digits/punctuation.
    assert!(!once.contains(','));
    assert!(!once.contains('，'));
    assert!(!once.contains('．'));
    assert!(!once.contains('－'));
    assert!(!once.chars().any(|c| ('０'..='９').contains(&c)));
});
