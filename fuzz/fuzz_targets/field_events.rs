#![no_main]

use field_core::NumericField;
use libfuzzer_sys::fuzz_target;
use numeric::{Constraints, RawValue, normalize, validate};

// Drives a field through an arbitrary event sequence: one op byte, one
// length byte, then that many payload bytes (lossily decoded). No sequence
// may panic, and after every event the verdict must agree with a fresh
// validation of the canonical value whenever no composition is active.
fuzz_target!(|data: &[u8]| {
    let constraints = Constraints {
        required: true,
        decimal_places: Some(2),
        min: Some(-1000.0),
        max: Some(1000.0),
        ..Constraints::default()
    };
    let mut field = NumericField::new(RawValue::Absent, constraints);

    let mut rest = data;
    while let Some((&op, tail)) = rest.split_first() {
        let len = tail.first().copied().unwrap_or(0) as usize;
        let tail = tail.get(1..).unwrap_or(&[]);
        let take = len.min(tail.len());
        let text = String::from_utf8_lossy(&tail[..take]);
        rest = &tail[take..];

        match op % 6 {
            0 => field.composition_start(),
            1 => {
                let _ = field.composition_end(&text);
            }
            2 => {
                let _ = field.raw_change(&text);
            }
            3 => {
                let _ = field.blur();
            }
            4 => field.sync_value(RawValue::Text(&text)),
            _ => field.sync_value(RawValue::Absent),
        }

        let _ = field.display_text();
        if !field.is_composing() {
            assert_eq!(
                field.verdict(),
                validate(field.canonical(), &field.constraints()),
                "stored verdict diverged from the canonical value"
            );
            assert_eq!(
                normalize(field.canonical()),
                field.canonical(),
                "canonical value must be a normalization fixed point"
            );
        }
    }
});
