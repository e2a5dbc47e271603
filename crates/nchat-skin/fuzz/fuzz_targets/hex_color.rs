#![no_main]

use libfuzzer_sys::fuzz_target;
use nchat_types::color::{contrast_ratio, parse_hex_color, with_alpha_hex};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Some(c) = parse_hex_color(input) {
            assert_eq!(parse_hex_color(&c.to_hex()), Some(c));
        }
        if let Some(r) = contrast_ratio(input, "#FFFFFF") {
            assert!((1.0..=21.0).contains(&r));
        }
        let _ = with_alpha_hex(input, 0.5);
    }
});
