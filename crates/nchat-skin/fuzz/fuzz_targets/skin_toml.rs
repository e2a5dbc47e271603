#![no_main]

use libfuzzer_sys::fuzz_target;
use nchat_skin::pack::SkinPack;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Same text for every pack file; parsing must never panic.
        let _result = SkinPack::from_toml("fuzz", input, input, input, input);
    }
});
