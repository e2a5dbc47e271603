#![no_main]

use libfuzzer_sys::fuzz_target;
use nchat_skin::builtin;
use nchat_types::merge::merge_overrides;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data)
        && let Ok(skin) = builtin::skin("nchat")
    {
        // Arbitrary overrides either merge or error; they never panic.
        let _ = merge_overrides(&skin, &value);
    }
});
