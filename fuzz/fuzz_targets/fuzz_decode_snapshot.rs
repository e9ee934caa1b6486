#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the snapshot envelope decoder.
///
/// Arbitrary input must either decode or fail with an error; a decoded
/// snapshot must survive an encode/decode cycle and compare as unchanged
/// against itself.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(snapshot) = api_compat::persist::decode(s) {
            if let Ok(encoded) = api_compat::persist::encode(&snapshot) {
                let _ = api_compat::persist::decode(&encoded);
            }
            let tree = api_compat::compare(Some(&snapshot), Some(&snapshot));
            assert_eq!(tree.aggregate(), api_compat::Compatibility::Same);
        }
    }
});
