#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz version string parsing.
///
/// Any accepted input must print back to a string that parses to the same
/// version.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(version) = api_compat::version::ApiVersion::parse(s) {
            let reparsed = api_compat::version::ApiVersion::parse(&version.to_string());
            assert_eq!(reparsed.ok(), Some(version));
        }
    }
});
