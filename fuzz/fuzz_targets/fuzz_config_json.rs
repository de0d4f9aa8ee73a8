//! Fuzz target: JSON configuration loader
//!
//! Drives `LampConfig::from_json` with arbitrary text and verifies:
//! - No panics under arbitrary input
//! - Anything accepted also passes `validate()` and has a log filter
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use lampctl::config::LampConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = LampConfig::from_json(text) {
        assert!(config.validate().is_ok());
        assert!(config.log_filter().is_some());
        assert!(config.thresholds.lower < config.thresholds.upper);
    }
});
