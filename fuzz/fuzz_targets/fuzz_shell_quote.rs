#![no_main]

use libfuzzer_sys::fuzz_target;
use simple_sync::domain::services::shell_quote;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let quoted = shell_quote(s);
        assert!(quoted.starts_with('\'') && quoted.ends_with('\''));
        // Each embedded quote becomes a four character escape
        let quotes = s.matches('\'').count();
        assert_eq!(quoted.len(), s.len() + 2 + quotes * 3);
    }
});
