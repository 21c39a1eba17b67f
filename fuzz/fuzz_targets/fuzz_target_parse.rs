#![no_main]

use libfuzzer_sys::fuzz_target;
use simple_sync::{RemoteTarget, TargetRegistry};

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let parsed = RemoteTarget::parse(raw);
        assert_eq!(parsed.is_some(), TargetRegistry::validate(raw).is_ok());

        if let Some(target) = parsed {
            if target.is_remote() {
                assert!(target.remote_path().is_some_and(|p| !p.is_empty()));
            }
            assert_eq!(target.raw(), raw);
        }
    }
});
