//! Property tests for remote target parsing.

use proptest::prelude::*;

use simple_sync::{RemoteTarget, TargetRegistry};

fn host() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9@._-]{1,24}").unwrap()
}

fn remote_path() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9~/._ :-]{1,48}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `host:path` splits at the first colon and keeps both halves.
    #[test]
    fn property_host_path_round_trip(host in host(), path in remote_path()) {
        let raw = format!("{}:{}", host, path);
        let target = RemoteTarget::parse(&raw).expect("host:path must parse");

        prop_assert_eq!(target.host(), Some(host.as_str()));
        prop_assert_eq!(target.remote_path(), Some(path.as_str()));
        prop_assert_eq!(target.raw(), raw.as_str());
        prop_assert_eq!(target.to_string(), raw);
    }

    /// PROPERTY: a host is never present without a non-empty path.
    #[test]
    fn property_host_implies_path(raw in "(?s).{0,64}") {
        if let Some(target) = RemoteTarget::parse(&raw) {
            if target.host().is_some() {
                prop_assert!(target.remote_path().is_some_and(|p| !p.is_empty()));
            }
        }
    }

    /// PROPERTY: strings without a colon are local targets, unless blank.
    #[test]
    fn property_colonless_is_local(raw in "[A-Za-z0-9/._ ~-]{0,48}") {
        match RemoteTarget::parse(&raw) {
            Some(target) => {
                prop_assert!(!target.is_remote());
                prop_assert_eq!(target.directory(), raw.as_str());
            }
            None => prop_assert!(raw.trim().is_empty()),
        }
    }

    /// PROPERTY: validation agrees with parsing.
    #[test]
    fn property_validate_matches_parse(raw in "(?s).{0,64}") {
        prop_assert_eq!(
            TargetRegistry::validate(&raw).is_ok(),
            RemoteTarget::parse(&raw).is_some()
        );
    }

    /// PROPERTY: a single valid configured target is always the default.
    #[test]
    fn property_single_target_is_default(host in host(), path in remote_path()) {
        let raw = format!("{}:{}", host, path);
        let registry = TargetRegistry::new(vec![raw.clone()]);
        let resolved = registry.resolve_default().expect("single target resolves");
        prop_assert_eq!(resolved.raw(), raw.as_str());
    }

    /// PROPERTY: two or more targets never resolve without a choice.
    #[test]
    fn property_plural_targets_are_ambiguous(
        targets in proptest::collection::vec(host(), 2..6)
    ) {
        let registry = TargetRegistry::new(targets);
        prop_assert!(registry.resolve_default().is_err());
    }
}
