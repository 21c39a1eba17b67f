//! Property tests for command construction.

use std::path::PathBuf;
use std::process::Command;

use proptest::prelude::*;

use simple_sync::domain::services::shell_quote;
use simple_sync::domain::value_objects::ResolvedFile;
use simple_sync::{CommandBuilder, RemoteTarget, SyncRequest};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,11}").unwrap()
}

fn target_raw() -> impl Strategy<Value = String> {
    prop_oneof![
        (segment(), proptest::collection::vec(segment(), 1..=3), any::<bool>()).prop_map(
            |(host, path, slash)| format!(
                "{}:/{}{}",
                host,
                path.join("/"),
                if slash { "/" } else { "" }
            )
        ),
        (proptest::collection::vec(segment(), 1..=3), any::<bool>())
            .prop_map(|(path, slash)| format!("/{}{}", path.join("/"), if slash { "/" } else { "" })),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a file destination is `<target>/<workspace>/<relative>`
    /// with no doubled separators.
    #[test]
    fn property_file_destination_has_no_double_slash(
        raw in target_raw(),
        workspace in segment(),
        rel in proptest::collection::vec(segment(), 1..=4),
    ) {
        let root = PathBuf::from(format!("/code/{}", workspace));
        let relative = rel.join("/");
        let req = SyncRequest::for_file(
            root.join(&relative),
            ResolvedFile {
                workspace_root: root,
                workspace_name: workspace.clone(),
                relative_path: relative.clone(),
            },
            RemoteTarget::parse(&raw).unwrap(),
            false,
        );

        let dest = CommandBuilder::file_destination(&req);
        let after_scheme = dest.split_once(':').map(|(_, p)| p).unwrap_or(&dest);
        prop_assert!(!after_scheme.contains("//"), "{}", dest);
        prop_assert!(dest.ends_with(&format!("/{}/{}", workspace, relative)), "{}", dest);
        prop_assert!(dest.starts_with(raw.trim_end_matches('/')), "{}", dest);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the shell reads a quoted string back verbatim.
    #[cfg(unix)]
    #[test]
    fn property_shell_quote_round_trips_through_sh(s in "[ -~]{0,32}") {
        let output = Command::new("sh")
            .arg("-c")
            .arg(format!("printf '%s' {}", shell_quote(&s)))
            .output()
            .unwrap();
        prop_assert_eq!(String::from_utf8_lossy(&output.stdout).into_owned(), s);
    }
}
