//! Property tests for workspace-relative path resolution.

use std::path::PathBuf;

use proptest::prelude::*;

use simple_sync::{PathResolver, WorkspaceFolder};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,11}").unwrap()
}

fn relative() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 1..=5)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: joining the resolved relative path onto the workspace root
    /// gives back the original file.
    #[test]
    fn property_resolve_round_trip(
        root in proptest::collection::vec(segment(), 1..=4),
        rel in relative(),
    ) {
        let root = PathBuf::from(format!("/{}", root.join("/")));
        let file = root.join(rel.join("/"));
        let folders = vec![WorkspaceFolder::new(root.clone())];

        let resolved = PathResolver::resolve_file(&file, &folders).expect("inside workspace");

        prop_assert_eq!(&resolved.workspace_root, &root);
        prop_assert_eq!(resolved.relative_path.clone(), rel.join("/"));
        prop_assert_eq!(root.join(&resolved.relative_path), file);
    }

    /// PROPERTY: with nested workspace folders the innermost one wins,
    /// whatever the order they are listed in.
    #[test]
    fn property_innermost_folder_wins(
        outer in proptest::collection::vec(segment(), 1..=3),
        inner in segment(),
        rel in relative(),
        outer_first in any::<bool>(),
    ) {
        let outer = PathBuf::from(format!("/{}", outer.join("/")));
        let inner_root = outer.join(&inner);
        let file = inner_root.join(rel.join("/"));
        let mut folders = vec![
            WorkspaceFolder::new(outer.clone()),
            WorkspaceFolder::new(inner_root.clone()),
        ];
        if !outer_first {
            folders.reverse();
        }

        let resolved = PathResolver::resolve_file(&file, &folders).expect("inside workspace");

        prop_assert_eq!(resolved.workspace_root, inner_root);
        prop_assert_eq!(resolved.workspace_name, inner);
    }

    /// PROPERTY: a sibling whose name merely starts with the workspace name
    /// is not inside it.
    #[test]
    fn property_prefix_is_component_wise(
        root in segment(),
        suffix in segment(),
        rel in relative(),
    ) {
        let workspace = PathBuf::from(format!("/ws/{}", root));
        let sibling = PathBuf::from(format!("/ws/{}{}", root, suffix));
        let file = sibling.join(rel.join("/"));

        let result = PathResolver::resolve_file(&file, &[WorkspaceFolder::new(workspace)]);
        prop_assert!(result.is_err());
    }
}
