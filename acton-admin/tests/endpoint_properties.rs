//! Properties of form endpoint derivation

use acton_admin::resource::derive_endpoint;
use proptest::prelude::*;

fn path_segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 1..4)
}

proptest! {
    #[test]
    fn creation_endpoint_swaps_trailing_create(segments in path_segments()) {
        let base = segments.join("/");
        let path = format!("/api/{base}/create");

        prop_assert_eq!(
            derive_endpoint(&path, "api/", "/create", "/store"),
            format!("{base}/store")
        );
    }

    #[test]
    fn update_endpoint_never_keeps_api_prefix(segments in path_segments()) {
        prop_assume!(segments[0] != "api");
        let base = segments.join("/");
        let path = format!("api/{base}/edit");

        let endpoint = derive_endpoint(&path, "api/", "/edit", "/save");
        prop_assert!(!endpoint.starts_with("api/"));
        prop_assert!(endpoint.ends_with("/save"));
    }

    #[test]
    fn paths_without_suffix_only_lose_prefix(segments in path_segments()) {
        let base = segments.join("/");
        prop_assume!(!base.contains("create"));
        let path = format!("api/{base}/index");

        prop_assert_eq!(
            derive_endpoint(&path, "api/", "/create", "/store"),
            format!("{base}/index")
        );
    }
}
