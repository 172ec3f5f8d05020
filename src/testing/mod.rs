#![cfg(test)]
crate::reexport!(markup);
pub use rstest::*;

pub(in crate::testing) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

mod markup_tests {
    use super::{super::*, *};
    use crate::syntax::Rule;

    #[test]
    fn rules_wrap_their_text() {
        let tree = tree("{SiddhiApp {Query {QueryInput from S} insert}}");
        let query = tree.children(tree.root())[0];
        assert_eq!(tree.rule(query), Some(Rule::Query));
        assert_eq!(tree.text(query), "from S insert");
    }

    #[test]
    fn cursor_marker_is_stripped() {
        let (tree, cursor) = tree_with_cursor("{SiddhiApp {Query insert $}}");
        assert_eq!(tree.source(), "insert ");
        assert_eq!(cursor.offset(), 7);
    }

    #[rstest]
    #[case("{Nope x}")]
    #[case("{SiddhiApp x")]
    fn bad_markup_panics(#[case] markup: &str) {
        let result = std::panic::catch_unwind(|| tree(markup));
        assert!(result.is_err());
    }
}
