//! Tests for `AnyNode` dispatch.

use crate::ast::tests::ast_test_utils::parse_ok;
use crate::ast::AnyNode;
use crate::parse_doc_comment;

/// Verifies that every node of a parsed document maps to the wrapper of
/// its own kind.
#[test]
fn test_from_syntax_preserves_kind() {
    let source = r#"
"Root." @A(list: [1.5, {k: null}], flag: true, word: X, s: "s", n: 1)
type Q implements I { f(a: [Int!] = [1]): String! }
schema { query: Q }
union U = | A | B
input In { x: Int }
enum E { V }
scalar S
interface I { id: ID }
import "x"
"#;
    let result = parse_ok(source);

    for node in result.tree().descendants() {
        let any = AnyNode::from_syntax(node);
        assert_eq!(any.kind(), node.kind);
        assert!(std::ptr::eq(any.syntax(), node));
    }
}

/// Verifies dispatch for doc-comment and error nodes.
#[test]
fn test_from_syntax_doc_and_error_nodes() {
    let doc = parse_doc_comment("@see other");
    let tag = doc.tree().child_nodes().next().unwrap();
    assert!(matches!(AnyNode::from_syntax(doc.tree()), AnyNode::DocComment(_)));
    assert!(matches!(AnyNode::from_syntax(tag), AnyNode::Tag(_)));

    let broken = crate::parse("}");
    let error = broken.tree().child_nodes().next().unwrap();
    assert!(matches!(AnyNode::from_syntax(error), AnyNode::Error(_)));
}
