use leafcmp::Node;
use std::collections::BTreeMap;

#[test]
fn test_type_name() {
    assert_eq!(Node::Null.type_name(), "null");
    assert_eq!(Node::Bool(true).type_name(), "boolean");
    assert_eq!(Node::Number(42.0).type_name(), "number");
    assert_eq!(Node::String("test".to_string()).type_name(), "string");
    assert_eq!(Node::Object(BTreeMap::new()).type_name(), "object");
    assert_eq!(Node::Array(vec![]).type_name(), "array");
}

#[test]
fn test_is_object() {
    assert!(Node::Object(BTreeMap::new()).is_object());
    assert!(!Node::Array(vec![]).is_object());
    assert!(!Node::Null.is_object());
}

#[test]
fn test_preview_primitives() {
    assert_eq!(Node::Null.preview(100), "null");
    assert_eq!(Node::Bool(false).preview(100), "false");
    assert_eq!(Node::Number(42.0).preview(100), "42");
    assert_eq!(Node::Number(2.5).preview(100), "2.5");
    assert_eq!(Node::Number(1e20).preview(100), "100000000000000000000");
    assert_eq!(Node::String("hi".to_string()).preview(100), "\"hi\"");
}

#[test]
fn test_preview_containers() {
    let mut map = BTreeMap::new();
    assert_eq!(Node::Object(map.clone()).preview(100), "{}");
    map.insert("a".to_string(), Node::Null);
    assert_eq!(Node::Object(map.clone()).preview(100), "{ 1 key }");
    map.insert("b".to_string(), Node::Null);
    assert_eq!(Node::Object(map).preview(100), "{ 2 keys }");

    assert_eq!(Node::Array(vec![]).preview(100), "[]");
    assert_eq!(Node::Array(vec![Node::Null]).preview(100), "[ 1 item ]");
    assert_eq!(
        Node::Array(vec![Node::Null, Node::Null]).preview(100),
        "[ 2 items ]"
    );
}

#[test]
fn test_preview_truncation() {
    let node = Node::String("a".repeat(100));
    let preview = node.preview(20);
    assert_eq!(preview.len(), 20);
    assert!(preview.ends_with("..."));
}
