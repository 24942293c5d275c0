//! Tests for building and walking the source document tree.

use quire_dom::{DomTree, NodeId};

/// html > body > [p > "Hello", div]
fn sample_tree() -> (DomTree, NodeId, NodeId, NodeId, NodeId) {
    let mut tree = DomTree::new();
    let html = tree.append_element(NodeId::ROOT, "html", 1);
    let body = tree.append_element(html, "body", 2);
    let p = tree.append_element(body, "p", 3);
    let text = tree.append_text(p, "Hello");
    let _div = tree.append_element(body, "div", 4);
    (tree, html, body, p, text)
}

#[test]
fn test_document_element_is_first_element_child() {
    let (tree, html, ..) = sample_tree();
    assert_eq!(tree.document_element(), Some(html));
    assert_eq!(tree.as_element(html).unwrap().tag_name, "html");
}

#[test]
fn test_append_sets_parent_and_order() {
    let (tree, html, body, p, _) = sample_tree();
    assert_eq!(tree.parent(body), Some(html));
    assert_eq!(tree.children(body)[0], p);
    assert_eq!(tree.children(body).len(), 2);
}

#[test]
fn test_ancestors_walk_to_document() {
    let (tree, html, body, p, text) = sample_tree();
    let chain: Vec<NodeId> = tree.ancestors(text).collect();
    assert_eq!(chain, vec![p, body, html, NodeId::ROOT]);
}

#[test]
fn test_nearest_element_of_text_is_parent() {
    let (tree, _, _, p, text) = sample_tree();
    assert_eq!(tree.as_text(text), Some("Hello"));
    assert_eq!(tree.nearest_element(text), Some(p));
    assert_eq!(tree.nearest_element(p), Some(p));
    assert_eq!(tree.nearest_element(NodeId::ROOT), None);
}

#[test]
fn test_elements_in_tree_order() {
    let (tree, html, body, p, _) = sample_tree();
    let elements = tree.elements();
    assert_eq!(elements.len(), 4);
    assert_eq!(&elements[..3], &[html, body, p]);
    assert_eq!(tree.as_element(elements[3]).unwrap().source_line, 4);
}
