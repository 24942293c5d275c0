//! Integration tests for the box tree.

use std::rc::Rc;

use quickcheck_macros::quickcheck;
use quire_boxes::{BoxError, BoxId, BoxTree, BoxType, Edges, LayoutBox, Replacement};
use quire_dom::{DomTree, NodeId};
use quire_style::{
    ColorValue, ComputedStyle, DisplayValue, Document, DocumentOptions, Float, Overflow,
    PageType, Position, StyleTable,
};

/// `<html><body><p>Hello</p><img></body></html>` with display values set.
struct Fixture {
    document: Rc<Document>,
    html: NodeId,
    body: NodeId,
    p: NodeId,
    text: NodeId,
    img: NodeId,
}

fn fixture() -> Fixture {
    let mut dom = DomTree::new();
    let html = dom.append_element(NodeId::ROOT, "html", 1);
    let body = dom.append_element(html, "body", 2);
    let p = dom.append_element(body, "p", 3);
    let text = dom.append_text(p, "Hello");
    let img = dom.append_element(body, "img", 4);

    let block = ComputedStyle {
        display: Some(DisplayValue::Block),
        ..ComputedStyle::default()
    };
    let mut table = StyleTable::default();
    let _ = table.elements.insert(html, block.clone());
    let _ = table.elements.insert(body, block.clone());
    let _ = table.elements.insert(
        p,
        ComputedStyle {
            color: ColorValue::from_hex("#ff0000"),
            ..block
        },
    );
    let _ = table.elements.insert(img, ComputedStyle::default());
    let _ = table.pages.insert(
        PageType::FirstRight,
        ComputedStyle {
            background_color: ColorValue::from_hex("#eeeeee"),
            ..ComputedStyle::default()
        },
    );

    let document = Document::new(dom, table, DocumentOptions::default());
    Fixture {
        document: Rc::new(document),
        html,
        body,
        p,
        text,
        img,
    }
}

fn image() -> Replacement {
    Replacement {
        url: "cover.png".to_string(),
        intrinsic_width: 300.0,
        intrinsic_height: 150.0,
    }
}

/// Block `parent` with children `c1` (holding `g1`) and `c2`.
fn small_tree(f: &Fixture) -> (BoxTree, [BoxId; 4]) {
    let mut tree = BoxTree::new();
    let parent = tree.push(LayoutBox::block(&f.document, f.body));
    let c1 = tree.push(LayoutBox::block(&f.document, f.p));
    let g1 = tree.push(LayoutBox::line(&f.document, f.p));
    let c2 = tree.push(LayoutBox::anonymous_block(&f.document, f.body));
    tree.add_child(parent, c1).unwrap();
    tree.add_child(c1, g1).unwrap();
    tree.add_child(parent, c2).unwrap();
    (tree, [parent, c1, g1, c2])
}

#[test]
fn test_add_child_links_both_ways() {
    let f = fixture();
    let (tree, [parent, c1, g1, c2]) = small_tree(&f);

    assert_eq!(tree[parent].children(), &[c1, c2]);
    assert_eq!(tree[c1].parent, Some(parent));
    assert_eq!(tree[g1].parent, Some(c1));
    assert_eq!(tree[parent].parent, None);
}

#[test]
fn test_add_child_allows_duplicates() {
    let f = fixture();
    let mut tree = BoxTree::new();
    let line = tree.push(LayoutBox::line(&f.document, f.p));
    let text = tree.push(LayoutBox::text(&f.document, f.text, "Hello"));
    tree.add_child(line, text).unwrap();
    tree.add_child(line, text).unwrap();

    assert_eq!(tree[line].children(), &[text, text]);
}

#[test]
fn test_leaf_kinds_reject_children() {
    let f = fixture();
    let mut tree = BoxTree::new();
    let text = tree.push(LayoutBox::text(&f.document, f.text, "Hello"));
    let img = tree.push(LayoutBox::inline_level_replaced(&f.document, f.img, image()));

    assert_eq!(
        tree.add_child(text, img),
        Err(BoxError::NotAContainer {
            box_type: BoxType::Text,
        })
    );
    assert_eq!(
        tree.empty(img),
        Err(BoxError::NotAContainer {
            box_type: BoxType::InlineLevelReplaced,
        })
    );
    // The failed call did not adopt the child.
    assert_eq!(tree[img].parent, None);
}

#[test]
fn test_unknown_id() {
    let tree = BoxTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.get(BoxId(3)).err(), Some(BoxError::UnknownBox(BoxId(3))));
}

#[test]
fn test_empty_clears_children() {
    let f = fixture();
    let (mut tree, [parent, c1, ..]) = small_tree(&f);
    tree.empty(parent).unwrap();

    assert!(tree[parent].children().is_empty());
    // Former children keep their own subtrees.
    assert_eq!(tree[c1].children().len(), 1);
}

#[test]
fn test_descendants_pre_order() {
    let f = fixture();
    let (tree, [parent, c1, g1, c2]) = small_tree(&f);

    let order: Vec<BoxId> = tree.descendants(parent).collect();
    assert_eq!(order, vec![parent, c1, g1, c2]);

    // A fresh call restarts the walk.
    assert_eq!(tree.descendants(parent).count(), 4);
}

#[test]
fn test_descendants_of_leaf_is_itself() {
    let f = fixture();
    let (tree, [_, _, g1, _]) = small_tree(&f);

    assert_eq!(tree.descendants(g1).collect::<Vec<_>>(), vec![g1]);
}

#[test]
fn test_descendants_of_leaf_kinds() {
    let f = fixture();
    let mut tree = BoxTree::new();
    let text = tree.push(LayoutBox::text(&f.document, f.text, "Hi"));
    let img = tree.push(LayoutBox::block_level_replaced(&f.document, f.img, image()));

    assert_eq!(tree.descendants(text).collect::<Vec<_>>(), vec![text]);
    assert_eq!(tree.descendants(img).collect::<Vec<_>>(), vec![img]);
}

#[test]
fn test_ancestors_walk_to_root() {
    let f = fixture();
    let (tree, [parent, c1, g1, _]) = small_tree(&f);

    assert_eq!(tree.ancestors(g1).collect::<Vec<_>>(), vec![c1, parent]);
    assert_eq!(tree.ancestors(parent).count(), 0);
}

#[test]
fn test_copy_has_independent_style() {
    let f = fixture();
    let (mut tree, [_, c1, _, _]) = small_tree(&f);

    let copy = tree.copy(c1).unwrap();
    tree.get_mut(copy).unwrap().style.color = Some(ColorValue::BLACK);

    assert_eq!(tree[c1].style.color, ColorValue::from_hex("#ff0000"));
    assert_eq!(tree[copy].style.color, Some(ColorValue::BLACK));
}

#[test]
fn test_copy_keeps_every_field() {
    let f = fixture();
    let (mut tree, [_, c1, ..]) = small_tree(&f);
    {
        let original = tree.get_mut(c1).unwrap();
        original.width = Some(3.0);
        original.height = Some(4.0);
        original.position_x = 9.0;
        original.position_y = 11.0;
        original.margin = Edges::uniform(1.0);
        original.border = Edges::uniform(2.0);
        original.padding = Edges {
            top: Some(5.0),
            right: None,
            bottom: Some(6.0),
            left: Some(7.0),
        };
        original.min_width = Some(1.0);
        original.max_width = Some(100.0);
        original.min_height = Some(2.0);
        original.max_height = Some(200.0);
        original.text_indent = Some(8.0);
        original.baseline = Some(2.0);
        original.background_drawn = true;
    }

    let copy = tree.copy(c1).unwrap();
    let (original, copied) = (&tree[c1], &tree[copy]);

    assert_eq!(copied.element, original.element);
    assert_eq!(copied.width, Some(3.0));
    assert_eq!(copied.height, Some(4.0));
    assert_eq!((copied.position_x, copied.position_y), (9.0, 11.0));
    assert_eq!(copied.margin, original.margin);
    assert_eq!(copied.border, original.border);
    assert_eq!(copied.padding, original.padding);
    assert_eq!(copied.min_width, original.min_width);
    assert_eq!(copied.max_width, original.max_width);
    assert_eq!(copied.min_height, original.min_height);
    assert_eq!(copied.max_height, original.max_height);
    assert_eq!(copied.text_indent, Some(8.0));
    assert_eq!(copied.baseline, Some(2.0));
    assert!(copied.background_drawn);
    assert_eq!(copied.style, original.style);
    assert_eq!(copied.content, original.content);
    assert!(Rc::ptr_eq(&copied.document, &original.document));
}

#[test]
fn test_copy_keeps_leaf_payloads() {
    let f = fixture();
    let mut tree = BoxTree::new();
    let text = tree.push(LayoutBox::text(&f.document, f.text, "Hello"));
    let img = tree.push(LayoutBox::inline_level_replaced(&f.document, f.img, image()));

    let text_copy = tree.copy(text).unwrap();
    let img_copy = tree.copy(img).unwrap();

    assert_eq!(tree[text_copy].box_type(), BoxType::Text);
    assert_eq!(tree[text_copy].text_content(), Some("Hello"));
    assert_eq!(tree[img_copy].box_type(), BoxType::InlineLevelReplaced);
    assert_eq!(tree[img_copy].replacement(), Some(&image()));
}

#[test]
fn test_copy_shares_children_and_parent() {
    let f = fixture();
    let (mut tree, [parent, c1, g1, c2]) = small_tree(&f);

    let copy = tree.copy(c1).unwrap();

    assert_eq!(tree[copy].box_type(), BoxType::Block);
    assert_eq!(tree[copy].children(), &[g1]);
    assert_eq!(tree[copy].parent, Some(parent));
    // Not attached to the parent until the caller does so.
    assert_eq!(tree[parent].children(), &[c1, c2]);
    assert_eq!(tree[g1].parent, Some(c1));
}

#[test]
fn test_copy_with_children_reparents() {
    let f = fixture();
    let (mut tree, [parent, c1, g1, c2]) = small_tree(&f);

    let copy = tree.copy_with_children(parent, vec![c2]).unwrap();

    assert_eq!(tree[copy].children(), &[c2]);
    assert_eq!(tree[c2].parent, Some(copy));
    assert_eq!(tree[parent].children(), &[c1, c2]);
    assert_eq!(tree[g1].parent, Some(c1));
}

#[test]
fn test_copy_with_children_of_leaf_fails() {
    let f = fixture();
    let mut tree = BoxTree::new();
    let text = tree.push(LayoutBox::text(&f.document, f.text, "Hello"));
    let before = tree.len();

    assert!(tree.copy_with_children(text, Vec::new()).is_err());
    assert_eq!(tree.len(), before);
}

#[test]
fn test_translate_moves_whole_subtree() {
    let f = fixture();
    let (mut tree, [parent, c1, g1, c2]) = small_tree(&f);
    tree.get_mut(c1).unwrap().position_x = 10.0;
    tree.get_mut(g1).unwrap().position_y = 20.0;

    tree.translate(parent, 5.0, -3.0).unwrap();

    assert_eq!((tree[parent].position_x, tree[parent].position_y), (5.0, -3.0));
    assert_eq!((tree[c1].position_x, tree[c1].position_y), (15.0, -3.0));
    assert_eq!((tree[g1].position_x, tree[g1].position_y), (5.0, 17.0));
    assert_eq!((tree[c2].position_x, tree[c2].position_y), (5.0, -3.0));
}

#[test]
fn test_translate_leaves_ancestors_alone() {
    let f = fixture();
    let (mut tree, [parent, c1, g1, c2]) = small_tree(&f);

    tree.translate(c1, 1.0, 1.0).unwrap();

    assert_eq!(tree[g1].position_x, 1.0);
    assert_eq!(tree[parent].position_x, 0.0);
    assert_eq!(tree[c2].position_x, 0.0);
}

#[quickcheck]
fn prop_translate_is_additive(a: (i16, i16), b: (i16, i16)) -> bool {
    let f = fixture();
    let (mut split, [_, c1, g1, _]) = small_tree(&f);
    let (mut once, _) = small_tree(&f);
    let (ax, ay) = (f32::from(a.0), f32::from(a.1));
    let (bx, by) = (f32::from(b.0), f32::from(b.1));

    split.translate(c1, ax, ay).unwrap();
    split.translate(c1, bx, by).unwrap();
    once.translate(c1, ax + bx, ay + by).unwrap();

    [c1, g1].iter().all(|&id| {
        (split[id].position_x - once[id].position_x).abs() < 1e-3
            && (split[id].position_y - once[id].position_y).abs() < 1e-3
    })
}

#[test]
fn test_page_box_uses_page_type_style() {
    let f = fixture();
    let first = LayoutBox::page(&f.document, 1);
    let second = LayoutBox::page(&f.document, 2);

    assert_eq!(first.box_type(), BoxType::Page);
    assert_eq!(first.element, None);
    assert_eq!(first.page_data().unwrap().page_number, 1);
    assert_eq!(first.style.background_color, ColorValue::from_hex("#eeeeee"));
    assert_eq!(second.style.background_color, None);
}

#[test]
fn test_for_element_picks_kind_from_display() {
    let f = fixture();
    let kind = |element, replacement| {
        LayoutBox::for_element(&f.document, element, replacement).map(|b| b.box_type())
    };

    assert_eq!(kind(f.html, None), Some(BoxType::Block));
    assert_eq!(kind(f.img, None), Some(BoxType::Inline));
    assert_eq!(kind(f.img, Some(image())), Some(BoxType::InlineLevelReplaced));
    assert_eq!(kind(f.p, Some(image())), Some(BoxType::BlockLevelReplaced));

    let replaced = LayoutBox::for_element(&f.document, f.img, Some(image())).unwrap();
    assert_eq!(replaced.replacement().unwrap().intrinsic_ratio(), Some(2.0));
}

#[test]
fn test_display_none_generates_no_box() {
    let mut dom = DomTree::new();
    let head = dom.append_element(NodeId::ROOT, "head", 1);
    let mut table = StyleTable::default();
    let _ = table.elements.insert(
        head,
        ComputedStyle {
            display: Some(DisplayValue::None),
            ..ComputedStyle::default()
        },
    );
    let document = Rc::new(Document::new(dom, table, DocumentOptions::default()));

    assert!(LayoutBox::for_element(&document, head, None).is_none());
}

#[test]
fn test_text_box_inherits_from_parent_element() {
    let f = fixture();
    let text = LayoutBox::text(&f.document, f.text, "Hello");

    assert_eq!(text.text_content(), Some("Hello"));
    assert_eq!(text.style.color, ColorValue::from_hex("#ff0000"));
    assert_eq!(text.style.display, None);
}

#[test]
fn test_formatting_context_roots() {
    let f = fixture();
    let mut block = LayoutBox::block(&f.document, f.body);
    assert!(!block.establishes_formatting_context());
    assert!(block.is_in_normal_flow());

    block.style.overflow = Some(Overflow::Hidden);
    assert!(block.establishes_formatting_context());

    assert!(LayoutBox::inline_block(&f.document, f.img).establishes_formatting_context());
    assert!(!LayoutBox::inline(&f.document, f.img).establishes_formatting_context());

    let mut floated = LayoutBox::inline(&f.document, f.img);
    floated.style.float = Some(Float::Left);
    assert!(floated.is_floated());
    assert!(!floated.is_in_normal_flow());
    assert!(floated.establishes_formatting_context());
}

#[test]
fn test_absolute_and_fixed_leave_normal_flow() {
    let f = fixture();
    let mut static_box = LayoutBox::block(&f.document, f.body);
    assert!(!static_box.is_absolutely_positioned());

    static_box.style.position = Some(Position::Relative);
    assert!(!static_box.is_absolutely_positioned());
    assert!(static_box.is_in_normal_flow());

    for position in [Position::Absolute, Position::Fixed] {
        let mut positioned = LayoutBox::block(&f.document, f.body);
        positioned.style.position = Some(position);
        assert!(positioned.is_absolutely_positioned(), "{position}");
        assert!(!positioned.is_in_normal_flow(), "{position}");
        assert!(positioned.establishes_formatting_context(), "{position}");
    }
}

#[test]
fn test_outside_list_marker() {
    let f = fixture();
    let mut tree = BoxTree::new();
    let item = tree.push(LayoutBox::block(&f.document, f.p));
    let marker = tree.push(LayoutBox::image_marker(&f.document, f.p, image()));

    assert_eq!(tree[item].outside_list_marker(), None);
    tree.set_outside_list_marker(item, marker).unwrap();

    assert_eq!(tree[item].outside_list_marker(), Some(marker));
    assert_eq!(tree[marker].parent, Some(item));
    assert!(tree[item].children().is_empty());

    let copy = tree.copy(item).unwrap();
    assert_eq!(tree[copy].outside_list_marker(), Some(marker));
}

#[test]
fn test_outside_list_marker_needs_block_box() {
    let f = fixture();
    let mut tree = BoxTree::new();
    let inline = tree.push(LayoutBox::inline(&f.document, f.img));
    let marker = tree.push(LayoutBox::image_marker(&f.document, f.p, image()));

    assert_eq!(
        tree.set_outside_list_marker(inline, marker),
        Err(BoxError::NotAContainer {
            box_type: BoxType::Inline,
        })
    );
    assert_eq!(tree[marker].parent, None);
}

#[test]
fn test_anonymous_box_without_element_warns() {
    let mut dom = DomTree::new();
    let stray = dom.append_text(NodeId::ROOT, "stray");
    let document = Rc::new(Document::new(
        dom,
        StyleTable::default(),
        DocumentOptions::default(),
    ));

    let text = LayoutBox::text(&document, stray, "stray");

    assert_eq!(text.style, ComputedStyle::default());
    assert!(quire_common::warning::has_warned(
        "Style",
        &format!("no element encloses node {stray}, using initial values")
    ));
}

#[test]
fn test_dump_outline() {
    let f = fixture();
    let mut tree = BoxTree::new();
    let page = tree.push(LayoutBox::page(&f.document, 1));
    let html = tree.push(LayoutBox::block(&f.document, f.html));
    let line = tree.push(LayoutBox::line(&f.document, f.p));
    let text = tree.push(LayoutBox::text(&f.document, f.text, "Hello"));
    tree.add_child(page, html).unwrap();
    tree.add_child(html, line).unwrap();
    tree.add_child(line, text).unwrap();

    assert_eq!(
        tree.dump(page),
        "<PageBox 1>\n  <BlockBox html 1>\n    <LineBox p 3>\n      <TextBox p 3> \"Hello\"\n"
    );
}
