//! End-to-end editing scenarios, one test per worked example this crate's
//! design was checked against.

use outline_rope::Rope;

#[test]
fn collapse_direct_parent() {
    let mut rope = Rope::from_text("A\n\tB\n\tC\nD");
    rope.collapse(0, 1).unwrap();
    assert_eq!(rope.visible_string(), "A\nD");
}

#[test]
fn collapse_gathers_a_deeper_nested_run() {
    let mut rope = Rope::from_text("A\n\tB\n\t\tC\n\tD\nE");
    rope.collapse(0, 1).unwrap();
    assert_eq!(rope.visible_string(), "A\nE");
}

#[test]
fn collapse_climbs_from_a_child_to_its_parent() {
    let mut rope = Rope::from_text("A\n\tB\n\tC\nD");
    // offset 2 lands inside "B", which has no children of its own
    rope.collapse(2, 1).unwrap();
    assert_eq!(rope.visible_string(), "A\nD");
}

#[test]
fn collapse_fails_when_the_target_has_no_children() {
    let mut rope = Rope::from_text("A\nB\nC");
    let before = rope.visible_string();
    assert!(rope.collapse(0, 1).is_err());
    assert_eq!(rope.visible_string(), before);
}

#[test]
fn insert_newline_creates_a_sibling_leaf() {
    let mut rope = Rope::from_text("\tHello");
    rope.insert("\n", 5).unwrap();
    assert_eq!(rope.file_string(), "\tHello\n\t");
}

#[test]
fn delete_the_newline_between_two_paragraphs_merges_them() {
    let mut rope = Rope::from_text("a\nc\nd\nf");
    rope.delete(3, 1).unwrap();
    assert_eq!(rope.visible_string(), "a\ncd\nf");
}

#[test]
fn insert_mid_paragraph_splits_it_without_changing_indentation() {
    let mut rope = Rope::from_text("\t\tHelloWorld");
    rope.insert("X\n", 5).unwrap();
    assert_eq!(rope.visible_string(), "HelloX\nWorld");
    assert_eq!(rope.depth(0).unwrap(), 2);
    assert_eq!(rope.depth(8).unwrap(), 2);
}

#[test]
fn indent_a_range_of_lines() {
    let mut rope = Rope::from_text("Line 1\nLine 2\nLine 3");
    let (start, _) = rope.range_of_line(7).unwrap(); // start of "Line 2"
    let end_of_doc = rope.length();
    rope.indent(start, end_of_doc - start, 1).unwrap();
    assert_eq!(rope.file_string(), "Line 1\n\tLine 2\n\tLine 3");
}

#[test]
fn collapse_on_an_empty_document_fails() {
    let mut rope = Rope::new();
    assert!(rope.collapse(0, 0).is_err());
}
