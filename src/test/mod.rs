//! Scenario tests exercising the worked editing sequences this crate's
//! design was checked against: each one parses a document, applies an
//! edit, and checks the resulting on-disk form.

use crate::Rope;

#[test]
fn empty_document_round_trips() {
    let rope = Rope::new();
    assert_eq!(rope.length(), 0);
    assert_eq!(rope.visible_string(), "");
    assert_eq!(rope.file_string(), "");
}

#[test]
fn from_text_round_trips_without_trailing_newline() {
    let rope = Rope::from_text("a\n\tb\n\t\tc\nd");
    assert_eq!(rope.file_string(), "a\n\tb\n\t\tc\nd");
}

#[test]
fn single_paragraph_without_trailing_newline_round_trips() {
    let rope = Rope::from_text("\tHello");
    assert_eq!(rope.visible_string(), "Hello");
    assert_eq!(rope.file_string(), "\tHello");
}

#[test]
fn insert_newline_splits_a_paragraph_in_place() {
    let mut rope = Rope::from_text("\tHello");
    rope.insert("\n", 5).unwrap();
    assert_eq!(rope.file_string(), "\tHello\n\t");
    assert_eq!(rope.depth(0).unwrap(), 1);
    assert_eq!(rope.depth(6).unwrap(), 1);
}

#[test]
fn insert_mid_paragraph_splits_content_and_keeps_indentation() {
    let mut rope = Rope::from_text("\t\tHelloWorld");
    rope.insert("X\n", 5).unwrap();
    assert_eq!(rope.file_string(), "\t\tHelloX\n\t\tWorld");
}

#[test]
fn insert_plain_text_at_paragraph_boundary_extends_next_line() {
    let mut rope = Rope::from_text("a\nb");
    // offset 2 is right at the start of "b" (after "a\n")
    rope.insert("X", 2).unwrap();
    assert_eq!(rope.visible_string(), "a\nXb");
}

#[test]
fn insert_multi_paragraph_text_creates_several_leaves() {
    let mut rope = Rope::from_text("ac");
    rope.insert("\nb\n", 1).unwrap();
    assert_eq!(rope.visible_string(), "a\nb\nc");
}

#[test]
fn delete_newline_between_paragraphs_merges_them() {
    let mut rope = Rope::from_text("a\nc\nd\nf");
    rope.delete(3, 1).unwrap();
    assert_eq!(rope.visible_string(), "a\ncd\nf");
}

#[test]
fn delete_interior_text_does_not_touch_structure() {
    let mut rope = Rope::from_text("hello\nworld");
    rope.delete(1, 3).unwrap();
    assert_eq!(rope.visible_string(), "ho\nworld");
}

#[test]
fn delete_whole_paragraph_content_but_not_its_newline() {
    let mut rope = Rope::from_text("abc\ndef");
    rope.delete(0, 3).unwrap();
    assert_eq!(rope.visible_string(), "\ndef");
}

#[test]
fn indent_and_outdent_shift_depth_within_range() {
    let mut rope = Rope::from_text("a\nb\nc");
    rope.indent(2, 1, 1).unwrap();
    assert_eq!(rope.depth(2).unwrap(), 1);
    assert_eq!(rope.depth(0).unwrap(), 0);
    rope.indent(2, 1, -5).unwrap();
    assert_eq!(rope.depth(2).unwrap(), 0);
}

#[test]
fn collapse_hides_children_and_expand_restores_them() {
    let mut rope = Rope::from_text("a\n\tb\n\tc\nd");
    let before = rope.file_string();
    rope.collapse(0, 0).unwrap();
    assert_eq!(rope.visible_string(), "a\nd");
    rope.expand(0, 0).unwrap();
    assert_eq!(rope.file_string(), before);
}

#[test]
fn collapse_with_no_children_in_range_errors() {
    let mut rope = Rope::from_text("a\nb\nc");
    assert!(rope.collapse(0, 1).is_err());
}

#[test]
fn expand_with_nothing_collapsed_errors() {
    let mut rope = Rope::from_text("a\nb");
    assert!(rope.expand(0, 1).is_err());
}

#[test]
fn collapse_then_edit_then_expand_keeps_children_relative() {
    let mut rope = Rope::from_text("a\n\tb\n\tc");
    rope.collapse(0, 0).unwrap();
    assert_eq!(rope.visible_string(), "a");
    rope.indent(0, 1, 1).unwrap();
    rope.expand(0, 0).unwrap();
    assert_eq!(rope.file_string(), "\ta\n\t\tb\n\t\tc");
}

#[test]
fn range_of_line_excludes_only_the_final_newline() {
    let rope = Rope::from_text("ab\ncd");
    assert_eq!(rope.range_of_line(0).unwrap(), (0, 3));
    assert_eq!(rope.range_of_line(4).unwrap(), (3, 2));
}

#[test]
fn out_of_bounds_offsets_are_reported_as_errors() {
    let rope = Rope::from_text("abc");
    assert!(rope.depth(10).is_err());
    let mut rope = rope;
    assert!(rope.insert("x", 10).is_err());
    assert!(rope.delete(0, 10).is_err());
}

#[test]
fn astral_characters_count_as_two_utf16_units() {
    let mut rope = Rope::from_text("a");
    rope.insert("\u{1F600}", 1).unwrap();
    assert_eq!(rope.length(), 3);
    assert_eq!(rope.visible_string(), "a\u{1F600}");
}
