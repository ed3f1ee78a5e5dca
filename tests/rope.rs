use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use text_rope::{Rope, RopeError};

#[test]
fn test_hello_world_scenario() {
    let rope = Rope::new("Hello");
    assert_eq!(rope.char_at(1), Ok('e'));

    let rope = rope.concat(Rope::new("World"));
    assert_eq!(rope.to_string(), "HelloWorld");
    assert_eq!(rope.len(), 10);

    let (left, right) = rope.split(5).unwrap();
    assert_eq!(left.to_string(), "Hello");
    assert_eq!(right.to_string(), "World");
}

#[test]
fn test_insert_then_delete_scenario() {
    let mut rope = Rope::new("ABC");
    rope.insert(1, Rope::new("XYZ")).unwrap();
    assert_eq!(rope.to_string(), "AXYZBC");

    rope.delete(2..4).unwrap();
    assert_eq!(rope.to_string(), "AXBC");

    let mut rope = Rope::new("AXYZBC");
    rope.delete(1..4).unwrap();
    assert_eq!(rope.to_string(), "ABC");
    assert_eq!(rope.report(0..2).unwrap(), "AB");
}

#[test]
fn test_split_at_bounds() {
    let (left, right) = Rope::new("boundary").split(0).unwrap();
    assert!(left.is_empty());
    assert_eq!(right, Rope::new("boundary"));

    let (left, right) = Rope::new("boundary").split(8).unwrap();
    assert_eq!(left, Rope::new("boundary"));
    assert!(right.is_empty());
}

#[test]
fn test_multibyte_text_counts_chars() {
    let mut rope = Rope::new("naïve café ☕ rope");
    assert_eq!(rope.len(), 17);
    assert_eq!(rope.char_at(2), Ok('ï'));
    assert_eq!(rope.char_at(11), Ok('☕'));
    assert_eq!(rope.report(6..12).unwrap(), "café ☕");

    rope.delete(10..12).unwrap();
    assert_eq!(rope.to_string(), "naïve café rope");
}

#[test]
fn test_equality_ignores_tree_shape() {
    let built = Rope::with_leaf_len("structure", 2);
    let joined = Rope::new("str").concat(Rope::new("uct")).concat(Rope::new("ure"));
    assert_eq!(built, joined);
    assert_ne!(built, Rope::new("structures"));
}

#[test]
fn test_chunks_concatenate_to_content() {
    let rope = Rope::with_leaf_len("0123456789", 3);
    let chunks = rope.chunks().collect::<Vec<_>>();
    assert_eq!(chunks, ["01", "234", "56", "789"]);
    assert_eq!(chunks.concat(), rope.collect());
}

#[test]
fn test_parse_and_convert() {
    let parsed: Rope = "parsed".parse().unwrap();
    assert_eq!(parsed, Rope::from("parsed"));
    assert_eq!(parsed, Rope::from(String::from("parsed")));
    assert_eq!(Rope::default(), Rope::new(""));
}

#[rstest]
#[case::index_at_len(5, 5)]
#[case::index_past_len(9, 5)]
fn test_char_at_out_of_range(#[case] index: usize, #[case] len: usize) {
    let rope = Rope::new("Hello");
    assert_eq!(rope.char_at(index), Err(RopeError::OutOfRange { start: index, end: index, len }));
}

#[test]
fn test_char_at_on_empty_rope() {
    assert!(Rope::default().char_at(0).is_err());
}

#[rstest]
#[case::split_past_end(6)]
#[case::split_far_past_end(100)]
fn test_split_out_of_range(#[case] at: usize) {
    let err = Rope::new("Hello").split(at).unwrap_err();
    assert_eq!(err, RopeError::OutOfRange { start: at, end: at, len: 5 });
}

#[rstest]
#[case::insert_past_end(4)]
#[case::insert_far_past_end(40)]
fn test_insert_out_of_range_leaves_rope_untouched(#[case] at: usize) {
    let mut rope = Rope::new("ABC");
    assert!(rope.insert(at, Rope::new("XYZ")).is_err());
    assert!(rope.insert_str(at, "XYZ").is_err());
    assert_eq!(rope.to_string(), "ABC");
}

#[rstest]
#[case::empty_range(2, 2)]
#[case::inverted(3, 1)]
#[case::end_past_len(1, 6)]
#[case::start_past_len(7, 8)]
fn test_delete_out_of_range_leaves_rope_untouched(#[case] start: usize, #[case] end: usize) {
    let mut rope = Rope::new("Hello");
    assert_eq!(rope.delete(start..end), Err(RopeError::OutOfRange { start, end, len: 5 }));
    assert_eq!(rope.to_string(), "Hello");
}

#[rstest]
#[case::inverted(3, 1)]
#[case::end_past_len(0, 6)]
fn test_report_out_of_range(#[case] start: usize, #[case] end: usize) {
    let rope = Rope::new("Hello");
    assert_eq!(rope.report(start..end), Err(RopeError::OutOfRange { start, end, len: 5 }));
}

#[rstest]
#[case::empty_at_start(0, 0, "")]
#[case::empty_at_end(5, 5, "")]
#[case::whole(0, 5, "Hello")]
#[case::middle(1, 4, "ell")]
fn test_report_ranges(#[case] start: usize, #[case] end: usize, #[case] expected: &str) {
    assert_eq!(Rope::new("Hello").report(start..end).unwrap(), expected);
}

#[test]
fn test_error_message() {
    let err = Rope::new("abc").report(1..9).unwrap_err();
    assert_eq!(err.to_string(), "range 1..9 is out of bounds for rope of length 3");
}

#[test]
fn test_repeated_appends_can_be_rebalanced() {
    let mut rope = Rope::default();
    for line in 0..200 {
        rope.append(Rope::new(&format!("line {line}\n")));
    }
    assert!(!rope.is_balanced());
    let text = rope.to_string();

    rope.rebalance();
    assert!(rope.is_balanced());
    assert!(rope.depth() <= 10, "depth {}", rope.depth());
    assert_eq!(rope.to_string(), text);
}

fn text_and_index() -> impl Strategy<Value = (String, usize)> {
    "\\PC{0,80}".prop_flat_map(|text| {
        let len = text.chars().count();
        (Just(text), 0..=len)
    })
}

proptest! {
    #[test]
    fn collect_returns_source(text in "\\PC{0,200}", leaf_len in 1usize..12) {
        let rope = Rope::with_leaf_len(&text, leaf_len);
        prop_assert_eq!(rope.collect(), text.clone());
        prop_assert_eq!(rope.len(), text.chars().count());
        prop_assert!(rope.is_balanced());
    }

    #[test]
    fn char_at_matches_flattened(text in "\\PC{1,120}") {
        let rope = Rope::new(&text);
        for (index, expected) in text.chars().enumerate() {
            prop_assert_eq!(rope.char_at(index), Ok(expected));
        }
    }

    #[test]
    fn split_then_concat_round_trips((text, at) in text_and_index()) {
        let (left, right) = Rope::new(&text).split(at).unwrap();
        prop_assert_eq!(left.len(), at);
        prop_assert_eq!(left.concat(right).to_string(), text);
    }

    #[test]
    fn delete_undoes_insert((text, at) in text_and_index(), source in "\\PC{1,40}") {
        let mut rope = Rope::new(&text);
        rope.insert(at, Rope::new(&source)).unwrap();
        prop_assert_eq!(rope.len(), text.chars().count() + source.chars().count());

        rope.delete(at..at + source.chars().count()).unwrap();
        prop_assert_eq!(rope.to_string(), text);
    }

    #[test]
    fn report_matches_char_slice((text, start) in text_and_index(), extra in 0usize..40) {
        let chars = text.chars().collect::<Vec<_>>();
        let end = (start + extra).min(chars.len());
        let rope = Rope::with_leaf_len(&text, 3);
        prop_assert_eq!(rope.report(start..end).unwrap(), chars[start..end].iter().collect::<String>());
        prop_assert_eq!(rope.report(0..chars.len()).unwrap(), rope.collect());
    }
}
