use rscookbook::strings::{Joiner, Splitter};
use rscookbook::util::testing;
use rscookbook::CookbookError;
use rstest::rstest;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[rstest]
fn given_parts_with_null_when_joining_skipping_nulls_then_nulls_are_dropped() {
    let parts = vec![Some("a"), Some("b"), Some("c"), None];
    let joined = Joiner::on(", ").skip_nulls().join(parts).unwrap();
    assert_eq!(joined, "a, b, c");
}

#[rstest]
fn given_parts_with_null_when_joining_with_placeholder_then_placeholder_used() {
    let joined = Joiner::on("-")
        .use_for_null("?")
        .join([Some(1), None, Some(3)])
        .unwrap();
    assert_eq!(joined, "1-?-3");
}

#[rstest]
fn given_key_value_input_when_splitting_then_ordered_map() {
    let pairs = Splitter::on(" ")
        .unwrap()
        .with_key_value_separator(":")
        .unwrap()
        .split("a:1 b:2")
        .unwrap();

    assert_eq!(pairs, owned(&[("a", "1"), ("b", "2")]));
}

#[rstest]
fn given_unsorted_keys_when_splitting_then_input_order_kept() {
    let pairs = Splitter::on(" ")
        .unwrap()
        .with_key_value_separator(":")
        .unwrap()
        .split("b:2 a:1")
        .unwrap();

    let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["b", "a"]);
}

#[rstest]
fn given_padded_entries_when_splitting_with_trim_then_keys_and_values_trimmed() {
    let pairs = Splitter::on(",")
        .unwrap()
        .trim_results()
        .with_key_value_separator("=")
        .unwrap()
        .split(" a = 1 , b=2")
        .unwrap();

    assert_eq!(pairs, owned(&[("a", "1"), ("b", "2")]));
}

#[rstest]
#[case("")]
fn given_empty_separator_when_building_splitter_then_rejected(#[case] separator: &str) {
    assert!(matches!(
        Splitter::on(separator),
        Err(CookbookError::EmptySeparator)
    ));
    assert!(matches!(
        Splitter::on(",").unwrap().with_key_value_separator(separator),
        Err(CookbookError::EmptySeparator)
    ));
}

#[rstest]
#[case("a:1 b", "b")]
#[case("a:1:2", "a:1:2")]
fn given_malformed_entry_when_splitting_then_error_names_entry(
    #[case] input: &str,
    #[case] bad_entry: &str,
) {
    let result = Splitter::on(" ")
        .unwrap()
        .with_key_value_separator(":")
        .unwrap()
        .split(input);
    match result {
        Err(CookbookError::MalformedEntry { entry, .. }) => assert_eq!(entry, bad_entry),
        other => panic!("expected MalformedEntry, got {:?}", other),
    }
}

#[rstest]
fn given_repeated_key_when_splitting_then_duplicate_key() {
    let result = Splitter::on(" ")
        .unwrap()
        .with_key_value_separator(":")
        .unwrap()
        .split("a:1 a:2");
    assert!(matches!(result, Err(CookbookError::DuplicateKey(k)) if k == "a"));
}

#[rstest]
fn given_double_spaces_when_splitting_then_empty_entries_skipped() {
    let pairs = Splitter::on(" ")
        .unwrap()
        .with_key_value_separator("=")
        .unwrap()
        .split("x=1  y=2 ")
        .unwrap();
    assert_eq!(pairs, owned(&[("x", "1"), ("y", "2")]));
}
