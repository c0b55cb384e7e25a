use rscookbook::collections::{
    adult_names, adults, average_age, drain_to_vec, filter_equal, group_by_age, join_parts,
};
use rscookbook::domain::{sample_persons, Person};
use rscookbook::ordering::{by_age, by_name, by_name_then_age, compound, sorted_persons};
use rscookbook::util::testing;
use rstest::{fixture, rstest};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[fixture]
fn persons() -> Vec<Person> {
    sample_persons()
}

#[fixture]
fn family() -> Vec<Person> {
    vec![
        Person::new("Bob", 40),
        Person::new("Alice", 17),
        Person::new("Bob", 12),
        Person::new("Carol", 40),
    ]
}

#[rstest]
fn given_sample_persons_when_filtering_adults_then_only_foo(persons: Vec<Person>) {
    assert_eq!(adult_names(&persons), vec!["Foo".to_string()]);
    assert_eq!(adults(&persons).count(), 1);
}

#[rstest]
fn given_sample_persons_when_averaging_age_then_mean(persons: Vec<Person>) {
    assert_eq!(average_age(&persons), 17.5);
}

#[rstest]
fn given_family_when_grouping_by_age_then_keys_sorted(family: Vec<Person>) {
    let groups = group_by_age(&family);

    assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![12, 17, 40]);
    let names: Vec<&str> = groups[&40].iter().map(Person::name).collect();
    assert_eq!(names, vec!["Bob", "Carol"]);
}

#[rstest]
fn given_family_when_sorting_by_name_then_age_then_ties_broken_by_age(family: Vec<Person>) {
    let sorted: Vec<String> = sorted_persons(&family, by_name_then_age)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(sorted, vec!["Alice 17", "Bob 12", "Bob 40", "Carol 40"]);
}

#[rstest]
fn given_compound_comparator_when_sorting_then_same_as_by_name_then_age(family: Vec<Person>) {
    let composed = compound(by_name, by_age);
    assert_eq!(
        sorted_persons(&family, |a, b| composed(a, b)),
        sorted_persons(&family, by_name_then_age)
    );
}

#[rstest]
fn given_parts_when_joining_then_comma_separated() {
    let parts = vec!["x".to_string(), "y".to_string()];
    assert_eq!(join_parts(&parts, ", "), "x, y");
}

#[rstest]
fn given_iterator_when_draining_then_owned_vec() {
    let items = drain_to_vec(vec!["a", "b"].into_iter());
    assert_eq!(items, vec!["a", "b"]);
}

#[rstest]
fn given_letters_when_filtering_equal_then_only_matches() {
    let letters = ["a", "b", "c"];
    let matched: Vec<_> = filter_equal(&letters, &"a").collect();
    assert_eq!(matched, vec![&"a"]);
}
