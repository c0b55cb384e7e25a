//! Collection recipes over the `Person` sample data

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::domain::Person;

pub const ADULT_AGE: u32 = 18;

pub fn is_adult(person: &Person) -> bool {
    person.age() >= ADULT_AGE
}

pub fn adults(persons: &[Person]) -> impl Iterator<Item = &Person> {
    persons.iter().filter(|p| is_adult(p))
}

pub fn adult_names(persons: &[Person]) -> Vec<String> {
    adults(persons).map(|p| p.name().to_string()).collect()
}

/// Mean age; `0.0` for an empty slice.
pub fn average_age(persons: &[Person]) -> f64 {
    if persons.is_empty() {
        return 0.0;
    }
    let total: u64 = persons.iter().map(|p| u64::from(p.age())).sum();
    total as f64 / persons.len() as f64
}

pub fn group_by_age(persons: &[Person]) -> BTreeMap<u32, Vec<Person>> {
    persons
        .iter()
        .cloned()
        .into_group_map_by(Person::age)
        .into_iter()
        .collect()
}

pub fn join_parts<S: AsRef<str>>(parts: &[S], separator: &str) -> String {
    parts.iter().map(AsRef::<str>::as_ref).join(separator)
}

pub fn drain_to_vec<I: Iterator>(iter: I) -> Vec<I::Item> {
    iter.collect_vec()
}

pub fn filter_equal<'a, T: PartialEq>(items: &'a [T], needle: &'a T) -> impl Iterator<Item = &'a T> {
    items.iter().filter(move |item| *item == needle)
}
