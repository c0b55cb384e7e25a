//! Comparator composition for `Person`

use std::cmp::Ordering;

use itertools::Itertools;

use crate::domain::Person;

pub fn by_name(a: &Person, b: &Person) -> Ordering {
    a.name().cmp(b.name())
}

pub fn by_age(a: &Person, b: &Person) -> Ordering {
    a.age().cmp(&b.age())
}

/// Name ascending, ties broken by age ascending.
pub fn by_name_then_age(a: &Person, b: &Person) -> Ordering {
    by_name(a, b).then_with(|| by_age(a, b))
}

/// Chain two comparators: `second` only decides ties of `first`.
pub fn compound<T, F, G>(first: F, second: G) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
    G: Fn(&T, &T) -> Ordering,
{
    move |a, b| first(a, b).then_with(|| second(a, b))
}

pub fn sorted_persons<F>(persons: &[Person], cmp: F) -> Vec<Person>
where
    F: FnMut(&Person, &Person) -> Ordering,
{
    persons.iter().cloned().sorted_by(cmp).collect()
}
