use std::fmt;

/// Sample record used by the collection, ordering and optional recipes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
    age: u32,
    parent: Option<Box<Person>>,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            parent: None,
        }
    }

    /// Link a parent after construction.
    pub fn with_parent(mut self, parent: Person) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn parent(&self) -> Option<&Person> {
        self.parent.as_deref()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.age)
    }
}

pub const UNKNOWN: &str = "Unknown";
pub const UNKNOWN_PARENT: &str = "Unknown Parent";

/// Name of the person, or `"Unknown"` when absent.
pub fn name_or_unknown(person: Option<&Person>) -> String {
    person
        .map(|p| p.name().to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Name of the person's parent; `"Unknown Parent"` if either link is missing.
pub fn parent_name_or_unknown(person: Option<&Person>) -> String {
    person
        .and_then(Person::parent)
        .map(|p| p.name().to_string())
        .unwrap_or_else(|| UNKNOWN_PARENT.to_string())
}

pub fn sample_persons() -> Vec<Person> {
    vec![Person::new("Foo", 20), Person::new("Bar", 15)]
}

pub fn sample_person() -> Option<Person> {
    Some(Person::new("Foo", 20))
}
