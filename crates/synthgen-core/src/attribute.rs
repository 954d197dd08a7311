use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Declared kind of a dataset column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    #[default]
    String,
    Number,
    Boolean,
    Date,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 4] = [
        AttributeKind::String,
        AttributeKind::Number,
        AttributeKind::Boolean,
        AttributeKind::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKind::String => "string",
            AttributeKind::Number => "number",
            AttributeKind::Boolean => "boolean",
            AttributeKind::Date => "date",
        }
    }

    /// Next kind in selector order, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            AttributeKind::String => AttributeKind::Number,
            AttributeKind::Number => AttributeKind::Boolean,
            AttributeKind::Boolean => AttributeKind::Date,
            AttributeKind::Date => AttributeKind::String,
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        AttributeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("unknown attribute kind: {value}"))
    }
}

/// A user-declared column: name plus kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub kind: AttributeKind,
}

impl Attribute {
    pub fn new(name: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Descriptor fragment, e.g. `id (number)`.
    pub fn describe(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}

/// Pending candidate being edited before it is appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeDraft {
    pub name: String,
    pub kind: AttributeKind,
}

impl AttributeDraft {
    pub fn to_attribute(&self) -> Attribute {
        Attribute::new(self.name.clone(), self.kind)
    }
}

/// Ordered attribute collection; insertion order drives display and prompt order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeList {
    items: Vec<Attribute>,
}

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `candidate` unless its name is empty or whitespace.
    ///
    /// Returns `true` when the attribute was stored. Duplicate names are
    /// accepted; the name is kept exactly as typed.
    pub fn append(&mut self, candidate: Attribute) -> bool {
        if candidate.name.trim().is_empty() {
            return false;
        }
        self.items.push(candidate);
        true
    }

    /// Removes the attribute at `index`; out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<Attribute> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Attribute> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Attribute] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Attribute> for AttributeList {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut list = AttributeList::new();
        for attribute in iter {
            list.append(attribute);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(names: &[&str]) -> AttributeList {
        names
            .iter()
            .map(|name| Attribute::new(*name, AttributeKind::String))
            .collect()
    }

    #[test]
    fn append_keeps_prior_order_as_prefix() {
        let mut list = list_of(&["id", "name"]);
        let before = list.clone();

        assert!(list.append(Attribute::new("hired", AttributeKind::Date)));
        assert_eq!(list.len(), before.len() + 1);
        assert_eq!(&list.as_slice()[..before.len()], before.as_slice());
        assert_eq!(list.get(2).map(|a| a.name.as_str()), Some("hired"));
    }

    #[test]
    fn append_rejects_blank_names() {
        let mut list = list_of(&["id"]);
        let before = list.clone();

        for name in ["", " ", "\t", "  \n "] {
            assert!(!list.append(Attribute::new(name, AttributeKind::Number)));
        }
        assert_eq!(list, before);
    }

    #[test]
    fn append_accepts_duplicates() {
        let mut list = list_of(&["id"]);
        assert!(list.append(Attribute::new("id", AttributeKind::Number)));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_at_preserves_relative_order() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        let removed = list.remove_at(1).expect("valid index");
        assert_eq!(removed.name, "b");
        let names: Vec<&str> = list.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
    }

    #[test]
    fn remove_at_out_of_range_is_noop() {
        let mut list = list_of(&["a", "b"]);
        let before = list.clone();
        assert!(list.remove_at(2).is_none());
        assert!(list.remove_at(usize::MAX).is_none());
        assert_eq!(list, before);

        let mut empty = AttributeList::new();
        assert!(empty.remove_at(0).is_none());
    }

    #[test]
    fn kind_cycles_through_selector_order() {
        let mut kind = AttributeKind::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(kind);
            kind = kind.cycle();
        }
        assert_eq!(seen, AttributeKind::ALL.to_vec());
        assert_eq!(kind, AttributeKind::String);
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Date".parse::<AttributeKind>(), Ok(AttributeKind::Date));
        assert!("uuid".parse::<AttributeKind>().is_err());
    }
}
