//! Animals as key/value mappings
//!
//! A [`Record`] keeps its fields in insertion order and prints itself as a raw
//! dictionary-literal dump, e.g.
//! `{'name': 'Cat', 'group': 'Mammals', 'number_of_legs': 4, 'skills': [...]}`.

use std::fmt;
use std::io::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::legs;
use crate::error::Result;

/// A single value inside a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Int(i64),
    List(Vec<Value>),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Quotes text with single quotes unless the text itself holds one and no
/// double quote. Control characters never appear raw: `\r` stays `\r`,
/// NUL becomes `\x00`.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    write!(f, "{quote}")?;
    for c in s.chars() {
        match c {
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            c if c == quote => write!(f, "\\{c}")?,
            // every Cc control character sits below U+00A0
            c if c.is_control() => write!(f, "\\x{:02x}", u32::from(c))?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "{quote}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write_quoted(f, s),
            Self::Int(n) => write!(f, "{n}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// An insertion-ordered set of field/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing an existing value in place or appending a new pair.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Builder form of [`Record::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write_quoted(f, key)?;
            write!(f, ": {value}")?;
        }
        write!(f, "}}")
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl From<&legs::Animal> for Record {
    fn from(animal: &legs::Animal) -> Self {
        Record::new()
            .with("name", animal.name.as_str())
            .with("group", animal.group.as_str())
            .with("number_of_legs", animal.number_of_legs)
            .with("skills", animal.skills.clone())
    }
}

/// The five fixed sample records, written out literally.
pub fn samples() -> Vec<Record> {
    vec![
        Record::new()
            .with("name", "Cat")
            .with("group", "Mammals")
            .with("number_of_legs", 4_i64)
            .with("skills", vec!["jumping", "climbing", "hunting"]),
        Record::new()
            .with("name", "Eagle")
            .with("group", "Birds")
            .with("number_of_legs", 2_i64)
            .with("skills", vec!["flying", "hunting", "sharp vision"]),
        Record::new()
            .with("name", "Frog")
            .with("group", "Amphibians")
            .with("number_of_legs", 4_i64)
            .with("skills", vec!["jumping", "swimming"]),
        Record::new()
            .with("name", "Shark")
            .with("group", "Fish")
            .with("number_of_legs", 0_i64)
            .with("skills", vec!["swimming", "hunting"]),
        Record::new()
            .with("name", "Snake")
            .with("group", "Reptiles")
            .with("number_of_legs", 0_i64)
            .with("skills", vec!["slithering", "camouflage"]),
    ]
}

/// Writes each record as a compact JSON object, one per line.
pub fn print_json<W: Write>(out: &mut W, records: &[Record]) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    Ok(())
}
