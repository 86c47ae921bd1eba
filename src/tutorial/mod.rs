//! Data types tour
//!
//! Documentation as code: each [`Sample`] pairs a source expression with its
//! value and the type Rust infers for it. Sections follow the order of the
//! classic exercises: category table, type reporting, numbers, conversions,
//! random draw and text rendering.

pub mod complex;
pub mod convert;
pub mod random;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::Write;
use std::ops::Range;

use rand::Rng;
use strum::IntoEnumIterator;

use crate::error::Result;
use crate::types::TypeCategory;
use complex::Complex;

/// One demonstrated expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub expr: String,
    pub rendered: String,
    pub type_name: String,
}

impl Sample {
    pub fn of<T: fmt::Debug>(expr: impl Into<String>, value: T) -> Self {
        Self {
            expr: expr.into(),
            rendered: format!("{value:?}"),
            type_name: short_type_name(std::any::type_name::<T>()),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {} ({})", self.expr, self.rendered, self.type_name)
    }
}

macro_rules! sample {
    ($e:expr) => {
        Sample::of(stringify!($e), $e)
    };
}

/// A titled group of samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub samples: Vec<Sample>,
}

/// Strips module paths: `alloc::vec::Vec<alloc::string::String>` -> `Vec<String>`.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut token = String::new();
    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            token.push(c);
        } else {
            out.push_str(token.rsplit("::").next().unwrap_or_default());
            token.clear();
            out.push(c);
        }
    }
    out.push_str(token.rsplit("::").next().unwrap_or_default());
    out
}

fn type_per_category() -> Section {
    Section {
        title: "One value per category",
        samples: vec![
            sample!(String::from("Hello World")),
            sample!(20_i64),
            sample!(20.5_f64),
            sample!(Complex::imaginary(1.0)),
            sample!(vec!["apple", "banana", "cherry"]),
            sample!(("apple", "banana", "cherry")),
            sample!(0..6),
            sample!(BTreeMap::from([("name", "John"), ("age", "36")])),
            sample!(BTreeSet::from(["apple", "banana", "cherry"])),
            sample!(true),
            sample!(b"Hello"),
            sample!(vec![0_u8; 5]),
            sample!(&[0_u8; 5][..]),
            sample!(None::<i64>),
            sample!(()),
        ],
    }
}

fn numbers() -> Vec<Section> {
    vec![
        Section {
            title: "Default literal types",
            samples: vec![sample!(5), sample!(2.8), sample!(Complex::imaginary(1.0))],
        },
        Section {
            title: "Integers",
            samples: vec![
                sample!(1_i64),
                sample!(35656222554887711_i64),
                sample!(-3255522_i64),
            ],
        },
        Section {
            title: "Floats",
            samples: vec![sample!(1.10_f64), sample!(1.0_f64), sample!(-35.59_f64)],
        },
        Section {
            title: "Scientific notation",
            samples: vec![sample!(35e3), sample!(12E4), sample!(-87.7e100)],
        },
        Section {
            title: "Complex numbers",
            samples: vec![
                sample!(Complex::new(3.0, 5.0)),
                sample!(Complex::imaginary(5.0)),
                sample!(Complex::imaginary(-5.0)),
            ],
        },
    ]
}

fn conversions() -> Result<Vec<Section>> {
    Ok(vec![
        Section {
            title: "Converting between numeric types",
            samples: vec![
                Sample::of("int_to_float(1)", convert::int_to_float(1)),
                Sample::of("float_to_int(2.8)", convert::float_to_int(2.8)?),
                Sample::of("int_to_complex(1)", convert::int_to_complex(1)),
            ],
        },
        Section {
            title: "To integer",
            samples: vec![
                Sample::of("1", 1_i64),
                Sample::of("float_to_int(2.8)", convert::float_to_int(2.8)?),
                Sample::of("parse_int(\"3\")", convert::parse_int("3")?),
            ],
        },
        Section {
            title: "To float",
            samples: vec![
                Sample::of("int_to_float(1)", convert::int_to_float(1)),
                Sample::of("2.8", 2.8_f64),
                Sample::of("parse_float(\"3\")", convert::parse_float("3")?),
                Sample::of("parse_float(\"4.2\")", convert::parse_float("4.2")?),
            ],
        },
        Section {
            title: "To text",
            samples: vec![
                Sample::of("String::from(\"s1\")", String::from("s1")),
                Sample::of("int_to_text(2)", convert::int_to_text(2)),
                Sample::of("float_to_text(3.0)", convert::float_to_text(3.0)),
            ],
        },
    ])
}

/// All fixed sections, in presentation order.
pub fn sections() -> Result<Vec<Section>> {
    let mut all = vec![type_per_category()];
    all.extend(numbers());
    all.extend(conversions()?);
    Ok(all)
}

/// Writes the category table, one category per line.
pub fn print_categories<W: Write>(out: &mut W) -> Result<()> {
    for category in TypeCategory::iter() {
        writeln!(out, "{}:\t{}", category.heading(), category.members().join(", "))?;
    }
    Ok(())
}

/// Runs the whole tour, drawing the random number from `rng`.
pub fn run<W, R>(out: &mut W, rng: &mut R, range: Range<i64>) -> Result<()>
where
    W: Write,
    R: Rng + ?Sized,
{
    print_categories(out)?;
    for section in sections()? {
        writeln!(out)?;
        writeln!(out, "# {}", section.title)?;
        for sample in &section.samples {
            writeln!(out, "{sample}")?;
        }
    }

    let (low, high) = (range.start, range.end);
    let value = random::draw(rng, range)?;
    writeln!(out)?;
    writeln!(out, "# Random number")?;
    writeln!(out, "draw({low}..{high}) => {value}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_type_name() {
        assert_eq!(
            short_type_name("alloc::vec::Vec<alloc::string::String>"),
            "Vec<String>"
        );
        assert_eq!(short_type_name("(i64, &str)"), "(i64, &str)");
        assert_eq!(
            short_type_name("core::option::Option<i64>"),
            "Option<i64>"
        );
    }

    #[test]
    fn test_literal_defaults() {
        let sections = numbers();
        let defaults = &sections[0].samples;
        assert_eq!(defaults[0].type_name, "i32");
        assert_eq!(defaults[1].type_name, "f64");
        assert_eq!(defaults[2].type_name, "Complex");
    }

    #[test]
    fn test_sample_display() {
        let sample = sample!(35e3);
        assert_eq!(sample.to_string(), "35e3 => 35000.0 (f64)");
    }

    #[test]
    fn test_conversion_section_values() {
        let sections = conversions().unwrap();
        let rendered: Vec<&str> = sections[0]
            .samples
            .iter()
            .map(|s| s.rendered.as_str())
            .collect();
        assert_eq!(rendered, ["1.0", "2", "(1+0j)"]);

        let text: Vec<&str> = sections[3]
            .samples
            .iter()
            .map(|s| s.rendered.as_str())
            .collect();
        assert_eq!(text, ["\"s1\"", "\"2\"", "\"3.0\""]);
    }

    #[test]
    fn test_categories_table() {
        let mut out = Vec::new();
        print_categories(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 8);
        assert!(text.starts_with("Text Type:\tString, &str, char\n"));
    }
}
