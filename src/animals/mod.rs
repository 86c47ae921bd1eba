//! Animal registries
//!
//! Two incompatible schemas of the same record live side by side:
//! [`habitat`] keeps a habitat label in the fourth field, [`legs`] keeps a leg
//! count. [`record`] holds the leg-count data as key/value mappings.

pub mod habitat;
pub mod legs;
pub mod record;

use std::io::Write;

use crate::error::Result;

/// Writes each item on its own line, in order.
pub fn print_all<W, T>(out: &mut W, items: &[T]) -> Result<()>
where
    W: Write,
    T: std::fmt::Display,
{
    for item in items {
        writeln!(out, "{item}")?;
    }
    Ok(())
}

/// Joins skills the way both object schemas display them.
pub(crate) fn join_skills(skills: &[String]) -> String {
    skills.join(", ")
}
