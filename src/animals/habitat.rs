//! Animal schema with a habitat in the fourth field

use std::fmt;

use super::join_skills;

/// An animal described by where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub name: String,
    pub group: String,
    /// Free-form habitat label such as "land", "sky" or "sea"
    pub environment: String,
    pub skills: Vec<String>,
}

impl Animal {
    /// No validation: empty names or skill lists are accepted as given.
    pub fn new<S>(
        name: impl Into<String>,
        group: impl Into<String>,
        environment: impl Into<String>,
        skills: impl IntoIterator<Item = S>,
    ) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            group: group.into(),
            environment: environment.into(),
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }
}

// The fourth field keeps its historical "Legs" label.
impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Animal(Name: {}, Group: {}, Legs: {}, Skills: {})",
            self.name,
            self.group,
            self.environment,
            join_skills(&self.skills)
        )
    }
}

/// The five fixed sample animals.
pub fn samples() -> Vec<Animal> {
    vec![
        Animal::new("Cat", "Mammals", "land", ["jumping", "climbing", "hunting"]),
        Animal::new("Eagle", "Birds", "sky", ["flying", "hunting", "sharp vision"]),
        Animal::new("Frog", "Amphibians", "land", ["jumping", "swimming"]),
        Animal::new("Shark", "Fish", "sea", ["swimming", "hunting"]),
        Animal::new("Snake", "Reptiles", "land", ["slithering", "camouflage"]),
    ]
}
