//! Animal schema with a leg count in the fourth field

use std::fmt;

use serde::Serialize;

use super::join_skills;

/// An animal described by how many legs it has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Animal {
    pub name: String,
    pub group: String,
    pub number_of_legs: u32,
    pub skills: Vec<String>,
}

impl Animal {
    pub fn new<S>(
        name: impl Into<String>,
        group: impl Into<String>,
        number_of_legs: u32,
        skills: impl IntoIterator<Item = S>,
    ) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            group: group.into(),
            number_of_legs,
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Animal(Name: {}, Group: {}, Legs: {}, Skills: {})",
            self.name,
            self.group,
            self.number_of_legs,
            join_skills(&self.skills)
        )
    }
}

/// The five fixed sample animals.
pub fn samples() -> Vec<Animal> {
    vec![
        Animal::new("Cat", "Mammals", 4, ["jumping", "climbing", "hunting"]),
        Animal::new("Eagle", "Birds", 2, ["flying", "hunting", "sharp vision"]),
        Animal::new("Frog", "Amphibians", 4, ["jumping", "swimming"]),
        Animal::new("Shark", "Fish", 0, ["swimming", "hunting"]),
        Animal::new("Snake", "Reptiles", 0, ["slithering", "camouflage"]),
    ]
}
