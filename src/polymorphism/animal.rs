//! Pattern 1: Heterogeneous collections
//! Example: Dogs, cats and birds in one `Vec<Box<dyn Animal>>`
//!
//! Run with: cargo run --bin polymorphism_01_animals

use std::io::{self, Write};

use serde::Deserialize;

use crate::console::Console;

pub trait Animal {
    fn make_sound(&self) -> String {
        "Generic animal sound".to_string()
    }

    fn movement(&self) -> String;
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    breed: String,
}

impl Dog {
    pub fn new(breed: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
        }
    }
}

impl Animal for Dog {
    fn make_sound(&self) -> String {
        "Woof! Woof!".to_string()
    }

    fn movement(&self) -> String {
        "Running on four legs".to_string()
    }

    fn describe(&self) -> String {
        format!("I am a {} dog", self.breed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    color: String,
}

impl Cat {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

impl Animal for Cat {
    fn make_sound(&self) -> String {
        "Meow! Meow!".to_string()
    }

    fn movement(&self) -> String {
        "Walking silently on four legs".to_string()
    }

    fn describe(&self) -> String {
        format!("I am a {} cat", self.color)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bird {
    species: String,
}

impl Bird {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
        }
    }
}

impl Animal for Bird {
    fn make_sound(&self) -> String {
        "Tweet! Tweet!".to_string()
    }

    fn movement(&self) -> String {
        "Flying in the sky".to_string()
    }

    fn describe(&self) -> String {
        format!("I am a {}", self.species)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnimalSpec {
    Dog { breed: String },
    Cat { color: String },
    Bird { species: String },
}

impl AnimalSpec {
    pub fn build(&self) -> Box<dyn Animal> {
        match self {
            Self::Dog { breed } => Box::new(Dog::new(breed.as_str())),
            Self::Cat { color } => Box::new(Cat::new(color.as_str())),
            Self::Bird { species } => Box::new(Bird::new(species.as_str())),
        }
    }
}

fn section<W: Write>(
    console: &mut Console<W>,
    title: &str,
    animals: &[Box<dyn Animal>],
    op: impl Fn(&dyn Animal) -> String,
) -> io::Result<()> {
    console.heading(title)?;
    for animal in animals {
        console.line(op(animal.as_ref()))?;
    }
    Ok(())
}

pub fn demo<W: Write>(console: &mut Console<W>, specs: &[AnimalSpec]) -> io::Result<()> {
    let animals: Vec<Box<dyn Animal>> = specs.iter().map(AnimalSpec::build).collect();

    section(console, "All Animals Making Sounds", &animals, |a| a.make_sound())?;
    console.blank()?;
    section(console, "All Animals Moving", &animals, |a| a.movement())?;
    console.blank()?;
    section(console, "All Animals Describing", &animals, |a| a.describe())?;

    console.blank()?;
    console.heading("Full Interaction")?;
    for animal in &animals {
        console.blank()?;
        console.line(animal.describe())?;
        console.line(animal.make_sound())?;
        console.line(animal.movement())?;
    }
    Ok(())
}
