//! Pattern 2: Visibility levels
//! Example: Public, module-scoped and private fields
//!
//! Run with: cargo run --bin encapsulation_02_access
//!
//! Rust has no `protected`; the closest thing is a field visible to a chosen
//! module subtree. `Animal::protected_info` is readable anywhere under
//! `encapsulation::access` (so `Dog` can use it) and nowhere else:
//!
//! ```compile_fail
//! use oop_concepts::encapsulation::access::Animal;
//!
//! let animal = Animal::new();
//! println!("{}", animal.protected_info);
//! ```
//!
//! `private_secret` is private to the `base` module that declares it, so even
//! `Dog` cannot read it, and neither can anyone else:
//!
//! ```compile_fail
//! use oop_concepts::encapsulation::access::Animal;
//!
//! let animal = Animal::new();
//! println!("{}", animal.private_secret);
//! ```

use std::io::{self, Write};

use crate::console::Console;

pub mod base {
    #[derive(Debug, Clone)]
    pub struct Animal {
        pub public_info: String,
        pub(in crate::encapsulation::access) protected_info: String,
        private_secret: String,
    }

    impl Animal {
        pub fn new() -> Self {
            Self {
                public_info: "I am public - everyone can access".to_string(),
                protected_info: "I am module-scoped - the access module can read me".to_string(),
                private_secret: "I am private".to_string(),
            }
        }

        pub fn public_method(&self) -> &'static str {
            "Public method called"
        }

        /// Only `Animal`'s own methods can look at the secret.
        pub fn has_secret(&self) -> bool {
            !self.private_secret.is_empty()
        }
    }

    impl Default for Animal {
        fn default() -> Self {
            Self::new()
        }
    }
}

pub use base::Animal;

/// Reuses `Animal` by holding one, rather than by deriving from it.
#[derive(Debug, Clone, Default)]
pub struct Dog {
    animal: Animal,
}

impl Dog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn demonstrate_access(&self) -> Vec<String> {
        vec![
            format!("Public: {}", self.animal.public_info),
            format!("Protected: {}", self.animal.protected_info),
        ]
    }

    pub fn use_inherited_method(&self) -> &'static str {
        self.animal.public_method()
    }
}

pub fn demo<W: Write>(console: &mut Console<W>) -> io::Result<()> {
    let animal = Animal::new();
    let dog = Dog::new();

    console.heading("Outside the access module")?;
    console.line(format!("Public: {}", animal.public_info))?;
    console.line(animal.public_method())?;
    console.line(format!("Keeps a secret: {}", animal.has_secret()))?;

    console.blank()?;
    console.heading("Inside Dog")?;
    for line in dog.demonstrate_access() {
        console.line(line)?;
    }
    console.line(dog.use_inherited_method())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_scoped_field_is_visible_inside_the_subtree() {
        let animal = Animal::new();
        assert!(animal.protected_info.contains("module-scoped"));
    }

    #[test]
    fn dog_sees_public_and_protected() {
        let lines = Dog::new().demonstrate_access();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Public: "));
        assert!(lines[1].starts_with("Protected: "));
    }

    #[test]
    fn public_field_is_mutable_from_outside() {
        let mut animal = Animal::new();
        animal.public_info = "changed".into();
        assert_eq!(animal.public_info, "changed");
        assert!(animal.has_secret());
    }

    #[test]
    fn demo_transcript() {
        let mut console = Console::capture();
        demo(&mut console).unwrap();
        assert_eq!(
            console.lines(),
            vec![
                "=== Outside the access module ===",
                "Public: I am public - everyone can access",
                "Public method called",
                "Keeps a secret: true",
                "",
                "=== Inside Dog ===",
                "Public: I am public - everyone can access",
                "Protected: I am module-scoped - the access module can read me",
                "Public method called",
            ]
        );
    }
}
