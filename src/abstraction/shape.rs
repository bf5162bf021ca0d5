//! Pattern 3: Abstract contracts
//! Example: Shapes behind a `Shape` trait with one defaulted method
//!
//! Run with: cargo run --bin abstraction_03_shapes
//!
//! A contract cannot be instantiated on its own:
//!
//! ```compile_fail
//! use oop_concepts::abstraction::shape::Shape;
//!
//! let shape = Shape { name: String::from("Invalid") };
//! ```
//!
//! and a variant must supply every required operation:
//!
//! ```compile_fail
//! use oop_concepts::abstraction::shape::Shape;
//!
//! struct Blob;
//!
//! impl Shape for Blob {
//!     fn name(&self) -> &str {
//!         "blob"
//!     }
//!
//!     fn area(&self) -> f64 {
//!         0.0
//!     }
//!     // perimeter() missing
//! }
//! ```

use std::f64::consts::PI;
use std::io::{self, Write};

use serde::Deserialize;

use crate::console::Console;

pub trait Shape {
    fn name(&self) -> &str;
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;

    fn describe(&self) -> String {
        format!("Shape: {}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    name: String,
    radius: f64,
}

impl Circle {
    pub fn new(name: impl Into<String>, radius: f64) -> Self {
        Self {
            name: name.into(),
            radius,
        }
    }
}

impl Shape for Circle {
    fn name(&self) -> &str {
        &self.name
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    name: String,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &str {
        &self.name
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    name: String,
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    pub fn new(name: impl Into<String>, a: f64, b: f64, c: f64) -> Self {
        Self {
            name: name.into(),
            a,
            b,
            c,
        }
    }
}

impl Shape for Triangle {
    fn name(&self) -> &str {
        &self.name
    }

    // Heron's formula. Side lengths that can't close a triangle give 0, not NaN.
    fn area(&self) -> f64 {
        let s = (self.a + self.b + self.c) / 2.0;
        let squared = s * (s - self.a) * (s - self.b) * (s - self.c);
        squared.max(0.0).sqrt()
    }

    fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    fn describe(&self) -> String {
        format!("Shape: {} (sides {}, {}, {})", self.name, self.a, self.b, self.c)
    }
}

/// Shape entry of the demo config, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Circle { name: String, radius: f64 },
    Rectangle { name: String, width: f64, height: f64 },
    Triangle { name: String, a: f64, b: f64, c: f64 },
}

impl ShapeSpec {
    pub fn name(&self) -> &str {
        match self {
            Self::Circle { name, .. } | Self::Rectangle { name, .. } | Self::Triangle { name, .. } => {
                name
            }
        }
    }

    fn dimensions(&self) -> Vec<f64> {
        match *self {
            Self::Circle { radius, .. } => vec![radius],
            Self::Rectangle { width, height, .. } => vec![width, height],
            Self::Triangle { a, b, c, .. } => vec![a, b, c],
        }
    }

    /// Dimensions must be finite and non-negative.
    pub fn validate(&self) -> Result<(), String> {
        if self
            .dimensions()
            .iter()
            .all(|d| d.is_finite() && *d >= 0.0)
        {
            Ok(())
        } else {
            Err(format!(
                "shape '{}' has a negative or non-finite dimension",
                self.name()
            ))
        }
    }

    pub fn build(&self) -> Box<dyn Shape> {
        match self {
            Self::Circle { name, radius } => Box::new(Circle::new(name.as_str(), *radius)),
            Self::Rectangle {
                name,
                width,
                height,
            } => Box::new(Rectangle::new(name.as_str(), *width, *height)),
            Self::Triangle { name, a, b, c } => Box::new(Triangle::new(name.as_str(), *a, *b, *c)),
        }
    }
}

/// Works for any shape, sized or behind a `dyn`.
pub fn report<S: Shape + ?Sized>(shape: &S) -> Vec<String> {
    vec![
        shape.describe(),
        format!("Area: {:.2}", shape.area()),
        format!("Perimeter: {:.2}", shape.perimeter()),
    ]
}

pub fn demo<W: Write>(console: &mut Console<W>, specs: &[ShapeSpec]) -> io::Result<()> {
    let shapes: Vec<Box<dyn Shape>> = specs.iter().map(ShapeSpec::build).collect();

    console.heading("Shape Information")?;
    for shape in &shapes {
        for line in report(shape.as_ref()) {
            console.line(line)?;
        }
        console.blank()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn formulas() {
        let circle = Circle::new("c", 5.0);
        assert!((circle.area() - 78.539_816_339_744_83).abs() < EPS);
        assert!((circle.perimeter() - 31.415_926_535_897_93).abs() < EPS);

        let rect = Rectangle::new("r", 4.0, 6.0);
        assert_eq!(rect.area(), 24.0);
        assert_eq!(rect.perimeter(), 20.0);

        let tri = Triangle::new("t", 3.0, 4.0, 5.0);
        assert!((tri.area() - 6.0).abs() < EPS);
        assert_eq!(tri.perimeter(), 12.0);
    }

    #[test]
    fn degenerate_triangle_has_zero_area() {
        let tri = Triangle::new("flat", 1.0, 2.0, 10.0);
        assert_eq!(tri.area(), 0.0);
    }

    #[test]
    fn default_and_overridden_describe() {
        assert_eq!(Circle::new("My Circle", 1.0).describe(), "Shape: My Circle");
        assert_eq!(
            Triangle::new("My Triangle", 3.0, 4.0, 5.0).describe(),
            "Shape: My Triangle (sides 3, 4, 5)"
        );
    }

    #[test]
    fn report_goes_through_the_contract_only() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle::new("My Circle", 5.0)),
            Box::new(Rectangle::new("My Rectangle", 4.0, 6.0)),
            Box::new(Triangle::new("My Triangle", 3.0, 4.0, 5.0)),
        ];
        let reports: Vec<Vec<String>> = shapes.iter().map(|s| report(s.as_ref())).collect();
        assert_eq!(reports[0][1], "Area: 78.54");
        assert_eq!(reports[1][2], "Perimeter: 20.00");
        assert_eq!(reports[2][1], "Area: 6.00");
    }

    #[test]
    fn spec_validation() {
        let ok = ShapeSpec::Circle {
            name: "c".into(),
            radius: 1.0,
        };
        assert!(ok.validate().is_ok());

        let bad = ShapeSpec::Rectangle {
            name: "r".into(),
            width: -1.0,
            height: 2.0,
        };
        assert_eq!(
            bad.validate(),
            Err("shape 'r' has a negative or non-finite dimension".to_string())
        );
    }

    #[test]
    fn spec_deserializes_by_kind() {
        #[derive(Deserialize)]
        struct Doc {
            shapes: Vec<ShapeSpec>,
        }
        let doc: Doc = toml::from_str(
            r#"
            [[shapes]]
            kind = "triangle"
            name = "T"
            a = 3.0
            b = 4.0
            c = 5.0
            "#,
        )
        .unwrap();
        assert_eq!(doc.shapes[0].name(), "T");
        assert!((doc.shapes[0].build().area() - 6.0).abs() < EPS);
    }

    proptest! {
        #[test]
        fn area_and_perimeter_are_pure(
            r in 0.0f64..1e3,
            w in 0.0f64..1e3,
            h in 0.0f64..1e3,
        ) {
            let shapes: Vec<Box<dyn Shape>> = vec![
                Box::new(Circle::new("c", r)),
                Box::new(Rectangle::new("r", w, h)),
                Box::new(Triangle::new("t", r, w, h)),
            ];
            for shape in &shapes {
                let first = (shape.area(), shape.perimeter());
                let second = (shape.area(), shape.perimeter());
                prop_assert_eq!(first, second);
                prop_assert!(first.0 >= 0.0);
                prop_assert!(first.1 >= 0.0);
            }
        }
    }
}
