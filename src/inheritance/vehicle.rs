//! Pattern 1: Shared base state and overridable behavior
//! Example: Cars and motorcycles over a common `VehicleProfile`
//!
//! Run with: cargo run --bin inheritance_01_vehicles
//!
//! `print_info` comes from a blanket impl, so a variant cannot replace it:
//!
//! ```compile_fail
//! use oop_concepts::inheritance::vehicle::{Vehicle, VehicleInfo, VehicleProfile};
//!
//! struct Truck {
//!     profile: VehicleProfile,
//! }
//!
//! impl Vehicle for Truck {
//!     fn profile(&self) -> &VehicleProfile {
//!         &self.profile
//!     }
//! }
//!
//! impl VehicleInfo for Truck {
//!     fn print_info(&self) -> String {
//!         String::from("my own info")
//!     }
//! }
//! ```

use std::io::{self, Write};

use crate::console::Console;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleProfile {
    brand: String,
    year: u16,
}

impl VehicleProfile {
    pub fn new(brand: impl Into<String>, year: u16) -> Self {
        Self {
            brand: brand.into(),
            year,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn year(&self) -> u16 {
        self.year
    }
}

pub trait Vehicle {
    fn profile(&self) -> &VehicleProfile;

    fn start(&self) -> String {
        format!("{} vehicle starting...", self.profile().brand())
    }

    fn stop(&self) -> String {
        format!("{} vehicle stopping...", self.profile().brand())
    }
}

/// Behavior shared by every vehicle that no vehicle may change.
pub trait VehicleInfo {
    fn print_info(&self) -> String;
}

impl<V: Vehicle + ?Sized> VehicleInfo for V {
    fn print_info(&self) -> String {
        let profile = self.profile();
        format!("Brand: {}, Year: {}", profile.brand(), profile.year())
    }
}

#[derive(Debug, Clone)]
pub struct Car {
    profile: VehicleProfile,
    doors: u8,
}

impl Car {
    pub fn new(brand: impl Into<String>, year: u16, doors: u8) -> Self {
        Self {
            profile: VehicleProfile::new(brand, year),
            doors,
        }
    }

    pub fn doors(&self) -> u8 {
        self.doors
    }

    pub fn open_trunk(&self) -> &'static str {
        "Trunk opened"
    }
}

impl Vehicle for Car {
    fn profile(&self) -> &VehicleProfile {
        &self.profile
    }

    fn start(&self) -> String {
        format!(
            "{} car with {} doors starting...",
            self.profile.brand(),
            self.doors
        )
    }

    fn stop(&self) -> String {
        format!("{} car is parking...", self.profile.brand())
    }
}

#[derive(Debug, Clone)]
pub struct Motorcycle {
    profile: VehicleProfile,
    has_sidecar: bool,
}

impl Motorcycle {
    pub fn new(brand: impl Into<String>, year: u16, has_sidecar: bool) -> Self {
        Self {
            profile: VehicleProfile::new(brand, year),
            has_sidecar,
        }
    }

    pub fn has_sidecar(&self) -> bool {
        self.has_sidecar
    }

    pub fn wheelie(&self) -> &'static str {
        if self.has_sidecar {
            "No wheelies with a sidecar attached"
        } else {
            "Performing a wheelie!"
        }
    }
}

impl Vehicle for Motorcycle {
    fn profile(&self) -> &VehicleProfile {
        &self.profile
    }

    fn start(&self) -> String {
        format!("{} motorcycle engine roaring...", self.profile.brand())
    }

    fn stop(&self) -> String {
        format!("{} motorcycle stopped", self.profile.brand())
    }
}

pub fn demo<W: Write>(console: &mut Console<W>) -> io::Result<()> {
    let car = Car::new("Toyota", 2023, 4);
    let bike = Motorcycle::new("Harley-Davidson", 2022, false);

    console.heading("Car Info")?;
    console.line(car.print_info())?;
    console.line(car.start())?;
    console.line(car.stop())?;
    console.line(car.open_trunk())?;

    console.blank()?;
    console.heading("Motorcycle Info")?;
    console.line(bike.print_info())?;
    console.line(bike.start())?;
    console.line(bike.stop())?;
    console.line(bike.wheelie())?;

    // Only the trait's operations are reachable through these handles:
    // no open_trunk(), no wheelie().
    console.blank()?;
    console.heading("Through &dyn Vehicle")?;
    let vehicles: [&dyn Vehicle; 2] = [&car, &bike];
    for vehicle in vehicles {
        console.line(vehicle.start())?;
        console.line(vehicle.print_info())?;
    }
    Ok(())
}
