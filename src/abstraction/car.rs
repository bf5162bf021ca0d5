//! Pattern 2: Attributes and methods
//! Example: A car whose state only changes through its methods
//!
//! Run with: cargo run --bin abstraction_02_car

use std::io::{self, Write};

use tracing::debug;

use crate::console::Console;

const SPEED_STEP: u32 = 10;
const MAX_SPEED: u32 = 200;

#[derive(Debug, Clone)]
pub struct Car {
    brand: String,
    model: String,
    year: u16,
    running: bool,
    speed: u32,
}

impl Car {
    pub fn new(brand: impl Into<String>, model: impl Into<String>, year: u16) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
            running: false,
            speed: 0,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current speed in km/h.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    // The state-changing methods return the message for the change they made,
    // or `None` when the call was a no-op.

    pub fn start_engine(&mut self) -> Option<String> {
        if self.running {
            return None;
        }
        self.running = true;
        debug!(brand = %self.brand, "engine started");
        Some(format!("{} {} engine started", self.brand, self.model))
    }

    pub fn stop_engine(&mut self) -> Option<String> {
        if !self.running {
            return None;
        }
        self.running = false;
        self.speed = 0;
        debug!(brand = %self.brand, "engine stopped");
        Some(format!("{} {} engine stopped", self.brand, self.model))
    }

    pub fn accelerate(&mut self) -> Option<String> {
        if !self.running || self.speed >= MAX_SPEED {
            return None;
        }
        self.speed += SPEED_STEP;
        Some(format!("Speed: {} km/h", self.speed))
    }

    pub fn decelerate(&mut self) -> Option<String> {
        if self.speed == 0 {
            return None;
        }
        self.speed = self.speed.saturating_sub(SPEED_STEP);
        Some(format!("Speed: {} km/h", self.speed))
    }

    pub fn info(&self) -> Vec<String> {
        vec![
            format!("Brand: {}", self.brand),
            format!("Model: {}", self.model),
            format!("Year: {}", self.year),
            format!("Running: {}", if self.running { "Yes" } else { "No" }),
            format!("Speed: {} km/h", self.speed),
        ]
    }
}

fn display_info<W: Write>(console: &mut Console<W>, car: &Car) -> io::Result<()> {
    console.blank()?;
    console.heading("Car Information")?;
    for line in car.info() {
        console.line(line)?;
    }
    Ok(())
}

pub fn demo<W: Write>(console: &mut Console<W>) -> io::Result<()> {
    let mut car = Car::new("Toyota", "Corolla", 2023);

    display_info(console, &car)?;

    console.blank()?;
    console.subheading("Driving")?;
    let events = [
        car.start_engine(),
        car.accelerate(),
        car.accelerate(),
        car.decelerate(),
        car.stop_engine(),
    ];
    for event in events.into_iter().flatten() {
        console.line(event)?;
    }

    display_info(console, &car)
}
