//! Demo inputs.
//!
//! The programs take no arguments and read no files: their inputs are a TOML
//! document compiled into the binary. Parsing it through serde keeps the
//! heterogeneous collections (shapes, staff, animals) declarative, and the
//! `build`/`hire` factories on each entry type turn them into trait objects.

use serde::Deserialize;
use tracing::debug;

use crate::abstraction::shape::ShapeSpec;
use crate::encapsulation::bank_account::BankScenario;
use crate::error::ConfigError;
use crate::inheritance::employee::EmployeeSpec;
use crate::polymorphism::animal::AnimalSpec;
use crate::polymorphism::payment::CheckoutScenario;

const EMBEDDED: &str = include_str!("../config/demos.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VtableScenario {
    pub rotation_degrees: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    pub shapes: Vec<ShapeSpec>,
    pub bank: BankScenario,
    pub company: Vec<EmployeeSpec>,
    pub animals: Vec<AnimalSpec>,
    pub checkout: CheckoutScenario,
    pub vtable: VtableScenario,
}

impl DemoConfig {
    /// The document shipped with the binaries.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        debug!(
            shapes = config.shapes.len(),
            staff = config.company.len(),
            animals = config.animals.len(),
            "demo config loaded"
        );
        Ok(config)
    }

    /// Collects every problem instead of stopping at the first.
    ///
    /// Bank operations are not checked: non-positive and overdrawing amounts
    /// are how the demo shows the rejection path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if self.shapes.is_empty() {
            problems.push("shapes: at least one shape is required".to_string());
        }
        problems.extend(self.shapes.iter().filter_map(|shape| shape.validate().err()));

        if self.bank.opening_balance.cents() < 0 {
            problems.push(format!(
                "bank.opening_balance: {} is negative",
                self.bank.opening_balance
            ));
        }
        if self.company.is_empty() {
            problems.push("company: at least one employee is required".to_string());
        }
        if self.animals.is_empty() {
            problems.push("animals: at least one animal is required".to_string());
        }
        if !self.checkout.order_total.is_positive() {
            problems.push(format!(
                "checkout.order_total: {} must be positive",
                self.checkout.order_total
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid { problems })
        }
    }
}
