//! Pattern 3: Abstract worker contract
//! Example: A company of engineers, managers and designers
//!
//! Run with: cargo run --bin inheritance_03_employees

use std::io::{self, Write};

use serde::Deserialize;

use crate::console::Console;
use crate::money::Money;

pub trait Employee {
    fn name(&self) -> &str;
    fn work(&self) -> String;
    fn salary(&self) -> Money;

    fn salary_report(&self) -> String {
        format!("{}'s salary: {}", self.name(), self.salary())
    }
}

macro_rules! employee_variant {
    ($ty:ident, $salary:expr, $activity:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $ty {
            name: String,
        }

        impl $ty {
            pub const SALARY: Money = $salary;

            pub fn new(name: impl Into<String>) -> Self {
                Self { name: name.into() }
            }
        }

        impl Employee for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn work(&self) -> String {
                format!("{} {}", self.name, $activity)
            }

            fn salary(&self) -> Money {
                Self::SALARY
            }
        }
    };
}

employee_variant!(Engineer, Money::dollars(80_000), "is writing code and debugging");
employee_variant!(Manager, Money::dollars(100_000), "is managing the team");
employee_variant!(Designer, Money::dollars(75_000), "is designing user interfaces");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Engineer,
    Manager,
    Designer,
}

/// One entry of the company roster in the demo config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmployeeSpec {
    pub name: String,
    pub role: Role,
}

impl EmployeeSpec {
    pub fn hire(&self) -> Box<dyn Employee> {
        let name = self.name.as_str();
        match self.role {
            Role::Engineer => Box::new(Engineer::new(name)),
            Role::Manager => Box::new(Manager::new(name)),
            Role::Designer => Box::new(Designer::new(name)),
        }
    }
}

pub fn payroll(staff: &[Box<dyn Employee>]) -> Option<Money> {
    staff
        .iter()
        .try_fold(Money::ZERO, |total, employee| total.checked_add(employee.salary()))
}

pub fn demo<W: Write>(console: &mut Console<W>, roster: &[EmployeeSpec]) -> io::Result<()> {
    let company: Vec<Box<dyn Employee>> = roster.iter().map(EmployeeSpec::hire).collect();

    console.heading("Company Staff")?;
    for employee in &company {
        console.blank()?;
        console.line(format!("{}:", employee.name()))?;
        console.line(employee.work())?;
        console.line(employee.salary_report())?;
    }

    console.blank()?;
    console.heading("Today's Work Day")?;
    console.line("Everyone at work:")?;
    for employee in &company {
        console.line(format!("  - {}", employee.work()))?;
    }

    if let Some(total) = payroll(&company) {
        console.blank()?;
        console.line(format!("Total payroll: {total}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<EmployeeSpec> {
        [
            ("Alice", Role::Engineer),
            ("Bob", Role::Manager),
            ("Charlie", Role::Designer),
            ("David", Role::Engineer),
        ]
        .into_iter()
        .map(|(name, role)| EmployeeSpec {
            name: name.to_string(),
            role,
        })
        .collect()
    }

    #[test]
    fn salaries_by_role() {
        assert_eq!(Engineer::new("A").salary(), Money::dollars(80_000));
        assert_eq!(Manager::new("B").salary(), Money::dollars(100_000));
        assert_eq!(Designer::new("C").salary(), Money::dollars(75_000));
    }

    #[test]
    fn default_salary_report() {
        assert_eq!(
            Manager::new("Bob").salary_report(),
            "Bob's salary: $100000.00"
        );
    }

    #[test]
    fn hire_builds_the_right_variant() {
        let staff: Vec<Box<dyn Employee>> = roster().iter().map(EmployeeSpec::hire).collect();
        let work: Vec<String> = staff.iter().map(|e| e.work()).collect();
        assert_eq!(
            work,
            vec![
                "Alice is writing code and debugging",
                "Bob is managing the team",
                "Charlie is designing user interfaces",
                "David is writing code and debugging",
            ]
        );
        assert_eq!(payroll(&staff), Some(Money::dollars(335_000)));
    }

    #[test]
    fn role_parses_lowercase() {
        let spec: EmployeeSpec = toml::from_str("name = \"Eve\"\nrole = \"designer\"").unwrap();
        assert_eq!(spec.role, Role::Designer);
        assert!(toml::from_str::<EmployeeSpec>("name = \"Eve\"\nrole = \"intern\"").is_err());
    }

    #[test]
    fn demo_lists_work_day() {
        let mut console = Console::capture();
        demo(&mut console, &roster()).unwrap();
        let transcript = console.transcript();
        assert!(transcript.contains("Alice:\nAlice is writing code and debugging\nAlice's salary: $80000.00\n"));
        assert!(transcript.contains("Everyone at work:\n  - Alice is writing code and debugging\n"));
        assert!(transcript.ends_with("Total payroll: $335000.00\n"));
    }
}
