//! Every demo, in chapter order.

use std::io::{self, Write};

use crate::abstraction::{calculator, car, shape};
use crate::config::DemoConfig;
use crate::console::Console;
use crate::encapsulation::{access, bank_account};
use crate::inheritance::{dispatch, employee, vehicle};
use crate::polymorphism::{animal, payment, vtable};

type Demo<W> = fn(&mut Console<W>, &DemoConfig) -> io::Result<()>;

fn chapters<W: Write>() -> [(&'static str, Demo<W>); 11] {
    [
        ("Abstraction: Calculator", |c, _| calculator::demo(c)),
        ("Abstraction: Car", |c, _| car::demo(c)),
        ("Abstraction: Shapes", |c, cfg| shape::demo(c, &cfg.shapes)),
        ("Encapsulation: Bank Account", |c, cfg| bank_account::demo(c, &cfg.bank)),
        ("Encapsulation: Access Levels", |c, _| access::demo(c)),
        ("Inheritance: Vehicles", |c, _| vehicle::demo(c)),
        ("Inheritance: Dispatch", |c, _| dispatch::demo(c)),
        ("Inheritance: Employees", |c, cfg| employee::demo(c, &cfg.company)),
        ("Polymorphism: Animals", |c, cfg| animal::demo(c, &cfg.animals)),
        ("Polymorphism: Payments", |c, cfg| payment::demo(c, &cfg.checkout)),
        ("Polymorphism: Vtables", |c, cfg| vtable::demo(c, cfg.vtable.rotation_degrees)),
    ]
}

pub fn chapter_titles() -> Vec<&'static str> {
    chapters::<Vec<u8>>().iter().map(|(title, _)| *title).collect()
}

pub fn run_all<W: Write>(console: &mut Console<W>, config: &DemoConfig) -> io::Result<()> {
    for (index, (title, demo)) in chapters::<W>().into_iter().enumerate() {
        if index > 0 {
            console.blank()?;
        }
        console.subheading(title)?;
        console.blank()?;
        demo(console, config)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_every_chapter_in_order() {
        let config = DemoConfig::embedded().unwrap();
        let mut console = Console::capture();
        run_all(&mut console, &config).unwrap();
        let transcript = console.transcript();

        let mut cursor = 0;
        for title in chapter_titles() {
            let marker = format!("--- {title} ---");
            let found = transcript[cursor..]
                .find(&marker)
                .unwrap_or_else(|| panic!("missing or out of order: {marker}"));
            cursor += found + marker.len();
        }
        assert_eq!(chapter_titles().len(), 11);
    }
}
