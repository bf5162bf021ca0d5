//! Pattern 2: Overriding vs shadowing
//! Example: Trait methods, default bodies and methods that never dispatch
//!
//! Run with: cargo run --bin inheritance_02_dispatch
//!
//! `non_virtual_method` is an inherent method on `dyn Base`. It is not in the
//! trait's vtable, so through a `dyn Base` handle the base body always runs, and
//! code outside this crate cannot add or replace it:
//!
//! ```compile_fail
//! use oop_concepts::inheritance::dispatch::Base;
//!
//! impl dyn Base {
//!     fn non_virtual_method(&self) -> &'static str {
//!         "mine"
//!     }
//! }
//! ```

use std::io::{self, Write};

use crate::console::Console;

pub trait Base {
    fn method1(&self) -> &'static str {
        "Base::method1 (default)"
    }

    fn method2(&self) -> &'static str;
}

impl dyn Base + '_ {
    pub fn non_virtual_method(&self) -> &'static str {
        "Base::non_virtual_method (not in the vtable)"
    }
}

/// Only supplies the required method and keeps the default `method1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Base for Plain {
    fn method2(&self) -> &'static str {
        "Plain::method2 (implemented)"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Derived;

impl Base for Derived {
    fn method1(&self) -> &'static str {
        "Derived::method1 (overridden)"
    }

    fn method2(&self) -> &'static str {
        "Derived::method2 (implemented)"
    }
}

impl Derived {
    /// Same name as the `dyn Base` method; only wins when called on a `Derived`.
    pub fn non_virtual_method(&self) -> &'static str {
        "Derived::non_virtual_method (shadows, not overrides)"
    }
}

/// A second level, built by holding a `Derived` instead of extending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FurtherDerived {
    parent: Derived,
}

impl FurtherDerived {
    pub fn parent(&self) -> &Derived {
        &self.parent
    }

    pub fn non_virtual_method(&self) -> &'static str {
        self.parent.non_virtual_method()
    }
}

impl Base for FurtherDerived {
    fn method1(&self) -> &'static str {
        "FurtherDerived::method1"
    }

    fn method2(&self) -> &'static str {
        "FurtherDerived::method2"
    }
}

pub fn demo<W: Write>(console: &mut Console<W>) -> io::Result<()> {
    let base: Box<dyn Base> = Box::new(Derived);

    console.heading("Trait object calls")?;
    console.line(base.method1())?;
    console.line(base.method2())?;
    console.line(base.non_virtual_method())?;

    console.blank()?;
    console.heading("Direct object calls")?;
    let derived = Derived;
    console.line(derived.method1())?;
    console.line(derived.method2())?;
    console.line(derived.non_virtual_method())?;

    console.blank()?;
    console.heading("Multiple levels")?;
    let further = FurtherDerived::default();
    let ptr: &dyn Base = &further;
    console.line(ptr.method1())?;
    console.line(ptr.method2())?;
    console.line(ptr.non_virtual_method())?;
    console.line(further.non_virtual_method())?;
    console.line(further.parent().method1())?;

    console.blank()?;
    console.heading("Default implementations")?;
    let plain: &dyn Base = &Plain;
    console.line(plain.method1())?;
    console.line(plain.method2())
}
