use std::io::Write;

use crate::element::{Element, Kid};
use crate::error::Result;
use crate::visitor::Visitor;

/// Hands a school bag to every kid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salesman {
    name: String,
}

impl Salesman {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Visitor for Salesman {
    fn label(&self) -> &str {
        "Salesman"
    }

    fn visit(&self, element: &dyn Element, out: &mut dyn Write) -> Result<()> {
        if let Some(kid) = element.as_any().downcast_ref::<Kid>() {
            writeln!(out, "Salesman: {} gave a school bag to the child: {}", self.name, kid.name())?;
        }
        Ok(())
    }
}
