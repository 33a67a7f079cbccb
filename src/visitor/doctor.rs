use std::io::Write;

use crate::element::{Element, Kid};
use crate::error::Result;
use crate::visitor::Visitor;

/// Performs a health checkup on every kid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    name: String,
}

impl Doctor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Visitor for Doctor {
    fn label(&self) -> &str {
        "Doctor"
    }

    fn visit(&self, element: &dyn Element, out: &mut dyn Write) -> Result<()> {
        if let Some(kid) = element.as_any().downcast_ref::<Kid>() {
            writeln!(out, "Doctor: {} did a health checkup of the child: {}", self.name, kid.name())?;
        }
        Ok(())
    }
}
