use std::any::Any;
use std::fmt;
use std::io::Write;

use tracing::trace;

use crate::error::Result;
use crate::visitor::Visitor;

/// Anything a [`Visitor`] can be applied to.
///
/// Implementors hand themselves back to the visitor from [`Element::accept`],
/// so the behaviour is picked by the concrete element together with the
/// concrete visitor. Visitors recover the element variant through
/// [`Element::as_any`]; the trait itself exposes nothing variant-specific.
pub trait Element: fmt::Debug {
    /// Dispatches to `visitor.visit(self, out)`.
    fn accept(&self, visitor: &dyn Visitor, out: &mut dyn Write) -> Result<()>;

    /// Downcasting support for visitors.
    fn as_any(&self) -> &dyn Any;
}

/// A child enrolled at a school.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kid {
    name: String,
}

impl Kid {
    /// Any name is accepted, including empty or whitespace-only ones.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Element for Kid {
    fn accept(&self, visitor: &dyn Visitor, out: &mut dyn Write) -> Result<()> {
        trace!(kid = %self.name, visitor = visitor.label(), "Kid accepting visitor");
        visitor.visit(self, out)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
