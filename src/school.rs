use std::io::Write;

use tracing::debug;

use crate::element::{Element, Kid};
use crate::error::Result;
use crate::visitor::Visitor;

/// The kids every school is opened with, in traversal order.
pub const ROSTER: [&str; 3] = ["Ram", "Sara", "Pam"];

/// Object structure owning an ordered, fixed set of elements.
///
/// The sequence is built once and never reordered, so every traversal sees
/// the elements in construction order.
#[derive(Debug)]
pub struct School {
    elements: Vec<Box<dyn Element>>,
}

impl School {
    /// Opens a school with the standard [`ROSTER`].
    pub fn new() -> Self {
        Self::with_kids(ROSTER)
    }

    /// Opens a school enrolling one [`Kid`] per name, in the given order.
    pub fn with_kids<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_elements(
            names
                .into_iter()
                .map(|name| Box::new(Kid::new(name)) as Box<dyn Element>)
                .collect(),
        )
    }

    pub fn from_elements(elements: Vec<Box<dyn Element>>) -> Self {
        debug!(count = elements.len(), "Opened school");
        Self { elements }
    }

    pub fn elements(&self) -> &[Box<dyn Element>] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Applies `visitor` to every element once, in order.
    ///
    /// Nothing is mutated, so repeated calls with the same visitor produce
    /// the same output. Stops at the first failed write.
    pub fn perform_operation(&self, visitor: &dyn Visitor, out: &mut dyn Write) -> Result<()> {
        debug!(visitor = visitor.label(), count = self.elements.len(), "Performing operation");
        for element in &self.elements {
            element.accept(visitor, out)?;
        }
        Ok(())
    }
}

impl Default for School {
    fn default() -> Self {
        Self::new()
    }
}
