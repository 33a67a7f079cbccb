use std::io::Write;

use crate::element::Element;
use crate::error::Result;

mod doctor;
mod salesman;

pub use self::doctor::Doctor;
pub use self::salesman::Salesman;

/// An operation applied to every element of a school without changing the
/// element types themselves.
///
/// Implementors inspect the concrete element (usually by downcasting through
/// [`Element::as_any`]) and act only on variants they recognise. Any other
/// variant must be skipped silently: no output, no error and no log record.
pub trait Visitor {
    /// Short identifier used in log records.
    fn label(&self) -> &str;

    /// Visits a single element, reporting to `out`.
    ///
    /// # Arguments
    /// * element - The element that accepted this visitor.
    /// * out - Sink for the one line of output a recognised element produces.
    ///
    /// # Returns
    /// An error only when writing to `out` fails.
    fn visit(&self, element: &dyn Element, out: &mut dyn Write) -> Result<()>;
}
