//! Printer dispatch registry
//!
//! The host keeps an ordered list of dispatch functions and offers each
//! candidate value to them in turn; the first one that claims the value
//! supplies the printer. [`PrinterRegistry`] is the seam a host exposes
//! for registration, and [`PrinterTable`] is a ready-made registry for
//! embedders that drive dispatch themselves.

use cholmod_inspect_core::Result;

/// Object-safe surface of a constructed printer
pub trait PrettyPrinter {
    /// One-line summary of the value
    fn summary(&self) -> String;

    /// Lazy (label, value) children sequence
    fn entries(&self) -> Box<dyn Iterator<Item = Result<(String, f64)>> + '_>;
}

/// Dispatch function: claims a value and returns a printer bound to it,
/// or `None` to let the host fall back
pub type LookupFn<V, M> =
    for<'a> fn(&'a V, &'a M) -> Result<Option<Box<dyn PrettyPrinter + 'a>>>;

/// Host-provided registry accepting appended dispatch functions
///
/// Appending is not idempotent: registering twice dispatches twice.
/// Callers register once per session.
pub trait PrinterRegistry<V, M> {
    /// Append a dispatch function to the candidate list
    fn append(&mut self, lookup: LookupFn<V, M>);
}

/// Ordered dispatch table, first claim wins
pub struct PrinterTable<V, M> {
    lookups: Vec<LookupFn<V, M>>,
}

impl<V, M> PrinterTable<V, M> {
    /// An empty table
    pub fn new() -> Self {
        Self {
            lookups: Vec::new(),
        }
    }

    /// Number of registered dispatch functions
    pub fn len(&self) -> usize {
        self.lookups.len()
    }

    /// Whether no dispatch functions are registered
    pub fn is_empty(&self) -> bool {
        self.lookups.is_empty()
    }

    /// Offer a value to each dispatch function in registration order
    pub fn find<'a>(
        &self,
        value: &'a V,
        memory: &'a M,
    ) -> Result<Option<Box<dyn PrettyPrinter + 'a>>> {
        for lookup in &self.lookups {
            if let Some(printer) = lookup(value, memory)? {
                return Ok(Some(printer));
            }
        }
        Ok(None)
    }
}

impl<V, M> Default for PrinterTable<V, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, M> PrinterRegistry<V, M> for PrinterTable<V, M> {
    fn append(&mut self, lookup: LookupFn<V, M>) {
        self.lookups.push(lookup);
    }
}
