//! Labeled entry enumeration
//!
//! The display layer asks for children as (label, value) pairs. Each
//! pair is produced on demand: the cursor supplies the next coordinate,
//! the view supplies its value (stored or synthesized zero). A memory
//! read failure surfaces as an `Err` item, which ends the display
//! request; nothing is buffered, so abandoning the iterator early costs
//! nothing.

use cholmod_inspect_core::{CscView, DenseCursor, MemoryRead, Result};

/// Lazy (label, value) sequence over a matrix's full dense extent
///
/// Labels are `"[row,col]"`, column-major, row first. One-shot: a fresh
/// enumerator is needed to rescan.
pub struct Entries<'a, M: MemoryRead> {
    view: &'a CscView<'a, M>,
    cursor: DenseCursor,
}

impl<'a, M: MemoryRead> Entries<'a, M> {
    pub(crate) fn new(view: &'a CscView<'a, M>) -> Self {
        Self {
            view,
            cursor: DenseCursor::new(view.nrow(), view.ncol()),
        }
    }
}

impl<M: MemoryRead> Iterator for Entries<'_, M> {
    type Item = Result<(String, f64)>;

    fn next(&mut self) -> Option<Self::Item> {
        let (row, col) = self.cursor.next()?;
        Some(
            self.view
                .value_at(row, col)
                .map(|value| (format!("[{row},{col}]"), value)),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}
