//! The `cholmod_sparse` pretty-printer
//!
//! Dispatch strips wrappers off the candidate value, matches its type
//! tag against the `cholmod_sparse` family and checks the capability
//! gate; values passing both get a printer bound to their memory for the
//! duration of the display request. Everything else is a silent decline
//! so the host falls back to its default rendering.

use cholmod_inspect_core::{
    CscView, MemoryRead, Result, SparseHeader, TypedValue, SPARSE_TYPE_TAG,
};

use crate::entries::Entries;
use crate::registry::{PrettyPrinter, PrinterRegistry};

/// Printer for one `cholmod_sparse` value
///
/// Holds the scalar-field readout and a CSC view over the inspected
/// memory; fresh per display request, nothing cached across requests.
pub struct CscPrinter<'a, M: MemoryRead> {
    header: SparseHeader,
    view: CscView<'a, M>,
}

impl<'a, M: MemoryRead> CscPrinter<'a, M> {
    /// One-line summary: dimensions, storage flags, precision
    pub fn summary(&self) -> String {
        let (packing, ordering) = self.header.storage_words();
        format!(
            "cholmod_sparse, {} x {}, {} {}, {}",
            self.header.nrow,
            self.header.ncol,
            packing,
            ordering,
            self.header.precision_word()
        )
    }

    /// Fresh enumerator over the full dense extent
    pub fn entries(&self) -> Entries<'_, M> {
        Entries::new(&self.view)
    }

    /// Scalar-field readout backing this printer
    pub fn header(&self) -> &SparseHeader {
        &self.header
    }

    /// CSC view backing this printer
    pub fn view(&self) -> &CscView<'a, M> {
        &self.view
    }
}

impl<M: MemoryRead> PrettyPrinter for CscPrinter<'_, M> {
    fn summary(&self) -> String {
        CscPrinter::summary(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = Result<(String, f64)>> + '_> {
        Box::new(CscPrinter::entries(self))
    }
}

/// Offer a candidate value to this printer
///
/// `Ok(None)` means decline: the type tag is not in the
/// `cholmod_sparse` family, or the storage variant is outside the
/// supported gate. Field-read failures after a tag match are malformed
/// memory and propagate as errors.
pub fn lookup<'a, V: TypedValue, M: MemoryRead>(
    value: &V,
    memory: &'a M,
) -> Result<Option<CscPrinter<'a, M>>> {
    let value = value.strip_wrappers()?;
    let family_match = value
        .type_tag()
        .is_some_and(|tag| tag.starts_with(SPARSE_TYPE_TAG));
    if !family_match {
        return Ok(None);
    }

    let header = SparseHeader::read_from(&value)?;
    if !header.supported() {
        return Ok(None);
    }

    let view = CscView::new(&header, memory)?;
    Ok(Some(CscPrinter { header, view }))
}

fn lookup_dyn<'a, V: TypedValue, M: MemoryRead>(
    value: &'a V,
    memory: &'a M,
) -> Result<Option<Box<dyn PrettyPrinter + 'a>>> {
    Ok(lookup(value, memory)?.map(|printer| Box::new(printer) as Box<dyn PrettyPrinter + 'a>))
}

/// Append the `cholmod_sparse` dispatch function to a host registry
///
/// Appending twice registers twice; call once per session.
pub fn register_cholmod_printers<V, M, R>(registry: &mut R)
where
    V: TypedValue,
    M: MemoryRead,
    R: PrinterRegistry<V, M> + ?Sized,
{
    registry.append(lookup_dyn::<V, M>);
}
