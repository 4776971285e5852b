//! PDF export pipeline.
//!
//! Export renders the paystub for the export surface, rasterizes it through
//! a pluggable [`RasterBackend`], and assembles a single Letter page with
//! `printpdf`. The same document model feeds the on-screen preview, so the
//! PDF content always matches it.
//!
//! Export is synchronous. Async callers should run it on a blocking thread
//! (for example with `tokio::task::spawn_blocking`).

mod filename;
mod pdf;
mod raster;

pub use filename::export_filename;
pub(crate) use filename::sanitize_name;
pub(crate) use pdf::write_atomically;
pub use pdf::{
    scaled_image_height_in, CheckSpaceLayout, ExportedPdf, PdfExporter, CAPTURE_SCALE,
    PAGE_HEIGHT_IN, PAGE_WIDTH_IN,
};
pub use raster::{MountedSurface, RasterBackend, RasterError};
