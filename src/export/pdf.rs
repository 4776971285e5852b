//! PDF assembly.
//!
//! The export page is a portrait US Letter sheet. The captured paystub
//! bitmap is scaled to the full 8.5in page width and anchored at the top;
//! an optional check printing area is drawn below it with vector ops.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use image::RgbImage;
use printpdf::{
    BuiltinFont, Line, LinePoint, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg,
    Point, Pt, RawImage, RawImageData, RawImageFormat, TextItem, XObjectTransform,
};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument, warn};

use crate::error::{PaystubError, PaystubResult};
use crate::models::{PaystubCalculation, PaystubRecord, PdfOptions};
use crate::render::{render_document_with, render_html, Branding, Surface};

use super::filename::export_filename;
use super::raster::{MountedSurface, RasterBackend};

/// Page width in inches.
pub const PAGE_WIDTH_IN: f64 = 8.5;
/// Page height in inches.
pub const PAGE_HEIGHT_IN: f64 = 11.0;
/// Capture resolution multiplier.
pub const CAPTURE_SCALE: f64 = 2.0;

const POINTS_PER_INCH: f64 = 72.0;
const CHECK_SPACE_GAP_IN: f64 = 0.1;
const CHECK_SPACE_LEFT_IN: f64 = 0.3;
const CHECK_SPACE_RULE_END_IN: f64 = 8.2;
const CHECK_SPACE_BOX_WIDTH_IN: f64 = 7.9;
const CHECK_SPACE_LABEL: &str = "CHECK PRINTING SPACE";
const CHECK_SPACE_LABEL_PT: f32 = 8.0;
const RULE_THICKNESS_IN: f64 = 0.01;
const BOX_THICKNESS_IN: f64 = 0.005;

/// A finished PDF and the name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPdf {
    /// `paystub_<first>_<last>_<date>.pdf`.
    pub filename: String,
    /// The encoded PDF.
    pub bytes: Vec<u8>,
}

impl ExportedPdf {
    /// Writes the PDF into `dir` under its filename.
    ///
    /// The bytes go to a temporary file in the same directory that is then
    /// renamed into place, so a failed write never leaves a partial file.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> PaystubResult<PathBuf> {
        let dir = dir.as_ref();
        let target = dir.join(&self.filename);

        write_atomically(dir, &target, &self.bytes).map_err(|e| save_failed(&target, e))?;

        info!(path = %target.display(), bytes = self.bytes.len(), "Saved paystub PDF");
        Ok(target)
    }
}

/// Writes `bytes` to a temporary file in `dir` and renames it to `target`.
pub(crate) fn write_atomically(dir: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.persist(target).map_err(|e| e.error)?;
    Ok(())
}

fn save_failed(target: &Path, error: std::io::Error) -> PaystubError {
    warn!(path = %target.display(), error = %error, "Failed to save paystub PDF");
    PaystubError::pdf_generation(format!("writing {}: {}", target.display(), error))
}

/// Where the check printing area goes, in inches from the page top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckSpaceLayout {
    /// Vertical position of the separator rule.
    pub rule_y: f64,
    /// Baseline of the label.
    pub label_y: f64,
    /// Top edge of the bordered box.
    pub box_top: f64,
    /// Height of the bordered box.
    pub box_height: f64,
}

impl CheckSpaceLayout {
    /// Lays the check area out below a paystub image `image_height_in` tall.
    pub fn below(image_height_in: f64, box_height: f64) -> Self {
        let rule_y = image_height_in + CHECK_SPACE_GAP_IN;
        Self {
            rule_y,
            label_y: rule_y + 0.15,
            box_top: rule_y + 0.2,
            box_height,
        }
    }
}

/// Height in inches of a bitmap scaled to the full page width.
pub fn scaled_image_height_in(width_px: u32, height_px: u32) -> f64 {
    f64::from(height_px) * PAGE_WIDTH_IN / f64::from(width_px)
}

/// Turns a paystub into a PDF through a raster backend.
///
/// The exporter holds no per-export state; every call mounts and tears down
/// its own surface.
#[derive(Debug, Clone)]
pub struct PdfExporter<B> {
    backend: B,
    branding: Branding,
}

impl<B: RasterBackend> PdfExporter<B> {
    /// Creates an exporter with the default branding.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            branding: Branding::default(),
        }
    }

    /// Replaces the organization mark printed in the header.
    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = branding;
        self
    }

    /// The raster backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Exports one paystub as a single-page Letter PDF.
    ///
    /// A driver without both a first and a last name, or invalid `options`,
    /// is rejected with a validation error before any rendering starts. Any
    /// later failure is logged with its cause and returned as
    /// [`PaystubError::PdfGeneration`].
    #[instrument(skip_all, fields(check_space = options.include_check_space))]
    pub fn export(
        &self,
        record: &PaystubRecord,
        calculation: &PaystubCalculation,
        options: &PdfOptions,
    ) -> PaystubResult<ExportedPdf> {
        if !record.driver_info.has_name() {
            return Err(PaystubError::validation(
                "driver_info",
                "first and last name are required",
            ));
        }
        options.validate()?;

        let filename = export_filename(&record.driver_info, Local::now().date_naive());
        match self.assemble(record, calculation, options) {
            Ok(bytes) => {
                info!(filename = %filename, bytes = bytes.len(), "Exported paystub PDF");
                Ok(ExportedPdf { filename, bytes })
            }
            Err(reason) => {
                warn!(filename = %filename, reason = %reason, "PDF export failed");
                Err(PaystubError::pdf_generation(reason))
            }
        }
    }

    fn assemble(
        &self,
        record: &PaystubRecord,
        calculation: &PaystubCalculation,
        options: &PdfOptions,
    ) -> Result<Vec<u8>, String> {
        let document = render_document_with(record, calculation, &self.branding);
        let html = render_html(&document, Surface::Export);

        let bitmap = {
            let mounted = MountedSurface::mount(&self.backend, &html, PAGE_WIDTH_IN)
                .map_err(|e| format!("mounting export surface: {}", e))?;
            mounted
                .capture(CAPTURE_SCALE)
                .map_err(|e| format!("capturing export surface: {}", e))?
        };

        if bitmap.width() == 0 || bitmap.height() == 0 {
            return Err(format!(
                "captured an empty bitmap ({}x{})",
                bitmap.width(),
                bitmap.height()
            ));
        }

        let check_space = options.include_check_space.then(|| {
            CheckSpaceLayout::below(
                scaled_image_height_in(bitmap.width(), bitmap.height()),
                options.check_space_height,
            )
        });

        Ok(build_pdf(bitmap, check_space))
    }
}

fn build_pdf(bitmap: RgbImage, check_space: Option<CheckSpaceLayout>) -> Vec<u8> {
    let (width_px, height_px) = bitmap.dimensions();
    let mut doc = PdfDocument::new("Paystub");

    let raw = RawImage {
        pixels: RawImageData::U8(bitmap.into_raw()),
        width: width_px as usize,
        height: height_px as usize,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    };
    let image_id = doc.add_image(&raw);

    // Pick the DPI that makes the bitmap exactly one page wide.
    let dpi = (f64::from(width_px) / PAGE_WIDTH_IN) as f32;
    let image_height_in = scaled_image_height_in(width_px, height_px);

    let mut ops = vec![Op::UseXobject {
        id: image_id,
        transform: XObjectTransform {
            translate_x: Some(Pt(0.0)),
            translate_y: Some(Pt(page_y(image_height_in))),
            scale_x: None,
            scale_y: None,
            dpi: Some(dpi),
            rotate: None,
        },
    }];

    if let Some(layout) = check_space {
        push_check_space(&mut ops, &layout);
    }

    debug!(width_px, height_px, dpi, image_height_in, "Placed paystub bitmap");

    let page = PdfPage::new(inches_to_mm(PAGE_WIDTH_IN), inches_to_mm(PAGE_HEIGHT_IN), ops);
    doc.with_pages(vec![page]);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    doc.save(&PdfSaveOptions::default(), &mut warnings)
}

fn push_check_space(ops: &mut Vec<Op>, layout: &CheckSpaceLayout) {
    ops.push(Op::SetOutlineThickness {
        pt: Pt(to_points(RULE_THICKNESS_IN)),
    });
    ops.push(Op::DrawLine {
        line: Line {
            points: vec![
                line_point(CHECK_SPACE_LEFT_IN, layout.rule_y),
                line_point(CHECK_SPACE_RULE_END_IN, layout.rule_y),
            ],
            is_closed: false,
        },
    });

    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: point(CHECK_SPACE_LEFT_IN, layout.label_y),
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        size: Pt(CHECK_SPACE_LABEL_PT),
        font: BuiltinFont::Helvetica,
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(CHECK_SPACE_LABEL.to_string())],
        font: BuiltinFont::Helvetica,
    });
    ops.push(Op::EndTextSection);

    let left = CHECK_SPACE_LEFT_IN;
    let right = CHECK_SPACE_LEFT_IN + CHECK_SPACE_BOX_WIDTH_IN;
    let top = layout.box_top;
    let bottom = layout.box_top + layout.box_height;
    ops.push(Op::SetOutlineThickness {
        pt: Pt(to_points(BOX_THICKNESS_IN)),
    });
    ops.push(Op::DrawLine {
        line: Line {
            points: vec![
                line_point(left, top),
                line_point(right, top),
                line_point(right, bottom),
                line_point(left, bottom),
            ],
            is_closed: true,
        },
    });
}

fn to_points(inches: f64) -> f32 {
    (inches * POINTS_PER_INCH) as f32
}

fn inches_to_mm(inches: f64) -> Mm {
    Mm((inches * 25.4) as f32)
}

/// PDF y grows upwards from the page bottom; layout y grows down from the top.
fn page_y(inches_from_top: f64) -> f32 {
    to_points(PAGE_HEIGHT_IN - inches_from_top)
}

fn point(x_in: f64, y_in_from_top: f64) -> Point {
    Point {
        x: Pt(to_points(x_in)),
        y: Pt(page_y(y_in_from_top)),
    }
}

fn line_point(x_in: f64, y_in_from_top: f64) -> LinePoint {
    LinePoint {
        p: point(x_in, y_in_from_top),
        bezier: false,
    }
}
