//! HTML-to-raster backend abstraction.
//!
//! The exporter never rasterizes HTML itself. A [`RasterBackend`] mounts the
//! export markup on an off-screen surface of a given width, captures it into
//! an RGB bitmap, and tears the surface down again. [`MountedSurface`] makes
//! the teardown unconditional.

use image::RgbImage;
use thiserror::Error;
use tracing::debug;

/// A failure reported by a raster backend.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct RasterError(pub String);

impl RasterError {
    /// Creates an error from any displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Renders HTML into a bitmap.
///
/// Implementations must support several surfaces mounted at once; each
/// export mounts its own.
pub trait RasterBackend {
    /// Handle to one mounted off-screen surface.
    type Surface;

    /// Mounts `html` on a new surface `width_in` inches wide.
    fn mount(&self, html: &str, width_in: f64) -> Result<Self::Surface, RasterError>;

    /// Captures the surface at `scale` device pixels per CSS pixel, on a
    /// white background.
    fn capture(&self, surface: &Self::Surface, scale: f64) -> Result<RgbImage, RasterError>;

    /// Removes the surface. Called exactly once per mounted surface.
    fn unmount(&self, surface: Self::Surface);
}

/// A mounted surface that is unmounted when dropped.
///
/// # Example
///
/// ```
/// use image::RgbImage;
/// use paystub_engine::export::{MountedSurface, RasterBackend, RasterError};
///
/// struct Blank;
///
/// impl RasterBackend for Blank {
///     type Surface = u32;
///     fn mount(&self, _html: &str, width_in: f64) -> Result<u32, RasterError> {
///         Ok((width_in * 96.0) as u32)
///     }
///     fn capture(&self, width: &u32, scale: f64) -> Result<RgbImage, RasterError> {
///         let px = (*width as f64 * scale) as u32;
///         Ok(RgbImage::new(px, px))
///     }
///     fn unmount(&self, _surface: u32) {}
/// }
///
/// let mounted = MountedSurface::mount(&Blank, "<p>hi</p>", 8.5).unwrap();
/// let bitmap = mounted.capture(2.0).unwrap();
/// assert_eq!(bitmap.width(), 1632);
/// ```
pub struct MountedSurface<'a, B: RasterBackend> {
    backend: &'a B,
    surface: Option<B::Surface>,
}

impl<'a, B: RasterBackend> MountedSurface<'a, B> {
    /// Mounts `html` through `backend`.
    pub fn mount(backend: &'a B, html: &str, width_in: f64) -> Result<Self, RasterError> {
        let surface = backend.mount(html, width_in)?;
        debug!(width_in, html_len = html.len(), "Mounted export surface");
        Ok(Self {
            backend,
            surface: Some(surface),
        })
    }

    /// Captures the mounted surface.
    pub fn capture(&self, scale: f64) -> Result<RgbImage, RasterError> {
        match &self.surface {
            Some(surface) => self.backend.capture(surface, scale),
            None => Err(RasterError::new("surface already unmounted")),
        }
    }
}

impl<B: RasterBackend> Drop for MountedSurface<'_, B> {
    fn drop(&mut self) {
        if let Some(surface) = self.surface.take() {
            self.backend.unmount(surface);
            debug!("Unmounted export surface");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingBackend {
        mounted: Cell<u32>,
        unmounted: Cell<u32>,
        fail_capture: bool,
    }

    impl CountingBackend {
        fn new(fail_capture: bool) -> Self {
            Self {
                mounted: Cell::new(0),
                unmounted: Cell::new(0),
                fail_capture,
            }
        }
    }

    impl RasterBackend for CountingBackend {
        type Surface = ();

        fn mount(&self, _html: &str, _width_in: f64) -> Result<(), RasterError> {
            self.mounted.set(self.mounted.get() + 1);
            Ok(())
        }

        fn capture(&self, _surface: &(), _scale: f64) -> Result<RgbImage, RasterError> {
            if self.fail_capture {
                Err(RasterError::new("capture failed"))
            } else {
                Ok(RgbImage::new(4, 4))
            }
        }

        fn unmount(&self, _surface: ()) {
            self.unmounted.set(self.unmounted.get() + 1);
        }
    }

    #[test]
    fn test_unmounts_on_drop() {
        let backend = CountingBackend::new(false);
        {
            let mounted = MountedSurface::mount(&backend, "", 8.5).unwrap();
            assert!(mounted.capture(2.0).is_ok());
        }
        assert_eq!(backend.mounted.get(), 1);
        assert_eq!(backend.unmounted.get(), 1);
    }

    #[test]
    fn test_unmounts_after_capture_failure() {
        let backend = CountingBackend::new(true);
        let result = MountedSurface::mount(&backend, "", 8.5).and_then(|m| m.capture(2.0));
        assert_eq!(result.unwrap_err().to_string(), "capture failed");
        assert_eq!(backend.unmounted.get(), 1);
    }
}
