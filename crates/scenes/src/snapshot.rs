//! PNG output of a [`Raster`].
//!
//! Feature-gated behind `png` (default on) so consumers that only need raw
//! RGBA bytes do not pull in the `image` crate.

use crate::raster::Raster;
use portfolio_fx_core::color::Srgb;
use portfolio_fx_core::error::FxError;
use std::path::Path;

/// Writes the raster as a PNG, composited over `background` when given
/// (otherwise with a transparent background).
///
/// Returns `FxError::InvalidDimensions` if the raster size overflows `u32`,
/// or `FxError::Io` on encode/write failure.
pub fn write_png(raster: &Raster, background: Option<Srgb>, path: &Path) -> Result<(), FxError> {
    let rgba = raster.to_rgba8(background);
    let w = u32::try_from(raster.width()).map_err(|_| FxError::InvalidDimensions)?;
    let h = u32::try_from(raster.height()).map_err(|_| FxError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| FxError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| FxError::Io(e.to_string()))?;
    log::debug!("wrote {}x{} snapshot to {}", w, h, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_fx_core::color::Rgba;
    use portfolio_fx_core::surface::Surface;

    #[test]
    fn write_png_round_trip() {
        let mut raster = Raster::new(16, 12);
        raster.set_fill_style(Rgba::new(255, 167, 38, 1.0));
        raster.fill_circle(8.0, 6.0, 3.0);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        let bg = Srgb::from_hex("#1e1e1f").unwrap();
        write_png(&raster, Some(bg), &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (16, 12));
        assert_eq!(img.get_pixel(8, 6).0, [255, 167, 38, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [30, 30, 31, 255]);
    }

    #[test]
    fn write_png_reports_io_errors() {
        let raster = Raster::new(4, 4);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("frame.png");
        let result = write_png(&raster, None, &path);
        assert!(matches!(result, Err(FxError::Io(_))));
    }
}
