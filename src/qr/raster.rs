//! Raster QR backend
//!
//! Paints the encoded module matrix straight into an RGBA buffer at the
//! exact requested pixel size, the way the card's on-screen canvas does.
//! Output pixels are sampled nearest-neighbor from the module grid, so the
//! symbol stays sharp at sizes that are not a whole multiple of the module
//! count.

use super::{QUIET_ZONE_MODULES, QrStyle};
use image::RgbaImage;
use qrcode::{Color, QrCode};

/// Render `code` into a `style.size` x `style.size` pixel buffer.
pub(super) fn paint(code: &QrCode, style: &QrStyle) -> RgbaImage {
    let modules = code.width() as u32;
    let margin = if style.quiet_zone { QUIET_ZONE_MODULES } else { 0 };
    let units = modules + 2 * margin;
    let size = style.size.max(units);

    let fg = style.foreground.to_rgba();
    let bg = style.background.to_rgba();

    let mut img = RgbaImage::from_pixel(size, size, bg);
    for py in 0..size {
        let uy = (py as u64 * units as u64 / size as u64) as u32;
        for px in 0..size {
            let ux = (px as u64 * units as u64 / size as u64) as u32;
            if in_symbol(ux, uy, margin, modules)
                && code[((ux - margin) as usize, (uy - margin) as usize)] == Color::Dark
            {
                img.put_pixel(px, py, fg);
            }
        }
    }

    img
}

fn in_symbol(ux: u32, uy: u32, margin: u32, modules: u32) -> bool {
    ux >= margin && uy >= margin && ux < margin + modules && uy < margin + modules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::{QrColor, encode};

    fn navy_on_white() -> QrStyle {
        QrStyle {
            size: 220,
            ..QrStyle::default()
        }
    }

    #[test]
    fn output_has_the_requested_dimensions() {
        let style = navy_on_white();
        let code = encode("https://aadilhannan.bloocube.com", &style).unwrap();
        let img = paint(&code, &style);
        assert_eq!(img.dimensions(), (220, 220));
    }

    #[test]
    fn quiet_zone_corners_are_background() {
        let style = navy_on_white();
        let code = encode("https://aadilhannan.bloocube.com", &style).unwrap();
        let img = paint(&code, &style);
        let bg = style.background.to_rgba();
        assert_eq!(*img.get_pixel(0, 0), bg);
        assert_eq!(*img.get_pixel(219, 219), bg);
    }

    #[test]
    fn symbol_uses_the_configured_foreground() {
        let style = QrStyle {
            foreground: QrColor::from_hex("#1a237e").unwrap(),
            ..navy_on_white()
        };
        let code = encode("https://aadilhannan.bloocube.com", &style).unwrap();
        let img = paint(&code, &style);
        let fg = style.foreground.to_rgba();
        assert!(img.pixels().any(|p| *p == fg));
    }

    #[test]
    fn tiny_requested_size_is_clamped_to_one_pixel_per_module() {
        let style = QrStyle {
            size: 10,
            ..QrStyle::default()
        };
        let code = encode("https://aadilhannan.bloocube.com", &style).unwrap();
        let img = paint(&code, &style);
        let units = code.width() as u32 + 2 * QUIET_ZONE_MODULES;
        assert_eq!(img.dimensions(), (units, units));
    }
}
