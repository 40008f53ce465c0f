//! QR symbol rendering and verification
//!
//! One capability interface with two interchangeable backends: a raster
//! backend that paints the module matrix straight into a pixel buffer, and
//! a vector backend that emits SVG markup. Which backend a view uses is a
//! configuration choice, never a property of the view itself.

mod raster;
mod vector;

pub use vector::{SvgQr, rasterize as rasterize_markup};

use crate::error::{Error, Result};
use image::{DynamicImage, RgbaImage};
use qrcode::QrCode;
use qrcode::render::unicode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quiet-zone width in modules on each side of the symbol.
pub(crate) const QUIET_ZONE_MODULES: u32 = 4;

/// Error-correction level applied when encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EcLevel {
    /// ~7% of codewords recoverable
    Low,
    /// ~15% of codewords recoverable
    Medium,
    /// ~25% of codewords recoverable
    Quartile,
    /// ~30% of codewords recoverable
    #[default]
    High,
}

impl EcLevel {
    fn to_qrcode(self) -> qrcode::EcLevel {
        match self {
            EcLevel::Low => qrcode::EcLevel::L,
            EcLevel::Medium => qrcode::EcLevel::M,
            EcLevel::Quartile => qrcode::EcLevel::Q,
            EcLevel::High => qrcode::EcLevel::H,
        }
    }

    /// Parse a level identifier (case-insensitive) from a string slice.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "low" | "l" => Some(Self::Low),
            "medium" | "m" => Some(Self::Medium),
            "quartile" | "q" => Some(Self::Quartile),
            "high" | "h" => Some(Self::High),
            _ => None,
        }
    }
}

impl FromStr for EcLevel {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            format!("Unsupported error-correction level '{value}', expected low/medium/quartile/high")
        })
    }
}

/// Which rendering primitive produces the QR visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Paint modules directly into an RGBA pixel buffer
    #[default]
    Raster,
    /// Emit scalable SVG markup, rasterized only on export
    Vector,
}

impl BackendKind {
    /// Parse a backend identifier (case-insensitive) from a string slice.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "raster" => Some(Self::Raster),
            "vector" => Some(Self::Vector),
            _ => None,
        }
    }

    /// Identifier used in configuration and structured output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raster => "raster",
            Self::Vector => "vector",
        }
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(value)
            .ok_or_else(|| format!("Unsupported QR backend '{value}', expected 'raster' or 'vector'"))
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opaque RGB color parsed from `#rrggbb` notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl QrColor {
    /// Parse a `#rrggbb` or `rrggbb` hex triplet.
    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        let bytes = hex::decode(digits)
            .map_err(|e| Error::Config(format!("Invalid color '{value}': {e}")))?;
        match bytes.as_slice() {
            [r, g, b] => Ok(Self {
                r: *r,
                g: *g,
                b: *b,
            }),
            _ => Err(Error::Config(format!(
                "Invalid color '{value}': expected 6 hex digits"
            ))),
        }
    }

    /// Render back to lowercase `#rrggbb` notation.
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode([self.r, self.g, self.b]))
    }

    pub(crate) fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

/// Visual parameters of a rendered QR symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrStyle {
    /// Edge length of the rendered symbol in device pixels
    pub size: u32,
    /// Error-correction level
    pub ec_level: EcLevel,
    /// Module (dark) color
    pub foreground: QrColor,
    /// Background (light) color
    pub background: QrColor,
    /// Whether a quiet-zone margin surrounds the symbol
    pub quiet_zone: bool,
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            size: 280,
            ec_level: EcLevel::High,
            foreground: QrColor {
                r: 0x1a,
                g: 0x23,
                b: 0x7e,
            },
            background: QrColor {
                r: 0xff,
                g: 0xff,
                b: 0xff,
            },
            quiet_zone: true,
        }
    }
}

/// A rendered QR visual, ready for display or export.
#[derive(Debug, Clone)]
pub enum QrVisual {
    /// Pixel-buffer form produced by the raster backend
    Raster(RgbaImage),
    /// Markup form produced by the vector backend
    Vector(SvgQr),
}

impl QrVisual {
    /// Which backend produced this visual.
    pub fn backend(&self) -> BackendKind {
        match self {
            Self::Raster(_) => BackendKind::Raster,
            Self::Vector(_) => BackendKind::Vector,
        }
    }
}

/// Unified QR rendering capability over both backends.
#[derive(Debug, Clone)]
pub struct QrRenderer {
    backend: BackendKind,
    style: QrStyle,
}

impl QrRenderer {
    /// Create a renderer for the given backend and style.
    pub fn new(backend: BackendKind, style: QrStyle) -> Self {
        Self { backend, style }
    }

    /// Render `value` into a QR visual using the configured backend.
    pub fn render(&self, value: &str) -> Result<QrVisual> {
        let code = encode(value, &self.style)?;
        match self.backend {
            BackendKind::Raster => Ok(QrVisual::Raster(raster::paint(&code, &self.style))),
            BackendKind::Vector => Ok(QrVisual::Vector(vector::markup(&code, &self.style))),
        }
    }

    /// Render `value` as a block-character symbol for terminal display.
    ///
    /// Colors are inverted so the symbol reads correctly on dark terminals.
    pub fn terminal(&self, value: &str) -> Result<String> {
        let code = encode(value, &self.style)?;
        Ok(code
            .render::<unicode::Dense1x2>()
            .quiet_zone(self.style.quiet_zone)
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .build())
    }

    /// The style this renderer applies.
    pub fn style(&self) -> &QrStyle {
        &self.style
    }

    /// The backend this renderer dispatches to.
    pub fn backend(&self) -> BackendKind {
        self.backend
    }
}

fn encode(value: &str, style: &QrStyle) -> Result<QrCode> {
    QrCode::with_error_correction_level(value.as_bytes(), style.ec_level.to_qrcode())
        .map_err(|e| Error::QrEncode(format!("Failed to create QR code: {}", e)))
}

/// Decode the first QR symbol found in an image and return its payload.
///
/// Used to verify exported artifacts round-trip to the encoded URL.
pub fn decode_image(img: &DynamicImage) -> Result<String> {
    let gray = img.to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare(gray);

    let grids = prepared.detect_grids();
    let grid = grids.first().ok_or(Error::NoQrSymbolFound)?;

    match grid.decode() {
        Ok((meta, content)) => {
            tracing::debug!(
                version = ?meta.version,
                ecc_level = meta.ecc_level,
                length = content.len(),
                "Decoded QR symbol"
            );
            Ok(content)
        }
        Err(e) => Err(Error::QrDecode(format!("Decode failed: {:?}", e))),
    }
}
