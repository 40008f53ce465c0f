//! Vector QR backend
//!
//! Emits self-contained SVG markup for the encoded symbol: one background
//! rect plus one unit rect per dark module, with the natural pixel
//! dimensions carried in the `width`/`height` attributes. Export works from
//! the serialized text alone: the markup is parsed back and rasterized at
//! its natural dimensions without consulting the module matrix again.

use super::{QUIET_ZONE_MODULES, QrColor, QrStyle};
use crate::error::{Error, Result};
use image::RgbaImage;
use qrcode::{Color, QrCode};
use std::fmt::Write as _;

/// A QR symbol in scalable vector form.
#[derive(Debug, Clone)]
pub struct SvgQr {
    markup: String,
}

impl SvgQr {
    /// The serialized SVG document.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Consume the visual, yielding the serialized SVG document.
    pub fn into_markup(self) -> String {
        self.markup
    }

    /// Natural pixel dimensions declared by the markup.
    pub fn natural_dimensions(&self) -> Result<(u32, u32)> {
        natural_dimensions(&self.markup)
    }
}

/// Build the SVG document for `code`.
pub(super) fn markup(code: &QrCode, style: &QrStyle) -> SvgQr {
    let modules = code.width() as u32;
    let margin = if style.quiet_zone { QUIET_ZONE_MODULES } else { 0 };
    let units = modules + 2 * margin;
    let size = style.size.max(units);

    let mut out = String::with_capacity(4096);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {units} {units}" shape-rendering="crispEdges">"#,
    );
    let _ = write!(
        out,
        r#"<rect width="{units}" height="{units}" fill="{}"/>"#,
        style.background.to_hex()
    );

    let fg = style.foreground.to_hex();
    for y in 0..modules {
        for x in 0..modules {
            if code[(x as usize, y as usize)] == Color::Dark {
                let _ = write!(
                    out,
                    r#"<rect x="{}" y="{}" width="1" height="1" fill="{fg}"/>"#,
                    x + margin,
                    y + margin,
                );
            }
        }
    }
    out.push_str("</svg>");

    SvgQr { markup: out }
}

/// Rasterize serialized QR markup into a pixel buffer at its natural
/// dimensions.
pub fn rasterize(markup: &str) -> Result<RgbaImage> {
    let (width, height) = natural_dimensions(markup)?;
    let doc = parse_document(markup)?;

    let fg = doc.foreground.to_rgba();
    let bg = doc.background.to_rgba();
    let units = doc.units;

    let mut img = RgbaImage::from_pixel(width, height, bg);
    for py in 0..height {
        let uy = (py as u64 * units as u64 / height as u64) as u32;
        for px in 0..width {
            let ux = (px as u64 * units as u64 / width as u64) as u32;
            if doc.dark[(uy * units + ux) as usize] {
                img.put_pixel(px, py, fg);
            }
        }
    }

    Ok(img)
}

/// Parse the `width`/`height` attributes off the root `<svg>` element.
pub fn natural_dimensions(markup: &str) -> Result<(u32, u32)> {
    let svg = element(markup, "svg")
        .ok_or_else(|| Error::SvgParse("markup has no <svg> element".to_string()))?;
    let width = numeric_attr(svg, "width")?;
    let height = numeric_attr(svg, "height")?;
    if width == 0 || height == 0 {
        return Err(Error::SvgParse("natural dimensions are zero".to_string()));
    }
    Ok((width, height))
}

struct Document {
    units: u32,
    foreground: QrColor,
    background: QrColor,
    dark: Vec<bool>,
}

fn parse_document(markup: &str) -> Result<Document> {
    let svg = element(markup, "svg")
        .ok_or_else(|| Error::SvgParse("markup has no <svg> element".to_string()))?;
    let view_box = attr(svg, "viewBox")
        .ok_or_else(|| Error::SvgParse("<svg> element has no viewBox".to_string()))?;
    let units = view_box
        .split_ascii_whitespace()
        .nth(2)
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|v| *v > 0)
        .ok_or_else(|| Error::SvgParse(format!("unusable viewBox '{view_box}'")))?;

    let mut background = None;
    let mut foreground = None;
    let mut dark = vec![false; (units * units) as usize];

    for rect in elements(markup, "rect") {
        let w = numeric_attr(rect, "width")?;
        let h = numeric_attr(rect, "height")?;
        let fill = attr(rect, "fill")
            .ok_or_else(|| Error::SvgParse("<rect> element has no fill".to_string()))?;
        let color = QrColor::from_hex(fill)
            .map_err(|_| Error::SvgParse(format!("unusable fill '{fill}'")))?;

        if w == units && h == units {
            background = Some(color);
            continue;
        }

        let x = numeric_attr(rect, "x")?;
        let y = numeric_attr(rect, "y")?;
        if x + w > units || y + h > units {
            return Err(Error::SvgParse(format!(
                "module rect at ({x}, {y}) exceeds the {units}-unit view box"
            )));
        }
        foreground = Some(color);
        for uy in y..y + h {
            for ux in x..x + w {
                dark[(uy * units + ux) as usize] = true;
            }
        }
    }

    Ok(Document {
        units,
        foreground: foreground
            .ok_or_else(|| Error::SvgParse("markup contains no module rects".to_string()))?,
        background: background
            .ok_or_else(|| Error::SvgParse("markup contains no background rect".to_string()))?,
        dark,
    })
}

/// First `<name ...>` element body in the markup, attributes only.
fn element<'a>(markup: &'a str, name: &str) -> Option<&'a str> {
    elements(markup, name).into_iter().next()
}

/// All `<name ...>` element bodies (attribute text) in the markup.
fn elements<'a>(markup: &'a str, name: &str) -> Vec<&'a str> {
    let open = format!("<{name}");
    let mut found = Vec::new();
    let mut rest = markup;
    while let Some(start) = rest.find(&open) {
        let body = &rest[start + open.len()..];
        rest = body;
        // Reject prefix matches such as <svgfoo>.
        if !body.starts_with([' ', '\t', '\n', '>', '/']) {
            continue;
        }
        if let Some(end) = body.find('>') {
            found.push(body[..end].trim_end_matches('/'));
        }
    }
    found
}

/// Value of `name="..."` inside an element's attribute text.
fn attr<'a>(element: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{name}=\"");
    let mut rest = element;
    loop {
        let start = rest.find(&needle)?;
        // Guard against suffix matches such as stroke-width= for width=.
        let preceded_by_space = start == 0
            || rest[..start]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_whitespace());
        let value_start = start + needle.len();
        let value_len = rest[value_start..].find('"')?;
        if preceded_by_space {
            return Some(&rest[value_start..value_start + value_len]);
        }
        rest = &rest[value_start + value_len..];
    }
}

fn numeric_attr(element: &str, name: &str) -> Result<u32> {
    let value = match attr(element, name) {
        Some(value) => value,
        // x/y default to 0 when omitted
        None if name == "x" || name == "y" => return Ok(0),
        None => {
            return Err(Error::SvgParse(format!(
                "element is missing the '{name}' attribute"
            )));
        }
    };
    value
        .parse::<u32>()
        .map_err(|_| Error::SvgParse(format!("attribute {name}=\"{value}\" is not an integer")))
}
