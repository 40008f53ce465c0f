//! Dedicated QR view: the share page at `/qr`

use super::{RenderedView, Route};
use crate::card::Profile;
use crate::error::Result;
use crate::export::{QR_EXPORT_FILENAME, QrSource};
use crate::qr::{QrRenderer, QrVisual};
use serde_json::{Map, Value, json};

/// Full-page QR share view with download and copy actions.
pub struct QrPageView<'a> {
    profile: &'a Profile,
    url: &'a str,
    renderer: QrRenderer,
}

impl<'a> QrPageView<'a> {
    /// Assemble the QR page for one invocation.
    pub fn new(profile: &'a Profile, url: &'a str, renderer: QrRenderer) -> Self {
        Self {
            profile,
            url,
            renderer,
        }
    }

    /// Render the page to terminal lines plus a structured value.
    pub fn render(&self) -> Result<RenderedView> {
        Ok(RenderedView {
            json: self.json_value(),
            human: self.human_lines()?,
        })
    }

    fn json_value(&self) -> Value {
        let style = self.renderer.style();
        let mut root = Map::new();
        root.insert(
            "route".to_string(),
            Value::String(Route::QrPage.path().to_string()),
        );
        root.insert(
            "portfolio_url".to_string(),
            Value::String(self.url.to_string()),
        );
        root.insert(
            "profile".to_string(),
            json!({
                "name": self.profile.name,
                "title": self.profile.title,
                "company": self.profile.company,
                "location": self.profile.location,
            }),
        );
        root.insert(
            "qr".to_string(),
            json!({
                "value": self.url,
                "size": style.size,
                "backend": self.renderer.backend().as_str(),
                "foreground": style.foreground.to_hex(),
                "background": style.background.to_hex(),
                "download_filename": QR_EXPORT_FILENAME,
            }),
        );
        root.insert(
            "actions".to_string(),
            json!(["download", "copy"]),
        );
        Value::Object(root)
    }

    fn human_lines(&self) -> Result<Vec<String>> {
        let profile = self.profile;
        let mut lines = Vec::new();

        lines.push(format!(
            "<- Back to portfolio (--route /)    [B] {}",
            profile.company
        ));
        lines.push(String::new());
        lines.push(format!(
            "({})  {} - {} · {}",
            profile.initials(),
            profile.name,
            profile.title,
            profile.company
        ));
        lines.push(format!("     📍 {}", profile.location));
        lines.push(String::new());

        lines.push("Portfolio QR Code".to_string());
        lines.push("Scan to open the portfolio instantly on any device".to_string());
        lines.push(String::new());

        let symbol = self.renderer.terminal(self.url)?;
        lines.extend(symbol.lines().map(str::to_string));
        lines.push("[B] Scan with your camera app".to_string());
        lines.push(String::new());

        lines.push(format!("Portfolio URL: {}", self.url));
        lines.push(format!(
            "Actions: --download (saves {QR_EXPORT_FILENAME}) · --copy (copies the URL)"
        ));
        lines.push(String::new());

        lines.push("About This QR Code".to_string());
        lines.push("  🔒 Links directly to the portfolio website".to_string());
        lines.push("  📱 Works with all smartphone cameras".to_string());
        lines.push("  ⚡ Instant access — no app required".to_string());
        lines.push("  💾 Download and print for business cards or events".to_string());
        lines.push(String::new());

        lines.push(format!(
            "{} · Founder, {} · {}",
            profile.name, profile.company, profile.location
        ));
        lines.push(format!("{} · {}", profile.phone, profile.website));

        Ok(lines)
    }
}

impl QrSource for QrPageView<'_> {
    fn qr_visual(&self) -> Result<QrVisual> {
        self.renderer.render(self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::{BackendKind, QrStyle};

    const URL: &str = "https://aadilhannan.bloocube.com";

    fn page(profile: &Profile) -> QrPageView<'_> {
        QrPageView::new(
            profile,
            URL,
            QrRenderer::new(BackendKind::Vector, QrStyle::default()),
        )
    }

    #[test]
    fn page_always_mounts_a_visual() {
        let profile = Profile::default();
        let view = page(&profile);
        let visual = view.qr_visual().unwrap();
        assert_eq!(visual.backend(), BackendKind::Vector);
    }

    #[test]
    fn structured_output_names_the_artifact() {
        let profile = Profile::default();
        let rendered = page(&profile).render().unwrap();
        assert_eq!(rendered.json["route"], "/qr");
        assert_eq!(rendered.json["portfolio_url"], URL);
        assert_eq!(
            rendered.json["qr"]["download_filename"],
            "aadil-hannan-portfolio-qr.png"
        );
        assert_eq!(rendered.json["qr"]["foreground"], "#1a237e");
        assert_eq!(rendered.json["actions"][1], "copy");
    }

    #[test]
    fn terminal_output_carries_url_and_symbol() {
        let profile = Profile::default();
        let rendered = page(&profile).render().unwrap();
        let text = rendered.human.join("\n");
        assert!(text.contains("Portfolio URL: https://aadilhannan.bloocube.com"));
        assert!(text.contains("Scan with your camera app"));
        // the unicode symbol occupies a block of lines
        assert!(rendered.human.len() > 20);
    }
}
