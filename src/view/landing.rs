//! Landing view: the full portfolio card at `/`

use super::{LandingState, RenderedView, Route, Section};
use crate::card::{Product, Profile};
use crate::error::{Error, Result};
use crate::export::{QR_EXPORT_FILENAME, QrSource};
use crate::qr::{QrRenderer, QrVisual};
use crate::site;
use serde_json::{Map, Value, json};

/// The portfolio card with its inline, toggleable QR panel.
pub struct LandingView<'a> {
    profile: &'a Profile,
    product: &'a Product,
    url: &'a str,
    renderer: QrRenderer,
    state: LandingState,
}

impl<'a> LandingView<'a> {
    /// Assemble the landing view for one invocation.
    pub fn new(
        profile: &'a Profile,
        product: &'a Product,
        url: &'a str,
        renderer: QrRenderer,
        state: LandingState,
    ) -> Self {
        Self {
            profile,
            product,
            url,
            renderer,
            state,
        }
    }

    /// The state this invocation renders with.
    pub fn state(&self) -> LandingState {
        self.state
    }

    /// Render the card to terminal lines plus a structured value.
    pub fn render(&self) -> Result<RenderedView> {
        Ok(RenderedView {
            json: self.json_value()?,
            human: self.human_lines()?,
        })
    }

    fn json_value(&self) -> Result<Value> {
        let mut root = Map::new();
        root.insert(
            "route".to_string(),
            Value::String(Route::Landing.path().to_string()),
        );
        root.insert(
            "portfolio_url".to_string(),
            Value::String(self.url.to_string()),
        );
        root.insert(
            "active_section".to_string(),
            Value::String(self.state.active_section.as_str().to_string()),
        );
        root.insert("profile".to_string(), serde_json::to_value(self.profile)?);
        root.insert("product".to_string(), serde_json::to_value(self.product)?);

        let qr_panel = if self.state.show_qr {
            json!({
                "visible": true,
                "value": self.url,
                "size": self.renderer.style().size,
                "backend": self.renderer.backend().as_str(),
                "download_filename": QR_EXPORT_FILENAME,
            })
        } else {
            json!({ "visible": false })
        };
        root.insert("qr_panel".to_string(), qr_panel);

        Ok(Value::Object(root))
    }

    fn human_lines(&self) -> Result<Vec<String>> {
        let profile = self.profile;
        let product = self.product;
        let mut lines = Vec::new();

        lines.push(format!("[B] {}    {}", profile.company, self.nav_bar()));
        lines.push(String::new());

        // Hero
        lines.push(format!("({})  {}", profile.initials(), profile.name));
        lines.push(format!("     {} @ {}", profile.title, profile.company));
        lines.push(format!("     {}", profile.tagline));
        lines.push(format!(
            "     📍 {}   🔗 {} connections",
            profile.location, profile.connections
        ));
        lines.push(format!("     Connect on LinkedIn: {}", profile.linkedin));
        lines.push(format!("     Call now: {}", site::tel_uri(profile.phone)));
        lines.push(String::new());

        // About
        lines.push(self.section_heading(Section::About, "Who I Am", "About Me"));
        lines.push(format!("  {}", profile.bio));
        lines.push(format!("  📱 Phone     {}", profile.phone));
        lines.push(format!(
            "  🌐 Website   {} ({})",
            profile.website,
            site::website_uri(profile.website)
        ));
        lines.push(format!("  📍 Location  {}", profile.location));
        lines.push(format!("  💼 LinkedIn  {}", profile.linkedin));
        lines.push(String::new());
        lines.push("  Expertise".to_string());
        lines.push(format!("  {}", profile.skills.join(" · ")));
        lines.push(String::new());

        // Product
        lines.push(self.section_heading(Section::Product, "Our Product", product.name));
        lines.push(format!("  {}", product.tagline));
        lines.push(format!("  {}", product.description));
        let stats = product
            .stats
            .iter()
            .map(|stat| format!("{} {}", stat.value, stat.label))
            .collect::<Vec<_>>()
            .join("  |  ");
        lines.push(format!("  {stats}"));
        for feature in product.features {
            lines.push(format!(
                "  {} {} - {}",
                feature.icon, feature.title, feature.description
            ));
        }
        lines.push(format!(
            "  Visit {} -> {}",
            product.name,
            site::website_uri(profile.website)
        ));
        lines.push(String::new());

        // QR panel
        lines.push("Share: My Portfolio QR".to_string());
        lines.push("  Scan to open this portfolio on any device".to_string());
        if self.state.show_qr {
            let symbol = self.renderer.terminal(self.url)?;
            lines.extend(symbol.lines().map(|line| format!("  {line}")));
            lines.push(format!("  {}", self.url));
            lines.push(format!(
                "  Download with --download (saves {QR_EXPORT_FILENAME})"
            ));
            lines.push("  Full QR page: --route /qr".to_string());
        } else {
            lines.push("  [ QR panel hidden - pass --show-qr to generate it ]".to_string());
        }
        lines.push(String::new());

        // Contact
        lines.push(self.section_heading(Section::Contact, "Get In Touch", "Contact"));
        lines.push(format!("  📞 Phone     {}", profile.phone));
        lines.push(format!("  🌐 Website   {}", profile.website));
        lines.push(format!("  💼 LinkedIn  {}", profile.name));
        lines.push(format!("  📍 Location  {}", profile.location));
        lines.push(String::new());

        lines.push(format!(
            "[B] {} · Built by {} · {}",
            profile.company, profile.name, profile.location
        ));

        Ok(lines)
    }

    fn nav_bar(&self) -> String {
        let entries = [Section::About, Section::Product, Section::Contact]
            .iter()
            .map(|section| {
                if *section == self.state.active_section {
                    format!("[{}]", section.label())
                } else {
                    section.label().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" · ");
        format!("{entries} · QR (--route /qr)")
    }

    fn section_heading(&self, section: Section, kicker: &str, title: &str) -> String {
        let marker = if section == self.state.active_section {
            "▸"
        } else {
            " "
        };
        format!("{marker} {kicker}: {title}")
    }
}

impl QrSource for LandingView<'_> {
    fn qr_visual(&self) -> Result<QrVisual> {
        if !self.state.show_qr {
            return Err(Error::SourceNotFound(
                "the landing QR panel is hidden".to_string(),
            ));
        }
        self.renderer.render(self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::{BackendKind, QrStyle};

    const URL: &str = "https://aadilhannan.bloocube.com";

    fn view<'a>(profile: &'a Profile, product: &'a Product, state: LandingState) -> LandingView<'a> {
        LandingView::new(
            profile,
            product,
            URL,
            QrRenderer::new(BackendKind::Raster, QrStyle::default()),
            state,
        )
    }

    #[test]
    fn hidden_panel_renders_a_placeholder_and_mounts_nothing() {
        let profile = Profile::default();
        let product = Product::default();
        let view = view(&profile, &product, LandingState::default());

        let rendered = view.render().unwrap();
        assert_eq!(rendered.json["qr_panel"]["visible"], false);
        assert!(
            rendered
                .human
                .iter()
                .any(|line| line.contains("--show-qr")),
            "placeholder should point at the toggle"
        );
        assert!(matches!(view.qr_visual(), Err(Error::SourceNotFound(_))));
    }

    #[test]
    fn visible_panel_carries_the_portfolio_url() {
        let profile = Profile::default();
        let product = Product::default();
        let state = LandingState {
            show_qr: true,
            ..LandingState::default()
        };
        let view = view(&profile, &product, state);

        let rendered = view.render().unwrap();
        assert_eq!(rendered.json["qr_panel"]["visible"], true);
        assert_eq!(rendered.json["qr_panel"]["value"], URL);
        assert_eq!(rendered.json["qr_panel"]["size"], 280);
        assert!(rendered.human.iter().any(|line| line.trim() == URL));
        assert!(view.qr_visual().is_ok());
    }

    #[test]
    fn active_section_is_highlighted_in_the_nav() {
        let profile = Profile::default();
        let product = Product::default();
        let state = LandingState {
            active_section: Section::Contact,
            ..LandingState::default()
        };
        let view = view(&profile, &product, state);

        let rendered = view.render().unwrap();
        assert_eq!(rendered.json["active_section"], "contact");
        assert!(rendered.human[0].contains("[Contact]"));
        assert!(!rendered.human[0].contains("[About]"));
    }

    #[test]
    fn card_content_reaches_the_terminal_output() {
        let profile = Profile::default();
        let product = Product::default();
        let view = view(&profile, &product, LandingState::default());

        let text = view.render().unwrap().human.join("\n");
        assert!(text.contains("Aadil Hannan"));
        assert!(text.contains("Founder & Managing Director"));
        assert!(text.contains("tel:+91-9798383898"));
        assert!(text.contains("https://www.bloocube.com"));
        assert!(text.contains("Growth Hacking"));
        assert!(text.contains("3x Avg. ROI"));
    }
}
