//! cardlink - personal portfolio card with QR sharing
//!
//! This library renders a single portfolio card in two views (the full
//! landing card and a dedicated QR share page) and exports the card's QR
//! symbol as a PNG artifact.
//!
//! # Features
//!
//! - **Two views, one URL**: the portfolio URL is resolved once and
//!   injected into both views, so they always encode the same value
//! - **Interchangeable QR backends**: raster (pixel buffer) or vector
//!   (SVG markup rasterized on export), selected by configuration
//! - **Verified exports**: optionally decode the written PNG and check it
//!   round-trips to the encoded URL
//!
//! # Example
//!
//! ```no_run
//! use cardlink::{CardLink, CardlinkConfig, Exporter, Route};
//!
//! #[tokio::main]
//! async fn main() -> cardlink::Result<()> {
//!     let config = CardlinkConfig::load(None)?;
//!     let card = CardLink::new(&config)?;
//!
//!     // Print the dedicated QR page
//!     for line in card.render(Route::QrPage)?.human {
//!         println!("{line}");
//!     }
//!
//!     // Save aadil-hannan-portfolio-qr.png next to the binary
//!     let exported = Exporter::new(".").download(&card.qr_page()).await?;
//!     println!("saved {}", exported.path.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod qr;
pub mod site;
pub mod view;

// Re-exports for convenience
pub use error::{Error, Result};

pub use card::{Feature, Product, Profile, Stat};
pub use config::{CardlinkConfig, ExportOptions, LoggingOptions, QrOptions, SiteOptions};
pub use export::{ExportedQr, Exporter, QR_EXPORT_FILENAME, QrSource};
pub use qr::{BackendKind, EcLevel, QrRenderer, QrStyle, QrVisual};
pub use view::{LandingState, LandingView, QrPageView, RenderedView, Route, Section};

/// High-level facade combining the card content, the resolved portfolio
/// URL, and the configured QR capability.
pub struct CardLink {
    profile: Profile,
    product: Product,
    url: String,
    backend: BackendKind,
    landing_style: QrStyle,
    page_style: QrStyle,
}

impl CardLink {
    /// Build the card from configuration.
    ///
    /// The portfolio URL is resolved here, exactly once; both views receive
    /// the same string.
    pub fn new(config: &CardlinkConfig) -> Result<Self> {
        let url = site::resolve_portfolio_url(
            config.site.origin.as_deref(),
            site::FALLBACK_PORTFOLIO_URL,
        );
        Ok(Self {
            profile: Profile::default(),
            product: Product::default(),
            url,
            backend: config.qr.backend,
            landing_style: config.qr.landing_style()?,
            page_style: config.qr.page_style()?,
        })
    }

    /// The canonical URL both views encode.
    pub fn portfolio_url(&self) -> &str {
        &self.url
    }

    /// The card owner's profile record.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The promoted product record.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Assemble the landing view (`/`) with the given invocation state.
    pub fn landing(&self, state: LandingState) -> LandingView<'_> {
        LandingView::new(
            &self.profile,
            &self.product,
            &self.url,
            QrRenderer::new(self.backend, self.landing_style.clone()),
            state,
        )
    }

    /// Assemble the dedicated QR view (`/qr`).
    pub fn qr_page(&self) -> QrPageView<'_> {
        QrPageView::new(
            &self.profile,
            &self.url,
            QrRenderer::new(self.backend, self.page_style.clone()),
        )
    }

    /// Dispatch a route with default state and render it.
    pub fn render(&self, route: Route) -> Result<RenderedView> {
        match route {
            Route::Landing => self.landing(LandingState::default()).render(),
            Route::QrPage => self.qr_page().render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_views_observe_the_same_url() {
        let config = CardlinkConfig {
            site: SiteOptions {
                origin: Some("https://aadilhannan.bloocube.com".to_string()),
            },
            ..CardlinkConfig::default()
        };
        let card = CardLink::new(&config).unwrap();

        let landing = card.render(Route::Landing).unwrap();
        let qr_page = card.render(Route::QrPage).unwrap();
        assert_eq!(landing.json["portfolio_url"], qr_page.json["portfolio_url"]);
        assert_eq!(landing.json["portfolio_url"], card.portfolio_url());
    }

    #[test]
    fn route_dispatch_never_leaks_landing_state() {
        let card = CardLink::new(&CardlinkConfig::default()).unwrap();

        // render /qr, then / again: the panel must come back hidden
        card.render(Route::QrPage).unwrap();
        let landing = card.render(Route::Landing).unwrap();
        assert_eq!(landing.json["qr_panel"]["visible"], false);
    }

    #[test]
    fn views_use_their_configured_sizes() {
        let card = CardLink::new(&CardlinkConfig::default()).unwrap();
        let landing = card.landing(LandingState {
            show_qr: true,
            ..LandingState::default()
        });
        let rendered = landing.render().unwrap();
        assert_eq!(rendered.json["qr_panel"]["size"], 220);

        let qr_page = card.render(Route::QrPage).unwrap();
        assert_eq!(qr_page.json["qr"]["size"], 280);
    }
}
