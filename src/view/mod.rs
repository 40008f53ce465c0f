//! The two card views and the routing table that dispatches them
//!
//! Every invocation constructs its view state from scratch, so nothing can
//! leak from one route to the next.

mod landing;
mod qr_page;

pub use landing::LandingView;
pub use qr_page::QrPageView;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Navigation surface: the paths a card can be rendered at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` - the full portfolio card
    Landing,
    /// `/qr` - the dedicated QR share page
    QrPage,
}

impl Route {
    /// The path this route is mounted at.
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::QrPage => "/qr",
        }
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "/" => Ok(Self::Landing),
            "/qr" => Ok(Self::QrPage),
            other => Err(format!("Unknown route '{other}', expected '/' or '/qr'")),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Section of the landing view the navigation currently highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// The "About Me" section
    #[default]
    About,
    /// The product section
    Product,
    /// The contact section
    Contact,
}

impl Section {
    /// Identifier used in flags and structured output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Product => "product",
            Self::Contact => "contact",
        }
    }

    /// Human navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Product => "Product",
            Self::Contact => "Contact",
        }
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "about" => Ok(Self::About),
            "product" => Ok(Self::Product),
            "contact" => Ok(Self::Contact),
            other => Err(format!(
                "Unknown section '{other}', expected about/product/contact"
            )),
        }
    }
}

/// Transient state owned by the landing view for a single invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LandingState {
    /// Whether the inline QR panel is visible
    pub show_qr: bool,
    /// Section highlighted in the navigation
    pub active_section: Section,
}

impl LandingState {
    /// Flip the inline QR panel's visibility.
    pub fn toggle_qr(&mut self) {
        self.show_qr = !self.show_qr;
    }
}

/// Combined structured and human-readable representation of a view
#[derive(Debug, Clone)]
pub struct RenderedView {
    /// Structured JSON representation suitable for downstream consumers
    pub json: Value,
    /// Human-readable lines for terminal presentation
    pub human: Vec<String>,
}
