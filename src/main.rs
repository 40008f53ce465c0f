//! cardlink CLI entrypoint

use cardlink::qr::BackendKind;
use cardlink::view::{LandingState, RenderedView, Route, Section};
use cardlink::{CardLink, CardlinkConfig, Error, Exporter, Result, logging};
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cardlink",
    version,
    about = "Personal portfolio card with QR sharing"
)]
struct Cli {
    /// Optional configuration file (toml/yaml). Defaults to cardlink.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// View to render: `/` (landing card) or `/qr` (dedicated QR page)
    #[arg(long, default_value = "/", value_name = "PATH")]
    route: Route,

    /// Override the portfolio origin encoded into the QR symbol
    #[arg(long, value_name = "URL")]
    origin: Option<String>,

    /// Override the QR rendering backend (`raster` or `vector`)
    #[arg(long, value_name = "KIND")]
    backend: Option<BackendKind>,

    /// Show the inline QR panel on the landing view
    #[arg(long)]
    show_qr: bool,

    /// Highlight a navigation section on the landing view (about/product/contact)
    #[arg(long, value_name = "NAME")]
    section: Option<Section>,

    /// Export the QR symbol as a PNG into the output directory
    #[arg(long)]
    download: bool,

    /// Copy the portfolio URL to the system clipboard (only on `/qr`)
    #[arg(long)]
    copy: bool,

    /// Override the export output directory
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Decode the exported PNG and check it matches the portfolio URL
    #[arg(long)]
    verify: bool,

    /// Output results as formatted JSON instead of human-readable text
    #[arg(long)]
    json: bool,
}

struct OutputSink {
    json: bool,
}

impl OutputSink {
    fn emit_view(&self, view: &RenderedView) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&view.json)?);
        } else {
            for line in &view.human {
                println!("{line}");
            }
        }
        Ok(())
    }

    fn emit_export(&self, exported: &cardlink::ExportedQr) -> Result<()> {
        if self.json {
            let payload = json!({
                "export": {
                    "path": exported.path.display().to_string(),
                    "width": exported.width,
                    "height": exported.height,
                    "verified": exported.verified,
                }
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            println!("Saved QR code to {}", exported.path.display());
            if exported.verified {
                println!("Verified: artifact decodes back to the portfolio URL");
            }
        }
        Ok(())
    }

    fn emit_copied(&self, url: &str) -> Result<()> {
        if self.json {
            let payload = json!({ "copied": url });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            println!("Portfolio URL copied to clipboard!");
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CardlinkConfig::load(cli.config.as_deref())?;

    if let Some(ref origin) = cli.origin {
        config.site.origin = Some(origin.clone());
    }

    if let Some(backend) = cli.backend {
        config.qr.backend = backend;
    }

    if let Some(ref dir) = cli.out_dir {
        config.export.out_dir = dir.clone();
    }

    if cli.verify {
        config.export.verify = true;
    }

    logging::init(&config.logging)?;

    if cli.copy && cli.route != Route::QrPage {
        return Err(Error::Config(
            "--copy is only available on the /qr view".to_string(),
        ));
    }

    if cli.route == Route::QrPage && (cli.show_qr || cli.section.is_some()) {
        tracing::warn!("--show-qr/--section only apply to the landing view; ignoring");
    }

    let sink = OutputSink { json: cli.json };
    let card = CardLink::new(&config)?;
    tracing::info!(
        route = %cli.route,
        url = card.portfolio_url(),
        backend = %config.qr.backend,
        "Rendering portfolio card"
    );

    match cli.route {
        Route::Landing => {
            let state = LandingState {
                show_qr: cli.show_qr,
                active_section: cli.section.unwrap_or_default(),
            };
            let view = card.landing(state);
            sink.emit_view(&view.render()?)?;

            if cli.download {
                let exported = exporter(&config, &card).download(&view).await?;
                sink.emit_export(&exported)?;
            }
        }
        Route::QrPage => {
            let view = card.qr_page();
            sink.emit_view(&view.render()?)?;

            if cli.download {
                let exported = exporter(&config, &card).download(&view).await?;
                sink.emit_export(&exported)?;
            }

            if cli.copy {
                copy_url(card.portfolio_url())?;
                sink.emit_copied(card.portfolio_url())?;
            }
        }
    }

    Ok(())
}

fn exporter(config: &CardlinkConfig, card: &CardLink) -> Exporter {
    let exporter = Exporter::new(config.export.out_dir.clone());
    if config.export.verify {
        exporter.with_verification(card.portfolio_url())
    } else {
        exporter
    }
}

#[cfg(feature = "clipboard")]
fn copy_url(url: &str) -> Result<()> {
    use cardlink::clipboard::{SystemClipboard, copy_portfolio_url};

    let mut clipboard = SystemClipboard::new()?;
    copy_portfolio_url(&mut clipboard, url)
}

#[cfg(not(feature = "clipboard"))]
fn copy_url(_url: &str) -> Result<()> {
    Err(Error::Clipboard(
        "cardlink was built without clipboard support".to_string(),
    ))
}
