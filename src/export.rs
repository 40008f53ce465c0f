//! QR export: turn a mounted visual into a downloadable PNG
//!
//! Both views funnel through the same operation. A successful export
//! produces exactly one file named [`QR_EXPORT_FILENAME`] in the output
//! directory; a view without a mounted visual yields
//! [`Error::SourceNotFound`] and no file is written.

use crate::error::{Error, Result};
use crate::qr::{self, QrVisual};
use std::path::{Path, PathBuf};

/// Fixed name of the exported artifact.
pub const QR_EXPORT_FILENAME: &str = "aadil-hannan-portfolio-qr.png";

/// Anything that can mount a QR visual for export.
///
/// The landing view only mounts one while its QR panel is visible; the
/// dedicated QR view always does.
pub trait QrSource {
    /// The visual to export, or [`Error::SourceNotFound`] when none is mounted.
    fn qr_visual(&self) -> Result<QrVisual>;
}

/// A successfully exported artifact.
#[derive(Debug, Clone)]
pub struct ExportedQr {
    /// Where the PNG was written
    pub path: PathBuf,
    /// Pixel width of the artifact
    pub width: u32,
    /// Pixel height of the artifact
    pub height: u32,
    /// Whether the artifact was decoded back and checked after writing
    pub verified: bool,
}

/// Writes QR visuals out as PNG files.
#[derive(Debug, Clone)]
pub struct Exporter {
    out_dir: PathBuf,
    expected_payload: Option<String>,
}

impl Exporter {
    /// Create an exporter targeting `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            expected_payload: None,
        }
    }

    /// Decode each exported artifact and require its payload to equal `url`.
    pub fn with_verification(mut self, url: impl Into<String>) -> Self {
        self.expected_payload = Some(url.into());
        self
    }

    /// Export the source's mounted visual as [`QR_EXPORT_FILENAME`].
    ///
    /// The raster form is written directly. The vector form is serialized to
    /// markup text first, then rasterized at its natural dimensions on a
    /// blocking worker before being written; the write only happens once
    /// that rasterization completes.
    pub async fn download(&self, source: &dyn QrSource) -> Result<ExportedQr> {
        let visual = source.qr_visual()?;

        std::fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(QR_EXPORT_FILENAME);

        let (width, height) = match visual {
            QrVisual::Raster(img) => {
                let dims = img.dimensions();
                img.save(&path)?;
                dims
            }
            QrVisual::Vector(svg) => {
                let markup = svg.into_markup();
                let target = path.clone();
                tokio::task::spawn_blocking(move || -> Result<(u32, u32)> {
                    let img = qr::rasterize_markup(&markup)?;
                    let dims = img.dimensions();
                    img.save(&target)?;
                    Ok(dims)
                })
                .await
                .map_err(|e| Error::Other(format!("Export task failed: {e}")))??
            }
        };

        let verified = match &self.expected_payload {
            Some(expected) => {
                verify_artifact(&path, expected)?;
                true
            }
            None => false,
        };

        tracing::info!(path = %path.display(), width, height, verified, "Exported QR code");

        Ok(ExportedQr {
            path,
            width,
            height,
            verified,
        })
    }
}

fn verify_artifact(path: &Path, expected: &str) -> Result<()> {
    let img = image::open(path)?;
    let decoded = qr::decode_image(&img)?;
    if decoded != expected {
        return Err(Error::Verify(format!(
            "artifact decodes to '{decoded}', expected '{expected}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::{BackendKind, QrRenderer, QrStyle};

    const URL: &str = "https://aadilhannan.bloocube.com";

    struct Mounted(BackendKind);

    impl QrSource for Mounted {
        fn qr_visual(&self) -> Result<QrVisual> {
            QrRenderer::new(self.0, QrStyle::default()).render(URL)
        }
    }

    struct Hidden;

    impl QrSource for Hidden {
        fn qr_visual(&self) -> Result<QrVisual> {
            Err(Error::SourceNotFound("panel is hidden".to_string()))
        }
    }

    #[tokio::test]
    async fn raster_export_writes_the_fixed_filename() {
        let dir = tempfile::tempdir().unwrap();
        let exported = Exporter::new(dir.path())
            .download(&Mounted(BackendKind::Raster))
            .await
            .unwrap();

        assert_eq!(
            exported.path.file_name().unwrap().to_str().unwrap(),
            QR_EXPORT_FILENAME
        );
        assert!(exported.path.exists());
        assert!(!exported.verified);
    }

    #[tokio::test]
    async fn vector_export_is_verified_against_the_url() {
        let dir = tempfile::tempdir().unwrap();
        let exported = Exporter::new(dir.path())
            .with_verification(URL)
            .download(&Mounted(BackendKind::Vector))
            .await
            .unwrap();

        assert!(exported.verified);
        assert_eq!(exported.width, 280);
        assert_eq!(exported.height, 280);
    }

    #[tokio::test]
    async fn verification_rejects_a_payload_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let result = Exporter::new(dir.path())
            .with_verification("https://somewhere.else")
            .download(&Mounted(BackendKind::Raster))
            .await;

        assert!(matches!(result, Err(Error::Verify(_))));
    }

    #[tokio::test]
    async fn missing_source_exports_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let result = Exporter::new(dir.path()).download(&Hidden).await;

        assert!(matches!(result, Err(Error::SourceNotFound(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
