use serde::Deserialize;

use crate::error::ConvertError;

/// The renderer configuration bundled with the program.
///
/// Fixed at build time; the CLI does not expose any way to override it.
const BUNDLED_CONFIG: &str = include_str!("../assets/renderer.json");

/// Settings for the rendering engine, loaded once per invocation and passed
/// by reference through the pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct RendererConfig {
    /// PDF conformance standards requested from the exporter.
    #[serde(default)]
    pub standards: Vec<PdfStandard>,
    /// Font discovery options for the engine's font book.
    #[serde(default)]
    pub fonts: FontOptions,
}

impl RendererConfig {
    /// Load the renderer configuration bundled with the program.
    pub fn bundled() -> Result<Self, ConvertError> {
        Self::from_json(BUNDLED_CONFIG)
    }

    /// Deserialize a renderer configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        serde_json::from_str(json).map_err(|e| ConvertError::Config(e.to_string()))
    }

    /// Resolve the configured standards into the exporter's validated set.
    pub(crate) fn pdf_standards(&self) -> Result<typst_pdf::PdfStandards, ConvertError> {
        let list: Vec<typst_pdf::PdfStandard> =
            self.standards.iter().map(|s| s.to_engine()).collect();
        typst_pdf::PdfStandards::new(&list).map_err(|e| ConvertError::Config(e.to_string()))
    }
}

/// Font discovery options.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FontOptions {
    /// Also search fonts installed on the host system. Off by default so a
    /// given input produces the same PDF on every machine.
    #[serde(default)]
    pub include_system_fonts: bool,
}

/// PDF conformance standards supported by the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PdfStandard {
    /// PDF/A-2b (archival).
    #[serde(rename = "a-2b")]
    A2b,
    /// PDF/A-3b (archival, allows embedded files).
    #[serde(rename = "a-3b")]
    A3b,
    /// PDF/UA-1 (accessibility, implies a tagged document structure).
    #[serde(rename = "ua-1")]
    Ua1,
}

impl PdfStandard {
    fn to_engine(self) -> typst_pdf::PdfStandard {
        match self {
            PdfStandard::A2b => typst_pdf::PdfStandard::A_2b,
            PdfStandard::A3b => typst_pdf::PdfStandard::A_3b,
            PdfStandard::Ua1 => typst_pdf::PdfStandard::Ua_1,
        }
    }
}
