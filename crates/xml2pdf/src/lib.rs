pub mod config;
pub mod error;
pub mod parser;
pub mod render;

use std::path::Path;

use tracing::info;

use config::RendererConfig;
use error::{ConvertError, ConvertResult, ConvertWarning};

/// Convert the XML file at the given path to PDF bytes using the bundled
/// renderer configuration.
pub fn convert(path: impl AsRef<Path>) -> Result<ConvertResult, ConvertError> {
    let config = RendererConfig::bundled()?;
    convert_with_config(path, &config)
}

/// Convert the XML file at the given path to PDF bytes.
pub fn convert_with_config(
    path: impl AsRef<Path>,
    config: &RendererConfig,
) -> Result<ConvertResult, ConvertError> {
    let data = std::fs::read(path.as_ref())?;
    convert_bytes(&data, config)
}

/// Convert raw XML bytes to PDF bytes.
///
/// Runs the well-formedness preflight, then the stylesheet transform and
/// the PDF export in one blocking call.
pub fn convert_bytes(
    xml: &[u8],
    config: &RendererConfig,
) -> Result<ConvertResult, ConvertError> {
    let doc = parser::preflight(xml)?;
    info!(
        root = %doc.root,
        title = doc.title.as_deref().unwrap_or("<none>"),
        lang = doc.language.as_deref().unwrap_or("en"),
        "input accepted"
    );

    let mut warnings = Vec::new();
    if doc.title.is_none() {
        warnings.push(ConvertWarning::new(
            "preflight",
            "document has no title; the tagged PDF will use a placeholder",
        ));
    }

    let (pdf, render_warnings) = render::pdf::compile_to_pdf(xml, config)?;
    warnings.extend(render_warnings);

    Ok(ConvertResult { pdf, warnings })
}
