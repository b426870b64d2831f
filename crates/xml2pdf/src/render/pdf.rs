use tracing::debug;
use typst::diag::{SourceDiagnostic, Warned};
use typst::layout::PagedDocument;
use typst_pdf::PdfOptions;

use crate::config::RendererConfig;
use crate::error::{ConvertError, ConvertWarning};
use crate::render::world::ConversionWorld;

/// The stylesheet bundled with the program. Maps the expected XML vocabulary
/// to formatted output; see `assets/stylesheet.typ`.
const STYLESHEET: &str = include_str!("../../assets/stylesheet.typ");

/// Run the bundled stylesheet over the input XML and export the resulting
/// document as PDF bytes.
///
/// The transform step evaluates the stylesheet against the input and lays
/// the result out into a paged document tree; the render step serializes
/// that tree with the configured conformance standards. The intermediate
/// tree only ever lives in memory.
pub fn compile_to_pdf(
    xml: &[u8],
    config: &RendererConfig,
) -> Result<(Vec<u8>, Vec<ConvertWarning>), ConvertError> {
    let standards = config.pdf_standards()?;
    let world = ConversionWorld::new(STYLESHEET, xml, config);

    let Warned { output, warnings } = typst::compile::<PagedDocument>(&world);
    let document = output.map_err(|errors| ConvertError::Compile(format_diagnostics(&errors)))?;
    debug!(pages = document.pages.len(), "transform complete");

    let warnings = warnings
        .iter()
        .map(|w| ConvertWarning::new("transform", diagnostic_line(w)))
        .collect();

    let options = PdfOptions {
        standards,
        ..Default::default()
    };
    let pdf = typst_pdf::pdf(&document, &options)
        .map_err(|errors| ConvertError::Render(format_diagnostics(&errors)))?;
    debug!(bytes = pdf.len(), "render complete");

    Ok((pdf, warnings))
}

fn diagnostic_line(diag: &SourceDiagnostic) -> String {
    let mut line = diag.message.to_string();
    for hint in &diag.hints {
        line.push_str("; hint: ");
        line.push_str(hint);
    }
    line
}

fn format_diagnostics(diagnostics: &[SourceDiagnostic]) -> String {
    diagnostics
        .iter()
        .map(diagnostic_line)
        .collect::<Vec<_>>()
        .join("\n")
}
