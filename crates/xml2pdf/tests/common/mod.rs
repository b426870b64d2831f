//! Shared test utilities for integration tests.

use std::process::Command;

/// Extract all visible text content from PDF bytes.
///
/// Panics if the PDF cannot be parsed.
pub fn extract_pdf_text(pdf_bytes: &[u8]) -> String {
    pdf_extract::extract_text_from_mem(pdf_bytes).expect("should extract text from PDF")
}

/// Validate PDF bytes using `qpdf --check`.
///
/// Returns `true` if validation was performed and passed, `false` if it was
/// skipped because `XML2PDF_VALIDATE_PDF` is not set to `"1"` or `qpdf` is
/// not installed. Panics if `qpdf` reports the PDF is invalid.
pub fn validate_pdf_with_qpdf(pdf_bytes: &[u8]) -> bool {
    if std::env::var("XML2PDF_VALIDATE_PDF").unwrap_or_default() != "1" {
        return false;
    }
    if !qpdf_available() {
        eprintln!("[WARN] qpdf not installed, skipping PDF validation");
        return false;
    }

    let temp_path = std::env::temp_dir().join(format!(
        "xml2pdf_test_{}_{}.pdf",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::write(&temp_path, pdf_bytes).expect("should write temp PDF file");

    let output = Command::new("qpdf")
        .arg("--check")
        .arg(&temp_path)
        .output()
        .expect("should run qpdf");
    let _ = std::fs::remove_file(&temp_path);

    assert!(
        output.status.success(),
        "qpdf --check failed:\nstdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
    true
}

fn qpdf_available() -> bool {
    matches!(
        Command::new("qpdf").arg("--version").output(),
        Ok(output) if output.status.success()
    )
}
