//! PDF report generation via typst.

use typst::layout::PagedDocument;
use typst_as_lib::TypstEngine;
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_pdf::PdfOptions;

use billbrief_core::error::RenderError;
use billbrief_core::render::PdfRenderer;

/// Renders a bill summary as a styled single-document PDF report.
pub struct TypstPdfRenderer;

impl TypstPdfRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Build the typst source for one report. The summary arrives as
    /// markdown-ish prose; markup characters are escaped so it typesets as
    /// plain paragraphs.
    fn document_source(summary: &str, language: &str) -> String {
        let title = escape_markup(&format!("Bill Report ({language})"));
        let body = escape_markup(summary);
        format!(
            "#set page(paper: \"a4\", margin: 2cm)\n\
             #set text(font: \"Liberation Sans\", size: 11pt)\n\
             #align(center)[#text(size: 18pt, weight: \"bold\", fill: rgb(\"#1a237e\"))[{title}]]\n\
             #v(1em)\n\
             {body}\n"
        )
    }
}

impl Default for TypstPdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfRenderer for TypstPdfRenderer {
    fn render(&self, summary: &str, language: &str) -> Result<Vec<u8>, RenderError> {
        let source = Self::document_source(summary, language);

        let engine = TypstEngine::builder()
            .main_file(source)
            .search_fonts_with(TypstKitFontOptions::default())
            .build();

        let document: PagedDocument = engine
            .compile()
            .output
            .map_err(|diagnostics| RenderError::Pdf(join_diagnostics(&diagnostics)))?;

        typst_pdf::pdf(&document, &PdfOptions::default())
            .map_err(|diagnostics| RenderError::Pdf(join_diagnostics(&diagnostics)))
    }
}

fn join_diagnostics(diagnostics: &[typst::diag::SourceDiagnostic]) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| diagnostic.message.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Backslash-escape characters typst would interpret as markup.
fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(
            ch,
            '\\' | '#' | '*' | '_' | '`' | '$' | '<' | '>' | '@' | '[' | ']' | '~'
        ) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
