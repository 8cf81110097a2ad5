use crate::constants::{SITEMAP_NAMESPACE, XML_DECLARATION};
use crate::models::UrlEntry;

/// Ordered URL entries wrapped in the `<urlset>` envelope.
#[derive(Debug, Clone, Default)]
pub struct SitemapDocument {
    pub entries: Vec<UrlEntry>,
}

impl SitemapDocument {
    pub fn new(entries: Vec<UrlEntry>) -> Self {
        Self { entries }
    }

    pub fn url_count(&self) -> usize {
        self.entries.len()
    }

    /// Renders the document as sitemap 0.9 XML.
    ///
    /// Lines are joined with `\n` and there is no trailing newline.
    pub fn render_xml(&self) -> String {
        // declaration + urlset open/close, six lines per entry
        let mut lines = Vec::with_capacity(3 + self.entries.len() * 6);

        lines.push(XML_DECLARATION.to_string());
        lines.push(format!(r#"<urlset xmlns="{}">"#, SITEMAP_NAMESPACE));

        for entry in &self.entries {
            entry.render_lines(&mut lines);
        }

        lines.push("</urlset>".to_string());

        lines.join("\n")
    }
}
