use crate::constants::LASTMOD_DATE_FORMAT;
use crate::models::ChangeFrequency;
use crate::types::SitemapUrl;
use chrono::NaiveDate;
use quick_xml::escape::escape;

/// One `<url>` element of the sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub loc: SitemapUrl,
    pub lastmod: NaiveDate,
    pub changefreq: ChangeFrequency,
    pub priority: f32,
}

impl UrlEntry {
    pub fn new(
        loc: SitemapUrl,
        lastmod: NaiveDate,
        changefreq: ChangeFrequency,
        priority: f32,
    ) -> Self {
        Self {
            loc,
            lastmod,
            changefreq,
            priority,
        }
    }

    /// Appends the `<url>` block, indented one level, as individual lines.
    pub(crate) fn render_lines(&self, lines: &mut Vec<String>) {
        lines.push("  <url>".to_string());
        lines.push(format!("    <loc>{}</loc>", escape(self.loc.as_str())));
        lines.push(format!(
            "    <lastmod>{}</lastmod>",
            self.lastmod.format(LASTMOD_DATE_FORMAT)
        ));
        lines.push(format!("    <changefreq>{}</changefreq>", self.changefreq));
        lines.push(format!(
            "    <priority>{}</priority>",
            format_priority(self.priority)
        ));
        lines.push("  </url>".to_string());
    }
}

/// Shortest decimal form of the priority, keeping one fractional digit for
/// whole numbers (`1.0`, not `1`).
fn format_priority(priority: f32) -> String {
    if priority.fract() == 0.0 {
        format!("{:.1}", priority)
    } else {
        priority.to_string()
    }
}
