use crate::application::dto::GraphResponse;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// ES module build of mermaid.js loaded by the generated page
const MERMAID_CDN_URL: &str = "https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.esm.min.mjs";

/// HtmlFormatter adapter wrapping the diagram in a standalone page
///
/// Opening the file in a browser renders the graph through mermaid.js.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes text for safe inclusion in HTML element content
    fn escape_html(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for HtmlFormatter {
    fn format(&self, response: &GraphResponse) -> Result<String> {
        let title = format!("Dependency graph: {}", response.graph.root());
        let mut output = String::new();

        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("  <meta charset=\"utf-8\">\n");
        output.push_str(&format!("  <title>{}</title>\n", Self::escape_html(&title)));
        output.push_str("</head>\n<body>\n");
        output.push_str(&format!("  <h1>{}</h1>\n", Self::escape_html(&title)));
        output.push_str(&format!(
            "  <p>max_depth: {} &middot; packages: {} &middot; edges: {}</p>\n",
            response.graph.max_depth(),
            response.graph.package_count(),
            response.graph.edge_count()
        ));
        output.push_str("  <pre class=\"mermaid\">\n");
        output.push_str(&Self::escape_html(&response.diagram));
        output.push_str("  </pre>\n");
        output.push_str("  <script type=\"module\">\n");
        output.push_str(&format!(
            "    import mermaid from \"{}\";\n",
            MERMAID_CDN_URL
        ));
        output.push_str("    mermaid.initialize({ startOnLoad: true });\n");
        output.push_str("  </script>\n</body>\n</html>\n");

        Ok(output)
    }
}
