use crate::adapters::outbound::formatters::{HtmlFormatter, MermaidFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::GraphFormatter;

/// Factory for creating graph formatters
///
/// Selects the formatter adapter for an output format so the CLI never
/// names concrete adapter types.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use pkg_graph::application::dto::OutputFormat;
    /// use pkg_graph::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Mermaid);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn GraphFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Mermaid => Box::new(MermaidFormatter::new()),
            OutputFormat::Html => Box::new(HtmlFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use pkg_graph::application::dto::OutputFormat;
    /// use pkg_graph::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Html);
    /// assert_eq!(message, "📝 Generating HTML page...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Generating text report...",
            OutputFormat::Mermaid => "📝 Generating Mermaid diagram...",
            OutputFormat::Html => "📝 Generating HTML page...",
        }
    }
}
