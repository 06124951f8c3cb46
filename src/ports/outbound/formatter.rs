use crate::application::dto::GraphResponse;
use crate::shared::Result;

/// GraphFormatter port for formatting the built graph
///
/// This port abstracts the output representation (text report, Mermaid
/// diagram, HTML page) from the use case that produced the data.
pub trait GraphFormatter {
    /// Formats the use case response
    ///
    /// # Arguments
    /// * `response` - Forward graph, optional reverse lookup and serialized diagram
    ///
    /// # Returns
    /// Formatted content as a string
    ///
    /// # Errors
    /// Returns an error if formatting fails
    fn format(&self, response: &GraphResponse) -> Result<String>;
}
