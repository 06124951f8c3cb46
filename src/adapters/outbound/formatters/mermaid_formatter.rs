use crate::application::dto::GraphResponse;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// MermaidFormatter adapter emitting the serialized diagram alone
///
/// The output can be pasted into any Mermaid renderer or saved as `.mmd`.
pub struct MermaidFormatter;

impl MermaidFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MermaidFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for MermaidFormatter {
    fn format(&self, response: &GraphResponse) -> Result<String> {
        Ok(response.diagram.clone())
    }
}
