use crate::error::Result;
use crate::report::AnalysisResult;

use super::OutputFormatter;

/// Pretty-printed JSON of the whole [`AnalysisResult`].
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &AnalysisResult) -> Result<String> {
        let mut json = serde_json::to_string_pretty(result)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
