use serde_json::Value;

use crate::{
    error::{ExportError, Result},
    model::Transcript,
};

/// Plain-text export is the given text, unchanged.
pub fn render_txt(text: &str) -> String {
    text.to_string()
}

/// The text a TXT export should carry for `t`.
///
/// A document's own top-level `text` wins; otherwise segment texts are
/// trimmed and joined one per line.
pub fn transcript_text(t: &Transcript) -> Result<String> {
    if let Some(v) = t.metadata().and_then(|m| m.get("text")) {
        return match v {
            Value::String(s) => Ok(s.clone()),
            _ => Err(ExportError::InputType(
                "top-level `text` must be a string".to_string(),
            )),
        };
    }

    let lines: Vec<&str> = t.segments()?.iter().map(|s| s.text.trim()).collect();
    Ok(lines.join("\n"))
}
