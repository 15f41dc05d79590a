use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::{ExportError, Result};

/// Per-word alignment, decoded leniently from a segment's `words` entries.
///
/// Engines disagree on whether the token lives under `word` or `text`, and
/// leave tokens they could not align without times.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WordTiming {
    #[serde(alias = "text")]
    pub word: String,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
}

impl WordTiming {
    pub fn is_timed(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// One timed segment of a transcript. Times are in seconds.
///
/// Times keep the number exactly as the engine wrote it (`0` stays an
/// integer) and `words` stays in `extra` untouched, so a JSON export with
/// words included reproduces the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Number,
    pub end: Number,
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Segment {
    pub fn start_secs(&self) -> f64 {
        self.start.as_f64().unwrap_or(0.0)
    }

    pub fn end_secs(&self) -> f64 {
        self.end.as_f64().unwrap_or(0.0)
    }

    /// The raw `words` value, when the engine emitted one (possibly `null`).
    pub fn words(&self) -> Option<&Value> {
        self.extra.get("words")
    }

    /// Entries of `words` that decode as word timings; others are skipped.
    pub fn word_timings(&self) -> Vec<WordTiming> {
        match self.words() {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|w| WordTiming::deserialize(w).ok())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Shallow copy with the `words` field removed.
    pub fn without_words(&self) -> Self {
        let mut seg = self.clone();
        seg.extra.shift_remove("words");
        seg
    }
}

/// A transcript as delivered by the transcription engine.
///
/// The shape is resolved once, in [`Transcript::from_value`]; renderers match
/// on the variant instead of inspecting JSON again.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Transcript {
    /// A bare ordered list of segments.
    SegmentList(Vec<Segment>),
    /// An object holding `segments` next to arbitrary metadata (id, title, language, ...).
    TranscriptDocument {
        segments: Vec<Segment>,
        #[serde(flatten)]
        metadata: Map<String, Value>,
    },
    /// An object without a `segments` field. Only JSON export accepts it.
    Opaque(Map<String, Value>),
}

impl Transcript {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| ExportError::InputType(format!("input is not valid JSON: {e}")))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            arr @ Value::Array(_) => Ok(Transcript::SegmentList(decode_segments(arr)?)),
            Value::Object(mut metadata) => match metadata.shift_remove("segments") {
                Some(raw) => {
                    let segments = decode_segments(raw)?;
                    Ok(Transcript::TranscriptDocument { segments, metadata })
                }
                None => Ok(Transcript::Opaque(metadata)),
            },
            other => Err(ExportError::InputType(format!(
                "expected a segment array or an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// The ordered segments, for renderers that emit one cue per segment.
    pub fn segments(&self) -> Result<&[Segment]> {
        match self {
            Transcript::SegmentList(segments) => Ok(segments),
            Transcript::TranscriptDocument { segments, .. } => Ok(segments),
            Transcript::Opaque(_) => Err(ExportError::InputType(
                "transcript object has no `segments` field".to_string(),
            )),
        }
    }

    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        match self {
            Transcript::SegmentList(_) => None,
            Transcript::TranscriptDocument { metadata, .. } => Some(metadata),
            Transcript::Opaque(metadata) => Some(metadata),
        }
    }

    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata()?.get(key)?.as_str()
    }

    pub fn has_word_timing(&self) -> bool {
        self.segments()
            .map(|segs| segs.iter().any(|s| s.word_timings().iter().any(WordTiming::is_timed)))
            .unwrap_or(false)
    }
}

/// Largest accepted time offset, about 31,700 years; keeps whole seconds and
/// milliseconds exact when formatted.
pub const MAX_OFFSET_SECS: f64 = 1.0e12;

fn decode_segments(raw: Value) -> Result<Vec<Segment>> {
    if !raw.is_array() {
        return Err(ExportError::InputType(format!(
            "`segments` must be an array, got {}",
            json_kind(&raw)
        )));
    }

    let segments: Vec<Segment> = serde_json::from_value(raw)
        .map_err(|e| ExportError::InputType(format!("malformed segment: {e}")))?;
    validate_segments(&segments)?;
    Ok(segments)
}

fn validate_segments(segments: &[Segment]) -> Result<()> {
    for (i, seg) in segments.iter().enumerate() {
        let (start, end) = (seg.start_secs(), seg.end_secs());
        if !(0.0..=MAX_OFFSET_SECS).contains(&start) {
            return Err(ExportError::InputType(format!(
                "segment {i}: start must be between 0 and {MAX_OFFSET_SECS} seconds, got {}",
                seg.start
            )));
        }
        if !(start..=MAX_OFFSET_SECS).contains(&end) {
            return Err(ExportError::InputType(format!(
                "segment {i}: end ({}) must not precede start ({}) or exceed {MAX_OFFSET_SECS} seconds",
                seg.end, seg.start
            )));
        }
    }
    Ok(())
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
