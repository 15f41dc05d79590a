use crate::{error::Result, model::Transcript};

/// Serialize `t`, dropping per-segment `words` unless `include_words` is set.
///
/// Document metadata and any extra segment fields pass through unchanged. An
/// object without `segments` is written back as-is either way.
pub fn render_json(t: &Transcript, include_words: bool, pretty: bool) -> Result<String> {
    let stripped;
    let out = if include_words {
        t
    } else {
        stripped = strip_words(t);
        &stripped
    };

    let s = if pretty {
        serde_json::to_string_pretty(out)?
    } else {
        serde_json::to_string(out)?
    };
    Ok(s)
}

fn strip_words(t: &Transcript) -> Transcript {
    match t {
        Transcript::SegmentList(segments) => {
            Transcript::SegmentList(segments.iter().map(|s| s.without_words()).collect())
        }
        Transcript::TranscriptDocument { segments, metadata } => Transcript::TranscriptDocument {
            segments: segments.iter().map(|s| s.without_words()).collect(),
            metadata: metadata.clone(),
        },
        Transcript::Opaque(_) => t.clone(),
    }
}
