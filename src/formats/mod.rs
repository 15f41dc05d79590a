pub mod json;
pub mod srt;
pub mod time;
pub mod txt;
pub mod vtt;

use crate::{formats::time::format_time_range, model::Segment};

/// Append one numbered cue block per segment. SRT and VTT share this body.
pub(crate) fn push_cues(out: &mut String, segments: &[Segment]) {
    for (i, seg) in segments.iter().enumerate() {
        out.push_str(&(i + 1).to_string());
        out.push('\n');
        out.push_str(&format_time_range(seg.start_secs(), seg.end_secs()));
        out.push('\n');
        out.push_str(&seg.text);
        out.push_str("\n\n");
    }
}

#[cfg(test)]
pub(crate) fn seg(start: f64, end: f64, text: &str) -> Segment {
    Segment {
        start: serde_json::Number::from_f64(start).unwrap(),
        end: serde_json::Number::from_f64(end).unwrap(),
        text: text.to_string(),
        extra: serde_json::Map::new(),
    }
}
