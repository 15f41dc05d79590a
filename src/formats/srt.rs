use crate::{formats::push_cues, model::Segment};

pub fn render_srt(segments: &[Segment]) -> String {
    let mut out = String::new();
    push_cues(&mut out, segments);
    out
}
