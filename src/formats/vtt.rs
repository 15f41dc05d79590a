use crate::{formats::push_cues, model::Segment};

const HEADER: &str = "WEBVTT\n\n";

pub fn render_vtt(segments: &[Segment]) -> String {
    let mut out = String::from(HEADER);
    push_cues(&mut out, segments);
    out
}
