use crate::{cli::Format, config::ExportCfg, error::Result, formats, model::Transcript};

/// A rendered export, ready to hand to whatever saves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub filename: String,
    pub mime: String,
    pub body: String,
}

pub fn build_payload(
    t: &Transcript,
    fmt: Format,
    title: &str,
    include_words: bool,
    cfg: &ExportCfg,
) -> Result<ExportPayload> {
    let body = match fmt {
        Format::Srt => formats::srt::render_srt(t.segments()?),
        Format::Vtt => formats::vtt::render_vtt(t.segments()?),
        Format::Txt => formats::txt::render_txt(&formats::txt::transcript_text(t)?),
        Format::Json => formats::json::render_json(t, include_words, cfg.json_pretty)?,
    };

    let mime = match fmt {
        Format::Json => cfg.json_mime.clone(),
        Format::Srt | Format::Vtt | Format::Txt => cfg.text_mime.clone(),
    };

    Ok(ExportPayload {
        filename: format!("{}.{}", sanitize_title(title), fmt.extension()),
        mime,
        body,
    })
}

/// Titles come from user data; keep them to a single path component.
fn sanitize_title(title: &str) -> String {
    let cleaned: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        "transcript".to_string()
    } else {
        cleaned
    }
}
