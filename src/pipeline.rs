use anyhow::{Context, Result, anyhow};
use std::{fs, path::Path};

use crate::{
    cli::{CheckUrlCmd, ExportCmd},
    config::Config,
    export::build_payload,
    model::Transcript,
    urls,
};

pub fn run_export(cmd: ExportCmd, cfg: &Config) -> Result<()> {
    let span = tracing::info_span!("export", input = cmd.input.as_str(), to = ?cmd.to);
    let _g = span.enter();

    let raw = read_input_to_string(&cmd.input)?;
    tracing::info!(bytes = raw.len(), "read input");

    let transcript = Transcript::from_json_str(&raw)
        .with_context(|| format!("failed reading transcript from {}", cmd.input))?;

    log_transcript_summary(&transcript, cfg);

    let include_words = cmd
        .include_words_override()
        .unwrap_or(cfg.export.include_words);
    let title = resolve_title(&cmd, &transcript);
    let payload = build_payload(&transcript, cmd.to, &title, include_words, &cfg.export)
        .with_context(|| format!("failed rendering {:?} export", cmd.to))?;

    if cmd.stdout {
        print!("{}", payload.body);
        tracing::info!(mode = "stdout", mime = payload.mime.as_str(), "wrote export");
        return Ok(());
    }

    let dir = cmd
        .output_dir
        .clone()
        .unwrap_or_else(|| cfg.export.output_dir.clone());
    let out_path = dir.join(&payload.filename);
    write_output(&out_path, &payload.body, cmd.overwrite)?;
    tracing::info!(
        path = %out_path.display(),
        mime = payload.mime.as_str(),
        bytes = payload.body.len(),
        "wrote export file"
    );

    Ok(())
}

pub fn run_check_url(cmd: CheckUrlCmd) -> Result<()> {
    let verdict = url_verdict(&cmd.url);
    println!("{verdict}");
    if verdict == "valid" {
        Ok(())
    } else {
        Err(anyhow!("invalid URL: {}", cmd.url))
    }
}

fn url_verdict(url: &str) -> &'static str {
    if urls::validate_url(url) {
        "valid"
    } else {
        "invalid"
    }
}

fn resolve_title(cmd: &ExportCmd, t: &Transcript) -> String {
    if let Some(title) = cmd.title.as_deref().filter(|s| !s.trim().is_empty()) {
        return title.to_string();
    }

    if let Some(title) = t.metadata_str("title").filter(|s| !s.trim().is_empty()) {
        return title.to_string();
    }

    if cmd.input != "-" {
        if let Some(stem) = Path::new(&cmd.input).file_stem().and_then(|s| s.to_str()) {
            return stem.to_string();
        }
    }

    "transcript".to_string()
}

fn read_input_to_string(input: &str) -> Result<String> {
    if input == "-" {
        use std::io::Read;
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed reading stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed reading input file: {input}"))
    }
}

fn log_transcript_summary(t: &Transcript, cfg: &Config) {
    let shape = match t {
        Transcript::SegmentList(_) => "segment_list",
        Transcript::TranscriptDocument { .. } => "document",
        Transcript::Opaque(_) => "opaque",
    };
    let segments = t.segments().unwrap_or(&[]);

    tracing::info!(
        shape,
        segments = segments.len(),
        word_timing = t.has_word_timing(),
        "transcript summary"
    );

    if tracing::enabled!(tracing::Level::DEBUG) {
        let n = cfg.logging.debug_segment_samples.min(segments.len());
        for (i, s) in segments.iter().take(n).enumerate() {
            let words = s.word_timings();
            tracing::debug!(
                idx = i,
                start = s.start_secs(),
                end = s.end_secs(),
                chars = s.text.chars().count(),
                words = ?words.iter().map(|w| w.word.as_str()).collect::<Vec<_>>(),
                timed_words = words.iter().filter(|w| w.is_timed()).count(),
                "segment sample"
            );
        }
    }
}

fn write_output(path: &Path, data: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(anyhow!(
            "refusing to overwrite existing file (pass --overwrite): {}",
            path.display()
        ));
    }
    fs::write(path, data).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Format;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn export_cmd(input: &Path, to: Format, dir: &Path) -> ExportCmd {
        ExportCmd {
            input: input.to_string_lossy().to_string(),
            to,
            title: None,
            output_dir: Some(dir.to_path_buf()),
            include_words: false,
            no_include_words: false,
            stdout: false,
            overwrite: false,
        }
    }

    fn write_input(dir: &TempDir, name: &str, value: serde_json::Value) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, value.to_string()).unwrap();
        path
    }

    fn sample_doc() -> serde_json::Value {
        json!({
            "id": 12,
            "title": "Team sync",
            "language": "en",
            "segments": [
                { "start": 61.5, "end": 63.25, "text": "Morning all.",
                  "words": [{ "word": "Morning", "start": 61.5, "end": 62.0 }] },
                { "start": 3661.0, "end": 3662.5, "text": "Wrapping up." }
            ]
        })
    }

    #[test]
    fn export_writes_srt_named_after_document_title() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "rec.json", sample_doc());

        run_export(export_cmd(&input, Format::Srt, dir.path()), &Config::default()).unwrap();

        let out = fs::read_to_string(dir.path().join("Team sync.srt")).unwrap();
        assert_eq!(
            out,
            "1\n00:01:01.500 --> 00:01:03.250\nMorning all.\n\n\
             2\n01:01:01.000 --> 01:01:02.500\nWrapping up.\n\n"
        );
    }

    #[test]
    fn export_falls_back_to_input_stem() {
        let dir = TempDir::new().unwrap();
        let input = write_input(
            &dir,
            "meeting-3.json",
            json!([{ "start": 0.0, "end": 1.0, "text": "hi" }]),
        );

        run_export(export_cmd(&input, Format::Vtt, dir.path()), &Config::default()).unwrap();

        let out = fs::read_to_string(dir.path().join("meeting-3.vtt")).unwrap();
        assert!(out.starts_with("WEBVTT\n\n1\n"));
    }

    #[test]
    fn export_json_respects_include_words_flag() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "rec.json", sample_doc());

        let mut cmd = export_cmd(&input, Format::Json, dir.path());
        cmd.title = Some("stripped".to_string());
        run_export(cmd, &Config::default()).unwrap();

        let mut cmd = export_cmd(&input, Format::Json, dir.path());
        cmd.title = Some("full".to_string());
        cmd.include_words = true;
        run_export(cmd, &Config::default()).unwrap();

        let stripped: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("stripped.json")).unwrap())
                .unwrap();
        let full: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("full.json")).unwrap())
                .unwrap();

        assert!(stripped["segments"][0].get("words").is_none());
        assert_eq!(stripped["language"], json!("en"));
        assert_eq!(full, sample_doc());
    }

    #[test]
    fn cli_can_turn_off_words_enabled_in_config() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "rec.json", sample_doc());
        let mut cfg = Config::default();
        cfg.export.include_words = true;

        let mut cmd = export_cmd(&input, Format::Json, dir.path());
        cmd.title = Some("from-config".to_string());
        run_export(cmd, &cfg).unwrap();

        let mut cmd = export_cmd(&input, Format::Json, dir.path());
        cmd.title = Some("from-cli".to_string());
        cmd.no_include_words = true;
        run_export(cmd, &cfg).unwrap();

        let read = |name: &str| -> serde_json::Value {
            serde_json::from_str(&fs::read_to_string(dir.path().join(name)).unwrap()).unwrap()
        };
        assert!(read("from-config.json")["segments"][0].get("words").is_some());
        assert!(read("from-cli.json")["segments"][0].get("words").is_none());
    }

    #[test]
    fn export_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "rec.json", sample_doc());
        fs::write(dir.path().join("Team sync.txt"), "old").unwrap();

        let err = run_export(export_cmd(&input, Format::Txt, dir.path()), &Config::default())
            .unwrap_err();
        assert!(err.to_string().contains("refusing to overwrite"));
        assert_eq!(
            fs::read_to_string(dir.path().join("Team sync.txt")).unwrap(),
            "old"
        );

        let mut cmd = export_cmd(&input, Format::Txt, dir.path());
        cmd.overwrite = true;
        run_export(cmd, &Config::default()).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("Team sync.txt")).unwrap(),
            "Morning all.\nWrapping up."
        );
    }

    #[test]
    fn export_reports_malformed_input() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "bad.json", json!("just a string"));

        let err = run_export(export_cmd(&input, Format::Srt, dir.path()), &Config::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("unexpected transcript shape"));
    }

    #[test]
    fn check_url_result() {
        assert_eq!(url_verdict("https://example.com"), "valid");
        assert_eq!(url_verdict("example"), "invalid");
        assert!(run_check_url(CheckUrlCmd { url: "https://example.com".into() }).is_ok());
        assert!(run_check_url(CheckUrlCmd { url: "example".into() }).is_err());
    }
}
