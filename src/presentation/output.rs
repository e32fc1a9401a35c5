//! Output Rendering
//!
//! Provides a unified interface for rendering update outcomes to text or JSON.

use std::io::{self, Write};

use helm_image_updater::UpdateOutcome;

use crate::ui::diff::render_rewrite_diff;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Trait for rendering update results
pub trait OutcomeRenderer {
    fn render(&self, outcome: &UpdateOutcome, out: &mut dyn Write) -> io::Result<()>;
}

/// Text renderer for update results
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Suppress per-field messages
    pub quiet: bool,
}

impl OutcomeRenderer for TextRenderer {
    fn render(&self, outcome: &UpdateOutcome, out: &mut dyn Write) -> io::Result<()> {
        if let Some(preview) = &outcome.preview {
            let path = outcome.file.display().to_string();
            out.write_all(
                render_rewrite_diff(&path, &preview.before, &preview.after, self.color).as_bytes(),
            )?;
        }

        if self.quiet {
            return Ok(());
        }

        for message in outcome.messages() {
            writeln!(out, "{}", message)?;
        }

        if outcome.dry_run && outcome.updated {
            writeln!(out, "Dry run: {} was not written.", outcome.file.display())?;
        }

        Ok(())
    }
}

/// NDJSON renderer: a single `update` event per invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl OutcomeRenderer for JsonRenderer {
    fn render(&self, outcome: &UpdateOutcome, out: &mut dyn Write) -> io::Result<()> {
        let mut event = serde_json::json!({
            "event": "update",
            "success": true,
            "file": outcome.file.display().to_string(),
            "updated": outcome.updated,
            "written": outcome.written,
            "dry_run": outcome.dry_run,
            "changes": outcome.changes,
            "messages": outcome.messages(),
        });
        if let Some(preview) = &outcome.preview {
            event["preview"] = serde_json::Value::String(preview.after.clone());
        }
        write_event(out, &event)
    }
}

/// Write one NDJSON event: a single JSON object terminated by a newline
pub fn write_event(out: &mut dyn Write, event: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")
}

/// Write one NDJSON event to stdout
pub fn emit_event(event: &serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)?;
    out.flush()
}

/// Pick the renderer for the requested format
pub fn renderer_for(format: OutputFormat, color: bool, quiet: bool) -> Box<dyn OutcomeRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { color, quiet }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
