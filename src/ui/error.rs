use crossterm::style::Stylize;

use helm_image_updater::UpdaterError;

use crate::ui::theme;

/// Render an error for stderr: `error: <message>`, plus a hint when one helps
pub fn format_error(err: &anyhow::Error, supports_color: bool) -> String {
    let label = if supports_color {
        format!("{}", "error:".with(theme::colors::ERROR).bold())
    } else {
        "error:".to_string()
    };

    let mut out = format!("{} {}\n", label, err);
    if let Some(hint) = err.downcast_ref::<UpdaterError>().and_then(hint_for) {
        out.push_str(&format!("  hint: {}\n", hint));
    }
    out
}

fn hint_for(err: &UpdaterError) -> Option<&'static str> {
    match err {
        UpdaterError::NoFieldsRequested => {
            Some("pass --version and/or --repository (or HELM_IMAGE_UPDATER_VERSION / HELM_IMAGE_UPDATER_REPOSITORY)")
        }
        UpdaterError::SectionNotFound { .. } => {
            Some("--chart must name a top-level key of the values file")
        }
        UpdaterError::ImageSectionMissing { .. } => {
            Some("expected an 'image' mapping with 'repository' and 'tag' keys")
        }
        UpdaterError::MissingAppVersion { .. } => {
            Some("the chart command expects a Chart.yaml with an appVersion field")
        }
        UpdaterError::File(_) => None,
    }
}

/// Machine-readable error event for `--json`
pub fn error_event(err: &anyhow::Error) -> serde_json::Value {
    let kind = err
        .downcast_ref::<UpdaterError>()
        .map(UpdaterError::kind)
        .unwrap_or("unexpected");
    serde_json::json!({
        "event": "error",
        "success": false,
        "kind": kind,
        "message": err.to_string(),
    })
}

/// Report a failure: always on stderr, and as an NDJSON event on stdout with `--json`
pub fn print_error(err: &anyhow::Error, json: bool, supports_color: bool) {
    if json {
        let _ = crate::presentation::output::emit_event(&error_event(err));
    }

    eprint!("{}", format_error(err, supports_color));
}
