//! Dry-run preview of a values file rewrite
//!
//! Only the hunks around changed lines are printed, so previewing a tag
//! bump in a large values file stays a few lines long.

use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use crate::ui::theme;

/// Unchanged lines shown around each change
const CONTEXT_LINES: usize = 3;

/// Unified diff between the file on disk and the rewrite that would replace it
pub fn render_rewrite_diff(path: &str, before: &str, after: &str, color: bool) -> String {
    let diff = TextDiff::from_lines(before, after);
    let mut out = String::new();

    push_line(&mut out, &format!("--- a/{}", path), paint_header, color);
    push_line(&mut out, &format!("+++ b/{}", path), paint_header, color);

    for hunk in diff.unified_diff().context_radius(CONTEXT_LINES).iter_hunks() {
        push_line(&mut out, &hunk.header().to_string(), paint_header, color);
        for change in hunk.iter_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => '-',
                ChangeTag::Insert => '+',
                ChangeTag::Equal => ' ',
            };
            let line = format!("{}{}", sign, change.value().trim_end_matches('\n'));
            let tag = change.tag();
            push_line(&mut out, &line, |s| paint_change(s, tag), color);
        }
    }

    out
}

fn push_line(out: &mut String, line: &str, paint: impl Fn(&str) -> String, color: bool) {
    if color {
        out.push_str(&paint(line));
    } else {
        out.push_str(line);
    }
    out.push('\n');
}

fn paint_header(s: &str) -> String {
    format!("{}", s.with(theme::colors::INFO))
}

fn paint_change(s: &str, tag: ChangeTag) -> String {
    match tag {
        ChangeTag::Delete => format!("{}", s.with(theme::colors::ERROR)),
        ChangeTag::Insert => format!("{}", s.with(theme::colors::SUCCESS)),
        ChangeTag::Equal => format!("{}", s.with(theme::colors::DIM)),
    }
}
