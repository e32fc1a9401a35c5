use is_terminal::IsTerminal;

use crate::presentation::cli::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub stdout_tty: bool,
    pub stderr_tty: bool,
    pub supports_color: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    stdout_tty: bool,
    stderr_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");
    let no_color =
        get_env("NO_COLOR").is_some() || get_env("HELM_IMAGE_UPDATER_NO_COLOR").is_some();

    TerminalCapabilities {
        stdout_tty,
        stderr_tty,
        supports_color: !term_is_dumb && !no_color,
    }
}

impl TerminalCapabilities {
    /// Whether to color output written to stdout
    pub fn color_stdout(&self, when: Option<ColorWhen>) -> bool {
        resolve_color(when, self.supports_color && self.stdout_tty)
    }

    /// Whether to color output written to stderr
    pub fn color_stderr(&self, when: Option<ColorWhen>) -> bool {
        resolve_color(when, self.supports_color && self.stderr_tty)
    }
}

fn resolve_color(when: Option<ColorWhen>, auto: bool) -> bool {
    match when {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Auto) | None => auto,
    }
}
