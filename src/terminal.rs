//! Terminal capability detection for console output.

use is_terminal::IsTerminal;

use crate::cli::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub stdout_tty: bool,
    pub stdin_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
}

pub fn detect_capabilities(color: Option<ColorWhen>) -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
        std::io::stdin().is_terminal(),
        color,
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    stdout_tty: bool,
    stdin_tty: bool,
    color: Option<ColorWhen>,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");
    let no_color = get_env("NO_COLOR").is_some();

    let supports_color = match color {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Auto) | None => stdout_tty && !term_is_dumb && !no_color,
    };

    TerminalCapabilities {
        stdout_tty,
        stdin_tty,
        supports_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
    }
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
        }
    }

    // Default to true on modern systems unless explicitly "dumb".
    true
}
