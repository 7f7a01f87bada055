//! Terminal output: colors, text primitives and views.

pub mod text;
pub mod theme;
pub mod views;

use is_terminal::IsTerminal;

/// Per-invocation output settings, resolved once in `main`.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub currency: String,
}

impl UiContext {
    pub fn new(json: bool, color_configured: bool, currency: String) -> Self {
        UiContext {
            json,
            color: !json && color_configured && stdout_supports_color(),
            currency,
        }
    }
}

fn stdout_supports_color() -> bool {
    std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none()
        && std::env::var_os("SITELEDGER_NO_COLOR").is_none()
}

/// Whether we can ask the user questions.
pub fn stdin_is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}
