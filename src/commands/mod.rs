//! Command handlers. Each handler validates input, drives a use case, and
//! renders the result as text or `--json`.

pub mod expense;
pub mod form;
pub mod payment;
pub mod project;
pub mod show;

use siteledger::domain::services::validation::FieldErrors;

use crate::ui::text::ColoredText;
use crate::ui::UiContext;

/// Surface per-field validation errors inline, then fail the command.
pub(crate) fn field_errors(errors: FieldErrors, ui: &UiContext) -> anyhow::Error {
    if ui.json {
        println!(
            "{}",
            serde_json::json!({ "type": "validation-errors", "errors": errors })
        );
    } else {
        eprint!("{}", form::render_field_errors(&errors, ui.color));
    }
    anyhow::anyhow!("validation failed")
}

/// Unknown project ids are an empty state with a message, never a crash.
pub(crate) fn project_not_found(id: &str, ui: &UiContext) -> anyhow::Error {
    if ui.json {
        println!(
            "{}",
            serde_json::json!({ "type": "error", "error": format!("project not found: {id}") })
        );
    } else {
        eprintln!(
            "{}",
            ColoredText::warning(format!("Project not found: {id}")).render(ui.color)
        );
    }
    anyhow::anyhow!("project not found: {id}")
}
