//! Form assembly: combine flag values with interactive prompts, then hand
//! the raw strings to the validation layer.
//!
//! Flags always win. When a field has no flag and we are attached to a
//! terminal, the user is prompted (fuzzy-select for enum fields); otherwise
//! the field stays absent and validation reports it.

use anyhow::Result;
use dialoguer::{FuzzySelect, Input};

use siteledger::domain::services::validation::{FieldErrors, FieldKind, FormInput, FormSchema};

use crate::ui::text::ColoredText;

/// One field's flag value, keyed by schema field name.
pub type Provided<'a> = &'a [(&'static str, Option<String>)];

pub fn collect(schema: &FormSchema, provided: Provided, interactive: bool) -> Result<FormInput> {
    let mut input = FormInput::new();

    for spec in schema.fields {
        let flag = provided
            .iter()
            .find(|(name, _)| *name == spec.name)
            .and_then(|(_, value)| value.clone());

        match flag {
            Some(value) => input.set(spec.name, value),
            None if interactive => {
                let value = prompt(spec.label, spec.kind)?;
                input.set(spec.name, value);
            }
            None => {}
        }
    }

    Ok(input)
}

fn prompt(label: &str, kind: FieldKind) -> Result<String> {
    match kind {
        FieldKind::Enum(options) => {
            let index = FuzzySelect::new()
                .with_prompt(label)
                .items(options)
                .default(0)
                .interact()?;
            Ok(options[index].to_string())
        }
        _ => {
            let value: String = Input::new()
                .with_prompt(label)
                .allow_empty(true)
                .interact_text()?;
            Ok(value)
        }
    }
}

/// Render validation errors the way the forms show them: one inline message
/// per field.
pub fn render_field_errors(errors: &FieldErrors, color: bool) -> String {
    let mut out = String::new();
    for message in errors.values() {
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::error("✗").render(color),
            message
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use siteledger::domain::services::validation::expense_schema;

    use super::*;

    #[test]
    fn test_collect_uses_flags_without_prompting() {
        let provided = [
            ("category", Some("materials".to_string())),
            ("description", Some("cement".to_string())),
            ("amount", Some("500".to_string())),
            ("date", Some("2026-02-01".to_string())),
        ];
        let input = collect(expense_schema(), &provided, false).unwrap();
        assert_eq!(input.get("category"), Some("materials"));
        assert_eq!(input.get("amount"), Some("500"));
    }

    #[test]
    fn test_collect_leaves_missing_fields_absent_when_non_interactive() {
        let provided = [("description", Some("cement".to_string()))];
        let input = collect(expense_schema(), &provided, false).unwrap();
        assert_eq!(input.get("description"), Some("cement"));
        assert_eq!(input.get("amount"), None);
    }

    #[test]
    fn test_render_field_errors_lists_messages() {
        let mut errors = FieldErrors::new();
        errors.insert("amount".to_string(), "Amount must be a number".to_string());
        errors.insert("date".to_string(), "Date is required".to_string());
        let rendered = render_field_errors(&errors, false);
        assert_eq!(rendered, "  ✗ Amount must be a number\n  ✗ Date is required\n");
    }
}
