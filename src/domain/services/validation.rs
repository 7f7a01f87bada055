//! Schema-based form validation.
//!
//! A form schema is a data table of tagged field kinds; one generic
//! [`validate`] routine consumes it. Adding a field to an entity form is a
//! schema change, not new validation code. Validation never touches the
//! store and never panics; failures come back as a per-field error map that
//! the frontend renders inline.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::value_objects::{Money, ParseMoneyError};

/// What a field holds, and for enums, which literals it admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Enum(&'static [&'static str]),
    Date,
}

/// One recognized form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Label used in error messages and prompts, e.g. `Project name`.
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind,
        required: true,
    }
}

/// Recognized fields of one entity form.
#[derive(Debug, Clone, Copy)]
pub struct FormSchema {
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    fn spec(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

pub fn project_schema() -> &'static FormSchema {
    static SCHEMA: FormSchema = FormSchema {
        fields: &[
            field("name", "Project name", FieldKind::Text),
            field("description", "Description", FieldKind::Text),
            field("client_name", "Client name", FieldKind::Text),
            field("start_date", "Start date", FieldKind::Date),
            field("expected_end_date", "Expected end date", FieldKind::Date),
            field(
                "status",
                "Status",
                FieldKind::Enum(crate::domain::entities::ProjectStatus::LITERALS),
            ),
            field("total_budget", "Budget", FieldKind::Number),
        ],
    };
    &SCHEMA
}

pub fn expense_schema() -> &'static FormSchema {
    static SCHEMA: FormSchema = FormSchema {
        fields: &[
            field(
                "category",
                "Category",
                FieldKind::Enum(crate::domain::entities::ExpenseCategory::LITERALS),
            ),
            field("description", "Description", FieldKind::Text),
            field("amount", "Amount", FieldKind::Number),
            field("date", "Date", FieldKind::Date),
        ],
    };
    &SCHEMA
}

pub fn payment_schema() -> &'static FormSchema {
    static SCHEMA: FormSchema = FormSchema {
        fields: &[
            field(
                "direction",
                "Type",
                FieldKind::Enum(crate::domain::entities::PaymentDirection::LITERALS),
            ),
            field("counterparty", "Recipient/Payer name", FieldKind::Text),
            field("amount", "Amount", FieldKind::Number),
            field("description", "Description", FieldKind::Text),
            field("date", "Date", FieldKind::Date),
            field(
                "status",
                "Status",
                FieldKind::Enum(crate::domain::entities::PaymentStatus::LITERALS),
            ),
        ],
    };
    &SCHEMA
}

/// Raw user input: field name to raw string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput(BTreeMap<String, String>);

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// Field name to human-readable message, ordered by field name.
pub type FieldErrors = BTreeMap<String, String>;

/// A typed, entity-ready field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Amount(Money),
    Choice(&'static str),
    Date(NaiveDate),
}

/// Validated output of [`validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn amount(&self, name: &str) -> Option<Money> {
        match self.0.get(name) {
            Some(FieldValue::Amount(m)) => Some(*m),
            _ => None,
        }
    }

    pub fn choice(&self, name: &str) -> Option<&'static str> {
        match self.0.get(name) {
            Some(FieldValue::Choice(c)) => Some(c),
            _ => None,
        }
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        match self.0.get(name) {
            Some(FieldValue::Date(d)) => Some(*d),
            _ => None,
        }
    }
}

/// Validate raw input against a schema.
///
/// Returns the typed values, or the full per-field error map (every failing
/// field reported, not just the first). Input fields the schema does not
/// declare are rejected; a well-behaved frontend never sends them, but the
/// check costs nothing and catches wiring mistakes.
pub fn validate(input: &FormInput, schema: &FormSchema) -> Result<FormValues, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut values = BTreeMap::new();

    for spec in schema.fields {
        let raw = input.get(spec.name).unwrap_or("").trim();

        if raw.is_empty() {
            if spec.required {
                errors.insert(
                    spec.name.to_string(),
                    format!("{} is required", spec.label),
                );
            } else {
                values.insert(spec.name.to_string(), FieldValue::Text(String::new()));
            }
            continue;
        }

        match spec.kind {
            FieldKind::Text => {
                values.insert(spec.name.to_string(), FieldValue::Text(raw.to_string()));
            }
            FieldKind::Number => match Money::parse(raw) {
                Ok(amount) if amount.is_negative() => {
                    errors.insert(
                        spec.name.to_string(),
                        format!("{} must not be negative", spec.label),
                    );
                }
                Ok(amount) => {
                    values.insert(spec.name.to_string(), FieldValue::Amount(amount));
                }
                Err(ParseMoneyError::TooPrecise) => {
                    errors.insert(
                        spec.name.to_string(),
                        format!("{} has more than two decimal places", spec.label),
                    );
                }
                Err(_) => {
                    errors.insert(
                        spec.name.to_string(),
                        format!("{} must be a number", spec.label),
                    );
                }
            },
            FieldKind::Enum(options) => match options.iter().find(|o| **o == raw) {
                Some(option) => {
                    values.insert(spec.name.to_string(), FieldValue::Choice(option));
                }
                None => {
                    errors.insert(
                        spec.name.to_string(),
                        format!("{} must be one of: {}", spec.label, options.join(", ")),
                    );
                }
            },
            FieldKind::Date => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => {
                    values.insert(spec.name.to_string(), FieldValue::Date(date));
                }
                Err(_) => {
                    errors.insert(
                        spec.name.to_string(),
                        format!("{} must be a valid date (YYYY-MM-DD)", spec.label),
                    );
                }
            },
        }
    }

    for (name, _) in input.0.iter() {
        if schema.spec(name).is_none() {
            errors.insert(name.clone(), "unrecognized field".to_string());
        }
    }

    if errors.is_empty() {
        Ok(FormValues(values))
    } else {
        Err(errors)
    }
}
