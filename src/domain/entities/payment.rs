//! Payment entity.
//!
//! Payments are immutable once recorded. Direction distinguishes money
//! received from the client from money paid out to suppliers and workers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::services::validation::{payment_schema, validate, FieldErrors, FormInput};
use crate::domain::value_objects::{CollectionKey, EntityId, Money};

use super::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentDirection {
    #[default]
    Received,
    Given,
}

impl PaymentDirection {
    pub const LITERALS: &'static [&'static str] = &["received", "given"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentDirection::Received => "received",
            PaymentDirection::Given => "given",
        }
    }

    pub fn from_literal(s: &str) -> Option<Self> {
        match s {
            "received" => Some(PaymentDirection::Received),
            "given" => Some(PaymentDirection::Given),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    #[default]
    Completed,
}

impl PaymentStatus {
    pub const LITERALS: &'static [&'static str] = &["pending", "completed"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
        }
    }

    pub fn from_literal(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PaymentStatus::Pending),
            "completed" => Some(PaymentStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Money moving in or out of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: EntityId,
    pub project_id: EntityId,
    #[serde(rename = "type")]
    pub direction: PaymentDirection,
    /// Counterparty: the client the money came from, or the supplier/worker
    /// it went to.
    #[serde(rename = "to")]
    pub counterparty: String,
    pub amount: Money,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated input for recording a payment.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDraft {
    pub direction: PaymentDirection,
    pub counterparty: String,
    pub amount: Money,
    pub description: String,
    pub date: NaiveDate,
    pub status: PaymentStatus,
}

impl PaymentDraft {
    pub fn from_form(input: &FormInput) -> Result<Self, FieldErrors> {
        let values = validate(input, payment_schema())?;
        Ok(PaymentDraft {
            direction: values
                .choice("direction")
                .and_then(PaymentDirection::from_literal)
                .unwrap_or_default(),
            counterparty: values.text("counterparty").unwrap_or_default().to_string(),
            amount: values.amount("amount").unwrap_or_default(),
            description: values.text("description").unwrap_or_default().to_string(),
            date: values.date("date").unwrap_or_default(),
            status: values
                .choice("status")
                .and_then(PaymentStatus::from_literal)
                .unwrap_or_default(),
        })
    }
}

impl Payment {
    pub fn record(project_id: EntityId, draft: PaymentDraft) -> Self {
        Payment {
            id: EntityId::generate(),
            project_id,
            direction: draft.direction,
            counterparty: draft.counterparty,
            amount: draft.amount,
            description: draft.description,
            date: draft.date,
            status: draft.status,
            created_at: Utc::now(),
        }
    }
}

impl Record for Payment {
    const KEY: CollectionKey = CollectionKey::Payments;

    fn id(&self) -> &EntityId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn draft(direction: PaymentDirection, amount: Money) -> PaymentDraft {
        PaymentDraft {
            direction,
            counterparty: "Asha Verma".to_string(),
            amount,
            description: "Advance".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
            status: PaymentStatus::Completed,
        }
    }

    #[test]
    fn test_stored_shape_uses_original_field_names() {
        let payment = Payment::record(
            EntityId::from("p-1"),
            draft(PaymentDirection::Received, Money::from_rupees(50_000)),
        );
        let value = serde_json::to_value(&payment).unwrap();
        let object = value.as_object().unwrap();
        // "type" and "to", not "direction" and "counterparty"
        assert_eq!(object["type"], serde_json::json!("received"));
        assert_eq!(object["to"], serde_json::json!("Asha Verma"));
        assert_eq!(object["status"], serde_json::json!("completed"));
        assert_eq!(object["amount"], serde_json::json!(50000));
        assert!(!object.contains_key("direction"));
        assert!(!object.contains_key("counterparty"));
    }

    #[test]
    fn test_reads_documents_without_status_field() {
        let raw = serde_json::json!({
            "id": "1754300000000",
            "projectId": "p-1",
            "type": "given",
            "to": "Steel supplier",
            "amount": 10000,
            "description": "Rebar delivery",
            "date": "2026-02-11",
            "createdAt": "2026-02-11T09:30:00Z"
        });
        let payment: Payment = serde_json::from_value(raw).unwrap();
        assert_eq!(payment.direction, PaymentDirection::Given);
        assert_eq!(payment.status, PaymentStatus::Completed);
    }
}
