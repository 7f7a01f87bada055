//! Payment command handlers.

use anyhow::Result;

use siteledger::application::payments::{project_payments, record_payment};
use siteledger::application::projects::find_project;
use siteledger::domain::entities::{Payment, PaymentDraft};
use siteledger::domain::ports::StorageBackend;
use siteledger::domain::services::validation::payment_schema;
use siteledger::domain::value_objects::EntityId;
use siteledger::store::Ledger;

use crate::cli::PaymentFields;
use crate::commands::{field_errors, form, project_not_found};
use crate::ui::text::ColoredText;
use crate::ui::views::entries::payment_line;
use crate::ui::{stdin_is_interactive, UiContext};

pub fn cmd_add<B: StorageBackend>(
    ledger: &mut Ledger<B>,
    project: &str,
    fields: PaymentFields,
    ui: &UiContext,
) -> Result<()> {
    let project_id = EntityId::from(project);
    let Some(project) = find_project(ledger, &project_id) else {
        return Err(project_not_found(project, ui));
    };

    let interactive = stdin_is_interactive() && !ui.json;
    let provided = [
        ("direction", fields.direction),
        ("counterparty", fields.to),
        ("amount", fields.amount),
        ("description", fields.description),
        ("date", fields.date),
        // The status widget defaults to completed
        ("status", fields.status.or_else(|| Some("completed".to_string()))),
    ];
    let input = form::collect(payment_schema(), &provided, interactive)?;

    let draft = match PaymentDraft::from_form(&input) {
        Ok(draft) => draft,
        Err(errors) => return Err(field_errors(errors, ui)),
    };

    let payment = record_payment(ledger, &project_id, draft)?;

    if ui.json {
        println!(
            "{}",
            serde_json::json!({ "type": "payment-recorded", "payment": payment })
        );
        return Ok(());
    }

    println!(
        "{} Recorded {} payment of {} against '{}'",
        ColoredText::success("✓").render(ui.color),
        payment.direction,
        payment.amount.formatted(&ui.currency),
        project.name
    );
    Ok(())
}

pub fn cmd_list<B: StorageBackend>(
    ledger: &mut Ledger<B>,
    project: Option<String>,
    ui: &UiContext,
) -> Result<()> {
    let payments: Vec<Payment> = match &project {
        Some(id) => {
            let project_id = EntityId::from(id.as_str());
            if find_project(ledger, &project_id).is_none() {
                return Err(project_not_found(id, ui));
            }
            project_payments(ledger, &project_id)
        }
        None => ledger.collection(),
    };

    if ui.json {
        println!(
            "{}",
            serde_json::json!({
                "type": "payments",
                "count": payments.len(),
                "payments": payments,
            })
        );
        return Ok(());
    }

    if payments.is_empty() {
        println!(
            "{}",
            ColoredText::dim("No payments recorded yet").render(ui.color)
        );
        return Ok(());
    }

    for payment in &payments {
        println!("{}", payment_line(payment, &ui.currency, ui.color));
    }
    println!(
        "\n  {}",
        ColoredText::dim(format!("{} payments", payments.len())).render(ui.color)
    );
    Ok(())
}
