//! Expense command handlers.

use anyhow::Result;

use siteledger::application::expenses::{project_expenses, record_expense};
use siteledger::application::projects::find_project;
use siteledger::domain::entities::{Expense, ExpenseDraft};
use siteledger::domain::ports::StorageBackend;
use siteledger::domain::services::validation::expense_schema;
use siteledger::domain::value_objects::{EntityId, Money};
use siteledger::store::Ledger;

use crate::cli::ExpenseFields;
use crate::commands::{field_errors, form, project_not_found};
use crate::ui::text::ColoredText;
use crate::ui::views::entries::expense_line;
use crate::ui::{stdin_is_interactive, UiContext};

pub fn cmd_add<B: StorageBackend>(
    ledger: &mut Ledger<B>,
    project: &str,
    fields: ExpenseFields,
    ui: &UiContext,
) -> Result<()> {
    let project_id = EntityId::from(project);
    let Some(project) = find_project(ledger, &project_id) else {
        return Err(project_not_found(project, ui));
    };

    let interactive = stdin_is_interactive() && !ui.json;
    let provided = [
        ("category", fields.category),
        ("description", fields.description),
        ("amount", fields.amount),
        ("date", fields.date),
    ];
    let input = form::collect(expense_schema(), &provided, interactive)?;

    let draft = match ExpenseDraft::from_form(&input) {
        Ok(draft) => draft,
        Err(errors) => return Err(field_errors(errors, ui)),
    };

    let expense = record_expense(ledger, &project_id, draft)?;

    if ui.json {
        println!(
            "{}",
            serde_json::json!({ "type": "expense-recorded", "expense": expense })
        );
        return Ok(());
    }

    println!(
        "{} Recorded {} expense of {} against '{}'",
        ColoredText::success("✓").render(ui.color),
        expense.category,
        expense.amount.formatted(&ui.currency),
        project.name
    );
    Ok(())
}

pub fn cmd_list<B: StorageBackend>(
    ledger: &mut Ledger<B>,
    project: Option<String>,
    ui: &UiContext,
) -> Result<()> {
    let expenses: Vec<Expense> = match &project {
        Some(id) => {
            let project_id = EntityId::from(id.as_str());
            if find_project(ledger, &project_id).is_none() {
                return Err(project_not_found(id, ui));
            }
            project_expenses(ledger, &project_id)
        }
        None => ledger.collection(),
    };

    if ui.json {
        println!(
            "{}",
            serde_json::json!({
                "type": "expenses",
                "count": expenses.len(),
                "expenses": expenses,
            })
        );
        return Ok(());
    }

    if expenses.is_empty() {
        println!(
            "{}",
            ColoredText::dim("No expenses recorded yet").render(ui.color)
        );
        return Ok(());
    }

    for expense in &expenses {
        println!("{}", expense_line(expense, &ui.currency, ui.color));
    }
    let total: Money = expenses.iter().map(|e| e.amount).sum();
    println!(
        "\n  {}",
        ColoredText::dim(format!(
            "{} expenses, {} total",
            expenses.len(),
            total.formatted(&ui.currency)
        ))
        .render(ui.color)
    );
    Ok(())
}
