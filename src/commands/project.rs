//! Project command handlers.

use anyhow::{bail, Result};
use dialoguer::Confirm;

use siteledger::application::projects::{
    create_project, find_project, list_projects, update_project, ProjectFilter,
};
use siteledger::domain::entities::{Project, ProjectDraft, ProjectStatus};
use siteledger::domain::ports::StorageBackend;
use siteledger::domain::services::validation::project_schema;
use siteledger::domain::value_objects::EntityId;
use siteledger::store::Ledger;

use crate::cli::ProjectFields;
use crate::commands::{field_errors, form, project_not_found};
use crate::ui::text::ColoredText;
use crate::ui::views::dashboard::DashboardView;
use crate::ui::{stdin_is_interactive, UiContext};

pub fn cmd_list<B: StorageBackend>(
    ledger: &mut Ledger<B>,
    search: Option<String>,
    status: Option<String>,
    ui: &UiContext,
) -> Result<()> {
    let status = match status {
        Some(raw) => match ProjectStatus::from_literal(&raw) {
            Some(status) => Some(status),
            None => bail!(
                "unknown status '{raw}' (expected one of: {})",
                ProjectStatus::LITERALS.join(", ")
            ),
        },
        None => None,
    };

    let total = ledger.collection::<Project>().len();
    let filter = ProjectFilter { search, status };
    let projects = list_projects(ledger, &filter);

    if ui.json {
        println!(
            "{}",
            serde_json::json!({
                "type": "projects",
                "count": projects.len(),
                "total": total,
                "projects": projects,
            })
        );
        return Ok(());
    }

    print!("{}", DashboardView::new(&projects, total, &ui.currency).render(ui.color));
    Ok(())
}

pub fn cmd_add<B: StorageBackend>(
    ledger: &mut Ledger<B>,
    fields: ProjectFields,
    ui: &UiContext,
) -> Result<()> {
    let interactive = stdin_is_interactive() && !ui.json;
    let provided = [
        ("name", fields.name),
        ("description", fields.description),
        ("client_name", fields.client),
        ("start_date", fields.start),
        ("expected_end_date", fields.end),
        // The status widget defaults to planning
        ("status", fields.status.or_else(|| Some("planning".to_string()))),
        ("total_budget", fields.budget),
    ];
    let input = form::collect(project_schema(), &provided, interactive)?;

    let draft = match ProjectDraft::from_form(&input) {
        Ok(draft) => draft,
        Err(errors) => return Err(field_errors(errors, ui)),
    };

    let project = create_project(ledger, draft);

    if ui.json {
        println!(
            "{}",
            serde_json::json!({ "type": "project-created", "project": project })
        );
        return Ok(());
    }

    println!(
        "{} Project '{}' created",
        ColoredText::success("✓").render(ui.color),
        project.name
    );
    println!(
        "  {}",
        ColoredText::dim(format!("id: {}", project.id)).render(ui.color)
    );
    Ok(())
}

pub fn cmd_edit<B: StorageBackend>(
    ledger: &mut Ledger<B>,
    id: &str,
    fields: ProjectFields,
    ui: &UiContext,
) -> Result<()> {
    let project_id = EntityId::from(id);
    let Some(current) = find_project(ledger, &project_id) else {
        return Err(project_not_found(id, ui));
    };

    // Flags you omit keep their current value, like a pre-filled edit form.
    let provided = [
        ("name", fields.name.or(Some(current.name.clone()))),
        (
            "description",
            fields.description.or(Some(current.description.clone())),
        ),
        (
            "client_name",
            fields.client.or(Some(current.client_name.clone())),
        ),
        (
            "start_date",
            fields.start.or(Some(current.start_date.to_string())),
        ),
        (
            "expected_end_date",
            fields.end.or(Some(current.expected_end_date.to_string())),
        ),
        (
            "status",
            fields.status.or(Some(current.status.as_str().to_string())),
        ),
        (
            "total_budget",
            fields.budget.or(Some(current.total_budget.plain())),
        ),
    ];
    let input = form::collect(project_schema(), &provided, false)?;

    let draft = match ProjectDraft::from_form(&input) {
        Ok(draft) => draft,
        Err(errors) => return Err(field_errors(errors, ui)),
    };

    let project = update_project(ledger, &project_id, draft)?;

    if ui.json {
        println!(
            "{}",
            serde_json::json!({ "type": "project-updated", "project": project })
        );
        return Ok(());
    }

    println!(
        "{} Project '{}' updated",
        ColoredText::success("✓").render(ui.color),
        project.name
    );
    Ok(())
}

pub fn cmd_remove<B: StorageBackend>(
    ledger: &mut Ledger<B>,
    id: &str,
    yes: bool,
    ui: &UiContext,
) -> Result<()> {
    let project_id = EntityId::from(id);
    let Some(project) = find_project(ledger, &project_id) else {
        return Err(project_not_found(id, ui));
    };

    if !yes {
        if stdin_is_interactive() && !ui.json {
            let confirmed = Confirm::new()
                .with_prompt(format!(
                    "Delete project '{}'? This also deletes its expenses and payments.",
                    project.name
                ))
                .default(false)
                .interact()?;
            if !confirmed {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            bail!("refusing to delete '{}' without --yes", project.name);
        }
    }

    let deleted = ledger.delete_project(&project_id)?;

    if ui.json {
        println!(
            "{}",
            serde_json::json!({
                "type": "project-removed",
                "id": deleted.project.id,
                "expensesRemoved": deleted.expenses_removed,
                "paymentsRemoved": deleted.payments_removed,
            })
        );
        return Ok(());
    }

    println!(
        "{} Deleted project '{}'",
        ColoredText::success("✓").render(ui.color),
        deleted.project.name
    );
    println!(
        "  {}",
        ColoredText::dim(format!(
            "removed {} expenses and {} payments",
            deleted.expenses_removed, deleted.payments_removed
        ))
        .render(ui.color)
    );
    Ok(())
}
