//! Project detail command handler.

use anyhow::Result;

use siteledger::application::detail::project_detail;
use siteledger::domain::ports::StorageBackend;
use siteledger::domain::value_objects::EntityId;
use siteledger::error::LedgerError;
use siteledger::store::Ledger;

use crate::commands::project_not_found;
use crate::ui::views::detail::DetailView;
use crate::ui::UiContext;

pub fn cmd_show<B: StorageBackend>(ledger: &mut Ledger<B>, id: &str, ui: &UiContext) -> Result<()> {
    let detail = match project_detail(ledger, &EntityId::from(id)) {
        Ok(detail) => detail,
        Err(LedgerError::ProjectNotFound { .. }) => return Err(project_not_found(id, ui)),
        Err(err) => return Err(err.into()),
    };

    if ui.json {
        println!(
            "{}",
            serde_json::json!({ "type": "project-detail", "detail": detail })
        );
        return Ok(());
    }

    print!("{}", DetailView::new(&detail, &ui.currency).render(ui.color));
    Ok(())
}
