//! Project use cases: create, edit, list, look up.

use crate::domain::entities::{Project, ProjectDraft, ProjectStatus};
use crate::domain::ports::StorageBackend;
use crate::domain::value_objects::EntityId;
use crate::error::{LedgerError, LedgerResult};
use crate::store::Ledger;

/// Dashboard filter: substring search over name and client, plus a status
/// filter. An empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub search: Option<String>,
    pub status: Option<ProjectStatus>,
}

impl ProjectFilter {
    fn matches(&self, project: &Project) -> bool {
        let search_ok = match &self.search {
            Some(query) => {
                let query = query.to_lowercase();
                project.name.to_lowercase().contains(&query)
                    || project.client_name.to_lowercase().contains(&query)
            }
            None => true,
        };
        let status_ok = self.status.is_none_or(|status| project.status == status);
        search_ok && status_ok
    }
}

/// Create a project and prepend it, so listings read newest first.
pub fn create_project<B: StorageBackend>(ledger: &mut Ledger<B>, draft: ProjectDraft) -> Project {
    let project = Project::create(draft);
    let mut projects = ledger.collection::<Project>();
    projects.insert(0, project.clone());
    ledger.save_collection(&projects);
    project
}

/// Edit a project in place. Id and creation timestamp survive the edit.
pub fn update_project<B: StorageBackend>(
    ledger: &mut Ledger<B>,
    id: &EntityId,
    draft: ProjectDraft,
) -> LedgerResult<Project> {
    let mut projects = ledger.collection::<Project>();
    let project = projects
        .iter_mut()
        .find(|p| p.id == *id)
        .ok_or_else(|| LedgerError::ProjectNotFound { id: id.to_string() })?;
    project.apply(draft);
    let updated = project.clone();
    ledger.save_collection(&projects);
    Ok(updated)
}

pub fn find_project<B: StorageBackend>(ledger: &mut Ledger<B>, id: &EntityId) -> Option<Project> {
    ledger.find(id)
}

pub fn list_projects<B: StorageBackend>(
    ledger: &mut Ledger<B>,
    filter: &ProjectFilter,
) -> Vec<Project> {
    ledger
        .collection::<Project>()
        .into_iter()
        .filter(|p| filter.matches(p))
        .collect()
}
