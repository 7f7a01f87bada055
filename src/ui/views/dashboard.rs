//! Project listing view.

use siteledger::domain::entities::Project;

use crate::ui::text::ColoredText;
use crate::ui::views::{pad, pad_left};

pub struct DashboardView<'a> {
    projects: &'a [Project],
    /// Unfiltered count, to distinguish "nothing yet" from "no match".
    total: usize,
    currency: &'a str,
}

impl<'a> DashboardView<'a> {
    pub fn new(projects: &'a [Project], total: usize, currency: &'a str) -> Self {
        Self {
            projects,
            total,
            currency,
        }
    }

    pub fn render(&self, color: bool) -> String {
        let mut out = String::new();

        out.push_str(&ColoredText::plain("Construction Projects").bold().render(color));
        out.push_str("\n\n");

        if self.total == 0 {
            out.push_str("No projects yet.\n\n");
            out.push_str(
                &ColoredText::dim("Run `siteledger project add` to create your first project.")
                    .render(color),
            );
            out.push('\n');
            return out;
        }

        if self.projects.is_empty() {
            out.push_str("No projects found.\n\n");
            out.push_str(
                &ColoredText::dim("Try adjusting your search or filter criteria.").render(color),
            );
            out.push('\n');
            return out;
        }

        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(format!(
                "{} {} {} {}",
                pad("Project", 26),
                pad("Client", 20),
                pad("Status", 12),
                pad_left("Budget", 12)
            ))
            .render(color)
        ));

        for project in self.projects {
            out.push_str(&format!(
                "  {} {} {} {}\n",
                pad(&project.name, 26),
                pad(&project.client_name, 20),
                pad(project.status.label(), 12),
                pad_left(&project.total_budget.formatted(self.currency), 12)
            ));
        }

        out.push_str(&format!(
            "\n  {}\n",
            ColoredText::dim(format!(
                "{} of {} projects",
                self.projects.len(),
                self.total
            ))
            .render(color)
        ));

        out
    }
}
