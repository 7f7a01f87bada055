//! Project detail view: overview, financial summary, recent entries.

use siteledger::application::detail::ProjectDetail;

use crate::ui::text::ColoredText;
use crate::ui::views::{entries, fmt_date, pad};

pub struct DetailView<'a> {
    detail: &'a ProjectDetail,
    currency: &'a str,
}

impl<'a> DetailView<'a> {
    pub fn new(detail: &'a ProjectDetail, currency: &'a str) -> Self {
        Self { detail, currency }
    }

    pub fn render(&self, color: bool) -> String {
        let project = &self.detail.project;
        let mut out = String::new();

        out.push_str(&ColoredText::plain(&project.name).bold().render(color));
        out.push('\n');
        out.push_str(&ColoredText::dim(&project.description).render(color));
        out.push_str("\n\n");

        out.push_str(&format!("  {} {}\n", pad("Client", 12), project.client_name));
        out.push_str(&format!(
            "  {} {} - {}\n",
            pad("Duration", 12),
            fmt_date(project.start_date),
            fmt_date(project.expected_end_date)
        ));
        out.push_str(&format!(
            "  {} {}\n",
            pad("Status", 12),
            ColoredText::info(project.status.label()).render(color)
        ));
        out.push_str(&format!(
            "  {} {}\n",
            pad("Budget", 12),
            project.total_budget.formatted(self.currency)
        ));
        out.push('\n');

        out.push_str(&ColoredText::plain("Financial Overview").bold().render(color));
        out.push_str("\n\n");
        out.push_str(&self.summary_lines(color));
        out.push('\n');

        out.push_str(&ColoredText::plain("Recent Expenses").bold().render(color));
        out.push_str("\n\n");
        if self.detail.recent_expenses.is_empty() {
            out.push_str(&format!(
                "  {}\n",
                ColoredText::dim("No expenses recorded yet").render(color)
            ));
        } else {
            for expense in &self.detail.recent_expenses {
                out.push_str(&entries::expense_line(expense, self.currency, color));
                out.push('\n');
            }
            out.push_str(&more_line(
                self.detail.expense_count,
                self.detail.recent_expenses.len(),
                color,
            ));
        }
        out.push('\n');

        out.push_str(&ColoredText::plain("Recent Payments").bold().render(color));
        out.push_str("\n\n");
        if self.detail.recent_payments.is_empty() {
            out.push_str(&format!(
                "  {}\n",
                ColoredText::dim("No payments recorded yet").render(color)
            ));
        } else {
            for payment in &self.detail.recent_payments {
                out.push_str(&entries::payment_line(payment, self.currency, color));
                out.push('\n');
            }
            out.push_str(&more_line(
                self.detail.payment_count,
                self.detail.recent_payments.len(),
                color,
            ));
        }

        out
    }

    fn summary_lines(&self, color: bool) -> String {
        let summary = &self.detail.summary;
        let net = summary.net_balance;
        let net_text = if net.is_negative() {
            ColoredText::error(net.formatted(self.currency))
        } else {
            ColoredText::success(net.formatted(self.currency))
        };
        let remaining = summary.budget_remaining(self.detail.project.total_budget);
        let remaining_text = if remaining.is_negative() {
            ColoredText::error(remaining.formatted(self.currency))
        } else {
            ColoredText::plain(remaining.formatted(self.currency))
        };

        format!(
            "  {} {}\n  {} {}\n  {} {}\n  {} {}\n  {} {}\n",
            pad("Total Expenses", 16),
            ColoredText::error(summary.total_expenses.formatted(self.currency)).render(color),
            pad("Received", 16),
            ColoredText::success(summary.total_received.formatted(self.currency)).render(color),
            pad("Paid Out", 16),
            ColoredText::warning(summary.total_paid.formatted(self.currency)).render(color),
            pad("Net Balance", 16),
            net_text.render(color),
            pad("Budget Left", 16),
            remaining_text.render(color)
        )
    }
}

fn more_line(total: usize, shown: usize, color: bool) -> String {
    if total > shown {
        format!(
            "  {}\n",
            ColoredText::dim(format!("And {} more...", total - shown)).render(color)
        )
    } else {
        String::new()
    }
}
