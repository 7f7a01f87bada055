//! Single-line renderings of expenses and payments, shared by the detail
//! view and the list commands.

use siteledger::domain::entities::{Expense, Payment, PaymentDirection};

use crate::ui::text::ColoredText;
use crate::ui::views::{fmt_date, pad};

pub fn expense_line(expense: &Expense, currency: &str, color: bool) -> String {
    let meta = format!(
        "{} • {}",
        expense.category,
        fmt_date(expense.date)
    );
    format!(
        "  {} {}  {}",
        pad(&expense.description, 28),
        ColoredText::dim(pad(&meta, 26)).render(color),
        ColoredText::error(expense.amount.formatted(currency)).render(color)
    )
}

pub fn payment_line(payment: &Payment, currency: &str, color: bool) -> String {
    let (preposition, sign) = match payment.direction {
        PaymentDirection::Received => ("From", "+"),
        PaymentDirection::Given => ("To", "-"),
    };
    let meta = format!(
        "{preposition} {} • {}",
        payment.counterparty,
        fmt_date(payment.date)
    );
    let amount = format!("{sign}{}", payment.amount.formatted(currency));
    let amount = match payment.direction {
        PaymentDirection::Received => ColoredText::success(amount),
        PaymentDirection::Given => ColoredText::warning(amount),
    };
    format!(
        "  {} {}  {} {}",
        pad(&payment.description, 28),
        ColoredText::dim(pad(&meta, 26)).render(color),
        amount.render(color),
        ColoredText::dim(format!("[{}]", payment.status)).render(color)
    )
}
