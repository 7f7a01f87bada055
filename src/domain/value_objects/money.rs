//! Fixed-point money amounts.
//!
//! Amounts are stored as signed paise (hundredths of a rupee) so that sums
//! and balances are exact. The JSON representation stays a plain number in
//! major units, matching the stored ledger documents.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const PAISE_PER_RUPEE: i64 = 100;

/// A monetary amount in fixed-point minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

/// Errors from [`Money::parse`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoneyError {
    #[error("empty amount")]
    Empty,
    #[error("not a number")]
    Invalid,
    #[error("more than two decimal places")]
    TooPrecise,
    #[error("amount out of range")]
    OutOfRange,
}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * PAISE_PER_RUPEE)
    }

    pub const fn paise(&self) -> i64 {
        self.0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse a decimal string such as `"100000"` or `"1234.50"`.
    ///
    /// A leading `-` is accepted; whether negative amounts are allowed is the
    /// caller's rule, not a syntax question.
    pub fn parse(input: &str) -> Result<Self, ParseMoneyError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((w, f)) => (w, f),
            None => (unsigned, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError::Invalid);
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError::Invalid);
        }
        if fraction.len() > 2 {
            return Err(ParseMoneyError::TooPrecise);
        }

        let rupees: i64 = whole.parse().map_err(|_| ParseMoneyError::OutOfRange)?;
        let paise_fraction: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| ParseMoneyError::Invalid)? * 10,
            _ => fraction.parse().map_err(|_| ParseMoneyError::Invalid)?,
        };

        let magnitude = rupees
            .checked_mul(PAISE_PER_RUPEE)
            .and_then(|p| p.checked_add(paise_fraction))
            .ok_or(ParseMoneyError::OutOfRange)?;

        Ok(Money(if negative { -magnitude } else { magnitude }))
    }

    /// Plain decimal string without grouping, suitable to feed back into a
    /// form field: `"100000"` or `"1234.50"`.
    pub fn plain(&self) -> String {
        let rupees = self.0 / PAISE_PER_RUPEE;
        let fraction = (self.0 % PAISE_PER_RUPEE).abs();
        if fraction == 0 {
            format!("{rupees}")
        } else if self.0 < 0 && rupees == 0 {
            format!("-0.{fraction:02}")
        } else {
            format!("{rupees}.{fraction:02}")
        }
    }

    /// Render with a currency symbol, sign first: `-₹1,00,000`.
    pub fn formatted(&self, symbol: &str) -> String {
        if self.0 < 0 {
            format!("-{symbol}{}", Money(-self.0))
        } else {
            format!("{symbol}{self}")
        }
    }
}

/// Indian digit grouping: last three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, t) = rest.split_at(rest.len() - 2);
        groups.push(t);
        rest = h;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rupees = (self.0 / PAISE_PER_RUPEE).abs();
        let fraction = (self.0 % PAISE_PER_RUPEE).abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        let grouped = group_indian(&rupees.to_string());
        if fraction == 0 {
            write!(f, "{sign}{grouped}")
        } else {
            write!(f, "{sign}{grouped}.{fraction:02}")
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0 % PAISE_PER_RUPEE == 0 {
            serializer.serialize_i64(self.0 / PAISE_PER_RUPEE)
        } else {
            serializer.serialize_f64(self.0 as f64 / PAISE_PER_RUPEE as f64)
        }
    }
}

struct MoneyVisitor;

impl Visitor<'_> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a monetary amount as a JSON number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(PAISE_PER_RUPEE)
            .map(Money)
            .ok_or_else(|| E::custom("amount out of range"))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(PAISE_PER_RUPEE))
            .map(Money)
            .ok_or_else(|| E::custom("amount out of range"))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        let paise = (v * PAISE_PER_RUPEE as f64).round();
        if paise.is_finite() && paise.abs() < i64::MAX as f64 {
            Ok(Money(paise as i64))
        } else {
            Err(E::custom("amount out of range"))
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MoneyVisitor)
    }
}
