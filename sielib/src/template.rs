//! Verification templates with `{key}` placeholders.
//!
//! A template is filled in with [`Template::substitute`] and then turned into
//! a [`Verification`] with [`Template::build_verification`]:
//!
//! ```
//! use sielib::model::{Account, ChartOfAccounts};
//! use sielib::template::Template;
//! use std::collections::HashMap;
//!
//! let chart: ChartOfAccounts = [
//!     Account::new("1920", "T", "Bank"),
//!     Account::new("3000", "I", "Incomes"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut template = Template::new("SALE", "Cash sale", "Sale to {customer}").unwrap();
//! template.add_transaction("1920", "{amount}");
//! template.add_transaction("3000", "-{amount}");
//! template.substitute(&HashMap::from([
//!     ("customer".to_string(), "ACME".to_string()),
//!     ("amount".to_string(), "250".to_string()),
//! ]));
//!
//! let ver = template.build_verification(&chart).unwrap();
//! assert_eq!(ver.text, "Sale to ACME");
//! assert!(ver.is_balanced());
//! ```

use crate::{
    error::{Result, SieError},
    model::{AccountLookup, Transaction, Verification},
};
use chrono::{Local, NaiveDate};
use regex::{Captures, Regex};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

pub const MAX_ID_LEN: usize = 6;
pub const MAX_NAME_LEN: usize = 20;
pub const MAX_TEXT_LEN: usize = 60;

/// `{key}` with no braces inside, so a stray `{` before a real
/// placeholder is left as text.
fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{(?P<key>[^{}]*)\}").expect("hardcoded regex should be valid")
    })
}

fn checked(field: &'static str, value: &str, max: usize) -> Result<String> {
    let value = value.trim();
    if value.chars().count() > max {
        return Err(SieError::FieldLength {
            field,
            max,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    id: String,
    name: String,
    text: String,
    /// (account number pattern, amount pattern)
    transactions: Vec<(String, String)>,
}

impl Template {
    pub fn new(id: &str, name: &str, text: &str) -> Result<Self> {
        let mut t = Template::default();
        t.set_id(id)?;
        t.set_name(name)?;
        t.set_text(text)?;
        Ok(t)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: &str) -> Result<()> {
        self.id = checked("id", id, MAX_ID_LEN)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = checked("name", name, MAX_NAME_LEN)?;
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) -> Result<()> {
        self.text = checked("text", text, MAX_TEXT_LEN)?;
        Ok(())
    }

    pub fn add_transaction(&mut self, number: &str, amount: &str) {
        self.transactions
            .push((number.trim().to_string(), amount.trim().to_string()));
    }

    pub fn transactions(&self) -> &[(String, String)] {
        &self.transactions
    }

    /// First placeholder key still left, without braces. The text is
    /// searched first, then each transaction, account before amount.
    pub fn unresolved_key(&self) -> Option<&str> {
        std::iter::once(&self.text)
            .chain(self.transactions.iter().flat_map(|(n, a)| [n, a]))
            .find_map(|s| placeholder().captures(s)?.name("key"))
            .map(|key| key.as_str())
    }

    pub fn is_ready(&self) -> bool {
        self.unresolved_key().is_none()
    }

    /// Replaces every `{key}` found in `values`, in one pass. Keys without
    /// a value stay in place.
    pub fn substitute(&mut self, values: &HashMap<String, String>) {
        let replace = |s: &str| -> String {
            placeholder()
                .replace_all(s, |caps: &Captures| match values.get(&caps["key"]) {
                    Some(value) => value.clone(),
                    None => caps[0].to_string(),
                })
                .trim()
                .to_string()
        };

        self.text = replace(&self.text);
        for (number, amount) in &mut self.transactions {
            *number = replace(number.as_str());
            *amount = replace(amount.as_str());
        }
    }

    /// Builds a verification dated today.
    pub fn build_verification<C>(self, chart: &C) -> Result<Verification>
    where
        C: AccountLookup + ?Sized,
    {
        self.build_verification_on(chart, Local::now().date_naive())
    }

    /// Transactions whose amount is zero are left out.
    pub fn build_verification_on<C>(self, chart: &C, date: NaiveDate) -> Result<Verification>
    where
        C: AccountLookup + ?Sized,
    {
        if let Some(key) = self.unresolved_key() {
            return Err(SieError::UnresolvedPlaceholder {
                key: key.to_string(),
            });
        }

        let mut ver = Verification::new(self.text, date);
        for (number, amount) in &self.transactions {
            let amount =
                Decimal::from_str(amount).map_err(|_| SieError::InvalidAmount(amount.clone()))?;
            if amount.is_zero() {
                continue;
            }
            let account = chart.get_account(number)?;
            ver.add_transaction(Transaction::new(account.clone(), amount));
        }

        Ok(ver)
    }
}
