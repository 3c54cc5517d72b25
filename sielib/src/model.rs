//! Domain models shared by the formats: accounts, charts and verifications.

use crate::error::{Result, SieError};
use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Chart type used when nothing else is known.
pub const DEFAULT_CHART_TYPE: &str = "EUBAS97";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Account {
    number: String,
    kind: String,
    name: String,
}

impl Account {
    /// `kind` is the account type code, e.g. `T` (asset), `S` (debt),
    /// `I` (income) or `K` (cost).
    pub fn new(number: impl Into<String>, kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            kind: kind.into(),
            name: name.into(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub account: Account,
    pub amount: Decimal,
}

impl Transaction {
    pub fn new(account: Account, amount: Decimal) -> Self {
        Self { account, amount }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    pub text: String,
    pub date: NaiveDate,
    pub transactions: Vec<Transaction>,
}

impl Verification {
    pub fn new(text: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            text: text.into(),
            date,
            transactions: Vec::new(),
        }
    }

    pub fn with_transaction(mut self, account: Account, amount: Decimal) -> Self {
        self.transactions.push(Transaction::new(account, amount));
        self
    }

    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Sum of all transaction amounts.
    pub fn total(&self) -> Decimal {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// A verification with no transactions is balanced.
    pub fn is_balanced(&self) -> bool {
        self.total().is_zero()
    }

    /// Accounts in transaction order, repeats included.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.transactions.iter().map(|t| &t.account)
    }
}

/// Anything that can resolve an account number.
pub trait AccountLookup {
    fn get_account(&self, number: &str) -> Result<&Account>;
}

impl AccountLookup for IndexMap<String, Account> {
    fn get_account(&self, number: &str) -> Result<&Account> {
        self.get(number).ok_or_else(|| SieError::UnknownAccount {
            number: number.to_string(),
        })
    }
}

impl AccountLookup for HashMap<String, Account> {
    fn get_account(&self, number: &str) -> Result<&Account> {
        self.get(number).ok_or_else(|| SieError::UnknownAccount {
            number: number.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOfAccounts {
    chart_type: String,
    accounts: IndexMap<String, Account>,
}

impl Default for ChartOfAccounts {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartOfAccounts {
    pub fn new() -> Self {
        Self {
            chart_type: DEFAULT_CHART_TYPE.to_string(),
            accounts: IndexMap::new(),
        }
    }

    pub fn chart_type(&self) -> &str {
        &self.chart_type
    }

    pub fn set_chart_type(&mut self, chart_type: impl Into<String>) {
        self.chart_type = chart_type.into();
    }

    /// Adding a number that already exists replaces the account in place.
    pub fn add_account(&mut self, account: Account) {
        self.accounts.insert(account.number.clone(), account);
    }

    pub fn contains(&self, number: &str) -> bool {
        self.accounts.contains_key(number)
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountLookup for ChartOfAccounts {
    fn get_account(&self, number: &str) -> Result<&Account> {
        self.accounts.get_account(number)
    }
}

impl FromIterator<Account> for ChartOfAccounts {
    fn from_iter<I: IntoIterator<Item = Account>>(iter: I) -> Self {
        let mut chart = ChartOfAccounts::new();
        for account in iter {
            chart.add_account(account);
        }
        chart
    }
}
