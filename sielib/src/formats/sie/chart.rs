//! `#KPTYP` / `#KONTO` / `#KTYP` records.

use super::{quote::quote, EOL};
use crate::{
    error::{Result, SieError},
    model::{Account, ChartOfAccounts},
};
use log::{debug, trace};
use std::fmt::Write as FmtWrite;

pub(crate) fn write_chart_type(s: &mut String, chart_type: &str) {
    let _ = write!(s, "#KPTYP {}{EOL}", quote(chart_type));
}

/// One `#KONTO` line followed by its `#KTYP` line per account.
pub(crate) fn write_accounts<'a>(s: &mut String, accounts: impl IntoIterator<Item = &'a Account>) {
    for account in accounts {
        let number = quote(account.number());
        let _ = write!(s, "#KONTO {number} {}{EOL}", quote(account.name()));
        let _ = write!(s, "#KTYP {number} {}{EOL}", quote(account.kind()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoderState {
    Idle,
    /// A `#KONTO` was read and its `#KTYP` has not arrived yet.
    AwaitingType {
        number: String,
        name: String,
        line: usize,
    },
}

/// Builds a chart from tokenized lines. Feed every line in order, then call
/// [`ChartDecoder::finish`].
#[derive(Debug)]
pub struct ChartDecoder {
    chart: ChartOfAccounts,
    state: DecoderState,
}

impl Default for ChartDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartDecoder {
    pub fn new() -> Self {
        Self {
            chart: ChartOfAccounts::new(),
            state: DecoderState::Idle,
        }
    }

    pub fn state(&self) -> &DecoderState {
        &self.state
    }

    /// `line` is 1-based and only used in error messages.
    pub fn feed(&mut self, line: usize, fields: &[String]) -> Result<()> {
        let Some((tag, args)) = fields.split_first() else {
            return Ok(());
        };

        match tag.as_str() {
            "#KPTYP" => {
                let chart_type = args.first().ok_or(SieError::MalformedChart {
                    line,
                    reason: "invalid chart type",
                })?;
                self.chart.set_chart_type(chart_type.as_str());
            }
            "#KONTO" => {
                let [number, name] = args else {
                    return Err(SieError::MalformedChart {
                        line,
                        reason: "#KONTO needs an account number and a name",
                    });
                };
                if let DecoderState::AwaitingType { number, line, .. } = &self.state {
                    return Err(SieError::DanglingAccount {
                        number: number.clone(),
                        line: *line,
                    });
                }
                self.state = DecoderState::AwaitingType {
                    number: number.clone(),
                    name: name.clone(),
                    line,
                };
            }
            "#KTYP" => {
                let [number, kind] = args else {
                    return Err(SieError::MalformedChart {
                        line,
                        reason: "#KTYP needs an account number and a type",
                    });
                };
                match std::mem::replace(&mut self.state, DecoderState::Idle) {
                    DecoderState::AwaitingType {
                        number: pending,
                        name,
                        ..
                    } if pending == *number => {
                        debug!("account {number} ({kind}) read at line {line}");
                        self.chart.add_account(Account::new(pending, kind.as_str(), name));
                    }
                    DecoderState::AwaitingType { number: pending, .. } => {
                        return Err(SieError::MismatchedAccountType {
                            line,
                            expected: pending,
                            found: number.clone(),
                        });
                    }
                    DecoderState::Idle => {
                        return Err(SieError::MismatchedAccountType {
                            line,
                            expected: String::new(),
                            found: number.clone(),
                        });
                    }
                }
            }
            other => trace!("ignoring {other} at line {line}"),
        }
        Ok(())
    }

    pub fn finish(self) -> Result<ChartOfAccounts> {
        match self.state {
            DecoderState::Idle => Ok(self.chart),
            DecoderState::AwaitingType { number, line, .. } => {
                Err(SieError::DanglingAccount { number, line })
            }
        }
    }
}
