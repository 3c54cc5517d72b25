//! Header settings written into every generated SIE document.

use crate::model::DEFAULT_CHART_TYPE;
use chrono::{Local, NaiveDate};

/// Inclusive bounds of an accounting year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountingYear {
    pub start: NaiveDate,
    pub stop: NaiveDate,
}

impl AccountingYear {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.stop
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SieConfig {
    /// Name of the generating program.
    pub program: String,
    pub version: String,
    /// Person or instance generating the file.
    pub creator: String,
    /// Company whose verifications are handled.
    pub company: String,
    pub chart_type: String,
    pub year: Option<AccountingYear>,
    /// Generation date for `#GEN`.
    pub date: NaiveDate,
}

impl Default for SieConfig {
    fn default() -> Self {
        Self {
            program: "sielib".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            creator: "sielib".to_string(),
            company: String::new(),
            chart_type: DEFAULT_CHART_TYPE.to_string(),
            year: None,
            date: Local::now().date_naive(),
        }
    }
}

impl SieConfig {
    pub fn with_program(mut self, program: impl Into<String>, version: impl Into<String>) -> Self {
        self.program = program.into();
        self.version = version.into();
        self
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    /// Only verifications dated within `start..=stop` are accepted once a
    /// year is set.
    pub fn with_year(mut self, start: NaiveDate, stop: NaiveDate) -> Self {
        self.year = Some(AccountingYear { start, stop });
        self
    }

    pub fn with_chart_type(mut self, chart_type: impl Into<String>) -> Self {
        self.chart_type = chart_type.into();
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }
}
