//! SIE 4I (transaction import) plus `#FILTYP KONTO` charts.
//!
//! Only the parts needed to hand verifications to accounting software and
//! to move charts of accounts are implemented, not the full SIE format.

pub mod charset;
pub mod chart;
pub mod ledger;
pub mod quote;
pub mod tokenizer;

pub use ledger::{decode_chart, encode, encode_chart, Ledger};

use crate::{
    config::SieConfig,
    error::Result,
    model::ChartOfAccounts,
    traits::{ReadChart, WriteChart},
};
use std::io::{BufRead, Write};

pub(crate) const EOL: &str = "\r\n";

/// Chart export/import through the [`ReadChart`]/[`WriteChart`] traits.
#[derive(Debug, Clone, Default)]
pub struct SieChart {
    pub config: SieConfig,
    /// Goes into `#TEXT`.
    pub description: String,
}

impl ReadChart for SieChart {
    fn read<R: BufRead>(&self, mut r: R) -> Result<ChartOfAccounts> {
        let mut buf = Vec::new();
        r.read_to_end(&mut buf)?;
        decode_chart(&buf)
    }
}

impl WriteChart for SieChart {
    fn write<W: Write>(&self, mut w: W, chart: &ChartOfAccounts) -> Result<()> {
        let bytes = encode_chart(&self.config, &self.description, chart)?;
        w.write_all(&bytes)?;
        Ok(())
    }
}
