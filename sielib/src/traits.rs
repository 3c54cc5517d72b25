//! Chart reading/writing traits on top of std::io::{BufRead, Write}.

use crate::{error::Result, model::ChartOfAccounts};
use std::io::{BufRead, Write};

pub trait ReadChart {
    fn read<R: BufRead>(&self, r: R) -> Result<ChartOfAccounts>;
}

pub trait WriteChart {
    fn write<W: Write>(&self, w: W, chart: &ChartOfAccounts) -> Result<()>;
}

pub trait ChartFormat: ReadChart + WriteChart {}
impl<T: ReadChart + WriteChart> ChartFormat for T {}
