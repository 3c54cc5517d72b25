//! Plain CSV chart, headers:
//! number,type,name,chart_type
//!
//! The chart type is repeated on every row. An empty chart is written as
//! the header line alone, so its chart type reads back as the default.
//! Fields are taken as written, including surrounding spaces.

use crate::{
    error::Result,
    model::{Account, ChartOfAccounts},
    traits::{ReadChart, WriteChart},
};
use csv::{ReaderBuilder, WriterBuilder};
use std::io::{BufRead, Write};

#[derive(serde::Deserialize)]
struct CsvRow {
    number: String,
    #[serde(rename = "type")]
    kind: String,
    name: String,
    chart_type: Option<String>,
}

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    number: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    name: &'a str,
    chart_type: &'a str,
}

const HEADERS: [&str; 4] = ["number", "type", "name", "chart_type"];

#[derive(Debug, Clone, Copy, Default)]
pub struct Csv;

impl ReadChart for Csv {
    fn read<R: BufRead>(&self, r: R) -> Result<ChartOfAccounts> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(r);
        let mut chart = ChartOfAccounts::new();
        let mut chart_type: Option<String> = None;

        for rec in rdr.deserialize::<CsvRow>() {
            let row = rec?;
            if chart_type.is_none() {
                chart_type = row.chart_type.filter(|t| !t.is_empty());
            }
            chart.add_account(Account::new(row.number, row.kind, row.name));
        }

        if let Some(t) = chart_type {
            chart.set_chart_type(t);
        }
        Ok(chart)
    }
}

impl WriteChart for Csv {
    fn write<W: Write>(&self, mut w: W, chart: &ChartOfAccounts) -> Result<()> {
        let mut wrt = WriterBuilder::new().has_headers(false).from_writer(&mut w);
        wrt.write_record(HEADERS)?;

        for account in chart.accounts() {
            wrt.serialize(CsvOutRow {
                number: account.number(),
                kind: account.kind(),
                name: account.name(),
                chart_type: chart.chart_type(),
            })?;
        }
        wrt.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AccountLookup;
    use std::io::Cursor;

    #[test]
    fn reads_rows_in_order() {
        let input = "number,type,name,chart_type\n1920,T,Bank,BAS2014\n3000,I,\"Sales, domestic\",BAS2014\n";
        let chart = Csv.read(Cursor::new(input)).unwrap();
        assert_eq!(chart.chart_type(), "BAS2014");
        assert_eq!(chart.len(), 2);
        assert_eq!(chart.get_account("3000").unwrap().name(), "Sales, domestic");
    }

    #[test]
    fn chart_type_column_is_optional() {
        let input = "number,type,name\n1920,T,Bank\n";
        let chart = Csv.read(Cursor::new(input)).unwrap();
        assert_eq!(chart.chart_type(), crate::model::DEFAULT_CHART_TYPE);
        assert_eq!(chart.len(), 1);
    }

    #[test]
    fn spaces_in_names_are_kept() {
        let input = "number,type,name,chart_type\n1920,T,\"  Bank \",BAS2014\n";
        let chart = Csv.read(Cursor::new(input)).unwrap();
        assert_eq!(chart.get_account("1920").unwrap().name(), "  Bank ");

        let mut out = Vec::new();
        Csv.write(&mut out, &chart).unwrap();
        let back = Csv.read(Cursor::new(out)).unwrap();
        assert_eq!(back.get_account("1920").unwrap().name(), "  Bank ");
    }

    #[test]
    fn empty_chart_keeps_the_header() {
        let mut chart = ChartOfAccounts::new();
        chart.set_chart_type("BAS2014");

        let mut out = Vec::new();
        Csv.write(&mut out, &chart).unwrap();
        assert_eq!(String::from_utf8(out.clone()).unwrap(), "number,type,name,chart_type\n");

        let back = Csv.read(Cursor::new(out)).unwrap();
        assert!(back.is_empty());
        assert_eq!(back.chart_type(), crate::model::DEFAULT_CHART_TYPE);
    }
}
