use chrono::NaiveDate;
use sielib::{
    config::SieConfig,
    formats::{csv::Csv, sie::Ledger},
    template::Template,
    traits::ReadChart,
};
use std::collections::HashMap;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: CSV chart on stdin -> one verification as SIE on stdout
    let chart = Csv.read(std::io::BufReader::new(std::io::stdin()))?;

    let mut template = Template::new("PAY", "Payment", "Payment {ref}")?;
    template.add_transaction("{from}", "-{amount}");
    template.add_transaction("{to}", "{amount}");
    template.substitute(&HashMap::from([
        ("ref".to_string(), "42".to_string()),
        ("from".to_string(), "1920".to_string()),
        ("to".to_string(), "2440".to_string()),
        ("amount".to_string(), "1250.00".to_string()),
    ]));

    let today = chrono::Local::now().date_naive();
    let year_start = NaiveDate::from_ymd_opt(2000, 1, 1).ok_or("bad date")?;
    let mut ledger = Ledger::new(SieConfig::default().with_year(year_start, today));
    ledger.add_verification(template.build_verification(&chart)?)?;

    std::io::stdout().write_all(&ledger.generate()?)?;
    Ok(())
}
