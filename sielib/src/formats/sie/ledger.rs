use super::{
    chart::{write_accounts, write_chart_type, ChartDecoder},
    charset::{from_wire, to_wire},
    quote::quote,
    tokenizer::Tokenizer,
    EOL,
};
use crate::{
    config::SieConfig,
    error::{Result, SieError},
    model::{Account, ChartOfAccounts, Verification},
};
use indexmap::IndexMap;
use log::debug;
use std::fmt::Write as FmtWrite;

const DATE_FORMAT: &str = "%Y%m%d";

/// Verifications waiting to be exported, together with the accounts they
/// use.
///
/// Only balanced verifications dated inside the configured accounting year
/// are accepted, so [`Ledger::generate`] never sees invalid data.
#[derive(Debug, Clone)]
pub struct Ledger {
    config: SieConfig,
    verifications: Vec<Verification>,
    used_accounts: IndexMap<String, Account>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(SieConfig::default())
    }
}

impl Ledger {
    pub fn new(config: SieConfig) -> Self {
        Self {
            config,
            verifications: Vec::new(),
            used_accounts: IndexMap::new(),
        }
    }

    pub fn config(&self) -> &SieConfig {
        &self.config
    }

    pub fn verifications(&self) -> &[Verification] {
        &self.verifications
    }

    /// Accounts referenced by accepted verifications, in order of first use.
    pub fn used_accounts(&self) -> impl Iterator<Item = &Account> {
        self.used_accounts.values()
    }

    pub fn add_verification(&mut self, ver: Verification) -> Result<&mut Self> {
        if !ver.is_balanced() {
            return Err(SieError::UnbalancedVerification { text: ver.text });
        }

        if let Some(year) = &self.config.year {
            if !year.contains(ver.date) {
                return Err(SieError::DateOutOfRange {
                    date: ver.date.format("%Y-%m-%d").to_string(),
                });
            }
        }

        for account in ver.accounts() {
            self.used_accounts
                .insert(account.number().to_string(), account.clone());
        }
        debug!(
            "verification <{}> added with {} transactions",
            ver.text,
            ver.transactions.len()
        );
        self.verifications.push(ver);

        Ok(self)
    }

    /// Drops all verifications and the accounts they used.
    pub fn clear(&mut self) -> &mut Self {
        self.verifications.clear();
        self.used_accounts.clear();
        self
    }

    /// Renders the ledger as a CP437 encoded SIE 4I document.
    pub fn generate(&self) -> Result<Vec<u8>> {
        let cfg = &self.config;
        let mut s = String::new();

        let _ = write!(s, "#FLAGGA 0{EOL}");
        let _ = write!(s, "#PROGRAM {} {}{EOL}", quote(&cfg.program), quote(&cfg.version));
        let _ = write!(s, "#FORMAT PC8{EOL}");
        let _ = write!(
            s,
            "#GEN {} {}{EOL}",
            cfg.date.format(DATE_FORMAT),
            quote(&cfg.creator)
        );
        let _ = write!(s, "#SIETYP 4{EOL}");
        let _ = write!(s, "#FNAMN {}{EOL}", quote(&cfg.company));
        write_chart_type(&mut s, &cfg.chart_type);

        if let Some(year) = &cfg.year {
            let _ = write!(
                s,
                "#RAR 0 {} {}{EOL}",
                year.start.format(DATE_FORMAT),
                year.stop.format(DATE_FORMAT)
            );
        }

        s.push_str(EOL);

        write_accounts(&mut s, self.used_accounts.values());

        for ver in &self.verifications {
            let _ = write!(
                s,
                "{EOL}#VER \"\" \"\" {} {}{EOL}",
                ver.date.format(DATE_FORMAT),
                quote(&ver.text)
            );
            let _ = write!(s, "{{{EOL}");
            for trans in &ver.transactions {
                let _ = write!(
                    s,
                    "\t#TRANS {} {{}} {}{EOL}",
                    trans.account.number(),
                    trans.amount
                );
            }
            let _ = write!(s, "}}{EOL}");
        }

        debug!(
            "generated SIE with {} accounts and {} verifications",
            self.used_accounts.len(),
            self.verifications.len()
        );
        to_wire(&s)
    }

    /// Renders `chart` as a CP437 encoded `#FILTYP KONTO` document.
    pub fn export_chart(&self, description: &str, chart: &ChartOfAccounts) -> Result<Vec<u8>> {
        encode_chart(&self.config, description, chart)
    }

    /// Reads the accounts of a CP437 encoded SIE document.
    pub fn import_chart(&self, sie: &[u8]) -> Result<ChartOfAccounts> {
        decode_chart(sie)
    }
}

pub fn encode(ledger: &Ledger) -> Result<Vec<u8>> {
    ledger.generate()
}

pub fn encode_chart(cfg: &SieConfig, description: &str, chart: &ChartOfAccounts) -> Result<Vec<u8>> {
    let mut s = String::new();

    let _ = write!(s, "#FILTYP KONTO{EOL}");
    let _ = write!(s, "#PROGRAM {} {}{EOL}", quote(&cfg.program), quote(&cfg.version));
    let _ = write!(s, "#TEXT {}{EOL}", quote(description));
    let _ = write!(s, "#FORMAT PC8{EOL}");
    let _ = write!(
        s,
        "#GEN {} {}{EOL}",
        cfg.date.format(DATE_FORMAT),
        quote(&cfg.creator)
    );
    write_chart_type(&mut s, chart.chart_type());

    s.push_str(EOL);

    write_accounts(&mut s, chart.accounts());

    to_wire(&s)
}

pub fn decode_chart(sie: &[u8]) -> Result<ChartOfAccounts> {
    let text = from_wire(sie);
    let tokenizer = Tokenizer::new()?;
    let mut decoder = ChartDecoder::new();

    for (nr, line) in text.lines().enumerate() {
        decoder.feed(nr + 1, &tokenizer.tokenize(line))?;
    }

    let chart = decoder.finish()?;
    debug!("decoded chart {} with {} accounts", chart.chart_type(), chart.len());
    Ok(chart)
}
