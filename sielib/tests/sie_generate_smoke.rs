use chrono::NaiveDate;
use rust_decimal::Decimal;
use sielib::{
    config::SieConfig,
    error::{ErrorCategory, SieError},
    formats::sie::{encode, Ledger},
    model::{Account, Verification},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn config() -> SieConfig {
    SieConfig::default()
        .with_program("ledgr", "2.0")
        .with_creator("Anna")
        .with_company("Kaffebryggeriet AB")
        .with_date(date(2024, 7, 1))
}

#[test]
fn generate_full_document() {
    let bank = Account::new("1920", "T", "Bank");
    let sales = Account::new("3000", "I", "Försäljning");
    let mut ledger = Ledger::new(config().with_year(date(2024, 1, 1), date(2024, 12, 31)));
    ledger
        .add_verification(
            Verification::new("Sålt \"kaffe\"", date(2024, 6, 15))
                .with_transaction(sales.clone(), Decimal::new(-40050, 2))
                .with_transaction(bank.clone(), Decimal::new(40050, 2)),
        )
        .unwrap();

    let bytes = encode(&ledger).unwrap();
    // ä and å are single CP437 bytes on the wire
    assert!(bytes.contains(&0x84));
    assert!(bytes.contains(&0x86));

    let expected = "#FLAGGA 0\r\n\
#PROGRAM \"ledgr\" \"2.0\"\r\n\
#FORMAT PC8\r\n\
#GEN 20240701 \"Anna\"\r\n\
#SIETYP 4\r\n\
#FNAMN \"Kaffebryggeriet AB\"\r\n\
#KPTYP \"EUBAS97\"\r\n\
#RAR 0 20240101 20241231\r\n\
\r\n\
#KONTO \"3000\" \"Försäljning\"\r\n\
#KTYP \"3000\" \"I\"\r\n\
#KONTO \"1920\" \"Bank\"\r\n\
#KTYP \"1920\" \"T\"\r\n\
\r\n\
#VER \"\" \"\" 20240615 \"Sålt \\\"kaffe\\\"\"\r\n\
{\r\n\
\t#TRANS 3000 {} -400.50\r\n\
\t#TRANS 1920 {} 400.50\r\n\
}\r\n";
    assert_eq!(sielib::formats::sie::charset::from_wire(&bytes), expected);
}

#[test]
fn generate_without_year_has_no_rar_line() {
    let ledger = Ledger::new(config());
    let text = sielib::formats::sie::charset::from_wire(&ledger.generate().unwrap());
    assert!(!text.contains("#RAR"));
    assert!(text.ends_with("#KPTYP \"EUBAS97\"\r\n\r\n"));
}

#[test]
fn rejected_verifications_never_reach_the_output() {
    let bank = Account::new("1920", "T", "Bank");
    let mut ledger = Ledger::new(config().with_year(date(2024, 1, 1), date(2024, 12, 31)));

    let late = Verification::new("Late", date(2025, 1, 1))
        .with_transaction(bank.clone(), Decimal::ZERO);
    let err = ledger.add_verification(late).unwrap_err();
    assert!(matches!(err, SieError::DateOutOfRange { .. }));
    assert_eq!(err.category(), ErrorCategory::Invariant);

    let text = sielib::formats::sie::charset::from_wire(&ledger.generate().unwrap());
    assert!(!text.contains("#VER"));
    assert!(!text.contains("#KONTO"));
}

#[test]
fn characters_outside_cp437_fail_to_encode() {
    let ledger = Ledger::new(config().with_company("Euro € AB"));
    let err = ledger.generate().unwrap_err();
    assert!(matches!(err, SieError::Encoding { character: '€', .. }));
    assert_eq!(err.category(), ErrorCategory::Encoding);
}
