//! Tests for index weights and stock references.

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::weights::*;
    use crate::errors::MarketDataError;

    const PSI: &str = "
Name;Abbreviation;Weight
GALP ENERGIA-NOM;GALP;14.20
EDP;EDP;13.85
JERONIMO MARTINS;JMT;11.02
BCP;BCP;-
NOS, SGPS;NOS;0
";

    const PSI_ISIN: [(&str, &str); 5] = [
        ("GALP ENERGIA-NOM", "PTGAL0AM0009"),
        ("EDP", "PTEDP0AM0009"),
        ("JERONIMO MARTINS", "PTJMT0AE0001"),
        ("BCP", "PTBCP0AM0015"),
        ("NOS, SGPS", "PTZON0AM0006"),
    ];

    fn psi() -> StockWeight {
        StockWeight::parse("PSI-20", PSI).unwrap()
    }

    // ============================================================================
    // Parsing
    // ============================================================================

    #[test]
    fn test_parse_table() {
        let index = psi();
        assert_eq!(index.name(), "PSI-20");
        assert_eq!(index.header(), "Name;Abbreviation;Weight");
        assert_eq!(index.abbrev_list(), vec!["GALP", "EDP", "JMT", "BCP", "NOS"]);
        assert_eq!(index.full_name("JMT"), Some("JERONIMO MARTINS"));
        assert_eq!(index.full_name("XYZ"), None);
    }

    #[test]
    fn test_parse_keeps_unknown_apart_from_zero() {
        let index = psi();
        let weights: Vec<Weight> = index.abbreviations().iter().map(|(_, w)| *w).collect();
        assert_eq!(weights[3], Weight::Unknown);
        assert_eq!(weights[4], Weight::Known(dec!(0)));
        assert!(weights[3].is_unknown());
        assert!(!weights[4].is_unknown());
    }

    #[test]
    fn test_parse_duplicate_abbreviation_fails() {
        let text = "\nName;Abbreviation;Weight\nEDP;EDP;10\nEDP RENOVAVEIS;EDP;5\n";
        let err = StockWeight::parse("PSI-20", text).unwrap_err();
        assert_eq!(
            err,
            MarketDataError::DuplicateAbbreviation {
                index: "PSI-20".to_string(),
                abbrev: "EDP".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_bad_lines() {
        let short = "Name;Abbreviation;Weight\nEDP;10\n";
        assert!(matches!(
            StockWeight::parse("PSI-20", short),
            Err(MarketDataError::InvalidWeightLine { line: 2, .. })
        ));

        let negative = "Name;Abbreviation;Weight\nEDP;EDP;-3\n";
        assert!(matches!(
            StockWeight::parse("PSI-20", negative),
            Err(MarketDataError::InvalidWeightLine { line: 2, .. })
        ));

        let no_header = "EDP;EDP\n";
        assert!(matches!(
            StockWeight::parse("PSI-20", no_header),
            Err(MarketDataError::InvalidWeightLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_bad_index_name() {
        assert_eq!(
            StockWeight::parse("PSI 20", PSI).unwrap_err(),
            MarketDataError::InvalidIndexName("PSI 20".to_string())
        );
    }

    // ============================================================================
    // add / validate / totals
    // ============================================================================

    #[test]
    fn test_validate_ok() {
        assert!(psi().validate());
    }

    #[test]
    fn test_add_new_abbreviation() {
        let mut index = psi();
        assert!(index.add("ABC", Some("Abc Long"), None));
        assert_eq!(index.full_name("ABC"), Some("Abc Long"));
        assert_eq!(index.abbreviations().last().unwrap().1, Weight::Unknown);
        assert!(index.validate());
    }

    #[test]
    fn test_add_defaults_full_name_to_abbreviation() {
        let mut index = psi();
        assert!(index.add("CTT", None, Some(dec!(1.5))));
        assert_eq!(index.full_name("CTT"), Some("CTT"));
    }

    #[test]
    fn test_add_existing_abbreviation_still_appends_weight() {
        let mut index = psi();
        let before = index.abbreviations().len();

        assert!(!index.add("EDP", Some("Other EDP"), Some(dec!(2))));
        assert_eq!(index.abbreviations().len(), before + 1);
        assert_eq!(index.full_name("EDP"), Some("EDP"));
        assert!(!index.validate());
    }

    #[test]
    fn test_validate_detects_shared_full_name() {
        let mut index = psi();
        index.add("GALP2", Some("GALP ENERGIA-NOM"), None);
        assert!(!index.validate());
    }

    #[test]
    fn test_total_weight() {
        let total = psi().total_weight();
        assert_eq!(total.known, dec!(39.07));
        assert_eq!(total.unknown_count, 1);
    }

    #[test]
    fn test_weight_display() {
        assert_eq!(Weight::Known(dec!(14.2)).to_string(), "14.20");
        assert_eq!(Weight::Unknown.to_string(), "-");
    }

    // ============================================================================
    // RefIsin / StockRefs
    // ============================================================================

    #[test]
    fn test_ref_isin_reports_invalids() {
        let mut refs = RefIsin::new();
        assert!(refs.add_isin_refs(PSI_ISIN).is_empty());
        assert_eq!(refs.get("EDP"), Some("PTEDP0AM0009"));

        let invalids = refs.add_isin_refs([("Abc Long", "ABC123XYZ000"), ("EDP", "bogus")]);
        assert_eq!(
            invalids,
            vec![("Abc Long".to_string(), "ABC123XYZ000".to_string())]
        );
        assert_eq!(refs.get("EDP"), Some("PTEDP0AM0009"));
        assert_eq!(refs.len(), 6);
    }

    #[test]
    fn test_every_abbreviation_has_valid_isin() {
        let index = psi();
        let mut refs = RefIsin::new();
        refs.add_isin_refs(PSI_ISIN);

        for abbrev in index.abbrev_list() {
            let name = index.full_name(abbrev).unwrap();
            let code = refs.get(name).unwrap();
            assert_eq!(crate::isin::checksum(code).as_deref(), Some(code));
        }
    }

    #[test]
    fn test_stock_refs_local_index() {
        let mut refs = StockRefs::new(Some(psi()));
        assert_eq!(refs.status(), RefsStatus::Ok);
        assert_eq!(refs.current_local_name(), Some("PSI-20"));

        assert!(refs.add_stock("ABC", "Abc Long", None));
        assert_eq!(refs.current_local().unwrap().full_name("ABC"), Some("Abc Long"));
        assert!(!refs.add_stock("ABC", "Abc Long", Some("IBEX-35")));
    }

    #[test]
    fn test_stock_refs_switch_local() {
        let ibex = StockWeight::parse("IBEX-35", "Name;Abbreviation;Weight\nINDITEX;ITX;15\n").unwrap();
        let mut refs = StockRefs::new(Some(psi()));
        refs.add_ref_stock(ibex);

        assert!(refs.set_local_by_name("IBEX-35"));
        assert_eq!(refs.current_local_name(), Some("IBEX-35"));
        assert!(!refs.set_local_by_name("DAX"));
        assert!(refs.get("PSI-20").is_some());
    }

    #[test]
    fn test_stock_refs_invalid_local() {
        let mut index = psi();
        index.add("EDP", None, None);
        let refs = StockRefs::new(Some(index));
        assert_eq!(refs.status(), RefsStatus::InvalidLocalIndex);
    }

    #[test]
    fn test_stock_refs_empty() {
        let mut refs = StockRefs::new(None);
        assert_eq!(refs.current_local_name(), None);
        assert!(!refs.add_stock("ABC", "Abc Long", None));
    }

    #[test]
    fn test_comp_name_ok() {
        assert!(comp_name_ok("NOS, SGPS"));
        assert!(comp_name_ok("KON.PHILIPS"));
        assert!(comp_name_ok("3M CO"));
        assert!(!comp_name_ok("galp"));
        assert!(!comp_name_ok("AB/C"));
        assert!(!comp_name_ok(""));
    }
}
