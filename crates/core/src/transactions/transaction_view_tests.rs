//! Tests for the transaction display and JSON view.

#[cfg(test)]
mod tests {
    use crate::identity::IsinCache;
    use crate::transactions::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn entry(id: u64, product: &str, isin: Option<&str>, quantity: i64) -> LedgerEntry {
        LedgerEntry {
            id,
            account: "p".to_string(),
            date: NaiveDate::from_ymd_opt(2021, 1, 4).unwrap(),
            shown_total: "    -52.50".to_string(),
            product: product.to_string(),
            direction: Direction::from_quantity(quantity),
            quantity,
            value: dec!(5.25) * rust_decimal::Decimal::from(quantity),
            isin: isin.map(str::to_string),
            tax: Tax {
                shown: NO_TAX.to_string(),
                amount: dec!(0),
                currency: "EUR".to_string(),
            },
            source_row: 2,
        }
    }

    #[test]
    fn test_from_entry_registers_in_cache() {
        let mut cache = IsinCache::new();
        let tx = Transaction::from_entry(&entry(1001, "GALP", Some("PTGAL0AM0009"), -10), &mut cache);

        assert_eq!(tx.name(), "GALP");
        assert_eq!(tx.isin(), "PTGAL0AM0009");
        assert_eq!(tx.total, dec!(-52.50));
        assert_eq!(cache.isin_for("GALP"), Some("PTGAL0AM0009"));
    }

    #[test]
    fn test_from_entry_fills_isin_from_cache() {
        let mut cache = IsinCache::new();
        Transaction::from_entry(&entry(1001, "GALP", Some("PTGAL0AM0009"), 10), &mut cache);
        let tx = Transaction::from_entry(&entry(1002, "GALP", None, -10), &mut cache);

        assert_eq!(tx.isin(), "PTGAL0AM0009");
        assert!(cache.conflicts().is_empty());
    }

    #[test]
    fn test_from_entry_skips_invalid_isin() {
        let mut cache = IsinCache::new();
        let tx = Transaction::from_entry(&entry(1001, "GALP", Some("PTGAL0AM0008"), 10), &mut cache);

        assert_eq!(tx.isin(), "");
        assert_eq!(cache.isin_for("GALP"), None);
        assert_eq!(cache.name_for("PTGAL0AM0008"), None);
        assert_eq!(cache.observations()[0].isin, "");
    }

    #[test]
    fn test_invalid_isin_falls_back_to_cached() {
        let mut cache = IsinCache::new();
        Transaction::from_entry(&entry(1001, "GALP", Some("PTGAL0AM0009"), 10), &mut cache);
        let tx = Transaction::from_entry(&entry(1002, "GALP", Some("PTGAL0AM009"), -10), &mut cache);

        assert_eq!(tx.isin(), "PTGAL0AM0009");
        assert!(cache.conflicts().is_empty());
    }

    #[test]
    fn test_total_is_ledger_value() {
        let mut cache = IsinCache::new();
        let mut source = entry(1001, "GALP", None, -10);
        source.value = dec!(-52.5);
        let tx = Transaction::from_entry(&source, &mut cache);
        assert_eq!(tx.total, source.value);
    }

    #[test]
    fn test_stock_name_uses_shorthand() {
        let mut cache = IsinCache::new();
        let tx = Transaction::from_entry(
            &entry(1001, "KON.PHILIPS N.V.", Some("NL0000009538"), 2),
            &mut cache,
        );
        assert_eq!(tx.stock_name(), "PHILIPS");
        assert_eq!(tx.name(), "KON.PHILIPS N.V.");
    }

    #[test]
    fn test_display_line() {
        let mut cache = IsinCache::new();
        let tx = Transaction::from_entry(&entry(1001, "GALP", None, -10), &mut cache);
        assert_eq!(
            tx.to_string(),
            "1001   2021-01-04 sell GALP____________     -10x     -52.50"
        );
    }

    #[test]
    fn test_stock_string() {
        assert_eq!(stock_string("EDP"), "EDP_____________");
        assert_eq!(stock_string("JERONIMO MARTINS"), "JERONIMO MARTI_.");
        assert_eq!(stock_string("ABCDEFGHIJKLMN"), "ABCDEFGHIJKLMN__");
    }

    #[test]
    fn test_json_elem() {
        let mut cache = IsinCache::new();
        let tx = Transaction::from_entry(&entry(1001, "GALP", None, -10), &mut cache);

        let value = serde_json::to_value(tx.json_elem()).unwrap();
        assert_eq!(
            value,
            json!({
                "Id": 1001,
                "StockName": "GALP",
                "Op": "sell",
                "Date": "2021-01-04",
                "Quant": -10.0,
                "Total": -52.5,
            })
        );
    }

    #[test]
    fn test_to_json_sorted_and_indented() {
        let mut cache = IsinCache::new();
        let tx = Transaction::from_entry(&entry(1001, "GALP", None, 4), &mut cache);

        let out = to_json(&[tx]).unwrap();
        let expected = "[\n  {\n    \"Date\": \"2021-01-04\",\n    \"Id\": 1001,\n    \"Op\": \"buy\",\n    \"Quant\": 4.0,\n    \"StockName\": \"GALP\",\n    \"Total\": 21.0\n  }\n]\n";
        assert_eq!(out, expected);
    }
}
