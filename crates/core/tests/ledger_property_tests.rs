//! Property-based integration tests for ledger normalization.
//!
//! Rows are generated with valid accounts, dates and amounts, so
//! normalization always succeeds and the ledger invariants can be checked
//! on the result.

use chrono::{Duration, NaiveDate};
use netstocked_core::transactions::{normalize, Cell, Column, Direction, RawRow};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

#[derive(Debug, Clone)]
struct RowInput {
    account: &'static str,
    day_offset: i64,
    quantity: i64,
    price_cents: i64,
}

fn arb_account() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("m"), Just("H"), Just("p")]
}

fn arb_row_input() -> impl Strategy<Value = RowInput> {
    (arb_account(), 0i64..3650, -500i64..500, 1i64..100_000).prop_map(
        |(account, day_offset, quantity, price_cents)| RowInput {
            account,
            day_offset,
            quantity,
            price_cents,
        },
    )
}

fn arb_rows(max_count: usize) -> impl Strategy<Value = Vec<RowInput>> {
    proptest::collection::vec(arb_row_input(), 0..=max_count)
}

fn to_raw(input: &RowInput) -> RawRow {
    let base = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
    let date = base + Duration::days(input.day_offset);
    let mut raw = RawRow::new();
    for column in Column::ALL {
        let cell = match column {
            Column::Id => Cell::text(input.account),
            Column::Data => Cell::text(date.format("%d-%m-%Y").to_string()),
            Column::Produto => Cell::text("EDP RENOVAVEIS"),
            Column::Quantidade => Cell::integer(input.quantity),
            Column::Per => Cell::number(Decimal::new(input.price_cents, 2)),
            _ => Cell::empty(),
        };
        raw.insert(column, cell);
    }
    raw
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Global ids are contiguous from 1001 and follow the row order.
    #[test]
    fn prop_global_ids_contiguous(inputs in arb_rows(30)) {
        let rows: Vec<RawRow> = inputs.iter().map(to_raw).collect();
        let ledger = normalize(&rows, 2).unwrap();

        prop_assert_eq!(ledger.len(), rows.len());
        for (i, entry) in ledger.from_to().iter().enumerate() {
            prop_assert_eq!(entry.id, 1001 + i as u64);
            prop_assert_eq!(entry.source_row, 2 + i);
        }
    }

    /// Every account bucket is numbered from 5001 and holds exactly the
    /// flat entries for that account, in the same order.
    #[test]
    fn prop_account_buckets_partition_ledger(inputs in arb_rows(30)) {
        let rows: Vec<RawRow> = inputs.iter().map(to_raw).collect();
        let ledger = normalize(&rows, 2).unwrap();

        let mut total = 0;
        for account in ["m", "H", "p"] {
            let bucket = ledger.by_account(account).unwrap();
            let flat: Vec<_> = ledger
                .from_to()
                .iter()
                .filter(|e| e.account == account)
                .collect();

            prop_assert_eq!(bucket.len(), flat.len());
            for (i, (entry, original)) in bucket.iter().zip(flat).enumerate() {
                prop_assert_eq!(entry.id, 5001 + i as u64);
                prop_assert_eq!(&entry.renumbered(original.id), original);
            }
            total += bucket.len();
        }
        prop_assert_eq!(total, ledger.len());
    }

    /// Values are quantity x price at cent precision and the direction
    /// follows the sign of the quantity.
    #[test]
    fn prop_value_and_direction(inputs in arb_rows(20)) {
        let rows: Vec<RawRow> = inputs.iter().map(to_raw).collect();
        let ledger = normalize(&rows, 2).unwrap();

        for (input, entry) in inputs.iter().zip(ledger.from_to()) {
            let expected = Decimal::from(input.quantity) * Decimal::new(input.price_cents, 2);
            prop_assert_eq!(entry.value, expected);
            prop_assert!(entry.value.scale() <= 2);
            let direction = if input.quantity > 0 { Direction::Buy } else { Direction::Sell };
            prop_assert_eq!(entry.direction, direction);
        }
    }

    /// Normalizing the same rows twice gives the same ledger.
    #[test]
    fn prop_normalization_repeatable(inputs in arb_rows(20)) {
        let rows: Vec<RawRow> = inputs.iter().map(to_raw).collect();
        let first = normalize(&rows, 2).unwrap();
        let second = normalize(&rows, 2).unwrap();

        prop_assert_eq!(first.from_to(), second.from_to());
    }
}
