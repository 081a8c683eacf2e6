//! Property-based tests for the transaction search filter.

use mirrorscope::apis::mirror_node::Transaction;
use mirrorscope::view::filter_transactions;
use proptest::{prelude::*, test_runner::Config};

// Strategy to generate mirror node style ids, e.g. "0.0.1234@1700000000.000000001"
fn arb_transaction_id() -> impl Strategy<Value = String> {
    (0u64..5000, 1_600_000_000u64..1_800_000_000, 0u32..1_000_000_000)
        .prop_map(|(account, secs, nanos)| format!("0.0.{}@{}.{:09}", account, secs, nanos))
}

fn arb_name() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "CRYPTOTRANSFER".to_string(),
        "CONSENSUSSUBMITMESSAGE".to_string(),
        "TOKENMINT".to_string(),
        "ContractCall".to_string(),
    ]))
}

fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (prop::option::of(arb_transaction_id()), arb_name()).prop_map(|(transaction_id, name)| {
        Transaction {
            transaction_id,
            name,
            ..Transaction::default()
        }
    })
}

fn arb_transactions() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(arb_transaction(), 0..20)
}

// Search terms drawn from the same alphabet as ids and names so matches happen
fn arb_term() -> impl Strategy<Value = String> {
    "[0-9.@a-zA-Z]{0,6}"
}

fn matches(tx: &Transaction, term: &str) -> bool {
    let needle = term.to_lowercase();
    tx.transaction_id
        .as_deref()
        .unwrap_or("")
        .to_lowercase()
        .contains(&needle)
        || tx
            .name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&needle))
}

proptest! {
    #![proptest_config(Config {
        failure_persistence: None,
        ..Config::default()
    })]

    #[test]
    fn prop_filter_is_ordered_subset(list in arb_transactions(), term in arb_term()) {
        let filtered = filter_transactions(&list, &term);
        prop_assert!(filtered.len() <= list.len());

        // Results appear in the same relative order as the input
        let mut cursor = list.iter();
        for tx in &filtered {
            prop_assert!(cursor.any(|candidate| std::ptr::eq(candidate, *tx)));
        }
    }

    #[test]
    fn prop_filter_keeps_exactly_the_matches(list in arb_transactions(), term in arb_term()) {
        let filtered = filter_transactions(&list, &term);
        let expected = list.iter().filter(|tx| matches(tx, &term)).count();
        prop_assert_eq!(filtered.len(), expected);
        for tx in filtered {
            prop_assert!(matches(tx, &term));
        }
    }

    #[test]
    fn prop_empty_term_is_identity(list in arb_transactions()) {
        let filtered: Vec<Transaction> =
            filter_transactions(&list, "").into_iter().cloned().collect();
        prop_assert_eq!(filtered, list);
    }

    #[test]
    fn prop_filter_is_idempotent(list in arb_transactions(), term in arb_term()) {
        let once: Vec<Transaction> =
            filter_transactions(&list, &term).into_iter().cloned().collect();
        let twice: Vec<Transaction> =
            filter_transactions(&once, &term).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_search_ignores_case(list in arb_transactions(), term in arb_term()) {
        let lower = filter_transactions(&list, &term.to_lowercase()).len();
        let upper = filter_transactions(&list, &term.to_uppercase()).len();
        prop_assert_eq!(lower, upper);
    }
}
