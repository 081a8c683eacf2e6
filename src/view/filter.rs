/// Search filtering for the transaction table
///
/// A record matches when its transaction id or its type name contains the
/// search text, ignoring case. An empty search matches everything.
use crate::apis::mirror_node::Transaction;

/// Lowercased search needle, computed once per filter pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        if self.is_empty() {
            return true;
        }

        tx.search_id().to_lowercase().contains(&self.needle)
            || tx
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&self.needle))
    }
}

/// Records of `transactions` matching `search_term`, in their original order
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    search_term: &str,
) -> Vec<&'a Transaction> {
    let query = SearchQuery::new(search_term);
    transactions.iter().filter(|tx| query.matches(tx)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::tx;

    fn sample() -> Vec<Transaction> {
        vec![
            tx(Some("0.0.1@1700000000.1"), Some("CRYPTOTRANSFER")),
            tx(Some("0.0.42@1700000001.5"), Some("TOKENMINT")),
            tx(Some("0.0.7@1700000002.9"), None),
            tx(None, Some("CONSENSUSSUBMITMESSAGE")),
        ]
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        let list = sample();
        assert_eq!(filter_transactions(&list, "").len(), list.len());
    }

    #[test]
    fn test_matches_id_substring() {
        let list = sample();
        let hits = filter_transactions(&list, "0.0.42");
        assert_eq!(hits, vec![&list[1]]);
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let list = sample();
        let hits = filter_transactions(&list, "cryptoTransfer");
        assert_eq!(hits, vec![&list[0]]);
    }

    #[test]
    fn test_upper_case_term_matches_lower_case_id() {
        let list = vec![tx(Some("0.0.5-abcdef"), None)];
        assert_eq!(filter_transactions(&list, "ABC").len(), 1);
    }

    #[test]
    fn test_missing_id_does_not_panic() {
        let list = sample();
        let hits = filter_transactions(&list, "consensus");
        assert_eq!(hits, vec![&list[3]]);
        assert!(filter_transactions(&list, "zzz").is_empty());
    }

    #[test]
    fn test_missing_name_only_matches_on_id() {
        let list = sample();
        assert!(filter_transactions(&list, "unknown").is_empty());
    }

    #[test]
    fn test_input_is_not_modified() {
        let list = sample();
        let before = list.clone();
        let _ = filter_transactions(&list, "token");
        assert_eq!(list, before);
    }
}
