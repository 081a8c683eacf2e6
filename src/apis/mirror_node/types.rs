/// Mirror node transaction payloads
///
/// Only the fields the viewer reads are typed. Everything else a record
/// carries is kept in `extra` and written back out untouched, so the proxy
/// passes records through without dropping data.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Consensus timestamp as the upstream sent it.
///
/// The mirror node uses `"<seconds>.<nanos>"` strings; other sources send
/// plain numbers. Numbers keep their exact JSON form (an integer stays an integer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConsensusTimestamp {
    Numeric(Number),
    Text(String),
}

/// One upstream record.
///
/// Decoding never fails on an object: a typed field is filled only when the
/// upstream value has the expected JSON type. Anything else, `null` included,
/// stays in `extra` under its original key and is written back as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consensus_timestamp: Option<ConsensusTimestamp>,

    /// Transaction type, e.g. `CRYPTOTRANSFER`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for Transaction {
    fn from(mut extra: Map<String, Value>) -> Self {
        let transaction_id = take_string(&mut extra, "transaction_id");
        let name = take_string(&mut extra, "name");
        let consensus_timestamp = match extra.get("consensus_timestamp") {
            Some(Value::Number(_)) | Some(Value::String(_)) => {
                match extra.remove("consensus_timestamp") {
                    Some(Value::Number(n)) => Some(ConsensusTimestamp::Numeric(n)),
                    Some(Value::String(s)) => Some(ConsensusTimestamp::Text(s)),
                    _ => None,
                }
            }
            _ => None,
        };

        Self {
            transaction_id,
            consensus_timestamp,
            name,
            extra,
        }
    }
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    if !matches!(map.get(key), Some(Value::String(_))) {
        return None;
    }
    match map.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

impl Transaction {
    /// Identifier used for searching; a record without one searches as ""
    pub fn search_id(&self) -> &str {
        self.transaction_id.as_deref().unwrap_or("")
    }
}

/// Body of `GET /api/v1/transactions`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionsPage {
    /// Missing or `null` reads as empty. Array entries that are not objects are skipped.
    #[serde(default, deserialize_with = "lenient_records")]
    pub transactions: Vec<Transaction>,

    /// Pagination links; read for logging only
    #[serde(default)]
    pub links: Option<PageLinks>,
}

fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<Transaction>, D::Error>
where
    D: Deserializer<'de>,
{
    let records: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(records
        .unwrap_or_default()
        .into_iter()
        .filter_map(|record| match record {
            Value::Object(map) => Some(Transaction::from(map)),
            _ => None,
        })
        .collect())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub next: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_passes_through_unchanged() {
        let raw = json!({
            "transaction_id": "0.0.1@1@2",
            "consensus_timestamp": 1700000000,
            "name": "CRYPTOTRANSFER",
            "charged_tx_fee": 84650,
            "transfers": [{"account": "0.0.98", "amount": 84650}]
        });

        let tx: Transaction = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(tx.search_id(), "0.0.1@1@2");
        assert_eq!(serde_json::to_value(&tx).unwrap(), raw);
    }

    #[test]
    fn test_mirror_node_string_timestamp() {
        let tx: Transaction = serde_json::from_value(json!({
            "transaction_id": "0.0.2-1700000000-000000001",
            "consensus_timestamp": "1700000000.123456789"
        }))
        .unwrap();

        assert_eq!(
            tx.consensus_timestamp,
            Some(ConsensusTimestamp::Text("1700000000.123456789".into()))
        );
        assert_eq!(tx.name, None);
    }

    #[test]
    fn test_missing_id_searches_as_empty() {
        let tx: Transaction = serde_json::from_value(json!({"name": "TOKENMINT"})).unwrap();
        assert_eq!(tx.search_id(), "");
    }

    #[test]
    fn test_record_without_name_stays_without_name() {
        let raw = json!({"transaction_id": "0.0.1@1@2", "consensus_timestamp": 1700000000});
        let tx: Transaction = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(tx.name, None);
        assert_eq!(serde_json::to_value(&tx).unwrap(), raw);
    }

    #[test]
    fn test_unexpected_field_types_are_kept_untyped() {
        let raw = json!({
            "transaction_id": 42,
            "consensus_timestamp": true,
            "name": null,
            "memo_base64": ""
        });
        let tx: Transaction = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(tx.transaction_id, None);
        assert_eq!(tx.consensus_timestamp, None);
        assert_eq!(tx.name, None);
        assert_eq!(tx.extra.get("consensus_timestamp"), Some(&json!(true)));
        assert_eq!(serde_json::to_value(&tx).unwrap(), raw);
    }

    #[test]
    fn test_null_transactions_reads_as_empty() {
        let page: TransactionsPage = serde_json::from_value(json!({"transactions": null})).unwrap();
        assert!(page.transactions.is_empty());
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let page: TransactionsPage = serde_json::from_value(json!({
            "transactions": [{"transaction_id": "0.0.1@1@2"}, 7, "x"]
        }))
        .unwrap();
        assert_eq!(page.transactions.len(), 1);
    }

    #[test]
    fn test_page_without_transactions_field() {
        let page: TransactionsPage = serde_json::from_value(json!({"links": {"next": null}})).unwrap();
        assert!(page.transactions.is_empty());
    }
}
