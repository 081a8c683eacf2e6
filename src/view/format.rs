/// Display formatting for transaction rows
use crate::apis::mirror_node::{ConsensusTimestamp, Transaction};
use chrono::DateTime;

pub const MISSING_VALUE: &str = "N/A";
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Page and screen texts shared by the browser and terminal surfaces
pub const TITLE: &str = "Hedera Transactions";
pub const LOADING_TEXT: &str = "Loading Transactions...";
pub const NO_DATA_TEXT: &str = "No relevant transactions found.";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// One table row, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub transaction_id: String,
    pub consensus_timestamp: String,
    pub name: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(tx: &Transaction) -> Self {
        Self {
            transaction_id: tx
                .transaction_id
                .clone()
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
            consensus_timestamp: format_timestamp(tx.consensus_timestamp.as_ref()),
            name: tx
                .name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
        }
    }
}

/// Render a consensus timestamp as UTC date-time.
///
/// Accepts numbers and `"<seconds>.<nanos>"` strings. Anything that does not
/// parse is shown as sent.
pub fn format_timestamp(timestamp: Option<&ConsensusTimestamp>) -> String {
    let Some(timestamp) = timestamp else {
        return MISSING_VALUE.to_string();
    };

    let parsed = match timestamp {
        ConsensusTimestamp::Numeric(number) => number.as_f64().and_then(split_float_seconds),
        ConsensusTimestamp::Text(text) => parse_seconds_nanos(text),
    };

    match parsed.and_then(|(secs, nanos)| DateTime::from_timestamp(secs, nanos)) {
        Some(datetime) => datetime.format(TIMESTAMP_FORMAT).to_string(),
        None => match timestamp {
            ConsensusTimestamp::Numeric(number) => number.to_string(),
            ConsensusTimestamp::Text(text) if text.is_empty() => MISSING_VALUE.to_string(),
            ConsensusTimestamp::Text(text) => text.clone(),
        },
    }
}

fn split_float_seconds(value: f64) -> Option<(i64, u32)> {
    if !value.is_finite() {
        return None;
    }
    let secs = value.floor();
    let nanos = ((value - secs) * 1e9).round().min(999_999_999.0) as u32;
    Some((secs as i64, nanos))
}

/// Parse `"1700000000.123456789"`; the fractional part may be shorter than 9 digits
fn parse_seconds_nanos(text: &str) -> Option<(i64, u32)> {
    let text = text.trim();
    let (secs, frac) = text.split_once('.').unwrap_or((text, ""));
    if secs.is_empty() || frac.len() > 9 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let negative = secs.starts_with('-');
    let secs: i64 = secs.parse().ok()?;
    let nanos: u32 = if frac.is_empty() {
        0
    } else {
        format!("{:0<9}", frac).parse().ok()?
    };

    // "-1.5" is 1.5 s before the epoch: floor to -2, then +0.5 s
    if negative && nanos > 0 {
        return Some((secs.checked_sub(1)?, 1_000_000_000 - nanos));
    }
    Some((secs, nanos))
}
