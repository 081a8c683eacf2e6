/// Query parameters accepted by the routes

use serde::Deserialize;

/// `GET /api/transactions?accountId=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionsQuery {
    #[serde(rename = "accountId", default)]
    pub account_id: Option<String>,
}

impl TransactionsQuery {
    /// Account to scope to. An empty `accountId=` counts as absent.
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// `GET /?q=...&accountId=...&theme=light|dark`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub q: Option<String>,

    #[serde(rename = "accountId", default)]
    pub account_id: Option<String>,

    #[serde(default)]
    pub theme: Option<String>,
}

impl PageQuery {
    pub fn account_id(&self) -> Option<&str> {
        self.account_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Requested theme, falling back to `default_dark` when absent or unrecognized
    pub fn dark_mode(&self, default_dark: bool) -> bool {
        match self.theme.as_deref() {
            Some("dark") => true,
            Some("light") => false,
            _ => default_dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_account_counts_as_absent() {
        let query = TransactionsQuery {
            account_id: Some(String::new()),
        };
        assert_eq!(query.account_id(), None);
    }

    #[test]
    fn test_theme_parsing() {
        let query = PageQuery {
            theme: Some("light".into()),
            ..PageQuery::default()
        };
        assert!(!query.dark_mode(true));
        assert!(PageQuery::default().dark_mode(true));
        assert!(!PageQuery::default().dark_mode(false));
    }
}
