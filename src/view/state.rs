/// Client view state
///
/// `ViewState` is an immutable value. Every transition consumes the current
/// state and returns the next one; the filtered table is derived from a state
/// on demand and never stored. The transaction list sits behind an `Arc`, so
/// transitions that do not touch data (typing a search term, toggling the
/// theme) share the same list.
///
/// Each fetch is issued with a [`FetchTicket`]. Only the result carrying the
/// ticket of the most recently issued fetch is applied; anything older is
/// stale and dropped, whatever order responses arrive in.
use std::sync::Arc;

use super::filter::filter_transactions;
use super::format::TransactionRow;
use crate::apis::mirror_node::Transaction;
use crate::errors::ViewError;

/// Sequence number of an issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// What a fetch asks the proxy for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchScope {
    All,
    Account(String),
}

impl FetchScope {
    pub fn account_id(&self) -> Option<&str> {
        match self {
            FetchScope::All => None,
            FetchScope::Account(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingFetch {
    ticket: FetchTicket,
    scope: FetchScope,
}

/// What the page body shows for a state: exactly one of these
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBody {
    Loading,
    NoData,
    Table(Vec<TransactionRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    transactions: Arc<Vec<Transaction>>,
    search_term: String,
    error: Option<ViewError>,
    dark_mode: bool,
    account_id: Option<String>,
    pending: Option<PendingFetch>,
    issued: u64,
}

impl ViewState {
    /// Empty, idle state. Call [`ViewState::begin_fetch`] for the initial load.
    pub fn new(dark_mode: bool) -> Self {
        Self {
            transactions: Arc::new(Vec::new()),
            search_term: String::new(),
            error: None,
            dark_mode,
            account_id: None,
            pending: None,
            issued: 0,
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Issue a new fetch. Any fetch still in flight becomes stale.
    pub fn begin_fetch(self, scope: FetchScope) -> (Self, FetchTicket) {
        let ticket = FetchTicket(self.issued + 1);
        let next = Self {
            error: None,
            pending: Some(PendingFetch { ticket, scope }),
            issued: ticket.0,
            ..self
        };
        (next, ticket)
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// - stale ticket: state returned unchanged
    /// - success: list replaced; a scoped fetch connects the session to its account,
    ///   an unscoped one disconnects it
    /// - failure of an unscoped fetch: error set, previous list kept
    /// - failure of a scoped fetch: error set, list cleared, session disconnected
    pub fn apply_fetch_result(
        self,
        ticket: FetchTicket,
        result: Result<Vec<Transaction>, ViewError>,
    ) -> Self {
        let scope = match &self.pending {
            Some(pending) if pending.ticket == ticket => pending.scope.clone(),
            _ => return self,
        };

        match (result, scope) {
            (Ok(transactions), scope) => Self {
                transactions: Arc::new(transactions),
                error: None,
                account_id: scope.account_id().map(str::to_string),
                pending: None,
                ..self
            },
            (Err(err), FetchScope::All) => Self {
                error: Some(err),
                pending: None,
                ..self
            },
            (Err(err), FetchScope::Account(_)) => Self {
                transactions: Arc::new(Vec::new()),
                error: Some(err),
                account_id: None,
                pending: None,
                ..self
            },
        }
    }

    pub fn with_search_term(self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..self
        }
    }

    pub fn toggle_dark_mode(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self
        }
    }

    /// Drop the account scope. Results stay until the next fetch replaces them.
    pub fn disconnect(self) -> Self {
        Self {
            account_id: None,
            ..self
        }
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// Records matching the current search term
    pub fn filtered(&self) -> Vec<&Transaction> {
        filter_transactions(&self.transactions, &self.search_term)
    }

    /// Page body for this state
    pub fn body(&self) -> ViewBody {
        if self.is_loading() {
            return ViewBody::Loading;
        }

        let rows: Vec<TransactionRow> = self
            .filtered()
            .into_iter()
            .map(TransactionRow::from)
            .collect();

        if rows.is_empty() {
            ViewBody::NoData
        } else {
            ViewBody::Table(rows)
        }
    }

    /// Scope to use for a plain reload: the connected account, if any
    pub fn reload_scope(&self) -> FetchScope {
        match &self.account_id {
            Some(id) => FetchScope::Account(id.clone()),
            None => FetchScope::All,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.account_id.is_some()
    }

    /// Ticket of the fetch whose result will be accepted next
    pub fn pending_ticket(&self) -> Option<FetchTicket> {
        self.pending.as_ref().map(|p| p.ticket)
    }
}
