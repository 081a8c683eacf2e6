//! Client view: immutable state, pure filtering, rendering
//!
//! The same [`ViewState`] backs the server-rendered browser page and the
//! interactive terminal session.

pub mod filter;
pub mod format;
pub mod proxy_client;
pub mod session;
pub mod state;
pub mod terminal;

pub use filter::{filter_transactions, SearchQuery};
pub use format::{
    format_timestamp, TransactionRow, LOADING_TEXT, MISSING_VALUE, NO_DATA_TEXT, TITLE, UNKNOWN_TYPE,
};
pub use proxy_client::ProxyClient;
pub use state::{FetchScope, FetchTicket, ViewBody, ViewState};
pub use terminal::{render, RenderOptions};
