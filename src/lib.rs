pub mod apis; // Upstream mirror node client
pub mod arguments;
pub mod config;
pub mod errors;
pub mod logger;
pub mod view; // Client view state, filtering and terminal rendering
pub mod webserver;

#[cfg(test)]
pub(crate) mod testing;
