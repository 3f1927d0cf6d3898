//! Custom Search JSON API access: request building, response types, and failure classification.

pub(crate) mod client;
mod lang;
pub(crate) mod types;

pub use lang::Lang;
