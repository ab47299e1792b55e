//! Built-in tools: single-URL article fetching and web search.

mod fetch;
mod search;

pub use fetch::FetchTool;
pub use search::SearchTool;
