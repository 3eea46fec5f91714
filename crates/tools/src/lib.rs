//! Lexsight Tools
//!
//! The two domain tools registered with the dispatch graph, and the
//! news-search capability the tone tool consumes:
//!
//! - `summarize` - plain-language law summarization (`SummarizeTool`)
//! - `tone` - media-tone analysis over news coverage (`ToneTool`)
//! - `search` - pluggable news search (`NewsSearch`, `SerpApiNews`)
//!
//! Tools receive their capability handles (chat model, search provider)
//! through constructors, so every tool is testable against stubs.

pub mod search;
pub mod summarize;
pub mod tone;

pub use search::{NewsArticle, NewsSearch, SearchError, SerpApiNews};
pub use summarize::SummarizeTool;
pub use tone::ToneTool;
