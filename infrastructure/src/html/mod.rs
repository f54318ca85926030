//! HTML adapters
//!
//! Binds the domain's tree-walking parser to `scraper`.

mod extractor;
mod node;

pub use extractor::ScraperBlockExtractor;
pub use node::ScraperNode;
