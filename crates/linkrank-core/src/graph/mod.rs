//! Page corpus, working link graph and HTML link extraction

mod corpus;
mod link_extractor;
mod link_graph;

pub use corpus::Corpus;
pub use link_extractor::{crawl, extract_links};
pub use link_graph::LinkGraph;
