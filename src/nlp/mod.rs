//! Natural language collaborators
//!
//! Tokenization and tagging happen upstream; this module only provides
//! stop-word filtering for the keyword pool.

pub mod stopwords;
