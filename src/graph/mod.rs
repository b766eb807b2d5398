//! Word graph construction and representation
//!
//! [`builder::WordGraph`] accumulates vertices and neighbor statistics from a
//! token stream, [`csr::RankGraph`] is the compact weighted view used for rank
//! propagation, and [`edge::WordEdge`] scores strict neighbor pairs.

pub mod builder;
pub mod csr;
pub mod edge;
pub mod vertex;
