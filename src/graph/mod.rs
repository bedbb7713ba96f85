//! Graph construction and representation
//!
//! Builds the sentence similarity graph that TextRank runs on.

pub mod builder;
pub mod csr;
