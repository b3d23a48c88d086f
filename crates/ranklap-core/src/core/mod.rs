//! # Core Module
//!
//! This module provides the fundamental data structures and text I/O for
//! rank-overlap analysis, serving as the stateless foundation of the library.
//!
//! ## Overview
//!
//! Rank-overlap analysis consumes ordered lists of entity identifiers produced
//! by upstream scoring tools and emits a per-threshold significance table. The
//! core module owns both ends of that pipe: parsing ranked identifier lists
//! from positional text files and serializing the finished report.
//!
//! ## Architecture
//!
//! - **Ranked Lists** ([`ranking`]) - The `RankedList` model and its loader
//! - **Report Output** ([`report`]) - `ReportRow` and the plain/delimited writers

pub mod ranking;
pub mod report;
