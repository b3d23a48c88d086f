//! # RankLap Core Library
//!
//! A numeric engine for quantifying the agreement between two independently
//! ranked lists of entities (typically network nodes ordered by importance
//! score from two different scoring methods) and testing that agreement for
//! statistical significance against a random-permutation null model.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`RankedList`,
//!   `ReportRow`) and the text I/O used to load rankings and emit result tables.
//!
//! - **[`engine`]: The Logic Core.** Implements the incremental prefix-overlap
//!   calculator, the permutation-based null-model sampler, the statistical
//!   summarizer, and the theoretical maximum-overlap bound, together with
//!   configuration, progress reporting, and error types.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It
//!   ties the `engine` and `core` together to execute a complete comparison of
//!   two rankings, producing one report row per prefix length.

pub mod core;
pub mod engine;
pub mod workflows;
