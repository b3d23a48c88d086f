//! # Engine Module
//!
//! This module implements the numeric core of rank-overlap significance
//! analysis: the incremental prefix-overlap statistic, the permutation null
//! model it is tested against, and the summary statistics that turn raw
//! trial samples into standardized effect sizes.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Trial count, seeding, and safety caps
//! - **Prefix Overlap** ([`overlap`]) - Incremental Jaccard series over growing prefixes
//! - **Null Model** ([`null_model`]) - Seeded permutation trials, optionally parallel
//! - **Statistics** ([`stats`]) - Per-threshold mean/variance reduction and Z-scores
//! - **Theoretical Bound** ([`bound`]) - Best attainable Jaccard per threshold
//! - **Progress Monitoring** ([`progress`]) - Callback-based trial progress reporting
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! ## Key Capabilities
//!
//! - **O(N) prefix-overlap computation** across all thresholds simultaneously
//! - **Deterministic resampling** from an explicit, injectable seed
//! - **Parallel trial execution** with no shared mutable state across trials
//! - **Numerically careful effect sizes** with explicit handling of degenerate
//!   (zero-variance) null distributions

pub mod bound;
pub mod config;
pub mod error;
pub mod null_model;
pub mod overlap;
pub mod progress;
pub mod stats;
