//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate a
//! complete rank-overlap significance analysis.
//!
//! ## Overview
//!
//! Workflows tie the `engine` and `core` layers together: they validate the
//! configuration, compute the observed prefix-overlap series, sample the
//! permutation null model, reduce it to summary statistics, derive the
//! theoretical overlap bound, and assemble the final per-threshold report.
//!
//! - **Comparison Workflow** ([`compare`]) - Full significance analysis of two
//!   ranked lists, from loaded rankings to report rows.

pub mod compare;
