//! Temporal coverage engine for guard service scheduling.
//!
//! This crate answers "what is covered, by whom, and where are the gaps" for
//! a calendar day of guard shifts: it merges shift intervals into coverage
//! blocks, detects uncovered time inside a service's nominal daily window,
//! builds calendar day grids, and indexes shifts by guard or property and
//! local date for calendar cell lookups.

#![warn(missing_docs)]

pub mod config;
pub mod coverage;
pub mod error;
pub mod models;
