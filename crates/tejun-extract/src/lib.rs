//! Pattern-rule extraction for the Tejun pipeline.
//!
//! This crate turns free-form Japanese business-process prose into typed
//! process-model element candidates. Extraction is deliberately shallow: an
//! ordered table of regular-expression rules per element category, scanned
//! left-to-right over the input, with deterministic fallback defaults when a
//! category finds nothing. There is no semantic parsing and no failure mode;
//! [`extract`] always returns a usable element set, even for empty input.
//!
//! # Categories
//!
//! Four independent rule categories run over the same text: start events,
//! tasks, gateways, and end events. Categories are non-exclusive: a phrase
//! like 「承認されたかどうか確認する」 may legitimately produce both a task
//! (確認) and a gateway (かどうか) candidate. This double counting is part of
//! the observable contract, not an accident.

pub mod rules;

mod extractor;

#[cfg(test)]
mod extractor_tests;

pub use extractor::{Extraction, extract, extract_process_name};
