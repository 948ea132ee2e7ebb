//! Tejun Core Types and Definitions
//!
//! This crate provides the foundational types for the Tejun process-model
//! pipeline. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Model**: Process-model elements, flows, and the aggregate
//!   [`model::ProcessModel`]
//! - **Validation**: Structural issue and report types ([`validation`] module)

pub mod geometry;
pub mod model;
pub mod validation;
