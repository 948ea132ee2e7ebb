//! Tejun - process-model generation from Japanese business-process prose.
//!
//! Free-form procedure descriptions are turned into a BPMN-flavored process
//! model through extraction, assembly, layout, validation, and export stages.
//! Generation is infallible: any input, including the empty string, yields a
//! well-formed model, and structural concerns surface as advisory validation
//! reports rather than errors.

pub mod config;
pub mod export;

mod error;
mod layout;
mod structure;
mod validate;

pub use tejun_core::{geometry, model, validation};
pub use tejun_extract::{Extraction, extract, extract_process_name};

pub use error::TejunError;
pub use layout::LayoutInfo;
pub use structure::PROCESS_ID;
pub use validate::{ValidationRule, validate, validate_definitions, validate_with_rules};

use log::{debug, info, trace};

use tejun_core::model::ProcessModel;
use tejun_core::validation::ValidationReport;

use config::{AppConfig, LayoutConfig};
use export::json::JsonDocument;

/// Builder for generating and rendering process models.
///
/// This provides an API for processing procedure text through the
/// extraction, layout, validation, and export stages.
///
/// # Examples
///
/// ```rust,no_run
/// use tejun::{ModelBuilder, config::AppConfig};
///
/// let text = "申請を受け付ける。内容を確認する。";
///
/// let builder = ModelBuilder::new(AppConfig::default());
/// let model = builder.generate(text);
/// let layout = builder.layout(&model);
///
/// let report = builder.validate(&model);
/// assert!(report.is_valid());
///
/// let xml = builder.to_xml(&model, &layout);
/// println!("{xml}");
/// ```
#[derive(Default)]
pub struct ModelBuilder {
    config: AppConfig,
}

impl ModelBuilder {
    /// Create a new model builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Generate a process model from procedure text.
    ///
    /// This runs extraction and chain assembly. The operation is total:
    /// unrecognizable or empty input falls back to a minimal
    /// start-task-end model rather than failing.
    pub fn generate(&self, text: &str) -> ProcessModel {
        info!(input_chars = text.chars().count(); "Generating process model");

        let extraction = extract(text);
        let model = structure::assemble(extraction);

        debug!(
            elements = model.elements.len(),
            flows = model.flows.len();
            "Process model generated"
        );
        trace!(model:?; "Generated model");

        model
    }

    /// Compute diagram-plane geometry for a model.
    pub fn layout(&self, model: &ProcessModel) -> LayoutInfo {
        layout::layout(model, self.config.layout())
    }

    /// Validate a model's structure.
    ///
    /// The report is advisory: an invalid model still lays out and exports.
    pub fn validate(&self, model: &ProcessModel) -> ValidationReport {
        validate::validate(model)
    }

    /// Serialize a model and its layout to BPMN-flavored XML.
    pub fn to_xml(&self, model: &ProcessModel, layout: &LayoutInfo) -> String {
        export::xml::to_xml(model, layout)
    }

    /// Serialize a model and its layout to the typed JSON document.
    pub fn to_json(&self, model: &ProcessModel, layout: &LayoutInfo) -> JsonDocument {
        export::json::to_json(model, layout)
    }

    /// Render the fixed-size SVG preview for a model.
    pub fn to_svg(&self, model: &ProcessModel) -> String {
        export::svg::to_svg(model, self.config.style())
    }
}

/// Generate a process model from procedure text using default settings.
///
/// Equivalent to [`ModelBuilder::generate`] on a default builder.
pub fn generate_model(text: &str) -> ProcessModel {
    ModelBuilder::default().generate(text)
}

/// Compute diagram-plane geometry for a model with explicit layout constants.
pub fn compute_layout(model: &ProcessModel, config: &LayoutConfig) -> LayoutInfo {
    layout::layout(model, config)
}
