//! Structural validation issue and report types.
//!
//! Validation in Tejun is advisory: structural defects surface as data in a
//! [`ValidationReport`], never as errors propagated through the pipeline. A
//! defect-laden model still serializes in every format; callers decide what
//! to surface to the end user.

use std::fmt;

use serde::Serialize;

/// Whether an issue invalidates the model or merely advises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Machine-readable issue codes.
///
/// The [`fmt::Display`] form is the stable wire identifier
/// (`SCREAMING_SNAKE_CASE`), referenced by callers by exact string match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    MissingId,
    MissingType,
    NoRootElements,
    NoProcesses,
    DuplicateId,
    UnconnectedFlows,
    CircularReference,
    RuleExecutionError,
    NoStartEvent,
    NoEndEvent,
    OrphanedElements,
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            IssueCode::MissingId => "MISSING_ID",
            IssueCode::MissingType => "MISSING_TYPE",
            IssueCode::NoRootElements => "NO_ROOT_ELEMENTS",
            IssueCode::NoProcesses => "NO_PROCESSES",
            IssueCode::DuplicateId => "DUPLICATE_ID",
            IssueCode::UnconnectedFlows => "UNCONNECTED_FLOWS",
            IssueCode::CircularReference => "CIRCULAR_REFERENCE",
            IssueCode::RuleExecutionError => "RULE_EXECUTION_ERROR",
            IssueCode::NoStartEvent => "NO_START_EVENT",
            IssueCode::NoEndEvent => "NO_END_EVENT",
            IssueCode::OrphanedElements => "ORPHANED_ELEMENTS",
        };
        f.write_str(code)
    }
}

/// A single structural finding: an error or a warning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    pub message: String,
    #[serde(rename = "elementId", skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    #[serde(rename = "elementType", skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
    pub severity: Severity,
}

impl ValidationIssue {
    /// Creates an error-severity issue.
    pub fn error(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            element_id: None,
            element_type: None,
            severity: Severity::Error,
        }
    }

    /// Creates a warning-severity issue.
    pub fn warning(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            element_id: None,
            element_type: None,
            severity: Severity::Warning,
        }
    }

    /// Attaches the id of the offending element.
    pub fn with_element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = Some(id.into());
        self
    }

    /// Attaches the type name of the offending element.
    pub fn with_element_type(mut self, type_name: impl Into<String>) -> Self {
        self.element_type = Some(type_name.into());
        self
    }
}

/// The full outcome of validating one model.
///
/// `errors` mark the model invalid; `warnings` never do. Cycle traces are
/// human-readable paths of the form `"A -> B -> C -> A"`, one per detected
/// back edge, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
    #[serde(rename = "circularReferences")]
    pub circular_references: Vec<String>,
}

impl ValidationReport {
    /// Returns true when no error-severity issue was recorded.
    ///
    /// Warnings never affect validity.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Appends an issue to the matching list by severity.
    pub fn push(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
    }

    /// Appends every issue from the iterator.
    pub fn extend(&mut self, issues: impl IntoIterator<Item = ValidationIssue>) {
        for issue in issues {
            self.push(issue);
        }
    }
}
