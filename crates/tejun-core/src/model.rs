//! Process-model element and flow types.
//!
//! These types form the semantic representation of a business process after
//! extraction and assembly.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text (Japanese prose)
//!     ↓ extract (tejun-extract)
//! ElementSet — typed candidates grouped by category
//!     ↓ assemble
//! ProcessModel (these types) — ordered elements plus sequence flows
//!     ↓ layout
//! LayoutInfo — bounding boxes and waypoints
//!     ↓ export
//! XML / JSON / SVG / ASCII
//! ```
//!
//! A [`ProcessModel`] is created fresh per generation call and is treated as
//! immutable once assembled: layout, validation, and export all operate as
//! pure functions over it.

use serde::Serialize;

/// Task subtype, mirroring the BPMN task taxonomy.
///
/// Extraction currently only produces user tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaskKind {
    /// A task performed by a person (`bpmn:userTask`).
    User,
}

/// Gateway subtype, mirroring the BPMN gateway taxonomy.
///
/// Extraction currently only produces exclusive gateways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GatewayKind {
    /// An exclusive (XOR) decision point (`bpmn:exclusiveGateway`).
    Exclusive,
}

/// The category of a process-model node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ElementKind {
    StartEvent,
    EndEvent,
    Task(TaskKind),
    Gateway(GatewayKind),
}

impl ElementKind {
    /// Returns the XML element tag for this kind, e.g. `bpmn:startEvent`.
    pub fn xml_tag(self) -> &'static str {
        match self {
            ElementKind::StartEvent => "bpmn:startEvent",
            ElementKind::EndEvent => "bpmn:endEvent",
            ElementKind::Task(TaskKind::User) => "bpmn:userTask",
            ElementKind::Gateway(GatewayKind::Exclusive) => "bpmn:exclusiveGateway",
        }
    }

    /// Returns the `$type` discriminator for this kind, e.g. `bpmn:StartEvent`.
    pub fn type_name(self) -> &'static str {
        match self {
            ElementKind::StartEvent => "bpmn:StartEvent",
            ElementKind::EndEvent => "bpmn:EndEvent",
            ElementKind::Task(TaskKind::User) => "bpmn:UserTask",
            ElementKind::Gateway(GatewayKind::Exclusive) => "bpmn:ExclusiveGateway",
        }
    }

}

/// A typed node in the process graph.
///
/// Ids follow the `{category}_{1-based-index}` convention (`start_1`,
/// `task_2`, …) and are unique within one model. The name is never empty:
/// extraction substitutes a category default before building an element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub id: String,
    pub name: String,
    pub kind: ElementKind,
}

impl Element {
    /// Creates a new element.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

/// A directed sequence flow connecting two elements.
///
/// `source_ref` and `target_ref` reference element ids in the same model.
/// The assembler never produces self-loops or dangling references; both are
/// validator concerns for hand-built models.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flow {
    pub id: String,
    pub source_ref: String,
    pub target_ref: String,
}

impl Flow {
    /// Creates a new flow.
    pub fn new(
        id: impl Into<String>,
        source_ref: impl Into<String>,
        target_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_ref: source_ref.into(),
            target_ref: target_ref.into(),
        }
    }
}

/// Extracted element candidates, grouped by category.
///
/// Category vectors preserve extraction order (left-to-right match order,
/// rule declaration order across rules). Categories are independent,
/// non-exclusive passes over the same text: the same phrase may appear both
/// as a task and as a gateway.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementSet {
    pub start_events: Vec<Element>,
    pub tasks: Vec<Element>,
    pub gateways: Vec<Element>,
    pub end_events: Vec<Element>,
}

impl ElementSet {
    /// Returns per-category element counts.
    pub fn counts(&self) -> ElementCounts {
        ElementCounts {
            start_events: self.start_events.len(),
            tasks: self.tasks.len(),
            gateways: self.gateways.len(),
            end_events: self.end_events.len(),
        }
    }

    /// Returns the total number of elements across all categories.
    pub fn len(&self) -> usize {
        self.start_events.len() + self.tasks.len() + self.gateways.len() + self.end_events.len()
    }

    /// Returns true when no category holds any element.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the set and returns all elements in assembly order:
    /// start events, tasks, gateways, end events.
    pub fn into_ordered(self) -> Vec<Element> {
        let mut ordered = Vec::with_capacity(self.len());
        ordered.extend(self.start_events);
        ordered.extend(self.tasks);
        ordered.extend(self.gateways);
        ordered.extend(self.end_events);
        ordered
    }
}

/// Per-category element counts, as reported to callers alongside a model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ElementCounts {
    #[serde(rename = "startEvents")]
    pub start_events: usize,
    pub tasks: usize,
    pub gateways: usize,
    #[serde(rename = "endEvents")]
    pub end_events: usize,
}

impl ElementCounts {
    /// Returns the total number of elements.
    pub fn total(self) -> usize {
        self.start_events + self.tasks + self.gateways + self.end_events
    }
}

/// The aggregate process model: one process identity, its ordered elements,
/// and the sequence flows connecting them.
///
/// Element order is semantically significant: layout places elements
/// left-to-right in this exact order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessModel {
    pub process_id: String,
    pub process_name: String,
    pub elements: Vec<Element>,
    pub flows: Vec<Flow>,
}

impl ProcessModel {
    /// Looks up an element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    /// Returns true if any element of the given kind is present.
    pub fn has_kind(&self, kind: ElementKind) -> bool {
        self.elements.iter().any(|element| element.kind == kind)
    }

    /// Returns the first element of the given kind, if any.
    pub fn first_of_kind(&self, kind: ElementKind) -> Option<&Element> {
        self.elements.iter().find(|element| element.kind == kind)
    }
}
