//! JSON document emission.
//!
//! The JSON output mirrors the XML structure: a definitions root containing
//! one process with a flat ordered list of `$type`-tagged flow-element
//! records (nodes in model order, then flows), plus a diagram section
//! expressing the layout. Field order within each record follows the struct
//! declaration: stable for test reproducibility, not a normative guarantee
//! for consumers.

use serde::Serialize;

use tejun_core::{
    geometry::{Bounds, Point},
    model::ProcessModel,
};

use crate::layout::LayoutInfo;

/// Root of the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonDocument {
    pub definitions: Definitions,
}

/// The `bpmn:Definitions` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Definitions {
    #[serde(rename = "$type")]
    pub element_type: String,
    pub id: String,
    #[serde(rename = "targetNamespace")]
    pub target_namespace: String,
    #[serde(rename = "rootElements")]
    pub root_elements: Vec<Process>,
    pub diagram: Diagram,
}

/// The `bpmn:Process` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Process {
    #[serde(rename = "$type")]
    pub element_type: String,
    pub id: String,
    pub name: String,
    #[serde(rename = "isExecutable")]
    pub is_executable: bool,
    #[serde(rename = "flowElements")]
    pub flow_elements: Vec<FlowElement>,
}

/// One flow-element record, discriminated by its `$type` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FlowElement {
    /// An event, task, or gateway node.
    Node {
        #[serde(rename = "$type")]
        element_type: String,
        id: String,
        name: String,
    },
    /// A sequence flow.
    Flow {
        #[serde(rename = "$type")]
        element_type: String,
        id: String,
        #[serde(rename = "sourceRef")]
        source_ref: String,
        #[serde(rename = "targetRef")]
        target_ref: String,
    },
}

impl FlowElement {
    /// Returns the record's id regardless of variant.
    pub fn id(&self) -> &str {
        match self {
            FlowElement::Node { id, .. } | FlowElement::Flow { id, .. } => id,
        }
    }
}

/// The diagram section mirroring the XML `bpmndi:` records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram {
    pub id: String,
    pub shapes: Vec<ShapeRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// Geometry for one node, referencing it by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeRecord {
    pub id: String,
    #[serde(rename = "bpmnElement")]
    pub element: String,
    pub bounds: Bounds,
}

/// Waypoints for one flow, referencing it by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRecord {
    pub id: String,
    #[serde(rename = "bpmnElement")]
    pub element: String,
    pub waypoints: Vec<Point>,
}

/// Serializes a model and its layout into the typed JSON document.
pub fn to_json(model: &ProcessModel, layout: &LayoutInfo) -> JsonDocument {
    let mut flow_elements: Vec<FlowElement> =
        Vec::with_capacity(model.elements.len() + model.flows.len());

    for element in &model.elements {
        flow_elements.push(FlowElement::Node {
            element_type: element.kind.type_name().to_string(),
            id: element.id.clone(),
            name: element.name.clone(),
        });
    }
    for flow in &model.flows {
        flow_elements.push(FlowElement::Flow {
            element_type: "bpmn:SequenceFlow".to_string(),
            id: flow.id.clone(),
            source_ref: flow.source_ref.clone(),
            target_ref: flow.target_ref.clone(),
        });
    }

    let shapes = layout
        .shapes()
        .map(|(id, bounds)| ShapeRecord {
            id: format!("BPMNShape_{id}"),
            element: id.to_string(),
            bounds,
        })
        .collect();

    let edges = layout
        .edges()
        .map(|(id, waypoints)| EdgeRecord {
            id: format!("BPMNEdge_{id}"),
            element: id.to_string(),
            waypoints: waypoints.to_vec(),
        })
        .collect();

    JsonDocument {
        definitions: Definitions {
            element_type: "bpmn:Definitions".to_string(),
            id: "Definitions_1".to_string(),
            target_namespace: "http://bpmn.io/schema/bpmn".to_string(),
            root_elements: vec![Process {
                element_type: "bpmn:Process".to_string(),
                id: model.process_id.clone(),
                name: model.process_name.clone(),
                is_executable: false,
                flow_elements,
            }],
            diagram: Diagram {
                id: "BPMNDiagram_1".to_string(),
                shapes,
                edges,
            },
        },
    }
}

/// Renders the document as pretty-printed JSON text.
///
/// # Errors
///
/// Returns [`ExportError::Json`](super::ExportError::Json) if serialization
/// fails; this cannot happen for documents produced by [`to_json`].
pub fn to_json_string(document: &JsonDocument) -> Result<String, super::ExportError> {
    Ok(serde_json::to_string_pretty(document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout;
    use tejun_core::model::{Element, ElementKind, Flow, TaskKind};

    fn chain_model() -> ProcessModel {
        ProcessModel {
            process_id: "process_1".to_string(),
            process_name: "申請プロセス".to_string(),
            elements: vec![
                Element::new("start_1", "受付", ElementKind::StartEvent),
                Element::new("task_1", "確認", ElementKind::Task(TaskKind::User)),
                Element::new("end_1", "通知", ElementKind::EndEvent),
            ],
            flows: vec![
                Flow::new("flow_1", "start_1", "task_1"),
                Flow::new("flow_2", "task_1", "end_1"),
            ],
        }
    }

    #[test]
    fn document_nests_definitions_process_and_flow_elements() {
        let model = chain_model();
        let info = layout::layout(&model, &LayoutConfig::default());
        let document = to_json(&model, &info);

        let definitions = &document.definitions;
        assert_eq!(definitions.element_type, "bpmn:Definitions");
        assert_eq!(definitions.root_elements.len(), 1);

        let process = &definitions.root_elements[0];
        assert_eq!(process.id, "process_1");
        assert_eq!(process.name, "申請プロセス");
        assert!(!process.is_executable);

        // Nodes in model order, then flows.
        let ids: Vec<&str> = process.flow_elements.iter().map(FlowElement::id).collect();
        assert_eq!(ids, ["start_1", "task_1", "end_1", "flow_1", "flow_2"]);
    }

    #[test]
    fn type_discriminators_follow_element_kinds() {
        let model = chain_model();
        let info = layout::layout(&model, &LayoutConfig::default());
        let document = to_json(&model, &info);
        let process = &document.definitions.root_elements[0];

        match &process.flow_elements[1] {
            FlowElement::Node { element_type, .. } => {
                assert_eq!(element_type, "bpmn:UserTask");
            }
            FlowElement::Flow { .. } => panic!("expected a node record"),
        }
        match &process.flow_elements[3] {
            FlowElement::Flow {
                element_type,
                source_ref,
                ..
            } => {
                assert_eq!(element_type, "bpmn:SequenceFlow");
                assert_eq!(source_ref, "start_1");
            }
            FlowElement::Node { .. } => panic!("expected a flow record"),
        }
    }

    #[test]
    fn serialized_text_uses_dollar_type_and_camel_case_keys() {
        let model = chain_model();
        let info = layout::layout(&model, &LayoutConfig::default());
        let text = to_json_string(&to_json(&model, &info)).unwrap();

        assert!(text.contains(r#""$type": "bpmn:StartEvent""#));
        assert!(text.contains(r#""sourceRef": "start_1""#));
        assert!(text.contains(r#""targetNamespace": "http://bpmn.io/schema/bpmn""#));
        assert!(text.contains(r#""bpmnElement": "flow_1""#));
    }

    #[test]
    fn diagram_section_carries_layout_geometry() {
        let model = chain_model();
        let info = layout::layout(&model, &LayoutConfig::default());
        let document = to_json(&model, &info);
        let diagram = &document.definitions.diagram;

        assert_eq!(diagram.shapes.len(), 3);
        assert_eq!(diagram.edges.len(), 2);
        assert_eq!(diagram.shapes[0].element, "start_1");
        assert_eq!(diagram.shapes[0].bounds.x(), 100.0);
        assert_eq!(diagram.edges[0].waypoints.len(), 2);
    }
}
