//! Flow assembly: from extracted candidates to a connected process model.
//!
//! The assembler concatenates the extracted categories in fixed order
//! (start events, tasks, gateways, end events) and threads one sequence
//! flow between each adjacent pair. The result is always a single linear
//! chain; detected gateways do not fan out into branch/merge topology.
//! Downstream consumers depend on this simple shape; see DESIGN.md for the
//! open question on branching assembly.

use log::debug;

use tejun_core::model::{Flow, ProcessModel};
use tejun_extract::Extraction;

/// Stable process id assigned to every generated model.
pub const PROCESS_ID: &str = "process_1";

/// Assembles extracted elements into an ordered, connected process model.
///
/// A sequence of N elements yields exactly N−1 flows; `flow_1` connects
/// element 0 to element 1, and so on. Infallible: the extractor's fallback
/// policy guarantees a non-empty element sequence.
pub fn assemble(extraction: Extraction) -> ProcessModel {
    let Extraction {
        process_name,
        elements,
    } = extraction;

    let ordered = elements.into_ordered();

    let flows: Vec<Flow> = ordered
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            Flow::new(
                format!("flow_{}", index + 1),
                pair[0].id.clone(),
                pair[1].id.clone(),
            )
        })
        .collect();

    debug!(
        element_count = ordered.len(),
        flow_count = flows.len();
        "Model assembled"
    );

    ProcessModel {
        process_id: PROCESS_ID.to_string(),
        process_name,
        elements: ordered,
        flows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tejun_core::model::{Element, ElementKind, ElementSet, TaskKind};
    use tejun_extract::Extraction;

    fn extraction_with(elements: ElementSet) -> Extraction {
        Extraction {
            process_name: "テストプロセス".to_string(),
            elements,
        }
    }

    #[test]
    fn flow_count_is_element_count_minus_one() {
        let model = assemble(extraction_with(ElementSet {
            start_events: vec![Element::new("start_1", "開始", ElementKind::StartEvent)],
            tasks: vec![
                Element::new("task_1", "確認", ElementKind::Task(TaskKind::User)),
                Element::new("task_2", "登録", ElementKind::Task(TaskKind::User)),
                Element::new("task_3", "送信", ElementKind::Task(TaskKind::User)),
            ],
            gateways: vec![],
            end_events: vec![Element::new("end_1", "完了", ElementKind::EndEvent)],
        }));

        assert_eq!(model.elements.len(), 5);
        assert_eq!(model.flows.len(), 4);
    }

    #[test]
    fn flows_connect_the_assembled_sequence_in_order() {
        let model = assemble(extraction_with(ElementSet {
            start_events: vec![Element::new("start_1", "開始", ElementKind::StartEvent)],
            tasks: vec![Element::new("task_1", "確認", ElementKind::Task(TaskKind::User))],
            gateways: vec![],
            end_events: vec![Element::new("end_1", "完了", ElementKind::EndEvent)],
        }));

        assert_eq!(model.process_id, "process_1");
        assert_eq!(model.flows.len(), 2);

        assert_eq!(model.flows[0].id, "flow_1");
        assert_eq!(model.flows[0].source_ref, "start_1");
        assert_eq!(model.flows[0].target_ref, "task_1");

        assert_eq!(model.flows[1].id, "flow_2");
        assert_eq!(model.flows[1].source_ref, "task_1");
        assert_eq!(model.flows[1].target_ref, "end_1");
    }

    #[test]
    fn single_element_model_has_no_flows() {
        let model = assemble(extraction_with(ElementSet {
            start_events: vec![Element::new("start_1", "開始", ElementKind::StartEvent)],
            tasks: vec![],
            gateways: vec![],
            end_events: vec![],
        }));

        assert_eq!(model.elements.len(), 1);
        assert!(model.flows.is_empty());
    }

    #[test]
    fn gateways_are_threaded_into_the_linear_chain() {
        // Gateways sit between tasks and end events in the chain; no
        // branching is created.
        let model = assemble(extraction_with(ElementSet {
            start_events: vec![Element::new("start_1", "開始", ElementKind::StartEvent)],
            tasks: vec![Element::new("task_1", "確認", ElementKind::Task(TaskKind::User))],
            gateways: vec![Element::new(
                "gateway_1",
                "判定",
                ElementKind::Gateway(tejun_core::model::GatewayKind::Exclusive),
            )],
            end_events: vec![Element::new("end_1", "完了", ElementKind::EndEvent)],
        }));

        let ids: Vec<&str> = model.elements.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["start_1", "task_1", "gateway_1", "end_1"]);
        assert_eq!(model.flows.len(), 3);
        assert_eq!(model.flows[1].source_ref, "task_1");
        assert_eq!(model.flows[1].target_ref, "gateway_1");
    }
}
