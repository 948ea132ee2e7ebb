//! Structural validation of process models.
//!
//! Validation is advisory: it reports defects, it never blocks
//! serialization. All checks run on every call, with no short-circuiting,
//! and the output is deterministic: identical models
//! produce identical error/warning lists and identical cycle traces, in the
//! same order (traversal order = adjacency insertion order = flow
//! declaration order).

use std::collections::HashSet;

use indexmap::IndexMap;
use log::debug;

use tejun_core::{
    model::{ElementKind, ProcessModel},
    validation::{IssueCode, ValidationIssue, ValidationReport},
};

use crate::export::json::{Definitions, FlowElement, JsonDocument};

/// Validates a process model against its structural invariants.
///
/// Checks, in order: element/flow id presence, start/end event presence,
/// orphaned elements, dangling flow references, duplicate ids (elements and
/// flows share one namespace), and cycles via depth-first traversal.
///
/// # Examples
///
/// ```
/// use tejun_core::model::{Element, ElementKind, Flow, ProcessModel};
///
/// let model = ProcessModel {
///     process_id: "process_1".into(),
///     process_name: "申請プロセス".into(),
///     elements: vec![
///         Element::new("start_1", "受付", ElementKind::StartEvent),
///         Element::new("end_1", "完了", ElementKind::EndEvent),
///     ],
///     flows: vec![Flow::new("flow_1", "start_1", "end_1")],
/// };
///
/// let report = tejun::validate(&model);
/// assert!(report.is_valid());
/// assert!(report.warnings.is_empty());
/// ```
pub fn validate(model: &ProcessModel) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_ids_present(model, &mut report);
    check_terminal_events(model, &mut report);
    check_orphans(model, &mut report);
    check_dangling_flows(model, &mut report);
    check_duplicate_ids(model, &mut report);
    check_cycles(model, &mut report);

    debug!(
        error_count = report.errors.len(),
        warning_count = report.warnings.len(),
        is_valid = report.is_valid();
        "Validation finished"
    );

    report
}

fn check_ids_present(model: &ProcessModel, report: &mut ValidationReport) {
    for element in &model.elements {
        if element.id.is_empty() {
            report.push(
                ValidationIssue::error(IssueCode::MissingId, "要素にIDが必要です")
                    .with_element_type(element.kind.type_name()),
            );
        }
    }
    for flow in &model.flows {
        if flow.id.is_empty() {
            report.push(
                ValidationIssue::error(IssueCode::MissingId, "要素にIDが必要です")
                    .with_element_type("bpmn:SequenceFlow"),
            );
        }
    }
}

fn check_terminal_events(model: &ProcessModel, report: &mut ValidationReport) {
    if !model.has_kind(ElementKind::StartEvent) {
        report.push(
            ValidationIssue::warning(
                IssueCode::NoStartEvent,
                "プロセスに開始イベントがありません",
            )
            .with_element_id(model.process_id.as_str()),
        );
    }
    if !model.has_kind(ElementKind::EndEvent) {
        report.push(
            ValidationIssue::warning(IssueCode::NoEndEvent, "プロセスに終了イベントがありません")
                .with_element_id(model.process_id.as_str()),
        );
    }
}

/// One aggregated warning when any element is referenced by no flow at all.
fn check_orphans(model: &ProcessModel, report: &mut ValidationReport) {
    let connected: HashSet<&str> = model
        .flows
        .iter()
        .flat_map(|flow| [flow.source_ref.as_str(), flow.target_ref.as_str()])
        .collect();

    let has_orphans = model
        .elements
        .iter()
        .any(|element| !connected.contains(element.id.as_str()));

    if has_orphans {
        report.push(
            ValidationIssue::warning(IssueCode::OrphanedElements, "接続されていない要素があります")
                .with_element_id(model.process_id.as_str()),
        );
    }
}

/// One aggregated error when any flow references a nonexistent element id.
fn check_dangling_flows(model: &ProcessModel, report: &mut ValidationReport) {
    let element_ids: HashSet<&str> = model
        .elements
        .iter()
        .map(|element| element.id.as_str())
        .collect();

    let has_dangling = model.flows.iter().any(|flow| {
        !element_ids.contains(flow.source_ref.as_str())
            || !element_ids.contains(flow.target_ref.as_str())
    });

    if has_dangling {
        report.push(
            ValidationIssue::error(
                IssueCode::UnconnectedFlows,
                "存在しない要素を参照するフローがあります",
            )
            .with_element_id(model.process_id.as_str()),
        );
    }
}

/// Elements and flows share one id namespace; the first occurrence of an id
/// is exempt, each repeat is flagged.
fn check_duplicate_ids(model: &ProcessModel, report: &mut ValidationReport) {
    let mut seen: HashSet<&str> = HashSet::new();

    let all_ids = model
        .elements
        .iter()
        .map(|element| element.id.as_str())
        .chain(model.flows.iter().map(|flow| flow.id.as_str()));

    for id in all_ids {
        if id.is_empty() {
            continue;
        }
        if !seen.insert(id) {
            report.push(
                ValidationIssue::error(
                    IssueCode::DuplicateId,
                    format!("重複したID \"{id}\" が検出されました"),
                )
                .with_element_id(id),
            );
        }
    }
}

fn check_cycles(model: &ProcessModel, report: &mut ValidationReport) {
    let edges = model
        .flows
        .iter()
        .map(|flow| (flow.source_ref.as_str(), flow.target_ref.as_str()));

    for cycle in detect_circular_references(edges) {
        report.push(
            ValidationIssue::error(
                IssueCode::CircularReference,
                format!("循環参照が検出されました: {cycle}"),
            )
            .with_element_id(model.process_id.as_str()),
        );
        report.circular_references.push(cycle);
    }
}

/// Detects cycles in a directed edge list via depth-first traversal.
///
/// The adjacency map is built in edge declaration order, roots are explored
/// in insertion order, and each back edge yields one trace of the form
/// `"A -> B -> C -> A"`. Exploration of a root stops at its first cycle;
/// traversal then continues from the next unvisited root, so independent
/// cycles are all found and the output order is deterministic.
pub(crate) fn detect_circular_references<'a>(
    edges: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Vec<String> {
    let mut graph: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for (source, target) in edges {
        graph.entry(source).or_default().push(target);
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: HashSet<&str> = HashSet::new();
    let mut cycles = Vec::new();

    fn dfs<'a>(
        node: &'a str,
        path: &mut Vec<&'a str>,
        graph: &IndexMap<&'a str, Vec<&'a str>>,
        visited: &mut HashSet<&'a str>,
        stack: &mut HashSet<&'a str>,
        cycles: &mut Vec<String>,
    ) -> bool {
        if stack.contains(node) {
            let mut trace = path.join(" -> ");
            trace.push_str(" -> ");
            trace.push_str(node);
            cycles.push(trace);
            return true;
        }
        if visited.contains(node) {
            return false;
        }

        visited.insert(node);
        stack.insert(node);

        if let Some(neighbors) = graph.get(node) {
            for &neighbor in neighbors {
                path.push(node);
                let found = dfs(neighbor, path, graph, visited, stack, cycles);
                path.pop();
                if found {
                    return true;
                }
            }
        }

        stack.remove(node);
        false
    }

    let roots: Vec<&str> = graph.keys().copied().collect();
    for root in roots {
        if !visited.contains(root) {
            let mut path = Vec::new();
            dfs(root, &mut path, &graph, &mut visited, &mut stack, &mut cycles);
            stack.clear();
        }
    }

    cycles
}

/// A pluggable validation rule run against a process model.
///
/// Rules report findings as data; an internal rule failure is returned as
/// `Err` and converted by [`validate_with_rules`] into a single
/// `RULE_EXECUTION_ERROR` issue rather than aborting the remaining rules.
pub trait ValidationRule {
    /// Human-readable rule name, used in execution-error messages.
    fn name(&self) -> &str;

    /// Checks the model, returning any findings.
    ///
    /// # Errors
    ///
    /// Returns an error when the rule itself cannot run; the failure is
    /// reported as a `RULE_EXECUTION_ERROR` finding, not propagated.
    fn check(
        &self,
        model: &ProcessModel,
    ) -> Result<Vec<ValidationIssue>, Box<dyn std::error::Error>>;
}

/// Runs custom validation rules against a model.
///
/// Every rule runs; a failing rule contributes one `RULE_EXECUTION_ERROR`
/// finding carrying the original failure message.
pub fn validate_with_rules(
    model: &ProcessModel,
    rules: &[Box<dyn ValidationRule>],
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for rule in rules {
        match rule.check(model) {
            Ok(findings) => issues.extend(findings),
            Err(err) => issues.push(ValidationIssue::error(
                IssueCode::RuleExecutionError,
                format!(
                    "検証ルール \"{}\" の実行中にエラーが発生しました: {err}",
                    rule.name()
                ),
            )),
        }
    }

    issues
}

/// Validates an exported JSON document at the definitions level.
///
/// This is the document-shaped entry point: it checks that the definitions
/// record itself carries an id and a `$type`, that root elements exist
/// (`NO_ROOT_ELEMENTS`), that at least one process is present
/// (`NO_PROCESSES`), and then applies the structural checks to each
/// process's flow-element records, including records whose `$type`
/// discriminator is empty (`MISSING_TYPE`).
pub fn validate_definitions(document: &JsonDocument) -> ValidationReport {
    let mut report = ValidationReport::default();
    let definitions: &Definitions = &document.definitions;

    if definitions.id.is_empty() {
        report.push(ValidationIssue::error(IssueCode::MissingId, "要素にIDが必要です"));
    }
    if definitions.element_type.is_empty() {
        report.push(
            ValidationIssue::error(IssueCode::MissingType, "要素に$typeが必要です")
                .with_element_id(definitions.id.as_str()),
        );
    }

    if definitions.root_elements.is_empty() {
        report.push(
            ValidationIssue::error(
                IssueCode::NoRootElements,
                "定義にルート要素が必要です",
            )
            .with_element_id(definitions.id.as_str()),
        );
        return report;
    }

    let processes: Vec<_> = definitions
        .root_elements
        .iter()
        .filter(|process| process.element_type == "bpmn:Process")
        .collect();

    if processes.is_empty() {
        report.push(
            ValidationIssue::error(IssueCode::NoProcesses, "定義にプロセスが含まれていません")
                .with_element_id(definitions.id.as_str()),
        );
    }

    for process in processes {
        if process.id.is_empty() {
            report.push(ValidationIssue::error(IssueCode::MissingId, "要素にIDが必要です"));
        }

        let mut node_ids: Vec<&str> = Vec::new();
        let mut flow_refs: Vec<(&str, &str)> = Vec::new();
        let mut has_start = false;
        let mut has_end = false;

        for record in &process.flow_elements {
            let (element_type, id) = match record {
                FlowElement::Node {
                    element_type, id, ..
                } => {
                    node_ids.push(id.as_str());
                    has_start |= element_type.as_str() == "bpmn:StartEvent";
                    has_end |= element_type.as_str() == "bpmn:EndEvent";
                    (element_type.as_str(), id.as_str())
                }
                FlowElement::Flow {
                    element_type,
                    id,
                    source_ref,
                    target_ref,
                } => {
                    flow_refs.push((source_ref.as_str(), target_ref.as_str()));
                    (element_type.as_str(), id.as_str())
                }
            };

            if id.is_empty() {
                report.push(
                    ValidationIssue::error(IssueCode::MissingId, "要素にIDが必要です")
                        .with_element_type(element_type),
                );
            }
            if element_type.is_empty() {
                report.push(
                    ValidationIssue::error(IssueCode::MissingType, "要素に$typeが必要です")
                        .with_element_id(id),
                );
            }
        }

        if !has_start {
            report.push(
                ValidationIssue::warning(
                    IssueCode::NoStartEvent,
                    "プロセスに開始イベントがありません",
                )
                .with_element_id(process.id.as_str()),
            );
        }
        if !has_end {
            report.push(
                ValidationIssue::warning(
                    IssueCode::NoEndEvent,
                    "プロセスに終了イベントがありません",
                )
                .with_element_id(process.id.as_str()),
            );
        }

        let connected: HashSet<&str> = flow_refs
            .iter()
            .flat_map(|&(source, target)| [source, target])
            .collect();
        if node_ids.iter().any(|id| !connected.contains(*id)) {
            report.push(
                ValidationIssue::warning(
                    IssueCode::OrphanedElements,
                    "接続されていない要素があります",
                )
                .with_element_id(process.id.as_str()),
            );
        }

        let known: HashSet<&str> = node_ids.iter().copied().collect();
        if flow_refs
            .iter()
            .any(|&(source, target)| !known.contains(source) || !known.contains(target))
        {
            report.push(
                ValidationIssue::error(
                    IssueCode::UnconnectedFlows,
                    "存在しない要素を参照するフローがあります",
                )
                .with_element_id(process.id.as_str()),
            );
        }

        for cycle in detect_circular_references(flow_refs.iter().copied()) {
            report.push(
                ValidationIssue::error(
                    IssueCode::CircularReference,
                    format!("循環参照が検出されました: {cycle}"),
                )
                .with_element_id(process.id.as_str()),
            );
            report.circular_references.push(cycle);
        }
    }

    report
}
