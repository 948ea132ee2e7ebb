//! Element extraction from process prose.

use log::{debug, trace};

use tejun_core::model::{Element, ElementSet};

use crate::rules::{
    self, Category, RuleTable, ELLIPSIS, PROCESS_NAME_MAX_LEN, PROCESS_NAME_SUFFIX,
    SENTENCE_TERMINATORS,
};

/// The result of one extraction call: the derived process name plus the
/// element candidates grouped by category.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub process_name: String,
    pub elements: ElementSet,
}

/// Extracts typed element candidates from business-process prose.
///
/// Pure function of the input text: per-call id counters, no shared state,
/// no failure mode. Every category runs its ordered rule table over the full
/// text; categories that match nothing synthesize their fallback element
/// (gateways excepted). Empty input therefore still yields a start event, a
/// task, and an end event.
///
/// # Examples
///
/// ```
/// let extraction = tejun_extract::extract("申請を受け付ける。内容を確認する。完了を通知する。");
/// assert!(!extraction.elements.start_events.is_empty());
/// assert!(!extraction.elements.tasks.is_empty());
/// assert!(!extraction.elements.end_events.is_empty());
/// ```
pub fn extract(text: &str) -> Extraction {
    let process_name = extract_process_name(text);
    let mut elements = ElementSet::default();

    for table in rules::builtin_tables() {
        let candidates = run_table(table, text);
        match table.category() {
            Category::Start => elements.start_events = candidates,
            Category::Task => elements.tasks = candidates,
            Category::Gateway => elements.gateways = candidates,
            Category::End => elements.end_events = candidates,
        }
    }

    debug!(
        start_events = elements.start_events.len(),
        tasks = elements.tasks.len(),
        gateways = elements.gateways.len(),
        end_events = elements.end_events.len();
        "Extraction finished"
    );

    Extraction {
        process_name,
        elements,
    }
}

/// Derives the process name from the first sentence of the text.
///
/// The text up to the first sentence terminator (「。」 or 「．」) is taken;
/// if longer than 30 characters it is truncated and the ellipsis marker is
/// inserted before the 「プロセス」 suffix.
pub fn extract_process_name(text: &str) -> String {
    let first_sentence = text.split(SENTENCE_TERMINATORS).next().unwrap_or("");

    if first_sentence.chars().count() > PROCESS_NAME_MAX_LEN {
        let truncated: String = first_sentence.chars().take(PROCESS_NAME_MAX_LEN).collect();
        format!("{truncated}{ELLIPSIS}{PROCESS_NAME_SUFFIX}")
    } else {
        format!("{first_sentence}{PROCESS_NAME_SUFFIX}")
    }
}

/// Runs one category table over the text and returns its candidates in
/// rule order, then match order. Ids are assigned sequentially within the
/// category. Fires the category fallback when nothing matched.
fn run_table(table: &RuleTable, text: &str) -> Vec<Element> {
    let mut candidates = Vec::new();

    for rule in table.rules() {
        for captures in rule.captures_iter(text) {
            let raw = captures.get(1).map_or("", |group| group.as_str()).trim();
            let name = if raw.is_empty() {
                table.default_label().to_string()
            } else {
                truncate_label(raw, table.max_name_len())
            };

            let id = format!("{}_{}", table.category().id_prefix(), candidates.len() + 1);
            trace!(id = id.as_str(), name = name.as_str(); "Matched element candidate");
            candidates.push(Element::new(id, name, table.category().element_kind()));
        }
    }

    if candidates.is_empty() {
        if let Some(label) = table.fallback_label() {
            let id = format!("{}_1", table.category().id_prefix());
            debug!(id = id.as_str(); "Category matched nothing, synthesizing fallback");
            candidates.push(Element::new(id, label, table.category().element_kind()));
        }
    }

    candidates
}

/// Truncates a label to `max_len` characters, appending the ellipsis marker
/// when anything was cut. Lengths are counted in characters, not bytes.
fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() <= max_len {
        return label.to_string();
    }
    let truncated: String = label.chars().take(max_len).collect();
    format!("{truncated}{ELLIPSIS}")
}
