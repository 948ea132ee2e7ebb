//! Condensed textual preview.
//!
//! Unlike the other backends, this one reads the emitted XML text rather
//! than the model: element names are pulled back out of the
//! `bpmn:startEvent` / `bpmn:userTask` / `bpmn:endEvent` tags with regexes.
//! Gateways have no glyph and are skipped. Only the first start and end
//! event appear; every task does.

use std::sync::LazyLock;

use regex::Regex;

static START_EVENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<bpmn:startEvent[^>]*name="([^"]*)"[^>]*/>"#)
        .expect("start-event tag pattern is valid")
});
static USER_TASK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<bpmn:userTask[^>]*name="([^"]*)"[^>]*/>"#)
        .expect("user-task tag pattern is valid")
});
static END_EVENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<bpmn:endEvent[^>]*name="([^"]*)"[^>]*/>"#)
        .expect("end-event tag pattern is valid")
});

const EVENT_MAX_CHARS: usize = 8;
const TASK_MAX_CHARS: usize = 10;
const ARROW: &str = " ─► ";

/// Renders a one-line glyph summary of a BPMN XML document.
pub fn ascii_preview(xml: &str) -> String {
    let start_events = captured_names(&START_EVENT, xml);
    let tasks = captured_names(&USER_TASK, xml);
    let end_events = captured_names(&END_EVENT, xml);

    let mut out = String::from("\n");
    out.push_str("╔══════════════════════════════════════════╗\n");
    out.push_str("║           📊 BPMN プロセスフロー           ║\n");
    out.push_str("╚══════════════════════════════════════════╝\n");
    out.push('\n');

    let mut line = String::new();

    if let Some(name) = start_events.first() {
        line.push_str("🟢 ");
        line.push_str(&clip(name, EVENT_MAX_CHARS));
    }

    for task in &tasks {
        if !line.is_empty() {
            line.push_str(ARROW);
        }
        line.push_str("📋 ");
        line.push_str(&clip(task, TASK_MAX_CHARS));
    }

    if let Some(name) = end_events.first() {
        if !line.is_empty() {
            line.push_str(ARROW);
        }
        line.push_str("🔴 ");
        line.push_str(&clip(name, EVENT_MAX_CHARS));
    }

    out.push_str(&line);
    out.push_str("\n\n");
    out.push_str("💡 詳細: XML出力をBPMNビューアーで開くと完全な図をご覧いただけます\n");
    out.push_str("🔍 機能: ズーム、パン、標準BPMN記法での表示");

    out
}

fn captured_names(pattern: &Regex, xml: &str) -> Vec<String> {
    pattern
        .captures_iter(xml)
        .map(|captures| captures[1].to_string())
        .collect()
}

fn clip(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let clipped: String = name.chars().take(max_chars).collect();
    format!("{clipped}...")
}
