//! Unit tests for the pattern extractor.
//!
//! These cover the rule tables, naming policy (truncation, defaults),
//! fallback synthesis, and process-name derivation.

use proptest::prelude::*;

use crate::{extract, extract_process_name};

const APPLICATION_FLOW: &str = "申請を受け付ける。担当者が内容を確認する。承認されたら通知する。";

#[test]
fn application_flow_yields_all_required_categories() {
    let extraction = extract(APPLICATION_FLOW);
    let elements = &extraction.elements;

    assert!(!elements.start_events.is_empty());
    assert!(!elements.tasks.is_empty());
    assert!(!elements.end_events.is_empty());

    assert_eq!(elements.start_events[0].id, "start_1");
    assert_eq!(elements.start_events[0].name, "申請を受け付け");
    assert_eq!(elements.tasks[0].name, "担当者が内容を確認");
    assert_eq!(elements.end_events[0].name, "承認されたら通知");
}

#[test]
fn task_rule_matches_every_occurrence_left_to_right() {
    // Two action keywords in the text, two candidates, ids in match order.
    let extraction = extract("担当者が内容を確認する。承認されたら通知する。");
    let tasks = &extraction.elements.tasks;

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, "task_1");
    assert_eq!(tasks[0].name, "担当者が内容を確認");
    assert_eq!(tasks[1].id, "task_2");
    assert_eq!(tasks[1].name, "承認");
}

#[test]
fn categories_are_independent_and_may_overlap() {
    // 「確認」 claims a task, 「かどうか」 claims a gateway, from the same
    // sentence. Non-exclusive category passes are intentional.
    let extraction = extract("承認されたかどうか確認する。");

    assert_eq!(extraction.elements.tasks.len(), 1);
    assert_eq!(extraction.elements.gateways.len(), 1);
    assert_eq!(extraction.elements.gateways[0].id, "gateway_1");
}

#[test]
fn empty_input_fires_exactly_the_three_fallbacks() {
    let extraction = extract("");
    let elements = &extraction.elements;

    assert_eq!(elements.start_events.len(), 1);
    assert_eq!(elements.tasks.len(), 1);
    assert_eq!(elements.gateways.len(), 0);
    assert_eq!(elements.end_events.len(), 1);

    assert_eq!(elements.start_events[0].id, "start_1");
    assert_eq!(elements.start_events[0].name, "プロセス開始");
    assert_eq!(elements.tasks[0].id, "task_1");
    assert_eq!(elements.tasks[0].name, "処理実行");
    assert_eq!(elements.end_events[0].id, "end_1");
    assert_eq!(elements.end_events[0].name, "プロセス完了");

    assert_eq!(extraction.process_name, "プロセス");
}

#[test]
fn gateways_are_optional_and_get_no_fallback() {
    let extraction = extract("申請を受け付ける。内容を確認する。完了を通知する。");
    assert!(extraction.elements.gateways.is_empty());
}

#[test]
fn task_name_of_exactly_twelve_chars_is_not_truncated() {
    // 10-char prefix + 「確認」 = exactly 12 characters.
    let extraction = extract("あいうえおかきくけこ確認");
    assert_eq!(extraction.elements.tasks[0].name, "あいうえおかきくけこ確認");
}

#[test]
fn task_name_of_thirteen_chars_is_truncated_with_ellipsis() {
    // 11-char prefix + 「確認」 = 13 characters, cut at 12.
    let extraction = extract("あいうえおかきくけこさ確認");
    assert_eq!(
        extraction.elements.tasks[0].name,
        "あいうえおかきくけこさ確..."
    );
}

#[test]
fn event_names_are_truncated_at_fifteen_chars() {
    // 14-char prefix + 「通知」 = 16 characters, cut at 15.
    let extraction = extract("あいうえおかきくけこさしすせ通知");
    assert_eq!(
        extraction.elements.end_events[0].name,
        "あいうえおかきくけこさしすせ通..."
    );
}

#[test]
fn process_name_is_first_sentence_plus_suffix() {
    assert_eq!(
        extract_process_name("申請を受け付ける。内容を確認する。"),
        "申請を受け付けるプロセス"
    );
}

#[test]
fn process_name_over_thirty_chars_is_truncated() {
    // 31 characters before the sentence terminator.
    let long: String = "あ".repeat(31);
    let name = extract_process_name(&format!("{long}。"));
    assert_eq!(name, format!("{}...プロセス", "あ".repeat(30)));

    // Exactly 30 characters is left as-is.
    let exact: String = "あ".repeat(30);
    let name = extract_process_name(&format!("{exact}。"));
    assert_eq!(name, format!("{exact}プロセス"));
}

#[test]
fn full_width_period_also_terminates_the_first_sentence() {
    assert_eq!(extract_process_name("注文処理．詳細．"), "注文処理プロセス");
}

proptest! {
    // Fallbacks guarantee a usable model for any input whatsoever.
    #[test]
    fn extraction_never_returns_an_empty_set(text in ".*") {
        let extraction = extract(&text);
        let counts = extraction.elements.counts();
        prop_assert!(counts.start_events >= 1);
        prop_assert!(counts.tasks >= 1);
        prop_assert!(counts.end_events >= 1);
    }

    #[test]
    fn ids_are_sequential_per_category(text in ".*") {
        let extraction = extract(&text);
        for (index, task) in extraction.elements.tasks.iter().enumerate() {
            prop_assert_eq!(task.id.clone(), format!("task_{}", index + 1));
        }
    }
}
