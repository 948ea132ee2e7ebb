//! Data-driven pattern rule tables.
//!
//! Each element category owns an ordered list of regular-expression rules
//! plus its naming policy (maximum label length, default label, optional
//! fallback element). Keeping the tables as data rather than inline branching
//! makes the rule set auditable and testable rule-by-rule.
//!
//! Rules within a category run in declaration order; every non-overlapping
//! match of a rule yields one candidate, scanned left-to-right.

use std::sync::LazyLock;

use regex::Regex;

use tejun_core::model::{ElementKind, GatewayKind, TaskKind};

/// An extraction category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Start,
    Task,
    Gateway,
    End,
}

impl Category {
    /// Returns the id prefix for elements of this category (`start_1`, …).
    pub fn id_prefix(self) -> &'static str {
        match self {
            Category::Start => "start",
            Category::Task => "task",
            Category::Gateway => "gateway",
            Category::End => "end",
        }
    }

    /// Returns the element kind produced by this category.
    pub fn element_kind(self) -> ElementKind {
        match self {
            Category::Start => ElementKind::StartEvent,
            Category::Task => ElementKind::Task(TaskKind::User),
            Category::Gateway => ElementKind::Gateway(GatewayKind::Exclusive),
            Category::End => ElementKind::EndEvent,
        }
    }
}

/// The ordered rule table for one category.
#[derive(Debug)]
pub struct RuleTable {
    category: Category,
    /// Compiled rules in declaration order.
    rules: Vec<Regex>,
    /// Maximum label length in characters; longer labels are truncated with
    /// an ellipsis marker.
    max_name_len: usize,
    /// Label substituted when a rule matches but its capture is empty.
    default_label: &'static str,
    /// Label for the synthesized fallback element when the whole category
    /// matched nothing. Gateways have no fallback: absence is legitimate.
    fallback_label: Option<&'static str>,
}

impl RuleTable {
    /// Returns the category of this table.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the compiled rules in declaration order.
    pub fn rules(&self) -> &[Regex] {
        &self.rules
    }

    /// Returns the maximum label length in characters.
    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    /// Returns the label used for empty captures.
    pub fn default_label(&self) -> &'static str {
        self.default_label
    }

    /// Returns the fallback element label, if this category synthesizes one.
    pub fn fallback_label(&self) -> Option<&'static str> {
        self.fallback_label
    }
}

/// Sentence terminators recognized when deriving the process name.
pub const SENTENCE_TERMINATORS: [char; 2] = ['。', '．'];

/// Maximum process-name length in characters before truncation.
pub const PROCESS_NAME_MAX_LEN: usize = 30;

/// Suffix appended to every derived process name.
pub const PROCESS_NAME_SUFFIX: &str = "プロセス";

/// Ellipsis marker appended to truncated labels.
pub const ELLIPSIS: &str = "...";

struct TableSpec {
    category: Category,
    patterns: &'static [&'static str],
    max_name_len: usize,
    default_label: &'static str,
    fallback_label: Option<&'static str>,
}

/// The built-in rule set, one table per category in extraction order.
///
/// Patterns anchor on keyword vocabulary: reception verbs for start events,
/// action verbs for tasks, conditional particles for gateways, completion
/// vocabulary for end events. The `[^。．]*` prefix keeps a match inside one
/// sentence.
const TABLE_SPECS: [TableSpec; 4] = [
    TableSpec {
        category: Category::Start,
        patterns: &[
            r"([^。．]*(?:申請|依頼|要求|注文).*?(?:受け付け|受信|到着))",
            r"([^。．]*(?:プロセス|処理|手続き).*?(?:開始|スタート))",
        ],
        max_name_len: 15,
        default_label: "プロセス開始",
        fallback_label: Some("プロセス開始"),
    },
    TableSpec {
        category: Category::Task,
        patterns: &[
            r"([^。．]*(?:確認|チェック|検証|処理|実行|作成|送信|登録|保存|承認|却下))",
        ],
        max_name_len: 12,
        default_label: "タスク実行",
        fallback_label: Some("処理実行"),
    },
    TableSpec {
        category: Category::Gateway,
        patterns: &[r"([^。．]*(?:もし|場合|なら|ならば|かどうか|判断|条件))"],
        max_name_len: 10,
        default_label: "条件判定",
        fallback_label: None,
    },
    TableSpec {
        category: Category::End,
        patterns: &[r"([^。．]*(?:完了|終了|通知|結果|完成))"],
        max_name_len: 15,
        default_label: "プロセス完了",
        fallback_label: Some("プロセス完了"),
    },
];

static BUILTIN: LazyLock<Vec<RuleTable>> = LazyLock::new(|| {
    TABLE_SPECS
        .iter()
        .map(|spec| RuleTable {
            category: spec.category,
            rules: spec
                .patterns
                .iter()
                .map(|pattern| {
                    Regex::new(pattern).expect("built-in extraction pattern is valid")
                })
                .collect(),
            max_name_len: spec.max_name_len,
            default_label: spec.default_label,
            fallback_label: spec.fallback_label,
        })
        .collect()
});

/// Returns the built-in rule tables in category order
/// (start, task, gateway, end).
pub fn builtin_tables() -> &'static [RuleTable] {
    &BUILTIN
}
