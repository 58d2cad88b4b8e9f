//! Message Classification
//!
//! Maps an extracted keyword set to a {topic, subtopic, intent, difficulty}
//! classification. Each dimension is an ordered rule table evaluated
//! first-match-wins; the tables are not disjoint, so ordering is part of the
//! contract (a message mentioning both "sort" and "graph" resolves to
//! sorting because that rule is evaluated first).
//!
//! Classification never fails: absent signal degrades to the defaults
//! (topic=general, intent=learn, difficulty=beginner).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::keywords::contains_keyword;

/// Top-level subject partition of the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Sorting,
    Searching,
    DynamicProgramming,
    Graphs,
    DataStructures,
    General,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Sorting => "sorting",
            Topic::Searching => "searching",
            Topic::DynamicProgramming => "dynamic_programming",
            Topic::Graphs => "graphs",
            Topic::DataStructures => "data_structures",
            Topic::General => "general",
        }
    }
}

/// The caller's inferred goal for the interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    Learn,
    Implement,
    Compare,
    Debug,
    Explain,
}

/// Pedagogical level echoed back in the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// The transient result of analyzing one utterance.
#[derive(Debug, Clone)]
pub struct Classification {
    pub topic: Topic,
    /// Subtopic key within the topic, when a specific keyword matched.
    /// Must resolve in the knowledge base or the generator falls back to
    /// the topic overview.
    pub subtopic: Option<&'static str>,
    pub intent: Intent,
    pub difficulty: Difficulty,
    pub keywords: Vec<String>,
}

/// Topic rules, evaluated in order. First rule with any member keyword wins.
const TOPIC_RULES: &[(&[&str], Topic)] = &[
    (
        &["sort", "sorting", "bubble", "quick", "merge", "heap"],
        Topic::Sorting,
    ),
    (&["search", "binary", "linear", "find"], Topic::Searching),
    (
        &["dynamic", "dp", "memoization", "fibonacci", "knapsack"],
        Topic::DynamicProgramming,
    ),
    (
        &["graph", "tree", "dfs", "bfs", "dijkstra", "traversal"],
        Topic::Graphs,
    ),
    (
        &["array", "list", "stack", "queue", "structure"],
        Topic::DataStructures,
    ),
];

/// Intent rules, evaluated in order after topic resolution.
const INTENT_RULES: &[(&[&str], Intent)] = &[
    (&["implement", "code", "write", "create"], Intent::Implement),
    (
        &["compare", "difference", "vs", "versus"],
        Intent::Compare,
    ),
    (&["debug", "error", "wrong", "fix"], Intent::Debug),
    (&["explain", "how", "why", "what"], Intent::Explain),
];

/// Difficulty rules, evaluated in order.
const DIFFICULTY_RULES: &[(&[&str], Difficulty)] = &[
    (
        &["advanced", "complex", "optimization", "efficient"],
        Difficulty::Advanced,
    ),
    (
        &["intermediate", "medium", "better"],
        Difficulty::Intermediate,
    ),
];

/// Subtopic rules per topic: (trigger keyword, subtopic key), in chain order.
///
/// The order is load-bearing for compatibility: "binary" is checked before
/// "linear", and within sorting bubble/quick/merge, even when a later
/// keyword might arguably be the stronger signal.
fn subtopic_rules(topic: Topic) -> &'static [(&'static str, &'static str)] {
    match topic {
        Topic::Sorting => &[
            ("bubble", "bubble_sort"),
            ("quick", "quick_sort"),
            ("merge", "merge_sort"),
        ],
        Topic::Searching => &[("binary", "binary_search"), ("linear", "linear_search")],
        Topic::DynamicProgramming => &[("fibonacci", "fibonacci"), ("knapsack", "knapsack")],
        Topic::Graphs => &[("dfs", "dfs"), ("bfs", "bfs"), ("dijkstra", "dijkstra")],
        Topic::DataStructures => &[
            ("stack", "stack"),
            ("queue", "queue"),
            ("list", "linked_list"),
        ],
        Topic::General => &[],
    }
}

fn first_match<T: Copy>(keywords: &[String], rules: &[(&[&str], T)]) -> Option<T> {
    rules
        .iter()
        .find(|(triggers, _)| triggers.iter().any(|t| contains_keyword(keywords, t)))
        .map(|(_, result)| *result)
}

/// Classifies a keyword set into topic, subtopic, intent, and difficulty.
pub fn classify(keywords: Vec<String>) -> Classification {
    let topic = first_match(&keywords, TOPIC_RULES).unwrap_or(Topic::General);

    let subtopic = subtopic_rules(topic)
        .iter()
        .find(|(trigger, _)| contains_keyword(&keywords, trigger))
        .map(|(_, key)| *key);

    let intent = first_match(&keywords, INTENT_RULES).unwrap_or_default();
    let difficulty = first_match(&keywords, DIFFICULTY_RULES).unwrap_or_default();

    debug!(
        topic = topic.as_str(),
        subtopic = subtopic.unwrap_or("-"),
        ?intent,
        ?difficulty,
        "classified utterance"
    );

    Classification {
        topic,
        subtopic,
        intent,
        difficulty,
        keywords,
    }
}
