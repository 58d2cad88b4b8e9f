//! Response Generation
//!
//! Turns a [`Classification`] into a [`TeacherResponse`] by rendering
//! knowledge-base content through fixed markdown templates. One generator
//! per topic plus a general fallback; the fallback is the only place any
//! randomness enters, and the choice is injectable for tests.

use rand::Rng;
use tracing::debug;

use crate::chat::{CodeExample, TeacherResponse};
use crate::classify::{Classification, Intent, Topic};
use crate::knowledge::{knowledge_base, KnowledgeEntry};

// ===== Related-topic constants =====

const SORTING_DETAIL_RELATED: &[&str] = &["Time Complexity", "Space Complexity", "Stability in Sorting"];
const SORTING_OVERVIEW_RELATED: &[&str] = &["Algorithm Analysis", "Divide and Conquer", "Recursion"];
const BINARY_SEARCH_RELATED: &[&str] = &["Divide and Conquer", "Logarithmic Time", "Sorted Arrays"];
const LINEAR_SEARCH_RELATED: &[&str] = &["Linear Time", "Sequential Access"];
const SEARCHING_OVERVIEW_RELATED: &[&str] = &["Data Structures", "Hash Tables", "Binary Trees"];
const DP_DETAIL_RELATED: &[&str] = &["Recursion", "Memoization", "Time Complexity", "Space-Time Tradeoffs"];
const DP_OVERVIEW_RELATED: &[&str] = &["Recursion", "Optimization", "Problem Solving Patterns"];
const DFS_RELATED: &[&str] = &["Recursion", "Stack", "Backtracking"];
const BFS_RELATED: &[&str] = &["Queue", "Level Order", "Shortest Path"];
const SHORTEST_PATH_RELATED: &[&str] = &["Weighted Graphs", "Priority Queue"];
const GRAPHS_OVERVIEW_RELATED: &[&str] = &["Data Structures", "Recursion", "Greedy Algorithms"];
const LINKED_LIST_RELATED: &[&str] = &["Pointers", "Memory Management", "Dynamic Arrays"];
const STACK_RELATED: &[&str] = &["Recursion", "DFS", "Expression Parsing"];
const QUEUE_RELATED: &[&str] = &["BFS", "Scheduling", "Buffer Management"];
const DS_DEFAULT_RELATED: &[&str] = &["Arrays", "Memory"];
const DS_OVERVIEW_RELATED: &[&str] = &["Algorithm Analysis", "Memory Management", "Abstract Data Types"];

fn related(topics: &[&str]) -> Vec<String> {
    topics.iter().map(|t| t.to_string()).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Renders classified queries into teacher responses.
///
/// Stateless apart from configuration; the same classification always yields
/// the same response, except for the general fallback which picks one of two
/// strategy texts via the chooser.
pub struct ResponseGenerator {
    language_tag: String,
    chooser: Box<dyn Fn(usize) -> usize + Send + Sync>,
}

impl ResponseGenerator {
    pub fn new() -> Self {
        Self {
            language_tag: "javascript".to_string(),
            chooser: Box::new(|n| rand::rng().random_range(0..n)),
        }
    }

    /// Sets the language tag attached to every emitted code example.
    pub fn with_language_tag(mut self, tag: impl Into<String>) -> Self {
        self.language_tag = tag.into();
        self
    }

    /// Replaces the random choice used by the general fallback, enabling
    /// deterministic tests. The function receives the candidate count and
    /// must return an index below it.
    pub fn with_chooser(mut self, chooser: impl Fn(usize) -> usize + Send + Sync + 'static) -> Self {
        self.chooser = Box::new(chooser);
        self
    }

    /// Produces a response for any classification. Total: every input maps
    /// to some response, never an error.
    pub fn generate(&self, classification: &Classification) -> TeacherResponse {
        debug!(
            topic = classification.topic.as_str(),
            subtopic = classification.subtopic.unwrap_or("-"),
            "generating response"
        );
        match classification.topic {
            Topic::Sorting => self.sorting_response(classification),
            Topic::Searching => self.searching_response(classification),
            Topic::DynamicProgramming => self.dp_response(classification),
            Topic::Graphs => self.graph_response(classification),
            Topic::DataStructures => self.data_structure_response(classification),
            Topic::General => self.general_response(),
        }
    }

    fn example(&self, code: &str, explanation: impl Into<String>) -> CodeExample {
        CodeExample {
            language: self.language_tag.clone(),
            code: code.to_string(),
            explanation: explanation.into(),
        }
    }

    fn sorting_response(&self, c: &Classification) -> TeacherResponse {
        if let Some(entry) = resolve(Topic::Sorting, c.subtopic) {
            let explanation = entry.explanation.as_deref().unwrap_or_default();
            let content = format!(
                "## {}\n\n{}\n\n**Time Complexity:** {}\n**Space Complexity:** {}\n**Stable:** {}\n\n{}\n\n{}",
                entry.title,
                entry.description,
                label(&entry.time_complexity),
                label(&entry.space_complexity),
                if entry.stable == Some(true) { "Yes" } else { "No" },
                explanation,
                if c.intent == Intent::Implement {
                    "Here's a complete implementation:"
                } else {
                    "Would you like to see the implementation?"
                },
            );
            let code_examples = match (&entry.code, c.intent) {
                (Some(code), Intent::Implement) => vec![self.example(code, explanation)],
                _ => Vec::new(),
            };
            return TeacherResponse {
                content,
                code_examples,
                related_topics: related(SORTING_DETAIL_RELATED),
                difficulty: c.difficulty,
            };
        }

        TeacherResponse {
            content: SORTING_OVERVIEW.to_string(),
            code_examples: Vec::new(),
            related_topics: related(SORTING_OVERVIEW_RELATED),
            difficulty: c.difficulty,
        }
    }

    fn searching_response(&self, c: &Classification) -> TeacherResponse {
        if let Some(entry) = resolve(Topic::Searching, c.subtopic) {
            let explanation = entry.explanation.as_deref().unwrap_or_default();
            let notes = if entry.key == "binary_search" {
                BINARY_SEARCH_NOTES
            } else {
                ""
            };
            let content = format!(
                "## {}\n\n{}\n\n**Time Complexity:** {}\n**Space Complexity:** {}\n**Prerequisite:** {}\n\n{}\n\n{}",
                entry.title,
                explanation,
                label(&entry.time_complexity),
                label(&entry.space_complexity),
                entry.prerequisite.as_deref().unwrap_or_default(),
                if c.intent == Intent::Implement {
                    "Here's the implementation:"
                } else {
                    "Key points to remember:"
                },
                notes,
            );
            let code_examples = match (&entry.code, c.intent) {
                (Some(code), Intent::Implement) => vec![self.example(code, explanation)],
                _ => Vec::new(),
            };
            let related_topics = if entry.key == "binary_search" {
                related(BINARY_SEARCH_RELATED)
            } else {
                related(LINEAR_SEARCH_RELATED)
            };
            return TeacherResponse {
                content,
                code_examples,
                related_topics,
                difficulty: c.difficulty,
            };
        }

        TeacherResponse {
            content: SEARCHING_OVERVIEW.to_string(),
            code_examples: Vec::new(),
            related_topics: related(SEARCHING_OVERVIEW_RELATED),
            difficulty: c.difficulty,
        }
    }

    fn dp_response(&self, c: &Classification) -> TeacherResponse {
        if let Some(entry) = resolve(Topic::DynamicProgramming, c.subtopic) {
            let content = format!(
                "## Dynamic Programming: {}\n\n{}\n\n{}\n\n{}",
                entry.title,
                entry.description,
                DP_METHOD_BLOCK,
                if c.intent == Intent::Implement {
                    "Here are all three implementations:"
                } else {
                    "The key insight is recognizing the recurrence relation."
                },
            );
            let code_examples = if c.intent == Intent::Implement {
                if entry.approaches.is_empty() {
                    // Single-snippet patterns still get their code on an
                    // implement request.
                    entry
                        .code
                        .as_deref()
                        .map(|code| vec![self.example(code, entry.description.clone())])
                        .unwrap_or_default()
                } else {
                    entry
                        .approaches
                        .iter()
                        .map(|a| self.example(&a.code, format!("{} approach", capitalize(&a.name))))
                        .collect()
                }
            } else {
                Vec::new()
            };
            return TeacherResponse {
                content,
                code_examples,
                related_topics: related(DP_DETAIL_RELATED),
                difficulty: c.difficulty,
            };
        }

        TeacherResponse {
            content: DP_OVERVIEW.to_string(),
            code_examples: Vec::new(),
            related_topics: related(DP_OVERVIEW_RELATED),
            difficulty: c.difficulty,
        }
    }

    fn graph_response(&self, c: &Classification) -> TeacherResponse {
        if let Some(entry) = resolve(Topic::Graphs, c.subtopic) {
            let applications = match entry.key.as_str() {
                "dfs" => DFS_APPLICATIONS,
                "bfs" => BFS_APPLICATIONS,
                _ => "",
            };
            let content = format!(
                "## {}: {}\n\n{}\n\n**Time Complexity:** {}\n**Space Complexity:** {}\n\n{}\n\n{}",
                entry.section.as_deref().unwrap_or_default(),
                entry.title,
                entry.description,
                label(&entry.time_complexity),
                label(&entry.space_complexity),
                applications,
                if c.intent == Intent::Implement {
                    "Here's the implementation:"
                } else {
                    "Key characteristics:"
                },
            );
            let code_examples = match (&entry.code, c.intent) {
                (Some(code), Intent::Implement) => {
                    vec![self.example(code, entry.description.clone())]
                }
                _ => Vec::new(),
            };
            let related_topics = match entry.key.as_str() {
                "dfs" => related(DFS_RELATED),
                "bfs" => related(BFS_RELATED),
                _ => related(SHORTEST_PATH_RELATED),
            };
            return TeacherResponse {
                content,
                code_examples,
                related_topics,
                difficulty: c.difficulty,
            };
        }

        TeacherResponse {
            content: GRAPHS_OVERVIEW.to_string(),
            code_examples: Vec::new(),
            related_topics: related(GRAPHS_OVERVIEW_RELATED),
            difficulty: c.difficulty,
        }
    }

    fn data_structure_response(&self, c: &Classification) -> TeacherResponse {
        if let Some(entry) = resolve(Topic::DataStructures, c.subtopic) {
            let complexities = entry
                .operations
                .iter()
                .map(|(op, complexity)| format!("- **{}:** {}", capitalize(op), complexity))
                .collect::<Vec<_>>()
                .join("\n");
            let extra = match entry.key.as_str() {
                "linked_list" => LINKED_LIST_NOTES,
                "stack" => STACK_NOTES,
                "queue" => QUEUE_NOTES,
                _ => "",
            };
            let content = format!(
                "## {}\n\n{}\n\n**Time Complexities:**\n{}\n\n{}\n\n{}",
                entry.title,
                entry.description,
                complexities,
                extra,
                if c.intent == Intent::Implement {
                    "Here's a complete implementation:"
                } else {
                    "Understanding when to use this structure is key."
                },
            );
            let code_examples = match (&entry.code, c.intent) {
                (Some(code), Intent::Implement) => {
                    let name = entry.key.replace('_', " ");
                    vec![self.example(code, format!("Implementation of {name}"))]
                }
                _ => Vec::new(),
            };
            let related_topics = match entry.key.as_str() {
                "linked_list" => related(LINKED_LIST_RELATED),
                "stack" => related(STACK_RELATED),
                "queue" => related(QUEUE_RELATED),
                _ => related(DS_DEFAULT_RELATED),
            };
            return TeacherResponse {
                content,
                code_examples,
                related_topics,
                difficulty: c.difficulty,
            };
        }

        TeacherResponse {
            content: DS_OVERVIEW.to_string(),
            code_examples: Vec::new(),
            related_topics: related(DS_OVERVIEW_RELATED),
            difficulty: c.difficulty,
        }
    }

    fn general_response(&self) -> TeacherResponse {
        let strategies = general_strategies();
        let index = (self.chooser)(strategies.len()).min(strategies.len() - 1);
        strategies.into_iter().nth(index).unwrap_or_else(|| {
            // Unreachable with a well-behaved chooser; keep totality anyway.
            TeacherResponse {
                content: String::new(),
                code_examples: Vec::new(),
                related_topics: Vec::new(),
                difficulty: crate::classify::Difficulty::Beginner,
            }
        })
    }
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(topic: Topic, subtopic: Option<&str>) -> Option<&'static KnowledgeEntry> {
    subtopic.and_then(|key| knowledge_base().entry(topic, key))
}

fn label(complexity: &Option<String>) -> &str {
    complexity.as_deref().unwrap_or("Varies")
}

/// The two learning-strategy texts the general fallback chooses between.
/// Each carries its own fixed difficulty label.
pub(crate) fn general_strategies() -> Vec<TeacherResponse> {
    use crate::classify::Difficulty;

    vec![
        TeacherResponse {
            content: GENERAL_STRATEGY_FUNDAMENTALS.to_string(),
            code_examples: Vec::new(),
            related_topics: related(&["Problem Solving", "Data Structures", "Complexity Analysis"]),
            difficulty: Difficulty::Beginner,
        },
        TeacherResponse {
            content: GENERAL_STRATEGY_FRAMEWORK.to_string(),
            code_examples: Vec::new(),
            related_topics: related(&["Problem Solving Patterns", "Code Optimization", "Debugging"]),
            difficulty: Difficulty::Intermediate,
        },
    ]
}

// ===== Template fragments =====

const DP_METHOD_BLOCK: &str = "Dynamic Programming solves this efficiently by:\n\
1. **Identifying overlapping subproblems**\n\
2. **Storing solutions to avoid recomputation**\n\
3. **Building up from smaller to larger problems**\n\
\n\
**Three approaches:**\n\
- **Recursive (naive)** - Exponential time\n\
- **Memoization (top-down)** - Optimal time with recursion\n\
- **Tabulation (bottom-up)** - Optimal time, iterative";

const BINARY_SEARCH_NOTES: &str = "\n**Important Notes:**\n\
- Array must be sorted beforehand\n\
- Be careful with boundary conditions\n\
- Consider integer overflow in other languages\n\
- Can be implemented iteratively or recursively\n";

const DFS_APPLICATIONS: &str = "\n**Applications:**\n\
- Detecting cycles in graphs\n\
- Topological sorting\n\
- Finding connected components\n\
- Solving maze problems\n";

const BFS_APPLICATIONS: &str = "\n**Applications:**\n\
- Finding shortest path (unweighted)\n\
- Level-order traversal\n\
- Finding connected components\n\
- Social network analysis\n";

const LINKED_LIST_NOTES: &str = "\n**Types:**\n\
- **Singly Linked List** - One direction traversal\n\
- **Doubly Linked List** - Bidirectional traversal\n\
- **Circular Linked List** - Last node points to first\n\
\n\
**Advantages:**\n\
- Dynamic size\n\
- Efficient insertion/deletion at beginning\n\
- Memory efficient (no wasted space)\n\
\n\
**Disadvantages:**\n\
- No random access\n\
- Extra memory for pointers\n\
- Not cache-friendly\n";

const STACK_NOTES: &str = "\n**Applications:**\n\
- Function call management\n\
- Expression evaluation\n\
- Undo operations\n\
- Browser history\n\
- Backtracking algorithms\n\
\n\
**Key Operations:**\n\
- **Push** - Add to top\n\
- **Pop** - Remove from top\n\
- **Peek/Top** - View top element\n";

const QUEUE_NOTES: &str = "\n**Applications:**\n\
- Process scheduling\n\
- BFS traversal\n\
- Handling requests in web servers\n\
- Print job management\n\
\n\
**Variants:**\n\
- **Simple Queue** - FIFO\n\
- **Circular Queue** - Efficient space usage\n\
- **Priority Queue** - Elements have priorities\n\
- **Deque** - Double-ended queue\n";

// ===== Overview texts =====

const SORTING_OVERVIEW: &str = "## Sorting Algorithms Overview\n\n\
Sorting is fundamental in computer science! Here are the main categories:\n\n\
**Simple Sorts (O(n²)):**\n\
- Bubble Sort - Educational, rarely used in practice\n\
- Selection Sort - Minimizes swaps\n\
- Insertion Sort - Efficient for small datasets\n\n\
**Efficient Sorts (O(n log n)):**\n\
- Merge Sort - Stable, predictable performance\n\
- Quick Sort - Fast average case, in-place\n\
- Heap Sort - Guaranteed O(n log n), in-place\n\n\
**Specialized Sorts:**\n\
- Counting Sort - For integers in limited range\n\
- Radix Sort - For fixed-width integers\n\
- Bucket Sort - For uniformly distributed data\n\n\
Which sorting algorithm would you like to explore in detail?";

const SEARCHING_OVERVIEW: &str = "## Search Algorithms\n\n\
Searching is about finding specific elements efficiently:\n\n\
**Linear Search - O(n):**\n\
- Checks each element sequentially\n\
- Works on unsorted data\n\
- Simple but slow for large datasets\n\n\
**Binary Search - O(log n):**\n\
- Requires sorted array\n\
- Divides search space in half each iteration\n\
- Much faster for large datasets\n\n\
**Hash-based Search - O(1) average:**\n\
- Uses hash tables/maps\n\
- Fastest for lookups\n\
- Requires extra space\n\n\
**Tree-based Search - O(log n):**\n\
- Binary Search Trees\n\
- Balanced trees (AVL, Red-Black)\n\
- Good for dynamic data\n\n\
Which search technique interests you most?";

const DP_OVERVIEW: &str = "## Dynamic Programming\n\n\
DP is a powerful technique for optimization problems with:\n\n\
**1. Optimal Substructure**\n\
- Solution can be constructed from optimal solutions of subproblems\n\n\
**2. Overlapping Subproblems**\n\
- Same subproblems are solved multiple times\n\n\
**Common DP Patterns:**\n\n\
**Linear DP:**\n\
- Fibonacci, Climbing Stairs\n\
- House Robber, Maximum Subarray\n\n\
**2D DP:**\n\
- Unique Paths, Edit Distance\n\
- Longest Common Subsequence\n\n\
**Knapsack Problems:**\n\
- 0/1 Knapsack, Unbounded Knapsack\n\
- Coin Change, Partition Problems\n\n\
**String DP:**\n\
- Palindrome problems\n\
- String matching\n\n\
**Approach:**\n\
1. Define the state (what does dp[i] represent?)\n\
2. Find the recurrence relation\n\
3. Determine base cases\n\
4. Decide on top-down vs bottom-up\n\n\
Which DP pattern would you like to explore?";

const GRAPHS_OVERVIEW: &str = "## Graph Algorithms\n\n\
Graphs are versatile data structures representing relationships:\n\n\
**Graph Representations:**\n\
- **Adjacency Matrix** - O(V²) space, O(1) edge lookup\n\
- **Adjacency List** - O(V+E) space, efficient for sparse graphs\n\n\
**Traversal Algorithms:**\n\
- **DFS (Depth-First Search)** - Explores deep, uses stack/recursion\n\
- **BFS (Breadth-First Search)** - Explores wide, uses queue\n\n\
**Shortest Path:**\n\
- **Dijkstra's Algorithm** - Single source, non-negative weights\n\
- **Bellman-Ford** - Single source, handles negative weights\n\
- **Floyd-Warshall** - All pairs shortest paths\n\n\
**Other Important Algorithms:**\n\
- **Topological Sort** - Ordering with dependencies\n\
- **Union-Find** - Disjoint set operations\n\
- **Minimum Spanning Tree** - Kruskal's, Prim's\n\n\
**Applications:**\n\
- Social networks, GPS navigation\n\
- Web crawling, dependency resolution\n\
- Network routing, circuit design\n\n\
Which graph algorithm would you like to explore?";

const DS_OVERVIEW: &str = "## Data Structures Overview\n\n\
Data structures organize and store data efficiently:\n\n\
**Linear Structures:**\n\
- **Array** - Fixed size, random access O(1)\n\
- **Dynamic Array** - Resizable, amortized O(1) append\n\
- **Linked List** - Dynamic size, O(1) insertion/deletion\n\
- **Stack** - LIFO, function calls, undo operations\n\
- **Queue** - FIFO, scheduling, BFS\n\n\
**Non-Linear Structures:**\n\
- **Binary Tree** - Hierarchical, O(log n) operations\n\
- **Hash Table** - Key-value pairs, O(1) average lookup\n\
- **Heap** - Priority queue, O(log n) insert/delete\n\
- **Graph** - Relationships, various algorithms\n\n\
**Choosing the Right Structure:**\n\
- **Frequent lookups?** → Hash Table\n\
- **Ordered data?** → Binary Search Tree\n\
- **LIFO operations?** → Stack\n\
- **FIFO operations?** → Queue\n\
- **Range queries?** → Segment Tree\n\n\
**Trade-offs to Consider:**\n\
- Time vs Space complexity\n\
- Static vs Dynamic size\n\
- Memory locality\n\
- Implementation complexity\n\n\
Which data structure would you like to explore in detail?";

const GENERAL_STRATEGY_FUNDAMENTALS: &str = "Great question! Algorithm learning is all about \
understanding patterns and building problem-solving skills.\n\n\
**Key Learning Strategies:**\n\n\
1. **Start with Fundamentals**\n\
   - Understand time and space complexity\n\
   - Master basic data structures (arrays, lists, stacks, queues)\n\
   - Learn common patterns (two pointers, sliding window)\n\n\
2. **Practice Systematically**\n\
   - Solve problems by category\n\
   - Focus on understanding, not just memorizing\n\
   - Implement algorithms from scratch\n\n\
3. **Analyze and Optimize**\n\
   - Always consider edge cases\n\
   - Think about different approaches\n\
   - Understand trade-offs between solutions\n\n\
4. **Build Intuition**\n\
   - Visualize how algorithms work\n\
   - Trace through examples step by step\n\
   - Connect new concepts to what you already know\n\n\
**Common Algorithm Categories:**\n\
- Searching and Sorting\n\
- Graph Traversal\n\
- Dynamic Programming\n\
- Greedy Algorithms\n\
- Divide and Conquer\n\n\
What specific area would you like to focus on? I can provide detailed explanations, code examples, \
and practice problems!";

const GENERAL_STRATEGY_FRAMEWORK: &str = "Excellent! Let's dive into algorithmic thinking. The key \
is to approach problems systematically:\n\n\
**Problem-Solving Framework:**\n\n\
1. **Understand the Problem**\n\
   - What are the inputs and outputs?\n\
   - What are the constraints?\n\
   - Are there edge cases to consider?\n\n\
2. **Plan Your Approach**\n\
   - Can you solve it with a known pattern?\n\
   - What data structures might help?\n\
   - Is there a brute force solution first?\n\n\
3. **Analyze Complexity**\n\
   - What's the time complexity?\n\
   - What's the space complexity?\n\
   - Can you optimize further?\n\n\
4. **Implement and Test**\n\
   - Write clean, readable code\n\
   - Test with examples and edge cases\n\
   - Debug systematically\n\n\
**Common Optimization Techniques:**\n\
- **Hash Maps** for O(1) lookups\n\
- **Two Pointers** for array problems\n\
- **Sliding Window** for subarray problems\n\
- **Binary Search** for sorted data\n\
- **Dynamic Programming** for overlapping subproblems\n\n\
Would you like to practice applying this framework to a specific problem?";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Difficulty, Intent};

    fn classification(topic: Topic, subtopic: Option<&'static str>, intent: Intent) -> Classification {
        Classification {
            topic,
            subtopic,
            intent,
            difficulty: Difficulty::Beginner,
            keywords: Vec::new(),
        }
    }

    fn generator() -> ResponseGenerator {
        ResponseGenerator::new().with_chooser(|_| 0)
    }

    #[test]
    fn test_sorting_detail_learn() {
        let resp = generator().generate(&classification(Topic::Sorting, Some("bubble_sort"), Intent::Learn));
        assert!(resp.content.starts_with("## BUBBLE SORT\n"));
        assert!(resp.content.contains("**Stable:** Yes"));
        assert!(resp.content.contains("Would you like to see the implementation?"));
        assert!(resp.code_examples.is_empty());
        assert_eq!(resp.related_topics[2], "Stability in Sorting");
    }

    #[test]
    fn test_sorting_detail_implement() {
        let resp = generator().generate(&classification(Topic::Sorting, Some("quick_sort"), Intent::Implement));
        assert!(resp.content.contains("**Stable:** No"));
        assert!(resp.content.contains("Here's a complete implementation:"));
        assert_eq!(resp.code_examples.len(), 1);
        assert_eq!(resp.code_examples[0].language, "javascript");
        assert!(resp.code_examples[0].code.contains("function quickSort"));
    }

    #[test]
    fn test_sorting_overview_when_unresolved() {
        let resp = generator().generate(&classification(Topic::Sorting, None, Intent::Learn));
        assert!(resp.content.starts_with("## Sorting Algorithms Overview"));
        assert!(resp.code_examples.is_empty());
        assert_eq!(resp.related_topics, vec!["Algorithm Analysis", "Divide and Conquer", "Recursion"]);
    }

    #[test]
    fn test_binary_search_notes_present_on_learn() {
        let resp = generator().generate(&classification(Topic::Searching, Some("binary_search"), Intent::Learn));
        assert!(resp.content.contains("**Important Notes:**"));
        assert!(resp.content.contains("Key points to remember:"));
        assert!(resp.content.contains("**Prerequisite:** Array must be sorted"));
        assert_eq!(resp.related_topics[0], "Divide and Conquer");
    }

    #[test]
    fn test_linear_search_has_no_notes_block() {
        let resp = generator().generate(&classification(Topic::Searching, Some("linear_search"), Intent::Learn));
        assert!(!resp.content.contains("**Important Notes:**"));
        assert_eq!(resp.related_topics, vec!["Linear Time", "Sequential Access"]);
    }

    #[test]
    fn test_fibonacci_implement_emits_all_three_approaches() {
        let resp = generator().generate(&classification(
            Topic::DynamicProgramming,
            Some("fibonacci"),
            Intent::Implement,
        ));
        assert!(resp.content.starts_with("## Dynamic Programming: FIBONACCI"));
        assert!(resp.content.contains("Here are all three implementations:"));
        let explanations: Vec<&str> = resp.code_examples.iter().map(|e| e.explanation.as_str()).collect();
        assert_eq!(
            explanations,
            vec!["Recursive approach", "Memoized approach", "Tabulated approach"]
        );
    }

    #[test]
    fn test_knapsack_implement_falls_back_to_primary_snippet() {
        let resp = generator().generate(&classification(
            Topic::DynamicProgramming,
            Some("knapsack"),
            Intent::Implement,
        ));
        assert_eq!(resp.code_examples.len(), 1);
        assert!(resp.code_examples[0].code.contains("function knapsack"));
    }

    #[test]
    fn test_dijkstra_complexities_render_as_varies() {
        let resp = generator().generate(&classification(Topic::Graphs, Some("dijkstra"), Intent::Learn));
        assert!(resp.content.starts_with("## Shortest Path: DIJKSTRA"));
        assert!(resp.content.contains("**Time Complexity:** Varies"));
        assert!(resp.content.contains("**Space Complexity:** Varies"));
        assert_eq!(resp.related_topics, vec!["Weighted Graphs", "Priority Queue"]);
    }

    #[test]
    fn test_dfs_detail_has_applications() {
        let resp = generator().generate(&classification(Topic::Graphs, Some("dfs"), Intent::Learn));
        assert!(resp.content.starts_with("## Graph Traversal: DFS"));
        assert!(resp.content.contains("Solving maze problems"));
        assert!(resp.content.contains("Key characteristics:"));
    }

    #[test]
    fn test_stack_detail_operations_table() {
        let resp = generator().generate(&classification(Topic::DataStructures, Some("stack"), Intent::Learn));
        assert!(resp.content.starts_with("## STACK\n"));
        assert!(resp.content.contains("- **Push:** O(1)"));
        assert!(resp.content.contains("Browser history"));
        assert!(resp.content.contains("Understanding when to use this structure is key."));
    }

    #[test]
    fn test_array_implement_emits_no_code() {
        // The array entry carries no snippet, so implement intent still
        // yields an empty example list.
        let resp = generator().generate(&classification(Topic::DataStructures, Some("array"), Intent::Implement));
        assert!(resp.code_examples.is_empty());
        assert!(resp.content.contains("Here's a complete implementation:"));
        assert_eq!(resp.related_topics, vec!["Arrays", "Memory"]);
    }

    #[test]
    fn test_linked_list_implement_explanation() {
        let resp = generator().generate(&classification(
            Topic::DataStructures,
            Some("linked_list"),
            Intent::Implement,
        ));
        assert_eq!(resp.code_examples[0].explanation, "Implementation of linked list");
    }

    #[test]
    fn test_general_chooser_is_deterministic() {
        let gen = ResponseGenerator::new().with_chooser(|_| 1);
        let resp = gen.generate(&classification(Topic::General, None, Intent::Learn));
        assert!(resp.content.starts_with("Excellent! Let's dive into algorithmic thinking."));
        assert_eq!(resp.difficulty, Difficulty::Intermediate);
    }

    #[test]
    fn test_general_overrides_classified_difficulty() {
        let mut c = classification(Topic::General, None, Intent::Learn);
        c.difficulty = Difficulty::Advanced;
        let resp = generator().generate(&c);
        assert_eq!(resp.difficulty, Difficulty::Beginner);
    }

    #[test]
    fn test_language_tag_flows_into_examples() {
        let gen = ResponseGenerator::new().with_language_tag("typescript");
        let resp = gen.generate(&classification(Topic::Sorting, Some("merge_sort"), Intent::Implement));
        assert_eq!(resp.code_examples[0].language, "typescript");
    }

    #[test]
    fn test_difficulty_passes_through_on_detail() {
        let mut c = classification(Topic::Graphs, Some("bfs"), Intent::Learn);
        c.difficulty = Difficulty::Advanced;
        let resp = generator().generate(&c);
        assert_eq!(resp.difficulty, Difficulty::Advanced);
    }
}
