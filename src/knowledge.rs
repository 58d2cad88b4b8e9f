//! Knowledge Base
//!
//! The immutable, hierarchical store the response generator reads from:
//! topics partition the space, each topic maps subtopic keys to uniform
//! entries (complexity labels, narrative prose, code snippets, alternative
//! approach variants). Built once at first access and never mutated.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::classify::Topic;

/// A named alternative implementation of a pattern (e.g. the recursive,
/// memoized, and tabulated renditions of fibonacci). Declaration order is
/// preserved and meaningful.
#[derive(Debug, Clone)]
pub struct Approach {
    pub name: String,
    pub code: String,
}

/// The immutable record of facts and code for one subtopic.
#[derive(Debug, Clone)]
pub struct KnowledgeEntry {
    /// Key unique within the owning topic (e.g. `bubble_sort`).
    pub key: String,
    /// Display form used in response headers (e.g. `BUBBLE SORT`).
    pub title: String,
    pub description: String,
    /// Longer narrative; sorting and searching entries carry one.
    pub explanation: Option<String>,
    pub time_complexity: Option<String>,
    pub space_complexity: Option<String>,
    /// Whether the sort preserves equal-element order. Sorting only.
    pub stable: Option<bool>,
    pub prerequisite: Option<String>,
    /// Section label for graph entries (`Graph Traversal` / `Shortest Path`).
    pub section: Option<String>,
    /// Primary code snippet, when the entry has one.
    pub code: Option<String>,
    /// Ordered alternative-approach variants (dynamic programming).
    pub approaches: Vec<Approach>,
    /// Ordered (operation, complexity) table (data structures).
    pub operations: Vec<(String, String)>,
}

impl KnowledgeEntry {
    fn new(key: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: description.into(),
            explanation: None,
            time_complexity: None,
            space_complexity: None,
            stable: None,
            prerequisite: None,
            section: None,
            code: None,
            approaches: Vec::new(),
            operations: Vec::new(),
        }
    }

    fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    fn with_complexity(mut self, time: impl Into<String>, space: impl Into<String>) -> Self {
        self.time_complexity = Some(time.into());
        self.space_complexity = Some(space.into());
        self
    }

    fn with_stability(mut self, stable: bool) -> Self {
        self.stable = Some(stable);
        self
    }

    fn with_prerequisite(mut self, prerequisite: impl Into<String>) -> Self {
        self.prerequisite = Some(prerequisite.into());
        self
    }

    fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    fn with_approach(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.approaches.push(Approach {
            name: name.into(),
            code: code.into(),
        });
        self
    }

    fn with_operation(mut self, operation: impl Into<String>, complexity: impl Into<String>) -> Self {
        self.operations.push((operation.into(), complexity.into()));
        self
    }
}

/// Topic-partitioned store of [`KnowledgeEntry`] records.
#[derive(Debug)]
pub struct KnowledgeBase {
    topics: HashMap<Topic, Vec<KnowledgeEntry>>,
}

impl KnowledgeBase {
    /// Looks up an entry by `(topic, key)`. Lookup is always topic-scoped;
    /// different topics may reuse key conventions without collision.
    pub fn entry(&self, topic: Topic, key: &str) -> Option<&KnowledgeEntry> {
        self.topics
            .get(&topic)
            .and_then(|entries| entries.iter().find(|e| e.key == key))
    }

    /// All entries for a topic, in declaration order.
    pub fn entries(&self, topic: Topic) -> &[KnowledgeEntry] {
        self.topics.get(&topic).map_or(&[], Vec::as_slice)
    }

    fn build() -> Self {
        let mut topics = HashMap::new();
        topics.insert(Topic::Sorting, sorting_entries());
        topics.insert(Topic::Searching, searching_entries());
        topics.insert(Topic::DynamicProgramming, dynamic_programming_entries());
        topics.insert(Topic::Graphs, graph_entries());
        topics.insert(Topic::DataStructures, data_structure_entries());
        Self { topics }
    }
}

static KNOWLEDGE: Lazy<KnowledgeBase> = Lazy::new(KnowledgeBase::build);

/// The process-wide knowledge base, built on first access.
pub fn knowledge_base() -> &'static KnowledgeBase {
    &KNOWLEDGE
}

fn sorting_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new(
            "bubble_sort",
            "BUBBLE SORT",
            "Simple comparison-based sorting algorithm",
        )
        .with_complexity("O(n²)", "O(1)")
        .with_stability(true)
        .with_explanation(
            "Bubble sort repeatedly steps through the list, compares adjacent elements and swaps \
             them if they are in the wrong order.",
        )
        .with_code(
            r#"function bubbleSort(arr) {
    const n = arr.length;
    for (let i = 0; i < n - 1; i++) {
        for (let j = 0; j < n - i - 1; j++) {
            if (arr[j] > arr[j + 1]) {
                [arr[j], arr[j + 1]] = [arr[j + 1], arr[j]];
            }
        }
    }
    return arr;
}"#,
        ),
        KnowledgeEntry::new(
            "quick_sort",
            "QUICK SORT",
            "Efficient divide-and-conquer sorting algorithm",
        )
        .with_complexity("O(n log n) average, O(n²) worst", "O(log n)")
        .with_stability(false)
        .with_explanation(
            "Quick sort picks a pivot element and partitions the array around it, then recursively \
             sorts the sub-arrays.",
        )
        .with_code(
            r#"function quickSort(arr, low = 0, high = arr.length - 1) {
    if (low < high) {
        const pi = partition(arr, low, high);
        quickSort(arr, low, pi - 1);
        quickSort(arr, pi + 1, high);
    }
    return arr;
}

function partition(arr, low, high) {
    const pivot = arr[high];
    let i = low - 1;

    for (let j = low; j < high; j++) {
        if (arr[j] < pivot) {
            i++;
            [arr[i], arr[j]] = [arr[j], arr[i]];
        }
    }
    [arr[i + 1], arr[high]] = [arr[high], arr[i + 1]];
    return i + 1;
}"#,
        ),
        KnowledgeEntry::new(
            "merge_sort",
            "MERGE SORT",
            "Stable divide-and-conquer sorting algorithm",
        )
        .with_complexity("O(n log n)", "O(n)")
        .with_stability(true)
        .with_explanation(
            "Merge sort divides the array into halves, recursively sorts them, then merges the \
             sorted halves.",
        )
        .with_code(
            r#"function mergeSort(arr) {
    if (arr.length <= 1) return arr;

    const mid = Math.floor(arr.length / 2);
    const left = mergeSort(arr.slice(0, mid));
    const right = mergeSort(arr.slice(mid));

    return merge(left, right);
}

function merge(left, right) {
    const result = [];
    let i = 0, j = 0;

    while (i < left.length && j < right.length) {
        if (left[i] <= right[j]) {
            result.push(left[i++]);
        } else {
            result.push(right[j++]);
        }
    }

    return result.concat(left.slice(i)).concat(right.slice(j));
}"#,
        ),
    ]
}

fn searching_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new(
            "binary_search",
            "BINARY SEARCH",
            "Divide-and-conquer search over sorted data",
        )
        .with_complexity("O(log n)", "O(1) iterative, O(log n) recursive")
        .with_prerequisite("Array must be sorted")
        .with_explanation(
            "Binary search efficiently finds a target value in a sorted array by repeatedly \
             dividing the search interval in half.",
        )
        .with_code(
            r#"function binarySearch(arr, target) {
    let left = 0;
    let right = arr.length - 1;

    while (left <= right) {
        const mid = Math.floor((left + right) / 2);

        if (arr[mid] === target) {
            return mid;
        } else if (arr[mid] < target) {
            left = mid + 1;
        } else {
            right = mid - 1;
        }
    }

    return -1; // Not found
}"#,
        ),
        KnowledgeEntry::new(
            "linear_search",
            "LINEAR SEARCH",
            "Sequential scan over unsorted data",
        )
        .with_complexity("O(n)", "O(1)")
        .with_prerequisite("None")
        .with_explanation(
            "Linear search checks each element sequentially until the target is found or the \
             array is exhausted.",
        )
        .with_code(
            r#"function linearSearch(arr, target) {
    for (let i = 0; i < arr.length; i++) {
        if (arr[i] === target) {
            return i;
        }
    }
    return -1; // Not found
}"#,
        ),
    ]
}

fn dynamic_programming_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new(
            "fibonacci",
            "FIBONACCI",
            "Classic example of overlapping subproblems",
        )
        .with_approach(
            "recursive",
            r#"function fibRecursive(n) {
    if (n <= 1) return n;
    return fibRecursive(n - 1) + fibRecursive(n - 2);
}"#,
        )
        .with_approach(
            "memoized",
            r#"function fibMemoized(n, memo = {}) {
    if (n in memo) return memo[n];
    if (n <= 1) return n;

    memo[n] = fibMemoized(n - 1, memo) + fibMemoized(n - 2, memo);
    return memo[n];
}"#,
        )
        .with_approach(
            "tabulated",
            r#"function fibTabulated(n) {
    if (n <= 1) return n;

    const dp = [0, 1];
    for (let i = 2; i <= n; i++) {
        dp[i] = dp[i - 1] + dp[i - 2];
    }
    return dp[n];
}"#,
        ),
        KnowledgeEntry::new(
            "knapsack",
            "KNAPSACK",
            "Optimization problem with resource constraints",
        )
        .with_code(
            r#"function knapsack(weights, values, capacity) {
    const n = weights.length;
    const dp = Array(n + 1).fill().map(() => Array(capacity + 1).fill(0));

    for (let i = 1; i <= n; i++) {
        for (let w = 1; w <= capacity; w++) {
            if (weights[i - 1] <= w) {
                dp[i][w] = Math.max(
                    values[i - 1] + dp[i - 1][w - weights[i - 1]],
                    dp[i - 1][w]
                );
            } else {
                dp[i][w] = dp[i - 1][w];
            }
        }
    }

    return dp[n][capacity];
}"#,
        ),
    ]
}

fn graph_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new(
            "dfs",
            "DFS",
            "Depth-First Search explores as far as possible along each branch",
        )
        .with_section("Graph Traversal")
        .with_complexity("O(V + E)", "O(V)")
        .with_code(
            r#"function dfs(graph, start, visited = new Set()) {
    visited.add(start);
    console.log(start);

    for (const neighbor of graph[start] || []) {
        if (!visited.has(neighbor)) {
            dfs(graph, neighbor, visited);
        }
    }

    return visited;
}"#,
        ),
        KnowledgeEntry::new(
            "bfs",
            "BFS",
            "Breadth-First Search explores neighbors before going deeper",
        )
        .with_section("Graph Traversal")
        .with_complexity("O(V + E)", "O(V)")
        .with_code(
            r#"function bfs(graph, start) {
    const visited = new Set();
    const queue = [start];
    visited.add(start);

    while (queue.length > 0) {
        const vertex = queue.shift();
        console.log(vertex);

        for (const neighbor of graph[vertex] || []) {
            if (!visited.has(neighbor)) {
                visited.add(neighbor);
                queue.push(neighbor);
            }
        }
    }

    return visited;
}"#,
        ),
        KnowledgeEntry::new(
            "dijkstra",
            "DIJKSTRA",
            "Finds shortest path from source to all vertices in weighted graph",
        )
        .with_section("Shortest Path")
        .with_code(
            r#"function dijkstra(graph, start) {
    const distances = {};
    const visited = new Set();
    const pq = new PriorityQueue();

    // Initialize distances
    for (const vertex in graph) {
        distances[vertex] = vertex === start ? 0 : Infinity;
    }

    pq.enqueue(start, 0);

    while (!pq.isEmpty()) {
        const current = pq.dequeue().element;

        if (visited.has(current)) continue;
        visited.add(current);

        for (const neighbor in graph[current]) {
            const distance = distances[current] + graph[current][neighbor];

            if (distance < distances[neighbor]) {
                distances[neighbor] = distance;
                pq.enqueue(neighbor, distance);
            }
        }
    }

    return distances;
}"#,
        ),
    ]
}

fn data_structure_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new(
            "array",
            "ARRAY",
            "Collection of elements stored in contiguous memory locations",
        )
        .with_operation("access", "O(1)")
        .with_operation("search", "O(n)")
        .with_operation("insertion", "O(n)")
        .with_operation("deletion", "O(n)"),
        KnowledgeEntry::new(
            "linked_list",
            "LINKED LIST",
            "Linear data structure where elements are stored in nodes",
        )
        .with_operation("access", "O(n)")
        .with_operation("search", "O(n)")
        .with_operation("insertion", "O(1)")
        .with_operation("deletion", "O(1)")
        .with_code(
            r#"class ListNode {
    constructor(val = 0, next = null) {
        this.val = val;
        this.next = next;
    }
}

class LinkedList {
    constructor() {
        this.head = null;
        this.size = 0;
    }

    append(val) {
        const newNode = new ListNode(val);
        if (!this.head) {
            this.head = newNode;
        } else {
            let current = this.head;
            while (current.next) {
                current = current.next;
            }
            current.next = newNode;
        }
        this.size++;
    }

    prepend(val) {
        const newNode = new ListNode(val, this.head);
        this.head = newNode;
        this.size++;
    }
}"#,
        ),
        KnowledgeEntry::new("stack", "STACK", "LIFO (Last In, First Out) data structure")
            .with_operation("push", "O(1)")
            .with_operation("pop", "O(1)")
            .with_operation("peek", "O(1)")
            .with_code(
                r#"class Stack {
    constructor() {
        this.items = [];
    }

    push(element) {
        this.items.push(element);
    }

    pop() {
        if (this.isEmpty()) return null;
        return this.items.pop();
    }

    peek() {
        if (this.isEmpty()) return null;
        return this.items[this.items.length - 1];
    }

    isEmpty() {
        return this.items.length === 0;
    }

    size() {
        return this.items.length;
    }
}"#,
            ),
        KnowledgeEntry::new("queue", "QUEUE", "FIFO (First In, First Out) data structure")
            .with_operation("enqueue", "O(1)")
            .with_operation("dequeue", "O(1)")
            .with_operation("front", "O(1)")
            .with_code(
                r#"class Queue {
    constructor() {
        this.items = [];
    }

    enqueue(element) {
        this.items.push(element);
    }

    dequeue() {
        if (this.isEmpty()) return null;
        return this.items.shift();
    }

    front() {
        if (this.isEmpty()) return null;
        return this.items[0];
    }

    isEmpty() {
        return this.items.length === 0;
    }

    size() {
        return this.items.length;
    }
}"#,
            ),
    ]
}
