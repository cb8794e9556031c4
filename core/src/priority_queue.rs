/// An item queued with a numeric priority.
///
/// `sequence` records insertion order and breaks ties between equal
/// priorities, so the queue is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueEntry<T> {
    pub item: T,
    pub priority: f64,
    sequence: u64,
}

impl<T> QueueEntry<T> {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    fn precedes(&self, other: &Self) -> bool {
        self.priority < other.priority
            || (self.priority == other.priority && self.sequence < other.sequence)
    }
}

/// Array-backed binary min-heap.
///
/// There is no decrease-key: an improved priority is pushed as a new entry and
/// the caller discards stale entries when they are popped.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    entries: Vec<QueueEntry<T>>,
    next_sequence: u64,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_sequence: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    /// Panics on a non-finite priority; that is a caller bug.
    pub fn push(&mut self, item: T, priority: f64) {
        assert!(priority.is_finite(), "queue priority must be finite, got {priority}");

        self.entries.push(QueueEntry {
            item,
            priority,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;

        let last = self.entries.len() - 1;
        self.sift_up(last);
    }

    pub fn pop(&mut self) -> Option<QueueEntry<T>> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let minimum = self.entries.pop();

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        minimum
    }

    pub fn peek(&self) -> Option<&QueueEntry<T>> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Current contents in heap-array order, stale entries included.
    /// For instrumentation only.
    pub fn snapshot(&self) -> &[QueueEntry<T>] {
        &self.entries
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.entries[index].precedes(&self.entries[parent]) {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].precedes(&self.entries[smallest]) {
                smallest = left;
            }
            if right < len && self.entries[right].precedes(&self.entries[smallest]) {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}
