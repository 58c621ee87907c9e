//! Task id interning.
//!
//! Maps string task ids to dense integer indices in task-set order, so the
//! passes can keep per-task values in plain vectors.

use rustc_hash::FxHashMap;

/// Interned task ID (u32 for compact storage and fast hashing).
pub type TaskIdInt = u32;

/// String interner that maps task ID strings to integers.
///
/// Indices are assigned in insertion order, so iterating `0..len()` visits
/// tasks in the order the caller supplied them.
#[derive(Debug, Clone)]
pub struct TaskIdInterner {
    to_int: FxHashMap<String, TaskIdInt>,
    from_int: Vec<String>,
}

impl TaskIdInterner {
    /// Create a new interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_int: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_int: Vec::with_capacity(capacity),
        }
    }

    /// Intern a string that must not be present yet.
    ///
    /// Returns `None` if the string was already interned; the existing
    /// mapping is left untouched.
    pub fn insert_new(&mut self, s: &str) -> Option<TaskIdInt> {
        if self.to_int.contains_key(s) {
            return None;
        }
        let id = self.from_int.len() as TaskIdInt;
        self.from_int.push(s.to_string());
        self.to_int.insert(s.to_string(), id);
        Some(id)
    }

    /// Get the integer ID for a string, if it exists.
    #[inline]
    pub fn get(&self, s: &str) -> Option<TaskIdInt> {
        self.to_int.get(s).copied()
    }

    /// Get the string for an integer ID.
    #[inline]
    pub fn resolve(&self, id: TaskIdInt) -> Option<&str> {
        self.from_int.get(id as usize).map(|s| s.as_str())
    }

    /// Resolve a sequence of integer IDs back to owned strings.
    pub fn resolve_all(&self, ids: &[TaskIdInt]) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| self.resolve(id))
            .map(str::to_string)
            .collect()
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.from_int.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.from_int.is_empty()
    }
}

impl Default for TaskIdInterner {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
