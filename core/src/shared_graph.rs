use crate::error::Result;
use crate::graph::Graph;
use crate::pathfinding::{ShortestPath, find_shortest_path};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A graph shared between threads.
///
/// Path queries hold the read lock for the whole run, so a mutation waits
/// until every in-flight query has finished and no query ever sees a graph
/// that changes underneath it.
#[derive(Debug, Clone, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<Graph>>,
}

impl SharedGraph {
    pub fn new(graph: Graph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&Graph) -> R) -> R {
        f(&self.read_guard())
    }

    pub fn mutate<R>(&self, f: impl FnOnce(&mut Graph) -> R) -> R {
        f(&mut self.write_guard())
    }

    /// Consistent copy that can outlive the lock.
    pub fn snapshot(&self) -> Graph {
        self.read_guard().clone()
    }

    pub fn find_shortest_path(&self, start: &str, end: &str) -> Result<ShortestPath> {
        let graph = self.read_guard();
        find_shortest_path(&graph, start, end)
    }

    // Graph mutations validate before writing, so a poisoned graph is still
    // consistent.
    fn read_guard(&self) -> RwLockReadGuard<'_, Graph> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Graph> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Graph> for SharedGraph {
    fn from(graph: Graph) -> Self {
        Self::new(graph)
    }
}
