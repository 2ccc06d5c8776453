//! Runs local futures to completion alongside the UI loop.

use std::future::Future;

#[cfg(not(target_arch = "wasm32"))]
use futures::executor::{LocalPool, LocalSpawner};
#[cfg(not(target_arch = "wasm32"))]
use futures::task::LocalSpawnExt;

/// Spawns `!Send` futures: onto the browser's microtask queue on the web,
/// onto a pool polled once per frame natively.
pub struct TaskRunner {
    #[cfg(not(target_arch = "wasm32"))]
    pool: LocalPool,
    #[cfg(not(target_arch = "wasm32"))]
    spawner: LocalSpawner,
}

impl std::fmt::Debug for TaskRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRunner").finish_non_exhaustive()
    }
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TaskRunner {
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        Self { pool, spawner }
    }

    pub fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        if let Err(err) = self.spawner.spawn_local(task) {
            log::error!("could not spawn task: {err}");
        }
    }

    /// Drive every spawned task as far as it can go without blocking
    pub fn poll(&mut self) {
        self.pool.run_until_stalled();
    }
}

#[cfg(target_arch = "wasm32")]
impl TaskRunner {
    pub fn new() -> Self {
        Self {}
    }

    pub fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        wasm_bindgen_futures::spawn_local(task);
    }

    /// Tasks are driven by the browser
    pub fn poll(&mut self) {}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn spawned_tasks_run_when_polled() {
        let mut runner = TaskRunner::new();
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();
        runner.spawn(async move { flag.set(true) });

        assert!(!done.get());
        runner.poll();
        assert!(done.get());
    }
}
