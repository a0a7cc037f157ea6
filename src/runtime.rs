//! Local Task Scheduling
//!
//! Timers and fire-and-forget tasks on a single-threaded event loop.

use std::time::Duration;

use futures::future::LocalBoxFuture;

pub trait Scheduler {
    /// Runs `task` to completion in the background on the current thread.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Tokio-backed scheduler for native hosts.
///
/// Spawned tasks are queued on the scheduler's own `LocalSet`, so `spawn`
/// works from any context on the owning thread. They make progress while the
/// host drives the set through [`TokioScheduler::run_until`].
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct TokioScheduler {
    tasks: std::rc::Rc<tokio::task::LocalSet>,
}

#[cfg(not(target_arch = "wasm32"))]
impl TokioScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drives `future` and every spawned task until `future` completes.
    pub async fn run_until<F: std::future::Future>(&self, future: F) -> F::Output {
        self.tasks.run_until(future).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Scheduler for TokioScheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.tasks.spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[tokio::test]
    async fn test_spawn_outside_run_until_is_queued() {
        let scheduler = TokioScheduler::new();
        let ran = Rc::new(Cell::new(false));

        let flag = Rc::clone(&ran);
        scheduler.spawn(Box::pin(async move { flag.set(true) }));
        assert!(!ran.get());

        scheduler.run_until(tokio::task::yield_now()).await;
        assert!(ran.get());
    }
}
