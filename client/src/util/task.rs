//! Fetch tasks tied to a page's lifetime.
//!
//! A page creates one `MountGuard`; completions spawned through it are
//! dropped once the page has been unmounted.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    /// A guard that stays alive until `cancel` is called.
    pub fn detached() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// A guard cancelled by the current reactive owner's cleanup.
    pub fn new() -> Self {
        let guard = Self::detached();
        let cleanup = guard.clone();
        leptos::prelude::on_cleanup(move || cleanup.cancel());
        guard
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Run `fut` on the browser event loop and hand its output to `apply`
    /// only if the guard is still alive when it resolves.
    pub fn spawn<Fut, F>(&self, fut: Fut, apply: F)
    where
        Fut: Future + 'static,
        F: FnOnce(Fut::Output) + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let guard = self.clone();
            leptos::task::spawn_local(async move {
                let output = fut.await;
                guard.deliver(output, apply);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (fut, apply);
        }
    }

    /// Apply `output` unless the guard was cancelled.
    pub fn deliver<T, F>(&self, output: T, apply: F) -> bool
    where
        F: FnOnce(T),
    {
        if !self.is_alive() {
            return false;
        }
        apply(output);
        true
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
