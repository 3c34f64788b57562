//! Background task plumbing
//!
//! egui redraws on one thread and must never wait on storage or the
//! network. Controllers hand futures to the [`TaskRunner`], keep the
//! returned [`PendingTask`], and check it once per frame.

use std::future::Future;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};

/// Owns the tokio runtime that drives storage and network futures
#[derive(Debug, Clone)]
pub struct TaskRunner {
    runtime: Arc<Runtime>,
}

impl TaskRunner {
    pub fn new() -> std::io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("catalog-worker")
            .enable_all()
            .build()?;
        Ok(Self {
            runtime: Arc::new(runtime),
        })
    }

    /// Run `future` in the background; the result arrives on the returned task
    pub fn spawn<F, T>(&self, future: F) -> PendingTask<T>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = channel();
        self.runtime.spawn(async move {
            let _ = tx.send(future.await);
        });
        PendingTask { rx }
    }

    /// Run a blocking closure on its own thread (native dialogs)
    pub fn spawn_blocking_thread<F, T>(&self, work: F) -> PendingTask<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(work());
        });
        PendingTask { rx }
    }

    /// Block the calling thread on `future`. Only for startup, never per frame.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

/// Handle to a result that has not necessarily arrived yet
#[derive(Debug)]
pub struct PendingTask<T> {
    rx: Receiver<T>,
}

/// What a non-blocking check of a [`PendingTask`] found
#[derive(Debug, PartialEq, Eq)]
pub enum TaskPoll<T> {
    Ready(T),
    Pending,
    /// The task panicked or was dropped before sending a result
    Lost,
}

impl<T> PendingTask<T> {
    pub fn poll(&self) -> TaskPoll<T> {
        match self.rx.try_recv() {
            Ok(value) => TaskPoll::Ready(value),
            Err(TryRecvError::Empty) => TaskPoll::Pending,
            Err(TryRecvError::Disconnected) => TaskPoll::Lost,
        }
    }
}
