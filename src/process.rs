//! Signal-aware task groups.
//!
//! A [`ProcessGroup`] ties a set of long-running tasks to a shared
//! cancellation token. SIGINT, SIGTERM, an external cancellation, or the
//! first task failure all cancel the token; `wait` then drains the remaining
//! tasks and reports the first error.

use std::future::Future;

use anyhow::{anyhow, Result};
use tokio::signal::unix::{signal, SignalKind};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

pub struct ProcessGroup {
    token: CancellationToken,
    tasks: JoinSet<Result<()>>,
}

impl ProcessGroup {
    pub fn new() -> Self {
        Self::with_token(CancellationToken::new())
    }

    /// Creates a group whose lifetime is additionally bound to an external
    /// token.
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            tasks: JoinSet::new(),
        }
    }

    /// A clone of the group's cancellation token, for handing to spawned
    /// work.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Spawns the given future onto the group.
    ///
    /// The first task to return an error cancels the group; its error will be
    /// returned by [`wait`](Self::wait).
    pub fn go<F>(&mut self, future: F)
    where
        F: Future<Output = Result<()>> + Send + 'static,
    {
        self.tasks.spawn(future);
    }

    /// Runs until a process signal arrives, the token is cancelled, or a task
    /// fails, then cancels the group, drains the remaining tasks, and returns
    /// the first error (if any).
    pub async fn wait(mut self) -> Result<()> {
        let mut interrupt = signal(SignalKind::interrupt())?;
        let mut terminate = signal(SignalKind::terminate())?;

        info!("started process");

        let mut first_error = None;
        loop {
            tokio::select! {
                _ = interrupt.recv() => {
                    debug!(signal = "SIGINT", "caught signal");
                    break;
                }
                _ = terminate.recv() => {
                    debug!(signal = "SIGTERM", "caught signal");
                    break;
                }
                _ = self.token.cancelled() => {
                    debug!("cancelled token");
                    break;
                }
                Some(result) = self.tasks.join_next() => {
                    match result {
                        Ok(Ok(())) => {}
                        Ok(Err(err)) => {
                            if first_error.is_none() {
                                first_error = Some(err);
                            }
                            self.token.cancel();
                        }
                        Err(join_err) => {
                            if first_error.is_none() {
                                first_error = Some(anyhow!("task panicked: {join_err}"));
                            }
                            self.token.cancel();
                        }
                    }
                }
            }
        }

        info!("stopping process");
        self.token.cancel();

        while let Some(result) = self.tasks.join_next().await {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
                Err(join_err) => {
                    if first_error.is_none() {
                        first_error = Some(anyhow!("task panicked: {join_err}"));
                    }
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for ProcessGroup {
    fn default() -> Self {
        Self::new()
    }
}
