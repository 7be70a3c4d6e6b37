// src/page/notice.rs
use crate::page::lock_surface;
use crate::page::surface::{NodeId, Surface};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A message node waiting for its scheduled removal.
///
/// Dropping the handle does not cancel anything; the node is still removed
/// once the delay elapses.
#[derive(Debug)]
pub struct TransientMessage {
    node: NodeId,
    token: CancellationToken,
    /// `None` when no tokio runtime was available to run the timer.
    task: Option<JoinHandle<()>>,
}

impl TransientMessage {
    /// Spawns the dismiss task on the current tokio runtime. Without a
    /// runtime the node stays on the page until dismissed by hand.
    pub(crate) fn schedule<S>(surface: Arc<Mutex<S>>, node: NodeId, delay: Duration) -> Self
    where
        S: Surface + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                log::warn!("Message {:?} will not auto-dismiss: {}", node, e);
                return Self {
                    node,
                    token,
                    task: None,
                };
            }
        };

        let task = handle.spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    let removed = lock_surface(&surface).remove(node);
                    log::debug!("Message {:?} dismissed after {:?} (removed: {})", node, delay, removed);
                }
                _ = cancelled.cancelled() => {
                    log::debug!("Dismissal of message {:?} cancelled", node);
                }
            }
        });

        Self {
            node,
            token,
            task: Some(task),
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Stops the pending removal. The node stays on the page.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether a timer is running for this message at all.
    pub fn is_scheduled(&self) -> bool {
        self.task.is_some()
    }

    /// Resolves once the message was removed or its removal cancelled.
    /// Returns at once for a message without a timer.
    pub async fn wait(self) {
        let Some(task) = self.task else {
            return;
        };
        if let Err(e) = task.await {
            log::error!("Dismiss task for {:?} failed: {}", self.node, e);
        }
    }
}
