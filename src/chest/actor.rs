//! # Chest Actor
//!
//! The server half of the chest. It owns the pool state and the receiver
//! end of the mailbox, and processes requests sequentially.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::client::Chest;
use super::message::ChestRequest;
use super::state::ChestState;

/// The actor that owns the resource pool.
///
/// # Concurrency Model
/// Every [`Chest`] handle funnels into one mailbox and the actor
/// processes one request at a time, so the pool needs no `Mutex` or
/// `RwLock`. Each write applies atomically, writes take effect in
/// submission order, and a read queued after a write observes it.
pub struct ChestActor {
    receiver: mpsc::Receiver<ChestRequest>,
    state: ChestState,
}

impl ChestActor {
    /// Creates a new `ChestActor` and its connected [`Chest`] handle.
    ///
    /// `buffer_size` is the mailbox capacity; while it is full, handle
    /// calls wait for space. The actor does nothing until [`run`] is
    /// awaited, usually on its own task.
    ///
    /// [`run`]: ChestActor::run
    pub fn new(buffer_size: usize) -> (Self, Chest) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: ChestState::default(),
        };
        (actor, Chest::new(sender))
    }

    /// Runs the event loop, processing requests until every handle is
    /// dropped and the mailbox closes.
    pub async fn run(mut self) {
        info!("Chest started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ChestRequest::Ingest {
                    resources,
                    respond_to,
                } => {
                    // All resources of one request land before the next
                    // request is looked at, so a batch is atomic to
                    // every queued read.
                    for resource in resources {
                        match self.state.store(resource) {
                            Ok((rtype, id)) => {
                                info!(
                                    entity_type = %rtype,
                                    %id,
                                    size = self.state.resource_count(),
                                    "Pooled"
                                );
                            }
                            Err(rejected) => {
                                warn!(resource = ?rejected, "Dropped resource without string identity");
                            }
                        }
                    }
                    if let Some(respond_to) = respond_to {
                        let _ = respond_to.send(());
                    }
                }
                ChestRequest::Lookup {
                    rtype,
                    id,
                    respond_to,
                } => {
                    let item = self.state.find(&rtype, &id).cloned();
                    debug!(entity_type = %rtype, %id, found = item.is_some(), "Lookup");
                    let _ = respond_to.send(item);
                }
                ChestRequest::Snapshot { respond_to } => {
                    debug!(size = self.state.resource_count(), "Snapshot");
                    let _ = respond_to.send(self.state.clone());
                }
                ChestRequest::Remove {
                    rtype,
                    id,
                    respond_to,
                } => {
                    let removed = self.state.remove(&rtype, &id);
                    if removed {
                        info!(
                            entity_type = %rtype,
                            %id,
                            size = self.state.resource_count(),
                            "Removed"
                        );
                    } else {
                        warn!(entity_type = %rtype, %id, "Not found");
                    }
                    let _ = respond_to.send(removed);
                }
                ChestRequest::Clear { respond_to } => {
                    let dropped = self.state.resource_count();
                    self.state.clear();
                    info!(dropped, "Cleared");
                    if let Some(respond_to) = respond_to {
                        let _ = respond_to.send(());
                    }
                }
            }
        }

        info!(size = self.state.resource_count(), "Shutdown");
    }
}
