//! # Chest Handle
//!
//! The client half of the chest: a cheap-to-clone handle that forwards
//! requests to the actor over its mailbox.

use tokio::sync::{mpsc, oneshot};

use super::message::ChestRequest;
use super::state::ChestState;
use crate::error::ChestError;
use crate::JsonObject;

/// A shareable handle to a running [`ChestActor`](super::ChestActor).
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive and
///   every clone talks to the same pool.
/// * **Ordered** – requests from one handle reach the actor in call
///   order; a lookup issued after an ingest sees its effect.
#[derive(Clone)]
pub struct Chest {
    sender: mpsc::Sender<ChestRequest>,
}

impl Chest {
    pub(crate) fn new(sender: mpsc::Sender<ChestRequest>) -> Self {
        Self { sender }
    }

    /// Pools a resource and waits until the write has been applied.
    ///
    /// A resource already pooled under the same `(type, id)` is merged
    /// rather than duplicated; one whose `type` or `id` is missing or
    /// not a string is dropped.
    pub async fn ingest(&self, resource: JsonObject) -> Result<(), ChestError> {
        self.ingest_all(vec![resource]).await
    }

    /// Pools a batch of resources as one write and waits until it has
    /// been applied.
    ///
    /// The whole batch is atomic: no read ever observes only part of
    /// it. This is how a parsed document lands its primary and included
    /// resources together.
    pub async fn ingest_all(&self, resources: Vec<JsonObject>) -> Result<(), ChestError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ChestRequest::Ingest {
                resources,
                respond_to: Some(respond_to),
            })
            .await
            .map_err(|_| ChestError::Closed)?;
        response.await.map_err(|_| ChestError::Dropped)
    }

    /// Pools a resource without waiting for it to be applied.
    ///
    /// The write is queued before this returns, so it still lands ahead
    /// of any request made through this handle afterwards.
    pub async fn ingest_detached(&self, resource: JsonObject) -> Result<(), ChestError> {
        self.ingest_all_detached(vec![resource]).await
    }

    /// Pools a batch of resources as one write, without waiting for it
    /// to be applied. Atomic like [`Chest::ingest_all`], ordered like
    /// [`Chest::ingest_detached`].
    pub async fn ingest_all_detached(&self, resources: Vec<JsonObject>) -> Result<(), ChestError> {
        self.sender
            .send(ChestRequest::Ingest {
                resources,
                respond_to: None,
            })
            .await
            .map_err(|_| ChestError::Closed)
    }

    /// Fetches a copy of one pooled resource.
    pub async fn lookup(
        &self,
        rtype: &str,
        id: &str,
    ) -> Result<Option<JsonObject>, ChestError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ChestRequest::Lookup {
                rtype: rtype.to_owned(),
                id: id.to_owned(),
                respond_to,
            })
            .await
            .map_err(|_| ChestError::Closed)?;
        response.await.map_err(|_| ChestError::Dropped)
    }

    /// Fetches a detached copy of the whole pool.
    pub async fn snapshot(&self) -> Result<ChestState, ChestError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ChestRequest::Snapshot { respond_to })
            .await
            .map_err(|_| ChestError::Closed)?;
        response.await.map_err(|_| ChestError::Dropped)
    }

    /// Removes one resource, reporting whether it was present.
    pub async fn remove(&self, rtype: &str, id: &str) -> Result<bool, ChestError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ChestRequest::Remove {
                rtype: rtype.to_owned(),
                id: id.to_owned(),
                respond_to,
            })
            .await
            .map_err(|_| ChestError::Closed)?;
        response.await.map_err(|_| ChestError::Dropped)
    }

    /// Empties the pool and waits until the write has been applied.
    pub async fn clear(&self) -> Result<(), ChestError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ChestRequest::Clear {
                respond_to: Some(respond_to),
            })
            .await
            .map_err(|_| ChestError::Closed)?;
        response.await.map_err(|_| ChestError::Dropped)
    }

    /// Serializes the current pool contents into a portable blob.
    pub async fn export(&self) -> Result<Vec<u8>, ChestError> {
        let snapshot = self.snapshot().await?;
        Ok(snapshot.to_bytes()?)
    }

    /// Pools every resource from a blob produced by [`Chest::export`].
    ///
    /// Imported resources go through the ordinary ingest path, so they
    /// merge into resources already pooled instead of replacing them.
    pub async fn import(&self, bytes: &[u8]) -> Result<(), ChestError> {
        let state = ChestState::from_bytes(bytes)?;
        self.ingest_all(state.into_resources().collect()).await
    }
}
