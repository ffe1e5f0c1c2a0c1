//! # Resource Chest
//!
//! A concurrent, deduplicating pool of JSON:API resource objects keyed
//! by `(type, id)`. The chest is split into a server and a client half
//! in the usual actor arrangement:
//!
//! * [`ChestActor`] owns the pool and processes requests one at a time
//!   from a bounded mailbox;
//! * [`Chest`] is the cloneable handle tasks use to talk to it.
//!
//! Writes come in two flavors: confirmed ([`Chest::ingest`]) and
//! fire-and-forget ([`Chest::ingest_detached`]). Both are applied in
//! submission order; the detached flavor just returns without waiting.
//! The batch forms ([`Chest::ingest_all`] and friends) land a whole
//! group of resources as one mailbox message, so readers see either
//! none of it or all of it.
//!
//! ```no_run
//! use jsonapi_chest::chest;
//! use serde_json::json;
//!
//! # async fn demo() -> Result<(), jsonapi_chest::ChestError> {
//! let pool = chest::spawn();
//! let user = json!({"id": "4", "type": "users", "attributes": {"name": "Tester"}});
//! pool.ingest(user.as_object().cloned().unwrap_or_default()).await?;
//!
//! let found = pool.lookup("users", "4").await?;
//! assert!(found.is_some());
//! # Ok(())
//! # }
//! ```

mod actor;
mod client;
mod merge;
mod message;
mod state;

pub use actor::ChestActor;
pub use client::Chest;
pub use state::ChestState;

/// Mailbox capacity used by [`spawn`].
pub const DEFAULT_MAILBOX: usize = 64;

/// Creates a chest, spawns its actor onto the current Tokio runtime,
/// and returns the handle.
///
/// The actor shuts down once the returned handle and all of its clones
/// are dropped. Use [`ChestActor::new`] instead to pick the mailbox
/// capacity or to run the actor on a runtime of your own.
pub fn spawn() -> Chest {
    let (actor, chest) = ChestActor::new(DEFAULT_MAILBOX);
    tokio::spawn(actor.run());
    chest
}
