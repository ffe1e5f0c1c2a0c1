//! Mailbox protocol between [`Chest`](super::Chest) handles and the
//! [`ChestActor`](super::ChestActor).

use tokio::sync::oneshot;

use super::state::ChestState;
use crate::JsonObject;

/// Reply channel for one request.
pub(crate) type Reply<T> = oneshot::Sender<T>;

/// One request accepted by the chest actor.
///
/// Requests are handled strictly in mailbox order, which is what makes a
/// write visible to every request queued after it. Write variants carry
/// an optional reply so the same message serves both the confirmed and
/// the fire-and-forget flavor.
pub(crate) enum ChestRequest {
    Ingest {
        resources: Vec<JsonObject>,
        respond_to: Option<Reply<()>>,
    },
    Lookup {
        rtype: String,
        id: String,
        respond_to: Reply<Option<JsonObject>>,
    },
    Snapshot {
        respond_to: Reply<ChestState>,
    },
    Remove {
        rtype: String,
        id: String,
        respond_to: Reply<bool>,
    },
    Clear {
        respond_to: Option<Reply<()>>,
    },
}
