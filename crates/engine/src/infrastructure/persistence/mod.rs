//! Local stand-ins for host persistence.

mod json_actor_store;

pub use json_actor_store::{JsonFileActorStore, StoredActor};
