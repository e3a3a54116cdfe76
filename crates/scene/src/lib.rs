//! Scene: owned objects keyed by id, updated each tick and drawn each frame.
//!
//! # Invariants
//! - Objects are stored in a `BTreeMap`, so update and draw order follow
//!   id order and do not depend on insertion order.
//! - The scene owns its objects; removal hands the object back by value.

mod error;
mod object;
mod scene;
mod types;

pub use error::SceneError;
pub use object::{Behaviour, Cube, DrawItem, Player, SceneObject};
pub use scene::Scene;
pub use types::{EntityId, Transform};

pub fn crate_info() -> &'static str {
    "vantage-scene v0.1.0"
}
