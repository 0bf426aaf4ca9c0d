//! `rn-core` — foundational types for the `roadnet` router.
//!
//! This crate is a dependency of every other `rn-*` crate.  It has no `rn-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `IntersectionId`, `RoadId`                               |
//! | [`vertex`]   | `Vertex` (tagged intersection/road graph vertex)         |
//! | [`rng`]      | `LengthSource`, `UniformLengths`, `CyclicLengths`, `SeededRng` |
//! | [`config`]   | `NetworkConfig`, `DuplicatePolicy`                       |
//! | [`error`]    | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, vertices and config. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod vertex;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DuplicatePolicy, NetworkConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{IntersectionId, RoadId};
pub use rng::{CyclicLengths, LengthSource, SeededRng, UniformLengths};
pub use vertex::Vertex;
