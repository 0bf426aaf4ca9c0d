//! `rn-network` — the intersection/road network model.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`model`]    | `RoadNetwork`, `Intersection`, `Road`, `Connection`        |
//! | [`repair`]   | `RoadNetwork::ensure_vertex_connectivity`                  |
//! | [`snapshot`] | `NetworkSnapshot`, `ConnectionView` (read-only export)     |
//! | [`shared`]   | `SharedNetwork` (single writer, many readers)              |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on roads and snapshots.    |

pub mod error;
pub mod model;
pub mod repair;
pub mod shared;
pub mod snapshot;


pub use error::{NetworkError, NetworkResult};
pub use model::{Connection, Intersection, Road, RoadNetwork};
pub use shared::SharedNetwork;
pub use snapshot::{ConnectionView, NetworkSnapshot};
