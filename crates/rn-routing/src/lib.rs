//! `rn-routing` — shortest paths and route descriptions.
//!
//! Roads are vertices of the search graph, not edges, because one road may
//! touch any number of intersections.  See [`graph`] for the layout.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`graph`]    | `VertexGraph` (CSR bipartite graph), `QueryOptions`        |
//! | [`finder`]   | `PathFinder` trait, `DijkstraPathFinder`, `shortest_paths` |
//! | [`path`]     | `Path`, `PathOutcome`                                      |
//! | [`describe`] | `RouteDescriber`, `routing_suggestions`                    |
//! | [`error`]    | `RoutingError`, `RoutingResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `shortest_paths` answers queries on Rayon's thread pool.  |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `Path`.              |

pub mod describe;
pub mod error;
pub mod finder;
pub mod graph;
pub mod path;

#[cfg(test)]
mod tests;

pub use describe::{RouteDescriber, routing_suggestions, routing_suggestions_shared};
pub use error::{RoutingError, RoutingResult};
pub use finder::{DijkstraPathFinder, PathFinder, shortest_paths};
pub use graph::{QueryOptions, VertexGraph};
pub use path::{Path, PathOutcome};
