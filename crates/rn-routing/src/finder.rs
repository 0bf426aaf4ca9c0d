//! Path-finder trait and the default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Callers route through the [`PathFinder`] trait, so an application can swap
//! in a different search (bidirectional, A*, a cached graph) without touching
//! the describer or the network model.

use log::warn;

use rn_core::IntersectionId;
use rn_network::RoadNetwork;

use crate::{Path, PathOutcome, QueryOptions, RoutingResult, VertexGraph};

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one finder can serve queries from
/// several threads holding read access to the same network.
pub trait PathFinder: Send + Sync {
    /// Find the minimum-total-length path from `start` to `end`, reporting
    /// unknown endpoints separately from unreachable ones.
    fn locate(
        &self,
        network: &RoadNetwork,
        start: IntersectionId,
        end: IntersectionId,
        opts: &QueryOptions,
    ) -> RoutingResult<PathOutcome>;

    /// Shortest path, or `None` when there is none.
    ///
    /// Unknown endpoints also yield `None`, with a `warn` log line so the
    /// caller's mistake is not silently lost.
    fn shortest_path(
        &self,
        network: &RoadNetwork,
        start: IntersectionId,
        end: IntersectionId,
    ) -> RoutingResult<Option<Path>> {
        let outcome = self.locate(network, start, end, &QueryOptions::default())?;
        match &outcome {
            PathOutcome::UnknownStart(id) => warn!("shortest path: unknown start {id}"),
            PathOutcome::UnknownEnd(id) => warn!("shortest path: unknown end {id}"),
            PathOutcome::Found(_) | PathOutcome::NoPath => {}
        }
        Ok(outcome.into_path())
    }
}

// ── DijkstraPathFinder ────────────────────────────────────────────────────────

/// Dijkstra's algorithm over a [`VertexGraph`] rebuilt from the live network
/// on every call.  O((V + E) log V) per query.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraPathFinder;

impl PathFinder for DijkstraPathFinder {
    fn locate(
        &self,
        network: &RoadNetwork,
        start: IntersectionId,
        end: IntersectionId,
        opts: &QueryOptions,
    ) -> RoutingResult<PathOutcome> {
        VertexGraph::build(network).locate(start, end, opts)
    }
}

// ── Batch queries ─────────────────────────────────────────────────────────────

/// Answer many queries against one graph build.
///
/// Results are returned in the order of `pairs`.  With the `parallel` feature
/// the queries run on Rayon's pool; the graph is shared read-only.
pub fn shortest_paths(
    network: &RoadNetwork,
    pairs: &[(IntersectionId, IntersectionId)],
    opts: &QueryOptions,
) -> Vec<RoutingResult<PathOutcome>> {
    let graph = VertexGraph::build(network);

    #[cfg(not(feature = "parallel"))]
    {
        pairs
            .iter()
            .map(|&(start, end)| graph.locate(start, end, opts))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        pairs
            .par_iter()
            .map(|&(start, end)| graph.locate(start, end, opts))
            .collect()
    }
}
