//! Connectivity repair: give every isolated intersection a road.
//!
//! Repair only guarantees that no intersection has an empty connection list.
//! It does not join disjoint clusters: each bridge road touches exactly one
//! intersection, so a repaired intersection is reachable only from itself.

use log::info;

use rn_core::{IntersectionId, RoadId};

use crate::RoadNetwork;

impl RoadNetwork {
    /// For each intersection with no connected road, add a road named
    /// `"{bridge_prefix} {id}"` and connect it.
    ///
    /// Intersections are visited in ascending id order, so bridge road ids are
    /// deterministic.  Returns the `(intersection, bridge road)` pairs created.
    pub fn ensure_vertex_connectivity(&mut self) -> Vec<(IntersectionId, RoadId)> {
        let isolated: Vec<IntersectionId> = self
            .intersections()
            .into_iter()
            .filter(|i| i.is_isolated())
            .map(|i| i.id())
            .collect();

        let mut bridges = Vec::with_capacity(isolated.len());
        for id in isolated {
            let name = self.config().bridge_name(id);
            let road = self.add_road(name);
            let outcome = self.connect_intersection_to_road(id, road);
            debug_assert!(outcome.is_connected());
            bridges.push((id, road));
        }

        if !bridges.is_empty() {
            info!("connectivity repair added {} bridge road(s)", bridges.len());
        }
        bridges
    }

    /// `true` if every intersection has at least one connected road.
    pub fn is_vertex_connected(&self) -> bool {
        self.intersections().iter().all(|i| !i.is_isolated())
    }
}
