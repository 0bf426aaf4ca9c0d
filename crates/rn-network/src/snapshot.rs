//! Read-only network snapshots for rendering and export.
//!
//! A snapshot is a plain-data copy: holding one does not borrow the network,
//! so it can be handed to a renderer on another thread while the network
//! keeps changing.

use rn_core::{IntersectionId, RoadId, SeededRng};

use crate::{Road, RoadNetwork};

/// One incidence fact, optionally labelled with a congestion level.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectionView {
    pub intersection: IntersectionId,
    pub road: RoadId,
    /// 1 (free-flowing) to 5 (jammed).  Display only; never a routing cost.
    pub congestion: Option<u8>,
}

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkSnapshot {
    /// Ascending.
    pub intersections: Vec<IntersectionId>,
    /// Ascending by id.
    pub roads: Vec<Road>,
    /// Grouped by road (ascending), then intersection (ascending).  Repeated
    /// connections appear once.
    pub connections: Vec<ConnectionView>,
}

impl NetworkSnapshot {
    /// Roads touching `intersection` in this snapshot.
    pub fn roads_at(&self, intersection: IntersectionId) -> impl Iterator<Item = RoadId> + '_ {
        self.connections
            .iter()
            .filter(move |c| c.intersection == intersection)
            .map(|c| c.road)
    }
}

impl RoadNetwork {
    /// Copy the network's current state without congestion labels.
    pub fn snapshot(&self) -> NetworkSnapshot {
        let mut connections = Vec::with_capacity(self.connection_count());
        for road in self.roads() {
            for intersection in self.incident_intersections(road.id) {
                connections.push(ConnectionView { intersection, road: road.id, congestion: None });
            }
        }
        NetworkSnapshot {
            intersections: self.intersection_ids(),
            roads: self.roads().to_vec(),
            connections,
        }
    }

    /// Copy the network's current state, labelling each connection with a
    /// congestion level drawn from `rng`.
    pub fn snapshot_with_congestion(&self, rng: &mut SeededRng) -> NetworkSnapshot {
        let mut snap = self.snapshot();
        for c in &mut snap.connections {
            c.congestion = Some(rng.congestion());
        }
        snap
    }
}
