//! The intersection/road network model.
//!
//! # Data layout
//!
//! Intersections live in an `FxHashMap` keyed by their caller-assigned id.
//! Roads live in a `Vec` indexed by `RoadId - 1`: ids are allocated
//! sequentially from 1 and roads are never deleted, so the slot of road `r`
//! is always `r.0 - 1`.
//!
//! Connectivity is stored in one direction only, as each intersection's
//! ordered list of road ids.  The reverse direction (road → intersections)
//! is derived on demand by [`RoadNetwork::incident_intersections`].
//!
//! Every road id in a connection list exists in the road table: a road must
//! be added before it can be connected, and roads are never removed.

use std::fmt;

use log::warn;
use rustc_hash::FxHashMap;

use rn_core::{DuplicatePolicy, IntersectionId, LengthSource, NetworkConfig, RoadId, UniformLengths};

use crate::NetworkResult;

// ── Intersection ──────────────────────────────────────────────────────────────

/// A junction and the roads incident to it, in connection order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Intersection {
    id: IntersectionId,
    connected_roads: Vec<RoadId>,
}

impl Intersection {
    fn new(id: IntersectionId) -> Self {
        Self { id, connected_roads: Vec::new() }
    }

    #[inline]
    pub fn id(&self) -> IntersectionId {
        self.id
    }

    /// Connected road ids in the order they were connected.  May contain
    /// repeats under [`DuplicatePolicy::Allow`].
    #[inline]
    pub fn connected_roads(&self) -> &[RoadId] {
        &self.connected_roads
    }

    #[inline]
    pub fn is_connected_to(&self, road: RoadId) -> bool {
        self.connected_roads.contains(&road)
    }

    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.connected_roads.is_empty()
    }
}

// ── Road ──────────────────────────────────────────────────────────────────────

/// A named, traversable link.  Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    pub id: RoadId,
    /// Not necessarily unique across the network.
    pub name: String,
    /// Traversal cost.  Always ≥ 1.
    pub length: u32,
}

// ── Connection outcome ────────────────────────────────────────────────────────

/// What [`RoadNetwork::connect_intersection_to_road`] did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Connection {
    Connected,
    /// The road was already listed and the policy is
    /// [`DuplicatePolicy::Ignore`].
    DuplicateIgnored,
    UnknownIntersection,
    UnknownRoad,
}

impl Connection {
    /// `true` if the road is now listed on the intersection (whether by this
    /// call or an earlier one).
    #[inline]
    pub fn is_connected(self) -> bool {
        matches!(self, Connection::Connected | Connection::DuplicateIgnored)
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Intersections, roads, and the incidence facts between them.
///
/// # Example
///
/// ```
/// use rn_core::{CyclicLengths, IntersectionId, NetworkConfig, RoadId};
/// use rn_network::RoadNetwork;
///
/// let mut net = RoadNetwork::new(NetworkConfig::default(), CyclicLengths::constant(5)).unwrap();
/// net.add_intersection(IntersectionId(1));
/// net.add_intersection(IntersectionId(2));
/// let r = net.add_road("R");
/// assert_eq!(r, RoadId(1));
/// net.connect_intersection_to_road(IntersectionId(1), r);
/// net.connect_intersection_to_road(IntersectionId(2), r);
/// assert_eq!(net.incident_intersections(r), vec![IntersectionId(1), IntersectionId(2)]);
/// ```
pub struct RoadNetwork {
    config: NetworkConfig,
    intersections: FxHashMap<IntersectionId, Intersection>,
    /// Slot `i` holds `RoadId(i + 1)`.
    roads: Vec<Road>,
    next_road_id: RoadId,
    lengths: Box<dyn LengthSource>,
}

impl RoadNetwork {
    /// Create an empty network drawing road lengths from `lengths`.
    pub fn new(config: NetworkConfig, lengths: impl LengthSource + 'static) -> NetworkResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            intersections: FxHashMap::default(),
            roads: Vec::new(),
            next_road_id: RoadId::FIRST,
            lengths: Box::new(lengths),
        })
    }

    /// Default configuration with uniform 1–20 lengths seeded by `seed`.
    pub fn with_defaults(seed: u64) -> Self {
        Self {
            config: NetworkConfig::default(),
            intersections: FxHashMap::default(),
            roads: Vec::new(),
            next_road_id: RoadId::FIRST,
            lengths: Box::new(UniformLengths::reference(seed)),
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert an intersection with no connections.  No-op if `id` exists.
    ///
    /// Returns `true` if the intersection was newly inserted.
    pub fn add_intersection(&mut self, id: IntersectionId) -> bool {
        if self.intersections.contains_key(&id) {
            return false;
        }
        self.intersections.insert(id, Intersection::new(id));
        true
    }

    /// Allocate the next road id and store a road whose length is drawn from
    /// the network's length source.
    pub fn add_road(&mut self, name: impl Into<String>) -> RoadId {
        let length = self.lengths.next_length();
        self.add_road_with_length(name, length)
    }

    /// Like [`add_road`](Self::add_road) with a caller-chosen length.
    /// A zero length is clamped to 1.
    pub fn add_road_with_length(&mut self, name: impl Into<String>, length: u32) -> RoadId {
        let id = self.next_road_id;
        let name = name.into();
        let length = if length == 0 {
            warn!("road {id} ({name:?}) given zero length; clamping to 1");
            1
        } else {
            length
        };
        self.next_road_id = id.next();
        self.roads.push(Road { id, name, length });
        id
    }

    /// Append `road` to the connection list of `intersection`.
    ///
    /// Unknown ids are a no-op, reported through the returned [`Connection`]
    /// and a `warn` log line.
    pub fn connect_intersection_to_road(
        &mut self,
        intersection: IntersectionId,
        road: RoadId,
    ) -> Connection {
        if self.road(road).is_none() {
            warn!("connect {intersection} to {road}: unknown road; ignored");
            return Connection::UnknownRoad;
        }
        let policy = self.config.duplicate_connections;
        let Some(node) = self.intersections.get_mut(&intersection) else {
            warn!("connect {intersection} to {road}: unknown intersection; ignored");
            return Connection::UnknownIntersection;
        };
        if policy == DuplicatePolicy::Ignore && node.is_connected_to(road) {
            return Connection::DuplicateIgnored;
        }
        node.connected_roads.push(road);
        Connection::Connected
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn intersection(&self, id: IntersectionId) -> Option<&Intersection> {
        self.intersections.get(&id)
    }

    #[inline]
    pub fn road(&self, id: RoadId) -> Option<&Road> {
        let slot = (id.0 as usize).checked_sub(1)?;
        self.roads.get(slot)
    }

    #[inline]
    pub fn contains_intersection(&self, id: IntersectionId) -> bool {
        self.intersections.contains_key(&id)
    }

    #[inline]
    pub fn contains_road(&self, id: RoadId) -> bool {
        self.road(id).is_some()
    }

    /// Connected roads of `id`, or `None` if the intersection is unknown.
    pub fn connected_roads(&self, id: IntersectionId) -> Option<&[RoadId]> {
        self.intersection(id).map(Intersection::connected_roads)
    }

    /// All intersection ids, ascending.
    pub fn intersection_ids(&self) -> Vec<IntersectionId> {
        let mut ids: Vec<IntersectionId> = self.intersections.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// All intersections, ascending by id.
    pub fn intersections(&self) -> Vec<&Intersection> {
        let mut all: Vec<&Intersection> = self.intersections.values().collect();
        all.sort_unstable_by_key(|i| i.id);
        all
    }

    /// All roads, ascending by id.
    #[inline]
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Intersections listing `road`, ascending and without repeats.
    ///
    /// Derived by scanning every intersection: O(total connections).
    pub fn incident_intersections(&self, road: RoadId) -> Vec<IntersectionId> {
        let mut ids: Vec<IntersectionId> = self
            .intersections
            .values()
            .filter(|i| i.is_connected_to(road))
            .map(|i| i.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn intersection_count(&self) -> usize {
        self.intersections.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Total entries across all connection lists, repeats included.
    pub fn connection_count(&self) -> usize {
        self.intersections.values().map(|i| i.connected_roads.len()).sum()
    }

    /// The id the next [`add_road`](Self::add_road) call will return.
    pub fn next_road_id(&self) -> RoadId {
        self.next_road_id
    }

    pub fn is_empty(&self) -> bool {
        self.intersections.is_empty() && self.roads.is_empty()
    }
}

impl fmt::Debug for RoadNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoadNetwork")
            .field("intersections", &self.intersections.len())
            .field("roads", &self.roads.len())
            .field("connections", &self.connection_count())
            .field("next_road_id", &self.next_road_id)
            .finish()
    }
}
