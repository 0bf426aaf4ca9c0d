//! Path results.

use rn_core::{IntersectionId, RoadId, Vertex};

/// A walk through the bipartite graph: intersection, road, intersection, …,
/// starting and ending on an intersection.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub vertices: Vec<Vertex>,
    /// Sum of the lengths of the roads traversed.  0 for a trivial path.
    pub total_length: u64,
}

impl Path {
    /// The single-vertex path from `at` to itself.
    pub fn trivial(at: IntersectionId) -> Self {
        Self { vertices: vec![Vertex::Intersection(at)], total_length: 0 }
    }

    pub fn start(&self) -> Option<IntersectionId> {
        self.vertices.first().and_then(|v| v.as_intersection())
    }

    pub fn end(&self) -> Option<IntersectionId> {
        self.vertices.last().and_then(|v| v.as_intersection())
    }

    /// Roads in traversal order.
    pub fn roads(&self) -> impl Iterator<Item = RoadId> + '_ {
        self.vertices.iter().filter_map(|v| v.as_road())
    }

    /// Intersections in traversal order, endpoints included.
    pub fn intersections(&self) -> impl Iterator<Item = IntersectionId> + '_ {
        self.vertices.iter().filter_map(|v| v.as_intersection())
    }

    /// Number of roads traversed.
    pub fn hop_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// `true` if the start and end are the same intersection.
    pub fn is_trivial(&self) -> bool {
        self.vertices.len() <= 1
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The untagged alternating id sequence, e.g. `[1, 1, 2]` for
    /// intersection 1 → road 1 → intersection 2.
    pub fn raw_ids(&self) -> Vec<u32> {
        self.vertices.iter().map(|v| v.raw()).collect()
    }
}

/// The full answer to a path query, keeping apart the reasons a path may be
/// missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOutcome {
    Found(Path),
    /// Both endpoints exist but lie in different components.
    NoPath,
    UnknownStart(IntersectionId),
    UnknownEnd(IntersectionId),
}

impl PathOutcome {
    pub fn into_path(self) -> Option<Path> {
        match self {
            PathOutcome::Found(p) => Some(p),
            _ => None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            PathOutcome::Found(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }
}
