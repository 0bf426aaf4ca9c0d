//! Turning a path into the road names a driver follows.

use rn_core::{IntersectionId, RoadId, Vertex};
use rn_network::{RoadNetwork, SharedNetwork};

use crate::{Path, PathFinder, RoutingError, RoutingResult};

/// Maps paths to road names, re-checking every step against the network.
#[derive(Copy, Clone, Debug)]
pub struct RouteDescriber<'a> {
    network: &'a RoadNetwork,
}

impl<'a> RouteDescriber<'a> {
    pub fn new(network: &'a RoadNetwork) -> Self {
        Self { network }
    }

    /// Road names along `path`, in order.
    ///
    /// `None` in gives `Ok(None)` out.  A trivial path gives an empty list.
    /// The result has `(path.len() - 1) / 2` entries.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::MalformedPath`] if the vertices do not alternate
    ///   intersection/road and start and end on an intersection.
    /// - [`RoutingError::InconsistentPath`] if a road is not connected to an
    ///   intersection next to it in the path.
    pub fn describe(&self, path: Option<&Path>) -> RoutingResult<Option<Vec<String>>> {
        let Some(path) = path else {
            return Ok(None);
        };
        check_shape(&path.vertices)?;

        let mut names = Vec::with_capacity(path.hop_count());
        for k in (1..path.vertices.len()).step_by(2) {
            let (Some(before), Some(road), Some(after)) = (
                path.vertices[k - 1].as_intersection(),
                path.vertices[k].as_road(),
                path.vertices[k + 1].as_intersection(),
            ) else {
                return Err(RoutingError::MalformedPath { position: k, reason: "expected a road" });
            };
            self.check_link(before, road)?;
            self.check_link(after, road)?;
            let name = match self.network.road(road) {
                Some(r) => r.name.clone(),
                None => return Err(RoutingError::InconsistentPath { intersection: before, road }),
            };
            names.push(name);
        }
        Ok(Some(names))
    }

    fn check_link(&self, intersection: IntersectionId, road: RoadId) -> RoutingResult<()> {
        let linked = self
            .network
            .intersection(intersection)
            .is_some_and(|i| i.is_connected_to(road));
        if linked {
            Ok(())
        } else {
            Err(RoutingError::InconsistentPath { intersection, road })
        }
    }
}

fn check_shape(vertices: &[Vertex]) -> RoutingResult<()> {
    if vertices.is_empty() {
        return Err(RoutingError::MalformedPath { position: 0, reason: "path is empty" });
    }
    if vertices.len() % 2 == 0 {
        return Err(RoutingError::MalformedPath {
            position: vertices.len() - 1,
            reason:   "path must end on an intersection",
        });
    }
    for (position, v) in vertices.iter().enumerate() {
        let want_intersection = position % 2 == 0;
        if v.is_intersection() != want_intersection {
            let reason = if want_intersection {
                "expected an intersection"
            } else {
                "expected a road"
            };
            return Err(RoutingError::MalformedPath { position, reason });
        }
    }
    Ok(())
}

/// Shortest path from `start` to `end`, described as road names.
///
/// `Ok(None)` when no path exists or an endpoint is unknown.
pub fn routing_suggestions(
    network: &RoadNetwork,
    finder: &impl PathFinder,
    start: IntersectionId,
    end: IntersectionId,
) -> RoutingResult<Option<Vec<String>>> {
    let path = finder.shortest_path(network, start, end)?;
    RouteDescriber::new(network).describe(path.as_ref())
}

/// [`routing_suggestions`] under the read lock of a shared network, so the
/// path and its description see the same network state.
pub fn routing_suggestions_shared(
    network: &SharedNetwork,
    finder: &impl PathFinder,
    start: IntersectionId,
    end: IntersectionId,
) -> RoutingResult<Option<Vec<String>>> {
    network.read(|net| routing_suggestions(net, finder, start, end))?
}
