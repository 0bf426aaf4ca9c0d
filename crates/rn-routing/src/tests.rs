//! Unit tests for rn-routing.
//!
//! All tests use hand-built networks with `CyclicLengths` (or seeded random
//! networks for the brute-force comparison) so every cost is known.

#[cfg(test)]
mod helpers {
    use rn_core::{CyclicLengths, IntersectionId, NetworkConfig, RoadId};
    use rn_network::RoadNetwork;

    pub fn i(id: u32) -> IntersectionId {
        IntersectionId(id)
    }

    pub fn empty(lengths: &[u32]) -> RoadNetwork {
        RoadNetwork::new(NetworkConfig::default(), CyclicLengths::new(lengths.to_vec())).unwrap()
    }

    /// Add a road of `length` connected to each of `at`.
    pub fn road(net: &mut RoadNetwork, name: &str, length: u32, at: &[u32]) -> RoadId {
        let r = net.add_road_with_length(name, length);
        for &x in at {
            net.add_intersection(IntersectionId(x));
            net.connect_intersection_to_road(IntersectionId(x), r);
        }
        r
    }

    /// Intersections {1, 2}; road R (id 1, length 5) connects both.
    pub fn two_way() -> RoadNetwork {
        let mut net = empty(&[5]);
        net.add_intersection(i(1));
        net.add_intersection(i(2));
        let r = net.add_road("R");
        net.connect_intersection_to_road(i(1), r);
        net.connect_intersection_to_road(i(2), r);
        net
    }

    /// Intersections 1..=4.
    ///
    /// ```text
    ///   A (1): 1-2     B (1): 2-4     C (10): 1-4     D (2): 3 alone
    /// ```
    ///
    /// 1→4 via A,B costs 2; via C costs 10.
    pub fn diamond() -> (RoadNetwork, [RoadId; 4]) {
        let mut net = empty(&[1]);
        let a = road(&mut net, "A", 1, &[1, 2]);
        let b = road(&mut net, "B", 1, &[2, 4]);
        let c = road(&mut net, "C", 10, &[1, 4]);
        let d = road(&mut net, "D", 2, &[3]);
        (net, [a, b, c, d])
    }
}

// ── Graph construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use rn_core::{RoadId, Vertex};
    use crate::VertexGraph;
    use super::helpers::{diamond, i, two_way};

    #[test]
    fn vertices_are_intersections_and_roads() {
        let (net, _) = diamond();
        let g = VertexGraph::build(&net);
        assert_eq!(g.vertex_count(), 4 + 4);
        // A:2 + B:2 + C:2 + D:1
        assert_eq!(g.edge_count(), 7);
        assert!(g.contains(Vertex::Intersection(i(3))));
        assert!(g.contains(Vertex::Road(RoadId(4))));
    }

    #[test]
    fn duplicate_connections_collapse() {
        let mut net = two_way();
        net.connect_intersection_to_road(i(1), RoadId(1));
        assert_eq!(net.connection_count(), 3);
        let g = VertexGraph::build(&net);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn edge_weight_is_road_length_and_order_is_stable() {
        let (net, [a, _, c, _]) = diamond();
        let g = VertexGraph::build(&net);
        let n: Vec<_> = g.neighbors(Vertex::Intersection(i(1))).collect();
        assert_eq!(n, vec![(Vertex::Road(a), 1), (Vertex::Road(c), 10)]);
        let n: Vec<_> = g.neighbors(Vertex::Road(c)).collect();
        assert_eq!(n, vec![(Vertex::Intersection(i(1)), 10), (Vertex::Intersection(i(4)), 10)]);
    }

    #[test]
    fn unknown_vertex_has_no_neighbors() {
        let g = VertexGraph::build(&two_way());
        assert_eq!(g.neighbors(Vertex::Road(RoadId(9))).count(), 0);
    }
}

// ── Path finding ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod finder {
    use std::time::{Duration, Instant};

    use rn_core::{IntersectionId, RoadId, Vertex};
    use crate::{
        DijkstraPathFinder, PathFinder, PathOutcome, QueryOptions, RoutingError, shortest_paths,
    };
    use super::helpers::{diamond, empty, i, road, two_way};

    #[test]
    fn single_road_between_two_intersections() {
        let net = two_way();
        let path = DijkstraPathFinder.shortest_path(&net, i(1), i(2)).unwrap().unwrap();
        assert_eq!(path.raw_ids(), vec![1, 1, 2]);
        assert_eq!(path.vertices, vec![
            Vertex::Intersection(i(1)),
            Vertex::Road(RoadId(1)),
            Vertex::Intersection(i(2)),
        ]);
        assert_eq!(path.total_length, 5);
    }

    #[test]
    fn same_start_and_end_is_trivial() {
        let (net, _) = diamond();
        let path = DijkstraPathFinder.shortest_path(&net, i(1), i(1)).unwrap().unwrap();
        assert!(path.is_trivial());
        assert_eq!(path.raw_ids(), vec![1]);
        assert_eq!(path.total_length, 0);
    }

    #[test]
    fn isolated_intersection_reaches_itself() {
        let mut net = empty(&[1]);
        net.add_intersection(i(7));
        let path = DijkstraPathFinder.shortest_path(&net, i(7), i(7)).unwrap().unwrap();
        assert_eq!(path.raw_ids(), vec![7]);
    }

    #[test]
    fn prefers_lower_total_length() {
        let (net, [a, b, _, _]) = diamond();
        let path = DijkstraPathFinder.shortest_path(&net, i(1), i(4)).unwrap().unwrap();
        assert_eq!(path.vertices, vec![
            Vertex::Intersection(i(1)),
            Vertex::Road(a),
            Vertex::Intersection(i(2)),
            Vertex::Road(b),
            Vertex::Intersection(i(4)),
        ]);
        assert_eq!(path.total_length, 2);
        assert_eq!(path.hop_count(), 2);
        assert_eq!(path.start(), Some(i(1)));
        assert_eq!(path.end(), Some(i(4)));
    }

    #[test]
    fn road_fan_out_joins_many_intersections() {
        let mut net = empty(&[1]);
        let f = road(&mut net, "Fan", 4, &[1, 2, 3]);
        let g = road(&mut net, "Spur", 2, &[3, 5]);
        let path = DijkstraPathFinder.shortest_path(&net, i(1), i(5)).unwrap().unwrap();
        assert_eq!(path.raw_ids(), vec![1, f.0, 3, g.0, 5]);
        assert_eq!(path.total_length, 6);
        // 2 is reachable from 3 through the same road.
        let back = DijkstraPathFinder.shortest_path(&net, i(3), i(2)).unwrap().unwrap();
        assert_eq!(back.raw_ids(), vec![3, f.0, 2]);
    }

    #[test]
    fn unknown_endpoints_give_none_but_are_distinguishable() {
        let (net, _) = diamond();
        assert!(DijkstraPathFinder.shortest_path(&net, i(99), i(1)).unwrap().is_none());
        assert!(DijkstraPathFinder.shortest_path(&net, i(1), i(99)).unwrap().is_none());

        let opts = QueryOptions::default();
        assert_eq!(
            DijkstraPathFinder.locate(&net, i(99), i(1), &opts).unwrap(),
            PathOutcome::UnknownStart(i(99)),
        );
        assert_eq!(
            DijkstraPathFinder.locate(&net, i(1), i(98), &opts).unwrap(),
            PathOutcome::UnknownEnd(i(98)),
        );
    }

    #[test]
    fn disjoint_components_have_no_path() {
        let (net, _) = diamond();
        assert!(DijkstraPathFinder.shortest_path(&net, i(1), i(3)).unwrap().is_none());
        assert_eq!(
            DijkstraPathFinder.locate(&net, i(3), i(4), &QueryOptions::default()).unwrap(),
            PathOutcome::NoPath,
        );
    }

    #[test]
    fn repaired_intersection_stays_unreachable() {
        let mut net = two_way();
        net.add_intersection(i(3));
        net.ensure_vertex_connectivity();
        assert!(DijkstraPathFinder.shortest_path(&net, i(1), i(3)).unwrap().is_none());
        let own = DijkstraPathFinder.shortest_path(&net, i(3), i(3)).unwrap().unwrap();
        assert!(own.is_trivial());
    }

    #[test]
    fn sees_live_network_changes() {
        let (mut net, _) = diamond();
        assert!(DijkstraPathFinder.shortest_path(&net, i(1), i(3)).unwrap().is_none());
        road(&mut net, "Link", 1, &[4, 3]);
        let path = DijkstraPathFinder.shortest_path(&net, i(1), i(3)).unwrap().unwrap();
        assert_eq!(path.total_length, 3);
    }

    #[test]
    fn equal_cost_ties_are_deterministic() {
        let mut net = empty(&[1]);
        road(&mut net, "North", 3, &[1, 2]);
        road(&mut net, "South", 3, &[1, 2]);
        let first = DijkstraPathFinder.shortest_path(&net, i(1), i(2)).unwrap().unwrap();
        for _ in 0..10 {
            let again = DijkstraPathFinder.shortest_path(&net, i(1), i(2)).unwrap().unwrap();
            assert_eq!(again, first);
        }
        assert_eq!(first.total_length, 3);
    }

    #[test]
    fn expired_deadline_aborts_search() {
        let (net, _) = diamond();
        let opts = QueryOptions::default().with_deadline(Instant::now() - Duration::from_millis(1));
        let err = DijkstraPathFinder.locate(&net, i(1), i(4), &opts).unwrap_err();
        assert!(matches!(err, RoutingError::DeadlineExceeded { .. }));
        // Trivial queries never search.
        assert!(DijkstraPathFinder.locate(&net, i(1), i(1), &opts).unwrap().is_found());
    }

    #[test]
    fn settle_limit_aborts_search() {
        let (net, _) = diamond();
        let opts = QueryOptions::default().with_max_settled(1);
        let err = DijkstraPathFinder.locate(&net, i(1), i(4), &opts).unwrap_err();
        assert!(matches!(err, RoutingError::SearchLimit { limit: 1, .. }));
        let roomy = QueryOptions::default().with_max_settled(100);
        assert!(DijkstraPathFinder.locate(&net, i(1), i(4), &roomy).unwrap().is_found());
    }

    #[test]
    fn batch_matches_single_queries() {
        let (net, _) = diamond();
        let pairs: Vec<(IntersectionId, IntersectionId)> = (1..=4)
            .flat_map(|a| (1..=5).map(move |b| (i(a), i(b))))
            .collect();
        let batch = shortest_paths(&net, &pairs, &QueryOptions::default());
        assert_eq!(batch.len(), pairs.len());
        for (&(a, b), got) in pairs.iter().zip(batch) {
            let single = DijkstraPathFinder.locate(&net, a, b, &QueryOptions::default()).unwrap();
            assert_eq!(got.unwrap(), single, "{a} -> {b}");
        }
    }
}

// ── Brute-force reference ─────────────────────────────────────────────────────

#[cfg(test)]
mod brute_force {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use rn_core::{IntersectionId, RoadId, Vertex};
    use rn_network::RoadNetwork;
    use crate::{DijkstraPathFinder, Path, PathFinder};
    use super::helpers::{empty, i};

    fn random_network(seed: u64) -> RoadNetwork {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut net = empty(&[1]);
        let n_int = rng.gen_range(2..=6u32);
        let n_road = rng.gen_range(1..=5u32);
        for x in 1..=n_int {
            net.add_intersection(i(x));
        }
        for r in 1..=n_road {
            let id = net.add_road_with_length(format!("Road {r}"), rng.gen_range(1..=20));
            for x in 1..=n_int {
                if rng.gen_bool(0.4) {
                    net.connect_intersection_to_road(i(x), id);
                }
            }
        }
        net
    }

    /// Minimum total road length over all simple walks, by exhaustive DFS.
    fn brute(net: &RoadNetwork, at: IntersectionId, end: IntersectionId, seen: &mut Vec<IntersectionId>, used: &mut Vec<RoadId>) -> Option<u64> {
        if at == end {
            return Some(0);
        }
        let mut best: Option<u64> = None;
        for &road in net.connected_roads(at).unwrap_or(&[]) {
            if used.contains(&road) {
                continue;
            }
            let len = net.road(road).unwrap().length as u64;
            used.push(road);
            for next in net.incident_intersections(road) {
                if seen.contains(&next) {
                    continue;
                }
                seen.push(next);
                if let Some(rest) = brute(net, next, end, seen, used) {
                    best = Some(best.map_or(len + rest, |b| b.min(len + rest)));
                }
                seen.pop();
            }
            used.pop();
        }
        best
    }

    fn assert_valid(net: &RoadNetwork, path: &Path, start: IntersectionId, end: IntersectionId) {
        assert_eq!(path.start(), Some(start));
        assert_eq!(path.end(), Some(end));
        assert_eq!(path.len() % 2, 1);
        let mut total = 0u64;
        for (k, v) in path.vertices.iter().enumerate() {
            assert_eq!(v.is_intersection(), k % 2 == 0, "alternation broken at {k}");
            if let Vertex::Road(r) = v {
                let before = path.vertices[k - 1].as_intersection().unwrap();
                let after = path.vertices[k + 1].as_intersection().unwrap();
                assert!(net.intersection(before).unwrap().is_connected_to(*r));
                assert!(net.intersection(after).unwrap().is_connected_to(*r));
                total += net.road(*r).unwrap().length as u64;
            }
        }
        assert_eq!(total, path.total_length);
    }

    #[test]
    fn dijkstra_matches_exhaustive_search() {
        for seed in 0..200 {
            let net = random_network(seed);
            for start in net.intersection_ids() {
                for end in net.intersection_ids() {
                    let got = DijkstraPathFinder.shortest_path(&net, start, end).unwrap();
                    let want = brute(&net, start, end, &mut vec![start], &mut Vec::new());
                    match (&got, want) {
                        (Some(p), Some(w)) => {
                            assert_eq!(p.total_length, w, "seed {seed}: {start} -> {end}");
                            assert_valid(&net, p, start, end);
                        }
                        (None, None) => {}
                        _ => panic!("seed {seed}: {start} -> {end}: got {got:?}, want {want:?}"),
                    }
                }
            }
        }
    }
}

// ── Route description ─────────────────────────────────────────────────────────

#[cfg(test)]
mod describe {
    use rn_core::{RoadId, Vertex};
    use rn_network::SharedNetwork;
    use crate::{
        DijkstraPathFinder, Path, PathFinder, RouteDescriber, RoutingError, routing_suggestions,
        routing_suggestions_shared,
    };
    use super::helpers::{diamond, empty, i, road, two_way};

    #[test]
    fn single_road_name() {
        let net = two_way();
        let path = DijkstraPathFinder.shortest_path(&net, i(1), i(2)).unwrap();
        let names = RouteDescriber::new(&net).describe(path.as_ref()).unwrap();
        assert_eq!(names, Some(vec!["R".to_string()]));
    }

    #[test]
    fn absent_path_gives_absent_names() {
        let net = two_way();
        assert_eq!(RouteDescriber::new(&net).describe(None).unwrap(), None);
    }

    #[test]
    fn trivial_path_gives_no_names() {
        let net = two_way();
        let names = RouteDescriber::new(&net).describe(Some(&Path::trivial(i(1)))).unwrap();
        assert_eq!(names, Some(vec![]));
    }

    #[test]
    fn name_count_matches_path_length() {
        let (net, _) = diamond();
        let path = DijkstraPathFinder.shortest_path(&net, i(1), i(4)).unwrap().unwrap();
        let names = RouteDescriber::new(&net).describe(Some(&path)).unwrap().unwrap();
        assert_eq!(names.len(), (path.len() - 1) / 2);
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn repeated_names_are_kept() {
        let mut net = empty(&[1]);
        road(&mut net, "High St", 1, &[1, 2]);
        road(&mut net, "High St", 1, &[2, 3]);
        let names = routing_suggestions(&net, &DijkstraPathFinder, i(1), i(3)).unwrap();
        assert_eq!(names, Some(vec!["High St".to_string(), "High St".to_string()]));
    }

    #[test]
    fn road_not_connected_is_inconsistent() {
        let (net, [_, _, _, d]) = diamond();
        // D only touches intersection 3.
        let bogus = Path {
            vertices: vec![Vertex::Intersection(i(1)), Vertex::Road(d), Vertex::Intersection(i(3))],
            total_length: 2,
        };
        let err = RouteDescriber::new(&net).describe(Some(&bogus)).unwrap_err();
        assert!(matches!(
            err,
            RoutingError::InconsistentPath { intersection, road } if intersection == i(1) && road == d
        ));
    }

    #[test]
    fn path_from_another_network_is_inconsistent() {
        let (other, _) = diamond();
        let path = DijkstraPathFinder.shortest_path(&other, i(1), i(4)).unwrap();
        let net = two_way();
        let err = RouteDescriber::new(&net).describe(path.as_ref()).unwrap_err();
        assert!(matches!(err, RoutingError::InconsistentPath { .. }));
    }

    #[test]
    fn unknown_road_is_inconsistent() {
        let net = two_way();
        let bogus = Path {
            vertices: vec![Vertex::Intersection(i(1)), Vertex::Road(RoadId(42)), Vertex::Intersection(i(2))],
            total_length: 0,
        };
        assert!(matches!(
            RouteDescriber::new(&net).describe(Some(&bogus)),
            Err(RoutingError::InconsistentPath { .. })
        ));
    }

    #[test]
    fn malformed_paths_are_rejected() {
        let net = two_way();
        let d = RouteDescriber::new(&net);
        let cases = [
            (vec![], 0),
            (vec![Vertex::Intersection(i(1)), Vertex::Road(RoadId(1))], 1),
            (vec![Vertex::Road(RoadId(1))], 0),
            (
                vec![Vertex::Intersection(i(1)), Vertex::Intersection(i(2)), Vertex::Intersection(i(1))],
                1,
            ),
        ];
        for (vertices, at) in cases {
            let path = Path { vertices, total_length: 0 };
            match d.describe(Some(&path)) {
                Err(RoutingError::MalformedPath { position, .. }) => assert_eq!(position, at),
                other => panic!("expected MalformedPath at {at}, got {other:?}"),
            }
        }
    }

    #[test]
    fn suggestions_none_when_unreachable_or_unknown() {
        let (net, _) = diamond();
        assert_eq!(routing_suggestions(&net, &DijkstraPathFinder, i(1), i(3)).unwrap(), None);
        assert_eq!(routing_suggestions(&net, &DijkstraPathFinder, i(1), i(50)).unwrap(), None);
    }

    #[test]
    fn suggestions_through_shared_network() {
        let (net, _) = diamond();
        let shared = SharedNetwork::new(net);
        let names = routing_suggestions_shared(&shared, &DijkstraPathFinder, i(4), i(1)).unwrap();
        assert_eq!(names, Some(vec!["B".to_string(), "A".to_string()]));
    }

    #[test]
    fn concurrent_readers_share_one_network() {
        let (net, _) = diamond();
        let shared = SharedNetwork::new(net);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let s = shared.clone();
                std::thread::spawn(move || {
                    routing_suggestions_shared(&s, &DijkstraPathFinder, i(1), i(4)).unwrap()
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), Some(vec!["A".to_string(), "B".to_string()]));
        }
    }
}
