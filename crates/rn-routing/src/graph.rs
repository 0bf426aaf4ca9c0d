//! The weighted bipartite graph searched by the path finder.
//!
//! # Data layout
//!
//! Vertices are numbered densely: every intersection (ascending id), then
//! every road (ascending id).  Adjacency is stored in **Compressed Sparse
//! Row (CSR)** form.  The neighbours of vertex `v` occupy
//!
//! ```text
//! adj_to[ out_start[v] .. out_start[v+1] ]
//! ```
//!
//! sorted by neighbour number, so a search visits them in a stable order and
//! breaks cost ties the same way on every run.
//!
//! There is one undirected edge per distinct (intersection, road) connection.
//! Repeated connections collapse to a single edge.  The edge weight is the
//! road's length, so passing through a road (in one side, out the other)
//! costs twice its length.  Minimising edge weight therefore minimises total
//! road length.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use log::debug;
use rustc_hash::FxHashMap;

use rn_core::{IntersectionId, Vertex};
use rn_network::RoadNetwork;

use crate::{Path, PathOutcome, RoutingError, RoutingResult};

/// Deadlines are checked once per this many settled vertices.
const DEADLINE_CHECK_INTERVAL: usize = 256;

const NO_PREV: u32 = u32::MAX;

/// Limits applied to a single search.
#[derive(Copy, Clone, Debug, Default)]
pub struct QueryOptions {
    /// Abandon the search once this instant has passed.
    pub deadline: Option<Instant>,
    /// Abandon the search after settling this many vertices.
    pub max_settled: Option<usize>,
}

impl QueryOptions {
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_max_settled(mut self, limit: usize) -> Self {
        self.max_settled = Some(limit);
        self
    }
}

/// Immutable search graph built from a [`RoadNetwork`].
pub struct VertexGraph {
    vertices:  Vec<Vertex>,
    index:     FxHashMap<Vertex, u32>,
    out_start: Vec<u32>,
    adj_to:    Vec<u32>,
    adj_len:   Vec<u32>,
    /// Road length per vertex; 0 for intersections.
    road_len:  Vec<u32>,
}

impl VertexGraph {
    /// Build the graph from the network's current state.
    ///
    /// Time complexity: O(V + E log E), V = intersections + roads,
    /// E = connections.
    pub fn build(network: &RoadNetwork) -> Self {
        let intersections = network.intersections();
        let roads = network.roads();

        let mut vertices = Vec::with_capacity(intersections.len() + roads.len());
        let mut road_len = Vec::with_capacity(vertices.capacity());
        for i in &intersections {
            vertices.push(Vertex::Intersection(i.id()));
            road_len.push(0);
        }
        for r in roads {
            vertices.push(Vertex::Road(r.id));
            road_len.push(r.length);
        }

        let index: FxHashMap<Vertex, u32> = vertices
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i as u32))
            .collect();

        // Directed half-edges (from, to, weight), both directions per connection.
        let mut half_edges: Vec<(u32, u32, u32)> = Vec::with_capacity(network.connection_count() * 2);
        let mut scratch = Vec::new();
        for (i_idx, i) in intersections.iter().enumerate() {
            scratch.clear();
            scratch.extend_from_slice(i.connected_roads());
            scratch.sort_unstable();
            scratch.dedup();
            for road in &scratch {
                // Connection lists only name existing roads.
                let Some(&r_idx) = index.get(&Vertex::Road(*road)) else {
                    continue;
                };
                let w = road_len[r_idx as usize];
                half_edges.push((i_idx as u32, r_idx, w));
                half_edges.push((r_idx, i_idx as u32, w));
            }
        }
        half_edges.sort_unstable_by_key(|&(from, to, _)| (from, to));

        let n = vertices.len();
        let mut out_start = vec![0u32; n + 1];
        for &(from, _, _) in &half_edges {
            out_start[from as usize + 1] += 1;
        }
        for v in 1..=n {
            out_start[v] += out_start[v - 1];
        }
        debug_assert_eq!(out_start[n] as usize, half_edges.len());

        let adj_to  = half_edges.iter().map(|&(_, to, _)| to).collect();
        let adj_len = half_edges.iter().map(|&(_, _, w)| w).collect();

        debug!(
            "built vertex graph: {} vertices, {} undirected edges",
            n,
            half_edges.len() / 2
        );

        Self { vertices, index, out_start, adj_to, adj_len, road_len }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj_to.len() / 2
    }

    pub fn contains(&self, v: Vertex) -> bool {
        self.index.contains_key(&v)
    }

    /// Neighbours of `v` with edge weights, in stable order.
    pub fn neighbors(&self, v: Vertex) -> impl Iterator<Item = (Vertex, u32)> + '_ {
        let range = match self.index.get(&v) {
            Some(&i) => self.out_start[i as usize] as usize..self.out_start[i as usize + 1] as usize,
            None => 0..0,
        };
        range.map(move |e| (self.vertices[self.adj_to[e] as usize], self.adj_len[e]))
    }

    /// Shortest path between two intersections.
    pub fn locate(
        &self,
        start: IntersectionId,
        end: IntersectionId,
        opts: &QueryOptions,
    ) -> RoutingResult<PathOutcome> {
        let Some(&from) = self.index.get(&Vertex::Intersection(start)) else {
            return Ok(PathOutcome::UnknownStart(start));
        };
        let Some(&to) = self.index.get(&Vertex::Intersection(end)) else {
            return Ok(PathOutcome::UnknownEnd(end));
        };
        if from == to {
            return Ok(PathOutcome::Found(Path::trivial(start)));
        }
        self.dijkstra(from, to, start, end, opts)
    }

    fn dijkstra(
        &self,
        from: u32,
        to: u32,
        start: IntersectionId,
        end: IntersectionId,
        opts: &QueryOptions,
    ) -> RoutingResult<PathOutcome> {
        let n = self.vertices.len();
        // dist[v] = best known edge-weight cost to reach v.
        let mut dist = vec![u64::MAX; n];
        // prev[v] = vertex that reached v; NO_PREV for unreached vertices.
        let mut prev = vec![NO_PREV; n];
        let mut settled = 0usize;

        dist[from as usize] = 0;

        // Reverse turns the max-heap into a min-heap; the vertex number is the
        // secondary key so equal-cost entries pop in a fixed order.
        let mut heap: BinaryHeap<Reverse<(u64, u32)>> = BinaryHeap::new();
        heap.push(Reverse((0, from)));

        while let Some(Reverse((cost, v))) = heap.pop() {
            // Skip stale heap entries.
            if cost > dist[v as usize] {
                continue;
            }
            if v == to {
                debug!("path {start} -> {end}: settled {settled} vertices");
                return Ok(PathOutcome::Found(self.reconstruct(&prev, to)));
            }

            settled += 1;
            if let Some(limit) = opts.max_settled {
                if settled > limit {
                    return Err(RoutingError::SearchLimit { start, end, limit });
                }
            }
            if let Some(deadline) = opts.deadline {
                if settled % DEADLINE_CHECK_INTERVAL == 1 && Instant::now() >= deadline {
                    return Err(RoutingError::DeadlineExceeded { start, end, settled });
                }
            }

            let lo = self.out_start[v as usize] as usize;
            let hi = self.out_start[v as usize + 1] as usize;
            for e in lo..hi {
                let next = self.adj_to[e];
                let new_cost = cost.saturating_add(self.adj_len[e] as u64);
                if new_cost < dist[next as usize] {
                    dist[next as usize] = new_cost;
                    prev[next as usize] = v;
                    heap.push(Reverse((new_cost, next)));
                }
            }
        }

        Ok(PathOutcome::NoPath)
    }

    fn reconstruct(&self, prev: &[u32], to: u32) -> Path {
        let mut order = vec![to];
        let mut cur = to;
        while prev[cur as usize] != NO_PREV {
            cur = prev[cur as usize];
            order.push(cur);
        }
        order.reverse();

        let total_length = order.iter().map(|&v| self.road_len[v as usize] as u64).sum();
        let vertices = order.into_iter().map(|v| self.vertices[v as usize]).collect();
        Path { vertices, total_length }
    }
}
