//! Single-writer / multiple-reader access to a [`RoadNetwork`].
//!
//! Path finding rebuilds its working graph from live model state, so queries
//! served concurrently must never observe a half-applied mutation.  Every
//! access goes through one `RwLock`: readers run in parallel, a writer runs
//! alone.  The road-id counter lives inside the locked network and is only
//! advanced under the write lock.

use std::sync::{Arc, RwLock};

use rn_core::{IntersectionId, RoadId};

use crate::{Connection, NetworkError, NetworkResult, RoadNetwork};

/// Cloneable handle to a lock-protected network.
#[derive(Clone, Debug)]
pub struct SharedNetwork {
    inner: Arc<RwLock<RoadNetwork>>,
}

impl SharedNetwork {
    pub fn new(network: RoadNetwork) -> Self {
        Self { inner: Arc::new(RwLock::new(network)) }
    }

    /// Run `f` under the read lock.
    pub fn read<T>(&self, f: impl FnOnce(&RoadNetwork) -> T) -> NetworkResult<T> {
        let guard = self.inner.read().map_err(|_| NetworkError::LockPoisoned)?;
        Ok(f(&guard))
    }

    /// Run `f` under the write lock.
    pub fn write<T>(&self, f: impl FnOnce(&mut RoadNetwork) -> T) -> NetworkResult<T> {
        let mut guard = self.inner.write().map_err(|_| NetworkError::LockPoisoned)?;
        Ok(f(&mut guard))
    }

    pub fn add_intersection(&self, id: IntersectionId) -> NetworkResult<bool> {
        self.write(|net| net.add_intersection(id))
    }

    pub fn add_road(&self, name: impl Into<String>) -> NetworkResult<RoadId> {
        let name = name.into();
        self.write(|net| net.add_road(name))
    }

    pub fn connect_intersection_to_road(
        &self,
        intersection: IntersectionId,
        road: RoadId,
    ) -> NetworkResult<Connection> {
        self.write(|net| net.connect_intersection_to_road(intersection, road))
    }

    pub fn ensure_vertex_connectivity(&self) -> NetworkResult<Vec<(IntersectionId, RoadId)>> {
        self.write(RoadNetwork::ensure_vertex_connectivity)
    }

    /// Number of live handles, this one included.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Take the network back out.  Fails if other handles are still alive.
    pub fn into_inner(self) -> NetworkResult<RoadNetwork> {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => lock.into_inner().map_err(|_| NetworkError::LockPoisoned),
            Err(inner) => Err(NetworkError::StillShared(Arc::strong_count(&inner) - 1)),
        }
    }
}

impl From<RoadNetwork> for SharedNetwork {
    fn from(network: RoadNetwork) -> Self {
        Self::new(network)
    }
}
