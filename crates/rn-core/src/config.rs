//! Network configuration.
//!
//! Typically built in code or deserialized (with the `serde` feature) by the
//! application and passed to the network constructor.

use std::ops::RangeInclusive;

use crate::{CoreError, CoreResult, UniformLengths};

/// What to do when a road is connected to an intersection that already
/// lists it.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuplicatePolicy {
    /// Append the road id again.  The connection list then holds it twice.
    #[default]
    Allow,
    /// Leave the connection list untouched.
    Ignore,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkConfig {
    /// Shortest road a uniform length source may produce.  Must be ≥ 1.
    pub min_length: u32,

    /// Longest road a uniform length source may produce (inclusive).
    pub max_length: u32,

    pub duplicate_connections: DuplicatePolicy,

    /// Repair roads are named `"{bridge_prefix} {intersection id}"`.
    pub bridge_prefix: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 20,
            duplicate_connections: DuplicatePolicy::Allow,
            bridge_prefix: "Bridge".to_owned(),
        }
    }
}

impl NetworkConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.min_length == 0 {
            return Err(CoreError::Config("min_length must be at least 1".into()));
        }
        if self.min_length > self.max_length {
            return Err(CoreError::Config(format!(
                "min_length {} exceeds max_length {}",
                self.min_length, self.max_length
            )));
        }
        if self.bridge_prefix.trim().is_empty() {
            return Err(CoreError::Config("bridge_prefix must not be empty".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn length_range(&self) -> RangeInclusive<u32> {
        self.min_length..=self.max_length
    }

    /// A uniform length source over this configuration's range.
    pub fn length_source(&self, seed: u64) -> CoreResult<UniformLengths> {
        self.validate()?;
        Ok(UniformLengths::new(seed, self.length_range()))
    }

    /// Name of the repair road synthesised for an isolated intersection.
    pub fn bridge_name(&self, intersection: crate::IntersectionId) -> String {
        format!("{} {}", self.bridge_prefix, intersection.0)
    }
}
