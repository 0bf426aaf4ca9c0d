//! Strongly typed identifier wrappers.
//!
//! Intersection ids are chosen by the caller and treated as opaque keys.
//! Road ids are allocated by the network model starting at 1.  Both are
//! `Copy + Ord + Hash` so they can be used as map keys and sorted without
//! ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw integer value.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }

        impl From<$name> for $inner {
            #[inline(always)]
            fn from(id: $name) -> $inner {
                id.0
            }
        }
    };
}

typed_id! {
    /// Caller-assigned key of an intersection.
    pub struct IntersectionId(u32);
}

typed_id! {
    /// Model-assigned key of a road.  The first road is `RoadId(1)`.
    pub struct RoadId(u32);
}

impl RoadId {
    /// The id given to the first road added to a network.
    pub const FIRST: RoadId = RoadId(1);

    /// The id that follows `self` in allocation order.
    #[inline]
    pub fn next(self) -> RoadId {
        RoadId(self.0 + 1)
    }
}
