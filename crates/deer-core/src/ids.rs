//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Agent and resource ids double as
//! `Vec` indices; location, marker, destination and route ids are stable
//! handles that survive removal of other entries from their collection.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a deer in the herd.
    pub struct AgentId(u32);
}

typed_id! {
    /// Stable handle of a resource location in the pool.
    pub struct LocationId(u32);
}

typed_id! {
    /// Stable handle of a marker in the shared marker list.
    pub struct MarkerId(u32);
}

typed_id! {
    /// Index of a resource kind in the ledger.
    pub struct ResourceId(u16);
}

typed_id! {
    /// Handle of a delivery destination (a kid's house).
    pub struct DestinationId(u32);
}

typed_id! {
    /// Handle of a route in the route book.
    pub struct RouteId(u32);
}
