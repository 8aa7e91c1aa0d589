//! Strongly typed, zero-cost identifier wrappers.
//!
//! Every entity list in the model is a plain `Vec`, so an ID is simply the
//! entity's position in its list.  The inner integer is `pub`; prefer the
//! `.index()` helper when indexing.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
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
    /// Position of a pedestrian in the model's pedestrian list.  The list
    /// order is also the processing order within a step.
    pub struct PedestrianId(u32);
}

typed_id! {
    /// Position of an obstacle in the model's obstacle list.
    pub struct ObstacleId(u32);
}

typed_id! {
    /// Position of a target in the model's target list.  `TargetId(0)` seeds
    /// the distance threshold of the greedy move evaluator.
    pub struct TargetId(u32);
}
