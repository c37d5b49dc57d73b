//! Index types for tree and mesh entities.
//!
//! Type-safe index wrappers prevent cell, node, and element indices from
//! being mixed up. All indices are `u32`, which is plenty for meshes bounded
//! by a recursion depth of a few dozen.

use std::fmt::{self, Debug};

/// A type-safe quadtree cell index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct CellId(u32);

/// A type-safe mesh node index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

/// A type-safe mesh element index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct ElementId(u32);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl $name {
            /// Create a new index from a raw value.
            #[inline]
            pub fn new(index: usize) -> Self {
                debug_assert!(index <= u32::MAX as usize, "index {} too large for u32", index);
                Self(index as u32)
            }

            /// Get the raw index value.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $display, self.0)
            }
        }

        impl From<usize> for $name {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_index_type!(CellId, "C");
impl_index_type!(NodeId, "N");
impl_index_type!(ElementId, "E");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let c = CellId::new(42);
        assert_eq!(c.index(), 42);
    }

    #[test]
    fn test_type_safety() {
        // Same raw value, distinct types.
        let n = NodeId::new(3);
        let e = ElementId::new(3);
        assert_eq!(n.index(), e.index());
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", NodeId::new(7)), "N(7)");
        assert_eq!(format!("{:?}", CellId::new(0)), "C(0)");
        assert_eq!(format!("{:?}", ElementId::new(12)), "E(12)");
    }
}
