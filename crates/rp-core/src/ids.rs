//! Graph node identifiers.
//!
//! The proximity graph numbers its locations densely in name order; a
//! `NodeId` is a position in that numbering, usable directly as a `Vec`
//! index via `.index()`.

/// Index of a location in a built proximity graph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Marks a node with no predecessor in a search.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
