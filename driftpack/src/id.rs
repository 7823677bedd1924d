/// Handle to a node inside a [`Layout`][crate::Layout].
///
/// Handles are plain indices into the layout's processing order, so they are
/// only meaningful for the layout that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}
