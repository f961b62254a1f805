/// Sentinel `g` meaning "not discovered yet" (an infinite cost).
pub const UNDISCOVERED: u32 = u32::MAX;

/// Per-cell search record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) g: u32,
    pub(crate) h: u32,
    pub(crate) parent: Option<usize>,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNDISCOVERED,
            h: 0,
            parent: None,
            closed: false,
        }
    }
}

impl Node {
    #[inline]
    pub(crate) fn discovered(&self) -> bool {
        self.g != UNDISCOVERED
    }

    /// Priority `g + h`. Saturates for undiscovered nodes.
    #[inline]
    pub(crate) fn f(&self) -> u32 {
        self.g.saturating_add(self.h)
    }
}

/// Node table for one search, keyed by the grid's linear cell index.
///
/// Allocated fresh per search and dropped with it. Predecessors are stored
/// as indices into this same table.
#[derive(Clone, Debug)]
pub(crate) struct SearchState {
    nodes: Vec<Node>,
}

impl SearchState {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            nodes: vec![Node::default(); len],
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }

    #[inline]
    pub(crate) fn parent(&self, idx: usize) -> Option<usize> {
        self.nodes[idx].parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_nodes_are_undiscovered() {
        let st = SearchState::new(4);
        assert_eq!(st.len(), 4);
        let n = st.node(3);
        assert!(!n.discovered());
        assert_eq!(n.f(), UNDISCOVERED);
        assert_eq!(st.parent(3), None);
    }

    #[test]
    fn f_is_g_plus_h() {
        let mut st = SearchState::new(1);
        let n = st.node_mut(0);
        n.g = 3;
        n.h = 4;
        assert!(n.discovered());
        assert_eq!(n.f(), 7);
    }
}
