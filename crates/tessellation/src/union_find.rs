//! Disjoint sets of edges.

use crate::graph::EdgeId;

#[derive(Copy, Clone, Debug, PartialEq)]
struct Node {
    parent: u32,
    rank: u32,
}

/// Union-find with path compression and union by rank.
///
/// Nodes are indexed by edge. A node that is its own parent is the root
/// (and the representative) of its set.
#[derive(Clone, Debug, Default)]
pub(crate) struct UnionFind {
    nodes: Vec<Node>,
}

impl UnionFind {
    pub fn new(len: usize) -> Self {
        UnionFind {
            nodes: (0..len as u32).map(|parent| Node { parent, rank: 0 }).collect(),
        }
    }

    pub fn find(&mut self, id: EdgeId) -> EdgeId {
        let mut root = id.0;
        while self.nodes[root as usize].parent != root {
            root = self.nodes[root as usize].parent;
        }

        // Path compression.
        let mut current = id.0;
        while current != root {
            let next = self.nodes[current as usize].parent;
            self.nodes[current as usize].parent = root;
            current = next;
        }

        EdgeId(root)
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns false if they were already in the same set.
    pub fn union(&mut self, a: EdgeId, b: EdgeId) -> bool {
        let root_a = self.find(a).to_usize();
        let root_b = self.find(b).to_usize();
        if root_a == root_b {
            return false;
        }

        let rank_a = self.nodes[root_a].rank;
        let rank_b = self.nodes[root_b].rank;
        if rank_a < rank_b {
            self.nodes[root_a].parent = root_b as u32;
        } else {
            self.nodes[root_b].parent = root_a as u32;
            if rank_a == rank_b {
                self.nodes[root_a].rank += 1;
            }
        }

        true
    }

    /// Returns true if `id` is the root of a set with other members.
    ///
    /// Only roots that absorbed another set have a non-zero rank.
    pub fn has_members(&self, id: EdgeId) -> bool {
        let node = &self.nodes[id.to_usize()];
        node.parent == id.0 && node.rank > 0
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[test]
fn singletons() {
    let mut sets = UnionFind::new(3);
    for i in 0..3 {
        assert_eq!(sets.find(EdgeId(i)), EdgeId(i));
        assert!(!sets.has_members(EdgeId(i)));
    }
    assert_eq!(sets.len(), 3);
}

#[test]
fn union_by_rank() {
    let mut sets = UnionFind::new(5);

    assert!(sets.union(EdgeId(0), EdgeId(1)));
    // Equal ranks: the first root wins.
    assert_eq!(sets.find(EdgeId(1)), EdgeId(0));
    assert!(sets.has_members(EdgeId(0)));
    assert!(!sets.has_members(EdgeId(1)));

    // The lower ranked set goes under the higher ranked one.
    assert!(sets.union(EdgeId(2), EdgeId(1)));
    assert_eq!(sets.find(EdgeId(2)), EdgeId(0));

    assert!(!sets.union(EdgeId(1), EdgeId(2)));

    assert!(sets.union(EdgeId(3), EdgeId(4)));
    assert!(sets.union(EdgeId(4), EdgeId(2)));
    let root = sets.find(EdgeId(0));
    for i in 0..5 {
        assert_eq!(sets.find(EdgeId(i)), root);
    }
}

#[test]
fn path_compression() {
    let mut sets = UnionFind::new(4);
    sets.union(EdgeId(0), EdgeId(1));
    sets.union(EdgeId(2), EdgeId(3));
    sets.union(EdgeId(0), EdgeId(2));

    // 3 -> 2 -> 0 before the lookup.
    assert_eq!(sets.nodes[3].parent, 2);
    assert_eq!(sets.find(EdgeId(3)), EdgeId(0));
    assert_eq!(sets.nodes[3].parent, 0);
}
