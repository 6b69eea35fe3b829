/// Union-Find (Disjoint Sets) forest with per-group accounting
///
/// Beyond the textbook parent/rank pair, each group carries its vertex
/// count and a cumulative edge tally, and the forest maintains a live
/// count of groups so callers never have to rescan to learn how many
/// components remain.
use std::cmp::Ordering;

use indexmap::IndexMap;
use log::{debug, trace};

/// Disjoint-set forest over vertices `0..n` with union by rank and
/// path compression.
///
/// Each group tracks two aggregates alongside its representative:
///
/// - `group_size`: the number of vertices currently in the group
/// - `edge_count`: the number of `union` calls ever declared against
///   the group, including self-loops and unions of already-connected
///   vertices
///
/// The edge tally counts *declarations*, not merges: `union(x, x)`
/// returns `false` but still charges one edge to x's group. Callers
/// that feed a multigraph edge list through `union` can therefore read
/// back the exact number of edges (parallel edges and loops included)
/// landing in each connected component.
///
/// Vertex identity is a plain index; the vertex set is fixed at
/// construction.
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    /// parent[v] == v iff v is a root (group representative)
    parent: Vec<usize>,
    /// Height upper bound, meaningful only while the vertex is a root
    rank: Vec<usize>,
    /// Group vertex count, meaningful only at roots
    size: Vec<usize>,
    /// Cumulative union declarations, meaningful only at roots
    edges: Vec<usize>,
    /// Live number of groups, maintained incrementally
    group_count: usize,
}

impl DisjointSetForest {
    /// Create a forest of `n` singleton groups.
    ///
    /// Every vertex starts as its own root with rank 0, group size 1,
    /// and an empty edge tally. `n == 0` yields a valid empty forest.
    pub fn new(n: usize) -> Self {
        DisjointSetForest {
            parent: (0..n).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            edges: vec![0; n],
            group_count: n,
        }
    }

    /// Total number of vertices in the forest.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check if the forest has no vertices.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Current number of disjoint groups.
    ///
    /// Maintained incrementally: this is a pure read and triggers no
    /// path compression. Decreases by exactly one on every `union`
    /// that returns `true` and never increases.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Find the root of the group containing `v`, with path compression.
    ///
    /// Iterative two-pass resolution: walk to the root, then rewrite
    /// every visited parent pointer to aim directly at it. The two-pass
    /// form keeps deep chains off the call stack and compresses the
    /// whole path in one lookup, so `find(find(v)) == find(v)` always
    /// holds and repeat lookups are O(1) amortized.
    ///
    /// Only `parent` pointers are touched; rank, size, and edge tallies
    /// are never changed by a lookup.
    ///
    /// # Panics
    /// Panics if `v >= self.len()`.
    pub fn find(&mut self, v: usize) -> usize {
        self.check_vertex(v);

        let mut root = v;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: point everything on the walk straight at the root
        let mut cur = v;
        while cur != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }

        root
    }

    /// Check if two vertices are in the same group.
    ///
    /// # Panics
    /// Panics if `x >= self.len()` or `y >= self.len()`.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Merge the groups containing `x` and `y`.
    ///
    /// Returns `true` if two distinct groups were merged, `false` if
    /// `x` and `y` were already connected (including `x == y`). Either
    /// way one edge is charged to the group's tally: the edge counter
    /// records declarations, not merges, so redundant unions and
    /// self-loops still count.
    ///
    /// Merging uses union by rank: the root of the shallower tree is
    /// attached under the deeper one, and only a rank tie deepens the
    /// surviving tree. The absorbed root's size and edge tallies are
    /// folded into the survivor, and the live group count drops by one.
    ///
    /// # Panics
    /// Panics if `x >= self.len()` or `y >= self.len()`.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);

        // Charge the declared edge before the same-root check so that
        // redundant unions and self-loops still count against the group.
        self.edges[rx] += 1;

        if rx == ry {
            return false;
        }

        let (dst, src) = match self.rank[rx].cmp(&self.rank[ry]) {
            Ordering::Less => (ry, rx),
            Ordering::Greater => (rx, ry),
            Ordering::Equal => {
                self.rank[rx] += 1;
                (rx, ry)
            }
        };

        self.size[dst] += self.size[src];
        self.edges[dst] += self.edges[src];
        self.parent[src] = dst;
        self.group_count -= 1;

        trace!(
            "merged group {} into {} (size {}, edges {}, {} groups left)",
            src,
            dst,
            self.size[dst],
            self.edges[dst],
            self.group_count
        );

        true
    }

    /// Number of union calls ever declared against the group
    /// containing `v`, accumulated across all merges into the current
    /// group. Redundant unions and self-loops are included.
    ///
    /// # Panics
    /// Panics if `v >= self.len()`.
    pub fn edge_count(&mut self, v: usize) -> usize {
        let root = self.find(v);
        self.edges[root]
    }

    /// Number of vertices in the group containing `v`.
    ///
    /// # Panics
    /// Panics if `v >= self.len()`.
    pub fn group_size(&mut self, v: usize) -> usize {
        let root = self.find(v);
        self.size[root]
    }

    /// Snapshot of the full partition, keyed by root vertex id.
    ///
    /// Resolves every vertex and buckets it under its representative.
    /// Every non-empty group appears under its root exactly once, with
    /// members in ascending vertex order; non-root vertices never
    /// appear as keys. Costs O(n) finds and leaves the forest fully
    /// flattened as a side effect.
    pub fn groups(&mut self) -> IndexMap<usize, Vec<usize>> {
        let mut members: IndexMap<usize, Vec<usize>> = IndexMap::new();

        for v in 0..self.parent.len() {
            let root = self.find(v);
            members.entry(root).or_default().push(v);
        }

        debug!(
            "partition snapshot: {} groups over {} vertices",
            members.len(),
            self.parent.len()
        );

        members
    }

    fn check_vertex(&self, v: usize) {
        assert!(
            v < self.parent.len(),
            "vertex {} out of range for forest of {} vertices",
            v,
            self.parent.len()
        );
    }
}
