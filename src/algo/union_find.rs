//! Union-Find (Disjoint Set) over the dense indices of an [`IndexedGraph`].
//!
//! Uses an iterative `find` with path compression and union by rank.

use super::*;

/// Union-Find data structure with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// Parent pointers (`parent[i] == i` for representatives)
    parent: Vec<Node>,
    /// Upper bound on the tree height below a representative
    rank: Vec<u8>,
    num_components: NumVertices,
}

impl UnionFind {
    /// Creates `n` singleton sets `{0}, ..., {n - 1}`
    pub fn new(n: NumVertices) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
            num_components: n,
        }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if there are no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets
    pub fn num_components(&self) -> NumVertices {
        self.num_components
    }

    /// Returns the representative of the set containing `u` and points
    /// every element on the way directly to it.
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut node = u;
        while self.parent[node as usize] != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `u` and `v`.
    /// Returns *false* if both already were in the same set.
    /// ** Panics if `u >= n || v >= n` **
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return false;
        }

        let (rank_u, rank_v) = (self.rank[ru as usize], self.rank[rv as usize]);
        if rank_u < rank_v {
            self.parent[ru as usize] = rv;
        } else {
            self.parent[rv as usize] = ru;
            if rank_u == rank_v {
                self.rank[ru as usize] += 1;
            }
        }

        self.num_components -= 1;
        true
    }

    /// Returns *true* if `u` and `v` are in the same set
    pub fn connected(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }

    /// Returns all sets, each sorted ascending, ordered by their smallest element
    pub fn components(&mut self) -> Vec<Vec<Node>> {
        let mut slot: Vec<Option<usize>> = vec![None; self.len()];
        let mut components: Vec<Vec<Node>> = Vec::with_capacity(self.num_components as usize);

        for u in 0..self.len() as Node {
            let root = self.find(u) as usize;
            let idx = *slot[root].get_or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[idx].push(u);
        }

        components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_and_find() {
        let mut uf = UnionFind::new(6);
        assert_eq!(uf.num_components(), 6);

        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(uf.union(1, 3));
        assert!(!uf.union(0, 2));
        assert!(!uf.union(4, 4));

        assert_eq!(uf.num_components(), 3);
        assert!(uf.connected(0, 3));
        assert!(!uf.connected(0, 4));
        assert_eq!(uf.find(1), uf.find(2));
    }

    #[test]
    fn components_are_sorted() {
        let mut uf = UnionFind::new(6);
        uf.union(5, 1);
        uf.union(3, 4);
        uf.union(4, 5);

        assert_eq!(uf.components(), vec![vec![0], vec![1, 3, 4, 5], vec![2]]);
    }

    #[test]
    fn long_chains() {
        let n = 100_000;
        let mut uf = UnionFind::new(n);
        for u in 1..n {
            assert!(uf.union(u - 1, u));
        }
        assert_eq!(uf.num_components(), 1);
        assert!(uf.connected(0, n - 1));
    }
}
