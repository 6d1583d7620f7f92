use bit_set::BitSet;

use crate::color::{ColoringInstance, VertexId};
use crate::config::NeighborOrder;
use crate::dimacs;
use crate::error::{ColorError, Result};

/** simple undirected graph on the vertices 0..n-1.
Keeps both the adjacency lists (scan order) and a bitset adjacency matrix (O(1) adjacency tests).
Matrix rows start empty and only grow up to the largest neighbor id inserted.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i] represents a bitset of the neighbors of i
    adj_matrix: Vec<BitSet>,
    /// storage order of adj_list
    order: NeighborOrder,
}

impl ColoringInstance for Graph {
    fn nb_vertices(&self) -> usize { self.n }

    fn neighbors(&self, u: VertexId) -> &[VertexId] { &self.adj_list[u] }

    fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool { self.adj_matrix[u].contains(v) }

    fn nb_edges(&self) -> usize { self.m }
}

impl Graph {
    /** graph with n vertices and no edges (neighbor lists sorted by id) */
    pub fn new(n: usize) -> Self {
        Self::with_order(n, NeighborOrder::default())
    }

    /** graph with n vertices, no edges, and the given neighbor order */
    pub fn with_order(n: usize, order: NeighborOrder) -> Self {
        Self {
            n,
            m: 0,
            adj_list: vec![Vec::new(); n],
            adj_matrix: vec![BitSet::new(); n],
            order,
        }
    }

    /** builds a graph from an edge list */
    pub fn from_edges(n: usize, edges: &[(VertexId, VertexId)]) -> Result<Self> {
        let mut res = Self::new(n);
        for (u, v) in edges {
            res.add_edge(*u, *v)?;
        }
        Ok(res)
    }

    /// creates a graph from a DIMACS file
    pub fn from_dimacs_file(filename: &str) -> Result<Self> {
        dimacs::read_from_file(filename)
    }

    /** adds the edge (u,v). Fails on self-loops, duplicates and out-of-range ids */
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        if u >= self.n || v >= self.n {
            return Err(ColorError::invalid(format!("edge ({},{}) out of range (n={})", u, v, self.n)));
        }
        if u == v {
            return Err(ColorError::invalid(format!("self-loop on vertex {}", u)));
        }
        if self.are_adjacent(u, v) {
            return Err(ColorError::invalid(format!("duplicate edge ({},{})", u, v)));
        }
        self.insert_neighbor(u, v);
        self.insert_neighbor(v, u);
        self.m += 1;
        Ok(())
    }

    fn insert_neighbor(&mut self, u: VertexId, v: VertexId) {
        let l = &mut self.adj_list[u];
        match self.order {
            NeighborOrder::Ascending => {
                let pos = l.binary_search(&v).unwrap_or_else(|p| p);
                l.insert(pos, v);
            }
            NeighborOrder::Insertion => l.push(v),
        }
        self.adj_matrix[u].insert(v);
    }

    /** removes the edge (u,v). Returns false if it did not exist */
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        if u >= self.n || v >= self.n || !self.are_adjacent(u, v) {
            return false;
        }
        for (a, b) in [(u, v), (v, u)] {
            if let Some(pos) = self.adj_list[a].iter().position(|&x| x == b) {
                self.adj_list[a].remove(pos);
            }
            self.adj_matrix[a].remove(b);
        }
        self.m -= 1;
        true
    }

    /**
    finds the first triangle (v1,v2,v3) in scan order, starting at vertex `start`:
    v1 by increasing id, v2 among the neighbors of v1, v3 among the neighbors of v2,
    such that v1 and v3 are adjacent.
    */
    pub fn find_triangle_from(&self, start: VertexId) -> Option<(VertexId, VertexId, VertexId)> {
        for v1 in start..self.n {
            for &v2 in &self.adj_list[v1] {
                for &v3 in &self.adj_list[v2] {
                    if self.adj_matrix[v1].contains(v3) {
                        return Some((v1, v2, v3));
                    }
                }
            }
        }
        None
    }

    /// first triangle in scan order
    pub fn find_triangle(&self) -> Option<(VertexId, VertexId, VertexId)> {
        self.find_triangle_from(0)
    }

    /// true iff no three vertices are mutually adjacent
    pub fn is_triangle_free(&self) -> bool { self.find_triangle().is_none() }
}
