use bit_set::BitSet;
use log::info;
use serde::Serialize;

use crate::error::{ColorError, Result};

/** Vertex Id */
pub type VertexId = usize;

/** Coloring represented as a partition: solution[c] lists the vertices of color c */
pub type Solution = Vec<Vec<VertexId>>;

/** adjacency view of a graph to color */
pub trait ColoringInstance {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// neighbors of vertex u
    fn neighbors(&self, u: VertexId) -> &[VertexId];

    /// degree of vertex u
    fn degree(&self, u: VertexId) -> usize { self.neighbors(u).len() }

    /// true iff u and v are adjacent
    fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.neighbors(u).contains(&v)
    }

    /// number of edges
    fn nb_edges(&self) -> usize {
        (0..self.nb_vertices()).map(|u| self.degree(u)).sum::<usize>() / 2
    }

    /// edge list (u < v)
    fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut res = Vec::new();
        for u in 0..self.nb_vertices() {
            for v in self.neighbors(u) {
                if u < *v { res.push((u, *v)); }
            }
        }
        res
    }

    /// maximum degree (0 if there are no vertices)
    fn max_degree(&self) -> usize {
        (0..self.nb_vertices()).map(|u| self.degree(u)).max().unwrap_or(0)
    }

    /// logs some statistics of the instance
    fn display_statistics(&self) {
        let degrees: Vec<usize> = (0..self.nb_vertices()).map(|i| self.degree(i)).collect();
        info!("\t{} \t vertices", self.nb_vertices());
        info!("\t{} \t edges", self.nb_edges());
        info!("\t{} \t min degree", degrees.iter().min().copied().unwrap_or(0));
        info!("\t{} \t max degree", degrees.iter().max().copied().unwrap_or(0));
    }
}

/// adjacency array: adj_list[i] lists the neighbors of i
impl ColoringInstance for Vec<Vec<VertexId>> {
    fn nb_vertices(&self) -> usize { self.len() }

    fn neighbors(&self, u: VertexId) -> &[VertexId] { &self[u] }
}


/** vertex coloring, indexed by vertex id. Built once by a coloring algorithm. */
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Coloring {
    colors: Vec<usize>,
}

impl Coloring {
    /// wraps a color array (colors[v]: color of v)
    pub fn new(colors: Vec<usize>) -> Self { Self { colors } }

    /// number of colored vertices
    pub fn len(&self) -> usize { self.colors.len() }

    /// true if no vertex is colored
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// color of vertex v
    pub fn color(&self, v: VertexId) -> usize { self.colors[v] }

    /// colors indexed by vertex
    pub fn as_slice(&self) -> &[usize] { &self.colors }

    /// highest color index, None if empty
    pub fn max_color(&self) -> Option<usize> { self.colors.iter().copied().max() }

    /** number of colors used: max color + 1, 0 if empty */
    pub fn colors_used(&self) -> usize {
        self.max_color().map_or(0, |c| c + 1)
    }

    /** converts to a partition (res[c]: vertices colored c, by increasing id) */
    pub fn to_partition(&self) -> Solution {
        let mut res = vec![vec![]; self.colors_used()];
        for (v, c) in self.colors.iter().enumerate() {
            res[*c].push(v);
        }
        res
    }

    /** builds a coloring from a partition over n vertices */
    pub fn from_partition(solution: &[Vec<VertexId>], n: usize) -> Result<Self> {
        let mut colors: Vec<Option<usize>> = vec![None; n];
        for (c, class) in solution.iter().enumerate() {
            for v in class {
                match colors.get_mut(*v) {
                    None => return Err(ColorError::invalid(
                        format!("vertex {} out of range (n={})", v, n)
                    )),
                    Some(Some(_)) => return Err(ColorError::invalid(
                        format!("vertex {} colored twice", v)
                    )),
                    Some(slot) => *slot = Some(c),
                }
            }
        }
        let colors = colors.into_iter().enumerate()
            .map(|(v, c)| c.ok_or_else(|| ColorError::invalid(format!("vertex {} not colored", v))))
            .collect::<Result<Vec<usize>>>()?;
        Ok(Self { colors })
    }

    /** writes a string encoding the partition. each line corresponds to a color. */
    pub fn to_partition_string(&self) -> String {
        let mut res = String::default();
        for e in self.to_partition() {
            for v in e {
                res += format!("{} ", v).as_str();
            }
            res += "\n";
        }
        res
    }

    /** reads a partition string (one line per color, empty lines are empty colors) */
    pub fn parse_partition(s: &str) -> Result<Solution> {
        s.lines().map(|line| {
            line.split_whitespace().map(|tok| {
                tok.parse::<VertexId>()
                    .map_err(|_| ColorError::parse(format!("invalid vertex id '{}'", tok)))
            }).collect()
        }).collect()
    }
}


/** result of the checker */
#[derive(Debug, PartialEq, Eq)]
pub enum CheckerResult {
    /// valid coloring, with its number of colors
    Ok(usize),
    /// the coloring does not cover exactly the vertices of the graph
    WrongLength {
        /// number of vertices of the graph
        expected: usize,
        /// number of colored vertices
        found: usize,
    },
    /// both endpoints of the edge share a color
    ConflictingEdge(VertexId, VertexId),
}

/**
checks that the coloring is total and proper. Returns the number of colors if so.
*/
pub fn checker<I: ColoringInstance + ?Sized>(inst: &I, coloring: &Coloring) -> CheckerResult {
    if coloring.len() != inst.nb_vertices() {
        return CheckerResult::WrongLength { expected: inst.nb_vertices(), found: coloring.len() };
    }
    for u in 0..inst.nb_vertices() {
        for v in inst.neighbors(u) {
            if u < *v && coloring.color(u) == coloring.color(*v) {
                return CheckerResult::ConflictingEdge(u, *v);
            }
        }
    }
    CheckerResult::Ok(coloring.colors_used())
}

/** set of colors seen by the neighbors of u that are already colored */
pub fn neighbor_colors<I: ColoringInstance + ?Sized>(
    inst: &I, colors: &[Option<usize>], u: VertexId, res: &mut BitSet
) {
    res.clear();
    for v in inst.neighbors(u) {
        if let Some(c) = colors[*v] { res.insert(c); }
    }
}

/** smallest color not in forbidden */
pub fn first_available(forbidden: &BitSet) -> usize {
    let mut color = 0;
    while forbidden.contains(color) { color += 1; }
    color
}
