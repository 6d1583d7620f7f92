use std::cmp::{Ordering, Reverse};

use priority_queue::PriorityQueue;
use bit_set::BitSet;

use crate::color::{ColoringInstance, Coloring, VertexId, first_available};

#[derive(PartialEq, Eq)]
struct DSatInfo {
    dsat: usize,
    degree: usize,
    id: Reverse<VertexId>,
}

impl Ord for DSatInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dsat.cmp(&other.dsat)
            .then_with(|| self.degree.cmp(&other.degree))
            .then_with(|| self.id.cmp(&other.id))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DSatInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** greedy DSATUR, used as a reference point for FirstFit.
    1. choose an uncolored vertex that sees the most colors (ties: largest degree, then smallest id)
    2. give it the first color available
    3. mark all its uncolored neighbors seeing this color
    4. repeat until every vertex is colored
*/
pub fn greedy_dsatur<I: ColoringInstance + ?Sized>(inst: &I) -> Coloring {
    let n: usize = inst.nb_vertices();
    let mut remaining_vertices: PriorityQueue<VertexId, DSatInfo> = PriorityQueue::new();
    for i in 0..n {
        remaining_vertices.push(i, DSatInfo { dsat: 0, degree: inst.degree(i), id: Reverse(i) });
    }
    let mut colors: Vec<usize> = vec![0; n];
    let mut colored = BitSet::with_capacity(n);
    let mut adj_colors: Vec<BitSet> = vec![BitSet::default(); n]; // adj_colors[v] -> colors v sees
    while let Some((current_vertex, _)) = remaining_vertices.pop() {
        let color = first_available(&adj_colors[current_vertex]);
        colors[current_vertex] = color;
        colored.insert(current_vertex);
        // update saturation degree information
        for conflict_vertex in inst.neighbors(current_vertex).iter()
        .filter(|v| !colored.contains(**v)) {
            if adj_colors[*conflict_vertex].insert(color) {
                remaining_vertices.change_priority_by(conflict_vertex, |p| { p.dsat += 1; });
            }
        }
    }
    Coloring::new(colors)
}
