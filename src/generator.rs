use log::debug;
use rand::Rng;
use rand::seq::index;

use crate::color::{ColoringInstance, VertexId};
use crate::config::{EdgeSampling, NeighborOrder, validate_probability};
use crate::error::Result;
use crate::graph::Graph;

/// number of vertex pairs of a graph with n vertices: n(n-1)/2
pub fn nb_pairs(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/** number of edges targeted by the exact-count sampling: round(p.n.(n-1)/2), clamped */
pub fn target_nb_edges(n: usize, p: f64) -> usize {
    let total = nb_pairs(n);
    let m = (p * total as f64).round();
    if m <= 0. { 0 } else { (m as usize).min(total) }
}

/**
maps a pair index to the pair (v,u) with v < u.
Pairs are enumerated by increasing u, then increasing v: index = u(u-1)/2 + v.
*/
fn pair_from_index(idx: usize) -> (VertexId, VertexId) {
    let mut u = ((1. + (1. + 8. * idx as f64).sqrt()) / 2.) as usize;
    // fix floating point rounding
    while u * (u - 1) / 2 > idx { u -= 1; }
    while (u + 1) * u / 2 <= idx { u += 1; }
    (idx - u * (u - 1) / 2, u)
}

/**
generates a random simple graph on n vertices by sampling round(p.n.(n-1)/2) distinct edges
uniformly without replacement. Neighbor lists are sorted by id.
*/
pub fn generate_graph<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Result<Graph> {
    generate_graph_with(n, p, EdgeSampling::ExactCount, NeighborOrder::Ascending, rng)
}

/** generates a random simple graph on n vertices with the given sampling method and neighbor order */
pub fn generate_graph_with<R: Rng + ?Sized>(
    n: usize,
    p: f64,
    sampling: EdgeSampling,
    order: NeighborOrder,
    rng: &mut R,
) -> Result<Graph> {
    validate_probability(p)?;
    let mut res = Graph::with_order(n, order);
    if n < 2 {
        return Ok(res);
    }
    match sampling {
        EdgeSampling::ExactCount => {
            let m = target_nb_edges(n, p);
            debug!("generating {} edges among {} pairs", m, nb_pairs(n));
            for idx in index::sample(rng, nb_pairs(n), m).into_iter() {
                let (v, u) = pair_from_index(idx);
                res.add_edge(v, u)?;
            }
        }
        EdgeSampling::Independent => {
            for u in 0..n {
                for v in (u+1)..n {
                    if rng.gen_bool(p) {
                        res.add_edge(u, v)?;
                    }
                }
            }
        }
    }
    debug!("generated graph: {} vertices, {} edges", res.nb_vertices(), res.nb_edges());
    Ok(res)
}
