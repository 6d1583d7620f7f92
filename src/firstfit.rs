use bit_set::BitSet;

use crate::color::{ColoringInstance, Coloring, VertexId, first_available, neighbor_colors};
use crate::error::{ColorError, Result};

/**
FirstFit greedy coloring: colors the vertices 0..n-1 in increasing order, each with the smallest
color not used by its already colored neighbors. Neighbors with a larger id are not colored yet
when u is processed, so they never constrain u.

n must be the number of vertices of the instance.
*/
pub fn greedy_coloring<I: ColoringInstance + ?Sized>(inst: &I, n: usize) -> Result<Coloring> {
    if n != inst.nb_vertices() {
        return Err(ColorError::invalid(format!(
            "greedy_coloring: n={} but the graph has {} vertices", n, inst.nb_vertices()
        )));
    }
    let order: Vec<VertexId> = (0..n).collect();
    first_fit_in_order(inst, &order)
}

/**
FirstFit over an explicit processing order (a permutation of the vertices).
Each vertex receives the smallest color unused among its neighbors processed before it.
*/
pub fn first_fit_in_order<I: ColoringInstance + ?Sized>(inst: &I, order: &[VertexId]) -> Result<Coloring> {
    let n = inst.nb_vertices();
    if order.len() != n {
        return Err(ColorError::invalid(format!(
            "processing order of length {} for {} vertices", order.len(), n
        )));
    }
    let mut colors: Vec<Option<usize>> = vec![None; n]; // colors[v] -> color assigned to vertex v
    let mut forbidden = BitSet::new();
    for &u in order {
        match colors.get(u) {
            None => return Err(ColorError::invalid(format!("vertex {} out of range", u))),
            Some(Some(_)) => return Err(ColorError::invalid(format!("vertex {} appears twice", u))),
            Some(None) => {}
        }
        neighbor_colors(inst, &colors, u, &mut forbidden);
        colors[u] = Some(first_available(&forbidden));
    }
    // order has length n without repetition: every vertex is colored
    Ok(Coloring::new(colors.into_iter().flatten().collect()))
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::color::{checker, CheckerResult};
    use crate::generator::generate_graph;
    use crate::graph::Graph;

    #[test]
    fn test_path() {
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let coloring = greedy_coloring(&g, 4).unwrap();
        assert_eq!(coloring.as_slice(), &[0, 1, 0, 1]);
        assert_eq!(coloring.colors_used(), 2);
    }

    #[test]
    fn test_crown_ordering() {
        // crown graph (a_i - b_j for i != j) listed as a1,b1,a2,b2,a3,b3:
        // FirstFit uses 3 colors on a bipartite graph
        let g = Graph::from_edges(6, &[(0, 3), (0, 5), (1, 2), (1, 4), (2, 5), (3, 4)]).unwrap();
        let coloring = greedy_coloring(&g, 6).unwrap();
        assert_eq!(checker(&g, &coloring), CheckerResult::Ok(3));
        assert_eq!(coloring.as_slice(), &[0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_petersen() {
        let g = Graph::from_dimacs_file("insts/other-instances/petersen.col").unwrap();
        let coloring = greedy_coloring(&g, 10).unwrap();
        assert_eq!(coloring.as_slice(), &[0, 1, 0, 1, 2, 1, 0, 2, 2, 1]);
        assert_eq!(checker(&g, &coloring), CheckerResult::Ok(3));
    }

    #[test]
    fn test_adjacency_array() {
        let adj: Vec<Vec<VertexId>> = vec![vec![1, 2], vec![0, 2], vec![0, 1]];
        let coloring = greedy_coloring(&adj, 3).unwrap();
        assert_eq!(coloring.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_proper_and_bounded() {
        let mut rng = StdRng::seed_from_u64(21);
        for &(n, p) in &[(10, 0.2), (30, 0.5), (50, 0.9), (40, 0.05)] {
            let g = generate_graph(n, p, &mut rng).unwrap();
            let coloring = greedy_coloring(&g, n).unwrap();
            assert_eq!(coloring.len(), n);
            assert!(matches!(checker(&g, &coloring), CheckerResult::Ok(_)));
            assert!(coloring.colors_used() <= g.max_degree() + 1);
        }
    }

    #[test]
    fn test_deterministic() {
        let g = generate_graph(40, 0.3, &mut StdRng::seed_from_u64(22)).unwrap();
        assert_eq!(greedy_coloring(&g, 40).unwrap(), greedy_coloring(&g, 40).unwrap());
    }

    #[test]
    fn test_empty() {
        let g = Graph::new(0);
        let coloring = greedy_coloring(&g, 0).unwrap();
        assert!(coloring.is_empty());
        assert_eq!(coloring.colors_used(), 0);
    }

    #[test]
    fn test_wrong_n() {
        let g = Graph::new(3);
        assert!(greedy_coloring(&g, 4).is_err());
    }

    #[test]
    fn test_explicit_order() {
        // path 0-1-2-3 colored from both ends
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let coloring = first_fit_in_order(&g, &[0, 3, 1, 2]).unwrap();
        assert_eq!(coloring.as_slice(), &[0, 1, 2, 0]);
        assert!(first_fit_in_order(&g, &[0, 1, 1, 2]).is_err());
        assert!(first_fit_in_order(&g, &[0, 1, 2]).is_err());
        assert!(first_fit_in_order(&g, &[0, 1, 2, 4]).is_err());
    }
}
