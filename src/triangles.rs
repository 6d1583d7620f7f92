use log::debug;

use crate::color::{ColoringInstance, VertexId};
use crate::graph::Graph;

/**
removes edges until the graph is triangle-free. Returns the removed edges, in removal order.
    1. scan v1 by increasing id, v2 among the neighbors of v1, v3 among the neighbors of v2
    2. on the first triangle found (v1 adjacent to v3), remove the edge (v1,v3)
    3. restart the scan, until a full scan finds no triangle

The result depends on the scan order (neighbor lists order), and is not a minimum edge removal.
Removing an edge never creates a triangle: once the scan reached v1, the vertices before v1 stay
triangle-free, so restarting at v1 gives the same graph as restarting at vertex 0.
*/
pub fn eliminate_triangles(graph: &mut Graph) -> Vec<(VertexId, VertexId)> {
    let initial_nb_edges = graph.nb_edges();
    let mut removed = Vec::new();
    let mut start: VertexId = 0;
    while let Some((v1, v2, v3)) = graph.find_triangle_from(start) {
        debug!("triangle ({},{},{}): removing edge ({},{})", v1, v2, v3, v1, v3);
        graph.remove_edge(v1, v3);
        removed.push((v1, v3));
        start = v1;
    }
    debug!(
        "triangle elimination: {} edges removed ({} -> {})",
        removed.len(), initial_nb_edges, graph.nb_edges()
    );
    removed
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::{EdgeSampling, NeighborOrder};
    use crate::generator::{generate_graph, generate_graph_with};

    /// eliminates triangles by restarting every scan at vertex 0
    fn eliminate_from_scratch(graph: &mut Graph) {
        while let Some((v1, _, v3)) = graph.find_triangle() {
            graph.remove_edge(v1, v3);
        }
    }

    #[test]
    fn test_single_triangle() {
        let mut g = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        // v1=0, v2=1, v3=2 -> (0,2) removed
        assert_eq!(eliminate_triangles(&mut g), vec![(0, 2)]);
        assert_eq!(g.edges(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_complete_graph_5() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut g = generate_graph(5, 1., &mut rng).unwrap();
        assert_eq!(g.nb_edges(), 10);
        let removed = eliminate_triangles(&mut g);
        assert!(g.is_triangle_free());
        assert_eq!(g.nb_edges() + removed.len(), 10);
        // with ascending neighbor lists, K5 is reduced to the path 0-1-2-3-4
        assert_eq!(g.edges(), vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
        assert_eq!(removed, vec![(0, 2), (0, 3), (0, 4), (1, 3), (1, 4), (2, 4)]);
    }

    #[test]
    fn test_triangle_free_unchanged() {
        let mut c5 = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap();
        let before = c5.clone();
        assert!(eliminate_triangles(&mut c5).is_empty());
        assert_eq!(c5, before);
    }

    #[test]
    fn test_idempotent() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            let mut g = generate_graph(25, 0.5, &mut rng).unwrap();
            let before = g.nb_edges();
            eliminate_triangles(&mut g);
            assert!(g.is_triangle_free());
            assert!(g.nb_edges() <= before);
            let once = g.clone();
            assert!(eliminate_triangles(&mut g).is_empty());
            assert_eq!(g, once);
        }
    }

    #[test]
    fn test_resuming_matches_restarting() {
        let mut rng = StdRng::seed_from_u64(12);
        for order in [NeighborOrder::Ascending, NeighborOrder::Insertion] {
            for _ in 0..10 {
                let g = generate_graph_with(20, 0.6, EdgeSampling::ExactCount, order, &mut rng).unwrap();
                let mut a = g.clone();
                let mut b = g;
                eliminate_triangles(&mut a);
                eliminate_from_scratch(&mut b);
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let g = generate_graph(30, 0.4, &mut StdRng::seed_from_u64(13)).unwrap();
        let mut a = g.clone();
        let mut b = g;
        assert_eq!(eliminate_triangles(&mut a), eliminate_triangles(&mut b));
        assert_eq!(a, b);
    }
}
