//! Competitive ratio and Monte-Carlo evaluation of FirstFit on random triangle-free graphs.

use log::{debug, info};
use ordered_float::OrderedFloat;
use rand::Rng;
use serde::Serialize;

use crate::color::{Coloring, VertexId};
use crate::config::{RunConfig, validate_k};
use crate::dsatur::greedy_dsatur;
use crate::error::{ColorError, Result};
use crate::firstfit::greedy_coloring;
use crate::generator::generate_graph_with;
use crate::graph::Graph;
use crate::triangles::eliminate_triangles;

/**
competitive ratio of a coloring: (highest_color + 1) / k.
`highest_color` is the highest color index used (FirstFit output convention), not the count.
*/
pub fn competitive_ratio(highest_color: usize, k: usize) -> Result<f64> {
    validate_k(k)?;
    Ok((highest_color as f64 + 1.) / k as f64)
}

/** summary of a single trial */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialResult {
    /// number of colors used (max color + 1, 0 for an empty graph)
    pub colors_used: usize,
    /// highest color index (0 for an empty graph)
    pub highest_color: usize,
    /// (highest_color + 1) / k
    pub competitive_ratio: f64,
    /// number of edges removed by the triangle elimination
    pub nb_removed_edges: usize,
}

/** everything produced by a trial, kept for rendering */
#[derive(Debug, Clone)]
pub struct TrialOutcome {
    /// triangle-free graph that was colored
    pub graph: Graph,
    /// edges removed by the triangle elimination, in removal order
    pub removed_edges: Vec<(VertexId, VertexId)>,
    /// FirstFit coloring of the graph
    pub coloring: Coloring,
    /// colors used and competitive ratio
    pub result: TrialResult,
}

/**
runs one full pipeline: random graph, triangle elimination, FirstFit coloring.
*/
pub fn run_trial<R: Rng + ?Sized>(config: &RunConfig, rng: &mut R) -> Result<TrialOutcome> {
    config.validate()?;
    let mut graph = generate_graph_with(config.n, config.p, config.sampling, config.neighbor_order, rng)?;
    let removed_edges = eliminate_triangles(&mut graph);
    let coloring = greedy_coloring(&graph, config.n)?;
    let highest_color = coloring.max_color().unwrap_or(0);
    let result = TrialResult {
        colors_used: coloring.colors_used(),
        highest_color,
        competitive_ratio: competitive_ratio(highest_color, config.k)?,
        nb_removed_edges: removed_edges.len(),
    };
    debug!("trial: {:?}", result);
    Ok(TrialOutcome { graph, removed_edges, coloring, result })
}

/**
average number of colors used by FirstFit over num_trials independent random triangle-free graphs
(n vertices, edge probability p, default sampling and neighbor order).
*/
pub fn average_colors_used<R: Rng + ?Sized>(
    n: usize, k: usize, p: f64, num_trials: usize, rng: &mut R
) -> Result<f64> {
    let config = RunConfig::new(n, p, k, num_trials);
    Ok(run_experiment(&config, rng)?.average_colors_used)
}

/** statistics of a Monte-Carlo run */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentReport {
    /// configuration of the run
    pub config: RunConfig,
    /// colors used by FirstFit, per trial
    pub colors_used: Vec<usize>,
    /// mean of colors_used
    pub average_colors_used: f64,
    /// minimum of colors_used
    pub min_colors_used: usize,
    /// maximum of colors_used
    pub max_colors_used: usize,
    /// standard deviation of colors_used
    pub std_dev_colors_used: f64,
    /// mean competitive ratio
    pub average_competitive_ratio: f64,
    /// largest competitive ratio
    pub worst_competitive_ratio: f64,
    /// mean number of edges removed by the triangle elimination
    pub average_removed_edges: f64,
    /// mean number of colors used by DSATUR on the same graphs (if enabled)
    pub dsatur_average_colors_used: Option<f64>,
}

/**
runs config.num_trials independent trials and aggregates their statistics.
*/
pub fn run_experiment<R: Rng + ?Sized>(config: &RunConfig, rng: &mut R) -> Result<ExperimentReport> {
    config.validate()?;
    let mut colors_used = Vec::with_capacity(config.num_trials);
    let mut ratios: Vec<OrderedFloat<f64>> = Vec::with_capacity(config.num_trials);
    let mut total_removed: usize = 0;
    let mut total_dsatur: usize = 0;
    for i in 0..config.num_trials {
        let trial = run_trial(config, rng)?;
        if config.baseline {
            total_dsatur += greedy_dsatur(&trial.graph).colors_used();
        }
        debug!("trial {} / {}: {} colors", i + 1, config.num_trials, trial.result.colors_used);
        colors_used.push(trial.result.colors_used);
        ratios.push(OrderedFloat(trial.result.competitive_ratio));
        total_removed += trial.result.nb_removed_edges;
    }
    let nb = config.num_trials as f64;
    let average_colors_used = colors_used.iter().sum::<usize>() as f64 / nb;
    let variance = colors_used.iter()
        .map(|c| (*c as f64 - average_colors_used).powi(2))
        .sum::<f64>() / nb;
    let worst_ratio = ratios.iter().max().copied()
        .ok_or_else(|| ColorError::invalid("the number of trials must be at least 1"))?;
    let report = ExperimentReport {
        config: config.clone(),
        average_colors_used,
        min_colors_used: colors_used.iter().copied().min().unwrap_or(0),
        max_colors_used: colors_used.iter().copied().max().unwrap_or(0),
        std_dev_colors_used: variance.sqrt(),
        average_competitive_ratio: ratios.iter().map(|r| r.into_inner()).sum::<f64>() / nb,
        worst_competitive_ratio: worst_ratio.into_inner(),
        average_removed_edges: total_removed as f64 / nb,
        dsatur_average_colors_used: if config.baseline { Some(total_dsatur as f64 / nb) } else { None },
        colors_used,
    };
    info!(
        "{} trials: {:.2} colors on average (min {}, max {}), ratio {:.2}",
        config.num_trials, report.average_colors_used, report.min_colors_used,
        report.max_colors_used, report.average_competitive_ratio
    );
    Ok(report)
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::color::{checker, CheckerResult, ColoringInstance};

    #[test]
    fn test_competitive_ratio() {
        assert_eq!(competitive_ratio(0, 1).unwrap(), 1.);
        assert_eq!(competitive_ratio(2, 3).unwrap(), 1.);
        assert_eq!(competitive_ratio(0, 4).unwrap(), 0.25);
        assert!(competitive_ratio(3, 0).is_err());
    }

    #[test]
    fn test_competitive_ratio_huge_color() {
        let ratio = competitive_ratio(usize::MAX, 1).unwrap();
        assert!(ratio.is_finite());
        assert!(ratio >= usize::MAX as f64);
    }

    #[test]
    fn test_average_empty_graphs() {
        let mut rng = StdRng::seed_from_u64(41);
        assert_eq!(average_colors_used(10, 3, 0., 5, &mut rng).unwrap(), 1.);
    }

    #[test]
    fn test_average_no_vertices() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(average_colors_used(0, 3, 0.5, 3, &mut rng).unwrap(), 0.);
    }

    #[test]
    fn test_average_invalid() {
        let mut rng = StdRng::seed_from_u64(43);
        assert!(average_colors_used(10, 3, 0.5, 0, &mut rng).is_err());
        assert!(average_colors_used(10, 0, 0.5, 2, &mut rng).is_err());
        assert!(average_colors_used(10, 3, 2., 2, &mut rng).is_err());
    }

    #[test]
    fn test_trial() {
        let config = RunConfig::new(20, 0.5, 3, 1);
        let trial = run_trial(&config, &mut StdRng::seed_from_u64(44)).unwrap();
        assert!(trial.graph.is_triangle_free());
        assert_eq!(checker(&trial.graph, &trial.coloring), CheckerResult::Ok(trial.result.colors_used));
        assert_eq!(trial.result.highest_color + 1, trial.result.colors_used);
        assert_eq!(
            trial.result.competitive_ratio,
            competitive_ratio(trial.result.highest_color, 3).unwrap()
        );
        assert_eq!(
            trial.graph.nb_edges() + trial.removed_edges.len(),
            crate::generator::target_nb_edges(20, 0.5)
        );
    }

    #[test]
    fn test_empty_trial() {
        let trial = run_trial(&RunConfig::new(0, 0.5, 2, 1), &mut StdRng::seed_from_u64(45)).unwrap();
        assert!(trial.coloring.is_empty());
        assert_eq!(trial.result.colors_used, 0);
        assert_eq!(trial.result.competitive_ratio, 0.5);
    }

    #[test]
    fn test_report() {
        let config = RunConfig { baseline: true, ..RunConfig::new(25, 0.3, 4, 6).with_seed(7) };
        let report = run_experiment(&config, &mut config.rng()).unwrap();
        assert_eq!(report.colors_used.len(), 6);
        assert!(report.min_colors_used as f64 <= report.average_colors_used);
        assert!(report.average_colors_used <= report.max_colors_used as f64);
        assert!(report.average_competitive_ratio <= report.worst_competitive_ratio);
        assert!(report.std_dev_colors_used >= 0.);
        assert!(report.dsatur_average_colors_used.is_some());
        // same seed, same report
        assert_eq!(run_experiment(&config, &mut config.rng()).unwrap(), report);
    }

    #[test]
    fn test_report_json() {
        let config = RunConfig::new(5, 0., 2, 2).with_seed(1);
        let report = run_experiment(&config, &mut config.rng()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["average_colors_used"], 1.);
        assert_eq!(json["colors_used"], serde_json::json!([1, 1]));
        assert_eq!(json["config"]["n"], 5);
        assert!(json["dsatur_average_colors_used"].is_null());
    }
}
