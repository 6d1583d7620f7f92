use std::fmt::Display;
use std::str::FromStr;

use clap::ArgMatches;
use log::{info, warn};
use serde_json::Value;

use crate::color::{checker, CheckerResult};
use crate::config::{EdgeSampling, NeighborOrder, RunConfig};
use crate::dimacs::write_dimacs_file;
use crate::error::{ColorError, Result};
use crate::evaluator::TrialOutcome;

/// parses the value of an optional argument
fn parse_arg<T>(main_args: &ArgMatches, name: &str) -> Result<Option<T>>
where T: FromStr, T::Err: Display {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(s) => s.trim().parse::<T>().map(Some).map_err(|e| {
            ColorError::invalid(format!("unable to parse {} from '{}' ({})", name, s, e))
        }),
    }
}

fn missing(name: &str) -> ColorError {
    ColorError::invalid(format!("missing parameter '{}'", name))
}

/**
reads the run configuration from the command line.
If a JSON configuration file is given (`config`), its values are used as defaults and
command line values override them.
*/
pub fn read_params(main_args: &ArgMatches) -> Result<RunConfig> {
    let base = match main_args.value_of("config") {
        None => None,
        Some(filename) => {
            info!("reading configuration: {}", filename);
            Some(RunConfig::from_file(filename)?)
        }
    };
    let n = parse_arg::<usize>(main_args, "n")?
        .or_else(|| base.as_ref().map(|c| c.n)).ok_or_else(|| missing("n"))?;
    let p = parse_arg::<f64>(main_args, "p")?
        .or_else(|| base.as_ref().map(|c| c.p)).ok_or_else(|| missing("p"))?;
    let k = parse_arg::<usize>(main_args, "k")?
        .or_else(|| base.as_ref().map(|c| c.k)).ok_or_else(|| missing("k"))?;
    let num_trials = parse_arg::<usize>(main_args, "trials")?
        .or_else(|| base.as_ref().map(|c| c.num_trials)).unwrap_or(1);
    let mut res = RunConfig::new(n, p, k, num_trials);
    res.seed = parse_arg::<u64>(main_args, "seed")?.or_else(|| base.as_ref().and_then(|c| c.seed));
    res.sampling = parse_arg::<EdgeSampling>(main_args, "sampling")?
        .or_else(|| base.as_ref().map(|c| c.sampling)).unwrap_or_default();
    res.neighbor_order = parse_arg::<NeighborOrder>(main_args, "order")?
        .or_else(|| base.as_ref().map(|c| c.neighbor_order)).unwrap_or_default();
    res.baseline = main_args.is_present("baseline") || base.map_or(false, |c| c.baseline);
    res.validate()?;
    info!("n={} p={} k={} trials={}", res.n, res.p, res.k, res.num_trials);
    Ok(res)
}

/// writes the statistics (JSON) into perf_file, if any
pub fn export_stats(stats: &Value, perf_file: Option<&str>) -> Result<()> {
    if let Some(filename) = perf_file {
        info!("printing perfs in: {}", filename);
        std::fs::write(filename, serde_json::to_string(stats)?)?;
    }
    Ok(())
}

/// exports the coloring (partition format) and the triangle-free graph (DIMACS) of a trial
pub fn export_trial(outcome: &TrialOutcome, sol_file: Option<&str>, graph_file: Option<&str>) -> Result<()> {
    if let Some(filename) = sol_file {
        match checker(&outcome.graph, &outcome.coloring) {
            CheckerResult::Ok(_) => {},
            res => warn!("invalid solution (reason: {:?})", res),
        }
        info!("printing solution in: {}", filename);
        std::fs::write(filename, outcome.coloring.to_partition_string())?;
    }
    if let Some(filename) = graph_file {
        info!("printing graph in: {}", filename);
        write_dimacs_file(&outcome.graph, filename)?;
    }
    Ok(())
}
