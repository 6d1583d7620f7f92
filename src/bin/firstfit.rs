use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;

use trifree_color::evaluator::run_trial;
use trifree_color::util::{read_params, export_stats, export_trial};
use trifree_color::ColorError;


/** generates a random triangle-free graph, colors it with FirstFit and prints the coloring */
pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        eprintln!("invalid input: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ColorError> {
    // parse arguments
    let yaml = load_yaml!("firstfit.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let config = read_params(&main_args)?;

    // solve it
    let mut rng = config.rng();
    let t_start = Instant::now();
    let outcome = run_trial(&config, &mut rng)?;
    let duration = t_start.elapsed().as_secs_f32();
    let result = &outcome.result;
    println!("Colors used: {}", result.colors_used);
    println!("Competitive ratio: {:.2}", result.competitive_ratio);
    println!("Vertex colors:");
    for (v, c) in outcome.coloring.as_slice().iter().enumerate() {
        println!("Vertex {}: Color {}", v, c);
    }
    let stats = json!({
        "config": config,
        "result": result,
        "removed_edges": outcome.removed_edges,
        "coloring": outcome.coloring,
        "time_searched": duration,
    });

    // export results
    export_trial(&outcome, main_args.value_of("solution"), main_args.value_of("graph"))?;
    export_stats(&stats, main_args.value_of("perf"))
}
