use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;

use trifree_color::evaluator::run_experiment;
use trifree_color::util::{read_params, export_stats};
use trifree_color::ColorError;


/** average number of colors used by FirstFit over random triangle-free graphs */
pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        eprintln!("invalid input: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ColorError> {
    // parse arguments
    let yaml = load_yaml!("average_colors.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let config = read_params(&main_args)?;

    // solve it
    let mut rng = config.rng();
    let t_start = Instant::now();
    let report = run_experiment(&config, &mut rng)?;
    let duration = t_start.elapsed().as_secs_f32();
    println!("Average Colors Used: {:.2}", report.average_colors_used);
    if let Some(dsatur) = report.dsatur_average_colors_used {
        println!("Average Colors Used (DSATUR): {:.2}", dsatur);
    }
    println!("{} trials took {:.3} seconds", config.num_trials, duration);
    let stats = json!({
        "report": report,
        "time_searched": duration,
    });

    // export results
    export_stats(&stats, main_args.value_of("perf"))
}
