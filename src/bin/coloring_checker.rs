use std::fs;

use clap::{App, load_yaml};

use trifree_color::color::{checker, CheckerResult, Coloring};
use trifree_color::{ColorError, ColoringInstance, Graph};

/** checks a coloring of a DIMACS graph */
pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        eprintln!("invalid input: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ColorError> {
    // parse arguments
    let yaml = load_yaml!("coloring_checker.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let inst_filename = main_args.value_of("instance")
        .ok_or_else(|| ColorError::invalid("missing instance"))?;
    let sol_filename = main_args.value_of("solution")
        .ok_or_else(|| ColorError::invalid("missing solution"))?;
    // read files
    let instance = Graph::from_dimacs_file(inst_filename)?;
    instance.display_statistics();
    let partition = Coloring::parse_partition(&fs::read_to_string(sol_filename)?)?;
    let coloring = Coloring::from_partition(&partition, instance.nb_vertices())?;
    // call checker
    match checker(&instance, &coloring) {
        CheckerResult::Ok(n) => {
            println!("{}", n);
        },
        CheckerResult::WrongLength { expected, found } => {
            println!("ERROR: {} vertices colored, {} expected", found, expected);
        },
        CheckerResult::ConflictingEdge(a, b) => {
            println!("ERROR: vertices {} and {} are conflicting", a, b);
        },
    };
    Ok(())
}
