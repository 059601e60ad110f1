use anyhow::{Context, Result};
use clap::{arg, ArgGroup, ArgMatches, Command};
use nwi_vns::graph::{read_edge_list, Graph};
use nwi_vns::vns::{CostFunction, InitialVertices, VnsConfig, VnsRunner, WriterSink};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

fn cli() -> Command {
    Command::new("nwi-vns")
        .about("Finds the single edge addition that minimizes the Nodal Wiener Impact")
        .arg_required_else_help(true)
        .arg(
            arg!(--network <PATH> "Edge-list file of a network that survives any single node removal")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(arg!(--test "Use a 20-node cycle instead of a network file"))
        .group(ArgGroup::new("input").args(["network", "test"]).required(true))
        .arg(arg!(--"impact-sum" "Minimize the sum of nodal impacts"))
        .arg(arg!(--"max-impact" "Minimize the largest nodal impact"))
        .group(
            ArgGroup::new("cost")
                .args(["impact-sum", "max-impact"])
                .required(true),
        )
        .arg(arg!(--"init-random" "Start from two random vertices"))
        .arg(arg!(--"init-greatest" "Start from the two vertices with the greatest impact"))
        .group(
            ArgGroup::new("init")
                .args(["init-random", "init-greatest"])
                .required(true),
        )
        .arg(
            arg!(--output <PATH> "Log file [default: data/<network>_<epoch>.log]")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--seed <SEED> "Seed for --init-random")
                .required(false)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            arg!(--"max-scans" <N> "Stop after this many neighborhood scans")
                .required(false)
                .value_parser(clap::value_parser!(usize)),
        )
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let (graph, network_name) = match matches.get_one::<PathBuf>("network") {
        Some(path) => {
            let graph = read_edge_list(path)
                .with_context(|| format!("failed to load network {}", path.display()))?;
            (graph, stem(path))
        }
        None => (Graph::cycle(20)?, "test".to_string()),
    };

    let config = config_from(&matches);
    let output = match matches.get_one::<PathBuf>("output") {
        Some(path) => path.clone(),
        None => default_output(&network_name),
    };
    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let file = File::create(&output)
        .with_context(|| format!("failed to create log file {}", output.display()))?;

    let mut sink = (
        WriterSink::new(BufWriter::new(file)),
        WriterSink::new(io::stderr()),
    );
    let outcome = VnsRunner::run_with_log(&graph, &config, &mut sink)?;
    let (file_sink, console_sink) = sink;
    file_sink
        .finish()
        .with_context(|| format!("failed to write log file {}", output.display()))?;
    console_sink.finish()?;

    match outcome.best_edge {
        Some(edge) => println!("best edge: {} {}", edge.src(), edge.dst()),
        None => println!("best edge: none"),
    }
    println!("cost: {}", outcome.best_cost);
    Ok(())
}

fn config_from(matches: &ArgMatches) -> VnsConfig {
    let cost_function = if matches.get_flag("max-impact") {
        CostFunction::MaxImpact
    } else {
        CostFunction::SumOfImpacts
    };
    let initial_vertices = if matches.get_flag("init-random") {
        InitialVertices::Random
    } else {
        InitialVertices::GreatestImpact
    };

    let mut config = VnsConfig::default()
        .with_cost_function(cost_function)
        .with_initial_vertices(initial_vertices);
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }
    if let Some(&n) = matches.get_one::<usize>("max-scans") {
        config = config.with_max_scans(n);
    }
    config
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "network".to_string())
}

fn default_output(network_name: &str) -> PathBuf {
    let epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    PathBuf::from("data").join(format!("{network_name}_{epoch}.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn test_selectors_required() {
        assert!(cli()
            .try_get_matches_from(["nwi-vns", "--test", "--impact-sum"])
            .is_err());
        assert!(cli()
            .try_get_matches_from(["nwi-vns", "--test", "--impact-sum", "--max-impact", "--init-random"])
            .is_err());
    }

    #[test]
    fn test_config_from_flags() {
        let matches = cli()
            .try_get_matches_from([
                "nwi-vns",
                "--test",
                "--max-impact",
                "--init-random",
                "--seed",
                "7",
                "--max-scans",
                "3",
            ])
            .unwrap();
        let config = config_from(&matches);
        assert_eq!(config.cost_function, CostFunction::MaxImpact);
        assert_eq!(config.initial_vertices, InitialVertices::Random);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_scans, Some(3));
    }

    #[test]
    fn test_default_output_path() {
        let path = default_output("karate");
        assert!(path.starts_with("data"));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("karate_") && name.ends_with(".log"));
        assert_eq!(stem(Path::new("nets/karate.txt")), "karate");
    }
}
