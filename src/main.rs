use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use trianglepath::config::{AppConfig, ConfigManager, SolverMethod};
use trianglepath::data::load_or_prepare;
use trianglepath::engines::solve;
use trianglepath::report::{short_info, time_solver};

#[derive(Parser)]
#[command(name = "trianglepath")]
#[command(about = "Find the maximum-sum path through a number triangle")]
struct Cli {
    /// Triangle text file (root line, then one line per level)
    triangle: PathBuf,

    /// Solver: dp, exhaustive, parallel or genetic
    #[arg(short, long)]
    method: Option<SolverMethod>,

    /// TOML config file, overridden by TRIPATH__SECTION__FIELD variables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the effective config to this TOML file
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let manager = ConfigManager::with_config(
        AppConfig::load_layered(cli.config.as_deref()).context("loading configuration")?,
    )?;
    if let Some(method) = cli.method {
        manager.update(|config| config.solver.method = method)?;
    }
    if let Some(path) = &cli.write_config {
        manager
            .save_to_file(path)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    let config = manager.get()?;
    let method = config.solver.method;

    let data = load_or_prepare(&cli.triangle)
        .with_context(|| format!("preparing {}", cli.triangle.display()))?;

    println!("{}\n", short_info(data.num_levels));

    let (solution, timing) = time_solver(method.name(), config.solver.repetitions, || {
        solve(method, &data, &config)
    })?;

    println!(
        "Largest sum: {} (root {} + path {})",
        data.total_with_root(solution.best_sum),
        data.root_node,
        solution.best_sum
    );
    println!("Path: {}\n", solution.path_string());
    println!("{}", timing);

    Ok(())
}
