//! CLI entry point for the `gwalk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_walk::cli::commands;
use graph_walk::config::SessionConfig;
use graph_walk::engine::Algorithm;
use graph_walk::types::WalkError;

#[derive(Parser)]
#[command(
    name = "gwalk",
    about = "gwalk — step-by-step BFS and DFS traversal of a small graph"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Session configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an animated traversal session
    Run {
        /// Algorithm: bfs or dfs (overrides the config file)
        #[arg(long)]
        algorithm: Option<String>,
        /// Start node; prompts interactively when omitted
        #[arg(long)]
        start: Option<u64>,
        /// Goal node; the traversal runs to exhaustion when omitted
        #[arg(long)]
        goal: Option<u64>,
        /// Delay after each animated move, in milliseconds
        #[arg(long)]
        delay: Option<u64>,
        /// How many times to ask for the start node
        #[arg(long)]
        attempts: Option<u32>,
    },
    /// Display the graph
    Info {
        /// Also show hop distances from this node
        #[arg(long)]
        from: Option<u64>,
    },
    /// Run a traversal headless and print every renderer call
    Trace {
        /// Start node
        start: u64,
        /// Goal node
        #[arg(long)]
        goal: Option<u64>,
        /// Algorithm: bfs or dfs (overrides the config file)
        #[arg(long)]
        algorithm: Option<String>,
    },
    /// Write the default configuration to a file
    InitConfig {
        /// Path of the TOML file to create
        file: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format_timestamp(None)
    .try_init();
}

fn load_config(
    path: Option<&PathBuf>,
    algorithm: Option<&str>,
) -> Result<SessionConfig, WalkError> {
    let mut config = SessionConfig::load_or_default(path.map(|p| p.as_path()))?;
    if let Some(name) = algorithm {
        config.algorithm = name.parse::<Algorithm>()?;
    }
    Ok(config)
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            algorithm,
            start,
            goal,
            delay,
            attempts,
        } => load_config(cli.config.as_ref(), algorithm.as_deref()).and_then(|mut config| {
            if let Some(ms) = delay {
                config.step_delay_ms = ms;
            }
            if let Some(n) = attempts {
                config.max_prompt_attempts = n;
            }
            commands::cmd_run(&config, start, goal, json).map(|r| r.is_aborted())
        }),
        Commands::Info { from } => load_config(cli.config.as_ref(), None)
            .and_then(|config| commands::cmd_info(&config, from, json))
            .map(|_| false),
        Commands::Trace {
            start,
            goal,
            algorithm,
        } => load_config(cli.config.as_ref(), algorithm.as_deref())
            .and_then(|config| commands::cmd_trace(&config, start, goal, json))
            .map(|r| r.is_aborted()),
        Commands::InitConfig { file, force } => {
            commands::cmd_init_config(&file, force).map(|_| false)
        }
    };

    match result {
        Ok(false) => {}
        Ok(true) => process::exit(4),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                WalkError::Io(_) | WalkError::Terminal(_) => 1,
                WalkError::Config(_) => 2,
                WalkError::UnknownAlgorithm(_)
                | WalkError::NodeNotFound(_)
                | WalkError::SelfLoop(_) => 3,
            };
            process::exit(code);
        }
    }
}
