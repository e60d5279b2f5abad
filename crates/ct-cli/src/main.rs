//! CLI frontend for the Character Thing character creator.

mod commands;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use ct_core::{CharacterClass, ClassRegistry};
use ct_creator::CreatorConfig;

#[derive(Parser)]
#[command(
    name = "ct",
    about = "Character Thing: create role-playing characters one prompt at a time",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Create a single character instead of running a session
    #[arg(long)]
    once: bool,

    /// RNG seed for reproducible ability scores
    #[arg(short, long)]
    seed: Option<u64>,

    /// Answer used when a stage confirmation is left blank
    #[arg(long, value_enum, default_value = "yes")]
    confirm_default: Answer,

    /// Answer used when "continue creating another character?" is left blank
    #[arg(long, value_enum, default_value = "yes")]
    continue_default: Answer,

    /// Register an extra class after the built-ins (repeatable)
    #[arg(long = "class", value_name = "NAME", global = true)]
    classes: Vec<String>,

    /// Print created characters as JSON
    #[arg(long)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available races
    Races,

    /// List the available classes
    Classes,
}

#[derive(Clone, Copy, ValueEnum)]
enum Answer {
    Yes,
    No,
}

impl From<Answer> for bool {
    fn from(answer: Answer) -> Self {
        matches!(answer, Answer::Yes)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = build_registry(&cli.classes).and_then(|registry| match cli.command {
        Some(Commands::Races) => commands::list::races(&registry),
        Some(Commands::Classes) => commands::list::classes(&registry),
        None => {
            let mut config = CreatorConfig::default()
                .with_confirm_default(cli.confirm_default.into())
                .with_continue_default(cli.continue_default.into());
            if let Some(seed) = cli.seed {
                config = config.with_seed(seed);
            }
            commands::create::run(&registry, config, cli.once, cli.json)
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Send tracing output to stderr, filtered by `RUST_LOG` when set.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// The built-in classes followed by any extra ones named on the command line.
fn build_registry(extra: &[String]) -> Result<ClassRegistry, String> {
    let mut registry = ClassRegistry::with_built_ins();
    for name in extra {
        let name = name.trim();
        if name.is_empty() {
            return Err("class names cannot be empty".into());
        }
        let class = CharacterClass::from_tag(name)
            .unwrap_or_else(|| CharacterClass::Custom(name.to_string()));
        registry.register(class);
    }
    Ok(registry)
}
