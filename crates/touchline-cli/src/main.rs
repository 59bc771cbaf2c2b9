//! Touchline CLI
//!
//! Inspect the command registry: the built-in system commands plus any
//! features declared in a TOML manifest.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use touchline_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "touchline")]
#[command(about = "Touchline - chat command registry inspector", long_about = None)]
#[command(disable_help_subcommand = true)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// TOML command manifest to load after the built-in commands
    #[arg(long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Log format and default level: development or production
    #[arg(long, global = true, default_value = "production")]
    pub log_profile: String,

    /// Skip /help, /ping and /version
    #[arg(long, global = true)]
    pub no_builtins: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a command name or alias for a chat scope
    Resolve(commands::resolve::ResolveArgs),
    /// Classify a command's clarity and routing
    Classify(commands::classify::ClassifyArgs),
    /// Decide direct dispatch or agent escalation for a command
    Route(commands::route::RouteArgs),
    /// List commands visible in a chat scope
    List(commands::list::ListArgs),
    /// Search commands by substring
    Search(commands::search::SearchArgs),
    /// Print registry statistics as JSON
    Stats,
    /// Print help text for one command
    Help(commands::help::HelpArgs),
    /// Print the command list of one feature
    FeatureHelp(commands::help::FeatureHelpArgs),
}

fn main() {
    let cli = Cli::parse();

    let Some(profile) = Profile::parse(&cli.global.log_profile) else {
        eprintln!(
            "Error: unknown log profile '{}' (expected development or production)",
            cli.global.log_profile
        );
        std::process::exit(2);
    };
    logging_facility::init(profile);

    let result = commands::Context::load(&cli.global).and_then(|ctx| match cli.command {
        Commands::Resolve(args) => commands::resolve::execute(&ctx, args),
        Commands::Classify(args) => commands::classify::execute(&ctx, args),
        Commands::Route(args) => commands::route::execute(&ctx, args),
        Commands::List(args) => commands::list::execute(&ctx, args),
        Commands::Search(args) => commands::search::execute(&ctx, args),
        Commands::Stats => commands::stats::execute(&ctx),
        Commands::Help(args) => commands::help::execute(&ctx, args),
        Commands::FeatureHelp(args) => commands::help::execute_feature(&ctx, args),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
