//! emprec CLI
//!
//! Runs the interactive menu, or a single action non-interactively.

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use emprec::commands::{execute, Action};
use emprec::menu::{write_interrupt_notice, Session};
use emprec::storage::FileBackend;
use emprec::{Config, RecordStore};
use tracing_subscriber::{fmt, EnvFilter};

/// emprec CLI
#[derive(Parser, Debug)]
#[command(name = "emprec")]
#[command(about = "Employee record keeper with salary analysis")]
#[command(version)]
struct Args {
    /// Employee data file
    #[arg(short, long, default_value = emprec::config::DEFAULT_DATA_FILE)]
    file: String,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Add one employee
    Add {
        #[arg(long, allow_hyphen_values = true)]
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        department: String,

        #[arg(long, allow_hyphen_values = true)]
        age: String,

        #[arg(long, allow_hyphen_values = true)]
        salary: String,
    },

    /// List all employees
    List,

    /// Print salary statistics and department counts
    Analyze,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with menu output
    let default_filter = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("emprec v{}", emprec::VERSION);
    tracing::debug!("Data file: {}", args.file);

    let config = Config::builder().data_file(&args.file).build();

    match run(&config, args.command.unwrap_or(Commands::Menu)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, command: Commands) -> emprec::Result<()> {
    let store = RecordStore::open(config)?;

    let action = match command {
        Commands::Menu => return run_menu(&store),
        Commands::Add {
            id,
            name,
            department,
            age,
            salary,
        } => Action::Add {
            id,
            name,
            department,
            age,
            salary,
        },
        Commands::List => Action::List,
        Commands::Analyze => Action::Analyze,
    };

    execute(&store, action, io::stdout().lock())
}

fn run_menu(store: &RecordStore<FileBackend>) -> emprec::Result<()> {
    println!("====== Employee Record Management System with Analysis ======");
    store.ensure_storage()?;

    // Ctrl+C leaves the menu with the same farewell as end of input
    if let Err(e) = ctrlc::set_handler(|| {
        let _ = write_interrupt_notice(&mut io::stdout());
        std::process::exit(0);
    }) {
        tracing::warn!("Failed to install Ctrl+C handler: {}", e);
    }

    let stdin = io::stdin();
    let mut session = Session::new(store, stdin.lock(), io::stdout());
    session.run()
}
