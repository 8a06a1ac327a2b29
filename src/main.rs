use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fdtool",
    about = "Closure, minimal cover, candidate keys and BCNF/3NF checks for functional dependencies"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the closure X+ of an attribute set
    Closure {
        /// Input .fds file
        #[arg(long)]
        fds: PathBuf,

        /// Attributes of X, e.g. AB or A,B
        #[arg(long = "X", value_name = "ATTRS")]
        x: String,
    },

    /// Print the minimal cover, one dependency per line
    Mincover {
        #[arg(long)]
        fds: PathBuf,
    },

    /// Print every minimal candidate key
    Keys {
        #[arg(long)]
        fds: PathBuf,
    },

    /// Check BCNF and 3NF
    Normalform {
        #[arg(long)]
        fds: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Usage errors exit with 1, not clap's default 2.
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let code = if e.use_stderr() { 1 } else { 0 };
        e.print().ok();
        std::process::exit(code);
    });

    match run(cli.command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    }
}

fn run(command: Command) -> fdtool::error::Result<String> {
    match command {
        Command::Closure { fds, x } => fdtool::closure_report(&fdtool::read_fds(&fds)?, &x),
        Command::Mincover { fds } => fdtool::mincover_report(&fdtool::read_fds(&fds)?),
        Command::Keys { fds } => fdtool::keys_report(&fdtool::read_fds(&fds)?),
        Command::Normalform { fds } => fdtool::normal_form_report(&fdtool::read_fds(&fds)?),
    }
}
