mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "monitor-keeper",
    version,
    about = "Keeps window positions across monitor connect and disconnect"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Start the background daemon
    Start,
    /// Stop the background daemon
    Stop,
    /// Show whether the daemon is running and what it tracks
    Status,
    /// Save window positions for the current monitor count now
    Capture,
    /// Restore window positions for the current monitor count now
    Restore,
    /// Debugging and inspection tools
    Debug {
        #[command(subcommand)]
        command: DebugCommands,
    },
    /// Run the daemon (internal, not for direct use)
    #[command(hide = true)]
    Daemon,
}

#[derive(Subcommand)]
enum DebugCommands {
    /// List top-level windows and whether they would be tracked
    List,
    /// Watch window and display events in real time
    Events,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        other => run_platform(other),
    }
}

#[cfg(windows)]
fn run_platform(command: Commands) {
    use monitor_keeper_core::Command;

    match command {
        Commands::Init => commands::init::execute(),
        Commands::Start => commands::start::execute(),
        Commands::Stop => commands::stop::execute(),
        Commands::Status => commands::status::execute(),
        Commands::Capture => commands::request::execute(Command::Capture),
        Commands::Restore => commands::request::execute(Command::Restore),
        Commands::Daemon => commands::daemon::execute(),
        Commands::Debug { command } => match command {
            DebugCommands::List => commands::debug::list::execute(),
            DebugCommands::Events => commands::debug::events::execute(),
        },
    }
}

#[cfg(not(windows))]
fn run_platform(_command: Commands) {
    eprintln!("monitor-keeper tracks Win32 windows and only runs on Windows.");
    std::process::exit(1);
}
