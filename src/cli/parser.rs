use clap::{Parser, Subcommand};

/// Command-line interface definition for mainsboard
/// Personal Pokémon run leaderboard backed by a CSV log
#[derive(Parser)]
#[command(
    name = "mainsboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal Pokémon run leaderboard: log runs and see counts, streaks and recency",
    long_about = None
)]
pub struct Cli {
    /// Override run log path (useful for tests or a second save file)
    #[arg(global = true, long = "log", value_name = "FILE")]
    pub log: Option<String>,

    /// Show informational diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the run log
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log a new run
    Add {
        /// Pokémon species
        pokemon: String,

        /// Where it was caught
        location: String,

        /// Date of the run (YYYY-MM-DD)
        date: String,

        #[arg(long, short = 'n', help = "Free-text notes for this run")]
        notes: Option<String>,
    },

    /// Show the leaderboard (most runs first, least recently seen first on ties)
    Leaderboard {
        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Show the most recent runs with the gap since each Pokémon's previous run
    Recent {
        #[arg(long, short = 'n', help = "Number of runs to show (default: recent_limit from config)")]
        limit: Option<usize>,

        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Show current and longest play streaks and the busiest days
    Streaks {
        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
    },

    /// Show how runs are spread across locations
    Locations {
        #[arg(long, short = 'p', help = "Only count runs of this Pokémon")]
        pokemon: Option<String>,

        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Show every run of one Pokémon
    Pokemon {
        /// Species name (case-insensitive)
        name: String,

        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Show totals and base stat figures
    Stats {
        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
    },

    /// List the base stat total table
    Bst {
        #[arg(long, help = "Look up a single species")]
        name: Option<String>,

        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Start the HTTP server for the browser front end
    Serve {
        #[arg(long, short = 'p', help = "Port to listen on (default: port from config)")]
        port: Option<u16>,
    },
}
