use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use journal_form::cli::{
    handle_check_command, handle_list_command, handle_show_command, handle_summary_command,
    CheckArgs,
};
use journal_form::config::{JournalPaths, Settings};
use journal_form::submit::OutboxSubmitter;

#[derive(Parser)]
#[command(
    name = "journal",
    version,
    about = "Double-entry journal entry form for the terminal",
    long_about = "Enter journal entries line by line, watch debit and credit totals \
                  update as you type, and submit only entries that balance."
)]
struct Cli {
    /// Outbox file for submitted entries (overrides the settings)
    #[arg(long, global = true, env = "JOURNAL_FORM_OUTBOX", value_name = "PATH")]
    outbox: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive form (default)
    #[command(alias = "ui")]
    Tui,

    /// Check an entry given on the command line
    Check(CheckArgs),

    /// List submitted entries
    List {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show one submitted entry
    Show {
        /// Entry ID (or a prefix of it)
        id: String,
    },

    /// Totals and per-account activity across submitted entries
    Summary {
        /// Number of accounts to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

/// Send log output to the data directory so it never draws over the form
fn init_logging(paths: &JournalPaths) {
    if paths.ensure_directories().is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = JournalPaths::new()?;
    init_logging(&paths);
    let settings = Settings::load_or_create(&paths)?;

    let outbox = cli
        .outbox
        .clone()
        .unwrap_or_else(|| settings.outbox_path(&paths));

    match cli.command {
        None | Some(Commands::Tui) => {
            journal_form::tui::run_tui(&settings, outbox)?;
        }
        Some(Commands::Check(args)) => {
            handle_check_command(&settings, &outbox, args)?;
        }
        Some(Commands::List { limit }) => {
            handle_list_command(&settings, &outbox, limit)?;
        }
        Some(Commands::Show { id }) => {
            handle_show_command(&settings, &outbox, &id)?;
        }
        Some(Commands::Summary { top }) => {
            handle_summary_command(&settings, &outbox, top)?;
        }
        Some(Commands::Init) => {
            if paths.settings_file().exists() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            let submitted = OutboxSubmitter::new(outbox.clone()).entry_count()?;
            println!("Journal Form Configuration");
            println!("==========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!("Outbox:         {}", outbox.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Notification time:  {}s", settings.notification_secs);
            println!("  Submit timeout:     {}s", settings.submit_timeout_secs);
            println!();
            println!("Submitted entries:  {}", submitted);
        }
    }

    Ok(())
}
