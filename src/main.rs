use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_analyze_command, handle_budget_command, handle_dashboard_command, handle_log_command,
    handle_login, handle_logout, handle_transaction_command, handle_whoami, BudgetCommands,
    TransactionCommands,
};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::models::DatePreset;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal expense tracker with monthly budgets",
    long_about = "Record income and expenses, see your balance and spending by \
                  category, track monthly budgets, and get a short AI summary \
                  of where your money goes."
)]
struct Cli {
    /// Run as this profile instead of the logged-in one
    #[arg(long, global = true, env = "EXPENSE_TRACKER_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Select the profile other commands operate on
    Login {
        /// Profile name (letters, digits, '-' and '_')
        name: String,
    },

    /// Forget the selected profile
    Logout,

    /// Show the active profile
    Whoami,

    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Balance, spending breakdown, budget progress and history
    #[command(alias = "dash")]
    Dashboard {
        /// this-month, last-month or all-time
        #[arg(short, long, default_value = "this-month")]
        range: DatePreset,
    },

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Ask for a short analysis of your spending
    Analyze {
        /// this-month, last-month or all-time
        #[arg(short, long, default_value = "this-month")]
        range: DatePreset,
    },

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn open_storage(paths: &TrackerPaths, settings: &Settings, user: Option<&str>) -> Result<Storage> {
    let user = settings.resolve_user(user)?;
    let mut storage = Storage::new(paths.clone(), user)?;
    storage.load_all()?;
    Ok(storage)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let user = cli.user.as_deref();

    match cli.command {
        Some(Commands::Login { name }) => handle_login(&paths, &mut settings, &name)?,
        Some(Commands::Logout) => handle_logout(&paths, &mut settings)?,
        Some(Commands::Whoami) => handle_whoami(&settings, user)?,
        Some(Commands::Transaction(cmd)) => {
            let storage = open_storage(&paths, &settings, user)?;
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Dashboard { range }) => {
            let storage = open_storage(&paths, &settings, user)?;
            handle_dashboard_command(&storage, &settings, range)?;
        }
        Some(Commands::Budget(cmd)) => {
            let storage = open_storage(&paths, &settings, user)?;
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Analyze { range }) => {
            let storage = open_storage(&paths, &settings, user)?;
            handle_analyze_command(&storage, &settings, range)?;
        }
        Some(Commands::Log { count }) => handle_log_command(&paths, count)?,
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            match &settings.active_user {
                Some(active) => println!("  Active user:      {}", active),
                None => println!("  Active user:      (none)"),
            }
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Summarizer model: {}", settings.summarizer.model);
            println!("  API key variable: {}", settings.summarizer.api_key_env);
        }
        None => {
            println!("Expense Tracker - income, expenses and monthly budgets");
            println!();
            println!("Run 'expense login <name>' to get started.");
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}
