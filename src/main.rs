use anyhow::Result;
use clap::{Parser, Subcommand};

use dayspend::cli::{
    handle_audit_command, handle_budget_command, handle_report_command, handle_tx_command,
    BudgetCommands, ReportCommands, TxCommands,
};
use dayspend::config::DayspendPaths;
use dayspend::models::category::{DEFAULT_EXPENSE_CATEGORIES, DEFAULT_INCOME_CATEGORIES};
use dayspend::storage::Storage;

#[derive(Parser)]
#[command(
    name = "dayspend",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based daily budget tracker",
    long_about = "dayspend tracks your spending against a monthly limit and tells \
                  you, day by day, how much is still available. Unspent daily \
                  allowance rolls over; months where you start tracking late are \
                  handled without inflating the budget."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Tx(TxCommands),

    /// Budget configuration commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Reports: ledger, daily summary, categories
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and storage
    let paths = DayspendPaths::new()?;
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tx(cmd)) => {
            handle_tx_command(&storage, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing dayspend at: {}", paths.base_dir().display());
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Suggested categories:");
            println!("  Expenses: {}", DEFAULT_EXPENSE_CATEGORIES.join(", "));
            println!("  Income:   {}", DEFAULT_INCOME_CATEGORIES.join(", "));
            println!();
            println!("Set your monthly limit with 'dayspend budget limit <amount>'.");
        }
        Some(Commands::Config) => {
            let config = storage.profile.get()?;
            println!("dayspend Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Profile:");
            println!(
                "  Monthly limit: {}",
                config.monthly_limit.format_with_symbol(&config.currency_symbol)
            );
            println!(
                "  Income:        {}",
                config.income.format_with_symbol(&config.currency_symbol)
            );
            println!("  Currency:      {}", config.currency_symbol);
        }
        None => {
            println!("dayspend - daily budget tracking with rollover");
            println!();
            println!("Run 'dayspend --help' for usage information.");
            println!("Run 'dayspend report today' to see what's left for today.");
        }
    }

    Ok(())
}
