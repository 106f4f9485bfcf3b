use std::{io::Write as _, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use debt_tracker::{
    config::Config,
    entities::{ActiveTab, DebtForm, DebtId, DebtType},
    ui::{AdvisorPanel, AssumeYes, Confirmation, TerminalConfirmation},
    util::{DebtTrackerUtil, RemoveOutcome},
};
use fractic_server_error::ServerError;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Kind {
    /// The contact owes me.
    Lent,
    /// I owe the contact.
    Borrowed,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Tab {
    All,
    Lent,
    Borrowed,
}

#[derive(Parser, Debug)]
#[command(name = "debts", version, about = "Track money lent to and borrowed from contacts")]
struct Cli {
    /// Records file (overrides the config file).
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file (RON). Defaults to the platform config dir.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dashboard, tabs and records.
    List {
        #[arg(long, value_enum, default_value_t = Tab::All)]
        tab: Tab,
    },
    /// Dashboard totals only.
    Stats,
    /// Record a new transaction.
    Add {
        #[arg(long = "type", value_enum, default_value_t = Kind::Borrowed)]
        kind: Kind,
        /// Contact name.
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Flip a record between pending and paid.
    Toggle { id: String },
    /// Delete a record after confirmation.
    Remove {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Ask the financial advisor about the current records.
    Advice {
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },
}

impl From<Kind> for DebtType {
    fn from(k: Kind) -> Self {
        match k {
            Kind::Lent => DebtType::Lent,
            Kind::Borrowed => DebtType::Borrowed,
        }
    }
}

impl From<Tab> for ActiveTab {
    fn from(t: Tab) -> Self {
        match t {
            Tab::All => ActiveTab::All,
            Tab::Lent => ActiveTab::Lent,
            Tab::Borrowed => ActiveTab::Borrowed,
        }
    }
}

fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse().ok())
        .unwrap_or(80)
}

async fn run(cli: Cli) -> Result<(), ServerError> {
    let config = Config::load(cli.config.as_deref())?;
    let api_key = match &cli.command {
        Command::Advice { api_key } => api_key.clone(),
        _ => None,
    };
    let mut tracker = DebtTrackerUtil::open(&config, cli.data.as_deref(), api_key)?;

    // Re-render the dashboard whenever the collection changes.
    let printer = tracker.printer();
    tracker.subscribe(move |debts| {
        let stats = debt_tracker::derivations::compute_stats(debts);
        print!("\n{}", printer.print_dashboard(&stats));
    });

    match cli.command {
        Command::List { tab } => print!("{}", tracker.render_list(tab.into())),
        Command::Stats => print!("{}", tracker.render_dashboard()),
        Command::Add {
            kind,
            name,
            amount,
            notes,
        } => {
            let form = DebtForm {
                contact_name: name,
                amount,
                debt_type: kind.into(),
                notes,
            };
            if let Some(id) = tracker.submit(form)? {
                println!("Added record #{}", id);
            }
        }
        Command::Toggle { id } => {
            if !tracker.toggle_status(&DebtId::new(id.clone()))? {
                println!("No record #{}", id);
            }
        }
        Command::Remove { id, yes } => {
            let mut confirmation: Box<dyn Confirmation> = if yes {
                Box::new(AssumeYes)
            } else {
                Box::new(TerminalConfirmation::stdio())
            };
            match tracker.remove(&DebtId::new(id.clone()), confirmation.as_mut())? {
                RemoveOutcome::Removed => println!("Removed record #{}", id),
                RemoveOutcome::Declined => println!("Kept record #{}", id),
                RemoveOutcome::NotFound => println!("No record #{}", id),
            }
        }
        Command::Advice { .. } => {
            let mut panel = AdvisorPanel::new(terminal_width());
            let started = tracker
                .request_advice(&mut panel, |loading| {
                    print!("{}", loading.render());
                    if let Err(e) = std::io::stdout().flush() {
                        warn!(error = %e, "could not flush loading indicator");
                    }
                })
                .await;
            if started {
                print!("\n{}", panel.render());
            }
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    info!("debts v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(Cli::parse()).await {
        error!(error = %e, "command failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
