use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use warikan::audit::AuditLogger;
use warikan::cli::{handle_audit_command, handle_contact_command, AuditArgs, ContactArgs, Session};
use warikan::config::{Settings, WarikanPaths};
use warikan::forms::FormEndpoint;
use warikan::store::LedgerStore;

#[derive(Parser)]
#[command(
    name = "warikan",
    author = "Kaylee Beyene",
    version,
    about = "Shared expense (warikan) record keeper",
    long_about = "warikan keeps track of who paid what during a trip or a night out. \
                  Members and expenses live for one session; export them before you leave."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive ledger session (default)
    Session,

    /// Validate and submit a newsletter or contact form payload
    Contact(ContactArgs),

    /// Create the data directory and write default settings
    Init,

    /// Show the audit journal of committed changes
    Audit(AuditArgs),

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("WARIKAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();

    let paths = WarikanPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            let mut store = LedgerStore::new();
            if settings.audit_enabled {
                AuditLogger::new(paths.audit_log()).attach(&mut store);
            }

            let stdin = io::stdin();
            let mut session = Session::new(store, settings, paths, stdin.lock(), io::stdout());
            session.run()?;
        }
        Commands::Contact(args) => {
            let reply = handle_contact_command(&FormEndpoint::new(), args)?;
            println!("{}", serde_json::to_string_pretty(&reply)?);
            if !reply.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Init => {
            println!("Initializing warikan at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Commands::Audit(args) => {
            let logger = AuditLogger::new(paths.audit_log());
            handle_audit_command(&logger, args, &mut io::stdout().lock())?;
        }
        Commands::Config => {
            println!("warikan Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Export directory: {}", settings.resolve_export_dir(&paths).display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
    }

    Ok(ExitCode::SUCCESS)
}
