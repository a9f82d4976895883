//! PC Hub CLI - Inventory, cart and checkout at the shop counter.
//!
//! # Usage
//!
//! ```bash
//! # Find items
//! pchub search mouse
//!
//! # Manage the catalog
//! pchub add "Gaming Mouse" 450 5
//! pchub edit "Gaming Mouse" --price 500
//! pchub delete "Gaming Mouse"
//!
//! # Build a cart and check out
//! pchub cart add "Gaming Mouse" 2
//! pchub cart show
//! pchub checkout --output receipt.txt
//! ```
//!
//! Every invocation loads the data file, runs one command, and saves the file
//! again if the command changed anything. Changes are saved even when the
//! command fails after making them, e.g. when the receipt export fails after
//! checkout has already updated stock.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod session;

use config::AppConfig;
use error::Result;
use session::Session;

#[derive(Parser)]
#[command(name = "pchub")]
#[command(author, version, about = "PC Hub inventory, cart and checkout")]
struct Cli {
    /// Data file to use (overrides `PCHUB_DATA_FILE`)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search items by name (case-insensitive)
    Search {
        /// Text the item name must contain
        query: String,
    },
    /// Add an item or service to the catalog
    Add {
        /// Item or service name
        name: String,
        /// Unit price
        #[arg(allow_hyphen_values = true)]
        price: String,
        /// Units in stock
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Edit an item's name, price or quantity
    Edit {
        /// Current item name
        name: String,
        /// New name
        #[arg(long = "name")]
        new_name: Option<String>,
        /// New unit price
        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,
        /// New stock quantity
        #[arg(long, allow_hyphen_values = true)]
        quantity: Option<String>,
    },
    /// Delete an item from the catalog
    Delete {
        /// Item name
        name: String,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Check out the cart and print a receipt
    Checkout {
        /// Also write the receipt text to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add units of an item to the cart
    Add {
        /// Item name
        name: String,
        /// Units to add
        #[arg(default_value = "1", allow_hyphen_values = true)]
        quantity: String,
    },
    /// Remove an item from the cart
    Remove {
        /// Item name
        name: String,
    },
    /// Show the cart and its total
    Show,
    /// Remove everything from the cart
    Clear,
}

fn main() {
    // Logs go to stderr so command output on stdout stays clean
    // Defaults to warn level for our crates if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pchub_core=warn,pchub_cli=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(cli, &mut out) {
        tracing::error!("Command failed: {e}");
        let _ = out.flush();
        std::process::exit(1);
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = AppConfig::from_env()?.with_data_file(cli.data_file);
    let mut session = Session::open(&config, out)?;

    let result = dispatch(cli.command, &mut session, out);
    let saved = session.close();
    if let (Err(_), Err(save_err)) = (&result, &saved) {
        tracing::error!("Failed to save changes: {save_err}");
    }
    result.and(saved)
}

fn dispatch(command: Commands, session: &mut Session, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Search { query } => commands::catalog::search(session, &query, out),
        Commands::Add {
            name,
            price,
            quantity,
        } => commands::catalog::add(session, &name, &price, &quantity, out),
        Commands::Edit {
            name,
            new_name,
            price,
            quantity,
        } => commands::catalog::edit(
            session,
            &name,
            new_name.as_deref(),
            price.as_deref(),
            quantity.as_deref(),
            out,
        ),
        Commands::Delete { name } => commands::catalog::delete(session, &name, out),
        Commands::Cart { action } => match action {
            CartAction::Add { name, quantity } => commands::cart::add(session, &name, &quantity, out),
            CartAction::Remove { name } => commands::cart::remove(session, &name, out),
            CartAction::Show => commands::cart::show(session, out),
            CartAction::Clear => commands::cart::clear(session, out),
        },
        Commands::Checkout { output } => commands::checkout::run(session, output.as_deref(), out),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pchub_core::{Cart, Catalog, DataFile};
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    /// Writer that rejects every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn parse(dir: &TempDir, args: &[&str]) -> Cli {
        let data_file = dir.path().join("data.json");
        let mut argv = vec!["pchub", "--data-file", data_file.to_str().unwrap()];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_quantity() {
        let cli = Cli::try_parse_from(["pchub", "add", "Mouse", "450", "-5"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Add { quantity, .. }) if quantity == "-5"
        ));
    }

    #[test]
    fn test_parse_cart_add_default_quantity() {
        let cli = Cli::try_parse_from(["pchub", "cart", "add", "Mouse"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Cart { action: CartAction::Add { quantity, .. } }) if quantity == "1"
        ));
    }

    #[test]
    fn test_failed_receipt_export_still_saves_checkout() {
        let dir = TempDir::new().unwrap();
        let data_file = DataFile::new(dir.path().join("data.json"));
        let mut catalog = Catalog::new();
        catalog.add_item("Mouse", dec!(450), 5).unwrap();
        let mut cart = Cart::new();
        cart.add_to_cart("Mouse", 2).unwrap();
        data_file.save(&catalog, &cart).unwrap();

        let receipt = dir.path().join("missing").join("receipt.txt");
        let cli = parse(&dir, &["checkout", "--output", receipt.to_str().unwrap()]);
        let mut out = Vec::new();

        assert!(matches!(
            run(cli, &mut out),
            Err(error::CliError::ReceiptExport { .. })
        ));
        let snapshot = data_file.load().unwrap();
        assert_eq!(snapshot.catalog.get("Mouse").unwrap().quantity, 3);
        assert!(snapshot.cart.is_empty());
    }

    #[test]
    fn test_failed_output_still_saves_change() {
        let dir = TempDir::new().unwrap();
        let cli = parse(&dir, &["add", "Mouse", "450", "5"]);

        assert!(matches!(
            run(cli, &mut BrokenPipe),
            Err(error::CliError::Output(_))
        ));
        let snapshot = DataFile::new(dir.path().join("data.json")).load().unwrap();
        assert_eq!(snapshot.catalog.get("Mouse").unwrap().price, dec!(450));
    }

    #[test]
    fn test_failed_command_without_changes_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let cli = parse(&dir, &["delete", "Mouse"]);

        assert!(run(cli, &mut Vec::new()).is_err());
        assert!(!dir.path().join("data.json").exists());
    }
}
