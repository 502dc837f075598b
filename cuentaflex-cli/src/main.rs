//! Cuentaflex CLI
//!
//! Command-line interface for the Cuentaflex API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use cuentaflex_client::CuentaflexClient;

#[derive(Parser)]
#[command(name = "cuentaflex")]
#[command(author, version, about = "Cuentaflex API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Cuentaflex API
    #[arg(
        long,
        env = "CUENTAFLEX_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account operations
    Account {
        #[command(subcommand)]
        action: AccountCommands,
    },
    /// Deposit operations
    Deposit {
        #[command(subcommand)]
        action: DepositCommands,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum AccountCommands {
    /// Open a new account
    Create {
        /// Account ID
        id: String,
        /// Opening balance
        #[arg(long, default_value = "0")]
        balance: Decimal,
    },
    /// Get account details
    Get {
        /// Account ID
        id: String,
    },
    /// List all accounts
    List,
}

#[derive(Subcommand)]
enum DepositCommands {
    /// Deposit cash at an ATM
    Atm {
        #[arg(long)]
        account: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: Decimal,
        /// Device reported in the DIN header
        #[arg(long, default_value = "cuentaflex-cli")]
        device: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = CuentaflexClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Account { action } => match action {
            AccountCommands::Create { id, balance } => {
                let account = client.create_account(&id, balance).await?;
                println!("{}", serde_json::to_string_pretty(&account)?);
            }
            AccountCommands::Get { id } => {
                let account = client.get_account(&id).await?;
                println!("{}", serde_json::to_string_pretty(&account)?);
            }
            AccountCommands::List => {
                let accounts = client.list_accounts().await?;
                println!("{}", serde_json::to_string_pretty(&accounts)?);
            }
        },

        Commands::Deposit { action } => match action {
            DepositCommands::Atm {
                account,
                amount,
                device,
            } => {
                let header = CuentaflexClient::new_header(device);
                let reply = client.deposit_from_atm(header, &account, amount).await?;
                println!("{}", serde_json::to_string_pretty(&reply.envelope)?);
                if reply.envelope.error().is_some() {
                    eprintln!("✗ Deposit rejected with HTTP {}", reply.status);
                    std::process::exit(1);
                }
            }
        },
    }

    Ok(())
}
