//! FX CLI
//!
//! Command-line front end for the currency converter.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use currency_directory::CurrencyDirectory;
use currencylayer_client::{CurrencyLayerClient, DEFAULT_BASE_URL};
use fx_hex::ConversionService;
use fx_types::{ConversionResponse, CurrencyCode, CurrencyInfo};

#[derive(Parser)]
#[command(name = "fx")]
#[command(author, version, about = "Currency converter using live currencylayer rates", long_about = None)]
struct Cli {
    /// currencylayer access key
    #[arg(long, env = "CURRENCYLAYER_ACCESS_KEY", hide_env_values = true)]
    access_key: Option<String>,

    /// Root URL of the rate provider
    #[arg(long, env = "CURRENCYLAYER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    provider_url: String,

    /// Currency dataset to use instead of the built-in one
    #[arg(long, env = "CURRENCY_DIRECTORY_PATH")]
    directory: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount using a live rate
    Convert {
        /// Amount in the base currency
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Currency to convert from
        base: String,
        /// Currency to convert to
        target: String,
        /// Exchange base and target before converting
        #[arg(long)]
        swap: bool,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List known currencies
    Currencies {
        #[arg(long)]
        json: bool,
    },
    /// Show one currency
    Currency {
        /// Currency code, case-insensitive
        code: String,
        /// Write the decoded flag image to this file
        #[arg(long)]
        flag_out: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
}

fn load_directory(path: Option<&PathBuf>) -> Result<CurrencyDirectory> {
    let directory = match path {
        Some(path) => CurrencyDirectory::load(path)?,
        None => CurrencyDirectory::embedded()?,
    };
    tracing::debug!("loaded {} currencies", directory.len());
    Ok(directory)
}

/// Flags codes the provider is unlikely to quote. The lookup still goes ahead.
fn code_warning(directory: &CurrencyDirectory, raw: &str) -> Option<String> {
    let code = CurrencyCode::new(raw);
    if !code.is_iso_shaped() {
        Some(format!("{} does not look like an ISO 4217 code", code))
    } else if !directory.contains(code.as_str()) {
        Some(format!("{} is not in the currency directory", code))
    } else {
        None
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let directory = load_directory(cli.directory.as_ref())?;

    match cli.command {
        Commands::Convert {
            amount,
            base,
            target,
            swap,
            json,
        } => {
            let (base, target) = if swap { (target, base) } else { (base, target) };

            for raw in [&base, &target] {
                if let Some(warning) = code_warning(&directory, raw) {
                    tracing::warn!("{}", warning);
                }
            }

            let access_key = cli
                .access_key
                .context("an access key is required: pass --access-key or set CURRENCYLAYER_ACCESS_KEY")?;
            let provider = CurrencyLayerClient::new(access_key).with_base_url(cli.provider_url);
            let service = ConversionService::new(provider);

            let result = service.convert(&amount, &base, &target).await?;
            if json {
                let response = ConversionResponse::from(&result);
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", result);
            }
        }

        Commands::Currencies { json } => {
            if json {
                let list: Vec<CurrencyInfo> = directory.iter().map(CurrencyInfo::summary).collect();
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                for currency in directory.iter() {
                    println!("{}  {:<24} {}", currency.code, currency.name, currency.country);
                }
            }
        }

        Commands::Currency {
            code,
            flag_out,
            json,
        } => {
            let currency = directory
                .find(&code)
                .with_context(|| format!("Unknown currency: {}", code.to_uppercase()))?;

            if let Some(path) = flag_out {
                let flag = currency
                    .flag
                    .as_ref()
                    .with_context(|| format!("{} has no flag image", currency.code))?;
                std::fs::write(&path, flag.bytes())
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!("✓ Flag written to {}", path.display());
            }

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&CurrencyInfo::detailed(currency))?
                );
            } else {
                println!("{} - {}", currency.code, currency.name);
                println!("Country: {} ({})", currency.country, currency.country_code);
            }
        }
    }

    Ok(())
}
