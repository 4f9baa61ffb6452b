use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use shipcalc::application::engine::PricingEngine;
use shipcalc::domain::coupon::CouponStatus;
use shipcalc::domain::pricing::{PricingInput, ShippingVerdict};
use shipcalc::infrastructure::policy_file::PolicyFile;
use shipcalc::interfaces::console::Session;
use shipcalc::interfaces::csv::quote_reader::QuoteReader;
use shipcalc::interfaces::csv::quote_writer::QuoteWriter;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file overriding the shipping rate, threshold or coupon codes
    #[arg(long, global = true)]
    policy: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single order
    Quote {
        /// The customer is registered
        #[arg(long)]
        registered: bool,

        /// Purchase amount; invalid or negative values count as zero
        #[arg(long, allow_hyphen_values = true)]
        amount: String,

        /// Coupon code
        #[arg(long, default_value = "")]
        coupon: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Price every order in a CSV file (registered,amount,coupon)
    Batch {
        /// Input quotes CSV file
        input: PathBuf,
    },
    /// Fill in the calculator form interactively
    Session,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct QuoteReport {
    registered: bool,
    coupon: CouponStatus,
    amount: String,
    free_shipping: bool,
    shipping_fee: String,
    total: String,
    verdict: ShippingVerdict,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "shipcalc=warn",
        1 => "shipcalc=info",
        _ => "shipcalc=debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn build_engine(policy: Option<PathBuf>) -> Result<PricingEngine> {
    let Some(path) = policy else {
        return Ok(PricingEngine::default());
    };
    let (policy, coupons) = PolicyFile::load(&path)
        .and_then(PolicyFile::into_parts)
        .into_diagnostic()?;
    tracing::info!(path = %path.display(), coupons = coupons.len(), "loaded pricing policy");
    Ok(PricingEngine::new(Box::new(coupons), policy))
}

fn print_quote(engine: &PricingEngine, input: &PricingInput, format: OutputFormat) -> Result<()> {
    let result = engine.evaluate(input);
    let verdict = engine.verdict(input);
    let coupon = engine.coupon_status(&input.coupon_code);

    match format {
        OutputFormat::Text => {
            println!("Amount:   {}", result.amount);
            println!("Coupon:   {}", coupon.label());
            println!("Shipping: {}", result.shipping_fee);
            println!("Total:    {}", result.total);
            println!("{}", verdict.headline());
            println!("{}", verdict.detail(engine.policy()));
        }
        OutputFormat::Json => {
            let report = QuoteReport {
                registered: input.is_registered,
                coupon,
                amount: result.amount.to_plain_string(),
                free_shipping: result.free_shipping,
                shipping_fee: result.shipping_fee.to_plain_string(),
                total: result.total.to_plain_string(),
                verdict,
            };
            println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let engine = build_engine(cli.policy)?;

    match cli.command {
        Commands::Quote {
            registered,
            amount,
            coupon,
            format,
        } => {
            let input = PricingInput::new(registered, amount.as_str(), coupon);
            print_quote(&engine, &input, format)?;
        }
        Commands::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = QuoteReader::new(file);
            let stdout = io::stdout();
            let mut writer = QuoteWriter::new(stdout.lock());
            for quote in reader.quotes() {
                match quote {
                    Ok(quote) => writer.write_quote(&engine, &quote).into_diagnostic()?,
                    Err(e) => eprintln!("Error reading quote: {}", e),
                }
            }
            writer.flush().into_diagnostic()?;
        }
        Commands::Session => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Session::new(&engine, stdout.lock())
                .run(stdin.lock())
                .into_diagnostic()?;
        }
    }

    Ok(())
}
