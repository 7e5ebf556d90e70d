//! Interactive order desk for the Binance Futures testnet.
//!
//! Logs go to a file (default `trading_bot.log`); the terminal only shows
//! prompts and rendered results.

use futures_desk::config::{credentials_from_env, DeskConfig};
use futures_desk::domain::order::{default_quantity, min_quantity};
use futures_desk::prelude::*;
use futures_desk::ui;

use anyhow::Context;
use clap::Parser;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, FuzzySelect, Input, Password, Select};
use rust_decimal::Decimal;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "futures-desk", version, about = "Place orders on the Binance Futures testnet")]
struct Cli {
    /// REST base URL (overrides FUTURES_DESK_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Log file path (overrides FUTURES_DESK_LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    PlaceOrder,
    ShowHistory,
    Reconnect,
    Quit,
}

impl Action {
    const ALL: [Action; 4] = [
        Action::PlaceOrder,
        Action::ShowHistory,
        Action::Reconnect,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::PlaceOrder => "Place order",
            Action::ShowHistory => "Show order history",
            Action::Reconnect => "Reconnect with new credentials",
            Action::Quit => "Quit",
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = DeskConfig::from_env()?;
    if let Some(url) = cli.base_url {
        config = config.with_base_url(url);
    }
    if let Some(path) = cli.log_file {
        config = config.with_log_file(path);
    }
    config.validate()?;

    init_logging(&config, cli.verbose)?;
    tracing::info!(base_url = %config.base_url, "Starting futures desk");

    let theme = ColorfulTheme::default();
    println!("{}\n", ui::banner());

    let mut session = Session::new(config);
    let mut credentials = match credentials_from_env() {
        Some(creds) => creds,
        None => prompt_credentials(&theme)?,
    };

    loop {
        if !session.is_connected() {
            match session.ensure_connected(&credentials).await {
                Ok(_) => println!("{}", ui::connected()),
                Err(e) => {
                    println!("{}", ui::connection_error(&e));
                    println!("{}", ui::connect_hint());
                    let retry = Confirm::with_theme(&theme)
                        .with_prompt("Enter credentials again?")
                        .default(true)
                        .interact()?;
                    if !retry {
                        break;
                    }
                    credentials = prompt_credentials(&theme)?;
                    continue;
                }
            }
        }

        let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[choice] {
            Action::PlaceOrder => order_round(&mut session, &theme).await?,
            Action::ShowHistory => show_history(&session),
            Action::Reconnect => {
                credentials = prompt_credentials(&theme)?;
                session.disconnect();
            }
            Action::Quit => break,
        }
    }

    println!("\n{}", ui::footer());
    tracing::info!("Futures desk stopped");
    Ok(())
}

fn init_logging(config: &DeskConfig, verbose: bool) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("cannot open log file {}", config.log_file.display()))?;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn prompt_credentials(theme: &ColorfulTheme) -> anyhow::Result<Credentials> {
    let api_key: String = Input::with_theme(theme)
        .with_prompt("API Key")
        .interact_text()?;
    let api_secret = Password::with_theme(theme)
        .with_prompt("API Secret")
        .interact()?;
    Ok(Credentials::new(api_key, api_secret))
}

/// Pick a symbol, show its quote and the balance, collect the form, submit.
async fn order_round(session: &mut Session, theme: &ColorfulTheme) -> anyhow::Result<()> {
    let names: Vec<&str> = session.symbols().iter().map(Symbol::as_str).collect();
    let Some(index) = FuzzySelect::with_theme(theme)
        .with_prompt("Select Symbol")
        .items(&names)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };
    let symbol = session.symbols()[index].clone();

    let quote = session.fetch_quote(&symbol).await;
    println!("{}", ui::price_line(&quote));
    println!("{}", ui::balance_line(session.account()));

    let form = prompt_order_form(theme, symbol)?;
    match session.place_order(&form).await {
        Ok(result) => print!("{}", ui::order_placed(&result)),
        Err(e) => println!("{}", ui::order_failed(&e)),
    }

    show_history(session);
    Ok(())
}

fn prompt_order_form(theme: &ColorfulTheme, symbol: Symbol) -> anyhow::Result<OrderForm> {
    let kinds: Vec<&str> = OrderKind::ALL.iter().map(OrderKind::as_str).collect();
    let kind = OrderKind::ALL[Select::with_theme(theme)
        .with_prompt("Order Type")
        .items(&kinds)
        .default(0)
        .interact()?];

    let sides = [Side::Buy, Side::Sell];
    let side = sides[Select::with_theme(theme)
        .with_prompt("Side")
        .items(&["BUY", "SELL"])
        .default(0)
        .interact()?];

    let min_qty = min_quantity();
    let quantity: Decimal = Input::with_theme(theme)
        .with_prompt("Quantity")
        .default(default_quantity())
        .validate_with(move |q: &Decimal| -> Result<(), String> {
            if *q >= min_qty {
                Ok(())
            } else {
                Err(format!("Quantity must be at least {}", min_qty))
            }
        })
        .interact_text()?;

    let mut form = OrderForm::new(symbol, kind.as_str(), side, quantity);
    if kind.needs_price() {
        form = form.with_price(prompt_non_negative(theme, "Limit Price")?);
    }
    if kind.needs_stop_price() {
        form = form.with_stop_price(prompt_non_negative(theme, "Stop Price")?);
    }
    Ok(form)
}

/// Accepts zero so the validator gets to report it.
fn prompt_non_negative(theme: &ColorfulTheme, prompt: &str) -> anyhow::Result<Decimal> {
    let value = Input::with_theme(theme)
        .with_prompt(prompt)
        .default(Decimal::ZERO)
        .validate_with(|v: &Decimal| -> Result<(), &str> {
            if v.is_sign_negative() {
                Err("Must not be negative")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value)
}

fn show_history(session: &Session) {
    let rendered = ui::history(session.history());
    if rendered.is_empty() {
        println!("No orders placed this session.");
    } else {
        print!("\n{}", rendered);
    }
}
