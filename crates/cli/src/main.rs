mod args;
mod commands;
mod render;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, Utc};
use clap::Parser;
use data_service::{load_state, save_state};
use logger::LogFormat;
use models::Month;
use state_store::{EventName, StateManager};
use tracing::info;

use crate::args::Cli;
use crate::commands::Outcome;

fn current_month() -> Result<Month> {
    let index = Local::now().month0() as usize;
    Month::from_index(index).with_context(|| format!("Invalid calendar month index {index}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = if cli.json_logs { LogFormat::Json } else { LogFormat::Text };
    logger::init(cli.verbose, format);

    let month = match cli.month {
        Some(month) => month,
        None => current_month()?,
    };
    info!(data = %cli.data.display(), %month, "starting session");

    let state = load_state(&cli.data, month)?;
    let manager = StateManager::create(state);
    let _messages = manager.bus().on(EventName::ShowMessage, |payload| {
        if let Some(text) = payload.message() {
            eprintln!("{text}");
        }
    });

    let mut stdout = std::io::stdout().lock();
    let outcome = commands::run(&manager, cli.command, Utc::now(), &mut stdout)?;

    if outcome == Outcome::Changed {
        save_state(&cli.data, &manager.get_full_state(), Utc::now())?;
        info!(data = %cli.data.display(), "saved");
    }
    Ok(())
}
