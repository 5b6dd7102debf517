use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use dashboard_engine::summarize;
use data_service::DataService;
use models::{LoanPayment, RealEstatePatch, Tab};
use state_store::StateManager;
use tracing::debug;

use crate::args::{
    Command, IncomeAction, LoanAction, RealEstateAction, SavingsAction, SettingsAction,
};
use crate::render;

/// Whether the data file needs to be written back after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
}

/// Applies `command` to the session and writes the resulting page to `out`.
pub fn run(
    manager: &StateManager,
    command: Command,
    now: DateTime<Utc>,
    out: &mut impl Write,
) -> Result<Outcome> {
    debug!(?command, "running command");
    let (tab, outcome) = match command {
        Command::Summary { json } => {
            if json {
                let summary = summarize(&manager.get_full_state()).rounded();
                let text = serde_json::to_string_pretty(&summary)
                    .context("Serializing dashboard summary")?;
                writeln!(out, "{text}")?;
                return Ok(Outcome::Unchanged);
            }
            manager.publish_wealth();
            (Tab::Home, Outcome::Unchanged)
        }
        Command::Savings { action } => {
            let outcome = match action {
                Some(SavingsAction::Set { month, amount }) => {
                    manager.update_savings(month, amount);
                    Outcome::Changed
                }
                None => Outcome::Unchanged,
            };
            (Tab::Savings, outcome)
        }
        Command::Income { action } => {
            let outcome = match action {
                Some(IncomeAction::Set {
                    person,
                    month,
                    amount,
                }) => {
                    manager.update_income(person, month, amount);
                    Outcome::Changed
                }
                Some(IncomeAction::Default { person, amount }) => {
                    manager.set_default_income(person, amount);
                    Outcome::Changed
                }
                None => Outcome::Unchanged,
            };
            (Tab::Income, outcome)
        }
        Command::Loan { action } => {
            let outcome = match action {
                Some(LoanAction::Total { amount }) => {
                    manager.set_total_loan_amount(amount);
                    Outcome::Changed
                }
                Some(LoanAction::Payment {
                    month,
                    interest,
                    principal,
                }) => {
                    manager.set_loan_payment(month, LoanPayment { interest, principal });
                    Outcome::Changed
                }
                None => Outcome::Unchanged,
            };
            (Tab::Loan, outcome)
        }
        Command::RealEstate { action } => {
            let outcome = match action {
                Some(RealEstateAction::Set {
                    name,
                    price,
                    broker_fee,
                    early_repayment_fine,
                }) => {
                    manager.edit_real_estate(&RealEstatePatch {
                        name,
                        selling_price: price,
                        broker_fee_percentage: broker_fee,
                        early_repayment_fine,
                    });
                    Outcome::Changed
                }
                Some(RealEstateAction::Clear) => {
                    manager.update_real_estate(None);
                    Outcome::Changed
                }
                None => Outcome::Unchanged,
            };
            (Tab::RealEstate, outcome)
        }
        Command::Settings { action } => {
            let outcome = match action {
                Some(SettingsAction::Set(args)) => {
                    let (patch, loan_total, default_incomes) = args.into_parts();
                    if !patch.is_empty() {
                        manager.update_settings(&patch);
                    }
                    if let Some(amount) = loan_total {
                        manager.set_total_loan_amount(amount);
                    }
                    for (person, amount) in default_incomes {
                        if let Some(amount) = amount {
                            manager.set_default_income(person, amount);
                        }
                    }
                    Outcome::Changed
                }
                None => Outcome::Unchanged,
            };
            (Tab::Settings, outcome)
        }
        Command::Export { dir } => {
            let path = DataService::new(manager).export(&dir, now)?;
            writeln!(out, "{}", path.display())?;
            return Ok(Outcome::Unchanged);
        }
        Command::Import { file } => {
            DataService::new(manager).import_file(&file)?;
            (Tab::Home, Outcome::Changed)
        }
        Command::Reset => {
            DataService::new(manager).reset();
            (Tab::Home, Outcome::Changed)
        }
        Command::Tab { tab } => (tab, Outcome::Unchanged),
    };

    manager.set_current_tab(tab);
    write!(out, "{}", render::page(&manager.get_full_state(), tab))?;
    Ok(outcome)
}
