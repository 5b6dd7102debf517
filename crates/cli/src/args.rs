use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dashboard_engine::parse_formatted_number;
use models::{Month, Person, SettingsPatch, Tab};

#[derive(Parser, Debug)]
#[command(
    name = "finance-dashboard",
    version,
    about = "Household wealth dashboard: savings, income, loan and property in one place."
)]
pub struct Cli {
    /// Dashboard data file, created on first write
    #[arg(
        long,
        global = true,
        env = "FINANCE_DASHBOARD_DATA",
        default_value = "financial-dashboard.json"
    )]
    pub data: PathBuf,

    /// Month treated as "now" (defaults to the current calendar month)
    #[arg(long, global = true)]
    pub month: Option<Month>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log lines as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Home page: wealth now and at year end
    Summary {
        /// Print every page's figures as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or edit monthly savings
    Savings {
        #[command(subcommand)]
        action: Option<SavingsAction>,
    },
    /// Show or edit monthly income
    Income {
        #[command(subcommand)]
        action: Option<IncomeAction>,
    },
    /// Show or edit the loan
    Loan {
        #[command(subcommand)]
        action: Option<LoanAction>,
    },
    /// Show or edit the property for sale
    RealEstate {
        #[command(subcommand)]
        action: Option<RealEstateAction>,
    },
    /// Show or edit settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
    /// Write a dated JSON backup into a directory
    Export {
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Load a JSON backup; keys missing from the file keep their current value
    Import { file: PathBuf },
    /// Forget everything and start from defaults
    Reset,
    /// Open a page by its tab name (home, savings, realEstate, loan, income, settings)
    Tab { tab: Tab },
}

#[derive(Subcommand, Debug)]
pub enum SavingsAction {
    /// Record the amount saved in a month
    Set {
        month: Month,
        #[arg(value_parser = amount, allow_negative_numbers = true)]
        amount: f64,
    },
}

#[derive(Subcommand, Debug)]
pub enum IncomeAction {
    /// Record one person's income for a month
    Set {
        person: Person,
        month: Month,
        #[arg(value_parser = amount, allow_negative_numbers = true)]
        amount: f64,
    },
    /// Change a person's default monthly income and fill the months still on the old default
    Default {
        person: Person,
        #[arg(value_parser = amount, allow_negative_numbers = true)]
        amount: f64,
    },
}

#[derive(Subcommand, Debug)]
pub enum LoanAction {
    /// Amount originally borrowed
    Total {
        #[arg(value_parser = amount, allow_negative_numbers = true)]
        amount: f64,
    },
    /// Interest and principal paid in a month
    Payment {
        month: Month,
        #[arg(long, value_parser = amount, default_value = "0")]
        interest: f64,
        #[arg(long, value_parser = amount, default_value = "0")]
        principal: f64,
    },
}

#[derive(Subcommand, Debug)]
pub enum RealEstateAction {
    /// Edit the property; an empty name removes it
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_parser = amount)]
        price: Option<f64>,
        /// Broker fee in percent of the selling price
        #[arg(long, value_parser = amount)]
        broker_fee: Option<f64>,
        #[arg(long, value_parser = amount)]
        early_repayment_fine: Option<f64>,
    },
    /// Remove the property
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    Set(SettingsArgs),
}

#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    #[arg(long, value_parser = amount)]
    pub total_wealth_goal: Option<f64>,
    #[arg(long, value_parser = amount)]
    pub savings_goal_year: Option<f64>,
    #[arg(long, value_parser = amount)]
    pub current_savings_amount: Option<f64>,
    /// Also sets the loan's total amount
    #[arg(long, value_parser = amount)]
    pub total_loan_amount: Option<f64>,
    #[arg(long, value_parser = amount)]
    pub current_open_capital: Option<f64>,
    #[arg(long, value_parser = amount)]
    pub expected_dividends: Option<f64>,
    #[arg(long, value_parser = amount)]
    pub expected_debt_collection: Option<f64>,
    #[arg(long, value_parser = amount)]
    pub working_days_per_year: Option<f64>,
    #[arg(long, value_parser = amount)]
    pub holidays: Option<f64>,
    #[arg(long)]
    pub person1_name: Option<String>,
    #[arg(long)]
    pub person2_name: Option<String>,
    #[arg(long, value_parser = amount)]
    pub person1_meal_voucher: Option<f64>,
    #[arg(long, value_parser = amount)]
    pub person2_meal_voucher: Option<f64>,
    #[arg(long, value_parser = amount)]
    pub person1_default_income: Option<f64>,
    #[arg(long, value_parser = amount)]
    pub person2_default_income: Option<f64>,
    #[arg(long, value_parser = amount)]
    pub rent_income: Option<f64>,
    #[arg(long, value_parser = amount)]
    pub utilities_income: Option<f64>,
}

impl SettingsArgs {
    /// Plain field edits. Loan total and default incomes are split off because
    /// changing them touches other slices as well.
    pub fn into_parts(self) -> (SettingsPatch, Option<f64>, [(Person, Option<f64>); 2]) {
        let patch = SettingsPatch {
            total_wealth_goal: self.total_wealth_goal,
            savings_goal_year: self.savings_goal_year,
            current_savings_amount: self.current_savings_amount,
            total_loan_amount: None,
            current_open_capital: self.current_open_capital,
            expected_dividends: self.expected_dividends,
            expected_debt_collection: self.expected_debt_collection,
            working_days_per_year: self.working_days_per_year,
            holidays: self.holidays,
            person1_name: self.person1_name,
            person2_name: self.person2_name,
            person1_meal_voucher: self.person1_meal_voucher,
            person2_meal_voucher: self.person2_meal_voucher,
            person1_default_income: None,
            person2_default_income: None,
            rent_income: self.rent_income,
            utilities_income: self.utilities_income,
        };
        let defaults = [
            (Person::Person1, self.person1_default_income),
            (Person::Person2, self.person2_default_income),
        ];
        (patch, self.total_loan_amount, defaults)
    }
}

/// Amounts are typed the way the dashboard shows them: `1.234,56`.
/// Anything that is not a number counts as 0.
fn amount(text: &str) -> Result<f64, String> {
    Ok(parse_formatted_number(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_european_amounts() {
        let cli = Cli::try_parse_from([
            "finance-dashboard",
            "savings",
            "set",
            "march",
            "1.234,56",
        ])
        .unwrap();
        match cli.command {
            Command::Savings {
                action: Some(SavingsAction::Set { month, amount }),
            } => {
                assert_eq!(month, Month::March);
                assert!((amount - 1234.56).abs() < 1e-9);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "finance-dashboard",
            "summary",
            "--month",
            "October",
            "--data",
            "/tmp/x.json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.month, Some(Month::October));
        assert_eq!(cli.data, PathBuf::from("/tmp/x.json"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_month_is_rejected() {
        let result = Cli::try_parse_from(["finance-dashboard", "savings", "set", "Smarch", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_split() {
        let args = SettingsArgs {
            total_wealth_goal: Some(1.0),
            total_loan_amount: Some(2.0),
            person2_default_income: Some(3.0),
            ..SettingsArgs::default()
        };
        let (patch, loan_total, defaults) = args.into_parts();
        assert_eq!(patch.total_wealth_goal, Some(1.0));
        assert_eq!(patch.total_loan_amount, None);
        assert_eq!(loan_total, Some(2.0));
        assert_eq!(defaults[1], (Person::Person2, Some(3.0)));
        assert_eq!(defaults[0], (Person::Person1, None));
    }
}
