//! # Models
//!
//! Plain data records shared by every crate of the finance dashboard: the
//! settings, monthly savings, loan schedule, real-estate sale parameters and
//! per-person income that together make up [`AppState`], plus the typed
//! patches used to edit them and the JSON snapshot shape used for export.
//!
//! All amounts are `f64`. Values that are not finite are treated as zero
//! (see [`sanitize_amount`]).

pub mod amount;
pub mod financial;
pub mod month;
pub mod settings;
pub mod state;

pub use amount::{
    MonthlyAmounts, amount_for, lenient_amount, lenient_monthly_amounts, sanitize_amount,
};
pub use financial::{
    IncomeData, LoanData, LoanPatch, LoanPayment, RealEstate, RealEstatePatch, RealEstateUpdate,
};
pub use month::{Month, ParseMonthError, ParsePersonError, ParseTabError, Person, Tab};
pub use settings::{
    DEFAULT_HOLIDAYS, DEFAULT_WORKING_DAYS_PER_YEAR, Settings, SettingsPatch,
};
pub use state::{AppState, ExportData, StateChanges, UiPatch, UiState};

/// Month-keyed savings amounts.
pub type SavingsData = MonthlyAmounts;
