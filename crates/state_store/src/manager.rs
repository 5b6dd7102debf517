use std::rc::Rc;

use dashboard_engine::{calculate_wealth_summary, WealthSummary};
use models::{
    AppState, IncomeData, LoanData, LoanPatch, LoanPayment, Month, MonthlyAmounts, Person,
    RealEstate, RealEstatePatch, RealEstateUpdate, Settings, SettingsPatch, StateChanges, Tab,
    UiPatch,
};
use tracing::{debug, info};

use crate::event_bus::EventBus;
use crate::events::{EventName, EventPayload};
use crate::store::Store;

/// Typed entry point used by the presentation layer: one getter and one
/// updater per slice, each updater tagged with its event name.
#[derive(Debug)]
pub struct StateManager {
    store: Store,
}

impl StateManager {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Manager over a fresh bus.
    pub fn create(initial: AppState) -> Self {
        Self::new(Store::new(initial, EventBus::new()))
    }

    pub fn bus(&self) -> &EventBus {
        self.store.bus()
    }

    pub fn get_full_state(&self) -> Rc<AppState> {
        self.store.get_state()
    }

    pub fn get_settings(&self) -> Settings {
        self.store.get_state().settings.clone()
    }

    pub fn update_settings(&self, patch: &SettingsPatch) {
        self.store
            .update_settings(patch, Some(EventName::SettingsUpdated));
    }

    pub fn get_savings_data(&self) -> MonthlyAmounts {
        self.store.get_state().savings.clone()
    }

    pub fn update_savings(&self, month: Month, amount: f64) {
        self.store
            .update_savings(month, amount, Some(EventName::SavingsUpdated));
    }

    pub fn get_real_estate(&self) -> Option<RealEstate> {
        self.store.get_state().real_estate.clone()
    }

    pub fn update_real_estate(&self, real_estate: Option<RealEstate>) {
        self.store
            .update_real_estate(real_estate, Some(EventName::RealEstateUpdated));
    }

    /// Applies a single-field edit from the real-estate form. Emptying the
    /// name removes the property; edits before a name exists are ignored.
    pub fn edit_real_estate(&self, patch: &RealEstatePatch) {
        let current = self.get_real_estate();
        match patch.apply(current.as_ref()) {
            RealEstateUpdate::Set(real_estate) => self.update_real_estate(Some(real_estate)),
            RealEstateUpdate::Clear => self.update_real_estate(None),
            RealEstateUpdate::Unchanged => debug!("real estate edit ignored: no name"),
        }
    }

    pub fn get_loan_data(&self) -> LoanData {
        self.store.get_state().loan.clone()
    }

    pub fn update_loan(&self, patch: &LoanPatch) {
        self.store.update_loan(patch, Some(EventName::LoanUpdated));
    }

    pub fn set_loan_payment(&self, month: Month, payment: LoanPayment) {
        self.update_loan(&LoanPatch::payment(month, payment));
    }

    /// The settings field and the loan total are edited together.
    pub fn set_total_loan_amount(&self, amount: f64) {
        self.update_settings(&SettingsPatch {
            total_loan_amount: Some(amount),
            ..SettingsPatch::default()
        });
        self.update_loan(&LoanPatch::total_loaned(amount));
    }

    pub fn get_income(&self, person: Person) -> MonthlyAmounts {
        self.store.get_state().income.get(person).clone()
    }

    pub fn get_income_data(&self) -> IncomeData {
        self.store.get_state().income.clone()
    }

    pub fn update_income(&self, person: Person, month: Month, amount: f64) {
        self.store
            .update_income(person, month, amount, Some(EventName::IncomeUpdated));
    }

    /// Changes a person's default monthly income and carries it into every
    /// month that is still empty, zero, or on the previous default.
    pub fn set_default_income(&self, person: Person, amount: f64) {
        let old_default = self.get_settings().default_income(person);
        self.update_settings(&SettingsPatch::default_income(person, amount));

        let income = self.get_income(person);
        for month in Month::ALL {
            let follows_default = match income.get(&month) {
                None => true,
                Some(&current) => current == 0.0 || current == old_default || current.is_nan(),
            };
            if follows_default {
                self.update_income(person, month, amount);
            }
        }
    }

    pub fn set_current_tab(&self, tab: Tab) {
        self.store.update_ui(
            &UiPatch {
                current_tab: Some(tab),
            },
            Some(EventName::TabChanged),
        );
    }

    pub fn get_current_tab(&self) -> Tab {
        self.store.get_state().ui.current_tab
    }

    /// Month frozen at session start.
    pub fn get_current_month(&self) -> Month {
        self.store.get_state().ui.current_month
    }

    /// Replaces the whole state and announces it with `data:reset`.
    pub fn reset_state(&self, state: AppState) {
        info!("replacing application state");
        self.store
            .set_state(StateChanges::replace_all(state), Some(EventName::DataReset));
    }

    /// Computes the home page figures and publishes them as `wealth:calculated`.
    pub fn publish_wealth(&self) -> WealthSummary {
        let summary = calculate_wealth_summary(&self.store.get_state());
        self.publish(EventName::WealthCalculated, EventPayload::Wealth(summary.clone()));
        summary
    }

    pub fn show_message(&self, message: impl Into<String>) {
        self.publish(EventName::ShowMessage, EventPayload::Message(message.into()));
    }

    pub fn publish(&self, event: EventName, payload: EventPayload) {
        self.bus().publish(event, &payload);
    }
}
