use std::cell::RefCell;
use std::rc::Rc;

use models::{
    AppState, LoanPatch, Month, Person, RealEstate, SettingsPatch, StateChanges, UiPatch,
};
use tracing::debug;

use crate::event_bus::EventBus;
use crate::events::{EventName, EventPayload};

/// Owner of the single [`AppState`].
///
/// Every update builds a complete new state, swaps it in, and only then
/// publishes, so subscribers never see a half-applied change. Snapshots handed
/// out by [`Store::get_state`] are shared and never mutated.
#[derive(Debug)]
pub struct Store {
    state: RefCell<Rc<AppState>>,
    bus: EventBus,
}

impl Store {
    pub fn new(initial: AppState, bus: EventBus) -> Self {
        Self {
            state: RefCell::new(Rc::new(initial)),
            bus,
        }
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn get_state(&self) -> Rc<AppState> {
        Rc::clone(&self.state.borrow())
    }

    fn commit(&self, next: AppState) -> Rc<AppState> {
        let next = Rc::new(next);
        *self.state.borrow_mut() = Rc::clone(&next);
        next
    }

    fn notify(&self, event: Option<EventName>, payload: impl FnOnce() -> EventPayload) {
        if let Some(event) = event {
            debug!(event = %event, "state updated");
            self.bus.publish(event, &payload());
        }
    }

    /// Shallow merge of whole slices. The payload is the entire new state.
    pub fn set_state(&self, changes: StateChanges, event: Option<EventName>) {
        let next = changes.apply(&self.get_state());
        let next = self.commit(next);
        self.notify(event, || EventPayload::State(next));
    }

    pub fn update_settings(&self, patch: &SettingsPatch, event: Option<EventName>) {
        let current = self.get_state();
        let next = AppState {
            settings: patch.apply(&current.settings),
            ..(*current).clone()
        };
        let next = self.commit(next);
        self.notify(event, || EventPayload::Settings(next.settings.clone()));
    }

    /// Replaces one month, every other month is kept.
    pub fn update_savings(&self, month: Month, amount: f64, event: Option<EventName>) {
        let current = self.get_state();
        let mut savings = current.savings.clone();
        savings.insert(month, amount);
        self.commit(AppState {
            savings,
            ..(*current).clone()
        });
        self.notify(event, || EventPayload::Savings { month, amount });
    }

    /// Replaces the property outright; `None` or an unnamed property clears it.
    pub fn update_real_estate(&self, real_estate: Option<RealEstate>, event: Option<EventName>) {
        let current = self.get_state();
        let real_estate = RealEstate::normalized(real_estate);
        let next = self.commit(AppState {
            real_estate,
            ..(*current).clone()
        });
        self.notify(event, || EventPayload::RealEstate(next.real_estate.clone()));
    }

    pub fn update_loan(&self, patch: &LoanPatch, event: Option<EventName>) {
        let current = self.get_state();
        let next = self.commit(AppState {
            loan: patch.apply(&current.loan),
            ..(*current).clone()
        });
        self.notify(event, || EventPayload::Loan(next.loan.clone()));
    }

    pub fn update_income(&self, person: Person, month: Month, amount: f64, event: Option<EventName>) {
        let current = self.get_state();
        self.commit(AppState {
            income: current.income.with_amount(person, month, amount),
            ..(*current).clone()
        });
        self.notify(event, || EventPayload::Income {
            person,
            month,
            amount,
        });
    }

    pub fn update_ui(&self, patch: &UiPatch, event: Option<EventName>) {
        let current = self.get_state();
        let next = self.commit(AppState {
            ui: patch.apply(&current.ui),
            ..(*current).clone()
        });
        self.notify(event, || EventPayload::Ui(next.ui));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Tab;
    use std::cell::RefCell;

    fn store() -> Store {
        Store::new(AppState::new(Month::March), EventBus::new())
    }

    #[test]
    fn test_update_savings_keeps_other_months() {
        let store = store();
        store.update_savings(Month::January, 100.0, None);
        store.update_savings(Month::March, 300.0, None);

        let state = store.get_state();
        assert_eq!(state.savings.get(&Month::January), Some(&100.0));
        assert_eq!(state.savings.get(&Month::March), Some(&300.0));
    }

    #[test]
    fn test_update_savings_is_idempotent() {
        let store = store();
        store.update_savings(Month::March, 100.0, Some(EventName::SavingsUpdated));
        let first = store.get_state();
        store.update_savings(Month::March, 100.0, Some(EventName::SavingsUpdated));
        assert_eq!(*store.get_state(), *first);
    }

    #[test]
    fn test_snapshots_are_not_mutated_by_later_updates() {
        let store = store();
        let before = store.get_state();
        store.update_savings(Month::April, 50.0, None);
        assert!(before.savings.is_empty());
        assert_eq!(store.get_state().savings.len(), 1);
    }

    #[test]
    fn test_slice_payloads() {
        let store = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        for event in [EventName::SavingsUpdated, EventName::TabChanged, EventName::DataReset] {
            let seen = Rc::clone(&seen);
            store
                .bus()
                .on(event, move |payload| seen.borrow_mut().push(payload.clone()));
        }

        store.update_savings(Month::May, 42.0, Some(EventName::SavingsUpdated));
        store.update_ui(
            &UiPatch {
                current_tab: Some(Tab::Income),
            },
            Some(EventName::TabChanged),
        );
        store.set_state(StateChanges::default(), Some(EventName::DataReset));

        let seen = seen.borrow();
        assert_eq!(
            seen[0],
            EventPayload::Savings {
                month: Month::May,
                amount: 42.0
            }
        );
        match &seen[1] {
            EventPayload::Ui(ui) => assert_eq!(ui.current_tab, Tab::Income),
            other => panic!("unexpected payload {other:?}"),
        }
        assert_eq!(seen[2].state(), Some(&*store.get_state()));
    }

    #[test]
    fn test_no_event_without_name() {
        let store = store();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        store
            .bus()
            .on(EventName::SavingsUpdated, move |_| *counter.borrow_mut() += 1);

        store.update_savings(Month::May, 42.0, None);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_subscriber_sees_complete_state() {
        let store = Rc::new(store());
        let observed = Rc::new(RefCell::new(None));
        {
            let store_ref = Rc::downgrade(&store);
            let observed = Rc::clone(&observed);
            store.bus().on(EventName::LoanUpdated, move |_| {
                if let Some(store) = store_ref.upgrade() {
                    let state = store.get_state();
                    *observed.borrow_mut() = Some((state.loan.total_loaned, state.loan.principal(Month::May)));
                }
            });
        }

        let patch = LoanPatch {
            total_loaned: Some(90_000.0),
            payment: Some((
                Month::May,
                models::LoanPayment {
                    interest: 10.0,
                    principal: 500.0,
                },
            )),
            ..LoanPatch::default()
        };
        store.update_loan(&patch, Some(EventName::LoanUpdated));
        assert_eq!(*observed.borrow(), Some((90_000.0, 500.0)));
    }

    #[test]
    fn test_update_real_estate_none_clears() {
        let store = store();
        store.update_real_estate(
            Some(RealEstate {
                name: "Loft".into(),
                selling_price: 1.0,
                broker_fee_percentage: 2.0,
                early_repayment_fine: 3.0,
            }),
            None,
        );
        assert!(store.get_state().real_estate.is_some());
        store.update_real_estate(None, Some(EventName::RealEstateUpdated));
        assert_eq!(store.get_state().real_estate, None);
    }
}
