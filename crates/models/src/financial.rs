use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::amount::{MonthlyAmounts, lenient_amount, lenient_monthly_amounts, sanitize_amount};
use crate::month::{Month, Person};

/// The single property that may be registered for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstate {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub selling_price: f64,
    /// Broker fee as a percentage of the selling price (0-100).
    #[serde(default, deserialize_with = "lenient_amount")]
    pub broker_fee_percentage: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub early_repayment_fine: f64,
}

impl RealEstate {
    /// A property only exists while it has a name; anything else is `None`.
    pub fn normalized(real_estate: Option<RealEstate>) -> Option<RealEstate> {
        real_estate.filter(|re| !re.name.trim().is_empty())
    }
}

/// Single field edits on the real-estate page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RealEstatePatch {
    pub name: Option<String>,
    pub selling_price: Option<f64>,
    pub broker_fee_percentage: Option<f64>,
    pub early_repayment_fine: Option<f64>,
}

/// Outcome of merging a [`RealEstatePatch`] into the current record.
#[derive(Debug, Clone, PartialEq)]
pub enum RealEstateUpdate {
    Set(RealEstate),
    /// The name was emptied: the whole record goes away.
    Clear,
    /// No name yet, so there is nothing to store.
    Unchanged,
}

impl RealEstatePatch {
    pub fn apply(&self, current: Option<&RealEstate>) -> RealEstateUpdate {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return RealEstateUpdate::Clear;
            }
        }

        let merged = RealEstate {
            name: self
                .name
                .clone()
                .or_else(|| current.map(|re| re.name.clone()))
                .unwrap_or_default(),
            selling_price: self
                .selling_price
                .or_else(|| current.map(|re| re.selling_price))
                .unwrap_or(0.0),
            broker_fee_percentage: self
                .broker_fee_percentage
                .or_else(|| current.map(|re| re.broker_fee_percentage))
                .unwrap_or(0.0),
            early_repayment_fine: self
                .early_repayment_fine
                .or_else(|| current.map(|re| re.early_repayment_fine))
                .unwrap_or(0.0),
        };

        if merged.name.trim().is_empty() {
            RealEstateUpdate::Unchanged
        } else {
            RealEstateUpdate::Set(merged)
        }
    }
}

/// Split of one monthly loan installment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanPayment {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub interest: f64,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub principal: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanData {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_loaned: f64,
    #[serde(default)]
    pub monthly_payments: BTreeMap<Month, LoanPayment>,
}

impl LoanData {
    /// Installment for `month`, `{0, 0}` when none was entered.
    pub fn payment(&self, month: Month) -> LoanPayment {
        self.monthly_payments
            .get(&month)
            .copied()
            .unwrap_or_default()
    }

    /// Principal repaid in `month`, never `NaN`.
    pub fn principal(&self, month: Month) -> f64 {
        sanitize_amount(self.payment(month).principal)
    }
}

/// Fields of [`LoanData`] that an edit may change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoanPatch {
    pub total_loaned: Option<f64>,
    /// Replaces the whole schedule.
    pub monthly_payments: Option<BTreeMap<Month, LoanPayment>>,
    /// Sets one month, applied after `monthly_payments`.
    pub payment: Option<(Month, LoanPayment)>,
}

impl LoanPatch {
    pub fn total_loaned(amount: f64) -> Self {
        Self {
            total_loaned: Some(amount),
            ..Self::default()
        }
    }

    pub fn payment(month: Month, payment: LoanPayment) -> Self {
        Self {
            payment: Some((month, payment)),
            ..Self::default()
        }
    }

    pub fn apply(&self, loan: &LoanData) -> LoanData {
        let mut monthly_payments = self
            .monthly_payments
            .clone()
            .unwrap_or_else(|| loan.monthly_payments.clone());
        if let Some((month, payment)) = self.payment {
            monthly_payments.insert(month, payment);
        }
        LoanData {
            total_loaned: self.total_loaned.unwrap_or(loan.total_loaned),
            monthly_payments,
        }
    }
}

/// Monthly income kept separately for each person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeData {
    #[serde(default, deserialize_with = "lenient_monthly_amounts")]
    pub person1: MonthlyAmounts,
    #[serde(default, deserialize_with = "lenient_monthly_amounts")]
    pub person2: MonthlyAmounts,
}

impl IncomeData {
    pub fn get(&self, person: Person) -> &MonthlyAmounts {
        match person {
            Person::Person1 => &self.person1,
            Person::Person2 => &self.person2,
        }
    }

    /// Copy of `self` with one person's month replaced.
    pub fn with_amount(&self, person: Person, month: Month, amount: f64) -> IncomeData {
        let mut next = self.clone();
        let target = match person {
            Person::Person1 => &mut next.person1,
            Person::Person2 => &mut next.person2,
        };
        target.insert(month, amount);
        next
    }
}
