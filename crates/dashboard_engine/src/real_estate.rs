use models::{sanitize_amount, RealEstate};

/// Surcharge applied on top of the broker fee (21% tax).
pub const BROKER_FEE_TAX_MULTIPLIER: f64 = 1.21;

/// Broker fee including tax for a sale at `price`.
pub fn calculate_broker_fees(price: f64, percentage: f64) -> f64 {
    sanitize_amount(price) * (sanitize_amount(percentage) / 100.0) * BROKER_FEE_TAX_MULTIPLIER
}

/// Net proceeds of selling the property after fees, fine and loan payoff.
/// Zero when no property is registered.
pub fn calculate_net_value(real_estate: Option<&RealEstate>, loan_balance: f64) -> f64 {
    let Some(real_estate) = real_estate else {
        return 0.0;
    };
    let price = sanitize_amount(real_estate.selling_price);
    price
        - calculate_broker_fees(price, real_estate.broker_fee_percentage)
        - sanitize_amount(real_estate.early_repayment_fine)
        - sanitize_amount(loan_balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property() -> RealEstate {
        RealEstate {
            name: "Apartment".to_string(),
            selling_price: 250_000.0,
            broker_fee_percentage: 3.0,
            early_repayment_fine: 5_000.0,
        }
    }

    #[test]
    fn test_broker_fees() {
        assert!((calculate_broker_fees(250_000.0, 3.0) - 9_075.0).abs() < 1e-6);
        assert_eq!(calculate_broker_fees(250_000.0, 0.0), 0.0);
    }

    #[test]
    fn test_net_value() {
        let net = calculate_net_value(Some(&property()), 100_000.0);
        assert!((net - 135_925.0).abs() < 1e-6);
    }

    #[test]
    fn test_net_value_without_property() {
        assert_eq!(calculate_net_value(None, 0.0), 0.0);
        assert_eq!(calculate_net_value(None, 500_000.0), 0.0);
    }

    #[test]
    fn test_net_value_can_go_negative() {
        let net = calculate_net_value(Some(&property()), 400_000.0);
        assert!(net < 0.0);
    }
}
