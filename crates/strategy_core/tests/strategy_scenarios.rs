//! End-to-end scenarios for both strategies.

use approx::assert_relative_eq;
use proptest::prelude::*;
use strategy_core::calculator::compute_strategy_returns;
use strategy_core::grid::PriceGrid;
use strategy_core::payoff::compute_payoff;
use strategy_core::types::{StrategyParameters, StrategyVariant};

fn reference_params() -> StrategyParameters {
    StrategyParameters::new(100.0, 2.0, 100.0)
        .with_contract_size(100)
        .with_contracts(1)
}

fn payoff_at(variant: StrategyVariant, price: f64, params: &StrategyParameters) -> f64 {
    let grid = PriceGrid::from_prices(vec![price]).unwrap();
    compute_payoff(variant, &grid, params).unwrap().values()[0]
}

#[test]
fn test_cash_secured_put_reference_scenario() {
    let params = reference_params();
    let variant = StrategyVariant::CashSecuredPut;

    assert_relative_eq!(payoff_at(variant, 90.0, &params), -800.0, epsilon = 1e-9);
    assert_relative_eq!(payoff_at(variant, 110.0, &params), 200.0, epsilon = 1e-9);

    let bundle = compute_strategy_returns(variant, params).unwrap();
    assert_eq!(bundle.break_even_price, 98.0);
}

#[test]
fn test_covered_call_reference_scenario() {
    let params = reference_params();
    let variant = StrategyVariant::CoveredCall;

    assert_relative_eq!(payoff_at(variant, 90.0, &params), -800.0, epsilon = 1e-9);
    assert_relative_eq!(payoff_at(variant, 110.0, &params), 200.0, epsilon = 1e-9);

    let bundle = compute_strategy_returns(variant, params).unwrap();
    assert_eq!(bundle.break_even_price, 98.0);
}

#[test]
fn test_boundary_parameters_are_rejected() {
    let cases = [
        StrategyParameters::new(0.0, 2.0, 100.0),
        StrategyParameters::new(100.0, 2.0, -5.0),
        reference_params().with_contract_size(0),
    ];

    for params in cases {
        for variant in StrategyVariant::ALL {
            let err = compute_strategy_returns(variant, params).unwrap_err();
            assert!(err.to_string().starts_with("Invalid parameter"));
        }
    }
}

#[test]
fn test_extreme_prices_are_rejected_not_corrupted() {
    let cases = [
        (StrategyVariant::CoveredCall, StrategyParameters::new(100.0, 2.0, 1.5e308)),
        (StrategyVariant::CashSecuredPut, StrategyParameters::new(100.0, 2.0, 5e-324)),
        (StrategyVariant::CoveredCall, StrategyParameters::new(1e308, 1.0, 1e308)),
    ];

    for (variant, params) in cases {
        assert!(
            compute_strategy_returns(variant, params).is_err(),
            "{} at current {} should be rejected",
            variant,
            params.current_price
        );
    }
}

#[test]
fn test_multiple_contracts_scale_linearly() {
    let one = compute_strategy_returns(StrategyVariant::CoveredCall, reference_params()).unwrap();
    let five = compute_strategy_returns(
        StrategyVariant::CoveredCall,
        reference_params().with_contracts(5),
    )
    .unwrap();

    assert_eq!(one.grid, five.grid);
    for (a, b) in one.curve.iter().zip(five.curve.iter()) {
        assert_relative_eq!(a * 5.0, b, epsilon = 1e-9);
    }
    assert_relative_eq!(one.current_payoff * 5.0, five.current_payoff, epsilon = 1e-9);
    assert_eq!(one.break_even_price, five.break_even_price);
}

#[test]
fn test_current_payoff_matches_curve_when_strike_far_away() {
    // Strike far below the grid: the put is flat everywhere.
    let params = StrategyParameters::new(10.0, 1.25, 100.0);
    let bundle = compute_strategy_returns(StrategyVariant::CashSecuredPut, params).unwrap();
    assert_eq!(bundle.current_payoff, 125.0);
    assert!(bundle.curve.iter().all(|v| v == 125.0));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn test_bundle_invariants(
        strike in 1.0_f64..1_000.0,
        current in 1.0_f64..1_000.0,
        premium in 0.0_f64..25.0,
        contracts in 1_u32..10,
        call in any::<bool>()
    ) {
        let variant = if call { StrategyVariant::CoveredCall } else { StrategyVariant::CashSecuredPut };
        let params = StrategyParameters::new(strike, premium, current).with_contracts(contracts);

        let bundle = compute_strategy_returns(variant, params).unwrap();
        let again = compute_strategy_returns(variant, params).unwrap();
        prop_assert_eq!(&bundle, &again);

        prop_assert_eq!(bundle.grid.len(), bundle.curve.len());
        for w in bundle.grid.prices().windows(2) {
            prop_assert!(w[1] > w[0]);
        }

        let lo = bundle.curve.min().unwrap();
        let hi = bundle.curve.max().unwrap();
        prop_assert!(bundle.current_payoff >= lo - 1e-9 && bundle.current_payoff <= hi + 1e-9);
    }
}
