use super::weth_usdc_pool;
use crate::errors::ErrorCode;
use crate::instructions::*;
use crate::position_manager::build_positions;
use crate::types::GridPosition;
use grid_math::MathError;
use primitive_types::{H160, U256};
use serde_json::json;
use std::collections::HashMap;

mod option_tests {
    use super::*;

    #[test]
    fn test_slippage_to_bps() {
        assert_eq!(slippage_to_bps(0.0).unwrap(), 0);
        assert_eq!(slippage_to_bps(0.1).unwrap(), 10);
        assert_eq!(slippage_to_bps(0.5).unwrap(), 50);
        assert_eq!(slippage_to_bps(5.0).unwrap(), 500);
    }

    #[test]
    fn test_slippage_limits() {
        assert_eq!(slippage_to_bps(5.01), Err(ErrorCode::SlippageTooHigh));
        assert_eq!(slippage_to_bps(-1.0), Err(ErrorCode::InvalidSlippage));
        assert_eq!(slippage_to_bps(f64::NAN), Err(ErrorCode::InvalidSlippage));
        assert_eq!(
            slippage_to_bps(f64::INFINITY),
            Err(ErrorCode::InvalidSlippage)
        );
    }

    #[test]
    fn test_enum_values() {
        assert_eq!(GridType::try_from(2).unwrap(), GridType::Sell);
        assert_eq!(GridType::try_from(3), Err(ErrorCode::InvalidGridType(3)));
        assert_eq!(
            DistributionType::try_from(5).unwrap(),
            DistributionType::Logarithmic
        );
        assert_eq!(
            DistributionType::try_from(6),
            Err(ErrorCode::InvalidDistributionType(6))
        );
        assert_eq!(u8::from(DistributionType::Sigmoid), 3);
    }

    #[test]
    fn test_rebalance_args_reject_unknown_values() {
        let parsed: Result<RebalanceArgs, _> = serde_json::from_value(json!({
            "slippageBps": 50,
            "gridType": 7,
            "distributionType": 0
        }));
        assert!(parsed.is_err());

        let parsed: RebalanceArgs = serde_json::from_value(json!({
            "slippageBps": 50,
            "gridType": 2,
            "distributionType": 4
        }))
        .unwrap();
        assert_eq!(parsed, RebalanceArgs::new(0.5, 2, 4).unwrap());
    }
}

mod call_builder_tests {
    use super::*;

    #[test]
    fn test_deposit_floors_to_raw_units() {
        let call = deposit::handler(&weth_usdc_pool(), 1.5, 3000.25, 0.5, 1, 3).unwrap();
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "functionName": "deposit",
                "args": ["0x14d1120d7b160000", "0xb2d42e90", 50, 1, 3]
            })
        );
        assert_eq!(call.function_name(), "deposit");
    }

    #[test]
    fn test_deposit_rejects_bad_input() {
        let pool = weth_usdc_pool();
        assert_eq!(
            deposit::handler(&pool, 1.0, 1.0, 6.0, 0, 0),
            Err(ErrorCode::SlippageTooHigh)
        );
        assert_eq!(
            deposit::handler(&pool, 1.0, 1.0, 1.0, 9, 0),
            Err(ErrorCode::InvalidGridType(9))
        );
        assert_eq!(
            deposit::handler(&pool, -1.0, 1.0, 1.0, 0, 0),
            Err(ErrorCode::Math(MathError::NegativeAmount))
        );
    }

    #[test]
    fn test_compound_and_sweep() {
        let compound = compound::handler(1.0, 0, 0).unwrap();
        assert_eq!(
            serde_json::to_value(&compound).unwrap(),
            json!({
                "functionName": "compound",
                "args": [100, 0, 0]
            })
        );
        let sweep = sweep::handler(0.25, 2, 5).unwrap();
        assert_eq!(sweep, GridCall::Sweep(RebalanceArgs::new(0.25, 2, 5).unwrap()));
        assert_eq!(sweep.function_name(), "sweep");
        assert_eq!(
            sweep.args(),
            vec![AbiArg::Uint16(25), AbiArg::Uint16(2), AbiArg::Uint16(5)]
        );
        assert_eq!(
            sweep::handler(0.25, 0, 6),
            Err(ErrorCode::InvalidDistributionType(6))
        );
    }

    #[test]
    fn test_withdraw_calls_take_no_arguments() {
        assert_eq!(
            serde_json::to_value(withdraw()).unwrap(),
            json!({"functionName": "withdraw", "args": []})
        );
        assert_eq!(withdraw_available().function_name(), "withdrawAvailable");
    }

    #[test]
    fn test_add_liquidity_to_known_position() {
        let pool = weth_usdc_pool();
        let grid_position = GridPosition {
            token_id: U256::from(42u64),
            tick_lower: -196_320,
            tick_upper: -196_260,
            liquidity: 1_000_000,
            index: U256::zero(),
        };
        let positions = build_positions(vec![grid_position], &pool, &HashMap::new(), true).unwrap();

        let call =
            add_liquidity::handler(&pool, &positions, U256::from(42u64), 0.1, 300.0, 1.0).unwrap();
        assert_eq!(
            call,
            GridCall::AddLiquidityToPosition {
                token_id: U256::from(42u64),
                slippage_bps: 100,
                token0_amount: U256::from(100_000_000_000_000_000u64),
                token1_amount: U256::from(300_000_000u64),
            }
        );

        // token id and slippage come before the amounts
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "functionName": "addLiquidityToPosition",
                "args": ["0x2a", 100, "0x16345785d8a0000", "0x11e1a300"]
            })
        );

        assert_eq!(
            add_liquidity::handler(&pool, &positions, U256::from(7u64), 0.1, 300.0, 1.0),
            Err(ErrorCode::PositionNotFound(U256::from(7u64)))
        );
        assert_eq!(
            add_liquidity::handler(&pool, &positions, U256::from(42u64), 0.1, 300.0, 10.0),
            Err(ErrorCode::SlippageTooHigh)
        );
    }

    #[test]
    fn test_min_fees() {
        let call = min_fees::handler(&weth_usdc_pool(), 0.001, 2.5).unwrap();
        assert_eq!(
            call,
            GridCall::SetMinFees {
                token0_min_fees: U256::from(1_000_000_000_000_000u64),
                token1_min_fees: U256::from(2_500_000u64),
            }
        );
        assert_eq!(call.function_name(), "setMinFees");
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({"functionName": "setMinFees", "args": ["0x38d7ea4c68000", "0x2625a0"]})
        );
    }

    #[test]
    fn test_grid_params_must_be_positive() {
        assert_eq!(
            grid_params::set_grid_quantity(U256::from(10u64)).unwrap(),
            GridCall::SetGridQuantity(U256::from(10u64))
        );
        assert_eq!(
            grid_params::set_grid_step(U256::zero()),
            Err(ErrorCode::InvalidGridParameter)
        );
        assert_eq!(
            grid_params::set_grid_quantity(U256::zero()),
            Err(ErrorCode::InvalidGridParameter)
        );
        assert_eq!(
            serde_json::to_value(grid_params::set_grid_step(U256::from(3u64)).unwrap()).unwrap(),
            json!({"functionName": "setGridStep", "args": ["0x3"]})
        );
    }

    #[test]
    fn test_approve() {
        let pool = weth_usdc_pool();
        let spender = H160::from_low_u64_be(0x100);
        let call = approve::handler(&pool.token1, spender, 1000.0).unwrap();
        assert_eq!(
            call,
            GridCall::Approve {
                token: pool.token1.address,
                spender,
                amount: U256::from(1_000_000_000u64),
            }
        );
        // approve targets the token contract, not the grid
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "address": "0x000000000000000000000000000000000000000b",
                "functionName": "approve",
                "args": ["0x0000000000000000000000000000000000000100", "0x3b9aca00"]
            })
        );
        assert_eq!(
            approve::handler(&pool.token1, spender, f64::NAN),
            Err(ErrorCode::Math(MathError::InvalidAmount))
        );
    }
}
