/// Contract call builders for the grid position manager
///
/// Each module validates console input and produces the arguments of one
/// contract function. Nothing here signs or submits; the returned [`GridCall`]
/// is handed to the wallet layer as `{ functionName, args }` with positional args.
pub mod add_liquidity;
pub mod approve;
pub mod compound;
pub mod deposit;
pub mod grid_params;
pub mod min_fees;
pub mod sweep;

use crate::errors::{ErrorCode, Result};
use primitive_types::{H160, U256};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Highest slippage the console accepts, in percent
pub const MAX_SLIPPAGE_PERCENT: f64 = 5.0;

/// Side of the market newly placed liquidity favours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum GridType {
    Neutral = 0,
    Buy = 1,
    Sell = 2,
}

impl From<GridType> for u8 {
    fn from(grid_type: GridType) -> Self {
        grid_type as u8
    }
}

impl TryFrom<u8> for GridType {
    type Error = ErrorCode;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(GridType::Neutral),
            1 => Ok(GridType::Buy),
            2 => Ok(GridType::Sell),
            other => Err(ErrorCode::InvalidGridType(other)),
        }
    }
}

/// How liquidity is spread across the grid's positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DistributionType {
    Flat = 0,
    Linear = 1,
    ReverseLinear = 2,
    Sigmoid = 3,
    Fibonacci = 4,
    Logarithmic = 5,
}

impl From<DistributionType> for u8 {
    fn from(distribution_type: DistributionType) -> Self {
        distribution_type as u8
    }
}

impl TryFrom<u8> for DistributionType {
    type Error = ErrorCode;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(DistributionType::Flat),
            1 => Ok(DistributionType::Linear),
            2 => Ok(DistributionType::ReverseLinear),
            3 => Ok(DistributionType::Sigmoid),
            4 => Ok(DistributionType::Fibonacci),
            5 => Ok(DistributionType::Logarithmic),
            other => Err(ErrorCode::InvalidDistributionType(other)),
        }
    }
}

/// Converts a slippage percentage to the basis points the contract expects
///
/// # Errors
/// * `InvalidSlippage` - If the value is negative or not finite
/// * `SlippageTooHigh` - If the value exceeds 5%
pub fn slippage_to_bps(slippage_percent: f64) -> Result<u16> {
    if !slippage_percent.is_finite() || slippage_percent < 0.0 {
        return Err(ErrorCode::InvalidSlippage);
    }
    if slippage_percent > MAX_SLIPPAGE_PERCENT {
        return Err(ErrorCode::SlippageTooHigh);
    }
    // at most 500, so the cast is exact
    Ok((slippage_percent * 100.0).round() as u16)
}

/// Rebalancing options shared by deposit, compound and sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceArgs {
    pub slippage_bps: u16,
    pub grid_type: GridType,
    pub distribution_type: DistributionType,
}

impl RebalanceArgs {
    /// Validates the raw form values of a rebalancing form
    pub fn new(slippage_percent: f64, grid_type: u8, distribution_type: u8) -> Result<Self> {
        Ok(Self {
            slippage_bps: slippage_to_bps(slippage_percent)?,
            grid_type: GridType::try_from(grid_type)?,
            distribution_type: DistributionType::try_from(distribution_type)?,
        })
    }
}

/// One positional argument of a contract call.
///
/// Addresses and `uint256` values serialize as `0x` hex strings, small integers
/// as JSON numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AbiArg {
    Address(H160),
    Uint256(U256),
    Uint16(u16),
}

/// A ready-to-send contract call.
///
/// Serializes as `{ "functionName": …, "args": [...] }` with `args` in ABI order,
/// the shape a `writeContract` call takes. `Approve` also carries the token as
/// `"address"`, since it targets the token contract instead of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridCall {
    /// `GridManager.delployGridPositionManager(pool, positionManager, gridQuantity, gridStep)`
    DeployGrid {
        pool: H160,
        position_manager: H160,
        grid_quantity: U256,
        grid_step: U256,
    },
    Deposit {
        token0_amount: U256,
        token1_amount: U256,
        rebalance: RebalanceArgs,
    },
    Withdraw,
    WithdrawAvailable,
    Compound(RebalanceArgs),
    Sweep(RebalanceArgs),
    SetMinFees {
        token0_min_fees: U256,
        token1_min_fees: U256,
    },
    SetGridQuantity(U256),
    SetGridStep(U256),
    AddLiquidityToPosition {
        token_id: U256,
        slippage_bps: u16,
        token0_amount: U256,
        token1_amount: U256,
    },
    /// ERC-20 `approve(spender, amount)` on `token`
    Approve {
        token: H160,
        spender: H160,
        amount: U256,
    },
}

impl RebalanceArgs {
    fn abi_args(&self) -> [AbiArg; 3] {
        [
            AbiArg::Uint16(self.slippage_bps),
            AbiArg::Uint16(u8::from(self.grid_type).into()),
            AbiArg::Uint16(u8::from(self.distribution_type).into()),
        ]
    }
}

impl GridCall {
    /// Name of the contract function this call invokes
    pub fn function_name(&self) -> &'static str {
        match self {
            GridCall::DeployGrid { .. } => "delployGridPositionManager",
            GridCall::Deposit { .. } => "deposit",
            GridCall::Withdraw => "withdraw",
            GridCall::WithdrawAvailable => "withdrawAvailable",
            GridCall::Compound(_) => "compound",
            GridCall::Sweep(_) => "sweep",
            GridCall::SetMinFees { .. } => "setMinFees",
            GridCall::SetGridQuantity(_) => "setGridQuantity",
            GridCall::SetGridStep(_) => "setGridStep",
            GridCall::AddLiquidityToPosition { .. } => "addLiquidityToPosition",
            GridCall::Approve { .. } => "approve",
        }
    }

    /// Arguments in the order the contract function declares them
    pub fn args(&self) -> Vec<AbiArg> {
        use AbiArg::{Address, Uint16, Uint256};

        match self {
            GridCall::DeployGrid {
                pool,
                position_manager,
                grid_quantity,
                grid_step,
            } => vec![
                Address(*pool),
                Address(*position_manager),
                Uint256(*grid_quantity),
                Uint256(*grid_step),
            ],
            GridCall::Deposit {
                token0_amount,
                token1_amount,
                rebalance,
            } => {
                let mut args = vec![Uint256(*token0_amount), Uint256(*token1_amount)];
                args.extend(rebalance.abi_args());
                args
            }
            GridCall::Withdraw | GridCall::WithdrawAvailable => Vec::new(),
            GridCall::Compound(rebalance) | GridCall::Sweep(rebalance) => {
                rebalance.abi_args().to_vec()
            }
            GridCall::SetMinFees {
                token0_min_fees,
                token1_min_fees,
            } => vec![Uint256(*token0_min_fees), Uint256(*token1_min_fees)],
            GridCall::SetGridQuantity(value) | GridCall::SetGridStep(value) => {
                vec![Uint256(*value)]
            }
            GridCall::AddLiquidityToPosition {
                token_id,
                slippage_bps,
                token0_amount,
                token1_amount,
            } => vec![
                Uint256(*token_id),
                Uint16(*slippage_bps),
                Uint256(*token0_amount),
                Uint256(*token1_amount),
            ],
            GridCall::Approve { spender, amount, .. } => {
                vec![Address(*spender), Uint256(*amount)]
            }
        }
    }
}

impl Serialize for GridCall {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut call = serializer.serialize_struct("GridCall", 3)?;
        if let GridCall::Approve { token, .. } = self {
            call.serialize_field("address", token)?;
        }
        call.serialize_field("functionName", self.function_name())?;
        call.serialize_field("args", &self.args())?;
        call.end()
    }
}

/// Builds a `withdraw` call, which closes every position and returns all funds
pub fn withdraw() -> GridCall {
    GridCall::Withdraw
}

/// Builds a `withdrawAvailable` call, which returns idle balances only
pub fn withdraw_available() -> GridCall {
    GridCall::WithdrawAvailable
}
