/// Grid Deployment Module
///
/// Plans new grids from the deployment form and organizes the list of grids an
/// owner has already deployed.
///
/// A grid splits a price range into `grid_quantity` positions, each spanning
/// `grid_step` tick spacings. The form collects prices in the display token, so
/// planning converts them to usable ticks first.
use crate::config::DeploymentContracts;
use crate::errors::{ErrorCode, Result};
use crate::instructions::GridCall;
use crate::types::{PoolInfo, PoolMetadata};
use grid_math::{format_units, price_to_tick, tick_to_price, MathError};
use primitive_types::{H160, U256};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Percentages offered as one-click price bands around the current price
pub const PRICE_BAND_PERCENTAGES: [f64; 4] = [1.0, 3.0, 5.0, 10.0];

/// Grids deployed within this many seconds are flagged as new
pub const NEW_GRID_WINDOW_SECS: u64 = 86_400;

/// Values of the deployment form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDeploymentRequest {
    /// Number of positions in the grid
    pub grid_size: u32,
    /// Lower bound as typed by the user
    pub price_lower: String,
    /// Upper bound as typed by the user
    pub price_upper: String,
    /// Whether the prices are token0's price in token1
    pub display_in_token0: bool,
}

/// A validated grid, ready to deploy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDeploymentPlan {
    pub lower_tick: i32,
    pub upper_tick: i32,
    pub grid_quantity: u32,
    pub grid_step: u32,
    pub call: GridCall,
}

/// Checks the two tokens picked in the pair selector
///
/// # Errors
/// * `InvalidTokenPair` - If a token is missing or zero, or both are the same
pub fn validate_token_pair(token_a: Option<H160>, token_b: Option<H160>) -> Result<(H160, H160)> {
    match (token_a, token_b) {
        (Some(a), Some(b)) if !a.is_zero() && !b.is_zero() && a != b => Ok((a, b)),
        _ => Err(ErrorCode::InvalidTokenPair),
    }
}

/// Checks the address returned by the factory's `getPool`
///
/// # Errors
/// * `PoolNotFound` - If the factory returned the zero address
pub fn validate_pool_address(pool: H160) -> Result<H160> {
    if pool.is_zero() {
        return Err(ErrorCode::PoolNotFound);
    }
    Ok(pool)
}

fn parse_price(input: &str) -> Result<f64> {
    let price: f64 = input
        .trim()
        .parse()
        .map_err(|_| ErrorCode::Math(MathError::InvalidPrice))?;
    if !price.is_finite() || price <= 0.0 {
        return Err(MathError::InvalidPrice.into());
    }
    Ok(price)
}

/// Plans a grid deployment from the form values
///
/// Converts both prices to usable ticks in the pool's orientation, then divides
/// the number of whole tick spacings between them by the grid size. Each
/// position must span at least one spacing.
///
/// # Arguments
/// * `request` - The form values
/// * `pool` - The selected pool
/// * `tick_spacing` - The pool's `tickSpacing()`
/// * `contracts` - Deployment addresses for the connected chain
///
/// # Returns
/// * `Result<GridDeploymentPlan>` - Ticks, grid shape and the deploy call
///
/// # Errors
/// * `MissingPriceRange` - If either price is blank
/// * `InvalidGridSize` - If `grid_size` is zero
/// * `InvalidPriceOrder` - If the lower price is not below the upper price
/// * `PriceRangeTooSmall` - If the grid step would be below one spacing
pub fn plan_grid_deployment(
    request: &GridDeploymentRequest,
    pool: &PoolInfo,
    tick_spacing: i32,
    contracts: &DeploymentContracts,
) -> Result<GridDeploymentPlan> {
    if request.price_lower.trim().is_empty() || request.price_upper.trim().is_empty() {
        return Err(ErrorCode::MissingPriceRange);
    }
    if request.grid_size == 0 {
        return Err(ErrorCode::InvalidGridSize);
    }
    let price_lower = parse_price(&request.price_lower)?;
    let price_upper = parse_price(&request.price_upper)?;
    if price_lower >= price_upper {
        return Err(ErrorCode::InvalidPriceOrder);
    }

    let (base, quote) = if request.display_in_token0 {
        (pool.token0.token(), pool.token1.token())
    } else {
        (pool.token1.token(), pool.token0.token())
    };
    let tick_a = price_to_tick(&base, &quote, price_lower, tick_spacing)?;
    let tick_b = price_to_tick(&base, &quote, price_upper, tick_spacing)?;
    // token1-quoted prices fall as the tick rises
    let (lower_tick, upper_tick) = (tick_a.min(tick_b), tick_a.max(tick_b));

    let spacing_steps = i64::from(upper_tick - lower_tick) / i64::from(tick_spacing);
    let grid_step = spacing_steps / i64::from(request.grid_size);
    if grid_step < 1 {
        return Err(ErrorCode::PriceRangeTooSmall);
    }
    // spacing_steps is below 2 * MAX_TICK
    let grid_step = grid_step as u32;

    debug!(
        lower_tick,
        upper_tick,
        grid_quantity = request.grid_size,
        grid_step,
        "planned grid deployment"
    );
    Ok(GridDeploymentPlan {
        lower_tick,
        upper_tick,
        grid_quantity: request.grid_size,
        grid_step,
        call: GridCall::DeployGrid {
            pool: pool.address,
            position_manager: contracts.uniswap_v3_position_manager,
            grid_quantity: U256::from(request.grid_size),
            grid_step: U256::from(grid_step),
        },
    })
}

fn to_fixed(value: f64, decimals: u8) -> String {
    format!("{:.*}", usize::from(decimals), value)
}

/// Lower and upper form values at ±`percentage` around the current price
///
/// Rendered with `decimals` fractional digits, the display token's decimals.
///
/// # Errors
/// * `InvalidPrice` - If the price is not positive or the percentage is not in (0, 100)
pub fn price_band(current_price: f64, percentage: f64, decimals: u8) -> Result<(String, String)> {
    if !current_price.is_finite() || current_price <= 0.0 {
        return Err(MathError::InvalidPrice.into());
    }
    if !(percentage > 0.0 && percentage < 100.0) {
        return Err(MathError::InvalidPrice.into());
    }
    let delta = current_price * percentage / 100.0;
    Ok((
        to_fixed(current_price - delta, decimals),
        to_fixed(current_price + delta, decimals),
    ))
}

/// The price pre-filled in both bounds when a pool is selected
///
/// Taken at the pool's current tick and rendered with the display token's decimals.
pub fn starting_price(pool: &PoolMetadata, display_in_token0: bool) -> Result<String> {
    let token0 = &pool.pool.token0;
    let token1 = &pool.pool.token1;
    let price =
        tick_to_price(pool.tick, token0.decimals, token1.decimals)?.select(display_in_token0);
    let decimals = if display_in_token0 {
        token0.decimals
    } else {
        token1.decimals
    };
    Ok(to_fixed(price, decimals))
}

/// A `GridDeployed(owner, gridPositionManager, pool)` event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDeployedLog {
    pub owner: H160,
    pub grid_position_manager: H160,
    pub pool: H160,
    pub block_number: u64,
    /// Missing when the log came straight from the node
    #[serde(default)]
    pub block_timestamp: Option<u64>,
}

/// Merges deployment events from the node and from the indexer
///
/// The indexer can lag behind the chain, so both sources are read. Events are
/// keyed by grid address with indexer entries taking precedence, missing
/// timestamps fall back to `fallback_timestamp`, and the result is newest first.
pub fn merge_deployment_logs(
    chain_logs: Vec<GridDeployedLog>,
    indexed_logs: Vec<GridDeployedLog>,
    fallback_timestamp: u64,
) -> Vec<GridDeployedLog> {
    let mut by_grid: HashMap<H160, GridDeployedLog> = HashMap::new();
    for log in chain_logs.into_iter().chain(indexed_logs) {
        by_grid.insert(log.grid_position_manager, log);
    }

    let mut logs: Vec<GridDeployedLog> = by_grid
        .into_values()
        .map(|mut log| {
            log.block_timestamp = log.block_timestamp.or(Some(fallback_timestamp));
            log
        })
        .collect();
    logs.sort_by(|a, b| {
        b.block_number
            .cmp(&a.block_number)
            .then_with(|| a.grid_position_manager.cmp(&b.grid_position_manager))
    });
    logs
}

/// A deployed grid as listed on the overview page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDeployment {
    pub grid: H160,
    pub pool: PoolInfo,
    pub token0_liquidity: U256,
    pub token1_liquidity: U256,
    pub grid_step: U256,
    pub grid_quantity: U256,
    pub is_in_range: bool,
    pub block_timestamp: u64,
}

impl GridDeployment {
    /// A grid is open while it holds any liquidity
    pub fn is_open(&self) -> bool {
        !self.token0_liquidity.is_zero() || !self.token1_liquidity.is_zero()
    }

    pub fn is_new(&self, now: u64) -> bool {
        self.block_timestamp.saturating_add(NEW_GRID_WINDOW_SECS) > now
    }

    /// Both balances as exact decimal strings
    pub fn liquidity_display(&self) -> Result<(String, String)> {
        Ok((
            format_units(self.token0_liquidity, self.pool.token0.decimals)?,
            format_units(self.token1_liquidity, self.pool.token1.decimals)?,
        ))
    }
}

/// Splits deployments into open and exited grids, keeping their order
pub fn split_open_and_exited(
    deployments: Vec<GridDeployment>,
) -> (Vec<GridDeployment>, Vec<GridDeployment>) {
    deployments.into_iter().partition(GridDeployment::is_open)
}
