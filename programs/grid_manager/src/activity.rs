/// Grid Activity Module
///
/// Turns the `GridDeposit`, `Withdraw` and `Compound` events a grid emits into
/// the rows of its activity history. Events mined in the same block collapse
/// into one row with their amounts summed.
use crate::errors::Result;
use crate::types::PoolInfo;
use grid_math::format_units;
use primitive_types::{H160, U256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Event a grid emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    GridDeposit,
    Withdraw,
    Compound,
}

/// One `Event(address indexed owner, uint256 token0Amount, uint256 token1Amount)` log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridActivityLog {
    pub event: ActivityKind,
    pub owner: H160,
    pub token0_amount: U256,
    pub token1_amount: U256,
    pub block_number: u64,
    /// Missing when the log came straight from the node
    #[serde(default)]
    pub block_timestamp: Option<u64>,
}

/// A row of the activity history: every log of one block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridActivity {
    pub block_number: u64,
    /// Event and owner of the first log in the block
    pub event: ActivityKind,
    pub owner: H160,
    pub token0_amount: U256,
    pub token1_amount: U256,
    pub block_timestamp: Option<u64>,
}

impl GridActivity {
    /// Both summed amounts as exact decimal strings
    pub fn amounts_display(&self, pool: &PoolInfo) -> Result<(String, String)> {
        Ok((
            format_units(self.token0_amount, pool.token0.decimals)?,
            format_units(self.token1_amount, pool.token1.decimals)?,
        ))
    }

    /// Owner shortened to `0x1234...abcd`
    pub fn owner_short(&self) -> String {
        let full = format!("{:#x}", self.owner);
        format!("{}...{}", &full[..6], &full[full.len() - 4..])
    }
}

/// Groups activity logs by block, newest block first
///
/// Amounts within a block are summed, saturating at `U256::MAX`. The row keeps
/// the event and owner of the block's first log and the first timestamp any of
/// its logs carries.
pub fn group_activity_logs(logs: Vec<GridActivityLog>) -> Vec<GridActivity> {
    let mut by_block: BTreeMap<u64, GridActivity> = BTreeMap::new();
    for log in logs {
        let row = by_block
            .entry(log.block_number)
            .or_insert_with(|| GridActivity {
                block_number: log.block_number,
                event: log.event,
                owner: log.owner,
                token0_amount: U256::zero(),
                token1_amount: U256::zero(),
                block_timestamp: None,
            });
        row.token0_amount = row.token0_amount.saturating_add(log.token0_amount);
        row.token1_amount = row.token1_amount.saturating_add(log.token1_amount);
        row.block_timestamp = row.block_timestamp.or(log.block_timestamp);
    }
    by_block.into_values().rev().collect()
}
