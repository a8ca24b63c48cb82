//! Client-side logic of the grid console.
//!
//! Builds on `grid_math` to plan grid deployments, turn grid positions into
//! display rows and validate the arguments of every grid contract call. Chain
//! reads, wallet signing and submission stay with the caller.

pub mod activity;
pub mod config;
pub mod errors;
pub mod grid_deployment;
pub mod instructions;
pub mod position_manager;
pub mod types;

#[cfg(test)]
mod unit_test;

pub use activity::{group_activity_logs, ActivityKind, GridActivity, GridActivityLog};
pub use config::{ConsoleConfig, DeploymentContracts};
pub use errors::{ErrorCode, Result};
pub use grid_deployment::{
    plan_grid_deployment, GridDeployedLog, GridDeployment, GridDeploymentPlan,
    GridDeploymentRequest,
};
pub use instructions::{AbiArg, DistributionType, GridCall, GridType, RebalanceArgs};
pub use position_manager::{build_positions, in_range_position_index};
pub use types::{
    GridPosition, GridState, PoolInfo, PoolMetadata, Position, PositionFees, TokenMetadata,
};
