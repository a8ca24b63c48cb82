use crate::errors::{ErrorCode, Result};
use crate::types::TokenMetadata;
use grid_math::constants::MAX_DECIMALS;
use grid_math::ConversionConfig;
use primitive_types::H160;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use tracing::info;

/// Contract addresses the console talks to on one chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentContracts {
    /// Factory that deploys grid position managers
    pub grid_manager: H160,
    pub uniswap_v3_position_manager: H160,
    pub uniswap_v3_factory: H160,
    /// Subgraph indexing `GridDeployed` events, when one exists
    #[serde(default)]
    pub grid_manager_subgraph_id: Option<String>,
}

/// A trusted token as written in the config file.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedTokenEntry {
    address: H160,
    symbol: String,
    /// Falls back to `conversion.defaultDecimals` when omitted
    #[serde(default)]
    decimals: Option<u8>,
}

/// The config file as written, before token decimals are resolved.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsoleConfigFile {
    conversion: ConversionConfig,
    trusted_tokens: BTreeMap<u64, Vec<TrustedTokenEntry>>,
    deployment_contracts: BTreeMap<u64, DeploymentContracts>,
}

impl From<ConsoleConfigFile> for ConsoleConfig {
    fn from(file: ConsoleConfigFile) -> Self {
        let conversion = file.conversion;
        let trusted_tokens = file
            .trusted_tokens
            .into_iter()
            .map(|(chain_id, entries)| {
                let tokens = entries
                    .into_iter()
                    .map(|entry| TokenMetadata {
                        address: entry.address,
                        symbol: entry.symbol,
                        decimals: conversion.decimals_or_default(entry.decimals),
                    })
                    .collect();
                (chain_id, tokens)
            })
            .collect();
        Self {
            conversion,
            trusted_tokens,
            deployment_contracts: file.deployment_contracts,
        }
    }
}

/// Console configuration, loaded once from JSON.
///
/// A trusted token without `decimals` gets `conversion.defaultDecimals`.
///
/// ```json
/// {
///   "conversion": { "defaultDecimals": 18 },
///   "trustedTokens": { "8453": [{ "address": "0x…", "symbol": "WETH", "decimals": 18 }] },
///   "deploymentContracts": { "8453": { "gridManager": "0x…", … } }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConsoleConfigFile", rename_all = "camelCase")]
pub struct ConsoleConfig {
    pub conversion: ConversionConfig,
    /// Tokens offered in the pair selector, per chain id
    pub trusted_tokens: BTreeMap<u64, Vec<TokenMetadata>>,
    pub deployment_contracts: BTreeMap<u64, DeploymentContracts>,
}

impl ConsoleConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ConsoleConfig = serde_json::from_str(json)?;
        config.validate()?;
        config.log_loaded();
        Ok(config)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: ConsoleConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        config.log_loaded();
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.conversion.default_decimals > MAX_DECIMALS {
            return Err(ErrorCode::InvalidConfig(format!(
                "default decimals {} exceed {}",
                self.conversion.default_decimals, MAX_DECIMALS
            )));
        }
        for (chain_id, tokens) in &self.trusted_tokens {
            if let Some(token) = tokens.iter().find(|token| token.decimals > MAX_DECIMALS) {
                return Err(ErrorCode::InvalidConfig(format!(
                    "token {} on chain {} has {} decimals",
                    token.symbol, chain_id, token.decimals
                )));
            }
        }
        Ok(())
    }

    fn log_loaded(&self) {
        info!(
            chains = self.deployment_contracts.len(),
            trusted_tokens = self.trusted_tokens.values().map(Vec::len).sum::<usize>(),
            default_decimals = self.conversion.default_decimals,
            "loaded console config"
        );
    }

    /// Contract addresses for `chain_id`.
    pub fn deployment_contracts(&self, chain_id: u64) -> Result<&DeploymentContracts> {
        self.deployment_contracts
            .get(&chain_id)
            .ok_or(ErrorCode::UnknownChain(chain_id))
    }

    /// Trusted tokens for `chain_id`, empty for unknown chains.
    pub fn trusted_tokens(&self, chain_id: u64) -> &[TokenMetadata] {
        self.trusted_tokens
            .get(&chain_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn find_trusted_token(&self, chain_id: u64, address: &H160) -> Option<&TokenMetadata> {
        self.trusted_tokens(chain_id)
            .iter()
            .find(|token| token.address == *address)
    }
}
