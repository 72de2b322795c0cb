use core::str;

use serde::{Deserialize, Serialize};

use crate::chain::{
    ContractError, address::Address, multiplier::RationalMultiplier, utils::scaled_assert,
};

/// Deployment parameters, read from a JSON document.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ContractConfig {
    admin: Address,
    #[serde(default)]
    initial_multiplier: RationalMultiplier,
}

impl ContractConfig {
    pub fn new(admin: Address, initial_multiplier: RationalMultiplier) -> Self {
        Self {
            admin,
            initial_multiplier,
        }
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, ContractError> {
        let config = str::from_utf8(bytes)
            .map_err(|_| ContractError::ConfigError("invalid UTF-8".to_string()))?;
        let config: ContractConfig = serde_json::from_str(config)
            .map_err(|e| ContractError::ConfigError(format!("{}", e)))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ContractError> {
        let multiplier = &self.initial_multiplier;
        scaled_assert(
            multiplier.validate().is_ok(),
            ContractError::ConfigError(format!(
                "initial multiplier {} must have non-zero terms",
                multiplier
            )),
        )?;
        scaled_assert(
            multiplier.numerator.fits() && multiplier.denominator.fits(),
            ContractError::ConfigError(format!(
                "initial multiplier {} exceeds the encodable range",
                multiplier
            )),
        )
    }

    pub fn admin(&self) -> &Address {
        &self.admin
    }

    pub fn initial_multiplier(&self) -> &RationalMultiplier {
        &self.initial_multiplier
    }
}
