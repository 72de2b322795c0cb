use std::{fmt, str::FromStr};

use scaledui_proc_macros::{NumBits, Read, Write};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ACCOUNT_HASH_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAddressError {
    #[error("address must be <workchain>:<hex account hash>")]
    MissingSeparator,
    #[error("invalid workchain id: {0}")]
    BadWorkchain(String),
    #[error("invalid account hash: {0}")]
    BadHash(String),
}

/// Identity of a message sender: workchain id plus 256-bit account hash.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Read, Write, NumBits,
)]
pub struct Address {
    workchain: i8,
    hash: [u8; ACCOUNT_HASH_LEN],
}

impl Address {
    pub const fn new(workchain: i8, hash: [u8; ACCOUNT_HASH_LEN]) -> Self {
        Self { workchain, hash }
    }

    pub const fn workchain(&self) -> i8 {
        self.workchain
    }

    pub const fn hash(&self) -> &[u8; ACCOUNT_HASH_LEN] {
        &self.hash
    }
}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (workchain, hash) = s
            .split_once(':')
            .ok_or(ParseAddressError::MissingSeparator)?;
        let workchain = workchain
            .parse::<i8>()
            .map_err(|_| ParseAddressError::BadWorkchain(workchain.to_string()))?;
        let mut bytes = [0u8; ACCOUNT_HASH_LEN];
        hex::decode_to_slice(hash, &mut bytes)
            .map_err(|e| ParseAddressError::BadHash(e.to_string()))?;
        Ok(Self::new(workchain, bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.workchain, hex::encode(self.hash))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use scaledui_serialization::{NumBits, Read, Write};

    use super::*;

    const DEPLOYER: &str = "0:83dfd552e63729b472fcbcc8c45ebcc6691702558b68ec7527e1ba403a0f31a8";

    #[test]
    fn test_address_from_str() {
        let address = Address::from_str(DEPLOYER).unwrap();
        assert_eq!(address.workchain(), 0);
        assert_eq!(address.hash()[0], 0x83);
        assert_eq!(address.hash()[31], 0xa8);
        assert_eq!(address.to_string(), DEPLOYER);
    }

    #[test]
    fn test_masterchain_address() {
        let text = format!("-1:{}", "ff".repeat(32));
        let address = Address::from_str(&text).unwrap();
        assert_eq!(address.workchain(), -1);
        assert_eq!(address.to_string(), text);
    }

    #[test]
    fn test_address_parse_errors() {
        assert_eq!(
            Address::from_str("deadbeef"),
            Err(ParseAddressError::MissingSeparator)
        );
        assert!(matches!(
            Address::from_str("x:00"),
            Err(ParseAddressError::BadWorkchain(_))
        ));
        assert!(matches!(
            Address::from_str("0:abcd"),
            Err(ParseAddressError::BadHash(_))
        ));
    }

    #[test]
    fn test_address_wire_size() {
        let address = Address::from_str(DEPLOYER).unwrap();
        assert_eq!(address.num_bits(), 8 + 256);
        let packed = address.pack().unwrap();
        assert_eq!(Address::unpack(&packed).unwrap(), address);
    }

    #[test]
    fn test_address_serde() {
        let address = Address::from_str(DEPLOYER).unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", DEPLOYER));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }
}
