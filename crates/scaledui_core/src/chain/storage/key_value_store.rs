use scaledui_serialization::{Read, Write};

use crate::chain::ContractError;

/// Host persistent storage for a single contract instance.
pub trait KeyValueStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, ContractError>;

    fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<(), ContractError>;

    /// Reads and unpacks the record under `key`, failing if it is missing.
    fn get_record<T: Read>(&self, key: &[u8]) -> Result<T, ContractError> {
        let bytes = self.get(key)?.ok_or_else(|| {
            ContractError::StorageError(format!(
                "missing record under key {}",
                String::from_utf8_lossy(key)
            ))
        })?;
        T::unpack(&bytes).map_err(|e| {
            ContractError::MalformedRecord(format!(
                "stored record {} is corrupt: {}",
                String::from_utf8_lossy(key),
                e
            ))
        })
    }

    fn set_record<T: Write>(&mut self, key: &[u8], record: &T) -> Result<(), ContractError> {
        let bytes = record.pack()?;
        self.set(key, bytes)
    }
}
