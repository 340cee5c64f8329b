use soroban_sdk::{BytesN, String};

use crate::LedgerError;

/// Longest accepted content locator, in bytes.
pub const MAX_DATA_URI_LEN: u32 = 256;

/// Rejects the all-zero hash.
pub fn validate_data_hash(data_hash: &BytesN<32>) -> Result<(), LedgerError> {
    if data_hash.to_array() == [0u8; 32] {
        return Err(LedgerError::InvalidArgument);
    }
    Ok(())
}

/// Rejects empty or oversized content locators.
pub fn validate_data_uri(data_uri: &String) -> Result<(), LedgerError> {
    let len = data_uri.len();
    if len == 0 || len > MAX_DATA_URI_LEN {
        return Err(LedgerError::InvalidArgument);
    }
    Ok(())
}
