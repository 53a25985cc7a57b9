//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use cpswap_core::CoreError;
use solana_pubkey::Pubkey;

#[derive(thiserror::Error, Debug)]
pub enum QuoteError {
    #[error("{0}")]
    Core(CoreError),
    #[error("Mint {mint} is not part of pool {pool}")]
    UnknownMint { mint: Pubkey, pool: Pubkey },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<CoreError> for QuoteError {
    fn from(error: CoreError) -> Self {
        QuoteError::Core(error)
    }
}

impl QuoteError {
    /// The core error code, if the failure came from the quote math.
    pub fn core_error(&self) -> Option<CoreError> {
        match self {
            QuoteError::Core(error) => Some(*error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpswap_core::INVALID_POOL_STATE;

    #[test]
    fn test_core_error_message() {
        let error = QuoteError::from(INVALID_POOL_STATE);
        assert_eq!(error.to_string(), "Invalid pool state");
        assert_eq!(error.core_error(), Some(INVALID_POOL_STATE));
    }

    #[test]
    fn test_unknown_mint_message() {
        let error = QuoteError::UnknownMint {
            mint: Pubkey::new_from_array([1; 32]),
            pool: Pubkey::new_from_array([0; 32]),
        };
        assert!(error.to_string().starts_with("Mint "));
        assert_eq!(error.core_error(), None);
    }
}
