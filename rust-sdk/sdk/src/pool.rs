//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use cpswap_core::{reserves_to_price, FeeRates, PoolReserves, TransferFee};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use solana_pubkey::Pubkey;

use crate::QuoteError;

/// A point-in-time view of a pool, as read from the chain or served by the indexer.
///
/// Amounts are strings on the wire so that javascript clients do not lose precision.
#[serde_as]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSnapshot {
    #[serde_as(as = "DisplayFromStr")]
    pub address: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub token_0_mint: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub token_1_mint: Pubkey,
    pub token_0_decimals: u8,
    pub token_1_decimals: u8,
    #[serde_as(as = "DisplayFromStr")]
    pub token_0_reserve: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub token_1_reserve: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub lp_supply: u64,
    pub trade_fee_rate_bps: u32,
    pub protocol_fee_rate_bps: u32,
    pub fund_fee_rate_bps: u32,
    #[serde(default)]
    pub token_0_transfer_fee_bps: u16,
    #[serde(default)]
    pub token_1_transfer_fee_bps: u16,
}

impl PoolSnapshot {
    pub fn fee_rates(&self) -> FeeRates {
        FeeRates::new(self.trade_fee_rate_bps, self.protocol_fee_rate_bps, self.fund_fee_rate_bps)
    }

    /// Reserves oriented from token 0 to token 1.
    pub fn reserves(&self) -> PoolReserves {
        PoolReserves {
            input_reserve: self.token_0_reserve,
            output_reserve: self.token_1_reserve,
            lp_supply: self.lp_supply,
            input_decimals: self.token_0_decimals,
            output_decimals: self.token_1_decimals,
        }
    }

    /// Whether `input_mint` is token 0 of the pool.
    pub fn is_input_token_0(&self, input_mint: &Pubkey) -> Result<bool, QuoteError> {
        if *input_mint == self.token_0_mint {
            Ok(true)
        } else if *input_mint == self.token_1_mint {
            Ok(false)
        } else {
            Err(QuoteError::UnknownMint {
                mint: *input_mint,
                pool: self.address,
            })
        }
    }

    /// Reserves oriented from `input_mint` to the other token of the pool.
    pub fn reserves_for_input(&self, input_mint: &Pubkey) -> Result<PoolReserves, QuoteError> {
        let reserves = self.reserves();
        if self.is_input_token_0(input_mint)? {
            Ok(reserves)
        } else {
            Ok(reserves.flipped())
        }
    }

    /// Transfer fees of the input and output mints for a swap selling `input_mint`.
    pub fn transfer_fees_for_input(&self, input_mint: &Pubkey) -> Result<(Option<TransferFee>, Option<TransferFee>), QuoteError> {
        let (fee_0, fee_1) = self.transfer_fees();
        if self.is_input_token_0(input_mint)? {
            Ok((fee_0, fee_1))
        } else {
            Ok((fee_1, fee_0))
        }
    }

    /// Transfer fees of token 0 and token 1, `None` for mints without the extension.
    pub fn transfer_fees(&self) -> (Option<TransferFee>, Option<TransferFee>) {
        let to_fee = |fee_bps: u16| (fee_bps > 0).then(|| TransferFee::new(fee_bps));
        (to_fee(self.token_0_transfer_fee_bps), to_fee(self.token_1_transfer_fee_bps))
    }

    /// Spot price of token 0 in token 1, for display.
    pub fn price(&self) -> Result<f64, QuoteError> {
        Ok(reserves_to_price(self.token_0_reserve, self.token_1_reserve, self.token_0_decimals, self.token_1_decimals)?)
    }
}

/// Orders two mints the way the program stores them in a pool.
pub fn order_mints(mint_1: Pubkey, mint_2: Pubkey) -> [Pubkey; 2] {
    if mint_1 < mint_2 {
        [mint_1, mint_2]
    } else {
        [mint_2, mint_1]
    }
}

/// Finds the pool of a token pair in a list of snapshots, in either mint order.
pub fn find_pool(pools: &[PoolSnapshot], mint_1: Pubkey, mint_2: Pubkey) -> Option<&PoolSnapshot> {
    let [token_0_mint, token_1_mint] = order_mints(mint_1, mint_2);
    pools
        .iter()
        .find(|pool| pool.token_0_mint == token_0_mint && pool.token_1_mint == token_1_mint)
}

/// Parses the pool list served by the indexer.
pub fn parse_pool_snapshots(json: &str) -> Result<Vec<PoolSnapshot>, QuoteError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::assert_relative_eq;

    pub(crate) const MINT_0: Pubkey = Pubkey::new_from_array([1; 32]);
    pub(crate) const MINT_1: Pubkey = Pubkey::new_from_array([2; 32]);
    pub(crate) const POOL: Pubkey = Pubkey::new_from_array([9; 32]);

    pub(crate) fn test_pool(token_0_reserve: u64, token_1_reserve: u64, lp_supply: u64) -> PoolSnapshot {
        PoolSnapshot {
            address: POOL,
            token_0_mint: MINT_0,
            token_1_mint: MINT_1,
            token_0_decimals: 6,
            token_1_decimals: 6,
            token_0_reserve,
            token_1_reserve,
            lp_supply,
            trade_fee_rate_bps: 0,
            protocol_fee_rate_bps: 0,
            fund_fee_rate_bps: 0,
            token_0_transfer_fee_bps: 0,
            token_1_transfer_fee_bps: 0,
        }
    }

    #[test]
    fn test_order_mints() {
        assert_eq!(order_mints(MINT_0, MINT_1), [MINT_0, MINT_1]);
        assert_eq!(order_mints(MINT_1, MINT_0), [MINT_0, MINT_1]);
    }

    #[test]
    fn test_orientation() {
        let pool = test_pool(1_000_000, 2_000_000, 1_000);
        assert!(pool.is_input_token_0(&MINT_0).unwrap());
        assert!(!pool.is_input_token_0(&MINT_1).unwrap());

        let reserves = pool.reserves_for_input(&MINT_1).unwrap();
        assert_eq!(reserves.input_reserve, 2_000_000);
        assert_eq!(reserves.output_reserve, 1_000_000);
        assert_eq!(reserves.lp_supply, 1_000);
    }

    #[test]
    fn test_unknown_mint() {
        let pool = test_pool(1_000_000, 2_000_000, 1_000);
        let result = pool.reserves_for_input(&Pubkey::new_from_array([3; 32]));
        assert!(matches!(result, Err(QuoteError::UnknownMint { pool, .. }) if pool == POOL));
    }

    #[test]
    fn test_transfer_fees_for_input() {
        let mut pool = test_pool(1_000_000, 2_000_000, 1_000);
        pool.token_1_transfer_fee_bps = 50;
        assert_eq!(pool.transfer_fees_for_input(&MINT_0).unwrap(), (None, Some(TransferFee::new(50))));
        assert_eq!(pool.transfer_fees_for_input(&MINT_1).unwrap(), (Some(TransferFee::new(50)), None));
    }

    #[test]
    fn test_find_pool() {
        let pools = [test_pool(1, 1, 1)];
        assert!(find_pool(&pools, MINT_1, MINT_0).is_some());
        assert!(find_pool(&pools, MINT_0, Pubkey::new_from_array([3; 32])).is_none());
    }

    #[test]
    fn test_price() {
        let pool = test_pool(1_000_000, 2_000_000, 1_000);
        assert_relative_eq!(pool.price().unwrap(), 2.0);
        assert!(matches!(test_pool(0, 0, 0).price(), Err(QuoteError::Core(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let pool = test_pool(1_000_000, 2_000_000, 1_000);
        let json = serde_json::to_string(&[pool]).unwrap();
        assert!(json.contains("\"token0Reserve\":\"1000000\""));
        assert!(json.contains(&format!("\"token0Mint\":\"{}\"", MINT_0)));
        assert_eq!(parse_pool_snapshots(&json).unwrap(), vec![pool]);
    }

    #[test]
    fn test_parse_without_transfer_fees() {
        let json = format!(
            r#"[{{"address":"{}","token0Mint":"{}","token1Mint":"{}","token0Decimals":9,"token1Decimals":6,
            "token0Reserve":"5000","token1Reserve":"7000","lpSupply":"100","tradeFeeRateBps":25,
            "protocolFeeRateBps":5,"fundFeeRateBps":2}}]"#,
            POOL, MINT_0, MINT_1
        );
        let pools = parse_pool_snapshots(&json).unwrap();
        assert_eq!(pools[0].token_0_reserve, 5000);
        assert_eq!(pools[0].fee_rates(), FeeRates::new(25, 5, 2));
        assert_eq!(pools[0].transfer_fees(), (None, None));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(parse_pool_snapshots("[{]"), Err(QuoteError::Json(_))));
    }
}
