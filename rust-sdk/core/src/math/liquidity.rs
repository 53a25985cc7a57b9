//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{integer_sqrt, try_mul_div, CoreError, INSUFFICIENT_LIQUIDITY, INVALID_POOL_STATE, LOCKED_LP_AMOUNT};

#[cfg(feature = "wasm")]
use cpswap_macros::wasm_expose;

/// Calculates the LP amount minted by the first deposit into an empty pool.
///
/// The geometric mean `floor(sqrt(token_0_amount * token_1_amount))`, so the result does not
/// depend on the order of the tokens.
///
/// # Parameters
/// - `token_0_amount` - The amount of token 0 deposited
/// - `token_1_amount` - The amount of token 1 deposited
///
/// # Returns
/// - The LP amount, or `INSUFFICIENT_LIQUIDITY` if it is zero
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn try_get_bootstrap_lp_amount(token_0_amount: u64, token_1_amount: u64) -> Result<u64, CoreError> {
    let product = token_0_amount as u128 * token_1_amount as u128;
    // sqrt of a product of two u64 always fits a u64
    let lp_amount = integer_sqrt(product) as u64;
    if lp_amount == 0 {
        return Err(INSUFFICIENT_LIQUIDITY);
    }
    Ok(lp_amount)
}

/// Calculates the LP amount the creator of a pool receives.
///
/// The program locks `LOCKED_LP_AMOUNT` of the bootstrap liquidity forever.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn try_get_creator_lp_amount(bootstrap_lp_amount: u64) -> Result<u64, CoreError> {
    bootstrap_lp_amount.checked_sub(LOCKED_LP_AMOUNT).ok_or(INSUFFICIENT_LIQUIDITY)
}

/// Calculates the LP amount minted by a deposit into a pool that already has liquidity.
///
/// The token that is scarcer relative to the pool ratio is binding. The sides are compared by
/// cross-multiplication so that no ratio is ever rounded.
///
/// # Parameters
/// - `token_0_amount`, `token_1_amount` - The amounts offered
/// - `token_0_reserve`, `token_1_reserve` - The vault balances
/// - `lp_supply` - The current LP mint supply
///
/// # Returns
/// - The LP amount, which can be zero for dust deposits
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn try_get_proportional_lp_amount(
    token_0_amount: u64,
    token_1_amount: u64,
    token_0_reserve: u64,
    token_1_reserve: u64,
    lp_supply: u64,
) -> Result<u64, CoreError> {
    if token_0_reserve == 0 || token_1_reserve == 0 {
        return Err(INVALID_POOL_STATE);
    }

    let scaled_0 = token_0_amount as u128 * token_1_reserve as u128;
    let scaled_1 = token_1_amount as u128 * token_0_reserve as u128;
    if scaled_0 <= scaled_1 {
        try_mul_div(token_0_amount, lp_supply as u128, token_0_reserve as u128, false)
    } else {
        try_mul_div(token_1_amount, lp_supply as u128, token_1_reserve as u128, false)
    }
}

/// Converts an LP amount into the pool tokens it represents.
///
/// # Parameters
/// - `lp_amount` - The LP amount
/// - `lp_supply` - The current LP mint supply
/// - `token_0_reserve`, `token_1_reserve` - The vault balances
/// - `round_up` - Round up when the user pays (deposit), down when the user receives (withdraw)
///
/// # Returns
/// - The token 0 and token 1 amounts
pub fn try_get_lp_token_amounts(
    lp_amount: u64,
    lp_supply: u64,
    token_0_reserve: u64,
    token_1_reserve: u64,
    round_up: bool,
) -> Result<(u64, u64), CoreError> {
    if lp_supply == 0 {
        return Err(INVALID_POOL_STATE);
    }
    let token_0_amount = try_mul_div(token_0_reserve, lp_amount as u128, lp_supply as u128, round_up)?;
    let token_1_amount = try_mul_div(token_1_reserve, lp_amount as u128, lp_supply as u128, round_up)?;
    Ok((token_0_amount, token_1_amount))
}

/// Calculates the token 1 amount that pairs with `token_0_amount` at the current pool ratio.
///
/// Rounded up, so depositing the pair never leaves token 0 binding on a rounding unit.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn try_get_paired_deposit_amount(token_0_amount: u64, token_0_reserve: u64, token_1_reserve: u64) -> Result<u64, CoreError> {
    if token_0_reserve == 0 || token_1_reserve == 0 {
        return Err(INVALID_POOL_STATE);
    }
    try_mul_div(token_0_amount, token_1_reserve as u128, token_0_reserve as u128, true)
}

#[cfg(all(test, not(feature = "wasm")))]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_lp_amount() {
        assert_eq!(try_get_bootstrap_lp_amount(100, 400), Ok(200));
        assert_eq!(try_get_bootstrap_lp_amount(2, 3), Ok(2));
        assert_eq!(try_get_bootstrap_lp_amount(u64::MAX, u64::MAX), Ok(u64::MAX));
        assert_eq!(try_get_bootstrap_lp_amount(0, 400), Err(INSUFFICIENT_LIQUIDITY));
        assert_eq!(try_get_bootstrap_lp_amount(100, 0), Err(INSUFFICIENT_LIQUIDITY));
    }

    #[test]
    fn test_bootstrap_lp_amount_is_symmetric() {
        let amounts = [1u64, 7, 100, 400, 65_535, 1_000_000_007, u64::MAX / 5];
        for a in amounts {
            for b in amounts {
                assert_eq!(try_get_bootstrap_lp_amount(a, b), try_get_bootstrap_lp_amount(b, a));
            }
        }
    }

    #[test]
    fn test_creator_lp_amount() {
        assert_eq!(try_get_creator_lp_amount(200), Ok(100));
        assert_eq!(try_get_creator_lp_amount(100), Ok(0));
        assert_eq!(try_get_creator_lp_amount(99), Err(INSUFFICIENT_LIQUIDITY));
    }

    #[test]
    fn test_proportional_lp_amount() {
        // pool 100:400, supply 200
        assert_eq!(try_get_proportional_lp_amount(10, 40, 100, 400, 200), Ok(20));
        // token 0 binding
        assert_eq!(try_get_proportional_lp_amount(10, 1000, 100, 400, 200), Ok(20));
        // token 1 binding
        assert_eq!(try_get_proportional_lp_amount(1000, 40, 100, 400, 200), Ok(20));
        assert_eq!(try_get_proportional_lp_amount(0, 40, 100, 400, 200), Ok(0));
        assert_eq!(try_get_proportional_lp_amount(1, 1, 100, 400, 200), Ok(0));
    }

    #[test]
    fn test_proportional_lp_amount_empty_reserve() {
        assert_eq!(try_get_proportional_lp_amount(10, 40, 0, 400, 200), Err(INVALID_POOL_STATE));
        assert_eq!(try_get_proportional_lp_amount(10, 40, 100, 0, 200), Err(INVALID_POOL_STATE));
    }

    #[test]
    fn test_lp_token_amounts() {
        assert_eq!(try_get_lp_token_amounts(50, 200, 100, 400, false), Ok((25, 100)));
        assert_eq!(try_get_lp_token_amounts(1, 3, 100, 400, false), Ok((33, 133)));
        assert_eq!(try_get_lp_token_amounts(1, 3, 100, 400, true), Ok((34, 134)));
        assert_eq!(try_get_lp_token_amounts(1, 0, 100, 400, false), Err(INVALID_POOL_STATE));
    }

    #[test]
    fn test_paired_deposit_amount() {
        assert_eq!(try_get_paired_deposit_amount(10, 100, 400), Ok(40));
        assert_eq!(try_get_paired_deposit_amount(1, 3, 10), Ok(4));
        assert_eq!(try_get_paired_deposit_amount(0, 3, 10), Ok(0));
        assert_eq!(try_get_paired_deposit_amount(1, 0, 10), Err(INVALID_POOL_STATE));
    }
}
