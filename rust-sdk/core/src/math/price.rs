//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{CoreError, AMOUNT_EXCEEDS_MAX_U64, INVALID_POOL_STATE};
use libm::{floor, pow};

#[cfg(feature = "wasm")]
use cpswap_macros::wasm_expose;

/// Convert a native token amount into a human-readable amount.
///
/// # Parameters
/// * `amount` - The amount in the smallest unit of the token
/// * `decimals` - The decimals of the mint
///
/// # Returns
/// * `f64` - The amount in whole tokens
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn amount_to_ui_amount(amount: u64, decimals: u8) -> f64 {
    amount as f64 / pow(10f64, decimals as f64)
}

/// Convert a human-readable amount into a native token amount, rounded down.
///
/// # Parameters
/// * `ui_amount` - The amount in whole tokens
/// * `decimals` - The decimals of the mint
///
/// # Returns
/// * `u64` - The amount in the smallest unit of the token
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn ui_amount_to_amount(ui_amount: f64, decimals: u8) -> Result<u64, CoreError> {
    let amount = floor(ui_amount * pow(10f64, decimals as f64));
    // u64::MAX as f64 rounds up to 2^64, which is already out of range.
    if amount.is_nan() || !(0.0..u64::MAX as f64).contains(&amount) {
        return Err(AMOUNT_EXCEEDS_MAX_U64);
    }
    Ok(amount as u64)
}

/// Spot price of token 0 in token 1, adjusted for decimals.
///
/// # Parameters
/// * `token_0_reserve`, `token_1_reserve` - The vault balances
/// * `decimals_0`, `decimals_1` - The decimals of the mints
///
/// # Returns
/// * `f64` - How many whole token 1 one whole token 0 is worth
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn reserves_to_price(token_0_reserve: u64, token_1_reserve: u64, decimals_0: u8, decimals_1: u8) -> Result<f64, CoreError> {
    if token_0_reserve == 0 || token_1_reserve == 0 {
        return Err(INVALID_POOL_STATE);
    }
    Ok(amount_to_ui_amount(token_1_reserve, decimals_1) / amount_to_ui_amount(token_0_reserve, decimals_0))
}
