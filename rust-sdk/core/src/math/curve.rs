//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{
    ConstantProductSwap, CoreError, AMOUNT_EXCEEDS_MAX_U64, ARITHMETIC_OVERFLOW, FEE_RATE_DENOMINATOR, INVALID_POOL_STATE, OUTPUT_EXCEEDS_RESERVE,
};
use ethnum::U256;

#[cfg(feature = "wasm")]
use cpswap_macros::wasm_expose;

/// Trades a net input against the constant-product curve `input_reserve * output_reserve = k`.
///
/// The new output reserve is `floor(k / new_input_reserve)`, so the rounding always favours
/// the pool and the product of the reserves never grows. A trade that would floor the output
/// reserve to zero is rejected with `OUTPUT_EXCEEDS_RESERVE`, so the pool is never drained.
///
/// # Parameters
/// - `net_input` - The input amount after swap fees
/// - `input_reserve` - The vault balance of the token being sold
/// - `output_reserve` - The vault balance of the token being bought
///
/// # Returns
/// - A `ConstantProductSwap` with the output amount and the reserves after the trade
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn try_compute_constant_product_swap(net_input: u64, input_reserve: u64, output_reserve: u64) -> Result<ConstantProductSwap, CoreError> {
    if input_reserve == 0 || output_reserve == 0 {
        return Err(INVALID_POOL_STATE);
    }

    let invariant = input_reserve as u128 * output_reserve as u128;
    let new_input_reserve = input_reserve.checked_add(net_input).ok_or(AMOUNT_EXCEEDS_MAX_U64)?;
    // new_input_reserve >= input_reserve, so the quotient is at most output_reserve.
    let new_output_reserve = (invariant / new_input_reserve as u128) as u64;
    if new_output_reserve == 0 {
        return Err(OUTPUT_EXCEEDS_RESERVE);
    }
    let output_amount = output_reserve - new_output_reserve;

    Ok(ConstantProductSwap {
        output_amount,
        new_input_reserve,
        new_output_reserve,
    })
}

/// Computes the smallest net input for which the curve pays out at least `amount_out`.
///
/// # Parameters
/// - `amount_out` - The requested output amount
/// - `input_reserve` - The vault balance of the token being sold
/// - `output_reserve` - The vault balance of the token being bought
///
/// # Returns
/// - The net input amount (before swap fees are added back)
pub fn try_get_input_for_output(amount_out: u64, input_reserve: u64, output_reserve: u64) -> Result<u64, CoreError> {
    if input_reserve == 0 || output_reserve == 0 {
        return Err(INVALID_POOL_STATE);
    }
    if amount_out == 0 {
        return Ok(0);
    }
    if amount_out >= output_reserve {
        return Err(OUTPUT_EXCEEDS_RESERVE);
    }

    // floor(k / x) <= r  <=>  x >= floor(k / (r + 1)) + 1
    let invariant = input_reserve as u128 * output_reserve as u128;
    let remaining_output = (output_reserve - amount_out) as u128;
    let min_new_input_reserve = invariant / (remaining_output + 1) + 1;
    let net_input = min_new_input_reserve.saturating_sub(input_reserve as u128);

    net_input.try_into().map_err(|_| AMOUNT_EXCEEDS_MAX_U64)
}

/// Computes the price impact of a trade in basis points.
///
/// Compares the marginal price `output_reserve / input_reserve` before the trade with
/// `new_output_reserve / new_input_reserve` after it. Integer only; the post-trade ratio is
/// floored, which rounds the impact up.
///
/// # Parameters
/// - `input_reserve`, `output_reserve` - Reserves before the trade
/// - `new_input_reserve`, `new_output_reserve` - Reserves after the trade
///
/// # Returns
/// - The relative price deviation in bps, positive when the price moved against the trader
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn try_get_price_impact_bps(input_reserve: u64, output_reserve: u64, new_input_reserve: u64, new_output_reserve: u64) -> Result<i64, CoreError> {
    if input_reserve == 0 || output_reserve == 0 || new_input_reserve == 0 {
        return Err(INVALID_POOL_STATE);
    }

    let numerator = <U256>::from(new_output_reserve as u128 * input_reserve as u128) * <U256>::from(FEE_RATE_DENOMINATOR);
    let denominator = <U256>::from(new_input_reserve as u128 * output_reserve as u128);
    let ratio_bps = numerator / denominator;
    if ratio_bps > <U256>::from(i64::MAX as u128) {
        return Err(ARITHMETIC_OVERFLOW);
    }

    Ok(FEE_RATE_DENOMINATOR as i64 - ratio_bps.as_u128() as i64)
}
