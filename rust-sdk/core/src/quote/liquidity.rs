//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{
    try_apply_transfer_fee, try_get_bootstrap_lp_amount, try_get_lp_token_amounts, try_get_max_amount_with_slippage_tolerance,
    try_get_min_amount_with_slippage_tolerance, try_get_proportional_lp_amount, try_reverse_apply_transfer_fee, CoreError, DecreaseLiquidityQuote,
    DepositQuote, IncreaseLiquidityQuote, TransferFee, WithdrawQuote, INSUFFICIENT_LIQUIDITY, INVALID_WITHDRAW_AMOUNT,
};

#[cfg(feature = "wasm")]
use cpswap_macros::wasm_expose;

/// Quotes the LP tokens minted for depositing up to the given token amounts.
///
/// An empty pool (`lp_supply == 0`) is bootstrapped with the geometric mean of the amounts and
/// takes both amounts in full. Otherwise the binding side sets the LP amount and the used
/// amounts are what the program pulls for it, never more than offered.
///
/// # Arguments
/// - `token_0_amount`: The maximum amount of token 0 to deposit.
/// - `token_1_amount`: The maximum amount of token 1 to deposit.
/// - `token_0_reserve`: The vault balance of token 0.
/// - `token_1_reserve`: The vault balance of token 1.
/// - `lp_supply`: The current LP mint supply.
///
/// # Returns
/// A `DepositQuote`, or `INSUFFICIENT_LIQUIDITY` if no LP token would be minted.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn deposit_quote(
    token_0_amount: u64,
    token_1_amount: u64,
    token_0_reserve: u64,
    token_1_reserve: u64,
    lp_supply: u64,
) -> Result<DepositQuote, CoreError> {
    if lp_supply == 0 {
        let lp_tokens_out = try_get_bootstrap_lp_amount(token_0_amount, token_1_amount)?;
        return Ok(DepositQuote {
            lp_tokens_out,
            token_0_used: token_0_amount,
            token_1_used: token_1_amount,
        });
    }

    let lp_tokens_out = try_get_proportional_lp_amount(token_0_amount, token_1_amount, token_0_reserve, token_1_reserve, lp_supply)?;
    if lp_tokens_out == 0 {
        return Err(INSUFFICIENT_LIQUIDITY);
    }

    let (token_0_used, token_1_used) = try_get_lp_token_amounts(lp_tokens_out, lp_supply, token_0_reserve, token_1_reserve, true)?;

    Ok(DepositQuote {
        lp_tokens_out,
        token_0_used,
        token_1_used,
    })
}

/// Quotes the tokens returned for burning LP tokens.
///
/// # Arguments
/// - `lp_amount`: The LP amount to burn.
/// - `lp_supply`: The current LP mint supply.
/// - `token_0_reserve`: The vault balance of token 0.
/// - `token_1_reserve`: The vault balance of token 1.
///
/// # Returns
/// A `WithdrawQuote`, or `INVALID_WITHDRAW_AMOUNT` if `lp_amount` is zero or above the supply.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn withdraw_quote(lp_amount: u64, lp_supply: u64, token_0_reserve: u64, token_1_reserve: u64) -> Result<WithdrawQuote, CoreError> {
    if lp_amount == 0 || lp_amount > lp_supply {
        return Err(INVALID_WITHDRAW_AMOUNT);
    }

    let (token_0_out, token_1_out) = try_get_lp_token_amounts(lp_amount, lp_supply, token_0_reserve, token_1_reserve, false)?;

    Ok(WithdrawQuote { token_0_out, token_1_out })
}

/// Calculate the quote for depositing a fixed LP amount, the way the deposit instruction takes it.
///
/// # Parameters
/// - `lp_amount`: The LP amount to mint
/// - `slippage_tolerance_bps`: The slippage tolerance in bps
/// - `token_0_reserve`: The vault balance of token 0
/// - `token_1_reserve`: The vault balance of token 1
/// - `lp_supply`: The current LP mint supply
/// - `transfer_fee_0`: The transfer fee for token 0
/// - `transfer_fee_1`: The transfer fee for token 1
///
/// # Returns
/// - An IncreaseLiquidityQuote struct containing the estimated and maximum token amounts
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn increase_liquidity_quote(
    lp_amount: u64,
    slippage_tolerance_bps: u16,
    token_0_reserve: u64,
    token_1_reserve: u64,
    lp_supply: u64,
    transfer_fee_0: Option<TransferFee>,
    transfer_fee_1: Option<TransferFee>,
) -> Result<IncreaseLiquidityQuote, CoreError> {
    if lp_amount == 0 {
        return Err(INSUFFICIENT_LIQUIDITY);
    }

    let (token_0_before_fee, token_1_before_fee) = try_get_lp_token_amounts(lp_amount, lp_supply, token_0_reserve, token_1_reserve, true)?;

    let token_est_0 = try_reverse_apply_transfer_fee(token_0_before_fee, transfer_fee_0.unwrap_or_default())?;
    let token_est_1 = try_reverse_apply_transfer_fee(token_1_before_fee, transfer_fee_1.unwrap_or_default())?;

    let token_max_0 = try_get_max_amount_with_slippage_tolerance(token_est_0, slippage_tolerance_bps)?;
    let token_max_1 = try_get_max_amount_with_slippage_tolerance(token_est_1, slippage_tolerance_bps)?;

    Ok(IncreaseLiquidityQuote {
        lp_amount,
        token_est_0,
        token_est_1,
        token_max_0,
        token_max_1,
    })
}

/// Calculate the quote for burning a fixed LP amount.
///
/// # Parameters
/// - `lp_amount`: The LP amount to burn
/// - `slippage_tolerance_bps`: The slippage tolerance in bps
/// - `token_0_reserve`: The vault balance of token 0
/// - `token_1_reserve`: The vault balance of token 1
/// - `lp_supply`: The current LP mint supply
/// - `transfer_fee_0`: The transfer fee for token 0
/// - `transfer_fee_1`: The transfer fee for token 1
///
/// # Returns
/// - A DecreaseLiquidityQuote struct containing the estimated and minimum token amounts
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn decrease_liquidity_quote(
    lp_amount: u64,
    slippage_tolerance_bps: u16,
    token_0_reserve: u64,
    token_1_reserve: u64,
    lp_supply: u64,
    transfer_fee_0: Option<TransferFee>,
    transfer_fee_1: Option<TransferFee>,
) -> Result<DecreaseLiquidityQuote, CoreError> {
    let withdraw = withdraw_quote(lp_amount, lp_supply, token_0_reserve, token_1_reserve)?;

    let token_est_0 = try_apply_transfer_fee(withdraw.token_0_out, transfer_fee_0.unwrap_or_default())?;
    let token_est_1 = try_apply_transfer_fee(withdraw.token_1_out, transfer_fee_1.unwrap_or_default())?;

    let token_min_0 = try_get_min_amount_with_slippage_tolerance(token_est_0, slippage_tolerance_bps)?;
    let token_min_1 = try_get_min_amount_with_slippage_tolerance(token_est_1, slippage_tolerance_bps)?;

    Ok(DecreaseLiquidityQuote {
        lp_amount,
        token_est_0,
        token_est_1,
        token_min_0,
        token_min_1,
    })
}
