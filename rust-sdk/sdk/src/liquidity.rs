//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use cpswap_core::{
    decrease_liquidity_quote, deposit_quote, increase_liquidity_quote, try_get_creator_lp_amount, try_get_paired_deposit_amount, withdraw_quote,
    DecreaseLiquidityQuote, DepositQuote, IncreaseLiquidityQuote, WithdrawQuote,
};
use log::debug;
use solana_pubkey::Pubkey;

use crate::{PoolSnapshot, QuoteError};

/// Quotes the LP tokens minted for depositing up to the given amounts into the pool.
///
/// For an empty pool the quote is the bootstrap deposit, and it fails unless the minted
/// amount covers the LP amount the program locks on creation.
pub fn deposit_quote_for_pool(pool: &PoolSnapshot, token_0_amount: u64, token_1_amount: u64) -> Result<DepositQuote, QuoteError> {
    let quote = deposit_quote(token_0_amount, token_1_amount, pool.token_0_reserve, pool.token_1_reserve, pool.lp_supply)?;

    if pool.lp_supply == 0 {
        let creator_lp_amount = try_get_creator_lp_amount(quote.lp_tokens_out)?;
        debug!(target: "log", "Bootstrap deposit on {}: {} LP minted, {} to the creator", pool.address, quote.lp_tokens_out, creator_lp_amount);
    } else {
        debug!(
            target: "log",
            "Deposit on {}: {} LP for {} / {}",
            pool.address, quote.lp_tokens_out, quote.token_0_used, quote.token_1_used
        );
    }
    Ok(quote)
}

/// Computes the amount of the other token that pairs with `amount` of `input_mint` at the pool ratio.
pub fn paired_deposit_amount_for_pool(pool: &PoolSnapshot, input_mint: Pubkey, amount: u64) -> Result<u64, QuoteError> {
    let reserves = pool.reserves_for_input(&input_mint)?;
    Ok(try_get_paired_deposit_amount(amount, reserves.input_reserve, reserves.output_reserve)?)
}

/// Quotes the tokens returned for burning `lp_amount` LP tokens of the pool.
pub fn withdraw_quote_for_pool(pool: &PoolSnapshot, lp_amount: u64) -> Result<WithdrawQuote, QuoteError> {
    let quote = withdraw_quote(lp_amount, pool.lp_supply, pool.token_0_reserve, pool.token_1_reserve)?;
    debug!(target: "log", "Withdraw on {}: {} LP for {} / {}", pool.address, lp_amount, quote.token_0_out, quote.token_1_out);
    Ok(quote)
}

/// Quotes the maximum token amounts to sign for minting exactly `lp_amount` LP tokens.
pub fn increase_liquidity_quote_for_pool(
    pool: &PoolSnapshot,
    lp_amount: u64,
    slippage_tolerance_bps: Option<u16>,
) -> Result<IncreaseLiquidityQuote, QuoteError> {
    let (transfer_fee_0, transfer_fee_1) = pool.transfer_fees();
    Ok(increase_liquidity_quote(
        lp_amount,
        slippage_tolerance_bps.unwrap_or_else(crate::slippage_tolerance_bps),
        pool.token_0_reserve,
        pool.token_1_reserve,
        pool.lp_supply,
        transfer_fee_0,
        transfer_fee_1,
    )?)
}

/// Quotes the minimum token amounts to sign for burning exactly `lp_amount` LP tokens.
pub fn decrease_liquidity_quote_for_pool(
    pool: &PoolSnapshot,
    lp_amount: u64,
    slippage_tolerance_bps: Option<u16>,
) -> Result<DecreaseLiquidityQuote, QuoteError> {
    let (transfer_fee_0, transfer_fee_1) = pool.transfer_fees();
    Ok(decrease_liquidity_quote(
        lp_amount,
        slippage_tolerance_bps.unwrap_or_else(crate::slippage_tolerance_bps),
        pool.token_0_reserve,
        pool.token_1_reserve,
        pool.lp_supply,
        transfer_fee_0,
        transfer_fee_1,
    )?)
}
