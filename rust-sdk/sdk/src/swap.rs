//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use cpswap_core::{swap_quote_by_input_token, swap_quote_by_output_token, ExactInSwapQuote, ExactOutSwapQuote};
use log::debug;
use solana_pubkey::Pubkey;

use crate::{PoolSnapshot, QuoteError};

/// Quotes selling an exact amount of `input_mint` into the pool.
///
/// # Arguments
///
/// * `pool` - The pool snapshot to quote against.
/// * `input_mint` - The mint the user sells, either token of the pool.
/// * `amount_in` - The amount the user sends.
/// * `slippage_tolerance_bps` - Optional slippage tolerance; the configured default is used when `None`.
///
/// # Errors
///
/// Fails if `input_mint` is not part of the pool or the quote math rejects the pool state.
pub fn swap_quote_by_input_mint(
    pool: &PoolSnapshot,
    input_mint: Pubkey,
    amount_in: u64,
    slippage_tolerance_bps: Option<u16>,
) -> Result<ExactInSwapQuote, QuoteError> {
    let slippage_tolerance_bps = slippage_tolerance_bps.unwrap_or_else(crate::slippage_tolerance_bps);
    let reserves = pool.reserves_for_input(&input_mint)?;
    let (transfer_fee_in, transfer_fee_out) = pool.transfer_fees_for_input(&input_mint)?;

    let quote = swap_quote_by_input_token(
        amount_in,
        slippage_tolerance_bps,
        reserves,
        pool.fee_rates(),
        transfer_fee_in,
        transfer_fee_out,
    )?;

    debug!(
        target: "log",
        "Swap quote on {}: {} in, {} out (min {}), impact {} bps",
        pool.address, quote.token_in, quote.token_est_out, quote.token_min_out, quote.price_impact_bps
    );
    Ok(quote)
}

/// Quotes buying an exact amount of `output_mint` from the pool.
///
/// # Arguments
///
/// * `pool` - The pool snapshot to quote against.
/// * `output_mint` - The mint the user buys, either token of the pool.
/// * `amount_out` - The amount the user wants to receive.
/// * `slippage_tolerance_bps` - Optional slippage tolerance; the configured default is used when `None`.
///
/// # Errors
///
/// Fails if `output_mint` is not part of the pool, the amount cannot be paid out by the pool,
/// or the quote math rejects the pool state.
pub fn swap_quote_by_output_mint(
    pool: &PoolSnapshot,
    output_mint: Pubkey,
    amount_out: u64,
    slippage_tolerance_bps: Option<u16>,
) -> Result<ExactOutSwapQuote, QuoteError> {
    let slippage_tolerance_bps = slippage_tolerance_bps.unwrap_or_else(crate::slippage_tolerance_bps);
    let input_mint = if pool.is_input_token_0(&output_mint)? {
        pool.token_1_mint
    } else {
        pool.token_0_mint
    };
    let reserves = pool.reserves_for_input(&input_mint)?;
    let (transfer_fee_in, transfer_fee_out) = pool.transfer_fees_for_input(&input_mint)?;

    let quote = swap_quote_by_output_token(
        amount_out,
        slippage_tolerance_bps,
        reserves,
        pool.fee_rates(),
        transfer_fee_in,
        transfer_fee_out,
    )?;

    debug!(
        target: "log",
        "Swap quote on {}: {} out, {} in (max {}), impact {} bps",
        pool.address, quote.token_out, quote.token_est_in, quote.token_max_in, quote.price_impact_bps
    );
    Ok(quote)
}
