//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{
    split_swap_fees, try_apply_transfer_fee, try_compute_constant_product_swap, try_get_gross_input_for_net, try_get_input_for_output,
    try_get_max_amount_with_slippage_tolerance, try_get_min_amount_with_slippage_tolerance, try_get_price_impact_bps, try_reverse_apply_transfer_fee,
    CoreError, ExactInSwapQuote, ExactOutSwapQuote, FeeRates, PoolReserves, SwapQuote, TransferFee,
};

#[cfg(feature = "wasm")]
use cpswap_macros::wasm_expose;

/// Quotes a swap with a fixed gross input against the constant-product curve.
///
/// Fees are taken from the gross input first, the remaining net input is traded against the
/// reserves, and the price impact is measured on the reserves before and after the trade.
///
/// # Arguments
/// - `amount_in`: The gross input amount, as it arrives in the pool vault.
/// - `reserves`: The pool reserves oriented from the input token to the output token.
/// - `fee_rates`: The fee rates of the pool config.
///
/// # Returns
/// A `SwapQuote`, or `INVALID_POOL_STATE` if either reserve is zero.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn swap_base_input(amount_in: u64, reserves: PoolReserves, fee_rates: FeeRates) -> Result<SwapQuote, CoreError> {
    let fees = split_swap_fees(amount_in, fee_rates);

    let swap = try_compute_constant_product_swap(fees.net_input, reserves.input_reserve, reserves.output_reserve)?;

    let price_impact_bps = try_get_price_impact_bps(
        reserves.input_reserve,
        reserves.output_reserve,
        swap.new_input_reserve,
        swap.new_output_reserve,
    )?;

    Ok(SwapQuote {
        net_input_amount: fees.net_input,
        output_amount: swap.output_amount,
        new_input_reserve: swap.new_input_reserve,
        new_output_reserve: swap.new_output_reserve,
        trade_fee: fees.trade_fee,
        protocol_fee: fees.protocol_fee,
        fund_fee: fees.fund_fee,
        price_impact_bps,
    })
}

/// Computes the exact output amount for a swap with a fixed input amount.
///
/// # Arguments
/// - `token_in`: The input token amount the user sends.
/// - `slippage_tolerance_bps`: The slippage tolerance in basis points.
/// - `reserves`: The pool reserves oriented from the input token to the output token.
/// - `fee_rates`: The fee rates of the pool config.
/// - `transfer_fee_in`: The transfer fee of the input mint.
/// - `transfer_fee_out`: The transfer fee of the output mint.
///
/// # Returns
/// The estimated and minimum output amounts for the swap transaction.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn swap_quote_by_input_token(
    token_in: u64,
    slippage_tolerance_bps: u16,
    reserves: PoolReserves,
    fee_rates: FeeRates,
    transfer_fee_in: Option<TransferFee>,
    transfer_fee_out: Option<TransferFee>,
) -> Result<ExactInSwapQuote, CoreError> {
    let token_in_after_fee = try_apply_transfer_fee(token_in, transfer_fee_in.unwrap_or_default())?;

    let quote = swap_base_input(token_in_after_fee, reserves, fee_rates)?;

    let token_est_out = try_apply_transfer_fee(quote.output_amount, transfer_fee_out.unwrap_or_default())?;

    let token_min_out = try_get_min_amount_with_slippage_tolerance(token_est_out, slippage_tolerance_bps)?;

    Ok(ExactInSwapQuote {
        token_in,
        token_est_out,
        token_min_out,
        trade_fee: quote.trade_fee,
        protocol_fee: quote.protocol_fee,
        fund_fee: quote.fund_fee,
        price_impact_bps: quote.price_impact_bps,
    })
}

/// Computes the exact input amount for a swap with a fixed output amount.
///
/// # Arguments
/// - `token_out`: The output token amount the user wants to receive.
/// - `slippage_tolerance_bps`: The slippage tolerance in basis points.
/// - `reserves`: The pool reserves oriented from the input token to the output token.
/// - `fee_rates`: The fee rates of the pool config.
/// - `transfer_fee_in`: The transfer fee of the input mint.
/// - `transfer_fee_out`: The transfer fee of the output mint.
///
/// # Returns
/// The estimated and maximum input amounts for the swap transaction.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn swap_quote_by_output_token(
    token_out: u64,
    slippage_tolerance_bps: u16,
    reserves: PoolReserves,
    fee_rates: FeeRates,
    transfer_fee_in: Option<TransferFee>,
    transfer_fee_out: Option<TransferFee>,
) -> Result<ExactOutSwapQuote, CoreError> {
    let token_out_before_fee = try_reverse_apply_transfer_fee(token_out, transfer_fee_out.unwrap_or_default())?;

    let net_input = try_get_input_for_output(token_out_before_fee, reserves.input_reserve, reserves.output_reserve)?;
    let token_in_after_fee = try_get_gross_input_for_net(net_input, fee_rates)?;

    let quote = swap_base_input(token_in_after_fee, reserves, fee_rates)?;

    let token_out = try_apply_transfer_fee(quote.output_amount, transfer_fee_out.unwrap_or_default())?;

    let token_est_in = try_reverse_apply_transfer_fee(token_in_after_fee, transfer_fee_in.unwrap_or_default())?;

    let token_max_in = try_get_max_amount_with_slippage_tolerance(token_est_in, slippage_tolerance_bps)?;

    Ok(ExactOutSwapQuote {
        token_out,
        token_est_in,
        token_max_in,
        trade_fee: quote.trade_fee,
        protocol_fee: quote.protocol_fee,
        fund_fee: quote.fund_fee,
        price_impact_bps: quote.price_impact_bps,
    })
}
