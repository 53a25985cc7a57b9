//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{try_mul_div, CoreError, FeeRates, SwapFees, FEE_RATE_DENOMINATOR, INVALID_FEE_RATE};

#[cfg(feature = "wasm")]
use cpswap_macros::wasm_expose;

/// Splits a gross swap input into the trade, protocol and fund fees and the net input.
///
/// Every fee is floored on its own against the gross `amount_in`. Summing the rates first
/// and flooring once can differ by up to two units, and the program settles the per-fee way.
///
/// # Parameters
/// - `amount_in` - The gross input amount
/// - `fee_rates` - The fee rates of the pool in bps
///
/// # Returns
/// - A `SwapFees` with `net_input + trade_fee + protocol_fee + fund_fee == amount_in`
///   whenever the total rate does not exceed 10000 bps
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn split_swap_fees(amount_in: u64, fee_rates: FeeRates) -> SwapFees {
    let trade_fee = fee_amount(amount_in, fee_rates.trade_fee_rate_bps);
    let protocol_fee = fee_amount(amount_in, fee_rates.protocol_fee_rate_bps);
    let fund_fee = fee_amount(amount_in, fee_rates.fund_fee_rate_bps);

    // Rates are trusted program config; nonsense rates saturate instead of wrapping.
    let net_input = amount_in.saturating_sub(trade_fee).saturating_sub(protocol_fee).saturating_sub(fund_fee);

    SwapFees {
        net_input,
        trade_fee,
        protocol_fee,
        fund_fee,
    }
}

/// Computes the smallest gross input whose net input after `split_swap_fees` reaches `net_input`.
///
/// # Parameters
/// - `net_input` - The net amount that has to reach the curve
/// - `fee_rates` - The fee rates of the pool in bps
///
/// # Returns
/// - The gross input amount
pub fn try_get_gross_input_for_net(net_input: u64, fee_rates: FeeRates) -> Result<u64, CoreError> {
    let total_rate = fee_rates.total_rate_bps();
    if total_rate >= FEE_RATE_DENOMINATOR as u64 {
        return Err(INVALID_FEE_RATE);
    }
    if net_input == 0 {
        return Ok(0);
    }

    let net_rate = (FEE_RATE_DENOMINATOR as u64 - total_rate) as u128;
    // gross * (1 - total_rate) >= net_input always leaves enough net input.
    let upper = try_mul_div(net_input, FEE_RATE_DENOMINATOR as u128, net_rate, true)?;
    // Each of the three floors gives back less than one unit, so no gross at or below
    // (net_input - 3) / (1 - total_rate) can reach net_input.
    let lower = try_mul_div(net_input.saturating_sub(3), FEE_RATE_DENOMINATOR as u128, net_rate, false)?;

    // net(gross) is not monotonic, the first hit scanning up from the bound is the minimum.
    let gross = (lower..upper)
        .find(|&gross| split_swap_fees(gross, fee_rates).net_input >= net_input)
        .unwrap_or(upper);
    Ok(gross)
}

fn fee_amount(amount: u64, rate_bps: u32) -> u64 {
    let fee = amount as u128 * rate_bps as u128 / FEE_RATE_DENOMINATOR as u128;
    fee.min(amount as u128) as u64
}

#[cfg(all(test, not(feature = "wasm")))]
mod tests {
    use super::*;

    #[test]
    fn test_zero_amount() {
        let fees = split_swap_fees(0, FeeRates::new(25, 5, 3));
        assert_eq!(fees, SwapFees::default());
    }

    #[test]
    fn test_trade_fee_only() {
        let fees = split_swap_fees(1000, FeeRates::new(25, 0, 0));
        assert_eq!(fees.trade_fee, 2);
        assert_eq!(fees.protocol_fee, 0);
        assert_eq!(fees.fund_fee, 0);
        assert_eq!(fees.net_input, 998);
    }

    #[test]
    fn test_fees_are_floored_independently() {
        // floor(101 * 99 / 10000) = 0 for each fee.
        let fees = split_swap_fees(101, FeeRates::new(99, 99, 99));
        assert_eq!(fees.trade_fee, 0);
        assert_eq!(fees.protocol_fee, 0);
        assert_eq!(fees.fund_fee, 0);
        assert_eq!(fees.net_input, 101);

        // floor(150 * 297 / 10000) = 4 combined, 3 x floor(150 * 99 / 10000) = 3 independent.
        let fees = split_swap_fees(150, FeeRates::new(99, 99, 99));
        assert_eq!(fees.trade_fee + fees.protocol_fee + fees.fund_fee, 3);
        assert_eq!(fees.net_input, 147);
    }

    #[test]
    fn test_fee_conservation() {
        let rates = [
            FeeRates::new(0, 0, 0),
            FeeRates::new(25, 0, 0),
            FeeRates::new(2500, 1200, 400),
            FeeRates::new(3333, 3333, 3333),
            FeeRates::new(10_000, 0, 0),
        ];
        for fee_rates in rates {
            for amount_in in (0..1_000_000u64).step_by(7_919).chain([u64::MAX, u64::MAX - 1]) {
                let fees = split_swap_fees(amount_in, fee_rates);
                assert_eq!(
                    fees.net_input as u128 + fees.trade_fee as u128 + fees.protocol_fee as u128 + fees.fund_fee as u128,
                    amount_in as u128
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_rates_saturate() {
        let fees = split_swap_fees(1000, FeeRates::new(20_000, 0, 0));
        assert_eq!(fees.trade_fee, 1000);
        assert_eq!(fees.net_input, 0);

        let fees = split_swap_fees(1000, FeeRates::new(6000, 6000, 0));
        assert_eq!(fees.trade_fee, 600);
        assert_eq!(fees.protocol_fee, 600);
        assert_eq!(fees.net_input, 0);
    }

    #[test]
    fn test_gross_input_for_net() {
        assert_eq!(try_get_gross_input_for_net(0, FeeRates::new(25, 0, 0)), Ok(0));
        assert_eq!(try_get_gross_input_for_net(998, FeeRates::new(0, 0, 0)), Ok(998));
        assert_eq!(try_get_gross_input_for_net(998, FeeRates::new(25, 0, 0)), Ok(1000));
        assert_eq!(try_get_gross_input_for_net(1, FeeRates::new(10_000, 0, 0)), Err(INVALID_FEE_RATE));
    }

    #[test]
    fn test_gross_input_for_net_skips_local_dips() {
        let fee_rates = FeeRates::new(2500, 120, 40);
        assert_eq!(split_swap_fees(83, fee_rates).net_input, 63);
        assert_eq!(split_swap_fees(84, fee_rates).net_input, 62);
        assert_eq!(try_get_gross_input_for_net(63, fee_rates), Ok(83));
    }

    #[test]
    fn test_gross_input_for_net_is_minimal() {
        for fee_rates in [FeeRates::new(2500, 120, 40), FeeRates::new(25, 5, 3), FeeRates::new(3000, 3000, 3000)] {
            for net_input in 1..1_000u64 {
                let gross = try_get_gross_input_for_net(net_input, fee_rates).unwrap();
                assert!(split_swap_fees(gross, fee_rates).net_input >= net_input);
                assert!((0..gross).all(|smaller| split_swap_fees(smaller, fee_rates).net_input < net_input));
            }
        }
    }

    #[test]
    fn test_gross_input_for_net_is_sufficient_and_tight() {
        let fee_rates = FeeRates::new(2500, 120, 40);
        for net_input in (1..500_000u64).step_by(4_999) {
            let gross = try_get_gross_input_for_net(net_input, fee_rates).unwrap();
            assert!(split_swap_fees(gross, fee_rates).net_input >= net_input);
            assert!(split_swap_fees(gross - 1, fee_rates).net_input < net_input);
        }
    }
}
