//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{
    CoreError, TransferFee, AMOUNT_EXCEEDS_MAX_U64, ARITHMETIC_OVERFLOW, BPS_DENOMINATOR, INVALID_SLIPPAGE_TOLERANCE, INVALID_TRANSFER_FEE,
};
use ethnum::U256;

#[cfg(feature = "wasm")]
use cpswap_macros::wasm_expose;

/// Computes `amount * numerator / denominator` with a 256-bit intermediate product.
///
/// # Parameters
/// - `amount` - The amount to scale
/// - `numerator` - The scaling numerator
/// - `denominator` - The scaling denominator, must be non-zero
/// - `round_up` - Round the quotient up if true, down otherwise
///
/// # Returns
/// - The scaled amount, or an error if it does not fit a u64
pub fn try_mul_div(amount: u64, numerator: u128, denominator: u128, round_up: bool) -> Result<u64, CoreError> {
    if denominator == 0 {
        return Err(ARITHMETIC_OVERFLOW);
    }
    let product = <U256>::from(amount) * <U256>::from(numerator);
    let denominator = <U256>::from(denominator);
    let mut quotient = product / denominator;
    if round_up && product % denominator != U256::ZERO {
        quotient += U256::ONE;
    }
    if quotient > <U256>::from(u64::MAX) {
        return Err(AMOUNT_EXCEEDS_MAX_U64);
    }
    Ok(quotient.as_u128() as u64)
}

/// Floor of the square root, Newton iteration on integers.
pub fn integer_sqrt(value: u128) -> u128 {
    if value == 0 {
        return 0;
    }
    let mut x = value;
    // ceil(value / 2) without overflowing at u128::MAX
    let mut y = value / 2 + (value & 1);
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}

/// Calculate the amount after the transfer fee is withheld by the token program.
///
/// # Parameters
/// - `amount`: The amount before the fee
/// - `transfer_fee`: The transfer fee of the mint
///
/// # Returns
/// - `u64`: The amount that arrives at the destination
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn try_apply_transfer_fee(amount: u64, transfer_fee: TransferFee) -> Result<u64, CoreError> {
    if transfer_fee.fee_bps > BPS_DENOMINATOR {
        return Err(INVALID_TRANSFER_FEE);
    }
    if transfer_fee.fee_bps == 0 || amount == 0 {
        return Ok(amount);
    }
    let numerator = (amount as u128).checked_mul(transfer_fee.fee_bps.into()).ok_or(ARITHMETIC_OVERFLOW)?;
    let raw_fee: u64 = numerator
        .div_ceil(BPS_DENOMINATOR.into())
        .try_into()
        .map_err(|_| AMOUNT_EXCEEDS_MAX_U64)?;
    let fee_amount = raw_fee.min(transfer_fee.max_fee);
    Ok(amount - fee_amount)
}

/// Calculate the amount that must be sent so that `amount` arrives after the transfer fee.
///
/// # Parameters
/// - `amount`: The amount that must arrive
/// - `transfer_fee`: The transfer fee of the mint
///
/// # Returns
/// - `u64`: The amount to send
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn try_reverse_apply_transfer_fee(amount: u64, transfer_fee: TransferFee) -> Result<u64, CoreError> {
    if transfer_fee.fee_bps > BPS_DENOMINATOR {
        Err(INVALID_TRANSFER_FEE)
    } else if transfer_fee.fee_bps == 0 {
        Ok(amount)
    } else if amount == 0 {
        Ok(0)
    } else if transfer_fee.fee_bps == BPS_DENOMINATOR {
        amount.checked_add(transfer_fee.max_fee).ok_or(AMOUNT_EXCEEDS_MAX_U64)
    } else {
        let numerator = (amount as u128).checked_mul(BPS_DENOMINATOR.into()).ok_or(ARITHMETIC_OVERFLOW)?;
        let denominator = (BPS_DENOMINATOR - transfer_fee.fee_bps) as u128;
        let raw_pre_fee_amount = numerator.div_ceil(denominator);
        let fee_amount = raw_pre_fee_amount.checked_sub(amount as u128).ok_or(ARITHMETIC_OVERFLOW)?;
        if fee_amount >= transfer_fee.max_fee as u128 {
            amount.checked_add(transfer_fee.max_fee).ok_or(AMOUNT_EXCEEDS_MAX_U64)
        } else {
            raw_pre_fee_amount.try_into().map_err(|_| AMOUNT_EXCEEDS_MAX_U64)
        }
    }
}

/// Get the maximum amount with a slippage tolerance, used for amounts the user pays.
///
/// # Parameters
/// - `amount`: The estimated amount
/// - `slippage_tolerance_bps`: The slippage tolerance in bps (max 10000)
///
/// # Returns
/// - `u64`: The maximum amount
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn try_get_max_amount_with_slippage_tolerance(amount: u64, slippage_tolerance_bps: u16) -> Result<u64, CoreError> {
    if slippage_tolerance_bps > BPS_DENOMINATOR {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let numerator = BPS_DENOMINATOR as u128 + slippage_tolerance_bps as u128;
    try_mul_div(amount, numerator, BPS_DENOMINATOR as u128, true)
}

/// Get the minimum amount with a slippage tolerance, used for amounts the user receives.
///
/// # Parameters
/// - `amount`: The estimated amount
/// - `slippage_tolerance_bps`: The slippage tolerance in bps (max 10000)
///
/// # Returns
/// - `u64`: The minimum amount
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn try_get_min_amount_with_slippage_tolerance(amount: u64, slippage_tolerance_bps: u16) -> Result<u64, CoreError> {
    if slippage_tolerance_bps > BPS_DENOMINATOR {
        return Err(INVALID_SLIPPAGE_TOLERANCE);
    }
    let numerator = BPS_DENOMINATOR as u128 - slippage_tolerance_bps as u128;
    try_mul_div(amount, numerator, BPS_DENOMINATOR as u128, false)
}

#[cfg(all(test, not(feature = "wasm")))]
mod tests {
    use super::*;

    #[test]
    fn test_mul_div() {
        assert_eq!(try_mul_div(100, 3, 7, false), Ok(42));
        assert_eq!(try_mul_div(100, 3, 7, true), Ok(43));
        assert_eq!(try_mul_div(100, 7, 7, true), Ok(100));
        assert_eq!(try_mul_div(u64::MAX, u64::MAX as u128, u64::MAX as u128, false), Ok(u64::MAX));
        assert_eq!(try_mul_div(u64::MAX, 2, 1, false), Err(AMOUNT_EXCEEDS_MAX_U64));
        assert_eq!(try_mul_div(1, 1, 0, false), Err(ARITHMETIC_OVERFLOW));
    }

    #[test]
    fn test_integer_sqrt() {
        assert_eq!(integer_sqrt(0), 0);
        assert_eq!(integer_sqrt(1), 1);
        assert_eq!(integer_sqrt(2), 1);
        assert_eq!(integer_sqrt(3), 1);
        assert_eq!(integer_sqrt(4), 2);
        assert_eq!(integer_sqrt(5), 2);
        assert_eq!(integer_sqrt(8), 2);
        assert_eq!(integer_sqrt(9), 3);
        assert_eq!(integer_sqrt(40_000), 200);
        assert_eq!(integer_sqrt(40_399), 200);
        assert_eq!(integer_sqrt(40_401), 201);
        assert_eq!(integer_sqrt(u128::MAX), u64::MAX as u128);
        let square = (u64::MAX as u128) * (u64::MAX as u128);
        assert_eq!(integer_sqrt(square), u64::MAX as u128);
        assert_eq!(integer_sqrt(square - 1), u64::MAX as u128 - 1);
    }

    #[test]
    fn test_integer_sqrt_is_floor() {
        for value in 0..10_000u128 {
            let root = integer_sqrt(value);
            assert!(root * root <= value);
            assert!((root + 1) * (root + 1) > value);
        }
    }

    #[test]
    fn test_apply_transfer_fee() {
        assert_eq!(try_apply_transfer_fee(10_000, TransferFee::new(0)), Ok(10_000));
        assert_eq!(try_apply_transfer_fee(0, TransferFee::new(1000)), Ok(0));
        assert_eq!(try_apply_transfer_fee(10_000, TransferFee::new(1000)), Ok(9_000));
        assert_eq!(try_apply_transfer_fee(10_001, TransferFee::new(1000)), Ok(9_000));
        assert_eq!(try_apply_transfer_fee(10_000, TransferFee::new_with_max(1000, 500)), Ok(9_500));
        assert_eq!(try_apply_transfer_fee(10_000, TransferFee::new(10_000)), Ok(0));
        assert_eq!(try_apply_transfer_fee(10_000, TransferFee::new(10_001)), Err(INVALID_TRANSFER_FEE));
    }

    #[test]
    fn test_reverse_apply_transfer_fee() {
        assert_eq!(try_reverse_apply_transfer_fee(9_000, TransferFee::new(0)), Ok(9_000));
        assert_eq!(try_reverse_apply_transfer_fee(0, TransferFee::new(1000)), Ok(0));
        assert_eq!(try_reverse_apply_transfer_fee(9_000, TransferFee::new(1000)), Ok(10_000));
        assert_eq!(try_reverse_apply_transfer_fee(9_500, TransferFee::new_with_max(1000, 500)), Ok(10_000));
        assert_eq!(try_reverse_apply_transfer_fee(9_000, TransferFee::new_with_max(10_000, 500)), Ok(9_500));
        assert_eq!(try_reverse_apply_transfer_fee(1, TransferFee::new(10_000)), Err(AMOUNT_EXCEEDS_MAX_U64));
        assert_eq!(try_reverse_apply_transfer_fee(9_000, TransferFee::new(10_001)), Err(INVALID_TRANSFER_FEE));
    }

    #[test]
    fn test_transfer_fee_round_trip_never_falls_short() {
        let transfer_fee = TransferFee::new_with_max(137, 10_000);
        for amount in (1..2_000_000u64).step_by(9_973) {
            let sent = try_reverse_apply_transfer_fee(amount, transfer_fee).unwrap();
            assert!(try_apply_transfer_fee(sent, transfer_fee).unwrap() >= amount);
        }
    }

    #[test]
    fn test_slippage_tolerance() {
        assert_eq!(try_get_min_amount_with_slippage_tolerance(996, 1000), Ok(896));
        assert_eq!(try_get_max_amount_with_slippage_tolerance(1005, 1000), Ok(1106));
        assert_eq!(try_get_min_amount_with_slippage_tolerance(1000, 0), Ok(1000));
        assert_eq!(try_get_max_amount_with_slippage_tolerance(1000, 0), Ok(1000));
        assert_eq!(try_get_min_amount_with_slippage_tolerance(1000, 10_000), Ok(0));
        assert_eq!(try_get_max_amount_with_slippage_tolerance(1000, 10_000), Ok(2000));
        assert_eq!(try_get_min_amount_with_slippage_tolerance(1000, 10_001), Err(INVALID_SLIPPAGE_TOLERANCE));
        assert_eq!(try_get_max_amount_with_slippage_tolerance(u64::MAX, 1), Err(AMOUNT_EXCEEDS_MAX_U64));
    }
}
