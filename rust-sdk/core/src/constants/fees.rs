//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use cpswap_macros::wasm_expose;

/// Denominator of the pool fee rates, rates are expressed in basis points.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub const FEE_RATE_DENOMINATOR: u32 = 10_000;

/// Denominator of slippage tolerances and transfer fees.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub const BPS_DENOMINATOR: u16 = 10_000;
