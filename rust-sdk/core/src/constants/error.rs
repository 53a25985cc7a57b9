//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use cpswap_macros::wasm_expose;

pub type CoreError = &'static str;

/// One of the pool reserves is zero, the pool was never seeded or has been drained.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub const INVALID_POOL_STATE: CoreError = "Invalid pool state";

/// The deposit would mint zero LP tokens.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub const INSUFFICIENT_LIQUIDITY: CoreError = "Insufficient liquidity";

/// The burned LP amount is zero or exceeds the LP supply.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub const INVALID_WITHDRAW_AMOUNT: CoreError = "Invalid withdraw amount";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const ARITHMETIC_OVERFLOW: CoreError = "Arithmetic over- or underflow";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const AMOUNT_EXCEEDS_MAX_U64: CoreError = "Amount exceeds max u64";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const OUTPUT_EXCEEDS_RESERVE: CoreError = "Output amount exceeds pool reserve";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const INVALID_FEE_RATE: CoreError = "Invalid fee rate";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const INVALID_TRANSFER_FEE: CoreError = "Invalid transfer fee";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const INVALID_SLIPPAGE_TOLERANCE: CoreError = "Invalid slippage tolerance";
