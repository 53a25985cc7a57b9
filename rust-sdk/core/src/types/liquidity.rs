//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use cpswap_macros::wasm_expose;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct DepositQuote {
    pub lp_tokens_out: u64,
    pub token_0_used: u64,
    pub token_1_used: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct WithdrawQuote {
    pub token_0_out: u64,
    pub token_1_out: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct IncreaseLiquidityQuote {
    pub lp_amount: u64,
    pub token_est_0: u64,
    pub token_est_1: u64,
    pub token_max_0: u64,
    pub token_max_1: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct DecreaseLiquidityQuote {
    pub lp_amount: u64,
    pub token_est_0: u64,
    pub token_est_1: u64,
    pub token_min_0: u64,
    pub token_min_1: u64,
}
