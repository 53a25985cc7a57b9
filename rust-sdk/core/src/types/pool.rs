//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use cpswap_macros::wasm_expose;

/// Vault balances and LP supply of one pool at one instant, oriented for a swap
/// (`input_*` is the token being sold).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct PoolReserves {
    pub input_reserve: u64,
    pub output_reserve: u64,
    pub lp_supply: u64,
    pub input_decimals: u8,
    pub output_decimals: u8,
}

impl PoolReserves {
    /// The same snapshot seen from the other side of the pair.
    pub fn flipped(self) -> Self {
        Self {
            input_reserve: self.output_reserve,
            output_reserve: self.input_reserve,
            lp_supply: self.lp_supply,
            input_decimals: self.output_decimals,
            output_decimals: self.input_decimals,
        }
    }
}

/// Fee rates of the pool's amm config, in basis points of the gross input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct FeeRates {
    pub trade_fee_rate_bps: u32,
    pub protocol_fee_rate_bps: u32,
    pub fund_fee_rate_bps: u32,
}

impl FeeRates {
    pub fn new(trade_fee_rate_bps: u32, protocol_fee_rate_bps: u32, fund_fee_rate_bps: u32) -> Self {
        Self {
            trade_fee_rate_bps,
            protocol_fee_rate_bps,
            fund_fee_rate_bps,
        }
    }

    pub fn total_rate_bps(&self) -> u64 {
        self.trade_fee_rate_bps as u64 + self.protocol_fee_rate_bps as u64 + self.fund_fee_rate_bps as u64
    }
}
