//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use cpswap_macros::wasm_expose;

/// LP tokens the program mints into the pool itself when it is created.
/// They can never be withdrawn, so the first depositor receives the bootstrap amount minus this.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub const LOCKED_LP_AMOUNT: u64 = 100;
