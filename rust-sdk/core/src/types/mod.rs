//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod liquidity;
mod pool;
mod swap;
mod token;

#[cfg(feature = "wasm")]
mod u64;

pub use liquidity::*;
pub use pool::*;
pub use swap::*;
pub use token::*;

#[cfg(feature = "wasm")]
pub use u64::*;
