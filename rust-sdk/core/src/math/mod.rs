//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod curve;
mod fees;
mod liquidity;
mod token;

#[cfg(feature = "floats")]
mod price;

pub use curve::*;
pub use fees::*;
pub use liquidity::*;
pub use token::*;

#[cfg(feature = "floats")]
pub use price::*;
