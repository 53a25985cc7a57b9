//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod config;
mod error;
mod history;
mod liquidity;
mod pool;
mod swap;

pub use config::*;
pub use error::*;
pub use history::*;
pub use liquidity::*;
pub use pool::*;
pub use swap::*;
