//
// Copyright (c) Cryptic Dot
//
// Modification based on Orca Whirlpools (https://github.com/orca-so/whirlpools),
// originally licensed under the Apache License, Version 2.0, prior to February 26, 2025.
//
// Modifications licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use cpswap_core::{BPS_DENOMINATOR, INVALID_SLIPPAGE_TOLERANCE};
use log::warn;
use std::{error::Error, sync::Mutex};

/// The default slippage tolerance, expressed in basis points. Value of 100 is equivalent to 1%.
pub const DEFAULT_SLIPPAGE_TOLERANCE_BPS: u16 = 100;

/// The currently selected slippage tolerance, expressed in basis points.
pub static SLIPPAGE_TOLERANCE_BPS: Mutex<u16> = Mutex::new(DEFAULT_SLIPPAGE_TOLERANCE_BPS);

/// Sets the currently selected slippage tolerance, expressed in basis points.
pub fn set_slippage_tolerance_bps(tolerance: u16) -> Result<(), Box<dyn Error>> {
    if tolerance > BPS_DENOMINATOR {
        return Err(INVALID_SLIPPAGE_TOLERANCE.into());
    }
    *SLIPPAGE_TOLERANCE_BPS.try_lock()? = tolerance;
    Ok(())
}

/// Returns the currently selected slippage tolerance, expressed in basis points.
pub fn slippage_tolerance_bps() -> u16 {
    match SLIPPAGE_TOLERANCE_BPS.lock() {
        Ok(tolerance) => *tolerance,
        Err(poisoned) => {
            warn!(target: "log", "Slippage tolerance lock is poisoned, reading the last value");
            *poisoned.into_inner()
        }
    }
}

/// Resets the configuration to its default values.
pub fn reset_configuration() -> Result<(), Box<dyn Error>> {
    *SLIPPAGE_TOLERANCE_BPS.try_lock()? = DEFAULT_SLIPPAGE_TOLERANCE_BPS;
    Ok(())
}
