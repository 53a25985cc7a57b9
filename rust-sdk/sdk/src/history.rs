//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use cpswap_core::{
    deposit_quote, swap_base_input, withdraw_quote, DepositQuote, FeeRates, PoolReserves, SwapQuote, WithdrawQuote, ARITHMETIC_OVERFLOW,
};
use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use solana_pubkey::Pubkey;
use std::collections::HashSet;

use crate::QuoteError;

/// An event picked up by the indexer from a confirmed transaction.
pub trait IndexedEvent {
    fn signature(&self) -> &str;
    fn slot(&self) -> u64;
    /// Distinguishes events of different kinds emitted by the same transaction.
    fn kind(&self) -> &'static str;
}

/// A swap as logged by the program and picked up by the indexer.
///
/// Vault balances are taken before the swap. `input_amount` is what the user sent and
/// `input_transfer_fee` the part of it withheld by the token program.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapEvent {
    pub signature: String,
    pub slot: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub pool_id: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub input_vault_before: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub output_vault_before: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub input_amount: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub output_amount: u64,
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default)]
    pub input_transfer_fee: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LpChangeType {
    Deposit,
    Withdraw,
}

/// A deposit or withdrawal as logged by the program and picked up by the indexer.
///
/// Vault balances and LP supply are taken before the change. Token amounts are what entered or
/// left the vaults, `lp_amount` is the LP minted or burned.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LpChangeEvent {
    pub signature: String,
    pub slot: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub pool_id: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub holder: Pubkey,
    pub change_type: LpChangeType,
    #[serde_as(as = "DisplayFromStr")]
    pub lp_amount: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub lp_amount_before: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub token_0_vault_before: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub token_1_vault_before: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub token_0_amount: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub token_1_amount: u64,
}

/// Any event of a pool stream, tagged by `type` on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PoolEvent {
    Swap(SwapEvent),
    LpChange(LpChangeEvent),
}

/// The quote a logged liquidity change replays to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LpChangeReplay {
    Deposit(DepositQuote),
    Withdraw(WithdrawQuote),
}

impl IndexedEvent for SwapEvent {
    fn signature(&self) -> &str {
        &self.signature
    }

    fn slot(&self) -> u64 {
        self.slot
    }

    fn kind(&self) -> &'static str {
        "swap"
    }
}

impl IndexedEvent for LpChangeEvent {
    fn signature(&self) -> &str {
        &self.signature
    }

    fn slot(&self) -> u64 {
        self.slot
    }

    fn kind(&self) -> &'static str {
        "lpChange"
    }
}

impl IndexedEvent for PoolEvent {
    fn signature(&self) -> &str {
        match self {
            PoolEvent::Swap(event) => event.signature(),
            PoolEvent::LpChange(event) => event.signature(),
        }
    }

    fn slot(&self) -> u64 {
        match self {
            PoolEvent::Swap(event) => event.slot(),
            PoolEvent::LpChange(event) => event.slot(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            PoolEvent::Swap(event) => event.kind(),
            PoolEvent::LpChange(event) => event.kind(),
        }
    }
}

/// Recomputes a logged swap from the vault balances it saw.
///
/// The replay does not need the chain. A replayed output that differs from the logged one is
/// reported through the log and the replayed quote is returned as is.
pub fn replay_swap_event(event: &SwapEvent, fee_rates: FeeRates) -> Result<SwapQuote, QuoteError> {
    let amount_in = event.input_amount.checked_sub(event.input_transfer_fee).ok_or(ARITHMETIC_OVERFLOW)?;
    let reserves = PoolReserves {
        input_reserve: event.input_vault_before,
        output_reserve: event.output_vault_before,
        ..Default::default()
    };

    let quote = swap_base_input(amount_in, reserves, fee_rates)?;
    if quote.output_amount != event.output_amount {
        warn!(
            target: "log",
            "Replayed swap {} on {} pays {} but {} was logged",
            event.signature, event.pool_id, quote.output_amount, event.output_amount
        );
    }
    Ok(quote)
}

/// Recomputes a logged deposit or withdrawal from the vault balances and LP supply it saw.
///
/// Mismatches with the logged amounts are reported through the log, like swap replays.
pub fn replay_lp_change_event(event: &LpChangeEvent) -> Result<LpChangeReplay, QuoteError> {
    match event.change_type {
        LpChangeType::Deposit => {
            let quote = deposit_quote(
                event.token_0_amount,
                event.token_1_amount,
                event.token_0_vault_before,
                event.token_1_vault_before,
                event.lp_amount_before,
            )?;
            if quote.lp_tokens_out != event.lp_amount {
                warn!(
                    target: "log",
                    "Replayed deposit {} on {} mints {} LP but {} was logged",
                    event.signature, event.pool_id, quote.lp_tokens_out, event.lp_amount
                );
            }
            Ok(LpChangeReplay::Deposit(quote))
        }
        LpChangeType::Withdraw => {
            let quote = withdraw_quote(
                event.lp_amount,
                event.lp_amount_before,
                event.token_0_vault_before,
                event.token_1_vault_before,
            )?;
            if quote.token_0_out != event.token_0_amount || quote.token_1_out != event.token_1_amount {
                warn!(
                    target: "log",
                    "Replayed withdrawal {} on {} pays {} / {} but {} / {} was logged",
                    event.signature, event.pool_id, quote.token_0_out, quote.token_1_out, event.token_0_amount, event.token_1_amount
                );
            }
            Ok(LpChangeReplay::Withdraw(quote))
        }
    }
}

/// Drops redelivered events and puts the rest in chain order.
///
/// Events can arrive more than once and out of order; the first copy of each signature and
/// kind is kept and the result is sorted by slot, then signature.
pub fn dedup_events<E: IndexedEvent>(events: Vec<E>) -> Vec<E> {
    let mut seen = HashSet::with_capacity(events.len());
    let mut unique: Vec<E> = events
        .into_iter()
        .filter(|event| seen.insert((event.signature().to_string(), event.kind())))
        .collect();
    unique.sort_by(|a, b| {
        a.slot()
            .cmp(&b.slot())
            .then_with(|| a.signature().cmp(b.signature()))
            .then_with(|| a.kind().cmp(b.kind()))
    });
    unique
}

/// Parses a batch of events as served by the indexer.
pub fn parse_events<E: DeserializeOwned>(json: &str) -> Result<Vec<E>, QuoteError> {
    Ok(serde_json::from_str(json)?)
}
