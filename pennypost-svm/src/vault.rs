//! Timelock and vault address derivation.
//!
//! Addresses here are computed, not generated: `find_program_address` maps
//! seed bytes and a program id to an address with no corresponding private
//! key, and the bump seed it returns makes the result canonical. The
//! cryptographic guarantees belong to the Solana key-derivation primitive;
//! this module only fixes the seed layout.
//!
//! # Key Types
//!
//! - [`TIMELOCK_PROGRAM_ID`] - Namespace program for both derivation stages
//! - [`derive_timelock_address`] - Stage one: owner key to timelock state
//! - [`derive_vault_pda`] - Stage two: timelock state to vault
//! - [`derive_vault_address`] - Both stages, base58 text out

use solana_pubkey::{Pubkey, pubkey};

/// Program that owns timelock state and vault accounts.
pub const TIMELOCK_PROGRAM_ID: Pubkey = pubkey!("time2Z2SCnn3qYg3ULKVtdkh8YmZ5jFdKicnA1W2YnJ");

/// Seed tag for the timelock state derivation stage.
pub const TIMELOCK_STATE_SEED: &[u8] = b"timelock";

/// Seed tag for the vault derivation stage.
pub const TIMELOCK_VAULT_SEED: &[u8] = b"vault";

/// The owner identity key is not a well-formed public key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid owner identity key: {0}")]
pub struct InvalidKeyError(pub String);

/// Parses a base58-encoded owner identity key.
///
/// # Errors
///
/// Returns [`InvalidKeyError`] if the input is not valid base58 or does not
/// decode to exactly 32 bytes.
pub fn parse_owner_key(raw: &str) -> Result<Pubkey, InvalidKeyError> {
    let bytes = bs58::decode(raw)
        .into_vec()
        .map_err(|_| InvalidKeyError(raw.to_owned()))?;
    Pubkey::try_from(bytes.as_slice()).map_err(|_| InvalidKeyError(raw.to_owned()))
}

/// Derives the timelock state address for an owner, with its bump seed.
#[must_use]
pub fn derive_timelock_address(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TIMELOCK_STATE_SEED, owner.as_ref()], &TIMELOCK_PROGRAM_ID)
}

/// Derives the vault address for a timelock state, with its bump seed.
#[must_use]
pub fn derive_vault_pda(timelock: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[TIMELOCK_VAULT_SEED, timelock.as_ref()],
        &TIMELOCK_PROGRAM_ID,
    )
}

/// Derives the payment vault address for a post owner.
///
/// Runs both derivation stages from the owner's base58 identity key and
/// returns the vault address in base58 text, the form stored on a post at
/// creation time. Stateless and deterministic: the same key always yields
/// the same address.
///
/// # Errors
///
/// Returns [`InvalidKeyError`] if `owner_identity_key` is not a well-formed
/// base58-encoded public key.
#[cfg_attr(feature = "telemetry", tracing::instrument(err))]
pub fn derive_vault_address(owner_identity_key: &str) -> Result<String, InvalidKeyError> {
    let owner = parse_owner_key(owner_identity_key)?;
    let (timelock, _) = derive_timelock_address(&owner);
    let (vault, _) = derive_vault_pda(&timelock);
    Ok(vault.to_string())
}
