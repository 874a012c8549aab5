#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Solana payment address derivation for paywalled publishing.
//!
//! Every post exposes a payment destination a reader must fund before
//! gaining access. That destination is not a wallet anyone controls
//! directly: it is a program-derived address, computed deterministically
//! from the owner's identity key and the timelock program's namespace, so
//! any party holding the same inputs can recompute and verify it without a
//! private key ever existing.
//!
//! Derivation runs in two stages: the owner's key derives their timelock
//! state address, and that address in turn derives the vault the funds
//! actually land in. Both stages are pure and stateless.
//!
//! # Modules
//!
//! - [`vault`] - Timelock and vault address derivation
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring
//!
//! # Example
//!
//! ```
//! use pennypost_svm::derive_vault_address;
//!
//! let vault = derive_vault_address("9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM")?;
//! // The same owner key always yields the same vault address.
//! assert_eq!(
//!     vault,
//!     derive_vault_address("9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM")?,
//! );
//! # Ok::<(), pennypost_svm::InvalidKeyError>(())
//! ```

pub mod vault;

pub use vault::{InvalidKeyError, derive_vault_address};
