//! Unified entry point, one master builder per feature

#[cfg(feature = "cipher")]
mod cipher;
#[cfg(feature = "jwt")]
mod jwt;
#[cfg(feature = "key")]
mod key;

#[cfg(feature = "cipher")]
pub use cipher::CipherMasterBuilder;
#[cfg(feature = "jwt")]
pub use jwt::JwtMasterBuilder;
#[cfg(feature = "key")]
pub use key::KeyMasterBuilder;

/// Entry point for all credo operations
///
/// `Credo::jwt()`, `Credo::key()` and `Credo::cipher()` hand out the
/// constructors of each enabled crate.
#[derive(Debug, Clone, Copy)]
pub struct Credo;

impl Credo {
    /// Signers and verifiers
    #[cfg(feature = "jwt")]
    #[must_use]
    pub fn jwt() -> JwtMasterBuilder {
        JwtMasterBuilder
    }

    /// Key derivation
    #[cfg(feature = "key")]
    #[must_use]
    pub fn key() -> KeyMasterBuilder {
        KeyMasterBuilder
    }

    /// Authenticated encryption
    #[cfg(feature = "cipher")]
    #[must_use]
    pub fn cipher() -> CipherMasterBuilder {
        CipherMasterBuilder
    }
}
