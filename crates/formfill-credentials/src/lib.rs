//! # formfill Credentials
//!
//! Storage for the generator API key.
//!
//! A single credential lives under the key [`CREDENTIAL_KEY`]. Saving
//! overwrites it, and it never expires. The file-backed store keeps a flat
//! JSON object so unrelated keys written by other tools survive a save.

pub mod error;
pub mod store;

pub use error::CredentialError;
pub use store::{
    CREDENTIAL_KEY, CredentialStore, FileCredentialStore, MemoryCredentialStore, mask_credential,
    normalize_credential,
};
