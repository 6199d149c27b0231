//! `key` subcommand handlers.

use formfill_credentials::{CredentialError, CredentialStore, mask_credential};
use tracing::info;

use crate::cli::KeyAction;

/// Handle key subcommands. Returns whether the action succeeded.
pub(crate) async fn handle_key_command(
    action: KeyAction,
    store: &dyn CredentialStore,
) -> Result<bool, Box<dyn std::error::Error>> {
    match action {
        KeyAction::Save { key } => key_save(&key, store).await,
        KeyAction::Show => key_show(store).await,
        KeyAction::Clear => key_clear(store).await,
    }
}

async fn key_save(key: &str, store: &dyn CredentialStore) -> Result<bool, Box<dyn std::error::Error>> {
    match store.save(key).await {
        Ok(()) => {
            info!("API key saved");
            println!("API key saved successfully!");
            Ok(true)
        }
        Err(CredentialError::Empty) => {
            eprintln!("{}", CredentialError::Empty);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

async fn key_show(store: &dyn CredentialStore) -> Result<bool, Box<dyn std::error::Error>> {
    match store.load().await? {
        Some(key) => println!("API key is saved ({})", mask_credential(&key)),
        None => println!("No API key saved"),
    }
    Ok(true)
}

async fn key_clear(store: &dyn CredentialStore) -> Result<bool, Box<dyn std::error::Error>> {
    store.clear().await?;
    info!("API key cleared");
    println!("API key cleared");
    Ok(true)
}
