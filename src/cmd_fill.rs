//! `fill` subcommand handler.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use formfill_config::GeneratorConfig;
use formfill_core::FormFiller;
use formfill_credentials::CredentialStore;
use formfill_dom::{Document, PageSnapshot};
use formfill_protocols::{FillSummary, PageMessage};
use formfill_provider_gemini::{GeminiGenerator, GeminiSettings};
use tracing::{debug, info};

/// Where the filled snapshot goes.
///
/// With neither a file nor stdout the snapshot is written back in place.
#[derive(Debug, Default)]
pub(crate) struct FillOutput<'a> {
    pub file: Option<&'a Path>,
    pub stdout: bool,
}

/// Endpoint settings from the `[generator]` section.
pub(crate) fn gemini_settings(config: &GeneratorConfig) -> GeminiSettings {
    GeminiSettings {
        base_url: config.base_url.clone(),
        model: config.model.clone(),
        connect_timeout: Duration::from_secs(config.connect_timeout_seconds),
        timeout: Duration::from_secs(config.timeout_seconds),
    }
}

/// Fill a page snapshot. Returns whether the fill succeeded.
///
/// Status lines go to stderr when the snapshot itself is printed to stdout.
pub(crate) async fn handle_fill_command(
    snapshot_path: &Path,
    output: FillOutput<'_>,
    settings: GeminiSettings,
    store: &dyn CredentialStore,
) -> Result<bool, Box<dyn std::error::Error>> {
    let status = |message: &str| {
        if output.stdout {
            eprintln!("{}", message);
        } else {
            println!("{}", message);
        }
    };

    let Some(credential) = store.load().await? else {
        status("Please save your Gemini API key first");
        return Ok(false);
    };

    let snapshot = PageSnapshot::load(snapshot_path)?;
    let mut document = Document::from_snapshot(&snapshot)?;
    debug!(
        url = document.url(),
        nodes = document.len(),
        "Loaded page snapshot"
    );

    status("Filling form...");
    let summary = fill_document(&mut document, &credential, settings).await?;

    if summary.success {
        status(&format!(
            "Form filled with {} fields!",
            summary.field_count.unwrap_or_default()
        ));
    } else {
        status(&summary.message);
    }

    let filled = document.to_snapshot();
    // An unchanged page is not rewritten in place.
    let in_place = !output.stdout && summary.success;
    if let Some(path) = output.file.or(in_place.then_some(snapshot_path)) {
        filled.save(path)?;
        info!("Wrote filled snapshot to {}", path.display());
    }
    if output.stdout {
        println!("{}", filled.to_json_pretty()?);
    }

    Ok(summary.success)
}

/// Send a `fillForm` message to the document, as the page would receive it.
async fn fill_document(
    document: &mut Document,
    credential: &str,
    settings: GeminiSettings,
) -> Result<FillSummary, Box<dyn std::error::Error>> {
    let generator = GeminiGenerator::new(settings)?;
    let mut filler = FormFiller::new(Arc::new(generator));

    let message = serde_json::to_value(PageMessage::fill_form(credential))?;
    Ok(filler.handle_json(document, message).await)
}

#[cfg(test)]
#[path = "cmd_fill_tests.rs"]
mod tests;
