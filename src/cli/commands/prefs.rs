//! `prefs`: print stored preferences.

use crate::cli::OutputManager;
use crate::error::Result;
use crate::preferences::PreferenceStore;

pub fn execute(store: &PreferenceStore, output: &OutputManager) -> Result<i32> {
    let preferences = store.load()?;

    output.section(&format!("Preferences ({})", store.path().display()))?;
    for (key, value) in preferences.entries() {
        output.indent(&format!("{key} = {value}"))?;
    }
    Ok(0)
}
