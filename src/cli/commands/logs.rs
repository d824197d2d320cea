//! `logs`: show or clear the accumulated build log.

use crate::cli::{LogsArgs, OutputManager};
use crate::error::Result;
use crate::preferences::PreferenceStore;

pub fn execute(args: &LogsArgs, store: &PreferenceStore, output: &OutputManager) -> Result<i32> {
    if args.clear {
        store.update(|preferences| {
            preferences.logs.clear();
            Ok(())
        })?;
        output.success("Logs cleared.")?;
        return Ok(0);
    }

    let preferences = store.load()?;
    if preferences.logs.is_empty() {
        output.info("No log entries.")?;
    } else {
        // Raw log text goes to stdout unconditionally so it can be piped.
        print!("{}", preferences.logs);
    }
    Ok(0)
}
