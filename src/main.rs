//! pkg_packager - builds macOS installer packages with pkgbuild.
//!
//! This binary packages a folder into a `.pkg`, remembering its settings and
//! build log between runs.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match pkg_packager::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
