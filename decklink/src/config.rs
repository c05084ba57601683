// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Build-time configuration and path resolution for the DeckLink library.

use std::path::PathBuf;

// Build script generates constants.rs with DECKLINK_API_PATH
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

/// Environment variable that overrides the library location at runtime.
pub const DECKLINK_API_PATH_ENV: &str = "DECKLINK_API_PATH";

/// Returns the path of the DeckLink dispatch library.
///
/// The `DECKLINK_API_PATH` environment variable wins when it is set. Otherwise
/// the location chosen at build time is returned, which is
/// `libDeckLinkAPI.so` on Linux (resolved through the dynamic loader search
/// path) and the `DeckLinkAPI.framework` binary on macOS.
///
/// # Examples
///
/// ```no_run
/// use decklink::config::get_decklink_api_path;
/// use decklink::load_api;
///
/// # fn main() -> Result<(), decklink::Error> {
/// let api = load_api(get_decklink_api_path())?;
/// # Ok(())
/// # }
/// ```
pub fn get_decklink_api_path() -> PathBuf {
    std::env::var_os(DECKLINK_API_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DECKLINK_API_PATH))
}
