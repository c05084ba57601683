// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Build script for the `decklink` crate.
//!
//! This script generates `constants.rs` containing the default location of the
//! DeckLink dispatch library for the target operating system. Setting
//! `DECKLINK_API_PATH` while building bakes in a different location.

use std::env;
use std::path::PathBuf;

/// Library location used by the vendor installers on Linux.
const LINUX_API_PATH: &str = "libDeckLinkAPI.so";
/// Library location inside the framework bundle installed on macOS.
const MACOS_API_PATH: &str = "/Library/Frameworks/DeckLinkAPI.framework/DeckLinkAPI";

fn main() {
    println!("cargo:rerun-if-env-changed=DECKLINK_API_PATH");

    let target_os = env::var("CARGO_CFG_TARGET_OS").expect("failed to get target OS");
    let api_path = env::var("DECKLINK_API_PATH").unwrap_or_else(|_| {
        match target_os.as_str() {
            "macos" => MACOS_API_PATH,
            _ => LINUX_API_PATH,
        }
        .to_string()
    });

    // Generate constants.rs in the build output directory
    let out_path = PathBuf::from(env::var("OUT_DIR").expect("failed to get output directory"))
        .join("constants.rs");

    let data = format!("pub const DECKLINK_API_PATH: &str = {api_path:?};\n");
    std::fs::write(out_path, data).expect("Unable to write file");
}
