// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! # decklink-sys: Raw ABI definitions for the DeckLink API
//!
//! This crate describes the binary contract of the Blackmagic DeckLink API as
//! seen from Rust: COM-style result codes, interface identities, the
//! `#[repr(C)]` virtual method tables of every interface the adapter consumes,
//! and a loader for the vendor dispatch library.
//!
//! ## Overview
//!
//! `decklink-sys` exposes:
//! - Base COM types (`HRESULT`, `ULONG`, [`REFIID`]) and result codes
//! - Interface structs (`IDeckLinkInput`, `IDeckLinkVideoFrame`, ...) whose only
//!   field is a pointer to their vtable
//! - Interface identities (`IID_*`) and a representative set of `BMD*` constants
//! - [`DeckLinkApi`], which opens `libDeckLinkAPI` at runtime through
//!   `libloading` and resolves the dispatch entry points
//!
//! ## Usage
//!
//! **Most users should NOT use this crate directly.** Use the [`decklink`]
//! crate instead, which provides the flat C surface, callback objects, string
//! marshaling and RAII wrappers.
//!
//! ## Safety
//!
//! Every vtable entry is an `unsafe extern "system"` function. Callers must:
//! - Pass a live interface pointer as `this`
//! - Honor the intrusive reference count (`AddRef`/`Release` pairs)
//! - Treat out-parameters as owned references on success
//!
//! ## Platform support
//!
//! Linux and macOS only. Both use the Itanium C++ ABI, pass `REFIID` by value
//! and share the same result code values.
//!
//! [`decklink`]: https://docs.rs/decklink

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]

extern crate libloading;

mod constants;
mod dispatch;
mod iid;
mod interfaces;
mod types;

pub use constants::*;
pub use dispatch::*;
pub use iid::*;
pub use interfaces::*;
pub use types::*;
