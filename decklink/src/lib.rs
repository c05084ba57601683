// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! # DeckLink - capture and playback adapter
//!
//! An adapter between the Blackmagic DeckLink runtime's COM-style object model
//! and callers that cannot consume virtual-dispatch interfaces directly.
//!
//! ## Overview
//!
//! The DeckLink runtime hands out reference-counted native objects (devices,
//! inputs, outputs, frames) and expects notification sinks in return. This
//! crate bridges both directions:
//!
//! - **Flat surface** ([`ffi`]): plain `extern "C"` functions, exported from
//!   the shared library, each forwarding to one native method.
//! - **Owned buffers** ([`Buffer`]): native strings converted to UTF-8 with a
//!   single owner and an explicit release.
//! - **Callback objects** ([`callback`]): heap cells the runtime treats as
//!   `IDeckLinkInputCallback` / `IDeckLinkVideoOutputCallback` instances and
//!   which forward every notification to a table of external functions.
//! - **Safe layer**: RAII wrappers ([`DeviceIterator`], [`Input`],
//!   [`Output`], ...) built on the flat surface for Rust callers.
//!
//! ### Ownership
//!
//! Native objects are owned through their intrusive reference count. A
//! [`ComPtr`] holds exactly one reference and releases it on drop. Callback
//! objects carry their own atomic count and free themselves when the last
//! reference goes away.
//!
//! ## Architecture
//!
//! ```text
//!  caller ──► ffi::decklink_*() ──► vtbl.Method(this, ...) ──► DeckLink runtime
//!                                                                   │
//!  caller ◄── events.fn(identity, ...) ◄── callback object ◄────────┘
//! ```
//!
//! ## Examples
//!
//! ### Listing devices and their display modes
//!
//! ```no_run
//! use decklink::DeviceIterator;
//!
//! # fn main() -> Result<(), decklink::Error> {
//! for device in DeviceIterator::new()? {
//!     println!("{}", device.get_display_name()?.unwrap_or_default());
//!     if let Ok(input) = device.query_input() {
//!         for mode in input.get_display_mode_iterator()? {
//!             let (duration, scale) = mode.get_frame_rate()?;
//!             println!(
//!                 "  {} {}x{} @ {:.2}",
//!                 mode.get_name()?.unwrap_or_default(),
//!                 mode.get_width(),
//!                 mode.get_height(),
//!                 scale as f64 / duration as f64
//!             );
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Loading the library from a custom location
//!
//! ```no_run
//! use decklink::{DeviceIterator, load_api};
//!
//! # fn main() -> Result<(), decklink::Error> {
//! let api = load_api("/opt/blackmagic/lib/libDeckLinkAPI.so")?;
//! let devices = DeviceIterator::with_api(api)?.count();
//! println!("{devices} device(s)");
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! - Native DeckLink objects are free-threaded; wrappers are `Send`
//! - Callback handlers run on runtime threads and must be `Send`
//! - Callback object reference counts are atomic
//!
//! ## Configuration
//!
//! The dispatch library location defaults to the vendor install path and can
//! be overridden with the `DECKLINK_API_PATH` environment variable, at build
//! time or at run time. See [`config`].

mod api;
mod attributes;
mod buffer;
mod conversion;
mod device;
mod display_mode;
mod error;
mod frame;
mod input;
mod output;
mod timecode;
mod types;
mod unknown;

pub mod callback;
pub mod config;
pub mod ffi;
pub mod marshal;

pub use api::{DeckLinkApiHandle, load_api, shared_api};
pub use attributes::{ApiInformation, Attributes, Status};
pub use buffer::{Buffer, take_string};
pub use conversion::VideoConversion;
pub use decklink_sys::DeckLinkApi;
pub use device::{Device, DeviceIterator};
pub use display_mode::{DisplayModeInfo, DisplayModeIterator};
pub use error::{Error, Result};
pub use frame::{AudioInputPacket, MutableVideoFrame, VideoFrame, VideoFrameRef, VideoInputFrame};
pub use input::{Input, InputCallback, InputWithCallback};
pub use output::{Output, OutputWithCallback, VideoOutputCallback};
pub use timecode::{Timecode, TimecodeComponents};
pub use types::*;
pub use unknown::ComPtr;
