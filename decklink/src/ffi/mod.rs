// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! The flat C surface.
//!
//! Every function here forwards to exactly one native virtual method (or
//! dispatch entry point) and returns its result unchanged. Interface
//! pointers are opaque handles carrying one reference each; string results
//! are returned as owned [`Buffer`](crate::Buffer)s that the caller releases
//! with [`buffer_release`].
//!
//! All functions are exported unmangled from the `cdylib` build.
//!
//! # Safety
//!
//! Callers must pass live interface pointers of the declared type and valid
//! out-parameter locations. Nothing is checked beyond what the native
//! methods check themselves.

/// Calls a vtable method: `vcall!(this, Method, args...)`.
macro_rules! vcall {
    ($this:expr, $method:ident $(, $arg:expr)* $(,)?) => {{
        let this = $this;
        ((*(*this).vtbl).$method)(this $(, $arg)*)
    }};
}

mod buffer;
mod callback;
mod device;
mod display_mode;
mod frame;
mod input;
mod output;
mod runtime;
mod unknown;

pub use buffer::*;
pub use callback::*;
pub use device::*;
pub use display_mode::*;
pub use frame::*;
pub use input::*;
pub use output::*;
pub use runtime::*;
pub use unknown::*;
