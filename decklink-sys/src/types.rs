// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Base COM types, result codes and `BMD*` scalar typedefs.

use std::os::raw::{c_long, c_void};

/// Result code returned by every DeckLink method.
pub type HRESULT = i32;

/// Reference count type returned by `AddRef`/`Release`.
#[cfg(target_os = "macos")]
pub type ULONG = u32;
/// Reference count type returned by `AddRef`/`Release`.
#[cfg(not(target_os = "macos"))]
pub type ULONG = std::os::raw::c_ulong;

pub type LPVOID = *mut c_void;

/// Native string type used by string out-parameters.
///
/// On macOS the API hands out a `CFStringRef` the caller must `CFRelease`. On
/// Linux it hands out a `malloc`ed UTF-8 string the caller must `free`.
#[cfg(target_os = "macos")]
pub type DLString = core_foundation_sys::string::CFStringRef;
/// Native string type used by string out-parameters.
///
/// On macOS the API hands out a `CFStringRef` the caller must `CFRelease`. On
/// Linux it hands out a `malloc`ed UTF-8 string the caller must `free`.
#[cfg(not(target_os = "macos"))]
pub type DLString = *const std::os::raw::c_char;

pub const S_OK: HRESULT = 0x0000_0000;
pub const S_FALSE: HRESULT = 0x0000_0001;
pub const E_UNEXPECTED: HRESULT = 0x8000_FFFF_u32 as HRESULT;
pub const E_NOTIMPL: HRESULT = 0x8000_0001_u32 as HRESULT;
pub const E_OUTOFMEMORY: HRESULT = 0x8000_0002_u32 as HRESULT;
pub const E_INVALIDARG: HRESULT = 0x8000_0003_u32 as HRESULT;
pub const E_NOINTERFACE: HRESULT = 0x8000_0004_u32 as HRESULT;
pub const E_POINTER: HRESULT = 0x8000_0005_u32 as HRESULT;
pub const E_HANDLE: HRESULT = 0x8000_0006_u32 as HRESULT;
pub const E_ABORT: HRESULT = 0x8000_0007_u32 as HRESULT;
pub const E_FAIL: HRESULT = 0x8000_0008_u32 as HRESULT;
pub const E_ACCESSDENIED: HRESULT = 0x8000_0009_u32 as HRESULT;

/// Returns `true` for success codes (`S_OK`, `S_FALSE`, ...).
pub const fn SUCCEEDED(result: HRESULT) -> bool {
    result >= 0
}

/// Returns `true` for failure codes.
pub const fn FAILED(result: HRESULT) -> bool {
    result < 0
}

/// Interface identity, passed by value on Linux and macOS.
///
/// The bytes are stored in the order they appear in the textual UUID form,
/// which is the layout of both `REFIID` (LinuxCOM) and `CFUUIDBytes`.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct REFIID {
    pub bytes: [u8; 16],
}

impl REFIID {
    /// Builds an identity from its big-endian 128-bit value.
    ///
    /// `REFIID::from_u128(0x00000000_0000_0000_C000_000000000046)` is
    /// `IID_IUnknown`.
    pub const fn from_u128(value: u128) -> Self {
        Self {
            bytes: value.to_be_bytes(),
        }
    }

    /// Returns the big-endian 128-bit value of this identity.
    pub const fn to_u128(self) -> u128 {
        u128::from_be_bytes(self.bytes)
    }
}

pub type BMDDisplayMode = u32;
pub type BMDPixelFormat = u32;
pub type BMDFieldDominance = u32;
pub type BMDDisplayModeFlags = u32;
pub type BMDDisplayModeSupport_v10_11 = u32;
pub type BMDVideoInputFlags = u32;
pub type BMDVideoOutputFlags = u32;
pub type BMDFrameFlags = u32;
pub type BMDVideoInputFormatChangedEvents = u32;
pub type BMDDetectedVideoInputFormatFlags = u32;
pub type BMDOutputFrameCompletionResult = u32;
pub type BMDReferenceStatus = u32;
pub type BMDAudioSampleRate = u32;
pub type BMDAudioSampleType = u32;
pub type BMDAudioOutputStreamType = u32;
pub type BMDTimecodeFormat = u32;
pub type BMDTimecodeFlags = u32;
pub type BMDTimecodeBCD = u32;
pub type BMDTimecodeUserBits = u32;
pub type BMDDeckLinkAttributeID = u32;
pub type BMDDeckLinkStatusID = u32;
pub type BMDDeckLinkAPIInformationID = u32;
pub type BMDTimeValue = i64;
pub type BMDTimeScale = i64;

/// `long` as used by frame and display mode dimension getters.
pub type LONG = c_long;
