// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Runtime loader for the vendor dispatch library.
//!
//! The DeckLink driver ships `libDeckLinkAPI.so` (Linux) or the
//! `DeckLinkAPI.framework` bundle (macOS). Both export versioned factory entry
//! points which are resolved here once, when the library is opened.

use std::ffi::OsStr;

use crate::*;

pub type CreateDeckLinkIteratorInstanceFn = unsafe extern "C" fn() -> *mut IDeckLinkIterator;
pub type CreateDeckLinkAPIInformationInstanceFn =
    unsafe extern "C" fn() -> *mut IDeckLinkAPIInformation;
pub type CreateVideoConversionInstanceFn = unsafe extern "C" fn() -> *mut IDeckLinkVideoConversion;

/// An opened dispatch library with its resolved entry points.
///
/// The library stays loaded for as long as this value lives. Every object
/// created through it must be released before it is dropped.
pub struct DeckLinkApi {
    __library: libloading::Library,
    pub CreateDeckLinkIteratorInstance: CreateDeckLinkIteratorInstanceFn,
    pub CreateDeckLinkAPIInformationInstance: CreateDeckLinkAPIInformationInstanceFn,
    pub CreateVideoConversionInstance: CreateVideoConversionInstanceFn,
}

impl DeckLinkApi {
    /// Opens the library at `path` and resolves all entry points.
    ///
    /// # Safety
    ///
    /// Loading a library runs its initialisers; `path` must name a genuine
    /// DeckLink dispatch library.
    pub unsafe fn new<P>(path: P) -> Result<Self, libloading::Error>
    where
        P: AsRef<OsStr>,
    {
        let library = unsafe { libloading::Library::new(path) }?;
        unsafe { Self::from_library(library) }
    }

    /// Resolves the entry points from an already opened library.
    ///
    /// # Safety
    ///
    /// The exported symbols must have the signatures declared in this module.
    pub unsafe fn from_library<L>(library: L) -> Result<Self, libloading::Error>
    where
        L: Into<libloading::Library>,
    {
        let __library = library.into();
        let CreateDeckLinkIteratorInstance = unsafe {
            __library.get::<CreateDeckLinkIteratorInstanceFn>(b"CreateDeckLinkIteratorInstance_0003\0")
        }
        .map(|sym| *sym)?;
        let CreateDeckLinkAPIInformationInstance = unsafe {
            __library.get::<CreateDeckLinkAPIInformationInstanceFn>(
                b"CreateDeckLinkAPIInformationInstance_0001\0",
            )
        }
        .map(|sym| *sym)?;
        let CreateVideoConversionInstance = unsafe {
            __library
                .get::<CreateVideoConversionInstanceFn>(b"CreateVideoConversionInstance_0001\0")
        }
        .map(|sym| *sym)?;
        Ok(DeckLinkApi {
            __library,
            CreateDeckLinkIteratorInstance,
            CreateDeckLinkAPIInformationInstance,
            CreateVideoConversionInstance,
        })
    }

    /// Returns a new device iterator, or null if no driver is installed.
    pub unsafe fn create_decklink_iterator_instance(&self) -> *mut IDeckLinkIterator {
        unsafe { (self.CreateDeckLinkIteratorInstance)() }
    }

    pub unsafe fn create_decklink_api_information_instance(&self) -> *mut IDeckLinkAPIInformation {
        unsafe { (self.CreateDeckLinkAPIInformationInstance)() }
    }

    pub unsafe fn create_video_conversion_instance(&self) -> *mut IDeckLinkVideoConversion {
        unsafe { (self.CreateVideoConversionInstance)() }
    }
}
