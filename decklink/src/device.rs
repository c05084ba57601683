// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Device discovery.
//!
//! [`DeviceIterator`] walks the DeckLink devices installed in the machine.
//! Each [`Device`] can be asked for its facets: [`Attributes`], [`Status`],
//! [`Input`] and [`Output`].

use decklink_sys::{IDeckLink, IDeckLinkIterator, S_OK};

use crate::{
    Attributes, Error, Input, Output, Result, Status,
    api::DeckLinkApiHandle,
    buffer::{Buffer, take_string},
    ffi,
    unknown::ComPtr,
};

/// Iterates over the installed devices.
///
/// # Examples
///
/// ```no_run
/// use decklink::DeviceIterator;
///
/// # fn main() -> Result<(), decklink::Error> {
/// for device in DeviceIterator::new()? {
///     println!("{}", device.get_display_name()?.unwrap_or_default());
/// }
/// # Ok(())
/// # }
/// ```
pub struct DeviceIterator {
    iterator: ComPtr<IDeckLinkIterator>,
    api: Option<DeckLinkApiHandle>,
}

impl DeviceIterator {
    /// Creates an iterator through the process-wide library instance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Other`] if the library or driver is not installed.
    pub fn new() -> Result<Self> {
        let iterator = unsafe { ffi::create_decklink_iterator_instance() };
        Self::from_created(iterator, None)
    }

    /// Creates an iterator through an explicitly loaded library. The library
    /// stays loaded while the iterator or any device it yields is alive.
    pub fn with_api(api: DeckLinkApiHandle) -> Result<Self> {
        let iterator = unsafe { api.create_decklink_iterator_instance() };
        Self::from_created(iterator, Some(api))
    }

    fn from_created(iterator: *mut IDeckLinkIterator, api: Option<DeckLinkApiHandle>) -> Result<Self> {
        let iterator = unsafe { ComPtr::from_raw(iterator) }.ok_or_else(|| {
            Error::Other(
                "unable to create DeckLink iterator; the DeckLink drivers may need to be installed"
                    .to_string(),
            )
        })?;
        Ok(DeviceIterator { iterator, api })
    }
}

impl Iterator for DeviceIterator {
    type Item = Device;

    fn next(&mut self) -> Option<Device> {
        let mut device: *mut IDeckLink = std::ptr::null_mut();
        let result = unsafe { ffi::decklink_iterator_next(self.iterator.as_raw(), &mut device) };
        if result != S_OK {
            return None;
        }
        let device = unsafe { ComPtr::from_raw(device) }?;
        Some(Device {
            device,
            _api: self.api.clone(),
        })
    }
}

/// One DeckLink device (or sub-device of a multi-channel card).
pub struct Device {
    device: ComPtr<IDeckLink>,
    _api: Option<DeckLinkApiHandle>,
}

impl Device {
    /// Wraps a device reference obtained elsewhere.
    pub fn from_ptr(device: ComPtr<IDeckLink>) -> Self {
        Device { device, _api: None }
    }

    pub fn as_ptr(&self) -> &ComPtr<IDeckLink> {
        &self.device
    }

    fn get_string(
        &self,
        getter: unsafe extern "C" fn(*mut IDeckLink, *mut *mut Buffer) -> decklink_sys::HRESULT,
    ) -> Result<Option<String>> {
        let mut buffer: *mut Buffer = std::ptr::null_mut();
        Error::from_result(unsafe { getter(self.device.as_raw(), &mut buffer) })?;
        Ok(unsafe { take_string(buffer) })
    }

    /// The hardware model, e.g. "DeckLink Mini Recorder".
    pub fn get_model_name(&self) -> Result<Option<String>> {
        self.get_string(ffi::decklink_get_model_name)
    }

    /// The model name plus a distinguishing suffix when several identical
    /// cards are installed. `None` if the driver reports no name.
    pub fn get_display_name(&self) -> Result<Option<String>> {
        self.get_string(ffi::decklink_get_display_name)
    }

    pub fn query_attributes(&self) -> Result<Attributes> {
        self.device.query().map(Attributes::from_ptr)
    }

    pub fn query_status(&self) -> Result<Status> {
        self.device.query().map(Status::from_ptr)
    }

    /// # Errors
    ///
    /// Returns [`Error::NoInterface`] for playback-only devices.
    pub fn query_input(&self) -> Result<Input> {
        self.device.query().map(Input::from_ptr)
    }

    /// # Errors
    ///
    /// Returns [`Error::NoInterface`] for capture-only devices.
    pub fn query_output(&self) -> Result<Output> {
        self.device.query().map(Output::from_ptr)
    }
}
