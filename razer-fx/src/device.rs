//! The seam between the key matrix and whatever backend owns the hardware.
//! The OpenRazer D-Bus client implements `LightingDevice`, tests use a mock.

use log::{debug, info, warn};

use crate::brightness::Brightness;
use crate::error::Error;
use crate::matrix::KeyboardMatrix;

/// The only keyboard this tool knows the layout of
pub const TARGET_NAME: &str = "Razer BlackWidow 2019";
pub const TARGET_LAYOUT: &str = "en_US";

pub trait LightingDevice {
    /// Device class as reported by the daemon, e.g. `keyboard`
    fn device_type(&self) -> Result<String, Error>;

    fn name(&self) -> Result<String, Error>;

    fn keyboard_layout(&self) -> Result<String, Error>;

    fn brightness(&self) -> Result<f64, Error>;

    fn set_brightness(&self, brightness: Brightness) -> Result<(), Error>;

    /// `(rows, columns)` of the per-key lighting matrix
    fn matrix_dimensions(&self) -> Result<(usize, usize), Error>;

    /// Upload a frame encoded with `Frame::to_binary`. Nothing is shown
    /// until `set_custom()` is called.
    fn set_key_row(&self, payload: &[u8]) -> Result<(), Error>;

    /// Switch to the custom effect, drawing the last uploaded frame
    fn set_custom(&self) -> Result<(), Error>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetKeyboard {
    pub name: &'static str,
    pub layout: &'static str,
}

impl Default for TargetKeyboard {
    fn default() -> Self {
        Self {
            name: TARGET_NAME,
            layout: TARGET_LAYOUT,
        }
    }
}

impl TargetKeyboard {
    /// A device that cannot report its name or layout never matches
    pub fn matches(&self, device: &dyn LightingDevice) -> bool {
        let name = match device.name() {
            Ok(name) => name,
            Err(e) => {
                debug!("Skipping device, could not read name: {e}");
                return false;
            }
        };
        if name != self.name {
            return false;
        }
        match device.keyboard_layout() {
            Ok(layout) => layout == self.layout,
            Err(e) => {
                debug!("Skipping {name}, could not read keyboard layout: {e}");
                false
            }
        }
    }
}

/// A snapshot of the properties printed by `device_info`
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceInfo {
    pub device_type: String,
    pub name: String,
    pub keyboard_layout: String,
    pub brightness: f64,
}

impl DeviceInfo {
    pub fn read(device: &dyn LightingDevice) -> Result<Self, Error> {
        Ok(Self {
            device_type: device.device_type()?,
            name: device.name()?,
            keyboard_layout: device.keyboard_layout()?,
            brightness: device.brightness()?,
        })
    }
}

/// Read every device in order. A device that fails to answer yields an
/// `Err` in its slot and does not stop the devices after it being read.
pub fn read_device_infos<D: LightingDevice>(devices: &[D]) -> Vec<Result<DeviceInfo, Error>> {
    devices.iter().map(|d| DeviceInfo::read(d)).collect()
}

/// Apply the advanced (per-key) effect to every device that matches
/// `target`, returning how many devices were written to.
///
/// For each match the brightness is set first if given, then the full frame
/// is uploaded and drawn.
pub fn apply_advanced_fx<D: LightingDevice>(
    devices: &[D],
    target: &TargetKeyboard,
    matrix: &KeyboardMatrix,
    brightness: Option<Brightness>,
) -> Result<usize, Error> {
    let mut applied = 0;
    for device in devices.iter().filter(|d| target.matches(*d)) {
        if let Some(brightness) = brightness {
            info!("Setting brightness to {brightness}");
            device.set_brightness(brightness)?;
        }

        let (rows, cols) = device.matrix_dimensions()?;
        let frame = matrix.to_frame(rows, cols)?;
        device.set_key_row(&frame.to_binary())?;
        device.set_custom()?;
        applied += 1;
    }

    if applied == 0 {
        warn!(
            "No {} ({}) keyboard found, nothing applied",
            target.name, target.layout
        );
    } else {
        info!("Applied advanced effect to {applied} device(s)");
    }
    Ok(applied)
}
