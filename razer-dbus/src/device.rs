use log::debug;
use razer_fx::device::LightingDevice;
use razer_fx::error::Error as FxError;
use razer_fx::Brightness;
use zbus::blocking::Connection;

use crate::error::Error;
use crate::zbus_device::{
    LightingBrightnessProxyBlocking, LightingChromaProxyBlocking, MiscProxyBlocking,
};

pub const DEVICE_PATH_PREFIX: &str = "/org/razer/device";

pub fn device_path(serial: &str) -> String {
    format!("{DEVICE_PATH_PREFIX}/{serial}")
}

/// One device managed by the daemon, addressed by serial number
pub struct RazerDevice {
    serial: String,
    misc: MiscProxyBlocking<'static>,
    brightness: LightingBrightnessProxyBlocking<'static>,
    chroma: LightingChromaProxyBlocking<'static>,
}

impl RazerDevice {
    pub fn new(conn: &Connection, serial: &str) -> Result<Self, Error> {
        let path = device_path(serial);
        debug!("Creating proxies for {path}");
        Ok(Self {
            serial: serial.to_owned(),
            misc: MiscProxyBlocking::builder(conn)
                .path(path.clone())?
                .build()?,
            brightness: LightingBrightnessProxyBlocking::builder(conn)
                .path(path.clone())?
                .build()?,
            chroma: LightingChromaProxyBlocking::builder(conn)
                .path(path)?
                .build()?,
        })
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }
}

fn device_err(e: zbus::Error) -> FxError {
    Error::from(e).into()
}

impl LightingDevice for RazerDevice {
    fn device_type(&self) -> Result<String, FxError> {
        self.misc.device_type().map_err(device_err)
    }

    fn name(&self) -> Result<String, FxError> {
        self.misc.device_name().map_err(device_err)
    }

    fn keyboard_layout(&self) -> Result<String, FxError> {
        self.misc.keyboard_layout().map_err(device_err)
    }

    fn brightness(&self) -> Result<f64, FxError> {
        self.brightness.brightness().map_err(device_err)
    }

    fn set_brightness(&self, brightness: Brightness) -> Result<(), FxError> {
        self.brightness
            .set_brightness(brightness.value())
            .map_err(device_err)
    }

    fn matrix_dimensions(&self) -> Result<(usize, usize), FxError> {
        if !self.misc.has_matrix().map_err(device_err)? {
            return Err(FxError::Device(format!(
                "{} has no addressable lighting matrix",
                self.serial
            )));
        }
        let dims = self.misc.matrix_dimensions().map_err(device_err)?;
        parse_dimensions(&dims).map_err(FxError::from)
    }

    fn set_key_row(&self, payload: &[u8]) -> Result<(), FxError> {
        self.chroma.set_key_row(payload).map_err(device_err)
    }

    fn set_custom(&self) -> Result<(), FxError> {
        self.chroma.set_custom().map_err(device_err)
    }
}

fn parse_dimensions(dims: &[i32]) -> Result<(usize, usize), Error> {
    match dims {
        [rows, cols] if *rows >= 0 && *cols >= 0 => Ok((*rows as usize, *cols as usize)),
        _ => Err(Error::BadReply(format!("matrix dimensions {dims:?}"))),
    }
}
