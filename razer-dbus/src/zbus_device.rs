//! Per-device interfaces. Each device lives at `/org/razer/device/<serial>`
//! so these proxies have no default path and must be built with one.

use zbus::proxy;

#[proxy(interface = "razer.device.misc", default_service = "org.razer")]
pub trait Misc {
    /// Device class, e.g. `keyboard`, `mouse`
    #[zbus(name = "getDeviceType")]
    fn device_type(&self) -> zbus::Result<String>;

    #[zbus(name = "getDeviceName")]
    fn device_name(&self) -> zbus::Result<String>;

    #[zbus(name = "getKeyboardLayout")]
    fn keyboard_layout(&self) -> zbus::Result<String>;

    #[zbus(name = "hasMatrix")]
    fn has_matrix(&self) -> zbus::Result<bool>;

    /// `[rows, columns]`
    #[zbus(name = "getMatrixDimensions")]
    fn matrix_dimensions(&self) -> zbus::Result<Vec<i32>>;
}

#[proxy(
    interface = "razer.device.lighting.brightness",
    default_service = "org.razer"
)]
pub trait LightingBrightness {
    #[zbus(name = "getBrightness")]
    fn brightness(&self) -> zbus::Result<f64>;

    #[zbus(name = "setBrightness")]
    fn set_brightness(&self, brightness: f64) -> zbus::Result<()>;
}

#[proxy(interface = "razer.device.lighting.chroma", default_service = "org.razer")]
pub trait LightingChroma {
    /// Upload rows of RGB data, each prefixed by `[row, start_col, end_col]`
    #[zbus(name = "setKeyRow")]
    fn set_key_row(&self, payload: &[u8]) -> zbus::Result<()>;

    /// Show the uploaded rows
    #[zbus(name = "setCustom")]
    fn set_custom(&self) -> zbus::Result<()>;
}
