use zbus::proxy;

#[proxy(
    interface = "razer.devices",
    default_service = "org.razer",
    default_path = "/org/razer"
)]
pub trait Devices {
    /// Serial numbers of every device the daemon manages
    #[zbus(name = "getDevices")]
    fn get_devices(&self) -> zbus::Result<Vec<String>>;
}

#[proxy(
    interface = "razer.daemon",
    default_service = "org.razer",
    default_path = "/org/razer"
)]
pub trait Daemon {
    #[zbus(name = "version")]
    fn version(&self) -> zbus::Result<String>;
}
