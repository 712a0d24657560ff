//! Blocking client for the OpenRazer daemon on the session bus.

use log::{debug, warn};
use zbus::blocking::Connection;

pub mod device;
pub mod error;
pub mod zbus_daemon;
pub mod zbus_device;

pub use device::RazerDevice;
use error::Result;
use zbus_daemon::{DaemonProxyBlocking, DevicesProxyBlocking};

pub const DBUS_NAME: &str = "org.razer";
pub const DBUS_PATH: &str = "/org/razer";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Connection plus the daemon level proxies. Devices are created on demand
/// with `devices()`.
pub struct RazerDbusClientBlocking<'a> {
    daemon: DaemonProxyBlocking<'a>,
    devices: DevicesProxyBlocking<'a>,
    conn: Connection,
}

impl<'a> RazerDbusClientBlocking<'a> {
    pub fn new() -> Result<Self> {
        let conn = Connection::session()?;
        Ok(RazerDbusClientBlocking {
            daemon: DaemonProxyBlocking::new(&conn)?,
            devices: DevicesProxyBlocking::new(&conn)?,
            conn,
        })
    }

    pub fn daemon_version(&self) -> Result<String> {
        Ok(self.daemon.version()?)
    }

    /// Every device the daemon reports, in the daemon's order. A device whose
    /// proxies can't be built is logged and skipped.
    pub fn devices(&self) -> Result<Vec<RazerDevice>> {
        let serials = self.devices.get_devices()?;
        debug!("Daemon reports {} device(s): {serials:?}", serials.len());

        let mut devices = Vec::with_capacity(serials.len());
        for serial in serials {
            match RazerDevice::new(&self.conn, &serial) {
                Ok(dev) => devices.push(dev),
                Err(e) => warn!("Could not create proxies for {serial}: {e}"),
            }
        }
        Ok(devices)
    }
}
