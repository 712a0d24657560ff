use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Zbus(zbus::Error),
    Fdo(zbus::fdo::Error),
    /// The daemon answered but reported something unusable
    BadReply(String),
}

impl fmt::Display for Error {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Zbus(e) => write!(f, "zbus: {e}"),
            Error::Fdo(e) => write!(f, "zbus fdo: {e}"),
            Error::BadReply(deets) => write!(f, "Unexpected reply from daemon: {deets}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<zbus::Error> for Error {
    fn from(err: zbus::Error) -> Self {
        Error::Zbus(err)
    }
}

impl From<zbus::fdo::Error> for Error {
    fn from(err: zbus::fdo::Error) -> Self {
        Error::Fdo(err)
    }
}

impl From<Error> for razer_fx::error::Error {
    fn from(err: Error) -> Self {
        razer_fx::error::Error::Device(err.to_string())
    }
}
