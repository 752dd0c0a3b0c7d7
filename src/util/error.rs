use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod {
    pub name: String,
}

impl Display for UnknownMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No method named `{}` in the method table!", self.name)
    }
}

impl StdError for UnknownMethod {}

#[cfg(feature = "delay")]
#[derive(Debug, Display, Error, From)]
#[display("Failed to spawn a timer thread: {_0}")]
pub struct TimerSpawnFailed(#[error(source)] pub std::io::Error);

#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum Error {
    UnknownMethod(UnknownMethod),
    #[cfg(feature = "delay")]
    TimerSpawnFailed(TimerSpawnFailed),
}
