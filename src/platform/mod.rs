//! Host platform control: desktop vs. embedded device, and reboot.

use crate::model::PlatformError;
use serde::Deserialize;
use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

/// Marker file present on embedded devices.
pub const DEVICE_MARKER: &str = "/TICI";

/// Host capabilities the viewer needs.
pub trait Platform: Send {
    /// Whether this is a desktop-class host (the action button exits
    /// instead of rebooting).
    fn is_pc(&self) -> bool;

    /// Reboot the host.
    fn reboot(&self) -> Result<(), PlatformError>;
}

impl<P: Platform + ?Sized> Platform for Box<P> {
    fn is_pc(&self) -> bool {
        (**self).is_pc()
    }

    fn reboot(&self) -> Result<(), PlatformError> {
        (**self).reboot()
    }
}

/// Kind of host, selectable from config, env or CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    /// Desktop-class host.
    Pc,
    /// Embedded device.
    Device,
}

impl PlatformKind {
    /// `Device` when the device marker file exists, `Pc` otherwise.
    pub fn detect() -> Self {
        Self::detect_at(Path::new(DEVICE_MARKER))
    }

    fn detect_at(marker: &Path) -> Self {
        if marker.exists() {
            PlatformKind::Device
        } else {
            PlatformKind::Pc
        }
    }

    /// Concrete platform for this kind.
    pub fn into_platform(self) -> Box<dyn Platform> {
        match self {
            PlatformKind::Pc => Box::new(DesktopPlatform),
            PlatformKind::Device => Box::new(DevicePlatform::default()),
        }
    }
}

/// Desktop host. Rebooting is refused with a warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopPlatform;

impl Platform for DesktopPlatform {
    fn is_pc(&self) -> bool {
        true
    }

    fn reboot(&self) -> Result<(), PlatformError> {
        warn!("Reboot requested on a desktop host, ignoring");
        Ok(())
    }
}

/// Embedded device, rebooted through a system command.
#[derive(Debug, Clone)]
pub struct DevicePlatform {
    program: String,
    args: Vec<String>,
}

impl Default for DevicePlatform {
    fn default() -> Self {
        Self::with_command("sudo", ["reboot"])
    }
}

impl DevicePlatform {
    /// Device rebooted by running `program args...`.
    pub fn with_command<I, A>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Platform for DevicePlatform {
    fn is_pc(&self) -> bool {
        false
    }

    fn reboot(&self) -> Result<(), PlatformError> {
        let command = self.command_line();
        info!(command = %command, "Rebooting device");
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|source| PlatformError::RebootSpawn {
                command: command.clone(),
                source,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(PlatformError::RebootFailed { command, status })
        }
    }
}
