use serde::{Deserialize, Serialize};

use crate::DeviceTier;

/// A snapshot of the most relevant detections for a device,
/// as produced by [`Classifier::profile`](crate::Classifier::profile).
///
/// Meant to be logged or handed over to templates,
/// the [`Classifier`](crate::Classifier) remains the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// The detected [`DeviceTier`].
    pub tier: DeviceTier,
    /// Quick mobile detection, excludes tablets.
    pub mobile: bool,
    /// Thorough mobile detection, includes game consoles and older devices.
    pub mobile_long: bool,
    pub smartphone: bool,
    pub webkit: bool,
    pub ios: bool,
    pub android: bool,
    pub windows_phone: bool,
    pub blackberry: bool,
    pub smart_tv: bool,
    pub game_console: bool,
}
