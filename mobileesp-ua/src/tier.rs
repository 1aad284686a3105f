use mobileesp_error::OpaqueError;
use mobileesp_utils::macros::match_ignore_ascii_case_str;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// Device tier, used to select the content variant
/// which suits the capabilities of a device.
///
/// See [`Classifier::tier`](crate::Classifier::tier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceTier {
    /// HTML5 capable, larger screen tablets.
    Tablet,
    /// Touchscreen smartphones which can display iPhone-optimized content.
    Iphone,
    /// Mobile devices capable of rich CSS,
    /// but not necessarily of (much) JavaScript.
    RichCss,
    /// All other, less capable, mobile phones.
    OtherPhone,
    /// Not a mobile device (as far as we can tell).
    Desktop,
}

impl DeviceTier {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tablet => "tablet",
            Self::Iphone => "iphone",
            Self::RichCss => "rich-css",
            Self::OtherPhone => "other-phone",
            Self::Desktop => "desktop",
        }
    }

    /// returns `true` for all tiers but [`DeviceTier::Desktop`].
    #[must_use]
    pub fn is_mobile(self) -> bool {
        !matches!(self, Self::Desktop)
    }
}

impl fmt::Display for DeviceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeviceTier {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "tablet" => Ok(Self::Tablet),
                "iphone" | "smartphone" => Ok(Self::Iphone),
                "rich-css" | "rich_css" | "richcss" => Ok(Self::RichCss),
                "other-phone" | "other_phone" | "other" | "generic" => Ok(Self::OtherPhone),
                "desktop" => Ok(Self::Desktop),
                _ => Err(OpaqueError::from_display(format!("invalid device tier: {s}"))),
            }
        }
    }
}

impl Serialize for DeviceTier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeviceTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// Information that can be used to overwrite the [`DeviceTier`]
/// that is detected for a request.
///
/// Typically received as the query string of a request,
/// e.g. `?tier=tablet`, in order to preview the content
/// variant of another tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierOverwrites {
    /// Use this [`DeviceTier`] instead of the detected one.
    pub tier: Option<DeviceTier>,
}

impl TierOverwrites {
    /// Parse [`TierOverwrites`] from an url-encoded query string or form body.
    ///
    /// Unknown keys are ignored.
    pub fn from_query(query: &str) -> Result<Self, OpaqueError> {
        serde_html_form::from_str(query).map_err(|err| {
            tracing::debug!("invalid tier overwrites '{query}': {err}");
            OpaqueError::from_std(err)
        })
    }
}
