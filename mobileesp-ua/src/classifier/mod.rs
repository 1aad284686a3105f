use std::fmt;

use crate::{DeviceProfile, DeviceTier, TierOverwrites};

mod rules;
use rules::Headers;

/// Classifies the device behind a request,
/// from its `User-Agent` and `Accept` header values.
///
/// Both values are folded to ASCII lowercase once, at construction,
/// and never change afterwards. The most used aggregate detections
/// (webkit, iPhone, Android, Android phone, the tiers and the quick
/// mobile check) are computed eagerly as part of that construction,
/// all other detections are evaluated on demand.
///
/// All detections are total: an empty or malformed header
/// simply results in `false` for everything that needs a match.
///
/// # Example
///
/// ```
/// use mobileesp_ua::{Classifier, DeviceTier};
///
/// let classifier = Classifier::new(
///     "Mozilla/5.0 (Linux; Android 7.0; SM-G930F) AppleWebKit/537.36 Mobile",
///     "",
/// );
///
/// assert!(classifier.detect_android_phone());
/// assert!(classifier.detect_tier_iphone());
/// assert!(!classifier.detect_tier_tablet());
/// assert_eq!(classifier.tier(), DeviceTier::Iphone);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Classifier {
    headers: Headers,
    cache: Cache,
}

/// Results computed once, in this order, by [`Classifier::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
struct Cache {
    webkit: bool,
    iphone: bool,
    android: bool,
    android_phone: bool,
    tier_tablet: bool,
    tier_iphone: bool,
    mobile_quick: bool,
    tier_rich_css: bool,
    tier_other: bool,
}

impl Cache {
    fn scan(headers: &Headers) -> Self {
        let webkit = headers.webkit();
        let iphone = headers.iphone();
        let android = headers.android();
        let android_phone = headers.android_phone();

        let tier_tablet = headers.tier_tablet();
        let tier_iphone = headers.tier_iphone(tier_tablet, iphone || headers.ipod(), android_phone);
        let mobile_quick = headers.mobile_quick(tier_tablet, headers.smartphone(tier_iphone));

        let tier_rich_css = headers.tier_rich_css(mobile_quick, tier_iphone, webkit);
        let tier_other =
            headers.tier_other_phones(headers.mobile_long(mobile_quick), tier_iphone, tier_rich_css);

        Self {
            webkit,
            iphone,
            android,
            android_phone,
            tier_tablet,
            tier_iphone,
            mobile_quick,
            tier_rich_css,
            tier_other,
        }
    }
}

impl Classifier {
    /// Create a new [`Classifier`] from the `User-Agent` and `Accept` (header) values.
    pub fn new(user_agent: impl AsRef<str>, http_accept: impl AsRef<str>) -> Self {
        let headers = Headers::new(user_agent.as_ref(), http_accept.as_ref());
        let cache = Cache::scan(&headers);

        tracing::trace!(
            tier_tablet = cache.tier_tablet,
            tier_iphone = cache.tier_iphone,
            tier_rich_css = cache.tier_rich_css,
            tier_other = cache.tier_other,
            mobile = cache.mobile_quick,
            "classified user agent: {}",
            headers.user_agent,
        );

        Self { headers, cache }
    }

    /// Create a new [`Classifier`] from a `User-Agent` (header) value only,
    /// as if the request came without an `Accept` header.
    pub fn from_user_agent(user_agent: impl AsRef<str>) -> Self {
        Self::new(user_agent, "")
    }

    /// returns the lowercased `User-Agent` (header) value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.headers.user_agent
    }

    /// returns the lowercased `Accept` (header) value.
    #[must_use]
    pub fn http_accept(&self) -> &str {
        &self.headers.http_accept
    }

    /// Detects if the current browser is based on WebKit.
    #[must_use]
    pub fn detect_webkit(&self) -> bool {
        self.cache.webkit
    }

    /// Detects if the current device is an iPhone.
    ///
    /// The iPad and iPod touch also claim to be an iPhone,
    /// these are never reported here.
    #[must_use]
    pub fn detect_iphone(&self) -> bool {
        self.cache.iphone
    }

    /// Detects if the current device is an iPhone or iPod Touch.
    #[must_use]
    pub fn detect_iphone_or_ipod(&self) -> bool {
        self.cache.iphone || self.headers.ipod()
    }

    /// Detects *any* iOS device: iPhone, iPod Touch, iPad.
    #[must_use]
    pub fn detect_ios(&self) -> bool {
        self.detect_iphone_or_ipod() || self.headers.ipad()
    }

    /// Detects *any* Android OS-based device: phone, tablet, and multi-media player.
    /// Also detects Google TV.
    #[must_use]
    pub fn detect_android(&self) -> bool {
        self.cache.android
    }

    /// Detects a (small-ish) Android device used for calling and/or multi-media.
    ///
    /// These have both "android" and "mobile" in their user agent,
    /// or run Opera Mobile / Mini.
    #[must_use]
    pub fn detect_android_phone(&self) -> bool {
        self.cache.android_phone
    }

    /// Checks to see whether the device is *any* 'smartphone'.
    ///
    /// Prefer [`Self::detect_tier_iphone`] for modern touchscreen devices.
    #[must_use]
    pub fn detect_smartphone(&self) -> bool {
        self.headers.smartphone(self.cache.tier_iphone)
    }

    /// The quick way to detect for a mobile device.
    ///
    /// Will probably detect most recent/current mid-tier feature phones
    /// as well as smartphone-class devices. Excludes tablets.
    #[must_use]
    pub fn detect_mobile_quick(&self) -> bool {
        self.cache.mobile_quick
    }

    /// The longer and more thorough way to detect for a mobile device.
    ///
    /// On top of [`Self::detect_mobile_quick`] this catches
    /// game consoles, Internet tablets and plenty of older and more obscure devices.
    #[must_use]
    pub fn detect_mobile_long(&self) -> bool {
        self.headers.mobile_long(self.cache.mobile_quick)
    }

    /// Detects the HTML5 capable, larger screen tablets,
    /// e.g. iPad, Android tablets, BlackBerry PlayBook and WebOS tablets.
    #[must_use]
    pub fn detect_tier_tablet(&self) -> bool {
        self.cache.tier_tablet
    }

    /// Detects devices which can display iPhone-optimized web content,
    /// e.g. iPhone, iPod Touch, Android phones, Windows Phone, BB10 and WebOS.
    ///
    /// Never true for a device in the tablet tier.
    #[must_use]
    pub fn detect_tier_iphone(&self) -> bool {
        self.cache.tier_iphone
    }

    /// Detects devices which are likely to be capable of viewing CSS content
    /// optimized for the iPhone, but may not necessarily support JavaScript.
    ///
    /// Excludes all iPhone tier devices.
    #[must_use]
    pub fn detect_tier_rich_css(&self) -> bool {
        self.cache.tier_rich_css
    }

    /// Detects all other types of (less capable) mobile phones.
    ///
    /// Excludes the iPhone and rich css tier devices.
    #[must_use]
    pub fn detect_tier_other_phones(&self) -> bool {
        self.cache.tier_other
    }

    /// returns the [`DeviceTier`] of the current device.
    ///
    /// Tiers are tried in order: tablet, iPhone, rich css and other phones.
    /// A device which is in none of them is considered [`DeviceTier::Desktop`].
    #[must_use]
    pub fn tier(&self) -> DeviceTier {
        if self.cache.tier_tablet {
            DeviceTier::Tablet
        } else if self.cache.tier_iphone {
            DeviceTier::Iphone
        } else if self.cache.tier_rich_css {
            DeviceTier::RichCss
        } else if self.cache.tier_other {
            DeviceTier::OtherPhone
        } else {
            DeviceTier::Desktop
        }
    }

    /// returns the [`DeviceTier`] of the current device,
    /// unless the [`TierOverwrites`] force a specific one.
    ///
    /// The individual detections are never affected by overwrites.
    #[must_use]
    pub fn tier_with_overwrites(&self, overwrites: &TierOverwrites) -> DeviceTier {
        match overwrites.tier {
            Some(tier) => {
                tracing::debug!(
                    detected = %self.tier(),
                    overwrite = %tier,
                    "device tier overwritten",
                );
                tier
            }
            None => self.tier(),
        }
    }

    /// returns a [`DeviceProfile`] snapshot of the current device.
    #[must_use]
    pub fn profile(&self) -> DeviceProfile {
        DeviceProfile {
            tier: self.tier(),
            mobile: self.cache.mobile_quick,
            mobile_long: self.detect_mobile_long(),
            smartphone: self.detect_smartphone(),
            webkit: self.cache.webkit,
            ios: self.detect_ios(),
            android: self.cache.android,
            windows_phone: self.headers.windows_phone(),
            blackberry: self.headers.blackberry(),
            smart_tv: self.headers.smart_tv(),
            game_console: self.headers.game_console(),
        }
    }
}

macro_rules! detect_via_rules {
    ($($(#[$doc:meta])* $name:ident => $rule:ident),+ $(,)?) => {
        impl Classifier {
            $(
                $(#[$doc])*
                #[must_use]
                pub fn $name(&self) -> bool {
                    self.headers.$rule()
                }
            )+
        }
    };
}

detect_via_rules! {
    /// Detects if the current device is an iPod Touch.
    detect_ipod => ipod,
    /// Detects if the current device is an iPad tablet.
    detect_ipad => ipad,
    /// Detects a (self-reported) Android tablet:
    /// Android without "mobile" in its user agent.
    detect_android_tablet => android_tablet,
    /// Detects an Android device running a WebKit based browser.
    detect_android_webkit => android_webkit,
    /// Detects a GoogleTV.
    detect_google_tv => google_tv,

    /// Detects a Windows Phone 7, 8 or 10 device.
    detect_windows_phone => windows_phone,
    /// Detects a Windows Phone 7 device.
    detect_windows_phone_7 => windows_phone_7,
    /// Detects a Windows Phone 8 device.
    detect_windows_phone_8 => windows_phone_8,
    /// Detects a Windows Phone 10 device.
    detect_windows_phone_10 => windows_phone_10,
    /// Detects a Windows Mobile device, 6.x and earlier.
    ///
    /// Excludes any Windows Phone device.
    detect_windows_mobile => windows_mobile,

    /// Detects any BlackBerry, including the PlayBook.
    detect_blackberry => blackberry,
    /// Detects a BlackBerry 10 OS phone. Excludes the PlayBook.
    detect_blackberry_10_phone => blackberry_10_phone,
    /// Detects a BlackBerry tablet, e.g. the PlayBook.
    detect_blackberry_tablet => blackberry_tablet,
    /// Detects a BlackBerry with a WebKit based browser (BlackBerry OS 6 and later).
    detect_blackberry_webkit => blackberry_webkit,
    /// Detects a BlackBerry touch device, such as the Storm, Torch and Bold Touch.
    detect_blackberry_touch => blackberry_touch,
    /// Detects a BlackBerry OS 5 device with the more capable browser.
    ///
    /// Excludes the WebKit browser of BlackBerry OS 6 and 7.
    detect_blackberry_high => blackberry_high,
    /// Detects a BlackBerry with an older, less capable browser,
    /// e.g. Pearl, 8800 or Curve 1.
    detect_blackberry_low => blackberry_low,

    /// Detects the Symbian S60 Open Source Browser.
    detect_s60_oss_browser => s60_oss_browser,
    /// Detects any Symbian OS-based device,
    /// including older S60, Series 70, Series 80, Series 90 and UIQ.
    detect_symbian_os => symbian_os,

    /// Detects a PalmOS device. Excludes WebOS.
    detect_palm_os => palm_os,
    /// Detects a Palm device running WebOS, e.g. the Pre or Pixi.
    detect_palm_webos => palm_webos,
    /// Detects an HP tablet running WebOS.
    detect_webos_tablet => webos_tablet,
    /// Detects a WebOS smart TV.
    detect_webos_tv => webos_tv,

    /// Detects Opera Mobile or Opera Mini.
    detect_opera_mobile => opera_mobile,
    /// Detects an Amazon Kindle, the e-ink ones only.
    ///
    /// The Kindle Fire is detected via the Android detections.
    detect_kindle => kindle,
    /// Detects the accelerated Silk browser, typically used by the Kindle Fire.
    detect_amazon_silk => amazon_silk,

    /// Detects the Garmin Nuvifone.
    detect_garmin_nuvifone => garmin_nuvifone,
    /// Detects a device running Samsung's Bada OS.
    detect_bada => bada,
    /// Detects a device running the Tizen smartphone OS.
    detect_tizen => tizen,
    /// Detects a smart TV running Tizen.
    detect_tizen_tv => tizen_tv,
    /// Detects any Meego OS device.
    detect_meego => meego,
    /// Detects a phone running the Meego OS.
    detect_meego_phone => meego_phone,
    /// Detects a mobile device (probably) running Firefox OS.
    detect_firefox_os => firefox_os,
    /// Detects a phone (probably) running Firefox OS.
    detect_firefox_os_phone => firefox_os_phone,
    /// Detects a tablet (probably) running Firefox OS.
    detect_firefox_os_tablet => firefox_os_tablet,
    /// Detects a device running the Sailfish OS.
    detect_sailfish => sailfish,
    /// Detects a phone running the Sailfish OS.
    detect_sailfish_phone => sailfish_phone,
    /// Detects a mobile device running the Ubuntu Mobile OS.
    detect_ubuntu => ubuntu,
    /// Detects a phone running the Ubuntu Mobile OS.
    detect_ubuntu_phone => ubuntu_phone,
    /// Detects a tablet running the Ubuntu Mobile OS.
    detect_ubuntu_tablet => ubuntu_tablet,
    /// Detects a smart TV: Tizen TV, WebOS TV or GoogleTV.
    detect_smart_tv => smart_tv,

    /// Detects the Danger Hiptop device.
    detect_danger_hiptop => danger_hiptop,
    /// Detects the Sony Mylo device.
    detect_sony_mylo => sony_mylo,
    /// Detects one of the Maemo-based Nokia Internet Tablets.
    detect_maemo_tablet => maemo_tablet,
    /// Detects an Archos media player/Internet tablet.
    detect_archos => archos,
    /// Detects an Internet-capable game console.
    detect_game_console => game_console,
    /// Detects a Sony Playstation.
    detect_sony_playstation => sony_playstation,
    /// Detects a handheld gaming device with a touchscreen
    /// and an iPhone-class browser, e.g. the Playstation Vita.
    detect_gaming_handheld => gaming_handheld,
    /// Detects a Nintendo game device, e.g. the Wii or DS.
    detect_nintendo => nintendo,
    /// Detects a Microsoft Xbox.
    detect_xbox => xbox,
    /// Detects a Brew-powered device.
    detect_brew_device => brew_device,
    /// Detects whether the device supports WAP or WML.
    detect_wap_wml => wap_wml,
    /// Detects whether the device supports MIDP, a mobile Java technology.
    detect_midp_capable => midp_capable,
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("user_agent", &self.headers.user_agent)
            .field("http_accept", &self.headers.http_accept)
            .field("cache", &self.cache)
            .finish()
    }
}

impl fmt::Display for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headers.user_agent)
    }
}
