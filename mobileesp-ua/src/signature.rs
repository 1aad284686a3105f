//! Signature tokens.
//!
//! Every token is a lowercase ASCII substring known to show up in the
//! `User-Agent` (or for a few of them the `Accept`) header of a specific
//! device family, operating system, browser engine, manufacturer or carrier.
//!
//! The table is a stable contract: tokens can be added for new families,
//! existing ones are not renamed.

/// WebKit based browser engines.
pub const WEBKIT: &str = "webkit";

pub const IPHONE: &str = "iphone";
pub const IPOD: &str = "ipod";
pub const IPAD: &str = "ipad";
/// Old Macintosh PowerPC, used to tell it apart from PocketPC.
pub const MAC_PPC: &str = "macintosh";

pub const ANDROID: &str = "android";
pub const GOOGLE_TV: &str = "googletv";

pub const WIN_PHONE_7: &str = "windows phone os 7";
pub const WIN_PHONE_8: &str = "windows phone 8";
pub const WIN_PHONE_10: &str = "windows phone 10";
/// Windows Mobile 6.x and earlier.
pub const WIN_MOB: &str = "windows ce";
pub const WINDOWS: &str = "windows";
pub const IE_MOB: &str = "iemobile";
/// PocketPC
pub const PPC: &str = "ppc";
/// An old Windows Mobile browser (Pocket IE).
pub const PIE: &str = "wm5 pie";

pub const BB: &str = "blackberry";
/// BlackBerry 10 OS.
pub const BB10: &str = "bb10";
/// Found in the `Accept` header when a BlackBerry emulates IE or Firefox.
pub const VND_RIM: &str = "vnd.rim";
/// Storm 1 and 2
pub const BB_STORM: &str = "blackberry95";
/// Bold 97x0 (non-touch)
pub const BB_BOLD: &str = "blackberry97";
/// Bold 99x0 (touchscreen)
pub const BB_BOLD_TOUCH: &str = "blackberry 99";
pub const BB_TOUR: &str = "blackberry96";
/// Curve 2
pub const BB_CURVE: &str = "blackberry89";
/// Curve Touch 9380
pub const BB_CURVE_TOUCH: &str = "blackberry 938";
pub const BB_TORCH: &str = "blackberry 98";
/// PlayBook tablet
pub const BB_PLAYBOOK: &str = "playbook";

pub const SYMBIAN: &str = "symbian";
pub const S60: &str = "series60";
pub const S70: &str = "series70";
pub const S80: &str = "series80";
pub const S90: &str = "series90";

pub const PALM: &str = "palm";
/// Palm WebOS devices.
pub const WEBOS: &str = "webos";
/// LG WebOS smart TVs (note the zero).
pub const WEBOS_TV: &str = "web0s";
/// HP's line of WebOS devices.
pub const WEBOS_HP: &str = "hpwos";

/// Old Palm browser.
pub const BLAZER: &str = "blazer";
/// Another old Palm browser.
pub const XIINO: &str = "xiino";

/// Garmin Nuvifone
pub const NUVIFONE: &str = "nuvifone";
/// Samsung's Bada OS
pub const BADA: &str = "bada";
pub const TIZEN: &str = "tizen";
pub const MEEGO: &str = "meego";
pub const SAILFISH: &str = "sailfish";
/// Ubuntu Mobile OS
pub const UBUNTU: &str = "ubuntu";

/// Amazon Kindle, the e-ink one.
pub const KINDLE: &str = "kindle";
/// Amazon's accelerated Silk browser (Kindle Fire).
pub const SILK: &str = "silk-accelerated";

/// WAP content, matched against the `Accept` header.
pub const VND_WAP: &str = "vnd.wap";
/// WML content, matched against the `Accept` header.
pub const WML: &str = "wml";

/// Generic term for slate and tablet devices.
pub const TABLET: &str = "tablet";
pub const BREW: &str = "brew";
pub const DANGER: &str = "danger";
pub const HIPTOP: &str = "hiptop";
pub const PLAYSTATION: &str = "playstation";
pub const PLAYSTATION_VITA: &str = "vita";
pub const NINTENDO_DS: &str = "nitro";
pub const NINTENDO: &str = "nintendo";
pub const WII: &str = "wii";
pub const XBOX: &str = "xbox";
pub const ARCHOS: &str = "archos";

/// Used for Firefox OS, which has no token of its own.
pub const FIREFOX: &str = "firefox";
pub const OPERA: &str = "opera";
/// Common embedded OS browser.
pub const NETFRONT: &str = "netfront";
pub const UP_BROWSER: &str = "up.browser";
/// Transcoding by OpenWave server.
pub const OPENWEB: &str = "openweb";
/// Mobile Java (J2ME) profile.
pub const MIDP: &str = "midp";
pub const UPLINK: &str = "up.link";
/// A modern feature phone browser.
pub const TELECA_Q: &str = "teleca q";
/// Some devices report themselves as a PDA.
pub const PDA: &str = "pda";
pub const MINI: &str = "mini";
pub const MOBILE: &str = "mobile";
pub const MOBI: &str = "mobi";

/// Samsung Tizen smart TVs.
pub const SMART_TV_1: &str = "smart-tv";
/// LG WebOS smart TVs.
pub const SMART_TV_2: &str = "smarttv";

/// Nokia Internet Tablets
pub const MAEMO: &str = "maemo";
pub const LINUX: &str = "linux";
/// Sony Mylo and others.
pub const QT_EMBEDDED: &str = "qt embedded";
/// Sony Mylo
pub const MYLO_COM2: &str = "com2";

pub const SONY_ERICSSON: &str = "sonyericsson";
pub const ERICSSON: &str = "ericsson";
pub const SAMSUNG_SGH: &str = "sec-sgh";
pub const SONY: &str = "sony";
/// Popular Android and Windows Mobile manufacturer.
pub const HTC: &str = "htc";

pub const DOCOMO: &str = "docomo";
pub const KDDI: &str = "kddi";
pub const VODAFONE: &str = "vodafone";

/// Tells a PDA apart from an UA that merely mentions an update.
pub const UPDATE: &str = "update";

/// All `(name, token)` pairs of the signature table,
/// in declaration order.
pub const ALL: &[(&str, &str)] = &[
    ("webkit", WEBKIT),
    ("iphone", IPHONE),
    ("ipod", IPOD),
    ("ipad", IPAD),
    ("mac_ppc", MAC_PPC),
    ("android", ANDROID),
    ("google_tv", GOOGLE_TV),
    ("win_phone_7", WIN_PHONE_7),
    ("win_phone_8", WIN_PHONE_8),
    ("win_phone_10", WIN_PHONE_10),
    ("win_mob", WIN_MOB),
    ("windows", WINDOWS),
    ("ie_mob", IE_MOB),
    ("ppc", PPC),
    ("pie", PIE),
    ("bb", BB),
    ("bb10", BB10),
    ("vnd_rim", VND_RIM),
    ("bb_storm", BB_STORM),
    ("bb_bold", BB_BOLD),
    ("bb_bold_touch", BB_BOLD_TOUCH),
    ("bb_tour", BB_TOUR),
    ("bb_curve", BB_CURVE),
    ("bb_curve_touch", BB_CURVE_TOUCH),
    ("bb_torch", BB_TORCH),
    ("bb_playbook", BB_PLAYBOOK),
    ("symbian", SYMBIAN),
    ("s60", S60),
    ("s70", S70),
    ("s80", S80),
    ("s90", S90),
    ("palm", PALM),
    ("webos", WEBOS),
    ("webos_tv", WEBOS_TV),
    ("webos_hp", WEBOS_HP),
    ("blazer", BLAZER),
    ("xiino", XIINO),
    ("nuvifone", NUVIFONE),
    ("bada", BADA),
    ("tizen", TIZEN),
    ("meego", MEEGO),
    ("sailfish", SAILFISH),
    ("ubuntu", UBUNTU),
    ("kindle", KINDLE),
    ("silk", SILK),
    ("vnd_wap", VND_WAP),
    ("wml", WML),
    ("tablet", TABLET),
    ("brew", BREW),
    ("danger", DANGER),
    ("hiptop", HIPTOP),
    ("playstation", PLAYSTATION),
    ("playstation_vita", PLAYSTATION_VITA),
    ("nintendo_ds", NINTENDO_DS),
    ("nintendo", NINTENDO),
    ("wii", WII),
    ("xbox", XBOX),
    ("archos", ARCHOS),
    ("firefox", FIREFOX),
    ("opera", OPERA),
    ("netfront", NETFRONT),
    ("up_browser", UP_BROWSER),
    ("openweb", OPENWEB),
    ("midp", MIDP),
    ("uplink", UPLINK),
    ("teleca_q", TELECA_Q),
    ("pda", PDA),
    ("mini", MINI),
    ("mobile", MOBILE),
    ("mobi", MOBI),
    ("smart_tv_1", SMART_TV_1),
    ("smart_tv_2", SMART_TV_2),
    ("maemo", MAEMO),
    ("linux", LINUX),
    ("qt_embedded", QT_EMBEDDED),
    ("mylo_com2", MYLO_COM2),
    ("sony_ericsson", SONY_ERICSSON),
    ("ericsson", ERICSSON),
    ("samsung_sgh", SAMSUNG_SGH),
    ("sony", SONY),
    ("htc", HTC),
    ("docomo", DOCOMO),
    ("kddi", KDDI),
    ("vodafone", VODAFONE),
    ("update", UPDATE),
];

/// Look up a signature token by its name in [`ALL`].
#[must_use]
pub fn lookup(name: &str) -> Option<&'static str> {
    ALL.iter()
        .find_map(|(key, token)| (*key == name).then_some(*token))
}
