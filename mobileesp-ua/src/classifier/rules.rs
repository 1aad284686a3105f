use mobileesp_utils::str::{contains, submatch, submatch_all, submatch_any};

use crate::signature::*;

/// The (ASCII lowercased) request headers and
/// the detection rules evaluated against them.
///
/// Every rule is a pure function of the two headers,
/// none of them read cached state. The aggregate rules
/// which depend on earlier tiers take those results as arguments,
/// so that the classifier can feed them in its fixed scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(super) struct Headers {
    pub(super) user_agent: String,
    pub(super) http_accept: String,
}

impl Headers {
    pub(super) fn new(user_agent: &str, http_accept: &str) -> Self {
        Self {
            user_agent: user_agent.to_ascii_lowercase(),
            http_accept: http_accept.to_ascii_lowercase(),
        }
    }

    fn ua(&self, token: &str) -> bool {
        submatch(&self.user_agent, token)
    }

    fn ua_any(&self, tokens: &[&str]) -> bool {
        submatch_any(&self.user_agent, tokens)
    }

    fn ua_all(&self, tokens: &[&str]) -> bool {
        submatch_all(&self.user_agent, tokens)
    }

    fn accept(&self, token: &str) -> bool {
        submatch(&self.http_accept, token)
    }

    // -- apple

    pub(super) fn iphone(&self) -> bool {
        // iPad and iPod touch also claim to be an iPhone
        self.ua(IPHONE) && !self.ipad() && !self.ipod()
    }

    pub(super) fn ipod(&self) -> bool {
        self.ua(IPOD)
    }

    pub(super) fn ipad(&self) -> bool {
        self.ua(IPAD) && self.webkit()
    }

    pub(super) fn iphone_or_ipod(&self) -> bool {
        self.iphone() || self.ipod()
    }

    pub(super) fn ios(&self) -> bool {
        self.iphone_or_ipod() || self.ipad()
    }

    // -- android

    pub(super) fn android(&self) -> bool {
        self.ua(ANDROID) || self.google_tv()
    }

    pub(super) fn android_phone(&self) -> bool {
        self.android() && (self.ua(MOBILE) || self.opera_mobile())
    }

    pub(super) fn android_tablet(&self) -> bool {
        self.android() && !self.opera_mobile() && !self.ua(MOBILE)
    }

    pub(super) fn android_webkit(&self) -> bool {
        self.android() && self.webkit()
    }

    pub(super) fn google_tv(&self) -> bool {
        self.ua(GOOGLE_TV)
    }

    pub(super) fn webkit(&self) -> bool {
        self.ua(WEBKIT)
    }

    // -- windows

    pub(super) fn windows_phone(&self) -> bool {
        self.windows_phone_7() || self.windows_phone_8() || self.windows_phone_10()
    }

    pub(super) fn windows_phone_7(&self) -> bool {
        self.ua(WIN_PHONE_7)
    }

    pub(super) fn windows_phone_8(&self) -> bool {
        self.ua(WIN_PHONE_8)
    }

    pub(super) fn windows_phone_10(&self) -> bool {
        self.ua(WIN_PHONE_10)
    }

    /// Windows Mobile 6.x and earlier, never a Windows Phone.
    pub(super) fn windows_mobile(&self) -> bool {
        if self.windows_phone() {
            return false;
        }
        self.ua_any(&[WIN_MOB, IE_MOB, PIE])
            || self.pocket_pc()
            || self.ua_all(&[HTC, WINDOWS])
            || (self.wap_wml() && self.ua(WINDOWS))
    }

    /// PocketPC, unless it is the PowerPC of an old Macintosh.
    ///
    /// A "macintosh" token found at byte offset 0 or 1 does not exclude the match.
    fn pocket_pc(&self) -> bool {
        self.ua(PPC) && contains(&self.user_agent, MAC_PPC).is_none_or(|index| index <= 1)
    }

    // -- blackberry

    /// BB10 phones do not carry the "blackberry" token.
    pub(super) fn blackberry(&self) -> bool {
        self.ua(BB) || self.accept(VND_RIM) || self.blackberry_10_phone()
    }

    pub(super) fn blackberry_10_phone(&self) -> bool {
        self.ua_all(&[BB10, MOBILE])
    }

    pub(super) fn blackberry_tablet(&self) -> bool {
        self.ua(BB_PLAYBOOK)
    }

    pub(super) fn blackberry_webkit(&self) -> bool {
        self.blackberry() && self.webkit()
    }

    pub(super) fn blackberry_touch(&self) -> bool {
        self.ua_any(&[BB_STORM, BB_TORCH, BB_BOLD_TOUCH, BB_CURVE_TOUCH])
    }

    /// BlackBerry OS 5 with the better browser,
    /// the WebKit browser of OS 6 and 7 is excluded.
    pub(super) fn blackberry_high(&self) -> bool {
        !self.blackberry_webkit()
            && self.blackberry()
            && (self.blackberry_touch() || self.ua_any(&[BB_BOLD, BB_TOUR, BB_CURVE]))
    }

    pub(super) fn blackberry_low(&self) -> bool {
        self.blackberry() && !(self.blackberry_high() || self.blackberry_webkit())
    }

    // -- nokia

    pub(super) fn s60_oss_browser(&self) -> bool {
        self.webkit() && self.ua_any(&[SYMBIAN, S60])
    }

    pub(super) fn symbian_os(&self) -> bool {
        self.ua_any(&[SYMBIAN, S60, S70, S80, S90])
    }

    pub(super) fn maemo_tablet(&self) -> bool {
        if self.ua(MAEMO) {
            return true;
        }
        // Nokia N810 and co
        self.ua_all(&[LINUX, TABLET]) && !self.webos_tablet() && !self.android()
    }

    // -- palm & webos

    pub(super) fn palm_os(&self) -> bool {
        !self.palm_webos() && self.ua_any(&[PALM, BLAZER, XIINO])
    }

    pub(super) fn palm_webos(&self) -> bool {
        self.ua(WEBOS)
    }

    pub(super) fn webos_tablet(&self) -> bool {
        self.ua_all(&[WEBOS_HP, TABLET])
    }

    pub(super) fn webos_tv(&self) -> bool {
        self.ua_all(&[WEBOS_TV, SMART_TV_2])
    }

    // -- browsers & amazon

    pub(super) fn opera_mobile(&self) -> bool {
        self.ua(OPERA) && self.ua_any(&[MINI, MOBI])
    }

    /// e-ink Kindle only, the Kindle Fire reports itself as Android.
    pub(super) fn kindle(&self) -> bool {
        self.ua(KINDLE) && !self.android()
    }

    pub(super) fn amazon_silk(&self) -> bool {
        self.ua(SILK)
    }

    // -- minor operating systems

    pub(super) fn garmin_nuvifone(&self) -> bool {
        self.ua(NUVIFONE)
    }

    pub(super) fn bada(&self) -> bool {
        self.ua(BADA)
    }

    pub(super) fn tizen(&self) -> bool {
        self.ua_all(&[TIZEN, MOBILE])
    }

    pub(super) fn tizen_tv(&self) -> bool {
        self.ua_all(&[TIZEN, SMART_TV_1])
    }

    pub(super) fn meego(&self) -> bool {
        self.ua(MEEGO)
    }

    pub(super) fn meego_phone(&self) -> bool {
        self.ua_all(&[MEEGO, MOBI])
    }

    pub(super) fn firefox_os(&self) -> bool {
        self.firefox_os_phone() || self.firefox_os_tablet()
    }

    /// Firefox OS has no token of its own, so this is a best guess
    /// once the major mobile platforms are ruled out.
    fn firefox_os_candidate(&self) -> bool {
        !(self.ios() || self.android() || self.sailfish()) && self.ua(FIREFOX)
    }

    pub(super) fn firefox_os_phone(&self) -> bool {
        self.firefox_os_candidate() && self.ua(MOBILE)
    }

    pub(super) fn firefox_os_tablet(&self) -> bool {
        self.firefox_os_candidate() && self.ua(TABLET)
    }

    pub(super) fn sailfish(&self) -> bool {
        self.ua(SAILFISH)
    }

    pub(super) fn sailfish_phone(&self) -> bool {
        self.sailfish() && self.ua(MOBILE)
    }

    pub(super) fn ubuntu(&self) -> bool {
        self.ubuntu_phone() || self.ubuntu_tablet()
    }

    pub(super) fn ubuntu_phone(&self) -> bool {
        self.ua_all(&[UBUNTU, MOBILE])
    }

    pub(super) fn ubuntu_tablet(&self) -> bool {
        self.ua_all(&[UBUNTU, TABLET])
    }

    pub(super) fn smart_tv(&self) -> bool {
        self.tizen_tv() || self.webos_tv() || self.google_tv()
    }

    // -- other devices

    pub(super) fn danger_hiptop(&self) -> bool {
        self.ua_any(&[DANGER, HIPTOP])
    }

    pub(super) fn sony_mylo(&self) -> bool {
        self.ua(SONY) && self.ua_any(&[QT_EMBEDDED, MYLO_COM2])
    }

    pub(super) fn archos(&self) -> bool {
        self.ua(ARCHOS)
    }

    pub(super) fn game_console(&self) -> bool {
        self.sony_playstation() || self.nintendo() || self.xbox()
    }

    pub(super) fn sony_playstation(&self) -> bool {
        self.ua(PLAYSTATION)
    }

    pub(super) fn gaming_handheld(&self) -> bool {
        self.ua_all(&[PLAYSTATION, PLAYSTATION_VITA])
    }

    pub(super) fn nintendo(&self) -> bool {
        self.ua_any(&[NINTENDO, WII, NINTENDO_DS])
    }

    pub(super) fn xbox(&self) -> bool {
        self.ua(XBOX)
    }

    pub(super) fn brew_device(&self) -> bool {
        self.ua(BREW)
    }

    pub(super) fn wap_wml(&self) -> bool {
        self.accept(VND_WAP) || self.accept(WML)
    }

    pub(super) fn midp_capable(&self) -> bool {
        self.ua(MIDP) || self.accept(MIDP)
    }

    // -- device classes & tiers, in scan order

    pub(super) fn tier_tablet(&self) -> bool {
        self.ipad()
            || self.android_tablet()
            || self.blackberry_tablet()
            || self.firefox_os_tablet()
            || self.ubuntu_tablet()
            || self.webos_tablet()
    }

    pub(super) fn tier_iphone(
        &self,
        tier_tablet: bool,
        iphone_or_ipod: bool,
        android_phone: bool,
    ) -> bool {
        if tier_tablet {
            return false;
        }
        iphone_or_ipod
            || android_phone
            || self.windows_phone()
            || self.blackberry_10_phone()
            || self.palm_webos()
            || self.bada()
            || self.tizen()
            || self.firefox_os_phone()
            || self.sailfish_phone()
            || self.ubuntu_phone()
            || self.gaming_handheld()
            || (self.blackberry_webkit() && self.blackberry_touch())
    }

    pub(super) fn smartphone(&self, tier_iphone: bool) -> bool {
        tier_iphone
            || self.s60_oss_browser()
            || self.symbian_os()
            || self.windows_mobile()
            || self.blackberry()
            || self.meego_phone()
            || self.palm_webos()
    }

    pub(super) fn mobile_quick(&self, tier_tablet: bool, smartphone: bool) -> bool {
        if tier_tablet {
            return false;
        }
        smartphone
            || self.ua(MOBILE)
            || self.opera_mobile()
            || self.kindle()
            || self.amazon_silk()
            || self.wap_wml()
            || self.midp_capable()
            || self.brew_device()
            || self.ua_any(&[NETFRONT, UP_BROWSER])
    }

    pub(super) fn mobile_long(&self, mobile_quick: bool) -> bool {
        mobile_quick
            || self.game_console()
            || self.danger_hiptop()
            || self.maemo_tablet()
            || self.sony_mylo()
            || self.archos()
            || (self.ua(PDA) && !self.ua(UPDATE))
            // older phones, only recognisable by manufacturer or operator
            || self.ua_any(&[
                UPLINK,
                OPENWEB,
                SAMSUNG_SGH,
                SONY_ERICSSON,
                ERICSSON,
                DOCOMO,
                KDDI,
                VODAFONE,
            ])
    }

    pub(super) fn tier_rich_css(&self, mobile_quick: bool, tier_iphone: bool, webkit: bool) -> bool {
        if !mobile_quick || tier_iphone || self.kindle() {
            return false;
        }
        webkit
            || self.s60_oss_browser()
            || self.blackberry_high()
            || self.windows_mobile()
            || self.ua(TELECA_Q)
    }

    pub(super) fn tier_other_phones(
        &self,
        mobile_long: bool,
        tier_iphone: bool,
        tier_rich_css: bool,
    ) -> bool {
        mobile_long && !tier_iphone && !tier_rich_css
    }
}
