//! 📱 MobileESP for the 🦀 Rust language: detect mobile devices
//! from the `User-Agent` and `Accept` header values of a request.
//!
//! The detections are fast substring tests against a fixed table of
//! [signature tokens](crate::ua::signature), grouped in device tiers
//! which help you pick the content variant that suits a device:
//!
//! | tier | devices |
//! |-|-|
//! | [tablet](crate::ua::DeviceTier::Tablet) | iPad ⸱ Android tablets ⸱ BlackBerry PlayBook ⸱ WebOS, Firefox OS and Ubuntu tablets |
//! | [iphone](crate::ua::DeviceTier::Iphone) | iPhone ⸱ iPod Touch ⸱ Android phones ⸱ Windows Phone ⸱ BB10 ⸱ WebOS ⸱ Tizen ⸱ Sailfish ⸱ ... |
//! | [rich-css](crate::ua::DeviceTier::RichCss) | Symbian S60 ⸱ BlackBerry OS 5 ⸱ Windows Mobile ⸱ other WebKit phones |
//! | [other-phone](crate::ua::DeviceTier::OtherPhone) | feature phones ⸱ game consoles ⸱ e-ink Kindle ⸱ legacy devices |
//! | [desktop](crate::ua::DeviceTier::Desktop) | everything else |
//!
//! # Example
//!
//! ```
//! use mobileesp::ua::{Classifier, DeviceTier};
//!
//! let classifier = Classifier::new(
//!     "Mozilla/5.0 (Linux; Android 7.0; SM-T820) AppleWebKit/537.36",
//!     "text/html",
//! );
//!
//! assert!(classifier.detect_android_tablet());
//! assert_eq!(classifier.tier(), DeviceTier::Tablet);
//! ```
//!
//! # Crates
//!
//! This crate is a facade over the crates of the workspace:
//!
//! - [`mobileesp-ua`](crate::ua): the classifier, tiers and signature tokens;
//! - [`mobileesp-utils`](crate::utils): string search and macro utilities;
//! - [`mobileesp-error`](crate::error): the opaque error type.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]
#![forbid(unsafe_code)]

#[doc(inline)]
pub use ::mobileesp_error as error;

#[doc(inline)]
pub use ::mobileesp_utils as utils;

#[cfg(feature = "ua")]
#[cfg_attr(docsrs, doc(cfg(feature = "ua")))]
#[doc(inline)]
pub use ::mobileesp_ua as ua;
