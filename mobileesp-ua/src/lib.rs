//! Mobile device classification of User Agents (UA).
//!
//! This crate provides a [`Classifier`] which pattern-matches
//! the `User-Agent` and `Accept` header values of a request against
//! a fixed table of [signature] tokens, in order to answer questions
//! such as "is this an iPhone", "is this a tablet" or "is this a smart TV".
//!
//! On top of the ~65 individual detections it groups devices in tiers
//! ([`DeviceTier`]), which is what most sites need to pick
//! the content variant suitable for a device:
//!
//! - [`Tablet`](DeviceTier::Tablet): iPad, Android tablets, PlayBook, ...;
//! - [`Iphone`](DeviceTier::Iphone): iPhone, Android phones, Windows Phone, BB10, ...;
//! - [`RichCss`](DeviceTier::RichCss): older smartphones capable of rich CSS;
//! - [`OtherPhone`](DeviceTier::OtherPhone): all other (feature) phones;
//! - [`Desktop`](DeviceTier::Desktop): anything else.
//!
//! # Example
//!
//! ```
//! use mobileesp_ua::{Classifier, DeviceTier};
//!
//! let classifier = Classifier::new(
//!     "Mozilla/5.0 (iPad; CPU OS 10_3 like Mac OS X) AppleWebKit/603.1.30",
//!     "text/html",
//! );
//!
//! assert!(classifier.detect_ipad());
//! assert!(!classifier.detect_iphone());
//! assert_eq!(classifier.tier(), DeviceTier::Tablet);
//! ```
//!
//! # Remarks
//!
//! Classification is a pure function of the two header values.
//! Extracting these from a request, and caching or persisting
//! the results, is left to the caller. The detections are not meant
//! to be complete or to parse versions; they aim to be fast and good
//! enough to pick a content variant.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod classifier;
pub use classifier::Classifier;

mod profile;
pub use profile::DeviceProfile;

mod tier;
pub use tier::{DeviceTier, TierOverwrites};

pub mod signature;
