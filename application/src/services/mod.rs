//! The four state slices
//!
//! Each slice exclusively owns its entities and its timer handles. Slices
//! compose only through the [`ToastNotifier`](toast::ToastNotifier) handle
//! the page-level container passes downward.

pub mod contact;
pub mod idea;
pub mod theme;
pub mod toast;
