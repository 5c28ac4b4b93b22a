//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each resource page is a one-line instantiation of the generic
//! `ResourceScreen` with its descriptor; `signin` and `home` own the two
//! non-resource routes.

pub mod announcements;
pub mod events;
pub mod forums;
pub mod home;
pub mod signin;
