// lib.rs - profile edit screen core

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod capabilities;
pub mod config;
pub mod dto;
pub mod error;
pub mod event;
pub mod model;
pub mod options;
pub mod validate;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect, NavigationOperation};
pub use config::ScreenConfig;
pub use dto::{ProfileDto, ProfileResponse};
pub use error::SyncError;
pub use event::Event;
pub use model::{Alert, Model, ProfileForm, SyncPhase};
pub use validate::{validate, ValidatedProfile, ValidationError};
pub use view::ViewModel;

/// Profile resource, relative to the configured API base.
pub const PROFILE_PATH: &str = "users/profile";

/// Birthday format on the wire.
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Birthday format shown next to the date picker.
pub const DISPLAY_DATE_FORMAT: &str = "%Y年%m月%d日";

pub const DEFAULT_BIRTHDAY_YMD: (i32, u32, u32) = (2000, 1, 1);
