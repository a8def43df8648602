use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ScreenConfig;
use crate::dto::ProfileResponse;

#[derive(Serialize, Deserialize, Debug)]
pub enum Event {
    // Lifecycle
    Activated(ScreenConfig),
    Dismissed,

    // Form input
    NicknameChanged(String),
    HeightChanged(String),
    WeightChanged(String),
    GenderSelected(String),
    ActiveLevelSelected(String),
    BirthdayPickerOpened,
    BirthdayPickerCancelled,
    BirthdayConfirmed(NaiveDate),

    // Actions
    UpdatePressed,
    AlertDismissed,

    // Capability responses, never sent by the shell
    #[serde(skip)]
    ProfileLoaded(crux_http::Result<crux_http::Response<ProfileResponse>>),
    #[serde(skip)]
    ProfileSaved(crux_http::Result<crux_http::Response<Vec<u8>>>),
}

impl Event {
    /// Stable name for logging; carries no user content.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Activated(_) => "activated",
            Self::Dismissed => "dismissed",
            Self::NicknameChanged(_) => "nickname_changed",
            Self::HeightChanged(_) => "height_changed",
            Self::WeightChanged(_) => "weight_changed",
            Self::GenderSelected(_) => "gender_selected",
            Self::ActiveLevelSelected(_) => "active_level_selected",
            Self::BirthdayPickerOpened => "birthday_picker_opened",
            Self::BirthdayPickerCancelled => "birthday_picker_cancelled",
            Self::BirthdayConfirmed(_) => "birthday_confirmed",
            Self::UpdatePressed => "update_pressed",
            Self::AlertDismissed => "alert_dismissed",
            Self::ProfileLoaded(_) => "profile_loaded",
            Self::ProfileSaved(_) => "profile_saved",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        !matches!(
            self,
            Self::Activated(_) | Self::Dismissed | Self::ProfileLoaded(_) | Self::ProfileSaved(_)
        )
    }
}
