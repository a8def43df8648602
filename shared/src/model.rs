use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::capabilities::ApiBase;
use crate::dto::{parse_birthday, ProfileResponse};
use crate::validate::ValidationError;
use crate::DEFAULT_BIRTHDAY_YMD;

#[must_use]
pub fn default_birthday() -> NaiveDate {
    let (year, month, day) = DEFAULT_BIRTHDAY_YMD;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Editable profile fields, kept as the raw text the user typed or picked.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub nickname: String,
    pub height: String,
    pub weight: String,
    pub birthday: NaiveDate,
    /// Picker code, empty while unselected.
    pub gender: String,
    /// Picker code, empty while unselected.
    pub active_level: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            nickname: String::new(),
            height: String::new(),
            weight: String::new(),
            birthday: default_birthday(),
            gender: String::new(),
            active_level: String::new(),
        }
    }
}

impl ProfileForm {
    /// Copies in every field the server sent. Missing or `null` fields, and a
    /// birthday that cannot be parsed, leave the current value alone.
    pub fn apply_response(&mut self, response: &ProfileResponse) {
        if let Some(nickname) = &response.nickname {
            self.nickname.clone_from(nickname);
        }
        if let Some(height) = response.height {
            self.height = height.to_string();
        }
        if let Some(weight) = response.weight {
            self.weight = weight.to_string();
        }
        if let Some(raw) = response.birthday.as_deref() {
            match parse_birthday(raw) {
                Some(date) => self.birthday = date,
                None => tracing::warn!("ignoring unparseable birthday"),
            }
        }
        if let Some(gender) = response.gender {
            self.gender = gender.to_string();
        }
        if let Some(active_level) = response.active_level {
            self.active_level = active_level.to_string();
        }
    }
}

// Redact debug output because this holds personal data.
impl fmt::Debug for ProfileForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileForm")
            .field("nickname_present", &!self.nickname.is_empty())
            .field("height_present", &!self.height.is_empty())
            .field("weight_present", &!self.weight.is_empty())
            .field("birthday_is_default", &(self.birthday == default_birthday()))
            .field("gender", &self.gender)
            .field("active_level", &self.active_level)
            .finish()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SyncPhase {
    #[default]
    Idle,
    Loading,
    Submitting,
    /// The update succeeded and the shell was told to go back.
    NavigatedAway,
    /// The shell tore the screen down.
    Dismissed,
}

impl SyncPhase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::NavigatedAway | Self::Dismissed)
    }
}

/// A blocking alert waiting to be dismissed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: Option<String>,
}

impl Alert {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn submit_failed() -> Self {
        Self::new("エラー").with_message("時間をおいて再度実行してください")
    }

    #[must_use]
    pub fn load_failed() -> Self {
        Self::new("エラー").with_message("プロフィールの取得に失敗しました")
    }
}

impl From<ValidationError> for Alert {
    fn from(error: ValidationError) -> Self {
        Self::new(error.to_string())
    }
}

#[derive(Debug, Default)]
pub struct Model {
    pub form: ProfileForm,
    pub phase: SyncPhase,
    /// Set while an update is in flight; the shell shows an indicator.
    pub is_loading: bool,
    pub is_date_picker_visible: bool,
    pub alert: Option<Alert>,
    pub activated: bool,
    pub api_base: Option<ApiBase>,
}

impl Model {
    pub fn show_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    pub fn clear_alert(&mut self) {
        self.alert = None;
    }
}
