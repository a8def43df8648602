use serde::{Deserialize, Serialize};

use crate::model::{Alert, Model, SyncPhase};
use crate::options::{self, PickerOption};
use crate::{DISPLAY_DATE_FORMAT, WIRE_DATE_FORMAT};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub nickname: String,
    pub height: String,
    pub weight: String,
    /// `yyyy-MM-dd`, for seeding the native date picker.
    pub birthday: String,
    /// `yyyy年MM月dd日`, shown in the field.
    pub birthday_label: String,
    pub gender: String,
    pub active_level: String,
    pub gender_options: Vec<PickerOption>,
    pub active_level_options: Vec<PickerOption>,
    pub picker_placeholder: String,
    pub active_level_explanation: Option<String>,
    /// When set the shell shows an indicator instead of the form.
    pub is_loading: bool,
    pub is_date_picker_visible: bool,
    pub alert: Option<Alert>,
    pub phase: SyncPhase,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        let form = &model.form;
        Self {
            nickname: form.nickname.clone(),
            height: form.height.clone(),
            weight: form.weight.clone(),
            birthday: form.birthday.format(WIRE_DATE_FORMAT).to_string(),
            birthday_label: form.birthday.format(DISPLAY_DATE_FORMAT).to_string(),
            gender: form.gender.clone(),
            active_level: form.active_level.clone(),
            gender_options: options::gender_options(),
            active_level_options: options::active_level_options(),
            picker_placeholder: options::PICKER_PLACEHOLDER.to_string(),
            active_level_explanation: options::active_level_explanation(&form.active_level)
                .map(str::to_string),
            is_loading: model.is_loading,
            is_date_picker_visible: model.is_date_picker_visible,
            alert: model.alert.clone(),
            phase: model.phase,
        }
    }
}
