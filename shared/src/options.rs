use serde::{Deserialize, Serialize};

/// Label shown while a picker has no value.
pub const PICKER_PLACEHOLDER: &str = "選択してください";

pub const GENDER_OPTIONS: &[(&str, &str)] = &[("男性", "0"), ("女性", "1"), ("その他", "2")];

pub const ACTIVE_LEVEL_OPTIONS: &[(&str, &str)] = &[("低い", "0"), ("ふつう", "1"), ("高い", "2")];

const ACTIVE_LEVEL_EXPLANATIONS: &[(&str, &str)] = &[
    ("0", "生活の大部分が座位で、静的な活動が中心の場合"),
    (
        "1",
        "座位中心の仕事だが、職場内での移動や立位での作業・接客等、通勤・買い物での歩行、家事、軽いスポーツのいずれかを含む場合",
    ),
    (
        "2",
        "移動や立位の多い仕事への従事者、あるいはスポーツ等余暇における活発な運動習慣を持っている場合",
    ),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerOption {
    pub label: String,
    pub value: String,
}

fn to_options(table: &[(&str, &str)]) -> Vec<PickerOption> {
    table
        .iter()
        .map(|(label, value)| PickerOption {
            label: (*label).to_string(),
            value: (*value).to_string(),
        })
        .collect()
}

#[must_use]
pub fn gender_options() -> Vec<PickerOption> {
    to_options(GENDER_OPTIONS)
}

#[must_use]
pub fn active_level_options() -> Vec<PickerOption> {
    to_options(ACTIVE_LEVEL_OPTIONS)
}

/// `None` for an empty or unknown code.
#[must_use]
pub fn active_level_explanation(code: &str) -> Option<&'static str> {
    let code = code.trim();
    ACTIVE_LEVEL_EXPLANATIONS
        .iter()
        .find(|(value, _)| *value == code)
        .map(|(_, text)| *text)
}
