use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::validate::ValidatedProfile;
use crate::WIRE_DATE_FORMAT;

/// Body of `POST /users/profile`. Only built from a [`ValidatedProfile`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub nickname: String,
    pub height: f64,
    pub weight: f64,
    #[serde(with = "wire_date")]
    pub birthday: NaiveDate,
    pub gender: i32,
    pub active_level: i32,
}

impl From<ValidatedProfile> for ProfileDto {
    fn from(profile: ValidatedProfile) -> Self {
        Self {
            nickname: profile.nickname,
            height: profile.height,
            weight: profile.weight,
            birthday: profile.birthday,
            gender: profile.gender,
            active_level: profile.active_level,
        }
    }
}

/// Body of `GET /users/profile`. Any field may be missing or `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub nickname: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub birthday: Option<String>,
    pub gender: Option<i64>,
    pub active_level: Option<i64>,
}

/// Accepts `yyyy-MM-dd`, a naive `yyyy-MM-ddTHH:MM:SS[.fff]`, or an RFC 3339
/// timestamp; time and offset are discarded.
#[must_use]
pub fn parse_birthday(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, WIRE_DATE_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

mod wire_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::WIRE_DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(WIRE_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, WIRE_DATE_FORMAT).map_err(de::Error::custom)
    }
}
