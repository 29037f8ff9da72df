//! Wire DTOs for the notice service.
//!
//! DESIGN
//! ======
//! Records read from the service keep free-form labels (`noticeType`,
//! `targetDepartmentOrIndividual`) as strings: the service owns that data and
//! an unfamiliar label must not fail a whole list fetch. Everything the client
//! writes goes through the closed enumerations below, so outgoing payloads
//! only ever carry canonical values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::Date;

/// A label that does not belong to the expected enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

/// Closed enumeration serialized as its display label.
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical wire label.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let trimmed = raw.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| UnknownLabel { kind: $kind, value: raw.to_owned() })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(D::Error::custom)
            }
        }
    };
}

label_enum! {
    /// Lifecycle status of a notice. Governs badge color and available row actions.
    NoticeStatus, "notice status" {
        Draft => "Draft",
        Published => "Published",
        Unpublished => "Unpublished",
    }
}

label_enum! {
    /// Notice category. Each label is a distinct wire value.
    NoticeType, "notice type" {
        WarningDisciplinary => "Warning / Disciplinary",
        PerformanceImprovement => "Performance Improvement",
        AppreciationRecognition => "Appreciation / Recognition",
        AttendanceLeave => "Attendance / Leave Issue",
        PayrollCompensation => "Payroll / Compensation",
        ContractRoleUpdate => "Contract / Role Update",
        AdvisoryReminder => "Advisory / Personal Reminder",
        General => "General",
        Urgent => "Urgent",
        Exam => "Exam",
    }
}

label_enum! {
    /// Target department(s) or individual a notice is addressed to.
    TargetAudience, "target audience" {
        AllDepartments => "All Departments",
        Individual => "Individual",
        Finance => "Finance",
        SalesTeam => "Sales Team",
        WebTeam => "Web Team",
        DatabaseTeam => "Database Team",
        Admin => "Admin",
        Hr => "HR",
    }
}

label_enum! {
    /// Coarse audience filter offered by the list view.
    AudienceFilter, "audience filter" {
        Departments => "departments",
        Individuals => "individuals",
    }
}

/// A notice as stored by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    /// Opaque identifier, stable for the notice's lifetime.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notice_type: String,
    #[serde(default)]
    pub target_department_or_individual: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    /// ISO date or timestamp; empty or absent renders as a dash.
    #[serde(default)]
    pub publishing_date: Option<String>,
    pub status: NoticeStatus,
    /// Set when the notice becomes `Published`, cleared otherwise.
    #[serde(default)]
    pub published_at: Option<String>,
    /// File reference; anything that is not a string (e.g. an uploaded
    /// file object serialized as `{}`) reads as absent.
    #[serde(default, deserialize_with = "string_or_none")]
    pub attachment: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub file_url: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Ok(Some(value)),
        _ => Ok(None),
    }
}

impl Notice {
    /// Link to the stored attachment, preferring the service-resolved URL.
    #[must_use]
    pub fn attachment_link(&self) -> Option<&str> {
        self.file_url
            .as_deref()
            .or(self.attachment.as_deref())
            .filter(|link| !link.is_empty())
    }
}

/// Client-side list filters. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeFilters {
    /// Free text (employee id or name).
    pub search: String,
    pub audience: Option<AudienceFilter>,
    pub status: Option<NoticeStatus>,
    /// Exact publish date.
    pub published_on: Option<Date>,
}

impl NoticeFilters {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One page of notices plus counters over the whole filtered set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeListResponse {
    #[serde(default)]
    pub data: Vec<Notice>,
    pub pagination: Pagination,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "default_pages")]
    pub pages: u32,
    #[serde(default)]
    pub published_count: u64,
    #[serde(default)]
    pub draft_count: u64,
}

fn default_pages() -> u32 {
    1
}

/// Full form body sent on create and full update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticePayload {
    pub title: String,
    pub description: String,
    pub notice_type: NoticeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_department_or_individual: Option<TargetAudience>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// `YYYY-MM-DD`, or empty when no date was picked.
    pub publishing_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    pub status: NoticeStatus,
}
