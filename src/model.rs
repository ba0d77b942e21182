use serde::Deserialize;

/// Sentinel shown when an optional display value is absent.
pub const NOT_AVAILABLE: &str = "غير متوفر";

const MASK_SUFFIX: &str = "****";
const VISIBLE_PREFIX_CHARS: usize = 4;

/// One joined pilgrim/camp row as returned by the
/// `get_pilgrim_with_camp_info` query. Read-only; the renderer never
/// mutates it.
#[derive(Debug, Clone, Deserialize)]
pub struct PilgrimProfile {
    pub id: String,
    pub full_name_arabic: Option<String>,
    pub full_name_english: Option<String>,
    pub health_status: Option<String>,
    pub national_id: Option<String>,
    pub blood_type: Option<String>,
    pub group_number: Option<String>,
    pub bus_number: Option<String>,
    pub camp_name: Option<String>,
    pub camp_location_name: Option<String>,
    pub camp_lat: Option<f64>,
    pub camp_lng: Option<f64>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub phone: Option<String>,
}

impl PilgrimProfile {
    #[must_use]
    pub fn health_status(&self) -> HealthStatus {
        HealthStatus::from_code(self.health_status.as_deref())
    }

    #[must_use]
    pub fn masked_national_id(&self) -> String {
        mask_national_id(self.national_id.as_deref())
    }

    /// Coordinates for the camp map link, only when both are present.
    #[must_use]
    pub fn camp_coordinates(&self) -> Option<(f64, f64)> {
        match (self.camp_lat, self.camp_lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Sick,
    Emergency,
}

/// Fixed display triple for a health status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: &'static str,
    pub class: &'static str,
    pub icon: &'static str,
}

impl HealthStatus {
    /// Unrecognized or absent codes resolve to `Healthy`.
    #[must_use]
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("sick") => Self::Sick,
            Some("emergency") => Self::Emergency,
            _ => Self::Healthy,
        }
    }

    #[must_use]
    pub fn display(self) -> StatusDisplay {
        match self {
            Self::Healthy => StatusDisplay {
                label: "سليم",
                class: "status-healthy",
                icon: "✅",
            },
            Self::Sick => StatusDisplay {
                label: "مريض",
                class: "status-sick",
                icon: "⚠️",
            },
            Self::Emergency => StatusDisplay {
                label: "حالة طوارئ",
                class: "status-emergency",
                icon: "🚨",
            },
        }
    }
}

/// Keep the first four characters of the national id and mask the rest.
/// Shorter values keep whatever characters exist; absent values render the
/// "not available" sentinel.
#[must_use]
pub fn mask_national_id(raw: Option<&str>) -> String {
    match raw {
        Some(id) => {
            let prefix: String = id.chars().take(VISIBLE_PREFIX_CHARS).collect();
            format!("{prefix}{MASK_SUFFIX}")
        }
        None => NOT_AVAILABLE.to_string(),
    }
}
