//! Backend wire DTOs for the admin screens.
//!
//! DESIGN
//! ======
//! These types mirror the backend JSON shapes. Nullable text columns come
//! back as `null` often enough that every display string defaults to empty
//! instead of failing the whole collection decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// AUTH
// =============================================================================

/// Credentials posted to `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token", alias = "auth_token")]
    pub token: String,
}

// =============================================================================
// CONTACT MESSAGES
// =============================================================================

/// A message submitted through the public contact form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ContactMessage {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

// =============================================================================
// STALL BOOKINGS
// =============================================================================

/// Lifecycle of a stall-booking request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum BookingStatus {
    #[default]
    Pending,
    Booked,
    Rejected,
}

impl BookingStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Booked, Self::Rejected];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Booked => "Booked",
            Self::Rejected => "Rejected",
        }
    }

    /// Case-insensitive parse; unknown values are `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(Self::parse).unwrap_or_default())
    }
}

/// A stall-booking request submitted by an exhibitor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub designation: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stall: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub heard_from: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub street: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub zip: String,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `PUT /spacebooking/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: BookingStatus,
}

// =============================================================================
// VISITORS / EXHIBITORS
// =============================================================================

/// Registrant discriminator in the combined listing. Any `type` the backend
/// sends other than visitor/exhibitor reads as `Other`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum RegistrantKind {
    Visitor,
    Exhibitor,
    #[default]
    Other,
}

impl RegistrantKind {
    pub const ALL: [Self; 3] = [Self::Visitor, Self::Exhibitor, Self::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visitor => "Visitor",
            Self::Exhibitor => "Exhibitor",
            Self::Other => "Other",
        }
    }

    /// Case-insensitive parse; unknown values are `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

impl<'de> Deserialize<'de> for RegistrantKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(Self::parse).unwrap_or_default())
    }
}

/// A registered visitor or exhibitor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registrant {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(rename = "type", default)]
    pub kind: RegistrantKind,
    #[serde(rename = "registeredAt", alias = "registered_at", default)]
    pub registered_at: Option<String>,
}

impl Registrant {
    /// Ids are only unique within one registrant kind.
    pub fn row_key(&self) -> String {
        format!("{}-{}", self.kind.as_str(), self.id)
    }
}

// =============================================================================
// DASHBOARD AGGREGATES
// =============================================================================

/// Headline counts for the summary cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_visitors: u64,
    #[serde(default)]
    pub total_exhibitors: u64,
    #[serde(default)]
    pub stalls_booked: u64,
    #[serde(default)]
    pub messages: u64,
}

/// Source of a recent-activity row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Visitor,
    Exhibitor,
    Message,
    #[serde(other)]
    Other,
}

/// One row of the recent-activity feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    #[serde(default)]
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    pub date: String,
    #[serde(default)]
    pub stalls: f64,
}

/// Series for the dashboard charts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub pie: Vec<PieSlice>,
    #[serde(default)]
    pub bar: Vec<BarPoint>,
}

// =============================================================================
// MEDIA
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    /// Classify a browser MIME type; anything but `image/*` and `video/*` is rejected.
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            Some(Self::Image)
        } else if mime.starts_with("video/") {
            Some(Self::Video)
        } else {
            None
        }
    }
}

/// A gallery entry. Gallery state is local to the browser session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: u64,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(rename = "uploadedAt", alias = "uploaded_at")]
    pub uploaded_at: String,
}
