use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Identifiers ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EventId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EventId)
    }
}

pub type UserId = Uuid;

// --- Category ---

/// Event category. Unrecognized keys are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Sports,
    Cultural,
    Exhibition,
    Volunteer,
    Education,
    Other(String),
}

impl Category {
    /// The categories offered by the create-event form, in display order.
    pub const ALL: [Category; 5] = [
        Category::Sports,
        Category::Cultural,
        Category::Exhibition,
        Category::Volunteer,
        Category::Education,
    ];

    pub fn parse(key: &str) -> Self {
        match key {
            "sports" => Category::Sports,
            "cultural" => Category::Cultural,
            "exhibition" => Category::Exhibition,
            "volunteer" => Category::Volunteer,
            "education" => Category::Education,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Category::Sports => "sports",
            Category::Cultural => "cultural",
            Category::Exhibition => "exhibition",
            Category::Volunteer => "volunteer",
            Category::Education => "education",
            Category::Other(raw) => raw,
        }
    }

    /// Human-readable label. Unknown categories display their raw key.
    pub fn label(&self) -> &str {
        match self {
            Category::Sports => "Sports",
            Category::Cultural => "Cultural",
            Category::Exhibition => "Exhibition",
            Category::Volunteer => "Volunteer",
            Category::Education => "Education",
            Category::Other(raw) => raw,
        }
    }

    /// Accent color used for the category badge. Education shares the
    /// neutral gray with unknown categories.
    pub fn accent(&self) -> Accent {
        match self {
            Category::Sports => Accent::Teal,
            Category::Cultural => Accent::Blue,
            Category::Exhibition => Accent::Purple,
            Category::Volunteer => Accent::Orange,
            Category::Education | Category::Other(_) => Accent::Gray,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(Category::parse(&key))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Teal,
    Blue,
    Purple,
    Orange,
    Gray,
}

impl Accent {
    pub fn hex(&self) -> &'static str {
        match self {
            Accent::Teal => "#14b8a6",
            Accent::Blue => "#3b82f6",
            Accent::Purple => "#a855f7",
            Accent::Orange => "#f97316",
            Accent::Gray => "#6b7280",
        }
    }

    /// Tailwind background class for badges.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Accent::Teal => "bg-teal-500",
            Accent::Blue => "bg-blue-500",
            Accent::Purple => "bg-purple-500",
            Accent::Orange => "bg-orange-500",
            Accent::Gray => "bg-gray-500",
        }
    }
}

// --- Events ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: String,
    /// Display date, e.g. "Aug 14" or "Aug 11-12".
    pub date: String,
    /// Display time, e.g. "1:30 PM - 5:30 PM".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub location: String,
    pub category: Category,
    pub organizer: String,
    /// Contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub image: String,
    pub registration_open: bool,
}

impl Event {
    /// Case-insensitive substring match against name, description, location
    /// and category label. `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [
            self.name.as_str(),
            self.description.as_str(),
            self.location.as_str(),
            self.category.label(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Fields supplied by whoever creates an event. Id, organizer, email and the
/// registration flag are stamped by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub date: String,
    pub time: Option<String>,
    pub location: String,
    pub category: Category,
    pub contact: Option<String>,
    pub image: String,
}

// --- Users ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
