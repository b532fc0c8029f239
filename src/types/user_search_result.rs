use serde::{Deserialize, Deserializer, Serialize};

/// One row in a user search result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSearchResult {
    /// Opaque identifier that uniquely identifies the user
    pub id: String,

    /// The user's display name
    pub name: String,

    /// The user's profile data
    pub profile: UserProfile,
}

/// Profile data attached to a user search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// URL of the user's profile image, null when no image is set.
    /// The key is always present on the wire; only its value may be null.
    #[serde(rename = "imageUrl", deserialize_with = "explicit_option")]
    pub image_url: Option<String>,
}

/// Serde treats a bare `Option` field as implicitly optional. Routing the
/// field through `deserialize_with` makes the key itself mandatory while
/// `null` still decodes to `None`.
fn explicit_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer)
}

impl UserSearchResult {
    /// Create a new user search result
    pub fn new(id: String, name: String, profile: UserProfile) -> Self {
        Self { id, name, profile }
    }

    /// Create a user search result with an optional profile image URL
    pub fn with_image_url(id: String, name: String, image_url: Option<String>) -> Self {
        Self {
            id,
            name,
            profile: UserProfile::new(image_url),
        }
    }
}

impl UserProfile {
    /// Create a new profile
    pub fn new(image_url: Option<String>) -> Self {
        Self { image_url }
    }

    /// Create a profile with no image set
    pub fn without_image() -> Self {
        Self { image_url: None }
    }
}
