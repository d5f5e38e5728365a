use serde::Serialize;
use utoipa::ToSchema;

/// Advisory availability of the slug currently shown in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SlugAvailability {
    #[default]
    Unknown,
    Checking,
    Available,
    Taken,
}

impl SlugAvailability {
    pub fn from_check(available: bool) -> Self {
        if available { Self::Available } else { Self::Taken }
    }
}

/// What the presentation layer needs to render the slug field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SlugFieldSnapshot {
    pub slug: String,
    pub availability: SlugAvailability,
    pub is_customized: bool,
}

impl SlugFieldSnapshot {
    /// An empty or confirmed-taken slug blocks submission. `Unknown` never
    /// does; the unique constraint has the final say.
    pub fn blocks_submission(&self) -> bool {
        self.slug.is_empty() || self.availability == SlugAvailability::Taken
    }
}
