use serde::{Deserialize, Serialize};

/// Display grouping for subscriptions. Plays no part in date arithmetic.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Video,
    Music,
    Productivity,
    Storage,
    Utilities,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Video,
        Category::Music,
        Category::Productivity,
        Category::Storage,
        Category::Utilities,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Video => "Video",
            Category::Music => "Music",
            Category::Productivity => "Productivity",
            Category::Storage => "Storage",
            Category::Utilities => "Utilities",
            Category::Other => "Other",
        }
    }
}
