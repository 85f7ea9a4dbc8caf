use serde::{Deserialize, Serialize};

/// The seven worksheet exercise types, serialized with the labels the
/// content generator uses on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    #[serde(rename = "Decodable Story")]
    Story,
    #[serde(rename = "Nonsense Word Fluency")]
    NonsenseDrill,
    #[serde(rename = "Word Bank Sort")]
    WordSort,
    #[serde(rename = "Sentence Match")]
    SentenceMatch,
    #[serde(rename = "Sound Mapping")]
    SoundMapping,
    #[serde(rename = "Detective Riddle Cards")]
    RiddleCards,
    #[serde(rename = "Mystery Grid (Color-by-Code)")]
    MysteryGrid,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 7] = [
        ActivityKind::Story,
        ActivityKind::NonsenseDrill,
        ActivityKind::WordSort,
        ActivityKind::SentenceMatch,
        ActivityKind::SoundMapping,
        ActivityKind::RiddleCards,
        ActivityKind::MysteryGrid,
    ];

    /// Parse a wire label. Unknown labels yield `None`; the composer skips
    /// those activities instead of aborting the document.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Decodable Story" => Some(ActivityKind::Story),
            "Nonsense Word Fluency" => Some(ActivityKind::NonsenseDrill),
            "Word Bank Sort" => Some(ActivityKind::WordSort),
            "Sentence Match" => Some(ActivityKind::SentenceMatch),
            "Sound Mapping" => Some(ActivityKind::SoundMapping),
            "Detective Riddle Cards" => Some(ActivityKind::RiddleCards),
            "Mystery Grid (Color-by-Code)" => Some(ActivityKind::MysteryGrid),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Story => "Decodable Story",
            ActivityKind::NonsenseDrill => "Nonsense Word Fluency",
            ActivityKind::WordSort => "Word Bank Sort",
            ActivityKind::SentenceMatch => "Sentence Match",
            ActivityKind::SoundMapping => "Sound Mapping",
            ActivityKind::RiddleCards => "Detective Riddle Cards",
            ActivityKind::MysteryGrid => "Mystery Grid (Color-by-Code)",
        }
    }
}

/// One requested activity in the worksheet plan.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanItem {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Whether the generator should produce pseudo-words for this item.
    pub nonsense: bool,
    /// Unique id assigned by the owning UI, used for removal.
    pub id: String,
    /// Phonics category label, e.g. "CVC (Short Vowels)".
    pub cat: String,
    /// Selected target labels within the category; never empty in a valid plan.
    pub sounds: Vec<String>,
}

/// Ordered activity plan. Owned and mutated by the UI session; the
/// rendering core only ever reads it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WorksheetPlan {
    pub items: Vec<PlanItem>,
}

impl WorksheetPlan {
    pub fn push(&mut self, item: PlanItem) {
        self.items.push(item);
    }

    /// Remove the item with the given id, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<PlanItem> {
        let at = self.items.iter().position(|it| it.id == id)?;
        Some(self.items.remove(at))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
