use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::GenerateError;
use crate::plan::ActivityKind;

/// The parsed content-generator reply: everything needed to render one
/// worksheet packet. Produced once per generation request and consumed
/// read-only by the renderer, once per document mode.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GeneratedPacket {
    #[serde(default, deserialize_with = "lenient_string")]
    pub overview: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub target_words: Vec<String>,
    // Required: a reply without an activities list is not a packet.
    #[serde(deserialize_with = "lenient_activities")]
    pub activities: Vec<Activity>,
}

impl GeneratedPacket {
    /// Parse the raw text of a model reply.
    ///
    /// Markdown code fences are stripped first; models wrap JSON in them
    /// despite instructions not to. JSON syntax failures and top-level shape
    /// failures are reported as distinct error categories; everything below
    /// the top level decays to defaults instead of failing.
    pub fn from_model_text(raw: &str) -> Result<Self, GenerateError> {
        let mut text = raw.trim();
        if let Some(rest) = text.strip_prefix("```json") {
            text = rest;
        } else if let Some(rest) = text.strip_prefix("```") {
            text = rest;
        }
        if let Some(rest) = text.strip_suffix("```") {
            text = rest;
        }
        let value: Value =
            serde_json::from_str(text.trim()).map_err(GenerateError::MalformedResponse)?;
        serde_json::from_value(value).map_err(|e| GenerateError::InvalidPacket(e.to_string()))
    }
}

/// One activity in the packet, tagged by a free-form kind label.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub type_: String,
    #[serde(default, deserialize_with = "lenient_content")]
    pub content: ActivityContent,
}

impl Activity {
    /// The recognized kind, if any. Unrecognized labels are skipped by the
    /// composer rather than aborting the document.
    pub fn kind(&self) -> Option<ActivityKind> {
        ActivityKind::from_label(&self.type_)
    }
}

/// Superset of every activity kind's payload fields. The generator only
/// fills the fields relevant to an activity's kind; everything else stays
/// at its default, and malformed values decay to defaults too.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActivityContent {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub paragraphs: Vec<String>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub questions: Vec<Question>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub words: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub detective_task: Vec<String>,
    /// Category label -> words, in the generator's object-key order. Order
    /// is preserved because it defines the sort table's column order.
    #[serde(
        default,
        deserialize_with = "lenient_word_lists",
        serialize_with = "word_lists_as_map"
    )]
    pub sort_cats: Vec<(String, Vec<String>)>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub match_l: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub match_r: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub map_words: Vec<String>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub riddles: Vec<Riddle>,
    #[serde(default, deserialize_with = "lenient_mystery_grid")]
    pub mystery_grid: Option<MysteryGridContent>,
}

/// Story evidence-check question with its expected answer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Question {
    #[serde(default, deserialize_with = "lenient_string")]
    pub q: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub a: String,
}

/// Three-clue riddle card.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Riddle {
    #[serde(default, deserialize_with = "lenient_string")]
    pub clue1: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub clue2: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub clue3: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ans: String,
}

/// Mystery-grid payload. Two generator revisions produced incompatible
/// schemas, so both are carried: a flat color -> word-list map, or pre-laid
/// parallel word/color matrices. `source` resolves which one applies.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MysteryGridContent {
    /// Color name -> phonics target label, in object-key order. The order
    /// defines the color indices patterns select by.
    #[serde(
        default,
        deserialize_with = "lenient_label_pairs",
        serialize_with = "label_pairs_as_map"
    )]
    pub legend: Vec<(String, String)>,
    #[serde(
        default,
        deserialize_with = "lenient_word_lists",
        serialize_with = "word_lists_as_map"
    )]
    pub color_words: Vec<(String, Vec<String>)>,
    #[serde(default, deserialize_with = "lenient_string_grid")]
    pub word_grid: Vec<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_string_grid")]
    pub color_grid: Vec<Vec<String>>,
}

/// Which schema variant a mystery grid carries.
#[derive(Debug)]
pub enum GridSource<'a> {
    /// Flat color -> words map; cells are assigned via a pattern matrix.
    Flat(&'a [(String, Vec<String>)]),
    /// Pre-laid parallel matrices; cell (r, c) takes `words[r][c]` colored
    /// as `colors[r][c]`.
    Laid {
        words: &'a [Vec<String>],
        colors: &'a [Vec<String>],
    },
}

impl MysteryGridContent {
    /// Resolve the schema variant. A generator that emitted pre-laid grids
    /// has already committed to exact cell contents, so that variant wins
    /// when both are present; with neither, the renderer falls back to
    /// placeholder cells.
    pub fn source(&self) -> Option<GridSource<'_>> {
        if !self.word_grid.is_empty() && !self.color_grid.is_empty() {
            return Some(GridSource::Laid {
                words: &self.word_grid,
                colors: &self.color_grid,
            });
        }
        if !self.color_words.is_empty() {
            return Some(GridSource::Flat(&self.color_words));
        }
        None
    }

    /// Participating color names: legend order, falling back to the flat
    /// map's keys when the legend is missing.
    pub fn color_names(&self) -> Vec<&str> {
        if !self.legend.is_empty() {
            self.legend.iter().map(|(name, _)| name.as_str()).collect()
        } else {
            self.color_words.iter().map(|(name, _)| name.as_str()).collect()
        }
    }
}

// ---- lenient field readers -------------------------------------------------
//
// Every reader below runs over an in-memory `Value` tree (the packet is
// parsed to a tree first), so swallowing an error cannot desynchronize a
// streaming parser; it just substitutes the field's default.

fn display_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn string_list(v: &Value) -> Vec<String> {
    match v {
        Value::Array(items) => items.iter().map(display_string).collect(),
        Value::String(s) => vec![s.clone()],
        _ => Vec::new(),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(display_string(&Value::deserialize(de).unwrap_or(Value::Null)))
}

fn lenient_strings<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
    Ok(string_list(&Value::deserialize(de).unwrap_or(Value::Null)))
}

/// Records (questions, riddles) tolerate junk items by replacing them with
/// the record's default; a junk container becomes an empty list.
fn lenient_records<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let items = match Value::deserialize(de).unwrap_or(Value::Null) {
        Value::Array(items) => items,
        _ => Vec::new(),
    };
    Ok(items
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap_or_default())
        .collect())
}

fn lenient_word_lists<'de, D: Deserializer<'de>>(
    de: D,
) -> Result<Vec<(String, Vec<String>)>, D::Error> {
    Ok(match Value::deserialize(de).unwrap_or(Value::Null) {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), string_list(v))).collect(),
        _ => Vec::new(),
    })
}

fn lenient_label_pairs<'de, D: Deserializer<'de>>(
    de: D,
) -> Result<Vec<(String, String)>, D::Error> {
    Ok(match Value::deserialize(de).unwrap_or(Value::Null) {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), display_string(v))).collect(),
        _ => Vec::new(),
    })
}

fn lenient_string_grid<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<Vec<String>>, D::Error> {
    Ok(match Value::deserialize(de).unwrap_or(Value::Null) {
        Value::Array(rows) => rows.iter().map(string_list).collect(),
        _ => Vec::new(),
    })
}

fn lenient_content<'de, D: Deserializer<'de>>(de: D) -> Result<ActivityContent, D::Error> {
    let v = Value::deserialize(de).unwrap_or(Value::Null);
    Ok(serde_json::from_value(v).unwrap_or_default())
}

fn lenient_mystery_grid<'de, D: Deserializer<'de>>(
    de: D,
) -> Result<Option<MysteryGridContent>, D::Error> {
    let v = Value::deserialize(de).unwrap_or(Value::Null);
    Ok(serde_json::from_value(v).ok())
}

/// The activities list itself must be a list; that failure is fatal for the
/// whole reply. Individual junk items decay to a default (kind-less,
/// therefore skipped) activity.
fn lenient_activities<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<Activity>, D::Error> {
    let items = Vec::<Value>::deserialize(de)?;
    Ok(items
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap_or_default())
        .collect())
}

fn word_lists_as_map<S: Serializer>(
    pairs: &[(String, Vec<String>)],
    ser: S,
) -> Result<S::Ok, S::Error> {
    let mut map = ser.serialize_map(Some(pairs.len()))?;
    for (key, words) in pairs {
        map.serialize_entry(key, words)?;
    }
    map.end()
}

fn label_pairs_as_map<S: Serializer>(
    pairs: &[(String, String)],
    ser: S,
) -> Result<S::Ok, S::Error> {
    let mut map = ser.serialize_map(Some(pairs.len()))?;
    for (key, label) in pairs {
        map.serialize_entry(key, label)?;
    }
    map.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_fenced_reply() {
        let raw = "```json\n{\"overview\": \"Focus.\", \"activities\": []}\n```";
        let packet = GeneratedPacket::from_model_text(raw).unwrap();
        assert_eq!(packet.overview, "Focus.");
        assert!(packet.activities.is_empty());
    }

    #[test]
    fn syntax_and_shape_failures_are_distinct() {
        assert!(matches!(
            GeneratedPacket::from_model_text("not json at all"),
            Err(GenerateError::MalformedResponse(_))
        ));
        // Valid JSON, but no activities list at the top level.
        assert!(matches!(
            GeneratedPacket::from_model_text("{\"overview\": \"x\"}"),
            Err(GenerateError::InvalidPacket(_))
        ));
        assert!(matches!(
            GeneratedPacket::from_model_text("[1, 2, 3]"),
            Err(GenerateError::InvalidPacket(_))
        ));
        assert!(matches!(
            GeneratedPacket::from_model_text("{\"activities\": \"nope\"}"),
            Err(GenerateError::InvalidPacket(_))
        ));
    }

    #[test]
    fn missing_fields_default() {
        let packet = GeneratedPacket::from_model_text("{\"activities\": []}").unwrap();
        assert_eq!(packet.overview, "");
        assert!(packet.target_words.is_empty());
    }

    #[test]
    fn junk_activity_items_decay_to_skippable_defaults() {
        let packet = GeneratedPacket::from_model_text(
            "{\"activities\": [42, {\"type\": \"Sound Mapping\", \"content\": {\"map_words\": [\"ship\"]}}]}",
        )
        .unwrap();
        assert_eq!(packet.activities.len(), 2);
        assert_eq!(packet.activities[0].kind(), None);
        assert_eq!(packet.activities[1].kind(), Some(ActivityKind::SoundMapping));
        assert_eq!(packet.activities[1].content.map_words, vec!["ship"]);
    }

    #[test]
    fn non_string_leaves_coerce() {
        let json = r#"{"activities": [{"type": "Decodable Story", "content": {
            "title": 7,
            "paragraphs": [1, "two", null],
            "questions": [{"q": 5, "a": true}, "junk"]
        }}]}"#;
        let packet = GeneratedPacket::from_model_text(json).unwrap();
        let content = &packet.activities[0].content;
        assert_eq!(content.title, "7");
        assert_eq!(content.paragraphs, vec!["1", "two", ""]);
        assert_eq!(content.questions[0].q, "5");
        assert_eq!(content.questions[0].a, "true");
        assert_eq!(content.questions[1].q, "");
    }

    #[test]
    fn sort_categories_keep_key_order() {
        let json = r#"{"activities": [{"type": "Word Bank Sort", "content": {
            "sort_cats": {"Long A": ["rain"], "Short A": ["cat", "map"], "-ed": ["jumped"]}
        }}]}"#;
        let packet = GeneratedPacket::from_model_text(json).unwrap();
        let cats = &packet.activities[0].content.sort_cats;
        let order: Vec<&str> = cats.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(order, ["Long A", "Short A", "-ed"]);
        assert_eq!(cats[1].1, vec!["cat", "map"]);
    }

    #[test]
    fn mystery_grid_flat_variant() {
        let json = r#"{"activities": [{"type": "Mystery Grid (Color-by-Code)", "content": {
            "mystery_grid": {
                "legend": {"Red": "ar", "Blue": "or", "Green": "er"},
                "color_words": {"Red": ["car"], "Blue": ["fort"], "Green": ["fern"]}
            }
        }}]}"#;
        let packet = GeneratedPacket::from_model_text(json).unwrap();
        let grid = packet.activities[0].content.mystery_grid.as_ref().unwrap();
        assert_eq!(grid.color_names(), ["Red", "Blue", "Green"]);
        assert!(matches!(grid.source(), Some(GridSource::Flat(_))));
    }

    #[test]
    fn mystery_grid_laid_variant_wins_when_present() {
        let json = r#"{"activities": [{"type": "Mystery Grid (Color-by-Code)", "content": {
            "mystery_grid": {
                "legend": {"Red": "ar"},
                "color_words": {"Red": ["car"]},
                "word_grid": [["car", "star"]],
                "color_grid": [["Red", "Red"]]
            }
        }}]}"#;
        let packet = GeneratedPacket::from_model_text(json).unwrap();
        let grid = packet.activities[0].content.mystery_grid.as_ref().unwrap();
        match grid.source() {
            Some(GridSource::Laid { words, colors }) => {
                assert_eq!(words[0], vec!["car", "star"]);
                assert_eq!(colors[0], vec!["Red", "Red"]);
            }
            other => panic!("expected laid grid, got {other:?}"),
        }
    }

    #[test]
    fn malformed_mystery_grid_is_dropped() {
        let json = r#"{"activities": [{"type": "Mystery Grid (Color-by-Code)", "content": {
            "mystery_grid": "oops"
        }}]}"#;
        let packet = GeneratedPacket::from_model_text(json).unwrap();
        assert!(packet.activities[0].content.mystery_grid.is_none());
    }

    #[test]
    fn legend_falls_back_to_color_word_keys() {
        let grid = MysteryGridContent {
            color_words: vec![("Pink".into(), vec!["pig".into()])],
            ..Default::default()
        };
        assert_eq!(grid.color_names(), ["Pink"]);
    }

    #[test]
    fn ordered_maps_serialize_back_as_objects() {
        let json = r#"{"activities": [{"type": "Word Bank Sort", "content": {
            "sort_cats": {"A": ["x"], "B": ["y"]}
        }}]}"#;
        let packet = GeneratedPacket::from_model_text(json).unwrap();
        let out = serde_json::to_value(&packet).unwrap();
        assert!(out["activities"][0]["content"]["sort_cats"].is_object());
    }
}
