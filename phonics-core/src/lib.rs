//! Data model and text utilities for the phonics worksheet generator.
//!
//! This crate owns everything that is independent of PDF geometry: the
//! worksheet plan the UI assembles, the parsed shape of the content
//! generator's JSON reply, the sanitizer that makes generated text safe for
//! single-byte font encodings, the legend color resolver, and the error
//! taxonomy for the generation step. Rendering lives in `packet-pdf`.

pub mod catalog;
pub mod color;
pub mod error;
pub mod model;
pub mod plan;
pub mod sanitize;

pub use error::GenerateError;
pub use model::{
    Activity, ActivityContent, GeneratedPacket, GridSource, MysteryGridContent, Question, Riddle,
};
pub use plan::{ActivityKind, PlanItem, WorksheetPlan};
