//! JSON persistence for [`VitaSyncData`](crate::models::VitaSyncData).
//!
//! # Document Format
//!
//! A single JSON object, pretty-printed with four-space indentation:
//!
//! ```json
//! {
//!     "name": "My VitaSync Data",
//!     "workouts": [
//!         { "date": "2025-01-01", "exercises": [
//!             { "name": "Push Ups", "sets": [ { "targetReps": 10, "completedReps": 10 } ] }
//!         ] }
//!     ],
//!     "meals": [ { "name": "Oatmeal", "protein": 10, "carbs": 30, "fat": 5 } ],
//!     "recipes": [ { "name": "Alfredo Pasta", "instructions": "...", "ingredients": ["pasta"] } ]
//! }
//! ```
//!
//! There is no version field. All four top-level keys are required.

mod document;
mod error;
mod store;

pub use document::{read_document, write_document};
pub use error::DocumentError;
pub use store::DocumentStore;
