//! Naming rules
//!
//! Each rule is a pure function of a measure name and its reference
//! vocabulary. No rule reads another rule's outcome, so rules can be run in
//! any order, or individually.

pub mod length;
pub mod missing_action;
pub mod missing_element;
pub mod multiple_actions;
pub mod synonyms;
pub mod tentative;
pub mod vague;

pub use length::{check_excessive_length, DEFAULT_LENGTH_THRESHOLD};
pub use missing_action::check_missing_action;
pub use missing_element::check_missing_element;
pub use multiple_actions::{check_multiple_actions, has_conjunction};
pub use synonyms::{check_synonymous_terminology, AttestedGroup, SynonymAnalysis};
pub use tentative::check_tentative_action;
pub use vague::check_vague_terminology;
