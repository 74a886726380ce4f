//! The seven naming errors and the per-record flag set

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Automatically checkable naming errors.
///
/// Error 2 is judged manually and has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    TentativeAction,
    MultipleActions,
    ExcessiveLength,
    MissingAction,
    MissingElement,
    VagueTerminology,
    SynonymousTerminology,
}

impl ErrorKind {
    /// All kinds in report column order
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::TentativeAction,
        ErrorKind::MultipleActions,
        ErrorKind::ExcessiveLength,
        ErrorKind::MissingAction,
        ErrorKind::MissingElement,
        ErrorKind::VagueTerminology,
        ErrorKind::SynonymousTerminology,
    ];

    /// Common-error number as used in the naming guidelines
    pub fn code(self) -> u8 {
        match self {
            ErrorKind::TentativeAction => 1,
            ErrorKind::MultipleActions => 3,
            ErrorKind::ExcessiveLength => 4,
            ErrorKind::MissingAction => 5,
            ErrorKind::MissingElement => 6,
            ErrorKind::VagueTerminology => 7,
            ErrorKind::SynonymousTerminology => 8,
        }
    }

    /// Position of this kind inside [`ErrorKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            ErrorKind::TentativeAction => 0,
            ErrorKind::MultipleActions => 1,
            ErrorKind::ExcessiveLength => 2,
            ErrorKind::MissingAction => 3,
            ErrorKind::MissingElement => 4,
            ErrorKind::VagueTerminology => 5,
            ErrorKind::SynonymousTerminology => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::TentativeAction => "Tentative action",
            ErrorKind::MultipleActions => "Multiple actions",
            ErrorKind::ExcessiveLength => "Excessive length",
            ErrorKind::MissingAction => "Missing action",
            ErrorKind::MissingElement => "Missing element",
            ErrorKind::VagueTerminology => "Vague terminology",
            ErrorKind::SynonymousTerminology => "Synonymous terminology",
        }
    }

    /// Column name used in tabular exports, e.g. `error_5`
    pub fn column(self) -> String {
        format!("error_{}", self.code())
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {} ({})", self.code(), self.label())
    }
}

/// Exactly one flag per [`ErrorKind`]; a record may trigger any subset.
///
/// Serialized as `0`/`1` integers keyed by column name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorFlags {
    #[serde(rename = "error_1", deserialize_with = "bit::deserialize")]
    pub tentative_action: bool,
    #[serde(rename = "error_3", deserialize_with = "bit::deserialize")]
    pub multiple_actions: bool,
    #[serde(rename = "error_4", deserialize_with = "bit::deserialize")]
    pub excessive_length: bool,
    #[serde(rename = "error_5", deserialize_with = "bit::deserialize")]
    pub missing_action: bool,
    #[serde(rename = "error_6", deserialize_with = "bit::deserialize")]
    pub missing_element: bool,
    #[serde(rename = "error_7", deserialize_with = "bit::deserialize")]
    pub vague_terminology: bool,
    #[serde(rename = "error_8", deserialize_with = "bit::deserialize")]
    pub synonymous_terminology: bool,
}

impl ErrorFlags {
    pub fn get(&self, kind: ErrorKind) -> bool {
        match kind {
            ErrorKind::TentativeAction => self.tentative_action,
            ErrorKind::MultipleActions => self.multiple_actions,
            ErrorKind::ExcessiveLength => self.excessive_length,
            ErrorKind::MissingAction => self.missing_action,
            ErrorKind::MissingElement => self.missing_element,
            ErrorKind::VagueTerminology => self.vague_terminology,
            ErrorKind::SynonymousTerminology => self.synonymous_terminology,
        }
    }

    pub fn set(&mut self, kind: ErrorKind, value: bool) {
        let slot = match kind {
            ErrorKind::TentativeAction => &mut self.tentative_action,
            ErrorKind::MultipleActions => &mut self.multiple_actions,
            ErrorKind::ExcessiveLength => &mut self.excessive_length,
            ErrorKind::MissingAction => &mut self.missing_action,
            ErrorKind::MissingElement => &mut self.missing_element,
            ErrorKind::VagueTerminology => &mut self.vague_terminology,
            ErrorKind::SynonymousTerminology => &mut self.synonymous_terminology,
        };
        *slot = value;
    }

    /// Flag value as the 0/1 integer used in exported tables
    pub fn bit(&self, kind: ErrorKind) -> u8 {
        u8::from(self.get(kind))
    }

    /// Iterate `(kind, flag)` pairs in column order (always seven items)
    pub fn iter(&self) -> impl Iterator<Item = (ErrorKind, bool)> + '_ {
        ErrorKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Number of errors present
    pub fn count(&self) -> usize {
        self.iter().filter(|(_, flagged)| *flagged).count()
    }

    pub fn any(&self) -> bool {
        self.count() > 0
    }
}

impl Serialize for ErrorFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ErrorFlags", ErrorKind::ALL.len())?;
        state.serialize_field("error_1", &self.bit(ErrorKind::TentativeAction))?;
        state.serialize_field("error_3", &self.bit(ErrorKind::MultipleActions))?;
        state.serialize_field("error_4", &self.bit(ErrorKind::ExcessiveLength))?;
        state.serialize_field("error_5", &self.bit(ErrorKind::MissingAction))?;
        state.serialize_field("error_6", &self.bit(ErrorKind::MissingElement))?;
        state.serialize_field("error_7", &self.bit(ErrorKind::VagueTerminology))?;
        state.serialize_field("error_8", &self.bit(ErrorKind::SynonymousTerminology))?;
        state.end()
    }
}

mod bit {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Bit {
        Flag(bool),
        Int(u8),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Bit::deserialize(deserializer)? {
            Bit::Flag(value) => Ok(value),
            Bit::Int(0) => Ok(false),
            Bit::Int(1) => Ok(true),
            Bit::Int(other) => Err(serde::de::Error::custom(format!(
                "flag must be 0 or 1, found {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_skip_manual_error_two() {
        let codes: Vec<u8> = ErrorKind::ALL.iter().map(|k| k.code()).collect();
        assert_eq!(codes, vec![1, 3, 4, 5, 6, 7, 8]);
        assert_eq!(ErrorKind::from_code(2), None);
        assert_eq!(ErrorKind::from_code(6), Some(ErrorKind::MissingElement));
    }

    #[test]
    fn test_index_matches_position() {
        for (position, kind) in ErrorKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), position);
        }
    }

    #[test]
    fn test_flags_always_seven() {
        let mut flags = ErrorFlags::default();
        assert_eq!(flags.iter().count(), 7);
        flags.set(ErrorKind::MissingAction, true);
        flags.set(ErrorKind::SynonymousTerminology, true);
        assert_eq!(flags.iter().count(), 7);
        assert_eq!(flags.count(), 2);
        assert!(flags.get(ErrorKind::MissingAction));
        assert!(!flags.get(ErrorKind::TentativeAction));
    }

    #[test]
    fn test_flags_serialize_as_bits() {
        let mut flags = ErrorFlags::default();
        flags.set(ErrorKind::ExcessiveLength, true);
        let json = serde_json::to_value(flags).unwrap();
        assert_eq!(json["error_4"], 1);
        assert_eq!(json["error_1"], 0);
        assert_eq!(json.as_object().unwrap().len(), 7);

        let parsed: ErrorFlags = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, flags);
    }

    #[test]
    fn test_flags_reject_non_bit_values() {
        let json = serde_json::json!({
            "error_1": 2, "error_3": 0, "error_4": 0, "error_5": 0,
            "error_6": 0, "error_7": 0, "error_8": 0
        });
        assert!(serde_json::from_value::<ErrorFlags>(json).is_err());
    }

    #[test]
    fn test_display_includes_code_and_label() {
        assert_eq!(
            ErrorKind::VagueTerminology.to_string(),
            "Error 7 (Vague terminology)"
        );
    }
}
