use serde::{Deserialize, Serialize};

/// Coarse progress marker. The prologue door only ever advances to `Soon`;
/// the only way back is destroying the record entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chapter {
    #[default]
    Prologue,
    Soon,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProgress {
    #[serde(default)]
    pub chapter: Chapter,
}

/// The single persisted record. Field names match the on-disk JSON of the
/// original web build (`prologueUnlocked` etc.) so an existing save carries
/// over. Every field is individually defaulted: a record missing fields
/// deserializes as defaults overlaid with whatever the file supplies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default)]
    pub prologue_unlocked: bool,
    #[serde(default)]
    pub hint1_opened: bool,
    #[serde(default)]
    pub hint2_opened: bool,
    #[serde(default)]
    pub game: GameProgress,
}

impl ProgressRecord {
    /// Mark the prologue door open. `prologue_unlocked` and the chapter
    /// always move together; this is the only place both are set.
    pub fn unlock(&mut self) {
        self.prologue_unlocked = true;
        self.game.chapter = Chapter::Soon;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_locked_prologue() {
        let record = ProgressRecord::default();
        assert!(!record.prologue_unlocked);
        assert!(!record.hint1_opened);
        assert!(!record.hint2_opened);
        assert_eq!(record.game.chapter, Chapter::Prologue);
    }

    #[test]
    fn unlock_sets_flag_and_chapter_together() {
        let mut record = ProgressRecord::default();
        record.unlock();
        assert!(record.prologue_unlocked);
        assert_eq!(record.game.chapter, Chapter::Soon);
    }

    #[test]
    fn serializes_with_web_field_names() {
        let mut record = ProgressRecord::default();
        record.unlock();
        record.hint2_opened = true;
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"prologueUnlocked\":true"));
        assert!(json.contains("\"hint1Opened\":false"));
        assert!(json.contains("\"hint2Opened\":true"));
        assert!(json.contains("\"chapter\":\"soon\""));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let record: ProgressRecord = serde_json::from_str(r#"{"hint1Opened":true}"#).unwrap();
        assert!(record.hint1_opened);
        assert!(!record.prologue_unlocked);
        assert!(!record.hint2_opened);
        assert_eq!(record.game.chapter, Chapter::Prologue);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let record: ProgressRecord =
            serde_json::from_str(r#"{"prologueUnlocked":true,"somethingElse":42}"#).unwrap();
        assert!(record.prologue_unlocked);
    }

    #[test]
    fn empty_game_object_defaults_chapter() {
        let record: ProgressRecord = serde_json::from_str(r#"{"game":{}}"#).unwrap();
        assert_eq!(record.game.chapter, Chapter::Prologue);
    }
}
