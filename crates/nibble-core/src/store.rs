//! Flat-file JSON store
//!
//! The whole record list lives in one human-readable JSON document. Every
//! mutation is a full load, an in-memory transform, and a full rewrite;
//! callers that can race must serialize the load/save pair themselves.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::{FoodIdea, IdeaId, IdeaPatch};

/// Store owning the on-disk document of food ideas
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store backed by the given file path.
    ///
    /// The file does not have to exist yet; it is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full record list.
    ///
    /// A missing file is an empty list, and so is malformed content: the
    /// store stays usable after a hand-edited or corrupted data file.
    pub fn load_all(&self) -> Result<Vec<FoodIdea>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_str(&contents) {
            Ok(ideas) => Ok(ideas),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Malformed data file, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Overwrite the document with the given record list
    pub fn save_all(&self, ideas: &[FoodIdea]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(ideas)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// Pick a fresh id for a new record.
///
/// Coarse millisecond clock, bumped past the current maximum so the id
/// stays unique even when two creations land in the same millisecond.
#[must_use]
pub fn assign_id(existing: &[FoodIdea]) -> IdeaId {
    let max = existing
        .iter()
        .map(|idea| idea.id.value())
        .max()
        .unwrap_or(0);
    IdeaId::from(IdeaId::now().value().max(max + 1))
}

/// Apply a partial update to the record with the given id
pub fn update_idea(ideas: &mut [FoodIdea], id: IdeaId, patch: IdeaPatch) -> Result<()> {
    let idea = ideas
        .iter_mut()
        .find(|idea| idea.id == id)
        .ok_or(Error::NotFound(id.value()))?;
    patch.apply_to(idea);
    Ok(())
}

/// Remove and return the record with the given id
pub fn remove_idea(ideas: &mut Vec<FoodIdea>, id: IdeaId) -> Result<FoodIdea> {
    let index = ideas
        .iter()
        .position(|idea| idea.id == id)
        .ok_or(Error::NotFound(id.value()))?;
    Ok(ideas.remove(index))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::models::IdeaDraft;

    fn idea(id: i64, food: &str) -> FoodIdea {
        FoodIdea {
            id: IdeaId::from(id),
            meal: "dinner".to_string(),
            food: food.to_string(),
            social_media: String::new(),
            done_by: String::new(),
            link: String::new(),
            recipe: Vec::new(),
        }
    }

    fn temp_store(dir: &TempDir) -> JsonStore {
        JsonStore::new(dir.path().join("food-ideas.json"))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        assert_eq!(store.load_all().unwrap(), vec![]);
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        std::fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load_all().unwrap(), vec![]);

        std::fs::write(store.path(), "   ").unwrap();
        assert_eq!(store.load_all().unwrap(), vec![]);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        let ideas = vec![idea(1, "Soup"), idea(2, "Ramen")];

        store.save_all(&ideas).unwrap();
        assert_eq!(store.load_all().unwrap(), ideas);

        // Loading twice without a mutation yields the same sequence
        assert_eq!(store.load_all().unwrap(), store.load_all().unwrap());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("nested").join("food-ideas.json"));
        store.save_all(&[idea(1, "Soup")]).unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_save_is_human_readable() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        store.save_all(&[idea(1, "Soup")]).unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains('\n'), "expected pretty-printed output");
    }

    #[test]
    fn test_create_then_list_contains_new_record() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        store.save_all(&[idea(1, "Soup")]).unwrap();

        let mut ideas = store.load_all().unwrap();
        let draft = IdeaDraft {
            meal: "lunch".to_string(),
            food: "Ramen".to_string(),
            ..IdeaDraft::default()
        };
        let id = assign_id(&ideas);
        ideas.push(draft.into_idea(id));
        store.save_all(&ideas).unwrap();

        let listed = store.load_all().unwrap();
        assert_eq!(listed.len(), 2);
        let created = listed.iter().find(|i| i.id == id).unwrap();
        assert_eq!(created.food, "Ramen");
        assert_eq!(listed.iter().filter(|i| i.id == id).count(), 1);
    }

    #[test]
    fn test_assign_id_bumps_past_existing_maximum() {
        let far_future = IdeaId::now().value() + 1_000_000;
        let ideas = vec![idea(far_future, "Soup")];
        let id = assign_id(&ideas);
        assert_eq!(id.value(), far_future + 1);
    }

    #[test]
    fn test_assign_id_unique_within_same_millisecond() {
        let mut ideas = Vec::new();
        for _ in 0..5 {
            let id = assign_id(&ideas);
            assert!(ideas.iter().all(|i: &FoodIdea| i.id != id));
            ideas.push(idea(id.value(), "x"));
        }
    }

    #[test]
    fn test_update_replaces_only_supplied_fields() {
        let mut ideas = vec![idea(1, "Soup")];
        let patch = IdeaPatch {
            done_by: Some("B".to_string()),
            ..IdeaPatch::default()
        };
        update_idea(&mut ideas, IdeaId::from(1), patch).unwrap();
        assert_eq!(ideas[0].done_by, "B");
        assert_eq!(ideas[0].food, "Soup");
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut ideas = vec![idea(1, "Soup")];
        let err = update_idea(&mut ideas, IdeaId::from(99), IdeaPatch::default()).unwrap_err();
        assert!(matches!(err, Error::NotFound(99)));
        assert_eq!(ideas[0].food, "Soup");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut ideas = vec![idea(1, "Soup"), idea(2, "Ramen"), idea(3, "Tacos")];

        let removed = remove_idea(&mut ideas, IdeaId::from(2)).unwrap();
        assert_eq!(removed.food, "Ramen");
        assert_eq!(ideas, vec![idea(1, "Soup"), idea(3, "Tacos")]);

        let err = remove_idea(&mut ideas, IdeaId::from(2)).unwrap_err();
        assert!(matches!(err, Error::NotFound(2)));
    }

    #[test]
    fn test_load_accepts_string_ids_and_string_recipe() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        std::fs::write(
            store.path(),
            r#"[{"id": "7", "food": "Soup", "recipe": "boil\nserve"}]"#,
        )
        .unwrap();

        let ideas = store.load_all().unwrap();
        assert_eq!(ideas[0].id, IdeaId::from(7));
        assert_eq!(ideas[0].recipe, vec!["boil", "serve"]);

        // Removal by typed id matches a record that was stored as a string
        let mut ideas = ideas;
        remove_idea(&mut ideas, IdeaId::from(7)).unwrap();
        assert!(ideas.is_empty());
    }
}
