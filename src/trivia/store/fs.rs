use super::{next_question_id, DataStore};
use crate::error::{Result, TriviaError};
use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk layout of the data file.
#[derive(Debug, Serialize, Deserialize)]
struct DataFile {
    next_id: QuestionId,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    questions: Vec<Question>,
}

impl Default for DataFile {
    fn default() -> Self {
        Self {
            next_id: 1,
            categories: Vec::new(),
            questions: Vec::new(),
        }
    }
}

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data file seeded with `categories` if it does not exist yet.
    ///
    /// Returns `true` when a new file was written.
    pub fn init<I, T>(&self, categories: I) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        if self.path.exists() {
            return Ok(false);
        }

        let data = DataFile {
            categories: categories
                .into_iter()
                .enumerate()
                .map(|(i, kind)| Category::new(i as CategoryId + 1, kind))
                .collect(),
            ..DataFile::default()
        };
        self.save(&data)?;
        Ok(true)
    }

    fn load(&self) -> Result<DataFile> {
        if !self.path.exists() {
            return Ok(DataFile::default());
        }
        let content = fs::read_to_string(&self.path).map_err(TriviaError::Io)?;
        let mut data: DataFile =
            serde_json::from_str(&content).map_err(TriviaError::Serialization)?;

        // Hand-edited files may be out of order; listings must not be.
        data.categories.sort_by_key(|c| c.id);
        data.questions.sort_by_key(|q| q.id);

        let max_id = data.questions.last().map(|q| q.id).unwrap_or(0);
        if data.next_id <= max_id {
            return Err(TriviaError::Store(format!(
                "Corrupt data file {}: next_id {} is not above existing id {}",
                self.path.display(),
                data.next_id,
                max_id
            )));
        }
        Ok(data)
    }

    fn save(&self, data: &DataFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TriviaError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(data).map_err(TriviaError::Serialization)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(TriviaError::Io)?;
        fs::rename(&tmp, &self.path).map_err(TriviaError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.load()?.categories)
    }

    fn list_questions(&self) -> Result<Vec<Question>> {
        Ok(self.load()?.questions)
    }

    fn find_category(&self, id: CategoryId) -> Result<Option<Category>> {
        Ok(self.load()?.categories.into_iter().find(|c| c.id == id))
    }

    fn insert_question(&mut self, question: NewQuestion) -> Result<Question> {
        let mut data = self.load()?;
        let id = data.next_id;
        let question = question.into_question(id);

        data.next_id = next_question_id(id)?;
        data.questions.push(question.clone());
        self.save(&data)?;

        debug!(id, path = %self.path.display(), "question written");
        Ok(question)
    }

    fn delete_question(&mut self, id: QuestionId) -> Result<bool> {
        let mut data = self.load()?;
        let before = data.questions.len();
        data.questions.retain(|q| q.id != id);
        if data.questions.len() == before {
            return Ok(false);
        }

        self.save(&data)?;
        debug!(id, path = %self.path.display(), "question removed");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DEFAULT_CATEGORIES;

    fn new_question(text: &str, category_id: CategoryId) -> NewQuestion {
        NewQuestion {
            text: text.to_string(),
            answer: "answer".to_string(),
            difficulty: 3,
            category_id,
        }
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data.json"));

        assert!(store.list_categories().unwrap().is_empty());
        assert!(store.list_questions().unwrap().is_empty());
    }

    #[test]
    fn init_seeds_categories_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data.json"));

        assert!(store.init(DEFAULT_CATEGORIES).unwrap());
        assert!(!store.init(["Ignored"]).unwrap());

        let categories = store.list_categories().unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0], Category::new(1, "Science"));
        assert_eq!(categories[5], Category::new(6, "Sports"));
        assert_eq!(store.find_category(4).unwrap().unwrap().kind, "History");
        assert!(store.find_category(99).unwrap().is_none());
    }

    #[test]
    fn insert_and_delete_persist_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data.json");

        let mut store = FileStore::new(&path);
        store.init(DEFAULT_CATEGORIES).unwrap();
        let first = store.insert_question(new_question("first", 1)).unwrap();
        let second = store.insert_question(new_question("second", 2)).unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        let mut reopened = FileStore::new(&path);
        let questions = reopened.list_questions().unwrap();
        assert_eq!(questions, vec![first.clone(), second.clone()]);

        assert!(reopened.delete_question(second.id).unwrap());
        assert!(!reopened.delete_question(second.id).unwrap());

        let third = reopened.insert_question(new_question("third", 1)).unwrap();
        assert_eq!(third.id, 3);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn rejects_counter_behind_existing_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(
            &path,
            r#"{"next_id": 1, "questions": [{"id": 5, "question": "q", "answer": "a", "difficulty": 1, "category": 1}]}"#,
        )
        .unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.list_questions(),
            Err(TriviaError::Store(_))
        ));
    }

    #[test]
    fn exhausted_counter_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let content = format!(r#"{{"next_id": {}, "categories": [{{"id": 1, "type": "Science"}}]}}"#, u32::MAX);
        fs::write(&path, &content).unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(
            store.insert_question(new_question("overflow", 1)),
            Err(TriviaError::Store(_))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn unreadable_json_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.list_categories(),
            Err(TriviaError::Serialization(_))
        ));
    }
}
