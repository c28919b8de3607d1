//! Lookup of the question (and its record class) a blast request came from.
//!
//! The mapper itself never consults the registry; callers resolve the context
//! question separately when they need the record class for result handling.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordClass {
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub full_name: String,
    pub record_class: RecordClass,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Could not find context question: {0}")]
    QuestionNotFound(String),
}

/// Per-project model of search questions.
pub trait ModelRegistry {
    fn question_by_full_name(&self, project_id: &str, full_name: &str) -> Option<Question>;
}

pub fn context_question<R: ModelRegistry + ?Sized>(
    registry: &R,
    project_id: &str,
    question_full_name: &str,
) -> Result<Question, RegistryError> {
    registry
        .question_by_full_name(project_id, question_full_name)
        .ok_or_else(|| RegistryError::QuestionNotFound(question_full_name.to_string()))
}

pub fn context_record_class<R: ModelRegistry + ?Sized>(
    registry: &R,
    project_id: &str,
    question_full_name: &str,
) -> Result<RecordClass, RegistryError> {
    context_question(registry, project_id, question_full_name).map(|q| q.record_class)
}

/// Registry backed by a map keyed on `(project_id, question_full_name)`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    questions: HashMap<(String, String), Question>,
}

impl InMemoryRegistry {
    pub fn insert(&mut self, project_id: &str, question: Question) {
        self.questions
            .insert((project_id.to_string(), question.full_name.clone()), question);
    }
}

impl ModelRegistry for InMemoryRegistry {
    fn question_by_full_name(&self, project_id: &str, full_name: &str) -> Option<Question> {
        self.questions
            .get(&(project_id.to_string(), full_name.to_string()))
            .cloned()
    }
}
