use std::fmt;

/// Terminal result of a list fetch.
///
/// An empty `Loaded` list and a `Failed` fetch are different states and
/// are kept apart all the way to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome<T> {
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> LoadOutcome<T> {
    pub fn from_result<E: fmt::Display>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) => LoadOutcome::Loaded(items),
            Err(e) => LoadOutcome::Failed(e.to_string()),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadOutcome::Failed(_))
    }
}

impl<T, E: fmt::Display> From<Result<Vec<T>, E>> for LoadOutcome<T> {
    fn from(result: Result<Vec<T>, E>) -> Self {
        Self::from_result(result)
    }
}
