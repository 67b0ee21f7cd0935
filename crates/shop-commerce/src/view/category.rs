use crate::catalog::Category;
use crate::ids::CategoryId;
use crate::view::LoadOutcome;

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryEvent {
    Loaded(LoadOutcome<Category>),
    Selected(CategoryId),
    Cleared,
}

/// State of the category screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryViewState {
    pub loading: bool,
    pub error: Option<String>,
    pub categories: Vec<Category>,
    pub selected: Option<Category>,
}

impl Default for CategoryViewState {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            categories: Vec::new(),
            selected: None,
        }
    }
}

impl CategoryViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(mut self, event: CategoryEvent) -> Self {
        tracing::trace!(?event, "category view event");

        match event {
            CategoryEvent::Loaded(LoadOutcome::Loaded(categories)) => {
                self.loading = false;
                self.error = None;
                // Drop a selection that no longer exists.
                if let Some(selected) = &self.selected {
                    self.selected = categories.iter().find(|c| c.id == selected.id).cloned();
                }
                self.categories = categories;
            }
            CategoryEvent::Loaded(LoadOutcome::Failed(message)) => {
                self.loading = false;
                self.error = Some(message);
                self.categories.clear();
                self.selected = None;
            }
            CategoryEvent::Selected(id) => match self.categories.iter().find(|c| c.id == id) {
                Some(category) => self.selected = Some(category.clone()),
                None => tracing::debug!(category = %id, "ignoring selection of unknown category"),
            },
            CategoryEvent::Cleared => self.selected = None,
        }

        self
    }

    pub fn selected_id(&self) -> Option<&CategoryId> {
        self.selected.as_ref().map(|c| &c.id)
    }
}
