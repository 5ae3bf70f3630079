/// Domain aggregates
use super::base::{AggregateRoot, DomainError, DomainResult, Entity};
use super::pagination::Searchable;
use super::validation::{Notification, ValidationError, ValidationHandler};
use super::validators::CategoryValidator;
use super::value_objects::CategoryId;
use chrono::{DateTime, SubsecRound, Utc};

const VALIDATION_FAILURE: &str = "Failed to create a Category";
const RESTORE_FAILURE: &str = "Stored category is invalid";

/// A Category is the aggregate root of the catalog.
///
/// Every instance reachable from outside this module has passed validation:
/// the factory and all mutators validate a candidate state and only hand it
/// out (or commit it into `self`) when no rule is violated.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Stored fields of a category, used to rebuild an aggregate from storage
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryState {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Create a new category.
    ///
    /// `created_at` and `updated_at` are stamped with the same instant, and an
    /// inactive category is created already soft-deleted at that instant.
    pub fn new_category(
        name: Option<&str>,
        description: Option<&str>,
        is_active: bool,
    ) -> DomainResult<Self> {
        let now = current_time();
        let category = Category {
            id: CategoryId::new(),
            name: name.unwrap_or_default().to_string(),
            description: description.map(str::to_string),
            is_active,
            created_at: now,
            updated_at: now,
            deleted_at: if is_active { None } else { Some(now) },
        };

        category.self_validate()?;
        Ok(category)
    }

    /// Rebuild a category from stored fields.
    ///
    /// Besides the validator rules, the stored lifecycle must be consistent:
    /// a category is inactive exactly when it has a deletion time, and it was
    /// never updated before it was created.
    pub fn restore(state: CategoryState) -> DomainResult<Self> {
        let category = Category {
            id: state.id,
            name: state.name,
            description: state.description,
            is_active: state.is_active,
            created_at: state.created_at,
            updated_at: state.updated_at,
            deleted_at: state.deleted_at,
        };

        let mut notification = Notification::new();
        category.check_lifecycle(&mut notification);
        category.validate(&mut notification);

        if notification.has_errors() {
            return Err(DomainError::notification(RESTORE_FAILURE, notification));
        }
        Ok(category)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always `Some` on a validated category
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Mark the category active and clear its deletion time
    pub fn activate(&mut self) -> DomainResult<()> {
        self.mutate(|draft, now| draft.apply_activation(true, now))
    }

    /// Mark the category inactive.
    ///
    /// The deletion time is only stamped the first time; deactivating an
    /// inactive category keeps the original `deleted_at`.
    pub fn deactivate(&mut self) -> DomainResult<()> {
        self.mutate(|draft, now| draft.apply_activation(false, now))
    }

    /// Replace name, description and activation state.
    ///
    /// A `None` description keeps the current one, which means the
    /// "Description should not be null" rule can only fail on creation.
    pub fn update(
        &mut self,
        name: Option<&str>,
        description: Option<&str>,
        is_active: bool,
    ) -> DomainResult<()> {
        self.mutate(|draft, now| {
            draft.apply_activation(is_active, now);
            draft.name = name.unwrap_or_default().to_string();
            if let Some(description) = description {
                draft.description = Some(description.to_string());
            }
        })
    }

    /// Apply `change` to a copy, validate the copy and only then commit it
    fn mutate<F>(&mut self, change: F) -> DomainResult<()>
    where
        F: FnOnce(&mut Category, DateTime<Utc>),
    {
        let now = current_time().max(self.updated_at);
        let mut draft = self.clone();
        change(&mut draft, now);
        draft.updated_at = now;

        draft.self_validate()?;
        *self = draft;
        Ok(())
    }

    fn apply_activation(&mut self, is_active: bool, now: DateTime<Utc>) {
        if is_active {
            self.deleted_at = None;
        } else if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.is_active = is_active;
    }

    fn self_validate(&self) -> DomainResult<()> {
        let mut notification = Notification::new();
        self.validate(&mut notification);

        if notification.has_errors() {
            return Err(DomainError::notification(VALIDATION_FAILURE, notification));
        }
        Ok(())
    }

    fn check_lifecycle(&self, handler: &mut dyn ValidationHandler) {
        match (self.is_active, self.deleted_at) {
            (true, Some(_)) => {
                handler.append(ValidationError::new("Active category should not have a deletion time"));
            }
            (false, None) => {
                handler.append(ValidationError::new("Inactive category should have a deletion time"));
            }
            _ => {}
        }

        if self.updated_at < self.created_at {
            handler.append(ValidationError::new("Update time should not precede creation time"));
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Category {
    type Validator = CategoryValidator;
}

impl Searchable for Category {
    type Key = CategoryId;

    fn search_key(&self) -> &CategoryId {
        &self.id
    }

    fn search_name(&self) -> &str {
        &self.name
    }

    fn search_created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Wall clock truncated to the precision kept by storage
fn current_time() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(error: &DomainError) -> Vec<&str> {
        error.errors().iter().map(|e| e.message()).collect()
    }

    #[test]
    fn test_create_active_category() {
        let category = Category::new_category(Some("Action"), Some("Some description"), true).unwrap();

        assert_eq!(category.name(), "Action");
        assert_eq!(category.description(), Some("Some description"));
        assert!(category.is_active());
        assert!(category.deleted_at().is_none());
        assert_eq!(category.created_at(), category.updated_at());
    }

    #[test]
    fn test_create_inactive_category_is_soft_deleted() {
        let category = Category::new_category(Some("Action"), Some("desc"), false).unwrap();

        assert!(!category.is_active());
        assert_eq!(category.deleted_at(), Some(category.created_at()));
    }

    #[test]
    fn test_create_reports_all_errors_in_order() {
        let error = Category::new_category(None, None, true).unwrap_err();

        assert_eq!(error.to_string(), "Failed to create a Category");
        assert_eq!(
            messages(&error),
            vec!["Name should not be null or empty", "Description should not be null"]
        );
    }

    #[test]
    fn test_create_short_trimmed_name() {
        let error = Category::new_category(Some("Fi "), Some("desc"), true).unwrap_err();
        assert_eq!(messages(&error), vec!["Name should be between 3 and 255 characters"]);
    }

    #[test]
    fn test_restore_revalidates() {
        let category = Category::new_category(Some("Action"), Some("desc"), true).unwrap();
        let state = CategoryState {
            id: *category.id(),
            name: category.name().to_string(),
            description: None,
            is_active: true,
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: None,
        };

        let error = Category::restore(state.clone()).unwrap_err();
        assert_eq!(error.errors(), &[ValidationError::new("Description should not be null")]);

        let restored = Category::restore(CategoryState {
            description: Some("desc".to_string()),
            ..state
        })
        .unwrap();
        assert_eq!(restored, category);
    }

    fn stored_state(category: &Category) -> CategoryState {
        CategoryState {
            id: *category.id(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        }
    }

    #[test]
    fn test_restore_rejects_active_category_with_deletion_time() {
        let category = Category::new_category(Some("Action"), Some("desc"), true).unwrap();
        let state = CategoryState {
            deleted_at: Some(category.created_at()),
            ..stored_state(&category)
        };

        let error = Category::restore(state).unwrap_err();

        assert_eq!(error.to_string(), "Stored category is invalid");
        assert_eq!(messages(&error), vec!["Active category should not have a deletion time"]);
    }

    #[test]
    fn test_restore_rejects_inactive_category_without_deletion_time() {
        let category = Category::new_category(Some("Action"), Some("desc"), false).unwrap();
        let state = CategoryState {
            deleted_at: None,
            ..stored_state(&category)
        };

        let error = Category::restore(state).unwrap_err();

        assert_eq!(messages(&error), vec!["Inactive category should have a deletion time"]);
    }

    #[test]
    fn test_restore_rejects_update_before_creation() {
        let category = Category::new_category(Some("Action"), Some("desc"), true).unwrap();
        let state = CategoryState {
            updated_at: category.created_at() - chrono::Duration::seconds(1),
            ..stored_state(&category)
        };

        let error = Category::restore(state).unwrap_err();

        assert_eq!(messages(&error), vec!["Update time should not precede creation time"]);
    }

    #[test]
    fn test_restore_reports_lifecycle_before_field_rules() {
        let category = Category::new_category(Some("Action"), Some("desc"), true).unwrap();
        let state = CategoryState {
            name: "ab".to_string(),
            deleted_at: Some(category.created_at()),
            ..stored_state(&category)
        };

        let error = Category::restore(state).unwrap_err();

        assert_eq!(
            messages(&error),
            vec![
                "Active category should not have a deletion time",
                "Name should be between 3 and 255 characters",
            ]
        );
    }

    #[test]
    fn test_every_validation_failure_uses_one_title() {
        let mut category = Category::new_category(Some("Action"), Some("desc"), true).unwrap();

        let on_create = Category::new_category(Some("ab"), Some("desc"), true).unwrap_err();
        let on_update = category.update(Some("ab"), None, true).unwrap_err();

        assert_eq!(on_create.to_string(), "Failed to create a Category");
        assert_eq!(on_update.to_string(), "Failed to create a Category");
    }

    #[test]
    fn test_deactivate_then_activate() {
        let mut category = Category::new_category(Some("Action"), Some("desc"), true).unwrap();
        let created_at = category.created_at();

        category.deactivate().unwrap();
        assert!(!category.is_active());
        assert!(category.deleted_at().is_some());
        assert!(category.updated_at() >= created_at);

        category.activate().unwrap();
        assert!(category.is_active());
        assert!(category.deleted_at().is_none());
        assert_eq!(category.created_at(), created_at);
    }

    #[test]
    fn test_deactivate_twice_keeps_first_deletion_time() {
        let mut category = Category::new_category(Some("Action"), Some("desc"), true).unwrap();

        category.deactivate().unwrap();
        let deleted_at = category.deleted_at();
        let first_update = category.updated_at();

        category.deactivate().unwrap();

        assert_eq!(category.deleted_at(), deleted_at);
        assert!(category.updated_at() >= first_update);
    }

    #[test]
    fn test_update_changes_fields() {
        let mut category = Category::new_category(Some("Action"), Some("desc"), true).unwrap();
        let id = *category.id();

        category.update(Some("Horror"), Some("Scary"), false).unwrap();

        assert_eq!(category.id(), &id);
        assert_eq!(category.name(), "Horror");
        assert_eq!(category.description(), Some("Scary"));
        assert!(!category.is_active());
        assert!(category.deleted_at().is_some());
    }

    #[test]
    fn test_update_without_description_keeps_existing() {
        let mut category = Category::new_category(Some("Action"), Some("original"), true).unwrap();

        category.update(Some("Adventure"), None, true).unwrap();

        assert_eq!(category.description(), Some("original"));
    }

    #[test]
    fn test_failed_update_leaves_category_unchanged() {
        let mut category = Category::new_category(Some("Action"), Some("desc"), true).unwrap();
        let before = category.clone();

        let error = category.update(Some("ab"), Some(&"x".repeat(4_001)), false).unwrap_err();

        assert_eq!(error.to_string(), "Failed to create a Category");
        assert_eq!(
            messages(&error),
            vec![
                "Name should be between 3 and 255 characters",
                "Description should be between 1 and 4000 characters",
            ]
        );
        assert_eq!(category, before);
    }

    #[test]
    fn test_updated_at_never_moves_backwards() {
        let mut category = Category::new_category(Some("Action"), Some("desc"), true).unwrap();
        let mut previous = category.updated_at();

        for _ in 0..5 {
            category.deactivate().unwrap();
            category.activate().unwrap();
            assert!(category.updated_at() >= previous);
            previous = category.updated_at();
        }
    }
}
