/// Validators for domain aggregates
use super::aggregates::Category;
use super::validation::{ValidationConfig, ValidationError, ValidationHandler, Validator};

/// Checks the name and description rules of a [`Category`].
///
/// Name checks always run before description checks, and a failing name does
/// not stop the description from being checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryValidator {
    config: ValidationConfig,
}

impl CategoryValidator {
    pub fn new(config: ValidationConfig) -> Self {
        CategoryValidator { config }
    }

    fn check_name_constraints(&self, name: &str, handler: &mut dyn ValidationHandler) {
        if name.trim().is_empty() {
            handler.append(ValidationError::new("Name should not be null or empty"));
            return;
        }

        let length = name.trim().chars().count();
        if length < self.config.name_min_length || length > self.config.name_max_length {
            handler.append(ValidationError::new(format!(
                "Name should be between {} and {} characters",
                self.config.name_min_length, self.config.name_max_length
            )));
        }
    }

    fn check_description_constraints(
        &self,
        description: Option<&str>,
        handler: &mut dyn ValidationHandler,
    ) {
        let Some(description) = description else {
            handler.append(ValidationError::new("Description should not be null"));
            return;
        };

        if description.chars().count() > self.config.description_max_length {
            handler.append(ValidationError::new(format!(
                "Description should be between 1 and {} characters",
                self.config.description_max_length
            )));
        }
    }
}

impl Validator<Category> for CategoryValidator {
    fn validate(&self, category: &Category, handler: &mut dyn ValidationHandler) {
        self.check_name_constraints(category.name(), handler);
        self.check_description_constraints(category.description(), handler);
    }
}
