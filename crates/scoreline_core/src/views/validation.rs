use crate::memo::{Memo, MemoSlot};
use crate::store::{access, FieldErrors, Store};
use once_cell::sync::Lazy;
use std::sync::Arc;

static NO_ERRORS: Lazy<Arc<FieldErrors>> = Lazy::new(|| Arc::new(FieldErrors::new()));

pub struct ValidationSelectors {
    field_error: Memo<(Arc<FieldErrors>, String), Option<String>>,
}

impl ValidationSelectors {
    pub fn new() -> Self {
        Self { field_error: Memo::new("validation.field_error") }
    }

    /// Field errors of `form`; an unknown form has an empty map
    pub fn form_errors(&self, store: &Store, form: &str) -> Arc<FieldErrors> {
        match access::validation_slice(store).forms.get(form) {
            Some(errors) => Arc::clone(errors),
            None => Arc::clone(&NO_ERRORS),
        }
    }

    pub fn field_error(&self, store: &Store, form: &str, field: &str) -> Option<String> {
        let errors = self.form_errors(store, form);
        self.field_error
            .get_or_compute((errors, field.to_string()), |(errors, field)| errors.get(field).cloned())
    }

    pub fn has_errors(&self, store: &Store, form: &str) -> bool {
        !self.form_errors(store, form).is_empty()
    }

    pub(crate) fn memos(&self) -> Vec<&dyn MemoSlot> {
        vec![&self.field_error]
    }
}

impl Default for ValidationSelectors {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memo::MemoStats;
    use crate::store::Action;
    use serde_json::json;

    fn with_login_errors() -> Store {
        Store::from_value(json!({
            "validation": {"forms": {"login": {"email": "required"}}}
        }))
        .unwrap()
    }

    #[test]
    fn test_absence_semantics() {
        let views = ValidationSelectors::new();
        let store = with_login_errors();

        assert!(views.form_errors(&store, "signup").is_empty());
        assert_eq!(views.field_error(&store, "login", "email").as_deref(), Some("required"));
        assert_eq!(views.field_error(&store, "login", "password"), None);
        assert_eq!(views.field_error(&store, "signup", "email"), None);
        assert!(views.has_errors(&store, "login"));
        assert!(!views.has_errors(&Store::new(), "login"));
    }

    #[test]
    fn test_other_form_change_keeps_field_error_cached() {
        let views = ValidationSelectors::new();
        let store = with_login_errors();
        views.field_error(&store, "login", "email");

        let next = store.apply(Action::SetFieldError {
            form: "profile".into(),
            field: "bio".into(),
            message: Some("too long".into()),
        });
        assert_eq!(views.field_error(&next, "login", "email").as_deref(), Some("required"));
        assert_eq!(views.field_error.stats(), MemoStats { hits: 1, misses: 1 });
    }

    #[test]
    fn test_cleared_form() {
        let views = ValidationSelectors::new();
        let cleared = with_login_errors().apply(Action::ClearFormErrors { form: "login".into() });
        assert!(!views.has_errors(&cleared, "login"));
        assert_eq!(views.field_error(&cleared, "login", "email"), None);
    }
}
