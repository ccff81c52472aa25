//! Field checks that gate the `submit -> preview` transition.
//!
//! The reducer never validates; callers run [`validate_idea`] first and only dispatch
//! the step change when it passes.

use crate::catalog::MIN_DESCRIPTION_CHARS;
use crate::model::Idea;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdeaField {
    Name,
    Description,
    Audience,
}

/// One failed rule, with the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: IdeaField,
    pub message: &'static str,
}

/// All rules that failed for one idea, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Default, thiserror::Error)]
#[error("{}", join_messages(.errors))]
pub struct IdeaValidation {
    pub errors: Vec<FieldError>,
}

impl IdeaValidation {
    pub fn message_for(&self, field: IdeaField) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors.iter().map(|e| e.message).collect::<Vec<_>>().join("; ")
}

pub fn validate_idea(idea: &Idea) -> Result<(), IdeaValidation> {
    let mut errors = Vec::new();

    if idea.name.trim().is_empty() {
        errors.push(FieldError {
            field: IdeaField::Name,
            message: "Product name is required",
        });
    }
    if idea.description.chars().count() < MIN_DESCRIPTION_CHARS {
        errors.push(FieldError {
            field: IdeaField::Description,
            message: "Description must be at least 100 characters",
        });
    }
    if idea.audience.is_empty() {
        errors.push(FieldError {
            field: IdeaField::Audience,
            message: "At least one target audience is required",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(IdeaValidation { errors })
    }
}
