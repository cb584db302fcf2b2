//! To-do item entity - a task with an optional location and a route

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::capabilities::{Locatable, RouteSource};
use crate::errors::DomainError;
use crate::value_objects::{EntityId, GeoPoint, Route, format_route_point};

/// Object type used in to-do item identities
pub const TODO_OBJECT_TYPE: &str = "TODO";

/// Maximum description length
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// A to-do item owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDoItem {
    pub id: EntityId,
    description: String,
    pub owned_by: String,
    complete: bool,
    location: Option<GeoPoint>,
    /// Route points in stored text form (`"<longitude>;<latitude>"`)
    #[serde(default)]
    points: Vec<String>,
    #[serde(default)]
    dependencies: BTreeSet<EntityId>,
}

impl ToDoItem {
    /// Create a new, not yet complete item
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the description is invalid.
    pub fn new(
        description: impl Into<String>,
        owned_by: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let description = description.into();
        validate_description(&description)?;
        Ok(Self {
            id: EntityId::new(TODO_OBJECT_TYPE),
            description,
            owned_by: owned_by.into(),
            complete: false,
            location: None,
            points: Vec::new(),
            dependencies: BTreeSet::new(),
        })
    }

    /// Replace the stored route text
    #[must_use]
    pub fn with_points<I, S>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.points = points.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the stored route with the given points
    #[must_use]
    pub fn with_route(mut self, points: &[GeoPoint]) -> Self {
        self.points = points.iter().map(format_route_point).collect();
        self
    }

    #[must_use]
    pub const fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Change the description
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the description is invalid.
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), DomainError> {
        let description = description.into();
        validate_description(&description)?;
        self.description = description;
        Ok(())
    }

    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Stored route text
    pub fn points(&self) -> &[String] {
        &self.points
    }

    /// Display title, flagging completed items
    pub fn title(&self) -> String {
        if self.complete {
            format!("{} - Completed!", self.description)
        } else {
            self.description.clone()
        }
    }

    /// Icon name reflecting completion state
    pub const fn icon_name(&self) -> &'static str {
        if self.complete {
            "ToDoItem-done"
        } else {
            "ToDoItem-todo"
        }
    }

    /// Reason the `completed` action is unavailable, if any
    pub const fn disable_completed(&self) -> Option<&'static str> {
        if self.complete {
            Some("Already completed")
        } else {
            None
        }
    }

    /// Mark the item as complete
    pub fn completed(&mut self) -> Result<&mut Self, DomainError> {
        if let Some(reason) = self.disable_completed() {
            return Err(DomainError::NotPermitted(reason.to_string()));
        }
        self.complete = true;
        Ok(self)
    }

    /// Reason the `not_yet_completed` action is unavailable, if any
    pub const fn disable_not_yet_completed(&self) -> Option<&'static str> {
        if self.complete {
            None
        } else {
            Some("Not yet completed")
        }
    }

    /// Reopen a completed item
    pub fn not_yet_completed(&mut self) -> Result<&mut Self, DomainError> {
        if let Some(reason) = self.disable_not_yet_completed() {
            return Err(DomainError::NotPermitted(reason.to_string()));
        }
        self.complete = false;
        Ok(self)
    }

    /// Items this one depends on
    pub const fn dependencies(&self) -> &BTreeSet<EntityId> {
        &self.dependencies
    }

    /// Reason dependencies cannot be added, if any
    pub const fn disable_add_dependency(&self) -> Option<&'static str> {
        if self.complete {
            Some("Cannot add dependencies for items that are complete")
        } else {
            None
        }
    }

    /// Reason `dependency` cannot be added, if any
    pub fn validate_add_dependency(&self, dependency: &EntityId) -> Option<&'static str> {
        if self.dependencies.contains(dependency) {
            Some("Already a dependency")
        } else if *dependency == self.id {
            Some("Can't set up a dependency to self")
        } else {
            None
        }
    }

    /// Add a dependency on another item
    pub fn add_dependency(&mut self, dependency: EntityId) -> Result<&mut Self, DomainError> {
        if let Some(reason) = self.disable_add_dependency() {
            return Err(DomainError::NotPermitted(reason.to_string()));
        }
        if let Some(reason) = self.validate_add_dependency(&dependency) {
            return Err(DomainError::ValidationError(reason.to_string()));
        }
        self.dependencies.insert(dependency);
        Ok(self)
    }

    /// Reason dependencies cannot be removed, if any
    pub fn disable_remove_dependency(&self) -> Option<&'static str> {
        if self.complete {
            Some("Cannot remove dependencies for items that are complete")
        } else if self.dependencies.is_empty() {
            Some("No dependencies to remove")
        } else {
            None
        }
    }

    /// Remove a dependency
    pub fn remove_dependency(&mut self, dependency: &EntityId) -> Result<&mut Self, DomainError> {
        if let Some(reason) = self.disable_remove_dependency() {
            return Err(DomainError::NotPermitted(reason.to_string()));
        }
        if !self.dependencies.remove(dependency) {
            return Err(DomainError::ValidationError("Not a dependency".to_string()));
        }
        Ok(self)
    }
}

impl Locatable for ToDoItem {
    fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    fn set_location(&mut self, location: Option<GeoPoint>) {
        self.location = location;
    }
}

impl RouteSource for ToDoItem {
    fn entity_id(&self) -> EntityId {
        self.id.clone()
    }

    fn route(&self) -> Route {
        Route::parse_lines(&self.points)
    }
}

/// Check a description: a word character first, then word characters,
/// spaces or `@&:-,.+`, at most `MAX_DESCRIPTION_LEN` characters
fn validate_description(description: &str) -> Result<(), DomainError> {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut chars = description.chars();

    match chars.next() {
        Some(first) if is_word(first) => {},
        _ => {
            return Err(DomainError::ValidationError(
                "Description must start with a letter, digit or underscore".to_string(),
            ));
        },
    }
    if let Some(bad) = chars.find(|c| !is_word(*c) && !"@&:-,.+ ".contains(*c)) {
        return Err(DomainError::ValidationError(format!(
            "Description contains invalid character '{bad}'"
        )));
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(DomainError::ValidationError(format!(
            "Description must be at most {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}
