// Static, queryable exercise catalog. Loaded once, read-only.

pub mod builtin;

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::models::{Difficulty, ExerciseCategory, ExerciseDefinition, MuscleGroup};

static BUILTIN: Lazy<ExerciseCatalog> = Lazy::new(|| ExerciseCatalog::new(builtin::exercises()));

/// Query filter for catalog lookups. Empty collections mean "no restriction".
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub categories: Vec<ExerciseCategory>,
    pub muscle_groups: Vec<MuscleGroup>, // matched against the primary group
    pub max_difficulty: Option<Difficulty>,
    pub equipment: Option<Vec<String>>, // None = everything available
    pub excluded_names: HashSet<String>,
}

impl CatalogFilter {
    fn matches(&self, ex: &ExerciseDefinition) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&ex.category) {
            return false;
        }
        if !self.muscle_groups.is_empty() && !self.muscle_groups.contains(&ex.primary_muscle_group)
        {
            return false;
        }
        if let Some(max) = self.max_difficulty {
            if ex.difficulty > max {
                return false;
            }
        }
        if self
            .excluded_names
            .iter()
            .any(|n| n.eq_ignore_ascii_case(&ex.name))
        {
            return false;
        }
        if let Some(available) = &self.equipment {
            if !equipment_satisfied(ex, available) {
                return false;
            }
        }
        true
    }
}

fn equipment_satisfied(ex: &ExerciseDefinition, available: &[String]) -> bool {
    if available.iter().any(|a| a.eq_ignore_ascii_case("gym")) {
        return true;
    }
    ex.equipment.iter().all(|tag| {
        matches!(tag.as_str(), "bodyweight" | "mat" | "none")
            || available.iter().any(|a| a.eq_ignore_ascii_case(tag))
    })
}

/// Immutable exercise dataset with tag-based queries
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    exercises: Vec<ExerciseDefinition>,
}

impl ExerciseCatalog {
    pub fn new(exercises: Vec<ExerciseDefinition>) -> Self {
        Self { exercises }
    }

    /// The built-in dataset, constructed once on first use.
    pub fn builtin() -> &'static ExerciseCatalog {
        &BUILTIN
    }

    pub fn list_exercises(&self, filter: &CatalogFilter) -> Vec<&ExerciseDefinition> {
        self.exercises.iter().filter(|e| filter.matches(e)).collect()
    }

    pub fn get_by_name(&self, name: &str) -> Option<&ExerciseDefinition> {
        self.exercises.iter().find(|e| e.name.eq_ignore_ascii_case(name))
    }

    pub fn get_by_id(&self, id: &str) -> Option<&ExerciseDefinition> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// The substitute offered when selection comes up empty: a bodyweight
    /// push-up equivalent every user can perform.
    pub fn safe_default(&self) -> ExerciseDefinition {
        self.get_by_id("push_up")
            .cloned()
            .unwrap_or_else(builtin::fallback_push_up)
    }
}
