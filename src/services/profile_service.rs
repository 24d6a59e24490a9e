use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::ExerciseCatalog;
use crate::models::{
    ExperienceLevel, MovementPattern, ProfileAnswers, TrainingGoal, TrainingRequest,
};

/// Converts free-text onboarding answers into a structured `TrainingRequest`.
///
/// Parsing is best-effort throughout: unrecognized goals default to muscle
/// gain, unparseable frequencies clamp into the valid 3-7 range, and unknown
/// equipment text is treated as a full gym. Nothing here can fail.
#[derive(Debug, Clone)]
pub struct ProfileService {
    catalog: Arc<ExerciseCatalog>,
}

impl ProfileService {
    pub fn new(catalog: Arc<ExerciseCatalog>) -> Self {
        Self { catalog }
    }

    pub fn resolve(&self, answers: &ProfileAnswers) -> TrainingRequest {
        let goal = Self::parse_goal(&answers.goal);
        let level = Self::parse_level(&answers.experience);
        let days_per_week = Self::parse_days(&answers.frequency);
        let equipment_available = Self::parse_equipment(&answers.equipment);
        let excluded_exercise_names = self.injury_exclusions(&answers.injuries);
        let secondary_goals = Self::parse_secondary_goals(&answers.goal, goal);
        let preferred_session_minutes = Self::parse_minutes(&answers.session_length);

        debug!(
            ?goal,
            ?level,
            days_per_week,
            excluded = excluded_exercise_names.len(),
            "resolved training request from profile answers"
        );

        TrainingRequest {
            goal,
            level,
            days_per_week,
            excluded_exercise_names,
            secondary_goals,
            preferred_session_minutes,
            equipment_available,
        }
    }

    fn parse_goal(text: &str) -> TrainingGoal {
        let t = text.to_lowercase();
        if t.contains("strong") || t.contains("strength") || t.contains("power") {
            TrainingGoal::Strength
        } else if t.contains("lose") || t.contains("weight loss") || t.contains("fat") {
            TrainingGoal::WeightLoss
        } else if t.contains("endurance")
            || t.contains("stamina")
            || t.contains("cardio")
            || t.contains("run")
        {
            TrainingGoal::Endurance
        } else if t.contains("flexib") || t.contains("mobility") || t.contains("stretch") {
            TrainingGoal::Flexibility
        } else {
            // "build muscle", "tone up", anything else
            TrainingGoal::MuscleGain
        }
    }

    /// Goal keywords beyond the first recognized one become secondary goals.
    fn parse_secondary_goals(text: &str, primary: TrainingGoal) -> Vec<TrainingGoal> {
        let t = text.to_lowercase();
        let mut secondary = Vec::new();
        let candidates = [
            (TrainingGoal::Strength, &["strength", "strong"][..]),
            (TrainingGoal::WeightLoss, &["lose", "fat"][..]),
            (TrainingGoal::MuscleGain, &["muscle", "build"][..]),
            (TrainingGoal::Endurance, &["endurance", "stamina"][..]),
            (TrainingGoal::Flexibility, &["flexib", "mobility"][..]),
        ];
        for (goal, keywords) in candidates {
            if goal != primary && keywords.iter().any(|k| t.contains(k)) {
                secondary.push(goal);
            }
        }
        secondary
    }

    fn parse_level(text: &str) -> ExperienceLevel {
        let t = text.to_lowercase();
        if t.contains("advanced") || t.contains("expert") || t.contains("years") {
            ExperienceLevel::Advanced
        } else if t.contains("intermediate") || t.contains("some experience") {
            ExperienceLevel::Intermediate
        } else {
            ExperienceLevel::Beginner
        }
    }

    /// First integer found in the text, clamped into the valid 3-7 range.
    /// Out-of-range and missing values clamp rather than fail; upstream
    /// parsing is best-effort.
    fn parse_days(text: &str) -> u8 {
        Self::first_number(text).map_or(3, |n| n.clamp(3, 7) as u8)
    }

    fn parse_minutes(text: &str) -> Option<u32> {
        Self::first_number(text).map(|n| n.clamp(15, 120) as u32)
    }

    fn first_number(text: &str) -> Option<u64> {
        let digits: String = text
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }

    fn parse_equipment(text: &str) -> Vec<String> {
        let t = text.to_lowercase();
        if t.is_empty() || t.contains("gym") || t.contains("everything") {
            return vec!["gym".to_string()];
        }
        let mut tags = Vec::new();
        let known = [
            ("dumbbell", "dumbbell"),
            ("barbell", "barbell"),
            ("kettlebell", "kettlebell"),
            ("band", "band"),
            ("cable", "cable"),
            ("machine", "machine"),
            ("bench", "bench"),
            ("pull-up bar", "pullup_bar"),
            ("pullup bar", "pullup_bar"),
            ("bar", "pullup_bar"),
            ("bike", "bike"),
            ("rope", "jump_rope"),
            ("mat", "mat"),
        ];
        for (keyword, tag) in known {
            if t.contains(keyword) && !tags.iter().any(|x: &String| x == tag) {
                tags.push(tag.to_string());
            }
        }
        // Bodyweight work is always possible
        tags.push("bodyweight".to_string());
        tags.push("mat".to_string());
        tags
    }

    /// Expands injury keywords into concrete excluded exercise names by
    /// matching the movement families that load the injured area.
    fn injury_exclusions(&self, text: &str) -> HashSet<String> {
        let t = text.to_lowercase();
        let mut patterns: Vec<MovementPattern> = Vec::new();
        if t.contains("knee") {
            patterns.push(MovementPattern::Squat);
            patterns.push(MovementPattern::Lunge);
        }
        if t.contains("shoulder") || t.contains("rotator") {
            patterns.push(MovementPattern::Push);
        }
        if t.contains("back") || t.contains("spine") || t.contains("disc") {
            patterns.push(MovementPattern::Hinge);
        }

        let mut excluded = HashSet::new();
        if patterns.is_empty() {
            return excluded;
        }
        for ex in self
            .catalog
            .list_exercises(&crate::catalog::CatalogFilter::default())
        {
            if patterns.contains(&ex.movement_pattern) {
                excluded.insert(ex.name.clone());
            }
        }
        excluded
    }
}
