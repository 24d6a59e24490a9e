use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::ExerciseCatalog;
use crate::models::{
    Adaptation, AdaptationChange, AdaptationPriority, AdaptationType, EstimatedImpact,
    ExerciseCategory, ExercisePerformance, ExperienceLevel, PerformanceMetrics, ProgramCategory,
    SessionLog, TrainingGoal, WeeklyPlan,
};
use crate::services::progression_service::ProgressionService;

/// Number of most recent completed sessions considered by the analyzer.
pub const RECENT_WINDOW: usize = 14;

/// Independent analysis pass: aggregates session history against an existing
/// plan and emits prioritized, confidence-scored adaptation suggestions.
///
/// Every rule below evaluates on its own; multiple rules may fire for the
/// same exercise or field and no reconciliation is attempted here. The
/// consumer decides what to apply.
#[derive(Debug, Clone)]
pub struct PerformanceAnalysisService {
    catalog: Arc<ExerciseCatalog>,
    recent_window: usize,
}

impl PerformanceAnalysisService {
    pub fn new(catalog: Arc<ExerciseCatalog>) -> Self {
        Self {
            catalog,
            recent_window: RECENT_WINDOW,
        }
    }

    pub fn with_window(catalog: Arc<ExerciseCatalog>, recent_window: usize) -> Self {
        Self {
            catalog,
            recent_window,
        }
    }

    /// Full pass: metrics plus the adaptation suggestions derived from them.
    /// Total over any input, including an empty history.
    pub fn analyze(&self, history: &[SessionLog], plan: &WeeklyPlan) -> Vec<Adaptation> {
        let metrics = self.compute_metrics(history, plan);
        self.suggest(&metrics, plan)
    }

    /// Derived metrics over the recent completed-session window. Recomputed
    /// from scratch on every call.
    pub fn compute_metrics(&self, history: &[SessionLog], plan: &WeeklyPlan) -> PerformanceMetrics {
        let mut recent: Vec<&SessionLog> = history
            .iter()
            .filter(|s| s.completed && s.plan_id == plan.id)
            .collect();
        recent.sort_by_key(|s| s.date);
        if recent.len() > self.recent_window {
            recent.drain(..recent.len() - self.recent_window);
        }

        let total_sessions = recent.len() as u32;
        if recent.is_empty() {
            return PerformanceMetrics {
                program_id: plan.id,
                category: Self::classify(plan),
                average_duration: 0.0,
                completion_rate: 0.0,
                frequency: 0.0,
                consistency: 0.0,
                total_sessions: 0,
                exercises: Vec::new(),
            };
        }

        let average_duration = recent
            .iter()
            .map(|s| s.duration_minutes as f64)
            .sum::<f64>()
            / recent.len() as f64;
        let completion_rate = recent
            .iter()
            .map(|s| s.set_completion())
            .sum::<f64>()
            / recent.len() as f64
            * 100.0;

        let span_days = (recent[recent.len() - 1].date - recent[0].date).num_days().max(0);
        let weeks = (span_days as f64 / 7.0).max(1.0);
        let frequency = recent.len() as f64 / weeks;
        let expected = plan.days_per_week as f64 * weeks;
        let consistency = if expected > 0.0 {
            recent.len() as f64 / expected * 100.0
        } else {
            0.0
        };

        debug!(
            total_sessions,
            completion_rate, frequency, consistency, "computed program metrics"
        );

        PerformanceMetrics {
            program_id: plan.id,
            category: Self::classify(plan),
            average_duration,
            completion_rate,
            frequency,
            consistency,
            total_sessions,
            exercises: Self::exercise_performance(&recent),
        }
    }

    /// Runs every adaptation rule against the metrics. Rules are isolated
    /// from one another: each produces its own suggestions and none can
    /// suppress or abort the rest.
    pub fn suggest(&self, metrics: &PerformanceMetrics, plan: &WeeklyPlan) -> Vec<Adaptation> {
        if metrics.total_sessions == 0 {
            return Vec::new();
        }

        let mut adaptations = Vec::new();
        adaptations.extend(self.progressive_overload_rule(metrics, plan));
        adaptations.extend(self.volume_rule(metrics, plan));
        adaptations.extend(self.duration_rule(metrics, plan));
        adaptations.extend(self.intensity_rule(metrics, plan));
        adaptations.extend(self.frequency_rule(metrics, plan));
        adaptations.extend(self.substitution_rule(metrics, plan));

        info!(
            plan = %plan.id,
            suggestions = adaptations.len(),
            "performance analysis complete"
        );
        adaptations
    }

    /// Program category from plan metadata first, exercise mix as fallback.
    fn classify(plan: &WeeklyPlan) -> ProgramCategory {
        match plan.goal {
            TrainingGoal::Endurance => ProgramCategory::Cardio,
            TrainingGoal::Flexibility => ProgramCategory::Flexibility,
            _ => {
                let exercises: Vec<_> = plan.iter_exercises().collect();
                if exercises.is_empty() {
                    return ProgramCategory::Mixed;
                }
                let strength = exercises
                    .iter()
                    .filter(|e| e.category == ExerciseCategory::Strength)
                    .count();
                let bodyweight_only = exercises.iter().all(|e| {
                    e.equipment
                        .iter()
                        .all(|t| matches!(t.as_str(), "bodyweight" | "mat" | "none"))
                });
                if bodyweight_only {
                    ProgramCategory::Bodyweight
                } else if strength * 2 >= exercises.len() {
                    ProgramCategory::Strength
                } else {
                    ProgramCategory::Mixed
                }
            }
        }
    }

    fn exercise_performance(recent: &[&SessionLog]) -> Vec<ExercisePerformance> {
        // (name, per-session (avg weight, avg reps, set count), completed, total)
        struct Acc {
            name: String,
            sessions: Vec<(f64, f64, u32)>,
            completed_sets: u32,
            total_sets: u32,
        }
        let mut by_id: BTreeMap<String, Acc> = BTreeMap::new();

        for session in recent {
            for log in &session.exercises {
                if log.sets.is_empty() {
                    continue;
                }
                let acc = by_id.entry(log.exercise_id.clone()).or_insert_with(|| Acc {
                    name: log.name.clone(),
                    sessions: Vec::new(),
                    completed_sets: 0,
                    total_sets: 0,
                });
                let n = log.sets.len() as f64;
                let avg_weight = log.sets.iter().map(|s| s.weight).sum::<f64>() / n;
                let avg_reps = log.sets.iter().map(|s| s.reps as f64).sum::<f64>() / n;
                acc.sessions.push((avg_weight, avg_reps, log.sets.len() as u32));
                acc.completed_sets += log.sets.iter().filter(|s| s.completed).count() as u32;
                acc.total_sets += log.sets.len() as u32;
            }
        }

        by_id
            .into_iter()
            .map(|(exercise_id, acc)| {
                let times = acc.sessions.len() as u32;
                let average_weight =
                    acc.sessions.iter().map(|s| s.0).sum::<f64>() / times as f64;
                let average_reps = acc.sessions.iter().map(|s| s.1).sum::<f64>() / times as f64;
                let average_sets =
                    acc.sessions.iter().map(|s| s.2 as f64).sum::<f64>() / times as f64;
                let total_volume: f64 = acc
                    .sessions
                    .iter()
                    .map(|(w, r, sets)| w * r * *sets as f64)
                    .sum();
                let completion_rate = if acc.total_sets > 0 {
                    acc.completed_sets as f64 / acc.total_sets as f64 * 100.0
                } else {
                    0.0
                };
                let first = acc.sessions.first().map(|s| s.0).unwrap_or(0.0);
                let last = acc.sessions.last().map(|s| s.0).unwrap_or(0.0);
                let progression = if times >= 2 && first > 0.0 {
                    (last - first) / first * 100.0
                } else {
                    0.0
                };
                ExercisePerformance {
                    exercise_id,
                    name: acc.name,
                    average_weight,
                    average_reps,
                    average_sets,
                    total_volume,
                    completion_rate,
                    progression,
                    times_performed: times,
                }
            })
            .collect()
    }

    // ----- adaptation rules -----

    /// Strength/mixed programs: reliable execution with stalled weight gets
    /// a 5% load bump.
    fn progressive_overload_rule(
        &self,
        metrics: &PerformanceMetrics,
        plan: &WeeklyPlan,
    ) -> Vec<Adaptation> {
        if !matches!(
            metrics.category,
            ProgramCategory::Strength | ProgramCategory::Mixed
        ) {
            return Vec::new();
        }
        metrics
            .exercises
            .iter()
            .filter(|p| {
                p.times_performed >= 3
                    && p.completion_rate >= 90.0
                    && p.progression < 5.0
                    && p.average_weight > 0.0
            })
            .map(|p| {
                let mut new_weight =
                    ProgressionService::round_to_increment(p.average_weight * 1.05);
                if new_weight <= p.average_weight {
                    new_weight = p.average_weight + 2.5;
                }
                self.adaptation(
                    plan.id,
                    AdaptationType::ProgressiveOverload,
                    AdaptationPriority::Medium,
                    85.0,
                    format!("Increase weight on {}", p.name),
                    format!(
                        "You have completed {} at {:.0}% for {} sessions without meaningful weight change.",
                        p.name, p.completion_rate, p.times_performed
                    ),
                    "High completion with flat progression indicates room for more load".to_string(),
                    vec![AdaptationChange {
                        field: "weight".to_string(),
                        exercise_id: Some(p.exercise_id.clone()),
                        old_value: serde_json::json!(p.average_weight),
                        new_value: serde_json::json!(new_weight),
                    }],
                    EstimatedImpact::Positive,
                )
            })
            .collect()
    }

    /// Near-perfect completion below four sets earns one more set.
    fn volume_rule(&self, metrics: &PerformanceMetrics, plan: &WeeklyPlan) -> Vec<Adaptation> {
        metrics
            .exercises
            .iter()
            .filter(|p| p.completion_rate >= 95.0 && p.average_sets < 4.0)
            .map(|p| {
                let current = p.average_sets.round().max(1.0) as u32;
                self.adaptation(
                    plan.id,
                    AdaptationType::VolumeAdjustment,
                    AdaptationPriority::Low,
                    75.0,
                    format!("Add a set to {}", p.name),
                    format!(
                        "{} is completed at {:.0}% with only {} sets.",
                        p.name, p.completion_rate, current
                    ),
                    "Consistently full completion suggests capacity for more volume".to_string(),
                    vec![AdaptationChange {
                        field: "sets".to_string(),
                        exercise_id: Some(p.exercise_id.clone()),
                        old_value: serde_json::json!(current),
                        new_value: serde_json::json!((current + 1).min(6)),
                    }],
                    EstimatedImpact::Positive,
                )
            })
            .collect()
    }

    fn duration_rule(&self, metrics: &PerformanceMetrics, plan: &WeeklyPlan) -> Vec<Adaptation> {
        let mut out = Vec::new();
        let planned: f64 = if plan.days.is_empty() {
            0.0
        } else {
            plan.days.iter().map(|d| d.target_minutes as f64).sum::<f64>()
                / plan.days.len() as f64
        };
        if planned > 0.0 && metrics.average_duration > planned * 1.2 {
            let new_minutes = ((planned - 10.0).max(20.0)) as u32;
            out.push(self.adaptation(
                plan.id,
                AdaptationType::DurationAdjustment,
                AdaptationPriority::Low,
                70.0,
                "Shorten your sessions".to_string(),
                format!(
                    "Sessions average {:.0} minutes against a {:.0}-minute target.",
                    metrics.average_duration, planned
                ),
                "Sessions running well over target tend to erode adherence".to_string(),
                vec![AdaptationChange {
                    field: "duration".to_string(),
                    exercise_id: None,
                    old_value: serde_json::json!(planned as u32),
                    new_value: serde_json::json!(new_minutes),
                }],
                EstimatedImpact::Positive,
            ));
        } else if planned > 0.0 && metrics.average_duration > 0.0
            && metrics.average_duration < planned * 0.7
        {
            out.push(self.adaptation(
                plan.id,
                AdaptationType::DurationAdjustment,
                AdaptationPriority::Low,
                70.0,
                "Extend your sessions".to_string(),
                format!(
                    "Sessions average {:.0} minutes against a {:.0}-minute target.",
                    metrics.average_duration, planned
                ),
                "Consistently short sessions leave planned work unfinished".to_string(),
                vec![AdaptationChange {
                    field: "duration".to_string(),
                    exercise_id: None,
                    old_value: serde_json::json!(planned as u32),
                    new_value: serde_json::json!((planned + 10.0) as u32),
                }],
                EstimatedImpact::Positive,
            ));
        }

        // Goal-specific variants, independent of the general rule above
        if metrics.category == ProgramCategory::Cardio && metrics.completion_rate >= 90.0 {
            out.push(self.adaptation(
                plan.id,
                AdaptationType::DurationAdjustment,
                AdaptationPriority::Low,
                75.0,
                "Add ten minutes of cardio".to_string(),
                "Cardio sessions are being completed comfortably.".to_string(),
                "High completion on endurance work supports a longer duration".to_string(),
                vec![AdaptationChange {
                    field: "duration".to_string(),
                    exercise_id: None,
                    old_value: serde_json::json!(planned as u32),
                    new_value: serde_json::json!((planned + 10.0) as u32),
                }],
                EstimatedImpact::Positive,
            ));
        }
        if metrics.category == ProgramCategory::Flexibility && metrics.completion_rate >= 90.0 {
            let changes: Vec<AdaptationChange> = plan
                .iter_exercises()
                .filter(|e| {
                    matches!(
                        e.category,
                        ExerciseCategory::Flexibility | ExerciseCategory::Balance
                    ) && e.reps < e.rep_cap()
                })
                .map(|e| AdaptationChange {
                    field: "reps".to_string(),
                    exercise_id: Some(e.exercise_id.clone()),
                    old_value: serde_json::json!(e.reps),
                    new_value: serde_json::json!((e.reps + 5).min(e.rep_cap())),
                })
                .collect();
            if !changes.is_empty() {
                out.push(self.adaptation(
                    plan.id,
                    AdaptationType::DurationAdjustment,
                    AdaptationPriority::Low,
                    75.0,
                    "Lengthen your holds".to_string(),
                    "Mobility sessions are being completed comfortably.".to_string(),
                    "High completion on holds supports longer stretch durations".to_string(),
                    changes,
                    EstimatedImpact::Positive,
                ));
            }
        }
        out
    }

    fn intensity_rule(&self, metrics: &PerformanceMetrics, plan: &WeeklyPlan) -> Vec<Adaptation> {
        let mut out = Vec::new();
        if metrics.completion_rate < 70.0 && metrics.total_sessions >= 3 {
            out.push(self.adaptation(
                plan.id,
                AdaptationType::IntensityChange,
                AdaptationPriority::High,
                90.0,
                "Reduce program difficulty".to_string(),
                format!(
                    "Only {:.0}% of planned work is being completed across {} sessions.",
                    metrics.completion_rate, metrics.total_sessions
                ),
                "Low completion usually means the program is harder than the athlete can sustain"
                    .to_string(),
                vec![AdaptationChange {
                    field: "level".to_string(),
                    exercise_id: None,
                    old_value: serde_json::json!(plan.level),
                    new_value: serde_json::json!(Self::level_down(plan.level)),
                }],
                EstimatedImpact::Positive,
            ));
        } else if metrics.completion_rate >= 95.0 && metrics.total_sessions >= 5 {
            out.push(self.adaptation(
                plan.id,
                AdaptationType::IntensityChange,
                AdaptationPriority::Medium,
                80.0,
                "Increase program difficulty".to_string(),
                format!(
                    "{:.0}% completion across {} sessions leaves little challenge.",
                    metrics.completion_rate, metrics.total_sessions
                ),
                "Sustained full completion indicates readiness for harder work".to_string(),
                vec![AdaptationChange {
                    field: "level".to_string(),
                    exercise_id: None,
                    old_value: serde_json::json!(plan.level),
                    new_value: serde_json::json!(Self::level_up(plan.level)),
                }],
                EstimatedImpact::Positive,
            ));
        }

        if metrics.category == ProgramCategory::Cardio
            && metrics.completion_rate >= 95.0
            && metrics.consistency >= 80.0
        {
            let changes: Vec<AdaptationChange> = plan
                .iter_exercises()
                .filter(|e| e.category == ExerciseCategory::Cardio)
                .map(|e| {
                    let new_rest = e.rest_seconds.map_or(30, |r| r.saturating_sub(15).max(15));
                    AdaptationChange {
                        field: "rest_seconds".to_string(),
                        exercise_id: Some(e.exercise_id.clone()),
                        old_value: serde_json::json!(e.rest_seconds),
                        new_value: serde_json::json!(new_rest),
                    }
                })
                .collect();
            if !changes.is_empty() {
                out.push(self.adaptation(
                    plan.id,
                    AdaptationType::RestAdjustment,
                    AdaptationPriority::Low,
                    70.0,
                    "Tighten recovery breaks".to_string(),
                    "Cardio work is completed consistently with room to push.".to_string(),
                    "Capping recovery time raises intensity without adding duration".to_string(),
                    changes,
                    EstimatedImpact::Positive,
                ));
            }
        }
        out
    }

    fn frequency_rule(&self, metrics: &PerformanceMetrics, plan: &WeeklyPlan) -> Vec<Adaptation> {
        let planned = plan.days_per_week as f64;
        let mut out = Vec::new();
        if metrics.frequency > planned + 1.0 && metrics.consistency > 100.0 {
            out.push(self.adaptation(
                plan.id,
                AdaptationType::FrequencyChange,
                AdaptationPriority::Medium,
                75.0,
                "Plan for more training days".to_string(),
                format!(
                    "You train {:.1} times per week against {} planned days.",
                    metrics.frequency, plan.days_per_week
                ),
                "Actual frequency consistently exceeds the plan".to_string(),
                vec![AdaptationChange {
                    field: "days_per_week".to_string(),
                    exercise_id: None,
                    old_value: serde_json::json!(plan.days_per_week),
                    new_value: serde_json::json!((plan.days_per_week + 1).min(7)),
                }],
                EstimatedImpact::Neutral,
            ));
        } else if metrics.frequency < planned - 1.0 && metrics.consistency < 70.0 {
            out.push(self.adaptation(
                plan.id,
                AdaptationType::FrequencyChange,
                AdaptationPriority::Medium,
                75.0,
                "Plan for fewer training days".to_string(),
                format!(
                    "You train {:.1} times per week against {} planned days.",
                    metrics.frequency, plan.days_per_week
                ),
                "A plan that matches real availability is easier to keep".to_string(),
                vec![AdaptationChange {
                    field: "days_per_week".to_string(),
                    exercise_id: None,
                    old_value: serde_json::json!(plan.days_per_week),
                    new_value: serde_json::json!((plan.days_per_week - 1).max(2)),
                }],
                EstimatedImpact::Neutral,
            ));
        }
        out
    }

    /// Persistently failed exercises get swapped for a catalog alternative.
    fn substitution_rule(
        &self,
        metrics: &PerformanceMetrics,
        plan: &WeeklyPlan,
    ) -> Vec<Adaptation> {
        metrics
            .exercises
            .iter()
            .filter(|p| p.completion_rate < 50.0 && p.times_performed >= 3)
            .map(|p| {
                let replacement = self.pick_alternative(&p.exercise_id, plan);
                let (new_value, description) = match &replacement {
                    Some(alt) => (
                        serde_json::json!(alt.clone()),
                        format!("Swap {} for {}.", p.name, alt),
                    ),
                    None => (
                        serde_json::Value::Null,
                        format!("Consider replacing {} with a comparable movement.", p.name),
                    ),
                };
                self.adaptation(
                    plan.id,
                    AdaptationType::ExerciseSubstitution,
                    AdaptationPriority::Medium,
                    80.0,
                    format!("Substitute {}", p.name),
                    description,
                    format!(
                        "{} is completed at only {:.0}% over {} attempts.",
                        p.name, p.completion_rate, p.times_performed
                    ),
                    vec![AdaptationChange {
                        field: "exercise".to_string(),
                        exercise_id: Some(p.exercise_id.clone()),
                        old_value: serde_json::json!(p.name.clone()),
                        new_value,
                    }],
                    EstimatedImpact::Positive,
                )
            })
            .collect()
    }

    /// First catalog alternative not already in the plan, falling back to
    /// any same-muscle-group exercise.
    fn pick_alternative(&self, exercise_id: &str, plan: &WeeklyPlan) -> Option<String> {
        let in_plan = |id: &str| plan.iter_exercises().any(|e| e.exercise_id == id);
        let current = self.catalog.get_by_id(exercise_id)?;
        for alt_id in &current.alternatives {
            if let Some(alt) = self.catalog.get_by_id(alt_id) {
                if !in_plan(&alt.id) {
                    return Some(alt.name.clone());
                }
            }
        }
        self.catalog
            .list_exercises(&crate::catalog::CatalogFilter {
                muscle_groups: vec![current.primary_muscle_group],
                categories: vec![current.category],
                ..Default::default()
            })
            .into_iter()
            .find(|e| e.id != exercise_id && !in_plan(&e.id))
            .map(|e| e.name.clone())
    }

    fn level_down(level: ExperienceLevel) -> ExperienceLevel {
        match level {
            ExperienceLevel::Advanced => ExperienceLevel::Intermediate,
            _ => ExperienceLevel::Beginner,
        }
    }

    fn level_up(level: ExperienceLevel) -> ExperienceLevel {
        match level {
            ExperienceLevel::Beginner => ExperienceLevel::Intermediate,
            _ => ExperienceLevel::Advanced,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn adaptation(
        &self,
        plan_id: Uuid,
        adaptation_type: AdaptationType,
        priority: AdaptationPriority,
        confidence: f64,
        title: String,
        description: String,
        reason: String,
        changes: Vec<AdaptationChange>,
        estimated_impact: EstimatedImpact,
    ) -> Adaptation {
        Adaptation {
            id: Uuid::new_v4(),
            plan_id,
            adaptation_type,
            priority,
            confidence,
            title,
            description,
            reason,
            changes,
            estimated_impact,
            created_at: Utc::now(),
        }
    }
}
