use std::sync::Arc;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use uuid::Uuid;
use wellness_coach::catalog::ExerciseCatalog;
use wellness_coach::models::{
    AdaptationPriority, AdaptationType, ExerciseLog, ExperienceLevel, SessionLog, SetResult,
    TrainingGoal, TrainingRequest, WeeklyPlan,
};
use wellness_coach::services::{PerformanceAnalysisService, ProgramGenerationService};

fn analyzer() -> PerformanceAnalysisService {
    PerformanceAnalysisService::new(Arc::new(ExerciseCatalog::builtin().clone()))
}

fn strength_plan() -> WeeklyPlan {
    let gen = ProgramGenerationService::new(Arc::new(ExerciseCatalog::builtin().clone()));
    let request = TrainingRequest::new(TrainingGoal::Strength, ExperienceLevel::Intermediate, 3);
    gen.generate(&request, &[], 0)
}

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 3).unwrap() + chrono::Duration::days(offset)
}

/// One session where every planned exercise gets `total` sets at `weight`,
/// of which the first `completed` are marked done.
fn plan_session(
    plan: &WeeklyPlan,
    date: NaiveDate,
    completed: usize,
    total: usize,
    weight: f64,
) -> SessionLog {
    let exercises = plan
        .days[0]
        .exercises
        .iter()
        .map(|ex| ExerciseLog {
            exercise_id: ex.exercise_id.clone(),
            name: ex.name.clone(),
            sets: (0..total)
                .map(|i| SetResult {
                    set_number: i as u32 + 1,
                    reps: 8,
                    weight,
                    completed: i < completed,
                })
                .collect(),
        })
        .collect();
    SessionLog {
        id: Uuid::new_v4(),
        date,
        plan_id: plan.id,
        exercises,
        completed: true,
        duration_minutes: 45,
    }
}

#[test]
fn test_empty_history_produces_no_suggestions() {
    println!("🧪 Testing analysis with no history...");

    let plan = strength_plan();
    let service = analyzer();

    let metrics = service.compute_metrics(&[], &plan);
    assert_eq!(metrics.total_sessions, 0);
    assert_eq!(metrics.completion_rate, 0.0);
    assert!(metrics.exercises.is_empty());
    assert!(service.analyze(&[], &plan).is_empty());

    println!("✅ Empty-history analysis test passed!");
}

#[test]
fn test_metrics_aggregate_only_completed_matching_sessions() {
    println!("🧪 Testing metrics session filtering...");

    let plan = strength_plan();
    let service = analyzer();

    let mut history = vec![
        plan_session(&plan, day(0), 3, 3, 40.0),
        plan_session(&plan, day(7), 3, 3, 50.0),
    ];
    // An abandoned session and one for a different plan must both be ignored
    let mut abandoned = plan_session(&plan, day(3), 0, 3, 40.0);
    abandoned.completed = false;
    history.push(abandoned);
    let mut foreign = plan_session(&plan, day(4), 3, 3, 40.0);
    foreign.plan_id = Uuid::new_v4();
    history.push(foreign);

    let metrics = service.compute_metrics(&history, &plan);
    assert_eq!(metrics.total_sessions, 2);
    assert_eq!(metrics.completion_rate, 100.0);
    assert_eq!(metrics.average_duration, 45.0);

    // 40.0 -> 50.0 across the two sessions is a 25% progression
    for perf in &metrics.exercises {
        assert_eq!(perf.times_performed, 2);
        assert!((perf.progression - 25.0).abs() < 1e-9, "got {}", perf.progression);
    }

    println!("✅ Metrics filtering test passed!");
}

#[test]
fn test_low_completion_triggers_high_priority_intensity_reduction() {
    println!("🧪 Testing intensity reduction rule...");

    let plan = strength_plan();
    // Four sessions at 60% set completion
    let history: Vec<SessionLog> = (0..4)
        .map(|i| plan_session(&plan, day(i * 2), 3, 5, 40.0))
        .collect();

    let adaptations = analyzer().analyze(&history, &plan);
    let reduction = adaptations
        .iter()
        .find(|a| a.adaptation_type == AdaptationType::IntensityChange)
        .expect("expected an intensity change suggestion");
    assert_eq!(reduction.priority, AdaptationPriority::High);
    assert_eq!(reduction.confidence, 90.0);
    assert_eq!(reduction.changes.len(), 1);
    assert_eq!(reduction.changes[0].field, "level");

    println!("✅ Intensity reduction test passed!");
}

#[test]
fn test_sustained_full_completion_suggests_harder_program() {
    println!("🧪 Testing intensity increase rule...");

    let plan = strength_plan();
    // Six fully completed sessions across two weeks
    let history: Vec<SessionLog> = (0..6)
        .map(|i| plan_session(&plan, day(i * 2), 3, 3, 40.0))
        .collect();

    let adaptations = analyzer().analyze(&history, &plan);
    let increase = adaptations
        .iter()
        .find(|a| a.adaptation_type == AdaptationType::IntensityChange)
        .expect("expected an intensity change suggestion");
    assert_eq!(increase.priority, AdaptationPriority::Medium);
    assert_eq!(increase.confidence, 80.0);
    assert_eq!(increase.changes[0].new_value, serde_json::json!("advanced"));

    println!("✅ Intensity increase test passed!");
}

#[test]
fn test_stalled_exercise_gets_progressive_overload() {
    println!("🧪 Testing progressive overload rule...");

    let plan = strength_plan();
    // Fully completed, but the weight never moves: flat progression
    let history: Vec<SessionLog> = (0..4)
        .map(|i| plan_session(&plan, day(i * 2), 3, 3, 40.0))
        .collect();

    let adaptations = analyzer().analyze(&history, &plan);
    let overload: Vec<_> = adaptations
        .iter()
        .filter(|a| a.adaptation_type == AdaptationType::ProgressiveOverload)
        .collect();
    assert!(!overload.is_empty(), "expected progressive overload suggestions");
    for adaptation in overload {
        assert_eq!(adaptation.priority, AdaptationPriority::Medium);
        assert_eq!(adaptation.confidence, 85.0);
        let change = &adaptation.changes[0];
        assert_eq!(change.field, "weight");
        let old = change.old_value.as_f64().unwrap();
        let new = change.new_value.as_f64().unwrap();
        assert!(new > old, "suggested weight {new} must exceed current {old}");
    }

    println!("✅ Progressive overload test passed!");
}

#[test]
fn test_failing_exercise_gets_substitution() {
    println!("🧪 Testing exercise substitution rule...");

    let plan = strength_plan();
    let victim = plan.days[0].exercises[0].clone();

    // Three sessions where one exercise fails (1 of 3 sets) and the rest
    // are completed in full
    let history: Vec<SessionLog> = (0..3)
        .map(|i| {
            let mut session = plan_session(&plan, day(i * 3), 3, 3, 40.0);
            for log in &mut session.exercises {
                if log.exercise_id == victim.exercise_id {
                    for (idx, set) in log.sets.iter_mut().enumerate() {
                        set.completed = idx == 0;
                    }
                }
            }
            session
        })
        .collect();

    let adaptations = analyzer().analyze(&history, &plan);
    let substitution = adaptations
        .iter()
        .find(|a| a.adaptation_type == AdaptationType::ExerciseSubstitution)
        .expect("expected a substitution suggestion");
    assert_eq!(substitution.priority, AdaptationPriority::Medium);
    assert_eq!(substitution.confidence, 80.0);
    let change = &substitution.changes[0];
    assert_eq!(change.field, "exercise");
    assert_eq!(change.exercise_id.as_deref(), Some(victim.exercise_id.as_str()));
    assert_eq!(change.old_value, serde_json::json!(victim.name));
    if let Some(replacement) = change.new_value.as_str() {
        assert_ne!(replacement, victim.name, "replacement must differ");
    }

    println!("✅ Substitution test passed!");
}

#[test]
fn test_analysis_is_repeatable() {
    println!("🧪 Testing analysis repeatability...");

    let plan = strength_plan();
    let history: Vec<SessionLog> = (0..4)
        .map(|i| plan_session(&plan, day(i * 2), 3, 5, 40.0))
        .collect();

    let service = analyzer();
    let first = service.analyze(&history, &plan);
    let second = service.analyze(&history, &plan);

    // Fresh ids and timestamps each run, but the same substance
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.adaptation_type, b.adaptation_type);
        assert_eq!(a.priority, b.priority);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.changes, b.changes);
    }

    println!("✅ Repeatability test passed!");
}
