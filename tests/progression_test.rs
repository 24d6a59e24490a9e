use std::sync::Arc;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use uuid::Uuid;
use wellness_coach::catalog::ExerciseCatalog;
use wellness_coach::models::{
    ExerciseLog, ExperienceLevel, SessionLog, SetResult, TrainingGoal, TrainingRequest, WeeklyPlan,
};
use wellness_coach::services::{ProgramGenerationService, ProgressionService};

fn set(reps: u32, weight: f64) -> SetResult {
    SetResult {
        set_number: 1,
        reps,
        weight,
        completed: true,
    }
}

fn session(plan_id: Uuid, date: NaiveDate, exercise_id: &str, name: &str, sets: Vec<SetResult>) -> SessionLog {
    SessionLog {
        id: Uuid::new_v4(),
        date,
        plan_id,
        exercises: vec![ExerciseLog {
            exercise_id: exercise_id.to_string(),
            name: name.to_string(),
            sets,
        }],
        completed: true,
        duration_minutes: 45,
    }
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn fresh_plan() -> WeeklyPlan {
    let gen = ProgramGenerationService::new(Arc::new(ExerciseCatalog::builtin().clone()));
    let request = TrainingRequest::new(TrainingGoal::Strength, ExperienceLevel::Intermediate, 4);
    gen.generate(&request, &[], 0)
}

/// History with a clean week-over-week weight increase for one exercise.
fn upward_history(plan_id: Uuid, exercise_id: &str, name: &str) -> Vec<SessionLog> {
    vec![
        session(plan_id, day(2026, 8, 3), exercise_id, name, vec![set(6, 40.0), set(6, 40.0)]),
        session(plan_id, day(2026, 8, 10), exercise_id, name, vec![set(6, 47.5), set(6, 47.5)]),
    ]
}

#[test]
fn test_no_history_leaves_scheme_untouched() {
    println!("🧪 Testing progression with empty history...");

    let mut plan = fresh_plan();
    let before = plan.clone();
    ProgressionService::new().apply(&mut plan, &[]);
    assert_eq!(plan, before);

    println!("✅ Empty-history test passed!");
}

#[test]
fn test_upward_trend_adds_set_and_keeps_weight_monotonic() {
    println!("🧪 Testing upward-trend progression...");

    let mut plan = fresh_plan();
    let target = plan.iter_exercises().next().unwrap().clone();
    plan.find_exercise_mut(&target.exercise_id).unwrap().sets = 3;
    let history = upward_history(plan.id, &target.exercise_id, &target.name);

    ProgressionService::new().apply(&mut plan, &history);

    let after = plan
        .iter_exercises()
        .find(|e| e.exercise_id == target.exercise_id)
        .unwrap();
    // A >=5 unit weekly gain earns a set while below the four-set ceiling
    assert_eq!(after.sets, 4);
    // Weight never falls below the most recent observed average
    assert!(
        after.weight >= 47.5,
        "weight {} regressed below the last observed 47.5",
        after.weight
    );
    assert_eq!(after.weight % 2.5, 0.0, "weight must land on the 2.5 grid");

    println!("✅ Upward-trend test passed!");
}

#[test]
fn test_at_four_sets_trend_adds_reps_instead() {
    println!("🧪 Testing rep-based progression at the set ceiling...");

    let mut plan = fresh_plan();
    let target = plan.iter_exercises().next().unwrap().clone();
    {
        let ex = plan.find_exercise_mut(&target.exercise_id).unwrap();
        ex.sets = 4;
        ex.reps = 5;
    }
    let history = upward_history(plan.id, &target.exercise_id, &target.name);

    ProgressionService::new().apply(&mut plan, &history);

    let after = plan
        .iter_exercises()
        .find(|e| e.exercise_id == target.exercise_id)
        .unwrap();
    assert_eq!(after.sets, 4);
    assert_eq!(after.reps, 6);

    println!("✅ Set-ceiling test passed!");
}

#[test]
fn test_flat_weeks_adopt_observed_numbers() {
    println!("🧪 Testing adoption of observed numbers on a flat trend...");

    let mut plan = fresh_plan();
    let target = plan.iter_exercises().next().unwrap().clone();
    // Two weeks at the same weight, 8 reps, 3 sets per session
    let history = vec![
        session(
            plan.id,
            day(2026, 8, 3),
            &target.exercise_id,
            &target.name,
            vec![set(8, 40.0), set(8, 40.0), set(8, 40.0)],
        ),
        session(
            plan.id,
            day(2026, 8, 10),
            &target.exercise_id,
            &target.name,
            vec![set(8, 40.0), set(8, 40.0), set(8, 40.0)],
        ),
    ];

    ProgressionService::new().apply(&mut plan, &history);

    let after = plan
        .iter_exercises()
        .find(|e| e.exercise_id == target.exercise_id)
        .unwrap();
    assert_eq!(after.sets, 3);
    assert_eq!(after.weight, 40.0);
    // Flat across the whole window also trips the plateau rep cut (10% of
    // 8, clamped to at least 1)
    assert_eq!(after.reps, 7);

    println!("✅ Flat-trend adoption test passed!");
}

#[test]
fn test_single_tracked_week_is_adopted_directly() {
    println!("🧪 Testing single-week adoption...");

    let mut plan = fresh_plan();
    let target = plan.iter_exercises().next().unwrap().clone();
    let history = vec![session(
        plan.id,
        day(2026, 8, 10),
        &target.exercise_id,
        &target.name,
        vec![set(9, 22.5), set(9, 22.5)],
    )];

    ProgressionService::new().apply(&mut plan, &history);

    let after = plan
        .iter_exercises()
        .find(|e| e.exercise_id == target.exercise_id)
        .unwrap();
    assert_eq!(after.weight, 22.5);
    assert_eq!(after.reps, 9);
    assert_eq!(after.sets, 2);

    println!("✅ Single-week adoption test passed!");
}

#[test]
fn test_incomplete_sets_are_ignored() {
    println!("🧪 Testing that incomplete sets do not count...");

    let plan_id = Uuid::new_v4();
    let mut failed = session(
        plan_id,
        day(2026, 8, 10),
        "bench_press",
        "Bench Press",
        vec![set(8, 60.0)],
    );
    failed.exercises[0].sets.push(SetResult {
        set_number: 2,
        reps: 2,
        weight: 100.0,
        completed: false,
    });

    let series = ProgressionService::weekly_series("bench_press", &[failed]);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].weight, 60.0, "the failed 100.0 set must not skew the average");
    assert_eq!(series[0].reps, 8.0);

    println!("✅ Incomplete-set filtering test passed!");
}

#[test]
fn test_deload_recommended_on_broad_plateau() {
    println!("🧪 Testing deload recommendation...");

    let plan_id = Uuid::new_v4();
    let service = ProgressionService::new();

    // Three weeks at the same weight: plateaued
    let flat: Vec<SessionLog> = (0..3)
        .map(|week| {
            session(
                plan_id,
                day(2026, 8, 3 + week * 7),
                "bench_press",
                "Bench Press",
                vec![set(8, 60.0), set(8, 60.0)],
            )
        })
        .collect();
    assert!(service.deload_recommended(&flat));

    // Three weeks of steady gains: no deload
    let rising: Vec<SessionLog> = (0..3)
        .map(|week| {
            session(
                plan_id,
                day(2026, 8, 3 + week * 7),
                "bench_press",
                "Bench Press",
                vec![set(8, 60.0 + week as f64 * 5.0)],
            )
        })
        .collect();
    assert!(!service.deload_recommended(&rising));

    // Two weeks only: not enough data to call it either way
    assert!(!service.deload_recommended(&flat[..2]));

    println!("✅ Deload recommendation test passed!");
}

#[test]
fn test_deload_shrinks_day_budget() {
    println!("🧪 Testing deload effect on generation...");

    let gen = ProgramGenerationService::new(Arc::new(ExerciseCatalog::builtin().clone()));
    let request = TrainingRequest::new(TrainingGoal::Strength, ExperienceLevel::Intermediate, 3);

    let baseline = gen.generate(&request, &[], 0);
    let plan_id = baseline.id;
    let flat: Vec<SessionLog> = (0..3)
        .map(|week| {
            session(
                plan_id,
                day(2026, 8, 3 + week * 7),
                "bench_press",
                "Bench Press",
                vec![set(8, 60.0), set(8, 60.0)],
            )
        })
        .collect();
    let deload = gen.generate(&request, &flat, 0);

    for (base_day, deload_day) in baseline.days.iter().zip(deload.days.iter()) {
        assert!(
            deload_day.exercises.len() < base_day.exercises.len(),
            "{}: expected a smaller deload day ({} vs {})",
            base_day.day_name,
            deload_day.exercises.len(),
            base_day.exercises.len()
        );
    }

    println!("✅ Deload budget test passed!");
}

#[test]
fn test_rep_cap_survives_progression() {
    println!("🧪 Testing rep ceiling after progression...");

    let mut plan = fresh_plan();
    let target = plan
        .iter_exercises()
        .find(|e| e.is_compound())
        .unwrap()
        .clone();
    // Observed reps far above the compound ceiling
    let history = vec![session(
        plan.id,
        day(2026, 8, 10),
        &target.exercise_id,
        &target.name,
        vec![set(18, 30.0), set(18, 30.0)],
    )];

    ProgressionService::new().apply(&mut plan, &history);

    let after = plan
        .iter_exercises()
        .find(|e| e.exercise_id == target.exercise_id)
        .unwrap();
    assert!(after.reps <= 10, "compound reps capped at 10, got {}", after.reps);
    // 18 average reps on a compound also triggers the load bump
    assert!(after.weight >= 35.0);

    println!("✅ Rep ceiling test passed!");
}
