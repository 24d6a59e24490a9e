use std::collections::{HashMap, HashSet};

use chrono::Datelike;
use tracing::debug;

use crate::models::{SessionLog, WeeklyPlan};

/// Per-ISO-week averages of the completed sets for one exercise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekSample {
    pub iso_year: i32,
    pub iso_week: u32,
    pub weight: f64, // average across completed sets
    pub reps: f64,   // average across completed sets
    pub sets: f64,   // average completed sets per session
}

/// Weight increment granularity (plates usually come in 1.25 pairs).
const WEIGHT_INCREMENT: f64 = 2.5;

/// Window-wide weight gain at or below this counts as a plateau.
const PLATEAU_TOLERANCE: f64 = 2.0;

/// Rewrites the scheme of a freshly assembled plan from historical session
/// logs: progressive overload on an upward trend, adoption of observed
/// numbers otherwise, and a rep deload once the whole tracked window has
/// gone flat. Exercise identity and day structure are never touched.
#[derive(Debug, Clone, Default)]
pub struct ProgressionService;

impl ProgressionService {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, plan: &mut WeeklyPlan, history: &[SessionLog]) {
        for day in &mut plan.days {
            for exercise in &mut day.exercises {
                let series = Self::weekly_series(&exercise.exercise_id, history);
                let Some(last) = series.first().copied() else {
                    // No history for this exercise: leave the scheme untouched
                    debug!(exercise = %exercise.name, "no history, skipping progression");
                    continue;
                };
                let cap = exercise.rep_cap();

                let mut weight = Self::round_to_increment(last.weight);
                let mut increased = false;

                // A compound handled for 10+ average reps is ready for more
                // load
                if exercise.is_compound() && last.reps >= 10.0 {
                    weight = Self::round_to_increment(weight + 5.0);
                    increased = true;
                }

                if series.len() >= 2 {
                    let prior = series[1];
                    if last.weight - prior.weight >= 5.0 {
                        // Upward trend: add a set while below four, then reps
                        if exercise.sets < 4 {
                            exercise.sets += 1;
                        } else {
                            exercise.reps = (exercise.reps + 1).min(cap);
                        }
                        if weight < last.weight {
                            // Increment rounding must not walk a positive
                            // trend backwards
                            weight += WEIGHT_INCREMENT;
                        }
                        increased = true;
                    } else {
                        // Flat or regressed week: adopt what was actually done
                        exercise.reps = (last.reps.round() as u32).clamp(1, cap);
                        exercise.sets = (last.sets.round() as u32).clamp(1, 6);
                    }

                    // Whole-window plateau check. This fires even when the
                    // latest week merely matched the prior one; a
                    // deliberately conservative deload policy.
                    let oldest = series[series.len() - 1];
                    if !increased && last.weight - oldest.weight <= PLATEAU_TOLERANCE {
                        let cut = ((exercise.reps as f64) * 0.10).round().clamp(1.0, 2.0) as u32;
                        exercise.reps = exercise.reps.saturating_sub(cut).max(1);
                        debug!(exercise = %exercise.name, cut, "plateau detected, reducing reps");
                    }
                } else {
                    // Single week of data: adopt it directly
                    exercise.reps = (last.reps.round() as u32).clamp(1, cap);
                    exercise.sets = (last.sets.round() as u32).clamp(1, 6);
                }

                exercise.weight = weight;
                // The compound/isolation ceiling is re-applied as the final
                // step, whatever path was taken above
                exercise.reps = exercise.reps.min(cap).max(1);
            }
        }
    }

    /// True when at least half of the exercises with three or more tracked
    /// weeks have stalled; the assembler then trims the day budget by one.
    pub fn deload_recommended(&self, history: &[SessionLog]) -> bool {
        let ids: HashSet<&str> = history
            .iter()
            .flat_map(|s| s.exercises.iter())
            .map(|e| e.exercise_id.as_str())
            .collect();

        let mut tracked = 0usize;
        let mut plateaued = 0usize;
        for id in ids {
            let series = Self::weekly_series(id, history);
            if series.len() < 3 {
                continue;
            }
            tracked += 1;
            let last = series[0];
            let oldest = series[series.len() - 1];
            if last.weight - oldest.weight <= PLATEAU_TOLERANCE {
                plateaued += 1;
            }
        }
        tracked > 0 && plateaued * 2 >= tracked
    }

    /// Groups an exercise's completed sets by ISO week and averages them,
    /// most recent week first.
    pub fn weekly_series(exercise_id: &str, history: &[SessionLog]) -> Vec<WeekSample> {
        // (weight sum, weight count, reps sum, sets total, session count)
        let mut weeks: HashMap<(i32, u32), (f64, u32, f64, u32, u32)> = HashMap::new();

        for session in history {
            for log in session.exercises.iter().filter(|l| l.exercise_id == exercise_id) {
                let completed: Vec<_> = log.sets.iter().filter(|s| s.completed).collect();
                if completed.is_empty() {
                    continue;
                }
                let iso = session.date.iso_week();
                let entry = weeks.entry((iso.year(), iso.week())).or_default();
                for set in &completed {
                    entry.0 += set.weight;
                    entry.1 += 1;
                    entry.2 += set.reps as f64;
                }
                entry.3 += completed.len() as u32;
                entry.4 += 1;
            }
        }

        let mut samples: Vec<WeekSample> = weeks
            .into_iter()
            .map(|((iso_year, iso_week), (w_sum, n, r_sum, sets, sessions))| WeekSample {
                iso_year,
                iso_week,
                weight: w_sum / n as f64,
                reps: r_sum / n as f64,
                sets: sets as f64 / sessions as f64,
            })
            .collect();
        samples.sort_by_key(|s| std::cmp::Reverse((s.iso_year, s.iso_week)));
        samples
    }

    pub fn round_to_increment(weight: f64) -> f64 {
        (weight / WEIGHT_INCREMENT).round() * WEIGHT_INCREMENT
    }
}
