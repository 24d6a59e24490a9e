use crate::models::TrainingGoal;

/// One planned training day slot: which weekday it lands on and what the
/// session focuses on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySlot {
    pub weekday: u8, // 0 = Monday .. 6 = Sunday
    pub focus: &'static str,
}

pub const FOCUS_FULL_BODY: &str = "Full Body";
pub const FOCUS_UPPER: &str = "Upper Body";
pub const FOCUS_LOWER: &str = "Lower Body";
pub const FOCUS_PUSH: &str = "Push";
pub const FOCUS_PULL: &str = "Pull";
pub const FOCUS_LEGS: &str = "Legs";
pub const FOCUS_CARDIO: &str = "Cardio & Endurance";
pub const FOCUS_FLEXIBILITY: &str = "Flexibility & Mobility";
pub const FOCUS_ACTIVE_RECOVERY: &str = "Active Recovery";

pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Maps `(goal, days_per_week)` onto an ordered weekly split. Pure lookup,
/// total for any days value in 3..=7 (out-of-range input is clamped by the
/// profile resolver before it gets here).
#[derive(Debug, Clone, Default)]
pub struct SplitPlannerService;

impl SplitPlannerService {
    pub fn new() -> Self {
        Self
    }

    pub fn plan(&self, goal: TrainingGoal, days_per_week: u8) -> Vec<DaySlot> {
        let days = days_per_week.clamp(3, 7);
        let weekdays = Self::weekdays_for(days);
        let focuses = Self::focuses_for(goal, days);

        weekdays
            .iter()
            .zip(focuses)
            .map(|(&weekday, focus)| DaySlot { weekday, focus })
            .collect()
    }

    /// Fixed weekday layout per day count, spreading sessions across the
    /// week with recovery gaps where the count allows them.
    fn weekdays_for(days: u8) -> &'static [u8] {
        match days {
            3 => &[0, 2, 4],             // Mon, Wed, Fri
            4 => &[0, 1, 3, 4],          // Mon, Tue, Thu, Fri
            5 => &[0, 1, 3, 4, 6],       // Mon, Tue, Thu, Fri, Sun
            6 => &[0, 1, 2, 3, 4, 5],    // Mon through Sat
            _ => &[0, 1, 2, 3, 4, 5, 6], // daily
        }
    }

    fn focuses_for(goal: TrainingGoal, days: u8) -> Vec<&'static str> {
        match goal {
            // Weight loss deliberately reuses the strength split: nutrition,
            // not added cardio volume, is the intended lever for that goal.
            TrainingGoal::Strength | TrainingGoal::MuscleGain | TrainingGoal::WeightLoss => {
                Self::strength_family_split(days)
            }
            TrainingGoal::Endurance => vec![FOCUS_CARDIO; days as usize],
            TrainingGoal::Flexibility => vec![FOCUS_FLEXIBILITY; days as usize],
        }
    }

    fn strength_family_split(days: u8) -> Vec<&'static str> {
        match days {
            3 => vec![FOCUS_FULL_BODY; 3],
            4 => vec![FOCUS_UPPER, FOCUS_LOWER, FOCUS_UPPER, FOCUS_LOWER],
            5 => vec![FOCUS_PUSH, FOCUS_PULL, FOCUS_LEGS, FOCUS_UPPER, FOCUS_LOWER],
            6 => vec![
                FOCUS_PUSH, FOCUS_PULL, FOCUS_LEGS, FOCUS_PUSH, FOCUS_PULL, FOCUS_LEGS,
            ],
            _ => vec![
                FOCUS_PUSH,
                FOCUS_PULL,
                FOCUS_LEGS,
                FOCUS_PUSH,
                FOCUS_PULL,
                FOCUS_LEGS,
                FOCUS_ACTIVE_RECOVERY,
            ],
        }
    }
}
