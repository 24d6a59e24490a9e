//! Built-in exercise dataset.
//!
//! In the full product this would be seeded from a content database; the
//! engine only depends on the shape of the records, not their origin.

use crate::models::{Difficulty, ExerciseCategory, ExerciseDefinition, MovementPattern, MuscleGroup};

use Difficulty::{Advanced, Beginner, Intermediate};
use ExerciseCategory::{Balance, Cardio, Flexibility, Strength};
use MovementPattern::{Carry, Gait, Hinge, Lunge, Pull, Push, Rotation, Squat, Static};
use MuscleGroup::*;

#[allow(clippy::too_many_arguments)]
fn def(
    id: &str,
    name: &str,
    category: ExerciseCategory,
    pattern: MovementPattern,
    primary: MuscleGroup,
    secondaries: &[MuscleGroup],
    region: &str,
    difficulty: Difficulty,
    equipment: &[&str],
    alternatives: &[&str],
) -> ExerciseDefinition {
    ExerciseDefinition {
        id: id.to_string(),
        name: name.to_string(),
        category,
        movement_pattern: pattern,
        primary_muscle_group: primary,
        secondary_muscle_groups: secondaries.to_vec(),
        muscle_region: region.to_string(),
        difficulty,
        equipment: equipment.iter().map(|e| e.to_string()).collect(),
        alternatives: alternatives.iter().map(|a| a.to_string()).collect(),
    }
}

/// Used when the catalog itself is missing the push-up entry (custom
/// datasets); the selector must always have a safe default to fall back on.
pub fn fallback_push_up() -> ExerciseDefinition {
    def(
        "push_up",
        "Push-Up",
        Strength,
        Push,
        Chest,
        &[Shoulders, Triceps],
        "mid",
        Beginner,
        &["bodyweight"],
        &["incline_push_up", "bench_press"],
    )
}

pub fn exercises() -> Vec<ExerciseDefinition> {
    vec![
        // Chest
        fallback_push_up(),
        def("incline_push_up", "Incline Push-Up", Strength, Push, Chest, &[Shoulders, Triceps], "lower", Beginner, &["bodyweight", "bench"], &["push_up"]),
        def("bench_press", "Bench Press", Strength, Push, Chest, &[Shoulders, Triceps], "mid", Intermediate, &["barbell", "bench"], &["dumbbell_press", "push_up"]),
        def("dumbbell_press", "Dumbbell Press", Strength, Push, Chest, &[Shoulders, Triceps], "mid", Beginner, &["dumbbell", "bench"], &["bench_press", "push_up"]),
        def("incline_dumbbell_press", "Incline Dumbbell Press", Strength, Push, Chest, &[Shoulders, Triceps], "upper", Intermediate, &["dumbbell", "bench"], &["incline_push_up"]),
        def("decline_bench_press", "Decline Bench Press", Strength, Push, Chest, &[Triceps], "lower", Intermediate, &["barbell", "bench"], &["chest_dip"]),
        def("chest_fly", "Chest Fly", Strength, Push, Chest, &[], "mid", Beginner, &["dumbbell", "bench"], &["cable_crossover"]),
        def("cable_crossover", "Cable Crossover", Strength, Push, Chest, &[], "inner", Intermediate, &["cable"], &["chest_fly"]),
        def("chest_dip", "Chest Dip", Strength, Push, Chest, &[Triceps, Shoulders], "lower", Advanced, &["dip_bars"], &["decline_bench_press", "push_up"]),
        // Back
        def("pull_up", "Pull-Up", Strength, Pull, Back, &[Biceps], "lats", Intermediate, &["pullup_bar"], &["lat_pulldown", "inverted_row"]),
        def("chin_up", "Chin-Up", Strength, Pull, Back, &[Biceps], "lats", Intermediate, &["pullup_bar"], &["lat_pulldown"]),
        def("lat_pulldown", "Lat Pulldown", Strength, Pull, Back, &[Biceps], "lats", Beginner, &["cable", "machine"], &["pull_up"]),
        def("bent_over_row", "Bent-Over Row", Strength, Pull, Back, &[Biceps, Core], "mid", Intermediate, &["barbell"], &["seated_cable_row", "single_arm_dumbbell_row"]),
        def("seated_cable_row", "Seated Cable Row", Strength, Pull, Back, &[Biceps], "mid", Beginner, &["cable", "machine"], &["bent_over_row"]),
        def("single_arm_dumbbell_row", "Single-Arm Dumbbell Row", Strength, Pull, Back, &[Biceps], "lats", Beginner, &["dumbbell", "bench"], &["seated_cable_row"]),
        def("inverted_row", "Inverted Row", Strength, Pull, Back, &[Biceps], "upper", Beginner, &["pullup_bar"], &["seated_cable_row"]),
        def("deadlift", "Deadlift", Strength, Hinge, Back, &[Hamstrings, Glutes, Core], "lower", Advanced, &["barbell"], &["romanian_deadlift"]),
        def("back_extension", "Back Extension", Strength, Hinge, Back, &[], "lower", Beginner, &["bodyweight"], &["superman_hold"]),
        // Shoulders
        def("overhead_press", "Overhead Press", Strength, Push, Shoulders, &[Triceps], "front", Intermediate, &["barbell"], &["dumbbell_shoulder_press"]),
        def("dumbbell_shoulder_press", "Dumbbell Shoulder Press", Strength, Push, Shoulders, &[Triceps], "front", Beginner, &["dumbbell"], &["overhead_press", "pike_push_up"]),
        def("arnold_press", "Arnold Press", Strength, Push, Shoulders, &[Triceps], "front", Advanced, &["dumbbell"], &["dumbbell_shoulder_press"]),
        def("pike_push_up", "Pike Push-Up", Strength, Push, Shoulders, &[Triceps], "front", Intermediate, &["bodyweight"], &["dumbbell_shoulder_press"]),
        def("lateral_raise", "Lateral Raise", Strength, Push, Shoulders, &[], "side", Beginner, &["dumbbell"], &["cable_lateral_raise"]),
        def("front_raise", "Front Raise", Strength, Push, Shoulders, &[], "front", Beginner, &["dumbbell"], &["lateral_raise"]),
        def("reverse_fly", "Reverse Fly", Strength, Pull, Shoulders, &[], "rear", Intermediate, &["dumbbell"], &["face_pull"]),
        def("face_pull", "Face Pull", Strength, Pull, Shoulders, &[Back], "rear", Intermediate, &["cable"], &["reverse_fly"]),
        // Biceps
        def("bicep_curl", "Bicep Curl", Strength, Pull, Biceps, &[], "full", Beginner, &["dumbbell"], &["barbell_curl", "hammer_curl"]),
        def("hammer_curl", "Hammer Curl", Strength, Pull, Biceps, &[], "outer", Beginner, &["dumbbell"], &["bicep_curl"]),
        def("barbell_curl", "Barbell Curl", Strength, Pull, Biceps, &[], "full", Intermediate, &["barbell"], &["bicep_curl"]),
        def("concentration_curl", "Concentration Curl", Strength, Pull, Biceps, &[], "peak", Beginner, &["dumbbell", "bench"], &["bicep_curl"]),
        // Triceps
        def("tricep_pushdown", "Tricep Pushdown", Strength, Push, Triceps, &[], "lateral", Beginner, &["cable"], &["overhead_tricep_extension"]),
        def("overhead_tricep_extension", "Overhead Tricep Extension", Strength, Push, Triceps, &[], "long", Beginner, &["dumbbell"], &["tricep_pushdown"]),
        def("skull_crusher", "Skull Crusher", Strength, Push, Triceps, &[], "long", Intermediate, &["barbell", "bench"], &["overhead_tricep_extension"]),
        def("bench_dip", "Bench Dip", Strength, Push, Triceps, &[Shoulders, Chest], "lateral", Beginner, &["bench"], &["tricep_pushdown"]),
        def("close_grip_bench_press", "Close-Grip Bench Press", Strength, Push, Triceps, &[Chest, Shoulders], "full", Intermediate, &["barbell", "bench"], &["bench_dip"]),
        // Quadriceps
        def("squat", "Squat", Strength, Squat, Quadriceps, &[Glutes, Hamstrings], "full", Beginner, &["bodyweight"], &["goblet_squat", "leg_press"]),
        def("goblet_squat", "Goblet Squat", Strength, Squat, Quadriceps, &[Glutes, Core], "full", Beginner, &["dumbbell"], &["squat", "leg_press"]),
        def("barbell_back_squat", "Barbell Back Squat", Strength, Squat, Quadriceps, &[Glutes, Hamstrings, Core], "full", Advanced, &["barbell"], &["goblet_squat", "leg_press"]),
        def("leg_press", "Leg Press", Strength, Squat, Quadriceps, &[Glutes], "full", Beginner, &["machine"], &["goblet_squat"]),
        def("leg_extension", "Leg Extension", Strength, Squat, Quadriceps, &[], "front", Beginner, &["machine"], &["leg_press"]),
        def("lunges", "Lunges", Strength, Lunge, Quadriceps, &[Glutes], "full", Beginner, &["bodyweight"], &["step_up", "leg_press"]),
        def("bulgarian_split_squats", "Bulgarian Split Squats", Strength, Lunge, Quadriceps, &[Glutes, Hamstrings], "full", Advanced, &["dumbbell", "bench"], &["lunges", "step_up"]),
        def("step_up", "Step-Up", Strength, Lunge, Quadriceps, &[Glutes], "full", Beginner, &["bench"], &["lunges"]),
        // Hamstrings
        def("romanian_deadlift", "Romanian Deadlift", Strength, Hinge, Hamstrings, &[Glutes, Back], "full", Intermediate, &["barbell"], &["leg_curl", "good_morning"]),
        def("leg_curl", "Leg Curl", Strength, Hinge, Hamstrings, &[], "full", Beginner, &["machine"], &["romanian_deadlift"]),
        def("good_morning", "Good Morning", Strength, Hinge, Hamstrings, &[Back, Glutes], "full", Advanced, &["barbell"], &["romanian_deadlift"]),
        def("nordic_curl", "Nordic Curl", Strength, Hinge, Hamstrings, &[], "full", Advanced, &["bodyweight"], &["leg_curl"]),
        // Glutes
        def("hip_thrust", "Hip Thrust", Strength, Hinge, Glutes, &[Hamstrings], "full", Intermediate, &["barbell", "bench"], &["glute_bridge"]),
        def("glute_bridge", "Glute Bridge", Strength, Hinge, Glutes, &[], "full", Beginner, &["bodyweight"], &["hip_thrust"]),
        def("cable_kickback", "Cable Kickback", Strength, Hinge, Glutes, &[], "upper", Beginner, &["cable"], &["glute_bridge"]),
        // Calves
        def("standing_calf_raise", "Standing Calf Raise", Strength, Gait, Calves, &[], "gastrocnemius", Beginner, &["bodyweight"], &["seated_calf_raise"]),
        def("seated_calf_raise", "Seated Calf Raise", Strength, Gait, Calves, &[], "soleus", Beginner, &["machine"], &["standing_calf_raise"]),
        // Core
        def("crunch", "Crunch", Strength, Rotation, Core, &[], "upper", Beginner, &["mat"], &["leg_raise"]),
        def("leg_raise", "Leg Raise", Strength, Rotation, Core, &[], "lower", Beginner, &["mat"], &["hanging_knee_raise"]),
        def("russian_twist", "Russian Twist", Strength, Rotation, Core, &[], "obliques", Beginner, &["mat"], &["cable_woodchop"]),
        def("hanging_knee_raise", "Hanging Knee Raise", Strength, Rotation, Core, &[], "lower", Intermediate, &["pullup_bar"], &["leg_raise"]),
        def("cable_woodchop", "Cable Woodchop", Strength, Rotation, Core, &[], "obliques", Intermediate, &["cable"], &["russian_twist"]),
        def("farmers_carry", "Farmer's Carry", Strength, Carry, Core, &[Back, Shoulders], "full", Intermediate, &["dumbbell"], &["russian_twist"]),
        // Cardio
        def("running", "Running", Cardio, Gait, FullBody, &[], "full", Beginner, &["bodyweight"], &["cycling", "jumping_jacks"]),
        def("cycling", "Cycling", Cardio, Gait, FullBody, &[], "full", Beginner, &["bike"], &["running"]),
        def("rowing_machine", "Rowing Machine", Cardio, Gait, FullBody, &[], "full", Intermediate, &["machine"], &["running"]),
        def("jump_rope", "Jump Rope", Cardio, Gait, FullBody, &[], "full", Intermediate, &["jump_rope"], &["jumping_jacks"]),
        def("jumping_jacks", "Jumping Jacks", Cardio, Gait, FullBody, &[], "full", Beginner, &["bodyweight"], &["jump_rope"]),
        def("mountain_climbers", "Mountain Climbers", Cardio, Gait, FullBody, &[], "full", Intermediate, &["bodyweight"], &["jumping_jacks"]),
        def("burpees", "Burpees", Cardio, Gait, FullBody, &[], "full", Advanced, &["bodyweight"], &["mountain_climbers"]),
        // Flexibility
        def("hamstring_stretch", "Hamstring Stretch", Flexibility, Static, Hamstrings, &[], "full", Beginner, &["mat"], &["downward_dog"]),
        def("quad_stretch", "Quad Stretch", Flexibility, Static, Quadriceps, &[], "full", Beginner, &["mat"], &["hip_flexor_stretch"]),
        def("hip_flexor_stretch", "Hip Flexor Stretch", Flexibility, Static, Quadriceps, &[], "hip_flexors", Beginner, &["mat"], &["quad_stretch"]),
        def("chest_opener", "Chest Opener", Flexibility, Static, Chest, &[], "full", Beginner, &["mat"], &["shoulder_stretch"]),
        def("shoulder_stretch", "Shoulder Stretch", Flexibility, Static, Shoulders, &[], "full", Beginner, &["mat"], &["chest_opener"]),
        def("childs_pose", "Child's Pose", Flexibility, Static, Back, &[], "lower", Beginner, &["mat"], &["cat_cow"]),
        def("cat_cow", "Cat-Cow", Flexibility, Static, Back, &[], "full", Beginner, &["mat"], &["childs_pose"]),
        def("downward_dog", "Downward Dog", Flexibility, Static, Hamstrings, &[], "full", Intermediate, &["mat"], &["hamstring_stretch"]),
        def("cobra_stretch", "Cobra Stretch", Flexibility, Static, Core, &[], "full", Beginner, &["mat"], &["cat_cow"]),
        // Balance
        def("plank", "Plank", Balance, Static, Core, &[], "full", Beginner, &["mat"], &["side_plank", "bird_dog"]),
        def("side_plank", "Side Plank", Balance, Static, Core, &[], "obliques", Intermediate, &["mat"], &["plank"]),
        def("bird_dog", "Bird Dog", Balance, Static, Core, &[], "lower", Beginner, &["mat"], &["dead_bug"]),
        def("dead_bug", "Dead Bug", Balance, Static, Core, &[], "lower", Beginner, &["mat"], &["bird_dog"]),
        def("single_leg_stand", "Single-Leg Stand", Balance, Static, FullBody, &[], "full", Beginner, &["bodyweight"], &["bird_dog"]),
        def("superman_hold", "Superman Hold", Balance, Static, Back, &[], "lower", Beginner, &["mat"], &["back_extension"]),
    ]
}
