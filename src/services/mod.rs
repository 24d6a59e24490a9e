// Business logic services

pub mod coach_service;
pub mod exercise_selection_service;
pub mod performance_analysis_service;
pub mod profile_service;
pub mod program_generation_service;
pub mod progression_service;
pub mod seeded_shuffle;
pub mod set_scheme_service;
pub mod split_planner_service;

pub use coach_service::CoachService;
pub use exercise_selection_service::ExerciseSelectionService;
pub use performance_analysis_service::PerformanceAnalysisService;
pub use profile_service::ProfileService;
pub use program_generation_service::ProgramGenerationService;
pub use progression_service::ProgressionService;
pub use set_scheme_service::SetSchemeService;
pub use split_planner_service::SplitPlannerService;
