use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::ExerciseCatalog;
use crate::errors::CoachError;
use crate::models::{
    Adaptation, AdaptationChange, ExperienceLevel, ProfileAnswers, SessionLog, WeeklyPlan,
};
use crate::services::performance_analysis_service::PerformanceAnalysisService;
use crate::services::profile_service::ProfileService;
use crate::services::program_generation_service::ProgramGenerationService;
use crate::services::set_scheme_service::SetSchemeService;
use crate::storage::{keys, load_typed, save_typed, Store};

/// Facade tying profile resolution, plan generation, performance analysis
/// and adaptation handling to the key-value store.
///
/// Every method follows the same shape: load what it needs (concurrently
/// where the loads are independent), run the pure engine over it, write the
/// result back in a single save per key.
pub struct CoachService {
    store: Arc<dyn Store>,
    catalog: Arc<ExerciseCatalog>,
    profile: ProfileService,
    generator: ProgramGenerationService,
    analyzer: PerformanceAnalysisService,
    set_scheme: SetSchemeService,
    // Serializes read-modify-write sequences against the store so two
    // concurrent plan/history mutations cannot lose each other's writes
    write_lock: Mutex<()>,
}

impl CoachService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self::with_config(store, &crate::config::AppConfig::default())
    }

    pub fn with_config(store: Arc<dyn Store>, config: &crate::config::AppConfig) -> Self {
        let catalog = Arc::new(ExerciseCatalog::builtin().clone());
        Self {
            profile: ProfileService::new(Arc::clone(&catalog)),
            generator: ProgramGenerationService::with_default_minutes(
                Arc::clone(&catalog),
                config.default_session_minutes,
            ),
            analyzer: PerformanceAnalysisService::with_window(
                Arc::clone(&catalog),
                config.recent_window,
            ),
            set_scheme: SetSchemeService::new(),
            catalog,
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    pub async fn save_profile(
        &self,
        user: &str,
        answers: &ProfileAnswers,
    ) -> Result<(), CoachError> {
        save_typed(self.store.as_ref(), &keys::profile(user), answers).await
    }

    /// Generates plan variations from the stored profile and session history,
    /// persists each variation, and returns them for the user to pick from.
    /// A missing profile falls back to default answers, which the resolver
    /// turns into a conservative beginner request.
    pub async fn generate_plan_variations(
        &self,
        user: &str,
        count: usize,
    ) -> Result<Vec<WeeklyPlan>, CoachError> {
        let profile_key = keys::profile(user);
        let (answers, history) = tokio::join!(
            load_typed::<ProfileAnswers>(self.store.as_ref(), &profile_key),
            self.load_sessions(user),
        );
        let answers = answers?.unwrap_or_default();
        let history = history?;

        let request = self.profile.resolve(&answers);
        let plans = self.generator.generate_variations(&request, &history, count);
        for plan in &plans {
            save_typed(self.store.as_ref(), &keys::plan(plan.id), plan).await?;
        }
        info!(user, variations = plans.len(), "generated and stored plan variations");
        Ok(plans)
    }

    /// Marks a previously generated plan as the user's active program.
    pub async fn select_plan(&self, user: &str, plan_id: Uuid) -> Result<WeeklyPlan, CoachError> {
        let plan: WeeklyPlan = load_typed(self.store.as_ref(), &keys::plan(plan_id))
            .await?
            .ok_or(CoachError::PlanNotFound(plan_id))?;
        save_typed(self.store.as_ref(), &keys::active_plan(user), &plan_id).await?;
        info!(user, plan = %plan_id, "plan selected as active");
        Ok(plan)
    }

    pub async fn active_plan(&self, user: &str) -> Result<WeeklyPlan, CoachError> {
        let plan_id: Uuid = load_typed(self.store.as_ref(), &keys::active_plan(user))
            .await?
            .ok_or_else(|| CoachError::NoActivePlan(user.to_string()))?;
        load_typed(self.store.as_ref(), &keys::plan(plan_id))
            .await?
            .ok_or(CoachError::PlanNotFound(plan_id))
    }

    /// Appends a session to the user's history. History is append-only;
    /// existing entries are never rewritten.
    pub async fn log_session(&self, user: &str, session: SessionLog) -> Result<(), CoachError> {
        let _guard = self.write_lock.lock().await;
        let mut sessions = self.load_sessions(user).await?;
        sessions.push(session);
        save_typed(self.store.as_ref(), &keys::sessions(user), &sessions).await
    }

    /// Analyzes the active plan against logged history and stores the
    /// resulting suggestions alongside the plan.
    pub async fn analyze_performance(&self, user: &str) -> Result<Vec<Adaptation>, CoachError> {
        let plan = self.active_plan(user).await?;
        let history = self.load_sessions(user).await?;
        let adaptations = self.analyzer.analyze(&history, &plan);
        save_typed(
            self.store.as_ref(),
            &keys::adaptations(plan.id),
            &adaptations,
        )
        .await?;
        Ok(adaptations)
    }

    /// Applies an accepted adaptation to the active plan. Each change is
    /// checked against the plan's current value first; changes whose target
    /// moved since the suggestion was made are skipped rather than clobbered.
    /// The adaptation is consumed either way. The whole load-mutate-save
    /// sequence runs under the write lock, so concurrent applies to the same
    /// plan cannot lose each other's changes.
    pub async fn apply_adaptation(
        &self,
        user: &str,
        adaptation: &Adaptation,
    ) -> Result<WeeklyPlan, CoachError> {
        let _guard = self.write_lock.lock().await;
        let mut plan = self.active_plan(user).await?;
        if plan.id != adaptation.plan_id {
            warn!(
                plan = %plan.id,
                adaptation_plan = %adaptation.plan_id,
                "adaptation targets a different plan, ignoring"
            );
            self.discard_adaptation(adaptation.plan_id, adaptation.id).await?;
            return Ok(plan);
        }

        let mut applied = 0usize;
        for change in &adaptation.changes {
            if self.apply_change(&mut plan, change) {
                applied += 1;
            } else {
                debug!(field = %change.field, "adaptation change skipped (stale or unknown)");
            }
        }

        save_typed(self.store.as_ref(), &keys::plan(plan.id), &plan).await?;
        self.discard_adaptation(plan.id, adaptation.id).await?;
        info!(
            user,
            adaptation = %adaptation.id,
            applied,
            total = adaptation.changes.len(),
            "adaptation applied"
        );
        Ok(plan)
    }

    /// Removes a suggestion without touching the plan.
    pub async fn dismiss_adaptation(
        &self,
        plan_id: Uuid,
        adaptation_id: Uuid,
    ) -> Result<(), CoachError> {
        let _guard = self.write_lock.lock().await;
        self.discard_adaptation(plan_id, adaptation_id).await
    }

    // Callers must hold the write lock.
    async fn discard_adaptation(
        &self,
        plan_id: Uuid,
        adaptation_id: Uuid,
    ) -> Result<(), CoachError> {
        let key = keys::adaptations(plan_id);
        let mut stored: Vec<Adaptation> = load_typed(self.store.as_ref(), &key)
            .await?
            .unwrap_or_default();
        stored.retain(|a| a.id != adaptation_id);
        save_typed(self.store.as_ref(), &key, &stored).await
    }

    pub async fn load_sessions(&self, user: &str) -> Result<Vec<SessionLog>, CoachError> {
        Ok(load_typed(self.store.as_ref(), &keys::sessions(user))
            .await?
            .unwrap_or_default())
    }

    /// One field edit against the current plan. Returns false when the edit
    /// no longer applies cleanly; a stale change is a no-op, never an error.
    fn apply_change(&self, plan: &mut WeeklyPlan, change: &AdaptationChange) -> bool {
        match change.field.as_str() {
            "weight" => Self::edit_exercise(plan, change, |ex, v| {
                if let Some(w) = v.as_f64() {
                    ex.weight = w.max(0.0);
                    true
                } else {
                    false
                }
            }),
            "sets" => Self::edit_exercise(plan, change, |ex, v| {
                if let Some(s) = v.as_u64() {
                    ex.sets = (s as u32).clamp(1, 6);
                    true
                } else {
                    false
                }
            }),
            "reps" => Self::edit_exercise(plan, change, |ex, v| {
                if let Some(r) = v.as_u64() {
                    ex.reps = (r as u32).clamp(1, ex.rep_cap());
                    true
                } else {
                    false
                }
            }),
            "rest_seconds" => Self::edit_exercise(plan, change, |ex, v| {
                if let Some(r) = v.as_u64() {
                    ex.rest_seconds = Some(r as u32);
                    true
                } else {
                    false
                }
            }),
            "exercise" => self.substitute_exercise(plan, change),
            "days_per_week" => {
                if let Some(d) = change.new_value.as_u64() {
                    plan.days_per_week = (d as u8).clamp(2, 7);
                    true
                } else {
                    false
                }
            }
            "level" => {
                if let Ok(level) =
                    serde_json::from_value::<ExperienceLevel>(change.new_value.clone())
                {
                    plan.level = level;
                    true
                } else {
                    false
                }
            }
            "duration" => {
                if let Some(minutes) = change.new_value.as_u64() {
                    for day in &mut plan.days {
                        day.target_minutes = minutes as u32;
                    }
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn edit_exercise(
        plan: &mut WeeklyPlan,
        change: &AdaptationChange,
        edit: impl Fn(&mut crate::models::PlannedExercise, &serde_json::Value) -> bool,
    ) -> bool {
        let Some(id) = change.exercise_id.as_deref() else {
            return false;
        };
        let Some(exercise) = plan.find_exercise_mut(id) else {
            return false;
        };
        edit(exercise, &change.new_value)
    }

    /// Replaces a failing exercise in place, keeping its day and position.
    /// The replacement gets a fresh scheme for the plan's goal and level.
    fn substitute_exercise(&self, plan: &mut WeeklyPlan, change: &AdaptationChange) -> bool {
        let Some(old_id) = change.exercise_id.as_deref() else {
            return false;
        };
        let Some(new_name) = change.new_value.as_str() else {
            return false;
        };
        let Some(replacement) = self.catalog.get_by_name(new_name) else {
            return false;
        };
        let planned = self
            .set_scheme
            .plan_exercise(replacement, plan.goal, plan.level);
        match plan.find_exercise_mut(old_id) {
            Some(slot) => {
                *slot = planned;
                true
            }
            None => false,
        }
    }
}
