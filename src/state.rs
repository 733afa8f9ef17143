//! Game Store
//!
//! The authoritative project/task tree plus gamification and telemetry
//! state. An explicit service object with injected collaborators
//! (persistence store, clock, id generator) rather than a global
//! singleton, so tests run in isolation. Every transition mutates the
//! owned aggregate
//! synchronously and persists the full snapshot afterwards; observers see
//! either the pre- or post-transition state, never a partial one.

use crate::error::AppResult;
use crate::models::{
    GameState, IntegrationPatch, LevelPatch, Project, SettingsPatch, Task, TaskPatch,
};
use crate::services::{gamification, task_tree, token_tracker};
use crate::storage::StateStore;

/// Injected timestamp source (ISO 8601)
pub type Clock = Box<dyn Fn() -> String + Send + Sync>;

/// Injected identifier source
pub type IdGen = Box<dyn Fn() -> String + Send + Sync>;

/// The project-state engine
pub struct GameStore {
    state: GameState,
    store: StateStore,
    clock: Clock,
    id_gen: IdGen,
}

impl GameStore {
    /// Create a store over a persistence collaborator, loading any existing
    /// state and wiring the real clock and id generator.
    pub fn new(store: StateStore) -> AppResult<Self> {
        let state = store.load()?;
        Ok(Self {
            state,
            store,
            clock: Box::new(|| chrono::Utc::now().to_rfc3339()),
            id_gen: Box::new(|| uuid::Uuid::new_v4().to_string()),
        })
    }

    /// Create a store with explicit clock and id sources (test isolation).
    pub fn with_sources(store: StateStore, clock: Clock, id_gen: IdGen) -> AppResult<Self> {
        let state = store.load()?;
        Ok(Self {
            state,
            store,
            clock,
            id_gen,
        })
    }

    /// Read access to the current aggregate snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn persist(&self) -> AppResult<()> {
        self.store.save(&self.state)
    }

    /// Upsert a project by id and make it current.
    pub fn set_project(&mut self, project: Project) -> AppResult<()> {
        match self.state.projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project.clone(),
            None => self.state.projects.push(project.clone()),
        }
        self.state.current_project_id = Some(project.id.clone());
        self.state.current_project = Some(project);
        self.persist()
    }

    /// Append-only insert; the new project becomes current.
    pub fn create_project(&mut self, project: Project) -> AppResult<()> {
        self.state.current_project_id = Some(project.id.clone());
        self.state.current_project = Some(project.clone());
        self.state.projects.push(project);
        self.persist()
    }

    /// Change which project is current. An unknown id leaves no current
    /// project snapshot.
    pub fn switch_project(&mut self, project_id: &str) -> AppResult<()> {
        let project = self.state.projects.iter().find(|p| p.id == project_id);
        self.state.current_project = project.cloned();
        self.state.current_project_id = Some(project_id.to_string());
        self.persist()
    }

    /// Remove a project by id. If it was current, the first remaining
    /// project (or none) takes its place.
    pub fn delete_project(&mut self, project_id: &str) -> AppResult<()> {
        let was_current = self.state.current_project_id.as_deref() == Some(project_id);
        self.state.projects.retain(|p| p.id != project_id);

        if was_current {
            let next = self.state.projects.first().cloned();
            self.state.current_project_id = next.as_ref().map(|p| p.id.clone());
            self.state.current_project = next;
        }
        self.persist()
    }

    /// Deep-value-copy a project under a fresh id and creation timestamp,
    /// append it, and make it current. No-op on an unknown id; returns the
    /// new id otherwise.
    pub fn clone_project(&mut self, project_id: &str) -> AppResult<Option<String>> {
        let Some(source) = self.state.projects.iter().find(|p| p.id == project_id) else {
            return Ok(None);
        };

        let mut cloned = source.clone();
        cloned.id = (self.id_gen)();
        cloned.name = format!("{} (Copy)", cloned.name);
        cloned.created_at = (self.clock)();

        let new_id = cloned.id.clone();
        self.state.current_project_id = Some(new_id.clone());
        self.state.current_project = Some(cloned.clone());
        self.state.projects.push(cloned);
        self.persist()?;
        Ok(Some(new_id))
    }

    /// Replace the current project's free-text context field.
    pub fn update_context(&mut self, context: &str) -> AppResult<()> {
        if let Some(project) = self.state.current_project.as_mut() {
            project.context = Some(context.to_string());
        }
        self.persist()
    }

    /// Shallow-merge a patch into a level of the current project.
    pub fn update_level(&mut self, level_id: u32, patch: LevelPatch) -> AppResult<()> {
        if let Some(project) = self.state.current_project.as_mut() {
            if let Some(level) = project.levels.iter_mut().find(|l| l.id == level_id) {
                level.apply_patch(patch);
            }
        }
        self.persist()
    }

    /// Shallow-merge a patch into a task directly under the given level.
    ///
    /// Lookup here is not recursive: nested sub-tasks are not matched.
    pub fn update_task(&mut self, level_id: u32, task_id: &str, patch: TaskPatch) -> AppResult<()> {
        if let Some(project) = self.state.current_project.as_mut() {
            if let Some(level) = project.levels.iter_mut().find(|l| l.id == level_id) {
                if let Some(task) = level.tasks.iter_mut().find(|t| t.id == task_id) {
                    task.apply_patch(patch);
                }
            }
        }
        self.persist()
    }

    /// Attach sub-tasks to a task anywhere in the level's task forest,
    /// however deeply nested. This is the drill-in mechanism.
    pub fn break_down_task(
        &mut self,
        level_id: u32,
        task_id: &str,
        sub_tasks: Vec<Task>,
    ) -> AppResult<()> {
        if let Some(project) = self.state.current_project.as_mut() {
            if let Some(level) = project.levels.iter_mut().find(|l| l.id == level_id) {
                task_tree::attach_subtasks(&mut level.tasks, task_id, sub_tasks);
            }
        }
        self.persist()
    }

    /// Mark a top-level task complete, record the optional actual token
    /// count, award experience, and accumulate the inferred skill.
    ///
    /// Idempotent: a task that is already complete mutates nothing.
    pub fn complete_task(
        &mut self,
        level_id: u32,
        task_id: &str,
        actual_tokens: Option<u32>,
    ) -> AppResult<()> {
        let Some(project) = self.state.current_project.as_mut() else {
            return self.persist();
        };
        let Some(level) = project.levels.iter_mut().find(|l| l.id == level_id) else {
            return self.persist();
        };
        let Some(task) = level.tasks.iter_mut().find(|t| t.id == task_id) else {
            return self.persist();
        };
        if task.completed {
            return self.persist();
        }

        task.completed = true;
        task.actual_tokens = actual_tokens;
        let xp_gain = task.xp;
        let skill_name = gamification::infer_skill(&task.title);

        self.state.user_xp += xp_gain;
        self.state.user_level = gamification::user_level(self.state.user_xp);
        gamification::accumulate_skill(
            &mut self.state.skills,
            skill_name,
            xp_gain,
            (self.id_gen)(),
        );

        tracing::debug!(task_id, xp_gain, skill = skill_name, "task completed");
        self.persist()
    }

    /// Add experience directly and recompute the user level.
    pub fn update_xp(&mut self, amount: u32) -> AppResult<()> {
        self.state.user_xp += amount;
        self.state.user_level = gamification::user_level(self.state.user_xp);
        self.persist()
    }

    /// Flip a tool's connected flag on the current project's tool list.
    pub fn toggle_tool(&mut self, tool_id: &str) -> AppResult<()> {
        if let Some(project) = self.state.current_project.as_mut() {
            if let Some(tools) = project.tools.as_mut() {
                if let Some(tool) = tools.iter_mut().find(|t| t.id == tool_id) {
                    tool.connected = !tool.connected;
                }
            }
        }
        self.persist()
    }

    /// Shallow-merge a patch into a global integration record by id.
    pub fn update_integration(&mut self, tool_id: &str, patch: IntegrationPatch) -> AppResult<()> {
        if let Some(tool) = self.state.integrations.iter_mut().find(|t| t.id == tool_id) {
            tool.apply_patch(patch);
        }
        self.persist()
    }

    /// Store a provider credential in the aggregate.
    pub fn set_api_key(&mut self, provider: &str, key: &str) -> AppResult<()> {
        self.state
            .api_keys
            .insert(provider.to_string(), key.to_string());
        self.persist()
    }

    /// Shallow-merge a settings patch.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> AppResult<()> {
        if let Some(model) = patch.preferred_model {
            self.state.settings.preferred_model = model;
        }
        if let Some(currency) = patch.currency {
            self.state.settings.currency = currency;
        }
        self.persist()
    }

    /// Record an estimate-vs-actual precision sample in the token ledger.
    pub fn add_token_record(
        &mut self,
        estimated: u32,
        actual: u32,
        task_id: Option<String>,
        task_title: Option<String>,
    ) -> AppResult<()> {
        token_tracker::record(
            &mut self.state.token_history,
            (self.clock)(),
            estimated,
            actual,
            task_id,
            task_title,
        );
        self.persist()
    }
}
