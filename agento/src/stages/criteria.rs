//! Module 1: criteria generation (placeholder).
//!
//! The real stage will ask a model for success criteria. Until then
//! [`CriteriaStage`] waits briefly and fabricates a fixed list.

use super::{Stage, StageInput, StageReport};
use crate::core::{LogPair, ModuleId, ModuleOutput};
use crate::errors::{AgentoError, Result};
use crate::utils::iso_timestamp;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

const DEFAULT_DELAY: Duration = Duration::from_millis(100);
const GENERATED_CRITERIA: usize = 5;
const SELECTED_CRITERIA: usize = 2;

/// The on-disk output of module 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaOutput {
    /// The user's goal, verbatim.
    pub goal: String,
    /// Every generated criterion, in order.
    pub success_criteria: Vec<String>,
    /// The criteria carried forward, in order.
    pub selected_criteria: Vec<String>,
}

impl CriteriaOutput {
    /// Fabricates `generated` criteria and selects the first `selected`.
    #[must_use]
    pub fn placeholder(goal: impl Into<String>, generated: usize, selected: usize) -> Self {
        let success_criteria: Vec<String> =
            (1..=generated).map(|i| format!("Criterion {i}")).collect();
        let selected_criteria = success_criteria
            .iter()
            .take(selected)
            .cloned()
            .collect();

        Self {
            goal: goal.into(),
            success_criteria,
            selected_criteria,
        }
    }

    /// Converts into a generic module output.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the record cannot be serialized.
    pub fn to_output(&self) -> Result<ModuleOutput> {
        ModuleOutput::try_from(serde_json::to_value(self)?)
    }

    /// Reads the typed record back out of a module output.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the output does not have this shape.
    pub fn from_output(output: &ModuleOutput) -> Result<Self> {
        Ok(serde_json::from_value(output.clone().into_value())?)
    }

    /// Writes the record as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be written.
    pub async fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, serde_json::to_vec(self)?).await?;
        debug!(path = %path.display(), "criteria output written");
        Ok(())
    }

    /// Reads a record previously written with [`write_to`](Self::write_to).
    ///
    /// # Errors
    ///
    /// Returns `Io` or `Serialization` on failure.
    pub async fn read_from(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Placeholder stage for module 1.
#[derive(Debug, Clone)]
pub struct CriteriaStage {
    delay: Duration,
    output_path: Option<PathBuf>,
}

impl Default for CriteriaStage {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            output_path: None,
        }
    }
}

impl CriteriaStage {
    /// Creates a stage with the default delay and no output file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the simulated work time.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Also writes the output record to `path`.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Produces the typed record for `goal`, writing it if configured.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the output file cannot be written.
    pub async fn generate(&self, goal: &str) -> Result<CriteriaOutput> {
        tokio::time::sleep(self.delay).await;

        let output = CriteriaOutput::placeholder(goal, GENERATED_CRITERIA, SELECTED_CRITERIA);
        if let Some(path) = &self.output_path {
            output.write_to(path).await?;
        }
        Ok(output)
    }
}

#[async_trait]
impl Stage for CriteriaStage {
    fn module_id(&self) -> ModuleId {
        ModuleId::Module1
    }

    async fn run(&self, input: StageInput) -> Result<StageReport> {
        let goal = input
            .goal
            .ok_or_else(|| AgentoError::stage_failed(ModuleId::Module1, "a goal is required"))?;

        let started = iso_timestamp();
        let criteria = self.generate(&goal).await?;
        info!(
            generated = criteria.success_criteria.len(),
            selected = criteria.selected_criteria.len(),
            "criteria generated"
        );

        let standard = format!(
            "Generated {} success criteria, selected {}.",
            criteria.success_criteria.len(),
            criteria.selected_criteria.len()
        );
        let mut verbose = format!("[{started}] goal: {goal}\n");
        for criterion in &criteria.success_criteria {
            let mark = if criteria.selected_criteria.contains(criterion) { "*" } else { " " };
            verbose.push_str(&format!("{mark} {criterion}\n"));
        }
        if let Some(path) = &self.output_path {
            verbose.push_str(&format!("written to {}\n", path.display()));
        }

        Ok(StageReport::new(criteria.to_output()?, LogPair::new(standard, verbose)))
    }
}

/// Runs the placeholder module 1 for `goal` and writes its record to
/// `output_file`.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written.
pub async fn run_module_1(goal: &str, output_file: impl Into<PathBuf>) -> Result<CriteriaOutput> {
    CriteriaStage::new()
        .with_output_path(output_file)
        .generate(goal)
        .await
}
