//! Single-selection view state over the sample registry.
//!
//! The controller owns one piece of mutable state, the active entry. Every
//! displayed value is derived from it through [`derive_view_model`], so the
//! source, output and download link always belong to the same sample.

use std::{cell::OnceCell, sync::Arc};

use assets::DeploymentContext;
use catalog::Registry;
use shared::{
    domain::{SampleEntry, SampleId},
    error::ShowcaseError,
    protocol::{NavItem, ViewModel},
};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    Changed {
        previous: SampleId,
        current: SampleId,
    },
    Unchanged,
}

pub struct SelectionController {
    registry: Arc<Registry>,
    context: DeploymentContext,
    // Index into `registry`; always in bounds since the registry is non-empty
    // and only `select` writes it after a successful lookup.
    active: usize,
    view: OnceCell<ViewModel>,
    generation: u64,
}

impl SelectionController {
    /// Starts on the first entry in registry order.
    pub fn new(registry: Arc<Registry>, context: DeploymentContext) -> Self {
        Self {
            registry,
            context,
            active: 0,
            view: OnceCell::new(),
            generation: 0,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn context(&self) -> &DeploymentContext {
        &self.context
    }

    pub fn active_entry(&self) -> &SampleEntry {
        &self.registry.all()[self.active]
    }

    pub fn active_id(&self) -> &SampleId {
        &self.active_entry().id
    }

    /// Incremented on every successful change of the active sample.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Unknown ids are rejected and leave the current selection in place.
    pub fn select(&mut self, id: &str) -> Result<SelectOutcome, ShowcaseError> {
        let Some(position) = self.registry.position(id) else {
            warn!(
                sample = id,
                active = %self.active_id(),
                "rejected selection of unknown sample"
            );
            return Err(ShowcaseError::UnknownSample(id.to_string()));
        };

        if position == self.active {
            return Ok(SelectOutcome::Unchanged);
        }

        let previous = self.active_id().clone();
        self.active = position;
        self.view = OnceCell::new();
        self.generation += 1;

        let current = self.active_id().clone();
        debug!(%previous, %current, generation = self.generation, "sample selected");
        Ok(SelectOutcome::Changed { previous, current })
    }

    /// Computed on first read after a transition and reused until the next one.
    pub fn view_model(&self) -> &ViewModel {
        self.view
            .get_or_init(|| derive_view_model(&self.registry, &self.context, self.active_entry()))
    }

    pub fn nav(&self) -> Vec<NavItem> {
        self.registry
            .all()
            .iter()
            .enumerate()
            .map(|(position, entry)| NavItem {
                id: entry.id.clone(),
                title: entry.title.clone(),
                href: self.context.resolve(&sample_page_path(&entry.id)),
                active: position == self.active,
            })
            .collect()
    }
}

pub fn derive_view_model(
    registry: &Registry,
    context: &DeploymentContext,
    entry: &SampleEntry,
) -> ViewModel {
    ViewModel {
        title: entry.title.clone(),
        source_text: entry.source_text.clone(),
        expected_output: entry.expected_output.clone(),
        download_href: context.resolve(&registry.artifact_path(entry)),
        download_label: registry.download_label(entry),
    }
}

/// Page path of a sample relative to the base path. The trailing slash matches
/// the exported `samples/{id}/index.html` layout.
pub fn sample_page_path(id: &SampleId) -> String {
    format!("samples/{id}/")
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
