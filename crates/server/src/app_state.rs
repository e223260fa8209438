use std::{path::PathBuf, sync::Arc};

use assets::DeploymentContext;
use catalog::Registry;
use selection::SelectionController;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) registry: Arc<Registry>,
    pub(crate) context: DeploymentContext,
    pub(crate) public_dir: PathBuf,
}

impl AppState {
    /// Each request gets its own selection, starting on the first sample.
    pub(crate) fn controller(&self) -> SelectionController {
        SelectionController::new(self.registry.clone(), self.context.clone())
    }
}
