//! Project scaffolding command.
//!
//! Drives the four pipeline stages in order: locate the template repository,
//! create the output directory, download and extract the template archive,
//! and rewrite the project manifest. The existence check is advisory; a
//! failure in any later stage aborts the pipeline and the partial directory
//! is left in place for inspection.

use crate::error::Result;
use crate::scaffold::{
    configure, create_project_dir, detect_package_manager, ArchiveFetcher, ManifestPatch,
    PackageManager, ProjectRequest, RepositoryLocator, TemplateSource,
};
use crate::ui::UserInterface;

use super::CommandResult;

/// Scaffold a new project from the template repository.
pub struct CreateCommand {
    request: ProjectRequest,
    source: TemplateSource,
}

impl CreateCommand {
    /// Create a new command instance.
    pub fn new(request: ProjectRequest, source: TemplateSource) -> Self {
        Self { request, source }
    }

    /// Execute the scaffolding pipeline.
    pub fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header(&format!("Creating \"{}\"", self.request.name));

        // Stage 1: advisory existence check. A failure here is reported but
        // does not block project creation.
        let mut spinner = ui.start_spinner("Searching for repository...");
        match RepositoryLocator::new().locate(&self.source) {
            Ok(meta) => {
                tracing::debug!("Template repository metadata: {:?}", meta);
                spinner.finish_success(&format!("Found {}", meta.full_name));
            }
            Err(e) => {
                spinner.finish_error("Failed to find repository");
                tracing::warn!("Repository lookup failed: {}", e);
                ui.warning(&format!("{} (continuing anyway)", e));
            }
        }

        // Stage 2: create-only directory initialization.
        let mut spinner = ui.start_spinner("Creating directory");
        match create_project_dir(&self.request.output_path) {
            Ok(()) => {
                spinner.finish_success(&format!(
                    "Created {}",
                    self.request.output_path.display()
                ));
            }
            Err(e) => {
                spinner.finish_error("Directory could not be created");
                return Err(e);
            }
        }

        // Stage 3: stream the tarball into the new directory.
        let url = self.source.tarball_url();
        let mut spinner = ui.start_spinner("Downloading template...");
        match ArchiveFetcher::new().fetch_and_extract(&url, &self.request.output_path) {
            Ok(()) => spinner.finish_success("Template downloaded"),
            Err(e) => {
                spinner.finish_error("Failed to clone template");
                return Err(e);
            }
        }

        // Stage 4: rewrite the manifest with the project name.
        let patch = ManifestPatch::for_project(&self.request.name);
        let mut spinner = ui.start_spinner("Configuring project...");
        match configure(&patch, &self.request.output_path) {
            Ok(()) => spinner.finish_success("Project configured"),
            Err(e) => {
                spinner.finish_error("Failed to configure project");
                return Err(e);
            }
        }

        self.report_next_steps(ui);

        Ok(CommandResult::success())
    }

    /// Tell the user how to install and start the scaffolded project.
    fn report_next_steps(&self, ui: &mut dyn UserInterface) {
        match detect_package_manager(&self.request.output_path) {
            Some(detected) => {
                if let Some(version) = &detected.version {
                    tracing::debug!("Detected {} {}", detected.manager.command(), version);
                }
                ui.message(&format!(
                    "Run `{}` inside of \"{}\" to start the app",
                    detected.manager.bootstrap_command(),
                    self.request.name
                ));
            }
            None => {
                ui.warning("No available package manager!");
                for manager in [PackageManager::Yarn, PackageManager::Npm] {
                    ui.message(&format!(
                        "  Install {}: {}",
                        manager.command(),
                        manager.install_url()
                    ));
                }
            }
        }
    }
}
