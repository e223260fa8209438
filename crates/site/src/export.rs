//! Static export: one HTML file per sample plus the public asset directory,
//! laid out so the output can be served as-is from the deployment base path.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use assets::DeploymentContext;
use catalog::Registry;
use selection::{sample_page_path, SelectionController};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::render::render_page;

#[derive(Debug, Default)]
pub struct ExportReport {
    pub pages: Vec<PathBuf>,
    pub copied_assets: usize,
}

pub fn export_site(
    registry: Arc<Registry>,
    context: DeploymentContext,
    public_dir: &Path,
    out_dir: &Path,
) -> anyhow::Result<ExportReport> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory '{}'", out_dir.display()))?;
    if public_dir.is_dir() {
        ensure_disjoint(public_dir, out_dir)?;
    }

    let mut report = ExportReport::default();
    let mut controller = SelectionController::new(registry.clone(), context);

    write_page(&out_dir.join("index.html"), &render_page(&controller, None))?;
    report.pages.push(out_dir.join("index.html"));

    for entry in registry.all() {
        controller.select(entry.id.as_str())?;
        let page_path = out_dir
            .join(sample_page_path(&entry.id))
            .join("index.html");
        write_page(&page_path, &render_page(&controller, None))?;
        report.pages.push(page_path);
    }

    if public_dir.is_dir() {
        report.copied_assets = copy_dir(public_dir, out_dir)?;
    } else {
        warn!(
            public_dir = %public_dir.display(),
            "public directory not found; download links will not resolve"
        );
    }

    info!(
        out_dir = %out_dir.display(),
        base_path = controller.context().base_path(),
        pages = report.pages.len(),
        assets = report.copied_assets,
        "static site exported"
    );
    Ok(report)
}

/// Copying a directory into itself truncates every file, and an output
/// directory nested in the public one would be walked while it is written.
fn ensure_disjoint(public_dir: &Path, out_dir: &Path) -> anyhow::Result<()> {
    let public = public_dir
        .canonicalize()
        .with_context(|| format!("failed to resolve '{}'", public_dir.display()))?;
    let out = out_dir
        .canonicalize()
        .with_context(|| format!("failed to resolve '{}'", out_dir.display()))?;

    if out.starts_with(&public) || public.starts_with(&out) {
        anyhow::bail!(
            "output directory '{}' overlaps public directory '{}'",
            out_dir.display(),
            public_dir.display()
        );
    }
    Ok(())
}

fn write_page(path: &Path, html: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("failed to create output directory '{}'", parent.display())
        })?;
    }
    fs::write(path, html).with_context(|| format!("failed to write '{}'", path.display()))
}

fn copy_dir(from: &Path, to: &Path) -> anyhow::Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(from).follow_links(true) {
        let entry = entry.with_context(|| format!("failed to walk '{}'", from.display()))?;
        let relative = entry.path().strip_prefix(from)?;
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("failed to create '{}'", target.display()))?;
            continue;
        }

        fs::copy(entry.path(), &target).with_context(|| {
            format!(
                "failed to copy '{}' to '{}'",
                entry.path().display(),
                target.display()
            )
        })?;
        copied += 1;
    }
    Ok(copied)
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
