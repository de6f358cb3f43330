//! Node executors for the linear pipeline.
//!
//! The pipeline owns the ordering and error reporting; an executor only
//! decides what running a single node means.

use anyhow::bail;
use anyhow::ensure;
use anyhow::Result;
use rl_protocol::PipelineNode;
use std::path::Path;
use tracing::debug;
use tracing::info;
use walkdir::WalkDir;

/// File extensions the folder reader picks up.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp", "tif", "tiff", "dds"];

/// Runs a single pipeline node.
pub trait NodeExecutor {
    /// Execute `node`, the `index`-th step (0-based) of the pipeline.
    ///
    /// # Errors
    ///
    /// Any error aborts the pipeline; later nodes are not executed.
    fn execute(&mut self, index: usize, node: &PipelineNode) -> Result<()>;
}

/// Executor that checks each node against the filesystem without
/// processing any images.
///
/// Inputs that must already exist (reader folders, archive folders and
/// absolute model paths) are verified; outputs are only reported.
#[derive(Debug, Default)]
pub struct DryRunExecutor {
    images_found: usize,
}

impl DryRunExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of input images found by all folder readers so far.
    pub fn images_found(&self) -> usize {
        self.images_found
    }
}

impl NodeExecutor for DryRunExecutor {
    fn execute(&mut self, index: usize, node: &PipelineNode) -> Result<()> {
        match node {
            PipelineNode::FolderReader(options) => {
                let dir = Path::new(&options.path);
                ensure!(dir.is_dir(), "input folder {} does not exist", dir.display());

                let images = count_images(dir, options.recursive)?;
                info!(
                    index,
                    path = %dir.display(),
                    mode = options.mode.as_str(),
                    recursive = options.recursive,
                    images,
                    "Would read images"
                );
                self.images_found += images;
            }
            PipelineNode::Unarchive(options) => {
                let dir = Path::new(&options.path);
                ensure!(dir.is_dir(), "archive folder {} does not exist", dir.display());
                info!(index, path = %dir.display(), "Would extract archives");
            }
            PipelineNode::FolderWriter(options) => {
                let dir = Path::new(&options.path);
                if dir.exists() && !dir.is_dir() {
                    bail!("output path {} exists and is not a folder", dir.display());
                }
                info!(index, path = %dir.display(), format = ?options.format, "Would write images");
            }
            PipelineNode::Upscale(options) => {
                let model = Path::new(&options.model);
                if model.is_absolute() {
                    ensure!(model.is_file(), "model file {} does not exist", model.display());
                }
                info!(index, model = %options.model, dtype = options.dtype.as_str(), "Would upscale");
            }
            PipelineNode::Download(options) => {
                info!(index, model = %options.name, "Would download model");
            }
            other => {
                debug!(index, node = %other.kind(), options = ?other, "Would apply filter");
            }
        }
        Ok(())
    }
}

fn count_images(dir: &Path, recursive: bool) -> Result<usize> {
    let walker = WalkDir::new(dir).min_depth(1);
    let walker = if recursive { walker } else { walker.max_depth(1) };

    let mut count = 0;
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_image = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
        if is_image {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rl_protocol::FolderReaderOptions;
    use rl_protocol::FolderWriterOptions;
    use rl_protocol::ReaderMode;
    use rl_protocol::UpscaleOptions;
    use rl_protocol::WriterFormat;
    use rl_protocol::{DType, TilerType};
    use std::fs;
    use tempfile::tempdir;

    fn reader(path: &Path, recursive: bool) -> PipelineNode {
        PipelineNode::FolderReader(FolderReaderOptions {
            path: path.to_string_lossy().into_owned(),
            mode: ReaderMode::Rgb,
            recursive,
        })
    }

    fn upscale(model: &str) -> PipelineNode {
        PipelineNode::Upscale(UpscaleOptions {
            model: model.to_string(),
            dtype: DType::F32,
            tiler: TilerType::Exact,
            exact_tiler_size: 800,
            allow_cpu_upscale: false,
        })
    }

    #[test]
    fn test_dry_run_counts_images() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("001.png"), b"").expect("write");
        fs::write(dir.path().join("002.JPG"), b"").expect("write");
        fs::write(dir.path().join("notes.txt"), b"").expect("write");
        fs::create_dir(dir.path().join("nested")).expect("mkdir");
        fs::write(dir.path().join("nested/003.webp"), b"").expect("write");

        let mut flat = DryRunExecutor::new();
        flat.execute(0, &reader(dir.path(), false)).expect("flat read");
        assert_eq!(flat.images_found(), 2);

        let mut deep = DryRunExecutor::new();
        deep.execute(0, &reader(dir.path(), true)).expect("recursive read");
        assert_eq!(deep.images_found(), 3);
    }

    #[test]
    fn test_dry_run_rejects_missing_input_folder() {
        let dir = tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("raws");

        let err = DryRunExecutor::new()
            .execute(0, &reader(&missing, false))
            .expect_err("missing folder should fail");

        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_dry_run_rejects_file_as_output_folder() {
        let dir = tempdir().expect("Failed to create temp dir");
        let file = dir.path().join("output");
        fs::write(&file, b"").expect("write");

        let node = PipelineNode::FolderWriter(FolderWriterOptions {
            path: file.to_string_lossy().into_owned(),
            format: WriterFormat::Png,
        });

        assert!(DryRunExecutor::new().execute(3, &node).is_err());
    }

    #[test]
    fn test_dry_run_accepts_missing_output_folder() {
        let dir = tempdir().expect("Failed to create temp dir");
        let node = PipelineNode::FolderWriter(FolderWriterOptions {
            path: dir.path().join("not-yet").to_string_lossy().into_owned(),
            format: WriterFormat::Jpeg,
        });

        assert!(DryRunExecutor::new().execute(3, &node).is_ok());
    }

    #[test]
    fn test_dry_run_checks_only_absolute_model_paths() {
        let dir = tempdir().expect("Failed to create temp dir");
        let model = dir.path().join("4x-model.pth");
        fs::write(&model, b"weights").expect("write");
        let missing = dir.path().join("missing.pth");

        let mut executor = DryRunExecutor::new();
        assert!(executor.execute(1, &upscale(&model.to_string_lossy())).is_ok());
        assert!(executor.execute(1, &upscale(&missing.to_string_lossy())).is_err());
        // Bare names are resolved by a preceding download node
        assert!(executor.execute(1, &upscale("4x-model.pth")).is_ok());
    }
}
