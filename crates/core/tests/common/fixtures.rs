//! Test fixtures for creating sample projects and configurations.

use serde_json::json;
use serde_json::Value;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch project laid out the way the editor leaves it before launching:
/// an input folder with a few images, a model file, and `data.json`.
///
/// The TempDir must be kept alive for the test duration.
#[allow(dead_code)]
pub struct TestProject {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub model_path: PathBuf,
}

/// Create a project whose `data.json` holds `config`.
#[allow(dead_code)]
pub fn create_test_project_with(config: &Value) -> std::io::Result<TestProject> {
    let dir = tempfile::tempdir()?;
    let root = dir.path();

    let input_dir = root.join("raws");
    std::fs::create_dir_all(input_dir.join("chapter-2"))?;
    std::fs::write(input_dir.join("001.png"), b"png")?;
    std::fs::write(input_dir.join("002.jpg"), b"jpg")?;
    std::fs::write(input_dir.join("chapter-2/003.png"), b"png")?;

    let model_path = root.join("4x-model.pth");
    std::fs::write(&model_path, b"weights")?;

    let config_path = root.join("data.json");
    std::fs::write(&config_path, serde_json::to_vec_pretty(config)?)?;

    Ok(TestProject {
        output_dir: root.join("raws").join("output"),
        dir,
        config_path,
        input_dir,
        model_path,
    })
}

/// Create a project with a typical reader -> level -> upscale -> writer chain.
///
/// Paths in `data.json` are written with a redundant `.` component so that
/// normalization has something to rewrite.
#[allow(dead_code)]
pub fn create_test_project() -> std::io::Result<TestProject> {
    let placeholder = create_test_project_with(&Value::Null)?;
    let root = placeholder.dir.path();

    let config = standard_node_list(
        &root.join(".").join("raws"),
        &root.join("raws").join("output"),
        &root.join(".").join("4x-model.pth"),
    );
    std::fs::write(&placeholder.config_path, serde_json::to_vec_pretty(&config)?)?;

    Ok(placeholder)
}

/// The node list used by [`create_test_project`].
#[allow(dead_code)]
pub fn standard_node_list(input: &Path, output: &Path, model: &Path) -> Value {
    json!([
        {
            "type": "folder_reader",
            "options": { "path": input.to_string_lossy(), "mode": "rgb", "recursive": true }
        },
        {
            "type": "level",
            "options": { "low_input": 0, "high_input": 253, "low_output": 0, "high_output": 255, "gamma": 1 }
        },
        {
            "type": "upscale",
            "options": {
                "model": model.to_string_lossy(),
                "dtype": "F16",
                "tiler": "exact",
                "exact_tiler_size": 800,
                "allow_cpu_upscale": false
            }
        },
        {
            "type": "folder_writer",
            "options": { "path": output.to_string_lossy(), "format": "png" }
        }
    ])
}
