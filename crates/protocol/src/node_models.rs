//! Node models for the linear pipeline in `data.json`.
//!
//! The editor writes the pipeline as a JSON array of nodes, each one an
//! object with a `type` discriminant and an `options` payload:
//!
//! ```json
//! [
//!   { "type": "folder_reader", "options": { "path": "C:/raws", "mode": "rgb", "recursive": true } },
//!   { "type": "level", "options": { "low_input": 0, "high_input": 253, "low_output": 0, "high_output": 255, "gamma": 1 } },
//!   { "type": "folder_writer", "options": { "path": "C:/raws/output", "format": "png" } }
//! ]
//! ```

use crate::option_models::CvtColorOptions;
use crate::option_models::DownloadOptions;
use crate::option_models::FolderReaderOptions;
use crate::option_models::FolderWriterOptions;
use crate::option_models::HalftoneOptions;
use crate::option_models::LevelOptions;
use crate::option_models::ResizeOptions;
use crate::option_models::SharpOptions;
use crate::option_models::UnarchiveOptions;
use crate::option_models::UpscaleOptions;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use ts_rs::TS;

/// A single step of a linear pipeline.
///
/// Serialized adjacently tagged so that the JSON matches the
/// `{ "type": ..., "options": ... }` shape written by the editor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
#[serde(tag = "type", content = "options", rename_all = "snake_case")]
pub enum PipelineNode {
    FolderReader(FolderReaderOptions),
    FolderWriter(FolderWriterOptions),
    Level(LevelOptions),
    Sharp(SharpOptions),
    CvtColor(CvtColorOptions),
    Upscale(UpscaleOptions),
    Resize(ResizeOptions),
    Halftone(HalftoneOptions),
    Download(DownloadOptions),
    Unarchive(UnarchiveOptions),
}

impl PipelineNode {
    /// The discriminant of this node, without its options.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::FolderReader(_) => NodeKind::FolderReader,
            Self::FolderWriter(_) => NodeKind::FolderWriter,
            Self::Level(_) => NodeKind::Level,
            Self::Sharp(_) => NodeKind::Sharp,
            Self::CvtColor(_) => NodeKind::CvtColor,
            Self::Upscale(_) => NodeKind::Upscale,
            Self::Resize(_) => NodeKind::Resize,
            Self::Halftone(_) => NodeKind::Halftone,
            Self::Download(_) => NodeKind::Download,
            Self::Unarchive(_) => NodeKind::Unarchive,
        }
    }
}

/// Fieldless mirror of [`PipelineNode`] used for logging and error reporting.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    FolderReader,
    FolderWriter,
    Level,
    Sharp,
    CvtColor,
    Upscale,
    Resize,
    Halftone,
    Download,
    Unarchive,
}

impl NodeKind {
    /// The `type` string used in `data.json`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FolderReader => "folder_reader",
            Self::FolderWriter => "folder_writer",
            Self::Level => "level",
            Self::Sharp => "sharp",
            Self::CvtColor => "cvt_color",
            Self::Upscale => "upscale",
            Self::Resize => "resize",
            Self::Halftone => "halftone",
            Self::Download => "download",
            Self::Unarchive => "unarchive",
        }
    }

    /// The node kind that must immediately follow this one, if any.
    ///
    /// `unarchive` only prepares a folder for the reader after it, and
    /// `download` only fetches a model for the upscaler after it.
    pub fn required_successor(self) -> Option<NodeKind> {
        match self {
            Self::Unarchive => Some(Self::FolderReader),
            Self::Download => Some(Self::Upscale),
            _ => None,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
