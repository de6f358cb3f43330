//! Option models for each node kind.
//!
//! Field names follow the snake_case keys the editor writes into
//! `data.json`. Unknown keys are ignored so that files written by newer
//! editors still load.

use serde::Deserialize;
use serde::Serialize;
use ts_rs::TS;

/// Color mode used when decoding images from disk.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
pub enum ReaderMode {
    Rgb,
    Gray,
    Dynamic,
}

impl ReaderMode {
    pub const ALL: [ReaderMode; 3] = [Self::Rgb, Self::Gray, Self::Dynamic];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Gray => "gray",
            Self::Dynamic => "dynamic",
        }
    }
}

/// Image encoding used by the folder writer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
pub enum WriterFormat {
    Png,
    Jpeg,
}

/// Color space conversion applied by the `cvt_color` node.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
pub enum CvtType {
    RGB2Gray,
    RGB2Gray709,
    RGB2Gray2020,
    Gray2RGB,
}

/// Tiling strategy for the upscaler.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
pub enum TilerType {
    Exact,
    Max,
    NoTiling,
}

/// Resampling filter for `resize` and halftone supersampling.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    Nearest,
    Box,
    Linear,
    Hermite,
    CubicCatrom,
    CubicMitchell,
    CubicBspline,
    Lanczos,
    Lagrange,
    Gauss,
}

impl ResizeFilter {
    pub const ALL: [ResizeFilter; 10] = [
        Self::Nearest,
        Self::Box,
        Self::Linear,
        Self::Hermite,
        Self::CubicCatrom,
        Self::CubicMitchell,
        Self::CubicBspline,
        Self::Lanczos,
        Self::Lagrange,
        Self::Gauss,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Box => "box",
            Self::Linear => "linear",
            Self::Hermite => "hermite",
            Self::CubicCatrom => "cubic_catrom",
            Self::CubicMitchell => "cubic_mitchell",
            Self::CubicBspline => "cubic_bspline",
            Self::Lanczos => "lanczos",
            Self::Lagrange => "lagrange",
            Self::Gauss => "gauss",
        }
    }
}

/// Edge detection polarity for the `sharp` node.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
pub enum CannyType {
    Normal,
    Invert,
}

/// Dot shape used by the halftone node.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
pub enum DotType {
    Circle,
    Line,
    Cross,
    Ellipse,
    Invline,
}

/// Floating point precision for model inference.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
pub enum DType {
    F32,
    F16,
    #[serde(rename = "BF16")]
    Bf16,
}

impl DType {
    pub const ALL: [DType; 3] = [Self::F32, Self::F16, Self::Bf16];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::F32 => "F32",
            Self::F16 => "F16",
            Self::Bf16 => "BF16",
        }
    }
}

/// A parameter given either once for all channels or once per channel.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// View the parameter as a slice regardless of which form was written.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct FolderReaderOptions {
    /// Directory the images are read from.
    pub path: String,
    pub mode: ReaderMode,
    #[serde(default)]
    pub recursive: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct FolderWriterOptions {
    /// Directory the processed images are written to. Created on demand.
    pub path: String,
    pub format: WriterFormat,
}

/// Input/output level remapping with gamma.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct LevelOptions {
    pub low_input: u8,
    pub high_input: u8,
    pub low_output: u8,
    pub high_output: u8,
    pub gamma: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct SharpOptions {
    pub low_input: u8,
    pub high_input: u8,
    pub gamma: f64,
    pub diapason_white: i32,
    pub diapason_black: i32,
    #[serde(default)]
    pub canny: bool,
    pub canny_type: CannyType,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct CvtColorOptions {
    pub cvt_type: CvtType,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct UpscaleOptions {
    /// Model file path, or a bare model name resolved by a preceding `download` node.
    pub model: String,
    pub dtype: DType,
    pub tiler: TilerType,
    pub exact_tiler_size: u32,
    #[serde(default)]
    pub allow_cpu_upscale: bool,
}

/// Resize options.
///
/// Exactly which of `width`, `height` and `percent` is set decides the
/// resize mode: width only, height only, both (absolute) or percent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct ResizeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub percent: Option<f64>,
    pub filter: ResizeFilter,
    #[serde(default)]
    pub gamma_correction: bool,
    #[serde(default)]
    pub spread: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub spread_size: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct HalftoneOptions {
    pub dot_size: OneOrMany<u32>,
    pub angle: OneOrMany<f64>,
    pub dot_type: OneOrMany<DotType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub halftone_mode: Option<ReaderMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub ssaa_scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub ssaa_filter: Option<ResizeFilter>,
}

/// Fetches a named model before the `upscale` node that follows it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct DownloadOptions {
    pub name: String,
}

/// Extracts archives in `path` before the `folder_reader` that follows it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct UnarchiveOptions {
    pub path: String,
}
