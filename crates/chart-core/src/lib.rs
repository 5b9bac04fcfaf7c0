// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports payload decoding, presentation configs and backend traits.

pub mod axis;
pub mod decode;
pub mod error;
pub mod grid;
pub mod presentation;
pub mod render;
pub mod series;
pub mod types;

pub use axis::AxisPolicy;
pub use decode::{decode, try_decode};
pub use error::{DecodeError, RenderError};
pub use presentation::{Border, PresentationConfig, PresentationKind};
pub use render::{CanvasContext, ChartFactory, ChartHandle};
pub use series::SeriesData;
pub use types::Rgba;
