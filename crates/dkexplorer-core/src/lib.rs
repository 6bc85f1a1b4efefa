//! Dunning-Kruger Explorer Core Library
//!
//! Platform-agnostic model for the explorer: the confidence curve, the
//! mapping from pointer positions to competence, and the stage lookup.

pub mod chart;
pub mod curve;
pub mod geometry;
pub mod interaction;
pub mod stage;

pub use chart::{ChartState, ChartView};
pub use curve::{confidence, curve_points, curve_path, area_path, SAMPLE_COUNT};
pub use geometry::{ChartGeometry, CHART_HEIGHT, CHART_WIDTH, X_SCALE, Y_SCALE};
pub use interaction::{map_pointer_to_competence, DragState, Interaction, PointerEvent};
pub use stage::{Stage, StageIcon, StageInfo, Tone};
