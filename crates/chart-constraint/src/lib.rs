// File: crates/chart-constraint/src/lib.rs
// Summary: Core library entry point; exports the geometry, limit-checking and drag-correction API.

pub mod types;
pub mod error;
pub mod geometry;
pub mod intersect;
pub mod projection;
pub mod axis;
pub mod series;
pub mod chart;
pub mod scale;
pub mod limits;
pub mod correction;

pub use types::{Point, PointLimits, Insets};
pub use error::ConstraintError;
pub use geometry::{LineSegment, LinearFunc, LinearSegment};
pub use intersect::{intersect, Intersection, IntersectionKind};
pub use projection::{movement_range, signed_distance, Endpoint, MovementRange, ProjectionAxis};
pub use axis::{Axis, ScaleKind};
pub use series::Series;
pub use chart::Chart;
pub use scale::{AxisScale, PlotScales};
pub use limits::{AxisExtremes, ChartSource, LimitCheckOptions, LimitCheckResult, LimitChecker, LimitSeries};
pub use correction::{CoordinateMapper, Correction, CorrectionOptions, CorrectionStep, DragFeedback, NoFeedback};
