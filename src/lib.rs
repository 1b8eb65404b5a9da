pub mod config;
pub mod detection;
pub mod models;
pub mod overlay;
pub mod pipeline;
pub mod proximity;

pub use config::MonitorConfig;
pub use detection::color::HsvRange;
pub use detection::{HandTracker, build_tracker_pipeline};
pub use models::{BoundingBox, HandDetection, Point, Rect};
pub use overlay::annotate;
pub use pipeline::{
    DebugConfig, FrameData, MetadataValue, Pipeline, PipelineContext, PipelineStep,
};
pub use proximity::{ProximityState, Thresholds, classify_state, distance_to_rect};
