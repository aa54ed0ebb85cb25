#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod fade;
pub mod layout;
pub mod layout_dump;
pub mod mapper;
pub mod markers;
pub mod scene;
pub mod session;
#[cfg(feature = "font-metrics")]
pub mod text_metrics;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{OverlayConfig, load_config};
pub use layout::{Layout, ObjectLayout, compute_layout};
pub use mapper::OverlayMapper;
pub use markers::{Marker, MarkerKind, MarkerRegistry};
pub use scene::{LabelText, MapObject, ObjectKind, Scene, SceneError};
pub use session::{ObjectView, OverlaySession};
