pub mod cache;
pub mod connectors;
pub mod fabricate;
pub mod prepare;

pub use cache::{load_or_prepare, load_prepared, save_prepared, sidecar_path};
pub use connectors::{TextConnector, TriangleValidator};
pub use fabricate::fabricate;
