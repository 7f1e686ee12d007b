use flowfield::PolygonError;
use thiserror::Error;

/// Failures at the JavaScript boundary.
///
/// wasm-bindgen turns any of these into a thrown `Error` via `JsError`.
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("flow simulator {0} not found")]
    SimulatorNotFound(u32),
    #[error("invalid airfoil polygon: {0}")]
    Polygon(#[from] PolygonError),
    #[error("could not convert value: {0}")]
    Serialization(String),
}
