/// Marker for renderable UI state. Cloneable and comparable so a redraw can
/// be skipped when nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
