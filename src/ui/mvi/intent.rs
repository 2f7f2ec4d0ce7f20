/// Marker for anything a reducer can consume: key presses, new results,
/// copy confirmations.
pub trait Intent: Send + 'static {}
