//! Requests from the (simulated) UI: the draw, undo, and clear buttons, plus the pen settings widgets.

use spatialpaint_core::{color::Color, params::DrawMode};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum UiRequest {
    ToggleDrawing,
    Undo,
    Clear,
    SetMode(DrawMode),
    SetColor(Color),
    SetRadius(f32),
    SetAnchorDistance(f32),
}
impl UiRequest {
    /// Translate a script step, if it is a UI interaction.
    #[must_use]
    pub fn from_step(step: &crate::script::Step) -> Option<Self> {
        use crate::script::Step;
        Some(match step {
            Step::Frames { .. } => return None,
            Step::Toggle => Self::ToggleDrawing,
            Step::Undo => Self::Undo,
            Step::Clear => Self::Clear,
            Step::Mode { mode } => Self::SetMode(mode.0),
            Step::Color { rgba } => Self::SetColor(Color::from_array_clamped(*rgba)),
            Step::Radius { value } => Self::SetRadius(*value),
            Step::AnchorDistance { value } => Self::SetAnchorDistance(*value),
        })
    }
}
