use crate::util::{FiniteF32, FiniteF32Error};

/// A straight-alpha RGBA color, as handed to the renderer for stroke and cursor materials.
/// All transparent values (alpha == 0) are normalized to transparent black.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, bytemuck::Zeroable, Debug, Hash)]
#[allow(clippy::module_name_repetitions)]
pub struct Color([FiniteF32; 4]);
impl Color {
    pub const TRANSPARENT: Self = Self([FiniteF32::ZERO; 4]);
    pub const WHITE: Self = Self([FiniteF32::ONE; 4]);
    pub const BLACK: Self = Self([
        FiniteF32::ZERO,
        FiniteF32::ZERO,
        FiniteF32::ZERO,
        FiniteF32::ONE,
    ]);
    /// Opaque magenta, the default pen color.
    pub const MAGENTA: Self = Self([
        FiniteF32::ONE,
        FiniteF32::ZERO,
        FiniteF32::ONE,
        FiniteF32::ONE,
    ]);
    /// Create a new color from channels. Fails if any channel is NaN or infinite.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Result<Self, FiniteF32Error> {
        let raw = Self([
            FiniteF32::new(r)?,
            FiniteF32::new(g)?,
            FiniteF32::new(b)?,
            FiniteF32::new(a)?,
        ]);
        if raw.0[3].get() == 0.0 {
            Ok(Self::TRANSPARENT)
        } else {
            Ok(raw)
        }
    }
    pub fn from_array([r, g, b, a]: [f32; 4]) -> Result<Self, FiniteF32Error> {
        Self::new(r, g, b, a)
    }
    /// Like [`Color::from_array`], but clamps every channel to `[0, 1]` instead of failing.
    /// NaN channels become zero.
    #[must_use]
    pub fn from_array_clamped(rgba: [f32; 4]) -> Self {
        let [r, g, b, a] = rgba.map(|channel| FiniteF32::saturating(channel, 0.0, 1.0));
        if a.get() == 0.0 {
            Self::TRANSPARENT
        } else {
            Self([r, g, b, a])
        }
    }
    #[must_use]
    pub fn as_array(&self) -> [f32; 4] {
        self.0.map(FiniteF32::get)
    }
}
impl Default for Color {
    fn default() -> Self {
        Self::MAGENTA
    }
}
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = self.as_array();
        write!(f, "rgba({r:.3}, {g:.3}, {b:.3}, {a:.3})")
    }
}
// Safety: FiniteF32 is NoUninit, arrays have no uninit bytes of their own.
unsafe impl bytemuck::NoUninit for Color {}

#[cfg(test)]
mod test {
    use super::Color;
    #[test]
    fn transparent_normalized() {
        let color = Color::new(0.3, 0.2, 0.9, 0.0).unwrap();
        assert_eq!(color, Color::TRANSPARENT);
        assert_eq!(Color::from_array_clamped([0.5, 0.5, 0.5, 0.0]), Color::TRANSPARENT);
    }
    #[test]
    fn clamped() {
        let color = Color::from_array_clamped([2.0, -1.0, f32::NAN, 0.5]);
        assert_eq!(color.as_array(), [1.0, 0.0, 0.0, 0.5]);
    }
    #[test]
    fn non_finite_rejected() {
        assert!(Color::new(f32::NAN, 0.0, 0.0, 1.0).is_err());
        assert!(Color::from_array([0.0, 0.0, f32::INFINITY, 1.0]).is_err());
    }
}
