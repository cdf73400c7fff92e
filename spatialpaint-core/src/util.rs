//! Small utility types shared by the rest of the crate.

/// An `f32` that is never NaN nor infinite.
#[derive(Copy, Clone, PartialEq, PartialOrd, bytemuck::NoUninit, bytemuck::Zeroable, Debug)]
#[repr(transparent)]
pub struct FiniteF32(f32);
impl FiniteF32 {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);
    pub fn new(val: f32) -> Result<Self, FiniteF32Error> {
        if val.is_finite() {
            Ok(Self(val))
        } else {
            Err(FiniteF32Error::NotFinite)
        }
    }
    /// Clamp `val` into `[min, max]`. NaN becomes `min`, infinities saturate.
    #[must_use]
    pub fn saturating(val: f32, min: f32, max: f32) -> Self {
        if val.is_nan() {
            Self(min)
        } else {
            Self(val.clamp(min, max))
        }
    }
    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }
}
impl Default for FiniteF32 {
    fn default() -> Self {
        Self::ZERO
    }
}
impl TryFrom<f32> for FiniteF32 {
    type Error = FiniteF32Error;
    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
impl From<FiniteF32> for f32 {
    fn from(value: FiniteF32) -> Self {
        value.get()
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FiniteF32Error {
    #[error("not finite")]
    NotFinite,
}

// Never NaN, so equality is reflexive.
impl Eq for FiniteF32 {}
impl std::hash::Hash for FiniteF32 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u32(self.0.to_bits());
    }
}

#[cfg(test)]
mod test {
    use super::{FiniteF32, FiniteF32Error};
    #[test]
    fn rejects_non_finite() {
        assert_eq!(FiniteF32::new(f32::NAN), Err(FiniteF32Error::NotFinite));
        assert_eq!(FiniteF32::new(f32::INFINITY), Err(FiniteF32Error::NotFinite));
        assert_eq!(FiniteF32::new(0.25).map(FiniteF32::get), Ok(0.25));
    }
    #[test]
    fn saturating() {
        assert_eq!(FiniteF32::saturating(f32::NAN, 0.0, 1.0).get(), 0.0);
        assert_eq!(FiniteF32::saturating(f32::INFINITY, 0.0, 1.0).get(), 1.0);
        assert_eq!(FiniteF32::saturating(-3.0, 0.0, 0.05).get(), 0.0);
        assert_eq!(FiniteF32::saturating(0.02, 0.0, 0.05).get(), 0.02);
    }
}
