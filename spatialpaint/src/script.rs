//! # Scripts
//!
//! A script stands in for a person holding the device: it says how the camera moves and what they tap and when.
//!
//! ```toml
//! [camera]
//! radius = 0.0
//! degrees_per_frame = 4.0
//!
//! [[step]]
//! do = "toggle"
//! [[step]]
//! do = "frames"
//! count = 30
//! ```

use crate::preferences::Named;
use spatialpaint_core::params::DrawMode;

/// The built-in script, used when no script is given on the command line.
pub const DEMO: &str = r#"
# Spin in place drawing a ring of boxes, then a line, then undo the line.
[camera]
radius = 0.0
height = 0.0
degrees_per_frame = 4.0

[[step]]
do = "toggle"
[[step]]
do = "frames"
count = 45
[[step]]
do = "toggle"
[[step]]
do = "frames"
count = 1
[[step]]
do = "mode"
mode = "line"
[[step]]
do = "color"
rgba = [0.0, 0.8, 1.0, 1.0]
[[step]]
do = "radius"
value = 0.005
[[step]]
do = "toggle"
[[step]]
do = "frames"
count = 20
[[step]]
do = "toggle"
[[step]]
do = "frames"
count = 1
[[step]]
do = "undo"
[[step]]
do = "frames"
count = 1
"#;

/// Camera circling the origin at a fixed height, always facing the vertical axis.
/// With a zero radius it turns in place.
#[derive(Copy, Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct OrbitCamera {
    pub radius: f32,
    pub height: f32,
    pub start_degrees: f32,
    pub degrees_per_frame: f32,
}
impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            radius: 0.0,
            height: 0.0,
            start_degrees: 0.0,
            degrees_per_frame: 2.0,
        }
    }
}
impl OrbitCamera {
    /// Camera pose at the given frame.
    #[must_use]
    pub fn pose(&self, frame: u64) -> spatialpaint_core::math::Pose {
        use cgmath::{Deg, Matrix4, Vector3};
        // Lossy for absurdly long scripts, fine for a demo path.
        #[allow(clippy::cast_precision_loss)]
        let degrees = self.start_degrees + self.degrees_per_frame * frame as f32;
        let (sin, cos) = degrees.to_radians().sin_cos();
        let eye = Vector3::new(self.radius * sin, self.height, self.radius * cos);
        // Yaw turns -Z (camera forward) toward the axis.
        Matrix4::from_translation(eye) * Matrix4::from_angle_y(Deg(degrees))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(tag = "do", rename_all = "snake_case")]
pub enum Step {
    /// Emit this many tracking frames.
    Frames { count: u32 },
    /// Tap the draw button.
    Toggle,
    Undo,
    Clear,
    Mode { mode: Named<DrawMode> },
    Color { rgba: [f32; 4] },
    Radius { value: f32 },
    AnchorDistance { value: f32 },
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Script {
    #[serde(default)]
    pub camera: OrbitCamera,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}
impl Script {
    pub fn parse(string: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(string)?)
    }
    pub fn demo() -> Self {
        // The demo is a constant, checked by the tests.
        Self::parse(DEMO).unwrap_or_else(|e| {
            log::error!("Built-in demo script is broken: {e}");
            Self {
                camera: OrbitCamera::default(),
                steps: Vec::new(),
            }
        })
    }
    pub fn read_path(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;
        let string = std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?;
        Self::parse(&string).with_context(|| format!("parsing script {}", path.display()))
    }
    /// Total tracking frames the script emits.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Frames { count } => u64::from(*count),
                _ => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use cgmath::prelude::*;
    #[test]
    fn demo_parses() {
        let demo = Script::parse(DEMO).unwrap();
        assert_eq!(demo.steps.first(), Some(&Step::Toggle));
        assert_eq!(demo.steps.last(), Some(&Step::Frames { count: 1 }));
        assert!(demo.steps.contains(&Step::Mode {
            mode: Named(DrawMode::Line)
        }));
        assert_eq!(demo.frame_count(), 45 + 1 + 20 + 1 + 1);
        assert_eq!(Script::demo(), demo);
    }
    #[test]
    fn all_steps() {
        let script = Script::parse(
            r#"
            [[step]]
            do = "frames"
            count = 3
            [[step]]
            do = "clear"
            [[step]]
            do = "anchor_distance"
            value = 0.25
            [[step]]
            do = "mode"
            mode = "pen"
            "#,
        )
        .unwrap();
        assert_eq!(script.camera, OrbitCamera::default());
        assert_eq!(
            script.steps,
            [
                Step::Frames { count: 3 },
                Step::Clear,
                Step::AnchorDistance { value: 0.25 },
                Step::Mode {
                    mode: Named(DrawMode::Point)
                },
            ]
        );
    }
    #[test]
    fn unknown_step() {
        assert!(Script::parse("[[step]]\ndo = \"jump\"").is_err());
    }
    #[test]
    fn orbit_faces_axis() {
        let camera = OrbitCamera {
            radius: 2.0,
            height: 1.0,
            start_degrees: 90.0,
            degrees_per_frame: 0.0,
        };
        let pose = camera.pose(7);
        let eye = pose.w.truncate();
        assert!((eye - cgmath::vec3(2.0, 1.0, 0.0)).magnitude() < 1e-5);
        // Forward points back at the axis.
        let forward = (pose * cgmath::vec4(0.0, 0.0, -1.0, 0.0)).truncate();
        assert!((forward - cgmath::vec3(-1.0, 0.0, 0.0)).magnitude() < 1e-5);
    }
}
