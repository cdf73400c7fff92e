//! User preferences: the starting pen settings, saved as TOML in the user's preference directory.

use spatialpaint_core::{
    color::Color,
    params::{DrawMode, DrawParams},
    session::EmptyUndo,
};

const DOCUMENTATION: &str = r#"# Spatialpaint preferences. You may edit this file, but be aware that formatting and comments will not
# be preserved.
#
# mode            - "point" (alias "pen") or "line"
# color           - [red, green, blue, alpha], each 0.0 to 1.0
# radius          - half-size of placed boxes, 0.0 to 0.05
# anchor_distance - how far in front of the camera the pen tip floats, 0.0 to 1.0
# empty_undo      - what undo does with no gestures left: "clear_all" or "ignore"

"#;

#[must_use]
pub fn preferences_dir() -> Option<std::path::PathBuf> {
    let mut base_dir = dirs::preference_dir()?;
    base_dir.push(env!("CARGO_PKG_NAME"));
    Some(base_dir)
}

/// Stored as its human-readable name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Named<T>(pub T);
impl<T: std::fmt::Display> serde::Serialize for Named<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}
impl<'de, T> serde::Deserialize<'de> for Named<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Borrowed or owned, depending on what the deserializer can give us.
        let str =
            <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        str.parse().map(Named).map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub mode: Named<DrawMode>,
    pub color: [f32; 4],
    pub radius: f32,
    pub anchor_distance: f32,
    pub empty_undo: Named<EmptyUndo>,
}
impl Default for Preferences {
    fn default() -> Self {
        let params = DrawParams::default();
        Self {
            mode: Named(params.mode),
            color: params.color.as_array(),
            radius: params.radius,
            anchor_distance: params.anchor_distance,
            empty_undo: Named(EmptyUndo::default()),
        }
    }
}
impl Preferences {
    const FILENAME: &'static str = "preferences.toml";

    /// Starting parameters, pen up. Out of range values are left for [`spatialpaint_core::params::SharedParams`] to clamp.
    #[must_use]
    pub fn to_params(&self) -> DrawParams {
        DrawParams {
            drawing_active: false,
            mode: self.mode.0,
            color: Color::from_array_clamped(self.color),
            radius: self.radius,
            anchor_distance: self.anchor_distance,
        }
    }
    pub fn parse(string: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(string)?)
    }
    /// Load from the preferences directory, defaulting if unavailable or malformed.
    #[must_use]
    pub fn load_or_default() -> Self {
        let Some(mut path) = preferences_dir() else {
            log::warn!("No preferences dir found, defaulting.");
            return Self::default();
        };
        path.push(Self::FILENAME);
        let loaded: anyhow::Result<Self> = try_block::try_block! {
            let string = std::fs::read_to_string(&path)?;
            let preferences = Self::parse(&string)?;
            Ok(preferences)
        };
        match loaded {
            Ok(preferences) => preferences,
            Err(e) => {
                log::info!("Preferences at {path:?} not loaded ({e}), defaulting.");
                Self::default()
            }
        }
    }
    pub fn to_documented_string(&self) -> anyhow::Result<String> {
        let string = toml::ser::to_string_pretty(self)?;
        Ok(DOCUMENTATION.to_owned() + &string)
    }
    pub fn save(&self) -> anyhow::Result<()> {
        let mut preferences =
            preferences_dir().ok_or_else(|| anyhow::anyhow!("No preferences dir found"))?;
        // Not recursive - if the parent is missing, the user probably has a good reason.
        // Errors here (most likely "already exists") surface on the write below anyway.
        let _ = std::fs::DirBuilder::new().create(&preferences);

        preferences.push(Self::FILENAME);
        std::fs::write(preferences, self.to_documented_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn round_trip_with_docs() {
        let preferences = Preferences {
            mode: Named(DrawMode::Line),
            color: [0.0, 0.5, 1.0, 1.0],
            radius: 0.02,
            anchor_distance: 0.7,
            empty_undo: Named(EmptyUndo::Ignore),
        };
        let string = preferences.to_documented_string().unwrap();
        assert!(string.starts_with("# Spatialpaint preferences."));
        assert!(string.contains("mode = \"line\""));
        assert!(string.contains("empty_undo = \"ignore\""));
        assert_eq!(Preferences::parse(&string).unwrap(), preferences);
    }
    #[test]
    fn missing_fields_default() {
        let preferences = Preferences::parse("mode = \"pen\"\nradius = 0.03\n").unwrap();
        assert_eq!(preferences.mode, Named(DrawMode::Point));
        assert_eq!(preferences.radius, 0.03);
        assert_eq!(preferences.anchor_distance, Preferences::default().anchor_distance);
        assert_eq!(preferences.empty_undo, Named(EmptyUndo::ClearAll));
    }
    #[test]
    fn bad_names_rejected() {
        assert!(Preferences::parse("mode = \"spray\"").is_err());
        assert!(Preferences::parse("empty_undo = \"sometimes\"").is_err());
    }
    #[test]
    fn to_params() {
        let preferences = Preferences {
            color: [2.0, 0.0, 0.0, 1.0],
            ..Preferences::default()
        };
        let params = preferences.to_params();
        assert!(!params.drawing_active);
        assert_eq!(params.color.as_array(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(params, DrawParams { color: params.color, ..DrawParams::default() });
    }
}
