use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::QcError;

/// Canvas aspect ratio. Unrecognized labels deserialize to 16:9 so that an
/// imported template never carries an undefined geometry.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AspectRatio {
    #[default]
    SixteenNine,
    NineSixteen,
    Square,
    FourThree,
    ThreeFour,
    FourFive,
}

impl AspectRatio {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "16:9" => Some(AspectRatio::SixteenNine),
            "9:16" => Some(AspectRatio::NineSixteen),
            "1:1" => Some(AspectRatio::Square),
            "4:3" => Some(AspectRatio::FourThree),
            "3:4" => Some(AspectRatio::ThreeFour),
            "4:5" => Some(AspectRatio::FourFive),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::SixteenNine => "16:9",
            AspectRatio::NineSixteen => "9:16",
            AspectRatio::Square => "1:1",
            AspectRatio::FourThree => "4:3",
            AspectRatio::ThreeFour => "3:4",
            AspectRatio::FourFive => "4:5",
        }
    }

    /// Width and height factors of the ratio.
    fn factors(&self) -> (f64, f64) {
        match self {
            AspectRatio::SixteenNine => (16.0, 9.0),
            AspectRatio::NineSixteen => (9.0, 16.0),
            AspectRatio::Square => (1.0, 1.0),
            AspectRatio::FourThree => (4.0, 3.0),
            AspectRatio::ThreeFour => (3.0, 4.0),
            AspectRatio::FourFive => (4.0, 5.0),
        }
    }

    /// Derived canvas height for a given canvas width.
    pub fn height_for_width(&self, width: u32) -> u32 {
        let (w, h) = self.factors();
        (width as f64 * h / w).round() as u32
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for AspectRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for AspectRatio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Accept any JSON value here; anything that is not a known label
        // falls back to 16:9 deterministically.
        let value = Value::deserialize(deserializer)?;
        Ok(value
            .as_str()
            .and_then(AspectRatio::parse)
            .unwrap_or_default())
    }
}

/// A rectangular region of the frame, in percentages of the canvas size.
///
/// `top + height` and `left + width` may exceed 100: zones are allowed to
/// represent bleed areas that overflow the visible frame.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct SafeZone {
    pub id: String,
    pub name: String,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub visible: bool,
}

impl SafeZone {
    pub fn new(id: &str, name: &str, top: f64, left: f64, width: f64, height: f64, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            top,
            left,
            width,
            height,
            color: color.to_string(),
            visible: true,
        }
    }

    /// Clamp each percentage field into `[0, 100]`. Overflow of
    /// `top + height` / `left + width` is left alone on purpose.
    pub fn clamp_percentages(&mut self) {
        self.top = self.top.clamp(0.0, 100.0);
        self.left = self.left.clamp(0.0, 100.0);
        self.width = self.width.clamp(0.0, 100.0);
        self.height = self.height.clamp(0.0, 100.0);
    }
}

/// Axis a guideline measures. Serialized as `type` on the wire.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum GuidelineAxis {
    Horizontal,
    Vertical,
}

const GUIDELINE_COLOR: &str = "#3b82f6";

/// A single alignment line placed on the editing canvas.
///
/// `position` is a pixel offset on the canvas the guideline was placed on.
/// `label` is the percent string computed from that canvas size at placement
/// time; it is not recomputed if the canvas is later resized.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Guideline {
    pub id: String,
    #[serde(rename = "type")]
    pub axis: GuidelineAxis,
    pub position: f64,
    pub color: String,
    pub label: String,
}

impl Guideline {
    pub fn new(axis: GuidelineAxis, position: f64, label: String) -> Self {
        let prefix = match axis {
            GuidelineAxis::Horizontal => "h",
            GuidelineAxis::Vertical => "v",
        };
        Self {
            id: format!("{}-{}", prefix, Uuid::new_v4()),
            axis,
            position,
            color: GUIDELINE_COLOR.to_string(),
            label,
        }
    }
}

fn default_template_name() -> String {
    "Imported Template".to_string()
}

/// The complete named bundle of aspect ratio, safe zones, guidelines, and
/// free-text platform requirements. This is also the interchange format for
/// template export/import files.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default = "default_template_name")]
    pub name: String,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub safe_zones: Vec<SafeZone>,
    #[serde(default)]
    pub guidelines: Vec<Guideline>,
    #[serde(default)]
    pub platform_requirements: String,
}

impl Template {
    /// A fresh template seeded with the three default zones.
    pub fn new() -> Self {
        Self {
            name: "New Template".to_string(),
            aspect_ratio: AspectRatio::SixteenNine,
            safe_zones: Self::default_safe_zones(),
            guidelines: Vec::new(),
            platform_requirements: String::new(),
        }
    }

    /// The zone set every new template starts with. Zones are never deleted,
    /// only toggled invisible or replaced wholesale on reset/import.
    pub fn default_safe_zones() -> Vec<SafeZone> {
        vec![
            SafeZone::new(
                "subtitle-zone",
                "Subtitle Zone",
                70.0,
                10.0,
                80.0,
                20.0,
                "rgba(255, 193, 7, 0.3)",
            ),
            SafeZone::new(
                "logo-zone",
                "Logo Zone",
                5.0,
                5.0,
                20.0,
                15.0,
                "rgba(33, 150, 243, 0.3)",
            ),
            SafeZone::new(
                "title-zone",
                "Title Zone",
                10.0,
                10.0,
                80.0,
                15.0,
                "rgba(76, 175, 80, 0.3)",
            ),
        ]
    }

    /// Parse a template document, substituting documented defaults for
    /// missing fields. A document that is not well-formed JSON fails with
    /// `QcError::Parse` and must not be applied by the caller.
    pub fn load(json_str: &str) -> Result<Self, QcError> {
        let mut template: Template = serde_json::from_str(json_str)?;
        for zone in &mut template.safe_zones {
            zone.clamp_percentages();
        }
        Ok(template)
    }

    /// Serialize to the interchange format. Output is stable for a given
    /// template, so save/load round-trips compare equal.
    pub fn save(&self) -> Result<String, QcError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn get_zone_mut(&mut self, id: &str) -> Option<&mut SafeZone> {
        self.safe_zones.iter_mut().find(|z| z.id == id)
    }

    pub fn get_guideline(&self, id: &str) -> Option<&Guideline> {
        self.guidelines.iter().find(|g| g.id == id)
    }

    pub fn remove_guideline(&mut self, id: &str) -> Option<Guideline> {
        let index = self.guidelines.iter().position(|g| g.id == id)?;
        Some(self.guidelines.remove(index))
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}
