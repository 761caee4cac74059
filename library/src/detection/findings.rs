use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        };
        write!(f, "{}", s)
    }
}

/// A single detected quality issue, tied to a frame and its timecode.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Finding {
    pub id: u32,
    pub frame: u64,
    /// `HH:MM:SS:FF`, frame-accurate.
    pub timecode: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    #[serde(default)]
    pub description: Option<String>,
}

/// Per-severity finding counts. A plain partition, no weighting.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Summary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl Summary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Summary::default();
        for finding in findings {
            match finding.severity {
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Format a frame index as a frame-accurate `HH:MM:SS:FF` timecode.
/// Zero fps is clamped to 1 to keep the arithmetic defined.
pub fn timecode(frame: u64, fps: u32) -> String {
    let fps = fps.max(1) as u64;
    let ff = frame % fps;
    let total_seconds = frame / fps;
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;
    format!("{:02}:{:02}:{:02}:{:02}", hours, minutes, seconds, ff)
}

fn finding(
    id: u32,
    frame: u64,
    timecode: &str,
    kind: &str,
    severity: Severity,
    description: &str,
) -> Finding {
    Finding {
        id,
        frame,
        timecode: timecode.to_string(),
        kind: kind.to_string(),
        severity,
        description: Some(description.to_string()),
    }
}

/// The canned findings published when a simulated detection run completes.
pub fn sample_findings() -> Vec<Finding> {
    vec![
        finding(
            1,
            1024,
            "00:00:42:16",
            "Logo outside safe area",
            Severity::High,
            "Company logo extends beyond the action safe area boundary",
        ),
        finding(
            2,
            1536,
            "00:01:04:00",
            "Text too close to edge",
            Severity::Medium,
            "Lower third text is positioned too close to the screen edge",
        ),
        finding(
            3,
            2048,
            "00:01:25:12",
            "Subtitle outside safe area",
            Severity::High,
            "Subtitle text extends beyond the title safe area",
        ),
        finding(
            4,
            2304,
            "00:01:36:00",
            "Low contrast text",
            Severity::Medium,
            "Text contrast ratio is below recommended standards",
        ),
        finding(
            5,
            2560,
            "00:01:46:16",
            "Logo outside safe area",
            Severity::High,
            "Watermark logo positioned outside broadcast safe area",
        ),
        finding(
            6,
            2816,
            "00:01:57:08",
            "Text too close to edge",
            Severity::Low,
            "Minor text positioning issue near screen boundary",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timecode_formatting() {
        assert_eq!(timecode(0, 24), "00:00:00:00");
        assert_eq!(timecode(1024, 24), "00:00:42:16");
        assert_eq!(timecode(1536, 24), "00:01:04:00");
        assert_eq!(timecode(3600 * 24, 24), "01:00:00:00");
    }

    #[test]
    fn test_timecode_zero_fps_defined() {
        // Clamped to 1 fps rather than dividing by zero.
        assert_eq!(timecode(42, 0), "00:00:42:00");
    }
}
