//! Command line entry points.

use std::path::Path;

use chrono::Utc;

use crate::detection::{sample_findings, Summary};
use crate::error::QcError;
use crate::model::Template;
use crate::report::{render_report, ReportData, VideoInfo};

const USAGE: &str = "Usage:
  autoqc inspect <template.json>
  autoqc report <video-name> <output.pdf>";

pub fn run(args: Vec<String>) -> Result<(), QcError> {
    env_logger::init();

    match args.get(1).map(String::as_str) {
        Some("inspect") => {
            let path = args
                .get(2)
                .ok_or_else(|| QcError::Validation(USAGE.to_string()))?;
            inspect(path)
        }
        Some("report") => {
            let (video, output) = match (args.get(2), args.get(3)) {
                (Some(video), Some(output)) => (video, output),
                _ => return Err(QcError::Validation(USAGE.to_string())),
            };
            report(video, output)
        }
        _ => Err(QcError::Validation(USAGE.to_string())),
    }
}

fn inspect(path: &str) -> Result<(), QcError> {
    let json = std::fs::read_to_string(path)?;
    let template = Template::load(&json)?;
    println!("Template: {}", template.name);
    println!("Aspect ratio: {}", template.aspect_ratio);
    println!("Safe zones ({}):", template.safe_zones.len());
    for zone in &template.safe_zones {
        println!(
            "  {} at {:.0}%/{:.0}% size {:.0}%x{:.0}% ({})",
            zone.name,
            zone.left,
            zone.top,
            zone.width,
            zone.height,
            if zone.visible { "visible" } else { "hidden" },
        );
    }
    println!("Guidelines: {}", template.guidelines.len());
    Ok(())
}

fn report(video: &str, output: &str) -> Result<(), QcError> {
    let data = ReportData {
        file_name: video.to_string(),
        errors: sample_findings(),
        analysis_date: Utc::now().date_naive(),
        video_info: VideoInfo {
            resolution: "1920x1080".to_string(),
            aspect_ratio: "16:9".to_string(),
            duration: "00:02:00".to_string(),
            frame_rate: "24 fps".to_string(),
        },
    };
    render_report(&data, Path::new("./fonts"), Path::new(output))?;

    let summary = Summary::from_findings(&data.errors);
    println!(
        "Wrote {} ({} issues: {} high, {} medium, {} low)",
        output,
        summary.total(),
        summary.high,
        summary.medium,
        summary.low,
    );
    Ok(())
}
