//! PDF quality-control report generation.

use std::path::Path;

use chrono::NaiveDate;
use genpdf::elements::{Break, Paragraph, TableLayout};
use genpdf::style::{Color, Style, StyledString};
use genpdf::{Alignment, Element};

use crate::detection::{Finding, Severity, Summary};
use crate::error::QcError;

/// Metadata block describing the analyzed video.
#[derive(Clone, PartialEq, Debug)]
pub struct VideoInfo {
    pub resolution: String,
    pub aspect_ratio: String,
    pub duration: String,
    pub frame_rate: String,
}

/// Everything that goes into one report.
#[derive(Clone, PartialEq, Debug)]
pub struct ReportData {
    pub file_name: String,
    pub errors: Vec<Finding>,
    pub analysis_date: NaiveDate,
    pub video_info: VideoInfo,
}

/// Report file name: `AutoQC_Report_<video stem>_<date>.pdf`.
pub fn report_file_name(video_file: &str, date: NaiveDate) -> String {
    let stem = Path::new(video_file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(video_file);
    format!("AutoQC_Report_{}_{}.pdf", stem, date.format("%Y-%m-%d"))
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::Rgb(220, 53, 69),
        Severity::Medium => Color::Rgb(255, 152, 0),
        Severity::Low => Color::Rgb(40, 167, 69),
    }
}

fn styled_paragraph(text: impl Into<String>, style: Style) -> Paragraph {
    let mut paragraph = Paragraph::new("");
    paragraph.push(StyledString::new(text, style));
    paragraph
}

fn label_cell(text: &str) -> Paragraph {
    styled_paragraph(text, Style::new().bold())
}

fn info_table(info: &VideoInfo) -> TableLayout {
    let mut table = TableLayout::new(vec![1, 2]);
    let rows = [
        ("Resolution", info.resolution.as_str()),
        ("Aspect Ratio", info.aspect_ratio.as_str()),
        ("Duration", info.duration.as_str()),
        ("Frame Rate", info.frame_rate.as_str()),
    ];
    for (label, value) in rows {
        table
            .row()
            .element(label_cell(label))
            .element(Paragraph::new(value))
            .push()
            .map_err(|e| log::warn!("Skipping report row: {}", e))
            .ok();
    }
    table
}

fn summary_table(summary: &Summary) -> TableLayout {
    let mut table = TableLayout::new(vec![2, 1]);
    let rows = [
        ("High severity", summary.high, severity_color(Severity::High)),
        (
            "Medium severity",
            summary.medium,
            severity_color(Severity::Medium),
        ),
        ("Low severity", summary.low, severity_color(Severity::Low)),
    ];
    for (label, count, color) in rows {
        table
            .row()
            .element(styled_paragraph(label, Style::new().with_color(color)))
            .element(Paragraph::new(count.to_string()))
            .push()
            .map_err(|e| log::warn!("Skipping report row: {}", e))
            .ok();
    }
    table
        .row()
        .element(label_cell("Total issues"))
        .element(label_cell(&summary.total().to_string()))
        .push()
        .map_err(|e| log::warn!("Skipping report row: {}", e))
        .ok();
    table
}

fn findings_table(findings: &[Finding]) -> TableLayout {
    let mut table = TableLayout::new(vec![2, 3, 2, 4]);
    table
        .row()
        .element(label_cell("Timecode"))
        .element(label_cell("Issue"))
        .element(label_cell("Severity"))
        .element(label_cell("Description"))
        .push()
        .map_err(|e| log::warn!("Skipping report row: {}", e))
        .ok();
    for finding in findings {
        let severity = styled_paragraph(
            finding.severity.to_string(),
            Style::new().with_color(severity_color(finding.severity)),
        );
        table
            .row()
            .element(Paragraph::new(finding.timecode.clone()))
            .element(Paragraph::new(finding.kind.clone()))
            .element(severity)
            .element(Paragraph::new(
                finding.description.clone().unwrap_or_default(),
            ))
            .push()
            .map_err(|e| log::warn!("Skipping report row: {}", e))
            .ok();
    }
    table
}

const RECOMMENDATIONS: [&str; 4] = [
    "Keep all text within the title safe area (90% of frame).",
    "Keep logos and graphics within the action safe area (80% of frame).",
    "Verify subtitle placement against the target platform's caption zone.",
    "Re-run detection after repositioning overlays to confirm the fixes.",
];

/// Render the report to `output`. Fonts are loaded from `fonts_dir`, which
/// must contain the LiberationSans family files.
pub fn render_report(
    data: &ReportData,
    fonts_dir: &Path,
    output: &Path,
) -> Result<(), QcError> {
    let font_family =
        genpdf::fonts::from_files(fonts_dir, "LiberationSans", None).map_err(|e| {
            QcError::Report(format!(
                "Unable to load report fonts from {}: {}",
                fonts_dir.display(),
                e
            ))
        })?;

    let mut doc = genpdf::Document::new(font_family);
    doc.set_title("AutoQC Report");
    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(10);
    decorator.set_header(|page| {
        let mut layout = genpdf::elements::LinearLayout::vertical();
        if page > 1 {
            layout.push(
                Paragraph::new(format!("AutoQC Report - Page {}", page))
                    .aligned(Alignment::Right),
            );
            layout.push(Break::new(1));
        }
        layout.styled(Style::new().with_font_size(9))
    });
    doc.set_page_decorator(decorator);

    doc.push(
        Paragraph::new("AutoQC - Video Quality Control Report")
            .aligned(Alignment::Center)
            .styled(Style::new().bold().with_font_size(18)),
    );
    doc.push(Break::new(1));
    doc.push(Paragraph::new(format!("File: {}", data.file_name)));
    doc.push(Paragraph::new(format!(
        "Analysis date: {}",
        data.analysis_date.format("%Y-%m-%d")
    )));
    doc.push(Break::new(1));

    doc.push(Paragraph::new("Video Information").styled(Style::new().bold().with_font_size(14)));
    doc.push(info_table(&data.video_info));
    doc.push(Break::new(1));

    let summary = Summary::from_findings(&data.errors);
    doc.push(Paragraph::new("Summary").styled(Style::new().bold().with_font_size(14)));
    doc.push(summary_table(&summary));
    doc.push(Break::new(1));

    if data.errors.is_empty() {
        doc.push(Paragraph::new("No issues detected."));
    } else {
        doc.push(
            Paragraph::new("Detected Issues").styled(Style::new().bold().with_font_size(14)),
        );
        doc.push(findings_table(&data.errors));
    }
    doc.push(Break::new(1));

    doc.push(Paragraph::new("Recommendations").styled(Style::new().bold().with_font_size(14)));
    for line in RECOMMENDATIONS {
        doc.push(Paragraph::new(format!("• {}", line)));
    }

    doc.render_to_file(output)
        .map_err(|e| QcError::Report(format!("Unable to write report: {}", e)))?;
    log::info!("Report written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(
            report_file_name("commercial_v2.mp4", date),
            "AutoQC_Report_commercial_v2_2024-03-15.pdf"
        );
        assert_eq!(
            report_file_name("clips/teaser.final.mov", date),
            "AutoQC_Report_teaser.final_2024-03-15.pdf"
        );
    }
}
