//! Report formatters: console, JSON, Markdown and HTML

use crate::config::{OutputFormat, ReportThresholds};
use crate::error::{AtsScorerError, Result};
use crate::output::report::{AiSuggestion, AtsReport, ItemStatus, ReportCard, SidebarCategory};
use crate::output::structurer::StatusBucket;
use crate::scoring::CriteriaScores;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering an [`AtsReport`]
pub trait OutputFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and status icons
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Dispatches a report to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

fn status_icon(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Pass => "✅",
        ItemStatus::Fail => "❌",
        ItemStatus::Info => "ℹ️",
    }
}

fn status_text(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Pass => "[pass]",
        ItemStatus::Fail => "[fail]",
        ItemStatus::Info => "[info]",
    }
}

fn score_bucket(score: u8) -> StatusBucket {
    StatusBucket::from_percentage(Some(score), &ReportThresholds::default())
}

fn percentage_label(category: &SidebarCategory) -> String {
    category
        .percentage
        .map_or_else(|| "n/a".to_string(), |p| format!("{}%", p))
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let bucket = score_bucket(score);
        let color = match bucket {
            StatusBucket::Strong => Color::Green,
            StatusBucket::Okay => Color::Yellow,
            StatusBucket::NeedsImprovement => Color::Red,
        };
        let badge = bucket.label().to_uppercase();

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn card_color(color: &str) -> Color {
        match color {
            "success" => Color::Green,
            "warning" => Color::Yellow,
            "error" => Color::Red,
            _ => Color::White,
        }
    }

    fn format_item_status(&self, status: ItemStatus) -> &'static str {
        if self.use_colors {
            status_icon(status)
        } else {
            status_text(status)
        }
    }

    fn format_card(&self, card: &ReportCard) -> String {
        let mut output = self.format_header(&format!("{} {}", card.icon, card.title), 3);
        output.push_str(&format!(
            "Status: {}\n",
            self.colorize(&card.status, Self::card_color(&card.color))
        ));

        if self.detailed {
            for point in &card.points {
                let mark = if point.is_good { "+" } else { "-" };
                let color = if point.is_good { Color::Green } else { Color::Red };
                output.push_str(&format!("  {} {}\n", self.colorize(mark, color), point.text));
            }
        }

        if !card.ai_suggestions.is_empty() {
            output.push_str("Suggestions:\n");
            for suggestion in &card.ai_suggestions {
                match suggestion {
                    AiSuggestion::Text(text) => output.push_str(&format!("  💡 {}\n", text)),
                    AiSuggestion::Rewrite {
                        title,
                        original,
                        upgraded,
                    } => {
                        output.push_str(&format!("  💡 {}\n", title));
                        output.push_str(&format!(
                            "     {} {}\n",
                            self.colorize("before:", Color::Red),
                            original
                        ));
                        output.push_str(&format!(
                            "     {} {}\n",
                            self.colorize("after: ", Color::Green),
                            upgraded
                        ));
                    }
                }
            }
        }

        output
    }

    /// Per-criterion points table used by `--detailed`
    pub fn format_criteria(&self, scores: &CriteriaScores) -> String {
        let mut output = self.format_header("Criterion Breakdown", 2);
        for score in scores.iter() {
            let line = format!(
                "{:<28} {:>5.1} / {:>4.1}",
                score.name.label(),
                score.score,
                score.max
            );
            let color = if score.fraction() >= 0.8 {
                Color::Green
            } else if score.fraction() >= 0.6 {
                Color::Yellow
            } else {
                Color::Red
            };
            output.push_str(&format!("  {}\n", self.colorize(&line, color)));
        }
        output.push_str(&format!(
            "  {:<28} {:>5.1} / {:>4.1}\n",
            "Total",
            scores.total(),
            scores.total_max()
        ));
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 ATS RESUME REPORT", 1));
        output.push_str(&format!("Resume: {}\n", report.resume_id));

        if let Some(error) = &report.error {
            let kind = report
                .error_kind
                .map_or_else(|| "unknown".to_string(), |k| k.to_string());
            output.push_str(&format!(
                "\n{} {} ({})\n",
                self.colorize("Evaluation failed:", Color::Red),
                error,
                kind
            ));
            return Ok(output);
        }

        output.push_str(&format!(
            "ATS Score: {}/100 {}\n",
            report.ats_score,
            self.format_score_badge(report.ats_score)
        ));

        if let Some(sidebar) = &report.score_breakdown_for_sidebar {
            output.push_str(&format!("Issues found: {}\n", sidebar.total_issues));
            output.push_str(&self.format_header("Score Breakdown", 2));
            for category in &sidebar.categories {
                output.push_str(&format!(
                    "{} {}\n",
                    self.colorize(&category.title, Color::Cyan),
                    percentage_label(category)
                ));
                for item in &category.sub_items {
                    output.push_str(&format!(
                        "  {} {}\n",
                        self.format_item_status(item.status),
                        item.text
                    ));
                }
            }
        }

        if !report.report_details.is_empty() {
            output.push_str(&self.format_header("Report Details", 2));
            for card in &report.report_details {
                output.push_str(&self.format_card(card));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score_bucket(score) {
            StatusBucket::Strong => "🟢 Strong",
            StatusBucket::Okay => "🟡 Okay",
            StatusBucket::NeedsImprovement => "🔴 Needs Improvement",
        }
    }

    fn format_markdown_suggestion(suggestion: &AiSuggestion) -> String {
        match suggestion {
            AiSuggestion::Text(text) => format!("- {}\n", text),
            AiSuggestion::Rewrite {
                title,
                original,
                upgraded,
            } => format!(
                "- **{}**\n  - Before: `{}`\n  - After: `{}`\n",
                title, original, upgraded
            ),
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let mut output = String::from("# ATS Resume Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "*Resume:* `{}` | *Generated:* {}\n\n",
                report.resume_id,
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        if let Some(error) = &report.error {
            output.push_str("## Evaluation Failed\n\n");
            output.push_str(&format!("> {}\n", error));
            if let Some(kind) = report.error_kind {
                output.push_str(&format!("\n*Kind:* `{}`\n", kind));
            }
            return Ok(output);
        }

        output.push_str(&format!(
            "## ATS Score: {}/100 ({})\n\n",
            report.ats_score,
            Self::markdown_score_badge(report.ats_score)
        ));

        if let Some(sidebar) = &report.score_breakdown_for_sidebar {
            output.push_str(&format!("**Issues found:** {}\n\n", sidebar.total_issues));
            output.push_str("## Score Breakdown\n\n");
            for category in &sidebar.categories {
                output.push_str(&format!(
                    "### {} ({})\n\n",
                    category.title,
                    percentage_label(category)
                ));
                for item in &category.sub_items {
                    output.push_str(&format!("- {} {}\n", status_icon(item.status), item.text));
                }
                output.push('\n');
            }
        }

        if !report.report_details.is_empty() {
            output.push_str("## Report Details\n\n");
            for card in &report.report_details {
                output.push_str(&format!(
                    "### {} {} ({})\n\n",
                    card.icon, card.title, card.status
                ));
                for point in &card.points {
                    let mark = if point.is_good { "✅" } else { "⚠️" };
                    output.push_str(&format!("- {} {}\n", mark, point.text));
                }
                if !card.ai_suggestions.is_empty() {
                    output.push_str("\n**Suggestions:**\n\n");
                    for suggestion in &card.ai_suggestions {
                        output.push_str(&Self::format_markdown_suggestion(suggestion));
                    }
                }
                output.push('\n');
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

struct HtmlItem {
    text: String,
    status: &'static str,
    icon: &'static str,
}

struct HtmlCategory {
    title: String,
    percentage: String,
    items: Vec<HtmlItem>,
}

struct HtmlPoint {
    text: String,
    good: bool,
}

struct HtmlSuggestion {
    title: String,
    is_rewrite: bool,
    original: String,
    upgraded: String,
}

struct HtmlCard {
    icon: String,
    title: String,
    status: String,
    color: String,
    points: Vec<HtmlPoint>,
    suggestions: Vec<HtmlSuggestion>,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ATS Resume Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .badge {
            display: inline-block;
            padding: 6px 14px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
        }
        .success { background: #28a745; }
        .warning { background: #ffc107; color: #000; }
        .error { background: #dc3545; }
        .categories {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 15px;
        }
        .category, .card {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            border-left: 4px solid #007acc;
        }
        .card { margin: 15px 0; }
        .pass { color: #28a745; }
        .fail { color: #dc3545; }
        .info { color: #6c757d; }
        .rewrite code { display: block; margin: 4px 0; }
        ul { margin: 10px 0; padding-left: 20px; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>📊 ATS Resume Report</h1>
            <p>Resume: {{ resume_id }} | Generated: {{ generated_at }}</p>
        </div>
        {% if has_error %}
        <div class="card">
            <h2 class="fail">Evaluation failed</h2>
            <p>{{ error }} ({{ error_kind }})</p>
        </div>
        {% else %}
        <h2>ATS Score: {{ ats_score }}/100 <span class="badge {{ score_color }}">{{ score_label }}</span></h2>
        <p>Issues found: {{ total_issues }}</p>
        <div class="categories">
            {% for category in categories %}
            <div class="category">
                <h3>{{ category.title }} <small>{{ category.percentage }}</small></h3>
                <ul>
                    {% for item in category.items %}
                    <li class="{{ item.status }}">{{ item.icon }} {{ item.text }}</li>
                    {% endfor %}
                </ul>
            </div>
            {% endfor %}
        </div>
        {% for card in cards %}
        <div class="card">
            <h3>{{ card.icon }} {{ card.title }} <span class="badge {{ card.color }}">{{ card.status }}</span></h3>
            <ul>
                {% for point in card.points %}
                {% if point.good %}<li class="pass">✅ {{ point.text }}</li>{% else %}<li class="fail">⚠️ {{ point.text }}</li>{% endif %}
                {% endfor %}
            </ul>
            {% if !card.suggestions.is_empty() %}
            <h4>Suggestions</h4>
            <ul>
                {% for suggestion in card.suggestions %}
                <li class="rewrite">💡 {{ suggestion.title }}
                    {% if suggestion.is_rewrite %}
                    <code>Before: {{ suggestion.original }}</code>
                    <code>After: {{ suggestion.upgraded }}</code>
                    {% endif %}
                </li>
                {% endfor %}
            </ul>
            {% endif %}
        </div>
        {% endfor %}
        {% endif %}
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    resume_id: String,
    has_error: bool,
    error: String,
    error_kind: String,
    ats_score: u8,
    score_color: String,
    score_label: String,
    total_issues: usize,
    categories: Vec<HtmlCategory>,
    cards: Vec<HtmlCard>,
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &AtsReport) -> HtmlTemplate {
        let bucket = score_bucket(report.ats_score);

        let categories = report
            .score_breakdown_for_sidebar
            .as_ref()
            .map(|sidebar| {
                sidebar
                    .categories
                    .iter()
                    .map(|category| HtmlCategory {
                        title: category.title.clone(),
                        percentage: percentage_label(category),
                        items: category
                            .sub_items
                            .iter()
                            .map(|item| HtmlItem {
                                text: item.text.clone(),
                                status: status_text(item.status)
                                    .trim_matches(|c| c == '[' || c == ']'),
                                icon: status_icon(item.status),
                            })
                            .collect(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let cards = report
            .report_details
            .iter()
            .map(|card| HtmlCard {
                icon: card.icon.clone(),
                title: card.title.clone(),
                status: card.status.clone(),
                color: card.color.clone(),
                points: card
                    .points
                    .iter()
                    .map(|p| HtmlPoint {
                        text: p.text.clone(),
                        good: p.is_good,
                    })
                    .collect(),
                suggestions: card
                    .ai_suggestions
                    .iter()
                    .map(|s| match s {
                        AiSuggestion::Text(text) => HtmlSuggestion {
                            title: text.clone(),
                            is_rewrite: false,
                            original: String::new(),
                            upgraded: String::new(),
                        },
                        AiSuggestion::Rewrite {
                            title,
                            original,
                            upgraded,
                        } => HtmlSuggestion {
                            title: title.clone(),
                            is_rewrite: true,
                            original: original.clone(),
                            upgraded: upgraded.clone(),
                        },
                    })
                    .collect(),
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            resume_id: report.resume_id.clone(),
            has_error: report.is_degraded(),
            error: report.error.clone().unwrap_or_default(),
            error_kind: report.error_kind.map(|k| k.to_string()).unwrap_or_default(),
            ats_score: report.ats_score,
            score_color: bucket.color().to_string(),
            score_label: bucket.label().to_string(),
            total_issues: report.total_issues(),
            categories,
            cards,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| AtsScorerError::OutputFormatting(format!("HTML template error: {}", e)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &AtsReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }

    pub fn console(&self) -> &ConsoleFormatter {
        &self.console_formatter
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };
    format!("{}_ats_report{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AtsScorerError;
    use crate::output::report::{CardPoint, SidebarSummary, SubItem};

    fn sample_report() -> AtsReport {
        AtsReport {
            resume_id: "ada@example.com".to_string(),
            ats_score: 72,
            error: None,
            error_kind: None,
            score_breakdown_for_sidebar: Some(SidebarSummary {
                overall_score: 72,
                total_issues: 1,
                categories: vec![
                    SidebarCategory {
                        title: "CONTENT".to_string(),
                        percentage: Some(65),
                        sub_items: vec![
                            SubItem {
                                text: "ATS Parse Rate".to_string(),
                                status: ItemStatus::Pass,
                            },
                            SubItem {
                                text: "Quantifying Impact".to_string(),
                                status: ItemStatus::Fail,
                            },
                        ],
                    },
                    SidebarCategory {
                        title: "TAILORING".to_string(),
                        percentage: None,
                        sub_items: vec![SubItem {
                            text: "Hard Skills".to_string(),
                            status: ItemStatus::Info,
                        }],
                    },
                ],
            }),
            report_details: vec![ReportCard {
                id: "work_experience".to_string(),
                icon: "💼".to_string(),
                title: "Work Experience".to_string(),
                status: "Okay".to_string(),
                color: "warning".to_string(),
                points: vec![CardPoint {
                    text: "Bullets start with <strong> verbs".to_string(),
                    is_good: true,
                }],
                ai_suggestions: vec![
                    AiSuggestion::Text("Add numbers to your bullets.".to_string()),
                    AiSuggestion::Rewrite {
                        title: "Show impact".to_string(),
                        original: "Did work".to_string(),
                        upgraded: "Cut costs 20%".to_string(),
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_console_plain() {
        let output = ConsoleFormatter::new(false, true)
            .format_report(&sample_report())
            .unwrap();

        assert!(output.contains("ATS Score: 72/100 [OKAY]"));
        assert!(output.contains("[fail] Quantifying Impact"));
        assert!(output.contains("TAILORING n/a"));
        assert!(output.contains("before: Did work"));
        assert!(output.contains("+ Bullets start"));
    }

    #[test]
    fn test_console_hides_points_unless_detailed() {
        let output = ConsoleFormatter::new(false, false)
            .format_report(&sample_report())
            .unwrap();
        assert!(!output.contains("Bullets start"));
        assert!(output.contains("Add numbers to your bullets."));
    }

    #[test]
    fn test_console_degraded() {
        let report = AtsReport::degraded(
            "r-1",
            &AtsScorerError::MissingInput("Processed resume data missing.".to_string()),
        );
        let output = ConsoleFormatter::new(false, false).format_report(&report).unwrap();
        assert!(output.contains("Evaluation failed:"));
        assert!(output.contains("missing_input"));
        assert!(!output.contains("ATS Score"));
    }

    #[test]
    fn test_json_roundtrips_report() {
        let report = sample_report();
        let json = JsonFormatter::new(false).format_report(&report).unwrap();
        let parsed: AtsReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_markdown() {
        let output = MarkdownFormatter::new(false)
            .format_report(&sample_report())
            .unwrap();
        assert!(output.starts_with("# ATS Resume Report"));
        assert!(output.contains("## ATS Score: 72/100 (🟡 Okay)"));
        assert!(output.contains("### CONTENT (65%)"));
        assert!(output.contains("  - Before: `Did work`"));
    }

    #[test]
    fn test_html_escapes_text() {
        let output = HtmlFormatter::new(false)
            .format_report(&sample_report())
            .unwrap();
        assert!(output.contains("ATS Score: 72/100"));
        assert!(output.contains("&#60;strong&#62;"));
        assert!(!output.contains("<strong>"));
        assert!(output.contains("Before: Did work"));
        assert!(!output.contains("<style>"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, true, false, true);
        let report = sample_report();
        for format in [
            OutputFormat::Console,
            OutputFormat::Json,
            OutputFormat::Markdown,
            OutputFormat::Html,
        ] {
            assert!(!generator.generate_report(&report, &format).unwrap().is_empty());
        }
    }

    #[test]
    fn test_formatters_report_their_format() {
        assert_eq!(ConsoleFormatter::new(false, false).supports_format(), OutputFormat::Console);
        assert_eq!(JsonFormatter::new(true).supports_format(), OutputFormat::Json);
        assert_eq!(MarkdownFormatter::new(true).supports_format(), OutputFormat::Markdown);
        assert_eq!(HtmlFormatter::new(true).supports_format(), OutputFormat::Html);

        let html = ReportGenerator::default()
            .generate_report(&sample_report(), &OutputFormat::Html)
            .unwrap();
        assert!(html.contains("<style>"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(&OutputFormat::Json, "resumes/ada.json", false),
            "ada_ats_report.json"
        );
        assert_eq!(
            suggest_filename(&OutputFormat::Console, "ada.json", false),
            "ada_ats_report.txt"
        );
        let stamped = suggest_filename(&OutputFormat::Html, "ada.json", true);
        assert!(stamped.starts_with("ada_ats_report_"));
        assert!(stamped.ends_with(".html"));
    }

    #[test]
    fn test_save_report_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/report.md");
        save_report_to_file("# hi", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# hi");
    }
}
