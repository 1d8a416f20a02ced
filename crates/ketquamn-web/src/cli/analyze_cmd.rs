//! Run the content heuristics against a file.

use std::path::Path;

use anyhow::{Context, Result};
use ketquamn_seo::content::{analyze_keyword, generate_seo_content_suggestions, SuggestionAction};
use serde_json::json;

use super::output::{self, Mark, Report};

pub fn run(file: &Path, keyword: &str, json: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let analysis = analyze_keyword(&content, keyword);
    let suggestions = generate_seo_content_suggestions(&content, keyword);

    if json {
        output::print_json(&json!({
            "file": file.display().to_string(),
            "keyword": analysis,
            "suggestions": suggestions,
        }));
        return Ok(());
    }

    let mut report = Report::stderr();
    report.heading(&format!("{} ({keyword})", file.display()));
    let density_mark = match analysis.action {
        SuggestionAction::Keep => Mark::Pass,
        _ => Mark::Warn,
    };
    report.line(density_mark, "density", &format!("{:.2}%", analysis.density));

    if suggestions.is_empty() {
        report.line(Mark::Pass, "suggestions", "none");
        return Ok(());
    }
    for suggestion in &suggestions {
        let action = serde_json::to_value(suggestion.action)
            .ok()
            .and_then(|v| v.as_str().map(String::from))
            .unwrap_or_default();
        report.line(Mark::Warn, &action, &suggestion.message);
    }
    Ok(())
}
