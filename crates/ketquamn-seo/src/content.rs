//! Content heuristics: keyword density and fixed-threshold SEO checks.
//!
//! Every check is a pure function that returns `None` when the content passes.
//! Inputs are never rejected; empty content degrades to a neutral answer.

use regex::Regex;
use scraper::{Html, Selector};
use serde::Serialize;

/// Minimum word count before content is considered thin.
pub const MIN_WORDS: usize = 300;
/// Maximum word count before content should be split.
pub const MAX_WORDS: usize = 2500;
/// Density band (percent) considered optimal for the primary keyword.
pub const MIN_DENSITY: f64 = 1.0;
pub const MAX_DENSITY: f64 = 3.0;
/// Number of leading characters that must contain the keyword.
pub const INTRO_CHARS: usize = 200;

/// What a suggestion asks the editor to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionAction {
    ExpandContent,
    ShortenContent,
    AddH1,
    AddKeywordToH1,
    AddKeywordToIntro,
    AddAltText,
    IncreaseKeywordDensity,
    ReduceKeywordDensity,
    Keep,
}

/// Which check produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    ContentLength,
    KeywordDensity,
    Headings,
    Introduction,
    Images,
}

/// A single fix suggested for a piece of content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoSuggestion {
    pub kind: SuggestionKind,
    pub message: String,
    pub action: SuggestionAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<usize>,
}

/// Density of one keyword in a text, with the suggested action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordAnalysis {
    pub keyword: String,
    pub density: f64,
    pub suggestion: String,
    pub action: SuggestionAction,
}

/// Percentage of whitespace-delimited tokens taken by `keyword`.
///
/// Matching is case-insensitive. A single word matches whole words only; a
/// phrase matches exact contiguous text. Returns 0 for empty input.
pub fn calculate_keyword_density(text: &str, keyword: &str) -> f64 {
    let keyword = keyword.trim();
    let total_words = text.split_whitespace().count();
    if keyword.is_empty() || total_words == 0 {
        return 0.0;
    }

    let lowered = keyword.to_lowercase();
    let escaped = regex::escape(&lowered);
    let pattern = if keyword.split_whitespace().count() > 1 {
        escaped
    } else {
        // `\b` needs a word character on the keyword side of the edge.
        let edge = |c: Option<char>| match c {
            Some(c) if c.is_alphanumeric() || c == '_' => r"\b",
            _ => "",
        };
        let (lead, trail) = (edge(lowered.chars().next()), edge(lowered.chars().last()));
        format!("{lead}{escaped}{trail}")
    };

    let occurrences = match Regex::new(&pattern) {
        Ok(re) => re.find_iter(&text.to_lowercase()).count(),
        Err(_) => 0,
    };

    occurrences as f64 / total_words as f64 * 100.0
}

/// Density of `keyword` plus whether to add or remove occurrences.
pub fn analyze_keyword(text: &str, keyword: &str) -> KeywordAnalysis {
    let density = calculate_keyword_density(text, keyword);
    let (action, suggestion) = if density < MIN_DENSITY {
        (
            SuggestionAction::IncreaseKeywordDensity,
            format!(
                "Mật độ từ khóa \"{keyword}\" là {density:.2}%, nên tăng lên khoảng {MIN_DENSITY}-{MAX_DENSITY}%"
            ),
        )
    } else if density > MAX_DENSITY {
        (
            SuggestionAction::ReduceKeywordDensity,
            format!(
                "Mật độ từ khóa \"{keyword}\" là {density:.2}%, nên giảm xuống dưới {MAX_DENSITY}% để tránh nhồi từ khóa"
            ),
        )
    } else {
        (
            SuggestionAction::Keep,
            format!("Mật độ từ khóa \"{keyword}\" là {density:.2}%, đã tối ưu"),
        )
    };

    KeywordAnalysis {
        keyword: keyword.to_string(),
        density,
        suggestion,
        action,
    }
}

/// Flag content outside the [`MIN_WORDS`, `MAX_WORDS`] band.
pub fn optimize_content_length(content: &str) -> Option<SeoSuggestion> {
    let words = word_count(&plain_text(content));
    if words < MIN_WORDS {
        Some(SeoSuggestion {
            kind: SuggestionKind::ContentLength,
            message: format!("Nội dung có {words} từ, nên mở rộng lên ít nhất {MIN_WORDS} từ"),
            action: SuggestionAction::ExpandContent,
            current: Some(words),
            target: Some(MIN_WORDS),
        })
    } else if words > MAX_WORDS {
        Some(SeoSuggestion {
            kind: SuggestionKind::ContentLength,
            message: format!("Nội dung có {words} từ, nên chia thành nhiều trang dưới {MAX_WORDS} từ"),
            action: SuggestionAction::ShortenContent,
            current: Some(words),
            target: Some(MAX_WORDS),
        })
    } else {
        None
    }
}

/// Require an `<h1>` that contains the keyword.
pub fn optimize_headings(html: &str, keyword: &str) -> Option<SeoSuggestion> {
    let document = Html::parse_fragment(html);
    let selector = Selector::parse("h1").ok()?;
    let headings: Vec<String> = document
        .select(&selector)
        .map(|h| h.text().collect::<String>())
        .collect();

    if headings.is_empty() {
        return Some(SeoSuggestion {
            kind: SuggestionKind::Headings,
            message: "Trang chưa có thẻ H1, nên thêm một tiêu đề H1 chứa từ khóa chính".to_string(),
            action: SuggestionAction::AddH1,
            current: Some(0),
            target: Some(1),
        });
    }

    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return None;
    }
    if headings.iter().any(|h| h.to_lowercase().contains(&keyword)) {
        None
    } else {
        Some(SeoSuggestion {
            kind: SuggestionKind::Headings,
            message: format!("Thẻ H1 chưa chứa từ khóa \"{keyword}\""),
            action: SuggestionAction::AddKeywordToH1,
            current: None,
            target: None,
        })
    }
}

/// Require the keyword within the first [`INTRO_CHARS`] characters.
pub fn check_keyword_in_first_paragraph(text: &str, keyword: &str) -> Option<SeoSuggestion> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return None;
    }
    let intro: String = plain_text(text).chars().take(INTRO_CHARS).collect();
    if intro.to_lowercase().contains(&keyword) {
        return None;
    }
    Some(SeoSuggestion {
        kind: SuggestionKind::Introduction,
        message: format!(
            "Nên đưa từ khóa \"{keyword}\" vào {INTRO_CHARS} ký tự đầu tiên của bài viết"
        ),
        action: SuggestionAction::AddKeywordToIntro,
        current: None,
        target: Some(INTRO_CHARS),
    })
}

/// Flag `<img>` elements without a non-empty `alt` attribute.
pub fn optimize_images(html: &str) -> Option<SeoSuggestion> {
    let document = Html::parse_fragment(html);
    let selector = Selector::parse("img").ok()?;
    let missing = document
        .select(&selector)
        .filter(|img| {
            img.value()
                .attr("alt")
                .map(|alt| alt.trim().is_empty())
                .unwrap_or(true)
        })
        .count();

    if missing == 0 {
        return None;
    }
    Some(SeoSuggestion {
        kind: SuggestionKind::Images,
        message: format!("{missing} hình ảnh thiếu thuộc tính alt"),
        action: SuggestionAction::AddAltText,
        current: Some(missing),
        target: Some(0),
    })
}

/// Run every check in a fixed order and keep the ones that fired.
///
/// Order: length, keyword density, headings, introduction, images.
pub fn generate_seo_content_suggestions(content: &str, keyword: &str) -> Vec<SeoSuggestion> {
    let density = {
        let analysis = analyze_keyword(&plain_text(content), keyword);
        (analysis.action != SuggestionAction::Keep && !keyword.trim().is_empty()).then(|| {
            SeoSuggestion {
                kind: SuggestionKind::KeywordDensity,
                message: analysis.suggestion,
                action: analysis.action,
                current: None,
                target: None,
            }
        })
    };

    [
        optimize_content_length(content),
        density,
        optimize_headings(content, keyword),
        check_keyword_in_first_paragraph(content, keyword),
        optimize_images(content),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Text content of an HTML fragment; plain text passes through unchanged.
fn plain_text(content: &str) -> String {
    if !content.contains('<') {
        return content.to_string();
    }
    let fragment = Html::parse_fragment(content);
    fragment.root_element().text().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["xổ"; n].join(" ")
    }

    #[test]
    fn test_density_single_word() {
        let density = calculate_keyword_density("a a b", "a");
        assert!((density - 2.0 / 3.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_density_empty_inputs() {
        assert_eq!(calculate_keyword_density("", "a"), 0.0);
        assert_eq!(calculate_keyword_density("x", ""), 0.0);
        assert_eq!(calculate_keyword_density("   ", "a"), 0.0);
    }

    #[test]
    fn test_density_is_case_insensitive_and_whole_word() {
        let text = "XSMB hôm nay xsmb kqxsmb";
        let density = calculate_keyword_density(text, "xsmb");
        assert!((density - 2.0 / 5.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_density_phrase_matches_contiguous_text() {
        let text = "kết quả xổ số miền Bắc và kết quả xổ số miền Nam";
        let density = calculate_keyword_density(text, "Kết Quả Xổ Số");
        assert!((density - 2.0 / 13.0 * 100.0).abs() < 1e-9);
        assert_eq!(calculate_keyword_density(text, "xổ kết"), 0.0);
    }

    #[test]
    fn test_density_escapes_metacharacters() {
        let density = calculate_keyword_density("c++ là c++ (hay) không", "c++");
        assert!((density - 2.0 / 5.0 * 100.0).abs() < 1e-9);
        assert_eq!(calculate_keyword_density("abc++ c", "c++"), 0.0);
        assert_eq!(calculate_keyword_density("a.b axb", "a.b (x"), 0.0);
    }

    #[test]
    fn test_density_keyword_with_trailing_dot() {
        let density = calculate_keyword_density("xem kqxs. hôm nay kqxs.", "kqxs.");
        assert!((density - 2.0 / 5.0 * 100.0).abs() < 1e-9);
        assert_eq!(calculate_keyword_density("xem kqxsx hôm nay", "kqxs."), 0.0);
    }

    #[test]
    fn test_analyze_keyword_actions() {
        assert_eq!(
            analyze_keyword(&words(200), "xsmb").action,
            SuggestionAction::IncreaseKeywordDensity
        );
        assert_eq!(analyze_keyword("a a b", "a").action, SuggestionAction::ReduceKeywordDensity);

        let mut text = words(98);
        text.push_str(" xsmb xsmb");
        let analysis = analyze_keyword(&text, "xsmb");
        assert_eq!(analysis.action, SuggestionAction::Keep);
        assert!((analysis.density - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_content_length_thin() {
        let suggestion = optimize_content_length(&words(50)).unwrap();
        assert_eq!(suggestion.action, SuggestionAction::ExpandContent);
        assert_eq!(suggestion.target, Some(300));
        assert_eq!(suggestion.current, Some(50));
    }

    #[test]
    fn test_content_length_ok_and_long() {
        assert!(optimize_content_length(&words(850)).is_none());
        let long = optimize_content_length(&words(2600)).unwrap();
        assert_eq!(long.action, SuggestionAction::ShortenContent);
    }

    #[test]
    fn test_content_length_ignores_markup() {
        let html = format!("<div><p>{}</p></div>", words(300));
        assert!(optimize_content_length(&html).is_none());
    }

    #[test]
    fn test_headings() {
        let missing = optimize_headings("<p>không có tiêu đề</p>", "xsmb").unwrap();
        assert_eq!(missing.action, SuggestionAction::AddH1);

        let no_kw = optimize_headings("<h1>Kết quả hôm nay</h1>", "xsmb").unwrap();
        assert_eq!(no_kw.action, SuggestionAction::AddKeywordToH1);

        assert!(optimize_headings("<h1>XSMB hôm nay</h1>", "xsmb").is_none());
    }

    #[test]
    fn test_keyword_in_first_paragraph() {
        assert!(check_keyword_in_first_paragraph("XSMB hôm nay có gì mới", "xsmb").is_none());

        let late = format!("{} xsmb", "a".repeat(INTRO_CHARS));
        let suggestion = check_keyword_in_first_paragraph(&late, "xsmb").unwrap();
        assert_eq!(suggestion.action, SuggestionAction::AddKeywordToIntro);
    }

    #[test]
    fn test_intro_counts_characters_not_bytes() {
        // 150 two-byte characters followed by the keyword, well inside 200 chars.
        let text = format!("{} xsmb", "ố".repeat(150));
        assert!(check_keyword_in_first_paragraph(&text, "xsmb").is_none());
    }

    #[test]
    fn test_images_missing_alt() {
        let html = r#"<img src="a.png" alt="Kết quả"><img src="b.png"><img src="c.png" alt=" ">"#;
        let suggestion = optimize_images(html).unwrap();
        assert_eq!(suggestion.action, SuggestionAction::AddAltText);
        assert_eq!(suggestion.current, Some(2));

        assert!(optimize_images(r#"<img src="a.png" alt="ok">"#).is_none());
        assert!(optimize_images("<p>không ảnh</p>").is_none());
    }

    #[test]
    fn test_suggestions_preserve_check_order() {
        let html = r#"<p>nội dung ngắn</p><img src="x.png">"#;
        let actions: Vec<_> = generate_seo_content_suggestions(html, "xsmb")
            .into_iter()
            .map(|s| s.action)
            .collect();
        assert_eq!(
            actions,
            vec![
                SuggestionAction::ExpandContent,
                SuggestionAction::IncreaseKeywordDensity,
                SuggestionAction::AddH1,
                SuggestionAction::AddKeywordToIntro,
                SuggestionAction::AddAltText,
            ]
        );
    }

    #[test]
    fn test_suggestions_empty_for_good_content() {
        let mut body = String::from("xsmb ");
        body.push_str(&words(148));
        body.push_str(" xsmb ");
        body.push_str(&words(149));
        body.push_str(" xsmb");
        let html = format!("<h1>XSMB hôm nay</h1><p>{body}</p><img src=\"a.png\" alt=\"xsmb\">");
        assert!(generate_seo_content_suggestions(&html, "xsmb").is_empty());
    }

    #[test]
    fn test_action_serializes_kebab_case() {
        let json = serde_json::to_value(SuggestionAction::ExpandContent).unwrap();
        assert_eq!(json, "expand-content");
    }
}
