//! Per-page keyword sections: a primary keyword plus related (LSI) terms.

use quick_xml::escape::escape;
use serde::Serialize;

/// Keywords attached to one page type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordSection {
    pub page_id: &'static str,
    pub heading: &'static str,
    pub primary: &'static str,
    pub related: &'static [&'static str],
}

const SECTIONS: &[KeywordSection] = &[
    KeywordSection {
        page_id: "home",
        heading: "Từ khóa liên quan",
        primary: "kết quả xổ số",
        related: &[
            "xổ số hôm nay",
            "kqxs 3 miền",
            "xổ số trực tiếp",
            "dò vé số",
            "xổ số kiến thiết",
        ],
    },
    KeywordSection {
        page_id: "xsmb",
        heading: "Tìm kiếm liên quan XSMB",
        primary: "xổ số miền Bắc",
        related: &["xsmb hôm nay", "kqxsmb", "sxmb", "xstd", "xổ số thủ đô"],
    },
    KeywordSection {
        page_id: "xsmn",
        heading: "Tìm kiếm liên quan XSMN",
        primary: "xổ số miền Nam",
        related: &["xsmn hôm nay", "kqxsmn", "sxmn", "xổ số đài miền Nam"],
    },
    KeywordSection {
        page_id: "xsmt",
        heading: "Tìm kiếm liên quan XSMT",
        primary: "xổ số miền Trung",
        related: &["xsmt hôm nay", "kqxsmt", "sxmt", "xổ số đài miền Trung"],
    },
    KeywordSection {
        page_id: "thong-ke",
        heading: "Thống kê liên quan",
        primary: "thống kê xổ số",
        related: &["lô gan", "tần suất lô tô", "thống kê giải đặc biệt", "đầu đuôi lô tô"],
    },
    KeywordSection {
        page_id: "soi-cau",
        heading: "Soi cầu liên quan",
        primary: "soi cầu xổ số",
        related: &["cầu bạch thủ", "cầu lô", "dự đoán xổ số", "cầu đặc biệt"],
    },
];

/// Keyword section for `page_id`, falling back to the home section.
pub fn keyword_section(page_id: &str) -> &'static KeywordSection {
    SECTIONS
        .iter()
        .find(|s| s.page_id == page_id)
        .unwrap_or(&SECTIONS[0])
}

impl KeywordSection {
    /// Primary keyword followed by related terms.
    pub fn all_keywords(&self) -> Vec<&'static str> {
        std::iter::once(self.primary)
            .chain(self.related.iter().copied())
            .collect()
    }

    /// Comma separated value for `<meta name="keywords">`.
    pub fn meta_keywords(&self) -> String {
        self.all_keywords().join(", ")
    }

    /// Render the section as an HTML fragment.
    pub fn to_html(&self) -> String {
        let items: String = self
            .related
            .iter()
            .map(|k| format!("<li>{}</li>", escape(*k)))
            .collect();
        format!(
            r#"<section class="seo-keywords"><h2>{}</h2><p><strong>{}</strong></p><ul>{}</ul></section>"#,
            escape(self.heading),
            escape(self.primary),
            items
        )
    }
}
