//! Static legal pages.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use ketquamn_seo::keywords::keyword_section;
use ketquamn_seo::structured_data::{
    breadcrumb_list, organization, to_script_tags, BreadcrumbItem,
};
use ketquamn_seo::SiteConfig;

use crate::state::AppState;

pub struct LegalPage {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub sections: &'static [(&'static str, &'static str)],
}

pub const PRIVACY: LegalPage = LegalPage {
    path: "/chinh-sach-bao-mat",
    title: "Chính sách bảo mật",
    description: "Chính sách bảo mật thông tin người dùng khi truy cập KETQUAMN.",
    sections: &[
        (
            "Thông tin chúng tôi thu thập",
            "Chúng tôi không yêu cầu đăng ký tài khoản. Hệ thống chỉ ghi nhận dữ liệu \
             truy cập ẩn danh như loại trình duyệt, thời gian tải trang và các chỉ số \
             hiệu năng để cải thiện tốc độ trang.",
        ),
        (
            "Cookie và công cụ phân tích",
            "Trang sử dụng cookie của công cụ phân tích để thống kê lượt truy cập. Bạn \
             có thể tắt cookie trong phần cài đặt của trình duyệt.",
        ),
        (
            "Chia sẻ thông tin",
            "Chúng tôi không bán hoặc chia sẻ thông tin cá nhân của người dùng cho bên \
             thứ ba, trừ khi pháp luật yêu cầu.",
        ),
    ],
};

pub const TERMS: LegalPage = LegalPage {
    path: "/dieu-khoan-su-dung",
    title: "Điều khoản sử dụng",
    description: "Điều khoản sử dụng dịch vụ tra cứu kết quả xổ số KETQUAMN.",
    sections: &[
        (
            "Phạm vi dịch vụ",
            "KETQUAMN cung cấp thông tin kết quả xổ số kiến thiết 3 miền với mục đích \
             tham khảo. Kết quả chính thức được công bố bởi các công ty xổ số kiến thiết.",
        ),
        (
            "Trách nhiệm người dùng",
            "Người dùng không được sử dụng nội dung trên trang cho mục đích cá cược bất \
             hợp pháp hoặc sao chép nội dung khi chưa được cho phép.",
        ),
        (
            "Thay đổi điều khoản",
            "Điều khoản có thể được cập nhật mà không cần báo trước. Việc tiếp tục sử dụng \
             trang đồng nghĩa với việc chấp nhận điều khoản mới.",
        ),
    ],
};

pub const DISCLAIMER: LegalPage = LegalPage {
    path: "/mien-tru-trach-nhiem",
    title: "Miễn trừ trách nhiệm",
    description: "Tuyên bố miễn trừ trách nhiệm về thông tin kết quả xổ số trên KETQUAMN.",
    sections: &[
        (
            "Tính chính xác của thông tin",
            "Kết quả được cập nhật trực tiếp và đối chiếu với nguồn chính thức, tuy nhiên \
             có thể xảy ra sai sót trong quá trình tường thuật. Vui lòng đối chiếu với \
             kết quả của công ty xổ số trước khi lĩnh thưởng.",
        ),
        (
            "Thống kê và soi cầu",
            "Các nội dung thống kê, soi cầu chỉ mang tính tham khảo, không phải lời \
             khuyên và không đảm bảo kết quả trong tương lai.",
        ),
    ],
};

pub static LEGAL_PAGES: [LegalPage; 3] = [PRIVACY, TERMS, DISCLAIMER];

pub fn find_legal_page(path: &str) -> Option<&'static LegalPage> {
    let path = path.trim_end_matches('/');
    LEGAL_PAGES.iter().find(|page| page.path == path)
}

pub async fn legal_page_handler(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    match find_legal_page(uri.path()) {
        Some(page) => Html(render_legal_page(&state.config, page)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Render a legal page with Organization and BreadcrumbList markup.
pub fn render_legal_page(config: &SiteConfig, page: &LegalPage) -> String {
    let structured = to_script_tags(&[
        organization(config),
        breadcrumb_list(
            config,
            &[
                BreadcrumbItem::new("Trang chủ", "/"),
                BreadcrumbItem::new(page.title, page.path),
            ],
        ),
    ]);
    let keywords = keyword_section("home");

    let body: String = page
        .sections
        .iter()
        .map(|(heading, text)| format!("<section><h2>{heading}</h2><p>{text}</p></section>"))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="vi">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site}</title>
<meta name="description" content="{description}">
<meta name="keywords" content="{meta_keywords}">
<link rel="canonical" href="{canonical}">
{structured}
</head>
<body>
<main>
<h1>{title}</h1>
{body}
{keyword_html}
</main>
</body>
</html>
"#,
        title = page.title,
        site = config.site_name,
        description = page.description,
        meta_keywords = keywords.meta_keywords(),
        canonical = config.url(page.path),
        keyword_html = keywords.to_html(),
    )
}
