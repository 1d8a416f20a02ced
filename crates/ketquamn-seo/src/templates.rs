//! Templated per-page copy in Vietnamese.
//!
//! Output differs per region and date only lexically; the skeletons are fixed.

use chrono::{Datelike, NaiveDate, Weekday};

/// Region name used when the region key is not recognized.
pub const ALL_REGIONS: &str = "3 miền";

/// Vietnamese display name for a region key (`xsmb`, `xsmn`, `xsmt`).
pub fn region_name(region: &str) -> &'static str {
    match region.trim().to_lowercase().as_str() {
        "xsmb" => "miền Bắc",
        "xsmn" => "miền Nam",
        "xsmt" => "miền Trung",
        _ => ALL_REGIONS,
    }
}

/// Format a date the way vi-VN displays it: `dd/mm/yyyy`.
pub fn format_vi_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a date as the `dd-mm-yyyy` slug used in per-day URLs.
pub fn format_date_slug(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Vietnamese weekday name.
pub fn vietnamese_weekday(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Thứ Hai",
        Weekday::Tue => "Thứ Ba",
        Weekday::Wed => "Thứ Tư",
        Weekday::Thu => "Thứ Năm",
        Weekday::Fri => "Thứ Sáu",
        Weekday::Sat => "Thứ Bảy",
        Weekday::Sun => "Chủ Nhật",
    }
}

pub fn generate_unique_description(region: &str, date: NaiveDate) -> String {
    let name = region_name(region);
    let day = format_vi_date(date);
    format!(
        "Kết quả xổ số {name} ngày {day} được cập nhật trực tiếp và chính xác. \
         Xem đầy đủ các giải từ giải đặc biệt đến giải tám, bảng lô tô và thống kê \
         nhanh cho kỳ quay {day}."
    )
}

pub fn generate_unique_analysis(region: &str, date: NaiveDate) -> String {
    let name = region_name(region);
    let day = format_vi_date(date);
    let weekday = vietnamese_weekday(date);
    format!(
        "Phân tích kết quả xổ số {name} {weekday} ngày {day}: tổng hợp các cặp số \
         về nhiều nhất, lô gan lâu chưa xuất hiện và diễn biến giải đặc biệt so với \
         các kỳ {weekday} trước đó."
    )
}

pub fn generate_unique_guide(region: &str) -> String {
    let name = region_name(region);
    format!(
        "Hướng dẫn dò kết quả xổ số {name}: chọn ngày mở thưởng, đối chiếu dãy số \
         trên vé với từng giải theo thứ tự từ giải đặc biệt, lưu ý thời hạn lĩnh \
         thưởng 30 ngày kể từ ngày quay."
    )
}
