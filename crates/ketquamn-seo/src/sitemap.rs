//! XML sitemaps: the lottery sitemap, the news sitemap and the sitemap index.
//!
//! Per-day result pages live at `/ket-qua-xo-so/{dd-mm-yyyy}`. The trailing
//! window is computed from the calendar date in Vietnam time, newest first.

use crate::config::SiteConfig;
use crate::error::{Result, SeoError};
use crate::templates::{format_date_slug, format_vi_date};
use chrono::{DateTime, Days, Duration, NaiveDate, SecondsFormat, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const NEWS_NS: &str = "http://www.google.com/schemas/sitemap-news/0.9";

/// Days covered by the lottery sitemap, today included.
pub const DATED_WINDOW_DAYS: u64 = 30;
/// Days covered by the news sitemap. Google News ignores older articles.
pub const NEWS_WINDOW_DAYS: u64 = 2;

/// Vietnam is UTC+7 all year.
const VIETNAM_UTC_OFFSET_HOURS: i64 = 7;

/// Path prefix of the per-day result pages.
pub const RESULTS_PATH: &str = "/ket-qua-xo-so";

const LEADING_PAGES: [(&str, ChangeFrequency, f32); 2] = [
    ("/", ChangeFrequency::Always, 1.0),
    (RESULTS_PATH, ChangeFrequency::Hourly, 0.9),
];

const CATEGORY_PAGES: [&str; 5] = ["/xsmb", "/xsmn", "/xsmt", "/thong-ke", "/soi-cau"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

/// Google News block attached to a dated entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsMetadata {
    pub publication_name: String,
    pub language: String,
    pub publication_date: String,
    pub title: String,
}

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: ChangeFrequency,
    /// In `[0.0, 1.0]`.
    pub priority: f32,
    pub news: Option<NewsMetadata>,
}

/// Current calendar date in Vietnam.
pub fn vietnam_today(now: DateTime<Utc>) -> NaiveDate {
    (now + Duration::hours(VIETNAM_UTC_OFFSET_HOURS)).date_naive()
}

/// URL path of the result page for `date`.
pub fn results_path(date: NaiveDate) -> String {
    format!("{RESULTS_PATH}/{}", format_date_slug(date))
}

/// Dated entries for `today` and the `days - 1` days before it, newest first.
pub fn dated_entries(config: &SiteConfig, today: NaiveDate, days: u64) -> Vec<SitemapEntry> {
    (0..days)
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| SitemapEntry {
            loc: config.url(&results_path(date)),
            lastmod: date.format("%Y-%m-%d").to_string(),
            changefreq: ChangeFrequency::Daily,
            priority: if date == today { 0.8 } else { 0.6 },
            news: Some(NewsMetadata {
                publication_name: config.site_name.clone(),
                language: "vi".to_string(),
                publication_date: date.format("%Y-%m-%d").to_string(),
                title: format!("Kết quả xổ số ngày {}", format_vi_date(date)),
            }),
        })
        .collect()
}

/// Entries of the lottery sitemap: leading pages, the dated window, categories.
pub fn lottery_entries(
    config: &SiteConfig,
    today: NaiveDate,
    generated_at: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let lastmod = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true);

    let leading = LEADING_PAGES
        .iter()
        .map(|(path, changefreq, priority)| SitemapEntry {
            loc: config.url(path),
            lastmod: lastmod.clone(),
            changefreq: *changefreq,
            priority: *priority,
            news: None,
        });

    let categories = CATEGORY_PAGES.iter().map(|path| SitemapEntry {
        loc: config.url(path),
        lastmod: lastmod.clone(),
        changefreq: ChangeFrequency::Daily,
        priority: 0.7,
        news: None,
    });

    leading
        .chain(dated_entries(config, today, DATED_WINDOW_DAYS))
        .chain(categories)
        .collect()
}

/// Render the lottery sitemap.
pub fn lottery_sitemap(
    config: &SiteConfig,
    today: NaiveDate,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    render_urlset(&lottery_entries(config, today, generated_at))
}

/// Render the news sitemap: the last [`NEWS_WINDOW_DAYS`] result pages.
pub fn news_sitemap(config: &SiteConfig, today: NaiveDate) -> Result<String> {
    render_urlset(&dated_entries(config, today, NEWS_WINDOW_DAYS))
}

/// Render the sitemap index pointing at the lottery sitemap.
pub fn sitemap_index(config: &SiteConfig, generated_at: DateTime<Utc>) -> Result<String> {
    let lastmod = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write(
        &mut writer,
        Event::Start(BytesStart::new("sitemapindex").with_attributes([("xmlns", SITEMAP_NS)])),
    )?;
    for path in ["/sitemap-lottery.xml", "/news-sitemap.xml"] {
        write(&mut writer, Event::Start(BytesStart::new("sitemap")))?;
        text_element(&mut writer, "loc", &config.url(path))?;
        text_element(&mut writer, "lastmod", &lastmod)?;
        write(&mut writer, Event::End(BytesEnd::new("sitemap")))?;
    }
    write(&mut writer, Event::End(BytesEnd::new("sitemapindex")))?;

    finish(writer)
}

/// Render entries as a `<urlset>` document.
pub fn render_urlset(entries: &[SitemapEntry]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write(
        &mut writer,
        Event::Start(
            BytesStart::new("urlset")
                .with_attributes([("xmlns", SITEMAP_NS), ("xmlns:news", NEWS_NS)]),
        ),
    )?;

    for entry in entries {
        write(&mut writer, Event::Start(BytesStart::new("url")))?;
        text_element(&mut writer, "loc", &entry.loc)?;
        text_element(&mut writer, "lastmod", &entry.lastmod)?;
        text_element(&mut writer, "changefreq", entry.changefreq.as_str())?;
        text_element(
            &mut writer,
            "priority",
            &format!("{:.1}", entry.priority.clamp(0.0, 1.0)),
        )?;
        if let Some(news) = &entry.news {
            write_news(&mut writer, news)?;
        }
        write(&mut writer, Event::End(BytesEnd::new("url")))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("urlset")))?;
    finish(writer)
}

fn write_news(writer: &mut Writer<Vec<u8>>, news: &NewsMetadata) -> Result<()> {
    write(writer, Event::Start(BytesStart::new("news:news")))?;
    write(writer, Event::Start(BytesStart::new("news:publication")))?;
    text_element(writer, "news:name", &news.publication_name)?;
    text_element(writer, "news:language", &news.language)?;
    write(writer, Event::End(BytesEnd::new("news:publication")))?;
    text_element(writer, "news:publication_date", &news.publication_date)?;
    text_element(writer, "news:title", &news.title)?;
    write(writer, Event::End(BytesEnd::new("news:news")))
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(SeoError::xml)
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String> {
    String::from_utf8(writer.into_inner()).map_err(SeoError::xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use quick_xml::events::Event as XmlEvent;
    use quick_xml::Reader;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 3, 0, 0).unwrap()
    }

    /// Element names and text contents, in document order.
    fn scan(xml: &str) -> (Vec<String>, Vec<(String, String)>) {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);
        let mut starts = Vec::new();
        let mut texts = Vec::new();
        let mut current = String::new();
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(XmlEvent::Start(ref e)) => {
                    current = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    starts.push(current.clone());
                }
                Ok(XmlEvent::Text(ref e)) => {
                    let text = e.unescape().unwrap_or_default().to_string();
                    texts.push((current.clone(), text));
                }
                Ok(XmlEvent::Eof) => break,
                Err(e) => panic!("invalid xml: {e}"),
                _ => {}
            }
            buf.clear();
        }
        (starts, texts)
    }

    fn locs(xml: &str) -> Vec<String> {
        scan(xml)
            .1
            .into_iter()
            .filter(|(name, _)| name == "loc")
            .map(|(_, text)| text)
            .collect()
    }

    #[test]
    fn test_vietnam_today_crosses_midnight() {
        let late_utc = Utc.with_ymd_and_hms(2026, 10, 16, 18, 30, 0).unwrap();
        assert_eq!(
            vietnam_today(late_utc),
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
        );
        let early_utc = Utc.with_ymd_and_hms(2026, 10, 16, 16, 0, 0).unwrap();
        assert_eq!(
            vietnam_today(early_utc),
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        );
    }

    #[test]
    fn test_lottery_sitemap_entry_counts() {
        let now = fixed_now();
        let today = vietnam_today(now);
        let xml = lottery_sitemap(&SiteConfig::default(), today, now).unwrap();
        let (starts, _) = scan(&xml);

        assert_eq!(starts.iter().filter(|n| *n == "url").count(), 37);
        assert_eq!(starts.iter().filter(|n| *n == "news:news").count(), 30);
    }

    #[test]
    fn test_lottery_sitemap_order_and_slugs() {
        let now = fixed_now();
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let xml = lottery_sitemap(&SiteConfig::new("https://ketquamn.com/"), today, now).unwrap();
        let locs = locs(&xml);

        assert_eq!(locs.len(), 37);
        assert_eq!(locs[0], "https://ketquamn.com/");
        assert_eq!(locs[1], "https://ketquamn.com/ket-qua-xo-so");

        for offset in 0..30u64 {
            let date = today.checked_sub_days(Days::new(offset)).unwrap();
            let expected = format!(
                "https://ketquamn.com/ket-qua-xo-so/{}",
                date.format("%d-%m-%Y")
            );
            assert_eq!(locs[2 + offset as usize], expected);
        }
        assert_eq!(locs[2], "https://ketquamn.com/ket-qua-xo-so/17-10-2026");
        assert_eq!(locs[31], "https://ketquamn.com/ket-qua-xo-so/18-09-2026");

        assert_eq!(
            &locs[32..],
            [
                "https://ketquamn.com/xsmb",
                "https://ketquamn.com/xsmn",
                "https://ketquamn.com/xsmt",
                "https://ketquamn.com/thong-ke",
                "https://ketquamn.com/soi-cau",
            ]
        );
        assert!(locs.iter().all(|l| !l["https://".len()..].contains("//")));
    }

    #[test]
    fn test_dated_entry_news_block() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let entries = dated_entries(&SiteConfig::default(), today, 2);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].priority, 0.8);
        assert_eq!(entries[1].priority, 0.6);

        let news = entries[0].news.as_ref().unwrap();
        assert_eq!(news.title, "Kết quả xổ số ngày 05/03/2026");
        assert_eq!(news.publication_date, "2026-03-05");
        assert_eq!(news.language, "vi");
        assert!(entries[1].loc.ends_with("/04-03-2026"));
    }

    #[test]
    fn test_window_crosses_month_and_year() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let entries = dated_entries(&SiteConfig::default(), today, 3);
        assert!(entries[2].loc.ends_with("/31-12-2025"));
    }

    #[test]
    fn test_news_sitemap_has_two_days() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let xml = news_sitemap(&SiteConfig::default(), today).unwrap();
        assert_eq!(locs(&xml).len(), 2);
        assert!(xml.contains(NEWS_NS));
    }

    #[test]
    fn test_sitemap_index() {
        let xml = sitemap_index(&SiteConfig::default(), fixed_now()).unwrap();
        assert_eq!(
            locs(&xml),
            [
                "https://ketquamn.com/sitemap-lottery.xml",
                "https://ketquamn.com/news-sitemap.xml",
            ]
        );
        assert!(xml.contains("2026-10-17T03:00:00Z"));
    }

    #[test]
    fn test_text_is_escaped() {
        let entry = SitemapEntry {
            loc: "https://ketquamn.com/?a=1&b=2".to_string(),
            lastmod: "2026-10-17".to_string(),
            changefreq: ChangeFrequency::Weekly,
            priority: 1.5,
            news: None,
        };
        let xml = render_urlset(&[entry]).unwrap();
        assert!(xml.contains("a=1&amp;b=2"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert_eq!(locs(&xml), ["https://ketquamn.com/?a=1&b=2"]);
    }
}
