//! Person markup for article authors.

use super::SCHEMA_CONTEXT;
use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// An author credited on analysis and guide pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub job_title: String,
    pub description: String,
    /// Site-relative profile path.
    pub profile_path: String,
    pub knows_about: Vec<String>,
}

impl Default for Author {
    /// The editorial team byline.
    fn default() -> Self {
        Self {
            name: "Ban biên tập KETQUAMN".to_string(),
            job_title: "Chuyên gia phân tích xổ số".to_string(),
            description: "Nhóm biên tập theo dõi và đối chiếu kết quả xổ số 3 miền \
                          hằng ngày từ nguồn chính thức."
                .to_string(),
            profile_path: "/tac-gia/ban-bien-tap".to_string(),
            knows_about: vec![
                "Xổ số miền Bắc".to_string(),
                "Xổ số miền Nam".to_string(),
                "Xổ số miền Trung".to_string(),
                "Thống kê xổ số".to_string(),
            ],
        }
    }
}

/// Person markup for `author`, linked to the site Organization.
pub fn author(config: &SiteConfig, author: &Author) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Person",
        "name": author.name,
        "jobTitle": author.job_title,
        "description": author.description,
        "url": config.url(&author.profile_path),
        "knowsAbout": author.knows_about,
        "worksFor": {
            "@type": "Organization",
            "@id": config.url("/#organization"),
            "name": config.site_name,
        },
    })
}
