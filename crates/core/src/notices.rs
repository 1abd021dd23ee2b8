//! Admin diagnostics about site configuration.

use serde::Serialize;

use crate::settings::{FrontPageMode, ReadingSettings};

/// Admin screen where the front-page mode is configured.
pub const READING_SETTINGS_PATH: &str = "/options-reading.php";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Error,
}

/// A one-line message for the administration area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminNotice {
    pub level: NoticeLevel,
    pub message: String,
    pub link_text: String,
    pub link_url: String,
}

/// Warn when the site does not show the latest posts on its front page.
///
/// Purely informational; nothing is enforced.
pub fn front_page_notice(reading: &ReadingSettings, admin_url: &str) -> Option<AdminNotice> {
    if reading.show_on_front == FrontPageMode::Posts {
        return None;
    }

    Some(AdminNotice {
        level: NoticeLevel::Error,
        message: "Homepages will only work when the site is set to display the latest posts \
                  on the homepage. Please update this setting"
            .to_string(),
        link_text: "here".to_string(),
        link_url: format!("{}{READING_SETTINGS_PATH}", admin_url.trim_end_matches('/')),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_notice_in_latest_posts_mode() {
        assert_eq!(front_page_notice(&ReadingSettings::default(), "/wp-admin"), None);
    }

    #[test]
    fn static_front_page_warns_with_settings_link() {
        let reading = ReadingSettings {
            show_on_front: FrontPageMode::Page,
            ..ReadingSettings::default()
        };

        let notice = front_page_notice(&reading, "https://example.com/wp-admin/").unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(
            notice.link_url,
            "https://example.com/wp-admin/options-reading.php"
        );
        assert!(notice.message.contains("latest posts"));
    }
}
