use crate::content::parse_post_date;

/// Formats a front matter date for display in `locale`.
///
/// Chinese locales read `2024年1月5日`; everything else reads `January 5, 2024`.
/// Missing or unreadable dates render as an empty string.
pub fn format_post_date(date: Option<&str>, locale: &str) -> String {
    let Some(parsed) = date.and_then(parse_post_date) else {
        return String::new();
    };

    let pattern = if is_chinese_locale(locale) {
        "%Y年%-m月%-d日"
    } else {
        "%B %-d, %Y"
    };
    parsed.format(pattern).to_string()
}

fn is_chinese_locale(locale: &str) -> bool {
    let language = locale.split(['-', '_']).next().unwrap_or(locale);
    language.eq_ignore_ascii_case("zh")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chinese_locale_uses_ymd_characters() {
        assert_eq!(format_post_date(Some("2024-01-05"), "zh-CN"), "2024年1月5日");
        assert_eq!(format_post_date(Some("2024-11-25"), "zh_TW"), "2024年11月25日");
    }

    #[test]
    fn other_locales_use_long_month_names() {
        assert_eq!(format_post_date(Some("2024-01-05"), "en-US"), "January 5, 2024");
    }

    #[test]
    fn missing_dates_render_empty() {
        assert_eq!(format_post_date(None, "zh-CN"), "");
        assert_eq!(format_post_date(Some("someday"), "en-US"), "");
    }
}
