//! Company details read from a lead's own website.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

const MAX_NAME_CHARS: usize = 100;
const MAX_DESCRIPTION_CHARS: usize = 200;
const MAX_CONTACTS: usize = 3;

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid selector"));
static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="description"]"#).expect("valid selector"));
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("valid regex")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebsiteProfile {
    pub company_name: String,
    pub description: String,
    /// Up to three distinct addresses, `"; "`-joined, in page order.
    pub additional_contacts: String,
}

impl WebsiteProfile {
    #[must_use]
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);

        let company_name = document
            .select(&TITLE)
            .next()
            .map(|title| company_name_from_title(&title.text().collect::<String>()))
            .unwrap_or_default();

        let description = document
            .select(&META_DESCRIPTION)
            .next()
            .and_then(|meta| meta.value().attr("content"))
            .map(|content| truncate_chars(content, MAX_DESCRIPTION_CHARS))
            .unwrap_or_default();

        let text = document.root_element().text().collect::<String>().to_lowercase();
        let mut contacts: Vec<&str> = Vec::new();
        for m in EMAIL.find_iter(&text) {
            if contacts.len() == MAX_CONTACTS {
                break;
            }
            if !contacts.contains(&m.as_str()) {
                contacts.push(m.as_str());
            }
        }

        Self {
            company_name,
            description,
            additional_contacts: contacts.join("; "),
        }
    }
}

/// Company name from a page title: text before the first `|`, else before
/// the first `-`, trimmed and capped.
fn company_name_from_title(title: &str) -> String {
    let title = title.trim();
    let name = if let Some((head, _)) = title.split_once('|') {
        head.trim()
    } else if let Some((head, _)) = title.split_once('-') {
        head.trim()
    } else {
        title
    };
    truncate_chars(name, MAX_NAME_CHARS)
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_title_description_and_contacts() {
        let html = r#"<html><head>
            <title> Rivers Resort | Riverside cabins - Oregon </title>
            <meta name="description" content="Cabins by the river.">
          </head><body>
            <p>Sales: Sales@Rivers.com</p>
            <p>Help: help@rivers.com</p>
            <p>Again: sales@rivers.com</p>
            <p>Ops: ops@rivers.com</p>
            <p>Late: late@rivers.com</p>
          </body></html>"#;

        let profile = WebsiteProfile::from_html(html);
        assert_eq!(profile.company_name, "Rivers Resort");
        assert_eq!(profile.description, "Cabins by the river.");
        assert_eq!(
            profile.additional_contacts,
            "sales@rivers.com; help@rivers.com; ops@rivers.com"
        );
    }

    #[test]
    fn title_falls_back_to_dash_split() {
        assert_eq!(company_name_from_title("Tideway Hotel - Home"), "Tideway Hotel");
        assert_eq!(company_name_from_title("Bandy Canyon"), "Bandy Canyon");
    }

    #[test]
    fn long_fields_are_capped() {
        let long = "x".repeat(300);
        let html = format!(
            r#"<html><head><title>{long}</title><meta name="description" content="{long}"></head></html>"#
        );
        let profile = WebsiteProfile::from_html(&html);
        assert_eq!(profile.company_name.chars().count(), 100);
        assert_eq!(profile.description.chars().count(), 200);
    }

    #[test]
    fn bare_page_yields_empty_profile() {
        assert_eq!(
            WebsiteProfile::from_html("<p>nothing</p>"),
            WebsiteProfile::default()
        );
    }
}
