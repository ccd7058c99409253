use crate::config::Options;
use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub edit_url: Option<String>,
    pub present_url: Option<String>,
}

impl IndexTemplate {
    pub fn new(options: &Options) -> Self {
        IndexTemplate {
            edit_url: options.edit_url.clone(),
            present_url: options.present_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IndexTemplate;
    use askama::Template;

    #[test]
    fn renders_configured_links() {
        let html = IndexTemplate {
            edit_url: Some("https://docs.google.com/presentation/d/abc/edit".to_string()),
            present_url: None,
        }
        .render()
        .unwrap();
        assert!(html.contains("<title>slides-archiver</title>"));
        assert!(html.contains("href=\"https://docs.google.com/presentation/d/abc/edit\""));
        assert!(html.contains("add slides"));
        assert!(!html.contains("<button>present</button>"));
    }

    #[test]
    fn escapes_link_values() {
        let html = IndexTemplate {
            edit_url: None,
            present_url: Some("https://example.com/pub?start=false&loop=true\"><script>".to_string()),
        }
        .render()
        .unwrap();
        assert!(html.contains("start=false&amp;loop=true"));
        assert!(!html.contains("<script>"));
    }
}
