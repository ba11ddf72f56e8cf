use serde::Serialize;

use super::ViewSettings;
use crate::api::Publication;
use crate::helpers::current_year;

/// `© {year} - {publication title}`
#[derive(Debug, Clone, Serialize)]
pub struct FooterView {
    pub copyright: String,
}

impl FooterView {
    pub fn new(publication: &Publication, settings: &ViewSettings) -> Self {
        Self {
            copyright: format!(
                "\u{a9} {} - {}",
                current_year(settings.tz),
                publication.title
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_footer_copyright() {
        let publication = Publication {
            title: "abel.enekes".to_string(),
            ..Default::default()
        };
        let footer = FooterView::new(&publication, &ViewSettings::default());
        let year = chrono::Utc::now().year();
        assert_eq!(footer.copyright, format!("© {} - abel.enekes", year));
    }
}
