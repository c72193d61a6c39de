use chrono::NaiveDate;

/// One entry on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComicItem {
    pub title: String,
    pub release_date: Option<NaiveDate>,
}

impl ComicItem {
    pub fn new(title: impl Into<String>) -> Self {
        ComicItem {
            title: title.into(),
            release_date: None,
        }
    }
}

impl AsRef<str> for ComicItem {
    fn as_ref(&self) -> &str {
        &self.title
    }
}
