/// Substrings a title has to contain to be worth reporting.
///
/// Matching is plain, case-sensitive `str::contains`. An empty set matches nothing and
/// an empty string in the set matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteSet {
    favorites: Vec<String>,
}

impl FavoriteSet {
    pub fn new(favorites: Vec<String>) -> Self {
        FavoriteSet { favorites }
    }

    pub fn matches(&self, title: &str) -> bool {
        self.favorites.iter().any(|f| title.contains(f.as_str()))
    }

    /// Keeps the titles that contain any favorite, in their original order.
    pub fn filter<T: AsRef<str>>(&self, titles: impl IntoIterator<Item = T>) -> Vec<T> {
        titles
            .into_iter()
            .filter(|t| self.matches(t.as_ref()))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        FavoriteSet::new(iter.into_iter().map(Into::into).collect())
    }
}
