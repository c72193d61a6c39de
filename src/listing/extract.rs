use crate::configuration::MalformedItemPolicy;
use crate::error::ExtractError;
use crate::listing::release_date::parse_release_date;
use crate::models::ComicItem;
use chrono::NaiveDate;
use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};

pub const ITEM_SELECTOR: &str = "li.item";
pub const NAME_SELECTOR: &str = ".name";
pub const DATE_SELECTOR: &str = ".date";

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Pulls [`ComicItem`]s out of a parsed listing page.
pub struct Extractor {
    item: Selector,
    name: Selector,
    date: Selector,
    today: NaiveDate,
    policy: MalformedItemPolicy,
}

impl Extractor {
    /// `today` supplies the year for release dates that only carry month and day.
    pub fn new(today: NaiveDate, policy: MalformedItemPolicy) -> Self {
        Extractor {
            item: selector(ITEM_SELECTOR),
            name: selector(NAME_SELECTOR),
            date: selector(DATE_SELECTOR),
            today,
            policy,
        }
    }

    /// Returns the page's items in document order. A missing document yields no items.
    pub fn extract_items(
        &self,
        document: Option<&Html>,
    ) -> Result<Vec<ComicItem>, ExtractError> {
        let Some(document) = document else {
            return Ok(Vec::new());
        };

        let mut items = Vec::new();
        for (index, element) in document.select(&self.item).enumerate() {
            match self.extract_item(index, element) {
                Ok(item) => items.push(item),
                Err(e) => match self.policy {
                    MalformedItemPolicy::FailFast => return Err(e),
                    MalformedItemPolicy::Skip => warn!("Skipping listing item: {}", e),
                },
            }
        }

        debug!("Extracted {} items", items.len());
        Ok(items)
    }

    pub fn extract_item(
        &self,
        index: usize,
        element: ElementRef,
    ) -> Result<ComicItem, ExtractError> {
        let name = element
            .select(&self.name)
            .next()
            .ok_or(ExtractError::MissingName {
                index,
                selector: NAME_SELECTOR,
            })?;
        let title = text_of(name);

        let release_date = element.select(&self.date).next().and_then(|date| {
            match parse_release_date(text_of(date).trim(), self.today) {
                Ok(d) => d,
                Err(e) => {
                    warn!("Ignoring release date of \"{}\": {}", title, e);
                    None
                }
            }
        });

        Ok(ComicItem { title, release_date })
    }
}

/// Concatenated text of the element and its descendants, whitespace included.
fn text_of(element: ElementRef) -> String {
    element.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 4).unwrap()
    }

    fn titles(items: Vec<ComicItem>) -> Vec<String> {
        items.into_iter().map(|i| i.title).collect()
    }

    const LISTING: &str = r#"
        <html><body>
        <ul class="list">
            <li class="item"><a href="/1"><div class="name">ウォーズ完結編</div><span class="date"> 1月4日 </span></a></li>
            <li class="item"><a href="/2"><div class="name"> 料理漫画 </div></a></li>
            <li class="item new"><div class="cover"></div><div class="name">スーパー<b>ヒーロー</b>外伝</div></li>
        </ul>
        <li class="ad"><div class="name">広告</div></li>
        </body></html>
    "#;

    #[test]
    fn extracts_one_title_per_item_in_order() {
        let doc = Html::parse_document(LISTING);
        let items = Extractor::new(today(), MalformedItemPolicy::FailFast)
            .extract_items(Some(&doc))
            .unwrap();

        assert_eq!(
            vec!["ウォーズ完結編", " 料理漫画 ", "スーパーヒーロー外伝"],
            titles(items)
        );
    }

    #[test]
    fn title_keeps_surrounding_whitespace() {
        let doc = Html::parse_document(
            r#"<ul><li class="item"><div class="name">
                スーパー外伝 </div></li></ul>"#,
        );
        let items = Extractor::new(today(), MalformedItemPolicy::FailFast)
            .extract_items(Some(&doc))
            .unwrap();

        assert_eq!(vec!["\n                スーパー外伝 "], titles(items));
    }

    #[test]
    fn reads_release_dates_when_present() {
        let doc = Html::parse_document(LISTING);
        let items = Extractor::new(today(), MalformedItemPolicy::Skip)
            .extract_items(Some(&doc))
            .unwrap();

        assert_eq!(NaiveDate::from_ymd_opt(2025, 1, 4), items[0].release_date);
        assert_eq!(None, items[1].release_date);
    }

    #[test]
    fn invalid_release_date_keeps_the_title() {
        let doc = Html::parse_document(
            r#"<ul><li class="item"><div class="name">猫</div><p class="date">13月1日</p></li></ul>"#,
        );
        let items = Extractor::new(today(), MalformedItemPolicy::FailFast)
            .extract_items(Some(&doc))
            .unwrap();

        assert_eq!(vec![ComicItem::new("猫")], items);
    }

    #[test]
    fn page_without_items_is_empty() {
        let doc = Html::parse_document("<html><body><ul><li>nothing</li></ul></body></html>");
        let items = Extractor::new(today(), MalformedItemPolicy::FailFast)
            .extract_items(Some(&doc))
            .unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn missing_document_is_empty() {
        let items = Extractor::new(today(), MalformedItemPolicy::FailFast)
            .extract_items(None)
            .unwrap();
        assert!(items.is_empty());
    }

    const MALFORMED: &str = r#"
        <ul>
            <li class="item"><div class="name">一巻</div></li>
            <li class="item"><div class="title">名前なし</div></li>
            <li class="item"><div class="name">三巻</div></li>
        </ul>
    "#;

    #[test]
    fn fail_fast_stops_at_first_malformed_item() {
        let doc = Html::parse_document(MALFORMED);
        let err = Extractor::new(today(), MalformedItemPolicy::FailFast)
            .extract_items(Some(&doc))
            .unwrap_err();

        assert_eq!(
            ExtractError::MissingName {
                index: 1,
                selector: NAME_SELECTOR
            },
            err
        );
    }

    #[test]
    fn skip_drops_only_the_malformed_item() {
        let doc = Html::parse_document(MALFORMED);
        let items = Extractor::new(today(), MalformedItemPolicy::Skip)
            .extract_items(Some(&doc))
            .unwrap();

        assert_eq!(vec!["一巻", "三巻"], titles(items));
    }
}
