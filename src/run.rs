use crate::configuration::Settings;
use crate::listing::{Extractor, ListingClient};
use crate::models::{ComicItem, FavoriteSet};
use chrono::NaiveDate;
use log::{debug, info};
use std::io::{self, Write};

pub const HEADER: &str = "本日発売のコミック一覧";

/// Every item on today's listing. A failed fetch yields an empty list without
/// attempting extraction.
pub async fn retrieve_comics(
    settings: &Settings,
    today: NaiveDate,
) -> anyhow::Result<Vec<ComicItem>> {
    let client = ListingClient::new(settings)?;
    let Some(document) = client.fetch_document().await else {
        debug!("No listing document, nothing to extract");
        return Ok(Vec::new());
    };

    let items = Extractor::new(today, settings.malformed_items).extract_items(Some(&document))?;
    info!("Found {} comics on the listing", items.len());
    Ok(items)
}

/// Today's listing narrowed down to the configured favorites.
pub async fn retrieve_today_comics(
    settings: &Settings,
    today: NaiveDate,
) -> anyhow::Result<Vec<ComicItem>> {
    let items = retrieve_comics(settings, today).await?;
    let favorites = FavoriteSet::new(settings.favorite_titles.clone());
    debug!("Favorites {:?}", settings.favorite_titles);

    let matched = favorites.filter(items);
    info!("{} comics match your favorites", matched.len());
    Ok(matched)
}

pub fn write_report<W: Write, T: AsRef<str>>(out: &mut W, titles: &[T]) -> io::Result<()> {
    writeln!(out, "{}", HEADER)?;
    for title in titles {
        writeln!(out, "{}", title.as_ref())?;
    }
    out.flush()
}

/// Runs the pipeline and writes the report to `out`. A failed fetch still writes the
/// header; only a configuration or extraction error returns `Err`.
pub async fn run<W: Write>(
    settings: Settings,
    show_all: bool,
    today: NaiveDate,
    out: &mut W,
) -> anyhow::Result<()> {
    let comics = if show_all {
        retrieve_comics(&settings, today).await?
    } else {
        retrieve_today_comics(&settings, today).await?
    };

    write_report(out, &comics)?;
    Ok(())
}
