//! Chapter command implementation
//!
//! This module walks BLFS chapter indexes. For each chapter it fetches
//! `<base>/<chapter>/`, collects the package pages linked from it and prints
//! each of them in link order.

use log::{debug, info};
use std::io::Write;

use crate::{errors::AppError, fetcher::PageFetcher, html::extract_package_links};

/// Build the URL of a chapter index page
pub fn chapter_index_url(base_url: &str, chapter: &str) -> String {
    format!("{}/{}/", base_url.trim_end_matches('/'), chapter)
}

/// Build the URL of a package page linked from a chapter index
pub fn package_url(base_url: &str, chapter: &str, href: &str) -> String {
    format!("{}/{}/{}", base_url.trim_end_matches('/'), chapter, href)
}

/// Print every package page of one chapter
///
/// This function:
/// 1. Fetches the chapter index
/// 2. Collects the `.html` links on it, minus the `index.html` self-reference
/// 3. Prints each linked package page, one after the other
///
/// # Arguments
///
/// * `fetcher` - The page fetcher to use for every request
/// * `chapter` - The chapter identifier, a path segment of the book
/// * `out` - Where the package pages are written
///
/// # Errors
///
/// Returns an error if the chapter is empty, or if fetching or printing any
/// page fails. Pages after the failing one are not fetched.
pub async fn walk_chapter<W: Write>(
    fetcher: &PageFetcher,
    chapter: &str,
    out: &mut W,
) -> Result<(), AppError> {
    if chapter.trim().is_empty() {
        return Err(AppError::InvalidChapter {
            chapter: chapter.to_string(),
        });
    }

    let index_url = chapter_index_url(fetcher.base_url(), chapter);
    info!("Fetching chapter index {}", index_url);

    // The index document is dropped before any package page is fetched
    let links = {
        let index = fetcher.fetch_document(&index_url).await?;
        extract_package_links(&index)?
    };

    debug!("Found {} package pages in chapter {}", links.len(), chapter);

    for href in links {
        let url = package_url(fetcher.base_url(), chapter, &href);
        fetcher.print_package(&url, out).await?;
    }

    Ok(())
}

/// Print every package page of each chapter, in the order given
///
/// # Errors
///
/// The first failing chapter aborts the run; later chapters are not fetched.
pub async fn run_chapters<W: Write>(
    fetcher: &PageFetcher,
    chapters: &[String],
    out: &mut W,
) -> Result<(), AppError> {
    for chapter in chapters {
        walk_chapter(fetcher, chapter, out).await?;
    }

    out.flush()?;
    info!("Processed {} chapter(s)", chapters.len());
    Ok(())
}
