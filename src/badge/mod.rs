// Badge rendering: build the shields.io URL, download the SVG once,
// write it to disk and optionally rasterize the same bytes to PNG.

pub mod download;
pub mod raster;
pub mod url;

use std::path::PathBuf;

use anyhow::Result;
use reqwest::Url;
use tracing::info;

use self::download::{write_badge, BadgeClient};
use self::url::{badge_url, BadgeStyle};

/// Where the badge goes and how it looks.
#[derive(Debug, Clone)]
pub struct BadgeTarget {
    pub base_url: String,
    pub style: BadgeStyle,
    pub svg_path: PathBuf,
    /// PNG path and scale. `None` skips rasterization.
    pub png: Option<(PathBuf, f32)>,
}

/// Files produced by a badge render.
#[derive(Debug, Clone)]
pub struct RenderedBadge {
    pub url: Url,
    pub svg_path: PathBuf,
    pub svg_bytes: usize,
    pub png_path: Option<PathBuf>,
}

/// Fetch the badge for `count` and write the configured outputs.
///
/// A failed download aborts before anything is written or converted.
pub async fn render(client: &BadgeClient, target: &BadgeTarget, count: u64) -> Result<RenderedBadge> {
    let url = badge_url(&target.base_url, &target.style, count)?;
    info!(url = %url, "Fetching badge");

    let svg = client.fetch(&url).await?;
    write_badge(&target.svg_path, &svg)?;

    let png_path = match &target.png {
        Some((path, scale)) => {
            let png = raster::rasterize(&svg, *scale)?;
            write_badge(path, &png)?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(RenderedBadge {
        url,
        svg_path: target.svg_path.clone(),
        svg_bytes: svg.len(),
        png_path,
    })
}
