use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use minijinja::Value;
use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{AppError, Era, EraResearch, ResearchDoc, SiteConfig, webp_name};
use crate::ports::{SiteStore, TemplateStore};
use crate::services::renderer;

/// Options for the build command.
#[derive(Debug, Default, Clone)]
pub struct BuildOptions {
    /// Override the configured output directory.
    pub out: Option<PathBuf>,
}

/// Summary of a completed build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub pages: usize,
    pub assets_copied: usize,
}

#[derive(Serialize)]
struct SiteCtx {
    title: String,
    base_url: String,
}

#[derive(Serialize)]
struct GalleryImage {
    position: u32,
    full: String,
    thumb: String,
}

#[derive(Serialize)]
struct EraCard {
    index: u8,
    title: String,
    slug: String,
    summary: String,
    thumb: Option<String>,
}

#[derive(Serialize)]
struct EraLink {
    title: String,
    slug: String,
}

#[derive(Serialize)]
struct IndexCtx {
    site: SiteCtx,
    eras: Vec<EraCard>,
}

#[derive(Serialize)]
struct EraPageCtx {
    site: SiteCtx,
    index: u8,
    title: String,
    slug: String,
    summary: String,
    sections: Vec<crate::domain::Section>,
    credits: Vec<String>,
    images: Vec<GalleryImage>,
    prev: Option<EraLink>,
    next: Option<EraLink>,
}

#[derive(Serialize)]
struct NotFoundCtx {
    site: SiteCtx,
}

#[derive(Serialize)]
struct SitemapCtx {
    urls: Vec<String>,
    lastmod: String,
}

#[derive(Serialize)]
struct RobotsCtx {
    sitemap_url: String,
}

/// Execute the build command: render every page into the output directory
/// and copy the era WebP assets alongside them.
pub fn execute<S, T>(ctx: &AppContext<S, T>, options: BuildOptions) -> Result<BuildReport, AppError>
where
    S: SiteStore,
    T: TemplateStore,
{
    let config = ctx.store().load_config()?;
    let research = ctx.store().load_research()?;

    // Build is strict about totality; doctor explains gaps in detail.
    for era in Era::ALL {
        if research.for_era(era).is_none() {
            return Err(AppError::ResearchEntryMissing { index: era.index(), title: era.title() });
        }
    }

    let out = options.out.unwrap_or_else(|| ctx.store().root().join(&config.site.output_dir));
    if out.exists() {
        fs::remove_dir_all(&out)?;
    }
    fs::create_dir_all(&out)?;

    let env = renderer::build_environment(ctx.templates())?;
    let site = site_ctx(&config);
    let mut pages = 0;

    // Landing page
    let index_ctx = IndexCtx { site: site_ctx(&config), eras: era_cards(ctx, &research, &config) };
    write_page(&out.join("index.html"), &renderer::render(&env, "index.html", &Value::from_serialize(&index_ctx))?)?;
    pages += 1;

    // One page per era
    for era in Era::ALL {
        let entry = research
            .for_era(era)
            .ok_or(AppError::ResearchEntryMissing { index: era.index(), title: era.title() })?;
        let page_ctx = era_page_ctx(ctx, &config, era, entry);
        let html = renderer::render(&env, "era.html", &Value::from_serialize(&page_ctx))?;
        write_page(&out.join(era.slug()).join("index.html"), &html)?;
        pages += 1;
    }

    // Not-found page: the recoverable face of a slug lookup miss
    let not_found = NotFoundCtx { site };
    write_page(&out.join("404.html"), &renderer::render(&env, "404.html", &Value::from_serialize(&not_found))?)?;
    pages += 1;

    // Sitemap and robots
    let sitemap_ctx = SitemapCtx {
        urls: sitemap_urls(&config),
        lastmod: Local::now().format("%Y-%m-%d").to_string(),
    };
    write_page(&out.join("sitemap.xml"), &renderer::render(&env, "sitemap.xml", &Value::from_serialize(&sitemap_ctx))?)?;

    let robots_ctx = RobotsCtx { sitemap_url: absolute_url(&config, "sitemap.xml") };
    write_page(&out.join("robots.txt"), &renderer::render(&env, "robots.txt", &Value::from_serialize(&robots_ctx))?)?;

    // Static files (stylesheet)
    for file in ctx.templates().static_files() {
        write_page(&out.join(&file.path), &file.content)?;
    }

    let assets_copied = copy_era_assets(ctx, &config, &out)?;

    Ok(BuildReport { output_dir: out, pages, assets_copied })
}

fn site_ctx(config: &SiteConfig) -> SiteCtx {
    SiteCtx {
        title: config.site.title.clone(),
        base_url: config.site.base_url.as_str().trim_end_matches('/').to_string(),
    }
}

/// `{base_url}/{path}` with exactly one slash at the seam.
fn absolute_url(config: &SiteConfig, path: &str) -> String {
    format!("{}/{}", config.site.base_url.as_str().trim_end_matches('/'), path)
}

fn sitemap_urls(config: &SiteConfig) -> Vec<String> {
    let mut urls = vec![absolute_url(config, "")];
    urls.extend(Era::ALL.iter().map(|era| absolute_url(config, &format!("{}/", era.slug()))));
    urls
}

/// Gallery entries for the WebP files actually present in the workspace.
fn gallery_images<S: SiteStore, T: TemplateStore>(
    ctx: &AppContext<S, T>,
    config: &SiteConfig,
    era: Era,
) -> Vec<GalleryImage> {
    let era_dir = ctx.store().era_dir(era);
    (1..=config.images.per_era)
        .filter(|n| era_dir.join(webp_name(*n)).exists())
        .map(|n| GalleryImage {
            position: n,
            full: format!("/assets/{}/{}", era.folder_name(), webp_name(n)),
            thumb: format!("/assets/{}/thumbs/{}", era.folder_name(), webp_name(n)),
        })
        .collect()
}

fn era_cards<S: SiteStore, T: TemplateStore>(
    ctx: &AppContext<S, T>,
    research: &ResearchDoc,
    config: &SiteConfig,
) -> Vec<EraCard> {
    Era::ALL
        .into_iter()
        .map(|era| {
            let summary = research.for_era(era).map(|e| e.summary.clone()).unwrap_or_default();
            let thumb = gallery_images(ctx, config, era).first().map(|img| img.thumb.clone());
            EraCard {
                index: era.index(),
                title: era.title().to_string(),
                slug: era.slug().to_string(),
                summary,
                thumb,
            }
        })
        .collect()
}

fn era_link(era: Era) -> EraLink {
    EraLink { title: era.title().to_string(), slug: era.slug().to_string() }
}

fn era_page_ctx<S: SiteStore, T: TemplateStore>(
    ctx: &AppContext<S, T>,
    config: &SiteConfig,
    era: Era,
    entry: &EraResearch,
) -> EraPageCtx {
    EraPageCtx {
        site: site_ctx(config),
        index: era.index(),
        title: entry.title.clone(),
        slug: era.slug().to_string(),
        summary: entry.summary.clone(),
        sections: entry.sections.clone(),
        credits: entry.image_credits.clone(),
        images: gallery_images(ctx, config, era),
        prev: era.prev().map(era_link),
        next: era.next().map(era_link),
    }
}

fn write_page(path: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Copy per-era WebP files (full and thumbs) into `out/assets/`. Originals
/// are not shipped.
fn copy_era_assets<S: SiteStore, T: TemplateStore>(
    ctx: &AppContext<S, T>,
    config: &SiteConfig,
    out: &Path,
) -> Result<usize, AppError> {
    let mut copied = 0;

    for era in Era::ALL {
        let src_dir = ctx.store().era_dir(era);
        let dest_dir = out.join("assets").join(era.folder_name());

        for n in 1..=config.images.per_era {
            let name = webp_name(n);
            let full_src = src_dir.join(&name);
            if full_src.exists() {
                fs::create_dir_all(&dest_dir)?;
                fs::copy(&full_src, dest_dir.join(&name))?;
                copied += 1;
            }

            let thumb_src = src_dir.join(crate::domain::THUMBS_DIR).join(&name);
            if thumb_src.exists() {
                let thumbs_dest = dest_dir.join(crate::domain::THUMBS_DIR);
                fs::create_dir_all(&thumbs_dest)?;
                fs::copy(&thumb_src, thumbs_dest.join(&name))?;
                copied += 1;
            }
        }
    }

    Ok(copied)
}
