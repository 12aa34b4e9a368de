//! Card and modal HTML fragments.
//!
//! Pure functions from a [`ProjectRecord`] to markup: [`render_card`] for the
//! grid tile, [`render_modal`] for the lightbox dialog. Both are generated
//! with [maud](https://maud.lambda.xyz/) — the same choice as elsewhere in
//! the stack — which matters here more than anywhere: every interpolated
//! metadata value (title, category, description, tech entries, link URLs) is
//! user-authored text and is auto-escaped on interpolation. The single
//! `PreEscaped` in this module is the markdown renderer's output, which does
//! its own escaping internally.
//!
//! ## Gallery flattening
//!
//! The modal gallery is a flat, ordered sequence: cover, then gallery
//! images, then videos. A project with no media gets no gallery section at
//! all — the modal is text-only rather than an empty frame. Prev/next
//! controls and the thumbnail strip appear only when there is more than one
//! item to navigate.
//!
//! ## Video semantics
//!
//! Loop videos are animated-image substitutes: autoplaying, muted, looping,
//! no transport controls. Regular videos are the opposite: controls, no
//! autoplay, metadata preload only.

use crate::markdown;
use crate::media::MediaBundle;
use crate::scan::ProjectRecord;
use maud::{Markup, PreEscaped, html};

/// One entry in the flattened modal gallery.
#[derive(Debug, PartialEq, Eq)]
pub enum GalleryItem<'a> {
    Image { file: &'a str },
    Video { file: &'a str, loop_playback: bool },
}

/// Flatten a media bundle into gallery order: cover, images, videos.
pub fn gallery_items(media: &MediaBundle) -> Vec<GalleryItem<'_>> {
    let mut items = Vec::with_capacity(media.item_count());
    if let Some(cover) = &media.cover {
        items.push(GalleryItem::Image { file: cover });
    }
    for file in &media.images {
        items.push(GalleryItem::Image { file });
    }
    for video in &media.videos {
        items.push(GalleryItem::Video {
            file: &video.file,
            loop_playback: video.loop_playback,
        });
    }
    items
}

fn asset_url(asset_base: &str, slug: &str, file: &str) -> String {
    format!("{}/{}/{}", asset_base, slug, file)
}

/// Render the grid card for one project.
pub fn render_card(record: &ProjectRecord, asset_base: &str) -> Markup {
    let tech = record.tech();
    html! {
        article.project-card data-modal={ "modal-" (record.slug) } {
            div.card-media {
                @if let Some(cover) = &record.media.cover {
                    img src=(asset_url(asset_base, &record.slug, cover))
                        alt=(record.title())
                        loading="lazy";
                } @else {
                    div.card-placeholder aria-hidden="true" {}
                }
            }
            div.card-body {
                span.card-category { (record.category()) }
                h3.card-title { (record.title()) }
                @if let Some(description) = record.description() {
                    p.card-description { (description) }
                }
                @if !tech.is_empty() {
                    div.card-tech {
                        @for entry in &tech {
                            span.tech-badge { (entry) }
                        }
                    }
                }
                @if record.github().is_some() || record.live().is_some() {
                    div.card-links {
                        @if let Some(github) = record.github() {
                            a.card-link href=(github) target="_blank" rel="noopener noreferrer" {
                                "Code"
                            }
                        }
                        @if let Some(live) = record.live() {
                            a.card-link href=(live) target="_blank" rel="noopener noreferrer" {
                                "Live"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Render the lightbox modal for one project.
pub fn render_modal(record: &ProjectRecord, asset_base: &str) -> Markup {
    let items = gallery_items(&record.media);
    let title_id = format!("modal-{}-title", record.slug);
    let tech = record.tech();

    html! {
        div.project-modal id={ "modal-" (record.slug) } hidden {
            div.modal-backdrop data-close="" {}
            div.modal-dialog role="dialog" aria-modal="true" aria-labelledby=(title_id) {
                button.modal-close type="button" aria-label="Close" data-close="" { "\u{00d7}" }
                @if !items.is_empty() {
                    (render_gallery(&items, record, asset_base))
                }
                div.modal-body {
                    span.modal-category { (record.category()) }
                    h2.modal-title id=(title_id) { (record.title()) }
                    @if !tech.is_empty() {
                        div.modal-tech {
                            @for entry in &tech {
                                span.tech-badge { (entry) }
                            }
                        }
                    }
                    div.modal-description {
                        @if !record.body.is_empty() {
                            (PreEscaped(markdown::render(&record.body)))
                        } @else if let Some(description) = record.description() {
                            p { (description) }
                        }
                    }
                    @if record.github().is_some() || record.live().is_some() {
                        div.modal-links {
                            @if let Some(github) = record.github() {
                                a.modal-link href=(github) target="_blank" rel="noopener noreferrer" {
                                    "View code"
                                }
                            }
                            @if let Some(live) = record.live() {
                                a.modal-link href=(live) target="_blank" rel="noopener noreferrer" {
                                    "Visit site"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_gallery(items: &[GalleryItem<'_>], record: &ProjectRecord, asset_base: &str) -> Markup {
    let multiple = items.len() > 1;
    html! {
        div.modal-gallery data-count=(items.len()) {
            div.gallery-stage {
                @for (index, item) in items.iter().enumerate() {
                    figure.gallery-item data-index=(index) hidden[index != 0] {
                        (render_gallery_media(item, record, asset_base))
                    }
                }
            }
            @if multiple {
                button.gallery-prev type="button" aria-label="Previous" { "\u{2039}" }
                button.gallery-next type="button" aria-label="Next" { "\u{203a}" }
                div.gallery-thumbs {
                    @for (index, item) in items.iter().enumerate() {
                        button.gallery-thumb type="button" data-index=(index) {
                            @match item {
                                GalleryItem::Image { file } => {
                                    img src=(asset_url(asset_base, &record.slug, file)) alt="" loading="lazy";
                                }
                                GalleryItem::Video { .. } => {
                                    span.thumb-video aria-hidden="true" { "\u{25b6}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_gallery_media(
    item: &GalleryItem<'_>,
    record: &ProjectRecord,
    asset_base: &str,
) -> Markup {
    html! {
        @match item {
            GalleryItem::Image { file } => {
                img src=(asset_url(asset_base, &record.slug, file)) alt=(record.title()) loading="lazy";
            }
            GalleryItem::Video { file, loop_playback: true } => {
                video src=(asset_url(asset_base, &record.slug, file)) autoplay loop muted playsinline {}
            }
            GalleryItem::Video { file, loop_playback: false } => {
                video src=(asset_url(asset_base, &record.slug, file)) controls preload="metadata" {}
            }
        }
    }
}
