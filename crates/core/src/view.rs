//! Render-ready projections of a pack for card and detail renderers.

use serde::Serialize;

use crate::date::{derive_status, format_display_date, PackStatus};
use crate::directory::{language_display_name, studio_display_name};
use crate::pack::TranslationPack;
use crate::types::CalendarDate;

/// Site name appended to every page title.
pub const SITE_TITLE: &str = "PixelLingual - Minecraft中文翻译社区";

/// Price label for packs that cost nothing.
pub const FREE_LABEL: &str = "免费";

/// Locale code with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageLabel<'a> {
    pub code: &'a str,
    pub name: &'a str,
}

/// A pack plus the derived values a card needs.
///
/// The record fields are flattened so renderers see one object.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackCard<'a> {
    #[serde(flatten)]
    pub pack: &'a TranslationPack,
    #[serde(flatten)]
    pub status: PackStatus,
    pub studio_name: &'a str,
    pub created_display: String,
    pub updated_display: String,
    pub price_label: String,
    pub language_labels: Vec<LanguageLabel<'a>>,
}

/// `免费` for free packs, otherwise `<price> MC`.
pub fn price_label(price: f64) -> String {
    if price == 0.0 {
        FREE_LABEL.to_string()
    } else {
        format!("{price} MC")
    }
}

impl<'a> PackCard<'a> {
    pub fn new(pack: &'a TranslationPack, today: CalendarDate) -> Self {
        Self {
            pack,
            status: derive_status(pack, today),
            studio_name: studio_display_name(&pack.studio),
            created_display: format_display_date(&pack.created_at),
            updated_display: format_display_date(&pack.updated_at),
            price_label: price_label(pack.price),
            language_labels: pack
                .languages
                .iter()
                .map(|code| LanguageLabel {
                    code,
                    name: language_display_name(code),
                })
                .collect(),
        }
    }
}

/// Build cards for a list of packs, all as of the same day.
pub fn cards<'a>(packs: &[&'a TranslationPack], today: CalendarDate) -> Vec<PackCard<'a>> {
    packs.iter().map(|pack| PackCard::new(pack, today)).collect()
}

// ---------------------------------------------------------------------------
// Page metadata
// ---------------------------------------------------------------------------

/// `<head>` metadata for a pack detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
}

impl PageMetadata {
    /// Metadata for `pack`, or the generic listing metadata when it is missing.
    pub fn for_pack(pack: Option<&TranslationPack>) -> Self {
        let Some(pack) = pack else {
            return Self {
                title: format!("翻译包 | {SITE_TITLE}"),
                description: "浏览PixelLingual的Minecraft中文翻译包。找到适合您的高质量游戏内容翻译。"
                    .to_string(),
                keywords: None,
            };
        };

        Self {
            title: format!("{} | {SITE_TITLE}", pack.title),
            description: pack.description.clone(),
            keywords: Some(format!(
                "{} 中文翻译, {}, Minecraft基岩版翻译, {} 翻译",
                pack.title,
                pack.tags.join(", "),
                studio_display_name(&pack.studio),
            )),
        }
    }
}
