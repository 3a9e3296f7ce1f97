//! Static studio, section, tag and language directories.
//!
//! These are authored alongside the code rather than loaded from the record
//! file. Packs reference studios and sections by `id`.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Studios
// ---------------------------------------------------------------------------

/// Creator of the original (untranslated) content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Studio {
    pub id: &'static str,
    pub name: &'static str,
    /// Image URL, may be empty.
    pub logo: &'static str,
}

pub const STUDIOS: &[Studio] = &[
    Studio {
        id: "mojang",
        name: "Mojang Studios",
        logo: "/images/studios/mojang.png",
    },
    Studio {
        id: "everbloom",
        name: "Everbloom Games",
        logo: "/images/studios/everbloom.webp",
    },
    Studio {
        id: "gamemode-one",
        name: "Gamemode One",
        logo: "/images/studios/gamemodeone.avif",
    },
    Studio {
        id: "noxcrew",
        name: "Noxcrew",
        logo: "/images/studios/Noxcrew.avif",
    },
    Studio {
        id: "shapescapre",
        name: "Shapescape",
        logo: "/images/studios/shapescape.png",
    },
    Studio {
        id: "spark-universe",
        name: "Spark Universe",
        logo: "/placeholder.svg?height=200&width=200&text=PixelHeads",
    },
    Studio {
        id: "cyclone",
        name: "Cyclone",
        logo: "/images/studios/cyclone.png",
    },
    Studio {
        id: "jigarbov",
        name: "Jigarbov",
        logo: "/placeholder.svg",
    },
    Studio {
        id: "blockception",
        name: "Block ception",
        logo: "/images/studios/blockception.png",
    },
    Studio {
        id: "oreville",
        name: "Oreville Studios",
        logo: "",
    },
];

pub fn studio_by_id(studio_id: &str) -> Option<&'static Studio> {
    STUDIOS.iter().find(|s| s.id == studio_id)
}

/// Display name for a pack's `studio` field, falling back to the raw key.
pub fn studio_display_name(studio_id: &str) -> &str {
    studio_by_id(studio_id).map_or(studio_id, |s| s.name)
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// A curated, named grouping of packs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section {
        id: "dlc-content",
        title: "联动地图",
        description: "查看所有 Minecraft 联动地图的翻译包！",
    },
    Section {
        id: "popular-translations",
        title: "必须玩的地图！！",
        description: "个人认为最好玩的地图合集~",
    },
    Section {
        id: "free-maps",
        title: "免费地图一览",
        description: "免费的地图不得玩一玩？",
    },
    Section {
        id: "new-version-mc-explore",
        title: "Minecraft版本主题地图",
        description: "通过这些地图以任务的形式快速了解对应的 Minecraft 版本更新了哪些内容？",
    },
    Section {
        id: "educational-content",
        title: "教育地图",
        description: "在游玩的过程中学习。",
    },
    Section {
        id: "leisure",
        title: "养老休闲地图",
        description: "试一试慢节奏的游戏地图吧！",
    },
];

pub fn section_by_id(section_id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == section_id)
}

/// Section title, or an empty string when the id is unknown.
pub fn section_title_by_id(section_id: &str) -> &'static str {
    section_by_id(section_id).map_or("", |s| s.title)
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// The enumerated tag vocabulary. Filtering tolerates tags outside this list.
pub const TAGS: &[&str] = &[
    "冒险",
    "生存",
    "小游戏",
    "RPG",
    "解密",
    "PvP",
    "休闲",
    "教育",
    "主题公园",
    "剧情",
];

pub fn is_known_tag(tag: &str) -> bool {
    let wanted = tag.to_lowercase();
    TAGS.iter().any(|t| t.to_lowercase() == wanted)
}

// ---------------------------------------------------------------------------
// Languages
// ---------------------------------------------------------------------------

/// Human-readable name for a locale code. Unknown codes are returned as-is.
pub fn language_display_name(code: &str) -> &str {
    match code {
        "cn" => "简体中文",
        "hk" => "繁體中文（香港）",
        "tw" => "繁體中文（台灣）",
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
