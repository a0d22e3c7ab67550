//! Static section table.
//!
//! Section ids are part of the news site's listing contract and never change
//! between runs.

use serde::Serialize;

/// A news category and its listing section id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Section {
    /// Listing endpoint `sid` value
    pub id: u32,
    /// Category name as shown on the site
    pub display_name: &'static str,
}

/// All sections, in presentation order.
pub const SECTIONS: [Section; 6] = [
    Section::new(100, "정치"),
    Section::new(101, "경제"),
    Section::new(102, "사회"),
    Section::new(103, "생활/문화"),
    Section::new(105, "IT/과학"),
    Section::new(104, "세계"),
];

impl Section {
    /// Create a section entry.
    pub const fn new(id: u32, display_name: &'static str) -> Self {
        Self { id, display_name }
    }

    /// Look up a section by its display name.
    pub fn from_name(name: &str) -> Option<Section> {
        let name = name.trim();
        SECTIONS
            .iter()
            .find(|s| s.display_name == name || s.file_stem() == name)
            .copied()
    }

    /// Look up a section by its listing id.
    pub fn from_id(id: u32) -> Option<Section> {
        SECTIONS.iter().find(|s| s.id == id).copied()
    }

    /// Resolve either a numeric id or a display name.
    pub fn resolve(key: &str) -> Option<Section> {
        match key.trim().parse::<u32>() {
            Ok(id) => Self::from_id(id),
            Err(_) => Self::from_name(key),
        }
    }

    /// File-system safe name (`/` replaced with `_`).
    pub fn file_stem(&self) -> String {
        self.display_name.replace('/', "_")
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_six_sections_with_unique_ids() {
        let ids: HashSet<u32> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_presentation_order() {
        let names: Vec<&str> = SECTIONS.iter().map(|s| s.display_name).collect();
        assert_eq!(names, vec!["정치", "경제", "사회", "생활/문화", "IT/과학", "세계"]);
    }

    #[test]
    fn test_lookup_by_name_and_stem() {
        assert_eq!(Section::from_name("IT/과학").map(|s| s.id), Some(105));
        assert_eq!(Section::from_name("생활_문화").map(|s| s.id), Some(103));
        assert!(Section::from_name("스포츠").is_none());
    }

    #[test]
    fn test_resolve_accepts_id_or_name() {
        assert_eq!(Section::resolve("104").map(|s| s.display_name), Some("세계"));
        assert_eq!(Section::resolve(" 정치 ").map(|s| s.id), Some(100));
        assert!(Section::resolve("999").is_none());
    }

    #[test]
    fn test_file_stem_replaces_slash() {
        let section = Section::from_id(105).unwrap();
        assert_eq!(section.file_stem(), "IT_과학");
    }
}
