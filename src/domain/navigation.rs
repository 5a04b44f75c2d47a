// Page sections and scroll-driven sidebar tracking
use serde::{Deserialize, Serialize};

/// Vertical offset (px from viewport top) a section must span to become active
pub const ACTIVE_OFFSET_PX: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Overview,
    Competitors,
    Growth,
    News,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Overview,
        Section::Competitors,
        Section::Growth,
        Section::News,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Competitors => "competitors",
            Section::Growth => "growth",
            Section::News => "news",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Competitors => "Competitors",
            Section::Growth => "Growth",
            Section::News => "News",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Overview => "📊",
            Section::Competitors => "🏆",
            Section::Growth => "📈",
            Section::News => "📰",
        }
    }
}

/// Bounding box of a rendered section, relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SectionBounds {
    pub id: Section,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn spans(&self, offset: f64) -> bool {
        self.top <= offset && self.bottom >= offset
    }
}

/// Section spanning `offset`. Sections are tested in order and the last match wins.
pub fn active_section(bounds: &[SectionBounds], offset: f64) -> Option<Section> {
    bounds
        .iter()
        .rev()
        .find(|section| section.spans(offset))
        .map(|section| section.id)
}

#[derive(Debug, Clone, Default)]
pub struct Sidebar {
    active: Section,
}

impl Sidebar {
    pub fn active(&self) -> Section {
        self.active
    }

    /// Recompute the active section for one scroll event; no match keeps the current one
    pub fn on_scroll(&mut self, bounds: &[SectionBounds]) -> Section {
        if let Some(section) = active_section(bounds, ACTIVE_OFFSET_PX) {
            self.active = section;
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(id: Section, top: f64, bottom: f64) -> SectionBounds {
        SectionBounds { id, top, bottom }
    }

    #[test]
    fn test_active_section_spanning_offset() {
        let layout = [
            bounds(Section::Overview, -800.0, -20.0),
            bounds(Section::Competitors, -20.0, 600.0),
            bounds(Section::Growth, 600.0, 1400.0),
        ];
        assert_eq!(active_section(&layout, ACTIVE_OFFSET_PX), Some(Section::Competitors));
    }

    #[test]
    fn test_active_section_boundaries_are_inclusive() {
        let layout = [bounds(Section::Growth, 150.0, 900.0)];
        assert_eq!(active_section(&layout, 150.0), Some(Section::Growth));
        let layout = [bounds(Section::News, -300.0, 150.0)];
        assert_eq!(active_section(&layout, 150.0), Some(Section::News));
    }

    #[test]
    fn test_last_match_wins() {
        let layout = [
            bounds(Section::Growth, 0.0, 150.0),
            bounds(Section::News, 150.0, 700.0),
        ];
        assert_eq!(active_section(&layout, 150.0), Some(Section::News));
    }

    #[test]
    fn test_sidebar_keeps_section_without_match() {
        let mut sidebar = Sidebar::default();
        assert_eq!(sidebar.active(), Section::Overview);

        sidebar.on_scroll(&[bounds(Section::News, 100.0, 400.0)]);
        assert_eq!(sidebar.active(), Section::News);

        sidebar.on_scroll(&[bounds(Section::Growth, 300.0, 400.0)]);
        assert_eq!(sidebar.active(), Section::News);
    }

    #[test]
    fn test_section_bounds_from_json() {
        let parsed: Vec<SectionBounds> =
            serde_json::from_str(r#"[{"id":"growth","top":10.5,"bottom":900}]"#).unwrap();
        assert_eq!(parsed[0].id, Section::Growth);
        assert_eq!(parsed[0].bottom, 900.0);
    }
}
