use crate::core::constants::{NAVBAR_SOLID_OFFSET, SPY_SECTION_LEAD};

/// Position of a page section in content coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

/// The last section (in document order) whose lead-in line the offset has
/// passed, or None above the first one.
pub fn active_section(offset: f32, sections: &[SectionBounds]) -> Option<&str> {
    let mut current = None;
    for s in sections {
        if offset >= s.top - s.height * SPY_SECTION_LEAD {
            current = Some(s.id.as_str());
        }
    }
    current
}

#[inline]
pub fn navbar_is_solid(offset: f32) -> bool {
    offset > NAVBAR_SOLID_OFFSET
}

/// Remembers the last result so the DOM is only touched on change.
#[derive(Default, Debug)]
pub struct ScrollSpy {
    sections: Vec<SectionBounds>,
    active: Option<String>,
    solid: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SpyChange {
    Active(Option<String>),
    Navbar { solid: bool },
}

impl ScrollSpy {
    pub fn new(sections: Vec<SectionBounds>) -> Self {
        Self {
            sections,
            active: None,
            solid: false,
        }
    }

    pub fn set_sections(&mut self, sections: Vec<SectionBounds>) {
        self.sections = sections;
    }

    pub fn sections(&self) -> &[SectionBounds] {
        &self.sections
    }

    pub fn section_top(&self, id: &str) -> Option<f32> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.top)
    }

    pub fn update(&mut self, offset: f32) -> Vec<SpyChange> {
        let mut changes = Vec::new();
        let active = active_section(offset, &self.sections).map(str::to_string);
        if active != self.active {
            log::debug!("[spy] active section {:?}", active);
            self.active = active.clone();
            changes.push(SpyChange::Active(active));
        }
        let solid = navbar_is_solid(offset);
        if solid != self.solid {
            self.solid = solid;
            changes.push(SpyChange::Navbar { solid });
        }
        changes
    }
}
