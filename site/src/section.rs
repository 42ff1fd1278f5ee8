use std::{fmt, str::FromStr};

use tracing::trace;

// a section counts as reached once its top edge is within this many pixels
// of the top of the viewport
pub const LOOKAHEAD_PX: f64 = 200.0;

// the in-page anchors, in document order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    // dom id and url fragment
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.anchor())
    }
}

impl FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let anchor = s.strip_prefix('#').unwrap_or(s);

        Section::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor)
            .ok_or_else(|| anyhow::Error::msg(format!("unknown section anchor: {s}")))
    }
}

/// Picks the section the viewport is currently in.
///
/// `offsets` pairs each section with the measured top offset of its anchor
/// element, or `None` if the element could not be found; those are skipped.
/// Among the sections whose top is at or above `scroll_y + LOOKAHEAD_PX`,
/// the one lowest on the page wins. Ties go to the later entry. Falls back to
/// [`Section::Home`] when nothing qualifies.
pub fn active_section<I>(scroll_y: f64, offsets: I) -> Section
where
    I: IntoIterator<Item = (Section, Option<f64>)>,
{
    let mut current: Option<(Section, f64)> = None;

    for (section, top) in offsets {
        let top = match top {
            Some(top) if top.is_finite() => top,
            _ => {
                trace!(section = %section, "anchor not measured, skipping");
                continue;
            }
        };

        if scroll_y < top - LOOKAHEAD_PX {
            continue;
        }

        match current {
            Some((_, best)) if top < best => {}
            _ => current = Some((section, top)),
        }
    }

    current.map(|(section, _)| section).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evenly_spaced() -> Vec<(Section, Option<f64>)> {
        vec![
            (Section::Home, Some(0.0)),
            (Section::Projects, Some(800.0)),
            (Section::Skills, Some(1600.0)),
            (Section::Contact, Some(2400.0)),
        ]
    }

    #[test]
    fn test_active_section_at_known_offsets() {
        let cases = [
            (0.0, Section::Home),
            (650.0, Section::Projects),
            (1450.0, Section::Skills),
            (2250.0, Section::Contact),
            (3000.0, Section::Contact),
        ];

        for (scroll_y, expected) in cases {
            assert_eq!(
                active_section(scroll_y, evenly_spaced()),
                expected,
                "scroll_y = {scroll_y}"
            );
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(active_section(599.0, evenly_spaced()), Section::Home);
        assert_eq!(active_section(600.0, evenly_spaced()), Section::Projects);
    }

    #[test]
    fn test_always_a_member_of_the_set() {
        let mut scroll_y = -500.0;
        while scroll_y < 5000.0 {
            let section = active_section(scroll_y, evenly_spaced());
            assert!(Section::ALL.contains(&section));
            scroll_y += 37.5;
        }
    }

    #[test]
    fn test_defaults_to_home() {
        assert_eq!(active_section(1000.0, Vec::<(Section, Option<f64>)>::new()), Section::Home);

        // home pushed far down the page, nothing reached yet
        let offsets = vec![(Section::Home, Some(900.0)), (Section::Projects, Some(1800.0))];
        assert_eq!(active_section(0.0, offsets), Section::Home);
    }

    #[test]
    fn test_missing_anchor_is_skipped() {
        let mut offsets = evenly_spaced();
        offsets[2] = (Section::Skills, None);

        // skills is gone, so projects stays active until contact is reached
        assert_eq!(active_section(1450.0, offsets.clone()), Section::Projects);
        assert_eq!(active_section(2250.0, offsets), Section::Contact);
    }

    #[test]
    fn test_non_finite_offset_is_skipped() {
        let mut offsets = evenly_spaced();
        offsets[3] = (Section::Contact, Some(f64::NAN));

        assert_eq!(active_section(3000.0, offsets), Section::Skills);
    }

    #[test]
    fn test_list_order_does_not_matter() {
        let mut offsets = evenly_spaced();
        offsets.reverse();

        assert_eq!(active_section(650.0, offsets.clone()), Section::Projects);
        assert_eq!(active_section(3000.0, offsets), Section::Contact);
    }

    #[test]
    fn test_anchor_parsing() {
        for section in Section::ALL {
            assert_eq!(section.anchor().parse::<Section>().unwrap(), section);
            assert_eq!(section.href().parse::<Section>().unwrap(), section);
        }

        assert!("about".parse::<Section>().is_err());
    }

    #[test]
    fn test_document_order() {
        let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["home", "projects", "skills", "contact"]);
        assert_eq!(Section::default(), Section::Home);
    }
}
