use std::rc::Rc;

use dioxus::prelude::*;
use gloo_events::EventListener;
use tracing::{debug, error};

use site::section::{Section, active_section};

// current scroll position plus the document offset of every anchor
//
// anchors that are not in the document come back as None
fn measure_sections() -> Option<(f64, Vec<(Section, Option<f64>)>)> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let document = window.document()?;

    let offsets = Section::ALL
        .into_iter()
        .map(|section| {
            let top = document
                .get_element_by_id(section.anchor())
                .map(|element| element.get_bounding_client_rect().top() + scroll_y);
            (section, top)
        })
        .collect();

    Some((scroll_y, offsets))
}

// the section to switch to, or None when the current one still holds
fn next_section<I>(current: Section, scroll_y: f64, offsets: I) -> Option<Section>
where
    I: IntoIterator<Item = (Section, Option<f64>)>,
{
    let next = active_section(scroll_y, offsets);
    (next != current).then_some(next)
}

// tracks which section the viewport is in
//
// the returned signal is only ever written by the scroll listener, which is
// registered on first render and removed along with the calling component
pub fn use_active_section() -> ReadOnlySignal<Section> {
    let mut active = use_signal(Section::default);

    use_hook(move || {
        let Some(window) = web_sys::window() else {
            error!("no global window exists, scroll tracking disabled");
            return Rc::new(None);
        };

        let listener = EventListener::new(&window, "scroll", move |_| {
            let Some((scroll_y, offsets)) = measure_sections() else {
                return;
            };

            let current = *active.peek();
            if let Some(next) = next_section(current, scroll_y, offsets) {
                debug!(section = %next, scroll_y, "active section changed");
                active.set(next);
            }
        });

        Rc::new(Some(listener))
    });

    ReadOnlySignal::new(active)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets() -> Vec<(Section, Option<f64>)> {
        vec![
            (Section::Home, Some(0.0)),
            (Section::Projects, Some(800.0)),
            (Section::Skills, Some(1600.0)),
            (Section::Contact, Some(2400.0)),
        ]
    }

    #[test]
    fn test_unchanged_section_is_not_rewritten() {
        assert_eq!(next_section(Section::Home, 0.0, offsets()), None);
        assert_eq!(next_section(Section::Contact, 3000.0, offsets()), None);
    }

    #[test]
    fn test_changed_section_is_reported() {
        assert_eq!(
            next_section(Section::Home, 1450.0, offsets()),
            Some(Section::Skills)
        );
        assert_eq!(
            next_section(Section::Skills, 0.0, offsets()),
            Some(Section::Home)
        );
    }

    #[test]
    fn test_missing_anchor_keeps_previous_match() {
        let mut offsets = offsets();
        offsets[2] = (Section::Skills, None);

        assert_eq!(next_section(Section::Projects, 1450.0, offsets), None);
    }
}
