//! Scroll-position tracking for the navigation highlight.
//!
//! The page is five vertically stacked sections. A point half a viewport
//! below the scroll offset (the probe) decides which section is "active";
//! the nav reads that through a signal and bolds the matching entry.

use leptos::ev;
use leptos::prelude::*;
use log::debug;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

/// The five page sections, in document order. This order is load-bearing:
/// the tracker scans it top to bottom and the first hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Services,
    Work,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Services,
        Section::Work,
        Section::About,
        Section::Contact,
    ];

    /// DOM element id, also the fragment anchor.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Services => "services",
            Section::Work => "work",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    /// Caption shown in the nav bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Services => "Services",
            Section::Work => "Work",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }
}

/// Rendered geometry of one section, measured from the DOM.
#[derive(Debug, Clone, Copy)]
pub struct SectionRegion {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionRegion {
    fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

/// The reference point for "which section is on screen": the vertical
/// midpoint of the viewport in document coordinates.
pub fn probe_point(scroll_y: f64, viewport_height: f64) -> f64 {
    scroll_y + viewport_height / 2.0
}

/// First region in declaration order whose `[top, top + height)` span
/// contains the probe. `None` when the probe falls outside every region,
/// in which case the caller keeps its previous answer.
pub fn section_at(probe: f64, regions: &[SectionRegion]) -> Option<Section> {
    regions
        .iter()
        .find(|region| region.contains(probe))
        .map(|region| region.section)
}

/// Reads section geometry and the current scroll position from the DOM.
/// Sections missing from the document are skipped.
fn measure_active_section() -> Option<Section> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;

    let regions: Vec<SectionRegion> = Section::ALL
        .iter()
        .filter_map(|&section| {
            let element: HtmlElement = document.get_element_by_id(section.id())?.dyn_into().ok()?;
            Some(SectionRegion {
                section,
                top: f64::from(element.offset_top()),
                height: f64::from(element.offset_height()),
            })
        })
        .collect();

    section_at(probe_point(scroll_y, viewport_height), &regions)
}

/// Owns the active-section state for the page. Attaches a window scroll
/// listener, recomputes once after mount (layout is not measurable any
/// earlier), and detaches the listener when the owning scope is disposed.
pub fn use_active_section() -> ReadSignal<Section> {
    let (active, set_active) = signal(Section::Hero);

    let recompute = move || {
        if let Some(next) = measure_active_section() {
            if next != active.get_untracked() {
                set_active.set(next);
            }
        }
    };

    // SendWrapper because on_cleanup closures must be Send + Sync even
    // though everything here stays on the browser's single thread.
    let listener = SendWrapper::new(window_event_listener(ev::scroll, move |_| recompute()));
    debug!("scroll tracker attached");

    Effect::new(move || recompute());

    on_cleanup(move || {
        listener.take().remove();
        debug!("scroll tracker detached");
    });

    active
}

/// Smooth-scrolls the viewport so the section's top meets the viewport top.
/// Does not touch the active-section signal; the tracker catches up from
/// the scroll events this produces.
pub fn scroll_to_section(section: Section) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(section.id()) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Contiguous page layout: hero 900 tall, the rest 800-900 each.
    fn page_regions() -> Vec<SectionRegion> {
        let heights = [900.0, 800.0, 900.0, 800.0, 800.0];
        let mut top = 0.0;
        Section::ALL
            .iter()
            .zip(heights)
            .map(|(&section, height)| {
                let region = SectionRegion {
                    section,
                    top,
                    height,
                };
                top += height;
                region
            })
            .collect()
    }

    #[test]
    fn probe_is_viewport_midpoint() {
        assert_eq!(probe_point(0.0, 800.0), 400.0);
        assert_eq!(probe_point(1000.0, 600.0), 1300.0);
    }

    #[test]
    fn hero_active_at_page_top() {
        // viewport 800, scroll 0, hero spans [0, 900)
        let probe = probe_point(0.0, 800.0);
        assert_eq!(section_at(probe, &page_regions()), Some(Section::Hero));
    }

    #[test]
    fn boundary_belongs_to_next_section() {
        let regions = page_regions();
        // hero is [0, 900): 899.9 still hero, exactly 900 is services
        assert_eq!(section_at(899.9, &regions), Some(Section::Hero));
        assert_eq!(section_at(900.0, &regions), Some(Section::Services));
    }

    #[test]
    fn transitions_follow_document_order() {
        let regions = page_regions();
        let bottom: f64 = regions.iter().map(|r| r.height).sum();

        let mut seen = Vec::new();
        let mut probe = 0.0;
        while probe < bottom {
            let section = section_at(probe, &regions).expect("probe inside page");
            if seen.last() != Some(&section) {
                seen.push(section);
            }
            probe += 50.0;
        }
        assert_eq!(seen, Section::ALL.to_vec());
    }

    #[test]
    fn earlier_section_wins_on_overlap() {
        let regions = vec![
            SectionRegion {
                section: Section::Hero,
                top: 0.0,
                height: 1000.0,
            },
            SectionRegion {
                section: Section::Services,
                top: 500.0,
                height: 1000.0,
            },
        ];
        assert_eq!(section_at(700.0, &regions), Some(Section::Hero));
    }

    #[test]
    fn probe_outside_every_region_is_none() {
        let regions = page_regions();
        let bottom: f64 = regions.iter().map(|r| r.height).sum();
        assert_eq!(section_at(bottom + 300.0, &regions), None);
        assert_eq!(section_at(-10.0, &regions), None);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let regions = page_regions();
        let probe = probe_point(2000.0, 800.0);
        assert_eq!(section_at(probe, &regions), section_at(probe, &regions));
    }

    #[test]
    fn missing_sections_are_skipped() {
        // services element absent from the DOM: its span is a gap
        let regions: Vec<SectionRegion> = page_regions()
            .into_iter()
            .filter(|r| r.section != Section::Services)
            .collect();
        assert_eq!(section_at(1300.0, &regions), None);
        assert_eq!(section_at(2000.0, &regions), Some(Section::Work));
    }

    #[test]
    fn section_ids_are_unique_anchors() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids.len(), 5);
        assert_eq!(ids, deduped);
        assert_eq!(Section::Hero.label(), "Home");
    }
}
