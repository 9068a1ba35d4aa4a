use leptos::prelude::*;

use crate::scrollspy::{Section, scroll_to_section};

/// Fixed top navigation. The entry matching the active section is bolded;
/// clicking an entry smooth-scrolls its section to the top of the viewport.
#[component]
pub fn Nav(active: ReadSignal<Section>) -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <button
                    class="nav-brand"
                    on:click=move |_| scroll_to_section(Section::Hero)
                >
                    "Portfolio"
                </button>
                <div class="nav-links">
                    {Section::ALL
                        .iter()
                        .map(|&section| {
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == section {
                                            "nav-link active"
                                        } else {
                                            "nav-link"
                                        }
                                    }
                                    on:click=move |_| scroll_to_section(section)
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
