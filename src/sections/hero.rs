use leptos::prelude::*;

use crate::reveal::Reveal;
use crate::scrollspy::{Section, scroll_to_section};

/// Opening section. Reveals immediately on load instead of waiting for a
/// viewport intersection like the other sections.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=Section::Hero.id() class="section hero">
            <div class="container">
                <Reveal immediate=true>
                    <h1 class="hero-title reveal-item">"UI/UX Designer"</h1>
                    <p class="hero-tagline reveal-item">
                        "Crafting beautiful and intuitive digital experiences that users love."
                    </p>
                    <div class="hero-actions reveal-item">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| scroll_to_section(Section::Contact)
                        >
                            "Get in Touch"
                        </button>
                        <a href="/resume.pdf" download class="btn btn-secondary">
                            "Download Resume"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
