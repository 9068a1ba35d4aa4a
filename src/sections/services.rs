use leptos::prelude::*;

use crate::reveal::Reveal;
use crate::scrollspy::Section;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=Section::Services.id() class="section">
            <div class="container">
                <Reveal>
                    <h2 class="section-title reveal-item">"Services"</h2>
                    <div class="services-grid">
                        <ServiceCard
                            title="UI Design"
                            description="Creating visually stunning interfaces that capture attention and communicate brand identity effectively."
                        />
                        <ServiceCard
                            title="UX Research"
                            description="Understanding user needs through research, testing, and data analysis to inform design decisions."
                        />
                        <ServiceCard
                            title="Prototyping"
                            description="Building interactive prototypes to validate ideas and test user flows before development."
                        />
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="service-card reveal-item">
            <h3 class="service-title">{title}</h3>
            <p class="service-description">{description}</p>
        </article>
    }
}
