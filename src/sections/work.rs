use leptos::prelude::*;

use crate::reveal::Reveal;
use crate::scrollspy::Section;

#[component]
pub fn Work() -> impl IntoView {
    view! {
        <section id=Section::Work.id() class="section">
            <div class="container">
                <Reveal>
                    <h2 class="section-title reveal-item">"Selected Work"</h2>
                    <div class="work-list">
                        <ProjectCard
                            category="Web Design"
                            title="E-Commerce Platform"
                            description="A modern shopping experience with intuitive navigation and seamless checkout flow."
                        />
                        <ProjectCard
                            category="Mobile Design"
                            title="Mobile Banking App"
                            description="Secure and user-friendly banking interface designed for everyday transactions."
                        />
                        <ProjectCard
                            category="Product Design"
                            title="SaaS Dashboard"
                            description="Complex data visualization made simple with clean layouts and clear hierarchy."
                        />
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    category: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="project-card reveal-item">
            <div class="project-thumb"></div>
            <p class="project-category">{category}</p>
            <h3 class="project-title">{title}</h3>
            <p class="project-description">{description}</p>
        </article>
    }
}
