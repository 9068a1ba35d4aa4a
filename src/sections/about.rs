use leptos::prelude::*;

use crate::reveal::Reveal;
use crate::scrollspy::Section;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="section">
            <div class="container">
                <Reveal>
                    <div class="about-grid">
                        <div class="about-portrait reveal-item"></div>
                        <div class="about-copy reveal-item">
                            <h2 class="section-title">"About Me"</h2>
                            <p>
                                "I'm a passionate UI/UX designer with over 5 years of experience \
                                 creating digital products that make a difference. My approach \
                                 combines user research, creative problem-solving, and attention \
                                 to detail."
                            </p>
                            <p>
                                "I believe great design is invisible. It just works. My goal is \
                                 to create experiences that are not only beautiful but also \
                                 intuitive and accessible to everyone."
                            </p>
                            <p>
                                "When I'm not designing, you can find me exploring new design \
                                 trends, reading about psychology, or enjoying a good cup of \
                                 coffee."
                            </p>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
