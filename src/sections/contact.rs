use leptos::prelude::*;

use crate::reveal::Reveal;
use crate::scrollspy::Section;

// Placeholder destinations; real profiles land here eventually.
const SOCIAL_PLATFORMS: [&str; 3] = ["LinkedIn", "Dribbble", "Behance"];

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="section">
            <div class="container">
                <Reveal>
                    <h2 class="section-title reveal-item">"Let's Work Together"</h2>
                    <div class="contact-grid reveal-item">
                        <div class="contact-details">
                            <div class="contact-entry">
                                <h3 class="contact-label">"Email"</h3>
                                <a href="mailto:hello@designer.com" class="contact-link">
                                    "hello@designer.com"
                                </a>
                            </div>
                            <div class="contact-entry">
                                <h3 class="contact-label">"Phone"</h3>
                                <a href="tel:+1234567890" class="contact-link">
                                    "+1 (234) 567-890"
                                </a>
                            </div>
                            <div class="contact-entry">
                                <h3 class="contact-label">"Social"</h3>
                                <div class="contact-socials">
                                    {SOCIAL_PLATFORMS
                                        .iter()
                                        .map(|&platform| {
                                            view! {
                                                <a href="#" class="social-link">{platform}</a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                        <div class="contact-pitch">
                            <p>
                                "Have a project in mind? I'd love to hear about it. Send me a \
                                 message and let's create something amazing together."
                            </p>
                            <button class="btn btn-primary">"Send Message"</button>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
