// Portfolio landing page, Leptos 0.8 CSR edition.

mod reveal;
mod scrollspy;
mod sections;

use leptos::prelude::*;

use scrollspy::use_active_section;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting portfolio landing page");

    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // Single writer (the scroll tracker), single reader (the nav).
    let active = use_active_section();

    view! {
        <Nav active=active />
        <main>
            <Hero />
            <Services />
            <Work />
            <About />
            <Contact />
        </main>
        <Footer />
    }
}
