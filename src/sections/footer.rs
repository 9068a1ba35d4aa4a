use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <p>"© 2025 All rights reserved."</p>
                <p>"Designed with passion"</p>
            </div>
        </footer>
    }
}
