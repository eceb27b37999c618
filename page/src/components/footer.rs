use leptos::prelude::*;

use crate::view_model::EXTERNAL_REL;

#[component]
pub fn Footer(repository_url: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <a href=repository_url target="_blank" rel=EXTERNAL_REL class="footer-link">"Source on GitHub"</a>
                <p class="muted">
                    "Not affiliated with Discord or any of the listed projects."
                </p>
            </div>
        </footer>
    }
}
