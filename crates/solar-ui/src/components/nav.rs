use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"\u{2600}"</div>
                <span class="brand-text">"UW Solar Monitor"</span>
            </div>
            <ul class="nav-links">
                <li class="nav-item active">
                    <a href="/buildings">
                        <span class="nav-icon">"\u{2302}"</span>
                        <span>"Buildings"</span>
                    </a>
                </li>
            </ul>
        </nav>
    }
}
