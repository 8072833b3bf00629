use leptos::prelude::*;
use solar_types::campus;

use crate::components::info_card::InfoCard;

/// Page describing the solar arrays the monitor tracks.
#[component]
pub fn BuildingsPage() -> impl IntoView {
    view! {
        <div class="dashboard-header">
            <h1>"Buildings"</h1>
            <p class="subtitle">"Solar arrays on the UW Seattle campus"</p>
        </div>
        <InfoCard content=campus::solar_buildings() />
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn page_embeds_campus_card() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <BuildingsPage /> }.to_html());

        assert!(html.contains("About Solar Arrays Located on UW Campus"));
        assert_eq!(html.matches(r#"class="info-card-entry""#).count(), 4);
    }
}
