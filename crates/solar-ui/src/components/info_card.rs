use leptos::prelude::*;
use solar_types::{CardContent, Entry};

/// Card with a title header, a paragraph of body text, and a labeled list.
///
/// Renders `content` as given: nothing is validated, empty strings render
/// empty, and entries keep their order.
#[component]
pub fn InfoCard(
    /// Title, body text, section label and list entries for the card
    content: CardContent,
) -> impl IntoView {
    let CardContent {
        title,
        description,
        section_label,
        entries,
    } = content;

    view! {
        <div class="card info-card">
            <div class="card-title info-card-title">{title}</div>
            <div class="info-card-body">
                <p>{description}</p>
            </div>
            <div class="info-card-section">
                <h3 class="info-card-label">{section_label}</h3>
                <ul class="info-card-list">
                    {entries
                        .into_iter()
                        .map(|entry| view! { <EntryRow entry /> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn EntryRow(entry: Entry) -> impl IntoView {
    view! {
        <li class="info-card-entry">
            <span class="info-card-entry-name">{entry.name}</span>
            <span class="info-card-entry-detail">{entry.detail}</span>
        </li>
    }
}
