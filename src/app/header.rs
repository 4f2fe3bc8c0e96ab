use leptos::prelude::*;

use super::effects::scroll_to_section;
use crate::content::{SectionId, NAV_SECTIONS, PROFILE};
use crate::state::PageState;

#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<RwSignal<PageState>>();
    let menu_open = Memo::new(move |_| state.with(|s| s.menu_open()));

    let nav_button = move |section: SectionId, class: &'static str| {
        view! {
            <button class=class on:click=move |_| scroll_to_section(state, section.id())>
                {section.label()}
            </button>
        }
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-gray-800 bg-opacity-90 backdrop-filter backdrop-blur-sm shadow-md">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <h1 class="text-2xl font-bold">{PROFILE.name}</h1>
                <nav class="hidden md:flex space-x-6">
                    {NAV_SECTIONS
                        .iter()
                        .map(|section| nav_button(*section, "hover:text-blue-400 transition-colors"))
                        .collect_view()}
                </nav>
                <button
                    class="md:hidden text-2xl"
                    aria-label="Toggle menu"
                    on:click=move |_| state.update(|s| s.toggle_menu())
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden bg-gray-800 py-4">
                    {NAV_SECTIONS
                        .iter()
                        .map(|section| {
                            nav_button(
                                *section,
                                "block w-full text-left px-4 py-2 hover:bg-gray-700",
                            )
                        })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}
