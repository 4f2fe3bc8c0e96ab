use leptos::{html, prelude::*};

use super::cards::{ProjectCard, SkillCard, TimelineCard};
use super::contact_form::ContactFormView;
use super::effects::{scroll_to_top, use_reveal};
use super::resume::ResumeButton;
use crate::config::build_year;
use crate::content::{
    ContactChannel, SectionId, CONTACT_CHANNELS, EDUCATION, EXPERIENCE, PROFILE, PROJECTS,
    SKILL_GROUPS,
};
use crate::state::{visible_projects, PageState, ProjectFilter};

/// A page section that fades and slides in the first time it scrolls into view.
#[component]
fn RevealSection(
    section: SectionId,
    #[prop(optional)] classes: &'static str,
    children: Children,
) -> impl IntoView {
    let state = expect_context::<RwSignal<PageState>>();
    let target = NodeRef::<html::Section>::new();
    use_reveal(state, section, target);
    let revealed = Memo::new(move |_| state.with(|s| s.is_revealed(section)));

    view! {
        <section
            id=section.id()
            node_ref=target
            class=move || {
                let motion = if revealed.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-8"
                };
                format!("{classes} transition-all duration-700 ease-out {motion}")
            }
        >
            {children()}
        </section>
    }
}

#[component]
fn SectionHeading(text: &'static str) -> impl IntoView {
    view! { <h2 class="text-3xl font-bold mb-8 text-center">{text}</h2> }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <RevealSection
            section=SectionId::About
            classes="bg-gradient-to-r from-blue-600 to-purple-600 py-20"
        >
            <div class="container mx-auto px-4 text-center">
                <h2 class="text-4xl font-bold mb-4">{PROFILE.name}</h2>
                <p class="text-xl mb-6">{PROFILE.title}</p>
                <p class="max-w-2xl mx-auto">{PROFILE.summary}</p>
            </div>
        </RevealSection>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Skills classes="py-20 bg-gray-800">
            <div class="container mx-auto px-4">
                <SectionHeading text="Technical Skills" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| view! { <SkillCard group=*group /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let state = expect_context::<RwSignal<PageState>>();
    let active = Memo::new(move |_| state.with(|s| s.active_filter()));

    let filter_button = move |filter: ProjectFilter| {
        let rounding = match filter {
            ProjectFilter::All => "rounded-l-lg",
            ProjectFilter::Web => "",
            ProjectFilter::Other => "rounded-r-lg",
        };
        view! {
            <button
                class=move || {
                    let bg = if active.get() == filter { "bg-blue-600" } else { "bg-gray-700" };
                    format!("px-4 py-2 {rounding} {bg}")
                }
                on:click=move |_| state.update(|s| s.set_filter(filter))
            >
                {filter.label()}
            </button>
        }
    };

    view! {
        <RevealSection section=SectionId::Projects classes="py-20">
            <div class="container mx-auto px-4">
                <SectionHeading text="Projects" />
                <div class="flex justify-center mb-8">
                    {ProjectFilter::ALL.into_iter().map(filter_button).collect_view()}
                </div>
                <div class="space-y-12">
                    {move || {
                        visible_projects(active.get(), PROJECTS)
                            .into_iter()
                            .map(|project| view! { <ProjectCard project=project /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Experience classes="py-20 bg-gray-800">
            <div class="container mx-auto px-4">
                <SectionHeading text="Experience" />
                <div class="space-y-6">
                    {EXPERIENCE
                        .iter()
                        .map(|entry| view! { <TimelineCard entry=*entry /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Education classes="py-20">
            <div class="container mx-auto px-4">
                <SectionHeading text="Education" />
                <div class="space-y-6">
                    {EDUCATION
                        .iter()
                        .map(|entry| view! { <TimelineCard entry=*entry /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

fn channel_link(channel: &ContactChannel) -> impl IntoView {
    let (target, rel) = if channel.is_external() {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };
    view! {
        <a
            href=channel.uri
            target=target
            rel=rel
            class="flex items-center hover:text-blue-400 transition-colors"
        >
            {channel.label}
        </a>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Contact classes="py-20 bg-gray-800">
            <div class="container mx-auto px-4 text-center">
                <SectionHeading text="Get in Touch" />
                <div class="flex flex-wrap justify-center gap-6">
                    {CONTACT_CHANNELS.iter().map(channel_link).collect_view()}
                </div>
                <ResumeButton />
                <ContactFormView />
            </div>
        </RevealSection>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 py-6 text-center">
            <p>{format!("© {} {}. All rights reserved.", build_year(), PROFILE.name)}</p>
        </footer>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let state = expect_context::<RwSignal<PageState>>();
    let visible = Memo::new(move |_| state.with(|s| s.back_to_top_visible()));
    view! {
        <Show when=move || visible.get()>
            <button
                class="fixed bottom-8 right-8 bg-blue-600 text-white p-2 rounded-full shadow-lg hover:bg-blue-700 transition-colors"
                aria-label="Back to top"
                on:click=move |_| scroll_to_top()
            >
                "▲"
            </button>
        </Show>
    }
}
