use leptos::prelude::*;

use crate::content::{Project, SkillGroup, TimelineEntry};

#[component]
pub fn SkillCard(group: SkillGroup) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-6 shadow-lg">
            <h3 class="text-xl font-semibold mb-4">{group.category}</h3>
            <div class="flex flex-wrap gap-2">
                {group
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <span class="bg-blue-600 text-white px-3 py-1 rounded-full text-sm">
                                {*skill}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let (lead, bullets) = project.lead_and_bullets();
    view! {
        <div class="bg-gray-800 rounded-lg p-6 shadow-lg transition-all duration-300 hover:shadow-xl hover:scale-105">
            <h3 class="text-2xl font-semibold mb-2">{project.title}</h3>
            <p class="text-blue-400 mb-4">{project.technologies}</p>
            {lead.map(|text| view! { <p class="text-gray-300 mb-4">{text}</p> })}
            <ul class="list-disc list-inside space-y-2">
                {bullets.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </div>
    }
}

/// Experience and education share one card layout.
#[component]
pub fn TimelineCard(entry: TimelineEntry) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-6 shadow-lg">
            <h3 class="text-2xl font-semibold mb-2">{entry.title}</h3>
            <p class="text-gray-300 mb-4">{entry.organization} " | " {entry.dates}</p>
            {(!entry.bullets.is_empty())
                .then(|| {
                    view! {
                        <ul class="list-disc list-inside space-y-2">
                            {entry.bullets.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                        </ul>
                    }
                })}
        </div>
    }
}
