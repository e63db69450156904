use leptos::prelude::*;
use leptos_meta::Title;

use crate::data::{SkillCategory, EDUCATION, EXPERIENCES, PERSONAL_INFO, PROJECTS};

use super::breadcrumb::Breadcrumb;

#[component]
pub fn ResumePage() -> impl IntoView {
    view! {
        <Title text="Resume" />
        <div class="max-w-5xl mx-auto px-4 py-12">
            <Breadcrumb />
            <h1 class="font-bold text-3xl text-center mb-8 text-gray-900 dark:text-white">
                "Resume"
                <a
                    href="/resume.txt"
                    download="resume.txt"
                    rel="external"
                    class="ml-4 text-sm align-middle text-purple-600 dark:text-purple-400 underline"
                >
                    "plain text"
                </a>
            </h1>
            <Resume />
        </div>
    }
}

#[component]
fn Resume() -> impl IntoView {
    view! {
        <div
            id="resume"
            class="grid grid-cols-1 md:grid-cols-3 p-8 bg-white text-gray-900 leading-snug shadow-2xl rounded-lg border border-gray-200"
        >
            <Sidebar />
            <Body />
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let info = PERSONAL_INFO;
    view! {
        <div class="space-y-4 p-2">
            <div class="text-center space-y-2">
                <h2 class="text-2xl font-bold">{info.name}</h2>
                <p class="text-sm">{info.title}</p>
            </div>
            <div class="flex flex-col gap-y-1.5 rounded-sm border border-purple-300 px-3 py-4 text-sm">
                <div>{info.location}</div>
                <a href=format!("mailto:{}", info.email)>{info.email}</a>
                <div>{info.phone}</div>
                <a href=info.github target="_blank" rel="noreferrer">
                    {info.github.trim_start_matches("https://")}
                </a>
                <a href=info.linkedin target="_blank" rel="noreferrer">
                    {info.linkedin.trim_start_matches("https://")}
                </a>
            </div>
            <section class="grid">
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Skills"</h3>
                <div class="grid gap-y-3">
                    {SkillCategory::ALL
                        .into_iter()
                        .map(|category| {
                            let names = category
                                .skills()
                                .iter()
                                .map(|s| s.name)
                                .collect::<Vec<_>>()
                                .join(", ");
                            view! {
                                <div class="space-y-1">
                                    <h4>{category.title()}</h4>
                                    <p class="text-sm">{names}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="grid">
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Education"</h3>
                <div class="grid gap-y-3">
                    {EDUCATION
                        .iter()
                        .map(|step| {
                            view! {
                                <div class="text-left text-sm">
                                    <strong>{step.institution}</strong>
                                    <div>{step.degree}</div>
                                    <div class="font-bold">{step.duration}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn Body() -> impl IntoView {
    view! {
        <div class="col-span-2 space-y-4 p-2">
            <section>
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Summary"</h3>
                <p>{PERSONAL_INFO.bio}</p>
            </section>
            <section class="grid">
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Experience"</h3>
                {EXPERIENCES
                    .iter()
                    .map(|exp| {
                        view! {
                            <div class="space-y-2">
                                <h4 class="font-bold">{exp.company}</h4>
                                <div class="flex items-start justify-between">
                                    <strong>{exp.title}</strong>
                                    <div class="shrink-0 font-bold">{exp.duration}</div>
                                </div>
                                <ul class="list-disc pl-5 space-y-1">
                                    {exp.description.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section class="grid">
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Projects"</h3>
                <div class="space-y-3">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <div>
                                    <strong>{project.title}</strong>
                                    " · "
                                    <span class="text-sm">{project.category}</span>
                                    <p class="text-sm">{project.description}</p>
                                    <p class="text-xs text-gray-600">{project.technologies.join(", ")}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
