use leptos::{either::Either, prelude::*};
use leptos_router::{components::A, hooks::use_location};

use crate::sections::breadcrumbs;

#[component]
pub fn Breadcrumb() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav aria-label="Breadcrumb" class="text-sm text-gray-500 dark:text-gray-400 mb-8">
            <ol class="flex items-center gap-2">
                {move || {
                    let crumbs = pathname.with(|p| breadcrumbs(p));
                    let last = crumbs.len().saturating_sub(1);
                    crumbs
                        .into_iter()
                        .enumerate()
                        .map(|(i, crumb)| {
                            let label = crumb.label;
                            view! {
                                <li class="flex items-center gap-2">
                                    {match crumb.path {
                                        Some(path) => {
                                            Either::Left(
                                                view! {
                                                    <A href=path attr:class="hover:text-purple-600">
                                                        {label}
                                                    </A>
                                                },
                                            )
                                        }
                                        None => {
                                            Either::Right(
                                                view! {
                                                    <span
                                                        aria-current="page"
                                                        class="font-medium text-gray-900 dark:text-white"
                                                    >
                                                        {label}
                                                    </span>
                                                },
                                            )
                                        }
                                    }}
                                    {(i < last).then_some(view! { <span>"/"</span> })}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>
        </nav>
    }
}
