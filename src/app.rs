mod about;
mod achievements;
mod breadcrumb;
mod contact;
mod education;
mod effects;
mod experience;
mod footer;
mod header;
mod hero;
mod homepage;
mod hooks;
mod projects;
mod resume;
mod search;
mod skills;

use std::fmt::Display;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::data::PERSONAL_INFO;
use effects::{CustomCursor, ReadingProgress};
use footer::Footer;
use header::Header;
use homepage::HomePage;
use hooks::{provide_active_section, provide_theme};
use resume::ResumePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();
    provide_active_section();

    view! {
        <Title formatter=|title| format!("{} - {title}", PERSONAL_INFO.name) />
        <Meta name="description" content=PERSONAL_INFO.bio />

        <Router>
            <div class="min-h-screen bg-white dark:bg-gray-900 transition-colors duration-300">
                <ReadingProgress />
                <CustomCursor />
                <Header />
                <main>
                    <ErrorBoundary fallback=|errors| {
                        view! {
                            <div class="max-w-xl mx-auto px-4 py-24 text-center">
                                <h1 class="text-2xl font-bold text-gray-900 dark:text-white mb-4">
                                    "Something went wrong."
                                </h1>
                                <ul class="text-sm text-red-600 dark:text-red-400">
                                    {move || {
                                        error_lines(errors.get().into_iter().map(|(_, e)| e))
                                            .into_iter()
                                            .map(|line| view! { <li>{line}</li> })
                                            .collect_view()
                                    }}
                                </ul>
                            </div>
                        }
                    }>
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                            <Route path=path!("/resume") view=ResumePage />
                        </Routes>
                    </ErrorBoundary>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// One line per distinct error, in the order they were raised.
fn error_lines<I, E>(errors: I) -> Vec<String>
where
    I: IntoIterator<Item = E>,
    E: Display,
{
    let mut lines: Vec<String> = Vec::new();
    for error in errors {
        let line = error.to_string();
        if !lines.contains(&line) {
            log::error!("render error: {line}");
            lines.push(line);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_lines_are_distinct_and_ordered() {
        let lines = error_lines(["relay offline", "bad id", "relay offline"]);
        assert_eq!(lines, vec!["relay offline", "bad id"]);
        assert!(error_lines(Vec::<String>::new()).is_empty());
    }
}
