mod cards;
mod contact_form;
mod effects;
mod header;
mod resume;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;
use crate::state::PageState;
use header::Header;
use sections::{About, BackToTop, Contact, Education, Experience, Footer, Projects, Skills};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.summary />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Home />
            </Routes>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <PortfolioPage />
    }
}

/// The whole page. Owns the view state for this page view; every listener
/// and observer below is registered under this component's owner.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let state = RwSignal::new(PageState::default());
    provide_context(state);
    effects::use_back_to_top(state);

    view! {
        <div class="bg-gray-900 text-white min-h-screen">
            <Header />
            <main class="pt-16">
                <About />
                <Skills />
                <Projects />
                <Experience />
                <Education />
                <Contact />
            </main>
            <Footer />
            <BackToTop />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{NAV_SECTIONS, PAGE_SECTIONS};

    fn render_page() -> String {
        let owner = Owner::new();
        owner.with(|| view! { <PortfolioPage /> }.to_html())
    }

    #[test]
    fn test_every_nav_anchor_is_rendered() {
        let html = render_page();
        for section in NAV_SECTIONS.iter().chain(PAGE_SECTIONS) {
            assert!(
                html.contains(&format!("id=\"{}\"", section.id())),
                "missing element for #{}",
                section.id()
            );
        }
    }

    #[test]
    fn test_initial_render_state() {
        let html = render_page();
        // menu closed, back-to-top hidden, every project listed
        assert!(!html.contains("Back to top"));
        assert!(!html.contains("block w-full text-left"));
        for project in crate::content::PROJECTS {
            assert!(html.contains(project.title));
        }
    }
}
