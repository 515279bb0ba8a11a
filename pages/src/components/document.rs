//! Root document component - the complete HTML page
//!
//! Header with navigation, hero, optional gallery, testimonials, optional
//! contact form with its toast, footer. Head metadata comes verbatim from
//! [`PageMeta`](crate::types::PageMeta).

use leptos::prelude::*;

use super::{ContactForm, ProjectGallery, SuccessToast, TestimonialMarquee};
use crate::styles::{SITE_CSS, SITE_SCRIPT};
use crate::types::Page;

/// The complete HTML document for one page
#[component]
pub fn PageDocument(page: Page) -> impl IntoView {
    let Page {
        meta,
        site_name,
        heading,
        intro,
        nav,
        testimonials,
        testimonial_layout,
        gallery,
        contact_form,
        toast,
    } = page;

    let footer_name = site_name.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{meta.title}</title>
                <meta name="description" content=meta.description />
                {meta.canonical.map(|href| view! { <link rel="canonical" href=href /> })}
                {meta
                    .extra
                    .into_iter()
                    .map(|(name, content)| view! { <meta name=name content=content /> })
                    .collect::<Vec<_>>()}
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <header class="site-header">
                    <div class="container header-row">
                        <a class="brand" href="/">{site_name}</a>
                        <nav class="site-nav" aria-label="Main">
                            {nav
                                .into_iter()
                                .map(|(label, href)| view! { <a class="nav-link" href=href>{label}</a> })
                                .collect::<Vec<_>>()}
                        </nav>
                    </div>
                </header>

                <main>
                    <section class="hero">
                        <div class="container">
                            <h1 class="hero-title">{heading}</h1>
                            <p class="hero-lead">{intro}</p>
                        </div>
                    </section>

                    {gallery.map(|projects| view! {
                        <div class="container">
                            <ProjectGallery projects=projects />
                        </div>
                    })}

                    <TestimonialMarquee testimonials=testimonials layout=testimonial_layout />

                    {contact_form.then(|| view! { <ContactForm /> })}
                </main>

                {toast.map(|toast| view! { <SuccessToast toast=toast /> })}

                <footer class="site-footer">
                    <div class="container">
                        <span>{footer_name}</span>
                        <span class="muted">" - wallpapers, flooring and blinds, fitted properly."</span>
                    </div>
                </footer>

                <script>{SITE_SCRIPT}</script>
            </body>
        </html>
    }
}
