//! Project gallery grid.
//!
//! Expects projects that already went through the gallery adapter, so every
//! tile has a thumbnail. A missing one still renders (empty `src`).

use leptos::prelude::*;

use crate::types::GalleryProject;

/// Grid of finished projects.
#[component]
pub fn ProjectGallery(projects: Vec<GalleryProject>) -> impl IntoView {
    if projects.is_empty() {
        return view! {
            <section class="gallery" aria-label="Project gallery">
                <p class="gallery-empty muted">"New projects are on their way - check back soon."</p>
            </section>
        }
        .into_any();
    }

    view! {
        <section class="gallery" aria-label="Project gallery">
            <div class="gallery-grid">
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectTile project=project /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn ProjectTile(project: GalleryProject) -> impl IntoView {
    let GalleryProject {
        id,
        title,
        slug,
        description,
        category,
        thumbnail,
        ..
    } = project;

    let anchor = slug.unwrap_or(id);
    let data_category = category.clone().unwrap_or_default();

    view! {
        <figure class="gallery-item" id=anchor data-category=data_category>
            <img
                class="gallery-thumb"
                src=thumbnail.unwrap_or_default()
                alt=title.clone()
                loading="lazy"
            />
            <figcaption>
                <span class="gallery-title">{title}</span>
                {category.map(|category| view! { <span class="gallery-category">{category}</span> })}
                {description.map(|text| view! { <p class="gallery-description">{text}</p> })}
            </figcaption>
        </figure>
    }
}
