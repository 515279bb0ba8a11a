//! CSS and client script for the generated pages.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use showroom_pages::styles::SITE_CSS;
//!
//! let my_css = ".hero { background: #fff; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```

/// Complete CSS for the site - warm neutral palette.
///
/// Covers:
/// - Base typography, header and footer
/// - Gallery grid
/// - Testimonial cards, marquee animation and grid section
/// - Contact form and success toast
pub const SITE_CSS: &str = r#"
:root {
    --bg: #faf7f2;
    --surface: #ffffff;
    --ink: #2b2622;
    --ink-soft: #6b625a;
    --accent: #9c6b3c;
    --accent-soft: #efe3d4;
    --success: #2f7d4f;
    --border: rgba(43, 38, 34, 0.12);
    --radius: 14px;
    --font-body: 'Inter', 'Helvetica Neue', Arial, sans-serif;
    --font-display: 'Playfair Display', Georgia, serif;
    --container-max: 1160px;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--ink);
    font-family: var(--font-body);
    line-height: 1.6;
}

a { color: inherit; }

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.muted { color: var(--ink-soft); }

.site-header {
    position: sticky;
    top: 0;
    z-index: 10;
    background: rgba(250, 247, 242, 0.92);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid var(--border);
}

.header-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 68px;
}

.brand {
    font-family: var(--font-display);
    font-size: 22px;
    text-decoration: none;
}

.site-nav { display: flex; gap: 24px; }

.nav-link {
    text-decoration: none;
    color: var(--ink-soft);
    font-size: 15px;
}

.nav-link:hover { color: var(--accent); }

.hero { padding: 96px 0 56px; }

.hero-title {
    font-family: var(--font-display);
    font-size: clamp(36px, 5vw, 60px);
    line-height: 1.1;
    margin: 0 0 16px;
}

.hero-lead {
    max-width: 640px;
    font-size: 18px;
    color: var(--ink-soft);
}

.section-title {
    font-family: var(--font-display);
    font-size: 32px;
    margin: 0 0 24px;
}

/* Gallery */
.gallery { padding: 24px 0 64px; }

.gallery-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 24px;
}

.gallery-item {
    margin: 0;
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    overflow: hidden;
}

.gallery-thumb {
    display: block;
    width: 100%;
    aspect-ratio: 4 / 3;
    object-fit: cover;
    background: var(--accent-soft);
}

.gallery-item figcaption { padding: 16px; }

.gallery-title { font-weight: 600; display: block; }

.gallery-category {
    display: inline-block;
    margin-top: 6px;
    padding: 2px 10px;
    border-radius: 999px;
    background: var(--accent-soft);
    color: var(--accent);
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.06em;
}

.gallery-description { margin: 8px 0 0; color: var(--ink-soft); font-size: 14px; }

.gallery-empty { padding: 32px 0; }

/* Testimonials */
.testimonials { padding: 64px 0; }

.marquee {
    overflow: hidden;
    mask-image: linear-gradient(90deg, transparent, #000 8%, #000 92%, transparent);
}

.marquee-track {
    display: flex;
    gap: 20px;
    width: max-content;
    padding: 8px 0;
    animation: marquee-scroll 60s linear infinite alternate;
}

.marquee:hover .marquee-track { animation-play-state: paused; }

@keyframes marquee-scroll {
    from { transform: translateX(0); }
    to { transform: translateX(calc(-100% + 100vw)); }
}

.testimonial-section {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.testimonial-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
    gap: 20px;
}

.testimonial-card {
    display: block;
    width: 340px;
    max-width: 100%;
    padding: 20px;
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    text-decoration: none;
}

.testimonial-grid .testimonial-card { width: auto; }

.testimonial-card-link:hover { border-color: var(--accent); }

.testimonial-header {
    display: flex;
    align-items: center;
    gap: 12px;
    margin-bottom: 12px;
}

.testimonial-avatar {
    width: 44px;
    height: 44px;
    border-radius: 50%;
    object-fit: cover;
    flex-shrink: 0;
}

.testimonial-initials {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    background: var(--accent-soft);
    color: var(--accent);
    font-weight: 600;
    font-size: 15px;
}

.testimonial-author { display: flex; flex-direction: column; }

.testimonial-name { font-weight: 600; }

.testimonial-handle { color: var(--ink-soft); font-size: 13px; }

.testimonial-link-icon { margin-left: auto; color: var(--ink-soft); }

.testimonial-text { margin: 0; font-size: 15px; }

.testimonial-quote-icon { display: block; color: var(--accent); margin-bottom: 6px; }

/* Contact */
.contact { padding: 24px 0 96px; }

.contact-form {
    display: grid;
    gap: 16px;
    max-width: 560px;
}

.contact-form label { display: grid; gap: 6px; font-size: 14px; }

.contact-form input,
.contact-form select,
.contact-form textarea {
    font: inherit;
    padding: 10px 12px;
    border: 1px solid var(--border);
    border-radius: 8px;
    background: var(--surface);
}

.btn {
    display: inline-block;
    padding: 12px 22px;
    border: 0;
    border-radius: 999px;
    font: inherit;
    cursor: pointer;
}

.btn-primary { background: var(--accent); color: #fff; }

/* Toast */
.toast {
    position: fixed;
    right: 24px;
    bottom: 24px;
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 14px 18px;
    border-radius: var(--radius);
    background: var(--success);
    color: #fff;
    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.18);
    opacity: 0;
    transform: translateY(12px);
    transition: opacity 0.2s ease, transform 0.2s ease;
}

.toast.visible { opacity: 1; transform: translateY(0); }

.toast[hidden] { display: none; }

.toast-dismiss {
    background: transparent;
    border: 0;
    color: inherit;
    cursor: pointer;
    padding: 4px;
}

.site-footer {
    padding: 32px 0;
    border-top: 1px solid var(--border);
    font-size: 14px;
}

@media (max-width: 720px) {
    .site-nav { gap: 14px; }
    .hero { padding: 56px 0 32px; }
}

@media (prefers-reduced-motion: reduce) {
    .marquee-track { animation: none; }
    .marquee { overflow-x: auto; }
}
"#;

/// Page script: toast timer and contact form hook.
///
/// One pending timer at most. Showing again or dismissing clears it first,
/// so a stale timeout can never hide a newer toast.
pub const SITE_SCRIPT: &str = r#"
(function () {
    var toast = document.getElementById('success-toast');
    if (!toast) { return; }

    var timer = null;

    function cancelTimer() {
        if (timer !== null) {
            clearTimeout(timer);
            timer = null;
        }
    }

    function hide() {
        cancelTimer();
        toast.hidden = true;
        toast.dataset.state = 'hidden';
        toast.classList.remove('visible');
    }

    function show(message) {
        cancelTimer();
        if (message) {
            toast.querySelector('.toast-message').textContent = message;
        }
        toast.hidden = false;
        toast.dataset.state = 'visible';
        toast.classList.add('visible');
        timer = setTimeout(hide, Number(toast.dataset.duration) || 3000);
    }

    window.showroomToast = { show: show, hide: hide };

    var dismiss = toast.querySelector('[data-role="toast-dismiss"]');
    if (dismiss) {
        dismiss.addEventListener('click', hide);
    }

    var form = document.querySelector('form[data-role="contact-form"]');
    if (form) {
        form.addEventListener('submit', function (event) {
            event.preventDefault();
            form.reset();
            show(toast.dataset.message);
        });
    }

    if (toast.dataset.state === 'visible') {
        show();
    }
})();
"#;
