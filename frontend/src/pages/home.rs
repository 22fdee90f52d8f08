use yew::prelude::*;

use crate::components::{
    about::AboutSection,
    contact::ContactSection,
    cursor::CursorEffects,
    facilities::FacilitiesSection,
    footer::Footer,
    gallery::GallerySection,
    hero::HeroSection,
    loading::LoadingScreen,
    navigation::Navigation,
    rooms::RoomsSection,
    testimonials::TestimonialsSection,
};

#[function_component(Home)]
pub fn home() -> Html {
    let loaded = use_state(|| false);

    // Start at the top once the splash screen hands over
    {
        use_effect_with_deps(
            move |loaded: &bool| {
                if *loaded {
                    if let Some(window) = web_sys::window() {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                || ()
            },
            *loaded,
        );
    }

    let on_loaded = {
        let loaded = loaded.clone();
        Callback::from(move |_: ()| loaded.set(true))
    };

    html! {
        <>
            <style>
                {r#"
                    :root {
                        --forest-deep: hsl(140, 45%, 25%);
                        --forest-medium: hsl(140, 35%, 40%);
                        --forest-light: hsl(140, 25%, 65%);
                        --sunset: hsl(45, 90%, 65%);
                        --river: hsl(200, 60%, 45%);
                        --cream: hsl(35, 40%, 95%);
                        --earth-light: hsl(30, 35%, 85%);
                        --earth-medium: hsl(25, 30%, 55%);
                        --font-serif: 'Playfair Display', Georgia, serif;
                    }

                    * {
                        box-sizing: border-box;
                    }

                    body {
                        margin: 0;
                        font-family: 'Inter', system-ui, sans-serif;
                        background: var(--cream);
                        color: hsl(140, 30%, 15%);
                        cursor: none;
                    }

                    @media (hover: none) {
                        body {
                            cursor: auto;
                        }
                        .cursor-layer {
                            display: none;
                        }
                    }

                    h1, h2, h3, h4 {
                        font-family: var(--font-serif);
                    }

                    .container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    section {
                        padding: 6rem 0;
                    }

                    .reveal {
                        opacity: 0;
                        transform: translateY(50px);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }

                    .reveal.visible {
                        opacity: 1;
                        transform: none;
                    }

                    .section-header {
                        text-align: center;
                        max-width: 720px;
                        margin: 0 auto 3rem;
                    }

                    .section-header h2 {
                        font-size: 2.75rem;
                        color: var(--forest-deep);
                        margin: 0.5rem 0 1rem;
                    }

                    .section-header.light h2,
                    .section-header.light p {
                        color: var(--cream);
                    }

                    .eyebrow {
                        font-family: inherit;
                        font-size: 0.85rem;
                        letter-spacing: 0.2em;
                        color: var(--earth-medium);
                        margin: 0;
                    }

                    /* Cursor */
                    .cursor-layer {
                        pointer-events: none;
                        position: fixed;
                        inset: 0;
                        z-index: 9999;
                    }
                    .cursor-dot, .cursor-ring, .cursor-ripple, .cursor-label {
                        position: fixed;
                        top: 0;
                        left: 0;
                        pointer-events: none;
                    }
                    .cursor-dot {
                        width: 6px;
                        height: 6px;
                        border-radius: 50%;
                        transition: transform 0.05s linear;
                    }
                    .cursor-ring {
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        transition: transform 0.15s ease-out, opacity 0.2s;
                    }
                    .cursor-ripple {
                        width: 64px;
                        height: 64px;
                        border-radius: 50%;
                        animation: cursorRipple 0.6s ease-out forwards;
                    }
                    .cursor-label {
                        font-size: 0.75rem;
                        padding: 0.2rem 0.5rem;
                        border-radius: 999px;
                        background: var(--forest-deep);
                        color: var(--cream);
                    }
                    @keyframes cursorRipple {
                        from { transform: scale(0.5); opacity: 0.8; }
                        to { transform: scale(2); opacity: 0; }
                    }

                    /* Navigation */
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        transform: translateY(-100px);
                        transition: transform 0.8s ease, background 0.3s;
                    }
                    .top-nav.visible {
                        transform: none;
                    }
                    .top-nav.scrolled {
                        background: hsl(35 40% 95% / 0.95);
                        backdrop-filter: blur(8px);
                        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.08);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-family: var(--font-serif);
                        font-size: 1.5rem;
                        color: var(--cream);
                        text-decoration: none;
                    }
                    .top-nav.scrolled .nav-logo,
                    .top-nav.scrolled .nav-link {
                        color: var(--forest-deep);
                    }
                    .nav-links, .nav-actions {
                        display: flex;
                        gap: 1.5rem;
                        align-items: center;
                    }
                    .nav-link {
                        color: var(--cream);
                        text-decoration: none;
                    }
                    .nav-call-button {
                        color: var(--sunset);
                        text-decoration: none;
                    }
                    .nav-book-button, .hero-cta, .contact-submit, .room-book {
                        background: var(--sunset);
                        color: var(--forest-deep);
                        border: none;
                        padding: 0.75rem 1.5rem;
                        border-radius: 999px;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        color: var(--cream);
                    }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1.5rem;
                        background: var(--forest-deep);
                    }
                    @media (max-width: 900px) {
                        .nav-links, .nav-actions {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }

                    /* Hero */
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        color: var(--cream);
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                    }
                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(180deg, hsl(140 45% 10% / 0.6), hsl(140 45% 10% / 0.3));
                    }
                    .hero-content {
                        position: relative;
                        max-width: 900px;
                        padding: 0 1.5rem;
                    }
                    .hero-content h1 {
                        font-size: clamp(2.5rem, 6vw, 5rem);
                        margin: 0.5rem 0;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                        margin-top: 2rem;
                    }
                    .hero-secondary {
                        background: transparent;
                        color: var(--cream);
                        border: 1px solid var(--cream);
                        padding: 0.75rem 1.5rem;
                        border-radius: 999px;
                    }
                    .hero-scroll-hint {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        animation: bounce 2s infinite;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }

                    /* About and facilities */
                    .about-grid, .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .about-image img, .facility-image img, .room-image img {
                        width: 100%;
                        display: block;
                        object-fit: cover;
                    }
                    .about-image img {
                        border-radius: 1.5rem;
                    }
                    .about-features {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .about-feature-icon, .facility-icon, .room-icon, .contact-card-icon {
                        font-size: 1.5rem;
                    }
                    .facilities, .gallery {
                        background: var(--forest-deep);
                    }
                    .facilities-grid, .rooms-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                        gap: 2rem;
                    }
                    .facility-card, .room-card {
                        background: white;
                        border-radius: 1.25rem;
                        overflow: hidden;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
                        transition: transform 0.3s;
                    }
                    .facility-card:hover, .room-card:hover {
                        transform: translateY(-6px);
                    }
                    .facility-image img, .room-image img {
                        height: 220px;
                    }
                    .facility-body, .room-body {
                        padding: 1.5rem;
                    }
                    .accent-river { color: var(--river); }
                    .accent-forest { color: var(--forest-medium); }
                    .accent-earth { color: var(--earth-medium); }
                    .accent-sunset { color: var(--sunset); }
                    .accent-forest-deep { color: var(--forest-deep); }

                    /* Rooms */
                    .room-filters {
                        display: flex;
                        gap: 0.75rem;
                        justify-content: center;
                        flex-wrap: wrap;
                        margin-bottom: 2.5rem;
                    }
                    .filter-button {
                        border: 1px solid var(--forest-light);
                        background: transparent;
                        padding: 0.5rem 1.25rem;
                        border-radius: 999px;
                    }
                    .filter-button.active {
                        background: var(--forest-deep);
                        color: var(--cream);
                    }
                    .room-image {
                        position: relative;
                    }
                    .room-category {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 999px;
                        font-size: 0.75rem;
                    }
                    .badge-luxury { background: var(--sunset); color: var(--forest-deep); }
                    .badge-premium { background: var(--forest-medium); color: var(--cream); }
                    .badge-standard { background: var(--earth-light); color: var(--forest-deep); }
                    .badge-family { background: var(--river); color: var(--cream); }
                    .room-features {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        padding: 0;
                        list-style: none;
                    }
                    .room-footer {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .room-price {
                        font-family: var(--font-serif);
                        font-size: 1.25rem;
                        color: var(--forest-deep);
                    }

                    /* Gallery */
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        grid-auto-rows: 220px;
                        gap: 1rem;
                    }
                    .gallery-tile {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1rem;
                    }
                    .gallery-tile img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s;
                    }
                    .gallery-tile:hover img {
                        transform: scale(1.08);
                    }
                    .gallery-tile.span-wide { grid-column: span 2; }
                    .gallery-tile.span-tall { grid-row: span 2; }
                    .gallery-caption {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        padding: 1rem;
                        color: var(--cream);
                        background: linear-gradient(transparent, rgba(0, 0, 0, 0.6));
                    }
                    .lightbox {
                        position: fixed;
                        inset: 0;
                        z-index: 200;
                        background: rgba(0, 0, 0, 0.9);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .lightbox img {
                        max-width: 90vw;
                        max-height: 85vh;
                        border-radius: 0.75rem;
                    }
                    .lightbox-close {
                        position: absolute;
                        top: 1.5rem;
                        right: 1.5rem;
                        background: none;
                        border: none;
                        color: white;
                        font-size: 2rem;
                    }
                    @media (max-width: 768px) {
                        .gallery-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                        .about-grid, .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    /* Contact */
                    .contact {
                        background: var(--forest-deep);
                        color: var(--cream);
                    }
                    .contact-cards {
                        display: grid;
                        gap: 1rem;
                    }
                    .contact-card {
                        display: flex;
                        gap: 1rem;
                        padding: 1.25rem;
                        border-radius: 1rem;
                        background: hsl(35 40% 95% / 0.08);
                    }
                    .contact-card h4, .contact-card p {
                        margin: 0 0 0.25rem;
                    }
                    .contact-card-action {
                        color: var(--sunset);
                    }
                    .reception-hours {
                        margin-top: 1.5rem;
                    }
                    .reception-note {
                        color: var(--sunset);
                    }
                    .contact-form {
                        display: grid;
                        gap: 1rem;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: var(--cream);
                        color: var(--forest-deep);
                    }
                    .contact-form label {
                        display: grid;
                        gap: 0.35rem;
                        font-size: 0.9rem;
                    }
                    .contact-form input,
                    .contact-form select,
                    .contact-form textarea {
                        padding: 0.7rem 0.9rem;
                        border: 1px solid var(--earth-light);
                        border-radius: 0.6rem;
                        font: inherit;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .form-error {
                        color: hsl(0, 70%, 45%);
                        margin: 0;
                    }
                    .contact-submit:disabled {
                        opacity: 0.6;
                    }

                    /* Footer */
                    .footer {
                        background: hsl(140, 45%, 12%);
                        color: var(--earth-light);
                        padding: 4rem 0 2rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr 1fr 2fr;
                        gap: 2rem;
                    }
                    .footer-links {
                        list-style: none;
                        padding: 0;
                    }
                    .footer-links a, .footer-social {
                        color: var(--earth-light);
                        text-decoration: none;
                    }
                    .footer-socials {
                        display: flex;
                        gap: 1rem;
                    }
                    .newsletter-form {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .footer-bottom {
                        margin-top: 3rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid hsl(30 35% 85% / 0.15);
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .back-to-top {
                        background: var(--sunset);
                        border: none;
                        border-radius: 50%;
                        width: 2.75rem;
                        height: 2.75rem;
                    }
                    @media (max-width: 900px) {
                        .footer-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                "#}
            </style>
            <CursorEffects />
            {
                if *loaded {
                    html! {
                        <div class="resort-page">
                            <Navigation />
                            <HeroSection />
                            <AboutSection />
                            <FacilitiesSection />
                            <RoomsSection />
                            <GallerySection />
                            <TestimonialsSection />
                            <ContactSection />
                            <Footer />
                        </div>
                    }
                } else {
                    html! { <LoadingScreen on_complete={on_loaded} /> }
                }
            }
        </>
    }
}
