use yew::prelude::*;

use crate::components::scroll::scroll_to_section;
use crate::config;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let jump = |anchor: &'static str| Callback::from(move |_: MouseEvent| scroll_to_section(anchor));

    html! {
        <section id="home" class="hero">
            <div class="hero-background">
                <img src={config::asset_url("hero-forest.jpg")} alt="J&L Kabini Palace Forest Resort" />
            </div>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <p class="hero-welcome">{"Welcome to"}</p>
                <h1>{ config::RESORT_NAME }</h1>
                <p class="hero-tagline">{"Experience Rustic Royalty by the Wild"}</p>
                <p class="hero-subtitle">
                    {"Immerse yourself in luxury amidst the pristine Kabini forest. Where comfort meets wilderness, and every moment is a celebration of nature's grandeur."}
                </p>
                <div class="hero-cta-group">
                    <button class="hero-cta cursor-luxury" onclick={jump("#contact")}>
                        {"📅 Book Your Stay"}
                    </button>
                    <button class="hero-secondary" onclick={jump("#facilities")}>
                        {"Explore Facilities"}
                    </button>
                </div>
            </div>
            <button class="hero-scroll-hint" aria-label="Scroll to about" onclick={jump("#about")}>
                {"⌄"}
            </button>
        </section>
    }
}
