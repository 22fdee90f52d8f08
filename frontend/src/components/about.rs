use yew::prelude::*;

use crate::components::reveal::use_in_view;
use crate::config;
use crate::content::ABOUT_FEATURES;

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section id="about" class={classes!("about", "reveal", in_view.then(|| "visible"))} ref={node}>
            <div class="container about-grid">
                <div class="about-copy">
                    <h3 class="eyebrow">{"ABOUT OUR RESORT"}</h3>
                    <h2>{"Where Wilderness Meets Luxury"}</h2>
                    <p>
                        {"J&L Kabini Palace stands as a testament to harmonious living, where the boundaries between luxury and nature beautifully blur. Located in the heart of Karnataka's pristine Kabini region, our resort offers an unparalleled escape from the ordinary."}
                    </p>
                    <p>
                        {"Experience the serenity of farm-style living elevated to royal standards. Our carefully crafted accommodations and thoughtful amenities ensure that your connection with nature never compromises on comfort. From sunrise over the river to the symphony of the forest at night, every moment here is designed to rejuvenate your soul."}
                    </p>
                    <div class="about-features">
                        {
                            ABOUT_FEATURES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                                <div key={*title} class="about-feature" style={format!("transition-delay: {:.1}s;", 0.4 + i as f64 * 0.1)}>
                                    <span class="about-feature-icon">{*icon}</span>
                                    <div>
                                        <h4>{*title}</h4>
                                        <p>{*description}</p>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <div class="about-image" data-cursor="view">
                    <img src={config::asset_url("gallery2.jpg")} loading="lazy" alt="Resort grounds beside the Kabini river" />
                </div>
            </div>
        </section>
    }
}
