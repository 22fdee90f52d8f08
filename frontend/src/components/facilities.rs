use yew::prelude::*;

use crate::components::reveal::use_in_view;
use crate::config;
use crate::content::FACILITIES;

#[function_component(FacilitiesSection)]
pub fn facilities_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section id="facilities" class={classes!("facilities", "reveal", in_view.then(|| "visible"))} ref={node}>
            <div class="container">
                <div class="section-header light">
                    <h3 class="eyebrow">{"WORLD-CLASS FACILITIES"}</h3>
                    <h2>{"Immerse in Nature's Finest Offerings"}</h2>
                    <p>{"From adventurous excursions to peaceful relaxation, our facilities are designed to create unforgettable memories in harmony with nature."}</p>
                </div>
                <div class="facilities-grid">
                    {
                        FACILITIES.iter().enumerate().map(|(i, facility)| html! {
                            <article key={facility.title} class="facility-card" style={format!("transition-delay: {:.1}s;", 0.1 + i as f64 * 0.1)}>
                                <div class="facility-image" data-cursor="view">
                                    <img src={config::asset_url(facility.image)} loading="lazy" alt={facility.title} />
                                </div>
                                <div class="facility-body">
                                    <span class={classes!("facility-icon", facility.accent)}>{facility.icon}</span>
                                    <h4>{facility.title}</h4>
                                    <p>{facility.description}</p>
                                </div>
                            </article>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
