use yew::prelude::*;

use crate::components::reveal::use_in_view;
use crate::config;
use crate::content::GALLERY_IMAGES;

#[function_component(GallerySection)]
pub fn gallery_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    let selected = use_state(|| None::<usize>);

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let tiles = GALLERY_IMAGES.iter().enumerate().map(|(i, image)| {
        let open = {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(Some(i)))
        };
        html! {
            <figure key={i} class={classes!("gallery-tile", image.span)} data-cursor="view" onclick={open}>
                <img src={config::asset_url(image.src)} loading="lazy" alt={image.alt} />
                <figcaption class="gallery-caption">
                    <span class="gallery-category">{ image.category }</span>
                    <span class="gallery-zoom">{"🔍"}</span>
                    <h4>{ image.alt }</h4>
                </figcaption>
            </figure>
        }
    }).collect::<Html>();

    let lightbox = match (*selected).and_then(|i| GALLERY_IMAGES.get(i)) {
        Some(image) => {
            // Clicks on the photo itself should not dismiss
            let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
            html! {
                <div class="lightbox" onclick={close.clone()}>
                    <button class="lightbox-close" aria-label="Close" onclick={close}>{"✕"}</button>
                    <img src={config::asset_url(image.src)} alt={image.alt} onclick={keep_open} />
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <section id="gallery" class={classes!("gallery", "reveal", in_view.then(|| "visible"))} ref={node}>
            <div class="container">
                <div class="section-header light">
                    <h3 class="eyebrow">{"GALLERY"}</h3>
                    <h2>{"Capture the Essence of Kabini"}</h2>
                    <p>{"Immerse yourself in the visual journey of our resort's natural beauty, luxury accommodations, and unforgettable experiences."}</p>
                </div>
                <div class="gallery-grid">{ tiles }</div>
            </div>
            { lightbox }
        </section>
    }
}
