use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::reveal::use_in_view;
use crate::components::scroll::{is_in_page_anchor, scroll_to_section, scroll_to_top};
use crate::config;
use crate::content::{FOOTER_LINK_GROUPS, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    let year = Local::now().year();

    let link_groups = FOOTER_LINK_GROUPS.iter().map(|(title, links)| html! {
        <div key={*title} class="footer-links">
            <h4>{*title}</h4>
            <ul>
                {
                    links.iter().map(|(name, href)| {
                        let href = *href;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            if is_in_page_anchor(href) {
                                e.prevent_default();
                                scroll_to_section(href);
                            }
                        });
                        html! { <li key={*name}><a href={href} onclick={onclick}>{*name}</a></li> }
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }).collect::<Html>();

    let socials = SOCIAL_LINKS.iter().map(|(label, href)| html! {
        <a key={*label} href={*href} target="_blank" rel="noopener noreferrer" aria-label={*label} class="footer-social">
            { label.chars().next().unwrap_or('•').to_string() }
        </a>
    }).collect::<Html>();

    let back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class={classes!("footer", "reveal", in_view.then(|| "visible"))} ref={node}>
            <div class="container footer-grid">
                <div class="footer-brand">
                    <h3>{ format!("🍃 {}", config::RESORT_NAME) }</h3>
                    <p>
                        {"Experience rustic royalty where luxury meets nature. Nestled in the pristine Kabini forest, we offer an unparalleled escape into serenity and comfort."}
                    </p>
                    <p>{"📍 Kabini Forest Area, Karnataka, India"}</p>
                    <p>{ format!("📞 {}", config::RESORT_PHONE) }</p>
                    <p>{"✉️ info@jlkabinipalace.com"}</p>
                    <div class="footer-socials">{ socials }</div>
                </div>
                { link_groups }
            </div>
            <div class="container footer-newsletter">
                <div>
                    <h4>{"Stay Connected with Nature"}</h4>
                    <p>{"Subscribe for exclusive offers and updates from Kabini Palace"}</p>
                </div>
                <div class="newsletter-form">
                    <input type="email" placeholder="Enter your email" />
                    <button class="cursor-luxury">{"Subscribe"}</button>
                </div>
            </div>
            <div class="container footer-bottom">
                <p>{ format!("© {} {}. Made with ♥ for nature lovers.", year, config::RESORT_NAME) }</p>
                <button class="back-to-top" aria-label="Back to top" onclick={back_to_top}>{"↑"}</button>
            </div>
        </footer>
    }
}
