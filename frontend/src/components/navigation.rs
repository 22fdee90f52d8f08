use yew::prelude::*;
use yew_hooks::use_window_scroll;
use gloo_timers::callback::Timeout;

use crate::components::scroll::scroll_to_section;
use crate::config;
use crate::content::NAV_ITEMS;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLLED_THRESHOLD
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state(|| false);
    let visible = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();

    // Slide in just after the splash screen hands over
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::NAV_REVEAL_DELAY_MS, move || visible.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |anchor: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(anchor);
        })
    };

    let links = NAV_ITEMS.iter().map(|(name, href)| {
        html! {
            <a key={*name} href={*href} class="nav-link" onclick={go_to(*href)}>{*name}</a>
        }
    }).collect::<Html>();

    let actions = html! {
        <>
            <a href={format!("tel:{}", config::RESORT_PHONE.replace(' ', ""))} class="nav-call-button">
                {"📞 Call Now"}
            </a>
            <button class="nav-book-button cursor-luxury" onclick={go_to("#contact")}>
                {"Book Now"}
            </button>
        </>
    };

    html! {
        <header class={classes!(
            "top-nav",
            is_scrolled(scroll_y).then(|| "scrolled"),
            (*visible).then(|| "visible"),
        )}>
            <nav class="nav-content">
                <a href="#home" class="nav-logo" onclick={go_to("#home")}>
                    { config::RESORT_NAME }
                </a>
                <div class="nav-links">{ links.clone() }</div>
                <div class="nav-actions">{ actions.clone() }</div>
                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </nav>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { links }
                            <div class="mobile-menu-actions">{ actions }</div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_solidifies_after_fifty_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }
}
