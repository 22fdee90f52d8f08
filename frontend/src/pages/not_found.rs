use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 2rem;
                        background: hsl(140, 45%, 25%);
                        color: hsl(35, 40%, 95%);
                        font-family: 'Inter', system-ui, sans-serif;
                    }
                    .not-found h1 {
                        font-family: 'Playfair Display', Georgia, serif;
                        font-size: 3rem;
                    }
                    .not-found .hero-cta {
                        background: hsl(45, 90%, 65%);
                        color: hsl(140, 45%, 25%);
                        padding: 0.75rem 1.5rem;
                        border-radius: 999px;
                        text-decoration: none;
                    }
                "#}
            </style>
            <h1>{"Lost in the forest"}</h1>
            <p>{"The trail you followed doesn't lead anywhere. Let's head back to the lodge."}</p>
            <Link<Route> to={Route::Home} classes="hero-cta">
                {"Back to Kabini Palace"}
            </Link<Route>>
        </div>
    }
}
