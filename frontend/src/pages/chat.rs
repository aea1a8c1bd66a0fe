use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

// The personalised assistant lives here once it ships.
#[function_component(Chat)]
pub fn chat() -> Html {
    html! {
        <div class="placeholder-page">
            <h1>{"Il tuo AI personalizzato"}</h1>
            <p>{"La chat sarà disponibile a breve. Stiamo analizzando le tue risposte."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                {"Torna alla home"}
            </Link<Route>>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="placeholder-page">
            <h1>{"404"}</h1>
            <p>{"Pagina non trovata."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                {"Torna alla home"}
            </Link<Route>>
        </div>
    }
}
