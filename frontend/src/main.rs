use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod components {
    pub mod type_animation;
}
mod pages {
    pub mod chat;
    pub mod landing;
    pub mod questionnaire;
}
mod questionnaire;

use pages::{
    chat::{Chat, NotFound},
    landing::Landing,
    questionnaire::{Questionnaire, QuestionnaireConfig},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/questionario")]
    Questionnaire,
    #[at("/something")]
    PlainQuestionnaire,
    #[at("/ai")]
    Chat,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Questionnaire => {
            info!("Rendering Questionnaire page");
            html! { <Questionnaire config={QuestionnaireConfig::guided()} /> }
        },
        Route::PlainQuestionnaire => {
            info!("Rendering plain Questionnaire page");
            html! { <Questionnaire config={QuestionnaireConfig::plain()} /> }
        },
        Route::Chat => {
            info!("Rendering Chat page");
            html! { <Chat /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
