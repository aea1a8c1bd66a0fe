use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Pictogram shown on top of a feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
    Globe,
    TrendingUp,
    ShieldCheck,
}

impl FeatureIcon {
    fn glyph(self) -> &'static str {
        match self {
            FeatureIcon::Globe => "🌐",
            FeatureIcon::TrendingUp => "📈",
            FeatureIcon::ShieldCheck => "🛡️",
        }
    }

    fn class(self) -> &'static str {
        match self {
            FeatureIcon::Globe => "globe-icon",
            FeatureIcon::TrendingUp => "trending-up-icon",
            FeatureIcon::ShieldCheck => "shield-check-icon",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: FeatureIcon,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card">
            <i class={classes!("feature-icon", props.icon.class())}>{props.icon.glyph()}</i>
            <h3>{&props.title}</h3>
            <p>{&props.description}</p>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: rgb(9, 9, 11);
                        color: #fff;
                        text-align: center;
                    }
                    .landing-page section {
                        padding: 5rem 1rem;
                    }
                    .landing-page .muted {
                        color: rgba(255, 255, 255, 0.8);
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                    }
                    .hero {
                        min-height: 100vh;
                        padding-top: 10rem !important;
                    }
                    .hero h1 {
                        font-size: 3rem;
                        margin-bottom: 1.5rem;
                    }
                    .cta-button {
                        background: #fff;
                        color: #000;
                        border: none;
                        border-radius: 0.375rem;
                        padding: 0.75rem 2rem;
                        font-size: 1.125rem;
                        cursor: pointer;
                    }
                    .cta-button:hover {
                        background: #e5e7eb;
                    }
                    .panel {
                        background: rgb(39, 39, 42);
                    }
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .feature-card {
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 0.5rem;
                        background: rgb(39, 39, 42);
                        padding: 2rem;
                    }
                    .feature-icon {
                        display: block;
                        font-size: 3rem;
                        font-style: normal;
                        margin-bottom: 1rem;
                    }
                    .about-grid {
                        display: flex;
                        gap: 3rem;
                        align-items: center;
                        max-width: 72rem;
                        margin: 0 auto;
                        text-align: left;
                    }
                    .about-grid > div {
                        flex: 1;
                    }
                    .about-placeholder {
                        aspect-ratio: 16 / 9;
                        background: rgb(39, 39, 42);
                        border-radius: 0.5rem;
                    }
                    .contact-form {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        max-width: 28rem;
                        margin: 0 auto;
                    }
                    .contact-form input {
                        flex: 1;
                        background: rgb(39, 39, 42);
                        color: #fff;
                        border: 1px solid #fff;
                        border-radius: 0.375rem;
                        padding: 0.5rem 0.75rem;
                    }
                    .landing-footer {
                        color: rgba(255, 255, 255, 0.7);
                        padding: 2rem 0;
                    }
                    @media (max-width: 768px) {
                        .features-grid {
                            grid-template-columns: 1fr;
                        }
                        .about-grid, .contact-form {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
            <main>
                // Hero Section
                <section class="hero">
                    <h1>{"Soluzioni AI per l'Esportazione delle PMI"}</h1>
                    <p class="muted">
                        {"SAGIM utilizza l'intelligenza artificiale all'avanguardia per aiutare le piccole e medie imprese a espandersi a livello globale, semplificare le esportazioni e garantire i loro contratti internazionali."}
                    </p>
                    <Link<Route> to={Route::Questionnaire} classes="forward-link">
                        <button class="cta-button">{"Inizia"}</button>
                    </Link<Route>>
                </section>

                <section id="features" class="panel">
                    <h2>{"Le Nostre Caratteristiche"}</h2>
                    <div class="features-grid">
                        <FeatureCard
                            icon={FeatureIcon::Globe}
                            title="Analisi del Mercato Globale"
                            description="Approfondimenti basati sull'IA per identificare i migliori mercati per i tuoi prodotti."
                        />
                        <FeatureCard
                            icon={FeatureIcon::TrendingUp}
                            title="Automazione del Processo di Esportazione"
                            description="Semplifica la documentazione e la conformità con il nostro sistema intelligente."
                        />
                        <FeatureCard
                            icon={FeatureIcon::ShieldCheck}
                            title="Assicurazione dei Contratti"
                            description="Proteggi la tua azienda con opzioni di assicurazione dei contratti valutate dall'IA."
                        />
                    </div>
                </section>

                <section id="about">
                    <div class="about-grid">
                        <div>
                            <h2>{"Chi è SAGIM"}</h2>
                            <p class="muted">
                                {"SAGIM è all'avanguardia nell'utilizzo dell'intelligenza artificiale per rivoluzionare il modo in cui le piccole e medie imprese affrontano il commercio internazionale."}
                            </p>
                            <p class="muted">
                                {"La nostra missione è livellare il campo di gioco, permettendo alle PMI di competere a livello globale con gli stessi vantaggi delle grandi aziende."}
                            </p>
                        </div>
                        <div>
                            <div class="about-placeholder"></div>
                        </div>
                    </div>
                </section>

                <section id="contact" class="panel">
                    <h2>{"Pronto a Espanderti Globalmente?"}</h2>
                    <p class="muted">
                        {"Unisciti alla piattaforma SAGIM e inizia a espandere la tua azienda a livello internazionale oggi stesso. La nostra IA è pronta a guidarti in ogni fase del percorso."}
                    </p>
                    <div class="contact-form">
                        <input type="email" placeholder="Inserisci la tua email" />
                        <button type="button" class="cta-button">{"Inizia"}</button>
                    </div>
                </section>
            </main>

            <footer class="landing-footer">
                <p>{"© 2024 SAGIM"}</p>
            </footer>
        </div>
    }
}
