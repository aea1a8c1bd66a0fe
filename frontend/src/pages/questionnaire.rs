use log::{debug, info};
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::type_animation::TypeAnimation;
use crate::config;
use crate::questionnaire::analysis::{submit_and_dispatch, Analyzer, HttpAnalyzer};
use crate::questionnaire::questions::{QuestionSet, EXPORT_READINESS};
use crate::questionnaire::session::Session;
use crate::Route;

/// Copy and behaviour of one mounted questionnaire.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionnaireConfig {
    pub questions: QuestionSet,
    pub title: &'static str,
    pub placeholder: &'static str,
    pub completion_title: &'static str,
    pub completion_message: Option<&'static str>,
    /// Label of the link to the chat page shown after the last answer.
    pub chat_link_label: Option<&'static str>,
    /// Forward each accepted answer to the analysis backend.
    pub analysis: bool,
    pub theme: &'static str,
}

impl QuestionnaireConfig {
    /// The Italian onboarding interview, wired to analysis.
    pub fn guided() -> Self {
        Self {
            questions: EXPORT_READINESS,
            title: "Questionario",
            placeholder: "Scrivi la tua risposta qui...",
            completion_title: "Questionario completato!",
            completion_message: None,
            chat_link_label: Some("Chatta col tuo AI personalizzato"),
            analysis: true,
            theme: "questionnaire-guided",
        }
    }

    pub fn plain() -> Self {
        Self {
            questions: EXPORT_READINESS,
            title: "AI Questionnaire",
            placeholder: "Type your answer here...",
            completion_title: "Questionnaire Completed!",
            completion_message: Some("Thank you for answering all the questions."),
            chat_link_label: None,
            analysis: false,
            theme: "questionnaire-plain",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct QuestionnaireProps {
    pub config: QuestionnaireConfig,
}

pub enum Msg {
    SetAnswer(String),
    Submit,
    TypingComplete(usize),
}

pub struct Questionnaire {
    session: Session,
    analyzer: Option<HttpAnalyzer>,
    scroll_ref: NodeRef,
    input_ref: NodeRef,
    last_synced: Option<(usize, bool)>,
}

impl Component for Questionnaire {
    type Message = Msg;
    type Properties = QuestionnaireProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = &ctx.props().config;
        let analyzer = config
            .analysis
            .then(|| HttpAnalyzer::new(config::get_backend_url()));

        Self {
            session: Session::new(config.questions),
            analyzer,
            scroll_ref: NodeRef::default(),
            input_ref: NodeRef::default(),
            last_synced: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetAnswer(text) => {
                self.session.set_current_answer(text);
                true
            }
            Msg::TypingComplete(index) => self.session.reveal_complete(index),
            Msg::Submit => {
                let analyzer = self.analyzer.as_ref().map(|a| a as &dyn Analyzer);
                match submit_and_dispatch(&mut self.session, analyzer) {
                    Ok(submission) => {
                        info!(
                            "Answer {}/{} recorded",
                            submission.index + 1,
                            self.session.questions().len()
                        );
                        true
                    }
                    Err(e) => {
                        debug!("Submit ignored: {}", e);
                        false
                    }
                }
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        let key = self.session.sync_key();
        if self.last_synced == Some(key) {
            return;
        }
        self.last_synced = Some(key);

        if let Some(area) = self.scroll_ref.cast::<Element>() {
            area.set_scroll_top(area.scroll_height());
        }
        if self.session.is_typing_complete() {
            if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = &ctx.props().config;

        let mut entries: Vec<Html> = self
            .session
            .transcript()
            .enumerate()
            .map(|(index, (question, answer))| {
                html! {
                    <div key={index.to_string()} class="qa-entry past">
                        <p class="question-text">{question}</p>
                        <input type="text" class="answer-past" value={answer.to_string()} disabled=true />
                    </div>
                }
            })
            .collect();

        if let Some(question) = self.session.current_question() {
            entries.push(self.render_current(ctx, question));
        } else {
            entries.push(self.render_completion(config));
        }

        html! {
            <div class={classes!("questionnaire-page", config.theme)}>
                <style>
                    {r#"
                        .questionnaire-page {
                            min-height: 100vh;
                            display: flex;
                            justify-content: center;
                            align-items: flex-start;
                            padding-top: 2.5rem;
                            background-color: rgba(39, 39, 42, 0.5);
                            color: #fff;
                        }
                        .questionnaire-card {
                            width: 100%;
                            max-width: 42rem;
                            border: 1px solid rgba(255, 255, 255, 0.15);
                            border-radius: 0.5rem;
                            background: rgb(9, 9, 11);
                            padding: 2rem;
                        }
                        .questionnaire-scroll {
                            height: 60vh;
                            overflow: hidden;
                            scroll-behavior: smooth;
                        }
                        .qa-entry {
                            margin-bottom: 3rem;
                            transition: opacity 0.5s;
                        }
                        .qa-entry.past {
                            opacity: 0.5;
                        }
                        .question-text {
                            font-size: 0.875rem;
                        }
                        .answer-form {
                            margin-top: 0.5rem;
                            position: relative;
                            transition: opacity 0.5s ease-in-out;
                            opacity: 0;
                        }
                        .answer-form.visible {
                            opacity: 1;
                        }
                        .answer-form input, .answer-past {
                            width: 100%;
                            padding: 0.5rem 2.5rem 0.5rem 0.75rem;
                            border-radius: 0.375rem;
                            border: 1px solid rgba(255, 255, 255, 0.2);
                            background: transparent;
                            color: inherit;
                        }
                        .answer-past {
                            background: #1f2937;
                            color: #d1d5db;
                        }
                        .send-button {
                            position: absolute;
                            right: 0.5rem;
                            top: 0.35rem;
                        }
                        .completion-card {
                            border: 1px solid rgba(255, 255, 255, 0.15);
                            border-radius: 0.5rem;
                            padding: 2rem;
                            text-align: center;
                        }
                        .sr-only {
                            position: absolute;
                            width: 1px;
                            height: 1px;
                            overflow: hidden;
                            clip: rect(0, 0, 0, 0);
                        }
                        .narrow-only { display: none; }
                        @media (max-width: 640px) {
                            .wide-only { display: none; }
                            .narrow-only { display: inline; }
                        }
                    "#}
                </style>
                <div class="questionnaire-card">
                    <h1>{config.title}</h1>
                    <div class="questionnaire-scroll" ref={self.scroll_ref.clone()}>
                        { for entries }
                    </div>
                </div>
            </div>
        }
    }
}

impl Questionnaire {
    fn render_current(&self, ctx: &Context<Self>, question: &'static str) -> Html {
        let index = self.session.current_index();
        let typing_complete = self.session.is_typing_complete();
        let config = &ctx.props().config;

        let on_complete = ctx.link().callback(move |_| Msg::TypingComplete(index));
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetAnswer(input.value())
        });
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div key={index.to_string()} class="qa-entry current">
                <TypeAnimation text={question} class="question-text" {on_complete} />
                <form
                    class={classes!("answer-form", typing_complete.then(|| "visible"))}
                    {onsubmit}
                >
                    <input
                        ref={self.input_ref.clone()}
                        type="text"
                        value={self.session.current_answer().to_string()}
                        placeholder={config.placeholder}
                        disabled={!typing_complete}
                        {oninput}
                    />
                    <button type="submit" class="send-button" title="Send message">
                        {"↵"}
                        <span class="sr-only">{"Send message"}</span>
                    </button>
                </form>
            </div>
        }
    }

    fn render_completion(&self, config: &QuestionnaireConfig) -> Html {
        html! {
            <div key="completed" class="completion-card">
                <h2>{config.completion_title}</h2>
                if let Some(message) = config.completion_message {
                    <p>{message}</p>
                }
                if let Some(label) = config.chat_link_label {
                    <Link<Route> to={Route::Chat} classes="chat-link">
                        <span class="wide-only">{label}</span>
                        <span class="narrow-only">{"Deploy"}</span>
                    </Link<Route>>
                }
            </div>
        }
    }
}
