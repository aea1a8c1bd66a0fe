use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::TYPING_DELAY_MS;

#[derive(Properties, PartialEq)]
pub struct TypeAnimationProps {
    pub text: AttrValue,
    #[prop_or(TYPING_DELAY_MS)]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_complete: Callback<()>,
}

/// Types `text` out one character at a time and fires `on_complete` once the
/// whole string is visible. Give it a `key` per text so a new string starts
/// from scratch instead of reusing the old progress.
#[function_component(TypeAnimation)]
pub fn type_animation(props: &TypeAnimationProps) -> Html {
    let shown = use_state(|| 0usize);
    let total = props.text.chars().count();

    {
        let shown_setter = shown.setter();
        let on_complete = props.on_complete.clone();
        let delay = props.delay_ms;
        use_effect_with_deps(
            move |&(count, total)| {
                let timeout = if count < total {
                    Some(Timeout::new(delay, move || shown_setter.set(count + 1)))
                } else {
                    on_complete.emit(());
                    None
                };
                // Dropping the timeout cancels it if we unmount mid-typing
                move || drop(timeout)
            },
            (*shown, total),
        );
    }

    let visible: String = props.text.chars().take(*shown).collect();

    html! {
        <p class={props.class.clone()}>{visible}</p>
    }
}
