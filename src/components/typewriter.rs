use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub text: AttrValue,
    // Milliseconds per character / before the first character.
    #[prop_or(20)]
    pub speed: u32,
    #[prop_or(0)]
    pub delay: u32,
    // on_char fires per revealed non-space character (drives the typing blip).
    #[prop_or_default]
    pub on_char: Option<Callback<char>>,
    #[prop_or_default]
    pub on_complete: Option<Callback<()>>,
    #[prop_or(true)]
    pub show_cursor: bool,
    #[prop_or_default]
    pub class: Classes,
}

fn reveal_complete(shown: usize, total: usize) -> bool {
    shown >= total
}

#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let shown = use_state(|| 0usize);
    let started = use_state(|| props.delay == 0);

    let total = props.text.chars().count();
    let done = reveal_complete(*shown, total);

    // Empty text has nothing to tick through; completion fires on mount.
    {
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |total: &usize| {
                if *total == 0 {
                    if let Some(on_complete) = on_complete {
                        on_complete.emit(());
                    }
                }
                || ()
            },
            total,
        );
    }

    {
        let started = started.clone();
        use_effect_with_deps(
            move |delay: &u32| {
                let mut pending = None;
                if !*started && *delay > 0 {
                    let timeout = Timeout::new(*delay, move || started.set(true));
                    pending = Some(timeout);
                }
                move || drop(pending)
            },
            props.delay,
        );
    }

    // Interval of 0 pauses the tick, both before the start delay elapses and
    // once the full text is out.
    let millis = if *started && !done { props.speed } else { 0 };
    {
        let shown = shown.clone();
        let text = props.text.clone();
        let on_char = props.on_char.clone();
        let on_complete = props.on_complete.clone();
        use_interval(
            move || {
                let next = *shown + 1;
                if let Some(ch) = text.chars().nth(*shown) {
                    if ch != ' ' {
                        if let Some(on_char) = &on_char {
                            on_char.emit(ch);
                        }
                    }
                }
                shown.set(next);
                if reveal_complete(next, total) {
                    if let Some(on_complete) = &on_complete {
                        on_complete.emit(());
                    }
                }
            },
            millis,
        );
    }

    let visible: String = props.text.chars().take(*shown).collect();
    let class = classes!(
        props.class.clone(),
        "typewriter",
        props.show_cursor.then_some("cursor-blink")
    );

    html! {
        <span {class} style="white-space: pre-wrap; display: inline-block;">
            { visible }
            <style>
                {r#"
                .cursor-blink::after {
                    content: '\2588';
                    animation: blink 1s step-end infinite;
                    opacity: 0.8;
                }
                @keyframes blink {
                    50% { opacity: 0; }
                }
                "#}
            </style>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::reveal_complete;

    #[test]
    fn empty_text_is_complete_before_any_tick() {
        // An empty reveal finishes at zero characters, so the completion
        // callback fires on mount instead of waiting on an interval that
        // never arms.
        assert!(reveal_complete(0, 0));
        assert!(!reveal_complete(0, 1));
        assert!(reveal_complete(5, 5));
    }
}
