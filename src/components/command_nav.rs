use yew::prelude::*;

use crate::sound::{use_sound, SoundKind};
use crate::theme::use_theme;
use crate::AppView;

#[derive(Properties, PartialEq)]
pub struct CommandNavProps {
    pub current_view: AppView,
    pub on_navigate: Callback<AppView>,
    pub logged_in: bool,
}

#[function_component(CommandNav)]
pub fn command_nav(props: &CommandNavProps) -> Html {
    let theme = use_theme();
    let play = use_sound();
    let colors = theme.colors();

    let commands: Vec<(&str, AppView)> = [
        Some(("whoami", AppView::Home)),
        // The dashboard command only appears once a session exists.
        props.logged_in.then_some(("sudo /dashboard", AppView::Dashboard)),
        (!props.logged_in).then_some(("auth /login", AppView::Login)),
        Some(("cat /contact", AppView::Contact)),
    ]
    .into_iter()
    .flatten()
    .collect();

    html! {
        <nav
            style={format!(
                "display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 3rem; \
                 padding-top: 2rem; border-top: 1px solid {}33;",
                colors.primary
            )}
        >
            { for commands.into_iter().map(|(label, target)| {
                let is_current = props.current_view == target;
                let onclick = {
                    let on_navigate = props.on_navigate.clone();
                    let play = play.clone();
                    Callback::from(move |_| {
                        play.emit(SoundKind::Click);
                        on_navigate.emit(target);
                    })
                };
                let onmouseenter = {
                    let play = play.clone();
                    Callback::from(move |_| play.emit(SoundKind::Hover))
                };
                let style = if is_current {
                    format!(
                        "border: 1px solid {p}; background: {p}; color: #000; \
                         box-shadow: 0 0 10px {glow};",
                        p = colors.primary,
                        glow = colors.glow
                    )
                } else {
                    format!("border: 1px solid {p}; color: {p};", p = colors.primary)
                };
                html! {
                    <button
                        key={label}
                        class="command-button"
                        {style}
                        {onclick}
                        {onmouseenter}
                    >
                        { format!("> {}", label) }
                    </button>
                }
            }) }
            <style>
                {r#"
                .command-button {
                    padding: 0.5rem 1rem;
                    font-family: inherit;
                    font-size: 0.8rem;
                    font-weight: bold;
                    text-transform: uppercase;
                    background: transparent;
                    transition: all 0.2s ease;
                }
                .command-button:hover {
                    background: var(--primary);
                    color: #000 !important;
                }
                "#}
            </style>
        </nav>
    }
}
