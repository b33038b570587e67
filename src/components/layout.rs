use yew::prelude::*;

use crate::components::background::BackgroundGrid;
use crate::config;
use crate::sound::{use_sound, SoundKind};
use crate::theme::use_theme;
use crate::AppView;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current_view: AppView,
    pub on_navigate: Callback<AppView>,
    pub logged_in: bool,
    pub on_logout: Callback<()>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let theme = use_theme();
    let play = use_sound();
    let colors = theme.colors();

    let nav_button = |label: &str, target: AppView| {
        let active = props.current_view == target;
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
        html! {
            <button
                class={classes!("chrome-button", active.then_some("chrome-button-active"))}
                style={format!("border-color: {}44; color: {};", colors.primary, colors.primary)}
                {onclick}
                {onmouseenter}
            >
                { label.to_string() }
            </button>
        }
    };

    let theme_button = {
        let onclick = {
            let theme = theme.clone();
            let play = play.clone();
            Callback::from(move |_| {
                play.emit(SoundKind::Click);
                theme.cycle();
            })
        };
        let onmouseenter = {
            let play = play.clone();
            Callback::from(move |_| play.emit(SoundKind::Hover))
        };
        html! {
            <button
                class="chrome-button"
                style={format!(
                    "border-color: {p}; color: {p}; background: {p}11;",
                    p = colors.primary
                )}
                {onclick}
                {onmouseenter}
            >
                { format!("Theme: {}", theme.id.label()) }
            </button>
        }
    };

    let session_button = if props.logged_in {
        let onclick = {
            let on_logout = props.on_logout.clone();
            let play = play.clone();
            Callback::from(move |_| {
                play.emit(SoundKind::Click);
                on_logout.emit(());
            })
        };
        html! {
            <button
                class="chrome-button"
                style="border-color: rgba(239, 68, 68, 0.4); color: #ef4444; \
                       background: rgba(239, 68, 68, 0.1);"
                {onclick}
            >
                { "Logout" }
            </button>
        }
    } else {
        nav_button("Login", AppView::Login)
    };

    html! {
        <div
            style={format!(
                "min-height: 100vh; width: 100%; display: flex; align-items: center; \
                 justify-content: center; padding: 1rem; font-family: inherit; \
                 background: {};",
                colors.bg
            )}
        >
            <div
                class="terminal-window"
                style={format!(
                    "border: 1px solid {}; box-shadow: 0 0 40px -10px {};",
                    colors.primary, colors.glow
                )}
            >
                <BackgroundGrid />
                <div class="scanline" aria-hidden="true"></div>

                <header
                    class="terminal-header"
                    style={format!(
                        "border-bottom: 1px solid {}33; background: {}ee;",
                        colors.primary, colors.secondary
                    )}
                >
                    <div style="display: flex; align-items: center; gap: 1rem;">
                        <div style="display: flex; gap: 0.5rem;">
                            <span class="traffic-dot" style="background: #FF5F56;"></span>
                            <span class="traffic-dot" style="background: #FFBD2E;"></span>
                            <span class="traffic-dot" style="background: #27C93F;"></span>
                        </div>
                        <span
                            style={format!(
                                "font-size: 0.8rem; font-weight: bold; letter-spacing: 0.2em; \
                                 text-transform: uppercase; color: {};",
                                colors.primary
                            )}
                        >
                            { config::TERMINAL_TITLE }
                        </span>
                    </div>

                    <div style="display: flex; flex-wrap: wrap; gap: 0.5rem;">
                        { nav_button("Home", AppView::Home) }
                        {
                            if props.logged_in {
                                nav_button("Dashboard", AppView::Dashboard)
                            } else {
                                html! {}
                            }
                        }
                        { session_button }
                        { theme_button }
                    </div>
                </header>

                <main class="terminal-main">
                    { for props.children.iter() }
                </main>
            </div>

            <style>
                {format!(r#"
                .terminal-window {{
                    width: 100%;
                    max-width: 72rem;
                    height: 88vh;
                    background: rgba(0, 0, 0, 0.4);
                    border-radius: 8px;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    position: relative;
                    backdrop-filter: blur(4px);
                    transition: border-color 0.5s ease, box-shadow 0.5s ease;
                }}
                .terminal-header {{
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    padding: 0.75rem 1.5rem;
                    flex-shrink: 0;
                    user-select: none;
                    z-index: 20;
                    backdrop-filter: blur(12px);
                }}
                .chrome-button {{
                    padding: 0.4rem 1rem;
                    border: 1px solid;
                    background: transparent;
                    font-family: inherit;
                    font-size: 0.65rem;
                    font-weight: bold;
                    text-transform: uppercase;
                    transition: all 0.2s ease;
                }}
                .chrome-button:hover {{
                    background: rgba(255, 255, 255, 0.1);
                }}
                .chrome-button-active {{
                    background: rgba(255, 255, 255, 0.2);
                }}
                .terminal-main {{
                    flex: 1;
                    padding: 2rem 3rem;
                    overflow-y: auto;
                    overflow-x: hidden;
                    position: relative;
                    z-index: 10;
                }}
                .terminal-main::-webkit-scrollbar {{
                    width: 8px;
                }}
                .terminal-main::-webkit-scrollbar-track {{
                    background: rgba(0, 0, 0, 0.5);
                }}
                .terminal-main::-webkit-scrollbar-thumb {{
                    background: {primary};
                    border-radius: 4px;
                }}
                .terminal-main::-webkit-scrollbar-thumb:hover {{
                    background: {accent};
                }}
                .scanline {{
                    position: absolute;
                    left: 0;
                    right: 0;
                    height: 2px;
                    background: rgba(255, 255, 255, 0.06);
                    z-index: 30;
                    pointer-events: none;
                    animation: scan 6s linear infinite;
                }}
                @keyframes scan {{
                    from {{ top: -2px; }}
                    to {{ top: 100%; }}
                }}
                .traffic-dot {{
                    width: 12px;
                    height: 12px;
                    border-radius: 50%;
                    display: inline-block;
                }}
                "#, primary = colors.primary, accent = colors.accent)}
            </style>
        </div>
    }
}
