use yew::prelude::*;

use crate::components::command_nav::CommandNav;
use crate::components::typewriter::Typewriter;
use crate::config;
use crate::sound::{use_sound, SoundKind};
use crate::theme::use_theme;
use crate::AppView;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<AppView>,
    pub logged_in: bool,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let theme = use_theme();
    let play = use_sound();
    let colors = theme.colors();
    let show_contact = use_state(|| false);

    let on_type = {
        let play = play.clone();
        Callback::from(move |_| play.emit(SoundKind::Typing))
    };
    let on_headline_done = {
        let play = play.clone();
        Callback::from(move |_| play.emit(SoundKind::Success))
    };

    let cta = {
        let target = if props.logged_in {
            AppView::Dashboard
        } else {
            AppView::Login
        };
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
                class="cta-button"
                style={format!("border: 2px solid {p}; color: {p};", p = colors.primary)}
                {onclick}
                {onmouseenter}
            >
                { if props.logged_in { "Go to Dashboard" } else { "Get Started" } }
            </button>
        }
    };

    let open_contact = {
        let show_contact = show_contact.clone();
        let play = play.clone();
        Callback::from(move |_| {
            play.emit(SoundKind::Click);
            show_contact.set(true);
        })
    };
    let close_contact = {
        let show_contact = show_contact.clone();
        Callback::from(move |_| show_contact.set(false))
    };

    html! {
        <div style="position: relative; min-height: 100%;">
            <div style="display: flex; flex-direction: column; gap: 5rem; padding-bottom: 6rem;">
                // Hero
                <section style="display: flex; flex-direction: column; gap: 1.5rem; max-width: 56rem;">
                    <h1
                        style={format!(
                            "font-size: 2.5rem; font-weight: 500; letter-spacing: -0.02em; \
                             line-height: 1.2; min-height: 6rem; color: {};",
                            colors.primary
                        )}
                    >
                        <Typewriter
                            text="Crafting Visual Stories That Resonate"
                            speed={20}
                            on_char={on_type}
                            on_complete={on_headline_done}
                        />
                    </h1>
                    <p
                        style={format!(
                            "font-size: 1rem; opacity: 0.8; max-width: 42rem; \
                             line-height: 1.6; color: {};",
                            colors.primary
                        )}
                    >
                        { "We're a creative agency specializing in video editing, \
                           website design, and graphic design." }
                    </p>
                    <div style="padding-top: 1rem;">
                        { cta }
                    </div>
                </section>

                // Services
                <section style="display: flex; flex-direction: column; gap: 3rem; align-items: center;">
                    <div style="text-align: center; display: flex; flex-direction: column; gap: 1rem;">
                        <h2
                            style={format!(
                                "font-size: 1.75rem; font-weight: bold; letter-spacing: 0.2em; \
                                 text-transform: uppercase; color: {};",
                                colors.primary
                            )}
                        >
                            <Typewriter text="Our Services" speed={40} delay={1000} show_cursor={false} />
                        </h2>
                        <p style="font-size: 0.8rem; opacity: 0.6; max-width: 32rem; letter-spacing: 0.2em; color: #fff;">
                            { "We offer a range of creative services to help your business thrive." }
                        </p>
                    </div>

                    <div style="width: 100%; max-width: 42rem; display: flex; flex-direction: column; gap: 1.5rem;">
                        <ServiceCard
                            title="Video Editing"
                            description="Cinematic cuts, reels, promos."
                            on_explore={open_contact.clone()}
                        />
                        <ServiceCard
                            title="Website Design"
                            description="Responsive, modern, user-friendly."
                            on_explore={open_contact.clone()}
                        />
                        <ServiceCard
                            title="Graphic Design"
                            description="Logos, branding, marketing assets."
                            on_explore={open_contact}
                        />
                    </div>
                </section>

                <CommandNav
                    current_view={AppView::Home}
                    on_navigate={props.on_navigate.clone()}
                    logged_in={props.logged_in}
                />
            </div>

            <StatusFooter />

            { if *show_contact { contact_overlay(colors, close_contact) } else { html!{} } }

            <style>
                {r#"
                .cta-button {
                    padding: 1rem 2rem;
                    background: transparent;
                    font-family: inherit;
                    font-size: 0.8rem;
                    font-weight: bold;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    transition: all 0.2s ease;
                }
                .cta-button:hover {
                    background: var(--primary);
                    color: #000 !important;
                }
                "#}
            </style>
        </div>
    }
}

fn contact_overlay(colors: &crate::theme::ThemeColors, close: Callback<MouseEvent>) -> Html {
    html! {
        <div style="position: fixed; inset: 0; z-index: 200; display: flex; \
                    align-items: center; justify-content: center; padding: 1rem;">
            <div
                onclick={close.clone()}
                style="position: absolute; inset: 0; background: rgba(0,0,0,0.9); \
                       backdrop-filter: blur(8px);"
            ></div>
            <div
                style={format!(
                    "width: 100%; max-width: 32rem; background: #000; border: 2px solid {}; \
                     position: relative; z-index: 10; padding: 2.5rem;",
                    colors.primary
                )}
            >
                <div style="display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 2.5rem;">
                    <h3
                        style={format!(
                            "font-size: 1.2rem; font-weight: 900; text-transform: uppercase; \
                             letter-spacing: 0.2em; color: {};",
                            colors.primary
                        )}
                    >
                        { "COMM_ESTABLISHED" }
                    </h3>
                    <button
                        onclick={close.clone()}
                        style={format!(
                            "background: none; border: none; font-family: inherit; \
                             font-size: 1rem; padding: 0.5rem; color: {};",
                            colors.primary
                        )}
                    >
                        { "[X]" }
                    </button>
                </div>
                <div style="display: flex; flex-direction: column; gap: 2rem;">
                    { for config::CONTACT_EMAILS.iter().map(|email| html! {
                        <div key={*email} style="display: flex; flex-direction: column; gap: 0.5rem;">
                            <span
                                style={format!(
                                    "font-size: 0.6rem; font-weight: bold; text-transform: uppercase; \
                                     opacity: 0.4; color: {};",
                                    colors.primary
                                )}
                            >
                                { "Gmail" }
                            </span>
                            <p style={format!("font-size: 1.2rem; font-weight: bold; color: {};", colors.primary)}>
                                { *email }
                            </p>
                        </div>
                    }) }
                </div>
                <button
                    onclick={close}
                    style={format!(
                        "width: 100%; margin-top: 2rem; padding: 1rem; background: transparent; \
                         border: 2px solid {p}; color: {p}; font-family: inherit; font-weight: 900; \
                         text-transform: uppercase; font-size: 0.7rem; letter-spacing: 0.2em;",
                        p = colors.primary
                    )}
                >
                    { "[ TERMINATE ]" }
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    title: AttrValue,
    description: AttrValue,
    on_explore: Callback<MouseEvent>,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let theme = use_theme();
    let play = use_sound();
    let colors = theme.colors();

    let onmouseenter = {
        let play = play.clone();
        Callback::from(move |_| play.emit(SoundKind::Hover))
    };

    html! {
        <div
            {onmouseenter}
            style={format!(
                "border: 2px solid {}; padding: 1.5rem; display: flex; flex-direction: column; \
                 gap: 1rem; background: rgba(0,0,0,0.8); box-shadow: 0 0 15px {}22; \
                 transition: transform 0.2s ease;",
                colors.primary, colors.glow
            )}
        >
            <div style="display: flex; align-items: center; gap: 0.75rem;">
                <span style={format!("font-size: 1.2rem; font-weight: bold; color: {};", colors.primary)}>
                    { ">" }
                </span>
                <h3
                    style={format!(
                        "font-size: 1.1rem; font-weight: bold; text-transform: uppercase; \
                         letter-spacing: 0.05em; color: {};",
                        colors.primary
                    )}
                >
                    { props.title.clone() }
                </h3>
            </div>
            <p style="font-size: 0.85rem; opacity: 0.8; color: #fff;">
                { props.description.clone() }
            </p>
            <button
                onclick={props.on_explore.clone()}
                style={format!(
                    "width: 100%; padding: 0.75rem; border: none; background: {}; color: #000; \
                     font-family: inherit; font-weight: 900; text-transform: uppercase; \
                     font-size: 0.7rem; letter-spacing: 0.3em;",
                    colors.primary
                )}
            >
                { "Explore Service" }
            </button>
        </div>
    }
}

// Fake system-status strip pinned under the home content.
#[function_component(StatusFooter)]
fn status_footer() -> Html {
    let theme = use_theme();
    let colors = theme.colors();

    html! {
        <footer
            style={format!(
                "margin-top: 3rem; display: flex; align-items: center; \
                 justify-content: space-between; flex-wrap: wrap; gap: 0.5rem; \
                 padding: 0.75rem 1.5rem; border: 1px solid {}33; background: {}ee; \
                 backdrop-filter: blur(12px); box-shadow: 0 0 20px -5px {}; \
                 font-size: 0.55rem; font-weight: bold; text-transform: uppercase; \
                 letter-spacing: 0.1em; user-select: none; color: {};",
                colors.primary, colors.secondary, colors.glow, colors.primary
            )}
        >
            <div style="display: flex; gap: 1.5rem; opacity: 0.6;">
                <span>{ "CORE_TEMP: 34\u{00b0}C" }</span>
                <span>{ "LATENCY: 24MS" }</span>
            </div>
            <div style="display: flex; align-items: center; gap: 0.5rem;">
                <span style="opacity: 0.4;">{ "Made with \u{2764} by" }</span>
                <span style={format!("color: {};", colors.accent)}>{ "Nitheesh and Mythrean" }</span>
            </div>
            <div style="display: flex; align-items: center; gap: 1rem; opacity: 0.6;">
                <span>{ "OS_VER: 1.0.42_X" }</span>
            </div>
        </footer>
    }
}
