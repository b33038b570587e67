use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::sound::{use_sound, SoundKind};
use crate::theme::use_theme;
use crate::Credentials;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Status {
    Idle,
    Checking,
    Failed,
    Success,
}

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_login_success: Callback<String>,
    // None until something has been registered.
    pub credentials: Option<Credentials>,
    pub on_register: Callback<Credentials>,
}

// The "check" is a cosmetic delay followed by a string comparison against the
// in-memory pair; there is no real authentication here.
#[function_component(Login)]
pub fn login(props: &LoginProps) -> Html {
    let theme = use_theme();
    let play = use_sound();
    let colors = theme.colors();

    let username = use_state(String::new);
    let pass = use_state(String::new);
    let mode = use_state(|| Mode::Login);
    let status = use_state(|| Status::Idle);
    let error_message = use_state(String::new);

    let onsubmit = {
        let username = username.clone();
        let pass = pass.clone();
        let mode = mode.clone();
        let status = status.clone();
        let error_message = error_message.clone();
        let play = play.clone();
        let credentials = props.credentials.clone();
        let on_login_success = props.on_login_success.clone();
        let on_register = props.on_register.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if username.is_empty() || pass.is_empty() {
                return;
            }

            play.emit(SoundKind::Click);
            status.set(Status::Checking);
            error_message.set(String::new());

            let username_value = (*username).clone();
            let pass_value = (*pass).clone();
            let current_mode = *mode;
            let credentials = credentials.clone();
            let mode = mode.clone();
            let status = status.clone();
            let error_message = error_message.clone();
            let pass_setter = pass.clone();
            let play = play.clone();
            let on_login_success = on_login_success.clone();
            let on_register = on_register.clone();
            spawn_local(async move {
                // Cosmetic sync pause.
                TimeoutFuture::new(1_200).await;

                match current_mode {
                    Mode::Register => {
                        on_register.emit(Credentials {
                            user: username_value,
                            pass: pass_value,
                        });
                        play.emit(SoundKind::Success);
                        status.set(Status::Success);

                        TimeoutFuture::new(1_500).await;
                        mode.set(Mode::Login);
                        status.set(Status::Idle);
                        pass_setter.set(String::new());
                    }
                    Mode::Login => {
                        let Some(stored) = credentials else {
                            play.emit(SoundKind::Error);
                            error_message
                                .set("CRITICAL: DATABASE EMPTY. REGISTER FIRST.".to_string());
                            status.set(Status::Failed);
                            TimeoutFuture::new(3_000).await;
                            status.set(Status::Idle);
                            return;
                        };

                        let user_matches =
                            username_value.to_lowercase() == stored.user.to_lowercase();
                        if user_matches && pass_value == stored.pass {
                            play.emit(SoundKind::Success);
                            status.set(Status::Success);
                            TimeoutFuture::new(1_000).await;
                            on_login_success.emit(username_value);
                        } else {
                            play.emit(SoundKind::Error);
                            error_message
                                .set("CRITICAL: ACCESS DENIED. BAD CREDENTIALS.".to_string());
                            status.set(Status::Failed);
                            TimeoutFuture::new(2_000).await;
                            status.set(Status::Idle);
                        }
                    }
                }
            });
        })
    };

    let toggle_mode = {
        let username = username.clone();
        let pass = pass.clone();
        let mode = mode.clone();
        let status = status.clone();
        let error_message = error_message.clone();
        let play = play.clone();
        Callback::from(move |_| {
            play.emit(SoundKind::Click);
            mode.set(match *mode {
                Mode::Login => Mode::Register,
                Mode::Register => Mode::Login,
            });
            error_message.set(String::new());
            status.set(Status::Idle);
            username.set(String::new());
            pass.set(String::new());
        })
    };

    let on_username_input = {
        let username = username.clone();
        let play = play.clone();
        Callback::from(move |e: InputEvent| {
            play.emit(SoundKind::Typing);
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };
    let on_pass_input = {
        let pass = pass.clone();
        let play = play.clone();
        Callback::from(move |e: InputEvent| {
            play.emit(SoundKind::Typing);
            let input: HtmlInputElement = e.target_unchecked_into();
            pass.set(input.value());
        })
    };
    let on_hover = {
        let play = play.clone();
        Callback::from(move |_| play.emit(SoundKind::Hover))
    };

    let busy = matches!(*status, Status::Checking | Status::Success);
    let is_register = *mode == Mode::Register;

    let badge_color = match *status {
        Status::Success => "#10b981",
        Status::Failed => "#ef4444",
        _ => colors.primary,
    };
    let badge_glow = match *status {
        Status::Success => "rgba(16,185,129,0.5)".to_string(),
        Status::Failed => "rgba(239,68,68,0.5)".to_string(),
        _ => colors.glow.to_string(),
    };
    let badge_glyph = match (*status, is_register) {
        (Status::Success, _) => "\u{2713}",
        (Status::Failed, _) => "\u{26a0}",
        (_, true) => "\u{2795}",
        (_, false) => "\u{1f512}",
    };

    let input_style = format!(
        "width: 100%; background: rgba(0,0,0,0.5); border: 2px solid {}44; \
         padding: 0.75rem; text-align: center; font-family: inherit; outline: none; \
         box-shadow: inset 0 0 10px {}22; color: {};",
        colors.primary, colors.glow, colors.primary
    );

    html! {
        <div style="height: 100%; display: flex; flex-direction: column; align-items: center; \
                    justify-content: center; gap: 1.5rem; padding: 3rem 0;">
            // Status badge
            <div
                class={classes!((*status == Status::Failed).then_some("shake"))}
                style={format!(
                    "padding: 1.5rem; border-radius: 50%; border: 4px solid {}; \
                     box-shadow: 0 0 20px {}; font-size: 2rem; line-height: 1; \
                     transition: border-color 0.5s ease; color: {};",
                    badge_color, badge_glow, badge_color
                )}
            >
                { badge_glyph }
            </div>

            <div style="text-align: center;">
                <h2
                    style={format!(
                        "font-size: 1.5rem; font-weight: bold; text-transform: uppercase; \
                         letter-spacing: 0.2em; color: {};",
                        colors.primary
                    )}
                >
                    { if is_register { "SYSTEM_INITIALIZATION" } else { "ACCESS_CONTROL" } }
                </h2>
                <p
                    style={format!(
                        "font-size: 0.6rem; opacity: 0.6; margin-top: 0.5rem; \
                         text-transform: uppercase; letter-spacing: 0.2em; color: {};",
                        colors.accent
                    )}
                >
                    { if is_register { "Configure New Operator Profile" } else { "Identify to Establish Session" } }
                </p>
            </div>

            <form
                {onsubmit}
                style="width: 100%; max-width: 24rem; display: flex; flex-direction: column; gap: 1rem;"
            >
                <div>
                    <label
                        style={format!(
                            "font-size: 0.6rem; text-transform: uppercase; opacity: 0.5; color: {};",
                            colors.primary
                        )}
                    >
                        { "Operator_ID" }
                    </label>
                    <input
                        type="text"
                        placeholder="USERNAME"
                        value={(*username).clone()}
                        oninput={on_username_input}
                        disabled={busy}
                        style={input_style.clone()}
                    />
                </div>

                <div>
                    <label
                        style={format!(
                            "font-size: 0.6rem; text-transform: uppercase; opacity: 0.5; color: {};",
                            colors.primary
                        )}
                    >
                        { "Access_Code" }
                    </label>
                    <input
                        type="password"
                        placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                        value={(*pass).clone()}
                        oninput={on_pass_input}
                        disabled={busy}
                        style={input_style}
                    />
                </div>

                <button
                    type="submit"
                    onmouseenter={on_hover.clone()}
                    disabled={busy}
                    style={format!(
                        "width: 100%; margin-top: 1rem; padding: 1rem; border: none; \
                         background: {}; color: #000; font-family: inherit; font-weight: 900; \
                         font-size: 0.7rem; text-transform: uppercase; letter-spacing: 0.3em; \
                         opacity: {};",
                        colors.primary,
                        if busy { "0.5" } else { "1" }
                    )}
                >
                    {
                        if *status == Status::Checking {
                            "SYNCING..."
                        } else if is_register {
                            "INITIALIZE_CORE"
                        } else {
                            "AUTHORIZE_SESSION"
                        }
                    }
                </button>
            </form>

            <div style="height: 1.5rem; text-align: center;">
                {
                    match *status {
                        Status::Failed => html! {
                            <p style="font-size: 0.6rem; color: #ef4444; font-weight: bold; text-transform: uppercase;">
                                { (*error_message).clone() }
                                <br />
                                <span style="opacity: 0.6; font-size: 0.5rem;">
                                    { "HINT: USE REGISTER IF ACCOUNT IS MISSING" }
                                </span>
                            </p>
                        },
                        Status::Success => html! {
                            <p style="font-size: 0.6rem; color: #10b981; font-weight: bold; text-transform: uppercase;">
                                {
                                    if is_register {
                                        "DATA SAVED. RETURNING TO LOGIN..."
                                    } else {
                                        "ACCESS GRANTED. REDIRECTING..."
                                    }
                                }
                            </p>
                        },
                        _ => html! {},
                    }
                }
            </div>

            <div
                style={format!(
                    "width: 100%; max-width: 24rem; padding-top: 1.5rem; \
                     border-top: 1px dashed {}22; text-align: center;",
                    colors.primary
                )}
            >
                <button
                    type="button"
                    onclick={toggle_mode}
                    onmouseenter={on_hover}
                    style={format!(
                        "width: 100%; background: none; border: none; font-family: inherit; \
                         font-size: 0.6rem; text-transform: uppercase; opacity: 0.6; color: {};",
                        colors.primary
                    )}
                >
                    <span style="opacity: 0.4; display: block; margin-bottom: 0.25rem;">
                        {
                            if is_register {
                                "Returning operator?"
                            } else {
                                "Don't have an operator account?"
                            }
                        }
                    </span>
                    <span style="font-weight: bold; letter-spacing: 0.2em;">
                        { if is_register { "BACK TO LOGIN" } else { "REGISTER NOW" } }
                    </span>
                </button>
            </div>

            <style>
                {r#"
                @keyframes shake {
                    0%, 100% { transform: translateX(0); }
                    25% { transform: translateX(-6px); }
                    75% { transform: translateX(6px); }
                }
                .shake { animation: shake 0.15s linear 3; }
                "#}
            </style>
        </div>
    }
}
