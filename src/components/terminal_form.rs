use gloo_console::log;
use serde::Serialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::typewriter::Typewriter;
use crate::theme::use_theme;

// (field, prompt, input type), in prompt order.
const STEPS: [(&str, &str, &str); 3] = [
    ("name", "IDENTIFY YOURSELF (NAME):", "text"),
    ("email", "ENTRY POINT (EMAIL):", "email"),
    ("message", "TRANSMISSION DATA (MESSAGE):", "text"),
];

// No backend: the "transmission" is a console log plus an on-screen receipt.
#[derive(Serialize, Default, Clone, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    fn set(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "message" => self.message = value,
            _ => unreachable!("unknown contact field {field}"),
        }
    }

    fn get(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "email" => &self.email,
            "message" => &self.message,
            _ => unreachable!("unknown contact field {field}"),
        }
    }
}

#[function_component(TerminalForm)]
pub fn terminal_form() -> Html {
    let theme = use_theme();
    let colors = theme.colors();

    let current_step = use_state(|| 0usize);
    let data = use_state(ContactRequest::default);
    let input_value = use_state(String::new);
    let completed = use_state(|| false);
    let input_ref = use_node_ref();

    // Keep the prompt line focused as the sequence advances.
    {
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
                || ()
            },
            (*current_step, *completed),
        );
    }

    let onsubmit = {
        let current_step = current_step.clone();
        let data = data.clone();
        let input_value = input_value.clone();
        let completed = completed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = (*input_value).trim().to_string();
            if value.is_empty() {
                return;
            }

            let step = *current_step;
            let mut next_data = (*data).clone();
            next_data.set(STEPS[step].0, value);
            input_value.set(String::new());

            if step + 1 < STEPS.len() {
                data.set(next_data);
                current_step.set(step + 1);
            } else {
                log!(
                    "Form submitted:",
                    serde_json::to_string(&next_data).unwrap_or_default()
                );
                data.set(next_data);
                completed.set(true);
            }
        })
    };

    let oninput = {
        let input_value = input_value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input_value.set(input.value());
        })
    };

    if *completed {
        let receipt = serde_json::to_string_pretty(&*data).unwrap_or_default();
        let reset = {
            let current_step = current_step.clone();
            let data = data.clone();
            let completed = completed.clone();
            Callback::from(move |_| {
                completed.set(false);
                current_step.set(0);
                data.set(ContactRequest::default());
            })
        };
        return html! {
            <div style="display: flex; flex-direction: column; gap: 1rem;">
                <p style="color: #10b981; text-transform: uppercase; font-weight: bold;">
                    <Typewriter
                        text="TRANSMISSION SUCCESSFUL. DATA ENCRYPTED AND STORED."
                        speed={30}
                    />
                </p>
                <div style={format!("padding: 1rem; border: 1px solid {};", colors.primary)}>
                    <pre style={format!("font-size: 0.75rem; opacity: 0.7; color: {};", colors.primary)}>
                        { receipt }
                    </pre>
                </div>
                <button
                    onclick={reset}
                    style={format!(
                        "align-self: flex-start; background: none; border: none; \
                         font-family: inherit; font-size: 0.75rem; \
                         text-decoration: underline; color: {};",
                        colors.primary
                    )}
                >
                    { "INITIATE NEW HANDSHAKE?" }
                </button>
            </div>
        };
    }

    let step = *current_step;
    let (_, question, input_type) = STEPS[step];

    html! {
        <div style="display: flex; flex-direction: column; gap: 1.5rem;">
            // Echo of already-answered prompts.
            <div style="display: flex; flex-direction: column; gap: 1rem;">
                { for STEPS.iter().take(step).map(|(field, prompt, _)| html! {
                    <div key={*field} style="opacity: 0.5;">
                        <p
                            style={format!(
                                "font-size: 0.75rem; text-transform: uppercase; color: {};",
                                colors.accent
                            )}
                        >
                            { *prompt }
                        </p>
                        <p style={format!("font-size: 1.1rem; font-weight: bold; color: {};", colors.primary)}>
                            { format!("> {}", data.get(field)) }
                        </p>
                    </div>
                }) }
            </div>

            <div style="display: flex; flex-direction: column; gap: 0.5rem;">
                <p
                    style={format!(
                        "font-size: 0.85rem; text-transform: uppercase; \
                         letter-spacing: 0.2em; font-weight: bold; color: {};",
                        colors.primary
                    )}
                >
                    <Typewriter key={step} text={question} speed={20} show_cursor={false} />
                </p>
                <form {onsubmit} style="display: flex; align-items: center; gap: 0.5rem;">
                    <span style={format!("font-size: 1.1rem; font-weight: bold; color: {};", colors.primary)}>
                        { ">" }
                    </span>
                    <input
                        ref={input_ref}
                        type={input_type}
                        value={(*input_value).clone()}
                        {oninput}
                        placeholder="..."
                        style={format!(
                            "flex: 1; background: transparent; border: none; outline: none; \
                             font-size: 1.1rem; font-family: inherit; color: {};",
                            colors.primary
                        )}
                    />
                </form>
            </div>

            <div
                style={format!(
                    "font-size: 0.65rem; opacity: 0.4; text-transform: uppercase; \
                     margin-top: 2rem; color: {};",
                    colors.accent
                )}
            >
                { "Press ENTER to confirm input" }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::ContactRequest;

    #[test]
    fn receipt_serializes_all_fields() {
        let mut request = ContactRequest::default();
        request.set("name", "Ada".into());
        request.set("email", "ada@example.com".into());
        request.set("message", "hello".into());
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Ada","email":"ada@example.com","message":"hello"}"#
        );
        assert_eq!(request.get("email"), "ada@example.com");
    }
}
