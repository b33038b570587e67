use yew::prelude::*;

use crate::components::terminal_form::TerminalForm;
use crate::theme::use_theme;

#[function_component(Contact)]
pub fn contact() -> Html {
    let theme = use_theme();
    let colors = theme.colors();

    html! {
        <div style="max-width: 42rem; margin: 0 auto; padding: 3rem 0;">
            <h2
                style={format!(
                    "font-size: 1.5rem; font-weight: bold; text-transform: uppercase; \
                     margin-bottom: 2rem; color: {};",
                    colors.primary
                )}
            >
                { "// INITIATE_CONTACT_PROTOCOL" }
            </h2>
            <TerminalForm />
        </div>
    }
}
