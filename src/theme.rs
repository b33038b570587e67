use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeId {
    Matrix,
    Amber,
    Arctic,
    Synthwave,
}

impl ThemeId {
    pub fn label(&self) -> &'static str {
        match self {
            ThemeId::Matrix => "matrix",
            ThemeId::Amber => "amber",
            ThemeId::Arctic => "arctic",
            ThemeId::Synthwave => "synthwave",
        }
    }

    // Cycle order for the header theme button.
    pub fn next(&self) -> ThemeId {
        match self {
            ThemeId::Matrix => ThemeId::Amber,
            ThemeId::Amber => ThemeId::Arctic,
            ThemeId::Arctic => ThemeId::Synthwave,
            ThemeId::Synthwave => ThemeId::Matrix,
        }
    }

    pub fn colors(&self) -> &'static ThemeColors {
        match self {
            ThemeId::Matrix => &ThemeColors {
                primary: "#00ff66",
                secondary: "#001a0a",
                accent: "#aaffcc",
                bg: "#000000",
                glow: "rgba(0, 255, 102, 0.4)",
            },
            ThemeId::Amber => &ThemeColors {
                primary: "#FFB000",
                secondary: "#332200",
                accent: "#FFE0A3",
                bg: "#0a0a0a",
                glow: "rgba(255, 176, 0, 0.5)",
            },
            ThemeId::Arctic => &ThemeColors {
                primary: "#00F0FF",
                secondary: "#002B36",
                accent: "#E0FFFF",
                bg: "#0a0a0a",
                glow: "rgba(0, 240, 255, 0.5)",
            },
            ThemeId::Synthwave => &ThemeColors {
                primary: "#FF00FF",
                secondary: "#330033",
                accent: "#FFB3FF",
                bg: "#0a0a0a",
                glow: "rgba(255, 0, 255, 0.5)",
            },
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ThemeColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub bg: &'static str,
    pub glow: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct Theme {
    pub id: ThemeId,
    set: Callback<ThemeId>,
}

impl Theme {
    pub fn colors(&self) -> &'static ThemeColors {
        self.id.colors()
    }

    pub fn cycle(&self) {
        self.set.emit(self.id.next());
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let id = use_state(|| ThemeId::Matrix);

    // Mirror the active palette onto CSS custom properties so plain <style>
    // blocks can use var(--primary) and friends.
    {
        use_effect_with_deps(
            |id: &ThemeId| {
                if let Some(root) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                    .and_then(|e| e.dyn_into::<HtmlElement>().ok())
                {
                    let colors = id.colors();
                    let style = root.style();
                    let _ = style.set_property("--primary", colors.primary);
                    let _ = style.set_property("--primary-fade", &format!("{}55", colors.primary));
                    let _ = style.set_property("--secondary", colors.secondary);
                    let _ = style.set_property("--accent", colors.accent);
                    let _ = style.set_property("--bg", colors.bg);
                    let _ = style.set_property("--glow", colors.glow);
                }
                || ()
            },
            *id,
        );
    }

    let set = {
        let id = id.clone();
        Callback::from(move |next| id.set(next))
    };

    let theme = Theme { id: *id, set };

    html! {
        <ContextProvider<Theme> context={theme}>
            { for props.children.iter() }
        </ContextProvider<Theme>>
    }
}

#[hook]
pub fn use_theme() -> Theme {
    use_context::<Theme>().expect("use_theme must be called under a ThemeProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_theme_once() {
        let mut seen = vec![ThemeId::Matrix];
        let mut current = ThemeId::Matrix;
        for _ in 0..3 {
            current = current.next();
            assert!(!seen.contains(&current));
            seen.push(current);
        }
        assert_eq!(current.next(), ThemeId::Matrix);
    }

    #[test]
    fn palettes_are_distinct() {
        assert_eq!(ThemeId::Matrix.colors().primary, "#00ff66");
        assert_ne!(
            ThemeId::Amber.colors().primary,
            ThemeId::Arctic.colors().primary
        );
        assert_eq!(ThemeId::Synthwave.label(), "synthwave");
    }
}
