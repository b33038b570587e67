use log::{info, Level};
use yew::prelude::*;

mod config;
mod sound;
mod theme;
mod components {
    pub mod background;
    pub mod command_nav;
    pub mod cursor;
    pub mod follower;
    pub mod layout;
    pub mod terminal_form;
    pub mod typewriter;
}
mod views {
    pub mod contact;
    pub mod dashboard;
    pub mod home;
    pub mod login;
}

use components::cursor::CustomCursor;
use components::layout::Layout;
use theme::ThemeProvider;
use views::{contact::Contact, dashboard::Dashboard, home::Home, login::Login};

// In-memory view switch, deliberately not a router: nothing is reflected in
// the URL and nothing survives a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Home,
    Login,
    Dashboard,
    Contact,
}

// The only "account database" this site has: one pair in a state variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub user: String,
    pub pass: String,
}

impl Credentials {
    fn demo() -> Self {
        Self {
            user: config::DEFAULT_OPERATOR.to_string(),
            pass: config::DEFAULT_ACCESS_CODE.to_string(),
        }
    }
}

#[function_component(AppContent)]
fn app_content() -> Html {
    let view = use_state(|| AppView::Home);
    let logged_in = use_state(|| false);
    let current_user = use_state(|| None::<String>);
    let credentials = use_state(|| Some(Credentials::demo()));

    let on_navigate = {
        let view = view.clone();
        Callback::from(move |next: AppView| {
            info!("Navigating to {:?}", next);
            view.set(next);
        })
    };

    let on_logout = {
        let view = view.clone();
        let logged_in = logged_in.clone();
        let current_user = current_user.clone();
        Callback::from(move |_| {
            info!("Session terminated");
            logged_in.set(false);
            current_user.set(None);
            view.set(AppView::Home);
        })
    };

    let on_login_success = {
        let view = view.clone();
        let logged_in = logged_in.clone();
        let current_user = current_user.clone();
        Callback::from(move |username: String| {
            info!("Session established for {}", username);
            logged_in.set(true);
            current_user.set(Some(username));
            view.set(AppView::Dashboard);
        })
    };

    let on_register = {
        let credentials = credentials.clone();
        Callback::from(move |new_pair: Credentials| {
            credentials.set(Some(new_pair));
        })
    };

    let login_view = || {
        html! {
            <Login
                on_login_success={on_login_success.clone()}
                credentials={(*credentials).clone()}
                on_register={on_register.clone()}
            />
        }
    };

    let inner = match *view {
        AppView::Home => html! {
            <Home on_navigate={on_navigate.clone()} logged_in={*logged_in} />
        },
        AppView::Contact => html! { <Contact /> },
        AppView::Login => login_view(),
        AppView::Dashboard => {
            if *logged_in {
                let username = (*current_user).clone().unwrap_or_else(|| "AGENT".to_string());
                html! { <Dashboard {username} /> }
            } else {
                // Gate: the dashboard command is reachable while logged out,
                // but it only ever shows the login prompt.
                login_view()
            }
        }
    };

    html! {
        <>
            <CustomCursor />
            <Layout
                current_view={*view}
                on_navigate={on_navigate}
                logged_in={*logged_in}
                on_logout={on_logout}
            >
                { inner }
            </Layout>
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <AppContent />
        </ThemeProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
