use chrono::Local;
use yew::prelude::*;

use crate::components::typewriter::Typewriter;
use crate::theme::use_theme;

const PROJECT_DESCRIPTION: &str = "This project is about creating a clean, engaging website \
that clearly explains what Verzz is and why it matters. The focus is on strong branding, \
smooth user experience, and building trust with users and potential investors. From design \
to deployment, the goal is to deliver a polished, reliable website that reflects the quality \
of the product behind it.";

struct TimelineEntry {
    date: &'static str,
    event: &'static str,
    description: &'static str,
}

const TIMELINE: [TimelineEntry; 6] = [
    TimelineEntry {
        date: "2026-01-01",
        event: "UNDERSTANDING THE ASSIGNMENT",
        description: "Understanding the assignment and making sure all functionalities of the assignment is understood.",
    },
    TimelineEntry {
        date: "2026-01-03",
        event: "DESIGNING",
        description: "Designing the website with the ideas from STEP 1.",
    },
    TimelineEntry {
        date: "2026-01-08",
        event: "DEVELOPMENT",
        description: "Developing the website.",
    },
    TimelineEntry {
        date: "2026-01-17",
        event: "TESTING 1",
        description: "Testing for bugs and glitches.",
    },
    TimelineEntry {
        date: "2026-01-18",
        event: "REVIEW",
        description: "Review from the client to ensure all things are satisfied",
    },
    TimelineEntry {
        date: "2026-01-26",
        event: "FINAL_HANDOVER",
        description: "Handovering the website to the client",
    },
];

struct Document {
    title: &'static str,
    filename: &'static str,
    size: &'static str,
    url: &'static str,
}

const DOCUMENTS: [Document; 2] = [
    Document {
        title: "Software Requirements",
        filename: "srs.pdf",
        size: "1.4 MB",
        url: "https://drive.google.com/file/d/1WyWIMmfPwUKfgF7Jky6TwLcLYqxZcpEC/view?usp=share_link",
    },
    Document {
        title: "Legal Agreement",
        filename: "non-disclosure-agreement.pdf",
        size: "2.1 MB",
        url: "https://drive.google.com/file/d/1rann62ezO-WjIETlAF2GT9Aqkq9ot6s5/view?usp=share_link",
    },
];

const SYSTEM_LOGS: [(&str, &str, &str); 3] = [
    ("14:02:11", "OK", "Core systems initialized"),
    ("14:05:22", "OK", "Establishing secure document pointer"),
    ("14:10:05", "OK", "Dashboard modules loaded"),
];

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub username: String,
}

// Everything on the dashboard is fixed content; the only state is which
// timeline step is selected.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let theme = use_theme();
    let colors = theme.colors();
    let active_index = use_state(|| 0usize);

    let session_time = Local::now().format("%H:%M:%S").to_string();
    let progress = (*active_index as f64 / (TIMELINE.len() - 1) as f64) * 100.0;
    let active = &TIMELINE[*active_index];

    let section_header = |command: &str, delay: u32| {
        html! {
            <div
                style={format!(
                    "display: flex; align-items: center; gap: 0.75rem; font-size: 1.1rem; \
                     font-weight: bold; color: {};",
                    colors.primary
                )}
            >
                <span style="opacity: 0.8;">{ ">" }</span>
                <Typewriter text={command.to_string()} speed={30} {delay} />
            </div>
        }
    };

    html! {
        <div style="display: flex; flex-direction: column; gap: 4rem; padding-bottom: 6rem;">
            // Greeting
            <div style="display: flex; flex-direction: column; gap: 0.5rem;">
                <h1
                    style={format!(
                        "font-size: 2rem; font-weight: bold; display: flex; \
                         align-items: center; gap: 1rem; color: {};",
                        colors.primary
                    )}
                >
                    <span>{ ">" }</span>
                    <Typewriter text={props.username.to_lowercase()} speed={40} show_cursor={false} />
                </h1>
                <p
                    style={format!(
                        "font-size: 0.6rem; text-transform: uppercase; letter-spacing: 0.3em; \
                         opacity: 0.4; margin-left: 2.5rem; color: {};",
                        colors.accent
                    )}
                >
                    { format!("Session established_active_node @ {}", session_time) }
                </p>
            </div>

            // Project details
            <div style="display: flex; flex-direction: column; gap: 1rem;">
                { section_header("project_details", 500) }
                <div
                    style={format!(
                        "margin-left: 0.25rem; padding: 0.5rem 0 0.5rem 2.5rem; \
                         border-left: 1px solid {}44;",
                        colors.primary
                    )}
                >
                    <div style="background: rgba(255,255,255,0.05); padding: 1.5rem; \
                                border: 1px dashed rgba(255,255,255,0.1); border-radius: 2px;">
                        <p
                            style={format!(
                                "opacity: 0.7; font-size: 0.9rem; line-height: 1.6; \
                                 letter-spacing: 0.02em; font-style: italic; color: {};",
                                colors.primary
                            )}
                        >
                            { format!("\"{}\"", PROJECT_DESCRIPTION) }
                        </p>
                    </div>
                </div>
            </div>

            // Timeline
            <div style="display: flex; flex-direction: column; gap: 1.5rem;">
                { section_header("cat /var/log/timeline", 1000) }
                <div style="margin-left: 2.5rem; display: flex; flex-direction: column; gap: 1.5rem;">
                    <h2
                        style={format!(
                            "font-size: 1.25rem; font-weight: bold; text-transform: uppercase; \
                             letter-spacing: 0.2em; color: {};",
                            colors.primary
                        )}
                    >
                        { "Timeline" }
                    </h2>

                    <div style="position: relative; padding: 2rem;">
                        // Track
                        <div
                            style={format!(
                                "position: absolute; top: 50%; left: 2rem; right: 2rem; \
                                 height: 1px; transform: translateY(-50%); background: {}33;",
                                colors.primary
                            )}
                        ></div>
                        // Progress
                        <div
                            style={format!(
                                "position: absolute; top: 50%; left: 2rem; height: 2px; \
                                 transform: translateY(-50%); background: {}; \
                                 box-shadow: 0 0 10px {}; max-width: calc(100% - 4rem); \
                                 width: calc((100% - 4rem) * {progress} / 100.0); \
                                 transition: width 0.7s ease-in-out;",
                                colors.primary, colors.glow
                            )}
                        ></div>

                        <div style="display: flex; justify-content: space-between; \
                                    align-items: center; position: relative; z-index: 10;">
                            { for TIMELINE.iter().enumerate().map(|(index, entry)| {
                                let reached = *active_index >= index;
                                let selected = *active_index == index;
                                let onclick = {
                                    let active_index = active_index.clone();
                                    Callback::from(move |_| active_index.set(index))
                                };
                                html! {
                                    <button
                                        key={entry.date}
                                        {onclick}
                                        style={format!(
                                            "width: 2.5rem; height: 2.5rem; border-radius: 50%; \
                                             border: 2px solid {p}; font-family: inherit; \
                                             font-weight: bold; font-size: 0.85rem; \
                                             transition: all 0.3s ease; background: {bg}; \
                                             color: {fg}; box-shadow: {shadow};",
                                            p = colors.primary,
                                            bg = if reached { colors.primary } else { "#000" },
                                            fg = if reached { "#000" } else { colors.primary },
                                            shadow = if selected {
                                                format!("0 0 15px {}", colors.glow)
                                            } else {
                                                "none".to_string()
                                            },
                                        )}
                                    >
                                        { index + 1 }
                                    </button>
                                }
                            }) }
                        </div>
                    </div>

                    <div
                        key={*active_index}
                        style={format!(
                            "padding: 1.5rem; border: 1px solid {}22; background: rgba(0,0,0,0.4); \
                             min-height: 10rem; display: flex; flex-direction: column; \
                             justify-content: center; gap: 0.75rem;",
                            colors.primary
                        )}
                    >
                        <span
                            style={format!(
                                "font-size: 0.7rem; font-weight: bold; text-transform: uppercase; \
                                 opacity: 0.6; color: {};",
                                colors.accent
                            )}
                        >
                            { format!("TIMESTAMP: {}", active.date) }
                        </span>
                        <h3
                            style={format!(
                                "font-size: 1.25rem; font-weight: 900; letter-spacing: 0.2em; \
                                 text-transform: uppercase; color: {};",
                                colors.primary
                            )}
                        >
                            { active.event }
                        </h3>
                        <p
                            style={format!(
                                "font-size: 0.85rem; opacity: 0.8; line-height: 1.6; \
                                 max-width: 42rem; font-style: italic; color: {};",
                                colors.primary
                            )}
                        >
                            { active.description }
                        </p>
                    </div>
                </div>
            </div>

            // Logs
            <div style="display: flex; flex-direction: column; gap: 1.5rem;">
                { section_header("tail -f /var/log/system", 1500) }
                <div
                    style={format!(
                        "margin-left: 2.5rem; border-left: 1px solid {}22; padding-left: 1.5rem; \
                         display: flex; flex-direction: column; gap: 0.5rem;",
                        colors.primary
                    )}
                >
                    { for SYSTEM_LOGS.iter().map(|(time, status, msg)| html! {
                        <div
                            key={*time}
                            style="display: flex; gap: 1rem; font-size: 0.75rem; opacity: 0.6; \
                                   white-space: nowrap;"
                        >
                            <span style={format!("color: {};", colors.accent)}>{ format!("[{}]", time) }</span>
                            <span style="font-weight: bold; color: #10b981;">{ format!("[{}]", status) }</span>
                            <span style={format!("color: {};", colors.primary)}>{ *msg }</span>
                        </div>
                    }) }
                </div>
            </div>

            // Documents
            <div style="display: flex; flex-direction: column; gap: 1.5rem;">
                { section_header("cat secure_document.ptr", 2000) }
                <div style="margin-left: 2.5rem; display: grid; grid-template-columns: 1fr; \
                            gap: 1.5rem; max-width: 42rem;">
                    { for DOCUMENTS.iter().map(|doc| html! {
                        <div
                            key={doc.filename}
                            style={format!(
                                "padding: 2rem; border: 2px dashed {}33; background: rgba(0,0,0,0.6); \
                                 position: relative; display: flex; flex-direction: column; gap: 1.5rem;",
                                colors.primary
                            )}
                        >
                            <div style="display: flex; gap: 1rem; align-items: flex-start;">
                                <div style="min-width: 0; flex: 1;">
                                    <p style={format!("font-size: 0.55rem; text-transform: uppercase; opacity: 0.4; color: {};", colors.primary)}>
                                        { "Source: Remote_Vault" }
                                    </p>
                                    <h4
                                        style={format!(
                                            "font-size: 1.1rem; font-weight: bold; \
                                             text-transform: uppercase; color: {};",
                                            colors.primary
                                        )}
                                    >
                                        { doc.filename }
                                    </h4>
                                    <p style={format!("font-size: 0.6rem; opacity: 0.6; font-style: italic; color: {};", colors.primary)}>
                                        { format!("Ref: {}", doc.title) }
                                    </p>
                                </div>
                            </div>

                            <div style="height: 1px; width: 100%; background: rgba(255,255,255,0.1);"></div>

                            <div style="display: flex; justify-content: space-between; align-items: center;">
                                <span style="font-size: 0.6rem; font-weight: bold; text-transform: uppercase; color: #10b981;">
                                    { "Security Scan Passed" }
                                </span>
                                <span style={format!("font-size: 0.6rem; opacity: 0.4; text-transform: uppercase; color: {};", colors.primary)}>
                                    { format!("Size: {}", doc.size) }
                                </span>
                            </div>

                            <a
                                href={doc.url}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="document-link"
                                style={format!("border: 2px solid {p}; color: {p};", p = colors.primary)}
                            >
                                { "[ OPEN_REMOTE_DOCUMENT ]" }
                            </a>

                            // Corner accents
                            <div style={format!("position: absolute; top: 0; left: 0; width: 1rem; height: 1rem; border-top: 2px solid {p}; border-left: 2px solid {p};", p = colors.primary)}></div>
                            <div style={format!("position: absolute; bottom: 0; right: 0; width: 1rem; height: 1rem; border-bottom: 2px solid {p}; border-right: 2px solid {p};", p = colors.primary)}></div>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .document-link {
                    width: 100%;
                    padding: 1rem 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    font-size: 0.7rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }
                .document-link:hover {
                    background: var(--primary);
                    color: #000 !important;
                }
                "#}
            </style>
        </div>
    }
}
