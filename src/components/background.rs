use yew::prelude::*;

// Decorative grid floor behind the terminal window. Pure CSS; picks its line
// color up from the --primary-fade custom property.
#[function_component(BackgroundGrid)]
pub fn background_grid() -> Html {
    html! {
        <>
            <div class="grid-floor" aria-hidden="true"></div>
            <style>
                {r#"
                .grid-floor {
                    position: absolute;
                    left: -50%;
                    right: -50%;
                    bottom: -20%;
                    height: 60%;
                    z-index: 0;
                    pointer-events: none;
                    background-image:
                        linear-gradient(var(--primary-fade) 1px, transparent 1px),
                        linear-gradient(90deg, var(--primary-fade) 1px, transparent 1px);
                    background-size: 48px 48px;
                    transform: perspective(400px) rotateX(62deg);
                    transform-origin: center top;
                    animation: grid-scroll 3s linear infinite;
                    mask-image: linear-gradient(to bottom, transparent, black 30%);
                    -webkit-mask-image: linear-gradient(to bottom, transparent, black 30%);
                }
                @keyframes grid-scroll {
                    from { background-position-y: 0; }
                    to { background-position-y: 48px; }
                }
                "#}
            </style>
        </>
    }
}
