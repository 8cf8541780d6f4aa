use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RoundOverOverlayProps {
    pub show: bool,
    pub score: u32,
    pub restart: Callback<()>,
}

#[function_component]
pub fn RoundOverOverlay(props: &RoundOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    html! {
        <div class="overlay">
            <h2>{"Round Over"}</h2>
            <p>{ format!("Final score: {}", props.score) }</p>
            <div class="overlay__actions">
                <button onclick={restart_btn}>{"Play Again"}</button>
            </div>
        </div>
    }
}
