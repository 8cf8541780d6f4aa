use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub play_label: String,
    pub on_toggle_play: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle_play.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="controls">
            <button id="control-start" onclick={toggle_cb}>{ props.play_label.clone() }</button>
            <button id="control-reset" onclick={reset_cb}>{"Reset"}</button>
            <div class="controls__hint">{"Hotkey: Space to play/pause"}</div>
        </div>
    }
}
