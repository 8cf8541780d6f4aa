use yew::prelude::*;

/// Accessible labels matching a cell's presentation state.
pub const MOLE_UP_LABEL: &str = "Mole up, press to whack";
pub const MOLE_HIDDEN_LABEL: &str = "Mole hiding";

#[derive(Properties, PartialEq, Clone)]
pub struct BoardProps {
    /// Remaining active milliseconds per cell; 0 renders as hidden.
    pub cells: Vec<u32>,
    /// Fired with the 0-based index of the struck mole button.
    pub on_strike: Callback<usize>,
}

#[function_component(Board)]
pub fn board(props: &BoardProps) -> Html {
    html! {
        <div id="game-board" class="board">
            { for props.cells.iter().enumerate().map(|(index, &remaining)| {
                let active = remaining > 0;
                let onclick = {
                    let on_strike = props.on_strike.clone();
                    Callback::from(move |_| on_strike.emit(index))
                };
                html! {
                    <button
                        class={classes!("mole", active.then_some("mole--active"))}
                        aria-label={ if active { MOLE_UP_LABEL } else { MOLE_HIDDEN_LABEL } }
                        {onclick}
                    ></button>
                }
            }) }
        </div>
    }
}
