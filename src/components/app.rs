use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::board::Board;
use super::controls_panel::ControlsPanel;
use super::round_over_overlay::RoundOverOverlay;
use super::score_board::ScoreBoard;
use crate::model::{ChangeEvent, Field, GameConfig};
use crate::state::{GameClock, Store};

#[function_component(App)]
pub fn app() -> Html {
    let store = use_memo((), |_| Store::new(GameConfig::default()));

    // Display mirrors; written only from the store subscriptions below.
    let time = use_state(|| store.time());
    let play = use_state(|| store.play());
    let score = use_state(|| store.score());
    let cells = use_state(|| store.cells());
    let announce = use_state(String::new);

    // Wire clock, render subscriptions, and the Space hotkey once on mount.
    {
        let store = store.clone();
        let time = time.clone();
        let play = play.clone();
        let score = score.clone();
        let cells = cells.clone();
        let announce = announce.clone();
        use_effect_with((), move |_| {
            let clock = GameClock::new(store.clone());
            GameClock::attach(&clock);

            {
                let time = time.clone();
                store.subscribe(Field::Time, move |event| {
                    if let ChangeEvent::Time(value) = event {
                        time.set(*value);
                    }
                });
            }
            {
                let play = play.clone();
                store.subscribe(Field::Play, move |event| {
                    if let ChangeEvent::Play(value) = event {
                        play.set(*value);
                    }
                });
            }
            {
                let score = score.clone();
                store.subscribe(Field::Score, move |event| {
                    if let ChangeEvent::Score(value) = event {
                        score.set(*value);
                    }
                });
            }
            {
                let cells = cells.clone();
                let announce = announce.clone();
                store.subscribe(Field::Cells, move |event| {
                    let ChangeEvent::Cells(value) = event else {
                        return;
                    };
                    // Last active cell wins the announcement; the live
                    // region keeps its previous text when nothing is up.
                    if let Some(position) = value.iter().rposition(|&remaining| remaining > 0) {
                        announce.set(format!("Mole popped up at position {}", position + 1));
                    }
                    cells.set(value.clone());
                });
            }

            let window = web_sys::window();
            let key_cb = {
                let store = store.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.code() == "Space" {
                        e.prevent_default();
                        let playing = store.play();
                        store.set_play(!playing);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(win) = &window {
                let _ = win
                    .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
            }

            move || {
                clock.borrow_mut().stop();
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(key_cb);
            }
        });
    }

    let on_toggle_play = {
        let store = store.clone();
        Callback::from(move |_| {
            let playing = store.play();
            store.set_play(!playing);
        })
    };
    let on_reset = {
        let store = store.clone();
        Callback::from(move |_| store.reset())
    };
    let on_strike = {
        let store = store.clone();
        Callback::from(move |index: usize| {
            if !store.play() {
                return;
            }
            let mut next = store.cells();
            if next.get(index).copied().unwrap_or(0) == 0 {
                return;
            }
            store.set_score(store.score() + 1);
            next[index] = 0;
            store.set_cells(next);
        })
    };

    let play_label = if *play && *time > 0 { "Pause" } else { "Play" };
    let round_over = *time == 0;

    html! {
        <div id="game">
            <h1>{"Whack-a-Mole"}</h1>
            <ScoreBoard time={*time} score={*score} />
            <Board cells={(*cells).clone()} on_strike={on_strike} />
            <ControlsPanel
                play_label={play_label.to_string()}
                on_toggle_play={on_toggle_play}
                on_reset={on_reset.clone()}
            />
            <RoundOverOverlay show={round_over} score={*score} restart={on_reset} />
            <p id="announce" class="visually-hidden" role="status" aria-live="polite">
                { (*announce).clone() }
            </p>
        </div>
    }
}
