//! Round clock: a Stopped/Running pair of interval timers.
//!
//! One interval counts the round down a second at a time, the other drives
//! mole activation. Both are registered on every play transition and always
//! cleared first, so repeated toggles can never stack duplicate timers.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::model::{ChangeEvent, Field, advance_cells};
use crate::state::Store;
use crate::util::{clog, random_int};

pub struct GameClock {
    store: Rc<Store>,
    countdown_id: Option<i32>,
    activation_id: Option<i32>,
    // Kept so the browser-side callbacks stay valid while registered.
    // stop() clears the interval handles but leaves these in place: the
    // countdown tick stops the clock from inside its own callback, and
    // dropping the executing closure there would invalidate it mid-call.
    // They are replaced on the next start().
    countdown_cb: Option<Closure<dyn FnMut()>>,
    activation_cb: Option<Closure<dyn FnMut()>>,
}

impl GameClock {
    pub fn new(store: Rc<Store>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            store,
            countdown_id: None,
            activation_id: None,
            countdown_cb: None,
            activation_cb: None,
        }))
    }

    /// Wire the clock to the store's play field. Every transition clears
    /// both timers; `true` restarts them unless the round has expired, in
    /// which case only a reset can bring the game back.
    pub fn attach(clock: &Rc<RefCell<Self>>) {
        let store = clock.borrow().store.clone();
        let clock = clock.clone();
        store.subscribe(Field::Play, move |event| {
            let ChangeEvent::Play(playing) = event else {
                return;
            };
            clock.borrow_mut().stop();
            let store = clock.borrow().store.clone();
            if store.time() == 0 {
                return;
            }
            if *playing {
                clog("round running");
                GameClock::start(&clock);
            } else {
                clog("round paused");
            }
        });
    }

    // Running entry action: register both intervals.
    fn start(clock: &Rc<RefCell<Self>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let store = clock.borrow().store.clone();
        let interval = store.config().tick_interval_ms as i32;

        let countdown = {
            let clock = clock.clone();
            let store = store.clone();
            Closure::wrap(Box::new(move || {
                let remaining = store.time().saturating_sub(1);
                store.set_time(remaining);
                if remaining == 0 {
                    // Terminal transition: unlike a user pause, the board
                    // is cleared and the play flag drops.
                    clock.borrow_mut().stop();
                    store.set_cells(vec![0; store.config().cell_count]);
                    store.set_play(false);
                    clog("round over");
                }
            }) as Box<dyn FnMut()>)
        };
        let activation = {
            let store = store.clone();
            Closure::wrap(Box::new(move || {
                let config = store.config();
                let trigger = random_int(0, config.cell_count as u32 - 1) as usize;
                let duration = random_int(config.min_active_ms, config.max_active_ms);
                let next = advance_cells(&store.cells(), trigger, duration, config.tick_interval_ms);
                store.set_cells(next);
            }) as Box<dyn FnMut()>)
        };

        let mut c = clock.borrow_mut();
        c.countdown_id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                countdown.as_ref().unchecked_ref(),
                interval,
            )
            .ok();
        c.activation_id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                activation.as_ref().unchecked_ref(),
                interval,
            )
            .ok();
        c.countdown_cb = Some(countdown);
        c.activation_cb = Some(activation);
    }

    /// Stopped entry action shared by pause, restart, and expiry: clear
    /// both interval handles. Idempotent.
    pub fn stop(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Some(id) = self.countdown_id.take() {
                window.clear_interval_with_handle(id);
            }
            if let Some(id) = self.activation_id.take() {
                window.clear_interval_with_handle(id);
            }
        }
    }
}
