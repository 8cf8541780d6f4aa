//! Observable store: the single owner of [`GameState`].
//!
//! Assigning a field stores the value and synchronously invokes every
//! handler subscribed to that field, in registration order, on the caller's
//! stack. There is no queueing, no dedup of unchanged values, and no
//! unsubscribe; handlers are registered once at startup and live for the
//! page lifetime. A handler may assign other fields from inside its
//! callback (nested dispatch), but must not register new subscriptions.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::model::{ChangeEvent, Field, GameConfig, GameState};

type Handler = Box<dyn Fn(&ChangeEvent)>;

pub struct Store {
    config: GameConfig,
    state: RefCell<GameState>,
    handlers: RefCell<HashMap<Field, Vec<Handler>>>,
}

impl Store {
    pub fn new(config: GameConfig) -> Self {
        config.validate();
        let state = RefCell::new(GameState::initial(&config));
        Self {
            config,
            state,
            handlers: RefCell::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn time(&self) -> u32 {
        self.state.borrow().time
    }

    pub fn play(&self) -> bool {
        self.state.borrow().play
    }

    pub fn score(&self) -> u32 {
        self.state.borrow().score
    }

    pub fn cells(&self) -> Vec<u32> {
        self.state.borrow().cells.clone()
    }

    pub fn subscribe(&self, field: Field, handler: impl Fn(&ChangeEvent) + 'static) {
        self.handlers
            .borrow_mut()
            .entry(field)
            .or_default()
            .push(Box::new(handler));
    }

    pub fn set_time(&self, value: u32) {
        self.state.borrow_mut().time = value;
        self.emit(ChangeEvent::Time(value));
    }

    pub fn set_play(&self, value: bool) {
        self.state.borrow_mut().play = value;
        self.emit(ChangeEvent::Play(value));
    }

    pub fn set_score(&self, value: u32) {
        self.state.borrow_mut().score = value;
        self.emit(ChangeEvent::Score(value));
    }

    pub fn set_cells(&self, value: Vec<u32>) {
        self.state.borrow_mut().cells = value.clone();
        self.emit(ChangeEvent::Cells(value));
    }

    /// Restore every field to its initial value. Each assignment goes
    /// through the normal setter so subscribers see one event per field.
    pub fn reset(&self) {
        let initial = GameState::initial(&self.config);
        self.set_time(initial.time);
        self.set_play(initial.play);
        self.set_score(initial.score);
        self.set_cells(initial.cells);
    }

    // The state borrow is released before dispatch so handlers may read and
    // assign fields from inside the callback.
    fn emit(&self, event: ChangeEvent) {
        let handlers = self.handlers.borrow();
        if let Some(list) = handlers.get(&event.field()) {
            for handler in list {
                handler(&event);
            }
        }
    }
}

// Identity comparison so an `Rc<Store>` can sit in hook or prop state.
impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn test_store() -> Store {
        Store::new(GameConfig::default())
    }

    #[test]
    fn set_delivers_synchronously_to_field_subscribers() {
        let store = test_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            store.subscribe(Field::Score, move |event| {
                seen.borrow_mut().push(event.clone());
            });
        }
        store.set_score(3);
        assert_eq!(*seen.borrow(), vec![ChangeEvent::Score(3)]);
        assert_eq!(store.score(), 3);
    }

    #[test]
    fn unchanged_value_still_emits() {
        let store = test_store();
        let count = Rc::new(RefCell::new(0));
        {
            let count = count.clone();
            store.subscribe(Field::Time, move |_| {
                *count.borrow_mut() += 1;
            });
        }
        store.set_time(60);
        store.set_time(60);
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let store = test_store();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let order = order.clone();
            store.subscribe(Field::Play, move |_| {
                order.borrow_mut().push(tag);
            });
        }
        store.set_play(true);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn handlers_only_see_their_field() {
        let store = test_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            store.subscribe(Field::Score, move |event| {
                seen.borrow_mut().push(event.clone());
            });
        }
        store.set_time(10);
        store.set_play(true);
        store.set_cells(vec![0; 9]);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn handler_may_assign_another_field_reentrantly() {
        // The countdown hitting zero clears the board from inside the time
        // handler; dispatch must tolerate that nesting.
        let store = Rc::new(test_store());
        {
            let inner = store.clone();
            store.subscribe(Field::Time, move |event| {
                if let ChangeEvent::Time(0) = event {
                    let cleared = vec![0; inner.config().cell_count];
                    inner.set_cells(cleared);
                }
            });
        }
        let cells_events = Rc::new(RefCell::new(0));
        {
            let cells_events = cells_events.clone();
            store.subscribe(Field::Cells, move |_| {
                *cells_events.borrow_mut() += 1;
            });
        }
        store.set_cells(vec![1000; 9]);
        store.set_time(0);
        assert_eq!(*cells_events.borrow(), 2);
        assert_eq!(store.cells(), vec![0; 9]);
    }

    #[test]
    fn reset_restores_defaults_and_emits_once_per_field() {
        let store = test_store();
        let order = Rc::new(RefCell::new(Vec::new()));
        for field in [Field::Time, Field::Play, Field::Score, Field::Cells] {
            let order = order.clone();
            store.subscribe(field, move |event| {
                order.borrow_mut().push(event.field());
            });
        }
        store.set_time(7);
        store.set_play(true);
        store.set_score(12);
        let mut active = vec![0; 9];
        active[4] = 2500;
        store.set_cells(active);
        order.borrow_mut().clear();

        store.reset();
        assert_eq!(
            *order.borrow(),
            vec![Field::Time, Field::Play, Field::Score, Field::Cells]
        );
        assert_eq!(store.time(), 60);
        assert!(!store.play());
        assert_eq!(store.score(), 0);
        assert_eq!(store.cells(), vec![0; 9]);
    }

    #[test]
    #[should_panic(expected = "active duration bounds inverted")]
    fn store_rejects_inverted_bounds() {
        let config = GameConfig {
            min_active_ms: 4000,
            max_active_ms: 500,
            ..GameConfig::default()
        };
        Store::new(config);
    }
}
