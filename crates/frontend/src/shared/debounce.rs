//! Debounce: a rapidly changing value settles only after a quiet period.
//!
//! [`Debouncer`] is the timer-free core: `arm` registers a new pending value
//! and invalidates the previous one, `fire` settles a value only if its
//! ticket is still the latest, `cancel` drops whatever is pending.
//! [`DebounceHandle`] drives it with a real browser timer and cancels on
//! component cleanup.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Задержка поиска по списку
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Identifies one armed timer. Only the most recent ticket can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    settled: T,
    pending: Option<(DebounceTicket, T)>,
    generation: u64,
}

impl<T: Clone> Debouncer<T> {
    pub fn new(initial: T) -> Self {
        Self {
            settled: initial,
            pending: None,
            generation: 0,
        }
    }

    /// Регистрирует новое значение; предыдущий ожидающий таймер становится недействительным
    pub fn arm(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        let ticket = DebounceTicket(self.generation);
        self.pending = Some((ticket, value));
        ticket
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Timer expiry. Returns the settled value when `ticket` is still current.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
        match self.pending.take() {
            Some((current, value)) if current == ticket => {
                self.settled = value.clone();
                Some(value)
            }
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Сбрасывает значение без таймера (например, после навигации назад)
    pub fn reset(&mut self, value: T) {
        self.pending = None;
        self.settled = value;
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Reactive host for a [`Debouncer`] inside a component.
///
/// Holds exactly one browser timeout; replacing it drops (and thereby clears)
/// the previous one. Everything pending is cancelled when the owning
/// component is cleaned up.
pub struct DebounceHandle<T: Send + Sync + 'static> {
    state: StoredValue<Debouncer<T>>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    delay_ms: u32,
}

impl<T: Send + Sync + 'static> Clone for DebounceHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DebounceHandle<T> {}

impl<T: Clone + Send + Sync + 'static> DebounceHandle<T> {
    pub fn new(initial: T, delay_ms: u32) -> Self {
        let handle = Self {
            state: StoredValue::new(Debouncer::new(initial)),
            timer: StoredValue::new_local(None),
            delay_ms,
        };
        on_cleanup(move || handle.cancel());
        handle
    }

    /// Новое значение ввода: перезапускает таймер, `on_settle` вызывается после паузы
    pub fn input(&self, value: T, on_settle: impl FnOnce(T) + 'static) {
        let Some(ticket) = self.state.try_update_value(|d| d.arm(value)) else {
            return;
        };
        let state = self.state;
        let timeout = Timeout::new(self.delay_ms, move || {
            if let Some(settled) = state.try_update_value(|d| d.fire(ticket)).flatten() {
                on_settle(settled);
            }
        });
        // Старый Timeout дропается здесь и отменяет свой setTimeout
        self.timer.try_set_value(Some(timeout));
    }

    pub fn cancel(&self) {
        self.state.try_update_value(|d| d.cancel());
        self.timer.try_set_value(None);
    }

    pub fn reset(&self, value: T) {
        self.state.try_update_value(|d| d.reset(value));
        self.timer.try_set_value(None);
    }
}
