//! Reactive wiring for hover-intent dropdowns.
//!
//! `MenuGroup` decides state; this handle owns one browser timer per menu
//! and feeds timer callbacks back with the generation that armed them, so a
//! superseded timer can never close a menu the pointer came back to.

use leptos::prelude::*;
use motion::hover_intent::{MenuGroup, TimerRequest};

use crate::util::browser;
use crate::util::timer::TimerSlot;

pub struct HoverMenus<K: Send + Sync + 'static> {
    group: RwSignal<MenuGroup<K>>,
    timers: StoredValue<Vec<(K, TimerSlot)>>,
}

impl<K: Send + Sync + 'static> Clone for HoverMenus<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static> Copy for HoverMenus<K> {}

impl<K> HoverMenus<K>
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    pub fn new(keys: impl IntoIterator<Item = K> + Clone) -> Self {
        let timers = keys.clone().into_iter().map(|key| (key, TimerSlot::new())).collect();
        Self { group: RwSignal::new(MenuGroup::new(keys)), timers: StoredValue::new(timers) }
    }

    /// Tracked: re-runs the caller when `key` opens or closes.
    pub fn is_visible(self, key: K) -> bool {
        self.group.with(|group| group.is_visible(key))
    }

    pub fn enter(self, key: K) {
        let request = self.group.try_update(|group| group.pointer_enter(key, browser::now_ms())).flatten();
        self.schedule(key, request);
    }

    pub fn leave(self, key: K) {
        let request = self.group.try_update(|group| group.pointer_leave(key, browser::now_ms())).flatten();
        self.schedule(key, request);
    }

    /// Click or touch on the menu's trigger.
    pub fn toggle(self, key: K) {
        self.cancel(key);
        self.group.update(|group| group.toggle(key));
    }

    pub fn close_all(self) {
        self.timers.with_value(|timers| timers.iter().for_each(|(_, slot)| slot.cancel()));
        self.group.update(MenuGroup::close_all);
    }

    fn slot(self, key: K) -> Option<TimerSlot> {
        self.timers.with_value(|timers| timers.iter().find(|(k, _)| *k == key).map(|(_, slot)| *slot))
    }

    fn cancel(self, key: K) {
        if let Some(slot) = self.slot(key) {
            slot.cancel();
        }
    }

    fn schedule(self, key: K, request: Option<TimerRequest>) {
        let Some(slot) = self.slot(key) else {
            return;
        };
        let Some(TimerRequest { generation, delay_ms }) = request else {
            slot.cancel();
            return;
        };
        let group = self.group;
        slot.schedule(delay_ms, move || {
            group.update(|group| {
                group.fire(key, generation);
            });
        });
    }
}
