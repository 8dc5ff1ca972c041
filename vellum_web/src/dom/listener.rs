// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::WidgetError;

/// An event listener registered on a DOM target.
///
/// The listener stays registered for as long as this value lives; dropping
/// it removes the listener and frees the closure.
pub(crate) struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Registers `handler` for `kind` events of type `E` on `target`.
    ///
    /// Events that cannot be cast to `E` are dropped.
    pub(crate) fn new<E, F>(
        target: &EventTarget,
        kind: &'static str,
        handler: F,
    ) -> Result<Self, WidgetError>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let callback = wrap(handler);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }

    /// Like [`Listener::new`], but registered as non-passive so the handler
    /// may call `prevent_default` (needed for `wheel`).
    pub(crate) fn new_active<E, F>(
        target: &EventTarget,
        kind: &'static str,
        handler: F,
    ) -> Result<Self, WidgetError>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let callback = wrap(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

fn wrap<E, F>(mut handler: F) -> Closure<dyn FnMut(Event)>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    Closure::wrap(Box::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    }) as Box<dyn FnMut(Event)>)
}

impl Drop for Listener {
    fn drop(&mut self) {
        let callback: &Function = self.callback.as_ref().unchecked_ref();
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, callback);
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
