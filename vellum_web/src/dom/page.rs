// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![allow(unsafe_code, reason = "emitted by the #[wasm_bindgen] export glue")]

use log::debug;
use wasm_bindgen::prelude::wasm_bindgen;

use super::{BlueprintWidget, SliderWidget};
use crate::error::WidgetError;

/// Both widgets of a page, as attached by [`attach_page`].
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct PageWidgets {
    blueprint: Option<BlueprintWidget>,
    slider: Option<SliderWidget>,
}

#[wasm_bindgen]
impl PageWidgets {
    /// Whether the blueprint viewport is attached.
    #[wasm_bindgen(getter, js_name = hasBlueprint)]
    pub fn has_blueprint(&self) -> bool {
        self.blueprint.is_some()
    }

    /// Whether the slide carousel is attached.
    #[wasm_bindgen(getter, js_name = hasSlider)]
    pub fn has_slider(&self) -> bool {
        self.slider.is_some()
    }

    /// Removes every listener of both widgets.
    pub fn detach(&mut self) {
        if let Some(blueprint) = self.blueprint.take() {
            blueprint.detach();
        }
        if let Some(slider) = self.slider.take() {
            slider.detach();
        }
    }
}

/// Attaches every widget found in the current document.
///
/// Widgets whose markup is absent or incomplete stay inert; the reason is
/// logged at `debug` level.
#[wasm_bindgen(js_name = attachPage)]
pub fn attach_page() -> PageWidgets {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        debug!("no document; nothing to attach");
        return PageWidgets::default();
    };
    PageWidgets {
        blueprint: inert_on_error("blueprint", BlueprintWidget::attach(&document)),
        slider: inert_on_error("slider", SliderWidget::attach(&document)),
    }
}

fn inert_on_error<W>(name: &str, attached: Result<Option<W>, WidgetError>) -> Option<W> {
    attached.unwrap_or_else(|err| {
        debug!("{name} disabled: {err}");
        None
    })
}
