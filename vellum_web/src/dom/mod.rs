// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM wiring for the widgets. Only built for `wasm32`.

mod blueprint;
mod listener;
mod page;
mod slider;

pub use blueprint::BlueprintWidget;
pub use page::{PageWidgets, attach_page};
pub use slider::SliderWidget;

use kurbo::{Point, Size};
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::WidgetError;

/// Class toggled on elements while a gesture is in progress.
const DRAGGING_CLASS: &str = "is-dragging";

/// Where optional parts of a widget are looked up.
#[derive(Clone, Debug)]
enum Scope {
    Document(Document),
    Element(Element),
}

impl Scope {
    fn query(&self, selector: &str) -> Result<Option<Element>, WidgetError> {
        let found = match self {
            Self::Document(document) => document.query_selector(selector)?,
            Self::Element(element) => element.query_selector(selector)?,
        };
        Ok(found)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, WidgetError> {
        let list = match self {
            Self::Document(document) => document.query_selector_all(selector)?,
            Self::Element(element) => element.query_selector_all(selector)?,
        };
        Ok((0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }
}

/// Finds a required `HtmlElement` below `scope`.
fn require_html(scope: &Scope, selector: &'static str) -> Result<HtmlElement, WidgetError> {
    scope
        .query(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(WidgetError::MissingElement(selector))
}

fn rect_origin(element: &Element) -> Point {
    let rect = element.get_bounding_client_rect();
    Point::new(rect.left(), rect.top())
}

fn rect_size(element: &Element) -> Size {
    let rect = element.get_bounding_client_rect();
    Size::new(rect.width(), rect.height())
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

fn set_dragging(element: &Element, on: bool) {
    let _ = element.class_list().toggle_with_force(DRAGGING_CLASS, on);
}

fn capture_pointer(element: &Element, pointer: i32) {
    if let Err(err) = element.set_pointer_capture(pointer) {
        debug!("pointer capture unavailable for {pointer}: {err:?}");
    }
}

fn release_pointer(element: &Element, pointer: i32) {
    if let Err(err) = element.release_pointer_capture(pointer) {
        debug!("pointer release failed for {pointer}: {err:?}");
    }
}
