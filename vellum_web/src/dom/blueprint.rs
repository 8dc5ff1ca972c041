// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::{Document, Element, HtmlElement, MouseEvent, PointerEvent, WheelEvent};

use super::listener::Listener;
use super::{
    Scope, capture_pointer, rect_origin, rect_size, release_pointer, require_html, set_dragging,
    set_style,
};
use crate::config::BlueprintConfig;
use crate::controller::BlueprintController;
use crate::error::WidgetError;
use crate::input::local_point;

const ROOT: &str = "[data-blueprint]";
const VIEWPORT: &str = "[data-blueprint-viewport]";
const SCENE: &str = "[data-blueprint-scene]";
const ZOOM_IN: &str = "[data-blueprint-zoom-in]";
const ZOOM_OUT: &str = "[data-blueprint-zoom-out]";
const RESET: &str = "[data-blueprint-reset]";

/// Elements the blueprint viewport reads from and renders into.
#[derive(Clone, Debug)]
struct Surface {
    viewport: HtmlElement,
    scene: HtmlElement,
}

impl Surface {
    fn local(&self, event: &MouseEvent) -> kurbo::Point {
        local_point(
            f64::from(event.client_x()),
            f64::from(event.client_y()),
            rect_origin(&self.viewport),
        )
    }

    fn render(&self, controller: &BlueprintController) {
        set_style(&self.scene, "transform", &controller.css_transform());
    }
}

type Shared = Rc<RefCell<BlueprintController>>;

/// The blueprint pan/zoom viewport attached to a DOM subtree.
///
/// Listeners stay registered until [`BlueprintWidget::detach`] is called or
/// the widget is dropped.
#[derive(Debug)]
pub struct BlueprintWidget {
    controller: Shared,
    listeners: Vec<Listener>,
}

impl BlueprintWidget {
    /// Attaches to the first `[data-blueprint]` root in `document`.
    ///
    /// Returns `Ok(None)` when the page has no blueprint.
    pub fn attach(document: &Document) -> Result<Option<Self>, WidgetError> {
        match document.query_selector(ROOT)? {
            Some(root) => Self::attach_to(&root).map(Some),
            None => Ok(None),
        }
    }

    /// Attaches to an explicit root element.
    pub fn attach_to(root: &Element) -> Result<Self, WidgetError> {
        let scope = Scope::Element(root.clone());
        let surface = Surface {
            viewport: require_html(&scope, VIEWPORT)?,
            scene: require_html(&scope, SCENE)?,
        };
        let config = BlueprintConfig::from_attributes(|name| root.get_attribute(name));
        let controller = Rc::new(RefCell::new(BlueprintController::new(
            rect_size(&surface.viewport),
            config,
        )));

        let mut listeners = wire_viewport(&surface, &controller)?;
        wire_buttons(&scope, &surface, &controller, &mut listeners)?;

        surface.render(&controller.borrow());
        debug!("blueprint attached with {} listeners", listeners.len());
        Ok(Self {
            controller,
            listeners,
        })
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.controller.borrow().view().scale()
    }

    /// Removes every listener. The last rendered transform stays in place.
    pub fn detach(self) {
        debug!("blueprint detached");
        drop(self.listeners);
    }
}

fn wire_viewport(surface: &Surface, controller: &Shared) -> Result<Vec<Listener>, WidgetError> {
    let target = &surface.viewport;
    let mut listeners = Vec::with_capacity(7);

    listeners.push(Listener::new_active(target, "wheel", {
        let (surface, controller) = (surface.clone(), controller.clone());
        move |event: WheelEvent| {
            event.prevent_default();
            let cursor = surface.local(&event);
            let mut controller = controller.borrow_mut();
            controller.set_view_size(rect_size(&surface.viewport));
            if controller.wheel(event.delta_y(), cursor) {
                surface.render(&controller);
            }
        }
    })?);

    listeners.push(Listener::new(target, "pointerdown", {
        let (surface, controller) = (surface.clone(), controller.clone());
        move |event: PointerEvent| {
            capture_pointer(&surface.viewport, event.pointer_id());
            let pos = surface.local(&event);
            let mut controller = controller.borrow_mut();
            controller.pointer_down(event.pointer_id(), pos);
            set_dragging(&surface.viewport, controller.is_dragging());
        }
    })?);

    listeners.push(Listener::new(target, "pointermove", {
        let (surface, controller) = (surface.clone(), controller.clone());
        move |event: PointerEvent| {
            let pos = surface.local(&event);
            let mut controller = controller.borrow_mut();
            if controller.pointer_move(event.pointer_id(), pos) {
                surface.render(&controller);
            }
        }
    })?);

    for kind in ["pointerup", "pointercancel"] {
        listeners.push(Listener::new(target, kind, {
            let (surface, controller) = (surface.clone(), controller.clone());
            move |event: PointerEvent| {
                let mut controller = controller.borrow_mut();
                controller.pointer_up(event.pointer_id());
                release_pointer(&surface.viewport, event.pointer_id());
                if !controller.is_dragging() {
                    set_dragging(&surface.viewport, false);
                }
            }
        })?);
    }

    listeners.push(Listener::new(target, "pointerleave", {
        let (surface, controller) = (surface.clone(), controller.clone());
        move |event: PointerEvent| {
            let id = event.pointer_id();
            let captured = surface.viewport.has_pointer_capture(id);
            let mut controller = controller.borrow_mut();
            if controller.pointer_left(id, captured) && !controller.is_dragging() {
                set_dragging(&surface.viewport, false);
            }
        }
    })?);

    listeners.push(Listener::new(target, "dblclick", {
        let (surface, controller) = (surface.clone(), controller.clone());
        move |event: MouseEvent| {
            event.prevent_default();
            let pos = surface.local(&event);
            let mut controller = controller.borrow_mut();
            controller.set_view_size(rect_size(&surface.viewport));
            if controller.double_click(pos) {
                surface.render(&controller);
            }
        }
    })?);

    Ok(listeners)
}

fn wire_buttons(
    scope: &Scope,
    surface: &Surface,
    controller: &Shared,
    listeners: &mut Vec<Listener>,
) -> Result<(), WidgetError> {
    let actions: [(&str, fn(&mut BlueprintController)); 3] = [
        (ZOOM_IN, |c| {
            c.zoom_in();
        }),
        (ZOOM_OUT, |c| {
            c.zoom_out();
        }),
        (RESET, BlueprintController::reset),
    ];

    for (selector, action) in actions {
        let Some(button) = scope.query(selector)? else {
            continue;
        };
        listeners.push(Listener::new(&button, "click", {
            let (surface, controller) = (surface.clone(), controller.clone());
            move |_: MouseEvent| {
                let mut controller = controller.borrow_mut();
                controller.set_view_size(rect_size(&surface.viewport));
                action(&mut controller);
                surface.render(&controller);
            }
        })?);
    }
    Ok(())
}
