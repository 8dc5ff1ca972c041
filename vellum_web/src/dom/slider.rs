// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use vellum_carousel::{Carousel, NavKey, SlideFrame};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent, PointerEvent};

use super::listener::Listener;
use super::{Scope, capture_pointer, rect_size, release_pointer, require_html, set_dragging, set_style};
use crate::config::SliderConfig;
use crate::error::WidgetError;
use crate::input::{accepts_pointer, parse_dot_index};

const ROOT: &str = "[data-slider]";
const VIEWPORT: &str = "[data-slider-viewport]";
const TRACK: &str = "[data-slider-track]";
const PREV: &str = "[data-slider-prev]";
const NEXT: &str = "[data-slider-next]";
const DOT: &str = "[data-slider-dot]";
const DOT_ATTR: &str = "data-slider-dot";

/// Elements the carousel reads from and renders into.
#[derive(Clone, Debug)]
struct Surface {
    viewport: HtmlElement,
    track: HtmlElement,
    prev: Option<Element>,
    next: Option<Element>,
    dots: Vec<(usize, Element)>,
}

impl Surface {
    fn width(&self) -> f64 {
        rect_size(&self.viewport).width
    }

    fn render_offset(&self, offset: f64) {
        set_style(&self.track, "transform", &format!("translateX({offset}px)"));
    }

    fn render(&self, frame: &SlideFrame) {
        if frame.animate {
            let _ = self.track.style().remove_property("transition");
        } else {
            set_style(&self.track, "transition", "none");
        }
        set_dragging(&self.track, !frame.animate);
        self.render_offset(frame.offset);

        for (index, dot) in &self.dots {
            let selected = if frame.is_selected(*index) { "true" } else { "false" };
            let _ = dot.set_attribute("aria-selected", selected);
            let _ = dot.set_attribute("tabindex", &frame.dot_tab_index(*index).to_string());
        }
        if let Some(prev) = &self.prev {
            let _ = prev.toggle_attribute_with_force("disabled", frame.prev_disabled);
        }
        if let Some(next) = &self.next {
            let _ = next.toggle_attribute_with_force("disabled", frame.next_disabled);
        }
    }
}

type Shared = Rc<RefCell<Carousel>>;

/// The slide carousel attached to a DOM subtree.
///
/// Listeners stay registered until [`SliderWidget::detach`] is called or the
/// widget is dropped.
#[derive(Debug)]
pub struct SliderWidget {
    carousel: Shared,
    listeners: Vec<Listener>,
}

impl SliderWidget {
    /// Attaches to the first `[data-slider-viewport]` in `document`.
    ///
    /// Navigation buttons and dots are looked up inside the closest
    /// `[data-slider]` ancestor of the viewport, or in the whole document when
    /// there is none. Returns `Ok(None)` when the page has no carousel.
    pub fn attach(document: &Document) -> Result<Option<Self>, WidgetError> {
        let Some(viewport) = document.query_selector(VIEWPORT)? else {
            return Ok(None);
        };
        let scope = match viewport.closest(ROOT)? {
            Some(root) => Scope::Element(root),
            None => Scope::Document(document.clone()),
        };
        Self::attach_to(&viewport, &scope).map(Some)
    }

    fn attach_to(viewport: &Element, scope: &Scope) -> Result<Self, WidgetError> {
        let track = require_html(&Scope::Element(viewport.clone()), TRACK)?;
        let len = usize::try_from(track.children().length()).unwrap_or(0);
        let viewport = viewport
            .clone()
            .dyn_into::<HtmlElement>()
            .map_err(|_| WidgetError::MissingElement(VIEWPORT))?;

        let dots = scope
            .query_all(DOT)?
            .into_iter()
            .filter_map(|dot| {
                let index = dot.get_attribute(DOT_ATTR).as_deref().and_then(parse_dot_index);
                if index.is_none() {
                    debug!("slider dot without a usable index");
                }
                Some((index?, dot))
            })
            .collect();
        let surface = Surface {
            prev: scope.query(PREV)?,
            next: scope.query(NEXT)?,
            dots,
            viewport,
            track,
        };

        let root = match scope {
            Scope::Element(root) => Some(root),
            Scope::Document(_) => None,
        };
        let config = SliderConfig::from_layered_attributes(
            |name| root.and_then(|root| root.get_attribute(name)),
            |name| surface.viewport.get_attribute(name),
        );
        let carousel = Carousel::new(len, surface.width())
            .ok_or(WidgetError::NoSlides)?
            .with_swipe(config.swipe);
        let carousel = Rc::new(RefCell::new(carousel));

        surface.viewport.set_attribute("role", "region")?;
        surface
            .viewport
            .set_attribute("aria-roledescription", "carousel")?;
        surface.viewport.set_attribute("tabindex", "0")?;

        let listeners = wire(&surface, &carousel)?;
        let frame = carousel.borrow_mut().snap(surface.width());
        surface.render(&frame);
        debug!("slider attached: {len} slides, {} listeners", listeners.len());
        Ok(Self {
            carousel,
            listeners,
        })
    }

    /// Selected slide.
    #[must_use]
    pub fn index(&self) -> usize {
        self.carousel.borrow().index()
    }

    /// Removes every listener. The last rendered frame stays in place.
    pub fn detach(self) {
        debug!("slider detached");
        drop(self.listeners);
    }
}

fn wire(surface: &Surface, carousel: &Shared) -> Result<Vec<Listener>, WidgetError> {
    let viewport = &surface.viewport;
    let mut listeners = Vec::new();

    listeners.push(Listener::new(viewport, "pointerdown", {
        let (surface, carousel) = (surface.clone(), carousel.clone());
        move |event: PointerEvent| {
            if !accepts_pointer(&event.pointer_type(), event.button()) {
                return;
            }
            let x = f64::from(event.client_x());
            let frame = carousel
                .borrow_mut()
                .begin_drag(event.pointer_id(), x, surface.width());
            surface.render(&frame);
            capture_pointer(&surface.viewport, event.pointer_id());
        }
    })?);

    listeners.push(Listener::new(viewport, "pointermove", {
        let (surface, carousel) = (surface.clone(), carousel.clone());
        move |event: PointerEvent| {
            let x = f64::from(event.client_x());
            if let Some(offset) = carousel.borrow_mut().drag_to(event.pointer_id(), x) {
                surface.render_offset(offset);
            }
        }
    })?);

    for kind in ["pointerup", "pointercancel", "pointerleave"] {
        listeners.push(Listener::new(viewport, kind, {
            let (surface, carousel) = (surface.clone(), carousel.clone());
            move |event: PointerEvent| {
                let id = event.pointer_id();
                let frame = carousel.borrow_mut().end_drag(id, surface.width());
                if let Some(frame) = frame {
                    surface.render(&frame);
                    release_pointer(&surface.viewport, id);
                }
            }
        })?);
    }

    listeners.push(Listener::new(viewport, "keydown", {
        let (surface, carousel) = (surface.clone(), carousel.clone());
        move |event: KeyboardEvent| {
            let Some(key) = NavKey::from_key(&event.key()) else {
                return;
            };
            event.prevent_default();
            let frame = carousel.borrow_mut().navigate(key, surface.width());
            surface.render(&frame);
        }
    })?);

    for (index, dot) in &surface.dots {
        let index = *index;
        listeners.push(Listener::new(dot, "click", {
            let (surface, carousel) = (surface.clone(), carousel.clone());
            move |_: MouseEvent| {
                let frame = carousel.borrow_mut().go_to(index, surface.width());
                surface.render(&frame);
            }
        })?);
    }

    let buttons: [(&Option<Element>, fn(&mut Carousel, f64) -> SlideFrame); 2] = [
        (&surface.prev, Carousel::prev),
        (&surface.next, Carousel::next),
    ];
    for (button, step) in buttons {
        let Some(button) = button else {
            continue;
        };
        listeners.push(Listener::new(button, "click", {
            let (surface, carousel) = (surface.clone(), carousel.clone());
            move |_: MouseEvent| {
                let frame = step(&mut carousel.borrow_mut(), surface.width());
                surface.render(&frame);
            }
        })?);
    }

    if let Some(window) = web_sys::window() {
        listeners.push(Listener::new(&window, "resize", {
            let (surface, carousel) = (surface.clone(), carousel.clone());
            move |_: web_sys::Event| {
                let frame = carousel.borrow_mut().snap(surface.width());
                surface.render(&frame);
            }
        })?);
    }

    Ok(listeners)
}
