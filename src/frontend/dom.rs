use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Element, Event, HtmlElement};

use crate::motion::Pose;

/// Attribute naming the animation target an element renders.
pub const TARGET_ATTRIBUTE: &str = "data-motion";

pub type Targets = HashMap<String, HtmlElement>;

pub fn now_seconds() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|performance| performance.now() / 1000.0)
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0)
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

fn document_root() -> Option<HtmlElement> {
    window()?
        .document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn lock_scroll(locked: bool) {
    if let Some(body) = body() {
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

pub fn enable_smooth_scroll() {
    if let Some(root) = document_root() {
        let _ = root.style().set_property("scroll-behavior", "smooth");
    }
}

/// Ask every mounted scene to re-measure its scroll triggers.
pub fn request_remeasure() {
    let Some(win) = window() else {
        return;
    };
    if let Ok(event) = Event::new("resize") {
        let _ = win.dispatch_event(&event);
    }
}

/// Every element under (and including) `root` that carries a target name.
pub fn collect_targets(root: &Element) -> Targets {
    let mut targets = Targets::new();

    if let (Some(name), Ok(element)) = (
        root.get_attribute(TARGET_ATTRIBUTE),
        root.clone().dyn_into::<HtmlElement>(),
    ) {
        targets.insert(name, element);
    }

    let selector = format!("[{TARGET_ATTRIBUTE}]");
    if let Ok(nodes) = root.query_selector_all(&selector) {
        for index in 0..nodes.length() {
            let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            if let Some(name) = element.get_attribute(TARGET_ATTRIBUTE) {
                targets.insert(name, element);
            }
        }
    }

    targets
}

pub fn apply_pose(element: &HtmlElement, pose: &Pose) {
    let style = element.style();
    for (property, value) in pose.to_css() {
        let _ = style.set_property(property, &value);
    }
}

pub fn apply_changes(targets: &Targets, changes: &[(String, Pose)]) {
    for (target, pose) in changes {
        if let Some(element) = targets.get(target) {
            apply_pose(element, pose);
        }
    }
}

pub fn apply_text(targets: &Targets, changes: &[(String, String)]) {
    for (target, text) in changes {
        if let Some(element) = targets.get(target) {
            element.set_text_content(Some(text));
        }
    }
}

/// Top of `element` relative to the document, ignoring transforms.
pub fn document_top(element: &HtmlElement) -> f64 {
    let mut top = 0.0;
    let mut current = Some(element.clone());
    while let Some(node) = current {
        top += f64::from(node.offset_top());
        current = node
            .offset_parent()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
    }
    top
}

/// Bounding box of an element as `(left, top, width, height)`.
pub fn client_rect(element: &Element) -> (f64, f64, f64, f64) {
    let rect = element.get_bounding_client_rect();
    (rect.left(), rect.top(), rect.width(), rect.height())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` loop. Stops on drop.
pub struct FrameLoop {
    request: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
    callback: FrameCallback,
}

impl FrameLoop {
    /// Call `on_frame` with the frame time in seconds until stopped.
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let request = Rc::new(Cell::new(None));
        let stopped = Rc::new(Cell::new(false));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let closure = Closure::<dyn FnMut(f64)>::new({
            let request = request.clone();
            let stopped = stopped.clone();
            let callback = callback.clone();
            move |timestamp: f64| {
                request.set(None);
                on_frame(timestamp / 1000.0);
                if !stopped.get() {
                    request.set(request_frame(&callback));
                }
            }
        });
        *callback.borrow_mut() = Some(closure);
        request.set(request_frame(&callback));

        Self {
            request,
            stopped,
            callback,
        }
    }

    pub fn stop(&self) {
        self.stopped.set(true);
        if let (Some(id), Some(win)) = (self.request.take(), window()) {
            let _ = win.cancel_animation_frame(id);
        }
        // breaks the closure -> callback cell cycle
        if let Ok(mut callback) = self.callback.try_borrow_mut() {
            callback.take();
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    let callback = callback.try_borrow().ok()?;
    let closure = callback.as_ref()?;
    window()?
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

/// Window event listener, removed on drop.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(event: &'static str, handler: impl FnMut() + 'static) -> Self {
        let callback = Closure::<dyn FnMut()>::new(handler);
        if let Some(win) = window() {
            let _ = win.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
        Self { event, callback }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

/// One-shot `setTimeout`, cleared on drop.
pub struct Timeout {
    id: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(millis: i32, handler: impl FnOnce() + 'static) -> Self {
        let mut handler = Some(handler);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(handler) = handler.take() {
                handler();
            }
        });
        let id = window().and_then(|win| {
            win.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            )
            .ok()
        });

        Self {
            id,
            _callback: callback,
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let (Some(id), Some(win)) = (self.id, window()) {
            win.clear_timeout_with_handle(id);
        }
    }
}
