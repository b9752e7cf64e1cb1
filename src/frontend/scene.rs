//! Mounts a [`Scene`] on a component's DOM subtree and drives it every frame.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use web_sys::Element;
use yew::prelude::*;

use super::dom::{
    apply_changes, apply_text, collect_targets, document_top, scroll_y, viewport_height,
    FrameLoop, Targets, WindowListener,
};
use crate::motion::Scene;

type Slot<S> = Rc<RefCell<Option<S>>>;

/// Shared access to a mounted scene from event handlers.
pub struct SceneHandle<S> {
    slot: Slot<S>,
}

impl<S> Clone for SceneHandle<S> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<S> PartialEq for SceneHandle<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<S: Scene> SceneHandle<S> {
    /// Run `f` against the scene. `None` before mount, after unmount, or
    /// while a frame holds the scene.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        let mut guard = self.slot.try_borrow_mut().ok()?;
        guard.as_mut().map(f)
    }
}

struct Mounted {
    _frames: FrameLoop,
    _scroll: WindowListener,
    _resize: WindowListener,
}

/// Build the scene with `make` once the component's root is in the DOM,
/// then tick, scroll and measure it until unmount.
#[hook]
pub fn use_scene<S, F>(root: NodeRef, make: F) -> SceneHandle<S>
where
    S: Scene + 'static,
    F: FnOnce() -> S + 'static,
{
    let slot: Slot<S> = use_mut_ref(|| None);

    {
        let slot = slot.clone();
        use_effect_with((), move |_| {
            let mounted = root
                .cast::<Element>()
                .map(|element| mount(&element, slot.clone(), make()));

            move || {
                drop(mounted);
                let scene = slot.borrow_mut().take();
                if let Some(mut scene) = scene {
                    debug!(scope = scene.context().scope(), "scene_unmounted");
                    scene.teardown();
                }
            }
        });
    }

    SceneHandle { slot }
}

fn mount<S: Scene + 'static>(root: &Element, slot: Slot<S>, scene: S) -> Mounted {
    let targets = Rc::new(collect_targets(root));
    debug!(
        scope = scene.context().scope(),
        targets = targets.len(),
        "scene_mounted"
    );
    *slot.borrow_mut() = Some(scene);
    remeasure(&slot, &targets);

    let frames = FrameLoop::start({
        let slot = slot.clone();
        let targets = targets.clone();
        move |now| render_frame(&slot, &targets, now)
    });

    let scroll = WindowListener::new("scroll", {
        let slot = slot.clone();
        move || {
            if let Ok(mut guard) = slot.try_borrow_mut() {
                if let Some(scene) = guard.as_mut() {
                    scene.context_mut().scroll_to(scroll_y());
                }
            }
        }
    });

    let resize = WindowListener::new("resize", {
        let slot = slot.clone();
        let targets = targets.clone();
        move || remeasure(&slot, &targets)
    });

    Mounted {
        _frames: frames,
        _scroll: scroll,
        _resize: resize,
    }
}

fn remeasure<S: Scene>(slot: &Slot<S>, targets: &Targets) {
    let Ok(mut guard) = slot.try_borrow_mut() else {
        return;
    };
    if let Some(scene) = guard.as_mut() {
        let context = scene.context_mut();
        context.scroll_to(scroll_y());
        context.measure(
            |target| targets.get(target).map(document_top),
            viewport_height(),
        );
    }
}

fn render_frame<S: Scene>(slot: &Slot<S>, targets: &Targets, now: f64) {
    let (changes, texts, notifications) = {
        let Ok(mut guard) = slot.try_borrow_mut() else {
            return;
        };
        let Some(scene) = guard.as_mut() else {
            return;
        };
        let notifications = scene.tick(now);
        (
            scene.context_mut().take_changes(),
            scene.text_changes(),
            notifications,
        )
    };

    apply_changes(targets, &changes);
    apply_text(targets, &texts);
    for notify in notifications {
        notify();
    }
}
