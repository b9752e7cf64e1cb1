mod context;
mod easing;
mod pose;
mod timeline;

pub use context::{AnimationContext, AnimationHandle, MotionEvent, Repeat};
pub use easing::Ease;
pub use pose::{Pose, Prop};
pub use timeline::{Timeline, Timing};

use std::fmt;

// run by the caller once the scene borrow is released
pub type Notification = Box<dyn FnOnce()>;

pub trait Scene {
    fn context(&self) -> &AnimationContext;

    fn context_mut(&mut self) -> &mut AnimationContext;

    fn tick(&mut self, now: f64) -> Vec<Notification> {
        self.context_mut().tick(now);
        Vec::new()
    }

    /// Text content to write into targets, as `(target, text)` pairs.
    fn text_changes(&mut self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn teardown(&mut self) {
        self.context_mut().kill();
    }
}

impl Scene for AnimationContext {
    fn context(&self) -> &AnimationContext {
        self
    }

    fn context_mut(&mut self) -> &mut AnimationContext {
        self
    }
}

pub struct CompletionSignal {
    callback: Option<Notification>,
}

impl CompletionSignal {
    pub fn new(callback: impl FnOnce() + 'static) -> Self {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.callback.is_some()
    }

    pub fn take(&mut self) -> Option<Notification> {
        self.callback.take()
    }

    pub fn cancel(&mut self) {
        self.callback = None;
    }
}

impl fmt::Debug for CompletionSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionSignal")
            .field("armed", &self.is_armed())
            .finish()
    }
}
