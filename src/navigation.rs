//! Header scroll state, slide-in menu and link tilt.

use crate::motion::{AnimationContext, AnimationHandle, Ease, Pose, Timeline, Timing};
use crate::scroll::Debouncer;

pub const SCROLLED_THRESHOLD: f64 = 50.0;
pub const SCROLL_DEBOUNCE_SECONDS: f64 = 0.05;
pub const MENU_SLIDE_SECONDS: f64 = 0.6;
pub const TILT_FACTOR: f64 = 0.05;
pub const TILT_SECONDS: f64 = 0.3;
pub const TILT_RELEASE_SECONDS: f64 = 0.5;

pub const MENU: &str = "nav.menu";
const MENU_ENTRANCE_SLOT: &str = "nav.menu.entrance";

pub fn menu_item_target(index: usize) -> String {
    format!("nav.menu.item.{index}")
}

pub fn scrolled_past(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Whether the fixed header shows its compact "scrolled" style.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderState {
    debounce: Debouncer,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderState {
    pub fn new() -> Self {
        Self {
            debounce: Debouncer::new(SCROLL_DEBOUNCE_SECONDS),
        }
    }

    pub fn on_scroll(&mut self, now: f64) {
        self.debounce.trigger(now);
    }

    /// Recompute from the live offset once the quiet period after the last
    /// scroll is over. Early or repeated timer callbacks return `None`.
    pub fn timer_elapsed(&mut self, now: f64, scroll_y: f64) -> Option<bool> {
        self.debounce.poll(now).then(|| scrolled_past(scroll_y))
    }

    pub fn cancel(&mut self) {
        self.debounce.cancel();
    }
}

/// Slide position of the mobile menu.
pub fn menu_pose(open: bool) -> Pose {
    if open {
        Pose::new().x_percent(0.0).rotate_y(0.0).rotate_x(0.0)
    } else {
        Pose::new().x_percent(100.0).rotate_y(15.0).rotate_x(5.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Park the menu off-screen.
    pub fn install(context: &mut AnimationContext) -> AnimationHandle {
        context.play(Timeline::new().set(MENU, menu_pose(false)))
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle_label(self) -> &'static str {
        if self.open {
            "Close Menu"
        } else {
            "Open Menu"
        }
    }

    /// Flip the menu and slide it to match. Opening also staggers the
    /// `item_count` menu entries in.
    pub fn toggle(&mut self, context: &mut AnimationContext, item_count: usize) -> bool {
        self.open = !self.open;

        let ease = if self.open {
            Ease::Power2Out
        } else {
            Ease::Power2In
        };
        context.tween_to(MENU, menu_pose(self.open), MENU_SLIDE_SECONDS, ease);

        if self.open {
            context.play_in_slot(
                MENU_ENTRANCE_SLOT,
                Timeline::new().stagger_from_to(
                    (0..item_count).map(menu_item_target),
                    Pose::new().opacity(0.0).y(20.0).scale(0.95),
                    Pose::new().opacity(1.0).y(0.0).scale(1.0),
                    Timing::new(0.3, Ease::Power2Out),
                    0.05,
                ),
            );
        }

        self.open
    }
}

/// Pointer offset from the centre of a `(left, top, width, height)` box.
pub fn pointer_offset(client_x: f64, client_y: f64, rect: (f64, f64, f64, f64)) -> (f64, f64) {
    let (left, top, width, height) = rect;
    (client_x - left - width / 2.0, client_y - top - height / 2.0)
}

pub fn tilt_pose(dx: f64, dy: f64) -> Pose {
    Pose::new().rotate_y(dx * TILT_FACTOR).rotate_x(-dy * TILT_FACTOR)
}

pub fn tilt_towards(context: &mut AnimationContext, target: &str, dx: f64, dy: f64) {
    context.tween_to(target, tilt_pose(dx, dy), TILT_SECONDS, Ease::Power2Out);
}

pub fn release_tilt(context: &mut AnimationContext, target: &str) {
    context.tween_to(
        target,
        Pose::new().rotate_y(0.0).rotate_x(0.0),
        TILT_RELEASE_SECONDS,
        Ease::Power2Out,
    );
}
