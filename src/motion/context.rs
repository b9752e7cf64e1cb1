use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::easing::Ease;
use super::pose::Pose;
use super::timeline::{Timeline, Timing};
use crate::scroll::{ScrollDirection, ScrollTrigger};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationHandle(u64);

/// How many extra back-and-forth passes a yoyo animation makes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Forever,
    Times(u32),
}

#[derive(Clone, Debug, PartialEq)]
pub enum MotionEvent {
    Completed(AnimationHandle),
    Toggled {
        handle: AnimationHandle,
        revealed: bool,
        direction: ScrollDirection,
    },
}

#[derive(Debug)]
enum Playback {
    Once {
        started_at: Option<f64>,
        finished: bool,
    },
    Yoyo {
        repeat: Repeat,
        started_at: Option<f64>,
        finished: bool,
    },
    Scroll {
        trigger: ScrollTrigger,
        time: f64,
        speed: f64,
        revealed: bool,
    },
}

#[derive(Debug)]
struct Animation {
    handle: AnimationHandle,
    slot: Option<String>,
    timeline: Timeline,
    playback: Playback,
    poses: BTreeMap<String, Pose>,
}

impl Animation {
    fn initial_poses(timeline: &Timeline, playback: &Playback) -> BTreeMap<String, Pose> {
        match playback {
            Playback::Yoyo { .. } => timeline.sample_body(0.0),
            _ => timeline.sample(0.0),
        }
    }

    fn advance(&mut self, now: f64, dt: f64) -> Option<MotionEvent> {
        let duration = self.timeline.duration();

        match &mut self.playback {
            Playback::Once { started_at, finished } => {
                if *finished {
                    return None;
                }
                let elapsed = now - *started_at.get_or_insert(now);
                self.poses = self.timeline.sample(elapsed.min(duration));
                if elapsed >= duration {
                    *finished = true;
                    return Some(MotionEvent::Completed(self.handle));
                }
                None
            }
            Playback::Yoyo {
                repeat,
                started_at,
                finished,
            } => {
                if *finished {
                    return None;
                }
                let local = now - *started_at.get_or_insert(now) - self.timeline.delay();
                let (time, done) = yoyo_time(local, self.timeline.body_duration(), *repeat);
                self.poses = self.timeline.sample_body(time);
                if done {
                    *finished = true;
                    return Some(MotionEvent::Completed(self.handle));
                }
                None
            }
            Playback::Scroll { time, speed, .. } => {
                if *speed == 0.0 {
                    return None;
                }
                *time = (*time + dt * *speed).clamp(0.0, duration);
                self.poses = self.timeline.sample(*time);
                if (*speed > 0.0 && *time >= duration) || (*speed < 0.0 && *time <= 0.0) {
                    *speed = 0.0;
                }
                None
            }
        }
    }
}

fn yoyo_time(local: f64, body: f64, repeat: Repeat) -> (f64, bool) {
    if local <= 0.0 {
        return (0.0, false);
    }
    if body <= 0.0 {
        return (0.0, matches!(repeat, Repeat::Times(_)));
    }

    if let Repeat::Times(extra) = repeat {
        let passes = f64::from(extra) + 1.0;
        if local >= passes * body {
            let ends_reversed = extra % 2 == 1;
            return (if ends_reversed { 0.0 } else { body }, true);
        }
    }

    let pass = (local / body).floor();
    let within = local - pass * body;
    if pass as u64 % 2 == 1 {
        (body - within, false)
    } else {
        (within, false)
    }
}

/// Animations owned by one component instance, released on kill or drop.
#[derive(Debug)]
pub struct AnimationContext {
    scope: &'static str,
    next_id: u64,
    animations: Vec<Animation>,
    poses: BTreeMap<String, Pose>,
    dirty: BTreeSet<String>,
    last_tick: Option<f64>,
    scroll_y: f64,
    killed: bool,
}

impl AnimationContext {
    pub fn new(scope: &'static str) -> Self {
        Self {
            scope,
            next_id: 1,
            animations: Vec::new(),
            poses: BTreeMap::new(),
            dirty: BTreeSet::new(),
            last_tick: None,
            scroll_y: 0.0,
            killed: false,
        }
    }

    pub fn scope(&self) -> &'static str {
        self.scope
    }

    pub fn play(&mut self, timeline: Timeline) -> AnimationHandle {
        self.register(
            timeline,
            Playback::Once {
                started_at: None,
                finished: false,
            },
            None,
        )
    }

    // replaces whatever else was playing in `slot`
    pub fn play_in_slot(&mut self, slot: impl Into<String>, timeline: Timeline) -> AnimationHandle {
        self.register(
            timeline,
            Playback::Once {
                started_at: None,
                finished: false,
            },
            Some(slot.into()),
        )
    }

    pub fn yoyo(&mut self, timeline: Timeline, repeat: Repeat) -> AnimationHandle {
        self.register(
            timeline,
            Playback::Yoyo {
                repeat,
                started_at: None,
                finished: false,
            },
            None,
        )
    }

    pub fn yoyo_in_slot(
        &mut self,
        slot: impl Into<String>,
        timeline: Timeline,
        repeat: Repeat,
    ) -> AnimationHandle {
        self.register(
            timeline,
            Playback::Yoyo {
                repeat,
                started_at: None,
                finished: false,
            },
            Some(slot.into()),
        )
    }

    pub fn scroll_reveal(&mut self, timeline: Timeline, trigger: ScrollTrigger) -> AnimationHandle {
        let handle = self.register(
            timeline,
            Playback::Scroll {
                trigger,
                time: 0.0,
                speed: 0.0,
                revealed: false,
            },
            None,
        );
        self.evaluate_triggers(ScrollDirection::Still);
        handle
    }

    /// Overwrites any earlier `tween_to` on the same target.
    pub fn tween_to(
        &mut self,
        target: &str,
        to: Pose,
        duration: f64,
        ease: Ease,
    ) -> AnimationHandle {
        let current = self.poses.get(target).cloned().unwrap_or_default();
        let from = to.sampled_from(&current);
        let timeline = Timeline::new().from_to(target, from, to, Timing::new(duration, ease));
        self.play_in_slot(format!("tween-to:{target}"), timeline)
    }

    pub fn is_killed(&self) -> bool {
        self.killed
    }

    pub fn tick(&mut self, now: f64) -> Vec<MotionEvent> {
        if self.killed {
            return Vec::new();
        }

        let dt = self
            .last_tick
            .map(|last| (now - last).max(0.0))
            .unwrap_or(0.0);
        self.last_tick = Some(now);

        let events: Vec<MotionEvent> = self
            .animations
            .iter_mut()
            .filter_map(|animation| animation.advance(now, dt))
            .collect();

        self.refresh_poses();
        events
    }

    pub fn scroll_to(&mut self, scroll_y: f64) -> Vec<MotionEvent> {
        if self.killed {
            return Vec::new();
        }
        let direction = ScrollDirection::between(self.scroll_y, scroll_y);
        self.scroll_y = scroll_y;
        self.evaluate_triggers(direction)
    }

    pub fn measure<F>(&mut self, document_top: F, viewport_height: f64) -> Vec<MotionEvent>
    where
        F: Fn(&str) -> Option<f64>,
    {
        if self.killed {
            return Vec::new();
        }
        for animation in &mut self.animations {
            if let Playback::Scroll { trigger, .. } = &mut animation.playback {
                if let Some(top) = document_top(trigger.target()) {
                    trigger.measure(top, viewport_height);
                }
            }
        }
        self.evaluate_triggers(ScrollDirection::Still)
    }

    /// Poses that changed since the last call.
    pub fn take_changes(&mut self) -> Vec<(String, Pose)> {
        std::mem::take(&mut self.dirty)
            .into_iter()
            .filter_map(|target| {
                let pose = self.poses.get(&target)?.clone();
                Some((target, pose))
            })
            .collect()
    }

    pub fn kill(&mut self) {
        if self.killed {
            return;
        }
        self.killed = true;
        let released = self.animations.len();
        self.animations.clear();
        self.poses.clear();
        self.dirty.clear();
        debug!(scope = self.scope, released, "animation_context_killed");
    }

    fn register(
        &mut self,
        timeline: Timeline,
        playback: Playback,
        slot: Option<String>,
    ) -> AnimationHandle {
        let handle = AnimationHandle(self.next_id);
        self.next_id += 1;

        if self.killed {
            return handle;
        }

        if let Some(slot) = slot.as_deref() {
            self.animations
                .retain(|animation| animation.slot.as_deref() != Some(slot));
        }

        let poses = Animation::initial_poses(&timeline, &playback);
        self.animations.push(Animation {
            handle,
            slot,
            timeline,
            playback,
            poses,
        });
        self.refresh_poses();
        handle
    }

    fn evaluate_triggers(&mut self, direction: ScrollDirection) -> Vec<MotionEvent> {
        let scroll_y = self.scroll_y;
        let mut events = Vec::new();

        for animation in &mut self.animations {
            if let Playback::Scroll {
                trigger,
                speed,
                revealed,
                ..
            } = &mut animation.playback
            {
                let now_revealed = trigger.is_revealed(scroll_y);
                if now_revealed == *revealed {
                    continue;
                }
                *revealed = now_revealed;
                *speed = if now_revealed { 1.0 } else { -1.0 };
                debug!(
                    scope = self.scope,
                    trigger = trigger.target(),
                    revealed = now_revealed,
                    "scroll_trigger_toggled"
                );
                events.push(MotionEvent::Toggled {
                    handle: animation.handle,
                    revealed: now_revealed,
                    direction,
                });
            }
        }

        events
    }

    fn refresh_poses(&mut self) {
        let mut merged: BTreeMap<String, Pose> = BTreeMap::new();
        for animation in &self.animations {
            for (target, pose) in &animation.poses {
                merged.entry(target.clone()).or_default().overlay(pose);
            }
        }

        for (target, pose) in &merged {
            if self.poses.get(target) != Some(pose) {
                self.dirty.insert(target.clone());
            }
        }

        self.poses = merged;
    }
}

impl Drop for AnimationContext {
    fn drop(&mut self) {
        self.kill();
    }
}

#[cfg(test)]
impl AnimationContext {
    pub fn pose(&self, target: &str) -> Option<&Pose> {
        self.poses.get(target)
    }

    pub fn is_running(&self, handle: AnimationHandle) -> bool {
        self.animations
            .iter()
            .filter(|animation| animation.handle == handle)
            .any(|animation| match &animation.playback {
                Playback::Once { finished, .. } | Playback::Yoyo { finished, .. } => !*finished,
                Playback::Scroll { .. } => true,
            })
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn poses(&self) -> &BTreeMap<String, Pose> {
        &self.poses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::pose::Prop;

    fn fade(target: &str, duration: f64) -> Timeline {
        Timeline::new().from_to(
            target,
            Pose::new().opacity(0.0),
            Pose::new().opacity(1.0),
            Timing::new(duration, Ease::Linear),
        )
    }

    fn opacity(context: &AnimationContext, target: &str) -> Option<f64> {
        context.pose(target).and_then(|pose| pose.get(Prop::Opacity))
    }

    #[test]
    fn registration_renders_initial_state_immediately() {
        let mut context = AnimationContext::new("test");
        context.play(fade("card", 1.0));

        assert_eq!(opacity(&context, "card"), Some(0.0));
        assert_eq!(context.take_changes().len(), 1);
        assert!(context.take_changes().is_empty());
    }

    #[test]
    fn once_completes_exactly_at_the_end() {
        let mut context = AnimationContext::new("test");
        let handle = context.play(fade("card", 1.0));

        assert!(context.tick(10.0).is_empty());
        assert!(context.tick(10.5).is_empty());
        assert_eq!(context.tick(11.0), vec![MotionEvent::Completed(handle)]);
        assert!(context.tick(12.0).is_empty());
        assert_eq!(opacity(&context, "card"), Some(1.0));
        assert!(!context.is_running(handle));
    }

    #[test]
    fn infinite_yoyo_bounces_between_ends() {
        let mut context = AnimationContext::new("test");
        context.yoyo(
            Timeline::new().to("orb", Pose::new().y(-10.0), Timing::new(2.0, Ease::Linear)),
            Repeat::Forever,
        );

        context.tick(0.0);
        context.tick(2.0);
        assert_eq!(context.pose("orb").and_then(|pose| pose.get(Prop::Y)), Some(-10.0));
        context.tick(3.0);
        assert_eq!(context.pose("orb").and_then(|pose| pose.get(Prop::Y)), Some(-5.0));
        context.tick(4.0);
        assert_eq!(context.pose("orb").and_then(|pose| pose.get(Prop::Y)), Some(0.0));
        assert!(context.tick(1_000.0).is_empty());
    }

    #[test]
    fn finite_yoyo_returns_to_start_and_completes() {
        let mut context = AnimationContext::new("test");
        let handle = context.yoyo(
            Timeline::new().to("button", Pose::new().scale(0.95), Timing::new(0.1, Ease::Linear)),
            Repeat::Times(1),
        );

        context.tick(0.0);
        context.tick(0.1);
        let pressed = context.pose("button").and_then(|pose| pose.get(Prop::Scale));
        assert!(pressed.is_some_and(|scale| scale < 1.0));
        assert_eq!(context.tick(0.25), vec![MotionEvent::Completed(handle)]);
        assert_eq!(context.pose("button").and_then(|pose| pose.get(Prop::Scale)), Some(1.0));
    }

    #[test]
    fn yoyo_delay_is_only_waited_once() {
        assert_eq!(yoyo_time(-0.5, 4.0, Repeat::Forever), (0.0, false));
        assert_eq!(yoyo_time(5.0, 4.0, Repeat::Forever), (3.0, false));
        assert_eq!(yoyo_time(9.0, 4.0, Repeat::Forever), (1.0, false));
    }

    #[test]
    fn scroll_reveal_plays_and_reverses_with_threshold() {
        let mut context = AnimationContext::new("test");
        let handle = context.scroll_reveal(
            fade("panel", 1.0),
            ScrollTrigger::new("section", 0.8).with_start_scroll(400.0),
        );

        context.tick(0.0);
        assert_eq!(
            context.scroll_to(500.0),
            vec![MotionEvent::Toggled {
                handle,
                revealed: true,
                direction: ScrollDirection::Down,
            }]
        );
        context.tick(2.0);
        assert_eq!(opacity(&context, "panel"), Some(1.0));

        context.scroll_to(100.0);
        context.tick(2.25);
        assert_eq!(opacity(&context, "panel"), Some(0.75));
        context.tick(5.0);
        assert_eq!(opacity(&context, "panel"), Some(0.0));
    }

    #[test]
    fn slot_registration_replaces_previous_occupant() {
        let mut context = AnimationContext::new("test");
        context.tween_to("link", Pose::new().rotate_y(4.0), 0.3, Ease::Power2Out);
        context.tween_to("link", Pose::new().rotate_y(0.0), 0.5, Ease::Power2Out);

        assert_eq!(context.len(), 1);
    }

    #[test]
    fn tween_to_starts_from_live_pose() {
        let mut context = AnimationContext::new("test");
        context.tween_to("link", Pose::new().rotate_y(10.0), 1.0, Ease::Linear);
        context.tick(0.0);
        context.tick(0.5);

        context.tween_to("link", Pose::new().rotate_y(0.0), 1.0, Ease::Linear);
        assert_eq!(context.pose("link").and_then(|pose| pose.get(Prop::RotateY)), Some(5.0));
    }

    #[test]
    fn killed_context_stays_silent() {
        let mut context = AnimationContext::new("test");
        context.play(fade("card", 1.0));
        context.yoyo(fade("orb", 1.0), Repeat::Forever);
        context.kill();
        context.kill();

        assert!(context.tick(0.0).is_empty());
        assert!(context.tick(100.0).is_empty());
        assert!(context.scroll_to(10_000.0).is_empty());
        assert!(context.take_changes().is_empty());
        context.play(fade("late", 1.0));
        assert!(context.is_empty());
        assert!(context.poses().is_empty());
    }
}
