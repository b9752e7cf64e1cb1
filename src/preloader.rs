//! Branded loading screen sequence.

use tracing::debug;

use crate::motion::{
    AnimationContext, AnimationHandle, CompletionSignal, Ease, MotionEvent, Notification, Pose,
    Scene, Timeline, Timing,
};

pub const ROOT: &str = "preloader.root";
pub const TITLE: &str = "preloader.title";
pub const PROGRESS: &str = "preloader.progress";
pub const ORB_COUNT: usize = 3;

pub fn orb_target(index: usize) -> String {
    format!("preloader.orb.{index}")
}

/// Title in, orbs in, progress bar fill, title out, whole screen out.
pub fn build_timeline() -> Timeline {
    Timeline::new()
        .from_to(
            TITLE,
            Pose::new().opacity(0.0).y(50.0).scale(0.9),
            Pose::new().opacity(1.0).y(0.0).scale(1.0),
            Timing::new(1.0, Ease::Power2Out),
        )
        .stagger_from_to(
            (0..ORB_COUNT).map(orb_target),
            Pose::new().opacity(0.0).scale(0.5),
            Pose::new().opacity(0.3).scale(1.0),
            Timing::new(1.0, Ease::Power2Out).offset(-0.8),
            0.2,
        )
        .set(PROGRESS, Pose::new().width(0.0))
        .to(
            PROGRESS,
            Pose::new().width(100.0),
            Timing::new(2.5, Ease::Power2Out).offset(-0.5),
        )
        .to(
            TITLE,
            Pose::new().opacity(0.0).y(-30.0).scale(1.05),
            Timing::new(0.8, Ease::Power2In).offset(0.3),
        )
        .to(
            ROOT,
            Pose::new().opacity(0.0).scale(0.95),
            Timing::new(1.0, Ease::Power2InOut).offset(-0.4),
        )
}

/// Plays the loading sequence and hands back the completion callback once,
/// at the end of the exit step.
#[derive(Debug)]
pub struct PreloaderScene {
    context: AnimationContext,
    sequence: AnimationHandle,
    completion: CompletionSignal,
}

impl PreloaderScene {
    pub fn new(on_complete: impl FnOnce() + 'static) -> Self {
        let mut context = AnimationContext::new("preloader");
        let sequence = context.play(build_timeline());

        Self {
            context,
            sequence,
            completion: CompletionSignal::new(on_complete),
        }
    }
}

impl Scene for PreloaderScene {
    fn context(&self) -> &AnimationContext {
        &self.context
    }

    fn context_mut(&mut self) -> &mut AnimationContext {
        &mut self.context
    }

    fn tick(&mut self, now: f64) -> Vec<Notification> {
        let mut notifications = Vec::new();
        for event in self.context.tick(now) {
            if event != MotionEvent::Completed(self.sequence) {
                continue;
            }
            if let Some(callback) = self.completion.take() {
                debug!(at = now, "preloader_completed");
                notifications.push(callback);
            }
        }
        notifications
    }

    fn teardown(&mut self) {
        self.completion.cancel();
        self.context.kill();
    }
}

impl Drop for PreloaderScene {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
impl PreloaderScene {
    pub fn is_pending(&self) -> bool {
        self.completion.is_armed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Prop;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_scene() -> (PreloaderScene, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let scene = PreloaderScene::new({
            let calls = calls.clone();
            move || calls.set(calls.get() + 1)
        });
        (scene, calls)
    }

    fn run_notifications(notifications: Vec<Notification>) {
        for notification in notifications {
            notification();
        }
    }

    #[test]
    fn sequence_lasts_five_point_three_seconds() {
        let timeline = build_timeline();
        assert!((timeline.duration() - 5.3).abs() < 1e-9);

        let progress = timeline
            .tweens()
            .iter()
            .find(|tween| tween.target == PROGRESS)
            .map(|tween| tween.start);
        assert!(progress.is_some_and(|start| (start - 1.1).abs() < 1e-9));
    }

    #[test]
    fn progress_bar_fills_before_exit() {
        let timeline = build_timeline();

        assert_eq!(timeline.sample(0.0)[PROGRESS].get(Prop::Width), Some(0.0));
        assert_eq!(timeline.sample(3.7)[PROGRESS].get(Prop::Width), Some(100.0));
        assert_eq!(timeline.sample(0.0)[ROOT].get(Prop::Opacity), None);
        assert_eq!(timeline.sample(5.5)[ROOT].get(Prop::Opacity), Some(0.0));
    }

    #[test]
    fn completion_fires_exactly_once_at_the_end() {
        let (mut scene, calls) = counting_scene();

        run_notifications(scene.tick(100.0));
        run_notifications(scene.tick(105.2));
        assert_eq!(calls.get(), 0);

        run_notifications(scene.tick(105.4));
        run_notifications(scene.tick(106.0));
        run_notifications(scene.tick(200.0));
        assert_eq!(calls.get(), 1);
        assert!(!scene.is_pending());
    }

    #[test]
    fn teardown_before_the_end_never_fires() {
        let (mut scene, calls) = counting_scene();
        run_notifications(scene.tick(0.0));
        run_notifications(scene.tick(2.0));

        scene.teardown();
        for second in 3..20 {
            let notifications = scene.tick(f64::from(second));
            assert!(notifications.is_empty());
        }
        assert!(scene.context_mut().take_changes().is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn dropping_the_scene_cancels_completion() {
        let (mut scene, calls) = counting_scene();
        run_notifications(scene.tick(0.0));
        drop(scene);

        assert_eq!(calls.get(), 0);
    }
}
