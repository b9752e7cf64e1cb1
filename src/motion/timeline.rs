use std::collections::{BTreeMap, BTreeSet};

use super::easing::Ease;
use super::pose::{interpolate, Pose, Prop};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    After,
    /// Negative offsets overlap the previous step.
    Offset(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration: f64,
    pub ease: Ease,
    pub position: Position,
}

impl Timing {
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self {
            duration: duration.max(0.0),
            ease,
            position: Position::After,
        }
    }

    pub fn offset(mut self, offset: f64) -> Self {
        self.position = Position::Offset(offset);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub target: String,
    pub from: Pose,
    pub to: Pose,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
    /// `from` is shown before the tween starts.
    pub immediate: bool,
}

impl Tween {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    fn progress(&self, time: f64) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            ((time - self.start) / self.duration).clamp(0.0, 1.0)
        }
    }
}

/// Ordered animation steps. Sampling is a pure function of time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    tweens: Vec<Tween>,
    bases: BTreeMap<String, Pose>,
    delay: f64,
    end: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    // repeating playback only waits once
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn set(mut self, target: impl Into<String>, pose: Pose) -> Self {
        self.bases.entry(target.into()).or_default().overlay(&pose);
        self
    }

    pub fn from_to(
        mut self,
        target: impl Into<String>,
        from: Pose,
        to: Pose,
        timing: Timing,
    ) -> Self {
        let start = self.resolve(timing.position);
        self.push(target.into(), from, to, start, timing, true);
        self
    }

    pub fn to(mut self, target: impl Into<String>, to: Pose, timing: Timing) -> Self {
        let target = target.into();
        let start = self.resolve(timing.position);
        let from = to.sampled_from(&self.sample_target(&target, start));
        self.push(target, from, to, start, timing, false);
        self
    }

    pub fn stagger_from_to<I>(
        mut self,
        targets: I,
        from: Pose,
        to: Pose,
        timing: Timing,
        each: f64,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let group_start = self.resolve(timing.position);
        for (index, target) in targets.into_iter().enumerate() {
            let start = group_start + each * index as f64;
            self.push(target.into(), from.clone(), to.clone(), start, timing, true);
        }
        self
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn body_duration(&self) -> f64 {
        self.end
    }

    pub fn duration(&self) -> f64 {
        self.delay + self.end
    }

    pub fn targets(&self) -> BTreeSet<&str> {
        self.tweens
            .iter()
            .map(|tween| tween.target.as_str())
            .chain(self.bases.keys().map(String::as_str))
            .collect()
    }

    // `time` counts from the start of the delay
    pub fn sample(&self, time: f64) -> BTreeMap<String, Pose> {
        self.sample_body(time - self.delay)
    }

    pub fn sample_body(&self, time: f64) -> BTreeMap<String, Pose> {
        self.targets()
            .into_iter()
            .map(|target| (target.to_string(), self.sample_target(target, time)))
            .collect()
    }

    fn resolve(&self, position: Position) -> f64 {
        match position {
            Position::After => self.end,
            Position::Offset(offset) => (self.end + offset).max(0.0),
        }
    }

    fn push(
        &mut self,
        target: String,
        from: Pose,
        to: Pose,
        start: f64,
        timing: Timing,
        immediate: bool,
    ) {
        let tween = Tween {
            target,
            from,
            to,
            start,
            duration: timing.duration,
            ease: timing.ease,
            immediate,
        };
        self.end = self.end.max(tween.end());
        self.tweens.push(tween);
    }

    fn sample_target(&self, target: &str, time: f64) -> Pose {
        let mut pose = self.bases.get(target).cloned().unwrap_or_default();

        let mut steps: Vec<&Tween> = self
            .tweens
            .iter()
            .filter(|tween| tween.target == target)
            .collect();
        // stable: equal starts keep insertion order
        steps.sort_by(|a, b| a.start.total_cmp(&b.start));

        let mut touched: BTreeSet<Prop> = BTreeSet::new();
        for tween in steps {
            if time >= tween.start {
                let eased = tween.ease.apply(tween.progress(time));
                pose.overlay(&interpolate(&tween.from, &tween.to, eased));
                touched.extend(tween.to.props());
            } else if tween.immediate {
                for (prop, value) in tween.from.iter() {
                    if touched.insert(prop) {
                        pose.set(prop, value);
                    }
                }
            }
        }

        pose
    }
}

#[cfg(test)]
impl Timeline {
    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: Option<f64>, expected: f64) -> bool {
        actual.is_some_and(|value| (value - expected).abs() < 1e-9)
    }

    fn fade_in() -> (Pose, Pose) {
        (Pose::new().opacity(0.0), Pose::new().opacity(1.0))
    }

    #[test]
    fn negative_offset_overlaps_previous_step() {
        let (from, to) = fade_in();
        let timeline = Timeline::new()
            .from_to("a", from.clone(), to.clone(), Timing::new(1.0, Ease::Linear))
            .from_to("b", from, to, Timing::new(1.0, Ease::Linear).offset(-0.8));

        assert!(approx(Some(timeline.tweens()[1].start), 0.2));
        assert!((timeline.duration() - 1.2).abs() < 1e-9);
    }

    #[test]
    fn positive_offset_leaves_a_gap() {
        let (from, to) = fade_in();
        let timeline = Timeline::new()
            .from_to("a", from, to, Timing::new(1.0, Ease::Linear))
            .to("a", Pose::new().opacity(0.0), Timing::new(0.5, Ease::Linear).offset(0.3));

        assert!(approx(Some(timeline.tweens()[1].start), 1.3));
        assert_eq!(timeline.sample(1.15)["a"].get(Prop::Opacity), Some(1.0));
    }

    #[test]
    fn stagger_spaces_each_target() {
        let (from, to) = fade_in();
        let timeline = Timeline::new().stagger_from_to(
            ["w0", "w1", "w2"],
            from,
            to,
            Timing::new(0.6, Ease::Linear),
            0.08,
        );

        let starts: Vec<f64> = timeline.tweens().iter().map(|tween| tween.start).collect();
        assert!((starts[2] - 0.16).abs() < 1e-9);
        assert!((timeline.duration() - 0.76).abs() < 1e-9);
    }

    #[test]
    fn unstarted_from_to_steps_render_their_from_pose() {
        let timeline = Timeline::new()
            .from_to(
                "a",
                Pose::new().opacity(0.0),
                Pose::new().opacity(1.0),
                Timing::new(1.0, Ease::Linear),
            )
            .from_to(
                "b",
                Pose::new().opacity(0.0).y(20.0),
                Pose::new().opacity(1.0).y(0.0),
                Timing::new(1.0, Ease::Linear),
            );

        let poses = timeline.sample(0.5);
        assert_eq!(poses["b"].get(Prop::Opacity), Some(0.0));
        assert_eq!(poses["b"].get(Prop::Y), Some(20.0));
        assert_eq!(poses["a"].get(Prop::Opacity), Some(0.5));
    }

    #[test]
    fn to_steps_continue_from_previous_value() {
        let timeline = Timeline::new()
            .set("bar", Pose::new().width(0.0))
            .to("bar", Pose::new().width(100.0), Timing::new(2.0, Ease::Linear))
            .to("bar", Pose::new().width(50.0), Timing::new(1.0, Ease::Linear));

        assert_eq!(timeline.tweens()[1].from.get(Prop::Width), Some(100.0));
        assert_eq!(timeline.sample(0.0)["bar"].get(Prop::Width), Some(0.0));
        assert_eq!(timeline.sample(2.5)["bar"].get(Prop::Width), Some(75.0));
    }

    #[test]
    fn delay_holds_initial_state() {
        let (from, to) = fade_in();
        let timeline = Timeline::new()
            .with_delay(0.4)
            .from_to("a", from, to, Timing::new(1.0, Ease::Linear));

        assert_eq!(timeline.sample(0.3)["a"].get(Prop::Opacity), Some(0.0));
        assert!(approx(timeline.sample(0.9)["a"].get(Prop::Opacity), 0.5));
        assert!((timeline.duration() - 1.4).abs() < 1e-9);
    }

    #[test]
    fn sampling_backwards_retraces_forward_states() {
        let (from, to) = fade_in();
        let timeline = Timeline::new().from_to("a", from, to, Timing::new(1.0, Ease::Power2Out));

        let forward = timeline.sample(0.25);
        let _ = timeline.sample(1.0);
        assert_eq!(timeline.sample(0.25), forward);
    }
}
