//! Scroll-revealed page sections and their ambient decoration.
//!
//! Each `*_scene` builds the [`AnimationContext`] a section component owns.
//! Entrance timelines are bound to scroll triggers; ambient loops run on
//! their own clock and are skipped when the visitor prefers reduced motion.

use crate::motion::{AnimationContext, AnimationHandle, Ease, Pose, Repeat, Timeline, Timing};
use crate::scroll::ScrollTrigger;

const BLUR_IN: f64 = 20.0;
const REVEAL_SECONDS: f64 = 1.2;

fn hidden_offset(x: f64, y: f64) -> Pose {
    Pose::new().opacity(0.0).x(x).y(y).blur(BLUR_IN)
}

fn shown() -> Pose {
    Pose::new().opacity(1.0).x(0.0).y(0.0).blur(0.0)
}

fn pop_in() -> (Pose, Pose) {
    (
        Pose::new().opacity(0.0).y(50.0).scale(0.8),
        Pose::new().opacity(1.0).y(0.0).scale(1.0),
    )
}

/// Ambient loop that starts `delay` seconds in and then bounces forever.
fn ambient(
    context: &mut AnimationContext,
    target: String,
    to: Pose,
    duration: f64,
    ease: Ease,
    delay: f64,
) {
    context.yoyo(
        Timeline::new()
            .with_delay(delay)
            .to(target, to, Timing::new(duration, ease)),
        Repeat::Forever,
    );
}

pub mod about {
    pub const SECTION: &str = "about.section";
    pub const IMAGE: &str = "about.image";
    pub const CONTENT: &str = "about.content";
    pub const GLOW: &str = "about.glow";
    pub const ORB_COUNT: usize = 2;
    pub const START: f64 = 0.8;

    pub fn skill_target(index: usize) -> String {
        format!("about.skill.{index}")
    }

    pub fn orb_target(index: usize) -> String {
        format!("about.orb.{index}")
    }
}

pub fn about_reveal(skill_count: usize) -> Timeline {
    let (pop_from, pop_to) = pop_in();

    Timeline::new()
        .from_to(
            about::IMAGE,
            hidden_offset(-100.0, 0.0),
            shown(),
            Timing::new(REVEAL_SECONDS, Ease::Power2Out),
        )
        .from_to(
            about::CONTENT,
            hidden_offset(100.0, 0.0),
            shown(),
            Timing::new(REVEAL_SECONDS, Ease::Power2Out).offset(-0.8),
        )
        .stagger_from_to(
            (0..skill_count).map(about::skill_target),
            pop_from,
            pop_to,
            Timing::new(0.6, Ease::back_out()).offset(-0.5),
            0.1,
        )
}

pub fn about_scene(skill_count: usize, reduced_motion: bool) -> AnimationContext {
    let mut context = AnimationContext::new("about");
    context.scroll_reveal(
        about_reveal(skill_count),
        ScrollTrigger::new(about::SECTION, about::START),
    );

    if !reduced_motion {
        context.yoyo(
            Timeline::new().set(about::GLOW, Pose::new().opacity(0.5)).to(
                about::GLOW,
                Pose::new().scale(1.1).opacity(0.8),
                Timing::new(3.0, Ease::SineInOut),
            ),
            Repeat::Forever,
        );
        for index in 0..about::ORB_COUNT {
            ambient(
                &mut context,
                about::orb_target(index),
                Pose::new().x(10.0).y(-10.0),
                6.0,
                Ease::SineInOut,
                0.5 * index as f64,
            );
        }
    }

    context
}

pub mod projects {
    pub const SECTION: &str = "projects.section";
    pub const TITLE: &str = "projects.title";
    pub const PARTICLE_COUNT: usize = 6;
    pub const TITLE_START: f64 = 0.8;
    pub const CARDS_START: f64 = 0.75;

    pub fn card_target(index: usize) -> String {
        format!("projects.card.{index}")
    }

    pub fn particle_target(index: usize) -> String {
        format!("projects.particle.{index}")
    }

    /// Size, placement and fixed opacity of particle `index`.
    pub fn particle_style(index: usize) -> String {
        let i = index as f64;
        let size = 15.0 + 5.0 * i;
        format!(
            "width: {size}px; height: {size}px; top: {}%; left: {}%; opacity: 0.2;",
            10.0 + 12.0 * i,
            5.0 + 15.0 * i
        )
    }

    pub fn particle_drift(index: usize) -> f64 {
        10.0 + 5.0 * index as f64
    }

    pub fn particle_seconds(index: usize) -> f64 {
        4.0 + index as f64
    }
}

pub fn projects_title_reveal() -> Timeline {
    Timeline::new().from_to(
        projects::TITLE,
        hidden_offset(0.0, 100.0),
        shown(),
        Timing::new(REVEAL_SECONDS, Ease::Power2Out),
    )
}

pub fn projects_cards_reveal(card_count: usize) -> Timeline {
    let (pop_from, pop_to) = pop_in();
    Timeline::new().stagger_from_to(
        (0..card_count).map(projects::card_target),
        pop_from,
        pop_to,
        Timing::new(0.8, Ease::back_out()),
        0.15,
    )
}

pub fn projects_scene(card_count: usize, reduced_motion: bool) -> AnimationContext {
    let mut context = AnimationContext::new("projects");
    context.scroll_reveal(
        projects_title_reveal(),
        ScrollTrigger::new(projects::SECTION, projects::TITLE_START),
    );
    context.scroll_reveal(
        projects_cards_reveal(card_count),
        ScrollTrigger::new(projects::SECTION, projects::CARDS_START),
    );

    if !reduced_motion {
        for index in 0..projects::PARTICLE_COUNT {
            let drift = projects::particle_drift(index);
            ambient(
                &mut context,
                projects::particle_target(index),
                Pose::new().x(drift).y(drift),
                projects::particle_seconds(index),
                Ease::SineInOut,
                0.0,
            );
        }
    }

    context
}

pub mod contact {
    pub const SECTION: &str = "contact.section";
    pub const FORM: &str = "contact.form";
    pub const SOCIAL: &str = "contact.social";
    pub const SUBMIT: &str = "contact.submit";
    pub const START: f64 = 0.8;
    pub(super) const PRESS_SLOT: &str = "contact.submit.press";
}

pub fn contact_reveal() -> Timeline {
    Timeline::new()
        .from_to(
            contact::FORM,
            hidden_offset(-100.0, 0.0),
            shown(),
            Timing::new(REVEAL_SECONDS, Ease::Power2Out),
        )
        .from_to(
            contact::SOCIAL,
            hidden_offset(100.0, 0.0),
            shown(),
            Timing::new(REVEAL_SECONDS, Ease::Power2Out).offset(-0.8),
        )
}

pub fn contact_scene() -> AnimationContext {
    let mut context = AnimationContext::new("contact");
    context.scroll_reveal(
        contact_reveal(),
        ScrollTrigger::new(contact::SECTION, contact::START),
    );
    context
}

/// Squeeze the submit control and let it spring back once.
pub fn press_feedback(context: &mut AnimationContext) -> AnimationHandle {
    context.yoyo_in_slot(
        contact::PRESS_SLOT,
        Timeline::new().to(
            contact::SUBMIT,
            Pose::new().scale(0.95),
            Timing::new(0.1, Ease::Power2InOut),
        ),
        Repeat::Times(1),
    )
}

pub mod footer {
    pub const ROOT: &str = "footer.root";
    pub const ORB_COUNT: usize = 4;
    pub const START: f64 = 0.9;

    pub fn orb_target(index: usize) -> String {
        format!("footer.orb.{index}")
    }
}

pub fn footer_reveal() -> Timeline {
    Timeline::new().from_to(
        footer::ROOT,
        hidden_offset(0.0, 60.0),
        shown(),
        Timing::new(REVEAL_SECONDS, Ease::Power2Out),
    )
}

pub fn footer_scene(reduced_motion: bool) -> AnimationContext {
    let mut context = AnimationContext::new("footer");
    context.scroll_reveal(footer_reveal(), ScrollTrigger::new(footer::ROOT, footer::START));

    if !reduced_motion {
        for index in 0..footer::ORB_COUNT {
            ambient(
                &mut context,
                footer::orb_target(index),
                Pose::new().y(-20.0).rotate(15.0).scale(1.05),
                4.0,
                Ease::Power1InOut,
                0.6 * index as f64,
            );
        }
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{MotionEvent, Prop};

    fn measured(context: &mut AnimationContext, top: f64) {
        context.measure(|_| Some(top), 1_000.0);
    }

    fn opacity(context: &AnimationContext, target: &str) -> Option<f64> {
        context.pose(target).and_then(|pose| pose.get(Prop::Opacity))
    }

    #[test]
    fn about_reveal_overlaps_panels_and_skills() {
        let timeline = about_reveal(6);
        let tweens = timeline.tweens();

        assert!((tweens[1].start - 0.4).abs() < 1e-9);
        assert!((tweens[2].start - 1.1).abs() < 1e-9);
        assert!((tweens[7].start - 1.6).abs() < 1e-9);
        assert!((timeline.duration() - 2.2).abs() < 1e-9);
    }

    #[test]
    fn about_hides_until_scrolled_into_view() {
        let mut context = about_scene(6, true);
        measured(&mut context, 1_800.0);
        context.tick(0.0);

        assert_eq!(opacity(&context, about::IMAGE), Some(0.0));
        context.scroll_to(999.0);
        context.tick(5.0);
        assert_eq!(opacity(&context, about::IMAGE), Some(0.0));
    }

    #[test]
    fn reveal_is_reversible_down_up_down() {
        let mut context = contact_scene();
        measured(&mut context, 2_000.0);
        let mut now = 0.0;
        context.tick(now);

        let mut states = Vec::new();
        for scroll_y in [0.0, 1_500.0, 200.0, 1_600.0] {
            context.scroll_to(scroll_y);
            now += 3.0;
            context.tick(now);
            context.tick(now + 3.0);
            now += 3.0;
            states.push(opacity(&context, contact::FORM) == Some(1.0));
        }

        assert_eq!(states, vec![false, true, false, true]);
    }

    #[test]
    fn re_measure_can_reveal_without_scrolling() {
        let mut context = footer_scene(true);
        context.scroll_to(500.0);
        let events = context.measure(|_| Some(1_200.0), 1_000.0);

        assert!(matches!(events.as_slice(), [MotionEvent::Toggled { revealed: true, .. }]));
    }

    #[test]
    fn projects_use_two_thresholds() {
        let mut context = projects_scene(6, true);
        context.measure(|_| Some(1_000.0), 1_000.0);

        let events = context.scroll_to(220.0);
        assert_eq!(events.len(), 1);
        let events = context.scroll_to(260.0);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn particles_grow_and_slow_with_index() {
        assert_eq!(
            projects::particle_style(2),
            "width: 25px; height: 25px; top: 34%; left: 35%; opacity: 0.2;"
        );
        assert_eq!(projects::particle_drift(5), 35.0);
        assert_eq!(projects::particle_seconds(5), 9.0);
    }

    #[test]
    fn ambient_loops_respect_reduced_motion() {
        assert_eq!(about_scene(6, true).len(), 1);
        assert_eq!(about_scene(6, false).len(), 1 + 1 + about::ORB_COUNT);
        assert_eq!(projects_scene(6, false).len(), 2 + projects::PARTICLE_COUNT);
        assert_eq!(footer_scene(false).len(), 1 + footer::ORB_COUNT);
    }

    #[test]
    fn press_feedback_springs_back_and_replaces_itself() {
        let mut context = contact_scene();
        press_feedback(&mut context);
        let handle = press_feedback(&mut context);
        assert_eq!(context.len(), 2);

        context.tick(0.0);
        context.tick(0.1);
        let scale = context.pose(contact::SUBMIT).and_then(|pose| pose.get(Prop::Scale));
        assert!(scale.is_some_and(|value| value < 1.0));

        assert_eq!(context.tick(0.3), vec![MotionEvent::Completed(handle)]);
        let scale = context.pose(contact::SUBMIT).and_then(|pose| pose.get(Prop::Scale));
        assert_eq!(scale, Some(1.0));
    }

    #[test]
    fn footer_glow_orbs_are_staggered() {
        let mut context = footer_scene(false);
        context.tick(0.0);
        context.tick(0.5);

        let first = context.pose(&footer::orb_target(0)).and_then(|pose| pose.get(Prop::Y));
        let second = context.pose(&footer::orb_target(1)).and_then(|pose| pose.get(Prop::Y));
        assert!(first.is_some_and(|y| y < 0.0));
        assert_eq!(second, Some(0.0));
    }
}
