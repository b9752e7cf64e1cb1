//! Landing banner: intro reveal, typewriter subtitle, ambient loops.

use crate::content;
use crate::motion::{AnimationContext, Ease, Notification, Pose, Repeat, Scene, Timeline, Timing};
use crate::typewriter::{Typewriter, TypewriterConfig};

pub const TITLE: &str = "hero.title";
pub const CTA_PRIMARY: &str = "hero.cta.primary";
pub const CTA_SECONDARY: &str = "hero.cta.secondary";
pub const SCENE: &str = "hero.scene";
pub const ROLE: &str = "hero.role";

pub const INTRO_DELAY: f64 = 0.4;

pub fn subtitle_word_target(index: usize) -> String {
    format!("hero.subtitle.{index}")
}

/// One entry per whitespace-separated word; runs of whitespace collapse.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn intro_timeline(word_count: usize) -> Timeline {
    let cta_from = Pose::new().opacity(0.0).scale(0.8);
    let cta_to = Pose::new().opacity(1.0).scale(1.0);

    Timeline::new()
        .with_delay(INTRO_DELAY)
        .from_to(
            TITLE,
            Pose::new().opacity(0.0).y(100.0).blur(20.0),
            Pose::new().opacity(1.0).y(0.0).blur(0.0),
            Timing::new(1.2, Ease::Power2Out),
        )
        .stagger_from_to(
            (0..word_count).map(subtitle_word_target),
            Pose::new().opacity(0.0).y(20.0).blur(6.0),
            Pose::new().opacity(1.0).y(0.0).blur(0.0),
            Timing::new(0.6, Ease::Power2Out).offset(-0.6),
            0.08,
        )
        .from_to(
            CTA_PRIMARY,
            cta_from.clone(),
            cta_to.clone(),
            Timing::new(0.8, Ease::back_out()).offset(-0.5),
        )
        .from_to(
            CTA_SECONDARY,
            cta_from,
            cta_to,
            Timing::new(0.8, Ease::back_out()).offset(-0.6),
        )
}

/// Primary call-to-action bob, starting once the intro is over.
pub fn float_loop(start: f64) -> Timeline {
    Timeline::new()
        .with_delay(start)
        .to(CTA_PRIMARY, Pose::new().y(-10.0), Timing::new(2.0, Ease::Power1InOut))
}

/// Slow tilt of the embedded 3D scene.
pub fn scene_loop(start: f64) -> Timeline {
    Timeline::new().with_delay(start).to(
        SCENE,
        Pose::new().rotate_y(5.0).rotate_x(2.0),
        Timing::new(20.0, Ease::Power1InOut),
    )
}

#[derive(Debug)]
pub struct HeroScene {
    context: AnimationContext,
    typewriter: Typewriter,
    role_text: Option<String>,
}

impl HeroScene {
    pub fn new(word_count: usize, reduced_motion: bool) -> Self {
        let mut context = AnimationContext::new("hero");
        let intro = intro_timeline(word_count);
        let intro_end = intro.duration();
        context.play(intro);

        if !reduced_motion {
            context.yoyo(float_loop(intro_end), Repeat::Forever);
            context.yoyo(scene_loop(intro_end), Repeat::Forever);
        }

        Self {
            context,
            typewriter: Typewriter::new(
                content::ROLES.iter().copied(),
                TypewriterConfig::default(),
            ),
            role_text: None,
        }
    }
}

impl Scene for HeroScene {
    fn context(&self) -> &AnimationContext {
        &self.context
    }

    fn context_mut(&mut self) -> &mut AnimationContext {
        &mut self.context
    }

    fn tick(&mut self, now: f64) -> Vec<Notification> {
        if self.context.is_killed() {
            return Vec::new();
        }
        self.context.tick(now);
        if self.typewriter.tick(now) {
            self.role_text = Some(self.typewriter.text());
        }
        Vec::new()
    }

    fn text_changes(&mut self) -> Vec<(String, String)> {
        self.role_text
            .take()
            .map(|text| vec![(ROLE.to_string(), text)])
            .unwrap_or_default()
    }

    fn teardown(&mut self) {
        self.role_text = None;
        self.context.kill();
    }
}
