use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prop {
    Opacity,
    /// Horizontal offset as a percentage of the element's own width.
    XPercent,
    X,
    Y,
    Rotate,
    RotateX,
    RotateY,
    Scale,
    Blur,
    /// Width as a percentage of the parent.
    Width,
}

impl Prop {
    pub fn resting_value(self) -> f64 {
        match self {
            Self::Opacity | Self::Scale => 1.0,
            _ => 0.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pose {
    values: BTreeMap<Prop, f64>,
}

impl Pose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, prop: Prop, value: f64) -> Self {
        self.values.insert(prop, value);
        self
    }

    pub fn opacity(self, value: f64) -> Self {
        self.with(Prop::Opacity, value)
    }

    pub fn x(self, value: f64) -> Self {
        self.with(Prop::X, value)
    }

    pub fn x_percent(self, value: f64) -> Self {
        self.with(Prop::XPercent, value)
    }

    pub fn y(self, value: f64) -> Self {
        self.with(Prop::Y, value)
    }

    pub fn scale(self, value: f64) -> Self {
        self.with(Prop::Scale, value)
    }

    pub fn blur(self, value: f64) -> Self {
        self.with(Prop::Blur, value)
    }

    pub fn rotate(self, value: f64) -> Self {
        self.with(Prop::Rotate, value)
    }

    pub fn rotate_x(self, value: f64) -> Self {
        self.with(Prop::RotateX, value)
    }

    pub fn rotate_y(self, value: f64) -> Self {
        self.with(Prop::RotateY, value)
    }

    pub fn width(self, value: f64) -> Self {
        self.with(Prop::Width, value)
    }

    pub fn get(&self, prop: Prop) -> Option<f64> {
        self.values.get(&prop).copied()
    }

    pub fn value(&self, prop: Prop) -> f64 {
        self.get(prop).unwrap_or_else(|| prop.resting_value())
    }

    pub fn set(&mut self, prop: Prop, value: f64) {
        self.values.insert(prop, value);
    }

    pub fn contains(&self, prop: Prop) -> bool {
        self.values.contains_key(&prop)
    }

    pub fn props(&self) -> impl Iterator<Item = Prop> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prop, f64)> + '_ {
        self.values.iter().map(|(prop, value)| (*prop, *value))
    }

    pub fn overlay(&mut self, other: &Pose) {
        for (prop, value) in other.iter() {
            self.set(prop, value);
        }
    }

    /// Props of `self` with values read from `source`.
    pub fn sampled_from(&self, source: &Pose) -> Pose {
        let mut pose = Pose::new();
        for prop in self.props() {
            pose.set(prop, source.value(prop));
        }
        pose
    }

    pub fn to_css(&self) -> Vec<(&'static str, String)> {
        let mut declarations = Vec::new();

        if let Some(opacity) = self.get(Prop::Opacity) {
            declarations.push(("opacity", format_number(opacity)));
        }

        let mut transforms = Vec::new();
        if let Some(percent) = self.get(Prop::XPercent) {
            transforms.push(format!("translateX({}%)", format_number(percent)));
        }
        if self.contains(Prop::X) || self.contains(Prop::Y) {
            transforms.push(format!(
                "translate3d({}px, {}px, 0)",
                format_number(self.value(Prop::X)),
                format_number(self.value(Prop::Y))
            ));
        }
        if let Some(angle) = self.get(Prop::Rotate) {
            transforms.push(format!("rotate({}deg)", format_number(angle)));
        }
        if let Some(angle) = self.get(Prop::RotateX) {
            transforms.push(format!("rotateX({}deg)", format_number(angle)));
        }
        if let Some(angle) = self.get(Prop::RotateY) {
            transforms.push(format!("rotateY({}deg)", format_number(angle)));
        }
        if let Some(scale) = self.get(Prop::Scale) {
            transforms.push(format!("scale({})", format_number(scale)));
        }
        if !transforms.is_empty() {
            declarations.push(("transform", transforms.join(" ")));
        }

        if let Some(blur) = self.get(Prop::Blur) {
            declarations.push(("filter", format!("blur({}px)", format_number(blur))));
        }

        if let Some(width) = self.get(Prop::Width) {
            declarations.push(("width", format!("{}%", format_number(width))));
        }

        declarations
    }
}

pub fn interpolate(from: &Pose, to: &Pose, progress: f64) -> Pose {
    let mut pose = Pose::new();
    for (prop, end) in to.iter() {
        let start = from.value(prop);
        pose.set(prop, start + (end - start) * progress);
    }
    pose
}

fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_groups_transforms_into_one_declaration() {
        let pose = Pose::new().opacity(0.5).y(20.0).scale(0.95).blur(6.0);

        let css = pose.to_css();
        assert_eq!(
            css,
            vec![
                ("opacity", "0.5".to_string()),
                ("transform", "translate3d(0px, 20px, 0) scale(0.95)".to_string()),
                ("filter", "blur(6px)".to_string()),
            ]
        );
    }

    #[test]
    fn percent_offset_and_rotation_render_in_order() {
        let pose = Pose::new().x_percent(100.0).rotate_y(15.0).rotate_x(5.0);

        let css = pose.to_css();
        assert_eq!(
            css,
            vec![("transform", "translateX(100%) rotateX(5deg) rotateY(15deg)".to_string())]
        );
    }

    #[test]
    fn interpolation_uses_resting_values_for_missing_starts() {
        let to = Pose::new().opacity(0.0).scale(2.0).y(-10.0);
        let halfway = interpolate(&Pose::new(), &to, 0.5);

        assert_eq!(halfway.get(Prop::Opacity), Some(0.5));
        assert_eq!(halfway.get(Prop::Scale), Some(1.5));
        assert_eq!(halfway.get(Prop::Y), Some(-5.0));
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        let pose = Pose::new().width(-0.0);
        assert_eq!(pose.to_css(), vec![("width", "0%".to_string())]);
    }
}
