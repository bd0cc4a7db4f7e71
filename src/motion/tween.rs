//! Tween - Animation Configuration Data
//!
//! Property sets, easing curves and per-tween options. These are
//! configuration handed to the engine, not interpolation logic; the
//! values mirror the site's animation design verbatim.

use crate::dom::Element;

/// Easing curve selection
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    PowerIn(u8),
    PowerOut(u8),
    PowerInOut(u8),
    SineInOut,
    /// Overshooting settle; the parameter is the overshoot amount
    BackOut(f32),
    /// Elastic settle; amplitude and period
    ElasticOut(f32, f32),
}

/// Animatable property values. `None` leaves a channel untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TweenProps {
    pub opacity: Option<f32>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub scale: Option<f32>,
    pub scale_x: Option<f32>,
    pub scale_y: Option<f32>,
    pub rotate: Option<f32>,
    pub rotate_x: Option<f32>,
    pub rotate_y: Option<f32>,
}

macro_rules! prop_setter {
    ($($name:ident),*) => {
        $(
            pub fn $name(mut self, value: f32) -> Self {
                self.$name = Some(value);
                self
            }
        )*
    };
}

impl TweenProps {
    pub fn new() -> Self {
        Self::default()
    }

    prop_setter!(opacity, x, y, scale, scale_x, scale_y, rotate, rotate_x, rotate_y);

    /// Write the set channels into an element's inline styles
    pub fn apply_to(&self, element: &mut Element) {
        for (name, value) in self.channels() {
            element.set_style(name, format_value(value));
        }
    }

    /// Remove the set channels from an element's inline styles
    /// (animating "from" these values back to the natural state)
    pub fn clear_from(&self, element: &mut Element) {
        for (name, _) in self.channels() {
            element.remove_style(name);
        }
    }

    /// The channels this property set touches
    pub fn channels(&self) -> Vec<(&'static str, f32)> {
        [
            ("opacity", self.opacity),
            ("x", self.x),
            ("y", self.y),
            ("scale", self.scale),
            ("scale-x", self.scale_x),
            ("scale-y", self.scale_y),
            ("rotate", self.rotate),
            ("rotate-x", self.rotate_x),
            ("rotate-y", self.rotate_y),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }
}

fn format_value(value: f32) -> String {
    // "1" rather than "1.0", matching attribute-style serialization
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// One tween: target property values plus timing options
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub props: TweenProps,
    /// Seconds
    pub duration: f32,
    /// Seconds before the tween starts
    pub delay: f32,
    pub ease: Easing,
    /// Play back to the start values after each forward leg
    pub yoyo: bool,
    /// Extra plays after the first (-1 = forever)
    pub repeat: i32,
    /// Per-target start offset when animating a list
    pub stagger: f32,
}

impl Tween {
    /// A tween toward the given property values
    pub fn to(props: TweenProps) -> Self {
        Self {
            props,
            duration: 0.0,
            delay: 0.0,
            ease: Easing::default(),
            yoyo: false,
            repeat: 0,
            stagger: 0.0,
        }
    }

    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = seconds;
        self
    }

    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds;
        self
    }

    pub fn ease(mut self, ease: Easing) -> Self {
        self.ease = ease;
        self
    }

    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    pub fn repeat(mut self, count: i32) -> Self {
        self.repeat = count;
        self
    }

    pub fn stagger(mut self, seconds: f32) -> Self {
        self.stagger = seconds;
        self
    }

    /// Whether the tween settles back at its start values (a yoyo with an
    /// odd number of return legs, like the toggle pulse)
    pub fn settles_at_start(&self) -> bool {
        self.yoyo && self.repeat > 0 && self.repeat % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_apply_and_clear() {
        let mut el = Element::new("div");
        let props = TweenProps::new().opacity(0.5).y(-10.0);
        props.apply_to(&mut el);
        assert_eq!(el.style("opacity"), Some("0.5"));
        assert_eq!(el.style("y"), Some("-10"));
        props.clear_from(&mut el);
        assert_eq!(el.style("opacity"), None);
    }

    #[test]
    fn test_whole_values_format_without_fraction() {
        let mut el = Element::new("div");
        TweenProps::new().scale(1.0).apply_to(&mut el);
        assert_eq!(el.style("scale"), Some("1"));
    }

    #[test]
    fn test_pulse_settles_at_start() {
        let pulse = Tween::to(TweenProps::new().scale(0.9))
            .duration(0.1)
            .yoyo()
            .repeat(1);
        assert!(pulse.settles_at_start());

        let plain = Tween::to(TweenProps::new().scale(0.9)).duration(0.1);
        assert!(!plain.settles_at_start());
    }
}
