// entry and hover animation settings
//
// these are purely cosmetic, the page works the same with Motion::none()

// a fade-in, optionally sliding vertically into place
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub duration_s: f64,
    pub delay_s: f64,
    // negative slides down from above, positive slides up from below
    pub offset_y_px: f64,
}

impl Entrance {
    pub const NONE: Entrance = Entrance {
        duration_s: 0.0,
        delay_s: 0.0,
        offset_y_px: 0.0,
    };

    pub fn fade(duration_s: f64) -> Self {
        Self {
            duration_s,
            delay_s: 0.0,
            offset_y_px: 0.0,
        }
    }

    pub fn slide(duration_s: f64, offset_y_px: f64) -> Self {
        Self {
            duration_s,
            delay_s: 0.0,
            offset_y_px,
        }
    }

    pub fn delayed(self, delay_s: f64) -> Self {
        Self { delay_s, ..self }
    }

    // inline css driving the `enter` keyframes
    pub fn style(&self) -> String {
        if self.duration_s <= 0.0 {
            return String::new();
        }

        format!(
            "--enter-from: {:.0}px; animation: enter {:.2}s ease-out {:.2}s both;",
            self.offset_y_px, self.duration_s, self.delay_s
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub hero_title: Entrance,
    pub hero_tagline: Entrance,
    pub card: Entrance,
    // extra delay per project card
    pub card_stagger_s: f64,
    pub hover_scale: f64,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            hero_title: Entrance::slide(0.8, -50.0),
            hero_tagline: Entrance::fade(0.8).delayed(0.5),
            card: Entrance::slide(0.6, 50.0),
            card_stagger_s: 0.2,
            hover_scale: 1.05,
        }
    }
}

impl Motion {
    pub fn none() -> Self {
        Self {
            hero_title: Entrance::NONE,
            hero_tagline: Entrance::NONE,
            card: Entrance::NONE,
            card_stagger_s: 0.0,
            hover_scale: 1.0,
        }
    }

    pub fn card_entrance(&self, index: usize) -> Entrance {
        self.card
            .delayed(self.card.delay_s + self.card_stagger_s * index as f64)
    }

    pub fn hover_style(&self) -> String {
        format!("--hover-scale: {};", self.hover_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_are_staggered() {
        let motion = Motion::default();

        assert_eq!(motion.card_entrance(0).delay_s, 0.0);
        assert!((motion.card_entrance(3).delay_s - 0.6).abs() < 1e-9);
        assert_eq!(
            motion.card_entrance(2).style(),
            "--enter-from: 50px; animation: enter 0.60s ease-out 0.40s both;"
        );
    }

    #[test]
    fn test_hero_timing() {
        let motion = Motion::default();

        assert_eq!(motion.hero_title.offset_y_px, -50.0);
        assert_eq!(motion.hero_tagline.delay_s, 0.5);
        assert!(motion.hero_title.style().contains("--enter-from: -50px"));
    }

    #[test]
    fn test_none_disables_everything() {
        let motion = Motion::none();

        assert_eq!(motion.hero_title.style(), "");
        assert_eq!(motion.card_entrance(5).style(), "");
        assert_eq!(motion.hover_style(), "--hover-scale: 1;");
    }
}
