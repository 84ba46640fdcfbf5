use eframe::egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(24, 26, 32);
pub const GRID_LINE: Color32 = Color32::from_rgb(38, 41, 50);
pub const BORDER: Color32 = Color32::from_rgb(90, 96, 112);
pub const FOOD: Color32 = Color32::from_rgb(231, 76, 60);
pub const SNAKE_HEAD: Color32 = Color32::from_rgb(46, 204, 113);

/// Body segments fade from the head hue towards a darker tone along the tail.
pub fn body_color(index: usize, len: usize) -> Color32 {
    let t = if len <= 1 {
        0.0
    } else {
        index as f32 / (len - 1) as f32
    };
    hsv_to_color(0.40 - 0.08 * t, 0.75, 0.80 - 0.35 * t)
}

pub fn particle_color(age_fraction: f32) -> Color32 {
    let alpha = ((1.0 - age_fraction.clamp(0.0, 1.0)) * 255.0) as u8;
    Color32::from_rgba_unmultiplied(FOOD.r(), FOOD.g(), FOOD.b(), alpha)
}

fn hsv_to_color(hue: f32, saturation: f32, value: f32) -> Color32 {
    let h = hue.rem_euclid(1.0) * 6.0;
    let c = value * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = value - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Color32::from_rgb(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_color(0.0, 1.0, 1.0), Color32::from_rgb(255, 0, 0));
        assert_eq!(hsv_to_color(1.0 / 3.0, 1.0, 1.0), Color32::from_rgb(0, 255, 0));
        assert_eq!(hsv_to_color(0.5, 0.0, 0.5), Color32::from_rgb(128, 128, 128));
    }

    #[test]
    fn test_body_fades_towards_tail() {
        let head = body_color(0, 10);
        let tail = body_color(9, 10);
        assert!(tail.g() < head.g());
        assert_eq!(body_color(0, 1), head);
    }

    #[test]
    fn test_particle_fades_out() {
        assert_eq!(particle_color(0.0).a(), 255);
        assert_eq!(particle_color(1.0).a(), 0);
    }
}
