//! Animation values as plain functions of time or scroll progress.

/// Scroll progress stops shared by the scroll-linked section styles.
pub const SCROLL_STOPS: [f64; 4] = [0.0, 0.2, 0.8, 1.0];

const OPACITY: [f64; 4] = [0.0, 1.0, 1.0, 0.0];
const OFFSET_Y: [f64; 4] = [100.0, 0.0, 0.0, -100.0];
const SCALE: [f64; 4] = [0.8, 1.0, 1.0, 0.8];

/// Piecewise-linear interpolation of `progress` over `stops`, clamped to the
/// first and last output outside of the stop range.
///
/// `stops` must be ascending and the same length as `outputs`.
pub fn interpolate(progress: f64, stops: &[f64], outputs: &[f64]) -> f64 {
    debug_assert_eq!(stops.len(), outputs.len());
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return 0.0;
    };
    if progress.is_nan() || progress <= *first {
        return outputs[0];
    }
    if progress >= *last {
        return outputs[outputs.len() - 1];
    }
    for i in 1..stops.len() {
        if progress <= stops[i] {
            let span = stops[i] - stops[i - 1];
            if span <= 0.0 {
                return outputs[i];
            }
            let t = (progress - stops[i - 1]) / span;
            return outputs[i - 1] + (outputs[i] - outputs[i - 1]) * t;
        }
    }
    outputs[outputs.len() - 1]
}

/// How far an element has travelled through the viewport.
///
/// 0 when its top edge meets the bottom of the viewport, 1 when its bottom
/// edge leaves through the top.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let distance = viewport_height + height;
    if distance <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / distance).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStyle {
    pub opacity: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl ScrollStyle {
    pub fn at(progress: f64) -> Self {
        Self {
            opacity: interpolate(progress, &SCROLL_STOPS, &OPACITY),
            offset_y: interpolate(progress, &SCROLL_STOPS, &OFFSET_Y),
            scale: interpolate(progress, &SCROLL_STOPS, &SCALE),
        }
    }

    /// Fully visible, used before layout is known (server render).
    pub fn resting() -> Self {
        Self::at(0.5)
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.1}px) scale({:.3});",
            self.opacity, self.offset_y, self.scale
        )
    }
}

/// Animation delay in seconds for every character of `text`.
pub fn letter_delays(text: &str, delay: f64, stagger: f64) -> Vec<(char, f64)> {
    text.chars()
        .enumerate()
        .map(|(i, c)| (c, delay + stagger * i as f64))
        .collect()
}
