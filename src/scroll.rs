use web_sys::{window, Element};
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Linear interpolation from one range onto another, clamped at both ends.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if (in_end - in_start).abs() < f64::EPSILON {
        return out_start;
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

/// How far an element has travelled through the viewport: 0 when its top
/// edge touches the bottom of the screen, 1 when its bottom edge leaves the
/// top.
pub fn section_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

pub fn is_scrolled_past(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Scroll progress of `node` through the viewport, recomputed whenever the
/// window scrolls.
#[hook]
pub fn use_section_progress(node: NodeRef) -> f64 {
    let (_, scroll_y) = use_window_scroll();
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |(node, _): &(NodeRef, i64)| {
                let viewport_height = window()
                    .and_then(|w| w.inner_height().ok())
                    .and_then(|h| h.as_f64());
                if let (Some(element), Some(viewport_height)) = (node.cast::<Element>(), viewport_height) {
                    let rect = element.get_bounding_client_rect();
                    progress.set(section_progress(rect.top(), rect.height(), viewport_height));
                }
                || ()
            },
            (node, scroll_y as i64),
        );
    }

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_interpolates_and_clamps() {
        let parallax = |y| map_range(y, (0.0, 500.0), (0.0, 200.0));
        assert_eq!(parallax(0.0), 0.0);
        assert_eq!(parallax(250.0), 100.0);
        assert_eq!(parallax(500.0), 200.0);
        assert_eq!(parallax(5_000.0), 200.0);
        assert_eq!(parallax(-10.0), 0.0);
    }

    #[test]
    fn map_range_handles_descending_output() {
        assert_eq!(map_range(0.5, (0.0, 1.0), (0.0, -20.0)), -10.0);
        assert_eq!(map_range(1.0, (0.0, 1.0), (-20.0, 0.0)), 0.0);
    }

    #[test]
    fn degenerate_input_range_maps_to_start() {
        assert_eq!(map_range(3.0, (1.0, 1.0), (7.0, 9.0)), 7.0);
    }

    #[test]
    fn section_progress_spans_enter_to_exit() {
        // 800px viewport, 1000px section
        assert_eq!(section_progress(800.0, 1000.0, 800.0), 0.0);
        assert_eq!(section_progress(-1000.0, 1000.0, 800.0), 1.0);
        assert_eq!(section_progress(-100.0, 1000.0, 800.0), 0.5);
        assert_eq!(section_progress(2_000.0, 1000.0, 800.0), 0.0);
    }

    #[test]
    fn navbar_threshold_is_exclusive() {
        assert!(!is_scrolled_past(50.0, 50.0));
        assert!(is_scrolled_past(50.5, 50.0));
    }
}
