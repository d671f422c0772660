//! Per-entry progress bar.

use leptos::*;

/// Label under the bar, rounded to a whole percent.
pub fn progress_label(percent: f64) -> String {
    format!("{}%", clamp_percent(percent).round() as u32)
}

/// CSS width of the filled part.
pub fn progress_width(percent: f64) -> String {
    format!("width: {}%;", clamp_percent(percent))
}

fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

#[component]
pub fn ProgressBar(
    /// Live percentage, 0 to 100
    #[prop(into)]
    percent: Signal<f64>,
) -> impl IntoView {
    view! {
        <div class="progress">
            <div class="progress-bar">
                <div class="progress-fill" style=move || progress_width(percent.get())></div>
            </div>
            <p class="progress-label">{move || progress_label(percent.get())}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_rounds() {
        assert_eq!(progress_label(0.0), "0%");
        assert_eq!(progress_label(42.4), "42%");
        assert_eq!(progress_label(42.5), "43%");
        assert_eq!(progress_label(100.0), "100%");
    }

    #[test]
    fn test_width_is_clamped() {
        assert_eq!(progress_width(55.5), "width: 55.5%;");
        assert_eq!(progress_width(130.0), "width: 100%;");
        assert_eq!(progress_width(f64::NAN), "width: 0%;");
    }
}
