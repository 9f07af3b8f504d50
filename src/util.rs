// Small shared helpers.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Render a scale as a whole percentage, e.g. 1.25 -> "125%".
pub fn format_percent(scale: f64) -> String {
    format!("{}%", (scale * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::format_percent;

    #[test]
    fn formats_whole_percentages() {
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(1.25), "125%");
        assert_eq!(format_percent(0.5), "50%");
        assert_eq!(format_percent(2.999), "300%");
    }
}
