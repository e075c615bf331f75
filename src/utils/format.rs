#[cfg(feature = "web")]
pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

#[cfg(feature = "web")]
pub fn format_local(rfc3339: &str) -> String {
    use js_sys::Date;
    let d = Date::new(&wasm_bindgen::JsValue::from_str(rfc3339));
    if d.get_time().is_nan() {
        return rfc3339.to_string();
    }
    let day = d.get_date() as i32;
    let month = (d.get_month() as i32) + 1;
    let year = d.get_full_year() as i32;
    let hour = d.get_hours() as i32;
    let minute = d.get_minutes() as i32;
    format!(
        "{}.{}.{} {}:{}",
        pad2(day),
        pad2(month),
        year,
        pad2(hour),
        pad2(minute)
    )
}

#[cfg(not(feature = "web"))]
pub fn format_local(rfc3339: &str) -> String {
    rfc3339.to_string()
}

/// Missing values render as the dashboard placeholder; whole numbers drop
/// the decimal point.
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        None => "-".to_string(),
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => format!("{:.1}", v),
    }
}

/// Same as [`format_metric`] but with a unit suffix when a value exists.
pub fn format_unit(value: Option<f64>, unit: &str) -> String {
    match value {
        None => "-".to_string(),
        some => format!("{}{}", format_metric(some), unit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_render_without_a_decimal_point() {
        assert_eq!(format_metric(Some(42.0)), "42");
        assert_eq!(format_metric(Some(10.0)), "10");
        assert_eq!(format_metric(Some(450.0)), "450");
    }

    #[test]
    fn fractional_values_keep_one_decimal() {
        assert_eq!(format_metric(Some(12.8)), "12.8");
        assert_eq!(format_metric(Some(35.25)), "35.2");
    }

    #[test]
    fn missing_values_are_placeholders_with_or_without_units() {
        assert_eq!(format_metric(None), "-");
        assert_eq!(format_unit(None, "°C"), "-");
    }

    #[test]
    fn units_attach_only_to_present_values() {
        assert_eq!(format_unit(Some(28.0), "°C"), "28°C");
        assert_eq!(format_unit(Some(3.6), " m/s"), "3.6 m/s");
        assert_eq!(format_unit(Some(65.0), "%"), "65%");
    }
}
