//! Setting value validation.

use std::net::IpAddr;

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "SERVER_PORT" => validate_int_range(value, 1, 65535)?,
        "BIND_ADDRESS" => {
            value
                .parse::<IpAddr>()
                .map_err(|_| "must be an IP address")?;
        }
        "CAPTURE_SCALE" => validate_int_range(value, 1, 4)?,
        "STATUS_DURATION_SECS" => validate_int_range(value, 1, 30)?,
        "FONT_PATH" => {
            if !value.is_empty() {
                let lower = value.to_ascii_lowercase();
                if !lower.ends_with(".ttf") && !lower.ends_with(".otf") {
                    return Err("must point to a .ttf or .otf file".into());
                }
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
