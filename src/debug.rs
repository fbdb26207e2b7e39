pub const DEBUG_ENV: &str = "MEMORIA_DEBUG";

pub fn debug_mode_enabled() -> bool {
    match std::env::var(DEBUG_ENV) {
        Ok(value) => is_truthy(&value),
        Err(_) => false,
    }
}

fn is_truthy(value: &str) -> bool {
    let v = value.trim().to_ascii_lowercase();
    matches!(v.as_str(), "1" | "true" | "yes" | "on")
}

/// Prints `[DEBUG][area] message` to stderr when debug mode is on.
pub fn log(area: &str, message: impl AsRef<str>) {
    if debug_mode_enabled() {
        eprintln!("[DEBUG][{}] {}", area, message.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::is_truthy;

    #[test]
    fn truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "On"] {
            assert!(is_truthy(value), "{value:?}");
        }
        for value in ["", "0", "false", "off", "enabled"] {
            assert!(!is_truthy(value), "{value:?}");
        }
    }
}
