pub struct FileSizeUtils;

impl FileSizeUtils {
    /// Formats a byte count with the largest unit whose base-1024 order
    /// of magnitude matches, rounded to at most two decimal places with
    /// trailing zeros trimmed. Counts beyond the last unit clamp to GB.
    pub fn format_size(size_bytes: u64) -> String {
        const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

        if size_bytes == 0 {
            return "0 Bytes".to_string();
        }

        let mut remaining = size_bytes;
        let mut unit_index = 0;
        while remaining >= 1024 && unit_index < UNITS.len() - 1 {
            remaining /= 1024;
            unit_index += 1;
        }

        let scaled = size_bytes as f64 / 1024f64.powi(unit_index as i32);
        let mut value = format!("{:.2}", scaled);
        while value.ends_with('0') {
            value.pop();
        }
        if value.ends_with('.') {
            value.pop();
        }
        format!("{} {}", value, UNITS[unit_index])
    }
}
