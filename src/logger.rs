use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Opens `path` for appending. Later calls keep the first file.
pub fn init(path: &Path) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
    {
        *logger = Some(file);
    }
}

pub fn log(message: &str) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if let Some(file) = logger.as_mut() {
        let _ = write_line(file, message);
    }
}

fn write_line<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    writeln!(out, "[{}] {}", timestamp, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_before_init_is_silent() {
        log("nobody is listening");
    }

    #[test]
    fn test_write_line_appends_timestamped_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("quiz.log");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();
        write_line(&mut file, "first").unwrap();
        write_line(&mut file, "second").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] first"));
        assert!(lines[1].ends_with("] second"));
        // "[YYYY-mm-dd HH:MM:SS] "
        assert_eq!(lines[0].find(']'), Some(20));
    }

    #[test]
    fn test_init_creates_log_file() {
        // The only test that initialises the global logger.
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("quiz.log");
        init(&path);
        log("Test log message");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Test log message"));
    }
}
