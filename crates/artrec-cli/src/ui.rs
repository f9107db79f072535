use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    ));
}

fn resolve(flags: &GlobalFlags, is_tty: bool, no_color: bool, columns: Option<&str>) -> UiPrefs {
    let machine_readable = matches!(flags.format, OutputFormat::Json | OutputFormat::Raw);

    let table_color =
        is_tty && flags.format == OutputFormat::Table && !flags.quiet && !no_color;
    let progress = is_tty && !flags.quiet && !machine_readable;

    let term_width = columns
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    UiPrefs {
        table_color,
        progress,
        term_width,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        progress: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet,
            verbose: false,
            interactions: None,
            articles: None,
        }
    }

    #[test]
    fn json_never_shows_progress() {
        assert!(!resolve(&flags(OutputFormat::Json, false), true, false, None).progress);
        assert!(!resolve(&flags(OutputFormat::Raw, false), true, false, None).progress);
        assert!(resolve(&flags(OutputFormat::Text, false), true, false, None).progress);
    }

    #[test]
    fn no_tty_disables_progress_and_color() {
        let prefs = resolve(&flags(OutputFormat::Table, false), false, false, None);
        assert!(!prefs.progress);
        assert!(!prefs.table_color);
    }

    #[test]
    fn no_color_and_quiet_disable_table_color() {
        assert!(!resolve(&flags(OutputFormat::Table, false), true, true, None).table_color);
        assert!(!resolve(&flags(OutputFormat::Table, true), true, false, None).table_color);
        assert!(resolve(&flags(OutputFormat::Table, false), true, false, None).table_color);
    }

    #[test]
    fn narrow_columns_are_ignored() {
        let base = flags(OutputFormat::Table, false);
        assert_eq!(resolve(&base, true, false, Some("120")).term_width, Some(120));
        assert_eq!(resolve(&base, true, false, Some("20")).term_width, None);
        assert_eq!(resolve(&base, true, false, Some("wide")).term_width, None);
    }
}
