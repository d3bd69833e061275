mod formatter;

pub use formatter::FormatterScreen;
