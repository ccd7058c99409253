use tracing_subscriber::EnvFilter;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Plain on a terminal, JSON otherwise
    Auto,
    Plain,
    Json,
}

impl LogFormat {
    fn is_json(self, tty: bool) -> bool {
        match self {
            LogFormat::Auto => !tty,
            LogFormat::Plain => false,
            LogFormat::Json => true,
        }
    }
}

fn is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

pub fn init(format: LogFormat) {
    if format.is_json(is_tty()) {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .json()
            .flatten_event(true)
            .with_span_list(false)
            .with_current_span(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    }
}
