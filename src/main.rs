use std::panic;
use std::path::PathBuf;
use tilde::error::{self, ConfigError, ErrorKind};
use tilde::file::expand_path;
use tilde::{logging, App, EditorConfig};

fn main() {
    error::setup_panic_handler();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args);

    let (mut config, config_error) = match EditorConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (EditorConfig::default(), Some(err)),
    };
    if let Some(path) = options.log_file {
        config = config.with_log_file(path);
    }
    if let Err(err) = logging::init(&config) {
        eprintln!("logging disabled: {}", err);
    }

    // run から戻った時点でパニック時も含めて raw モードは復元済み
    match panic::catch_unwind(|| run(&config, options.file, config_error)) {
        Ok(Ok(())) => {}
        Ok(Err(err)) => error::fail(err.kind(), &err.to_string()),
        Err(payload) => error::fail(ErrorKind::Panic, &error::panic_message(&*payload)),
    }
}

fn run(
    config: &EditorConfig,
    file: Option<PathBuf>,
    config_error: Option<ConfigError>,
) -> tilde::Result<()> {
    let mut app = App::new(config, file.as_deref())?;
    if let Some(err) = config_error {
        log::warn!("using default configuration: {}", err);
        app.editor_mut()
            .set_status_message(format!("config ignored: {}", err));
    }
    app.run()
}

struct Options {
    file: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        file: None,
        log_file: None,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--log" => {
                if let Some(path) = iter.next() {
                    options.log_file = Some(expand_path(path));
                }
            }
            _ if options.file.is_none() => options.file = Some(expand_path(arg)),
            _ => {}
        }
    }

    options
}
