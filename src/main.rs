use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::{debug, error};
use std::io;
use std::process;
use today_comics::configuration::Settings;
use today_comics::models::Cli;
use today_comics::run::run;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Init logging, stdout is reserved for the report
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.target(Target::Stderr);
    builder.init();

    // Parse Args
    let args = Cli::new();

    // Parse Settings
    let settings = match Settings::new(args.config_file.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };
    debug!("Settings {:?}", settings);

    // Run
    let today = Local::now().date_naive();
    if let Err(e) = run(settings, args.all, today, &mut io::stdout().lock()).await {
        error!("Application error: {}", e);
        process::exit(1);
    }
}
