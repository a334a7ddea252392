mod routes;
mod util;

use std::path::PathBuf;

use pagy_nav::config::Settings;
use rouille::router;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
pagy-nav: preview server for Bootstrap and Foundation pagination markup

USAGE:
  pagy-nav [OPTIONS]

OPTIONS:
  -c, --config PATH     TOML settings file
  -a, --address ADDR    Listen address, overrides the settings file
  -h, --help            Print this help
";

struct Args {
    config: Option<PathBuf>,
    address: Option<String>,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }
    let args = Args {
        config: pargs.opt_value_from_str::<_, PathBuf>(["-c", "--config"])?,
        address: pargs.opt_value_from_str(["-a", "--address"])?,
    };
    let rest = pargs.finish();
    if !rest.is_empty() {
        eprintln!("warning: unused arguments {rest:?}");
    }
    Ok(args)
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let mut settings = match &args.config {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };
    if let Some(address) = args.address {
        settings.address = address;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(address = %settings.address, locale = %settings.locale, "starting preview server");

    let address = settings.address.clone();
    rouille::start_server(address, move |request| {
        let response = if request.url() == "/main.css" {
            routes::css::style_sheet()
        } else {
            router!(request,
                (GET) (/) => {
                    routes::index::index()
                },
                (GET) (/{framework: String}) => {
                    routes::preview::page(&settings, request, &framework)
                },
                (GET) (/{framework: String}/{kind: String}) => {
                    routes::preview::fragment(&settings, request, &framework, &kind)
                },
                _ => rouille::Response::empty_404()
            )
        };
        tracing::info!(
            method = %request.method(),
            url = %request.raw_url(),
            status = response.status_code,
            "request"
        );
        response
    });
}
