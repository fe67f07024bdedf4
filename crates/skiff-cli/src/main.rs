use clap::Parser;
use cli::Args;
use logging::setup_logging;
use skiff_config::{
    config::{self, generate_default_config, get_config, get_current_instance, set_current_instance, CONFIG_PATH},
    paths::resolve_path,
};
use skiff_core::{http::configure_http_client, SkiffResult};
use ureq::Proxy;
use utils::COLOR;

mod cli;
mod logging;
mod repo;
mod utils;

fn handle_cli() -> SkiffResult<()> {
    let args = Args::parse();

    setup_logging(&args);

    if args.no_color {
        let mut color = COLOR.write().unwrap();
        *color = false;
    }

    if let Some(ref c) = args.config {
        let mut config_path = CONFIG_PATH.write().unwrap();
        *config_path = resolve_path(c)?;
    }

    let proxy = args.proxy.clone();
    let user_agent = args.user_agent.clone();

    configure_http_client(|config| {
        if let Some(proxy) = proxy.as_deref() {
            config.proxy = Some(Proxy::new(proxy).unwrap());
        }

        if let Some(user_agent) = user_agent {
            config.user_agent = Some(user_agent);
        }
    });

    match args.command {
        cli::Commands::DefConfig => generate_default_config()?,
        command => {
            config::init()?;

            if let Some(ref instance) = args.instance {
                set_current_instance(instance)?;
            }

            let config = get_config();
            let instance = config.get_instance(&get_current_instance())?;

            match command {
                cli::Commands::Available => repo::available_repositories(&config)?,
                cli::Commands::List => repo::list_repositories(instance)?,
                cli::Commands::Add { name, url } => repo::add_repository(instance, &name, &url)?,
                cli::Commands::Forget { name } => repo::forget_repository(instance, &name)?,
                cli::Commands::Default { target } => repo::default_repository(instance, &target)?,
                _ => unreachable!(),
            }
        }
    }

    Ok(())
}

fn main() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    if let Err(err) = handle_cli() {
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(1);
    }
}
