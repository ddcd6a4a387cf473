use helix::{
    cli::{
        get_cli, get_log_level_from_verbose, print_usage, resolve_templates_root, runner, start,
        Commands,
    },
    constants::exit_codes,
    error::default_error_handler,
};

fn main() {
    let args = get_cli();
    let log_level = get_log_level_from_verbose(args.verbose);
    env_logger::Builder::new().filter_level(log_level).init();

    let templates_root = resolve_templates_root(args.templates_dir);

    let result = match args.command {
        Some(Commands::Create(create)) => runner::run(&create, args.verbose > 0, templates_root),
        Some(Commands::Start(start_args)) => start::run(&start_args, templates_root),
        None => {
            print_usage();
            std::process::exit(exit_codes::FAILURE);
        }
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}
