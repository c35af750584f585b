mod config;
mod logger;
mod output;
mod parser;
pub(crate) mod sources;
mod types;

const HELP: &str = "
    postpeek

    Fetches a JSON array of posts and prints the first few entries.

    USAGE:
    postpeek [OPTIONS]

    FLAGS:
    -h, --help            Prints help information
    --pretty              Indents the printed JSON

    OPTIONS:
    --url URL             Endpoint to query (defaults to https://jsonplaceholder.typicode.com/posts)
    --limit NUMBER        Number of leading entries to print (defaults to 3)
    --log-level LEVEL     trace, debug, info, warn or error (falls back to POSTPEEK_LOG, then warn)
";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let mut arguments = pico_args::Arguments::from_env();
    if arguments.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let app_config = parser::parse_arguments_and_env_vars(arguments)?;
    logger::setup_logger(app_config.log_level)?;

    let endpoint = sources::Endpoint::new(&app_config.url);
    let output = output::run(&endpoint, &app_config).await?;
    println!("{}", output);

    Ok(())
}
