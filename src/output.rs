use crate::{config::Config, sources::Source, types::Fetch};

pub fn render(fetch: &Fetch, pretty: bool) -> Result<String, anyhow::Error> {
    let rendered = match fetch {
        Fetch::Posts(posts) if pretty => serde_json::to_string_pretty(posts)?,
        Fetch::Posts(posts) => serde_json::to_string(posts)?,
        Fetch::Failed(status) => format!("Failed to retrieve data: {}", status),
    };

    Ok(rendered)
}

pub async fn run(source: &impl Source, config: &Config) -> Result<String, anyhow::Error> {
    let fetch = source.pull(config.limit).await?;

    render(&fetch, config.pretty)
}
