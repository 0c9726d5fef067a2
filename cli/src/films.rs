use crate::cli::{Commands, OutputFormat};
use crate::error::{Result, ResultExt};
use colored::Colorize;
use film_graphql::{
    ClientConfig, EndpointSource, Film, FilmLoaders, FilmSummary, GraphQLClient, Operation,
    Transport,
};
use std::fmt::Write as _;
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
pub struct FilmsArgs {
    pub endpoint: Option<String>,
    pub config_path: String,
}

pub fn execute(args: FilmsArgs, command: Commands) -> Result<()> {
    if let Commands::Queries = command {
        print!("{}", render_queries());
        return Ok(());
    }

    let config = resolve_config(&args)?;
    tracing::debug!(endpoint = %config.endpoint.describe(), "resolved client configuration");

    let loaders = FilmLoaders::new(GraphQLClient::from_config(config)?);

    // Create async runtime for HTTP operations
    let rt = Runtime::new()
        .map_err(|e| crate::error::CliError::Other(format!("Failed to create async runtime: {e}")))?;

    let output = rt.block_on(run_command(&loaders, command))?;
    print!("{output}");
    Ok(())
}

/// Load the optional config file and apply the `--endpoint` override
pub fn resolve_config(args: &FilmsArgs) -> Result<ClientConfig> {
    let mut config = ClientConfig::load_or_default(&args.config_path)
        .with_context(|| format!("Failed to load configuration from {}", args.config_path))?;

    if let Some(endpoint) = &args.endpoint {
        film_graphql::config::parse_endpoint(endpoint)?;
        config.endpoint = EndpointSource::Url(endpoint.clone());
    }

    Ok(config)
}

/// Run one data command against the loaders and render its output
pub async fn run_command<T: Transport>(loaders: &FilmLoaders<T>, command: Commands) -> Result<String> {
    match command {
        Commands::List { format } => {
            let films = loaders
                .all_films()
                .await
                .with_context(|| "Failed to load films")?;
            render_film_list(&films, format)
        }
        Commands::Show { id, format } => {
            let film = loaders
                .film(&id)
                .await
                .with_context(|| format!("Failed to load film {id}"))?;
            render_film(&id, film.as_ref(), format)
        }
        Commands::Queries => Ok(render_queries()),
    }
}

pub fn render_film_list(films: &[FilmSummary], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(films)? + "\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", "Star Wars Films".cyan().bold());
    if films.is_empty() {
        let _ = writeln!(out, "{}", "No films found".yellow());
    }

    for film in films {
        let _ = writeln!(
            out,
            "\n{} {}",
            film.title.as_deref().unwrap_or("Untitled").bold(),
            format!("[{}]", film.id.as_deref().unwrap_or("")).dimmed()
        );
        let _ = writeln!(
            out,
            "  Directed by {} · Released: {}",
            film.director.as_deref().unwrap_or("unknown"),
            film.release_date.as_deref().unwrap_or("unknown")
        );
        let species = film.species_names();
        if !species.is_empty() {
            let _ = writeln!(out, "  Species: {}", species.join(", "));
        }
    }

    Ok(out)
}

pub fn render_film(id: &str, film: Option<&Film>, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&film)? + "\n");
    }

    let Some(film) = film else {
        return Ok(format!("{}\n", format!("Film {id} not found").yellow()));
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", film.title.as_deref().unwrap_or("Untitled").cyan().bold());
    for (label, value) in [
        ("Director", film.director.clone().unwrap_or_default()),
        ("Producers", film.producers_display()),
        ("Release Date", film.release_date.clone().unwrap_or_default()),
    ] {
        if !value.is_empty() {
            let _ = writeln!(out, "{} {}", format!("{label}:").bold(), value);
        }
    }
    if let Some(crawl) = film.opening_crawl.as_deref() {
        let _ = writeln!(out, "\n{}\n{}", "Opening Crawl:".bold(), crawl.trim_end());
    }

    Ok(out)
}

pub fn render_queries() -> String {
    let mut out = String::new();
    for operation in Operation::ALL {
        let _ = writeln!(out, "# {operation}\n{}", operation.document());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use film_graphql::testing::{test_helpers, MockReply, MockTransport};
    use film_graphql::{GraphQLResponse, Variables};

    fn loaders_with(body: serde_json::Value) -> (MockTransport, FilmLoaders<MockTransport>) {
        let response: GraphQLResponse = serde_json::from_value(body).unwrap();
        let transport = MockTransport::new().with_response(response);
        let loaders = FilmLoaders::new(GraphQLClient::new(transport.clone()));
        (transport, loaders)
    }

    #[tokio::test]
    async fn test_list_renders_films() {
        colored::control::set_override(false);
        let films = vec![
            test_helpers::create_film_summary("1", "A New Hope", &["Human", "Droid"]),
            test_helpers::create_film_summary("2", "Return of the Jedi", &[]),
        ];
        let (_, loaders) = loaders_with(test_helpers::all_films_body(&films));

        let output = run_command(&loaders, Commands::List { format: OutputFormat::Text })
            .await
            .unwrap();

        assert!(output.contains("A New Hope [1]"));
        assert!(output.contains("Directed by George Lucas · Released: 1977-05-25"));
        assert!(output.contains("Species: Human, Droid"));
        assert!(output.contains("Return of the Jedi [2]"));
    }

    #[tokio::test]
    async fn test_list_json_output() {
        let films = vec![test_helpers::create_film_summary("1", "A New Hope", &[])];
        let (_, loaders) = loaders_with(test_helpers::all_films_body(&films));

        let output = run_command(&loaders, Commands::List { format: OutputFormat::Json })
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["title"], "A New Hope");
    }

    #[tokio::test]
    async fn test_show_sends_id_and_renders() {
        colored::control::set_override(false);
        let film = test_helpers::create_film("A New Hope");
        let (transport, loaders) = loaders_with(test_helpers::film_body(Some(&film)));

        let output = run_command(
            &loaders,
            Commands::Show {
                id: "ZmlsbXM6MQ==".to_string(),
                format: OutputFormat::Text,
            },
        )
        .await
        .unwrap();

        assert!(output.contains("Producers: Gary Kurtz, Rick McCallum"));
        assert!(output.contains("Opening Crawl:\nIt is a period of civil war."));

        let mut expected = Variables::new();
        expected.insert("id".to_string(), serde_json::json!("ZmlsbXM6MQ=="));
        assert_eq!(transport.requests()[0].variables, Some(expected));
    }

    #[tokio::test]
    async fn test_show_missing_film() {
        colored::control::set_override(false);
        let (_, loaders) = loaders_with(test_helpers::film_body(None));

        let output = run_command(
            &loaders,
            Commands::Show {
                id: "nope".to_string(),
                format: OutputFormat::Text,
            },
        )
        .await
        .unwrap();
        assert_eq!(output, "Film nope not found\n");
    }

    #[tokio::test]
    async fn test_errors_carry_context() {
        let (_, loaders) = loaders_with(test_helpers::errors_body(&["a", "b"]));

        let err = run_command(&loaders, Commands::List { format: OutputFormat::Text })
            .await
            .unwrap_err();
        assert_eq!(
            err.user_message(),
            "Failed to load films: GraphQL API returned errors: a, b"
        );
    }

    #[tokio::test]
    async fn test_transport_error_carries_context() {
        let transport = MockTransport::new().with_reply(MockReply::Status {
            status: 502,
            body: String::new(),
        });
        let loaders = FilmLoaders::new(GraphQLClient::new(transport));

        let err = run_command(
            &loaders,
            Commands::Show {
                id: "1".to_string(),
                format: OutputFormat::Json,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.user_message(), "Failed to load film 1: Network error: 502 Bad Gateway");
    }

    #[test]
    fn test_render_queries_lists_catalog() {
        let output = render_queries();
        assert!(output.contains("# AllFilms\nquery AllFilms {"));
        assert!(output.contains("# Film\nquery Film($id: ID) {"));
    }

    #[test]
    fn test_endpoint_override() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = FilmsArgs {
            endpoint: Some("http://localhost:4000/graphql".to_string()),
            config_path: dir.path().join("films.toml").to_string_lossy().into_owned(),
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(
            config.endpoint,
            EndpointSource::Url("http://localhost:4000/graphql".to_string())
        );

        let args = FilmsArgs {
            endpoint: Some("not a url".to_string()),
            ..args
        };
        assert!(resolve_config(&args).is_err());
    }
}
