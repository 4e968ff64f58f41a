use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "connector-cli")]
#[command(about = "Command-line client for the regex connector", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Correlation ID to send with the request.
    #[arg(long)]
    correlation_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the first match (RegexIsMatch)
    IsMatch(MatchArgs),
    /// Find every match (RegexMatch)
    Match(MatchArgs),
    /// Check service liveness
    Health,
}

#[derive(clap::Args)]
struct MatchArgs {
    /// Text to search.
    #[arg(short, long)]
    text: String,

    /// Regular expression.
    #[arg(short, long)]
    pattern: String,

    /// One of ignorecase, multiline, singleline.
    #[arg(short, long)]
    option: Option<String>,
}

impl MatchArgs {
    fn body(&self, pattern_field: &str) -> Value {
        let mut body = json!({ "textToCheck": self.text });
        body[pattern_field] = json!(self.pattern);
        if let Some(option) = &self.option {
            body["option"] = json!(option);
        }
        body
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = match &cli.command {
        Commands::IsMatch(args) => {
            invoke(&client, &cli, "RegexIsMatch", args.body("regex")).await?
        }
        Commands::Match(args) => {
            invoke(&client, &cli, "RegexMatch", args.body("pattern")).await?
        }
        Commands::Health => client.get(format!("{}/health", cli.url)).send().await?,
    };
    print_response(res).await?;

    Ok(())
}

async fn invoke(
    client: &reqwest::Client,
    cli: &Cli,
    operation_id: &str,
    body: Value,
) -> Result<reqwest::Response, reqwest::Error> {
    let mut req = client
        .post(format!("{}/operations/{}", cli.url, operation_id))
        .json(&body);
    if let Some(id) = &cli.correlation_id {
        req = req.header("x-correlation-id", id);
    }
    req.send().await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;
    let rendered = serde_json::to_string_pretty(&json)?;

    if status.is_success() {
        println!("{}", rendered);
    } else {
        eprintln!("Error: connector returned status {}", status);
        eprintln!("{}", rendered);
    }
    Ok(())
}
