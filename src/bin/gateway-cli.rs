use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Command-line client for the comment gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the liveness endpoint
    Health,
    /// Score a comment
    Check {
        comment: String,
        /// Article the comment was posted under
        #[arg(long)]
        article: Option<String>,
        /// Comment being replied to (ignored without --article)
        #[arg(long)]
        parent: Option<String>,
        /// Attribute to score instead of the server default
        #[arg(long)]
        model: Option<String>,
        /// Use the CORS-enabled plugin route
        #[arg(long)]
        plugin: bool,
    },
    /// Send reader feedback on a comment
    Suggest {
        comment: String,
        /// Mark the comment as toxic
        #[arg(long)]
        toxic: bool,
        #[arg(long)]
        session: Option<String>,
        #[arg(long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{}/_ah/health", cli.url)).send().await?;
            println!("{} {}", res.status(), res.text().await?);
        }
        Commands::Check {
            comment,
            article,
            parent,
            model,
            plugin,
        } => {
            let path = if plugin { "plugin/check" } else { "check" };
            let body = json!({
                "comment": comment,
                "articleText": article,
                "parentComment": parent,
                "modelName": model,
            });
            let res = client
                .post(format!("{}/{}", cli.url, path))
                .json(&without_nulls(body))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Suggest {
            comment,
            toxic,
            session,
            model,
        } => {
            let body = json!({
                "comment": comment,
                "commentMarkedAsToxic": toxic,
                "sessionId": session,
                "modelName": model,
            });
            let res = client
                .post(format!("{}/suggest_score", cli.url))
                .json(&without_nulls(body))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

fn without_nulls(mut body: Value) -> Value {
    if let Some(map) = body.as_object_mut() {
        map.retain(|_, v| !v.is_null());
    }
    body
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
