use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "user-cli")]
#[command(about = "Command-line client for the user registry API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every user
    List,
    /// Show one user
    Get { id: String },
    /// Add a user
    Add(UserFields),
    /// Replace a user's fields
    Update {
        id: String,
        #[command(flatten)]
        fields: UserFields,
    },
    /// Remove a user
    Remove { id: String },
}

#[derive(Args)]
struct UserFields {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    hobby: String,
}

impl UserFields {
    fn to_json(&self) -> Value {
        json!({
            "firstName": self.first_name,
            "lastName": self.last_name,
            "hobby": self.hobby,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::List => client.get(format!("{}/users", base)).send().await?,
        Commands::Get { id } => client.get(format!("{}/users/{}", base, id)).send().await?,
        Commands::Add(fields) => {
            client
                .post(format!("{}/user", base))
                .json(&fields.to_json())
                .send()
                .await?
        }
        Commands::Update { id, fields } => {
            client
                .put(format!("{}/user/{}", base, id))
                .json(&fields.to_json())
                .send()
                .await?
        }
        Commands::Remove { id } => client.delete(format!("{}/user/{}", base, id)).send().await?,
    };

    let ok = print_response(res).await?;
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

/// Pretty-print the body; returns whether the status was a success.
async fn print_response(res: reqwest::Response) -> Result<bool, Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    let rendered = match serde_json::from_str::<Value>(&text) {
        Ok(json) => serde_json::to_string_pretty(&json)?,
        Err(_) => text,
    };

    if status.is_success() {
        println!("{}", rendered);
    } else {
        eprintln!("Error: API returned status {}", status);
        eprintln!("{}", rendered);
    }
    Ok(status.is_success())
}
