use calendar_client::{CalendarClient, ContentType, Status};
use clap::Parser;

#[derive(Parser, Debug)]
struct Cli {
    #[clap(short, long)]
    server: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    Create {
        #[clap(long)]
        title: String,
        #[clap(long, default_value = "")]
        description: String,
        #[clap(long)]
        status: Status,
        #[clap(long = "type")]
        content_type: ContentType,
        #[clap(long)]
        url: Option<String>,
    },
    Get {
        id: i64,
    },
    List {
        #[clap(long)]
        status: Option<Status>,
        #[clap(long = "type")]
        content_type: Option<ContentType>,
    },
    Update {
        id: i64,
        #[clap(long)]
        title: Option<String>,
        #[clap(long)]
        description: Option<String>,
        #[clap(long)]
        status: Option<Status>,
        #[clap(long = "type")]
        content_type: Option<ContentType>,
        #[clap(long)]
        url: Option<String>,
    },
    Delete {
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let endpoint = args.server.as_deref().unwrap_or("http://127.0.0.1:8080");
    let client = CalendarClient::connect(endpoint)?;

    match args.command {
        Command::Create {
            title,
            description,
            status,
            content_type,
            url,
        } => {
            let item = client
                .create_content(title, description, status, content_type, url)
                .await?;
            println!("Content created! ID: {}", item.id);
        }
        Command::Get { id } => {
            let item = client.get_content(id).await?;
            println!("{item}");
        }
        Command::List {
            status,
            content_type,
        } => {
            let items = client.list_content(status, content_type).await?;
            println!("Content ({})", items.len());
            for item in items {
                println!("- {item}");
            }
        }
        Command::Update {
            id,
            title,
            description,
            status,
            content_type,
            url,
        } => {
            let item = client
                .update_content(id, title, description, status, content_type, url)
                .await?;
            println!("Content updated: {item}");
        }
        Command::Delete { id } => {
            client.delete_content(id).await?;
            println!("Content deleted!");
        }
    }

    Ok(())
}
