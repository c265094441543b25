/// VideoGrab CLI - Terminal client
///
/// Drives the full parse -> select -> download -> progress flow against a
/// running VideoGrab API server. The progress animation is fabricated
/// client-side from a fixed script; the server-held session record stays
/// in its initial state throughout.
mod api_client;
mod progress;

use anyhow::{bail, Context, Result};
use std::time::Duration;

use api_client::ApiClient;
use videograb_shared::models::{
    DownloadProgress, DownloadRequest, DownloadStatus, VideoFormat, VideoInfo, VideoQuality,
};

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  videograb-cli <url> [format] [quality]   download a video");
    eprintln!("  videograb-cli status <download-id>       read a stored session record");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Init tracing (stderr; stdout belongs to the flow output)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "videograb_cli=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let base_url = std::env::var("VIDEOGRAB_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let client = ApiClient::new(base_url);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            print_usage();
            std::process::exit(2);
        }
        [command, id] if command == "status" => show_status(&client, id).await,
        [url, rest @ ..] if rest.len() <= 2 => download(&client, url, rest).await,
        _ => {
            print_usage();
            std::process::exit(2);
        }
    }
}

async fn download(client: &ApiClient, url: &str, rest: &[String]) -> Result<()> {
    println!("Fetching video info...");
    let info = client.parse_url(url).await.context("Failed to parse URL")?;
    print_info(&info);

    let format = pick_format(&info, rest.first())?;
    let quality = pick_quality(&info, rest.get(1))?;
    println!();
    println!("Downloading as {} / {}", format, quality);

    // Initial card, shown before the session exists.
    render_progress(&DownloadProgress {
        id: info.id.clone(),
        status: DownloadStatus::Preparing,
        progress: 0,
        message: Some("Preparing download...".to_string()),
        download_url: None,
        file_size: None,
    });

    let request = DownloadRequest {
        url: url.to_string(),
        format,
        quality,
    };
    let download_id = match client.start_download(&request).await {
        Ok(id) => id,
        Err(err) => {
            render_progress(&DownloadProgress {
                id: info.id,
                status: DownloadStatus::Error,
                progress: 0,
                message: Some(err.to_string()),
                download_url: None,
                file_size: None,
            });
            bail!("Download failed: {}", err);
        }
    };

    let delay = std::env::var("STAGE_DELAY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(progress::STAGE_DELAY);
    progress::run_with_delay(&download_id, delay, render_progress).await;

    println!();
    println!("Your video is ready.");
    Ok(())
}

async fn show_status(client: &ApiClient, id: &str) -> Result<()> {
    let record = client.status(id).await.context("Failed to fetch status")?;
    render_progress(&record);
    Ok(())
}

/// An explicit argument must name an advertised format; otherwise the
/// first advertised one is preselected.
fn pick_format(info: &VideoInfo, requested: Option<&String>) -> Result<VideoFormat> {
    match requested {
        Some(raw) => {
            let format =
                VideoFormat::parse(raw).with_context(|| format!("Unknown format '{}'", raw))?;
            if !info.available_formats.contains(&format) {
                bail!("Format {} is not offered for this video", format);
            }
            Ok(format)
        }
        None => info
            .available_formats
            .first()
            .copied()
            .context("Video offers no formats"),
    }
}

fn pick_quality(info: &VideoInfo, requested: Option<&String>) -> Result<VideoQuality> {
    match requested {
        Some(raw) => {
            let quality =
                VideoQuality::parse(raw).with_context(|| format!("Unknown quality '{}'", raw))?;
            if !info.available_qualities.contains(&quality) {
                bail!("Quality {} is not offered for this video", quality);
            }
            Ok(quality)
        }
        None => info
            .available_qualities
            .first()
            .copied()
            .context("Video offers no qualities"),
    }
}

fn print_info(info: &VideoInfo) {
    let formats: Vec<&str> = info.available_formats.iter().map(|f| f.as_str()).collect();
    let qualities: Vec<&str> = info.available_qualities.iter().map(|q| q.as_str()).collect();

    println!();
    println!("{}", info.title);
    println!("  Channel:   {}", info.channel);
    println!("  Duration:  {}", info.duration);
    println!("  Platform:  {}", info.platform);
    println!("  Formats:   {}", formats.join(", "));
    println!("  Qualities: {}", qualities.join(", "));
}

fn render_progress(record: &DownloadProgress) {
    println!(
        "[{:>3}%] {:<11} {}",
        record.progress,
        record.status.as_str(),
        record.message.as_deref().unwrap_or("")
    );
    if let Some(size) = &record.file_size {
        println!("       File size: {}", size);
    }
}
