use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use argh::FromArgs;
use log::error;

use remote_fetch::{hash_on_disk_digest, hmac_sha1_hex, try_download_remote_file, try_get_remote_json, verify_sha256, AppIdentity, DigestAlgorithm};

#[derive(FromArgs, Debug)]
/// Fetch remote JSON documents and files.
struct Args {
    /// user agent to send instead of the default "remote-fetch/<version>"
    #[argh(option)]
    user_agent: Option<String>,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Command {
    Json(JsonArgs),
    Download(DownloadArgs),
    Hmac(HmacArgs),
    Digest(DigestArgs),
}

#[derive(FromArgs, Debug)]
/// Fetch a URL and print its JSON body.
#[argh(subcommand, name = "json")]
struct JsonArgs {
    #[argh(positional)]
    url: String,
}

#[derive(FromArgs, Debug)]
/// Download a URL to a local file.
#[argh(subcommand, name = "download")]
struct DownloadArgs {
    #[argh(positional)]
    url: String,

    #[argh(positional)]
    path: PathBuf,

    /// present a desktop browser user agent
    #[argh(switch)]
    fake_user_agent: bool,

    /// expected SHA-256 of the file, hex encoded
    #[argh(option)]
    sha256: Option<String>,
}

#[derive(FromArgs, Debug)]
/// Print the HMAC-SHA1 of a message.
#[argh(subcommand, name = "hmac")]
struct HmacArgs {
    #[argh(positional)]
    key: String,

    #[argh(positional)]
    message: String,
}

#[derive(FromArgs, Debug)]
/// Print the digest of a local file.
#[argh(subcommand, name = "digest")]
struct DigestArgs {
    #[argh(positional)]
    path: PathBuf,

    /// use SHA-1 instead of SHA-256
    #[argh(switch)]
    sha1: bool,
}

fn run(args: Args) -> Result<()> {
    let identity = match &args.user_agent {
        Some(ua) => AppIdentity::with_user_agent(env!("CARGO_PKG_NAME"), ua),
        None => AppIdentity::default(),
    };

    match args.command {
        Command::Json(json) => {
            let value = try_get_remote_json(&identity, &json.url).context(format!("no JSON document at {}", json.url))?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Command::Download(dl) => {
            let result = try_download_remote_file(&identity, &dl.url, &dl.path, dl.fake_user_agent).context(format!("failed to download {}", dl.url))?;

            if let Some(expected) = dl.sha256 {
                verify_sha256(&result, &expected)?;
            }

            println!("{}  {}", result.hash_sha256, result.path.display());
        }
        Command::Hmac(hmac) => {
            println!("{}", hmac_sha1_hex(&hmac.key, &hmac.message));
        }
        Command::Digest(digest) => {
            let alg = if digest.sha1 { DigestAlgorithm::Sha1 } else { DigestAlgorithm::Sha256 };
            let hex = hash_on_disk_digest(&digest.path, None, alg)?;
            println!("{}  {}", hex, digest.path.display());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Args = argh::from_env();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
