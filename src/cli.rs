// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::{
    config::options::KioskOptions,
    csv,
    pipeline::{self, ScanReport},
    progress::Progress,
    session::{CredentialTable, SessionGate},
    specs::profile::StyleMatchExtractor,
    store,
};

pub enum Command {
    Scan(PathBuf),
    Register(String),
    History,
    Export(Option<PathBuf>),
    HashPassword { user: String, salt: String, password: String },
}

pub struct CliArgs {
    pub options: KioskOptions,
    pub user: Option<String>,
    pub password: Option<String>,
    pub command: Command,
}

/// Notices go to stderr so stdout stays clean for `history`.
struct CliProgress;

impl Progress for CliProgress {
    fn stage(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn warn(&mut self, msg: &str) { eprintln!("Warning: {msg}"); }
    fn error(&mut self, msg: &str) { eprintln!("Error: {msg}"); }
    fn success(&mut self, msg: &str) { eprintln!("{msg}"); }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_cli(env::args().skip(1))?;
    execute(args)
}

pub fn execute(args: CliArgs) -> Result<(), Box<dyn Error>> {
    let CliArgs { options, user, password, command } = args;

    if let Command::HashPassword { user, salt, password } = &command {
        print!("{}", CredentialTable::entry_line(user, salt, password));
        return Ok(());
    }

    // Everything else sits behind the gate.
    let table = CredentialTable::load(&options.credentials_path)?;
    let mut gate = SessionGate::new(table);
    gate.login(
        user.as_deref().unwrap_or_default(),
        password.as_deref().unwrap_or_default(),
    )?;

    let extractor = StyleMatchExtractor::default();
    let mut prog = CliProgress;

    match command {
        Command::Scan(image) => {
            let report = pipeline::process_image(&options, &extractor, &image, Some(&mut prog));
            finish_scan(report)
        }
        Command::Register(payload) => {
            let report = pipeline::process_payload(&options, &extractor, &payload, Some(&mut prog));
            finish_scan(report)
        }
        Command::History => {
            let ledger = store::load_all(options.ledger.path())?;
            if ledger.is_empty() {
                eprintln!("No records saved yet");
            } else {
                print!("{}", csv::ledger_to_csv(&ledger));
            }
            Ok(())
        }
        Command::Export(out) => {
            let ledger = store::load_all(options.ledger.path())?;
            let out = out.unwrap_or_else(|| options.ledger.export_path.clone());
            let path = store::export_csv(&ledger, &out)?;
            eprintln!("Exported {} record(s) → {}", ledger.len(), path.display());
            Ok(())
        }
        Command::HashPassword { .. } => Ok(()),
    }
}

fn finish_scan(report: ScanReport) -> Result<(), Box<dyn Error>> {
    if let Some(ex) = report.extraction() {
        let r = &ex.record;
        let show = |v: &Option<String>| v.clone().unwrap_or_else(|| s!("-"));
        println!("Name:  {}", show(&r.name));
        println!("ID:    {}", show(&r.identification));
        println!("Role:  {}", show(&r.role));
        println!("Email: {}", show(&r.email));
        println!("Date:  {}", r.timestamp());
    }
    if report.is_saved() { Ok(()) } else { Err(report.summary().into()) }
}

pub fn parse_cli<I>(args: I) -> Result<CliArgs, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut options = KioskOptions::from_env()?;
    let mut user = None;
    let mut password = None;
    let mut positional: Vec<String> = Vec::new();

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--ledger" => options.ledger.set_path(&args.next().ok_or("Missing value for --ledger")?),
            "--tz" => options.clock.set_timezone(&args.next().ok_or("Missing value for --tz")?)?,
            "--timeout" => options.fetch.set_timeout_secs(&args.next().ok_or("Missing value for --timeout")?)?,
            "--credentials" => {
                options.credentials_path = PathBuf::from(args.next().ok_or("Missing value for --credentials")?);
            }
            "-u" | "--user" => user = Some(args.next().ok_or("Missing value for --user")?),
            "-p" | "--password" => password = Some(args.next().ok_or("Missing value for --password")?),
            "-h" | "--help" => {
                eprintln!("{}", HELP);
                std::process::exit(0);
            }
            s if s.starts_with('-') && s.len() > 1 => return Err(format!("Unknown arg: {}", a).into()),
            _ => positional.push(a.clone()),
        }
    }

    let mut pos = positional.into_iter();
    let command = match pos.next().as_deref() {
        Some("scan") => Command::Scan(PathBuf::from(pos.next().ok_or("scan: missing image path")?)),
        Some("register") => Command::Register(pos.next().ok_or("register: missing payload URL")?),
        Some("history") => Command::History,
        Some("export") => Command::Export(pos.next().map(PathBuf::from)),
        Some("hash-password") => {
            let user = pos.next().ok_or("hash-password: missing user")?;
            let salt = pos.next().ok_or("hash-password: missing salt")?;
            let password = pos.next().ok_or("hash-password: missing password")?;
            Command::HashPassword { user, salt, password }
        }
        Some(other) => return Err(format!("Unknown command: {}", other).into()),
        None => return Err(join!("Missing command\n\n", HELP).into()),
    };
    if let Some(extra) = pos.next() {
        return Err(format!("Unexpected argument: {}", extra).into());
    }

    Ok(CliArgs { options, user, password, command })
}

const HELP: &str = "\
Usage: cli [options] <command>

Commands:
  scan <image>                     decode a QR image and register it
  register <payload-url>           register a QR payload directly
  history                          print the ledger as CSV
  export [out.csv]                 write the ledger as CSV (default registros.csv)
  hash-password <user> <salt> <pw> print a credentials-file line

Options:
  -u, --user <name>        operator username
  -p, --password <pw>      operator password
  --ledger <path>          ledger file (default registros.xlsx)
  --credentials <path>     credentials file (default credenciales.csv)
  --tz <IANA name>         timezone for timestamps (default: local)
  --timeout <secs>         fetch timeout (default 10)";
