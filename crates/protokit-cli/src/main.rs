//! Protokit CLI - Schema-less inspection of protobuf payloads

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, eyre, Context, Result};
use protokit::constants::MAX_NESTING_DEPTH;
use protokit::primitives::{encode_varint, zigzag_decode64, zigzag_encode64, MAX_VARINT_SIZE};
use protokit::{Message, ProtoInput, RawMessage, UnknownField};
use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "protokit")]
#[command(about = "Inspect protobuf payloads without a schema")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Log decoding steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every field of a binary payload
    Inspect {
        /// Payload file, or `-` for stdin
        input: PathBuf,
        /// Decode length-delimited fields as nested messages where possible
        #[arg(short, long)]
        nested: bool,
    },
    /// Print the varint encoding of a number as hex
    EncodeVarint {
        /// Number to encode
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Apply zigzag encoding first, as for sint32/sint64
        #[arg(short, long)]
        zigzag: bool,
    },
    /// Decode a hex encoded varint
    DecodeVarint {
        /// Varint bytes as hex, spaces allowed
        hex: String,
        /// Undo zigzag encoding, as for sint32/sint64
        #[arg(short, long)]
        zigzag: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Inspect { input, nested } => inspect(&input, nested),
        Commands::EncodeVarint { value, zigzag } => {
            println!("{}", encode(&value, zigzag)?);
            Ok(())
        }
        Commands::DecodeVarint { hex, zigzag } => {
            println!("{}", decode(&hex, zigzag)?);
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Decode a payload from a file or stdin and print its fields
fn inspect(input: &Path, nested: bool) -> Result<()> {
    let message = if input.as_os_str() == "-" {
        RawMessage::parse_from(io::stdin().lock()).context("Failed to decode stdin")?
    } else {
        let file = File::open(input)
            .with_context(|| format!("Failed to open payload: {}", input.display()))?;
        RawMessage::parse_from(BufReader::new(file))
            .with_context(|| format!("Failed to decode payload: {}", input.display()))?
    };

    debug!(fields = message.fields().len(), "decoded payload");

    let mut output = String::new();
    render(message.fields(), nested, 0, &mut output)?;
    print!("{output}");
    Ok(())
}

/// Render one line per field, nested messages indented below their field
fn render(fields: &[UnknownField], nested: bool, depth: usize, output: &mut String) -> fmt::Result {
    let indent = "  ".repeat(depth);

    for field in fields {
        let number = field.number();
        let wire_type = field.wire_type();
        match field {
            UnknownField::Varint(_, value) => {
                writeln!(output, "{indent}{number}: {wire_type} {}", *value as u64)?;
            }
            UnknownField::I64(_, value) => {
                let float = f64::from_bits(*value as u64);
                writeln!(output, "{indent}{number}: {wire_type} {value} ({float})")?;
            }
            UnknownField::I32(_, value) => {
                let float = f32::from_bits(*value as u32);
                writeln!(output, "{indent}{number}: {wire_type} {value} ({float})")?;
            }
            UnknownField::Bytes(_, value) => {
                match nested.then(|| as_message(value, depth)).flatten() {
                    Some(inner) => {
                        writeln!(output, "{indent}{number}: {wire_type} {{")?;
                        render(inner.fields(), nested, depth + 1, output)?;
                        writeln!(output, "{indent}}}")?;
                    }
                    None => {
                        writeln!(output, "{indent}{number}: {wire_type} {}", describe_bytes(value))?
                    }
                }
            }
        }
    }

    Ok(())
}

/// Payload parsed as a message, if it is one
///
/// Payloads at `MAX_NESTING_DEPTH` or deeper are left as bytes.
fn as_message(payload: &[u8], depth: usize) -> Option<RawMessage> {
    if depth >= MAX_NESTING_DEPTH {
        return None;
    }
    match RawMessage::parse(payload) {
        Ok(message) if !message.is_empty() && message.fields().iter().all(|f| f.number() > 0) => {
            Some(message)
        }
        _ => None,
    }
}

fn describe_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) if !text.chars().any(char::is_control) => format!("{text:?}"),
        _ => format!("[{}]", to_hex(bytes)),
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Varint bytes of `value` as hex
///
/// Negative numbers without `--zigzag` are sign-extended like `int64`.
fn encode(value: &str, zigzag: bool) -> Result<String> {
    let raw = if zigzag {
        let value: i64 = value
            .parse()
            .with_context(|| format!("Not a signed 64-bit number: {value}"))?;
        zigzag_encode64(value)
    } else if let Ok(value) = value.parse::<u64>() {
        value
    } else {
        value
            .parse::<i64>()
            .with_context(|| format!("Not a 64-bit number: {value}"))? as u64
    };

    let mut bytes = [0u8; MAX_VARINT_SIZE];
    let len = encode_varint(raw, &mut bytes);
    Ok(to_hex(&bytes[..len]))
}

/// Value of a hex encoded varint
fn decode(hex: &str, zigzag: bool) -> Result<String> {
    let digits: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() || !digits.is_ascii() || digits.len() % 2 != 0 {
        bail!("Expected an even number of hex digits, got {:?}", hex);
    }

    let bytes = (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16))
        .collect::<std::result::Result<Vec<u8>, _>>()
        .with_context(|| format!("Invalid hex: {hex}"))?;

    let mut input = ProtoInput::new(bytes.as_slice(), bytes.len());
    let value = input.read_varint64()?;
    if input.has_remaining()? {
        return Err(eyre!("Trailing bytes after varint: {hex}"));
    }

    debug!(value, bytes = bytes.len(), "decoded varint");

    Ok(if zigzag {
        zigzag_decode64(value).to_string()
    } else {
        value.to_string()
    })
}
