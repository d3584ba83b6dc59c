use clap::Parser;
use itertools::Itertools;
use metaphone3::{ConfigError, Keys, Metaphone3, MAX_KEY_LENGTH};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Print Metaphone 3 keys for words given on the command line.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Words to encode. With none, a short demonstration runs instead.
    words: Vec<String>,
    /// Encode non-initial vowels as 'A'
    #[arg(long)]
    vowels: bool,
    /// Keep voiced and unvoiced consonants apart
    #[arg(long)]
    exact: bool,
    /// Maximum key length (1 to 32)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    key_length: Option<i32>,
    /// One JSON object per word instead of plain text
    #[arg(long)]
    json: bool,
}

const DEMO_WORDS: [&str; 10] = [
    "Guillermo",
    "VILLASENOR",
    "GUILLERMINA",
    "PADILLA",
    "BJORK",
    "belle",
    "ERICH",
    "GLOWACKI",
    "qing",
    "tsing",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut m3 = Metaphone3::new();
    m3.set_encode_vowels(args.vowels);
    m3.set_encode_exact(args.exact);
    if let Some(n) = args.key_length {
        if !m3.set_key_length(n) {
            let err = ConfigError::KeyLengthOutOfRange {
                requested: n,
                max: MAX_KEY_LENGTH,
            };
            eprintln!("{err}, using {MAX_KEY_LENGTH}");
        }
    }

    if args.words.is_empty() {
        demo(m3, args.json);
        return;
    }

    let out = args
        .words
        .iter()
        .map(|w| render(w, &m3.encode(w), args.json))
        .join("\n");
    println!("{out}");
}

fn demo(mut m3: Metaphone3, as_json: bool) {
    let mut lines = vec![
        render("iron", &m3.encode("iron"), as_json),
        render("witz", &m3.encode("witz"), as_json),
        render("BLANK", &m3.encode(""), as_json),
    ];

    m3.set_encode_exact(true);
    m3.set_encode_vowels(true);
    lines.extend(DEMO_WORDS.iter().map(|w| render(w, &m3.encode(w), as_json)));

    println!("{}", lines.iter().join("\n"));
}

fn render(label: &str, keys: &Keys, as_json: bool) -> String {
    if as_json {
        return json!({
            "word": label,
            "primary": keys.primary,
            "secondary": keys.secondary,
        })
        .to_string();
    }
    format!(
        "{label} : {}\n{label} : (alt) {}",
        keys.primary, keys.secondary
    )
}
