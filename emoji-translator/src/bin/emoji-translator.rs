use clap::{Arg, ArgAction, Command};
use emoji_translator::{
    Density, EmojiTranslator, Mode, RandomSource, SeededRandom, Style, ThreadRandom,
    TranslationOptions, TranslationStats,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("emoji-translator")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Transform text with emoji")
        .arg(
            Arg::new("text")
                .help("Text to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("density")
                .long("density")
                .short('d')
                .help("Emoji density: light, medium or heavy")
                .value_parser(|value: &str| value.parse::<Density>())
                .default_value("medium"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .short('m')
                .help("append (word + emoji) or replace (emoji only)")
                .value_parser(|value: &str| value.parse::<Mode>())
                .default_value("append"),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .short('s')
                .help("Output style: fun, professional or meme")
                .value_parser(|value: &str| value.parse::<Style>())
                .default_value("fun"),
        )
        .arg(
            Arg::new("sentiment")
                .long("sentiment")
                .help("Add a sentiment emoji at the end")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("custom-emojis")
                .long("custom-emojis")
                .short('c')
                .help("Path to a custom emoji mapping file (JSON)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed the random source for reproducible output")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("save")
                .long("save")
                .help("Save the translation to a file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .help("Show registry sizes and length statistics")
                .action(ArgAction::SetTrue),
        )
}

fn settings_line(options: &TranslationOptions) -> String {
    format!(
        "Settings: {} density, {} mode, {} style",
        options.density, options.mode, options.style
    )
}

fn save_translation(
    path: &Path,
    original: &str,
    translated: &str,
    options: &TranslationOptions,
) -> std::io::Result<()> {
    let content = format!(
        "Original: {}\nTranslated: {}\n{}\n",
        original,
        translated,
        settings_line(options)
    );
    fs::write(path, content)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    let text = matches.get_one::<String>("text").cloned().unwrap_or_default();
    let options = TranslationOptions {
        density: matches.get_one::<Density>("density").copied().unwrap_or_default(),
        mode: matches.get_one::<Mode>("mode").copied().unwrap_or_default(),
        style: matches.get_one::<Style>("style").copied().unwrap_or_default(),
        add_sentiment: matches.get_flag("sentiment"),
    };

    let random: Arc<dyn RandomSource> = match matches.get_one::<u64>("seed") {
        Some(seed) => Arc::new(SeededRandom::new(*seed)),
        None => Arc::new(ThreadRandom),
    };

    // An unreadable mapping file is reported by the library's warn! and skipped
    let custom = matches.get_one::<PathBuf>("custom-emojis").map(PathBuf::as_path);
    let translator = EmojiTranslator::with_custom_emojis(custom, random);
    let result = translator.translate(&text, &options);

    let rule = "=".repeat(50);
    println!("\n{}", rule);
    println!("EMOJI TRANSLATOR");
    println!("{}", rule);
    println!("Original: {}", text);
    println!("Translated: {}", result);
    println!("{}", settings_line(&options));
    println!("{}", rule);

    if matches.get_flag("stats") {
        let info = translator.info();
        let stats = TranslationStats::between(&text, &result);
        println!(
            "📚 Registry: {} words, {} phrases",
            info.total_words, info.total_phrases
        );
        println!(
            "📏 Length: {} → {} ({:+})",
            stats.original_length, stats.translated_length, stats.character_difference
        );
        println!("🔎 Sentiment: {}", translator.classify(&text));
    }

    if let Some(path) = matches.get_one::<PathBuf>("save") {
        save_translation(path, &text, &result, &options)?;
        println!("Translation saved to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let matches = cli().try_get_matches_from(["emoji-translator", "hello"]).unwrap();
        assert_eq!(matches.get_one::<Density>("density"), Some(&Density::Medium));
        assert_eq!(matches.get_one::<Mode>("mode"), Some(&Mode::Append));
        assert_eq!(matches.get_one::<Style>("style"), Some(&Style::Fun));
        assert!(!matches.get_flag("sentiment"));
    }

    #[test]
    fn test_cli_parses_options() {
        let matches = cli()
            .try_get_matches_from([
                "emoji-translator",
                "hello",
                "--density",
                "heavy",
                "-m",
                "replace",
                "--style",
                "meme",
                "--sentiment",
                "--seed",
                "7",
            ])
            .unwrap();
        assert_eq!(matches.get_one::<Density>("density"), Some(&Density::Heavy));
        assert_eq!(matches.get_one::<Mode>("mode"), Some(&Mode::Replace));
        assert_eq!(matches.get_one::<Style>("style"), Some(&Style::Meme));
        assert_eq!(matches.get_one::<u64>("seed"), Some(&7));
        assert!(matches.get_flag("sentiment"));
    }

    #[test]
    fn test_cli_rejects_unknown_density() {
        let result = cli().try_get_matches_from(["emoji-translator", "hello", "-d", "extreme"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unreadable_custom_file_keeps_builtin() {
        let matches = cli()
            .try_get_matches_from(["emoji-translator", "hello", "-c", "/nonexistent/custom.json"])
            .unwrap();
        let custom = matches.get_one::<PathBuf>("custom-emojis").map(PathBuf::as_path);
        let translator = EmojiTranslator::with_custom_emojis(custom, Arc::new(ThreadRandom));
        assert_eq!(translator.info(), emoji_translator::Registry::builtin().info());
    }

    #[test]
    fn test_save_translation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let options = TranslationOptions::default();
        save_translation(&path, "I love pizza", "I love❤️ pizza🍕", &options).unwrap();

        let saved = fs::read_to_string(&path).unwrap();
        assert_eq!(
            saved,
            "Original: I love pizza\nTranslated: I love❤️ pizza🍕\nSettings: medium density, append mode, fun style\n"
        );
    }
}
