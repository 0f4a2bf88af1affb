use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use emoji_translator::{
    Density, EmojiTranslator, Mode, RandomSource, Registry, Style, ThreadRandom,
    TranslationOptions, TranslationStats, TranslatorError, TranslatorResult,
};

/// Longest input accepted by the translate endpoints, in characters
const MAX_TEXT_CHARS: usize = 10_000;

const EXAMPLE_TEXT: &str = "Good morning! I love coffee and programming. This project is on fire!";

const RANDOM_SAMPLES: &[&str] = &[
    "Hello world! How are you today?",
    "I'm feeling great and ready for work!",
    "Time for lunch and then a meeting",
    "Programming is awesome and fun",
    "Good night, see you tomorrow!",
    "This coffee is amazing",
    "Let's break the ice and have some fun",
    "The project deadline is tomorrow",
    "I'm over the moon about this success",
    "Feeling blue today, need some music",
];

/// Translate parameters, from a query string or a JSON body
///
/// Option names stay raw strings here so both routes validate them through
/// the same case-insensitive `FromStr` and report the same JSON error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default)]
    pub density: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub add_sentiment: bool,
}

impl TranslateRequest {
    fn options(&self) -> TranslatorResult<TranslationOptions> {
        Ok(TranslationOptions {
            density: parse_or_default(self.density.as_deref())?,
            mode: parse_or_default(self.mode.as_deref())?,
            style: parse_or_default(self.style.as_deref())?,
            add_sentiment: self.add_sentiment,
        })
    }
}

fn parse_or_default<T>(value: Option<&str>) -> TranslatorResult<T>
where
    T: FromStr<Err = TranslatorError> + Default,
{
    value.map_or_else(|| Ok(T::default()), str::parse::<T>)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub original_text: String,
    pub translated_text: String,
    pub settings: TranslationOptions,
    pub statistics: TranslationStats,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub total_words: usize,
    pub total_phrases: usize,
    pub available_styles: Vec<Style>,
    pub available_modes: Vec<Mode>,
    pub available_densities: Vec<Density>,
}

#[derive(Debug, Serialize)]
pub struct ExampleTranslation {
    pub original: String,
    pub translated: String,
    pub settings: TranslationOptions,
}

#[derive(Debug, Serialize)]
pub struct ExamplesResponse {
    pub examples: Vec<ExampleTranslation>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<EmojiTranslator>,
}

/// Server settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `EMOJI_TRANSLATOR_ADDR`, default `127.0.0.1:3000`
    pub addr: String,
    /// `EMOJI_TRANSLATOR_CUSTOM`, optional custom mapping document
    pub custom_emojis: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("EMOJI_TRANSLATOR_ADDR").ok(),
            env::var("EMOJI_TRANSLATOR_CUSTOM").ok(),
        )
    }

    fn from_vars(addr: Option<String>, custom: Option<String>) -> Self {
        Self {
            addr: addr
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| "127.0.0.1:3000".to_string()),
            custom_emojis: custom.filter(|c| !c.trim().is_empty()).map(PathBuf::from),
        }
    }
}

fn build_translator(config: &ServerConfig) -> EmojiTranslator {
    let mut registry = Registry::builtin();
    if let Some(path) = &config.custom_emojis {
        let report = registry.merge_custom_file(path);
        if report.is_applied() {
            info!(
                "Loaded custom emojis from {}: {} words, {} phrases added",
                path.display(),
                report.words_added,
                report.phrases_added
            );
        }
    }
    EmojiTranslator::new(registry, Arc::new(ThreadRandom))
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/info", get(emoji_info))
        .route("/examples", get(examples))
        .route("/random", get(random_translation))
        .route("/api/translate", get(translate_query).post(translate_json))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let state = AppState {
        translator: Arc::new(build_translator(&config)),
    };

    info!("😀 Starting emoji translator web server");

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!("🚀 Server running at http://{}", config.addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn emoji_info(State(state): State<AppState>) -> Json<InfoResponse> {
    let info = state.translator.info();
    Json(InfoResponse {
        total_words: info.total_words,
        total_phrases: info.total_phrases,
        available_styles: Style::ALL.to_vec(),
        available_modes: Mode::ALL.to_vec(),
        available_densities: Density::ALL.to_vec(),
    })
}

async fn translate_json(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    run_translation(&state, request)
}

async fn translate_query(
    State(state): State<AppState>,
    Query(request): Query<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    run_translation(&state, request)
}

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn run_translation(
    state: &AppState,
    request: TranslateRequest,
) -> Result<Json<TranslateResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(bad_request("Text cannot be empty"));
    }
    let length = request.text.chars().count();
    if length > MAX_TEXT_CHARS {
        warn!("Rejected translation request of {} characters", length);
        return Err(bad_request(&format!(
            "Text is too long (max {} characters)",
            MAX_TEXT_CHARS
        )));
    }

    let options = request
        .options()
        .map_err(|e| bad_request(&e.to_string()))?;
    info!(
        "Translating {} characters ({} density, {} mode, {} style)",
        length, options.density, options.mode, options.style
    );

    let translated = state.translator.translate(&request.text, &options);
    let statistics = TranslationStats::between(&request.text, &translated);

    Ok(Json(TranslateResponse {
        original_text: request.text,
        translated_text: translated,
        settings: options,
        statistics,
    }))
}

async fn examples(State(state): State<AppState>) -> Json<ExamplesResponse> {
    let mut examples = Vec::new();
    for style in Style::ALL {
        for mode in Mode::ALL {
            for density in Density::ALL {
                let settings = TranslationOptions {
                    density,
                    mode,
                    style,
                    add_sentiment: true,
                };
                examples.push(ExampleTranslation {
                    original: EXAMPLE_TEXT.to_string(),
                    translated: state.translator.translate(EXAMPLE_TEXT, &settings),
                    settings,
                });
            }
        }
    }
    Json(ExamplesResponse { examples })
}

async fn random_translation(State(state): State<AppState>) -> Json<ExampleTranslation> {
    Json(random_example(&state.translator, &ThreadRandom))
}

/// One sample sentence under a randomly drawn style, mode and density
fn random_example(translator: &EmojiTranslator, random: &dyn RandomSource) -> ExampleTranslation {
    let text = RANDOM_SAMPLES[random.range_inclusive(0, RANDOM_SAMPLES.len() - 1)];
    let settings = TranslationOptions {
        density: Density::ALL[random.range_inclusive(0, Density::ALL.len() - 1)],
        mode: Mode::ALL[random.range_inclusive(0, Mode::ALL.len() - 1)],
        style: Style::ALL[random.range_inclusive(0, Style::ALL.len() - 1)],
        add_sentiment: true,
    };
    ExampleTranslation {
        original: text.to_string(),
        translated: translator.translate_with(text, &settings, random),
        settings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState {
            translator: Arc::new(EmojiTranslator::builtin()),
        }
    }

    fn request(text: &str) -> TranslateRequest {
        TranslateRequest {
            text: text.to_string(),
            density: Some("heavy".to_string()),
            mode: Some("append".to_string()),
            style: Some("fun".to_string()),
            add_sentiment: false,
        }
    }

    fn query(uri: &str) -> Query<TranslateRequest> {
        let uri: axum::http::Uri = uri.parse().unwrap();
        Query::try_from_uri(&uri).unwrap()
    }

    #[tokio::test]
    async fn test_translate_json() {
        let Json(response) = translate_json(State(state()), Json(request("Good morning!")))
            .await
            .unwrap();
        assert_eq!(response.original_text, "Good morning!");
        assert!(response.translated_text.starts_with("Good morning🌅🌅"));
        assert_eq!(response.settings.density, Density::Heavy);
        assert!(response.statistics.estimated_emojis_added > 0);
    }

    #[tokio::test]
    async fn test_translate_query() {
        let Json(response) = translate_query(State(state()), Query(request("Good morning!")))
            .await
            .unwrap();
        assert!(response.translated_text.contains("🌅🌅"));
    }

    #[tokio::test]
    async fn test_rejects_empty_text() {
        let (status, Json(body)) = translate_json(State(state()), Json(request("   ")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Text cannot be empty");
    }

    #[tokio::test]
    async fn test_rejects_long_text() {
        let long = "a".repeat(MAX_TEXT_CHARS + 1);
        let (status, _) = translate_json(State(state()), Json(request(&long)))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_request_defaults() {
        let request: TranslateRequest = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert_eq!(request.options().unwrap(), TranslationOptions::default());
    }

    #[tokio::test]
    async fn test_query_options_are_case_insensitive() {
        let Json(response) = translate_query(
            State(state()),
            query("/api/translate?text=Good%20morning!&density=Heavy&mode=APPEND"),
        )
        .await
        .unwrap();
        assert_eq!(response.settings.density, Density::Heavy);
        assert!(response.translated_text.contains("🌅🌅"));
    }

    #[tokio::test]
    async fn test_invalid_option_same_error_on_both_routes() {
        let (status, Json(body)) = translate_query(
            State(state()),
            query("/api/translate?text=hi&mode=prepend"),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid mode 'prepend'");

        let request: TranslateRequest =
            serde_json::from_str(r#"{"text": "hi", "mode": "prepend"}"#).unwrap();
        let (status, Json(body)) = translate_json(State(state()), Json(request))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid mode 'prepend'");
    }

    #[test]
    fn test_random_example() {
        use emoji_translator::ScriptedRandom;

        let translator = EmojiTranslator::builtin();
        // sample 6, heavy, replace, meme; then the translation's own draws
        let random = ScriptedRandom::new(vec![0.99], vec![6, 2, 1, 2]);
        let example = random_example(&translator, &random);

        assert_eq!(example.original, "Let's break the ice and have some fun");
        assert_eq!(example.settings.density, Density::Heavy);
        assert_eq!(example.settings.mode, Mode::Replace);
        assert_eq!(example.settings.style, Style::Meme);
        assert!(example.settings.add_sentiment);
        assert!(example.translated.contains("🧊🔨"));
    }

    #[tokio::test]
    async fn test_info_and_health() {
        let Json(info) = emoji_info(State(state())).await;
        let registry = Registry::builtin();
        assert_eq!(info.total_words, registry.word_count());
        assert_eq!(info.total_phrases, registry.phrase_count());
        assert_eq!(info.available_densities.len(), 3);

        let Json(health) = health_check().await;
        assert_eq!(health.status, "healthy");
    }

    #[tokio::test]
    async fn test_examples_cover_every_combination() {
        let Json(response) = examples(State(state())).await;
        assert_eq!(response.examples.len(), 18);
        assert!(response.examples.iter().all(|e| e.settings.add_sentiment));
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::from_vars(None, None);
        assert_eq!(config.addr, "127.0.0.1:3000");
        assert_eq!(config.custom_emojis, None);

        let config = ServerConfig::from_vars(
            Some("0.0.0.0:8000".to_string()),
            Some("custom.json".to_string()),
        );
        assert_eq!(config.addr, "0.0.0.0:8000");
        assert_eq!(config.custom_emojis, Some(PathBuf::from("custom.json")));
    }
}
