pub mod config;
pub mod gematria;

use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

use config::{AppConfig, OutputFormat, PhraseMode};
use gematria::{GematriaEngine, PhraseGematria, Symbol, WordGematria};

const USAGE: &str = "usage: gematria [--per-word] [--json] [--hebrew] [--save-config] <word>...";

const EXIT_SUCCESS: u8 = 0;
/// 用法错误
const EXIT_USAGE: u8 = 2;

// ================== 命令行 ==================

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    per_word: bool,
    json: bool,
    hebrew: bool,
    save_config: bool,
    words: Vec<String>,
}

impl CliArgs {
    fn parse(args: &[String]) -> Result<Self> {
        let mut cli = Self::default();
        for arg in args {
            match arg.as_str() {
                "--per-word" => cli.per_word = true,
                "--json" => cli.json = true,
                "--hebrew" => cli.hebrew = true,
                "--save-config" => cli.save_config = true,
                flag if flag.starts_with("--") => anyhow::bail!("unknown option: {}", flag),
                word => cli.words.push(word.to_string()),
            }
        }
        Ok(cli)
    }

    /// 命令行参数覆盖已保存的配置
    fn apply(&self, config: &mut AppConfig) {
        if self.per_word {
            config.phrase_mode = PhraseMode::PerWord;
        }
        if self.json {
            config.output_format = OutputFormat::Json;
        }
        if self.hebrew {
            config.show_hebrew = true;
        }
    }
}

// ================== 输出 ==================

fn render_word(word: &WordGematria, show_hebrew: bool) -> String {
    let symbols: Vec<&str> = word.symbols.iter().copied().map(Symbol::as_str).collect();
    let mut out = format!("{} was parsed as [{}]\n", word.input, symbols.join(", "));
    if show_hebrew {
        out.push_str(&format!("hebrew letters: {}\n", word.hebrew));
    }
    out.push_str(&format!("gematria value is {}", word.value));
    out
}

fn render_phrase(phrase: &PhraseGematria, show_hebrew: bool) -> String {
    let mut out = String::new();
    for word in &phrase.words {
        out.push_str(&render_word(word, show_hebrew));
        out.push('\n');
    }
    out.push_str(&format!("total gematria value is {}", phrase.total));
    out
}

/// 按 `config` 计算并格式化 `input`
fn evaluate(engine: &GematriaEngine, input: &str, config: &AppConfig) -> Result<String> {
    let output = match config.phrase_mode {
        PhraseMode::Joined => {
            let word = engine.compute(input)?;
            match config.output_format {
                OutputFormat::Text => render_word(&word, config.show_hebrew),
                OutputFormat::Json => serde_json::to_string_pretty(&word)?,
            }
        }
        PhraseMode::PerWord => {
            let phrase = engine.compute_phrase(input)?;
            match config.output_format {
                OutputFormat::Text => render_phrase(&phrase, config.show_hebrew),
                OutputFormat::Json => serde_json::to_string_pretty(&phrase)?,
            }
        }
    };
    Ok(output)
}

fn log_level() -> tracing::Level {
    std::env::var("GEMATRIA_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(tracing::Level::WARN)
}

/// 执行一次命令，返回退出码
///
/// `config_path` 为 `None` 时（无法定位配置目录）使用默认配置，
/// 此时 `--save-config` 报错。
fn run_with_args(args: &[String], config_path: Option<&Path>) -> Result<u8> {
    let cli = match CliArgs::parse(args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            return Ok(EXIT_USAGE);
        }
    };

    let mut config = match config_path {
        Some(path) => AppConfig::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("加载配置失败，使用默认配置: {:#}", e);
            AppConfig::new()
        }),
        None => AppConfig::new(),
    };
    cli.apply(&mut config);

    if cli.save_config {
        let path = config_path.ok_or_else(|| anyhow::anyhow!("无法获取配置目录，配置未保存"))?;
        config.save_to(path)?;
    }

    if cli.words.is_empty() {
        if cli.save_config {
            return Ok(EXIT_SUCCESS);
        }
        eprintln!("{}", USAGE);
        return Ok(EXIT_USAGE);
    }

    let input = cli.words.join(" ");
    let output = evaluate(&GematriaEngine::default(), &input, &config)?;
    println!("{}", output);
    Ok(EXIT_SUCCESS)
}

pub fn run() -> ExitCode {
    // 日志写 stderr，结果写 stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level())
        .init();

    let config_path = AppConfig::config_path()
        .map_err(|e| tracing::warn!("{:#}，使用默认配置", e))
        .ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run_with_args(&args, config_path.as_deref()) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
