//! # ログ出力の初期化
//!
//! `LOG_FORMAT` と `RUST_LOG` から [`TracingConfig`] を組み立て、
//! [`init_tracing`] でグローバル subscriber を登録する。
//!
//! | 変数名 | 値 | 未設定時 |
//! |--------|----|----------|
//! | `LOG_FORMAT` | `json` / `pretty`（大文字小文字は区別しない） | `pretty` |
//! | `RUST_LOG` | `EnvFilter` の書式 | [`DEFAULT_FILTER`] |

/// `RUST_LOG` が未設定または解釈できない場合のフィルタ
pub const DEFAULT_FILTER: &str = "info,pathshala=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 イベント 1 行の JSON
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値を解釈する。未知の値なら `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// 起動ログと JSON 出力に載せるサービス名
    pub service_name: String,
    pub log_format:   LogFormat,
    pub filter:       String,
}

impl TracingConfig {
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::from_lookup(service_name, |key| std::env::var(key).ok())
    }

    /// 任意のルックアップ関数から読み取る
    ///
    /// 未知の `LOG_FORMAT` は `pretty` として扱う。subscriber の登録前に呼ばれるので、
    /// その旨は stderr に直接書く。
    pub fn from_lookup(
        service_name: impl Into<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => LogFormat::from_name(&value).unwrap_or_else(|| {
                eprintln!("WARNING: unknown LOG_FORMAT={value:?}, using pretty");
                LogFormat::Pretty
            }),
            None => LogFormat::default(),
        };

        Self {
            service_name: service_name.into(),
            log_format,
            filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_FILTER.to_string()),
        }
    }
}

/// グローバル subscriber を登録する
///
/// `tracing_error::ErrorLayer` も併せて登録し、インフラ層エラーが生成時の
/// スパン経路を記録できるようにする。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> TracingConfig {
        let vars: HashMap<&str, &str> = pairs.iter().copied().collect();
        TracingConfig::from_lookup("student-service", |key| {
            vars.get(key).map(|v| (*v).to_string())
        })
    }

    #[rstest]
    #[case("json", Some(LogFormat::Json))]
    #[case("JSON", Some(LogFormat::Json))]
    #[case(" pretty ", Some(LogFormat::Pretty))]
    #[case("text", None)]
    #[case("", None)]
    fn test_from_nameはlog_formatの値を解釈する(
        #[case] input: &str,
        #[case] expected: Option<LogFormat>,
    ) {
        assert_eq!(LogFormat::from_name(input), expected);
    }

    #[test]
    fn test_未設定ならprettyと既定フィルタを使う() {
        let config = config_from(&[]);

        assert_eq!(
            config,
            TracingConfig {
                service_name: "student-service".to_string(),
                log_format:   LogFormat::Pretty,
                filter:       DEFAULT_FILTER.to_string(),
            }
        );
    }

    #[test]
    fn test_log_formatとrust_logを読み取る() {
        let config = config_from(&[("LOG_FORMAT", "json"), ("RUST_LOG", "warn")]);

        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.filter, "warn");
    }

    #[test]
    fn test_未知のlog_formatはprettyになる() {
        let config = config_from(&[("LOG_FORMAT", "xml")]);

        assert_eq!(config.log_format, LogFormat::Pretty);
    }
}
