#![cfg(unix)]

use std::path::PathBuf;
use std::time::Duration;

use translate_engine::{CommandSettings, CommandTranslator, TranslateError, Translator};

/// Stands in for the model with a shell script. Arguments after the script
/// are positional: `$5` is `--prompt`, `$6` the prompt itself.
fn shell(script: &str) -> CommandSettings {
    CommandSettings {
        program: PathBuf::from("sh"),
        prefix_args: vec!["-c".to_string(), script.to_string(), "sh".to_string()],
        ..CommandSettings::default()
    }
}

#[tokio::test]
async fn success_extracts_response() {
    let translator = CommandTranslator::new(shell(r#"printf '%s\nResponse: Hello\n' "$6""#));

    let text = translator.translate("こんにちは").await.expect("translate ok");
    assert_eq!(text, "Hello");
}

#[tokio::test]
async fn fixed_flags_reach_the_process() {
    let translator = CommandTranslator::new(shell(r#"printf 'Response: %s|%s|%s|%s' "$1" "$2" "$3" "$4""#));

    let text = translator.translate("x").await.expect("translate ok");
    assert_eq!(
        text,
        "--model|mlx-community/plamo-2-translate|--extra-eos-token|<|plamo:op|>"
    );
}

#[tokio::test]
async fn non_zero_exit_is_process_failure_with_stderr() {
    let translator = CommandTranslator::new(shell("printf 'model not found' >&2; exit 1"));

    let err = translator.translate("test").await.unwrap_err();
    assert_eq!(
        err,
        TranslateError::ProcessFailure {
            stderr: "model not found".to_string()
        }
    );
    assert_eq!(err.to_string(), "翻訳エラー: model not found");
}

#[tokio::test]
async fn missing_executable_is_invocation_failure() {
    let settings = CommandSettings {
        program: PathBuf::from("/nonexistent/plamo-translate-test-binary"),
        ..CommandSettings::default()
    };
    let translator = CommandTranslator::new(settings);

    let err = translator.translate("test").await.unwrap_err();
    match err {
        TranslateError::InvocationFailure(message) => {
            assert!(message.contains("plamo-translate-test-binary"), "{message}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn timeout_kills_hung_process() {
    let settings = CommandSettings {
        timeout: Some(Duration::from_millis(200)),
        ..shell("sleep 5")
    };
    let translator = CommandTranslator::new(settings);

    let started = std::time::Instant::now();
    let err = translator.translate("test").await.unwrap_err();
    assert!(matches!(err, TranslateError::InvocationFailure(_)));
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn stats_filter_applies_before_extraction() {
    let settings = CommandSettings {
        strip_generation_stats: true,
        ..shell(r#"printf '==========\nGood morning.\n==========\nPrompt: 3 tokens, 9.0 tokens-per-sec\n'"#)
    };
    let translator = CommandTranslator::new(settings);

    assert!(translator.settings().strip_generation_stats);
    let text = translator.translate("おはよう").await.expect("translate ok");
    assert_eq!(text, "Good morning.");
}
