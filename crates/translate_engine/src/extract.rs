/// Marker the model prints before the generated text.
pub const RESPONSE_DELIMITER: &str = "Response:";

/// Isolates the generated translation from the model's stdout.
///
/// With a delimiter, everything after its last occurrence wins. Without one,
/// the echoed prompt is removed once, then surrounding whitespace, a single
/// leading run of `-`/`=` separators, and whitespace again are stripped.
pub fn extract_translation(stdout: &str, prompt: &str) -> String {
    let output = stdout.trim();
    if let Some(index) = output.rfind(RESPONSE_DELIMITER) {
        return output[index + RESPONSE_DELIMITER.len()..].trim().to_string();
    }

    let without_prompt = if prompt.is_empty() {
        output.to_string()
    } else {
        output.replacen(prompt, "", 1)
    };
    // One run of separators only; a `-` after whitespace is content.
    without_prompt
        .trim()
        .trim_start_matches(['-', '='])
        .trim()
        .to_string()
}

/// Removes the statistics block `mlx_lm generate` prints around its output.
pub fn strip_generation_stats(stdout: &str) -> String {
    stdout
        .lines()
        .filter(|line| !is_stats_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_stats_line(line: &str) -> bool {
    (line.contains("Prompt:") && line.contains("tokens"))
        || (line.contains("Generation:") && line.contains("tokens"))
        || line.contains("Peak memory:")
        || line.contains("tokens-per-sec")
        || line.contains("==========")
        || line.contains("Translated with www.DeepL.com")
}
