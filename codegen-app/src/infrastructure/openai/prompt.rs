/// System instruction sent with every generation request. The display name
/// of the target language is the only variable part.
pub fn build_system_prompt(language_name: &str) -> String {
    format!(
        r#"Ты опытный программист. Генерируй качественный, чистый и хорошо документированный код на языке {}.
Следуй лучшим практикам языка. Добавляй комментарии для сложных участков.
Формат ответа: только код без дополнительных объяснений."#,
        language_name
    )
}
