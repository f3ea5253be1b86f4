// Shared prompt fragments. Service-specific prompts live in a prompts.rs next to
// the service that uses them.

/// Appended to every system prompt: the reply must be the rewritten text alone.
/// Models still occasionally wrap the answer in quotes, which the conversion
/// handler strips afterwards.
pub const PLAIN_OUTPUT_INSTRUCTION: &str = "\
    변환된 문장만 출력하세요. \
    설명, 인사말 밖의 부연, 따옴표, 머리말(예: '변환 결과:')을 붙이지 마세요. \
    원문의 사실관계, 숫자, 날짜, 고유명사는 바꾸지 마세요.";

/// Builds the full system prompt from a persona instruction and the shared fragment.
pub fn with_plain_output(instruction: &str) -> String {
    format!("{instruction}\n\n{PLAIN_OUTPUT_INSTRUCTION}")
}
