use std::fs;
use std::path::PathBuf;

use aiharu_quality::error::AppError;
use aiharu_quality::quality::{suggestions_for, Category, QualityEngine, QualityReport};
use clap::Args;
use serde_json::json;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Question text to score (use --prompt-file for longer input)
    #[arg(long, conflicts_with = "prompt_file")]
    pub(crate) prompt: Option<String>,
    /// File containing the question text
    #[arg(long)]
    pub(crate) prompt_file: Option<PathBuf>,
    /// Answer text to score (use --answer-file for longer input)
    #[arg(long, conflicts_with = "answer_file")]
    pub(crate) answer: Option<String>,
    /// File containing the answer text
    #[arg(long)]
    pub(crate) answer_file: Option<PathBuf>,
    /// Category tag selecting the expertise keyword table
    #[arg(long, default_value = "")]
    pub(crate) category: String,
    /// Tokens consumed generating the answer (informational only)
    #[arg(long, default_value_t = 0)]
    pub(crate) tokens_used: u32,
    /// Emit the raw JSON report instead of the text rendering
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit raw JSON reports instead of the text rendering
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        prompt,
        prompt_file,
        answer,
        answer_file,
        category,
        tokens_used,
        json,
    } = args;

    let prompt = resolve_text(prompt, prompt_file, "--prompt or --prompt-file")?;
    let answer = resolve_text(answer, answer_file, "--answer or --answer-file")?;

    let engine = QualityEngine::default();
    let report = engine.analyze(&prompt, &answer, &category, tokens_used);
    let resolved = Category::from_tag(&category);
    let suggestions = suggestions_for(&report, resolved);

    render_report(&category, resolved, &report, &suggestions, json);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = QualityEngine::default();

    println!("aiharu quality scoring demo\n");

    let parenting_prompt = "아이가 화를 낼 때 어떻게 해야 하나요?";
    let parenting_answer = "아이의 감정을 다루는 방법을 단계별로 정리했습니다.\n\
                            1. 먼저 아이의 감정을 말로 읽어 주세요.\n\
                            2. 오늘부터 차분한 목소리로 대화하며 규칙을 함께 정하세요.\n\
                            3. 마지막으로 진정된 뒤에 칭찬으로 마무리하세요.\n\
                            주의: 소리를 지르거나 체벌은 피해야 합니다.";
    println!("Example 1: well-structured parenting answer");
    demo_one(&engine, parenting_prompt, parenting_answer, "육아", 250, args.json);

    let review_prompt = "이 함수 어때?";
    let review_answer = "괜찮아 보여요.";
    println!("\nExample 2: vague code-review exchange");
    demo_one(&engine, review_prompt, review_answer, "코드리뷰", 40, args.json);

    Ok(())
}

fn demo_one(
    engine: &QualityEngine,
    prompt: &str,
    answer: &str,
    category: &str,
    tokens_used: u32,
    json: bool,
) {
    let report = engine.analyze(prompt, answer, category, tokens_used);
    let resolved = Category::from_tag(category);
    let suggestions = suggestions_for(&report, resolved);
    render_report(category, resolved, &report, &suggestions, json);
}

fn resolve_text(
    inline: Option<String>,
    file: Option<PathBuf>,
    flags: &str,
) -> Result<String, AppError> {
    match (inline, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => Err(AppError::InvalidInput(format!("provide {flags}"))),
    }
}

fn render_report(
    category_tag: &str,
    resolved: Option<Category>,
    report: &QualityReport,
    suggestions: &[String],
    json: bool,
) {
    if json {
        let payload = json!({
            "report": report,
            "suggestions": suggestions,
        });
        println!("{payload:#}");
        return;
    }

    match resolved {
        Some(category) => println!("Category: {} ({category_tag})", category.label()),
        None if category_tag.is_empty() => println!("Category: none"),
        None => println!("Category: unrecognized ({category_tag})"),
    }
    println!(
        "Grade: {} ({}/100)",
        report.grade.label(),
        report.overall_score
    );

    println!("\nSub-scores");
    println!("- structure: {}", report.sub_scores.structure);
    println!("- expertise: {}", report.sub_scores.expertise);
    println!("- context: {}", report.sub_scores.context);
    println!("- practicality: {}", report.sub_scores.practicality);
    println!("- question clarity: {}", report.sub_scores.question_clarity);
    println!(
        "- question expertise: {}",
        report.sub_scores.question_expertise
    );
    println!(
        "- question complexity: {}",
        report.sub_scores.question_complexity
    );

    if !report.details.matched_keywords.is_empty() {
        println!(
            "\nMatched keywords: {}",
            report.details.matched_keywords.join(", ")
        );
    }
    if let Some(efficiency) = report.details.token_efficiency {
        println!("Token efficiency: {efficiency} chars/token");
    }

    if suggestions.is_empty() {
        println!("\nSuggestions: none");
    } else {
        println!("\nSuggestions");
        for suggestion in suggestions {
            println!("- {suggestion}");
        }
    }
}
