use colored::Colorize;
use std::collections::BTreeMap;
use trivia::model::{Category, CategoryId, Question};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const CATEGORY_WIDTH: usize = 14;

pub(super) fn print_success(message: impl AsRef<str>) {
    println!("{}", message.as_ref().green());
}

pub(super) fn print_categories(categories: &BTreeMap<CategoryId, String>) {
    for (id, kind) in categories {
        println!("{:>4}. {}", id.to_string().yellow(), kind);
    }
}

pub(super) fn print_current_category(category: &Category) {
    println!("{} {}\n", "Category:".dimmed(), category.kind.bold());
}

/// One line per question: id, difficulty, text, and category label at the right edge.
pub(super) fn print_questions(
    questions: &[Question],
    categories: Option<&BTreeMap<CategoryId, String>>,
    page: usize,
    total: usize,
) {
    if questions.is_empty() {
        println!("No questions on page {}.", page);
    }

    for q in questions {
        let id_str = format!("{:>4}. ", q.id);
        let stars = format!("[{}] ", "*".repeat(q.difficulty.min(5) as usize));
        let label = categories
            .and_then(|c| c.get(&q.category_id))
            .cloned()
            .unwrap_or_else(|| format!("#{}", q.category_id));

        let fixed_width = id_str.width() + stars.width() + CATEGORY_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let text = truncate_to_width(&q.text, available);
        let padding = available.saturating_sub(text.width());

        println!(
            "{}{}{}{}{}",
            id_str.yellow(),
            stars.dimmed(),
            text,
            " ".repeat(padding),
            format!(
                "{:>width$}",
                truncate_to_width(&label, CATEGORY_WIDTH),
                width = CATEGORY_WIDTH
            )
            .dimmed()
        );
    }

    let pages = total.div_ceil(trivia::commands::pagination::QUESTIONS_PER_PAGE);
    println!(
        "\n{}",
        format!("page {} of {} ({} questions)", page, pages.max(1), total).dimmed()
    );
}

pub(super) fn print_quiz_question(question: &Question) {
    println!(
        "{} {}",
        format!("#{}", question.id).yellow(),
        question.text.bold()
    );
    println!("--------------------------------");
    println!("{} {}", "Answer:".dimmed(), question.answer);
    println!(
        "{} {}  {} {}",
        "Difficulty:".dimmed(),
        question.difficulty,
        "Category:".dimmed(),
        question.category_id
    );
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
